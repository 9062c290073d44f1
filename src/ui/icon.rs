//! Inline SVG icon set for the landing page

use leptos::prelude::*;

/// Predefined icon names
#[allow(dead_code)]
pub mod icons {
    pub const LAYERS: &str = "layers";
    pub const GRID: &str = "grid";
    pub const STACK: &str = "stack";
    pub const CODE: &str = "code";
    pub const DOCUMENT: &str = "document";
    pub const TERMINAL: &str = "terminal";
    pub const REFRESH: &str = "refresh";
    pub const MAIL: &str = "mail";
    pub const CHECK: &str = "check";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const TICK: &str = "tick";
    pub const LOCK: &str = "lock";
    pub const THUMBS_UP: &str = "thumbs-up";
    pub const QUOTE: &str = "quote";
    pub const LIGHTNING: &str = "lightning";
}

struct IconDef {
    d: &'static str,
    view_box: &'static str,
    filled: bool,
}

fn lookup(name: &'static str) -> IconDef {
    let (d, view_box, filled) = match name {
        icons::LAYERS => (
            "M12 2L2 7l10 5 10-5-10-5zM2 17l10 5 10-5M2 12l10 5 10-5",
            "0 0 24 24",
            false,
        ),
        icons::GRID => (
            "M3 5a2 2 0 012-2h14a2 2 0 012 2v14a2 2 0 01-2 2H5a2 2 0 01-2-2V5zM3 9h18M9 21V9",
            "0 0 24 24",
            false,
        ),
        icons::STACK => (
            "M12 2L2 7l10 5 10-5-10-5zM2 17l10 5 10-5M2 12l10 5 10-5M12 12v10",
            "0 0 24 24",
            false,
        ),
        icons::CODE => ("M10 20l4-16m4 4l4 4-4 4M6 16l-4-4 4-4", "0 0 24 24", false),
        icons::DOCUMENT => (
            "M9 12h6m-6 4h6m2 5H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z",
            "0 0 24 24",
            false,
        ),
        icons::TERMINAL => (
            "M8 9l3 3-3 3m5 0h3M5 20h14a2 2 0 002-2V6a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z",
            "0 0 24 24",
            false,
        ),
        icons::REFRESH => (
            "M4 4v5h.582m15.356 2A8.001 8.001 0 004.582 9m0 0H9m11 11v-5h-.581m0 0a8.003 8.003 0 01-15.357-2m15.357 2H15",
            "0 0 24 24",
            false,
        ),
        icons::MAIL => (
            "M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z",
            "0 0 24 24",
            false,
        ),
        icons::CHECK => ("M5 13l4 4L19 7", "0 0 24 24", false),
        icons::CHECK_CIRCLE => (
            "M10 18a8 8 0 100-16 8 8 0 000 16zm3.707-9.293a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z",
            "0 0 20 20",
            true,
        ),
        icons::TICK => (
            "M16.707 5.293a1 1 0 010 1.414l-8 8a1 1 0 01-1.414 0l-4-4a1 1 0 011.414-1.414L8 12.586l7.293-7.293a1 1 0 011.414 0z",
            "0 0 20 20",
            true,
        ),
        icons::LOCK => (
            "M5 9V7a5 5 0 0110 0v2a2 2 0 012 2v5a2 2 0 01-2 2H5a2 2 0 01-2-2v-5a2 2 0 012-2zm8-2v2H7V7a3 3 0 016 0z",
            "0 0 20 20",
            true,
        ),
        icons::THUMBS_UP => (
            "M2 10.5a1.5 1.5 0 113 0v6a1.5 1.5 0 01-3 0v-6zM6 10.333v5.43a2 2 0 001.106 1.79l.05.025A4 4 0 008.943 18h5.416a2 2 0 001.962-1.608l1.2-6A2 2 0 0015.56 8H12V4a2 2 0 00-2-2 1 1 0 00-1 1v.667a4 4 0 01-.8 2.4L6.8 7.933a4 4 0 00-.8 2.4z",
            "0 0 20 20",
            true,
        ),
        icons::QUOTE => (
            "M14.017 21v-7.391c0-5.704 3.731-9.57 8.983-10.609l.995 2.151c-2.432.917-3.995 3.638-3.995 5.849h4v10h-9.983zm-14.017 0v-7.391c0-5.704 3.748-9.57 9-10.609l.996 2.151c-2.433.917-3.996 3.638-3.996 5.849h3.983v10h-9.983z",
            "0 0 24 24",
            true,
        ),
        _ => ("M13 10V3L4 14h7v7l9-11h-7z", "0 0 24 24", false),
    };
    IconDef { d, view_box, filled }
}

/// Inline SVG icon, matched by name
#[component]
pub fn Icon(
    /// Icon name from [`icons`]
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let def = lookup(name);

    if def.filled {
        view! {
            <svg class=class viewBox=def.view_box fill="currentColor" aria-hidden="true">
                <path fill-rule="evenodd" clip-rule="evenodd" d=def.d />
            </svg>
        }
        .into_any()
    } else {
        view! {
            <svg
                class=class
                viewBox=def.view_box
                fill="none"
                stroke="currentColor"
                aria-hidden="true"
            >
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=def.d />
            </svg>
        }
        .into_any()
    }
}
