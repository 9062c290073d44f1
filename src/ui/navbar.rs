//! Fixed top navigation bar
//!
//! Collapses into a compact glass pill once the page has scrolled past
//! the hero's first 50px.

use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

const NAV_LINKS: [(&str, &str); 3] = [
    ("Agenci", "#agents"),
    ("Funkcje", "#funkcje"),
    ("Opinie", "#opinie"),
];

/// Fixed navbar with scroll-dependent styling
#[component]
pub fn Navbar() -> impl IntoView {
    let (is_scrolled, _set_is_scrolled) = signal(false);

    #[cfg(not(feature = "ssr"))]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        Effect::new(move |_| {
            let window = web_sys::window().expect("no window");

            let on_scroll = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(window) = web_sys::window() {
                    let y = window.scroll_y().unwrap_or(0.0);
                    _set_is_scrolled.set(y > 50.0);
                }
            }) as Box<dyn FnMut(web_sys::Event)>);

            let _ = window
                .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
            on_scroll.forget();
        });
    }

    view! {
        <nav
            class="fixed top-0 left-0 right-0 z-50 transition-all duration-300 lm-slide-down"
            class:py-4=move || is_scrolled.get()
            class:py-6=move || !is_scrolled.get()
        >
            <div
                class="max-w-7xl mx-auto px-6 transition-all duration-300"
                class:glass=move || is_scrolled.get()
                class:rounded-full=move || is_scrolled.get()
                class:py-3=move || is_scrolled.get()
                class:mx-6=move || is_scrolled.get()
            >
                <div class="flex items-center justify-between">
                    // Logo
                    <a href="#" class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                        <div class="w-10 h-10 rounded-xl bg-gradient-to-br from-cyan-500 to-blue-600 flex items-center justify-center">
                            <Icon name=icons::LAYERS class="w-6 h-6 text-white" />
                        </div>
                        <span class="font-bold text-xl hidden sm:block">
                            <span class="text-white">"SAP"</span>
                            <span class="gradient-text">" Agents"</span>
                        </span>
                    </a>

                    // Navigation links
                    <div class="hidden md:flex items-center gap-8">
                        {NAV_LINKS
                            .into_iter()
                            .map(|(label, anchor)| {
                                view! {
                                    <a
                                        href=anchor
                                        class="text-sm text-gray-400 hover:text-white transition-colors relative group"
                                    >
                                        {label}
                                        <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-gradient-to-r from-cyan-500 to-purple-500 group-hover:w-full transition-all duration-300"></span>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>

                    // CTA button
                    <a
                        href="#download"
                        class="px-6 py-2.5 bg-gradient-to-r from-cyan-500 to-blue-600 rounded-full text-sm font-semibold btn-premium"
                    >
                        "Pobierz"
                    </a>
                </div>
            </div>
        </nav>
    }
}
