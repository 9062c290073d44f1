//! Animated page backdrop
//!
//! Fixed full-viewport layer behind the content: gradient base, faint
//! grid, drifting blurred orbs, a twinkling star field and a spotlight
//! that trails the pointer. Purely decorative; all motion is CSS, the
//! spotlight just follows `mousemove`.

use leptos::prelude::*;

/// Deterministic per-index jitter in `0.0..1.0`, so the star field looks
/// scattered without an RNG and renders identically on server and client.
fn jitter(index: u32, salt: u32) -> f32 {
    let mut h = index
        .wrapping_mul(2_654_435_761)
        .wrapping_add(salt.wrapping_mul(40_503));
    h ^= h >> 13;
    h = h.wrapping_mul(0x5bd1_e995);
    h ^= h >> 15;
    (h % 1000) as f32 / 1000.0
}

/// Fixed animated background layer
#[component]
pub fn AnimatedBackground() -> impl IntoView {
    // Pointer position in viewport percent, driving the spotlight
    let (pointer, _set_pointer) = signal((50.0_f64, 50.0_f64));

    #[cfg(not(feature = "ssr"))]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        Effect::new(move |_| {
            let window = web_sys::window().expect("no window");

            let on_move = Closure::wrap(Box::new(move |ev: web_sys::MouseEvent| {
                if let Some(window) = web_sys::window() {
                    let w = window
                        .inner_width()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(1.0)
                        .max(1.0);
                    let h = window
                        .inner_height()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(1.0)
                        .max(1.0);
                    _set_pointer.set((
                        f64::from(ev.client_x()) / w * 100.0,
                        f64::from(ev.client_y()) / h * 100.0,
                    ));
                }
            }) as Box<dyn FnMut(web_sys::MouseEvent)>);

            let _ = window
                .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());

            // Leak the closure to keep it alive for the page lifetime
            on_move.forget();
        });
    }

    view! {
        <div class="fixed inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
            // Gradient base
            <div class="absolute inset-0 bg-gradient-to-b from-black via-gray-950 to-black"></div>

            // Faint grid
            <div class="absolute inset-0">
                {(0..9).map(|i| view! { <GridLine index=i vertical=true /> }).collect_view()}
                {(0..9).map(|i| view! { <GridLine index=i vertical=false /> }).collect_view()}
            </div>

            // Floating orbs
            <Orb color="#00d4ff" size=600 x=10 y=20 delay=0 />
            <Orb color="#7c3aed" size=500 x=70 y=60 delay=2 />
            <Orb color="#f97316" size=400 x=50 y=10 delay=4 />
            <Orb color="#00d4ff" size=350 x=80 y=80 delay=1 />
            <Orb color="#7c3aed" size=450 x=20 y=70 delay=3 />

            // Pointer-following spotlight
            <div
                class="absolute w-[800px] h-[800px] rounded-full opacity-20 lm-spotlight"
                style=move || {
                    let (x, y) = pointer.get();
                    format!(
                        "background: radial-gradient(circle, rgba(0,212,255,0.15) 0%, transparent 60%); \
                         left: {x:.2}%; top: {y:.2}%; transform: translate(-50%, -50%);"
                    )
                }
            ></div>

            // Top and bottom fades
            <div class="absolute top-0 left-0 right-0 h-40 bg-gradient-to-b from-black to-transparent"></div>
            <div class="absolute bottom-0 left-0 right-0 h-40 bg-gradient-to-t from-black to-transparent"></div>

            // Twinkling star particles
            {(0..50u32)
                .map(|i| {
                    let left = jitter(i, 1) * 100.0;
                    let top = jitter(i, 2) * 100.0;
                    let duration = 2.0 + jitter(i, 3) * 3.0;
                    let delay = jitter(i, 4) * 5.0;
                    view! {
                        <div
                            class="absolute w-px h-px bg-white rounded-full lm-star"
                            style=format!(
                                "left: {left:.1}%; top: {top:.1}%; \
                                 animation-duration: {duration:.2}s; animation-delay: {delay:.2}s;"
                            )
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Single grid line, faded out toward both ends
#[component]
fn GridLine(index: u32, vertical: bool) -> impl IntoView {
    let offset = (index + 1) * 10;

    let (class, style) = if vertical {
        (
            "absolute w-px h-full",
            format!(
                "background: linear-gradient(180deg, transparent, rgba(255,255,255,0.03), transparent); left: {offset}%;"
            ),
        )
    } else {
        (
            "absolute h-px w-full",
            format!(
                "background: linear-gradient(90deg, transparent, rgba(255,255,255,0.03), transparent); top: {offset}%;"
            ),
        )
    };

    view! { <div class=class style=style></div> }
}

/// Drifting blurred orb
#[component]
fn Orb(color: &'static str, size: u32, x: u32, y: u32, delay: u32) -> impl IntoView {
    let style = format!(
        "background: radial-gradient(circle, {color} 0%, transparent 70%); \
         width: {size}px; height: {size}px; left: {x}%; top: {y}%; \
         animation-duration: {}s; animation-delay: {delay}s;",
        25 + delay * 5
    );

    view! { <div class="absolute rounded-full blur-3xl opacity-30 lm-orb" style=style></div> }
}
