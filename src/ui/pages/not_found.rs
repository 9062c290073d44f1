//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-black flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-white/5 rounded-full flex items-center justify-center">
                    <Icon name=icons::DOCUMENT class="w-12 h-12 text-gray-600" />
                </div>

                <h1 class="text-6xl font-bold gradient-text mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold text-white mb-2">
                    "Nie znaleziono strony"
                </h2>

                <p class="text-gray-400 mb-8 max-w-md mx-auto">
                    "Strona, której szukasz, nie istnieje lub została przeniesiona."
                </p>

                <A
                    href="/"
                    attr:class="px-6 py-3 bg-gradient-to-r from-cyan-500 to-blue-600 text-white font-medium rounded-xl btn-premium"
                >
                    "Wróć na stronę główną"
                </A>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-gray-600">"© 2025 SAP Agents"</p>
            </div>
        </div>
    }
}
