//! Page footer

use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

const FOOTER_LINKS: [(&str, &str); 4] = [
    ("Agenci", "#agents"),
    ("Funkcje", "#funkcje"),
    ("Opinie", "#opinie"),
    ("Pobierz", "#download"),
];

/// Footer component
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 border-t border-white/5">
            <div class="max-w-7xl mx-auto px-6">
                <div class="flex flex-col md:flex-row items-center justify-between gap-8 mb-8">
                    // Brand
                    <div class="flex items-center gap-3">
                        <div class="w-10 h-10 rounded-xl bg-gradient-to-br from-cyan-500 to-blue-600 flex items-center justify-center">
                            <Icon name=icons::LAYERS class="w-6 h-6 text-white" />
                        </div>
                        <div>
                            <span class="font-bold text-xl">
                                <span class="text-white">"SAP"</span>
                                <span class="gradient-text">" Agents"</span>
                            </span>
                            <p class="text-sm text-gray-500">
                                "Inteligentne agenty dla developmentu SAP"
                            </p>
                        </div>
                    </div>

                    // Links
                    <nav class="flex items-center gap-6">
                        {FOOTER_LINKS
                            .into_iter()
                            .map(|(label, anchor)| {
                                view! {
                                    <a
                                        href=anchor
                                        class="text-sm text-gray-400 hover:text-white transition-colors"
                                    >
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                </div>

                // Bottom bar
                <div class="pt-8 border-t border-white/5 flex flex-col sm:flex-row items-center justify-between gap-4">
                    <span class="text-sm text-gray-600">
                        "© 2025 SAP Agents. Wszystkie prawa zastrzeżone."
                    </span>
                    <span class="text-sm text-gray-600">
                        "Bez spamu. Tylko link do pobrania."
                    </span>
                </div>
            </div>
        </footer>
    }
}
