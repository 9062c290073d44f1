//! Features section
//!
//! The `#funkcje` section: four benefit cards around a central gradient
//! line that grows in as it scrolls into view.

use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

const FEATURES: [(&str, &str, &str); 4] = [
    (
        icons::CODE,
        "Inteligentna generacja kodu",
        "Agenty rozumieją kontekst Twojego projektu i generują kod zgodny z best practices SAP.",
    ),
    (
        icons::DOCUMENT,
        "Natychmiastowa dokumentacja",
        "Każdy wygenerowany kod jest automatycznie udokumentowany i wyjaśniony.",
    ),
    (
        icons::TERMINAL,
        "Integracja z IDE",
        "Pracuj bezpośrednio w VS Code lub Business Application Studio z pełnym wsparciem AI.",
    ),
    (
        icons::REFRESH,
        "Aktualizacje w czasie rzeczywistym",
        "Agenty są regularnie aktualizowane o najnowsze wersje SAP i nowe funkcjonalności.",
    ),
];

/// Features section component
#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <section id="funkcje" class="relative py-32 px-6 overflow-hidden">
            // Central line, revealed on scroll
            <div
                class="absolute left-1/2 top-0 bottom-0 w-px bg-gradient-to-b from-transparent via-gray-800 to-transparent"
                aria-hidden="true"
            >
                <div class="w-full bg-gradient-to-b from-cyan-500 to-purple-500 lm-grow-line lm-scroll-animate"></div>
            </div>

            <div class="max-w-6xl mx-auto">
                // Header
                <div class="text-center mb-20 lm-scroll-animate">
                    <h2 class="text-3xl md:text-4xl lg:text-5xl font-bold mb-6">
                        <span class="text-white">"Dlaczego "</span>
                        <span class="gradient-text">"AI Agents?"</span>
                    </h2>
                    <p class="text-xl text-gray-400 max-w-2xl mx-auto">
                        "Nowoczesne narzędzia do nowoczesnego developmentu SAP"
                    </p>
                </div>

                // Features grid
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    {FEATURES
                        .into_iter()
                        .map(|(icon, title, description)| {
                            view! { <FeatureCard icon=icon title=title description=description /> }
                        })
                        .collect_view()}
                </div>

                // Bottom CTA
                <div class="mt-20 text-center lm-scroll-animate">
                    <a
                        href="#download"
                        class="inline-flex items-center gap-3 px-8 py-4 bg-gradient-to-r from-cyan-500/10 to-purple-500/10 border border-cyan-500/20 rounded-full font-semibold text-cyan-400 hover:bg-cyan-500/20 transition-colors"
                    >
                        <span>"Zacznij już teraz"</span>
                        <span class="lm-nudge-x">"→"</span>
                    </a>
                </div>
            </div>
        </section>
    }
}

/// Single feature card
#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="group relative p-6 rounded-2xl glass border border-white/5 hover:border-cyan-500/20 hover:-translate-y-1 transition-all duration-300 lm-scroll-animate">
            // Hover glow
            <div class="absolute inset-0 rounded-2xl bg-gradient-to-br from-cyan-500/5 to-purple-500/5 opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div>

            <div class="relative z-10">
                <div class="w-12 h-12 rounded-xl bg-gradient-to-br from-cyan-500/20 to-blue-500/20 flex items-center justify-center text-cyan-400 mb-4 group-hover:scale-110 transition-transform">
                    <Icon name=icon class="w-6 h-6" />
                </div>

                <h3 class="text-lg font-semibold text-white mb-2 group-hover:text-cyan-400 transition-colors">
                    {title}
                </h3>

                <p class="text-gray-400 text-sm leading-relaxed">{description}</p>
            </div>
        </div>
    }
}
