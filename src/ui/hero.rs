//! Hero section
//!
//! Full-height opening section: floating badge, word-by-word headline
//! reveal, subtitle, CTAs, stats row and a scroll indicator. All
//! entrance motion is staggered CSS animation.

use leptos::prelude::*;

const HEADLINE: [(&str, &str); 6] = [
    ("Transformuj", "text-white"),
    ("swój", "text-white"),
    ("SAP", "text-cyan-400"),
    ("z", "text-white"),
    ("AI", "gradient-text"),
    ("Agents", "gradient-text"),
];

const STATS: [(&str, &str); 3] = [
    ("3", "AI Agents"),
    ("10x", "Szybszy Dev"),
    ("∞", "Możliwości"),
];

/// Hero section component
#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="relative min-h-screen flex flex-col items-center justify-center text-center px-6 pt-20">
            <FloatingBadge />

            // Headline, revealed word by word
            <h1 class="text-5xl sm:text-6xl md:text-7xl lg:text-8xl font-bold tracking-tight leading-[0.9] mb-8">
                {HEADLINE
                    .into_iter()
                    .enumerate()
                    .map(|(i, (word, color))| {
                        view! {
                            <span
                                class=format!("inline-block mr-4 lm-word {color}")
                                style=format!("animation-delay: {}ms;", 400 + i * 100)
                            >
                                {word}
                            </span>
                        }
                    })
                    .collect_view()}
            </h1>

            <p class="text-lg sm:text-xl md:text-2xl text-gray-400 max-w-3xl mx-auto leading-relaxed mb-12 lm-fade-in-up lm-delay-1200">
                "Pobierz "
                <span class="text-white font-semibold">"3 inteligentne agenty"</span>
                " do CAP, Fiori i Fiori Elements. Przyspiesz development, "
                <span class="text-cyan-400">"zautomatyzuj powtarzalne zadania"</span>
                " i buduj aplikacje SAP szybciej niż kiedykolwiek."
            </p>

            // CTAs
            <div class="flex flex-wrap items-center justify-center gap-4 lm-fade-in-up lm-delay-1500">
                <a
                    href="#download"
                    class="px-8 py-4 bg-gradient-to-r from-cyan-500 to-blue-600 rounded-full font-semibold text-lg btn-premium"
                >
                    "Pobierz Agenty"
                </a>
                <a
                    href="#agents"
                    class="px-8 py-4 glass rounded-full font-semibold text-lg border border-white/10 hover:border-cyan-500/30 transition-colors"
                >
                    "Zobacz Agentów →"
                </a>
            </div>

            // Stats
            <div class="mt-20 flex flex-wrap justify-center gap-12 text-center lm-fade-in-up lm-delay-2000">
                {STATS
                    .into_iter()
                    .map(|(value, label)| {
                        view! {
                            <div class="group">
                                <div class="text-4xl md:text-5xl font-bold gradient-text group-hover:scale-110 transition-transform">
                                    {value}
                                </div>
                                <div class="text-sm text-gray-500 uppercase tracking-wider mt-1">
                                    {label}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <ScrollIndicator />
        </section>
    }
}

/// Pulsing "new generation" badge above the headline
#[component]
fn FloatingBadge() -> impl IntoView {
    view! {
        <div class="inline-flex items-center gap-2 px-4 py-2 rounded-full glass border border-cyan-500/20 mb-8 lm-fade-in-up lm-delay-200">
            <span class="w-2 h-2 bg-cyan-400 rounded-full animate-pulse"></span>
            <span class="text-sm font-medium text-cyan-400">"Nowa generacja AI dla SAP"</span>
        </div>
    }
}

/// Mouse-shaped scroll hint pinned to the bottom of the hero
#[component]
fn ScrollIndicator() -> impl IntoView {
    view! {
        <div class="absolute bottom-10 left-1/2 -translate-x-1/2 lm-fade-in-up lm-delay-2000">
            <div class="flex flex-col items-center gap-2 text-gray-500">
                <span class="text-xs uppercase tracking-widest">"Scroll"</span>
                <div class="w-6 h-10 rounded-full border-2 border-gray-700 flex items-start justify-center p-2">
                    <div class="w-1.5 h-1.5 bg-cyan-400 rounded-full lm-scroll-dot"></div>
                </div>
            </div>
        </div>
    }
}
