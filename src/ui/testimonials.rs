//! Testimonials section
//!
//! The `#opinie` section: three developer quotes plus a stats bar.

use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

struct Testimonial {
    quote: &'static str,
    author: &'static str,
    role: &'static str,
    company: &'static str,
    avatar: &'static str,
    gradient: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Te agenty kompletnie zmieniły mój sposób pracy z SAP. Co zajmowało mi dzień, \
                teraz robię w godzinę.",
        author: "Marcin K.",
        role: "Senior SAP Developer",
        company: "Enterprise Solutions",
        avatar: "MK",
        gradient: "from-cyan-500 to-blue-500",
    },
    Testimonial {
        quote: "CAP Agent to game changer. Automatycznie generuje modele CDS z dokumentacji \
                i best practices.",
        author: "Anna W.",
        role: "Tech Lead",
        company: "SAP Partner",
        avatar: "AW",
        gradient: "from-purple-500 to-pink-500",
    },
    Testimonial {
        quote: "Fiori Elements Agent zaoszczędził nam setki godzin przy budowaniu List Reports \
                i Object Pages.",
        author: "Tomasz S.",
        role: "Fiori Architect",
        company: "Global Consulting",
        avatar: "TS",
        gradient: "from-orange-500 to-red-500",
    },
];

const STATS: [(&str, &str); 4] = [
    ("500+", "Aktywnych użytkowników"),
    ("10K+", "Wygenerowanych plików"),
    ("98%", "Zadowolonych"),
    ("24/7", "Dostępność"),
];

/// Testimonials section component
#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id="opinie" class="relative py-32 px-6 overflow-hidden">
            // Floating decoration
            <div
                class="absolute top-20 right-0 w-96 h-96 rounded-full bg-purple-500/5 blur-3xl"
                aria-hidden="true"
            ></div>

            <div class="max-w-7xl mx-auto">
                // Header
                <div class="text-center mb-16 lm-scroll-animate">
                    <span class="inline-block px-4 py-1.5 rounded-full text-sm font-medium bg-gradient-to-r from-purple-500/10 to-pink-500/10 border border-purple-500/20 text-purple-400 mb-6">
                        "Opinie developerów"
                    </span>

                    <h2 class="text-3xl md:text-4xl lg:text-5xl font-bold mb-6">
                        <span class="text-white">"Zaufali nam "</span>
                        <span class="gradient-text">"eksperci SAP"</span>
                    </h2>

                    <p class="text-xl text-gray-400 max-w-2xl mx-auto">
                        "Dołącz do społeczności developerów, którzy już transformują swój workflow"
                    </p>
                </div>

                // Testimonials grid
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {TESTIMONIALS
                        .into_iter()
                        .map(|t| view! { <TestimonialCard testimonial=t /> })
                        .collect_view()}
                </div>

                // Stats bar
                <div class="mt-20 p-8 rounded-2xl glass border border-white/5 lm-scroll-animate">
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-8 text-center">
                        {STATS
                            .into_iter()
                            .map(|(value, label)| {
                                view! {
                                    <div class="hover:scale-105 transition-transform">
                                        <div class="text-3xl md:text-4xl font-bold gradient-text mb-2">
                                            {value}
                                        </div>
                                        <div class="text-sm text-gray-500">{label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Single testimonial card
#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    view! {
        <div class="group relative p-8 rounded-2xl glass border border-white/5 hover:border-cyan-500/20 hover:-translate-y-1 transition-all duration-300 lm-scroll-animate">
            // Quote icon
            <div class="absolute -top-3 -left-3 w-10 h-10 rounded-full bg-gradient-to-br from-cyan-500/20 to-purple-500/20 flex items-center justify-center">
                <Icon name=icons::QUOTE class="w-5 h-5 text-cyan-400" />
            </div>

            <blockquote class="text-lg text-gray-300 leading-relaxed mb-6 mt-4">
                "\u{201e}" {testimonial.quote} "\u{201d}"
            </blockquote>

            // Author
            <div class="flex items-center gap-4">
                <div class=format!(
                    "w-12 h-12 rounded-full bg-gradient-to-br {} flex items-center justify-center font-bold text-white text-sm",
                    testimonial.gradient,
                )>{testimonial.avatar}</div>
                <div>
                    <div class="font-semibold text-white">{testimonial.author}</div>
                    <div class="text-sm text-gray-500">
                        {testimonial.role} " @ " {testimonial.company}
                    </div>
                </div>
            </div>

            // Hover gradient overlay
            <div class="absolute inset-0 rounded-2xl bg-gradient-to-br from-cyan-500/5 to-purple-500/5 opacity-0 group-hover:opacity-100 transition-opacity pointer-events-none"></div>
        </div>
    }
}
