//! Agents section
//!
//! The `#agents` section: one promotional card per downloadable agent.

use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

struct Agent {
    name: &'static str,
    description: &'static str,
    icon: &'static str,
    features: [&'static str; 4],
    gradient: &'static str,
    glow: &'static str,
}

const AGENTS: [Agent; 3] = [
    Agent {
        name: "CAP Agent",
        description: "Inteligentny asystent do SAP Cloud Application Programming Model. \
                      Generuje modele, serwisy i konfiguracje.",
        icon: icons::LAYERS,
        features: [
            "Generowanie modeli CDS",
            "Automatyczne serwisy OData",
            "Integracja z bazami danych",
            "Best practices z dokumentacji",
        ],
        gradient: "bg-gradient-to-br from-cyan-500 to-blue-600",
        glow: "rgba(0, 212, 255, 0.3)",
    },
    Agent {
        name: "Fiori Agent",
        description: "Twój ekspert od SAP Fiori. Tworzy UI5 komponenty, widoki i kontrolery \
                      z perfekcyjną architekturą.",
        icon: icons::GRID,
        features: [
            "Komponenty SAPUI5",
            "MVC architecture",
            "Responsywne layouty",
            "OData binding",
        ],
        gradient: "bg-gradient-to-br from-purple-500 to-pink-600",
        glow: "rgba(168, 85, 247, 0.3)",
    },
    Agent {
        name: "Fiori Elements Agent",
        description: "Specjalista od annotation-driven UI. Buduje List Reports, Object Pages \
                      i Analytical Apps w mgnieniu oka.",
        icon: icons::STACK,
        features: [
            "CDS Annotations",
            "List Report & Object Page",
            "Analytical List Page",
            "Draft handling",
        ],
        gradient: "bg-gradient-to-br from-orange-500 to-red-600",
        glow: "rgba(249, 115, 22, 0.3)",
    },
];

/// Agents section with the three promotional cards
#[component]
pub fn AgentsSection() -> impl IntoView {
    view! {
        <section id="agents" class="relative py-32 px-6">
            // Section header
            <div class="max-w-7xl mx-auto mb-20">
                <div class="text-center lm-scroll-animate">
                    <span class="inline-block px-4 py-1.5 rounded-full text-sm font-medium bg-gradient-to-r from-cyan-500/10 to-purple-500/10 border border-cyan-500/20 text-cyan-400 mb-6">
                        "Poznaj Agentów"
                    </span>

                    <h2 class="text-4xl md:text-5xl lg:text-6xl font-bold mb-6">
                        <span class="text-white">"Trzy potężne "</span>
                        <span class="gradient-text">"AI Agents"</span>
                    </h2>

                    <p class="text-xl text-gray-400 max-w-2xl mx-auto">
                        "Każdy agent to wyspecjalizowany ekspert w swojej dziedzinie SAP, gotowy do pracy 24/7."
                    </p>
                </div>
            </div>

            // Floating decoration
            <div class="absolute left-10 top-40 w-64 h-64 rounded-full bg-cyan-500/5 blur-3xl" aria-hidden="true"></div>
            <div class="absolute right-10 bottom-40 w-80 h-80 rounded-full bg-purple-500/5 blur-3xl" aria-hidden="true"></div>

            // Cards grid
            <div class="max-w-7xl mx-auto">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {AGENTS.into_iter().map(|agent| view! { <AgentCard agent=agent /> }).collect_view()}
                </div>
            </div>

            // Bottom decoration
            <div
                class="absolute bottom-0 left-1/2 -translate-x-1/2 w-1/2 h-px bg-gradient-to-r from-transparent via-cyan-500/50 to-transparent"
                aria-hidden="true"
            ></div>
        </section>
    }
}

/// Single promotional agent card
#[component]
fn AgentCard(agent: Agent) -> impl IntoView {
    view! {
        <div class="relative group lm-scroll-animate">
            // Glow behind the card on hover
            <div
                class="absolute -inset-1 rounded-3xl opacity-0 group-hover:opacity-100 transition-opacity duration-500 blur-xl"
                style=format!("background: {};", agent.glow)
                aria-hidden="true"
            ></div>

            <div class="relative h-full p-8 rounded-3xl glass-strong border border-white/10 group-hover:border-white/20 transition-all duration-500 overflow-hidden">
                // Background tint on hover
                <div class=format!(
                    "absolute inset-0 opacity-0 group-hover:opacity-10 transition-opacity duration-500 {}",
                    agent.gradient,
                )></div>

                <div class="relative z-10">
                    <div class=format!(
                        "w-16 h-16 rounded-2xl {} flex items-center justify-center mb-6 shadow-lg \
                         group-hover:scale-110 transition-transform duration-300",
                        agent.gradient,
                    )>
                        <Icon name=agent.icon class="w-8 h-8 text-white" />
                    </div>

                    <h3 class="text-2xl font-bold mb-3 group-hover:gradient-text transition-all duration-300">
                        {agent.name}
                    </h3>

                    <p class="text-gray-400 mb-6 leading-relaxed">{agent.description}</p>

                    <ul class="space-y-3">
                        {agent
                            .features
                            .into_iter()
                            .map(|feature| {
                                view! {
                                    <li class="flex items-center gap-3 text-sm text-gray-300">
                                        <span class="w-5 h-5 rounded-full bg-gradient-to-r from-cyan-500/20 to-purple-500/20 flex items-center justify-center">
                                            <Icon name=icons::TICK class="w-3 h-3 text-cyan-400" />
                                        </span>
                                        {feature}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>

                    // Hover indicator
                    <div class="mt-8 flex items-center gap-2 text-sm font-medium text-cyan-400 opacity-0 group-hover:opacity-100 transition-opacity">
                        <span>"Dołączony do pakietu"</span>
                        <span class="lm-nudge-x">"→"</span>
                    </div>
                </div>

                // Corner decoration
                <div class="absolute top-0 right-0 w-32 h-32 opacity-10" aria-hidden="true">
                    <div class=format!("absolute inset-0 {} blur-3xl", agent.gradient)></div>
                </div>
            </div>
        </div>
    }
}
