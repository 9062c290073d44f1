//! Landing page component
//!
//! The lead-magnet page for the SAP AI Agents pack:
//! - SEO meta tags
//! - Scroll progress bar and animated background
//! - Hero, agents, features and testimonials sections
//! - Email-capture form with the success overlay
//! - Footer, page-local CSS and the scroll-reveal script

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::ui::{
    AgentsSection, AnimatedBackground, EmailCaptureSection, FeaturesSection, Footer, HeroSection,
    Navbar, Testimonials,
};

/// Landing page with scroll-linked animations
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />

        <ScrollProgressBar />
        <AnimatedBackground />

        <main class="relative z-10">
            <Navbar />
            <HeroSection />
            <AgentsSection />
            <FeaturesSection />
            <Testimonials />
            <EmailCaptureSection />
            <Footer />
        </main>

        // CSS animations
        <LandingStyles />

        // Intersection Observer for scroll animations
        <ScrollAnimationScript />
    }
}

/// SEO meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="SAP AI Agents | CAP, Fiori & Fiori Elements" />

        <Meta
            name="description"
            content="Download 3 cutting-edge AI agents for SAP development. Supercharge your CAP, Fiori, and Fiori Elements workflow with intelligent automation."
        />
        <Meta name="keywords" content="SAP, AI Agents, CAP, Fiori, Fiori Elements, Automation" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="SAP AI Agents | Transform Your Development" />
        <Meta property="og:description" content="3 AI agents that revolutionize SAP development" />
    }
}

/// Thin gradient bar tracking scroll progress across the whole page
#[component]
fn ScrollProgressBar() -> impl IntoView {
    let (progress, _set_progress) = signal(0.0_f64);

    #[cfg(not(feature = "ssr"))]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        Effect::new(move |_| {
            let window = web_sys::window().expect("no window");

            let on_scroll = Closure::wrap(Box::new(move |_: web_sys::Event| {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let Some(root) = window.document().and_then(|d| d.document_element()) else {
                    return;
                };

                let viewport = window
                    .inner_height()
                    .ok()
                    .and_then(|v| v.as_f64())
                    .unwrap_or(0.0);
                let total = (f64::from(root.scroll_height()) - viewport).max(1.0);
                let y = window.scroll_y().unwrap_or(0.0);

                _set_progress.set((y / total).clamp(0.0, 1.0));
            }) as Box<dyn FnMut(web_sys::Event)>);

            let _ = window
                .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
            on_scroll.forget();
        });
    }

    view! {
        <div
            class="fixed top-0 left-0 right-0 h-1 bg-gradient-to-r from-cyan-500 via-purple-500 to-orange-500 origin-left z-[100]"
            style=move || format!("transform: scaleX({:.4});", progress.get())
            aria-hidden="true"
        ></div>
    }
}

/// CSS styles for landing page animations
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            /* Entrance animations */
            @keyframes lm-fade-in-up {
                from {
                    opacity: 0;
                    transform: translateY(30px);
                }
                to {
                    opacity: 1;
                    transform: translateY(0);
                }
            }

            .lm-fade-in-up {
                animation: lm-fade-in-up 0.8s cubic-bezier(0.215, 0.61, 0.355, 1) both;
            }

            .lm-delay-200 { animation-delay: 0.2s; }
            .lm-delay-400 { animation-delay: 0.4s; }
            .lm-delay-1200 { animation-delay: 1.2s; }
            .lm-delay-1500 { animation-delay: 1.5s; }
            .lm-delay-2000 { animation-delay: 2s; }

            /* Headline word reveal */
            @keyframes lm-word {
                from {
                    opacity: 0;
                    transform: translateY(50px) rotateX(-90deg);
                }
                to {
                    opacity: 1;
                    transform: translateY(0) rotateX(0);
                }
            }

            .lm-word {
                animation: lm-word 0.8s cubic-bezier(0.215, 0.61, 0.355, 1) both;
            }

            /* Navbar entrance */
            @keyframes lm-slide-down {
                from { transform: translateY(-100%); }
                to { transform: translateY(0); }
            }

            .lm-slide-down {
                animation: lm-slide-down 0.8s cubic-bezier(0.215, 0.61, 0.355, 1);
            }

            /* Scroll-reveal (observer toggles .visible) */
            .lm-scroll-animate {
                opacity: 0;
                transform: translateY(30px);
                transition: opacity 0.6s ease-out, transform 0.6s ease-out;
            }

            .lm-scroll-animate.visible {
                opacity: 1;
                transform: translateY(0);
            }

            /* Features center line */
            .lm-grow-line {
                height: 0;
                transition: height 1.5s ease-out;
            }

            .lm-grow-line.visible {
                height: 100%;
            }

            /* Background orbs */
            @keyframes lm-drift {
                0%, 100% { transform: translate(0, 0) scale(1); }
                25% { transform: translate(100px, -80px) scale(1.2); }
                50% { transform: translate(-50px, 60px) scale(0.9); }
                75% { transform: translate(80px, -40px) scale(1.1); }
            }

            .lm-orb {
                animation-name: lm-drift;
                animation-timing-function: ease-in-out;
                animation-iteration-count: infinite;
            }

            /* Star particles */
            @keyframes lm-twinkle {
                0%, 100% { opacity: 0.1; transform: scale(1); }
                50% { opacity: 0.8; transform: scale(1.5); }
            }

            .lm-star {
                animation-name: lm-twinkle;
                animation-timing-function: ease-in-out;
                animation-iteration-count: infinite;
            }

            /* Pointer spotlight trailing */
            .lm-spotlight {
                transition: left 0.5s cubic-bezier(0.22, 1, 0.36, 1),
                            top 0.5s cubic-bezier(0.22, 1, 0.36, 1);
            }

            /* Email section breathing halo */
            @keyframes lm-breathe {
                0%, 100% { transform: translate(-50%, -50%) scale(1); opacity: 0.3; }
                50% { transform: translate(-50%, -50%) scale(1.2); opacity: 0.5; }
            }

            .lm-breathe {
                animation: lm-breathe 8s ease-in-out infinite;
            }

            /* Success overlay check circle */
            @keyframes lm-pop {
                from { transform: scale(0); }
                60% { transform: scale(1.15); }
                to { transform: scale(1); }
            }

            .lm-pop {
                animation: lm-pop 0.5s cubic-bezier(0.34, 1.56, 0.64, 1) both;
            }

            /* Arrow nudge */
            @keyframes lm-nudge-x {
                0%, 100% { transform: translateX(0); }
                50% { transform: translateX(4px); }
            }

            .lm-nudge-x {
                display: inline-block;
                animation: lm-nudge-x 1.5s ease-in-out infinite;
            }

            /* Scroll indicator dot */
            @keyframes lm-scroll-dot {
                0%, 100% { transform: translateY(0); opacity: 1; }
                50% { transform: translateY(12px); opacity: 0.3; }
            }

            .lm-scroll-dot {
                animation: lm-scroll-dot 2s ease-in-out infinite;
            }
            "#
        </style>
    }
}

/// Script for scroll-triggered animations using IntersectionObserver
#[component]
fn ScrollAnimationScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                function initScrollAnimations() {
                    const observer = new IntersectionObserver((entries) => {
                        entries.forEach(entry => {
                            if (entry.isIntersecting) {
                                entry.target.classList.add('visible');
                            }
                        });
                    }, {
                        threshold: 0.1,
                        rootMargin: '0px 0px -50px 0px'
                    });

                    document.querySelectorAll('.lm-scroll-animate').forEach(el => {
                        observer.observe(el);
                    });
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', initScrollAnimations);
                } else {
                    initScrollAnimations();
                }
            })();
            "#
        </script>
    }
}
