//! Email-capture section
//!
//! The `#download` section: headline, the capture form wired to its
//! [`CaptureController`], and the success overlay shown after a
//! confirmed submission.

use leptos::prelude::*;

use crate::core::validation::is_valid_email;
use crate::ui::capture::CaptureController;
use crate::ui::icon::{Icon, icons};

/// Email-capture section with the download form
#[component]
pub fn EmailCaptureSection() -> impl IntoView {
    let ctrl = CaptureController::new();
    let form = ctrl.form;

    // Inline hint for a malformed address, shown on blur
    let email_hint = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        ctrl.submit();
    };

    let on_blur = move |_| {
        ctrl.focus_changed(false);
        let email = form.with_untracked(|f| f.email.clone());
        if !email.is_empty() && !is_valid_email(&email) {
            email_hint.set(Some("Podaj poprawny adres email."));
        }
    };

    view! {
        <section id="download" class="relative py-32 px-6">
            // Background pulse
            <div class="absolute inset-0 overflow-hidden" aria-hidden="true">
                <div class="absolute top-1/2 left-1/2 w-[800px] h-[800px] rounded-full bg-gradient-to-r from-cyan-500/10 to-purple-500/10 blur-3xl lm-breathe"></div>
            </div>

            <div class="relative max-w-4xl mx-auto">
                <div class="relative p-12 md:p-16 rounded-3xl glass-strong border border-white/10 overflow-hidden lm-scroll-animate">
                    <Show when=move || form.with(|f| f.is_success())>
                        <SuccessOverlay />
                    </Show>

                    // Decorative corner gradients
                    <div class="absolute top-0 left-0 w-40 h-40 bg-gradient-to-br from-cyan-500/20 to-transparent blur-2xl"></div>
                    <div class="absolute bottom-0 right-0 w-40 h-40 bg-gradient-to-tl from-purple-500/20 to-transparent blur-2xl"></div>

                    <div class="relative z-10 text-center">
                        <div class="inline-flex items-center gap-2 px-4 py-2 rounded-full bg-gradient-to-r from-green-500/10 to-emerald-500/10 border border-green-500/20 mb-8">
                            <span class="w-2 h-2 bg-green-400 rounded-full animate-pulse"></span>
                            <span class="text-sm font-medium text-green-400">
                                "Darmowe pobieranie"
                            </span>
                        </div>

                        <h2 class="text-3xl md:text-4xl lg:text-5xl font-bold mb-6">
                            <span class="text-white">"Pobierz wszystkie "</span>
                            <span class="gradient-text">"3 agenty"</span>
                        </h2>

                        <p class="text-lg text-gray-400 max-w-xl mx-auto mb-10">
                            "Podaj swój email, a otrzymasz natychmiastowy dostęp do pełnego pakietu AI Agents dla SAP."
                        </p>

                        <form on:submit=on_submit class="max-w-md mx-auto">
                            <div class="relative">
                                // Glow effect while the input has focus
                                <div
                                    class="absolute -inset-1 bg-gradient-to-r from-cyan-500 to-purple-500 rounded-2xl blur-lg transition-opacity duration-300"
                                    class:opacity-100=move || form.with(|f| f.focused)
                                    class:opacity-0=move || form.with(|f| !f.focused)
                                    aria-hidden="true"
                                ></div>

                                <div class="relative flex flex-col sm:flex-row gap-4">
                                    <div class="relative flex-1">
                                        <input
                                            type="email"
                                            placeholder="twoj@email.com"
                                            required
                                            class="w-full px-6 py-4 bg-black/50 border border-white/10 rounded-xl text-white placeholder-gray-500 focus:outline-none focus:border-cyan-500/50 transition-colors input-premium"
                                            prop:value=move || form.with(|f| f.email.clone())
                                            on:input=move |ev| {
                                                ctrl.input_changed(event_target_value(&ev));
                                                email_hint.set(None);
                                            }
                                            on:focus=move |_| ctrl.focus_changed(true)
                                            on:blur=on_blur
                                        />

                                        <div class="absolute right-4 top-1/2 -translate-y-1/2 text-gray-500 pointer-events-none">
                                            <Icon name=icons::MAIL class="w-5 h-5" />
                                        </div>
                                    </div>

                                    <button
                                        type="submit"
                                        class="px-8 py-4 bg-gradient-to-r from-cyan-500 to-blue-600 rounded-xl font-semibold text-white btn-premium disabled:opacity-50 disabled:cursor-not-allowed flex items-center justify-center gap-2 min-w-[160px]"
                                        disabled=move || form.with(|f| f.is_submitting())
                                    >
                                        {move || {
                                            if form.with(|f| f.is_submitting()) {
                                                view! { <Spinner /> }.into_any()
                                            } else {
                                                view! {
                                                    <span>"Pobierz"</span>
                                                    <span class="lm-nudge-x">"→"</span>
                                                }
                                                .into_any()
                                            }
                                        }}
                                    </button>
                                </div>
                            </div>

                            {move || {
                                email_hint.get().map(|hint| {
                                    view! { <p class="mt-4 text-sm text-red-400">{hint}</p> }
                                })
                            }}

                            {move || {
                                (form.with(|f| f.is_failed()))
                                    .then(|| ctrl.error.get())
                                    .flatten()
                                    .map(|message| {
                                        view! {
                                            <p class="mt-4 text-sm text-red-400">{message}</p>
                                        }
                                    })
                            }}
                        </form>

                        <TrustIndicators />
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Overlay confirming the link was sent
#[component]
fn SuccessOverlay() -> impl IntoView {
    view! {
        <div class="absolute inset-0 flex items-center justify-center bg-black/90 backdrop-blur-sm rounded-3xl z-20">
            <div class="text-center">
                <div class="w-20 h-20 mx-auto mb-6 rounded-full bg-gradient-to-r from-green-500 to-emerald-500 flex items-center justify-center lm-pop">
                    <Icon name=icons::CHECK class="w-10 h-10 text-white" />
                </div>
                <h3 class="text-2xl font-bold text-white mb-2 lm-fade-in-up lm-delay-200">
                    "Sprawdź email!"
                </h3>
                <p class="text-gray-400 lm-fade-in-up lm-delay-400">
                    "Link do pobrania został wysłany"
                </p>
            </div>
        </div>
    }
}

/// Inline spinner for the submit button
#[component]
fn Spinner() -> impl IntoView {
    view! {
        <div
            class="w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin"
            role="status"
            aria-label="Wysyłanie"
        ></div>
    }
}

/// Trust indicators under the form
#[component]
fn TrustIndicators() -> impl IntoView {
    let items = [
        (icons::LOCK, "Bezpieczne"),
        (icons::CHECK_CIRCLE, "Bez spamu"),
        (icons::THUMBS_UP, "100% darmowe"),
    ];

    view! {
        <div class="mt-8 flex flex-wrap items-center justify-center gap-6 text-sm text-gray-500">
            {items
                .into_iter()
                .map(|(icon, label)| {
                    view! {
                        <div class="flex items-center gap-2">
                            <Icon name=icon class="w-4 h-4 text-green-500" />
                            <span>{label}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
