//! Reactive controller for the email-capture form
//!
//! Bridges the submission machine in [`crate::core::capture`] to the
//! component tree: signals for the form state and failure message, the
//! POST to the capture endpoint, and the one-shot success-reset timer.
//! One controller per mounted form; instances share nothing.

use leptos::prelude::*;

use crate::core::capture::FormState;
#[cfg(not(feature = "ssr"))]
use crate::core::capture::{SUCCESS_RESET_MS, SubmitOutcome};

/// Message shown while the form sits in the failed phase
#[cfg(not(feature = "ssr"))]
const FAILURE_MESSAGE: &str = "Nie udało się wysłać. Sprawdź połączenie i spróbuj ponownie.";

/// Controller for a single capture form instance.
///
/// `Copy` so components and event closures can capture it freely.
#[derive(Clone, Copy)]
pub struct CaptureController {
    /// Form state rendered by the view
    pub form: RwSignal<FormState>,
    /// Failure message for the last rejected attempt
    pub error: RwSignal<Option<String>>,
    /// Bumped on every accepted submit; a reset timer only fires if its
    /// epoch is still the current one
    reset_epoch: RwSignal<u64>,
}

impl CaptureController {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(FormState::new()),
            error: RwSignal::new(None),
            reset_epoch: RwSignal::new(0),
        }
    }

    /// Forward a user edit to the machine. Edits arriving while a
    /// submission is in flight are dropped there.
    pub fn input_changed(&self, value: String) {
        self.form.update(|f| {
            f.input_changed(value);
        });
    }

    pub fn focus_changed(&self, focused: bool) {
        self.form.update(|f| f.focus_changed(focused));
    }

    /// Handle a submit gesture. Refused gestures (empty or invalid
    /// address, submission already in flight, success overlay showing)
    /// change nothing at all.
    pub fn submit(&self) {
        #[cfg(not(feature = "ssr"))]
        {
            let Some(email) = self.form.try_update(|f| f.begin_submit()).flatten() else {
                return;
            };
            self.error.set(None);

            let epoch = self.reset_epoch.get_untracked() + 1;
            self.reset_epoch.set(epoch);

            let ctrl = *self;
            leptos::task::spawn_local(async move {
                use gloo_timers::future::TimeoutFuture;

                let outcome = match send_subscription(&email).await {
                    Ok(()) => SubmitOutcome::Delivered,
                    Err(detail) => {
                        leptos::logging::warn!("subscribe failed: {detail}");
                        // The signal is gone if the page was torn down
                        // while the request was in flight
                        let _ = ctrl.error.try_set(Some(FAILURE_MESSAGE.to_string()));
                        SubmitOutcome::Failed
                    }
                };

                if ctrl.form.try_update(|f| f.complete(outcome)).is_none() {
                    return;
                }
                if outcome == SubmitOutcome::Failed {
                    return;
                }

                TimeoutFuture::new(SUCCESS_RESET_MS).await;
                if ctrl.reset_epoch.try_get_untracked() != Some(epoch) {
                    return;
                }
                let _ = ctrl.form.try_update(|f| f.reset_after_success());
            });
        }

        #[cfg(feature = "ssr")]
        {
            // Forms never submit during server rendering
            let _ = self;
        }
    }
}

impl Default for CaptureController {
    fn default() -> Self {
        Self::new()
    }
}

/// POST the address to the capture endpoint
#[cfg(not(feature = "ssr"))]
async fn send_subscription(email: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, Response};

    #[derive(serde::Serialize)]
    struct SubscribePayload<'a> {
        email: &'a str,
    }

    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: String,
    }

    let window = web_sys::window().ok_or("No window")?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(
        &serde_json::to_string(&SubscribePayload { email })
            .map_err(|e| e.to_string())?
            .into(),
    );

    let req = Request::new_with_str_and_init("/api/subscribe", &opts)
        .map_err(|e| format!("{:?}", e))?;

    req.headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{:?}", e))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(|e| format!("{:?}", e))?;

    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{:?}", e))?;

    if resp.ok() {
        return Ok(());
    }

    let json = JsFuture::from(resp.json().map_err(|e| format!("{:?}", e))?)
        .await
        .map_err(|e| format!("{:?}", e))?;

    match serde_wasm_bindgen::from_value::<ErrorBody>(json) {
        Ok(body) => Err(body.error),
        Err(_) => Err(format!("request failed with status {}", resp.status())),
    }
}
