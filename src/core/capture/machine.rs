//! Submission flow state machine for the email-capture form
//!
//! The machine is free of any rendering or reactive dependency: the form
//! component feeds it events and renders whatever state it ends up in.
//! Every lifecycle guard lives here, so the whole flow can be exercised
//! without a browser.

use crate::core::validation::validate_email;

/// Delay before a successful submission resets back to an empty idle form.
pub const SUCCESS_RESET_MS: u32 = 5_000;

/// Lifecycle stage of the capture form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    /// Accepting input, nothing in flight
    #[default]
    Idle,
    /// A submission is in flight; edits and further submits are dropped
    Submitting,
    /// The submitter confirmed delivery; the reset timer is pending
    Success,
    /// The submitter rejected the attempt; the address is kept for retry
    Failed,
}

/// Outcome the submitter reports for one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Delivered,
    Failed,
}

/// State of one capture form instance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    /// Current input value; written by the user, cleared only by the
    /// post-success reset
    pub email: String,
    pub phase: SubmitPhase,
    /// Presentation-only focus flag, never consulted by the submit guards
    pub focused: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a user edit. Edits are dropped while a submission is in
    /// flight (the request must never race a half-typed address) and
    /// while the success overlay is up, since the reset is about to
    /// clear the field anyway. Returns whether the edit was accepted.
    pub fn input_changed(&mut self, value: String) -> bool {
        if matches!(self.phase, SubmitPhase::Submitting | SubmitPhase::Success) {
            return false;
        }
        self.email = value;
        true
    }

    pub fn focus_changed(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Try to start a submission. Returns the address snapshot to hand
    /// to the submitter, or `None` when the attempt is refused: an
    /// empty/invalid address, a submission already in flight, or the
    /// success overlay still showing. `Failed` accepts a retry with the
    /// kept address.
    pub fn begin_submit(&mut self) -> Option<String> {
        match self.phase {
            SubmitPhase::Idle | SubmitPhase::Failed => {}
            SubmitPhase::Submitting | SubmitPhase::Success => return None,
        }
        if validate_email(&self.email).is_err() {
            return None;
        }
        self.phase = SubmitPhase::Submitting;
        Some(self.email.clone())
    }

    /// Record the submitter's outcome for the in-flight attempt.
    /// Completions are 1:1 with `begin_submit`; anything else is a
    /// caller bug and the transition is dropped.
    pub fn complete(&mut self, outcome: SubmitOutcome) {
        debug_assert_eq!(
            self.phase,
            SubmitPhase::Submitting,
            "complete() called with no submission in flight"
        );
        if self.phase != SubmitPhase::Submitting {
            return;
        }
        self.phase = match outcome {
            SubmitOutcome::Delivered => SubmitPhase::Success,
            SubmitOutcome::Failed => SubmitPhase::Failed,
        };
    }

    /// Return to an empty idle form once the success overlay has run its
    /// course. A stale timer that fires after the phase has already moved
    /// on must not touch anything.
    pub fn reset_after_success(&mut self) {
        if self.phase != SubmitPhase::Success {
            return;
        }
        self.phase = SubmitPhase::Idle;
        self.email.clear();
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn is_success(&self) -> bool {
        self.phase == SubmitPhase::Success
    }

    pub fn is_failed(&self) -> bool {
        self.phase == SubmitPhase::Failed
    }

    /// Whether a submit gesture would currently be accepted.
    pub fn can_submit(&self) -> bool {
        matches!(self.phase, SubmitPhase::Idle | SubmitPhase::Failed)
            && validate_email(&self.email).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(email: &str) -> FormState {
        let mut form = FormState::new();
        form.input_changed(email.to_string());
        form
    }

    #[test]
    fn starts_idle_and_empty() {
        let form = FormState::new();
        assert_eq!(form.phase, SubmitPhase::Idle);
        assert_eq!(form.email, "");
        assert!(!form.focused);
    }

    #[test]
    fn begin_submit_snapshots_the_address() {
        let mut form = filled("a@b.com");
        let snapshot = form.begin_submit();
        assert_eq!(snapshot.as_deref(), Some("a@b.com"));
        assert_eq!(form.phase, SubmitPhase::Submitting);
    }

    #[test]
    fn begin_submit_refuses_invalid_addresses() {
        for email in ["", "   ", "plainaddress", "a@b", "a b@c.com"] {
            let mut form = filled(email);
            assert_eq!(form.begin_submit(), None, "accepted {email:?}");
            assert_eq!(form.phase, SubmitPhase::Idle);
        }
    }

    #[test]
    fn begin_submit_refuses_while_in_flight_and_during_success() {
        let mut form = filled("a@b.com");
        assert!(form.begin_submit().is_some());
        assert_eq!(form.begin_submit(), None);

        form.complete(SubmitOutcome::Delivered);
        assert_eq!(form.begin_submit(), None);
    }

    #[test]
    fn edits_are_dropped_while_submitting_and_during_success() {
        let mut form = filled("a@b.com");
        form.begin_submit().unwrap();

        assert!(!form.input_changed("other@b.com".to_string()));
        assert_eq!(form.email, "a@b.com");

        form.complete(SubmitOutcome::Delivered);
        assert!(!form.input_changed("other@b.com".to_string()));
        assert_eq!(form.email, "a@b.com");
    }

    #[test]
    fn focus_is_free_of_the_submit_guards() {
        let mut form = filled("a@b.com");
        form.begin_submit().unwrap();

        form.focus_changed(true);
        assert!(form.focused);
        assert_eq!(form.phase, SubmitPhase::Submitting);
    }

    #[test]
    fn delivery_leads_to_success_then_reset_clears_the_form() {
        let mut form = filled("a@b.com");
        form.begin_submit().unwrap();
        form.complete(SubmitOutcome::Delivered);
        assert_eq!(form.phase, SubmitPhase::Success);
        // The address stays visible under the success overlay
        assert_eq!(form.email, "a@b.com");

        form.reset_after_success();
        assert_eq!(form, FormState::new());
    }

    #[test]
    fn failure_keeps_the_address_for_retry() {
        let mut form = filled("a@b.com");
        form.begin_submit().unwrap();
        form.complete(SubmitOutcome::Failed);
        assert_eq!(form.phase, SubmitPhase::Failed);
        assert_eq!(form.email, "a@b.com");
        assert!(form.can_submit());
    }

    #[test]
    fn stale_reset_is_ignored_outside_success() {
        let mut form = filled("a@b.com");
        form.reset_after_success();
        assert_eq!(form.email, "a@b.com");
        assert_eq!(form.phase, SubmitPhase::Idle);

        form.begin_submit().unwrap();
        form.complete(SubmitOutcome::Failed);
        form.reset_after_success();
        assert_eq!(form.phase, SubmitPhase::Failed);
        assert_eq!(form.email, "a@b.com");
    }

    #[test]
    fn repeated_identical_edits_are_noops() {
        let mut form = filled("a@b.com");
        let before = form.clone();
        form.input_changed("a@b.com".to_string());
        form.input_changed("a@b.com".to_string());
        assert_eq!(form, before);
    }
}
