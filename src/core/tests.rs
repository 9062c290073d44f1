#[cfg(test)]
mod tests {
    use crate::core::{FormState, SubmitOutcome, SubmitPhase};

    /// Happy path: type an address, submit, get confirmation, reset.
    #[test]
    fn submit_lifecycle_round_trips_to_the_initial_state() {
        let initial = FormState::new();
        let mut form = FormState::new();

        assert!(form.input_changed("a@b.com".to_string()));
        let email = form.begin_submit().expect("valid submit refused");
        assert_eq!(email, "a@b.com");
        assert_eq!(form.phase, SubmitPhase::Submitting);

        form.complete(SubmitOutcome::Delivered);
        assert_eq!(form.phase, SubmitPhase::Success);

        // Fires once SUCCESS_RESET_MS later
        form.reset_after_success();
        assert_eq!(form.phase, SubmitPhase::Idle);
        assert_eq!(form.email, "");
        assert_eq!(form, initial);
    }

    /// Submitting an empty form never changes the phase.
    #[test]
    fn empty_submit_is_refused_silently() {
        let mut form = FormState::new();
        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.phase, SubmitPhase::Idle);
    }

    /// Rapid repeated submits produce exactly one in-flight attempt.
    #[test]
    fn double_submit_yields_a_single_attempt() {
        let mut form = FormState::new();
        form.input_changed("x@y.com".to_string());

        let attempts: Vec<_> = (0..5).filter_map(|_| form.begin_submit()).collect();
        assert_eq!(attempts, vec!["x@y.com".to_string()]);
        assert_eq!(form.phase, SubmitPhase::Submitting);
    }

    /// A rejected attempt keeps the address and accepts a retry.
    #[test]
    fn failed_attempt_allows_an_immediate_retry() {
        let mut form = FormState::new();
        form.input_changed("x@y.com".to_string());
        form.begin_submit().unwrap();
        form.complete(SubmitOutcome::Failed);

        assert_eq!(form.phase, SubmitPhase::Failed);
        assert_eq!(form.email, "x@y.com");

        let retry = form.begin_submit().expect("retry refused");
        assert_eq!(retry, "x@y.com");
        form.complete(SubmitOutcome::Delivered);
        assert_eq!(form.phase, SubmitPhase::Success);
    }

    /// Edits typed while a request is in flight never reach the
    /// submitted snapshot.
    #[test]
    fn in_flight_snapshot_is_isolated_from_edits() {
        let mut form = FormState::new();
        form.input_changed("x@y.com".to_string());
        let snapshot = form.begin_submit().unwrap();

        form.input_changed("attacker@evil.com".to_string());
        assert_eq!(snapshot, "x@y.com");
        assert_eq!(form.email, "x@y.com");
    }

    /// A reset left over from an earlier cycle finds the phase moved on
    /// and leaves the form alone.
    #[test]
    fn leftover_reset_does_not_corrupt_a_later_cycle() {
        let mut form = FormState::new();
        form.input_changed("x@y.com".to_string());
        form.begin_submit().unwrap();
        form.complete(SubmitOutcome::Failed);

        form.reset_after_success();
        assert_eq!(form.phase, SubmitPhase::Failed);
        assert_eq!(form.email, "x@y.com");
    }
}
