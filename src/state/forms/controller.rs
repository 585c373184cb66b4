//! Form controller and submission lifecycle

use super::field::{FieldId, FormField};
use super::form_state::{Form, LeadForm};
use super::schema::{validate, ValidationResult};
use super::variant::FormVariant;
use crate::state::lead::LeadSubmission;
use crate::state::notification::{Notification, Notifier};
use crate::submission::{LeadSubmitter, SubmitError};
use std::sync::Arc;

/// Where the form is in its submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Result of a submit trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; errors are exposed on the controller
    Invalid,
    /// A submission is already in flight; nothing happened
    AlreadySubmitting,
    /// The lead was accepted for sending and must be handed to the submitter
    Started(LeadSubmission),
}

/// Owns one form instance and drives it through validation and submission.
///
/// At most one submission is in flight at a time; `Submitting` is the guard.
pub struct FormController {
    form: LeadForm,
    errors: ValidationResult,
    state: SubmissionState,
    last_settled: Option<SubmissionState>,
    submitter: Arc<dyn LeadSubmitter>,
    notifier: Arc<dyn Notifier>,
}

impl FormController {
    pub fn new(
        variant: FormVariant,
        submitter: Arc<dyn LeadSubmitter>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            form: LeadForm::new(variant),
            errors: ValidationResult::default(),
            state: SubmissionState::Idle,
            last_settled: None,
            submitter,
            notifier,
        }
    }

    pub fn form(&self) -> &LeadForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut LeadForm {
        &mut self.form
    }

    pub fn variant(&self) -> FormVariant {
        self.form.variant
    }

    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// How the most recent submission ended, if any has settled
    pub fn last_settled(&self) -> Option<SubmissionState> {
        self.last_settled
    }

    pub fn submitter(&self) -> Arc<dyn LeadSubmitter> {
        Arc::clone(&self.submitter)
    }

    /// Validate the current values and, when valid, enter `Submitting`.
    ///
    /// The returned lead must be passed to the submitter and its result
    /// handed back through [`FormController::settle`].
    pub fn begin_submit(&mut self) -> SubmitOutcome {
        if self.is_submitting() {
            tracing::debug!("Submit ignored, a submission is already in flight");
            return SubmitOutcome::AlreadySubmitting;
        }

        let input = self.form.input();
        self.errors = validate(&input);
        if !self.errors.is_valid() {
            let fields: Vec<&str> = self.errors.fields().map(|f| f.key()).collect();
            tracing::debug!(?fields, "Lead failed validation");
            if let Some(first) = self.errors.fields().next() {
                self.form.focus(first);
            }
            return SubmitOutcome::Invalid;
        }

        let lead = LeadSubmission::new(input);
        tracing::debug!(lead_id = %lead.lead_id, "Submission started");
        self.state = SubmissionState::Submitting;
        SubmitOutcome::Started(lead)
    }

    /// Apply the submitter's result to the in-flight submission
    pub fn settle(&mut self, result: Result<(), SubmitError>) {
        if !self.is_submitting() {
            tracing::warn!("Submission result arrived with nothing in flight");
            return;
        }

        match result {
            Ok(()) => {
                self.state = SubmissionState::Succeeded;
                self.form.reset();
                self.errors.clear();
                self.notifier.notify(Notification::lead_received());
                tracing::info!(page = %self.variant(), "Lead submitted");
            }
            Err(error) => {
                self.state = SubmissionState::Failed;
                self.notifier.notify(Notification::submission_failed());
                tracing::warn!(page = %self.variant(), %error, "Lead submission failed");
            }
        }

        self.last_settled = Some(self.state);
        self.state = SubmissionState::Idle;
    }

    /// Validate, send and settle in one call
    pub async fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.begin_submit();
        if let SubmitOutcome::Started(lead) = &outcome {
            let submitter = self.submitter();
            let result = submitter.submit(lead).await;
            self.settle(result);
        }
        outcome
    }

    pub fn next_field(&mut self) {
        self.form.next_field();
    }

    pub fn prev_field(&mut self) {
        self.form.prev_field();
    }

    pub fn focus(&mut self, field: FieldId) {
        self.form.focus(field);
    }

    pub fn is_button_row_active(&self) -> bool {
        self.form.is_button_row_active()
    }

    /// Focused field, `None` on the button row
    pub fn active_field(&self) -> Option<&FormField> {
        self.form.get_field(self.form.active_field())
    }

    /// Type a character into the focused field
    pub fn type_char(&mut self, c: char) {
        if let Some(field) = self.form.get_active_field_mut() {
            field.push_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.form.get_active_field_mut() {
            field.pop_char();
        }
    }

    pub fn next_option(&mut self) {
        if let Some(field) = self.form.get_active_field_mut() {
            field.next_option();
        }
    }

    pub fn prev_option(&mut self) {
        if let Some(field) = self.form.get_active_field_mut() {
            field.prev_option();
        }
    }

    /// Toggle the focused checkbox; does nothing on other fields
    pub fn toggle(&mut self) {
        if let Some(field) = self.form.get_active_field_mut() {
            field.toggle();
        }
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::lead::{LeadDetails, LeadInput};
    use crate::state::notification::MockNotifier;
    use crate::submission::MockLeadSubmitter;
    use pretty_assertions::assert_eq;

    fn quiet_notifier() -> MockNotifier {
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().never();
        notifier
    }

    fn unused_submitter() -> MockLeadSubmitter {
        let mut submitter = MockLeadSubmitter::new();
        submitter.expect_submit().never();
        submitter
    }

    fn controller(submitter: MockLeadSubmitter, notifier: MockNotifier) -> FormController {
        FormController::new(
            FormVariant::Equipment,
            Arc::new(submitter),
            Arc::new(notifier),
        )
    }

    fn fill_valid(controller: &mut FormController) {
        let form = controller.form_mut();
        form.field_mut(FieldId::Name).unwrap().set_text("Carlos Lima");
        form.field_mut(FieldId::Phone).unwrap().set_text("11987654321");
        form.field_mut(FieldId::Email).unwrap().set_text("carlos@lima.com.br");
        form.field_mut(FieldId::Company).unwrap().set_text("Lima Locações");
        form.field_mut(FieldId::Location).unwrap().set_text("Sorocaba, SP");
        form.field_mut(FieldId::Equipment).unwrap().select("Andaime");
        form.field_mut(FieldId::Consent).unwrap().set_checked(true);
    }

    #[test]
    fn test_new_controller_is_idle() {
        let controller = controller(unused_submitter(), quiet_notifier());
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert!(controller.errors().is_valid());
        assert_eq!(controller.last_settled(), None);
    }

    #[test]
    fn test_consent_only_failure_stays_idle() {
        let mut controller = controller(unused_submitter(), quiet_notifier());
        fill_valid(&mut controller);
        controller
            .form_mut()
            .field_mut(FieldId::Consent)
            .unwrap()
            .set_checked(false);

        assert_eq!(controller.begin_submit(), SubmitOutcome::Invalid);
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert_eq!(controller.errors().len(), 1);
        assert_eq!(
            controller.errors().error(FieldId::Consent),
            Some("É necessário aceitar os termos LGPD")
        );
    }

    #[test]
    fn test_invalid_submit_focuses_first_error() {
        let mut controller = controller(unused_submitter(), quiet_notifier());
        fill_valid(&mut controller);
        controller
            .form_mut()
            .field_mut(FieldId::Email)
            .unwrap()
            .set_text("carlos@");
        controller.focus(FieldId::Name);

        assert_eq!(controller.begin_submit(), SubmitOutcome::Invalid);
        assert_eq!(controller.form().active_field_index, 2);
    }

    #[test]
    fn test_resubmit_recomputes_errors() {
        let mut controller = controller(unused_submitter(), quiet_notifier());
        assert_eq!(controller.begin_submit(), SubmitOutcome::Invalid);
        assert_eq!(controller.errors().len(), 7);

        fill_valid(&mut controller);
        controller
            .form_mut()
            .field_mut(FieldId::Location)
            .unwrap()
            .clear();
        assert_eq!(controller.begin_submit(), SubmitOutcome::Invalid);
        assert_eq!(controller.errors().fields().collect::<Vec<_>>(), vec![FieldId::Location]);
    }

    #[test]
    fn test_valid_submit_starts_with_formatted_lead() {
        let mut controller = controller(unused_submitter(), quiet_notifier());
        fill_valid(&mut controller);

        let lead = match controller.begin_submit() {
            SubmitOutcome::Started(lead) => lead,
            other => panic!("expected Started, got {other:?}"),
        };
        assert!(controller.is_submitting());
        assert_eq!(lead.page, FormVariant::Equipment);
        assert_eq!(lead.input.phone, "(11) 98765-4321");
        assert_eq!(
            lead.input.details,
            LeadDetails::Equipment {
                equipment: "Andaime".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_successful_submission_resets_form() {
        let mut submitter = MockLeadSubmitter::new();
        submitter.expect_submit().times(1).returning(|_| Ok(()));
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|n| *n == Notification::lead_received())
            .times(1)
            .return_const(());

        let mut controller = controller(submitter, notifier);
        fill_valid(&mut controller);

        let outcome = controller.submit().await;
        assert!(matches!(outcome, SubmitOutcome::Started(_)));
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert_eq!(controller.last_settled(), Some(SubmissionState::Succeeded));
        assert_eq!(
            controller.form().input(),
            LeadInput::empty(FormVariant::Equipment)
        );
        assert!(controller.errors().is_valid());
    }

    #[tokio::test]
    async fn test_failed_submission_keeps_values() {
        let mut submitter = MockLeadSubmitter::new();
        submitter
            .expect_submit()
            .times(1)
            .returning(|_| Err(SubmitError::Interrupted));
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|n| n.is_destructive() && n.title == "Erro")
            .times(1)
            .return_const(());

        let mut controller = controller(submitter, notifier);
        fill_valid(&mut controller);
        let before = controller.form().input();

        controller.submit().await;
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert_eq!(controller.last_settled(), Some(SubmissionState::Failed));
        assert_eq!(controller.form().input(), before);
    }

    #[tokio::test]
    async fn test_second_submit_while_in_flight_is_noop() {
        let mut submitter = MockLeadSubmitter::new();
        submitter.expect_submit().times(1).returning(|_| Ok(()));
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().times(1).return_const(());

        let mut controller = controller(submitter, notifier);
        fill_valid(&mut controller);

        let lead = match controller.begin_submit() {
            SubmitOutcome::Started(lead) => lead,
            other => panic!("expected Started, got {other:?}"),
        };
        assert_eq!(controller.begin_submit(), SubmitOutcome::AlreadySubmitting);
        assert_eq!(controller.submit().await, SubmitOutcome::AlreadySubmitting);
        assert!(controller.is_submitting());

        let result = controller.submitter().submit(&lead).await;
        controller.settle(result);
        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_settle_without_submission_is_ignored() {
        let mut controller = controller(unused_submitter(), quiet_notifier());
        fill_valid(&mut controller);
        controller.settle(Ok(()));
        assert_eq!(controller.last_settled(), None);
        assert!(controller.form().input().consent_given);
    }

    #[test]
    fn test_editing_helpers_follow_focus() {
        let mut controller = controller(unused_submitter(), quiet_notifier());
        controller.type_char('Z');
        controller.type_char('é');
        controller.backspace();
        assert_eq!(controller.form().input().name, "Z");

        controller.focus(FieldId::Phone);
        for c in "119".chars() {
            controller.type_char(c);
        }
        assert_eq!(controller.form().input().phone, "(11) 9");

        controller.focus(FieldId::Equipment);
        controller.next_option();
        controller.next_option();
        assert_eq!(
            controller.form().input().details,
            LeadDetails::Equipment {
                equipment: "Escora Metálica".to_string()
            }
        );

        controller.focus(FieldId::Consent);
        controller.toggle();
        assert!(controller.form().input().consent_given);

        controller.next_field();
        assert!(controller.is_button_row_active());
        controller.type_char('x'); // Button row has no value
        controller.prev_field();
        assert_eq!(controller.form().active_field_index, 6);
    }

    #[test]
    fn test_clear_errors() {
        let mut controller = controller(unused_submitter(), quiet_notifier());
        controller.begin_submit();
        assert!(!controller.errors().is_valid());
        controller.clear_errors();
        assert!(controller.errors().is_valid());
    }
}
