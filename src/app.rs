//! Application state and core logic

use crate::config::Settings;
use crate::state::{FormController, FormVariant, Notification, SubmitOutcome, ToastStack};
use crate::submission::{self, LeadSubmitter, SubmitError};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::sync::oneshot::{self, error::TryRecvError};

type PendingSubmission = oneshot::Receiver<Result<(), SubmitError>>;

/// Main application struct
pub struct App {
    /// The lead form and its submission lifecycle
    pub controller: FormController,
    /// Toasts currently on screen
    pub toasts: ToastStack,
    /// Notifications emitted by the controller, drained every tick
    notifications: UnboundedReceiver<Notification>,
    /// Result of the in-flight submission task
    pending: Option<PendingSubmission>,
    /// Short hint shown in the status bar until the next key press
    pub status_message: Option<String>,
    /// Where leads go, for the status bar
    pub submitter_label: String,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(settings: &Settings) -> Result<Self> {
        let submitter = submission::from_settings(settings)?;
        Ok(Self::with_submitter(settings.page, submitter))
    }

    pub fn with_submitter(page: FormVariant, submitter: Arc<dyn LeadSubmitter>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let submitter_label = submitter.describe();

        Self {
            controller: FormController::new(page, submitter, Arc::new(tx)),
            toasts: ToastStack::default(),
            notifications: rx,
            pending: None,
            status_message: None,
            submitter_label,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Advance time-based state: settle a finished submission, pick up new
    /// notifications and expire old toasts
    pub fn tick(&mut self) {
        self.poll_submission();
        while let Ok(notification) = self.notifications.try_recv() {
            self.toasts.push(notification);
        }
        self.toasts.prune_expired();
    }

    fn poll_submission(&mut self) {
        let Some(rx) = self.pending.as_mut() else {
            return;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Closed) => Err(SubmitError::Interrupted),
        };
        self.pending = None;
        self.controller.settle(result);
    }

    /// Validate the form and, when valid, send the lead on a background task
    pub fn trigger_submit(&mut self) {
        match self.controller.begin_submit() {
            SubmitOutcome::Started(lead) => {
                let submitter = self.controller.submitter();
                let (tx, rx) = oneshot::channel();
                tokio::spawn(async move {
                    let result = submitter.submit(&lead).await;
                    // Receiver is gone only when the app is shutting down
                    let _ = tx.send(result);
                });
                self.pending = Some(rx);
            }
            SubmitOutcome::Invalid => {
                let count = self.controller.errors().len();
                self.status_message = Some(if count == 1 {
                    "1 campo precisa de atenção".to_string()
                } else {
                    format!("{count} campos precisam de atenção")
                });
            }
            SubmitOutcome::AlreadySubmitting => {}
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Global quit: Ctrl+C
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        // Clear any status messages on key press
        self.status_message = None;

        let on_button_row = self.controller.is_button_row_active();
        let on_checkbox = self
            .controller
            .active_field()
            .is_some_and(|f| f.is_checkbox());

        match key.code {
            // Keyboard shortcut (works from anywhere)
            KeyCode::Char('s') if crate::platform::is_submit_modifier(key.modifiers) => {
                self.trigger_submit();
            }
            KeyCode::Tab | KeyCode::Down => self.controller.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.controller.prev_field(),
            KeyCode::Left => self.controller.prev_option(),
            KeyCode::Right => self.controller.next_option(),
            KeyCode::Enter if on_button_row => self.trigger_submit(),
            KeyCode::Enter => self.controller.next_field(),
            KeyCode::Esc => {
                self.controller.clear_errors();
                self.toasts.dismiss_latest();
            }
            KeyCode::Char(' ') if on_checkbox => self.controller.toggle(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.controller.type_char(c)
            }
            KeyCode::Backspace => self.controller.backspace(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldId, SubmissionState};
    use crate::submission::MockLeadSubmitter;
    use pretty_assertions::assert_eq;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn app_with(submitter: MockLeadSubmitter) -> App {
        let mut submitter = submitter;
        submitter
            .expect_describe()
            .return_const("mock CRM".to_string());
        App::with_submitter(FormVariant::Equipment, Arc::new(submitter))
    }

    fn idle_app() -> App {
        let mut submitter = MockLeadSubmitter::new();
        submitter.expect_submit().never();
        app_with(submitter)
    }

    /// Fill every field of the equipment form through the keyboard
    fn fill_form(app: &mut App) {
        type_text(app, "Carlos Lima");
        press(app, KeyCode::Tab);
        type_text(app, "11987654321");
        press(app, KeyCode::Tab);
        type_text(app, "carlos@lima.com.br");
        press(app, KeyCode::Tab);
        type_text(app, "Lima Locações");
        press(app, KeyCode::Tab);
        type_text(app, "Sorocaba, SP");
        press(app, KeyCode::Tab);
        press(app, KeyCode::Right); // Andaime
        press(app, KeyCode::Tab);
        press(app, KeyCode::Char(' '));
        press(app, KeyCode::Tab);
    }

    /// Let the spawned submission finish and apply it
    async fn wait_for_settle(app: &mut App) {
        for _ in 0..100 {
            if !app.controller.is_submitting() {
                break;
            }
            tokio::task::yield_now().await;
            app.tick();
        }
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = idle_app();
        assert!(!app.should_quit());
        ctrl(&mut app, 'c');
        assert!(app.should_quit());
    }

    #[test]
    fn test_describe_shown_in_status_bar() {
        let app = idle_app();
        assert_eq!(app.submitter_label, "mock CRM");
        assert_eq!(app.controller.variant(), FormVariant::Equipment);
    }

    #[test]
    fn test_typing_fills_focused_field() {
        let mut app = idle_app();
        type_text(&mut app, "Ana");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Down);
        type_text(&mut app, "1198");
        let input = app.controller.form().input();
        assert_eq!(input.name, "An");
        assert_eq!(input.phone, "(11) 98");
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut app = idle_app();
        let mut key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        app.handle_key(key);
        assert_eq!(app.controller.form().input().name, "");
    }

    #[test]
    fn test_space_types_in_text_and_toggles_checkbox() {
        let mut app = idle_app();
        type_text(&mut app, "A B");
        app.controller.focus(FieldId::Consent);
        press(&mut app, KeyCode::Char(' '));
        let input = app.controller.form().input();
        assert_eq!(input.name, "A B");
        assert!(input.consent_given);
    }

    #[test]
    fn test_enter_on_field_moves_focus() {
        let mut app = idle_app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.controller.active_field().unwrap().id, FieldId::Phone);
    }

    #[test]
    fn test_invalid_submit_shows_errors() {
        let mut app = idle_app();
        ctrl(&mut app, 's');
        assert_eq!(app.controller.state(), SubmissionState::Idle);
        assert_eq!(app.controller.errors().len(), 7);
        assert_eq!(
            app.status_message.as_deref(),
            Some("7 campos precisam de atenção")
        );

        press(&mut app, KeyCode::Esc);
        assert!(app.controller.errors().is_valid());
        assert!(app.status_message.is_none());
    }

    #[tokio::test]
    async fn test_successful_submission_flow() {
        let mut submitter = MockLeadSubmitter::new();
        submitter
            .expect_submit()
            .withf(|lead| lead.input.phone == "(11) 98765-4321" && lead.input.consent_given)
            .times(1)
            .returning(|_| Ok(()));
        let mut app = app_with(submitter);

        fill_form(&mut app);
        assert!(app.controller.is_button_row_active());
        press(&mut app, KeyCode::Enter);
        assert!(app.controller.is_submitting());

        wait_for_settle(&mut app).await;
        assert_eq!(
            app.controller.last_settled(),
            Some(SubmissionState::Succeeded)
        );
        assert_eq!(app.toasts.len(), 1);
        let toast = app.toasts.iter().next().unwrap();
        assert_eq!(toast.notification.title, "Obrigado!");
        assert_eq!(app.controller.form().input().name, "");
    }

    #[tokio::test]
    async fn test_failed_submission_keeps_values() {
        let mut submitter = MockLeadSubmitter::new();
        submitter
            .expect_submit()
            .times(1)
            .returning(|_| {
                Err(SubmitError::Rejected {
                    status: 500,
                    body: String::new(),
                })
            });
        let mut app = app_with(submitter);

        fill_form(&mut app);
        ctrl(&mut app, 's');
        wait_for_settle(&mut app).await;

        assert_eq!(app.controller.last_settled(), Some(SubmissionState::Failed));
        assert!(app.toasts.iter().next().unwrap().notification.is_destructive());
        assert_eq!(app.controller.form().input().name, "Carlos Lima");
    }

    #[tokio::test]
    async fn test_repeated_submit_sends_once() {
        let mut submitter = MockLeadSubmitter::new();
        submitter.expect_submit().times(1).returning(|_| Ok(()));
        let mut app = app_with(submitter);

        fill_form(&mut app);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        ctrl(&mut app, 's');
        assert!(app.controller.is_submitting());

        wait_for_settle(&mut app).await;
        assert_eq!(app.toasts.len(), 1);
    }

    #[tokio::test]
    async fn test_lost_submission_task_is_a_failure() {
        let mut app = idle_app();
        fill_form(&mut app);
        assert!(matches!(
            app.controller.begin_submit(),
            SubmitOutcome::Started(_)
        ));

        let (tx, rx) = oneshot::channel();
        app.pending = Some(rx);
        drop(tx);

        app.tick();
        assert_eq!(app.controller.last_settled(), Some(SubmissionState::Failed));
        assert!(app.toasts.iter().next().unwrap().notification.is_destructive());
    }

    #[test]
    fn test_esc_dismisses_latest_toast() {
        let mut app = idle_app();
        app.toasts.push(Notification::lead_received());
        press(&mut app, KeyCode::Esc);
        assert!(app.toasts.is_empty());
    }
}
