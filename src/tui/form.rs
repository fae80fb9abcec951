//! The contact form: four `tui-input` fields, blur/keystroke validation,
//! a submit button with a timed busy state, and a self-hiding status banner.
//! Submission is simulated; the outcome is logged, never transmitted.

use super::timers::{Effect, TimerQueue};
use crate::site::contact::{self, FieldKind};
use crossterm::event::Event;
use tui_input::{backend::crossterm::EventHandler, Input};

pub const STATUS_HIDE_DELAY_MS: u64 = 5000;
pub const BUSY_RESTORE_DELAY_MS: u64 = 2000;

pub const SUBMIT_LABEL: &str = "Send Message";
pub const BUSY_LABEL: &str = "Sending...";
pub const SUCCESS_MESSAGE: &str = "Thank you for your message! We'll get back to you soon.";
pub const ERROR_MESSAGE: &str = "Please correct the errors above.";

pub struct FormField {
    pub kind: FieldKind,
    pub input: Input,
    pub error: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy)]
pub struct StatusBanner {
    pub kind: StatusKind,
    pub message: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(usize),
    Submit,
}

pub struct ContactForm {
    pub fields: Vec<FormField>,
    focus: FormFocus,
    status: Option<StatusBanner>,
    busy: bool,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        let fields = [
            FieldKind::Name,
            FieldKind::Email,
            FieldKind::Phone,
            FieldKind::Message,
        ]
        .into_iter()
        .map(|kind| FormField {
            kind,
            input: Input::default(),
            error: None,
        })
        .collect();

        Self {
            fields,
            focus: FormFocus::Field(0),
            status: None,
            busy: false,
        }
    }

    #[must_use]
    pub fn focus(&self) -> FormFocus {
        self.focus
    }

    /// Direct focus jump (entering the form, mouse clicks). Keyboard
    /// traversal goes through [`Self::focus_next`]/[`Self::focus_previous`],
    /// which blur the field being left.
    pub fn set_focus(&mut self, focus: FormFocus) {
        self.focus = focus;
    }

    #[must_use]
    pub fn status(&self) -> Option<StatusBanner> {
        self.status
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.busy {
            BUSY_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Leaving a field validates just that field.
    pub fn blur(&mut self) {
        if let FormFocus::Field(index) = self.focus {
            self.validate_field(index);
        }
    }

    pub fn focus_next(&mut self) {
        self.blur();
        self.focus = match self.focus {
            FormFocus::Field(index) if index + 1 < self.fields.len() => {
                FormFocus::Field(index + 1)
            }
            FormFocus::Field(_) => FormFocus::Submit,
            FormFocus::Submit => FormFocus::Field(0),
        };
    }

    pub fn focus_previous(&mut self) {
        self.blur();
        self.focus = match self.focus {
            FormFocus::Field(0) | FormFocus::Submit => match self.focus {
                FormFocus::Submit => FormFocus::Field(self.fields.len() - 1),
                _ => FormFocus::Submit,
            },
            FormFocus::Field(index) => FormFocus::Field(index - 1),
        };
    }

    /// Routes a key event into the focused field. Any edit clears that
    /// field's error immediately, independent of validation runs.
    pub fn handle_input(&mut self, event: &Event) {
        if let FormFocus::Field(index) = self.focus {
            let field = &mut self.fields[index];
            if let Some(change) = field.input.handle_event(event) {
                if change.value {
                    field.error = None;
                }
            }
        }
    }

    /// Validates one field and records its inline error. Returns whether it
    /// passed.
    pub fn validate_field(&mut self, index: usize) -> bool {
        let field = &mut self.fields[index];
        match contact::validate(field.kind, field.input.value()) {
            Ok(()) => {
                field.error = None;
                true
            }
            Err(message) => {
                field.error = Some(message);
                false
            }
        }
    }

    /// Full submission attempt. The submit control always enters its busy
    /// state (restored on a timer regardless of the outcome); validation
    /// decides between the success path (banner, cleared form, local log)
    /// and the error path (banner plus inline messages).
    pub fn submit(&mut self, timers: &mut TimerQueue, now_ms: u64) -> bool {
        if self.busy {
            // a disabled button does not react
            return false;
        }
        self.busy = true;
        timers.schedule(now_ms, BUSY_RESTORE_DELAY_MS, Effect::RestoreSubmit);

        // clear prior annotations, then run every field's checks
        for field in &mut self.fields {
            field.error = None;
        }
        let mut valid = true;
        for index in 0..self.fields.len() {
            valid &= self.validate_field(index);
        }

        if valid {
            tracing::info!(
                name = self.fields[0].input.value(),
                email = self.fields[1].input.value(),
                "contact form submitted (simulated, nothing sent)"
            );
            self.status = Some(StatusBanner {
                kind: StatusKind::Success,
                message: SUCCESS_MESSAGE,
            });
            for field in &mut self.fields {
                field.input.reset();
            }
        } else {
            self.status = Some(StatusBanner {
                kind: StatusKind::Error,
                message: ERROR_MESSAGE,
            });
        }
        timers.schedule(now_ms, STATUS_HIDE_DELAY_MS, Effect::HideStatus);
        valid
    }

    pub fn hide_status(&mut self) {
        self.status = None;
    }

    pub fn restore_submit(&mut self) {
        self.busy = false;
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        ContactForm, FormFocus, StatusKind, BUSY_RESTORE_DELAY_MS, STATUS_HIDE_DELAY_MS,
    };
    use crate::site::contact::{EMAIL_MESSAGE, REQUIRED_MESSAGE};
    use crate::tui::timers::{Effect, TimerQueue};
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

    fn type_into(form: &mut ContactForm, text: &str) {
        for c in text.chars() {
            form.handle_input(&Event::Key(KeyEvent::new(
                KeyCode::Char(c),
                KeyModifiers::NONE,
            )));
        }
    }

    fn fill_valid(form: &mut ContactForm) {
        form.set_focus(FormFocus::Field(0));
        type_into(form, "Ada");
        form.set_focus(FormFocus::Field(1));
        type_into(form, "user@example.com");
        // phone stays empty: optional
        form.set_focus(FormFocus::Field(3));
        type_into(form, "Love the rooftop lounge.");
        form.set_focus(FormFocus::Submit);
    }

    #[test]
    fn empty_submission_marks_every_required_field() {
        let mut form = ContactForm::new();
        let mut timers = TimerQueue::default();

        assert!(!form.submit(&mut timers, 0));
        assert_eq!(form.status().map(|s| s.kind), Some(StatusKind::Error));
        assert_eq!(form.fields[0].error, Some(REQUIRED_MESSAGE));
        assert_eq!(form.fields[1].error, Some(REQUIRED_MESSAGE));
        assert_eq!(form.fields[2].error, None, "phone is optional");
        assert_eq!(form.fields[3].error, Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn valid_submission_clears_the_form_and_shows_success() {
        let mut form = ContactForm::new();
        let mut timers = TimerQueue::default();
        fill_valid(&mut form);

        assert!(form.submit(&mut timers, 0));
        assert_eq!(form.status().map(|s| s.kind), Some(StatusKind::Success));
        assert!(form.fields.iter().all(|f| f.input.value().is_empty()));
        assert!(form.fields.iter().all(|f| f.error.is_none()));
    }

    #[test]
    fn banner_auto_hides_and_busy_state_restores() {
        let mut form = ContactForm::new();
        let mut timers = TimerQueue::default();
        fill_valid(&mut form);
        form.submit(&mut timers, 0);
        assert!(form.is_busy());

        for effect in timers.fire_due(STATUS_HIDE_DELAY_MS) {
            match effect {
                Effect::HideStatus => form.hide_status(),
                Effect::RestoreSubmit => form.restore_submit(),
                _ => {}
            }
        }
        assert!(form.status().is_none());
        assert!(!form.is_busy());
    }

    #[test]
    fn busy_button_ignores_further_presses() {
        let mut form = ContactForm::new();
        let mut timers = TimerQueue::default();
        form.submit(&mut timers, 0);
        let pending = timers.pending_count();

        assert!(!form.submit(&mut timers, 100));
        assert_eq!(timers.pending_count(), pending);

        for effect in timers.fire_due(BUSY_RESTORE_DELAY_MS) {
            if effect == Effect::RestoreSubmit {
                form.restore_submit();
            }
        }
        assert!(!form.is_busy());
    }

    #[test]
    fn blur_validates_one_field_and_typing_clears_its_error() {
        let mut form = ContactForm::new();
        form.set_focus(FormFocus::Field(1));
        type_into(&mut form, "not-an-email");

        // moving focus away is the blur
        form.focus_next();
        assert_eq!(form.fields[1].error, Some(EMAIL_MESSAGE));
        assert_eq!(form.fields[0].error, None, "blur touches only the one field");

        form.set_focus(FormFocus::Field(1));
        type_into(&mut form, "x");
        assert_eq!(form.fields[1].error, None);
    }
}
