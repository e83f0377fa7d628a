use std::num::ParseIntError;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::message;
use crate::session::{SessionStartRequest, StartDecision};

// Three digits cap the field at 999 minutes and keep it inside its
// rendered box.
const MAX_MINUTES_LEN: usize = 3;

/// Widgets reachable by the focus cursor, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Minutes,
    Sound,
    Share,
    Start,
    Settings,
    Cancel,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Minutes => Focus::Sound,
            Focus::Sound => Focus::Share,
            Focus::Share => Focus::Start,
            Focus::Start => Focus::Settings,
            Focus::Settings => Focus::Cancel,
            Focus::Cancel => Focus::Minutes,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Minutes => Focus::Cancel,
            Focus::Sound => Focus::Minutes,
            Focus::Share => Focus::Sound,
            Focus::Start => Focus::Share,
            Focus::Settings => Focus::Start,
            Focus::Cancel => Focus::Settings,
        }
    }
}

/// Modal form collecting the parameters for starting a mob session.
///
/// The caller pre-fills the fields and the precondition verdict, runs the
/// dialog modally, and reads the outcome back through the accessors once a
/// terminal action has fired.
#[derive(Debug)]
pub struct StartDialog {
    minutes_input: String,
    timer_sound: bool,
    start_with_share: bool,
    can_execute: bool,
    message: Option<String>,
    focus: Focus,
    decision: Option<StartDecision>,
}

impl StartDialog {
    pub fn new() -> Self {
        Self {
            minutes_input: String::new(),
            timer_sound: false,
            start_with_share: false,
            can_execute: true,
            message: None,
            focus: Focus::Minutes,
            decision: None,
        }
    }

    /// Set the pre-condition check result computed by the caller.
    ///
    /// Disables the Start button and shows the formatted failure message
    /// while `can_execute` is false; re-enables and hides it otherwise.
    pub fn set_precondition_result(&mut self, can_execute: bool, reason: Option<&str>) {
        self.can_execute = can_execute;
        self.message = if can_execute {
            None
        } else {
            Some(message::precondition_failure(reason.unwrap_or("")))
        };
    }

    /// Parses the minutes field. The field only ever accepts ASCII digits,
    /// so this fails only when it is empty; the error is passed through to
    /// the caller unhandled.
    pub fn timer_minutes(&self) -> Result<u32, ParseIntError> {
        self.minutes_input.parse()
    }

    pub fn set_timer_minutes(&mut self, minutes: u32) {
        self.minutes_input = minutes.to_string();
    }

    pub fn minutes_text(&self) -> &str {
        &self.minutes_input
    }

    pub fn is_timer_sound(&self) -> bool {
        self.timer_sound
    }

    pub fn set_timer_sound(&mut self, timer_sound: bool) {
        self.timer_sound = timer_sound;
    }

    pub fn is_start_with_share(&self) -> bool {
        self.start_with_share
    }

    pub fn set_start_with_share(&mut self, start_with_share: bool) {
        self.start_with_share = start_with_share;
    }

    pub fn can_execute(&self) -> bool {
        self.can_execute
    }

    /// Precondition-failure message, present only while the start is
    /// blocked.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn decision(&self) -> Option<StartDecision> {
        self.decision
    }

    pub fn is_open(&self) -> bool {
        self.decision.is_none()
    }

    pub fn is_ok(&self) -> bool {
        self.decision == Some(StartDecision::Confirmed)
    }

    pub fn is_open_settings(&self) -> bool {
        self.decision == Some(StartDecision::OpenSettings)
    }

    /// Snapshot of the entered values for the surrounding session tooling.
    pub fn request(&self) -> Result<SessionStartRequest, ParseIntError> {
        Ok(SessionStartRequest {
            timer_minutes: self.timer_minutes()?,
            timer_sound: self.timer_sound,
            start_with_share: self.start_with_share,
        })
    }

    /// Host-initiated close (the window went away without a button press).
    /// Same outcome as Cancel.
    pub fn close(&mut self) {
        if self.decision.is_none() {
            self.decision = Some(StartDecision::Cancelled);
        }
    }

    /// Advances the dialog by one key event. A no-op once a terminal
    /// action has fired.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.decision.is_some() {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.close();
            return;
        }

        match key.code {
            KeyCode::Esc => self.close(),
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Enter => match self.focus {
                // Enter acts as the default (Start) button unless another
                // button holds the focus.
                Focus::Settings => self.open_settings(),
                Focus::Cancel => self.close(),
                _ => self.confirm(),
            },
            KeyCode::Char(' ') => match self.focus {
                Focus::Sound => self.timer_sound = !self.timer_sound,
                Focus::Share => self.start_with_share = !self.start_with_share,
                Focus::Start => self.confirm(),
                Focus::Settings => self.open_settings(),
                Focus::Cancel => self.close(),
                Focus::Minutes => {}
            },
            KeyCode::Backspace => {
                if self.focus == Focus::Minutes {
                    self.minutes_input.pop();
                }
            }
            KeyCode::Char(c) => {
                if self.focus == Focus::Minutes
                    && c.is_ascii_digit()
                    && self.minutes_input.len() < MAX_MINUTES_LEN
                {
                    self.minutes_input.push(c);
                }
            }
            _ => {}
        }
    }

    fn confirm(&mut self) {
        if self.can_execute {
            self.decision = Some(StartDecision::Confirmed);
        }
    }

    fn open_settings(&mut self) {
        self.decision = Some(StartDecision::OpenSettings);
    }
}

impl Default for StartDialog {
    fn default() -> Self {
        Self::new()
    }
}
