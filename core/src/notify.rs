//! User-facing notices and delete confirmations.
//!
//! The controller never talks to a terminal or a dialog directly; it hands
//! notices to a `Notifier` and asks it for yes/no answers.

use std::sync::mpsc::{Receiver, Sender};

use tracing::warn;

pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this student?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    MissingFields,
    InvalidAge,
    Created,
    CreateFailed,
    Updated,
    UpdateFailed,
    Deleted,
    DeleteFailed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::MissingFields => "Please fill in all fields",
            Notice::InvalidAge => "Age must be a whole number",
            Notice::Created => "Student created successfully!",
            Notice::CreateFailed => "Failed to create student.",
            Notice::Updated => "Student updated successfully!",
            Notice::UpdateFailed => "Failed to update student.",
            Notice::Deleted => "Student deleted successfully!",
            Notice::DeleteFailed => "Failed to delete student.",
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, Notice::Created | Notice::Updated | Notice::Deleted)
    }
}

pub trait Notifier {
    fn notify(&mut self, notice: Notice);

    /// `true` means go ahead.
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Notifier backed by channels: notices go out on one, answers come in on
/// the other. A closed or empty answer channel counts as "no".
#[derive(Debug)]
pub struct ChannelNotifier {
    notices: Sender<Notice>,
    answers: Receiver<bool>,
}

impl ChannelNotifier {
    pub fn new(notices: Sender<Notice>, answers: Receiver<bool>) -> Self {
        Self { notices, answers }
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&mut self, notice: Notice) {
        if self.notices.send(notice).is_err() {
            warn!(?notice, "notice dropped, nobody is listening");
        }
    }

    fn confirm(&mut self, _prompt: &str) -> bool {
        self.answers.try_recv().unwrap_or(false)
    }
}
