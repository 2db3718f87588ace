//! The student management screen as a state machine.
//!
//! # Design
//! `StudentCrud` owns the form, the edit context and a list strategy, and
//! turns user actions (field edits, submit, edit-click, delete-click) into
//! data-access calls and state transitions. Everything it touches from the
//! outside world comes in through a trait: the `StudentSource` for data, the
//! `StudentList` for refresh policy, the `Notifier` for alerts and
//! confirmations, and the `CurrentUser` for `created_by`.
//!
//! Submit and delete each come in two halves. `begin_*` validates (or asks
//! for confirmation) and moves the phase to pending; `finish_*` performs the
//! request and returns to `Idle`. A host that wants to show "Adding..." or
//! "Deleting..." renders between the two; `submit`/`delete` run both back to
//! back. While a request is pending, further `begin_*` calls get `Busy`.

use tracing::{error, info};

use crate::error::{ApiError, FormError};
use crate::form::{Field, FormState};
use crate::identity::CurrentUser;
use crate::list::{ListState, StudentList};
use crate::notify::{Notice, Notifier, CONFIRM_DELETE};
use crate::render::{render, View};
use crate::source::StudentSource;
use crate::types::{Student, StudentId, StudentInput};

/// Whether the form describes a new record or an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Create,
    Edit(StudentId),
}

/// Pending-request flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Deleting(StudentId),
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// The form check failed; nothing was sent.
    Rejected(FormError),
    /// Another request is still pending.
    Busy,
    Created(Student),
    Updated(Student),
    Failed(ApiError),
}

#[derive(Debug)]
pub enum DeleteOutcome {
    Declined,
    Busy,
    Deleted,
    Failed(ApiError),
}

/// A validated submission waiting for `finish_submit`.
#[derive(Debug)]
#[must_use = "the phase stays Submitting until the submission is finished"]
pub struct PendingSubmit {
    mode: Mode,
    input: StudentInput,
}

impl PendingSubmit {
    pub fn input(&self) -> &StudentInput {
        &self.input
    }
}

/// A confirmed delete waiting for `finish_delete`.
#[derive(Debug)]
#[must_use = "the phase stays Deleting until the delete is finished"]
pub struct PendingDelete {
    id: StudentId,
}

pub struct StudentCrud<S, L, N, U> {
    source: S,
    list: L,
    notifier: N,
    user: U,
    form: FormState,
    mode: Mode,
    phase: Phase,
}

impl<S, L, N, U> StudentCrud<S, L, N, U>
where
    S: StudentSource,
    L: StudentList,
    N: Notifier,
    U: CurrentUser,
{
    pub fn new(source: S, list: L, notifier: N, user: U) -> Self {
        Self {
            source,
            list,
            notifier,
            user,
            form: FormState::default(),
            mode: Mode::Create,
            phase: Phase::Idle,
        }
    }

    /// First display of the screen: pull the list.
    pub fn mount(&mut self) -> &ListState {
        self.list.read(&self.source)
    }

    /// The list as it should be displayed now, pulling if the strategy says so.
    pub fn students(&mut self) -> &ListState {
        self.list.read(&self.source)
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn list(&self) -> &L {
        &self.list
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    /// Drop whatever is in the form and go back to create mode.
    pub fn cancel_edit(&mut self) {
        self.form.reset();
        self.mode = Mode::Create;
    }

    /// Load `student` into the form and target it for the next submit.
    /// Unsaved form content is discarded.
    pub fn edit(&mut self, student: &Student) {
        self.form.load_from(student);
        self.mode = Mode::Edit(student.id);
    }

    /// `edit` for a row of the currently displayed list. Returns `false` if
    /// no such row is shown.
    pub fn edit_by_id(&mut self, id: StudentId) -> bool {
        let row = self
            .list
            .state()
            .students()
            .iter()
            .find(|s| s.id == id)
            .cloned();
        match row {
            Some(student) => {
                self.edit(&student);
                true
            }
            None => false,
        }
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        match self.begin_submit() {
            Ok(pending) => self.finish_submit(pending),
            Err(outcome) => outcome,
        }
    }

    /// Validate the form and mark a submission as pending. Nothing is sent.
    pub fn begin_submit(&mut self) -> Result<PendingSubmit, SubmitOutcome> {
        if self.phase != Phase::Idle {
            return Err(SubmitOutcome::Busy);
        }
        let input = match self.form.to_input(self.user.current_user_id()) {
            Ok(input) => input,
            Err(err) => {
                let notice = match err {
                    FormError::MissingField(_) => Notice::MissingFields,
                    FormError::InvalidAge(_) => Notice::InvalidAge,
                };
                self.notifier.notify(notice);
                return Err(SubmitOutcome::Rejected(err));
            }
        };
        self.phase = Phase::Submitting;
        Ok(PendingSubmit {
            mode: self.mode,
            input,
        })
    }

    /// Send the pending submission as a create or an update, depending on
    /// the mode it was started in.
    pub fn finish_submit(&mut self, pending: PendingSubmit) -> SubmitOutcome {
        let PendingSubmit { mode, input } = pending;
        let outcome = match mode {
            Mode::Create => match self.source.create(&input) {
                Ok(student) => {
                    info!(id = student.id, "student created");
                    self.list.invalidate(&self.source);
                    self.notifier.notify(Notice::Created);
                    self.form.reset();
                    SubmitOutcome::Created(student)
                }
                Err(err) => {
                    error!("Error creating student: {err}");
                    self.notifier.notify(Notice::CreateFailed);
                    SubmitOutcome::Failed(err)
                }
            },
            Mode::Edit(id) => match self.source.update(id, &input) {
                Ok(student) => {
                    info!(id, "student updated");
                    self.list.invalidate(&self.source);
                    self.notifier.notify(Notice::Updated);
                    self.form.reset();
                    self.mode = Mode::Create;
                    SubmitOutcome::Updated(student)
                }
                Err(err) => {
                    error!("Error updating student: {err}");
                    self.notifier.notify(Notice::UpdateFailed);
                    SubmitOutcome::Failed(err)
                }
            },
        };
        self.phase = Phase::Idle;
        outcome
    }

    /// Ask for confirmation, then delete. Leaves the form and edit mode
    /// alone even when `id` is the record being edited.
    pub fn delete(&mut self, id: StudentId) -> DeleteOutcome {
        match self.begin_delete(id) {
            Ok(pending) => self.finish_delete(pending),
            Err(outcome) => outcome,
        }
    }

    /// Ask for confirmation and mark the row as being deleted.
    pub fn begin_delete(&mut self, id: StudentId) -> Result<PendingDelete, DeleteOutcome> {
        if self.phase != Phase::Idle {
            return Err(DeleteOutcome::Busy);
        }
        if !self.notifier.confirm(CONFIRM_DELETE) {
            return Err(DeleteOutcome::Declined);
        }
        self.phase = Phase::Deleting(id);
        Ok(PendingDelete { id })
    }

    pub fn finish_delete(&mut self, pending: PendingDelete) -> DeleteOutcome {
        let id = pending.id;
        let outcome = match self.source.remove(id) {
            Ok(()) => {
                info!(id, "student deleted");
                self.list.invalidate(&self.source);
                self.notifier.notify(Notice::Deleted);
                DeleteOutcome::Deleted
            }
            Err(err) => {
                error!("Error deleting student: {err}");
                self.notifier.notify(Notice::DeleteFailed);
                DeleteOutcome::Failed(err)
            }
        };
        self.phase = Phase::Idle;
        outcome
    }

    pub fn render(&mut self) -> String {
        let list = self.list.read(&self.source);
        render(&View {
            list,
            form: &self.form,
            mode: self.mode,
            phase: self.phase,
        })
    }
}
