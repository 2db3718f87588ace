//! Client-side projection of the server's student collection.
//!
//! # Design
//! Two refresh strategies share one trait. `EagerList` re-pulls the moment a
//! mutation is reported; `CachedList` only marks itself stale and re-pulls on
//! the next read (invalidate-and-refetch). Either way, the first read after a
//! completed mutation reflects a fresh server list, and a failed pull is
//! retried by the next read.

use tracing::{debug, error};

use crate::source::StudentSource;
use crate::types::Student;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    /// Nothing has been pulled yet.
    Loading,
    Ready(Vec<Student>),
    Failed(String),
}

impl ListState {
    pub fn students(&self) -> &[Student] {
        match self {
            ListState::Ready(students) => students,
            _ => &[],
        }
    }
}

/// Refresh strategy for the student list.
pub trait StudentList {
    /// A mutation completed; the current projection is out of date.
    fn invalidate<S: StudentSource + ?Sized>(&mut self, source: &S);

    /// The projection to render, pulling first if the strategy requires it.
    fn read<S: StudentSource + ?Sized>(&mut self, source: &S) -> &ListState;

    /// The projection as it stands, without touching the source.
    fn state(&self) -> &ListState;
}

/// Pull the whole collection and replace whatever was there.
fn pull<S: StudentSource + ?Sized>(source: &S) -> ListState {
    match source.list() {
        Ok(students) => {
            debug!(count = students.len(), "student list refreshed");
            ListState::Ready(students)
        }
        Err(err) => {
            error!("Error fetching students: {err}");
            ListState::Failed(err.to_string())
        }
    }
}

/// Re-pulls immediately and unconditionally after every mutation.
#[derive(Debug)]
pub struct EagerList {
    state: ListState,
}

impl EagerList {
    pub fn new() -> Self {
        Self {
            state: ListState::Loading,
        }
    }
}

impl Default for EagerList {
    fn default() -> Self {
        Self::new()
    }
}

impl StudentList for EagerList {
    fn invalidate<S: StudentSource + ?Sized>(&mut self, source: &S) {
        self.state = pull(source);
    }

    fn read<S: StudentSource + ?Sized>(&mut self, source: &S) -> &ListState {
        if matches!(self.state, ListState::Loading | ListState::Failed(_)) {
            self.state = pull(source);
        }
        &self.state
    }

    fn state(&self) -> &ListState {
        &self.state
    }
}

/// Cache entry for the collection: invalidation is free, the next read pays.
#[derive(Debug)]
pub struct CachedList {
    state: ListState,
    stale: bool,
}

impl CachedList {
    pub fn new() -> Self {
        Self {
            state: ListState::Loading,
            stale: true,
        }
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }
}

impl Default for CachedList {
    fn default() -> Self {
        Self::new()
    }
}

impl StudentList for CachedList {
    fn invalidate<S: StudentSource + ?Sized>(&mut self, _source: &S) {
        self.stale = true;
    }

    fn read<S: StudentSource + ?Sized>(&mut self, source: &S) -> &ListState {
        if self.stale {
            self.state = pull(source);
            self.stale = matches!(self.state, ListState::Failed(_));
        }
        &self.state
    }

    fn state(&self) -> &ListState {
        &self.state
    }
}
