//! Client core for the student management screen.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The host plugs in a
//! `Transport`; everything above it (form, list refresh, submission flow,
//! rendering) is deterministic and testable without a UI or a server.
//!
//! # Design
//! - `StudentClient` is stateless: it holds only `base_url`, and each CRUD
//!   operation is a `build_*` / `parse_*` pair.
//! - `StudentSource` is the single data-access interface; `HttpStudentSource`
//!   implements it over any `Transport`.
//! - `StudentList` has two refresh strategies: `EagerList` re-pulls after each
//!   mutation, `CachedList` invalidates and re-pulls on the next read.
//! - `StudentCrud` is the screen's state machine; alerts and confirmations go
//!   through a `Notifier`, and `created_by` comes from a `CurrentUser`.

pub mod client;
pub mod crud;
pub mod error;
pub mod form;
pub mod http;
pub mod identity;
pub mod list;
pub mod notify;
pub mod render;
pub mod source;
pub mod types;

pub use client::StudentClient;
pub use crud::{
    DeleteOutcome, Mode, PendingDelete, PendingSubmit, Phase, StudentCrud, SubmitOutcome,
};
pub use error::{ApiError, FormError};
pub use form::{Field, FormState};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use identity::{CurrentUser, FixedUser};
pub use list::{CachedList, EagerList, ListState, StudentList};
pub use notify::{ChannelNotifier, Notice, Notifier};
pub use source::{HttpStudentSource, StudentSource};
pub use types::{Student, StudentId, StudentInput};
