//! Who is making changes. Stamped into `created_by` on every write.

pub trait CurrentUser {
    fn current_user_id(&self) -> i64;
}

/// A user id fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedUser(pub i64);

impl Default for FixedUser {
    fn default() -> Self {
        FixedUser(1)
    }
}

impl CurrentUser for FixedUser {
    fn current_user_id(&self) -> i64 {
        self.0
    }
}
