//! Command-line and environment configuration.

use clap::{Parser, ValueEnum};

/// How the student list is kept fresh after a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Refresh {
    /// Re-pull the list right after every successful change.
    Eager,
    /// Mark the list stale and re-pull on the next display.
    Cached,
}

/// Student Management System - terminal client
#[derive(Parser, Debug)]
#[command(name = "student-cli", version, about = "Manage students through a REST API")]
pub struct Config {
    /// Base URL of the API; `/students` is appended
    #[arg(long, env = "STUDENTS_API_URL", default_value = "http://localhost:3000")]
    pub api_url: String,

    /// Id stamped into `created_by` on every write
    #[arg(long, env = "STUDENTS_USER_ID", default_value_t = 1)]
    pub user_id: i64,

    /// List refresh strategy
    #[arg(long, env = "STUDENTS_REFRESH", value_enum, default_value_t = Refresh::Cached)]
    pub refresh: Refresh,

    /// Answer "yes" to delete confirmations
    #[arg(short, long)]
    pub yes: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "student-cli",
            "--api-url",
            "http://api.test/",
            "--user-id",
            "9",
            "--refresh",
            "eager",
            "--yes",
        ])
        .unwrap();
        assert_eq!(config.api_url, "http://api.test/");
        assert_eq!(config.user_id, 9);
        assert_eq!(config.refresh, Refresh::Eager);
        assert!(config.yes);
    }

    #[test]
    fn unknown_refresh_is_rejected() {
        assert!(Config::try_parse_from(["student-cli", "--refresh", "never"]).is_err());
    }
}
