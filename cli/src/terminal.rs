//! Notices printed to the terminal; confirmations read from stdin.

use std::io::{self, BufRead, Write};

use student_core::{Notice, Notifier};
use tracing::warn;

pub struct TerminalNotifier<R, W> {
    input: R,
    output: W,
    assume_yes: bool,
}

impl TerminalNotifier<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio(assume_yes: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), assume_yes)
    }
}

impl<R: BufRead, W: Write> TerminalNotifier<R, W> {
    pub fn new(input: R, output: W, assume_yes: bool) -> Self {
        Self {
            input,
            output,
            assume_yes,
        }
    }

    /// Lines typed at the prompt share the notifier's input.
    pub fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        self.input.read_line(buf)
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }
}

impl<R: BufRead, W: Write> Notifier for TerminalNotifier<R, W> {
    fn notify(&mut self, notice: Notice) {
        let prefix = if notice.is_error() { "!" } else { "*" };
        if let Err(err) = writeln!(self.output, "{prefix} {}", notice.message()) {
            warn!("could not show notice: {err}");
        }
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        if write!(self.output, "{prompt} [y/N] ")
            .and_then(|_| self.output.flush())
            .is_err()
        {
            return false;
        }
        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Err(err) => {
                warn!("could not read confirmation: {err}");
                false
            }
        }
    }
}
