//! Line-oriented command loop driving a `StudentCrud`.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use student_core::render::submit_label;
use student_core::{CurrentUser, Field, StudentCrud, StudentId, StudentList, StudentSource};
use tracing::debug;

use crate::terminal::TerminalNotifier;

pub const HELP: &str = "\
commands:
  show                  redraw the screen
  set <field> <value>   edit name, email, phone or age
  submit                add the student, or update the one being edited
  edit <id>             load a listed student into the form
  delete <id>           delete a listed student (asks first)
  clear                 empty the form and leave edit mode
  help                  this text
  quit                  exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show,
    Set(Field, String),
    Submit,
    Edit(StudentId),
    Delete(StudentId),
    Clear,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let id = || {
            rest.parse::<StudentId>()
                .map_err(|_| format!("expected a numeric id, got {rest:?}"))
        };
        match word {
            "" | "show" | "ls" => Ok(Command::Show),
            "set" => {
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                Ok(Command::Set(field.parse()?, value.trim().to_string()))
            }
            "submit" | "save" => Ok(Command::Submit),
            "edit" => Ok(Command::Edit(id()?)),
            "delete" | "rm" => Ok(Command::Delete(id()?)),
            "clear" => Ok(Command::Clear),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(format!("unknown command: {other} (try `help`)")),
        }
    }
}

pub fn run<S, L, R, W, U>(crud: &mut StudentCrud<S, L, TerminalNotifier<R, W>, U>) -> io::Result<()>
where
    S: StudentSource,
    L: StudentList,
    R: BufRead,
    W: Write,
    U: CurrentUser,
{
    crud.mount();
    show(crud)?;
    loop {
        let out = crud.notifier_mut().output();
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if crud.notifier_mut().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(message) => {
                writeln!(crud.notifier_mut().output(), "{message}")?;
                continue;
            }
        };
        debug!(?command, "command");

        match command {
            Command::Show => show(crud)?,
            Command::Set(field, value) => crud.set_field(field, value),
            Command::Submit => {
                if let Ok(pending) = crud.begin_submit() {
                    let label = submit_label(crud.mode(), crud.phase());
                    writeln!(crud.notifier_mut().output(), "{label}")?;
                    crud.finish_submit(pending);
                }
                show(crud)?;
            }
            Command::Edit(id) => {
                if crud.edit_by_id(id) {
                    show(crud)?;
                } else {
                    writeln!(crud.notifier_mut().output(), "no listed student with id {id}")?;
                }
            }
            Command::Delete(id) => {
                if let Ok(pending) = crud.begin_delete(id) {
                    writeln!(crud.notifier_mut().output(), "Deleting...")?;
                    crud.finish_delete(pending);
                }
                show(crud)?;
            }
            Command::Clear => {
                crud.cancel_edit();
                show(crud)?;
            }
            Command::Help => writeln!(crud.notifier_mut().output(), "{HELP}")?,
            Command::Quit => return Ok(()),
        }
    }
}

fn show<S, L, R, W, U>(crud: &mut StudentCrud<S, L, TerminalNotifier<R, W>, U>) -> io::Result<()>
where
    S: StudentSource,
    L: StudentList,
    R: BufRead,
    W: Write,
    U: CurrentUser,
{
    let screen = crud.render();
    let out = crud.notifier_mut().output();
    writeln!(out)?;
    write!(out, "{screen}")?;
    if !screen.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}
