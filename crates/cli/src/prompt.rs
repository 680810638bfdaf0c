//! Terminal prompting for configuration values and confirmations.

use std::io::{self, IsTerminal, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use notesync_core::{Prompter, parse_yes_no};

use crate::echo::{print_error, print_warning};

/// Asks on stderr and reads answers from stdin.
///
/// Sensitive values are read with the terminal in raw mode so they are not
/// echoed. When stdin is not a terminal they are read as plain lines.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn prompt(&mut self, field: &str, sensitive: bool) -> io::Result<String> {
        eprint!("Enter value for \"{}\": ", field);
        io::stderr().flush()?;

        if sensitive && io::stdin().is_terminal() { read_hidden_line() } else { read_line() }
    }

    fn rejected(&mut self, _field: &str) {
        print_error("Malformed value");
    }
}

/// Ask a yes/no question until it gets a yes or no.
pub fn confirm(question: &str) -> io::Result<bool> {
    loop {
        eprint!("{} (yes/no)?: ", question);
        io::stderr().flush()?;

        match parse_yes_no(&read_line()?) {
            Some(answer) => return Ok(answer),
            None => print_warning("Please answer yes or no"),
        }
    }
}

fn read_line() -> io::Result<String> {
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(line)
}

fn read_hidden_line() -> io::Result<String> {
    terminal::enable_raw_mode()?;
    let result = read_keys();
    terminal::disable_raw_mode()?;
    eprintln!();
    result
}

fn read_keys() -> io::Result<String> {
    let mut value = String::new();
    loop {
        let Event::Key(KeyEvent { code, modifiers, kind, .. }) = event::read()? else {
            continue;
        };
        if kind != KeyEventKind::Press {
            continue;
        }

        match code {
            KeyCode::Enter => return Ok(value),
            KeyCode::Backspace => {
                value.pop();
            }
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                return Err(io::Error::new(io::ErrorKind::Interrupted, "cancelled"));
            }
            KeyCode::Char(c) => value.push(c),
            _ => {}
        }
    }
}
