//! Terminal implementations of the host collaborators.

use std::io::{self, BufRead, Write};
use std::process::Command;

use switcher::host::{Document, DocumentPresenter, SelectionPrompt};
use switcher::Error as LibError;

/// Prints the companion's path on stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutPresenter;

impl DocumentPresenter for StdoutPresenter {
    fn present(&self, document: &Document) -> switcher::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", document.path().display())?;
        Ok(())
    }
}

/// Runs an external program with the companion's path as last argument
/// and waits for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPresenter {
    program: String,
    args: Vec<String>,
}

impl CommandPresenter {
    /// Parse a whitespace-separated command line such as `code -r`.
    ///
    /// Returns `None` for a blank command line.
    pub fn parse(command_line: &str) -> Option<Self> {
        let mut words = command_line.split_whitespace().map(String::from);
        let program = words.next()?;
        Some(Self {
            program,
            args: words.collect(),
        })
    }
}

impl DocumentPresenter for CommandPresenter {
    fn present(&self, document: &Document) -> switcher::Result<()> {
        log::debug!("running {} {:?} {}", self.program, self.args, document);
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(document.path())
            .status()
            .map_err(|e| LibError::Present {
                path: document.path().to_path_buf(),
                reason: format!("cannot run {}: {e}", self.program),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(LibError::Present {
                path: document.path().to_path_buf(),
                reason: format!("{} exited with {status}", self.program),
            })
        }
    }
}

/// Numbered selection on stderr, answered on stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;

impl SelectionPrompt for TerminalPrompt {
    fn choose(&self, items: &[String]) -> Option<String> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stderr();
        choose_from(items, &mut input, &mut output)
    }
}

/// Show `items` numbered from 1 and read the user's pick.
///
/// An empty line, end of input, a read error or an out-of-range answer
/// dismiss the prompt.
pub fn choose_from<R, W>(items: &[String], input: &mut R, output: &mut W) -> Option<String>
where
    R: BufRead,
    W: Write,
{
    for (i, item) in items.iter().enumerate() {
        writeln!(output, "{:>3}) {item}", i + 1).ok()?;
    }
    write!(output, "Select a file [1-{}, empty to cancel]: ", items.len()).ok()?;
    output.flush().ok()?;

    let mut answer = String::new();
    if input.read_line(&mut answer).ok()? == 0 {
        return None;
    }

    let picked = answer.trim().parse::<usize>().ok()?;
    picked
        .checked_sub(1)
        .and_then(|index| items.get(index))
        .cloned()
}
