//! Terminal stand-in for the password dialog.
//!
//! Stored passwords are listed abbreviated and numbered. The user can pick
//! one, delete one with `d<N>`, press Enter to type a new password, or `q`
//! to give up on the file. Prompts go to stderr so stdout stays clean for the
//! summary.

use std::io::{self, BufRead, IsTerminal, Stderr, StdinLock, Write};
use std::path::Path;

use pdfunlock::{
    CandidateList, PasswordEntry, PasswordPrompt, PasswordRequest, PromptReply, UnlockError,
    abbreviate,
};

/// What the user picked from the stored-password menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// Use stored password at this 0-based index.
    Stored(usize),
    /// Delete stored password at this 0-based index.
    Forget(usize),
    /// Type a new password.
    Type,
    /// Give up on the file.
    Quit,
    /// Unrecognized input.
    Invalid,
}

/// Parse one line of menu input against a list of `count` stored passwords.
pub fn parse_choice(line: &str, count: usize) -> Choice {
    let line = line.trim();
    if line.is_empty() {
        return Choice::Type;
    }
    if line.eq_ignore_ascii_case("q") {
        return Choice::Quit;
    }
    let (forget, digits) = match line.strip_prefix(['d', 'D']) {
        Some(rest) => (true, rest.trim()),
        None => (false, line),
    };
    match digits.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => {
            if forget {
                Choice::Forget(n - 1)
            } else {
                Choice::Stored(n - 1)
            }
        }
        _ => Choice::Invalid,
    }
}

/// Interprets a yes/no answer. Blank input gives `default`.
fn parse_yes_no(line: &str, default: bool) -> bool {
    match line.trim().to_ascii_lowercase().as_str() {
        "" => default,
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    }
}

/// [`PasswordPrompt`] that talks to the user over a line-based terminal.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
    /// Read passwords without echo through `rpassword`.
    masked: bool,
    /// When `false` every question is answered with "cancel".
    interactive: bool,
}

impl TerminalPrompt<StdinLock<'static>, Stderr> {
    /// Prompt on stdin/stderr. Passwords are masked when stdin is a terminal
    /// unless `show_password` is set.
    pub fn stdio(show_password: bool, interactive: bool) -> Self {
        let stdin = io::stdin();
        let masked = !show_password && stdin.is_terminal();
        Self::new(stdin.lock(), io::stderr(), masked, interactive)
    }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W, masked: bool, interactive: bool) -> Self {
        Self {
            input,
            output,
            masked,
            interactive,
        }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }

    /// Read one line. `None` on EOF or a read error.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }

    fn ask(&mut self, question: &str) -> Option<String> {
        let _ = write!(self.output, "{question}");
        let _ = self.output.flush();
        self.read_line()
    }

    fn read_password(&mut self) -> Option<String> {
        let password = if self.masked {
            let _ = self.output.flush();
            rpassword::prompt_password("Password: ").ok()
        } else {
            self.ask("Password: ")
        };
        password.filter(|p| !p.is_empty())
    }

    fn show_menu(&mut self, stored: &CandidateList) {
        let _ = writeln!(self.output, "Stored passwords:");
        for (i, candidate) in stored.iter().enumerate() {
            let _ = writeln!(self.output, "  {}) {}", i + 1, abbreviate(&candidate.password));
        }
    }

    fn type_new(&mut self) -> PromptReply {
        let Some(password) = self.read_password() else {
            return PromptReply::Cancel;
        };
        let memorize = self
            .ask("Memorize this password? [y/N] ")
            .is_some_and(|answer| parse_yes_no(&answer, false));
        PromptReply::Submit(PasswordEntry::new(password, memorize))
    }
}

impl<R: BufRead, W: Write> PasswordPrompt for TerminalPrompt<R, W> {
    fn ask_password(&mut self, request: &PasswordRequest, stored: &CandidateList) -> PromptReply {
        if !self.interactive {
            return PromptReply::Cancel;
        }
        let _ = writeln!(self.output, "{} is password protected.", request.path().display());
        if stored.is_empty() {
            return self.type_new();
        }

        self.show_menu(stored);
        loop {
            let Some(line) = self.ask("Number to use, d<N> to delete, Enter for new, q to skip: ")
            else {
                return PromptReply::Cancel;
            };
            match parse_choice(&line, stored.len()) {
                Choice::Stored(i) => {
                    if let Some(candidate) = stored.get(i) {
                        return PromptReply::Submit(PasswordEntry::new(
                            candidate.password.clone(),
                            candidate.persisted,
                        ));
                    }
                }
                Choice::Forget(i) => {
                    if let Some(candidate) = stored.get(i) {
                        return PromptReply::Forget(candidate.password.clone());
                    }
                }
                Choice::Type => return self.type_new(),
                Choice::Quit => return PromptReply::Cancel,
                Choice::Invalid => {
                    let _ = writeln!(self.output, "Unrecognized choice: {}", line.trim());
                }
            }
        }
    }

    fn confirm_retry(&mut self, path: &Path) -> bool {
        if !self.interactive {
            return false;
        }
        let _ = writeln!(self.output, "Wrong password for {}.", path.display());
        self.ask("Retry? [Y/n] ")
            .is_some_and(|answer| parse_yes_no(&answer, true))
    }

    fn report_error(&mut self, path: &Path, error: &UnlockError) {
        let _ = writeln!(self.output, "Error: {}: {error}", path.display());
    }
}
