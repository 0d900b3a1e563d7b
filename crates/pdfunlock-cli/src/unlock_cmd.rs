use std::path::{Path, PathBuf};

use pdfunlock::{SessionReport, UnlockSession};

use crate::cli::OutputFormat;
use crate::prompt::TerminalPrompt;
use crate::shared::open_store;

pub struct UnlockOptions<'a> {
    pub passwords: &'a [String],
    pub no_prompt: bool,
    pub show_password: bool,
    pub format: &'a OutputFormat,
}

pub fn run(store: Option<&Path>, files: &[PathBuf], opts: UnlockOptions<'_>) -> Result<(), i32> {
    let store = open_store(store)?;
    let mut session = UnlockSession::new(store);
    for password in opts.passwords {
        session.add_session_password(password.as_str());
    }

    let mut prompt = TerminalPrompt::stdio(opts.show_password, !opts.no_prompt);
    let report = session.process_batch(files.iter().cloned(), &mut prompt);

    match opts.format {
        OutputFormat::Text => print_text(report),
        OutputFormat::Json => print_json(report)?,
    }

    match exit_code(report) {
        0 => Ok(()),
        code => Err(code),
    }
}

fn print_text(report: &SessionReport) {
    if !report.is_empty() {
        println!("{report}");
    }
}

fn print_json(report: &SessionReport) -> Result<(), i32> {
    let json = serde_json::to_string_pretty(report).map_err(|e| {
        eprintln!("Error: failed to encode summary: {e}");
        1
    })?;
    println!("{json}");
    Ok(())
}

/// 1 if any file hit an error, 2 if any file stayed locked, 0 otherwise.
pub fn exit_code(report: &SessionReport) -> i32 {
    if report.has_failures() {
        1
    } else if !report.wrong_password.is_empty() {
        2
    } else {
        0
    }
}
