use std::path::Path;

use pdfunlock::{PasswordStore, abbreviate};

use crate::cli::OutputFormat;
use crate::shared::open_store;

/// Load the store strictly: a corrupt file is reported instead of read as empty.
fn load(store: &PasswordStore) -> Result<Vec<String>, i32> {
    store.try_load().map_err(|e| {
        eprintln!(
            "Error: cannot read password store {}: {e}",
            store.path().display()
        );
        1
    })
}

pub fn list(store: Option<&Path>, reveal: bool, format: &OutputFormat) -> Result<(), i32> {
    let store = open_store(store)?;
    let passwords = load(&store)?;
    let shown: Vec<String> = passwords
        .iter()
        .map(|p| if reveal { p.clone() } else { abbreviate(p) })
        .collect();

    match format {
        OutputFormat::Text => {
            if shown.is_empty() {
                println!("No stored passwords.");
            }
            for (i, password) in shown.iter().enumerate() {
                println!("{}) {password}", i + 1);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&shown).map_err(|e| {
                eprintln!("Error: failed to encode password list: {e}");
                1
            })?;
            println!("{json}");
        }
    }
    Ok(())
}

pub fn forget(store: Option<&Path>, number: usize) -> Result<(), i32> {
    let store = open_store(store)?;
    let mut passwords = load(&store)?;
    if number == 0 || number > passwords.len() {
        eprintln!(
            "Error: no stored password number {number} ({} stored)",
            passwords.len()
        );
        return Err(1);
    }

    let removed = passwords.remove(number - 1);
    store.try_save(&passwords).map_err(|e| {
        eprintln!(
            "Error: cannot write password store {}: {e}",
            store.path().display()
        );
        1
    })?;
    tracing::info!(password = %abbreviate(&removed), "forgot stored password");
    println!("Forgot password {number}: {}", abbreviate(&removed));
    Ok(())
}
