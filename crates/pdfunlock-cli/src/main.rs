mod cli;
mod passwords_cmd;
mod prompt;
mod shared;
mod unlock_cmd;

use clap::Parser;
use cli::{Cli, Commands, PasswordsAction};

fn main() {
    let cli = Cli::parse();
    shared::init_logging(cli.verbose);
    let store = cli.store.as_deref();

    let result = match cli.command {
        Commands::Unlock {
            ref files,
            ref passwords,
            no_prompt,
            show_password,
            ref format,
        } => unlock_cmd::run(
            store,
            files,
            unlock_cmd::UnlockOptions {
                passwords,
                no_prompt,
                show_password,
                format,
            },
        ),
        Commands::Passwords { ref action } => match action {
            PasswordsAction::List { reveal, format } => {
                passwords_cmd::list(store, *reveal, format)
            }
            PasswordsAction::Forget { number } => passwords_cmd::forget(store, *number),
        },
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
