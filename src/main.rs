//! stackgen
//!
//! Terminal front-end for the Tech Stack Generator.

use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    match stackgen::run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Don't print if it's an empty error (e.g., from clap usage errors)
            let msg = e.to_string();
            if !msg.is_empty() {
                eprintln!("Error: {e}");
            }

            let code = e.exit_code();
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
