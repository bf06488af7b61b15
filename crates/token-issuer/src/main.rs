use std::process::ExitCode;
use token_issuer::{generate_jwt, observability};
use tracing::{debug, info};

fn main() -> ExitCode {
    if let Err(e) = observability::init_tracing() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    info!("Generating governance bot token");

    match generate_jwt() {
        Ok(token) => {
            println!("Generated JWT:");
            println!("{}", token);
            ExitCode::SUCCESS
        }
        Err(e) => {
            // The `Error:` line is the one user-facing report.
            debug!(step = e.step(), "Token generation aborted");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
