//! Ctrl+C handling.
//!
//! Prompts block the calling thread, so cancellation cannot be polled between
//! steps. Instead a listener task ends the process on SIGINT with the Unix
//! standard exit code. Every remote operation is idempotent, so re-running the
//! quickstart resumes where an interrupted run stopped.

use crate::error::ExitCode;

/// Print standard cancellation message to stderr.
pub fn print_cancelled_message() {
    eprintln!("^C\nOperation cancelled by user");
}

/// Spawn the listener. Must be called from inside the tokio runtime.
pub fn install_interrupt_handler() {
    tokio::spawn(async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        print_cancelled_message();
        std::process::exit(ExitCode::Interrupted.as_i32());
    });
}
