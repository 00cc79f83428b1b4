//! Ctrl+C handling for the interactive session
//!
//! The questionnaire itself is synchronous. A small current-thread tokio
//! runtime on a background thread waits for the interrupt signal, prints a
//! goodbye line and ends the process with status 0 so no partial result is
//! ever shown.

use colored::Colorize;
use std::io;
use std::thread;

pub const CANCEL_MESSAGE: &str = "Test cancelled. Goodbye!";

/// Spawn the listener thread. Call once, before the first prompt.
///
/// The signal is registered before this returns, so an interrupt that
/// arrives while the first question is on screen is always caught.
pub fn install_interrupt_handler() -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut interrupts = {
        let _guard = runtime.enter();
        listen_for_interrupt()?
    };

    thread::Builder::new()
        .name("interrupt-listener".to_string())
        .spawn(move || {
            runtime.block_on(async {
                if interrupts.recv().await.is_some() {
                    eprintln!("\n\n{}", CANCEL_MESSAGE.yellow());
                    std::process::exit(0);
                }
            });
        })?;

    Ok(())
}

#[cfg(unix)]
fn listen_for_interrupt() -> io::Result<tokio::signal::unix::Signal> {
    use tokio::signal::unix::{signal, SignalKind};
    signal(SignalKind::interrupt())
}

#[cfg(windows)]
fn listen_for_interrupt() -> io::Result<tokio::signal::windows::CtrlC> {
    tokio::signal::windows::ctrl_c()
}
