//! Ctrl-C handling: turns an interrupt into cooperative cancellation of the run.

use crate::process::CancellationToken;

/// Install a Ctrl-C handler that cancels the returned token.
///
/// The first interrupt lets the in-flight file finish; the runner then
/// stops before starting the next one.
pub fn setup_shutdown_signal() -> Result<CancellationToken, ctrlc::Error> {
    let token = CancellationToken::new();
    let handler_token = token.clone();

    ctrlc::set_handler(move || {
        if !handler_token.is_cancelled() {
            eprintln!("\nInterrupted, finishing the current file...");
        }
        handler_token.cancel();
    })?;

    Ok(token)
}
