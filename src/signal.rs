use anyhow::{Context, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

// Install Ctrl-C handler and return a shared run flag. The acquisition loop
// polls it at the top of each iteration, so an interrupt stops the stream
// cleanly instead of killing an in-flight measurement mid-write.
pub fn install_ctrlc_handler() -> Result<Arc<AtomicBool>> {
    let running = Arc::new(AtomicBool::new(true));
    let running_for_signal = Arc::clone(&running);
    ctrlc::set_handler(move || {
        running_for_signal.store(false, Ordering::SeqCst);
    })
    .context("installing Ctrl-C handler failed")?;
    Ok(running)
}
