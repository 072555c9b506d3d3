mod args;
mod control;
mod device;
mod record;
mod signal;
mod stream;

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use args::Cli;
use control::spawn_control_reader;
use record::RecordEmitter;
use signal::install_ctrlc_handler;
use stream::{run_acquisition, select_device};

// Entrypoint: stdout carries only measurement records, every diagnostic
// goes to stderr so the two streams never mix.
fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let running = install_ctrlc_handler()?;

    // The reader thread blocks on stdin for the whole run; it is detached
    // on exit rather than joined.
    let (commands, _reader) = spawn_control_reader();

    let mut device = select_device(&cli);
    let stdout = io::stdout();
    let mut emitter = RecordEmitter::new(stdout.lock());

    run_acquisition(device.as_mut(), &commands, &mut emitter, &running)
}
