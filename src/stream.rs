use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Receiver;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{info, warn};

use crate::args::Cli;
use crate::control::Command;
use crate::device::fpga::SerialBus;
use crate::device::replay::ReplayCounter;
use crate::device::{CounterDevice, HardwareCounter};
use crate::record::{MeasurementRecord, RecordEmitter};

/// Live acquisition parameters. Owned and mutated only by the acquisition
/// loop; the control channel just enqueues intents.
#[derive(Debug, Clone, PartialEq)]
pub struct AcquisitionConfig {
    /// Seconds each acquisition accumulates before readout.
    pub integration_window: f64,
    /// Coincidence-gate width register value, clock cycles.
    pub coincidence_window: u32,
}

impl Default for AcquisitionConfig {
    fn default() -> Self {
        Self {
            integration_window: 1.0,
            coincidence_window: 50_000,
        }
    }
}

impl AcquisitionConfig {
    fn apply(&mut self, command: Command) {
        match command {
            Command::SetIntegrationWindow(seconds) => self.integration_window = seconds,
            Command::SetCoincidenceWindow(cycles) => self.coincidence_window = cycles,
            Command::Quit => {}
        }
    }
}

// Empty the pending command queue without blocking, applying commands in
// FIFO order. Returns true when a Quit was drained; the rest of the batch
// is discarded in that case.
fn drain_commands(queue: &Receiver<Command>, config: &mut AcquisitionConfig) -> bool {
    while let Ok(command) = queue.try_recv() {
        if command == Command::Quit {
            return true;
        }
        config.apply(command);
    }
    false
}

/// One-shot startup decision between real hardware and sample replay. A
/// failed probe is a diagnostic, never a crash: the stream continues from
/// the reference dataset.
pub fn select_device(cli: &Cli) -> Box<dyn CounterDevice> {
    if cli.mock {
        info!("replay mode forced by --mock");
        return Box::new(ReplayCounter::new());
    }

    let timeout = Duration::from_millis(cli.read_timeout_ms);
    if let Err(err) = SerialBus::probe(&cli.port, cli.baud, timeout) {
        warn!("hardware open failed: {err:#}; falling back to replay mode");
        return Box::new(ReplayCounter::new());
    }

    match SerialBus::open(&cli.port, cli.baud, timeout) {
        Ok(bus) => {
            info!(port = %cli.port, baud = cli.baud, "counter hardware session open");
            Box::new(HardwareCounter::new(bus))
        }
        Err(err) => {
            warn!("hardware open failed: {err:#}; falling back to replay mode");
            Box::new(ReplayCounter::new())
        }
    }
}

/// Drive the acquisition cycle until a `quit` command arrives or the run
/// flag clears. Per iteration: drain the command queue, start a
/// measurement, hold for the integration window, read back, emit one
/// record. Configuration changes take effect at the next iteration, never
/// mid-cycle.
pub fn run_acquisition<W: Write>(
    device: &mut dyn CounterDevice,
    commands: &Receiver<Command>,
    emitter: &mut RecordEmitter<W>,
    running: &AtomicBool,
) -> Result<()> {
    let mut config = AcquisitionConfig::default();
    device.reset().context("device reset failed")?;
    device.run().context("starting device failed")?;

    while running.load(Ordering::SeqCst) {
        if drain_commands(commands, &mut config) {
            info!("quit received; stopping acquisition");
            break;
        }

        device
            .start_measurement(config.coincidence_window)
            .context("starting measurement failed")?;
        thread::sleep(Duration::from_secs_f64(config.integration_window));
        let measurement = device
            .finish_measurement()
            .context("reading measurement failed")?;

        let record = MeasurementRecord::new(measurement, Utc::now());
        emitter.emit(&record)?;
    }

    Ok(())
}
