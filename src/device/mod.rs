// Device capability layer: one trait the acquisition loop drives, two
// implementations behind it (real counter hardware, sample replay).
pub mod fpga;
pub mod replay;
mod samples;

use std::thread;
use std::time::Duration;

use thiserror::Error;

/// Number of counter channels exposed by the instrument.
pub const CHANNELS: usize = 16;

// Pause after disabling counting so the result registers are stable when read.
const SETTLE_DELAY: Duration = Duration::from_millis(100);

/// One completed acquisition as read from the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    pub counts: Vec<u32>,
    pub cycles: u64,
}

#[derive(Debug, Error)]
pub enum DeviceError {
    /// The counter reported nonzero counts or cycles immediately after a
    /// clear. The device state is unknown and the run cannot continue.
    #[error("clear/stop verification failed: counts={counts:?} cycles={cycles}")]
    ClearVerificationFailed { counts: Vec<u32>, cycles: u64 },
    #[error("register access failed: {0}")]
    Bus(#[from] std::io::Error),
    #[error("unexpected reply from device: {0}")]
    Protocol(String),
}

pub type DeviceResult<T> = Result<T, DeviceError>;

/// Writable control registers on the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlRegister {
    Enable,
    Clear,
    CoincidenceWindow,
}

/// Register-level driver contract. The rest of the crate never touches the
/// transport directly; real hardware sits behind this trait, as do the
/// scripted fakes in tests.
pub trait RegisterBus {
    fn write_control(&mut self, register: ControlRegister, value: u64) -> DeviceResult<()>;
    fn read_counts(&mut self) -> DeviceResult<Vec<u32>>;
    fn read_cycles(&mut self) -> DeviceResult<u64>;
    fn reset(&mut self) -> DeviceResult<()>;
    fn run(&mut self) -> DeviceResult<()>;
}

/// Uniform capability set the acquisition loop is written against. The loop
/// never learns which variant it is driving.
pub trait CounterDevice {
    fn reset(&mut self) -> DeviceResult<()>;
    fn run(&mut self) -> DeviceResult<()>;
    /// Clear the counters, program the coincidence window, verify the clear
    /// took effect, then enable counting.
    fn start_measurement(&mut self, coincidence_window: u32) -> DeviceResult<()>;
    /// Disable counting and read back the accumulated counts and cycles.
    fn finish_measurement(&mut self) -> DeviceResult<Measurement>;
}

/// Real-hardware variant: drives the counter through a `RegisterBus`.
pub struct HardwareCounter<B: RegisterBus> {
    bus: B,
}

impl<B: RegisterBus> HardwareCounter<B> {
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    fn read_raw(&mut self) -> DeviceResult<Measurement> {
        let counts = self.bus.read_counts()?;
        let cycles = self.bus.read_cycles()?;
        Ok(Measurement { counts, cycles })
    }
}

impl<B: RegisterBus> CounterDevice for HardwareCounter<B> {
    fn reset(&mut self) -> DeviceResult<()> {
        self.bus.reset()
    }

    fn run(&mut self) -> DeviceResult<()> {
        self.bus.run()
    }

    fn start_measurement(&mut self, coincidence_window: u32) -> DeviceResult<()> {
        self.bus.write_control(ControlRegister::Enable, 0)?;
        self.bus.write_control(ControlRegister::Clear, 1)?;
        self.bus
            .write_control(ControlRegister::CoincidenceWindow, u64::from(coincidence_window))?;

        let cleared = self.read_raw()?;
        if cleared.cycles != 0 || cleared.counts.iter().any(|&count| count != 0) {
            return Err(DeviceError::ClearVerificationFailed {
                counts: cleared.counts,
                cycles: cleared.cycles,
            });
        }

        self.bus.write_control(ControlRegister::Clear, 0)?;
        self.bus.write_control(ControlRegister::Enable, 1)
    }

    fn finish_measurement(&mut self) -> DeviceResult<Measurement> {
        self.bus.write_control(ControlRegister::Enable, 0)?;
        thread::sleep(SETTLE_DELAY);
        self.read_raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    #[derive(Default)]
    struct FakeBus {
        writes: Vec<(ControlRegister, u64)>,
        counts: VecDeque<Vec<u32>>,
        cycles: VecDeque<u64>,
        resets: usize,
        runs: usize,
    }

    impl RegisterBus for FakeBus {
        fn write_control(&mut self, register: ControlRegister, value: u64) -> DeviceResult<()> {
            self.writes.push((register, value));
            Ok(())
        }

        fn read_counts(&mut self) -> DeviceResult<Vec<u32>> {
            Ok(self.counts.pop_front().unwrap_or_else(|| vec![0; CHANNELS]))
        }

        fn read_cycles(&mut self) -> DeviceResult<u64> {
            Ok(self.cycles.pop_front().unwrap_or(0))
        }

        fn reset(&mut self) -> DeviceResult<()> {
            self.resets += 1;
            Ok(())
        }

        fn run(&mut self) -> DeviceResult<()> {
            self.runs += 1;
            Ok(())
        }
    }

    #[test]
    fn start_measurement_programs_window_then_arms() {
        let mut device = HardwareCounter::new(FakeBus::default());
        device.start_measurement(500).expect("clean start");
        assert_eq!(
            device.bus.writes,
            vec![
                (ControlRegister::Enable, 0),
                (ControlRegister::Clear, 1),
                (ControlRegister::CoincidenceWindow, 500),
                (ControlRegister::Clear, 0),
                (ControlRegister::Enable, 1),
            ]
        );
    }

    #[test]
    fn start_measurement_rejects_dirty_counts() {
        let mut bus = FakeBus::default();
        let mut dirty = vec![0; CHANNELS];
        dirty[3] = 7;
        bus.counts.push_back(dirty);
        let mut device = HardwareCounter::new(bus);

        let err = device.start_measurement(50_000).expect_err("dirty clear");
        assert!(matches!(err, DeviceError::ClearVerificationFailed { .. }));
        // The device must stay disarmed after a failed verification.
        assert!(!device.bus.writes.contains(&(ControlRegister::Enable, 1)));
    }

    #[test]
    fn start_measurement_rejects_dirty_cycles() {
        let mut bus = FakeBus::default();
        bus.cycles.push_back(42);
        let mut device = HardwareCounter::new(bus);

        let err = device.start_measurement(50_000).expect_err("dirty clear");
        assert!(matches!(
            err,
            DeviceError::ClearVerificationFailed { cycles: 42, .. }
        ));
    }

    #[test]
    fn finish_measurement_disables_before_reading() {
        let mut bus = FakeBus::default();
        let mut counts = vec![0; CHANNELS];
        counts[1] = 418;
        bus.counts.push_back(counts.clone());
        bus.cycles.push_back(280_571_200);
        let mut device = HardwareCounter::new(bus);

        let measurement = device.finish_measurement().expect("readout");
        assert_eq!(device.bus.writes, vec![(ControlRegister::Enable, 0)]);
        assert_eq!(measurement, Measurement { counts, cycles: 280_571_200 });
    }

    #[test]
    fn reset_and_run_pass_through_to_the_bus() {
        let mut device = HardwareCounter::new(FakeBus::default());
        device.reset().expect("reset");
        device.run().expect("run");
        assert_eq!(device.bus.resets, 1);
        assert_eq!(device.bus.runs, 1);
    }
}
