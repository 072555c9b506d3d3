use rand::rngs::ThreadRng;
use rand_distr::{Distribution, Poisson};

use super::samples::REFERENCE_PACKETS;
use super::{CounterDevice, DeviceResult, Measurement};

// Channel means at or below this pass through without jitter.
const JITTER_THRESHOLD: f64 = 20.0;

/// Infinite round-robin replay of the reference dataset. Busy channels get
/// a Poisson draw around the recorded mean to model shot noise; quiet
/// channels and the cycle counter pass through unchanged.
pub struct SampleReplay {
    index: usize,
    jitter: bool,
    rng: ThreadRng,
}

impl SampleReplay {
    pub fn new() -> Self {
        Self::with_jitter(true)
    }

    pub fn with_jitter(jitter: bool) -> Self {
        Self {
            index: 0,
            jitter,
            rng: rand::thread_rng(),
        }
    }

    /// Next packet in dataset order, wrapping at the end. Never blocks.
    pub fn next_packet(&mut self) -> Measurement {
        let (counts, cycles) = REFERENCE_PACKETS[self.index];
        self.index = (self.index + 1) % REFERENCE_PACKETS.len();
        let counts = counts.iter().map(|&mean| self.draw(mean)).collect();
        Measurement { counts, cycles }
    }

    fn draw(&mut self, mean: u32) -> u32 {
        if !self.jitter || f64::from(mean) <= JITTER_THRESHOLD {
            return mean;
        }
        match Poisson::new(f64::from(mean)) {
            Ok(poisson) => poisson.sample(&mut self.rng) as u32,
            Err(_) => mean,
        }
    }
}

impl Default for SampleReplay {
    fn default() -> Self {
        Self::new()
    }
}

/// Mock variant of the counter: register operations are bookkeeping only,
/// the data comes from `SampleReplay`. One packet is drawn per
/// start/finish pair so the acquisition loop keeps a single shape for both
/// device variants.
pub struct ReplayCounter {
    replay: SampleReplay,
    pending: Option<Measurement>,
}

impl ReplayCounter {
    pub fn new() -> Self {
        Self::with_replay(SampleReplay::new())
    }

    pub fn with_replay(replay: SampleReplay) -> Self {
        Self {
            replay,
            pending: None,
        }
    }
}

impl Default for ReplayCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterDevice for ReplayCounter {
    fn reset(&mut self) -> DeviceResult<()> {
        Ok(())
    }

    fn run(&mut self) -> DeviceResult<()> {
        Ok(())
    }

    fn start_measurement(&mut self, _coincidence_window: u32) -> DeviceResult<()> {
        // The window register has no replay counterpart; the draw happens
        // here so changes still take effect on cycle boundaries.
        self.pending = Some(self.replay.next_packet());
        Ok(())
    }

    fn finish_measurement(&mut self) -> DeviceResult<Measurement> {
        let measurement = match self.pending.take() {
            Some(pending) => pending,
            None => self.replay.next_packet(),
        };
        Ok(measurement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::CHANNELS;

    #[test]
    fn replay_without_jitter_repeats_the_dataset_in_order() {
        let mut replay = SampleReplay::with_jitter(false);
        let rounds = REFERENCE_PACKETS.len() * 2;
        for i in 0..rounds {
            let (counts, cycles) = REFERENCE_PACKETS[i % REFERENCE_PACKETS.len()];
            let packet = replay.next_packet();
            assert_eq!(packet.counts, counts.to_vec(), "packet {i}");
            assert_eq!(packet.cycles, cycles, "packet {i}");
        }
    }

    #[test]
    fn jitter_leaves_quiet_channels_and_cycles_untouched() {
        let mut replay = SampleReplay::new();
        for _ in 0..REFERENCE_PACKETS.len() {
            let reference = REFERENCE_PACKETS[replay.index];
            let packet = replay.next_packet();
            assert_eq!(packet.counts.len(), CHANNELS);
            assert_eq!(packet.cycles, reference.1);
            for (drawn, &mean) in packet.counts.iter().zip(reference.0.iter()) {
                if f64::from(mean) <= JITTER_THRESHOLD {
                    assert_eq!(*drawn, mean);
                }
            }
        }
    }

    #[test]
    fn replay_counter_hands_one_packet_per_cycle() {
        let mut device = ReplayCounter::with_replay(SampleReplay::with_jitter(false));
        device.start_measurement(50_000).expect("start");
        let first = device.finish_measurement().expect("finish");
        assert_eq!(first.counts, REFERENCE_PACKETS[0].0.to_vec());

        device.start_measurement(50_000).expect("start");
        let second = device.finish_measurement().expect("finish");
        assert_eq!(second.counts, REFERENCE_PACKETS[1].0.to_vec());
    }

    #[test]
    fn finish_without_start_still_produces_data() {
        let mut device = ReplayCounter::with_replay(SampleReplay::with_jitter(false));
        let packet = device.finish_measurement().expect("finish");
        assert_eq!(packet.counts, REFERENCE_PACKETS[0].0.to_vec());
    }
}
