use std::io::Write;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::device::Measurement;

/// One acquisition on the output wire. Field names are the wire format:
/// `{"t": "...", "cycles": N, "counts": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    pub t: String,
    pub cycles: u64,
    pub counts: Vec<u32>,
}

impl MeasurementRecord {
    pub fn new(measurement: Measurement, completed_at: DateTime<Utc>) -> Self {
        Self {
            // Second precision with a trailing Z, matching downstream readers.
            t: completed_at.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            cycles: measurement.cycles,
            counts: measurement.counts,
        }
    }
}

/// Writes records as one JSON object per line, flushing after each so a
/// downstream reader sees every record without buffering delay.
pub struct RecordEmitter<W: Write> {
    out: W,
}

impl<W: Write> RecordEmitter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn emit(&mut self, record: &MeasurementRecord) -> Result<()> {
        let line = serde_json::to_string(record).context("serializing record failed")?;
        writeln!(self.out, "{line}").context("writing record failed")?;
        self.out.flush().context("flushing record stream failed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_record() -> MeasurementRecord {
        let measurement = Measurement {
            counts: vec![0, 418, 567, 0, 46_168, 1, 1, 1, 76_437, 1, 0, 0, 223, 0, 6, 78],
            cycles: 280_571_200,
        };
        let completed_at = Utc.with_ymd_and_hms(2025, 5, 24, 12, 30, 45).unwrap();
        MeasurementRecord::new(measurement, completed_at)
    }

    #[test]
    fn timestamp_is_utc_second_precision_with_z() {
        let record = sample_record();
        assert_eq!(record.t, "2025-05-24T12:30:45Z");
    }

    #[test]
    fn wire_format_round_trips() {
        let record = sample_record();
        let line = serde_json::to_string(&record).unwrap();
        let parsed: MeasurementRecord = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn emitted_line_matches_wire_format() {
        let record = sample_record();
        let mut buffer = Vec::new();
        RecordEmitter::new(&mut buffer).emit(&record).unwrap();

        let line = String::from_utf8(buffer).unwrap();
        assert!(line.ends_with('\n'));
        assert!(line.starts_with(r#"{"t":"2025-05-24T12:30:45Z","cycles":280571200,"counts":[0,418,"#));
    }
}
