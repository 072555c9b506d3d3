use std::io::{BufRead, BufReader, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use serialport::SerialPort;

use super::{CHANNELS, ControlRegister, DeviceError, DeviceResult, RegisterBus};

/// Register bus over the counter's serial command interface. Writes are
/// single command lines (`ENAB 1`), reads are `?`-suffixed queries answered
/// with one reply line.
pub struct SerialBus {
    port: BufReader<Box<dyn SerialPort>>,
}

impl SerialBus {
    pub fn open(port_name: &str, baud: u32, timeout: Duration) -> Result<Self> {
        let port = serialport::new(port_name, baud)
            .timeout(timeout)
            .open()
            .with_context(|| format!("opening counter port failed: {port_name} @ {baud}"))?;
        Ok(Self {
            port: BufReader::new(port),
        })
    }

    /// Startup probe: open the port and release it immediately. The mode
    /// selector uses this to decide hardware vs. replay before committing
    /// to a session.
    pub fn probe(port_name: &str, baud: u32, timeout: Duration) -> Result<()> {
        let _session = Self::open(port_name, baud, timeout)?;
        Ok(())
    }

    fn command(&mut self, line: &str) -> DeviceResult<()> {
        let writer = self.port.get_mut();
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    fn query(&mut self, line: &str) -> DeviceResult<String> {
        self.command(line)?;
        let mut reply = String::new();
        self.port.read_line(&mut reply)?;
        Ok(reply.trim().to_string())
    }
}

impl RegisterBus for SerialBus {
    fn write_control(&mut self, register: ControlRegister, value: u64) -> DeviceResult<()> {
        let mnemonic = match register {
            ControlRegister::Enable => "ENAB",
            ControlRegister::Clear => "CLR",
            ControlRegister::CoincidenceWindow => "CWIN",
        };
        self.command(&format!("{mnemonic} {value}"))
    }

    fn read_counts(&mut self) -> DeviceResult<Vec<u32>> {
        let reply = self.query("CNT?")?;
        let counts = reply
            .split(',')
            .map(|field| field.trim().parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| DeviceError::Protocol(format!("bad counts reply: {reply}")))?;
        if counts.len() != CHANNELS {
            return Err(DeviceError::Protocol(format!(
                "expected {CHANNELS} channels, got {}",
                counts.len()
            )));
        }
        Ok(counts)
    }

    fn read_cycles(&mut self) -> DeviceResult<u64> {
        let reply = self.query("CYC?")?;
        reply
            .parse::<u64>()
            .map_err(|_| DeviceError::Protocol(format!("bad cycles reply: {reply}")))
    }

    fn reset(&mut self) -> DeviceResult<()> {
        self.command("RST")
    }

    fn run(&mut self) -> DeviceResult<()> {
        self.command("RUN")
    }
}
