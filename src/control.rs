use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use tracing::debug;

/// Shortest accepted integration window, seconds.
pub const MIN_INTEGRATION_WINDOW: f64 = 0.05;

/// A parsed control intent. Produced only by `parse_command`; the
/// acquisition loop is the sole consumer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    SetIntegrationWindow(f64),
    SetCoincidenceWindow(u32),
    Quit,
}

/// Classify one control line. Total: malformed input yields no command and
/// no diagnostic.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let keyword = tokens.first()?.to_ascii_lowercase();

    match keyword.as_str() {
        "integration_window" if tokens.len() == 2 => {
            let seconds = tokens[1].parse::<f64>().ok()?;
            if seconds.is_finite() && seconds > 0.0 {
                Some(Command::SetIntegrationWindow(
                    seconds.max(MIN_INTEGRATION_WINDOW),
                ))
            } else {
                None
            }
        }
        "coincidence_window" if tokens.len() == 2 => {
            parse_prefixed_u32(tokens[1]).map(Command::SetCoincidenceWindow)
        }
        "quit" => Some(Command::Quit),
        _ => None,
    }
}

// Accepts 0x/0o prefixes alongside plain decimal.
fn parse_prefixed_u32(raw: &str) -> Option<u32> {
    if let Some(hex) = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        return u32::from_str_radix(hex, 16).ok();
    }
    if let Some(oct) = raw.strip_prefix("0o").or_else(|| raw.strip_prefix("0O")) {
        return u32::from_str_radix(oct, 8).ok();
    }
    raw.parse::<u32>().ok()
}

/// Spawn the control-channel reader: parses each stdin line and forwards
/// commands onto the returned queue. The reader stops at end of input or
/// after forwarding `quit`; the acquisition loop keeps running either way.
pub fn spawn_control_reader() -> (Receiver<Command>, JoinHandle<()>) {
    let (tx, rx) = mpsc::channel();
    let handle = thread::spawn(move || control_reader_loop(io::stdin().lock(), tx));
    (rx, handle)
}

fn control_reader_loop<R: BufRead>(input: R, tx: Sender<Command>) {
    for line in input.lines() {
        let Ok(line) = line else { break };
        let Some(command) = parse_command(&line) else {
            continue;
        };
        let is_quit = command == Command::Quit;
        if tx.send(command).is_err() {
            break;
        }
        if is_quit {
            break;
        }
    }
    debug!("control channel reader finished");
}
