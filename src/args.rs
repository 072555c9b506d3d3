use clap::Parser;

// CLI surface: the forced-replay switch plus the hardware address. With no
// flags the tool prefers hardware and falls back to replay on failure.
#[derive(Parser, Debug, Clone)]
#[command(name = "ccu-stream", version)]
#[command(about = "Streams coincidence-counter measurements to stdout as JSON lines")]
pub struct Cli {
    /// Force sample-replay mode even if hardware is reachable
    #[arg(long)]
    pub mock: bool,
    #[arg(long, default_value = "/dev/ttyUSB0")]
    pub port: String,
    #[arg(long, default_value_t = 115_200)]
    pub baud: u32,
    #[arg(long, default_value_t = 250)]
    pub read_timeout_ms: u64,
}
