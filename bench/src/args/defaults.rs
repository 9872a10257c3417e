use nonzero_lit::u32;
use std::num::NonZeroU32;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8081;

pub const DEFAULT_CONNECTIONS: NonZeroU32 = u32!(100);
pub const DEFAULT_MESSAGES_PER_CONNECTION: u32 = 10;
pub const DEFAULT_MESSAGE_DELAY_SECS: f64 = 0.1;

pub const DEFAULT_SUSTAINED_DURATION_SECS: u64 = 60;
pub const DEFAULT_SUSTAINED_RATE: NonZeroU32 = u32!(10);

pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_CONSUME_WELCOME: bool = false;

/// Pause between worker launches in burst mode.
pub const DEFAULT_LAUNCH_STAGGER: Duration = Duration::from_millis(10);

/// Pause between batches in sustained mode.
pub const DEFAULT_BATCH_PAUSE: Duration = Duration::from_millis(500);

pub const DEFAULT_PROBE_PAUSE_MS: u64 = 100;
