use super::defaults::*;
use clap::{Parser, ValueEnum};
use std::time::Duration;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeScenario {
    /// /help, /join lobby, /help
    Help,
    /// /help, /clear
    Clear,
    /// /help, /quit
    Quit,
}

impl ProbeScenario {
    pub fn commands(&self) -> Vec<String> {
        let commands: &[&str] = match self {
            ProbeScenario::Help => &["/help", "/join lobby", "/help"],
            ProbeScenario::Clear => &["/help", "/clear"],
            ProbeScenario::Quit => &["/help", "/quit"],
        };
        commands.iter().map(|c| c.to_string()).collect()
    }
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Sends chat commands over a single connection and prints the raw responses", long_about = None)]
pub struct ChatProbeArgs {
    /// Chat server host
    #[arg(long, default_value_t = DEFAULT_HOST.to_owned())]
    pub host: String,

    /// Chat server port
    #[arg(long, short = 'p', default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Preset command sequence, used when no --command is given
    #[arg(long, short = 's', value_enum, default_value_t = ProbeScenario::Help)]
    pub scenario: ProbeScenario,

    /// Command to send, may be repeated; overrides --scenario
    #[arg(long = "command", short = 'c')]
    pub commands: Vec<String>,

    /// Pause after each command before reading the response, in milliseconds
    #[arg(long, default_value_t = DEFAULT_PROBE_PAUSE_MS)]
    pub pause_ms: u64,

    /// Timeout in seconds for connecting and for every read
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Do not wait for the welcome line after connecting
    #[arg(long, default_value_t = false)]
    pub no_welcome: bool,
}

impl ChatProbeArgs {
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn commands(&self) -> Vec<String> {
        if self.commands.is_empty() {
            self.scenario.commands()
        } else {
            self.commands.clone()
        }
    }

    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }

    pub fn operation_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
