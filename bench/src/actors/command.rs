use std::fmt::{Display, Formatter};

/// Commands understood by the chat server's plain-text interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    Help,
    Time,
    Status,
    Echo(String),
    Quit,
}

impl ChatCommand {
    pub const PALETTE_LEN: u32 = 4;

    /// Command `index` of a worker's cycle through HELP, TIME, STATUS and ECHO.
    pub fn for_message(worker_id: u64, index: u32) -> Self {
        match index % Self::PALETTE_LEN {
            0 => ChatCommand::Help,
            1 => ChatCommand::Time,
            2 => ChatCommand::Status,
            _ => ChatCommand::Echo(format!("Test message {worker_id}-{index}")),
        }
    }

    pub fn to_line(&self) -> String {
        format!("{self}\n")
    }
}

impl Display for ChatCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatCommand::Help => write!(f, "HELP"),
            ChatCommand::Time => write!(f, "TIME"),
            ChatCommand::Status => write!(f, "STATUS"),
            ChatCommand::Echo(text) => write!(f, "ECHO {text}"),
            ChatCommand::Quit => write!(f, "QUIT"),
        }
    }
}
