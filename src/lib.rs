pub mod error;
pub mod config;
pub mod entry;
pub mod display;
pub mod providers;
pub mod client;
use serde::{Deserialize, Serialize};

pub use client::AiBackend;
pub use display::DisplaySink;
pub use entry::{Entry, MatchingType, SpecialFunc, SpecialFuncArgs};

/// Install the env_logger backend for the `log` macros.
/// Safe to call more than once.
pub fn init_logging()
{   let _ = env_logger::try_init();
}

/// AI BACKEND API INTERFACE:

// ===== Query =====

/// Outcome of one query. `history` is the caller's transcript
/// after the call, whether or not `result` is an error.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryReply
{   pub history: Vec<Message>
  , pub result: Result<(), crate::error::Error>
}
pub type QueryReplySender
  = tokio::sync::mpsc::UnboundedSender<QueryReply>;
pub type DisplaySender
  = tokio::sync::mpsc::UnboundedSender<Vec<Message>>;

pub struct QueryArgs
{   pub provider: String
  , pub query: String
  , pub history: Vec<Message>
  , pub prompt: crate::config::AiPrompt
  , pub display: DisplaySender
  , pub reply: QueryReplySender
}

// ===== SetupData =====

pub type SetupDataReply = Vec<crate::entry::Entry>;
pub type SetupDataReplySender
  = tokio::sync::mpsc::UnboundedSender<SetupDataReply>;

pub struct SetupDataArgs
{   pub reply: SetupDataReplySender
}

// ===== KillProcess =====

pub type KillProcessReply = Result<(), crate::error::Error>;
pub type KillProcessReplySender
  = tokio::sync::mpsc::UnboundedSender<KillProcessReply>;

pub struct KillProcessArgs
{   pub reply: KillProcessReplySender
}

// ===== AiHand (sender side) =====

pub struct AiHand
{   pub query_tx
      : tokio::sync::mpsc::UnboundedSender<QueryArgs>
  , pub setup_data_tx
      : tokio::sync::mpsc::UnboundedSender<SetupDataArgs>
  , pub kill_process_tx
      : tokio::sync::mpsc::UnboundedSender<KillProcessArgs>
}

// ===== AiFoot (receiver side) =====

pub struct AiFoot
{   pub query_rx
      : tokio::sync::mpsc::UnboundedReceiver<QueryArgs>
  , pub setup_data_rx
      : tokio::sync::mpsc::UnboundedReceiver<SetupDataArgs>
  , pub kill_process_rx
      : tokio::sync::mpsc::UnboundedReceiver<KillProcessArgs>
}

/// AI MODULE STRUCTURES:

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role
{   User
  , Assistant
  , System
}

/// One turn of a conversation transcript
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Message
{   pub role: Role
  , pub content: String
}

impl Message
{   pub fn new(role: Role, content: impl Into<String>) -> Self
    {   Message
        {   role
          , content: content.into()
        }
    }

    pub fn user(content: impl Into<String>) -> Self
    {   Message::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self
    {   Message::new(Role::Assistant, content)
    }

    pub fn system(content: impl Into<String>) -> Self
    {   Message::new(Role::System, content)
    }
}
