use crate::model::{LinkedApproach, NearEarthObject};
use std::path::PathBuf;

pub mod export;
pub mod inspect;
pub mod query;

/// How a user names an object: by primary designation or by IAU name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NeoSelector {
    Designation(String),
    Name(String),
}

impl std::fmt::Display for NeoSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NeoSelector::Designation(d) => write!(f, "designation {}", d),
            NeoSelector::Name(n) => write!(f, "name \"{}\"", n),
        }
    }
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Outcome of a command. Borrows from the database it ran against.
#[derive(Debug, Default)]
pub struct CmdResult<'db> {
    pub neo: Option<&'db NearEarthObject>,
    pub approaches: Vec<LinkedApproach<'db>>,
    pub written: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl<'db> CmdResult<'db> {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_neo(mut self, neo: &'db NearEarthObject) -> Self {
        self.neo = Some(neo);
        self
    }

    pub fn with_approaches(mut self, approaches: Vec<LinkedApproach<'db>>) -> Self {
        self.approaches = approaches;
        self
    }

    pub fn with_written(mut self, path: PathBuf) -> Self {
        self.written = Some(path);
        self
    }
}
