//! JSON event types shared by all commands.

use serde::Serialize;
use serde_json::Value;

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Domain payload (a route, a balance, a pool, ...), fields flattened.
#[derive(Debug, Clone, Serialize)]
pub struct PayloadEvent<'a> {
    pub event: &'a str,
    pub command: &'a str,
    #[serde(flatten)]
    pub data: Value,
}

impl<'a> PayloadEvent<'a> {
    /// `data` must be a JSON object
    pub fn new(event: &'a str, command: &'a str, data: Value) -> Self {
        Self {
            event,
            command,
            data,
        }
    }
}

/// Event emitted when a command completes successfully.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
            count: None,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

/// Event emitted when a command fails.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub code: &'a str,
    pub category: &'static str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(
        command: &'a str,
        code: &'a str,
        category: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            event: "error",
            command,
            code,
            category,
            message: message.into(),
        }
    }
}
