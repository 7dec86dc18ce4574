pub use error::ProtocolError;
pub use message::{TurnRequest, TurnResponse};

mod error;
mod message;

/// Wire schema version. Bump the path segment when the schema changes shape.
pub const TURN_PATH: &str = "/v1/turn";
pub const RECORD_PATH: &str = "/v1/record";
pub const READY_PATH: &str = "/ready";
