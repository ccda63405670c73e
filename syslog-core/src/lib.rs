//! Syslog Core Parser
//!
//! Streaming, callback-driven parser for RFC 5424 syslog messages.
//! Accepts input in arbitrarily split chunks, emits each message element as
//! it completes, and never builds a message object unless asked to.
//!
//! # Architecture
//!
//! - **parser.rs** - Message/token state machine, `exec` / `finish` / `reset`
//! - **settings.rs** - `Settings` callback trait and `Flow`
//! - **token.rs** - Byte classes and memchr run scanning
//! - **carry.rs** - Carry buffer for tokens split across chunks
//! - **head.rs** - Head accumulator, `MessageHead` view
//! - **sd.rs** - Structured-data accumulator, `SdParam` view
//! - **span.rs** - Borrowed byte spans handed to callbacks
//! - **priority.rs** - PRI decoding into facility and severity
//! - **config.rs** - Framing, strict and continuous modes, limits
//! - **error.rs** - `ErrorKind` / `ParseError`
//! - **message.rs** - Owned `SyslogMessage` and the collector that builds it

pub mod carry;
pub mod config;
pub mod error;
pub mod head;
pub mod message;
pub mod parser;
pub mod priority;
pub mod sd;
pub mod settings;
pub mod span;
mod token;

pub use carry::CarryBuffer;
pub use config::{Framing, ParserConfig, DEFAULT_MAX_TOKEN_LEN};
pub use error::{Callback, ErrorKind, Field, ParseError};
pub use head::MessageHead;
pub use message::{MessageCollector, SdElement, SyslogMessage};
pub use parser::{Flags, Parser, State, TokenState};
pub use priority::{Facility, Priority, PriorityParseError, Severity, MAX_PRIORITY};
pub use sd::SdParam;
pub use settings::{Flow, Settings};
pub use span::{Source, Span};
