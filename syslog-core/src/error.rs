//! Parse error kinds and the located error returned by `exec`.

use std::fmt;

/// The five string fields of the message head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Field {
    Timestamp = 0,
    Hostname,
    AppName,
    ProcessId,
    MessageId,
}

impl Field {
    /// All head string fields, in wire order.
    pub const ALL: [Field; 5] = [
        Field::Timestamp,
        Field::Hostname,
        Field::AppName,
        Field::ProcessId,
        Field::MessageId,
    ];

    /// Position of the field in wire order.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Get the RFC 5424 name of this field.
    pub fn name(self) -> &'static str {
        match self {
            Self::Timestamp => "TIMESTAMP",
            Self::Hostname => "HOSTNAME",
            Self::AppName => "APP-NAME",
            Self::ProcessId => "PROCID",
            Self::MessageId => "MSGID",
        }
    }

    /// The field that follows this one, `None` after MSGID.
    pub fn next(self) -> Option<Field> {
        Self::ALL.get(self.index() + 1).copied()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identifies a [`Settings`](crate::Settings) callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Callback {
    MsgBegin,
    MsgHead,
    SdElement,
    SdField,
    SdValue,
    Msg,
    MsgComplete,
}

impl Callback {
    pub fn name(self) -> &'static str {
        match self {
            Self::MsgBegin => "on_msg_begin",
            Self::MsgHead => "on_msg_head",
            Self::SdElement => "on_sd_element",
            Self::SdField => "on_sd_field",
            Self::SdValue => "on_sd_value",
            Self::Msg => "on_msg",
            Self::MsgComplete => "on_msg_complete",
        }
    }
}

impl fmt::Display for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why the parser entered the error state.
///
/// Every kind except [`CallbackAborted`](Self::CallbackAborted) means the
/// input was malformed; `CallbackAborted` means the consumer rejected input
/// the grammar accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    /// Missing `<`, no digits, leading zero, more than 3 digits, or above 191.
    #[error("malformed priority")]
    MalformedPriority,

    /// Missing, zero-led, or more than 3 digits.
    #[error("malformed version")]
    MalformedVersion,

    /// The frame ended before the message head was complete.
    #[error("missing separator")]
    MissingSeparator,

    /// A head field is empty or, in strict mode, breaks RFC 5424 limits.
    #[error("malformed {0} field")]
    MalformedField(Field),

    /// Bad SD-ID or field name, or unexpected bytes between SD parts.
    #[error("malformed structured data")]
    MalformedStructuredData,

    /// The frame ended inside an SD element or quoted value.
    #[error("unterminated structured data")]
    UnterminatedStructuredData,

    /// A backslash inside an SD value not followed by `"`, `]` or `\`.
    #[error("invalid escape in structured data value")]
    InvalidEscape,

    /// The octet-counting length prefix is not a valid decimal length.
    #[error("malformed frame length")]
    MalformedFrame,

    /// A token grew past the configured carry limit.
    #[error("token exceeds maximum length")]
    TokenTooLong,

    /// `finish` was called while a message was still being parsed.
    #[error("incomplete message at end of input")]
    IncompleteMessage,

    /// A callback returned `Flow::Break`.
    #[error("aborted by {0} callback")]
    CallbackAborted(Callback),
}

impl ErrorKind {
    /// True when the consumer, not the input, stopped the parse.
    #[inline]
    pub fn is_abort(self) -> bool {
        matches!(self, Self::CallbackAborted(_))
    }
}

/// A parse failure located at a byte offset within the failing chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at offset {offset}")]
pub struct ParseError {
    pub kind: ErrorKind,
    /// Offset of the offending byte within the chunk passed to `exec`.
    pub offset: usize,
}

impl ParseError {
    pub fn new(kind: ErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}
