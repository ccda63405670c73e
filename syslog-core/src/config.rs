//! Parser configuration.
//!
//! Framing is never inferred from the input: the embedding transport knows
//! whether it delivers newline-delimited or octet-counted messages and says
//! so here.

/// Default carry limit (64KB).
pub const DEFAULT_MAX_TOKEN_LEN: usize = 64 * 1024;

/// How the end of a message is recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Framing {
    /// Non-transparent framing: the message ends at this byte (RFC 6587 §3.4.2).
    Delimited(u8),
    /// Octet counting: `MSG-LEN SP SYSLOG-MSG` (RFC 6587 §3.4.1).
    OctetCounting,
}

impl Default for Framing {
    fn default() -> Self {
        Framing::Delimited(b'\n')
    }
}

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParserConfig {
    /// Message framing
    pub framing: Framing,

    /// Enforce RFC 5424 character sets and field length limits
    pub strict: bool,

    /// Re-arm after each completed message instead of stopping in `Complete`
    pub continuous: bool,

    /// Largest token the carry buffer may hold
    pub max_token_len: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            framing: Framing::default(),
            strict: false,
            continuous: false,
            max_token_len: DEFAULT_MAX_TOKEN_LEN,
        }
    }
}

impl ParserConfig {
    /// Newline-delimited stream of messages, parsed back to back.
    pub fn stream() -> Self {
        Self {
            continuous: true,
            ..Default::default()
        }
    }

    pub fn with_framing(mut self, framing: Framing) -> Self {
        self.framing = framing;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_continuous(mut self, continuous: bool) -> Self {
        self.continuous = continuous;
        self
    }

    pub fn with_max_token_len(mut self, max_token_len: usize) -> Self {
        self.max_token_len = max_token_len;
        self
    }

    /// The delimiter byte, if framing is delimiter based.
    #[inline]
    pub(crate) fn delimiter(&self) -> Option<u8> {
        match self.framing {
            Framing::Delimited(byte) => Some(byte),
            Framing::OctetCounting => None,
        }
    }
}
