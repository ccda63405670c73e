//! Owned message representation layered over the streaming parser.
//!
//! The parser itself never allocates per message; this module does, for
//! callers that want a complete value per message rather than callbacks.
//! [`MessageCollector`] is an ordinary [`Settings`] implementation, so it
//! composes with every parser configuration.
//!
//! # Example
//!
//! ```
//! use syslog_core::message::SyslogMessage;
//! use syslog_core::Severity;
//!
//! let msg = SyslogMessage::parse(
//!     b"<165>1 2003-10-11T22:14:15.003Z mymachine.example.com evntslog - ID47 \
//!       [exampleSDID@32473 iut=\"3\" eventSource=\"Application\"] An application event\n",
//! ).unwrap();
//!
//! assert_eq!(msg.priority.severity(), Severity::Notice);
//! assert_eq!(msg.hostname.as_deref(), Some("mymachine.example.com"));
//! assert_eq!(msg.procid, None);
//! assert_eq!(msg.param("exampleSDID@32473", "iut"), Some("3"));
//! assert_eq!(msg.body_text(), "An application event");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::config::ParserConfig;
use crate::error::{ErrorKind, ParseError};
use crate::head::MessageHead;
use crate::parser::Parser;
use crate::priority::Priority;
use crate::sd::SdParam;
use crate::settings::{Flow, Settings};
use crate::span::Span;

/// UTF-8 byte order mark that may open an RFC 5424 `MSG`.
const BOM: &[u8] = b"\xEF\xBB\xBF";

// ============================================================================
// Types
// ============================================================================

/// One SD-ELEMENT with its parameters in input order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SdElement {
    pub id: String,
    pub params: Vec<(String, String)>,
}

impl SdElement {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            params: Vec::new(),
        }
    }

    /// Value of a parameter. A repeated name resolves to its last value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .rev()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }
}

/// A complete syslog message. `None` head fields were the NILVALUE `-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyslogMessage {
    pub priority: Priority,
    pub version: u16,
    pub timestamp: Option<String>,
    pub hostname: Option<String>,
    pub appname: Option<String>,
    pub procid: Option<String>,
    pub msgid: Option<String>,
    pub structured_data: Vec<SdElement>,
    /// Raw `MSG` bytes, BOM included.
    pub body: Vec<u8>,
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn nil_or_text(span: Span<'_>) -> Option<String> {
    if span.is_nil() {
        None
    } else {
        Some(text(&span))
    }
}

impl SyslogMessage {
    fn from_head(head: &MessageHead<'_>) -> Self {
        Self {
            priority: head.priority,
            version: head.version,
            timestamp: nil_or_text(head.timestamp),
            hostname: nil_or_text(head.hostname),
            appname: nil_or_text(head.appname),
            procid: nil_or_text(head.processid),
            msgid: nil_or_text(head.messageid),
            structured_data: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Parse exactly one message. The trailing newline is optional.
    pub fn parse(input: &[u8]) -> Result<Self, ParseError> {
        let mut parser = Parser::new(Vec::new());
        let mut collector = MessageCollector::new();
        parser.exec(&mut collector, input)?;
        parser.finish(&mut collector)?;
        parser
            .into_context()
            .into_iter()
            .next()
            .ok_or(ParseError::new(ErrorKind::IncompleteMessage, 0))
    }

    /// Parse a stream of messages framed per `config`.
    pub fn parse_all(input: &[u8], config: ParserConfig) -> Result<Vec<Self>, ParseError> {
        let mut parser = Parser::with_config(config.with_continuous(true), Vec::new());
        let mut collector = MessageCollector::new();
        parser.exec(&mut collector, input)?;
        parser.finish(&mut collector)?;
        Ok(parser.into_context())
    }

    pub fn element(&self, id: &str) -> Option<&SdElement> {
        self.structured_data.iter().find(|el| el.id == id)
    }

    pub fn param(&self, element: &str, name: &str) -> Option<&str> {
        self.element(element).and_then(|el| el.get(name))
    }

    /// Body as text, without a leading BOM.
    pub fn body_text(&self) -> Cow<'_, str> {
        let body = self.body.strip_prefix(BOM).unwrap_or(&self.body);
        String::from_utf8_lossy(body)
    }
}

impl FromStr for SyslogMessage {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.as_bytes())
    }
}

fn write_field(f: &mut fmt::Formatter<'_>, field: &Option<String>) -> fmt::Result {
    match field {
        Some(value) => write!(f, " {}", value),
        None => f.write_str(" -"),
    }
}

/// RFC 5424 wire form, without a frame delimiter.
impl fmt::Display for SyslogMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>{}", self.priority.value(), self.version)?;
        write_field(f, &self.timestamp)?;
        write_field(f, &self.hostname)?;
        write_field(f, &self.appname)?;
        write_field(f, &self.procid)?;
        write_field(f, &self.msgid)?;

        if self.structured_data.is_empty() {
            f.write_str(" -")?;
        } else {
            f.write_str(" ")?;
            for el in &self.structured_data {
                write!(f, "[{}", el.id)?;
                for (name, value) in &el.params {
                    write!(f, " {}=\"", name)?;
                    for ch in value.chars() {
                        if matches!(ch, '"' | ']' | '\\') {
                            f.write_str("\\")?;
                        }
                        write!(f, "{}", ch)?;
                    }
                    f.write_str("\"")?;
                }
                f.write_str("]")?;
            }
        }

        if !self.body.is_empty() {
            write!(f, " {}", String::from_utf8_lossy(&self.body))?;
        }
        Ok(())
    }
}

// ============================================================================
// Collector
// ============================================================================

/// Builds a [`SyslogMessage`] per completed message and pushes it onto the
/// parser's context vector.
#[derive(Debug, Default)]
pub struct MessageCollector {
    current: Option<SyslogMessage>,
}

impl MessageCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// The message being assembled, if the head has been seen.
    pub fn current(&self) -> Option<&SyslogMessage> {
        self.current.as_ref()
    }
}

impl Settings<Vec<SyslogMessage>> for MessageCollector {
    fn on_msg_begin(&mut self, _cx: &mut Vec<SyslogMessage>) -> Flow {
        self.current = None;
        Flow::Continue(())
    }

    fn on_msg_head(&mut self, _cx: &mut Vec<SyslogMessage>, head: &MessageHead<'_>) -> Flow {
        self.current = Some(SyslogMessage::from_head(head));
        Flow::Continue(())
    }

    fn on_sd_element(&mut self, _cx: &mut Vec<SyslogMessage>, name: Span<'_>) -> Flow {
        if let Some(msg) = &mut self.current {
            msg.structured_data.push(SdElement::new(text(&name)));
        }
        Flow::Continue(())
    }

    fn on_sd_value(&mut self, _cx: &mut Vec<SyslogMessage>, param: SdParam<'_>) -> Flow {
        let element = self.current.as_mut().and_then(|msg| msg.structured_data.last_mut());
        if let Some(el) = element {
            el.params.push((text(param.field), text(&param.value)));
        }
        Flow::Continue(())
    }

    fn on_msg(&mut self, _cx: &mut Vec<SyslogMessage>, body: Span<'_>) -> Flow {
        if let Some(msg) = &mut self.current {
            msg.body.extend_from_slice(&body);
        }
        Flow::Continue(())
    }

    fn on_msg_complete(&mut self, cx: &mut Vec<SyslogMessage>) -> Flow {
        if let Some(msg) = self.current.take() {
            cx.push(msg);
        }
        Flow::Continue(())
    }
}
