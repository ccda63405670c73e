//! Incremental syslog state machine.
//!
//! The parser consumes chunks of a byte stream and calls [`Settings`]
//! methods as soon as each piece of a message is recognized:
//!
//! ```text
//! [FrameLength] → Start → Priority → Version → Timestamp → Hostname → AppName
//!   → ProcessId → MessageId → SdOrBody → {SdElementName → SdFieldName
//!   → SdFieldValue}* → Body → Complete
//! ```
//!
//! plus `Error`, reachable from every state. `state` and `token_state`
//! alone decide how the next byte is read. A token cut by the end of a
//! chunk is copied into the carry buffer and completed by the next `exec`
//! call; everything else is handed out as a span of the caller's chunk.
//!
//! # Example
//!
//! ```
//! use syslog_core::{Flow, MessageHead, Parser, Settings};
//!
//! struct Hosts;
//!
//! impl Settings<Vec<String>> for Hosts {
//!     fn on_msg_head(&mut self, seen: &mut Vec<String>, head: &MessageHead<'_>) -> Flow {
//!         seen.push(String::from_utf8_lossy(&head.hostname).into_owned());
//!         Flow::Continue(())
//!     }
//! }
//!
//! let mut parser = Parser::new(Vec::new());
//! parser.exec(&mut Hosts, b"<34>1 - mymach").unwrap();
//! parser.exec(&mut Hosts, b"ine su - - - hi\n").unwrap();
//! assert_eq!(parser.context(), &["mymachine"]);
//! ```

use tracing::{debug, trace};

use crate::carry::CarryBuffer;
use crate::config::{Framing, ParserConfig};
use crate::error::{Callback, ErrorKind, Field, ParseError};
use crate::head::HeadAccumulator;
use crate::sd::SdAccumulator;
use crate::settings::{Flow, Settings};
use crate::span::Span;
use crate::token::{self, ESCAPE, NIL, PRI_CLOSE, PRI_OPEN, QUOTE, SD_CLOSE, SD_EQ, SD_OPEN, SP};

/// Largest accepted octet-counting length prefix.
const MAX_FRAME_LEN: u64 = u32::MAX as u64;

/// Carry allocation made up front.
const INITIAL_CARRY: usize = 256;

/// Message-level position in the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// `MSG-LEN` prefix (octet-counting framing only)
    FrameLength,
    Start,
    Priority,
    Version,
    Timestamp,
    Hostname,
    AppName,
    ProcessId,
    MessageId,
    /// After MSGID: nil SD, SD elements, or the body
    SdOrBody,
    SdElementName,
    SdFieldName,
    SdFieldValue,
    Body,
    Complete,
    Error,
}

impl State {
    fn of_field(field: Field) -> Self {
        match field {
            Field::Timestamp => State::Timestamp,
            Field::Hostname => State::Hostname,
            Field::AppName => State::AppName,
            Field::ProcessId => State::ProcessId,
            Field::MessageId => State::MessageId,
        }
    }

    /// A head string field is being read.
    #[inline]
    pub fn is_head_field(self) -> bool {
        matches!(
            self,
            State::Timestamp | State::Hostname | State::AppName | State::ProcessId | State::MessageId
        )
    }

    /// Inside a message (octet counting charges these bytes to the frame).
    #[inline]
    fn in_frame(self) -> bool {
        !matches!(self, State::FrameLength | State::Complete | State::Error)
    }
}

/// Sub-state of `SdFieldValue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TokenState {
    #[default]
    Idle,
    /// After `=`, expecting `"`
    OpenQuote,
    /// Inside the quoted value
    Value,
    /// After `\` inside the value
    Escape,
    /// After the closing `"`, expecting SP or `]`
    CloseQuote,
}

/// Runtime flags for the structured-data section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags {
    /// Between `[` and `]`
    pub in_element: bool,
    /// The SD section has started (nil or at least one element)
    pub sd_seen: bool,
    /// The SD section was the NILVALUE `-`
    pub sd_nil: bool,
}

/// Streaming syslog parser bound to a consumer context `C`.
///
/// One parser serves one stream. Feed it chunks with [`exec`](Self::exec);
/// between messages call [`reset`](Self::reset), or configure
/// [`continuous`](ParserConfig::continuous) mode to re-arm automatically.
#[derive(Debug)]
pub struct Parser<C = ()> {
    config: ParserConfig,
    state: State,
    token_state: TokenState,
    flags: Flags,
    error: Option<ParseError>,
    /// Declared octet count of the current frame
    message_length: u64,
    /// Bytes of the current frame not yet consumed
    remaining: u64,
    carry: CarryBuffer,
    head: HeadAccumulator,
    sd: SdAccumulator,
    context: C,
}

#[inline]
fn check(flow: Flow, callback: Callback, offset: usize) -> Result<(), ParseError> {
    if flow.is_break() {
        return Err(ParseError::new(ErrorKind::CallbackAborted(callback), offset));
    }
    Ok(())
}

#[inline]
fn reject<T>(kind: ErrorKind, offset: usize) -> Result<T, ParseError> {
    Err(ParseError::new(kind, offset))
}

/// Completed token: `data[start..end]`, prefixed by any carried bytes.
fn token_span<'a>(carry: &'a mut CarryBuffer, data: &'a [u8], start: usize, end: usize) -> Span<'a> {
    if carry.is_empty() {
        Span::chunk(&data[start..end], start)
    } else {
        carry.extend(&data[start..end]);
        Span::carry(carry.as_bytes(), 0)
    }
}

impl<C: Default> Default for Parser<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C> Parser<C> {
    /// Create a parser with the default configuration.
    pub fn new(context: C) -> Self {
        Self::with_config(ParserConfig::default(), context)
    }

    /// Create a parser with an explicit configuration.
    pub fn with_config(config: ParserConfig, context: C) -> Self {
        let state = Self::initial_state(&config);
        Self {
            config,
            state,
            token_state: TokenState::Idle,
            flags: Flags::default(),
            error: None,
            message_length: 0,
            remaining: 0,
            carry: CarryBuffer::with_capacity(config.max_token_len.min(INITIAL_CARRY)),
            head: HeadAccumulator::new(),
            sd: SdAccumulator::new(),
            context,
        }
    }

    fn initial_state(config: &ParserConfig) -> State {
        match config.framing {
            Framing::OctetCounting => State::FrameLength,
            Framing::Delimited(_) => State::Start,
        }
    }

    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    #[inline]
    pub fn token_state(&self) -> TokenState {
        self.token_state
    }

    #[inline]
    pub fn flags(&self) -> Flags {
        self.flags
    }

    #[inline]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// The error that stopped the parser, until [`reset`](Self::reset).
    #[inline]
    pub fn error(&self) -> Option<ParseError> {
        self.error
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.state == State::Complete
    }

    /// Declared length of the current octet-counted frame (0 when delimited).
    #[inline]
    pub fn message_length(&self) -> u64 {
        self.message_length
    }

    /// Bytes still owed to the current octet-counted frame.
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Bytes currently held for a token in flight.
    #[inline]
    pub fn carried(&self) -> usize {
        self.carry.len()
    }

    /// Carry buffer allocation, kept across resets.
    #[inline]
    pub fn carry_capacity(&self) -> usize {
        self.carry.capacity()
    }

    /// The user context handed to every callback.
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Mutable access to the user context.
    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    /// Consume the parser, returning the user context.
    pub fn into_context(self) -> C {
        self.context
    }

    /// Return to the initial state, keeping buffer allocations.
    pub fn reset(&mut self) {
        self.rearm();
        self.error = None;
        self.carry.clear();
        self.head.reset();
        self.sd.reset();
    }

    fn rearm(&mut self) {
        self.state = Self::initial_state(&self.config);
        self.token_state = TokenState::Idle;
        self.flags = Flags::default();
        self.message_length = 0;
        self.remaining = 0;
    }

    /// Feed one chunk.
    ///
    /// Returns the number of bytes consumed. That is all of `data` unless a
    /// message completed and the parser stopped in [`State::Complete`]; the
    /// count then includes the terminating delimiter. On error the parser is
    /// left in [`State::Error`] and every later call returns the same error
    /// until [`reset`](Self::reset).
    pub fn exec<S>(&mut self, settings: &mut S, data: &[u8]) -> Result<usize, ParseError>
    where
        S: Settings<C> + ?Sized,
    {
        if let Some(err) = self.error {
            return Err(err);
        }
        let counting = self.config.framing == Framing::OctetCounting;
        let mut pos = 0;

        while pos < data.len() && self.state != State::Complete {
            let counted = counting && self.state.in_frame();
            let end = if counted {
                pos + self.remaining.min((data.len() - pos) as u64) as usize
            } else {
                data.len()
            };

            let next = match self.step(settings, data, pos, end) {
                Ok(next) => next,
                Err(err) => return Err(self.fail(err)),
            };

            if counted {
                self.remaining -= (next - pos) as u64;
                if self.remaining == 0 {
                    if let Err(err) = self.end_of_frame(settings, next) {
                        return Err(self.fail(err));
                    }
                }
            }
            pos = next;
        }

        if self.state.is_head_field() {
            self.head.spill_chunk(data);
        }
        if !self.carry.is_empty() {
            trace!(carried = self.carry.len(), state = ?self.state, "token carried across chunk boundary");
        }
        Ok(pos)
    }

    /// Signal end of input (end of datagram or file).
    ///
    /// A message whose body (or SD section) was reached is completed. Calling
    /// this between messages is a no-op; anywhere else it is an
    /// [`ErrorKind::IncompleteMessage`] with offset 0.
    pub fn finish<S>(&mut self, settings: &mut S) -> Result<(), ParseError>
    where
        S: Settings<C> + ?Sized,
    {
        if let Some(err) = self.error {
            return Err(err);
        }
        let counted = self.config.framing == Framing::OctetCounting && self.state.in_frame();
        let result = match self.state {
            State::Complete => Ok(()),
            State::Start if !counted => Ok(()),
            State::FrameLength if self.message_length == 0 => Ok(()),
            State::Body | State::SdOrBody if !counted => self.end_of_frame(settings, 0),
            _ => reject(ErrorKind::IncompleteMessage, 0),
        };
        result.map_err(|err| self.fail(err))
    }

    fn fail(&mut self, err: ParseError) -> ParseError {
        debug!(kind = %err.kind, offset = err.offset, state = ?self.state, "syslog parse error");
        self.state = State::Error;
        self.error = Some(err);
        self.carry.clear();
        err
    }

    /// Consume from `data[pos..end]`, returning the new position.
    fn step<S>(&mut self, settings: &mut S, data: &[u8], pos: usize, end: usize) -> Result<usize, ParseError>
    where
        S: Settings<C> + ?Sized,
    {
        match self.state {
            State::FrameLength => self.frame_length(data[pos], pos),
            State::Start => self.start(settings, data[pos], pos),
            State::Priority => self.priority(data[pos], pos),
            State::Version => self.version(data[pos], pos),
            State::Timestamp => self.head_field(settings, data, pos, end, Field::Timestamp),
            State::Hostname => self.head_field(settings, data, pos, end, Field::Hostname),
            State::AppName => self.head_field(settings, data, pos, end, Field::AppName),
            State::ProcessId => self.head_field(settings, data, pos, end, Field::ProcessId),
            State::MessageId => self.head_field(settings, data, pos, end, Field::MessageId),
            State::SdOrBody => self.sd_or_body(settings, data[pos], pos),
            State::SdElementName => self.sd_element_name(settings, data, pos, end),
            State::SdFieldName => self.sd_field_name(settings, data, pos, end),
            State::SdFieldValue => self.sd_field_value(settings, data, pos, end),
            State::Body => self.body(settings, data, pos, end),
            State::Complete | State::Error => Ok(end),
        }
    }

    fn frame_length(&mut self, byte: u8, pos: usize) -> Result<usize, ParseError> {
        match byte {
            b'0' if self.message_length == 0 => reject(ErrorKind::MalformedFrame, pos),
            b'0'..=b'9' => {
                self.message_length = self.message_length * 10 + u64::from(byte - b'0');
                if self.message_length > MAX_FRAME_LEN {
                    return reject(ErrorKind::MalformedFrame, pos);
                }
                Ok(pos + 1)
            }
            SP if self.message_length > 0 => {
                self.remaining = self.message_length;
                self.state = State::Start;
                Ok(pos + 1)
            }
            _ => reject(ErrorKind::MalformedFrame, pos),
        }
    }

    fn start<S>(&mut self, settings: &mut S, byte: u8, pos: usize) -> Result<usize, ParseError>
    where
        S: Settings<C> + ?Sized,
    {
        if Some(byte) == self.config.delimiter() {
            return Ok(pos + 1);
        }
        if byte != PRI_OPEN {
            return reject(ErrorKind::MalformedPriority, pos);
        }
        self.head.reset();
        self.sd.reset();
        self.flags = Flags::default();
        self.token_state = TokenState::Idle;
        self.state = State::Priority;
        trace!(offset = pos, "message begin");
        check(settings.on_msg_begin(&mut self.context), Callback::MsgBegin, pos)?;
        Ok(pos + 1)
    }

    fn priority(&mut self, byte: u8, pos: usize) -> Result<usize, ParseError> {
        if byte == PRI_CLOSE {
            if self.head.finish_priority().is_none() {
                return reject(ErrorKind::MalformedPriority, pos);
            }
            self.state = State::Version;
            return Ok(pos + 1);
        }
        if !self.head.priority_digit(byte) {
            return reject(ErrorKind::MalformedPriority, pos);
        }
        Ok(pos + 1)
    }

    fn version(&mut self, byte: u8, pos: usize) -> Result<usize, ParseError> {
        if byte == SP && self.head.version_started() {
            self.state = State::Timestamp;
            return Ok(pos + 1);
        }
        if self.head.version_digit(byte) {
            return Ok(pos + 1);
        }
        if Some(byte) == self.config.delimiter() && self.head.version_started() {
            return reject(ErrorKind::MissingSeparator, pos);
        }
        reject(ErrorKind::MalformedVersion, pos)
    }

    /// Carry an unfinished run over to the next chunk.
    fn carry_run(&mut self, run: &[u8], pos: usize) -> Result<(), ParseError> {
        self.check_token_len(run.len(), pos)?;
        self.carry.extend(run);
        Ok(())
    }

    fn check_token_len(&self, run_len: usize, pos: usize) -> Result<(), ParseError> {
        if self.carry.len() + run_len > self.config.max_token_len {
            return reject(ErrorKind::TokenTooLong, pos);
        }
        Ok(())
    }

    fn check_head_run(&self, field: Field, run: &[u8], pos: usize) -> Result<(), ParseError> {
        self.check_token_len(run.len(), pos)?;
        if self.config.strict {
            if let Some(i) = token::find_unprintable(run) {
                return reject(ErrorKind::MalformedField(field), pos + i);
            }
            if self.carry.len() + run.len() > token::field_limit(field) {
                return reject(ErrorKind::MalformedField(field), pos);
            }
        }
        Ok(())
    }

    fn check_sd_name_run(&self, run: &[u8], pos: usize) -> Result<(), ParseError> {
        self.check_token_len(run.len(), pos)?;
        if self.config.strict {
            if let Some(i) = token::find_unprintable(run) {
                return reject(ErrorKind::MalformedStructuredData, pos + i);
            }
            if self.carry.len() + run.len() > token::SD_NAME_MAX {
                return reject(ErrorKind::MalformedStructuredData, pos);
            }
        }
        Ok(())
    }

    fn head_field<S>(
        &mut self,
        settings: &mut S,
        data: &[u8],
        pos: usize,
        end: usize,
        field: Field,
    ) -> Result<usize, ParseError>
    where
        S: Settings<C> + ?Sized,
    {
        let run = &data[pos..end];
        let stop = token::find_field_end(run, self.config.delimiter());
        let len = stop.unwrap_or(run.len());
        self.check_head_run(field, &run[..len], pos)?;

        let Some(stop) = stop else {
            self.carry_run(run, pos)?;
            return Ok(end);
        };
        let at = pos + stop;
        if data[at] != SP {
            return reject(ErrorKind::MissingSeparator, at);
        }
        if stop == 0 && self.carry.is_empty() {
            return reject(ErrorKind::MalformedField(field), at);
        }
        self.head.complete(field, data, pos, at, &mut self.carry);

        match field.next() {
            Some(next) => self.state = State::of_field(next),
            None => {
                self.state = State::SdOrBody;
                let Some(priority) = self.head.finish_priority() else {
                    return reject(ErrorKind::MalformedPriority, at);
                };
                let head = self.head.message_head(priority, data);
                check(settings.on_msg_head(&mut self.context, &head), Callback::MsgHead, at)?;
            }
        }
        Ok(at + 1)
    }

    fn sd_or_body<S>(&mut self, settings: &mut S, byte: u8, pos: usize) -> Result<usize, ParseError>
    where
        S: Settings<C> + ?Sized,
    {
        if Some(byte) == self.config.delimiter() {
            self.end_of_frame(settings, pos)?;
            return Ok(pos + 1);
        }
        match byte {
            SD_OPEN if !self.flags.sd_nil => {
                self.flags.sd_seen = true;
                self.flags.in_element = true;
                self.state = State::SdElementName;
                Ok(pos + 1)
            }
            NIL if !self.flags.sd_seen => {
                self.flags.sd_seen = true;
                self.flags.sd_nil = true;
                Ok(pos + 1)
            }
            SP if self.flags.sd_seen => {
                self.state = State::Body;
                Ok(pos + 1)
            }
            // No SD section at all: the body starts here.
            _ if !self.flags.sd_seen && !self.config.strict => {
                self.state = State::Body;
                Ok(pos)
            }
            _ => reject(ErrorKind::MalformedStructuredData, pos),
        }
    }

    fn close_element(&mut self) {
        self.flags.in_element = false;
        self.token_state = TokenState::Idle;
        self.sd.close_element();
        self.state = State::SdOrBody;
    }

    fn sd_element_name<S>(&mut self, settings: &mut S, data: &[u8], pos: usize, end: usize) -> Result<usize, ParseError>
    where
        S: Settings<C> + ?Sized,
    {
        let delimiter = self.config.delimiter();
        let run = &data[pos..end];
        let stop = token::find_name_end(run, delimiter);
        let len = stop.unwrap_or(run.len());
        self.check_sd_name_run(&run[..len], pos)?;

        let Some(stop) = stop else {
            self.carry_run(run, pos)?;
            return Ok(end);
        };
        let at = pos + stop;
        let byte = data[at];
        if Some(byte) == delimiter {
            return reject(ErrorKind::UnterminatedStructuredData, at);
        }
        if (stop == 0 && self.carry.is_empty()) || !matches!(byte, SP | SD_CLOSE) {
            return reject(ErrorKind::MalformedStructuredData, at);
        }

        let name = token_span(&mut self.carry, data, pos, at);
        self.sd.open_element(&name);
        check(settings.on_sd_element(&mut self.context, name), Callback::SdElement, at)?;
        self.carry.clear();

        if byte == SP {
            self.state = State::SdFieldName;
        } else {
            self.close_element();
        }
        Ok(at + 1)
    }

    fn sd_field_name<S>(&mut self, settings: &mut S, data: &[u8], pos: usize, end: usize) -> Result<usize, ParseError>
    where
        S: Settings<C> + ?Sized,
    {
        let delimiter = self.config.delimiter();
        let run = &data[pos..end];
        let stop = token::find_name_end(run, delimiter);
        let len = stop.unwrap_or(run.len());
        self.check_sd_name_run(&run[..len], pos)?;

        let Some(stop) = stop else {
            self.carry_run(run, pos)?;
            return Ok(end);
        };
        let at = pos + stop;
        let byte = data[at];
        if Some(byte) == delimiter {
            return reject(ErrorKind::UnterminatedStructuredData, at);
        }
        let empty = stop == 0 && self.carry.is_empty();

        match byte {
            SD_EQ if !empty => {
                let name = token_span(&mut self.carry, data, pos, at);
                self.sd.set_field(&name);
                check(settings.on_sd_field(&mut self.context, name), Callback::SdField, at)?;
                self.carry.clear();
                self.state = State::SdFieldValue;
                self.token_state = TokenState::OpenQuote;
                Ok(at + 1)
            }
            // Lenient: doubled or trailing SP between params.
            SP if empty && !self.config.strict => Ok(at + 1),
            SD_CLOSE if empty && !self.config.strict => {
                self.close_element();
                Ok(at + 1)
            }
            _ => reject(ErrorKind::MalformedStructuredData, at),
        }
    }

    fn sd_field_value<S>(&mut self, settings: &mut S, data: &[u8], pos: usize, end: usize) -> Result<usize, ParseError>
    where
        S: Settings<C> + ?Sized,
    {
        let byte = data[pos];
        let delimiter = self.config.delimiter();

        match self.token_state {
            TokenState::OpenQuote => {
                if byte == QUOTE {
                    self.token_state = TokenState::Value;
                    return Ok(pos + 1);
                }
                if Some(byte) == delimiter {
                    return reject(ErrorKind::UnterminatedStructuredData, pos);
                }
                reject(ErrorKind::MalformedStructuredData, pos)
            }
            TokenState::Escape => {
                if !token::is_escapable(byte) {
                    return reject(ErrorKind::InvalidEscape, pos);
                }
                self.check_token_len(1, pos)?;
                self.carry.push(byte);
                self.token_state = TokenState::Value;
                Ok(pos + 1)
            }
            TokenState::CloseQuote => match byte {
                SP => {
                    self.token_state = TokenState::Idle;
                    self.state = State::SdFieldName;
                    Ok(pos + 1)
                }
                SD_CLOSE => {
                    self.close_element();
                    Ok(pos + 1)
                }
                _ if Some(byte) == delimiter => reject(ErrorKind::UnterminatedStructuredData, pos),
                _ => reject(ErrorKind::MalformedStructuredData, pos),
            },
            TokenState::Value | TokenState::Idle => self.sd_value_run(settings, data, pos, end),
        }
    }

    fn sd_value_run<S>(&mut self, settings: &mut S, data: &[u8], pos: usize, end: usize) -> Result<usize, ParseError>
    where
        S: Settings<C> + ?Sized,
    {
        let run = &data[pos..end];
        let Some(stop) = token::find_value_special(run, self.config.delimiter()) else {
            self.carry_run(run, pos)?;
            return Ok(end);
        };
        let at = pos + stop;

        match data[at] {
            ESCAPE => {
                self.carry_run(&run[..stop], pos)?;
                self.token_state = TokenState::Escape;
                Ok(at + 1)
            }
            QUOTE | SD_CLOSE => {
                self.check_token_len(stop, at)?;
                let value = token_span(&mut self.carry, data, pos, at);
                let param = self.sd.param(value);
                check(settings.on_sd_value(&mut self.context, param), Callback::SdValue, at)?;
                self.carry.clear();
                self.sd.clear_field();

                if data[at] == QUOTE {
                    self.token_state = TokenState::CloseQuote;
                } else {
                    // An unescaped `]` ends the value and the element.
                    self.close_element();
                }
                Ok(at + 1)
            }
            _ => reject(ErrorKind::UnterminatedStructuredData, at),
        }
    }

    fn body<S>(&mut self, settings: &mut S, data: &[u8], pos: usize, end: usize) -> Result<usize, ParseError>
    where
        S: Settings<C> + ?Sized,
    {
        let run = &data[pos..end];
        let stop = token::find_body_end(run, self.config.delimiter());
        let len = stop.unwrap_or(run.len());
        if len > 0 {
            check(settings.on_msg(&mut self.context, Span::chunk(&run[..len], pos)), Callback::Msg, pos)?;
        }
        match stop {
            Some(stop) => {
                let at = pos + stop;
                self.complete_message(settings, at)?;
                Ok(at + 1)
            }
            None => Ok(end),
        }
    }

    /// The frame ended at `offset` (delimiter seen, or declared length used up).
    fn end_of_frame<S>(&mut self, settings: &mut S, offset: usize) -> Result<(), ParseError>
    where
        S: Settings<C> + ?Sized,
    {
        let kind = match self.state {
            State::Body => return self.complete_message(settings, offset),
            State::SdOrBody if self.flags.sd_seen || !self.config.strict => {
                return self.complete_message(settings, offset);
            }
            State::SdOrBody => ErrorKind::MalformedStructuredData,
            State::FrameLength => ErrorKind::MalformedFrame,
            State::Start | State::Priority => ErrorKind::MalformedPriority,
            State::Version if self.head.version_started() => ErrorKind::MissingSeparator,
            State::Version => ErrorKind::MalformedVersion,
            State::Timestamp | State::Hostname | State::AppName | State::ProcessId | State::MessageId => {
                ErrorKind::MissingSeparator
            }
            State::SdElementName | State::SdFieldName | State::SdFieldValue => {
                ErrorKind::UnterminatedStructuredData
            }
            State::Complete | State::Error => return Ok(()),
        };
        reject(kind, offset)
    }

    fn complete_message<S>(&mut self, settings: &mut S, offset: usize) -> Result<(), ParseError>
    where
        S: Settings<C> + ?Sized,
    {
        trace!(offset, length = self.message_length, "message complete");
        check(settings.on_msg_complete(&mut self.context), Callback::MsgComplete, offset)?;
        if self.config.continuous {
            self.rearm();
        } else {
            self.state = State::Complete;
        }
        Ok(())
    }
}
