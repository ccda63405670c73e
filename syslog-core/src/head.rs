//! Message head accumulator.
//!
//! The seven head fields are handed to the consumer together at
//! `on_msg_head`. Until then each completed string field is remembered as a
//! slot: a range of the current chunk while that chunk is still borrowed, or
//! a range of the accumulator's own spill storage once the field's bytes
//! would otherwise be lost (the chunk ended, or the field came out of the
//! carry buffer).

use crate::carry::CarryBuffer;
use crate::error::Field;
use crate::priority::Priority;
use crate::span::Span;

/// Priority and version are at most this many digits.
const MAX_DIGITS: u8 = 3;

/// The parsed message head, valid for one `on_msg_head` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageHead<'a> {
    pub priority: Priority,
    pub version: u16,
    pub timestamp: Span<'a>,
    pub hostname: Span<'a>,
    pub appname: Span<'a>,
    pub processid: Span<'a>,
    pub messageid: Span<'a>,
}

impl<'a> MessageHead<'a> {
    /// Get a string field by name.
    pub fn field(&self, field: Field) -> Span<'a> {
        match field {
            Field::Timestamp => self.timestamp,
            Field::Hostname => self.hostname,
            Field::AppName => self.appname,
            Field::ProcessId => self.processid,
            Field::MessageId => self.messageid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Empty,
    Chunk { start: usize, end: usize },
    Spill { start: usize, end: usize },
}

#[derive(Debug)]
pub(crate) struct HeadAccumulator {
    priority: u16,
    priority_digits: u8,
    version: u16,
    version_digits: u8,
    slots: [Slot; 5],
    spill: Vec<u8>,
}

impl HeadAccumulator {
    pub(crate) fn new() -> Self {
        Self {
            priority: 0,
            priority_digits: 0,
            version: 0,
            version_digits: 0,
            slots: [Slot::Empty; 5],
            spill: Vec::new(),
        }
    }

    /// Forget the previous message, keeping the spill allocation.
    pub(crate) fn reset(&mut self) {
        self.priority = 0;
        self.priority_digits = 0;
        self.version = 0;
        self.version_digits = 0;
        self.slots = [Slot::Empty; 5];
        self.spill.clear();
    }

    /// Accept one PRI digit. Rejects a fourth digit and digits after a leading zero.
    pub(crate) fn priority_digit(&mut self, byte: u8) -> bool {
        if !byte.is_ascii_digit() || self.priority_digits == MAX_DIGITS {
            return false;
        }
        if self.priority_digits > 0 && self.priority == 0 {
            return false;
        }
        self.priority = self.priority * 10 + u16::from(byte - b'0');
        self.priority_digits += 1;
        true
    }

    /// The PRI value at `>`, if at least one digit was seen and it is in range.
    pub(crate) fn finish_priority(&self) -> Option<Priority> {
        if self.priority_digits == 0 {
            return None;
        }
        u8::try_from(self.priority).ok().and_then(Priority::new)
    }

    /// Accept one VERSION digit: `NONZERO-DIGIT 0*2DIGIT`.
    pub(crate) fn version_digit(&mut self, byte: u8) -> bool {
        if !byte.is_ascii_digit() || self.version_digits == MAX_DIGITS {
            return false;
        }
        if self.version_digits == 0 && byte == b'0' {
            return false;
        }
        self.version = self.version * 10 + u16::from(byte - b'0');
        self.version_digits += 1;
        true
    }

    #[inline]
    pub(crate) fn version_started(&self) -> bool {
        self.version_digits > 0
    }

    /// Record a completed string field.
    ///
    /// `data[start..end]` is the tail of the field in the current chunk. If
    /// the carry buffer holds the field's earlier bytes, the whole field is
    /// moved into the spill and the carry is cleared.
    pub(crate) fn complete(
        &mut self,
        field: Field,
        data: &[u8],
        start: usize,
        end: usize,
        carry: &mut CarryBuffer,
    ) {
        self.slots[field.index()] = if carry.is_empty() {
            Slot::Chunk { start, end }
        } else {
            let spill_start = self.spill.len();
            self.spill.extend_from_slice(carry.as_bytes());
            self.spill.extend_from_slice(&data[start..end]);
            carry.clear();
            Slot::Spill { start: spill_start, end: self.spill.len() }
        };
    }

    /// Copy fields that still point into `data` before the chunk goes away.
    pub(crate) fn spill_chunk(&mut self, data: &[u8]) {
        for slot in &mut self.slots {
            if let Slot::Chunk { start, end } = *slot {
                let spill_start = self.spill.len();
                self.spill.extend_from_slice(&data[start..end]);
                *slot = Slot::Spill { start: spill_start, end: self.spill.len() };
            }
        }
    }

    fn span<'a>(&'a self, field: Field, data: &'a [u8]) -> Span<'a> {
        match self.slots[field.index()] {
            Slot::Chunk { start, end } => Span::chunk(&data[start..end], start),
            Slot::Spill { start, end } => Span::carry(&self.spill[start..end], start),
            Slot::Empty => Span::carry(&[], 0),
        }
    }

    /// View of the complete head; `data` is the chunk being executed.
    pub(crate) fn message_head<'a>(&'a self, priority: Priority, data: &'a [u8]) -> MessageHead<'a> {
        MessageHead {
            priority,
            version: self.version,
            timestamp: self.span(Field::Timestamp, data),
            hostname: self.span(Field::Hostname, data),
            appname: self.span(Field::AppName, data),
            processid: self.span(Field::ProcessId, data),
            messageid: self.span(Field::MessageId, data),
        }
    }
}
