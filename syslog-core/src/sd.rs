//! Structured-data accumulator.
//!
//! SD elements do not nest, so the "stack" is two slots: the current SD-ID
//! and the current PARAM-NAME. Both are short (32 bytes in strict mode) and
//! are copied so they survive chunk boundaries until the value completes.

use crate::span::Span;

/// One completed SD-PARAM, handed to `on_sd_value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SdParam<'a> {
    /// SD-ID of the enclosing element
    pub element: &'a [u8],
    /// PARAM-NAME
    pub field: &'a [u8],
    /// Unescaped PARAM-VALUE
    pub value: Span<'a>,
}

#[derive(Debug, Default)]
pub(crate) struct SdAccumulator {
    element: Vec<u8>,
    field: Vec<u8>,
}

impl SdAccumulator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reset(&mut self) {
        self.element.clear();
        self.field.clear();
    }

    pub(crate) fn open_element(&mut self, name: &[u8]) {
        self.element.clear();
        self.element.extend_from_slice(name);
        self.field.clear();
    }

    pub(crate) fn close_element(&mut self) {
        self.reset();
    }

    pub(crate) fn set_field(&mut self, name: &[u8]) {
        self.field.clear();
        self.field.extend_from_slice(name);
    }

    pub(crate) fn clear_field(&mut self) {
        self.field.clear();
    }

    pub(crate) fn param<'a>(&'a self, value: Span<'a>) -> SdParam<'a> {
        SdParam {
            element: &self.element,
            field: &self.field,
            value,
        }
    }
}
