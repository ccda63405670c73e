//! Byte classes and run scanning.
//!
//! The state machine decides what a byte means; this module only answers
//! "where does the current run stop" and "is this byte allowed here". Runs
//! are located with memchr, so long header fields, values, and bodies are
//! not walked byte by byte.

use memchr::{memchr, memchr2, memchr3};

use crate::error::Field;

pub(crate) const SP: u8 = b' ';
pub(crate) const NIL: u8 = b'-';
pub(crate) const PRI_OPEN: u8 = b'<';
pub(crate) const PRI_CLOSE: u8 = b'>';
pub(crate) const SD_OPEN: u8 = b'[';
pub(crate) const SD_CLOSE: u8 = b']';
pub(crate) const SD_EQ: u8 = b'=';
pub(crate) const QUOTE: u8 = b'"';
pub(crate) const ESCAPE: u8 = b'\\';

/// Longest SD-NAME in strict mode.
pub(crate) const SD_NAME_MAX: usize = 32;

/// RFC 5424 PRINTUSASCII.
#[inline]
pub(crate) fn is_print_ascii(byte: u8) -> bool {
    (33..=126).contains(&byte)
}

/// Bytes that end an SD-ID or PARAM-NAME.
#[inline]
pub(crate) fn is_sd_name_stop(byte: u8) -> bool {
    matches!(byte, SP | SD_CLOSE | SD_EQ | QUOTE)
}

/// Bytes an escape may protect inside a PARAM-VALUE.
#[inline]
pub(crate) fn is_escapable(byte: u8) -> bool {
    matches!(byte, QUOTE | SD_CLOSE | ESCAPE)
}

/// Longest allowed value for a head field in strict mode.
pub(crate) fn field_limit(field: Field) -> usize {
    match field {
        // FULL-DATE "T" FULL-TIME with 6 fraction digits is 32 bytes
        Field::Timestamp => 64,
        Field::Hostname => 255,
        Field::AppName => 48,
        Field::ProcessId => 128,
        Field::MessageId => 32,
    }
}

/// Position of the SP (or frame delimiter) ending a head field.
#[inline]
pub(crate) fn find_field_end(run: &[u8], delimiter: Option<u8>) -> Option<usize> {
    match delimiter {
        Some(delim) => memchr2(SP, delim, run),
        None => memchr(SP, run),
    }
}

/// Position of the byte ending an SD-ID or PARAM-NAME.
#[inline]
pub(crate) fn find_name_end(run: &[u8], delimiter: Option<u8>) -> Option<usize> {
    run.iter()
        .position(|&b| is_sd_name_stop(b) || Some(b) == delimiter)
}

/// Position of the next quote, escape, close bracket, or frame delimiter
/// inside a PARAM-VALUE.
#[inline]
pub(crate) fn find_value_special(run: &[u8], delimiter: Option<u8>) -> Option<usize> {
    let special = memchr3(QUOTE, ESCAPE, SD_CLOSE, run);
    match delimiter {
        Some(delim) => {
            let limit = special.unwrap_or(run.len());
            memchr(delim, &run[..limit]).or(special)
        }
        None => special,
    }
}

/// Position of the frame delimiter inside the body.
#[inline]
pub(crate) fn find_body_end(run: &[u8], delimiter: Option<u8>) -> Option<usize> {
    delimiter.and_then(|delim| memchr(delim, run))
}

/// Index of the first byte outside PRINTUSASCII.
#[inline]
pub(crate) fn find_unprintable(run: &[u8]) -> Option<usize> {
    run.iter().position(|&b| !is_print_ascii(b))
}
