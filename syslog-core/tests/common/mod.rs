//! Test infrastructure for the syslog parser
//!
//! Provides an event recorder, chunked parsing helpers, fixture loading and
//! stochastic test generation.

#![allow(dead_code)]

mod generators;
mod harness;
mod loader;

pub use generators::Gen;
pub use harness::{
    coalesce, parse, parse_chunks, parse_with, run_test, run_with_variations, split_at, Outcome, Recorder, E,
};
pub use loader::{load_fixtures_by_name, ExpectedEvent, TestCase};
