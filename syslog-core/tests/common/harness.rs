//! Event recording and chunked parsing

use crate::common::{ExpectedEvent, Gen, TestCase};
use syslog_core::{
    Callback, Flow, Framing, MessageHead, ParseError, Parser, ParserConfig, SdParam, Settings, Span,
};

/// Simplified event representation for testing (ignores spans and offsets).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum E {
    Begin,
    /// priority, version, then the five head fields in wire order
    Head(u8, u16, [String; 5]),
    Element(String),
    Field(String),
    /// element, field, unescaped value
    Value(String, String, String),
    Msg(String),
    Complete,
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

impl E {
    pub fn head(priority: u8, version: u16, fields: [&str; 5]) -> Self {
        E::Head(priority, version, fields.map(String::from))
    }

    pub fn element(name: &str) -> Self {
        E::Element(name.to_string())
    }

    pub fn field(name: &str) -> Self {
        E::Field(name.to_string())
    }

    pub fn value(element: &str, field: &str, value: &str) -> Self {
        E::Value(element.to_string(), field.to_string(), value.to_string())
    }

    pub fn msg(body: &str) -> Self {
        E::Msg(body.to_string())
    }

    /// Name followed by quoted arguments, the form used by YAML fixtures.
    pub fn format(&self) -> String {
        let (name, args): (&str, Vec<String>) = match self {
            E::Begin => ("Begin", vec![]),
            E::Head(pri, ver, fields) => {
                let mut args = vec![pri.to_string(), ver.to_string()];
                args.extend(fields.iter().cloned());
                ("Head", args)
            }
            E::Element(name) => ("Element", vec![name.clone()]),
            E::Field(name) => ("Field", vec![name.clone()]),
            E::Value(el, field, value) => ("Value", vec![el.clone(), field.clone(), value.clone()]),
            E::Msg(body) => ("Msg", vec![body.clone()]),
            E::Complete => ("Complete", vec![]),
        };
        format_parts(name, &args)
    }
}

fn format_parts(name: &str, args: &[String]) -> String {
    let mut out = name.to_string();
    for arg in args {
        out.push_str(&format!(" {:?}", arg));
    }
    out
}

/// Records every callback into the parser context; optionally aborts at one.
#[derive(Debug, Default)]
pub struct Recorder {
    pub abort_on: Option<Callback>,
}

impl Recorder {
    pub fn aborting(callback: Callback) -> Self {
        Self {
            abort_on: Some(callback),
        }
    }

    fn flow(&self, callback: Callback) -> Flow {
        if self.abort_on == Some(callback) {
            Flow::Break(())
        } else {
            Flow::Continue(())
        }
    }
}

impl Settings<Vec<E>> for Recorder {
    fn on_msg_begin(&mut self, cx: &mut Vec<E>) -> Flow {
        cx.push(E::Begin);
        self.flow(Callback::MsgBegin)
    }

    fn on_msg_head(&mut self, cx: &mut Vec<E>, head: &MessageHead<'_>) -> Flow {
        cx.push(E::Head(
            head.priority.value(),
            head.version,
            [
                lossy(&head.timestamp),
                lossy(&head.hostname),
                lossy(&head.appname),
                lossy(&head.processid),
                lossy(&head.messageid),
            ],
        ));
        self.flow(Callback::MsgHead)
    }

    fn on_sd_element(&mut self, cx: &mut Vec<E>, name: Span<'_>) -> Flow {
        cx.push(E::Element(lossy(&name)));
        self.flow(Callback::SdElement)
    }

    fn on_sd_field(&mut self, cx: &mut Vec<E>, name: Span<'_>) -> Flow {
        cx.push(E::Field(lossy(&name)));
        self.flow(Callback::SdField)
    }

    fn on_sd_value(&mut self, cx: &mut Vec<E>, param: SdParam<'_>) -> Flow {
        cx.push(E::Value(lossy(param.element), lossy(param.field), lossy(&param.value)));
        self.flow(Callback::SdValue)
    }

    fn on_msg(&mut self, cx: &mut Vec<E>, body: Span<'_>) -> Flow {
        cx.push(E::Msg(lossy(&body)));
        self.flow(Callback::Msg)
    }

    fn on_msg_complete(&mut self, cx: &mut Vec<E>) -> Flow {
        cx.push(E::Complete);
        self.flow(Callback::MsgComplete)
    }
}

/// Events and the terminal error (if any) of one parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub events: Vec<E>,
    pub error: Option<ParseError>,
}

impl Outcome {
    /// Adjacent body fragments merged, so chunkings can be compared.
    pub fn coalesced(&self) -> Vec<E> {
        coalesce(&self.events)
    }
}

/// Merge adjacent `Msg` fragments.
pub fn coalesce(events: &[E]) -> Vec<E> {
    let mut out: Vec<E> = Vec::with_capacity(events.len());
    for event in events {
        match (out.last_mut(), event) {
            (Some(E::Msg(prev)), E::Msg(next)) => prev.push_str(next),
            _ => out.push(event.clone()),
        }
    }
    out
}

/// Split `input` at the given (sorted) offsets.
pub fn split_at<'a>(input: &'a [u8], points: &[usize]) -> Vec<&'a [u8]> {
    let mut chunks = Vec::with_capacity(points.len() + 1);
    let mut start = 0;
    for &point in points {
        let point = point.clamp(start, input.len());
        chunks.push(&input[start..point]);
        start = point;
    }
    chunks.push(&input[start..]);
    chunks
}

/// Feed `chunks` in order, then `finish`. Stops at the first error or when
/// the parser stops in `Complete`.
pub fn parse_chunks<'a, I>(config: ParserConfig, recorder: &mut Recorder, chunks: I) -> Outcome
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut parser = Parser::with_config(config, Vec::new());
    let mut error = None;

    for chunk in chunks {
        match parser.exec(recorder, chunk) {
            Ok(n) if n < chunk.len() => break,
            Ok(_) => {}
            Err(err) => {
                error = Some(err);
                break;
            }
        }
    }
    if error.is_none() {
        error = parser.finish(recorder).err();
    }

    Outcome {
        events: parser.into_context(),
        error,
    }
}

pub fn parse_with(config: ParserConfig, input: &[u8]) -> Outcome {
    parse_chunks(config, &mut Recorder::default(), [input])
}

pub fn parse(input: &[u8]) -> Outcome {
    parse_with(ParserConfig::default(), input)
}

// =============================================================================
// Fixture runs
// =============================================================================

/// Result of running a fixture case
#[derive(Debug)]
pub struct TestResult {
    pub passed: bool,
    pub input: Vec<u8>,
    pub chunks: Vec<usize>,
    pub expected: Vec<String>,
    pub actual: Vec<String>,
    pub seed: u64,
    pub errors: Vec<String>,
}

fn format_expected(event: &ExpectedEvent) -> String {
    match event {
        ExpectedEvent::Bare(name) => name.clone(),
        ExpectedEvent::WithContent(parts) => match parts.split_first() {
            Some((name, args)) => format_parts(name, args),
            None => String::new(),
        },
    }
}

fn case_config(case: &TestCase) -> ParserConfig {
    let framing = if case.octet {
        Framing::OctetCounting
    } else {
        Framing::default()
    };
    ParserConfig::default()
        .with_framing(framing)
        .with_strict(case.strict)
        .with_continuous(true)
}

fn check(case: &TestCase, input: Vec<u8>, chunks: Vec<usize>, outcome: Outcome, seed: u64) -> TestResult {
    let actual: Vec<String> = outcome.coalesced().iter().map(E::format).collect();
    let expected: Vec<String> = case.events.iter().map(format_expected).collect();
    let mut errors = Vec::new();

    if actual != expected {
        errors.push("event sequence differs".to_string());
    }
    let actual_error = outcome.error.map(|err| format!("{:?}", err.kind));
    if actual_error != case.error {
        errors.push(format!("expected error {:?}, got {:?}", case.error, actual_error));
    }

    TestResult {
        passed: errors.is_empty(),
        input,
        chunks,
        expected,
        actual,
        seed,
        errors,
    }
}

/// Run a fixture case in one chunk.
pub fn run_test(case: &TestCase) -> TestResult {
    let input = case.input.as_bytes();
    let outcome = parse_chunks(case_config(case), &mut Recorder::default(), [input]);
    check(case, input.to_vec(), vec![input.len()], outcome, 0)
}

/// Run a fixture case split at random points, with blank lines before it
/// when newline framing allows them.
pub fn run_with_variations(case: &TestCase, gen: &mut Gen) -> TestResult {
    let mut input = Vec::new();
    if !case.octet {
        input.extend(gen.blank_lines());
    }
    input.extend(case.input.as_bytes());

    let points = gen.split_points(input.len());
    let chunks = split_at(&input, &points);
    let sizes = chunks.iter().map(|c| c.len()).collect();
    let outcome = parse_chunks(case_config(case), &mut Recorder::default(), chunks.iter().copied());
    check(case, input.clone(), sizes, outcome, gen.seed)
}

impl TestResult {
    /// Print detailed failure info
    pub fn print_failure(&self, case_id: &str) {
        eprintln!("\n=== FAILED: {} ===", case_id);
        eprintln!("Seed: {} (set SYSLOG_TEST_SEED={} to reproduce)", self.seed, self.seed);
        eprintln!("\nInput: {:?}", String::from_utf8_lossy(&self.input));
        eprintln!("Chunk sizes: {:?}", self.chunks);
        eprintln!("\nExpected events:");
        for (i, e) in self.expected.iter().enumerate() {
            eprintln!("  {}: {}", i, e);
        }
        eprintln!("\nActual events:");
        for (i, e) in self.actual.iter().enumerate() {
            eprintln!("  {}: {}", i, e);
        }
        eprintln!("\nErrors:");
        for e in &self.errors {
            eprintln!("  - {}", e);
        }
    }
}
