//! Parse syslog from stdin in small chunks and print each message.
//!
//!   printf '<34>1 - host su - - - hi\n' | RUST_LOG=syslog_core=trace cargo run --example stdin_parse
//!   cargo run --example stdin_parse -- --octet < framed.log

use std::io::Read;

use syslog_core::{Framing, MessageCollector, Parser, ParserConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut config = ParserConfig::stream();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--octet" => config = config.with_framing(Framing::OctetCounting),
            "--strict" => config = config.with_strict(true),
            other => eprintln!("ignoring argument {:?}", other),
        }
    }

    let mut parser = Parser::with_config(config, Vec::new());
    let mut collector = MessageCollector::new();
    let mut stdin = std::io::stdin().lock();
    let mut buf = [0u8; 256];

    loop {
        let n = match stdin.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) => {
                eprintln!("read error: {}", err);
                return;
            }
        };
        if let Err(err) = parser.exec(&mut collector, &buf[..n]) {
            eprintln!("parse error: {}", err);
            parser.reset();
        }
        for msg in parser.context_mut().drain(..) {
            println!("{} {}", msg.priority, msg);
        }
    }

    if let Err(err) = parser.finish(&mut collector) {
        eprintln!("parse error: {}", err);
    }
    for msg in parser.into_context() {
        println!("{} {}", msg.priority, msg);
    }
}
