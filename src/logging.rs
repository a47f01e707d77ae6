//! Console logging for recorder and replay diagnostics.
//!
//! The library only emits `tracing` events. Applications that want to see
//! them without wiring their own subscriber can call [`install_tracing`].

use std::io::{self, Write};
use std::str::FromStr;
use std::sync::Once;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;

const TRACING_PREFIX: &str = "[canvas-primitives]";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;

static TRACING_INSTALLED: Once = Once::new();

/// Parses a level name such as `"debug"`, falling back to `info`.
#[must_use]
pub fn parse_level(level: &str) -> LevelFilter {
    LevelFilter::from_str(level.trim()).unwrap_or(DEFAULT_LOG_LEVEL)
}

/// Install a stderr subscriber filtered by `RUST_LOG` (idempotent).
///
/// Without `RUST_LOG` the `info` level is used.
pub fn install_tracing() {
    install(DEFAULT_LOG_LEVEL);
}

/// Install a stderr subscriber with `level` as the fallback filter
/// (idempotent). `RUST_LOG` still takes precedence when set.
pub fn install_tracing_with_level(level: &str) {
    install(parse_level(level));
}

fn install(level: LevelFilter) {
    TRACING_INSTALLED.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

        let console = tracing_subscriber::fmt::layer()
            .with_writer(StderrLines)
            .with_ansi(false)
            .with_filter(filter);

        if tracing_subscriber::registry().with(console).try_init().is_err() {
            eprintln!("{TRACING_PREFIX} a global tracing subscriber is already set");
        }
    });
}

/// Hands out one [`EventLine`] per formatted event.
#[derive(Clone, Copy, Default)]
struct StderrLines;

impl<'a> MakeWriter<'a> for StderrLines {
    type Writer = EventLine<io::Stderr>;

    fn make_writer(&'a self) -> Self::Writer {
        EventLine::new(io::stderr())
    }
}

/// Collects the pieces of a single event and writes them to `sink` as one
/// prefixed line when dropped, so concurrent events never interleave.
struct EventLine<W: Write> {
    sink: W,
    line: Vec<u8>,
}

impl<W: Write> EventLine<W> {
    fn new(sink: W) -> Self {
        let mut line = Vec::with_capacity(128);
        line.extend_from_slice(TRACING_PREFIX.as_bytes());
        line.push(b' ');
        Self { sink, line }
    }

    fn has_content(&self) -> bool {
        self.line.len() > TRACING_PREFIX.len() + 1
    }

    fn emit(&mut self) -> io::Result<()> {
        if !self.has_content() {
            return Ok(());
        }
        self.sink.write_all(&self.line)?;
        self.line.truncate(TRACING_PREFIX.len() + 1);
        self.sink.flush()
    }
}

impl<W: Write> Write for EventLine<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.line.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<W: Write> Drop for EventLine<W> {
    fn drop(&mut self) {
        // Nowhere left to report a failed diagnostic write.
        let _ = self.emit();
    }
}
