//! Output sinks for echoed results.
//!
//! Echo output can be directed to different destinations:
//! - Stdout: the process output stream (default)
//! - Buffer: capture for tests and embedding
//!
//! Uses enum dispatch instead of trait objects for static dispatch on
//! this path.
//!
//! Each sink declares an encoding. Writing text the encoding cannot
//! represent never fails: offending characters are re-escaped with
//! backslash escapes and the escaped text is written instead.

use std::borrow::Cow;
use std::fmt::Write as _;
use std::sync::Arc;

use parking_lot::Mutex;

/// Character encodings a sink can declare.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SinkEncoding {
    /// Any character is representable.
    Utf8,
    /// Only ASCII is representable; everything else escapes.
    Ascii,
}

impl SinkEncoding {
    fn can_represent(self, c: char) -> bool {
        match self {
            SinkEncoding::Utf8 => true,
            SinkEncoding::Ascii => c.is_ascii(),
        }
    }
}

/// Escape the characters `encoding` cannot represent. Borrows when the
/// text already fits.
fn escape_unencodable(text: &str, encoding: SinkEncoding) -> Cow<'_, str> {
    if text.chars().all(|c| encoding.can_represent(c)) {
        return Cow::Borrowed(text);
    }
    tracing::debug!(?encoding, "escaping output the sink encoding cannot represent");
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if encoding.can_represent(c) {
            out.push(c);
        } else {
            let cp = u32::from(c);
            if cp <= 0xff {
                let _ = write!(out, "\\x{cp:02x}");
            } else if cp <= 0xffff {
                let _ = write!(out, "\\u{cp:04x}");
            } else {
                let _ = write!(out, "\\U{cp:08x}");
            }
        }
    }
    Cow::Owned(out)
}

/// Sink that writes to the process output stream.
#[derive(Debug)]
pub struct StdoutSink {
    encoding: SinkEncoding,
}

impl StdoutSink {
    /// Create a stdout sink with the given declared encoding.
    pub fn new(encoding: SinkEncoding) -> Self {
        StdoutSink { encoding }
    }

    /// Write a line of text, escaping what the encoding cannot carry.
    pub fn write_line(&self, text: &str) {
        println!("{}", escape_unencodable(text, self.encoding));
    }
}

/// Sink that captures output for assertions and embedding.
#[derive(Debug)]
pub struct BufferSink {
    encoding: SinkEncoding,
    buffer: Mutex<String>,
}

impl BufferSink {
    /// Create a buffer sink with the given declared encoding.
    pub fn new(encoding: SinkEncoding) -> Self {
        BufferSink {
            encoding,
            buffer: Mutex::new(String::new()),
        }
    }

    /// Write a line of text, escaping what the encoding cannot carry.
    pub fn write_line(&self, text: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(&escape_unencodable(text, self.encoding));
        buf.push('\n');
    }

    /// All captured output.
    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Clear captured output.
    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

/// Output sink implementation using enum dispatch.
#[derive(Debug)]
pub enum OutputSink {
    /// Writes to stdout (default).
    Stdout(StdoutSink),
    /// Captures to a buffer (tests/embedding).
    Buffer(BufferSink),
}

impl OutputSink {
    /// Write a line of text.
    pub fn write_line(&self, text: &str) {
        match self {
            Self::Stdout(s) => s.write_line(text),
            Self::Buffer(s) => s.write_line(text),
        }
    }

    /// All captured output. Empty for sinks that don't capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Stdout(_) => String::new(),
            Self::Buffer(s) => s.get_output(),
        }
    }

    /// Clear captured output.
    pub fn clear(&self) {
        match self {
            Self::Stdout(_) => {}
            Self::Buffer(s) => s.clear(),
        }
    }
}

/// Shared sink that can be passed around.
pub type SharedSink = Arc<OutputSink>;

/// Stdout sink with the full UTF-8 repertoire.
pub fn stdout_sink() -> SharedSink {
    Arc::new(OutputSink::Stdout(StdoutSink::new(SinkEncoding::Utf8)))
}

/// Stdout sink declared ASCII-only; non-ASCII output escapes.
pub fn ascii_stdout_sink() -> SharedSink {
    Arc::new(OutputSink::Stdout(StdoutSink::new(SinkEncoding::Ascii)))
}

/// Capturing sink with the full UTF-8 repertoire.
pub fn buffer_sink() -> SharedSink {
    Arc::new(OutputSink::Buffer(BufferSink::new(SinkEncoding::Utf8)))
}

/// Capturing sink declared ASCII-only; non-ASCII output escapes.
pub fn ascii_buffer_sink() -> SharedSink {
    Arc::new(OutputSink::Buffer(BufferSink::new(SinkEncoding::Ascii)))
}
