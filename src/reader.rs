// src/reader.rs
use std::io::{self, BufRead, Read, Write};

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors recorded by [`LineReader`] during a scan.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("error reading line: {0}")]
    Read(#[from] io::Error),

    #[error("error decoding json: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Incrementally decodes newline-delimited JSON from a byte stream.
///
/// Single forward pass: each call to [`read_next`](Self::read_next) consumes
/// one line. A `false` return means either clean end-of-stream or a failure;
/// check [`last_error`](Self::last_error) to tell them apart.
pub struct LineReader<R> {
    inner: io::BufReader<R>,
    line: String,
    err: Option<ScanError>,
}

impl<R: Read> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner: io::BufReader::new(inner),
            line: String::new(),
            err: None,
        }
    }

    /// Reads the next line and decodes it into `target`.
    ///
    /// Returns `false` on end-of-stream (error cleared), on I/O failure or on
    /// decode failure (error recorded).
    pub fn read_next<T: DeserializeOwned>(&mut self, target: &mut T) -> bool {
        self.line.clear();
        match self.inner.read_line(&mut self.line) {
            Ok(0) => {
                self.err = None;
                false
            }
            Ok(_) => match serde_json::from_str(self.line.trim_end_matches(['\n', '\r'])) {
                Ok(decoded) => {
                    *target = decoded;
                    true
                }
                Err(e) => {
                    self.err = Some(ScanError::Decode(e));
                    false
                }
            },
            Err(e) => {
                self.err = Some(ScanError::Read(e));
                false
            }
        }
    }

    /// The most recently recorded error, if any.
    pub fn last_error(&self) -> Option<&ScanError> {
        self.err.as_ref()
    }

    /// Takes the recorded error out of the reader.
    pub fn take_error(&mut self) -> Option<ScanError> {
        self.err.take()
    }
}

/// A `Read` adapter that mirrors every byte read to a sink.
///
/// Mirror-side write failures are swallowed: the tee is a debug aid and must
/// not fail the primary read.
pub struct TeeReader<R, W> {
    reader: R,
    sink: W,
}

impl<R: Read, W: Write> TeeReader<R, W> {
    pub fn new(reader: R, sink: W) -> Self {
        Self { reader, sink }
    }
}

impl<R: Read, W: Write> Read for TeeReader<R, W> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.reader.read(buf)?;
        if n > 0 {
            let _ = self.sink.write_all(&buf[..n]);
        }
        Ok(n)
    }
}
