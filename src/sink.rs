//! Output sinks.
//!
//! A [`Sink`] accepts whole [`Buffer`]s and an end-of-stream signal. Flow
//! control belongs to the sink; this crate issues exactly one
//! [`Sink::write`] per encoded value.
//!
//! [`SinkExt`] adds the JSON entry points to every sink, and [`WriterSink`]
//! adapts any [`std::io::Write`].
//!
//! ## Examples
//!
//! ```rust
//! use json_dsl::{obj, SinkExt, WriterSink};
//!
//! let mut sink = WriterSink::new(Vec::new());
//! sink.write_json(&obj! { "event" => "start" }, false)
//!     .unwrap()
//!     .end_json(&obj! { "event" => "stop" }, false)
//!     .unwrap();
//!
//! assert!(sink.is_ended());
//! assert_eq!(
//!     String::from_utf8(sink.into_inner()).unwrap(),
//!     r#"{"event":"start"}{"event":"stop"}"#
//! );
//! ```

use crate::{Buffer, Error, Result};
use serde::Serialize;
use std::io;

/// A destination for encoded output.
///
/// Only [`Sink::write`] is required. [`Sink::end`] reports
/// [`Error::SinkOperationUnsupported`] unless the implementation overrides it.
pub trait Sink {
    /// Delivers `data` in one write.
    ///
    /// # Errors
    ///
    /// Whatever the underlying destination reports.
    fn write(&mut self, data: Buffer) -> Result<()>;

    /// Signals end-of-stream; no writes are accepted afterwards.
    ///
    /// # Errors
    ///
    /// [`Error::SinkOperationUnsupported`] by default.
    fn end(&mut self) -> Result<()> {
        Err(Error::sink_unsupported("end"))
    }

    /// Writes `data`, then ends the stream.
    ///
    /// # Errors
    ///
    /// Fails if either the write or the end fails.
    fn end_with(&mut self, data: Buffer) -> Result<()> {
        self.write(data)?;
        self.end()
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn write(&mut self, data: Buffer) -> Result<()> {
        (**self).write(data)
    }

    fn end(&mut self) -> Result<()> {
        (**self).end()
    }

    fn end_with(&mut self, data: Buffer) -> Result<()> {
        (**self).end_with(data)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write(&mut self, data: Buffer) -> Result<()> {
        (**self).write(data)
    }

    fn end(&mut self) -> Result<()> {
        (**self).end()
    }

    fn end_with(&mut self, data: Buffer) -> Result<()> {
        (**self).end_with(data)
    }
}

/// JSON entry points available on every [`Sink`].
pub trait SinkExt: Sink {
    /// Encodes `value` into a fresh buffer and writes it in a single call.
    ///
    /// Nothing is written when encoding fails.
    ///
    /// # Errors
    ///
    /// Encoding errors, or whatever the sink's write reports.
    fn write_json<T>(&mut self, value: &T, pretty: bool) -> Result<&mut Self>
    where
        T: ?Sized + Serialize,
    {
        let mut buffer = Buffer::new();
        buffer.append_json(value, pretty)?;
        self.write(buffer)?;
        Ok(self)
    }

    /// Encodes `value`, writes it, and ends the stream.
    ///
    /// Nothing is written and the stream stays open when encoding fails.
    ///
    /// # Errors
    ///
    /// Encoding errors, or whatever the sink's write or end reports.
    fn end_json<T>(&mut self, value: &T, pretty: bool) -> Result<&mut Self>
    where
        T: ?Sized + Serialize,
    {
        let mut buffer = Buffer::new();
        buffer.append_json(value, pretty)?;
        self.end_with(buffer)?;
        Ok(self)
    }
}

impl<S: Sink + ?Sized> SinkExt for S {}

/// A [`Sink`] over any [`io::Write`].
///
/// Each write is a single `write_all`; ending flushes the writer and rejects
/// later writes with [`Error::StreamEnded`].
#[derive(Debug)]
pub struct WriterSink<W: io::Write> {
    writer: W,
    ended: bool,
}

impl<W: io::Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        WriterSink {
            writer,
            ended: false,
        }
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: io::Write> Sink for WriterSink<W> {
    fn write(&mut self, data: Buffer) -> Result<()> {
        if self.ended {
            return Err(Error::StreamEnded);
        }
        self.writer.write_all(data.as_bytes())?;
        Ok(())
    }

    fn end(&mut self) -> Result<()> {
        if self.ended {
            return Err(Error::StreamEnded);
        }
        self.writer.flush()?;
        self.ended = true;
        Ok(())
    }
}
