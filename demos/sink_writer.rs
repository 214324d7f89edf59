//! Streaming encoded values to output sinks.
//!
//! Run with: cargo run --example sink_writer

use json_dsl::{array, obj, Buffer, Result, Sink, SinkExt, WriterSink};
use std::error::Error;
use std::io;

/// Prefixes every write with its sequence number.
struct NumberedSink {
    next: usize,
}

impl Sink for NumberedSink {
    fn write(&mut self, data: Buffer) -> Result<()> {
        println!("#{} {}", self.next, data.to_str()?);
        self.next += 1;
        Ok(())
    }
}

fn main() -> std::result::Result<(), Box<dyn Error>> {
    let stdout = io::stdout();
    let mut sink = WriterSink::new(stdout.lock());

    for i in 0..3 {
        sink.write_json(&obj! { "event" => "tick", "seq" => i }, false)?;
        sink.write(Buffer::from("\n"))?;
    }
    sink.end_json(&obj! { "event" => "done", "values" => array![1, 2, 3] }, true)?;
    println!();

    let mut numbered = NumberedSink { next: 1 };
    numbered
        .write_json(&array!["a"], false)?
        .write_json(&array!["b"], false)?;

    // NumberedSink has no end-of-stream.
    if let Err(err) = numbered.end_json(&array!["c"], false) {
        println!("end failed: {}", err);
    }

    Ok(())
}
