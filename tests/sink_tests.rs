use json_dsl::{array, json, obj, Buffer, Error, Result, Sink, SinkExt, WriterSink};
use std::io;

/// Records every buffer; refuses to end.
#[derive(Default)]
struct RecordingSink {
    received: Vec<Buffer>,
}

impl Sink for RecordingSink {
    fn write(&mut self, data: Buffer) -> Result<()> {
        self.received.push(data);
        Ok(())
    }
}

/// Records buffers and supports end-of-stream.
#[derive(Default)]
struct EndingSink {
    received: Vec<Buffer>,
    ended: bool,
}

impl Sink for EndingSink {
    fn write(&mut self, data: Buffer) -> Result<()> {
        if self.ended {
            return Err(Error::StreamEnded);
        }
        self.received.push(data);
        Ok(())
    }

    fn end(&mut self) -> Result<()> {
        self.ended = true;
        Ok(())
    }
}

#[derive(Debug)]
struct FailingWriter;

impl io::Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_json_single_write() {
    let mut sink = RecordingSink::default();
    sink.write_json(&json(|j| j.obj([("k", "v")])), false)
        .unwrap();

    assert_eq!(sink.received.len(), 1);
    assert_eq!(sink.received[0].to_str().unwrap(), r#"{"k":"v"}"#);
}

#[test]
fn test_write_json_pretty() {
    let mut sink = RecordingSink::default();
    sink.write_json(&obj! { "k" => array![1] }, true).unwrap();

    assert_eq!(
        sink.received[0].to_str().unwrap(),
        "{\n  \"k\": [\n    1\n  ]\n}"
    );
}

#[test]
fn test_write_json_chains() {
    let mut sink = RecordingSink::default();
    sink.write_json(&array![1], false)
        .unwrap()
        .write_json(&array![2], false)
        .unwrap();

    let texts: Vec<&str> = sink
        .received
        .iter()
        .map(|b| b.to_str().unwrap())
        .collect();
    assert_eq!(texts, ["[1]", "[2]"]);
}

#[test]
fn test_encode_failure_writes_nothing() {
    let mut sink = RecordingSink::default();
    let result = sink.write_json(&obj! { "bad" => f64::NAN }, false);

    assert!(matches!(result, Err(Error::UnsupportedType(_))));
    assert!(sink.received.is_empty());
}

#[test]
fn test_end_json_on_sink_without_end() {
    let mut sink = RecordingSink::default();
    let result = sink.end_json(&obj! { "k" => "v" }, false);

    assert_eq!(
        result.err(),
        Some(Error::SinkOperationUnsupported("end".to_string()))
    );
}

#[test]
fn test_end_json_delivers_then_ends() {
    let mut sink = EndingSink::default();
    sink.write_json(&array![1], false)
        .unwrap()
        .end_json(&array![2], false)
        .unwrap();

    assert!(sink.ended);
    assert_eq!(sink.received.len(), 2);
    assert_eq!(sink.received[1].to_str().unwrap(), "[2]");

    assert_eq!(
        sink.write_json(&array![3], false).err(),
        Some(Error::StreamEnded)
    );
}

#[test]
fn test_end_json_encode_failure_keeps_stream_open() {
    let mut sink = EndingSink::default();
    assert!(sink.end_json(&array![f64::INFINITY], false).is_err());

    assert!(!sink.ended);
    assert!(sink.received.is_empty());
}

#[test]
fn test_writer_sink() {
    let mut sink = WriterSink::new(Vec::new());
    sink.write_json(&obj! { "n" => 1 }, false).unwrap();
    sink.write(Buffer::from("\n")).unwrap();
    sink.end_json(&obj! { "n" => 2 }, false).unwrap();

    assert!(sink.is_ended());
    assert_eq!(sink.get_ref().as_slice(), b"{\"n\":1}\n{\"n\":2}");
}

#[test]
fn test_writer_sink_io_error() {
    let mut sink = WriterSink::new(FailingWriter);
    let err = sink.write_json(&array![1], false).unwrap_err();

    assert!(matches!(err, Error::Io(ref msg) if msg.contains("pipe closed")));
    assert!(!sink.is_ended());
}

#[test]
fn test_sink_through_mutable_reference() {
    fn emit(mut sink: impl Sink) -> Result<()> {
        sink.write_json(&array!["x"], false)?;
        Ok(())
    }

    let mut sink = RecordingSink::default();
    emit(&mut sink).unwrap();
    assert_eq!(sink.received.len(), 1);
}
