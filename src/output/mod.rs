mod errors;
mod sink;

pub use errors::SinkError;
pub use sink::OutputSink;
#[cfg(test)]
pub use sink::{CSV_FILE_NAME, CSV_HEADER, JSON_FILE_NAME};
