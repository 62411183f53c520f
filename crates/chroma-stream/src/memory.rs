//! In-memory record stream adapters.
//!
//! Useful for embedding the engine without an external stream collaborator,
//! and as the reference implementation the tests run against.

use crate::error::Result;
use crate::record::{RecordSink, RecordSource};
use chroma_core::{Channel, Pixel};

/// A [`RecordSource`] over an owned vector of records.
#[derive(Debug)]
pub struct VecSource<T> {
    records: std::vec::IntoIter<Pixel<T>>,
}

impl<T: Channel> VecSource<T> {
    /// Creates a source yielding `records` in order.
    pub fn new(records: Vec<Pixel<T>>) -> Self {
        Self { records: records.into_iter() }
    }
}

impl<T: Channel> RecordSource<T> for VecSource<T> {
    fn read(&mut self) -> Result<Option<Pixel<T>>> {
        Ok(self.records.next())
    }
}

/// A [`RecordSink`] collecting records into a vector.
///
/// Counts flushes so tests can assert flush timing without touching
/// content.
#[derive(Debug, Default)]
pub struct VecSink<T> {
    records: Vec<Pixel<T>>,
    flushes: usize,
}

impl<T: Channel> VecSink<T> {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self { records: Vec::new(), flushes: 0 }
    }

    /// Records written so far, in write order.
    pub fn records(&self) -> &[Pixel<T>] {
        &self.records
    }

    /// Consumes the sink, returning the collected records.
    pub fn into_records(self) -> Vec<Pixel<T>> {
        self.records
    }

    /// Number of times [`flush`](RecordSink::flush) was called.
    pub fn flush_count(&self) -> usize {
        self.flushes
    }
}

impl<T: Channel> RecordSink<T> for VecSink<T> {
    fn write(&mut self, record: Pixel<T>) -> Result<()> {
        self.records.push(record);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_source_exhausts() {
        let mut source = VecSource::new(vec![Pixel::<u8>::new(1, 2, 3)]);
        assert_eq!(source.read().unwrap(), Some(Pixel::new(1, 2, 3)));
        assert_eq!(source.read().unwrap(), None);
        assert_eq!(source.read().unwrap(), None);
    }

    #[test]
    fn test_vec_sink_collects_in_order() {
        let mut sink = VecSink::<u16>::new();
        sink.write(Pixel::new(1, 1, 1)).unwrap();
        sink.write(Pixel::new(2, 2, 2)).unwrap();
        sink.flush().unwrap();
        assert_eq!(sink.records().len(), 2);
        assert_eq!(sink.records()[1], Pixel::new(2, 2, 2));
        assert_eq!(sink.flush_count(), 1);
    }

    #[test]
    fn test_fn_source_adapter() {
        use crate::record::FnSource;

        let mut remaining = 2u8;
        let mut source = FnSource(move || -> Result<Option<Pixel<u8>>> {
            if remaining == 0 {
                return Ok(None);
            }
            remaining -= 1;
            Ok(Some(Pixel::new(remaining, 0, 0)))
        });
        assert_eq!(source.read().unwrap(), Some(Pixel::new(1, 0, 0)));
        assert_eq!(source.read().unwrap(), Some(Pixel::new(0, 0, 0)));
        assert_eq!(source.read().unwrap(), None);
    }
}
