//! The streaming conversion loop.

use crate::error::{Result, StreamError};
use crate::record::{RecordSink, RecordSource};
use chroma_core::{Channel, Pixel};
use chroma_convert::BoundConversion;

/// Runs a bound conversion over a record stream.
///
/// Produces a lazy, order-preserving, one-to-one mapping: each source
/// record is widened to double precision, passed through `bound`, rounded
/// into the destination storage type `D` (half away from zero for integral
/// destinations) and written to the sink. At most one record is in flight.
///
/// Terminates normally when the source reports end of stream, returning the
/// number of records converted. Read and write failures propagate unchanged
/// and abort the stream; whatever the sink flushed before the failure
/// remains valid.
///
/// With `flush_per_record` the sink is flushed after every emitted record,
/// trading throughput for durability of partial output on early
/// termination; the sink is always flushed once at end of stream, so the
/// flag changes flush timing only, never content.
///
/// # Errors
///
/// Fails with [`StreamError::StorageMismatch`] before reading anything when
/// `D` is not the storage type the conversion was resolved for - the
/// resolver's validation must not be bypassable by picking a different sink
/// type.
pub fn run<S, D, R, W>(
    bound: &BoundConversion,
    source: &mut R,
    sink: &mut W,
    flush_per_record: bool,
) -> Result<u64>
where
    S: Channel,
    D: Channel,
    R: RecordSource<S> + ?Sized,
    W: RecordSink<D> + ?Sized,
{
    if D::RANGE != bound.storage() {
        return Err(StreamError::StorageMismatch {
            expected: bound.storage(),
            got: D::RANGE,
        });
    }

    let mut count: u64 = 0;
    while let Some(record) = source.read()? {
        let converted = bound.apply(record.to_f64());
        sink.write(Pixel::from_f64(converted))?;
        count += 1;
        if flush_per_record {
            sink.flush()?;
        }
    }
    sink.flush()?;
    tracing::debug!(records = count, from = %bound.source(), to = %bound.target(), "stream exhausted");
    Ok(count)
}
