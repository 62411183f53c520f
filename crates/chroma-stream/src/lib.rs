//! # chroma-stream
//!
//! Streaming execution of resolved colorspace conversions.
//!
//! The pipeline is single-threaded, synchronous and pull-based: it blocks
//! on each read and write at its external boundaries, buffers at most one
//! record, and shares no mutable state across records or across concurrent
//! pipelines. Per-record work is O(1) affine math that never blocks;
//! suspension only ever happens inside the collaborating source or sink.
//!
//! # Collaborators
//!
//! The engine consumes and produces an abstract tagged numeric record
//! stream: a [`RecordSource`] yields positional [`Pixel`](chroma_core::Pixel)
//! records until end of stream, a [`RecordSink`] accepts and flushes them.
//! Concrete encodings
//! (delimited text, fixed-width binary, extra non-channel fields) belong to
//! the collaborator, not to this crate; [`VecSource`] and [`VecSink`]
//! provide in-memory implementations for embedding and tests.
//!
//! # Example
//!
//! ```
//! use chroma_convert::{resolve, Encoding};
//! use chroma_core::{Colorspace, Pixel, Range};
//! use chroma_stream::{run, VecSink, VecSource};
//!
//! let bound = resolve(
//!     Encoding::new(Colorspace::Rgb, Range::Ub),
//!     Encoding::new(Colorspace::YCbCr, Range::Ub),
//!     Range::Ub,
//! )
//! .unwrap();
//!
//! let mut source = VecSource::new(vec![Pixel::<u8>::new(128, 128, 128)]);
//! let mut sink = VecSink::<u8>::new();
//! let count = run(&bound, &mut source, &mut sink, false).unwrap();
//! assert_eq!(count, 1);
//! assert_eq!(sink.records()[0], Pixel::new(126, 128, 128));
//! ```

#![warn(missing_docs)]

pub mod error;
mod memory;
mod pipeline;
mod record;

pub use error::{Result, StreamError};
pub use memory::{VecSink, VecSource};
pub use pipeline::run;
pub use record::{FnSource, RecordSink, RecordSource};
