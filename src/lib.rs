//! hpack-block-writer: incremental HPACK header block serialization
//!
//! This crate turns a logical set of HTTP/2 response headers (or trailers,
//! or a leading `:status` field) into a compressed header block, packed into
//! caller-supplied buffers that may be smaller than the whole block.
//!
//! # Features
//!
//! - **Sans-I/O Design**: no async runtime, no transport; you own the buffers
//! - **Resumable**: a block that does not fit one buffer continues into the
//!   next, field by field, never re-encoding or skipping a field
//! - **Three header sources**: a generic [`FieldMap`], specialized
//!   [`ResponseHeaders`], and [`ResponseTrailers`] behind one cursor
//! - **HPACK via fluke-hpack**: the per-field compression and its state live
//!   in [`FieldEncoder`], one per connection
//! - **Status-line fast path**: static-table status codes encode as a single
//!   byte before the first header field
//!
//! # Quick Start
//!
//! ```rust
//! use hpack_block_writer::{FieldEncoder, HeaderBlockWriter, ResponseHeaders};
//!
//! let mut headers = ResponseHeaders::new();
//! headers.set("content-type", "text/html");
//! headers.append("set-cookie", "session=xyz");
//! headers.append("set-cookie", "theme=dark");
//!
//! // One encoder per connection, one writer per header block.
//! let mut encoder = FieldEncoder::new();
//! let mut writer = HeaderBlockWriter::new(&mut encoder, &headers);
//!
//! let mut buf = [0u8; 1024];
//! let progress = writer.begin_with_status(200, &mut buf).unwrap();
//! assert!(progress.complete);
//! let header_block = &buf[..progress.written];
//! // Frame `header_block` as HEADERS; had `complete` been false, each
//! // writer.resume(&mut buf) segment would become a CONTINUATION frame.
//! # assert!(!header_block.is_empty());
//! ```
//!
//! # Architecture
//!
//! This crate is intentionally minimal. It provides:
//! - Header sources and a flattening field cursor (collections → pairs)
//! - A bounded block writer (pairs → compressed bytes, buffer by buffer)
//! - An HPACK wrapper (single-field and status-code encoding)
//!
//! It does NOT provide:
//! - Frame construction (HEADERS/CONTINUATION framing is downstream)
//! - TCP/TLS transport (you provide the buffers and move the bytes)
//! - HPACK decoding (this is the write side of a server)

pub mod hpack;
pub mod source;
pub mod writer;

pub use hpack::{FieldEncoder, HeaderField};
pub use source::{FieldCursor, FieldMap, InvalidTrailer, ResponseHeaders, ResponseTrailers};
pub use writer::{BlockProgress, HeaderBlockWriter, HpackWriteError};
