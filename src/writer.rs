//! Bounded header-block writer.
//!
//! Drives a `FieldCursor` over a header source and packs the encoded fields
//! into caller-supplied buffers. Each call fills one buffer as far as it
//! can; when the block does not fit, the session stays positioned at the
//! field that did not fit and `resume` continues it into a fresh buffer
//! (the downstream framer turns those segments into HEADERS and
//! CONTINUATION frames).

use thiserror::Error;
use tracing::trace;

use crate::hpack::FieldEncoder;
use crate::source::FieldCursor;

/// Outcome of one packing call: bytes written into this buffer, and whether
/// the header block is now fully encoded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockProgress {
    pub written: usize,
    pub complete: bool,
}

/// Header-block encoding failed outright.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HpackWriteError {
    /// A call that must make progress encoded zero fields: the buffer cannot
    /// hold even one encoded field (or the source had none to offer a plain
    /// block). Terminal for the session; retrying with the same buffer size
    /// cannot succeed.
    #[error("output buffer ({0} bytes) too small to encode a single header field")]
    BufferTooSmall(usize),
}

/// One header-block encoding session.
///
/// Wraps a `FieldCursor` over the block's source plus the connection's
/// `FieldEncoder`, which outlives the session and keeps the compression
/// state. Create one writer per block (headers or trailers), call `begin`
/// or `begin_with_status` once, then `resume` until `complete` is true,
/// sending each filled buffer downstream in between.
#[derive(Debug)]
pub struct HeaderBlockWriter<'a> {
    encoder: &'a mut FieldEncoder,
    cursor: FieldCursor<'a>,
    /// True while `cursor.current()` holds a field not yet written out.
    pending: bool,
}

impl<'a> HeaderBlockWriter<'a> {
    pub fn new(encoder: &'a mut FieldEncoder, source: impl Into<FieldCursor<'a>>) -> Self {
        Self {
            encoder,
            cursor: source.into(),
            pending: false,
        }
    }

    /// Start encoding the block into `buf`. At least one field must fit,
    /// otherwise the attempt fails with `BufferTooSmall`.
    pub fn begin(&mut self, buf: &mut [u8]) -> Result<BlockProgress, HpackWriteError> {
        self.pending = self.cursor.advance();
        let progress = self.pack(buf, true)?;
        trace!(
            written = progress.written,
            complete = progress.complete,
            "header block started"
        );
        Ok(progress)
    }

    /// Start encoding the block into `buf` with a leading `:status` field.
    ///
    /// The status field alone is a valid first segment, so encoding zero
    /// header fields after it is not an error here.
    pub fn begin_with_status(
        &mut self,
        status: u16,
        buf: &mut [u8],
    ) -> Result<BlockProgress, HpackWriteError> {
        self.pending = self.cursor.advance();
        let status_len = self
            .encoder
            .encode_status(status, buf)
            .ok_or(HpackWriteError::BufferTooSmall(buf.len()))?;
        let rest = self.pack(&mut buf[status_len..], false)?;
        let progress = BlockProgress {
            written: status_len + rest.written,
            complete: rest.complete,
        };
        trace!(
            status,
            written = progress.written,
            complete = progress.complete,
            "header block started"
        );
        Ok(progress)
    }

    /// Continue an in-progress block into a fresh buffer, starting with the
    /// field that did not fit last time. Must make progress: zero fields
    /// encoded is `BufferTooSmall`.
    pub fn resume(&mut self, buf: &mut [u8]) -> Result<BlockProgress, HpackWriteError> {
        let progress = self.pack(buf, true)?;
        trace!(
            written = progress.written,
            complete = progress.complete,
            "header block resumed"
        );
        Ok(progress)
    }

    /// Shared packing loop. The first field has already been established by
    /// `advance` before this runs, which keeps the loop body uniform:
    /// encode current, then advance, then check.
    fn pack(&mut self, buf: &mut [u8], strict: bool) -> Result<BlockProgress, HpackWriteError> {
        if !self.pending {
            // Nothing to encode: the source was empty (or already drained).
            if strict {
                return Err(HpackWriteError::BufferTooSmall(buf.len()));
            }
            return Ok(BlockProgress {
                written: 0,
                complete: true,
            });
        }

        let mut written = 0;
        loop {
            let (name, value) = self.cursor.current();
            match self.encoder.encode_field(name, value, &mut buf[written..]) {
                Some(len) => {
                    written += len;
                    self.pending = self.cursor.advance();
                    if !self.pending {
                        return Ok(BlockProgress {
                            written,
                            complete: true,
                        });
                    }
                }
                None => {
                    // Field does not fit. The cursor stays on it so the next
                    // resume call retries it first.
                    if written == 0 && strict {
                        return Err(HpackWriteError::BufferTooSmall(buf.len()));
                    }
                    return Ok(BlockProgress {
                        written,
                        complete: false,
                    });
                }
            }
        }
    }
}
