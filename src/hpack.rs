//! HPACK: Header Compression for HTTP/2 (RFC 7541)
//!
//! Thin wrapper around `fluke-hpack` providing the HeaderField type and the
//! bounded single-field encoder the block writer drives. The compression
//! state lives here, per connection, and outlives individual block writers.

/// One HTTP/2 header field as an owned (name, value) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderField {
    pub name: String,
    pub value: String,
}

impl HeaderField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Static-table entries 8..=14 are `:status` with these values (RFC 7541
/// Appendix A). Each encodes as a single indexed-field byte.
const STATIC_STATUS_CODES: [(u16, u8); 7] = [
    (200, 8),
    (204, 9),
    (206, 10),
    (304, 11),
    (400, 12),
    (404, 13),
    (500, 14),
];

/// Static-table index of the `:status` name, used for the literal fallback.
const STATUS_NAME_INDEX: u8 = 8;

/// Bounded single-field HPACK encoder for HTTP/2 header blocks.
/// Wraps `fluke_hpack::Encoder` which maintains compression state
/// per-connection; one `FieldEncoder` serves every header and trailer
/// block on that connection.
pub struct FieldEncoder {
    inner: fluke_hpack::Encoder<'static>,
}

impl std::fmt::Debug for FieldEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldEncoder").finish()
    }
}

impl Default for FieldEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldEncoder {
    pub fn new() -> Self {
        Self {
            inner: fluke_hpack::Encoder::new(),
        }
    }

    /// Encode one header field into `buf`, returning the number of bytes
    /// written, or `None` if the encoded field does not fit in `buf`.
    ///
    /// The encoding strategy never inserts into the dynamic table, so a
    /// field that did not fit can be retried against a later buffer and
    /// will produce identical bytes.
    pub fn encode_field(&mut self, name: &str, value: &str, buf: &mut [u8]) -> Option<usize> {
        let encoded = self
            .inner
            .encode(std::iter::once((name.as_bytes(), value.as_bytes())));
        if encoded.len() > buf.len() {
            return None;
        }
        buf[..encoded.len()].copy_from_slice(&encoded);
        Some(encoded.len())
    }

    /// Encode a `:status` field into the start of `buf`.
    ///
    /// Codes present in the HPACK static table (200, 204, 206, 304, 400,
    /// 404, 500) encode as a single indexed byte; any other code encodes as
    /// a literal without indexing with the indexed `:status` name followed
    /// by the 3-digit ASCII code. Returns `None` only when `buf` cannot hold
    /// even that small fixed form.
    pub fn encode_status(&mut self, code: u16, buf: &mut [u8]) -> Option<usize> {
        if let Some(&(_, index)) = STATIC_STATUS_CODES.iter().find(|&&(c, _)| c == code) {
            let first = buf.first_mut()?;
            *first = 0x80 | index;
            return Some(1);
        }

        // Literal without indexing, indexed name, plain 3-digit value:
        // 0x08, length 3, then the ASCII digits.
        debug_assert!((100..=999).contains(&code), "status code must be 3 digits");
        if buf.len() < 5 {
            return None;
        }
        buf[0] = STATUS_NAME_INDEX;
        buf[1] = 3;
        buf[2] = b'0' + (code / 100) as u8;
        buf[3] = b'0' + (code / 10 % 10) as u8;
        buf[4] = b'0' + (code % 10) as u8;
        Some(5)
    }
}
