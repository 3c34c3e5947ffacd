//! Shared helpers for writer tests

use hpack_block_writer::FieldEncoder;

/// Encoded size of one field, measured with a throwaway encoder so tests can
/// size buffers to "exactly k fields" without hard-coding wire lengths.
pub fn field_len(name: &str, value: &str) -> usize {
    let mut encoder = FieldEncoder::new();
    let mut buf = [0u8; 1024];
    encoder
        .encode_field(name, value, &mut buf)
        .expect("scratch buffer fits any test field")
}

/// Decode a header block back into (name, value) pairs.
pub fn decode_block(data: &[u8]) -> Vec<(String, String)> {
    let mut decoder = fluke_hpack::Decoder::new();
    decoder
        .decode(data)
        .expect("test output must be a valid header block")
        .into_iter()
        .map(|(name, value)| {
            (
                String::from_utf8(name).unwrap(),
                String::from_utf8(value).unwrap(),
            )
        })
        .collect()
}
