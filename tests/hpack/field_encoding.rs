//! Tests for bounded single-field encoding

use hpack_block_writer::FieldEncoder;

fn decode(data: &[u8]) -> Vec<(String, String)> {
    let mut decoder = fluke_hpack::Decoder::new();
    decoder
        .decode(data)
        .unwrap()
        .into_iter()
        .map(|(name, value)| {
            (
                String::from_utf8(name).unwrap(),
                String::from_utf8(value).unwrap(),
            )
        })
        .collect()
}

#[test]
fn test_single_field_roundtrip() {
    let mut encoder = FieldEncoder::new();
    let mut buf = [0u8; 256];

    let len = encoder
        .encode_field("content-type", "application/json", &mut buf)
        .unwrap();
    assert_eq!(
        decode(&buf[..len]),
        vec![("content-type".to_string(), "application/json".to_string())]
    );
}

#[test]
fn test_sequential_fields_decode_in_order() {
    let mut encoder = FieldEncoder::new();
    let mut buf = [0u8; 256];
    let mut offset = 0;

    for (name, value) in [("a", "1"), ("b", "2"), ("c", "3")] {
        offset += encoder
            .encode_field(name, value, &mut buf[offset..])
            .unwrap();
    }

    assert_eq!(
        decode(&buf[..offset]),
        vec![
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "2".to_string()),
            ("c".to_string(), "3".to_string()),
        ]
    );
}

#[test]
fn test_exact_fit_succeeds_one_byte_short_fails() {
    let mut encoder = FieldEncoder::new();
    let mut scratch = [0u8; 256];
    let needed = encoder
        .encode_field("x-custom", "value", &mut scratch)
        .unwrap();

    let mut exact = vec![0u8; needed];
    assert_eq!(
        encoder.encode_field("x-custom", "value", &mut exact),
        Some(needed)
    );

    let mut short = vec![0u8; needed - 1];
    assert_eq!(encoder.encode_field("x-custom", "value", &mut short), None);
}

#[test]
fn test_failed_fit_leaves_buffer_untouched() {
    let mut encoder = FieldEncoder::new();
    let mut buf = [0xAAu8; 3];

    assert!(encoder
        .encode_field("content-type", "text/html", &mut buf)
        .is_none());
    assert_eq!(buf, [0xAA, 0xAA, 0xAA]);
}

#[test]
fn test_empty_value_is_encodable() {
    let mut encoder = FieldEncoder::new();
    let mut buf = [0u8; 64];

    let len = encoder.encode_field("x-empty", "", &mut buf).unwrap();
    assert_eq!(
        decode(&buf[..len]),
        vec![("x-empty".to_string(), String::new())]
    );
}
