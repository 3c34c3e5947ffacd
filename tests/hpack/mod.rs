//! Integration tests for the HPACK field encoder seam

mod field_encoding;
