//! Integration tests for the header block writer

mod common;
