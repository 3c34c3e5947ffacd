//! Header sources and the flattening field cursor.
//!
//! A response's headers can arrive from a generic name→values map, from the
//! specialized response-header collection, or from the trailer collection.
//! `FieldCursor` presents any of them as one resumable sequence of
//! (name, value) pairs, expanding multi-valued entries in place and skipping
//! entries whose value list is empty.

use std::slice;

use thiserror::Error;

use crate::hpack::HeaderField;

/// One named entry with its ordered value list.
#[derive(Debug, Clone, PartialEq)]
struct HeaderEntry {
    name: String,
    values: Vec<String>,
}

/// Generic ordered mapping of header name to an ordered list of values.
///
/// Entries keep insertion order; a name appears at most once, holding every
/// value bound to it. Stored values are emitted one field per value instance;
/// a comma-joined value is emitted as-is, splitting is the caller's policy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMap {
    entries: Vec<(String, Vec<String>)>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `values` to `name`, replacing any existing entry in place.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<String>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = values,
            None => self.entries.push((name, values)),
        }
    }

    /// Add one value to `name`, creating the entry if absent.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, values)) => values.push(value.into()),
            None => self.entries.push((name, vec![value.into()])),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Response headers for one message, in emission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseHeaders {
    entries: Vec<HeaderEntry>,
}

impl ResponseHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to a single value, replacing any existing values in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.values = vec![value.into()],
            None => self.entries.push(HeaderEntry {
                name,
                values: vec![value.into()],
            }),
        }
    }

    /// Add one value to `name` (e.g. repeated `set-cookie`), creating the
    /// entry if absent. Each value becomes its own field on the wire.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.values.push(value.into()),
            None => self.entries.push(HeaderEntry {
                name,
                values: vec![value.into()],
            }),
        }
    }

    /// Remove every value of `name`. No-op if the entry does not exist.
    pub fn remove(&mut self, name: &str) {
        self.entries.retain(|e| e.name != name);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Pseudo-header field appended to a trailer collection.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("pseudo-header field {0:?} is not allowed in trailers")]
pub struct InvalidTrailer(pub String);

/// Response trailers for one message, in emission order.
///
/// Trailers must not carry pseudo-header fields (RFC 9113 Section 8.1), so
/// `append` validates the name instead of accepting it unchecked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseTrailers {
    entries: Vec<HeaderEntry>,
}

impl ResponseTrailers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one trailer value, creating the entry if absent.
    pub fn append(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), InvalidTrailer> {
        let name = name.into();
        if name.starts_with(':') {
            return Err(InvalidTrailer(name));
        }
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.values.push(value.into()),
            None => self.entries.push(HeaderEntry {
                name,
                values: vec![value.into()],
            }),
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Outer entry iteration over the three source variants. The variant is
/// fixed when the cursor is built; only the outer advance and the name read
/// differ per variant, the inner value mechanics are shared.
#[derive(Debug)]
enum EntryIter<'a> {
    Map(slice::Iter<'a, (String, Vec<String>)>),
    Headers(slice::Iter<'a, HeaderEntry>),
    Trailers(slice::Iter<'a, HeaderEntry>),
}

impl<'a> EntryIter<'a> {
    fn next_entry(&mut self) -> Option<(&'a str, &'a [String])> {
        match self {
            EntryIter::Map(entries) => entries
                .next()
                .map(|(name, values)| (name.as_str(), values.as_slice())),
            EntryIter::Headers(entries) | EntryIter::Trailers(entries) => entries
                .next()
                .map(|entry| (entry.name.as_str(), entry.values.as_slice())),
        }
    }
}

/// Resumable flattening cursor over one header source.
///
/// `advance` establishes the next (name, value) pair; `current` reads the
/// pair established by the most recent successful `advance`. Once `advance`
/// returns `false` the sequence is exhausted for good; a cursor is built per
/// block and discarded with it.
#[derive(Debug)]
pub struct FieldCursor<'a> {
    entries: EntryIter<'a>,
    /// Name of the entry the inner position is bound to.
    name: Option<&'a str>,
    values: slice::Iter<'a, String>,
    current: Option<(&'a str, &'a str)>,
}

impl<'a> FieldCursor<'a> {
    fn new(entries: EntryIter<'a>) -> Self {
        Self {
            entries,
            name: None,
            values: slice::Iter::default(),
            current: None,
        }
    }

    /// Move to the next (name, value) pair. Returns `false` when the source
    /// is exhausted; `current` is then no longer usable.
    pub fn advance(&mut self) -> bool {
        loop {
            if let Some(name) = self.name {
                if let Some(value) = self.values.next() {
                    self.current = Some((name, value.as_str()));
                    return true;
                }
            }
            // Inner position exhausted (or never started): pull the next
            // entry. Entries with empty value lists fall through and the
            // loop pulls again, so they never produce a pair.
            match self.entries.next_entry() {
                Some((name, values)) => {
                    self.name = Some(name);
                    self.values = values.iter();
                }
                None => {
                    self.name = None;
                    self.current = None;
                    return false;
                }
            }
        }
    }

    /// The pair established by the most recent successful `advance`.
    ///
    /// # Panics
    ///
    /// Panics if called before the first `advance`, or after `advance`
    /// returned `false`.
    pub fn current(&self) -> (&'a str, &'a str) {
        self.current
            .expect("no current header field; advance() must succeed first")
    }

    /// Owned copy of the current pair, for callers that outlive the source.
    ///
    /// # Panics
    ///
    /// Same contract as [`current`](Self::current).
    pub fn current_field(&self) -> HeaderField {
        let (name, value) = self.current();
        HeaderField::new(name, value)
    }
}

impl<'a> From<&'a FieldMap> for FieldCursor<'a> {
    fn from(map: &'a FieldMap) -> Self {
        Self::new(EntryIter::Map(map.entries.iter()))
    }
}

impl<'a> From<&'a ResponseHeaders> for FieldCursor<'a> {
    fn from(headers: &'a ResponseHeaders) -> Self {
        Self::new(EntryIter::Headers(headers.entries.iter()))
    }
}

impl<'a> From<&'a ResponseTrailers> for FieldCursor<'a> {
    fn from(trailers: &'a ResponseTrailers) -> Self {
        Self::new(EntryIter::Trailers(trailers.entries.iter()))
    }
}
