use std::collections::HashMap;

use crate::codes;
use crate::error::FeedError;

pub const RECORD_SEPARATOR: char = '~';
pub const FIELD_SEPARATOR: char = '¬';
pub const KEY_VALUE_SEPARATOR: char = '÷';
/// One legacy variant of the encoding joins key and value with a middle
/// dot instead of the division sign.
pub const LEGACY_KEY_VALUE_SEPARATOR: char = '·';

/// One decoded feed record: a flat field-code to value map. A repeated
/// code within the same record is kept under a numbered alternate key
/// (`IF`, `IF_2`, ...) instead of overwriting the first occurrence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    pub fn get(&self, code: &str) -> Option<&str> {
        self.fields.get(code).map(String::as_str)
    }

    pub fn has(&self, code: &str) -> bool {
        self.fields.contains_key(code)
    }

    /// Typed access to a field the stream contract requires.
    pub fn require(&self, code: &'static str) -> Result<&str, FeedError> {
        self.get(code).ok_or(FeedError::MissingField { code })
    }

    pub fn require_i64(&self, code: &'static str) -> Result<i64, FeedError> {
        let raw = self.require(code)?;
        raw.parse().map_err(|_| FeedError::InvalidNumber {
            code,
            value: raw.to_string(),
        })
    }

    /// Optional numeric field; absent or empty means unset, never zero.
    pub fn optional_u32(&self, code: &'static str) -> Result<Option<u32>, FeedError> {
        match self.get(code) {
            None => Ok(None),
            Some("") => Ok(None),
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| FeedError::InvalidNumber {
                    code,
                    value: raw.to_string(),
                }),
        }
    }

    /// True when the field is absent or holds an empty value.
    pub fn is_blank(&self, code: &str) -> bool {
        self.get(code).is_none_or(str::is_empty)
    }

    fn insert(&mut self, key: &str, value: &str) {
        if !self.fields.contains_key(key) {
            self.fields.insert(key.to_string(), value.to_string());
            return;
        }
        let mut occurrence = 2usize;
        loop {
            let alternate = format!("{key}_{occurrence}");
            if !self.fields.contains_key(&alternate) {
                self.fields.insert(alternate, value.to_string());
                return;
            }
            occurrence += 1;
        }
    }
}

/// Decodes one raw payload into its ordered record sequence.
pub fn decode(payload: &str) -> Result<Vec<Record>, FeedError> {
    let mut records = Vec::new();
    for segment in payload.split(RECORD_SEPARATOR) {
        if segment.trim().is_empty() {
            continue;
        }
        records.push(decode_record(segment)?);
    }
    Ok(records)
}

fn decode_record(segment: &str) -> Result<Record, FeedError> {
    let mut record = Record::default();
    for field in segment.split(FIELD_SEPARATOR) {
        if field.trim().is_empty() {
            continue;
        }
        let (key, value) = split_field(field)?;
        record.insert(key, value);
    }
    Ok(record)
}

fn split_field(field: &str) -> Result<(&str, &str), FeedError> {
    field
        .split_once(KEY_VALUE_SEPARATOR)
        .or_else(|| field.split_once(LEGACY_KEY_VALUE_SEPARATOR))
        .ok_or_else(|| FeedError::MalformedField {
            segment: field.to_string(),
        })
}

/// Drops the trailing padding record the stats and history feeds carry.
/// A stream that has already been trimmed passes through unchanged.
pub fn trim_sentinel(records: &[Record]) -> &[Record] {
    match records.split_last() {
        Some((last, rest)) if last.has(codes::SENTINEL) => rest,
        _ => records,
    }
}
