/// Decode and assembly failures, reported per match or per stream.
///
/// Unrecognized *values* inside known fields (stat section names, event
/// type codes, result codes) are not errors; those records are dropped
/// by the interpreters.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("field segment {segment:?} has no key/value separator")]
    MalformedField { segment: String },

    #[error("record is missing required field {code}")]
    MissingField { code: &'static str },

    #[error("field {code} holds {value:?}, expected a number")]
    InvalidNumber { code: &'static str, value: String },

    #[error("match header block not found in page")]
    HeaderNotFound,

    #[error("unknown match status code {code:?}")]
    UnknownStatus { code: String },

    #[error("expected 0 or 3 odds prices, got {len}")]
    UnexpectedOddsShape { len: usize },

    #[error("json payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{missing} of {total} payloads still missing after {attempts} fetch attempts")]
    AssemblyIncomplete {
        missing: usize,
        total: usize,
        attempts: usize,
    },
}
