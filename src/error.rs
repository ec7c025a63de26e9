use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListError {
    #[error("items per page must be a positive integer")]
    ZeroItemsPerPage,

    #[error("max pages must be a positive integer")]
    ZeroMaxPages,

    #[error("invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("date range is inverted: from {from} is after to {to}")]
    InvertedDateRange { from: String, to: String },

    #[error("unknown field '{field}' for {list}, expected one of: {expected}")]
    UnknownField {
        list: &'static str,
        field: String,
        expected: String,
    },

    #[error("invalid filter '{raw}', expected FIELD=PATTERN")]
    MalformedFilter { raw: String },

    #[error("no {list} record with id {id}")]
    RecordNotFound { list: &'static str, id: u64 },

    #[error("{list} record {id} is already {status}")]
    AlreadyDecided {
        list: &'static str,
        id: u64,
        status: String,
    },
}
