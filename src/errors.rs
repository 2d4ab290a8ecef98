use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SearchError {
    #[error("Cannot search an empty collection")]
    EmptyInput,

    #[error("Invalid lower bound {low} for collection of length {len}")]
    InvalidLowerBound { low: usize, len: usize },

    #[error("Invalid upper bound {high} (lower bound {low}) for collection of length {len}")]
    InvalidUpperBound { low: usize, high: usize, len: usize },
}

#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("Invalid WKT: {0}")]
    Wkt(String),
}
