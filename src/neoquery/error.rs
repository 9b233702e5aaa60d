use thiserror::Error;

#[derive(Error, Debug)]
pub enum NeoError {
    /// A filter was evaluated without a concrete attribute accessor.
    #[error("Unsupported criterion: {0} has no attribute accessor")]
    UnsupportedCriterion(String),

    #[error("Invalid bound for {criterion}: maximum must be greater than zero (got {value})")]
    InvalidBound { criterion: &'static str, value: f64 },

    /// An object attribute was read from an approach that is not linked to an object.
    #[error("Attribute '{attribute}' unavailable: approach of {designation} has no linked object")]
    AttributeUnavailable {
        attribute: &'static str,
        designation: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, NeoError>;
