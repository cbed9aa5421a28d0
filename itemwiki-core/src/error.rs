use thiserror::Error;

#[derive(Error, Debug)]
pub enum ItemWikiError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ItemWikiError>;

/// A category label that matches neither a known spelling variant nor a
/// canonical attribute name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassificationError {
    #[error("unrecognized primary label {0:?}")]
    UnknownPrimary(String),

    #[error("unrecognized secondary label {0:?}")]
    UnknownSecondary(String),
}

/// Non-fatal degradations recorded while assembling an item.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionWarning {
    #[error("menu slot {slot}: {source}")]
    Classification {
        slot: usize,
        #[source]
        source: ClassificationError,
    },

    #[error("could not resolve recipe reference {name:?} (slug {slug})")]
    UnresolvedRecipe { name: String, slug: String },

    #[error("identity field {field:?} is empty")]
    MissingIdentity { field: String },

    #[error("item id {0:?} is not an integer")]
    InvalidItemId(String),

    #[error("tier {0:?} is not numeric")]
    InvalidTier(String),

    #[error("unknown rank label {0:?}")]
    UnknownRank(String),
}
