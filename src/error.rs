use thiserror::Error;

pub type MarkupResult<T> = Result<T, MarkupError>;

#[derive(Error, Debug)]
pub enum MarkupError {
    #[error("I/O error while writing markup: {0}")]
    Io(#[from] std::io::Error),

    // --- writer discipline ---

    #[error("Attribute '{name}' written outside of an open start tag")]
    AttributeOutsideStartTag { name: String },

    #[error("Unbalanced close: expected </{}>, found </{found}>", .expected.as_deref().unwrap_or("(none)"))]
    UnbalancedClose {
        expected: Option<String>,
        found: String,
    },

    // --- tree errors ---

    #[error("Unknown node index {index}")]
    UnknownNode { index: usize },

    #[error("Invalid component: {component}. {reason}")]
    InvalidComponent { component: String, reason: String },

    // --- validation errors ---

    #[error("Duplicate id '{id}': client ids must be unique within the document")]
    DuplicateId { id: String },

    #[error("Invalid id '{id}': ids must be non-empty and contain no whitespace, control characters or ':'")]
    InvalidId { id: String },

    #[error("Maximum nesting depth ({max_depth}) exceeded")]
    MaxNestingDepthExceeded { max_depth: usize },

    #[error("Empty document: no components found")]
    EmptyDocument,

    #[error("YAML error: {0}")]
    Yaml(String),
}

impl From<serde_yaml::Error> for MarkupError {
    fn from(err: serde_yaml::Error) -> Self {
        MarkupError::Yaml(err.to_string())
    }
}
