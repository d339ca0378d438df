use thiserror::Error;

/// Result type for locannot operations.
pub type Result<T> = std::result::Result<T, AnnotError>;

/// Error type for annotation parsing and ontology resolution.
///
/// All variants describe deterministic, input-dependent failures. They are
/// surfaced at the point of origin and never recovered into partial values.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AnnotError {
    /// The input does not conform to the `term[modifier1,modifier2]`
    /// grammar.
    #[error("not a valid annotation string: '{0}'")]
    InvalidAnnotation(String),

    /// A containment query's term could not be compiled as a regular
    /// expression.
    #[error("invalid term pattern: {0}")]
    Pattern(#[from] regex_lite::Error),

    /// An annotation term is absent from the bound ontology's entry index.
    #[error("term '{0}' is not present in the ontology")]
    EntryNotFound(String),

    /// An ontology definition registers the same entry name twice.
    #[error("ontology entry '{0}' is already registered")]
    DuplicateEntry(String),

    /// A set operation was attempted between collections bound to
    /// different ontology instances.
    #[error("collections are bound to different ontology instances")]
    OntologyMismatch,

    /// An ontology definition could not be deserialized.
    #[error("malformed ontology definition: {0}")]
    Json(#[from] serde_json::Error),
}
