pub use crate::data_structs::annotation::{
    Annotation,
    AnnotationCollection,
    TermMatcher,
};
pub use crate::data_structs::ontology::{
    Ontology,
    OntologyAnnotation,
    OntologyAnnotationCollection,
    OntologyEntry,
    RawOntologyEntry,
};
pub use crate::data_structs::typedef::{
    AnnotStr,
    ModifierSet,
};
pub use crate::error::{
    AnnotError,
    Result,
};
