//! Core data structures for representing localisation annotations and the
//! controlled vocabulary they resolve against.
//!
//! Key components of this module include:
//!
//! - [`annotation`]: the `term[modifier1,modifier2]` value type
//!   ([`Annotation`]), the term-matching strategy seam ([`TermMatcher`])
//!   and the deduplicated collection parsed from comma-separated lists
//!   ([`AnnotationCollection`]).
//! - [`ontology`]: the controlled-vocabulary forest ([`Ontology`],
//!   [`OntologyEntry`], [`RawOntologyEntry`]) and the ontology-resolved
//!   annotation variants ([`OntologyAnnotation`],
//!   [`OntologyAnnotationCollection`]) whose term matching walks entry
//!   ancestors.
//! - [`typedef`]: type aliases for terms, modifier tags and modifier sets.
//!
//! [`Annotation`]: annotation::Annotation
//! [`TermMatcher`]: annotation::TermMatcher
//! [`AnnotationCollection`]: annotation::AnnotationCollection
//! [`Ontology`]: ontology::Ontology
//! [`OntologyEntry`]: ontology::OntologyEntry
//! [`RawOntologyEntry`]: ontology::RawOntologyEntry
//! [`OntologyAnnotation`]: ontology::OntologyAnnotation
//! [`OntologyAnnotationCollection`]: ontology::OntologyAnnotationCollection

pub mod annotation;
pub mod ontology;
pub mod typedef;
