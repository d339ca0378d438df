//! # locannot
//!
//! `locannot` is a Rust library for parsing, filtering and ontology-aware
//! matching of compact string-encoded localisation annotations of the
//! form `term[modifier1,modifier2]`. Annotations are grouped into
//! deduplicated collections, and terms can be resolved against a
//! hierarchical controlled vocabulary so that a query for a general term
//! (say `nucleus`) is satisfied by annotations made with a more specific
//! descendant term (say `nucleoplasm`).
//!
//! ## Key Features
//!
//! * **Compact annotation grammar**: a single interchange format,
//!   `term[modifier1,modifier2]`, with comma-separated lists at the
//!   collection level. Commas inside a bracketed modifier list never
//!   split the outer list.
//! * **Value semantics**: annotations and collections are immutable after
//!   construction; equality and hashing are derived from the term and
//!   the modifier set alone, so annotations work as set members.
//! * **Two containment semantics**: [`AnnotationCollection::contains`]
//!   treats the query term as a regular expression matched from the
//!   start of each member's term with a modifier-superset test, while
//!   [`AnnotationCollection::matches`] performs exact-term matching with
//!   a require/exclude modifier rule. Both are part of the contract.
//! * **Hierarchical matching**: [`OntologyEntry::match_term`] walks
//!   upward through an entry's ancestors, so specific annotations
//!   satisfy broader queries (never the reverse).
//! * **Shared ontology context**: ontology-aware collections carry their
//!   [`Ontology`] through every derived collection, and set operations
//!   refuse to combine collections bound to different ontology
//!   instances.
//!
//! ## Structure
//!
//! The crate is organized into a few modules:
//!
//! * [`data_structs`]: annotation and ontology value types and
//!   collections.
//! * [`error`]: the crate error type ([`AnnotError`]) and `Result`
//!   alias.
//! * [`prelude`]: flat re-exports of the public surface.
//!
//! ## Usage
//!
//! ### Parsing and filtering a collection
//!
//! ```
//! use locannot::prelude::*;
//!
//! fn main() -> locannot::Result<()> {
//!     let collection: AnnotationCollection =
//!         "cytoplasm[points,weak],nucleoplasm".parse()?;
//!     assert_eq!(collection.len(), 2);
//!
//!     // Exact-term matching with modifier constraints
//!     assert!(collection.matches("cytoplasm", None, None));
//!     let weak = ModifierSet::from([AnnotStr::from("weak")]);
//!     assert!(collection.matches("cytoplasm", Some(&weak), None));
//!     assert!(!collection.matches("nucleoplasm", Some(&weak), None));
//!
//!     // Regex containment with a modifier-superset test
//!     assert!(collection.contains_str("cyto.*[points]")?);
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Resolving annotations against an ontology
//!
//! ```
//! use std::sync::Arc;
//!
//! use locannot::prelude::*;
//!
//! fn main() -> locannot::Result<()> {
//!     let mut ontology = Ontology::new();
//!     ontology.insert(OntologyEntry::new("nucleus"));
//!     ontology.insert(OntologyEntry::new("nucleoplasm"));
//!     ontology.link("nucleus", "nucleoplasm")?;
//!     let ontology = Arc::new(ontology);
//!
//!     let collection =
//!         OntologyAnnotationCollection::parse("nucleoplasm", &ontology)?;
//!     assert!(collection.matches("nucleus", None, None, true));
//!     assert!(!collection.matches("nucleus", None, None, false));
//!
//!     Ok(())
//! }
//! ```

pub mod data_structs;
pub mod error;
pub mod prelude;
pub mod utils;

pub use error::{AnnotError, Result};

#[allow(unused_imports)]
use prelude::*;
