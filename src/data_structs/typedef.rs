use std::collections::BTreeSet;

use smallstr::SmallString;

pub const SMALLSTR_SIZE: usize = 24;

/// Inline string type used for annotation terms, modifier tags and
/// ontology entry names.
pub type AnnotStr = SmallString<[u8; SMALLSTR_SIZE]>;

/// Deduplicated set of modifier tags attached to an annotation term.
///
/// Kept ordered so rendering and hashing stay deterministic.
pub type ModifierSet = BTreeSet<AnnotStr>;
