use std::collections::BTreeSet;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::data_structs::ontology::store::Ontology;
use crate::data_structs::typedef::AnnotStr;
use crate::{getter_fn, with_field_fn};

/// A node in the controlled-vocabulary forest.
///
/// Entries are owned by the [`Ontology`]; `parent` and `children` hold
/// entry names resolved through the ontology's index rather than
/// references. The builder wiring them is expected to call
/// [`set_parent`](Self::set_parent) and [`add_child`](Self::add_child) in
/// pairs (or use [`Ontology::link`]); consistency is not enforced here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OntologyEntry {
    name:     AnnotStr,
    synonyms: Vec<AnnotStr>,
    comment:  Option<String>,
    ident:    Option<AnnotStr>,
    goterm:   Option<AnnotStr>,
    examples: Vec<String>,
    parent:   Option<AnnotStr>,
    children: BTreeSet<AnnotStr>,
}

impl OntologyEntry {
    pub fn new(name: impl Into<AnnotStr>) -> Self {
        Self {
            name:     name.into(),
            synonyms: Vec::new(),
            comment:  None,
            ident:    None,
            goterm:   None,
            examples: Vec::new(),
            parent:   None,
            children: BTreeSet::new(),
        }
    }

    with_field_fn!(synonyms, Vec<AnnotStr>);

    with_field_fn!(comment, Option<String>);

    with_field_fn!(ident, Option<AnnotStr>);

    with_field_fn!(goterm, Option<AnnotStr>);

    with_field_fn!(examples, Vec<String>);

    getter_fn!(name, AnnotStr);

    getter_fn!(synonyms, Vec<AnnotStr>);

    getter_fn!(comment, Option<String>);

    getter_fn!(ident, Option<AnnotStr>);

    getter_fn!(goterm, Option<AnnotStr>);

    getter_fn!(examples, Vec<String>);

    getter_fn!(parent, Option<AnnotStr>);

    getter_fn!(children, BTreeSet<AnnotStr>);

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn set_parent(
        &mut self,
        parent: impl Into<AnnotStr>,
    ) {
        self.parent = Some(parent.into());
    }

    pub fn add_child(
        &mut self,
        child: impl Into<AnnotStr>,
    ) {
        self.children.insert(child.into());
    }

    /// Tests a queried term against this entry and, when `recursive`, its
    /// chain of parents.
    ///
    /// The walk goes upward toward the root: an annotation made with a
    /// specific entry satisfies a query for any of its ancestors' names.
    /// It never descends into children, so a broad annotation does not
    /// satisfy a query for a more specific term. Name comparison is
    /// exact.
    pub fn match_term(
        &self,
        ontology: &Ontology,
        term: &str,
        recursive: bool,
    ) -> bool {
        if self.name.as_str() == term {
            return true;
        }
        if !recursive {
            return false;
        }
        let mut parent = self.parent.as_ref();
        while let Some(name) = parent {
            match ontology.entry(name.as_str()) {
                Some(entry) => {
                    if entry.name.as_str() == term {
                        return true;
                    }
                    parent = entry.parent.as_ref();
                },
                None => {
                    warn!(
                        "ontology entry '{}' links to missing parent '{}'",
                        self.name, name
                    );
                    return false;
                },
            }
        }
        false
    }
}

/// Plain nested record for one ontology entry, as found in ontology
/// definition documents.
///
/// Children are nested recursively; [`Ontology::from_raw`] flattens the
/// nesting into the entry index and wires the parent/child links.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawOntologyEntry {
    pub name:     String,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub comment:  Option<String>,
    #[serde(default)]
    pub ident:    Option<String>,
    #[serde(default)]
    pub goterm:   Option<String>,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub children: Vec<RawOntologyEntry>,
}

impl From<&RawOntologyEntry> for OntologyEntry {
    fn from(raw: &RawOntologyEntry) -> Self {
        OntologyEntry::new(raw.name.as_str())
            .with_synonyms(
                raw.synonyms
                    .iter()
                    .map(|s| AnnotStr::from(s.as_str()))
                    .collect(),
            )
            .with_comment(raw.comment.clone())
            .with_ident(raw.ident.as_deref().map(AnnotStr::from))
            .with_goterm(raw.goterm.as_deref().map(AnnotStr::from))
            .with_examples(raw.examples.clone())
    }
}
