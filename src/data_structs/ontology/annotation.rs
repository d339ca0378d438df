use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use hashbrown::HashSet;
use itertools::Itertools;

use crate::data_structs::annotation::{
    contains_annotation,
    split_top_level,
    Annotation,
    TermMatcher,
};
use crate::data_structs::ontology::entry::OntologyEntry;
use crate::data_structs::ontology::store::Ontology;
use crate::data_structs::typedef::{AnnotStr, ModifierSet};
use crate::error::{AnnotError, Result};

/// An [`Annotation`] whose term is resolved against an [`Ontology`] at
/// construction time.
///
/// Term matching delegates to the resolved entry's ancestor walk, so the
/// annotation satisfies queries for any ancestor of its term. Equality
/// and hashing are those of the inner annotation; the bound ontology does
/// not participate.
#[derive(Debug, Clone)]
pub struct OntologyAnnotation {
    annotation: Annotation,
    entry_name: AnnotStr,
    ontology:   Arc<Ontology>,
}

impl OntologyAnnotation {
    /// Parses an annotation string and resolves its term in the
    /// ontology's index. Fails with [`AnnotError::EntryNotFound`] when
    /// the term is absent; nothing is constructed on failure.
    pub fn parse(
        annotation_string: &str,
        ontology: &Arc<Ontology>,
    ) -> Result<Self> {
        let annotation: Annotation = annotation_string.parse()?;
        let entry_name = ontology.get(annotation.term())?.name().clone();
        Ok(Self {
            annotation,
            entry_name,
            ontology: Arc::clone(ontology),
        })
    }

    pub fn annotation(&self) -> &Annotation {
        &self.annotation
    }

    pub fn term(&self) -> &str {
        self.annotation.term()
    }

    /// The resolved ontology entry.
    pub fn entry(&self) -> Option<&OntologyEntry> {
        self.ontology.entry(self.entry_name.as_str())
    }

    pub fn ontology(&self) -> &Arc<Ontology> {
        &self.ontology
    }

    /// Tests the annotation against a queried term and modifier
    /// constraints. With `recursive` set, the term test walks the
    /// resolved entry's ancestors.
    pub fn matches(
        &self,
        term: &str,
        require_modifiers: Option<&ModifierSet>,
        exclude_modifiers: Option<&ModifierSet>,
        recursive: bool,
    ) -> bool {
        self.matches_with(term, require_modifiers, exclude_modifiers, recursive)
    }

    /// Returns a new annotation with the given modifiers removed (all,
    /// if `None`), still bound to the same ontology entry.
    pub fn strip_modifiers(
        &self,
        modifiers: Option<&ModifierSet>,
    ) -> Self {
        Self {
            annotation: self.annotation.strip_modifiers(modifiers),
            entry_name: self.entry_name.clone(),
            ontology:   Arc::clone(&self.ontology),
        }
    }
}

impl TermMatcher for OntologyAnnotation {
    fn term_matches(
        &self,
        term: &str,
        recursive: bool,
    ) -> bool {
        self.entry()
            .map(|entry| entry.match_term(&self.ontology, term, recursive))
            .unwrap_or(false)
    }

    fn modifiers(&self) -> &ModifierSet {
        self.annotation.modifiers()
    }
}

impl PartialEq for OntologyAnnotation {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.annotation == other.annotation
    }
}

impl Eq for OntologyAnnotation {}

impl Hash for OntologyAnnotation {
    fn hash<H: Hasher>(
        &self,
        state: &mut H,
    ) {
        self.annotation.hash(state)
    }
}

impl PartialEq<str> for OntologyAnnotation {
    fn eq(
        &self,
        other: &str,
    ) -> bool {
        self.annotation == *other
    }
}

impl fmt::Display for OntologyAnnotation {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        self.annotation.fmt(f)
    }
}

/// An [`AnnotationCollection`](crate::data_structs::annotation::AnnotationCollection)
/// specialized to [`OntologyAnnotation`] members.
///
/// The bound ontology is threaded through every derived collection, so
/// filtering, stripping and the set operations never re-resolve terms
/// from strings.
#[derive(Debug, Clone)]
pub struct OntologyAnnotationCollection {
    annotations: HashSet<OntologyAnnotation>,
    ontology:    Arc<Ontology>,
}

impl OntologyAnnotationCollection {
    /// Parses a comma-separated annotation list, resolving every term in
    /// the ontology. An empty input yields an empty collection bound to
    /// the ontology.
    pub fn parse(
        annotations_string: &str,
        ontology: &Arc<Ontology>,
    ) -> Result<Self> {
        if annotations_string.is_empty() {
            return Ok(Self {
                annotations: HashSet::new(),
                ontology:    Arc::clone(ontology),
            });
        }
        let annotations = split_top_level(annotations_string)
            .into_iter()
            .map(|piece| OntologyAnnotation::parse(piece, ontology))
            .collect::<Result<HashSet<_>>>()?;
        Ok(Self {
            annotations,
            ontology: Arc::clone(ontology),
        })
    }

    /// Rebuilds a collection from an explicit member set, keeping the
    /// ontology binding. Every derived-collection operation routes
    /// through this.
    pub fn from_members(
        ontology: &Arc<Ontology>,
        members: impl IntoIterator<Item = OntologyAnnotation>,
    ) -> Self {
        Self {
            annotations: members.into_iter().collect(),
            ontology:    Arc::clone(ontology),
        }
    }

    pub fn ontology(&self) -> &Arc<Ontology> {
        &self.ontology
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OntologyAnnotation> {
        self.annotations.iter()
    }

    /// Containment check with regex term matching and a modifier-superset
    /// test against the members' literal terms. The ontology plays no
    /// part here.
    pub fn contains(
        &self,
        query: &Annotation,
    ) -> Result<bool> {
        contains_annotation(
            self.annotations
                .iter()
                .map(OntologyAnnotation::annotation),
            query,
        )
    }

    /// Parses `query` as a plain annotation (the query term does not
    /// need to exist in the ontology), then delegates to
    /// [`contains`](Self::contains).
    pub fn contains_str(
        &self,
        query: &str,
    ) -> Result<bool> {
        self.contains(&query.parse()?)
    }

    /// True iff any member matches the given term and modifier
    /// constraints; with `recursive` set, members match queries for
    /// their terms' ancestors too.
    pub fn matches(
        &self,
        term: &str,
        require_modifiers: Option<&ModifierSet>,
        exclude_modifiers: Option<&ModifierSet>,
        recursive: bool,
    ) -> bool {
        self.annotations.iter().any(|annot| {
            annot.matches(term, require_modifiers, exclude_modifiers, recursive)
        })
    }

    /// Returns a new collection keeping the members whose modifier set
    /// satisfies the require/exclude constraints.
    pub fn filter_by_modifiers(
        &self,
        require_modifiers: Option<&ModifierSet>,
        exclude_modifiers: Option<&ModifierSet>,
    ) -> Self {
        Self::from_members(
            &self.ontology,
            self.annotations
                .iter()
                .filter(|annot| {
                    annot.admits_modifiers(require_modifiers, exclude_modifiers)
                })
                .cloned(),
        )
    }

    /// Returns a new collection with the given modifiers removed from
    /// every member (all, if `None`). Members made equal by stripping
    /// collapse into one.
    pub fn strip_modifiers(
        &self,
        modifiers: Option<&ModifierSet>,
    ) -> Self {
        Self::from_members(
            &self.ontology,
            self.annotations
                .iter()
                .map(|annot| annot.strip_modifiers(modifiers)),
        )
    }

    /// Member-set union. Both operands must be bound to the same
    /// ontology instance; otherwise fails with
    /// [`AnnotError::OntologyMismatch`].
    pub fn union(
        &self,
        other: &Self,
    ) -> Result<Self> {
        self.check_shared_ontology(other)?;
        Ok(Self::from_members(
            &self.ontology,
            self.annotations
                .union(&other.annotations)
                .cloned(),
        ))
    }

    /// Member-set intersection. Both operands must be bound to the same
    /// ontology instance; otherwise fails with
    /// [`AnnotError::OntologyMismatch`].
    pub fn intersection(
        &self,
        other: &Self,
    ) -> Result<Self> {
        self.check_shared_ontology(other)?;
        Ok(Self::from_members(
            &self.ontology,
            self.annotations
                .intersection(&other.annotations)
                .cloned(),
        ))
    }

    fn check_shared_ontology(
        &self,
        other: &Self,
    ) -> Result<()> {
        if Arc::ptr_eq(&self.ontology, &other.ontology) {
            Ok(())
        }
        else {
            Err(AnnotError::OntologyMismatch)
        }
    }
}

impl PartialEq for OntologyAnnotationCollection {
    /// Collections compare by members; the ontology binding does not
    /// participate.
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.annotations == other.annotations
    }
}

impl Eq for OntologyAnnotationCollection {}

impl<'a> IntoIterator for &'a OntologyAnnotationCollection {
    type IntoIter = hashbrown::hash_set::Iter<'a, OntologyAnnotation>;
    type Item = &'a OntologyAnnotation;

    fn into_iter(self) -> Self::IntoIter {
        self.annotations.iter()
    }
}

impl fmt::Display for OntologyAnnotationCollection {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "{}",
            self.annotations
                .iter()
                .map(ToString::to_string)
                .sorted()
                .join(",")
        )
    }
}
