use std::fmt;
use std::str::FromStr;

use hashbrown::HashSet;
use itertools::Itertools;
use regex_lite::Regex;

use crate::data_structs::annotation::entry::{Annotation, TermMatcher};
use crate::data_structs::typedef::ModifierSet;
use crate::error::{AnnotError, Result};

/// Splits an annotation list on top-level commas.
///
/// A comma separates entries only when it is not enclosed in a bracketed
/// modifier list; whitespace following a separating comma belongs to the
/// separator, not to the next entry.
pub(crate) fn split_top_level(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (idx, ch) in s.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&s[start..idx]);
                start = idx + 1;
            },
            _ => {},
        }
    }
    parts.push(&s[start..]);

    parts
        .into_iter()
        .enumerate()
        .map(|(idx, piece)| {
            if idx == 0 {
                piece
            }
            else {
                piece.trim_start()
            }
        })
        .collect()
}

/// Containment test shared by the plain and ontology-aware collections.
///
/// The query's term is compiled as a regular expression and must match a
/// candidate's literal term from its start; the candidate's modifier set
/// must be a superset of the query's. Intentionally looser than
/// [`Annotation::matches`]; both semantics exist side by side.
pub(crate) fn contains_annotation<'a, I>(
    members: I,
    query: &Annotation,
) -> Result<bool>
where
    I: IntoIterator<Item = &'a Annotation>, {
    let pattern = Regex::new(query.term())?;
    Ok(members.into_iter().any(|entry| {
        pattern
            .find(entry.term())
            .is_some_and(|m| m.start() == 0)
            && entry.modifiers().is_superset(query.modifiers())
    }))
}

/// An unordered, deduplicated set of [`Annotation`] entries parsed from a
/// comma-separated string.
///
/// Construction collapses duplicate entries silently. Every filtering or
/// stripping operation returns a new collection; the receiver is never
/// mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationCollection {
    annotations: HashSet<Annotation>,
}

impl AnnotationCollection {
    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter()
    }

    /// Containment check with regex term matching and a modifier-superset
    /// test (see [`contains_str`](Self::contains_str) for the raw-string
    /// form). Distinct from [`matches`](Self::matches) by design.
    pub fn contains(
        &self,
        query: &Annotation,
    ) -> Result<bool> {
        contains_annotation(&self.annotations, query)
    }

    /// Parses `query` as an annotation, then delegates to
    /// [`contains`](Self::contains).
    pub fn contains_str(
        &self,
        query: &str,
    ) -> Result<bool> {
        self.contains(&query.parse()?)
    }

    /// True iff any member matches the given term and modifier
    /// constraints. Exact term comparison, not regex.
    pub fn matches(
        &self,
        term: &str,
        require_modifiers: Option<&ModifierSet>,
        exclude_modifiers: Option<&ModifierSet>,
    ) -> bool {
        self.annotations
            .iter()
            .any(|annot| annot.matches(term, require_modifiers, exclude_modifiers))
    }

    /// Returns a new collection keeping the members whose modifier set
    /// satisfies the require/exclude constraints.
    pub fn filter_by_modifiers(
        &self,
        require_modifiers: Option<&ModifierSet>,
        exclude_modifiers: Option<&ModifierSet>,
    ) -> Self {
        self.annotations
            .iter()
            .filter(|annot| {
                annot.admits_modifiers(require_modifiers, exclude_modifiers)
            })
            .cloned()
            .collect()
    }

    /// Returns a new collection with the given modifiers removed from
    /// every member, or all modifiers removed if `modifiers` is `None`.
    /// Members made equal by stripping collapse into one.
    pub fn strip_modifiers(
        &self,
        modifiers: Option<&ModifierSet>,
    ) -> Self {
        self.annotations
            .iter()
            .map(|annot| annot.strip_modifiers(modifiers))
            .collect()
    }
}

impl FromStr for AnnotationCollection {
    type Err = AnnotError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Ok(Self::default());
        }
        split_top_level(s)
            .into_iter()
            .map(str::parse)
            .collect()
    }
}

impl FromIterator<Annotation> for AnnotationCollection {
    fn from_iter<T: IntoIterator<Item = Annotation>>(iter: T) -> Self {
        Self {
            annotations: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AnnotationCollection {
    type IntoIter = hashbrown::hash_set::Iter<'a, Annotation>;
    type Item = &'a Annotation;

    fn into_iter(self) -> Self::IntoIter {
        self.annotations.iter()
    }
}

impl fmt::Display for AnnotationCollection {
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
