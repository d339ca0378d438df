use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::data_structs::typedef::{AnnotStr, ModifierSet};
use crate::error::AnnotError;
use crate::getter_fn;

static ANNOTATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<term>[^\[\]]+)(?:\[(?P<modifiers>[^\[\]]*)\])?$")
        .expect("Failed to compile annotation grammar regex")
});

/// Term-matching strategy shared by plain and ontology-resolved
/// annotations.
///
/// [`Annotation`] implements the base behavior (exact term equality, the
/// `recursive` flag is ignored); the ontology-aware variant replaces it
/// with the ancestor walk of the resolved entry. The modifier rule is
/// common to both and lives in the provided methods.
pub trait TermMatcher {
    /// Tests the annotation's term against a queried term.
    fn term_matches(
        &self,
        term: &str,
        recursive: bool,
    ) -> bool;

    /// The modifier tags attached to the annotation.
    fn modifiers(&self) -> &ModifierSet;

    /// Applies the require/exclude modifier rule: when `require` is
    /// present and non-empty, at least one required modifier must be
    /// attached; any attached modifier listed in `exclude` fails the
    /// test.
    fn admits_modifiers(
        &self,
        require: Option<&ModifierSet>,
        exclude: Option<&ModifierSet>,
    ) -> bool {
        if let Some(require) = require {
            if !require.is_empty() && self.modifiers().is_disjoint(require) {
                return false;
            }
        }
        if let Some(exclude) = exclude {
            if !self.modifiers().is_disjoint(exclude) {
                return false;
            }
        }
        true
    }

    /// Combined term and modifier match.
    fn matches_with(
        &self,
        term: &str,
        require: Option<&ModifierSet>,
        exclude: Option<&ModifierSet>,
        recursive: bool,
    ) -> bool {
        self.term_matches(term, recursive)
            && self.admits_modifiers(require, exclude)
    }
}

/// A single annotation entry of the form `term[modifier1,modifier2]`.
///
/// Immutable after construction. Two annotations are equal iff their
/// terms are equal and their modifier sets are equal; hashing is
/// consistent with that, so annotations work as set members and map keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Annotation {
    term:      AnnotStr,
    modifiers: ModifierSet,
}

impl Annotation {
    pub fn new(
        term: impl Into<AnnotStr>,
        modifiers: ModifierSet,
    ) -> Self {
        Self {
            term: term.into(),
            modifiers,
        }
    }

    pub fn term(&self) -> &str {
        self.term.as_str()
    }

    getter_fn!(modifiers, ModifierSet);

    /// Tests the annotation against a queried term and modifier
    /// constraints. Term comparison is exact string equality.
    pub fn matches(
        &self,
        term: &str,
        require_modifiers: Option<&ModifierSet>,
        exclude_modifiers: Option<&ModifierSet>,
    ) -> bool {
        self.matches_with(term, require_modifiers, exclude_modifiers, true)
    }

    /// Returns a new annotation with the given modifiers removed, or all
    /// modifiers removed if `modifiers` is `None`. The receiver is left
    /// untouched.
    pub fn strip_modifiers(
        &self,
        modifiers: Option<&ModifierSet>,
    ) -> Self {
        let stripped = match modifiers {
            Some(removed) => {
                self.modifiers
                    .difference(removed)
                    .cloned()
                    .collect()
            },
            None => ModifierSet::new(),
        };
        Self {
            term:      self.term.clone(),
            modifiers: stripped,
        }
    }
}

impl FromStr for Annotation {
    type Err = AnnotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = ANNOTATION_RE
            .captures(s)
            .ok_or_else(|| AnnotError::InvalidAnnotation(s.to_string()))?;
        let term = caps
            .name("term")
            .map(|m| AnnotStr::from(m.as_str()))
            .ok_or_else(|| AnnotError::InvalidAnnotation(s.to_string()))?;

        let mut modifiers = ModifierSet::new();
        if let Some(list) = caps.name("modifiers") {
            for token in list.as_str().split(',') {
                let token = token.trim();
                if token.is_empty() {
                    return Err(AnnotError::InvalidAnnotation(s.to_string()));
                }
                modifiers.insert(AnnotStr::from(token));
            }
        }

        Ok(Self { term, modifiers })
    }
}

impl fmt::Display for Annotation {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.term)?;
        if !self.modifiers.is_empty() {
            write!(f, "[{}]", self.modifiers.iter().join(","))?;
        }
        Ok(())
    }
}

impl TermMatcher for Annotation {
    fn term_matches(
        &self,
        term: &str,
        _recursive: bool,
    ) -> bool {
        self.term.as_str() == term
    }

    fn modifiers(&self) -> &ModifierSet {
        &self.modifiers
    }
}

impl PartialEq<str> for Annotation {
    /// A raw string is parsed first; unparseable strings compare unequal.
    fn eq(
        &self,
        other: &str,
    ) -> bool {
        other
            .parse::<Annotation>()
            .map(|parsed| parsed == *self)
            .unwrap_or(false)
    }
}

impl PartialEq<&str> for Annotation {
    fn eq(
        &self,
        other: &&str,
    ) -> bool {
        self.eq(*other)
    }
}
