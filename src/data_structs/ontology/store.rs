use std::io::Read;

use hashbrown::HashMap;
use log::debug;

use crate::data_structs::ontology::entry::{OntologyEntry, RawOntologyEntry};
use crate::data_structs::typedef::AnnotStr;
use crate::error::{AnnotError, Result};

fn normalize(name: &str) -> String {
    name.to_lowercase()
}

/// The controlled-vocabulary registry: every entry of the forest keyed by
/// case-insensitively normalized name, plus the insertion order so root
/// traversal stays stable.
///
/// Populated once by a builder (or [`from_raw`](Self::from_raw) /
/// [`from_json`](Self::from_json)), then treated as read-only. Wrap the
/// finished ontology in an [`Arc`](std::sync::Arc) before constructing
/// annotations against it.
#[derive(Debug, Clone, Default)]
pub struct Ontology {
    entries: HashMap<String, OntologyEntry>,
    order:   Vec<AnnotStr>,
}

impl Ontology {
    pub fn new() -> Self {
        Self {
            entries: Default::default(),
            order:   Default::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registers an entry under its normalized name. Returns `None` if an
    /// entry with the same normalized name is already present.
    pub fn insert(
        &mut self,
        entry: OntologyEntry,
    ) -> Option<()> {
        let key = normalize(entry.name().as_str());
        if self.entries.contains_key(&key) {
            return None;
        }
        self.order.push(entry.name().clone());
        self.entries.insert(key, entry);
        Some(())
    }

    /// Case-insensitive lookup.
    pub fn entry(
        &self,
        name: &str,
    ) -> Option<&OntologyEntry> {
        self.entries.get(&normalize(name))
    }

    pub fn entry_mut(
        &mut self,
        name: &str,
    ) -> Option<&mut OntologyEntry> {
        self.entries.get_mut(&normalize(name))
    }

    /// Case-insensitive lookup, failing with
    /// [`AnnotError::EntryNotFound`] on a miss.
    pub fn get(
        &self,
        name: &str,
    ) -> Result<&OntologyEntry> {
        self.entry(name)
            .ok_or_else(|| AnnotError::EntryNotFound(name.to_string()))
    }

    /// Wires `child` under `parent`, setting the child's parent handle
    /// and registering the child on the parent in one step. Both entries
    /// must already be registered.
    pub fn link(
        &mut self,
        parent: &str,
        child: &str,
    ) -> Result<()> {
        let parent_name = self.get(parent)?.name().clone();
        let child_name = match self.entry_mut(child) {
            Some(entry) => {
                entry.set_parent(parent_name.clone());
                entry.name().clone()
            },
            None => return Err(AnnotError::EntryNotFound(child.to_string())),
        };
        if let Some(entry) = self.entry_mut(parent_name.as_str()) {
            entry.add_child(child_name);
        }
        Ok(())
    }

    /// Entries with no parent, in insertion order.
    pub fn root_entries(&self) -> impl Iterator<Item = &OntologyEntry> {
        self.iter().filter(|entry| entry.is_root())
    }

    /// All entries, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &OntologyEntry> {
        self.order
            .iter()
            .filter_map(|name| self.entry(name.as_str()))
    }

    /// Builds a fully wired ontology from nested raw entries. Every
    /// nested child lands in the index under its normalized name;
    /// duplicate names are rejected.
    pub fn from_raw(raw: Vec<RawOntologyEntry>) -> Result<Self> {
        let mut ontology = Self::new();
        for entry in &raw {
            ontology.insert_raw(entry, None)?;
        }
        debug!(
            "built ontology with {} entries ({} roots)",
            ontology.len(),
            ontology.root_entries().count()
        );
        Ok(ontology)
    }

    /// Deserializes the nested JSON form (an array of entry objects) and
    /// builds the ontology from it.
    pub fn from_json<R: Read>(reader: R) -> Result<Self> {
        let raw: Vec<RawOntologyEntry> = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    fn insert_raw(
        &mut self,
        raw: &RawOntologyEntry,
        parent: Option<&AnnotStr>,
    ) -> Result<()> {
        let mut entry = OntologyEntry::from(raw);
        if let Some(parent) = parent {
            entry.set_parent(parent.clone());
        }
        for child in &raw.children {
            entry.add_child(child.name.as_str());
        }
        let name = entry.name().clone();
        if self.insert(entry).is_none() {
            return Err(AnnotError::DuplicateEntry(raw.name.clone()));
        }
        for child in &raw.children {
            self.insert_raw(child, Some(&name))?;
        }
        Ok(())
    }
}

impl FromIterator<OntologyEntry> for Ontology {
    /// Collects entries into a registry, silently skipping duplicates.
    /// Linking is left to the caller.
    fn from_iter<T: IntoIterator<Item = OntologyEntry>>(iter: T) -> Self {
        let mut new_self = Self::new();
        iter.into_iter().for_each(|entry| {
            new_self.insert(entry);
        });
        new_self
    }
}
