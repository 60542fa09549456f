//! The population store: `Person` records keyed by identity document.

use chrono::NaiveDate;
use rustc_hash::FxHashMap;

use vax_core::PersonId;

use crate::error::{RegistryError, RegistryResult};

// ── Person ────────────────────────────────────────────────────────────────────

/// One registered person, as carried by a `PERSON` record.
///
/// The `document` is the unique natural key; everything else is descriptive.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    /// Identity document number — unique across the population.
    pub document: String,
    pub name:     String,
    pub surname:  String,
    pub email:    String,
    pub address:  String,
    /// Postal code of residence (not necessarily a health-center cp).
    pub cp:       String,
    pub birthday: NaiveDate,
}

// ── PersonRegistry ────────────────────────────────────────────────────────────

/// Owned store of all registered persons.
///
/// Persons live in slots indexed by [`PersonId`]; the document → ID map makes
/// `find_by_document` O(1).  Slots are never reused or reordered.
#[derive(Default, Debug)]
pub struct PersonRegistry {
    persons:     Vec<Person>,
    by_document: FxHashMap<String, PersonId>,
}

impl PersonRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new person.
    ///
    /// Fails with [`RegistryError::DuplicatedPerson`] if the document is
    /// already taken; the registry is left unchanged in that case.
    pub fn register(&mut self, person: Person) -> RegistryResult<PersonId> {
        if self.by_document.contains_key(&person.document) {
            return Err(RegistryError::DuplicatedPerson(person.document));
        }
        let id = PersonId(self.persons.len() as u32);
        self.by_document.insert(person.document.clone(), id);
        self.persons.push(person);
        Ok(id)
    }

    /// Look up a person by document number.
    pub fn find_by_document(&self, document: &str) -> Option<PersonId> {
        self.by_document.get(document).copied()
    }

    /// The person in slot `id`.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this registry.
    pub fn get(&self, id: PersonId) -> &Person {
        &self.persons[id.index()]
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Iterate all persons in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (PersonId, &Person)> {
        self.persons
            .iter()
            .enumerate()
            .map(|(i, p)| (PersonId(i as u32), p))
    }
}
