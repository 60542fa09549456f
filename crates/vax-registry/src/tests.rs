//! Unit tests for vax-registry.

use chrono::NaiveDate;

use crate::Person;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn person(document: &str) -> Person {
    Person {
        document: document.to_string(),
        name:     "Jane".to_string(),
        surname:  "Doe".to_string(),
        email:    "jane@example.com".to_string(),
        address:  "Main St 1".to_string(),
        cp:       "08001".to_string(),
        birthday: NaiveDate::from_ymd_opt(1980, 5, 17).unwrap(),
    }
}

#[cfg(test)]
mod person_registry {
    use vax_core::PersonId;

    use crate::{PersonRegistry, RegistryError};

    use super::person;

    #[test]
    fn register_and_find() {
        let mut reg = PersonRegistry::new();
        let id = reg.register(person("11111111A")).unwrap();
        assert_eq!(id, PersonId(0));
        assert_eq!(reg.find_by_document("11111111A"), Some(id));
        assert_eq!(reg.get(id).document, "11111111A");
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn unknown_document_not_found() {
        let reg = PersonRegistry::new();
        assert!(reg.find_by_document("99999999Z").is_none());
        assert!(reg.is_empty());
    }

    #[test]
    fn duplicate_document_rejected() {
        let mut reg = PersonRegistry::new();
        reg.register(person("11111111A")).unwrap();
        let err = reg.register(person("11111111A")).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicatedPerson(d) if d == "11111111A"));
        // The failed registration left the store untouched.
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn registration_order_preserved() {
        let mut reg = PersonRegistry::new();
        reg.register(person("C")).unwrap();
        reg.register(person("A")).unwrap();
        reg.register(person("B")).unwrap();
        let docs: Vec<&str> = reg.iter().map(|(_, p)| p.document.as_str()).collect();
        assert_eq!(docs, vec!["C", "A", "B"]);
    }
}

#[cfg(test)]
mod vaccine_registry {
    use vax_core::VaccineId;

    use crate::{Vaccine, VaccineRegistry};

    #[test]
    fn register_and_find() {
        let mut reg = VaccineRegistry::new();
        let id = reg.register(Vaccine::new("Alpha", 2, 21));
        assert_eq!(id, VaccineId(0));
        assert_eq!(reg.find_by_name("Alpha"), Some(id));
        assert_eq!(reg.get(id).required_doses, 2);
    }

    #[test]
    fn register_is_idempotent_by_name() {
        let mut reg = VaccineRegistry::new();
        let first = reg.register(Vaccine::new("Alpha", 2, 21));
        // Same name, different profile: first registration wins.
        let again = reg.register(Vaccine::new("Alpha", 3, 7));
        assert_eq!(first, again);
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get(first).required_doses, 2);
        assert_eq!(reg.get(first).interval_days, 21);
    }

    #[test]
    fn iteration_is_registration_order() {
        let mut reg = VaccineRegistry::new();
        reg.register(Vaccine::new("Zeta", 1, 0));
        reg.register(Vaccine::new("Alpha", 2, 21));
        let names: Vec<&str> = reg.iter().map(|(_, v)| v.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn unknown_name_not_found() {
        let reg = VaccineRegistry::new();
        assert!(reg.find_by_name("Alpha").is_none());
    }
}
