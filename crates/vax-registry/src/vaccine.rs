//! The vaccine store: dosing profiles keyed by commercial name.

use rustc_hash::FxHashMap;

use vax_core::VaccineId;

// ── Vaccine ───────────────────────────────────────────────────────────────────

/// A vaccine's dosing profile.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vaccine {
    /// Commercial name — unique across the registry.
    pub name: String,

    /// Doses a person needs for a complete series.  At least 1.
    pub required_doses: u32,

    /// Days between consecutive doses of the series.  0 for single-dose
    /// vaccines.
    pub interval_days: u32,
}

impl Vaccine {
    pub fn new(name: impl Into<String>, required_doses: u32, interval_days: u32) -> Self {
        debug_assert!(required_doses >= 1, "a vaccine needs at least one dose");
        Self {
            name: name.into(),
            required_doses,
            interval_days,
        }
    }
}

// ── VaccineRegistry ───────────────────────────────────────────────────────────

/// Owned store of all known vaccines.
///
/// Registration order is significant: the scheduler sweeps vaccines
/// first-registered-first-tried, so [`VaccineRegistry::iter`] yields slots in
/// exactly that order.
#[derive(Default, Debug)]
pub struct VaccineRegistry {
    vaccines: Vec<Vaccine>,
    by_name:  FxHashMap<String, VaccineId>,
}

impl VaccineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a vaccine, or return the existing slot if the name is already
    /// known.  First registration wins: a re-registration under the same name
    /// never rewrites the stored dosing profile.
    pub fn register(&mut self, vaccine: Vaccine) -> VaccineId {
        debug_assert!(vaccine.required_doses >= 1, "a vaccine needs at least one dose");
        if let Some(&id) = self.by_name.get(&vaccine.name) {
            return id;
        }
        let id = VaccineId(self.vaccines.len() as u32);
        self.by_name.insert(vaccine.name.clone(), id);
        self.vaccines.push(vaccine);
        id
    }

    /// Look up a vaccine by commercial name.
    pub fn find_by_name(&self, name: &str) -> Option<VaccineId> {
        self.by_name.get(name).copied()
    }

    /// The vaccine in slot `id`.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this registry.
    pub fn get(&self, id: VaccineId) -> &Vaccine {
        &self.vaccines[id.index()]
    }

    pub fn len(&self) -> usize {
        self.vaccines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vaccines.is_empty()
    }

    /// Iterate all vaccines in registration order — the scheduler's sweep
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (VaccineId, &Vaccine)> {
        self.vaccines
            .iter()
            .enumerate()
            .map(|(i, v)| (VaccineId(i as u32), v))
    }
}
