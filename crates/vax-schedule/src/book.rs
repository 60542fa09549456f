//! Sorted appointment bookkeeping for one health center.
//!
//! # Ordering invariant
//!
//! The book is a sequence sorted ascending by `(timestamp, person document)`
//! at every observable point — timestamp is the primary key, the document
//! string breaks ties.  Duplicate keys are allowed: a person holds one entry
//! per dose of a series, and same-minute slots for different people are
//! routine.
//!
//! The person is referenced by document number rather than registry slot
//! because the document *is* the sort tie-break key; resolving the full
//! `Person` record is a registry lookup at use time.

use vax_core::{SlotTime, VaccineId};

// ── Appointment ───────────────────────────────────────────────────────────────

/// One booked dose: who, which vaccine, when.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Appointment {
    pub stamp:   SlotTime,
    pub vaccine: VaccineId,
    /// Document number of the person the dose is booked for.
    pub document: Box<str>,
}

// ── AppointmentBook ───────────────────────────────────────────────────────────

/// The ordered appointment sequence of one health center.
#[derive(Default, Debug)]
pub struct AppointmentBook {
    entries: Vec<Appointment>,
}

impl AppointmentBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The appointment at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Appointment> {
        self.entries.get(index)
    }

    /// Iterate all appointments in book order.
    pub fn iter(&self) -> impl Iterator<Item = &Appointment> {
        self.entries.iter()
    }

    /// Insert a new appointment at its sort position.
    ///
    /// The insertion point is immediately before the first entry whose
    /// `(stamp, document)` key is strictly greater, so an entry with a key
    /// already present lands after the existing equals (stable insert).
    pub fn insert(&mut self, stamp: SlotTime, vaccine: VaccineId, document: &str) {
        let pos = self
            .entries
            .partition_point(|a| (a.stamp, &*a.document) <= (stamp, document));
        self.entries.insert(
            pos,
            Appointment {
                stamp,
                vaccine,
                document: document.into(),
            },
        );
    }

    /// Remove the first appointment matching both `stamp` and `document`,
    /// returning it.  `None` (and no change) when there is no match.
    pub fn remove(&mut self, stamp: SlotTime, document: &str) -> Option<Appointment> {
        let pos = self
            .entries
            .iter()
            .position(|a| a.stamp == stamp && &*a.document == document)?;
        Some(self.entries.remove(pos))
    }

    /// Index of the first appointment belonging to `document` at or after
    /// `start`, or `None` if no more remain.
    ///
    /// Enumerate all of a person's appointments by re-calling with
    /// `found + 1`.
    pub fn find(&self, document: &str, start: usize) -> Option<usize> {
        (start..self.entries.len()).find(|&i| &*self.entries[i].document == document)
    }
}
