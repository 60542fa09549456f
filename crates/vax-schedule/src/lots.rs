//! Audit trail of ingested vaccine lots.
//!
//! The stock ledger only keeps signed deltas; the lot log keeps the full
//! delivery records so reports can reproduce what arrived where and when.

use vax_core::{CenterId, SlotTime, VaccineId};

/// One vaccine lot as delivered to a center.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LotRecord {
    pub stamp:   SlotTime,
    pub center:  CenterId,
    pub vaccine: VaccineId,
    pub doses:   i64,
}

/// Append-only log of every ingested lot, in delivery order.
#[derive(Default, Debug)]
pub struct LotLog {
    records: Vec<LotRecord>,
}

impl LotLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: LotRecord) {
        self.records.push(record);
    }

    /// Index of the first lot matching `(center, vaccine, stamp)`.
    pub fn find(&self, center: CenterId, vaccine: VaccineId, stamp: SlotTime) -> Option<usize> {
        self.records
            .iter()
            .position(|r| r.center == center && r.vaccine == vaccine && r.stamp == stamp)
    }

    pub fn get(&self, index: usize) -> Option<&LotRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate all lots in delivery order.
    pub fn iter(&self) -> impl Iterator<Item = &LotRecord> {
        self.records.iter()
    }
}
