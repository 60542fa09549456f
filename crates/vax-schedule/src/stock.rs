//! Per-center dose stock, kept as an append-only signed-delta ledger.
//!
//! # Design
//!
//! Every change to a center's stock — an incoming lot (positive) or a booked
//! dose (negative) — is one [`StockDelta`] effective on a calendar date.
//! The balance "as of" date `d` is the sum of all deltas with effective date
//! ≤ `d`, so availability on any future date is a prefix sum over the entries
//! posted so far and probing the future never mutates state.  Consumption on
//! a different date than the originating lot never rewrites a historical
//! record.
//!
//! The ledger does not enforce non-negativity: it is a pure accumulator, and
//! keeping the running balance ≥ 0 is the allocation engine's job (a dose is
//! only consumed after its availability check passed).

use chrono::NaiveDate;
use rustc_hash::FxHashMap;

use vax_core::VaccineId;

// ── StockDelta ────────────────────────────────────────────────────────────────

/// One signed stock change, effective from `date` onward.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StockDelta {
    pub date:  NaiveDate,
    pub delta: i64,
}

// ── StockLedger ───────────────────────────────────────────────────────────────

/// Append-only stock ledger of one health center, keyed by vaccine.
///
/// Entries are never merged, rewritten, or deleted; several deltas may share
/// the same `(vaccine, date)` key.
#[derive(Default, Debug)]
pub struct StockLedger {
    deltas: FxHashMap<VaccineId, Vec<StockDelta>>,
}

impl StockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a signed quantity change for `vaccine`, effective on `date`.
    ///
    /// Positive deltas are incoming lots, negative deltas booked doses; the
    /// ledger accepts either sign.
    pub fn update(&mut self, date: NaiveDate, vaccine: VaccineId, delta: i64) {
        self.deltas
            .entry(vaccine)
            .or_default()
            .push(StockDelta { date, delta });
    }

    /// Cumulative dose balance for `vaccine` as of `date` — the sum of all
    /// deltas effective on or before `date`.  0 for a vaccine with no
    /// entries.
    pub fn doses_on(&self, date: NaiveDate, vaccine: VaccineId) -> i64 {
        self.deltas
            .get(&vaccine)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|e| e.date <= date)
                    .map(|e| e.delta)
                    .sum()
            })
            .unwrap_or(0)
    }

    /// All posted deltas for `vaccine`, in posting order.
    pub fn entries(&self, vaccine: VaccineId) -> &[StockDelta] {
        self.deltas.get(&vaccine).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Vaccines with at least one posted delta, in ascending ID order so
    /// reports are deterministic.
    pub fn vaccines(&self) -> Vec<VaccineId> {
        let mut ids: Vec<VaccineId> = self.deltas.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// `true` if nothing has ever been posted.
    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }
}
