//! Health centers and the center directory.

use rustc_hash::FxHashMap;

use vax_core::CenterId;

use crate::book::AppointmentBook;
use crate::stock::StockLedger;

// ── HealthCenter ──────────────────────────────────────────────────────────────

/// One vaccination site.  Each center exclusively owns its stock ledger and
/// its appointment book; neither structure is ever shared across centers.
#[derive(Debug)]
pub struct HealthCenter {
    /// Center identifier (postal code).
    pub cp: String,
    pub stock: StockLedger,
    pub appointments: AppointmentBook,
}

impl HealthCenter {
    pub fn new(cp: impl Into<String>) -> Self {
        Self {
            cp: cp.into(),
            stock: StockLedger::new(),
            appointments: AppointmentBook::new(),
        }
    }
}

// ── CenterDirectory ───────────────────────────────────────────────────────────

/// Owned store of all health centers, keyed by cp.
///
/// Registration order is preserved; person-appointment reports visit centers
/// in that order.
#[derive(Default, Debug)]
pub struct CenterDirectory {
    centers: Vec<HealthCenter>,
    by_cp:   FxHashMap<String, CenterId>,
}

impl CenterDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a center, or return the existing slot if the cp is already
    /// known.
    pub fn register(&mut self, cp: &str) -> CenterId {
        if let Some(&id) = self.by_cp.get(cp) {
            return id;
        }
        let id = CenterId(self.centers.len() as u32);
        self.by_cp.insert(cp.to_string(), id);
        self.centers.push(HealthCenter::new(cp));
        id
    }

    /// Look up a center by cp.
    pub fn find_by_cp(&self, cp: &str) -> Option<CenterId> {
        self.by_cp.get(cp).copied()
    }

    /// The center in slot `id`.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this directory.
    pub fn get(&self, id: CenterId) -> &HealthCenter {
        &self.centers[id.index()]
    }

    /// Mutable access to the center in slot `id`.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this directory.
    pub fn get_mut(&mut self, id: CenterId) -> &mut HealthCenter {
        &mut self.centers[id.index()]
    }

    pub fn len(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    /// Iterate all centers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (CenterId, &HealthCenter)> {
        self.centers
            .iter()
            .enumerate()
            .map(|(i, c)| (CenterId(i as u32), c))
    }
}
