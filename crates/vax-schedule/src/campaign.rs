//! The campaign store and appointment allocation engine.
//!
//! # Two-phase search
//!
//! [`Campaign::allocate_appointment`] scans a 14-day window from the
//! requested start, in `(day, vaccine registration order)` priority:
//!
//! ```text
//! days 0–6   strict pass:  book the first vaccine whose ENTIRE series
//!                          clears the stock ledger (one extra dose per
//!                          dose already promised to the same series)
//! days 7–13  relaxed pass: book the first vaccine with at least one
//!                          first-dose unit in stock on that day
//! ```
//!
//! The relaxed pass trades series-completeness guarantees for earlier
//! commitment: a person is guaranteed a start in week two even when later
//! doses are not yet provably covered by posted lots.
//!
//! Booking inserts one appointment per dose, then posts one `-1` stock delta
//! per inserted appointment — insert before consume, so the consumption scan
//! observes the just-created records.

use chrono::{Days, NaiveDate};

use vax_core::{CenterId, PersonId, SlotTime, VaccineId};
use vax_registry::{Person, PersonRegistry, RegistryError, Vaccine, VaccineRegistry};

use crate::book::Appointment;
use crate::center::CenterDirectory;
use crate::error::{ScheduleError, ScheduleResult};
use crate::lots::{LotLog, LotRecord};

/// Days covered by each allocation pass.
const PHASE_DAYS: u32 = 7;

// ── Campaign ──────────────────────────────────────────────────────────────────

/// The top-level owned store: population, vaccine set, health centers, and
/// the lot audit trail, plus every operation that mutates them.
///
/// All operations are synchronous and single-writer; the duplicate-guard /
/// availability-check / insert / consume sequence inside
/// [`allocate_appointment`](Campaign::allocate_appointment) is not atomic
/// and must not be interleaved with another allocation against the same
/// center.
#[derive(Default, Debug)]
pub struct Campaign {
    persons:  PersonRegistry,
    vaccines: VaccineRegistry,
    centers:  CenterDirectory,
    lots:     LotLog,
}

impl Campaign {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Ingestion ─────────────────────────────────────────────────────────

    /// Register a person.  Fails with [`ScheduleError::DuplicatedPerson`] if
    /// the document is already taken.
    pub fn register_person(&mut self, person: Person) -> ScheduleResult<PersonId> {
        self.persons.register(person).map_err(|e| match e {
            RegistryError::DuplicatedPerson(document) => {
                ScheduleError::DuplicatedPerson(document)
            }
        })
    }

    /// Ingest a vaccine lot delivered to center `cp` at `stamp`.
    ///
    /// Unknown vaccines and centers are registered on the fly (first
    /// registration of a vaccine name fixes its dosing profile).  The doses
    /// become available in the center's stock from `stamp.date` onward, and
    /// the delivery is recorded in the lot log.
    pub fn receive_lot(
        &mut self,
        stamp: SlotTime,
        cp: &str,
        vaccine: Vaccine,
        doses: i64,
    ) -> (CenterId, VaccineId) {
        let vaccine = self.vaccines.register(vaccine);
        let center = self.centers.register(cp);
        self.centers
            .get_mut(center)
            .stock
            .update(stamp.date, vaccine, doses);
        self.lots.push(LotRecord { stamp, center, vaccine, doses });
        (center, vaccine)
    }

    // ── Availability ──────────────────────────────────────────────────────

    /// `true` if a complete series of `vaccine` starting on `date` clears
    /// the stock ledger of `center`.
    ///
    /// Dose `k` (0-based) is checked at `date + k * interval_days` and needs
    /// a cumulative balance strictly greater than `k`: one dose beyond those
    /// already promised to the earlier doses of this same series.
    ///
    /// # Panics
    /// Panics if either ID was not issued by this campaign's stores.
    pub fn series_available(&self, center: CenterId, vaccine: VaccineId, date: NaiveDate) -> bool {
        let profile = self.vaccines.get(vaccine);
        let stock = &self.centers.get(center).stock;
        let mut date = date;
        for count in 0..profile.required_doses {
            if stock.doses_on(date, vaccine) <= count as i64 {
                return false;
            }
            date = date + Days::new(profile.interval_days as u64);
        }
        true
    }

    /// Name-based convenience over [`series_available`](Campaign::series_available)
    /// for callers outside the allocation path (availability screens).
    /// `false` when the vaccine or center is unknown.
    pub fn check_availability(&self, cp: &str, vaccine: &str, date: NaiveDate) -> bool {
        let Some(vaccine) = self.vaccines.find_by_name(vaccine) else {
            return false;
        };
        let Some(center) = self.centers.find_by_cp(cp) else {
            return false;
        };
        self.series_available(center, vaccine, date)
    }

    // ── Booking ───────────────────────────────────────────────────────────

    /// Book a full appointment series without touching stock.
    ///
    /// Inserts `required_doses` appointments into the center's book at
    /// `start`, `start + interval`, `start + 2·interval`, … days.
    pub fn book_series(
        &mut self,
        cp: &str,
        document: &str,
        vaccine: &str,
        start: SlotTime,
    ) -> ScheduleResult<()> {
        if self.persons.find_by_document(document).is_none() {
            return Err(ScheduleError::PersonNotFound(document.to_string()));
        }
        let vaccine = self
            .vaccines
            .find_by_name(vaccine)
            .ok_or_else(|| ScheduleError::VaccineNotFound(vaccine.to_string()))?;
        let center = self
            .centers
            .find_by_cp(cp)
            .ok_or_else(|| ScheduleError::CenterNotFound(cp.to_string()))?;
        self.insert_series(center, vaccine, document, start);
        Ok(())
    }

    /// Find and book the earliest feasible appointment series for a person.
    ///
    /// Runs the two-phase search described in the module docs.  On success
    /// the center's book gains one appointment per dose and its ledger one
    /// `-1` delta per appointment; on failure nothing is modified.
    pub fn allocate_appointment(
        &mut self,
        cp: &str,
        document: &str,
        start: SlotTime,
    ) -> ScheduleResult<()> {
        if self.persons.find_by_document(document).is_none() {
            return Err(ScheduleError::PersonNotFound(document.to_string()));
        }
        let center = self
            .centers
            .find_by_cp(cp)
            .ok_or_else(|| ScheduleError::CenterNotFound(cp.to_string()))?;

        // One person, one series per center.
        if self.centers.get(center).appointments.find(document, 0).is_some() {
            return Err(ScheduleError::DuplicatedPerson(document.to_string()));
        }

        // Strict pass: the whole series must be deliverable at booking time.
        let mut stamp = start;
        for _ in 0..PHASE_DAYS {
            let pick = self
                .vaccines
                .iter()
                .map(|(id, _)| id)
                .find(|&id| self.series_available(center, id, stamp.date));
            if let Some(vaccine) = pick {
                self.commit_series(center, vaccine, document, stamp);
                return Ok(());
            }
            stamp = stamp.add_days(1);
        }

        // Relaxed pass: one first-dose unit on the day is enough.  Later
        // doses are deliberately not re-checked here.
        for _ in 0..PHASE_DAYS {
            let stock = &self.centers.get(center).stock;
            let pick = self
                .vaccines
                .iter()
                .map(|(id, _)| id)
                .find(|&id| stock.doses_on(stamp.date, id) > 0);
            if let Some(vaccine) = pick {
                self.commit_series(center, vaccine, document, stamp);
                return Ok(());
            }
            stamp = stamp.add_days(1);
        }

        Err(ScheduleError::NoVaccinesAvailable)
    }

    /// Cancel one booked dose: remove the first appointment matching
    /// `(stamp, document)` from the center's book and return its reserved
    /// dose to the ledger.  Booking state is unchanged when no appointment
    /// matches.
    pub fn cancel_appointment(
        &mut self,
        cp: &str,
        document: &str,
        stamp: SlotTime,
    ) -> ScheduleResult<()> {
        if self.persons.find_by_document(document).is_none() {
            return Err(ScheduleError::PersonNotFound(document.to_string()));
        }
        let center = self
            .centers
            .find_by_cp(cp)
            .ok_or_else(|| ScheduleError::CenterNotFound(cp.to_string()))?;
        let center = self.centers.get_mut(center);
        if let Some(appointment) = center.appointments.remove(stamp, document) {
            center
                .stock
                .update(appointment.stamp.date, appointment.vaccine, 1);
        }
        Ok(())
    }

    /// Post one `-1` stock delta for every appointment `document` holds in
    /// `center`'s book, at each appointment's date and vaccine.
    ///
    /// Called exactly once per successful allocation, after the series is
    /// inserted, so the scan consumes the just-created records.
    ///
    /// # Panics
    /// Panics if `center` was not issued by this campaign's directory.
    pub fn consume_booked_stock(&mut self, center: CenterId, document: &str) {
        let center = self.centers.get_mut(center);
        let mut next = 0;
        while let Some(index) = center.appointments.find(document, next) {
            if let Some(appointment) = center.appointments.get(index) {
                let (date, vaccine) = (appointment.stamp.date, appointment.vaccine);
                center.stock.update(date, vaccine, -1);
            }
            next = index + 1;
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// All appointments of a person across every center, centers in
    /// registration order, each center's entries in book order.
    pub fn person_appointments(
        &self,
        document: &str,
    ) -> ScheduleResult<Vec<(CenterId, Appointment)>> {
        if self.persons.find_by_document(document).is_none() {
            return Err(ScheduleError::PersonNotFound(document.to_string()));
        }
        let mut out = Vec::new();
        for (id, center) in self.centers.iter() {
            let mut next = 0;
            while let Some(index) = center.appointments.find(document, next) {
                if let Some(appointment) = center.appointments.get(index) {
                    out.push((id, appointment.clone()));
                }
                next = index + 1;
            }
        }
        Ok(out)
    }

    pub fn population_count(&self) -> usize {
        self.persons.len()
    }

    pub fn vaccine_count(&self) -> usize {
        self.vaccines.len()
    }

    pub fn center_count(&self) -> usize {
        self.centers.len()
    }

    pub fn lot_count(&self) -> usize {
        self.lots.len()
    }

    // ── Store access ──────────────────────────────────────────────────────

    pub fn persons(&self) -> &PersonRegistry {
        &self.persons
    }

    pub fn vaccines(&self) -> &VaccineRegistry {
        &self.vaccines
    }

    pub fn centers(&self) -> &CenterDirectory {
        &self.centers
    }

    pub fn lots(&self) -> &LotLog {
        &self.lots
    }

    // ── Private helpers ───────────────────────────────────────────────────

    /// Insert the full series into the center's book.
    fn insert_series(&mut self, center: CenterId, vaccine: VaccineId, document: &str, start: SlotTime) {
        let (required, interval) = {
            let profile = self.vaccines.get(vaccine);
            (profile.required_doses, profile.interval_days)
        };
        let book = &mut self.centers.get_mut(center).appointments;
        let mut stamp = start;
        for _ in 0..required {
            book.insert(stamp, vaccine, document);
            stamp = stamp.add_days(interval as u64);
        }
    }

    /// Insert the series, then consume its stock.  The order matters: the
    /// consumption scan walks the book looking for the person's entries.
    fn commit_series(&mut self, center: CenterId, vaccine: VaccineId, document: &str, start: SlotTime) {
        self.insert_series(center, vaccine, document, start);
        self.consume_booked_stock(center, document);
    }
}
