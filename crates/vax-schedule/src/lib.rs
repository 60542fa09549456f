//! `vax-schedule` — per-center dose stock, appointment bookkeeping, and the
//! appointment allocation engine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`stock`]    | `StockLedger`, `StockDelta` (cumulative dose balance)     |
//! | [`book`]     | `Appointment`, `AppointmentBook` (sorted bookkeeping)     |
//! | [`center`]   | `HealthCenter`, `CenterDirectory`                         |
//! | [`lots`]     | `LotRecord`, `LotLog` (ingestion audit trail)             |
//! | [`campaign`] | `Campaign` — the top-level store and scheduler            |
//! | [`error`]    | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Allocation model (summary)
//!
//! Stock is an append-only signed-delta ledger per `(center, vaccine)`: the
//! balance "as of" a date is the sum of all deltas effective on or before it.
//! Booking a series inserts one appointment per dose into the center's sorted
//! book, then posts a `-1` delta at each appointment date, so later
//! availability queries see the promised doses as consumed.
//!
//! [`Campaign::allocate_appointment`] searches a 14-day window in two passes:
//! a strict week where the entire series must clear the ledger, then a
//! relaxed week where one first-dose unit is enough to commit to a start.

pub mod book;
pub mod campaign;
pub mod center;
pub mod error;
pub mod lots;
pub mod stock;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use book::{Appointment, AppointmentBook};
pub use campaign::Campaign;
pub use center::{CenterDirectory, HealthCenter};
pub use error::{ScheduleError, ScheduleResult};
pub use lots::{LotLog, LotRecord};
pub use stock::{StockDelta, StockLedger};
