//! `vax-io` — record import and report export.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                |
//! |------------|---------------------------------------------------------|
//! | [`loader`] | `load_campaign_csv`, `load_campaign_reader`             |
//! | [`report`] | record exports and the per-center stock listing         |
//! | [`error`]  | `LoadError`, `ReportError`                              |
//!
//! The wire format is semicolon-delimited, headerless records whose first
//! field names the record type (`PERSON`, `VACCINE_LOT` on input;
//! `VACCINE`, `VACCINE_LOT`, `APPOINTMENT` on output).

pub mod error;
pub mod loader;
pub mod report;


pub use error::{LoadError, LoadResult, ReportError, ReportResult};
pub use loader::{load_campaign_csv, load_campaign_reader};
pub use report::{
    print_center_stock, write_lots, write_person_appointments, write_vaccines,
};
