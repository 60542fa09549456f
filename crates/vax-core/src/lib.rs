//! `vax-core` — foundational types for the `rust_vax` campaign framework.
//!
//! This crate is a dependency of every other `vax-*` crate.  It intentionally
//! has no `vax-*` dependencies and minimal external ones (only `chrono` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                  |
//! |-------------|-------------------------------------------|
//! | [`ids`]     | `PersonId`, `VaccineId`, `CenterId`       |
//! | [`time`]    | `SlotTime` calendar timestamp             |
//! | [`error`]   | `CoreError`, `CoreResult`                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{CenterId, PersonId, VaccineId};
pub use time::{DATE_FMT, SlotTime, TIME_FMT};
