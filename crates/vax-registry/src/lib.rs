//! `vax-registry` — person and vaccine stores for the `rust_vax` framework.
//!
//! # Crate layout
//!
//! | Module      | Contents                                |
//! |-------------|-----------------------------------------|
//! | [`person`]  | `Person`, `PersonRegistry`              |
//! | [`vaccine`] | `Vaccine`, `VaccineRegistry`            |
//! | [`error`]   | `RegistryError`, `RegistryResult<T>`    |
//!
//! # Storage model
//!
//! Both registries are owned stores with an explicit lifecycle: entities live
//! in slot `Vec`s and are referenced everywhere else by their typed ID (the
//! slot index).  A `FxHashMap` from the natural string key (person document,
//! vaccine name) to the ID makes lookups O(1).  Slots are never reused and
//! registration order is preserved — the vaccine iteration order is the
//! scheduler's sweep order.

pub mod error;
pub mod person;
pub mod vaccine;

#[cfg(test)]
mod tests;

pub use error::{RegistryError, RegistryResult};
pub use person::{Person, PersonRegistry};
pub use vaccine::{Vaccine, VaccineRegistry};
