//! `hearth-households` — household record and status accessor.
//!
//! The household is the tenant boundary. The access-control core only ever
//! reads `status` through [`HouseholdDirectory`]; mutations live here.

pub mod household;

pub use household::{Household, HouseholdDirectory, HouseholdStatus};
