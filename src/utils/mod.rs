//! Small, crate-internal helpers that don't belong to any single protocol module.

pub(crate) mod biguint;
pub mod fiat_shamir;
pub mod random;
