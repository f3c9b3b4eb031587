//! The elliptic-curve group and scalar field the rest of the crate is built on.
//!
//! This module is the crate's "external collaborator": everything above it (polynomials, DLEQ
//! proofs, PVSS, SCRAPE) only ever calls through the functions and type aliases defined here, and
//! never reaches into `blstrs` directly. That keeps the choice of curve — currently the BLS12-381
//! G1 group, used purely as a prime-order DDH group and never paired — isolated to one place.
pub mod point;
pub mod scalar;
pub mod serialization;

pub use point::{mul_and_sum, mul_power_and_sum, point_identity, DhSecret};
pub use scalar::{hash_points_to_scalar, key_from_num, key_generate, key_inverse};

/// A point in the prime-order group used throughout the crate (the BLS12-381 G1 group).
pub type Point = blstrs::G1Projective;

/// An element of the group's scalar field.
pub type Scalar = blstrs::Scalar;

/// The distinguished generator `G` of the group.
pub fn curve_generator() -> Point {
    use group::Group;
    Point::generator()
}

/// `G .* s`, i.e. the public key associated with private scalar `s`.
pub fn point_from_secret(s: &Scalar) -> Point {
    curve_generator() * s
}
