//! # Constants and type definitions for geocart
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! definitions** used throughout the `geocart` library.
//!
//! ## Overview
//!
//! - Reference ellipsoid axes (WGS84)
//! - Unit conversions (degrees ↔ radians)
//! - Core type aliases used across the crate
//! - The degenerate-input guard values of the Olson converter
//!
//! All lengths in this crate are expressed in **kilometers**. The degenerate-radius threshold
//! and the sentinel altitude below implicitly assume kilometer-scale planetary inputs; they are
//! preserved literally for compatibility with the reference formulation of the algorithm.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Earth equatorial radius in kilometers (WGS84)
pub const WGS84_MAJOR_AXIS: f64 = 6_378.137;

/// Earth polar radius in kilometers (WGS84)
pub const WGS84_MINOR_AXIS: f64 = 6_356.752_314_2;

/// Radial distance below which the Olson converter gives up (kilometers).
///
/// A position closer than this to the body center has no meaningful radial direction; the
/// converter returns the sentinel result instead of dividing by near-zero quantities.
pub const DEGENERATE_RADIUS: Kilometer = 100.0;

/// Sentinel altitude returned by the Olson converter for degenerate inputs (kilometers).
pub const DEGENERATE_ALTITUDE: Kilometer = -1e7;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in kilometers
pub type Kilometer = f64;
