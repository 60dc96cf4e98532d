//! # geocart
//!
//! Conversions between body-fixed Cartesian positions and geodetic coordinates
//! (latitude, longitude, altitude) on an oblate reference ellipsoid.
//!
//! Two independent, interchangeable pure functions solve the inverse problem:
//!
//! - [`heikkinen::ecef_to_geodetic`] — closed-form algebraic solution, no iteration,
//! - [`olson::ecef_to_geodetic`] — series approximation plus a single correction step,
//!   with an explicit degenerate-input sentinel (see [`geodetic::Geodetic::is_degenerate`]).
//!
//! The forward map lives in [`forward::geodetic_to_ecef`]. Callers picking an algorithm at
//! runtime can go through [`geodetic::ConversionMethod`]. All lengths are kilometers, all
//! angles radians; both converters are side-effect free and safe to call from any number of
//! threads.

pub mod constants;
pub mod ellipsoid;
pub mod forward;
pub mod geocart_errors;
pub mod geodetic;
pub mod heikkinen;
pub mod olson;
