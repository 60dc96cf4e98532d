//! Cartesian → geodetic conversion by series approximation plus one correction step
//! (Olson, 1996).
//!
//! A flattening series gives a first latitude estimate, picked from one of two algebraically
//! equivalent formulas depending on which is well conditioned for the input, and a single
//! Newton-like correction refines latitude and altitude together. Exactly one correction pass
//! runs regardless of input, so the latency is fixed; the residual error is slightly larger
//! than unbounded iteration would leave.
//!
//! ## Degenerate inputs
//!
//! Positions closer than [`DEGENERATE_RADIUS`] (100 km) to the body center have no usable
//! radial direction. For those the converter returns the fixed sentinel
//! `(lat = 0, lon = 0, h = -1e7)` **as an ordinary value** — there is no error return. Callers
//! must check [`Geodetic::is_degenerate`] before trusting the result; the sentinel is easy to
//! silently accept as a bogus position otherwise. Threshold and sentinel assume kilometer-scale
//! inputs and are preserved literally from the reference formulation.

use nalgebra::Vector3;

use crate::constants::{Radian, DEGENERATE_ALTITUDE, DEGENERATE_RADIUS};
use crate::ellipsoid::Ellipsoid;
use crate::geodetic::Geodetic;

/// Convert a body-fixed Cartesian position to geodetic coordinates, one correction step.
///
/// Arguments
/// ---------
/// * `position`: body-fixed Cartesian position, components in kilometers
/// * `ellipsoid`: reference ellipsoid with `a >= b > 0` (caller-guaranteed, not checked)
///
/// Return
/// ------
/// * The [`Geodetic`] triple, or the degenerate sentinel for positions within
///   [`DEGENERATE_RADIUS`] of the origin (see the module docs).
pub fn ecef_to_geodetic(position: &Vector3<f64>, ellipsoid: &Ellipsoid) -> Geodetic {
    let (x, y, z) = (position.x, position.y, position.z);
    let a = ellipsoid.a;
    let e2 = ellipsoid.first_eccentricity_squared();

    let zp = z.abs();
    let w2 = x * x + y * y;
    let w = w2.sqrt();
    let z2 = z * z;
    let r2 = w2 + z2;
    let r = r2.sqrt();

    if r < DEGENERATE_RADIUS {
        return Geodetic {
            altitude: DEGENERATE_ALTITUDE,
            longitude: 0.0,
            latitude: 0.0,
        };
    }

    // Series coefficients, derived from the ellipsoid per call
    let a1 = a * e2;
    let a2 = a1 * a1;
    let a3 = a1 * e2 / 2.0;
    let a4 = 2.5 * a2;
    let a5 = a1 + a3;
    let a6 = 1.0 - e2;

    let s2 = z2 / r2;
    let c2 = w2 / r2;
    let u = a2 / r;
    let v = a3 - a4 / r;

    // c² > 0.3 keeps the sine formula away from its ill-conditioned zone near the pole;
    // the cosine formula covers the complement.
    let (lat0, s, c, ss) = if c2 > 0.3 {
        latitude_from_sine(zp, r, s2, c2, a1, u, v)
    } else {
        latitude_from_cosine(w, r, s2, c2, a5, u, v)
    };

    // One Newton-like correction of latitude and altitude together
    let g = 1.0 - e2 * ss;
    let rg = a / g.sqrt();
    let rf = a6 * rg;
    let du = w - rg * c;
    let dv = zp - rf * s;
    let f = c * du + s * dv;
    let m = c * dv - s * du;
    let p = m / (rf / g + f);

    let mut latitude = lat0 + p;
    if z < 0.0 {
        latitude = -latitude;
    }

    Geodetic {
        altitude: f + m * p / 2.0,
        longitude: y.atan2(x),
        latitude,
    }
}

/// First latitude estimate solving for `sin(lat)`, cosine recovered from the identity.
///
/// Well conditioned away from the pole (`c² > 0.3`). Returns `(lat, sin, cos, sin²)`.
fn latitude_from_sine(
    zp: f64,
    r: f64,
    s2: f64,
    c2: f64,
    a1: f64,
    u: f64,
    v: f64,
) -> (Radian, f64, f64, f64) {
    let s = (zp / r) * (1.0 + c2 * (a1 + u + s2 * v) / r);
    let lat = s.asin();
    let ss = s * s;
    let c = (1.0 - ss).sqrt();
    (lat, s, c, ss)
}

/// First latitude estimate solving for `cos(lat)`, sine recovered from the identity.
///
/// Well conditioned near the pole (`c² <= 0.3`). Returns `(lat, sin, cos, sin²)`.
fn latitude_from_cosine(
    w: f64,
    r: f64,
    s2: f64,
    c2: f64,
    a5: f64,
    u: f64,
    v: f64,
) -> (Radian, f64, f64, f64) {
    let c = (w / r) * (1.0 - s2 * (a5 - u - c2 * v) / r);
    let lat = c.acos();
    let ss = 1.0 - c * c;
    let s = ss.sqrt();
    (lat, s, c, ss)
}
