use approx::assert_abs_diff_eq;
use geocart::geodetic::Geodetic;

/// Assert that two geodetic triples agree within the given angular and linear tolerances.
pub fn assert_geodetic_close(actual: &Geodetic, expected: &Geodetic, angle_eps: f64, alt_eps: f64) {
    assert_abs_diff_eq!(actual.latitude, expected.latitude, epsilon = angle_eps);
    assert_abs_diff_eq!(actual.longitude, expected.longitude, epsilon = angle_eps);
    assert_abs_diff_eq!(actual.altitude, expected.altitude, epsilon = alt_eps);
}
