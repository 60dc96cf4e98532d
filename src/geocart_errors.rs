use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeocartError {
    #[error("Non-positive ellipsoid axis: a = {0}, b = {1}")]
    NonPositiveAxis(f64, f64),

    #[error("Prolate ellipsoid rejected (semiminor axis exceeds semimajor): a = {0}, b = {1}")]
    ProlateEllipsoid(f64, f64),
}
