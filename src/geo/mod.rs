//! Geographic points and great-circle distances.
//!
//! Coordinates are latitude/longitude in degrees. Distances are computed on
//! a sphere of the configured radius, either by the spherical law of cosines
//! or by the haversine formula, and collected once into a dense symmetric
//! [`DistanceMatrix`] that the rest of the pipeline reads.

mod distance;
mod matrix;
mod point;

pub use distance::{
    DistanceFormula, DistanceMetric, DistanceUnit, EARTH_RADIUS_KM, EARTH_RADIUS_MILES,
};
pub use matrix::{build_distance_matrix, DistanceMatrix};
pub use point::GeoPoint;
