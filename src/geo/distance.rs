//! Great-circle distance formulas and units.

use super::point::GeoPoint;

/// Mean Earth radius in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Formula used to compute the central angle between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DistanceFormula {
    /// `acos(sin φ1 sin φ2 + cos φ1 cos φ2 cos Δλ)`.
    ///
    /// The cosine argument is clamped to `[-1, 1]` so that coincident
    /// points yield `0` instead of `NaN`.
    #[default]
    SphericalLawOfCosines,

    /// `2 atan2(√a, √(1 − a))` with `a = sin²(Δφ/2) + cos φ1 cos φ2 sin²(Δλ/2)`.
    ///
    /// Better conditioned than the law of cosines for very short distances.
    Haversine,
}

/// Unit of the reported distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DistanceUnit {
    #[default]
    Miles,
    Kilometers,
}

impl DistanceUnit {
    /// Sphere radius expressed in this unit.
    pub fn earth_radius(self) -> f64 {
        match self {
            DistanceUnit::Miles => EARTH_RADIUS_MILES,
            DistanceUnit::Kilometers => EARTH_RADIUS_KM,
        }
    }

    /// Short suffix for display.
    pub fn suffix(self) -> &'static str {
        match self {
            DistanceUnit::Miles => "miles",
            DistanceUnit::Kilometers => "km",
        }
    }
}

/// Formula plus unit: everything needed to turn two points into a distance.
///
/// # Examples
///
/// ```
/// use u_tour::geo::{DistanceFormula, DistanceMetric, DistanceUnit, GeoPoint};
///
/// let metric = DistanceMetric::default()
///     .with_formula(DistanceFormula::Haversine)
///     .with_unit(DistanceUnit::Kilometers);
/// let d = metric.distance(&GeoPoint::new(0.0, 0.0), &GeoPoint::new(0.0, 1.0));
/// assert!((d - 111.19).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DistanceMetric {
    pub formula: DistanceFormula,
    pub unit: DistanceUnit,
}

impl DistanceMetric {
    pub fn with_formula(mut self, formula: DistanceFormula) -> Self {
        self.formula = formula;
        self
    }

    pub fn with_unit(mut self, unit: DistanceUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Great-circle distance between `a` and `b`.
    ///
    /// Non-finite coordinates produce a non-finite result; callers that need
    /// a hard guarantee validate points first (see
    /// [`build_distance_matrix`](super::build_distance_matrix)).
    pub fn distance(&self, a: &GeoPoint, b: &GeoPoint) -> f64 {
        self.unit.earth_radius() * central_angle(self.formula, a, b)
    }
}

fn central_angle(formula: DistanceFormula, a: &GeoPoint, b: &GeoPoint) -> f64 {
    let (phi1, phi2) = (a.latitude_radians(), b.latitude_radians());
    let d_lambda = b.longitude_radians() - a.longitude_radians();

    match formula {
        DistanceFormula::SphericalLawOfCosines => {
            let cos_angle = phi1.sin() * phi2.sin() + phi1.cos() * phi2.cos() * d_lambda.cos();
            cos_angle.clamp(-1.0, 1.0).acos()
        }
        DistanceFormula::Haversine => {
            let d_phi = phi2 - phi1;
            let h = (d_phi / 2.0).sin().powi(2)
                + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
            let h = h.clamp(0.0, 1.0);
            2.0 * h.sqrt().atan2((1.0 - h).sqrt())
        }
    }
}
