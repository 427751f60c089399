//! Route report.

use std::fmt;

use crate::geo::DistanceUnit;
use crate::tour::Tour;

/// Printable summary of a tour: labels in visiting order plus total cost.
///
/// # Examples
///
/// ```
/// use u_tour::geo::DistanceUnit;
/// use u_tour::io::RouteReport;
/// use u_tour::Tour;
///
/// let labels = ["Home", "Office", "Gym"];
/// let tour = Tour::new(vec![0, 2, 1, 0], 0).unwrap();
/// let report = RouteReport::new(&tour, &labels, 12.5, DistanceUnit::Miles);
/// assert_eq!(
///     report.to_string(),
///     "Route: Home -> Gym -> Office -> Home\nTotal distance: 12.50 miles"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RouteReport {
    pub stops: Vec<String>,
    pub cost: f64,
    pub unit: DistanceUnit,
}

impl RouteReport {
    /// Looks up each tour index in `labels`.
    ///
    /// # Panics
    ///
    /// Panics if `labels` has fewer entries than the tour has points.
    pub fn new<S: AsRef<str>>(tour: &Tour, labels: &[S], cost: f64, unit: DistanceUnit) -> Self {
        Self {
            stops: tour
                .labels(labels)
                .into_iter()
                .map(|s| s.as_ref().to_string())
                .collect(),
            cost,
            unit,
        }
    }
}

impl fmt::Display for RouteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Route: {}", self.stops.join(" -> "))?;
        write!(f, "Total distance: {:.2} {}", self.cost, self.unit.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_stop() {
        let tour = Tour::new(vec![0, 0], 0).unwrap();
        let report = RouteReport::new(&tour, &["Depot".to_string()], 0.0, DistanceUnit::Kilometers);
        assert_eq!(report.stops, vec!["Depot", "Depot"]);
        assert_eq!(report.to_string(), "Route: Depot -> Depot\nTotal distance: 0.00 km");
    }
}
