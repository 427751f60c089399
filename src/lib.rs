//! Closed tours over geographic points.
//!
//! Given latitude/longitude pairs and a start point, builds a tour that
//! visits every point exactly once and returns to the start, with a short
//! total great-circle length:
//!
//! - **Distance matrix** ([`geo`]): pairwise great-circle distances by the
//!   spherical law of cosines or haversine, in miles or kilometers.
//! - **Construction** ([`construct`]): greedy nearest-neighbor tour.
//! - **Local search** ([`kopt`]): 2-opt, 3-opt and 4-opt improvement with
//!   strict-improvement acceptance, run until convergence.
//! - **Session** ([`solver`]): the three stages above behind one call, with
//!   TOML configuration.
//! - **I/O** ([`io`]): delimited point input and route reports.
//!
//! # Example
//!
//! ```
//! use u_tour::geo::{build_distance_matrix, DistanceMetric, GeoPoint};
//! use u_tour::construct::greedy_construct;
//! use u_tour::kopt::{optimize, KOptConfig};
//!
//! let points = vec![
//!     GeoPoint::new(0.0, 0.0),
//!     GeoPoint::new(1.0, 1.0),
//!     GeoPoint::new(0.0, 1.0),
//!     GeoPoint::new(1.0, 0.0),
//! ];
//! let distances = build_distance_matrix(&points, DistanceMetric::default()).unwrap();
//! let (tour, cost) = greedy_construct(&distances, 0).unwrap();
//! let (best, best_cost) = optimize(&distances, tour, cost, &KOptConfig::default());
//!
//! assert_eq!(best.start(), 0);
//! assert!(best_cost <= cost);
//! assert!((best_cost - distances.path_length(best.as_slice())).abs() < 1e-9);
//! ```

pub mod construct;
pub mod error;
pub mod geo;
pub mod io;
pub mod kopt;
pub mod solver;
pub mod tour;

pub use error::{Error, InvalidInput, Result};
pub use tour::Tour;
