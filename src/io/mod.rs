//! Input and output around the optimizer: reading labeled points from
//! delimited text and rendering the final route.

mod input;
mod output;

pub use input::{read_points, LabeledPoint, ReaderOptions};
pub use output::RouteReport;
