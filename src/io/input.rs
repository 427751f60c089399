//! Delimited point reader.
//!
//! Each record is `label<delim>latitude<delim>longitude`, coordinates in
//! degrees. Extra trailing columns are ignored, blank lines are skipped and
//! the first line may be a header.

use std::io::BufRead;

use crate::error::{InvalidInput, Result};
use crate::geo::GeoPoint;

/// A point with its display label.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabeledPoint {
    pub label: String,
    pub point: GeoPoint,
}

/// Reader settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReaderOptions {
    /// Field separator.
    pub delimiter: char,
    /// Whether the first line is a header to skip.
    pub has_header: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            has_header: true,
        }
    }
}

impl ReaderOptions {
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }
}

/// Reads labeled points from `reader`.
///
/// # Errors
///
/// - [`InvalidInput::MalformedRecord`] with the 1-based line number for a
///   record with fewer than three fields, or a coordinate that does not
///   parse as a finite number.
/// - [`Error::Io`](crate::Error::Io) if reading fails.
///
/// # Examples
///
/// ```
/// use u_tour::io::{read_points, ReaderOptions};
///
/// let csv = "Address,Latitude,Longitude\n\
///            UCI,33.6405,-117.8443\n\
///            Disneyland,33.8121,-117.9190\n";
/// let points = read_points(csv.as_bytes(), ReaderOptions::default()).unwrap();
/// assert_eq!(points.len(), 2);
/// assert_eq!(points[1].label, "Disneyland");
/// ```
pub fn read_points<R: BufRead>(reader: R, options: ReaderOptions) -> Result<Vec<LabeledPoint>> {
    let mut points = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        if line_no == 1 && options.has_header {
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }
        points.push(parse_record(&line, line_no, options.delimiter)?);
    }
    tracing::debug!(records = points.len(), "points read");
    Ok(points)
}

fn parse_record(line: &str, line_no: usize, delimiter: char) -> Result<LabeledPoint> {
    let mut fields = line.split(delimiter).map(str::trim);
    let (Some(label), Some(lat), Some(lng)) = (fields.next(), fields.next(), fields.next()) else {
        return Err(InvalidInput::MalformedRecord {
            line: line_no,
            reason: format!("expected label{delimiter}latitude{delimiter}longitude"),
        }
        .into());
    };

    Ok(LabeledPoint {
        label: label.to_string(),
        point: GeoPoint::new(
            parse_coordinate(lat, "latitude", line_no)?,
            parse_coordinate(lng, "longitude", line_no)?,
        ),
    })
}

fn parse_coordinate(field: &str, name: &str, line_no: usize) -> Result<f64> {
    match field.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(InvalidInput::MalformedRecord {
            line: line_no,
            reason: format!("{name} {field:?} is not a finite number"),
        }
        .into()),
    }
}
