//! FRA point tables: CSV rows normalized into typed points.
//!
//! Loading is all-or-nothing at the transport/CSV level and lossy at the row
//! level: a row whose coordinates do not decode is dropped and only shows up
//! in the dropped count, while a body the CSV reader rejects degrades the
//! whole load to an empty catalog (see [`load_catalog`]).

use std::sync::Arc;

use foundation::dms;
use serde::Serialize;
use tracing::{debug, info, trace, warn};

use crate::geo_point::GeoPoint;

/// Column names of the published FRA point table.
pub mod columns {
    pub const NAME: &str = "FRA Point";
    pub const LATITUDE: &str = "FRA Point Latitude";
    pub const LONGITUDE: &str = "FRA Point Longitude";
    pub const POINT_TYPE: &str = "Point Type";
    pub const AIRSPACE_LOCATION: &str = "Airspace Location Indicators";
    pub const CROSS_BORDER_STATES: &str = "Cross-Border FRA States";
}

/// Raw column/value pairs in header order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Properties {
    pub pairs: Vec<(String, String)>,
}

impl Properties {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// Value of `key`; with repeated headers the last column wins.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Like [`Properties::get`] but missing columns read as empty.
    pub fn get_or_empty(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    fn from_record(headers: &[String], record: &csv::StringRecord) -> Self {
        let pairs = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.clone(), record.get(i).unwrap_or("").to_string()))
            .collect();
        Self { pairs }
    }
}

impl<K, V> FromIterator<(K, V)> for Properties
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A named route point with decoded coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FraPoint {
    pub name: String,
    pub coordinates: GeoPoint,
    pub point_type: String,
    pub airspace_location: String,
    pub cross_border_states: String,
    /// Every column of the source row, including the ones decoded above.
    pub properties: Properties,
}

impl FraPoint {
    pub fn attribute(&self, column: &str) -> Option<&str> {
        self.properties.get(column)
    }
}

/// Ordered, immutable point collection for one load.
///
/// Cloning shares the underlying points; a reload produces a new catalog
/// rather than mutating an existing one.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    points: Arc<Vec<FraPoint>>,
}

impl Catalog {
    pub fn new(points: Vec<FraPoint>) -> Self {
        Self {
            points: Arc::new(points),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[FraPoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FraPoint> {
        self.points.iter()
    }

    /// All points carrying `name`, in catalog order.
    pub fn by_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a FraPoint> + 'a {
        self.points.iter().filter(move |p| p.name == name)
    }

    /// True when both handles refer to the same load.
    pub fn same_identity(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.points, &other.points)
    }
}

impl PartialEq for Catalog {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity(other) || self.points == other.points
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a FraPoint;
    type IntoIter = std::slice::Iter<'a, FraPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    Transport(String),
    Malformed { line: Option<u64>, reason: String },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Transport(msg) => write!(f, "point table unavailable: {msg}"),
            LoadError::Malformed {
                line: Some(line),
                reason,
            } => write!(f, "malformed point table at line {line}: {reason}"),
            LoadError::Malformed { line: None, reason } => {
                write!(f, "malformed point table: {reason}")
            }
        }
    }
}

impl std::error::Error for LoadError {}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        LoadError::Malformed {
            line: err.position().map(|p| p.line()),
            reason: err.to_string(),
        }
    }
}

/// Maps one row to a point, or `None` when either coordinate fails to decode.
pub fn normalize(row: &Properties) -> Option<FraPoint> {
    let lat = decode_coordinate(row, columns::LATITUDE)?;
    let lon = decode_coordinate(row, columns::LONGITUDE)?;
    let coordinates = GeoPoint::new(lon, lat);
    if !coordinates.is_finite() {
        trace!(name = row.get_or_empty(columns::NAME), "non-finite coordinates");
        return None;
    }

    Some(FraPoint {
        name: row.get_or_empty(columns::NAME).to_string(),
        coordinates,
        point_type: row.get_or_empty(columns::POINT_TYPE).to_string(),
        airspace_location: row.get_or_empty(columns::AIRSPACE_LOCATION).to_string(),
        cross_border_states: row.get_or_empty(columns::CROSS_BORDER_STATES).to_string(),
        properties: row.clone(),
    })
}

fn decode_coordinate(row: &Properties, column: &str) -> Option<f64> {
    match dms::decode(row.get_or_empty(column)) {
        Ok(v) => Some(v),
        Err(err) => {
            trace!(name = row.get_or_empty(columns::NAME), column, %err, "dropping row");
            None
        }
    }
}

/// Parses a CSV point table (header row required) into a catalog.
///
/// Blank lines are skipped and rows that fail [`normalize`] are dropped;
/// row order is preserved.
pub fn try_load_catalog(csv_bytes: &[u8]) -> Result<Catalog, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_bytes);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();

    let mut points = Vec::new();
    let mut dropped = 0usize;
    for result in reader.records() {
        let record = result?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        let row = Properties::from_record(&headers, &record);
        match normalize(&row) {
            Some(point) => points.push(point),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!(dropped, "rows without decodable coordinates");
    }
    info!(points = points.len(), dropped, "point table loaded");
    Ok(Catalog::new(points))
}

/// Like [`try_load_catalog`] but degrades to an empty catalog on failure.
pub fn load_catalog(csv_bytes: &[u8]) -> Catalog {
    match try_load_catalog(csv_bytes) {
        Ok(catalog) => catalog,
        Err(err) => {
            warn!(%err, "point table load failed, continuing with an empty catalog");
            Catalog::empty()
        }
    }
}

/// Degrades a failed fetch (or a failed parse of a fetched body) to an
/// empty catalog.
pub fn load_catalog_from<E>(fetched: Result<Vec<u8>, E>) -> Catalog
where
    E: std::fmt::Display,
{
    match fetched {
        Ok(bytes) => load_catalog(&bytes),
        Err(err) => {
            let err = LoadError::Transport(err.to_string());
            warn!(%err, "point table load failed, continuing with an empty catalog");
            Catalog::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        Catalog, LoadError, Properties, columns, load_catalog, load_catalog_from, normalize,
        try_load_catalog,
    };
    use pretty_assertions::assert_eq;

    const HEADER: &str = "FRA Point,FRA Point Latitude,FRA Point Longitude,Point Type,\
Airspace Location Indicators,Cross-Border FRA States,Remarks";

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    fn row(name: &str, lat: &str, lon: &str) -> Properties {
        [
            (columns::NAME, name),
            (columns::LATITUDE, lat),
            (columns::LONGITUDE, lon),
            (columns::POINT_TYPE, "I"),
            (columns::AIRSPACE_LOCATION, "LDZO"),
            (columns::CROSS_BORDER_STATES, ""),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn normalize_orders_coordinates_longitude_first() {
        let p = normalize(&row("KOMIB", "N404519", "E0183830")).unwrap();
        assert_eq!(p.name, "KOMIB");
        assert_close(p.coordinates.lon_deg, 18.64167, 1e-5);
        assert_close(p.coordinates.lat_deg, 40.75528, 1e-5);
        assert_eq!(p.point_type, "I");
        assert_eq!(p.airspace_location, "LDZO");
        assert_eq!(p.cross_border_states, "");
        assert_eq!(p.attribute(columns::LATITUDE), Some("N404519"));
    }

    #[test]
    fn normalize_drops_rows_with_bad_coordinates() {
        assert!(normalize(&row("BAD1", "N40", "E0183830")).is_none());
        assert!(normalize(&row("BAD2", "N404519", "")).is_none());
        assert!(normalize(&row("BAD3", "Q404519", "E0183830")).is_none());
        assert!(normalize(&row("BAD4", "NaN00", "E0183830")).is_none());
    }

    #[test]
    fn normalize_accepts_bare_decimal_coordinates() {
        let p = normalize(&row("DEC", "45.500", "-1.2500")).unwrap();
        assert_eq!(p.coordinates.lon_deg, -1.25);
        assert_eq!(p.coordinates.lat_deg, 45.5);
    }

    #[test]
    fn non_finite_decimal_coordinates_are_dropped() {
        assert!(normalize(&row("INF", "1e999", "E0183830")).is_none());
        assert!(normalize(&row("INF", "N404519", "infinity")).is_none());

        let csv = format!(
            "{HEADER}\n\
             A,1e999,E0183830,I,LDZO,,\n\
             B, N404519 ,E0183830,I,LDZO,,\n"
        );
        let catalog = try_load_catalog(csv.as_bytes()).unwrap();
        let names: Vec<&str> = catalog.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["B"]);
    }

    #[test]
    fn loads_single_komib_row() {
        let csv = "FRA Point,FRA Point Latitude,FRA Point Longitude,Point Type\n\
                   KOMIB,N404519,E0183830,X\n";
        let catalog = load_catalog(csv.as_bytes());
        assert_eq!(catalog.len(), 1);
        let p = &catalog.points()[0];
        assert_eq!(p.name, "KOMIB");
        assert_eq!(p.point_type, "X");
        assert_close(p.coordinates.lon_deg, 18.64167, 1e-5);
        assert_close(p.coordinates.lat_deg, 40.75528, 1e-5);
    }

    #[test]
    fn keeps_row_order_skips_blank_lines_and_drops_bad_rows() {
        let csv = format!(
            "{HEADER}\n\
             KOMIB,N404519,E0183830,I,LDZO,,\n\
             \n\
             BROKEN,N40,E0183830,I,LDZO,,\n\
             BITLA,S100000,W0013000,E,LJLA,LDZO LJLA,near border\n"
        );
        let catalog = try_load_catalog(csv.as_bytes()).unwrap();
        let names: Vec<&str> = catalog.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["KOMIB", "BITLA"]);

        let bitla = &catalog.points()[1];
        assert_eq!(bitla.coordinates.lat_deg, -10.0);
        assert_close(bitla.coordinates.lon_deg, -1.5, 1e-12);
        assert_eq!(bitla.cross_border_states, "LDZO LJLA");
        assert_eq!(bitla.attribute("Remarks"), Some("near border"));
    }

    #[test]
    fn short_rows_read_missing_columns_as_empty() {
        let csv = format!("{HEADER}\nKOMIB,N404519,E0183830\n");
        let catalog = try_load_catalog(csv.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.points()[0].airspace_location, "");
        assert_eq!(catalog.points()[0].attribute("Remarks"), Some(""));
    }

    #[test]
    fn byte_order_mark_is_stripped_from_first_header() {
        let csv =
            "\u{feff}FRA Point,FRA Point Latitude,FRA Point Longitude\nKOMIB,N404519,E0183830\n";
        let catalog = try_load_catalog(csv.as_bytes()).unwrap();
        assert_eq!(catalog.points()[0].name, "KOMIB");
    }

    #[test]
    fn duplicate_names_stay_distinct_points() {
        let csv = format!(
            "{HEADER}\nKOMIB,N404519,E0183830,I,LDZO,,\nKOMIB,N414519,E0183830,I,LDZO,,\n"
        );
        let catalog = try_load_catalog(csv.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.by_name("KOMIB").count(), 2);
    }

    #[test]
    fn loading_twice_yields_equal_catalogs() {
        let csv = format!(
            "{HEADER}\nKOMIB,N404519,E0183830,I,LDZO,,\nBITLA,N450000,E0150000,E,LJLA,,\n"
        );
        let a = load_catalog(csv.as_bytes());
        let b = load_catalog(csv.as_bytes());
        assert!(!a.same_identity(&b));
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_utf8_degrades_to_empty_catalog() {
        let mut bytes = b"FRA Point,FRA Point Latitude,FRA Point Longitude\n".to_vec();
        bytes.extend_from_slice(b"\xff\xfe,N404519,E0183830\n");

        let err = try_load_catalog(&bytes).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }), "{err}");
        assert!(load_catalog(&bytes).is_empty());
    }

    #[test]
    fn transport_failure_degrades_to_empty_catalog() {
        let catalog = load_catalog_from::<String>(Err("connection refused".to_string()));
        assert_eq!(catalog, Catalog::empty());
    }

    #[test]
    fn empty_body_is_an_empty_catalog() {
        assert!(try_load_catalog(b"").unwrap().is_empty());
        assert!(try_load_catalog(HEADER.as_bytes()).unwrap().is_empty());
    }
}
