//! The five mapping API operations behind the generic batch pipeline.
//! Each descriptor carries row parsing, CSV layout, the required-input
//! rule, and the remote call for its record kind.

use crate::core::client::{Bounds, Location, MapsClient};
use crate::core::pipeline::{Operation, Outcome};
use crate::core::request;
use crate::core::request::{
    ElevationRequest, GeocodeRequest, PlaceNearbyRequest, ReverseGeocodeRequest,
};
use crate::domain::model::{
    ElevationRecord, GeocodeRecord, PlaceDetailRecord, PlaceNearbyRecord, ReverseGeocodeRecord,
};
use crate::utils::error::{GeoError, Result};
use async_trait::async_trait;
use csv::StringRecord;

// Well-known probe targets for the pre-batch access check.
const PROBE_ADDRESS: &str = "1600 Amphitheatre Pkwy, Mountain View, CA 94043";
const PROBE_GEOCODE_LATLNG: (f64, f64) = (37.421915, -122.082699);
const PROBE_ELEVATION_LATLNG: (f64, f64) = (39.7391536, -104.9847034);
const PROBE_NEARBY_RADIUS: u32 = 1000;

fn field(row: &StringRecord, idx: usize) -> &str {
    row.get(idx).unwrap_or_default()
}

fn parse_f64(row: &StringRecord, idx: usize, row_number: usize, name: &'static str) -> Result<f64> {
    let raw = field(row, idx);
    raw.trim().parse().map_err(|_| GeoError::FieldParse {
        row: row_number,
        field: name,
        value: raw.to_string(),
    })
}

fn parse_u32(row: &StringRecord, idx: usize, row_number: usize, name: &'static str) -> Result<u32> {
    let raw = field(row, idx);
    raw.trim().parse().map_err(|_| GeoError::FieldParse {
        row: row_number,
        field: name,
        value: raw.to_string(),
    })
}

fn fmt_float(value: f64) -> String {
    value.to_string()
}

// Space-separated so the naive stdout comma-join stays unambiguous.
fn fmt_bounds(bounds: &Bounds) -> String {
    format!(
        "{} {} {} {}",
        bounds.northeast.lat, bounds.northeast.lng, bounds.southwest.lat, bounds.southwest.lng
    )
}

fn first_type(types: &[String]) -> String {
    types.first().cloned().unwrap_or_default()
}

pub struct GeocodeOp {
    region: Option<String>,
}

impl GeocodeOp {
    pub fn new(region: Option<String>) -> Self {
        Self { region }
    }
}

#[async_trait]
impl Operation for GeocodeOp {
    type Record = GeocodeRecord;

    fn name(&self) -> &'static str {
        "geocode"
    }

    fn headers(&self) -> &'static [&'static str] {
        &["id", "address", "lat", "lng", "note"]
    }

    fn parse_row(&self, _row_number: usize, row: &StringRecord) -> Result<GeocodeRecord> {
        Ok(GeocodeRecord {
            id: field(row, 0).to_string(),
            address: field(row, 1).to_string(),
            ..Default::default()
        })
    }

    fn to_row(&self, rec: &GeocodeRecord) -> Vec<String> {
        vec![
            rec.id.clone(),
            rec.address.clone(),
            fmt_float(rec.lat),
            fmt_float(rec.lng),
            rec.note.clone(),
        ]
    }

    fn missing_input(&self, rec: &GeocodeRecord) -> Option<&'static str> {
        rec.address.is_empty().then_some("Address Missing")
    }

    fn empty_note(&self) -> &'static str {
        "No Geocoding Result"
    }

    async fn submit(&self, client: &MapsClient, rec: &mut GeocodeRecord) -> Result<Outcome> {
        let req = request::geocode_request(rec, self.region.as_deref());
        let results = client.geocode(&req).await?;
        match results.first() {
            Some(hit) => {
                rec.lat = hit.geometry.location.lat;
                rec.lng = hit.geometry.location.lng;
                Ok(Outcome::Hit)
            }
            None => Ok(Outcome::Empty),
        }
    }

    async fn verify_access(&self, client: &MapsClient) -> Result<()> {
        let req = GeocodeRequest {
            address: PROBE_ADDRESS.to_string(),
            region: None,
        };
        client.geocode(&req).await.map(|_| ())
    }
}

pub struct ReverseGeocodeOp {
    region: Option<String>,
}

impl ReverseGeocodeOp {
    pub fn new(region: Option<String>) -> Self {
        Self { region }
    }
}

#[async_trait]
impl Operation for ReverseGeocodeOp {
    type Record = ReverseGeocodeRecord;

    fn name(&self) -> &'static str {
        "reverse-geocode"
    }

    fn headers(&self) -> &'static [&'static str] {
        &["id", "lat", "lng", "address", "note"]
    }

    fn parse_row(&self, row_number: usize, row: &StringRecord) -> Result<ReverseGeocodeRecord> {
        Ok(ReverseGeocodeRecord {
            id: field(row, 0).to_string(),
            lat: parse_f64(row, 1, row_number, "lat")?,
            lng: parse_f64(row, 2, row_number, "lng")?,
            ..Default::default()
        })
    }

    fn to_row(&self, rec: &ReverseGeocodeRecord) -> Vec<String> {
        vec![
            rec.id.clone(),
            fmt_float(rec.lat),
            fmt_float(rec.lng),
            rec.address.clone(),
            rec.note.clone(),
        ]
    }

    fn missing_input(&self, rec: &ReverseGeocodeRecord) -> Option<&'static str> {
        (rec.lat == 0.0 || rec.lng == 0.0).then_some("Lat and/or Lng Missing")
    }

    fn empty_note(&self) -> &'static str {
        "No Reverse Geocoding Result"
    }

    async fn submit(&self, client: &MapsClient, rec: &mut ReverseGeocodeRecord) -> Result<Outcome> {
        let req = request::reverse_geocode_request(rec, self.region.as_deref());
        let results = client.reverse_geocode(&req).await?;
        match results.first() {
            Some(hit) => {
                rec.address = hit.formatted_address.clone();
                Ok(Outcome::Hit)
            }
            None => Ok(Outcome::Empty),
        }
    }

    async fn verify_access(&self, client: &MapsClient) -> Result<()> {
        let req = ReverseGeocodeRequest {
            lat: PROBE_GEOCODE_LATLNG.0,
            lng: PROBE_GEOCODE_LATLNG.1,
            region: None,
        };
        client.reverse_geocode(&req).await.map(|_| ())
    }
}

pub struct ElevationOp;

#[async_trait]
impl Operation for ElevationOp {
    type Record = ElevationRecord;

    fn name(&self) -> &'static str {
        "elevation"
    }

    fn headers(&self) -> &'static [&'static str] {
        &["id", "lat", "lng", "elevation", "resolution", "note"]
    }

    fn parse_row(&self, row_number: usize, row: &StringRecord) -> Result<ElevationRecord> {
        Ok(ElevationRecord {
            id: field(row, 0).to_string(),
            lat: parse_f64(row, 1, row_number, "lat")?,
            lng: parse_f64(row, 2, row_number, "lng")?,
            ..Default::default()
        })
    }

    fn to_row(&self, rec: &ElevationRecord) -> Vec<String> {
        vec![
            rec.id.clone(),
            fmt_float(rec.lat),
            fmt_float(rec.lng),
            fmt_float(rec.elevation),
            fmt_float(rec.resolution),
            rec.note.clone(),
        ]
    }

    fn missing_input(&self, rec: &ElevationRecord) -> Option<&'static str> {
        (rec.lat == 0.0 || rec.lng == 0.0).then_some("Latitude or Longitude Missing")
    }

    fn empty_note(&self) -> &'static str {
        "No Elevation Result"
    }

    async fn submit(&self, client: &MapsClient, rec: &mut ElevationRecord) -> Result<Outcome> {
        let req = request::elevation_request(rec);
        let results = client.elevation(&req).await?;
        match results.first() {
            Some(hit) => {
                rec.elevation = hit.elevation;
                rec.resolution = hit.resolution;
                Ok(Outcome::Hit)
            }
            None => Ok(Outcome::Empty),
        }
    }

    async fn verify_access(&self, client: &MapsClient) -> Result<()> {
        let req = ElevationRequest {
            locations: vec![Location {
                lat: PROBE_ELEVATION_LATLNG.0,
                lng: PROBE_ELEVATION_LATLNG.1,
            }],
        };
        client.elevation(&req).await.map(|_| ())
    }
}

pub struct PlaceNearbyOp;

#[async_trait]
impl Operation for PlaceNearbyOp {
    type Record = PlaceNearbyRecord;

    fn name(&self) -> &'static str {
        "place-nearby"
    }

    fn headers(&self) -> &'static [&'static str] {
        &["id", "lat", "lng", "radius", "place_id", "name", "type", "note"]
    }

    fn parse_row(&self, row_number: usize, row: &StringRecord) -> Result<PlaceNearbyRecord> {
        Ok(PlaceNearbyRecord {
            id: field(row, 0).to_string(),
            lat: parse_f64(row, 1, row_number, "lat")?,
            lng: parse_f64(row, 2, row_number, "lng")?,
            radius: parse_u32(row, 3, row_number, "radius")?,
            ..Default::default()
        })
    }

    fn to_row(&self, rec: &PlaceNearbyRecord) -> Vec<String> {
        vec![
            rec.id.clone(),
            fmt_float(rec.lat),
            fmt_float(rec.lng),
            rec.radius.to_string(),
            rec.place_id.clone(),
            rec.name.clone(),
            rec.place_type.clone(),
            rec.note.clone(),
        ]
    }

    fn missing_input(&self, rec: &PlaceNearbyRecord) -> Option<&'static str> {
        (rec.lat == 0.0 || rec.lng == 0.0).then_some("Latitude or Longitude Missing")
    }

    fn empty_note(&self) -> &'static str {
        "No Place Result"
    }

    async fn submit(&self, client: &MapsClient, rec: &mut PlaceNearbyRecord) -> Result<Outcome> {
        let req = request::place_nearby_request(rec);
        let results = client.place_nearby(&req).await?;
        match results.first() {
            Some(hit) => {
                rec.place_id = hit.place_id.clone();
                rec.name = hit.name.clone();
                rec.place_type = first_type(&hit.types);
                if results.len() > 1 {
                    Ok(Outcome::Multiple)
                } else {
                    Ok(Outcome::Hit)
                }
            }
            None => Ok(Outcome::Empty),
        }
    }

    async fn verify_access(&self, client: &MapsClient) -> Result<()> {
        let req = PlaceNearbyRequest {
            lat: PROBE_ELEVATION_LATLNG.0,
            lng: PROBE_ELEVATION_LATLNG.1,
            radius: PROBE_NEARBY_RADIUS,
        };
        client.place_nearby(&req).await.map(|_| ())
    }
}

pub struct PlaceDetailOp;

#[async_trait]
impl Operation for PlaceDetailOp {
    type Record = PlaceDetailRecord;

    fn name(&self) -> &'static str {
        "place-detail"
    }

    fn headers(&self) -> &'static [&'static str] {
        &[
            "id",
            "place_id",
            "name",
            "scope",
            "type",
            "viewport",
            "bounds",
            "note",
        ]
    }

    fn parse_row(&self, _row_number: usize, row: &StringRecord) -> Result<PlaceDetailRecord> {
        Ok(PlaceDetailRecord {
            id: field(row, 0).to_string(),
            place_id: field(row, 1).to_string(),
            ..Default::default()
        })
    }

    fn to_row(&self, rec: &PlaceDetailRecord) -> Vec<String> {
        vec![
            rec.id.clone(),
            rec.place_id.clone(),
            rec.name.clone(),
            rec.scope.clone(),
            rec.place_type.clone(),
            rec.viewport.clone(),
            rec.bounds.clone(),
            rec.note.clone(),
        ]
    }

    fn missing_input(&self, rec: &PlaceDetailRecord) -> Option<&'static str> {
        rec.place_id.is_empty().then_some("Place ID Missing")
    }

    fn empty_note(&self) -> &'static str {
        "No Place Detail Result"
    }

    async fn submit(&self, client: &MapsClient, rec: &mut PlaceDetailRecord) -> Result<Outcome> {
        let req = request::place_detail_request(rec);
        match client.place_detail(&req).await? {
            Some(detail) => {
                rec.name = detail.name;
                rec.scope = detail.scope.unwrap_or_default();
                rec.place_type = first_type(&detail.types);
                if let Some(geometry) = &detail.geometry {
                    if let Some(viewport) = &geometry.viewport {
                        rec.viewport = fmt_bounds(viewport);
                    }
                    if let Some(bounds) = &geometry.bounds {
                        rec.bounds = fmt_bounds(bounds);
                    }
                }
                Ok(Outcome::Hit)
            }
            None => Ok(Outcome::Empty),
        }
    }

    // The original client check never probed the details endpoint.
    async fn verify_access(&self, _client: &MapsClient) -> Result<()> {
        Ok(())
    }
}
