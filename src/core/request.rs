//! Pure record-to-request formatting. No I/O: the same record and
//! configuration always produce the same request.

use crate::core::client::Location;
use crate::domain::model::{
    ElevationRecord, GeocodeRecord, PlaceDetailRecord, PlaceNearbyRecord, ReverseGeocodeRecord,
};

#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeRequest {
    pub address: String,
    pub region: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReverseGeocodeRequest {
    pub lat: f64,
    pub lng: f64,
    pub region: Option<String>,
}

/// The vendor endpoint takes a location list; one record maps to a
/// single-element list.
#[derive(Debug, Clone, PartialEq)]
pub struct ElevationRequest {
    pub locations: Vec<Location>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaceNearbyRequest {
    pub lat: f64,
    pub lng: f64,
    pub radius: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaceDetailRequest {
    pub place_id: String,
}

pub fn geocode_request(rec: &GeocodeRecord, region: Option<&str>) -> GeocodeRequest {
    GeocodeRequest {
        address: rec.address.clone(),
        region: region.map(str::to_string),
    }
}

pub fn reverse_geocode_request(
    rec: &ReverseGeocodeRecord,
    region: Option<&str>,
) -> ReverseGeocodeRequest {
    ReverseGeocodeRequest {
        lat: rec.lat,
        lng: rec.lng,
        region: region.map(str::to_string),
    }
}

pub fn elevation_request(rec: &ElevationRecord) -> ElevationRequest {
    ElevationRequest {
        locations: vec![Location {
            lat: rec.lat,
            lng: rec.lng,
        }],
    }
}

pub fn place_nearby_request(rec: &PlaceNearbyRecord) -> PlaceNearbyRequest {
    PlaceNearbyRequest {
        lat: rec.lat,
        lng: rec.lng,
        radius: rec.radius,
    }
}

pub fn place_detail_request(rec: &PlaceDetailRecord) -> PlaceDetailRequest {
    PlaceDetailRequest {
        place_id: rec.place_id.clone(),
    }
}
