use serde::{Deserialize, Serialize};

/// Outcome annotation shared by every record kind. The batch processor
/// sets the note exactly once per record.
pub trait Annotate {
    fn set_note(&mut self, note: &str);
    fn note(&self) -> &str;
}

macro_rules! impl_annotate {
    ($($record:ty),+ $(,)?) => {
        $(impl Annotate for $record {
            fn set_note(&mut self, note: &str) {
                self.note = note.to_string();
            }

            fn note(&self) -> &str {
                &self.note
            }
        })+
    };
}

/// Forward geocoding: street address in, coordinates out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeocodeRecord {
    pub id: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub note: String,
}

/// Reverse geocoding: coordinates in, formatted address out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReverseGeocodeRecord {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    pub address: String,
    pub note: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElevationRecord {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    pub elevation: f64,
    pub resolution: f64,
    pub note: String,
}

/// Nearby-place search: coordinates and a search radius in, the first
/// matching place out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceNearbyRecord {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    pub radius: u32,
    pub place_id: String,
    pub name: String,
    pub place_type: String,
    pub note: String,
}

/// Place-detail lookup by place identifier. Viewport and bounds are
/// rendered as space-separated `ne_lat ne_lng sw_lat sw_lng` strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceDetailRecord {
    pub id: String,
    pub place_id: String,
    pub name: String,
    pub scope: String,
    pub place_type: String,
    pub viewport: String,
    pub bounds: String,
    pub note: String,
}

impl_annotate!(
    GeocodeRecord,
    ReverseGeocodeRecord,
    ElevationRecord,
    PlaceNearbyRecord,
    PlaceDetailRecord,
);
