use crate::core::request::{
    ElevationRequest, GeocodeRequest, PlaceDetailRequest, PlaceNearbyRequest,
    ReverseGeocodeRequest,
};
use crate::utils::error::{GeoError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com";

const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";
const STATUS_NOT_FOUND: &str = "NOT_FOUND";

/// Client handle for the mapping web service JSON endpoints.
///
/// One blocking-style call per record; the batch processor awaits each
/// request to completion before issuing the next.
#[derive(Debug, Clone)]
pub struct MapsClient {
    http: reqwest::Client,
    base_url: String,
    key: String,
}

impl MapsClient {
    pub fn new(key: String) -> Self {
        Self::with_base_url(key, DEFAULT_BASE_URL.to_string())
    }

    /// Base URL override, used by tests to point at a mock server.
    pub fn with_base_url(key: String, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            key,
        }
    }

    pub async fn geocode(&self, req: &GeocodeRequest) -> Result<Vec<GeocodeResult>> {
        let mut params = vec![("address", req.address.clone())];
        if let Some(region) = &req.region {
            params.push(("region", region.clone()));
        }
        let resp: GeocodeResponse = self.get("/maps/api/geocode/json", &params).await?;
        match resp.status.as_str() {
            STATUS_OK => Ok(resp.results),
            STATUS_ZERO_RESULTS => Ok(Vec::new()),
            status => Err(service_error(status, resp.error_message)),
        }
    }

    pub async fn reverse_geocode(&self, req: &ReverseGeocodeRequest) -> Result<Vec<GeocodeResult>> {
        let mut params = vec![("latlng", format!("{},{}", req.lat, req.lng))];
        if let Some(region) = &req.region {
            params.push(("region", region.clone()));
        }
        let resp: GeocodeResponse = self.get("/maps/api/geocode/json", &params).await?;
        match resp.status.as_str() {
            STATUS_OK => Ok(resp.results),
            STATUS_ZERO_RESULTS => Ok(Vec::new()),
            status => Err(service_error(status, resp.error_message)),
        }
    }

    pub async fn elevation(&self, req: &ElevationRequest) -> Result<Vec<ElevationResult>> {
        let locations = req
            .locations
            .iter()
            .map(|loc| format!("{},{}", loc.lat, loc.lng))
            .collect::<Vec<_>>()
            .join("|");
        let params = vec![("locations", locations)];
        let resp: ElevationResponse = self.get("/maps/api/elevation/json", &params).await?;
        match resp.status.as_str() {
            STATUS_OK => Ok(resp.results),
            STATUS_ZERO_RESULTS => Ok(Vec::new()),
            status => Err(service_error(status, resp.error_message)),
        }
    }

    pub async fn place_nearby(&self, req: &PlaceNearbyRequest) -> Result<Vec<PlaceSummary>> {
        let params = vec![
            ("location", format!("{},{}", req.lat, req.lng)),
            ("radius", req.radius.to_string()),
        ];
        let resp: PlacesResponse = self.get("/maps/api/place/nearbysearch/json", &params).await?;
        match resp.status.as_str() {
            STATUS_OK => Ok(resp.results),
            STATUS_ZERO_RESULTS => Ok(Vec::new()),
            status => Err(service_error(status, resp.error_message)),
        }
    }

    /// A missing place id is a data outcome (`Ok(None)`), not a fault.
    pub async fn place_detail(&self, req: &PlaceDetailRequest) -> Result<Option<PlaceDetail>> {
        let params = vec![("place_id", req.place_id.clone())];
        let resp: PlaceDetailResponse = self.get("/maps/api/place/details/json", &params).await?;
        match resp.status.as_str() {
            STATUS_OK => Ok(resp.result),
            STATUS_ZERO_RESULTS | STATUS_NOT_FOUND => Ok(None),
            status => Err(service_error(status, resp.error_message)),
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, params: &[(&str, String)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", path);
        let response = self
            .http
            .get(&url)
            .query(params)
            .query(&[("key", self.key.as_str())])
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

fn service_error(status: &str, message: Option<String>) -> GeoError {
    GeoError::Service {
        status: status.to_string(),
        message: message.unwrap_or_default(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Bounds {
    pub northeast: Location,
    pub southwest: Location,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: Location,
    #[serde(default)]
    pub viewport: Option<Bounds>,
    #[serde(default)]
    pub bounds: Option<Bounds>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    #[serde(default)]
    pub formatted_address: String,
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ElevationResult {
    pub elevation: f64,
    pub resolution: f64,
}

#[derive(Debug, Deserialize)]
struct ElevationResponse {
    status: String,
    #[serde(default)]
    results: Vec<ElevationResult>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceSummary {
    pub place_id: String,
    pub name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct PlacesResponse {
    status: String,
    #[serde(default)]
    results: Vec<PlaceSummary>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDetail {
    pub name: String,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
struct PlaceDetailResponse {
    status: String,
    #[serde(default)]
    result: Option<PlaceDetail>,
    #[serde(default)]
    error_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client(server: &MockServer) -> MapsClient {
        MapsClient::with_base_url("test-key".to_string(), server.base_url())
    }

    #[tokio::test]
    async fn test_geocode_parses_first_result() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/maps/api/geocode/json")
                .query_param("address", "380 New York St, Redlands, CA")
                .query_param("key", "test-key");
            then.status(200).json_body(serde_json::json!({
                "status": "OK",
                "results": [{
                    "formatted_address": "380 New York St, Redlands, CA 92373, USA",
                    "geometry": {"location": {"lat": 34.0564505, "lng": -117.1956776}}
                }]
            }));
        });

        let req = GeocodeRequest {
            address: "380 New York St, Redlands, CA".to_string(),
            region: None,
        };
        let results = client(&server).geocode(&req).await.unwrap();

        mock.assert();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].geometry.location.lat, 34.0564505);
        assert_eq!(results[0].geometry.location.lng, -117.1956776);
    }

    #[tokio::test]
    async fn test_geocode_forwards_region_bias() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/maps/api/geocode/json")
                .query_param("region", "es");
            then.status(200)
                .json_body(serde_json::json!({"status": "ZERO_RESULTS", "results": []}));
        });

        let req = GeocodeRequest {
            address: "Toledo".to_string(),
            region: Some("es".to_string()),
        };
        let results = client(&server).geocode(&req).await.unwrap();

        mock.assert();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_rejected_status_is_service_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/maps/api/geocode/json");
            then.status(200).json_body(serde_json::json!({
                "status": "REQUEST_DENIED",
                "results": [],
                "error_message": "The provided API key is invalid."
            }));
        });

        let req = GeocodeRequest {
            address: "anywhere".to_string(),
            region: None,
        };
        let err = client(&server).geocode(&req).await.unwrap_err();

        match err {
            GeoError::Service { status, message } => {
                assert_eq!(status, "REQUEST_DENIED");
                assert!(message.contains("invalid"));
            }
            other => panic!("expected service error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_elevation_joins_locations() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/maps/api/elevation/json")
                .query_param("locations", "39.7391536,-104.9847034");
            then.status(200).json_body(serde_json::json!({
                "status": "OK",
                "results": [{"elevation": 1608.637939453125, "resolution": 4.771975994110107}]
            }));
        });

        let req = ElevationRequest {
            locations: vec![Location {
                lat: 39.7391536,
                lng: -104.9847034,
            }],
        };
        let results = client(&server).elevation(&req).await.unwrap();

        mock.assert();
        assert_eq!(results[0].elevation, 1608.637939453125);
    }

    #[tokio::test]
    async fn test_place_detail_not_found_is_empty() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/maps/api/place/details/json");
            then.status(200)
                .json_body(serde_json::json!({"status": "NOT_FOUND"}));
        });

        let req = PlaceDetailRequest {
            place_id: "ChIJbogus".to_string(),
        };
        let detail = client(&server).place_detail(&req).await.unwrap();

        assert!(detail.is_none());
    }
}
