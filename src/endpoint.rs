/// HTTP endpoint for location assessments
///
/// Provides a small JSON API so a front end (map page, notebook, curl) can
/// ask for a susceptibility assessment without linking the crate.
///
/// Endpoints:
/// - GET /assess?lat={lat}&lon={lon}&place={name} - Assess a geocoded point
/// - GET /regions - Per-region catalog risk summaries
/// - GET /health - Service health check

use crate::analysis::groupings::summarize_regions;
use crate::assess::SusceptibilityAssessor;
use crate::model::SusceptibilityError;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use threadpool::ThreadPool;

type JsonResponse = tiny_http::Response<std::io::Cursor<Vec<u8>>>;

// ---------------------------------------------------------------------------
// HTTP Server
// ---------------------------------------------------------------------------

/// Start HTTP endpoint server on the specified port. Requests are handed to
/// a pool of `workers` threads sharing one read-only assessor.
pub fn start_endpoint_server(
    port: u16,
    assessor: Arc<SusceptibilityAssessor>,
    workers: usize,
) -> Result<(), String> {
    let server = tiny_http::Server::http(format!("0.0.0.0:{}", port))
        .map_err(|e| format!("Failed to start HTTP server: {}", e))?;

    println!("📡 HTTP endpoint listening on http://0.0.0.0:{}", port);
    println!("   GET /assess?lat=..&lon=..&place=.. - Assess a location");
    println!("   GET /regions - Regional risk summaries");
    println!("   GET /health - Service health check\n");

    let pool = ThreadPool::new(workers.max(1));

    for request in server.incoming_requests() {
        let assessor = Arc::clone(&assessor);
        pool.execute(move || {
            let (status, body) = route(request.url(), &assessor);
            log::debug!("{} {} -> {}", request.method(), request.url(), status);
            if let Err(e) = request.respond(create_response(status, body)) {
                log::error!("Failed to send response: {}", e);
            }
        });
    }

    Ok(())
}

/// Dispatches a request URL to its handler. Returns the status code and JSON
/// body so routing can be tested without a socket.
pub fn route(url: &str, assessor: &SusceptibilityAssessor) -> (u16, serde_json::Value) {
    let (path, query) = match url.split_once('?') {
        Some((path, query)) => (path, query),
        None => (url, ""),
    };

    match path {
        "/health" => handle_health(assessor),
        "/assess" => handle_assess(assessor, &parse_query(query)),
        "/regions" => handle_regions(assessor),
        _ => (
            404,
            json!({
                "error": "Not found",
                "available_endpoints": ["/health", "/assess?lat=&lon=&place=", "/regions"]
            }),
        ),
    }
}

/// Handle /health endpoint
fn handle_health(assessor: &SusceptibilityAssessor) -> (u16, serde_json::Value) {
    (
        200,
        json!({
            "status": "ok",
            "service": "bhukamp_service",
            "version": env!("CARGO_PKG_VERSION"),
            "records": assessor.store().len(),
            "model": assessor.model_name()
        }),
    )
}

/// Handle /assess endpoint
fn handle_assess(
    assessor: &SusceptibilityAssessor,
    params: &HashMap<String, String>,
) -> (u16, serde_json::Value) {
    let latitude = match parse_coordinate(params, "lat") {
        Ok(v) => v,
        Err(e) => return (400, json!({ "error": e })),
    };
    let longitude = match parse_coordinate(params, "lon") {
        Ok(v) => v,
        Err(e) => return (400, json!({ "error": e })),
    };
    let place = params.get("place").map(String::as_str).unwrap_or("");

    match assessor.assess_location(latitude, longitude, place) {
        Ok(assessment) => match serde_json::to_value(&assessment) {
            Ok(body) => (200, body),
            Err(e) => (500, json!({ "error": e.to_string() })),
        },
        Err(e) => (status_for(&e), json!({ "error": e.to_string() })),
    }
}

/// Handle /regions endpoint
fn handle_regions(assessor: &SusceptibilityAssessor) -> (u16, serde_json::Value) {
    let summaries = summarize_regions(assessor.store().records());
    match serde_json::to_value(&summaries) {
        Ok(body) => (200, json!({ "regions": body })),
        Err(e) => (500, json!({ "error": e.to_string() })),
    }
}

fn status_for(error: &SusceptibilityError) -> u16 {
    match error {
        SusceptibilityError::EmptyDataset => 503,
        SusceptibilityError::InvalidCoordinates { .. } => 400,
        _ => 500,
    }
}

fn parse_coordinate(params: &HashMap<String, String>, key: &str) -> Result<f64, String> {
    let raw = params
        .get(key)
        .ok_or_else(|| format!("missing query parameter '{}'", key))?;
    raw.trim()
        .parse::<f64>()
        .map_err(|_| format!("query parameter '{}' is not a number: {}", key, raw))
}

/// Splits `a=1&b=two` into decoded pairs. `+` is treated as a space, as
/// browsers send it for form-encoded place names.
fn parse_query(query: &str) -> HashMap<String, String> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = value.replace('+', " ");
            let value = urlencoding::decode(&value).ok()?.into_owned();
            Some((key.to_string(), value))
        })
        .collect()
}

/// Create HTTP response with JSON body
fn create_response(status_code: u16, json: serde_json::Value) -> JsonResponse {
    let body = serde_json::to_string_pretty(&json).unwrap_or_else(|_| "{}".to_string());
    let response = tiny_http::Response::from_data(body.into_bytes())
        .with_status_code(tiny_http::StatusCode::from(status_code));

    match tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]) {
        Ok(header) => response.with_header(header),
        Err(_) => response,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::ModelArtifact;
    use crate::config::AssessmentConfig;
    use crate::ingest::{catalog::parse_catalog, fixtures::*};
    use crate::normalize::ScalerSet;
    use crate::store::SeismicStore;

    fn fixture_assessor(store: SeismicStore) -> SusceptibilityAssessor {
        let scalers = ScalerSet::from_json(fixture_scalers_json()).unwrap();
        let model = ModelArtifact::from_json(fixture_rules_model_json())
            .unwrap()
            .into_model(&scalers)
            .unwrap();
        SusceptibilityAssessor::new(store, scalers, model, AssessmentConfig::default()).unwrap()
    }

    fn loaded_assessor() -> SusceptibilityAssessor {
        let records = parse_catalog(fixture_catalog_csv().as_bytes()).unwrap();
        fixture_assessor(SeismicStore::from_records(records))
    }

    #[test]
    fn test_health_reports_record_count_and_model() {
        let (status, body) = route("/health", &loaded_assessor());
        assert_eq!(status, 200);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["records"], 8);
        assert_eq!(body["model"], "rules");
    }

    #[test]
    fn test_assess_returns_class_and_rating() {
        let (status, body) = route(
            "/assess?lat=30.55&lon=79.56&place=Joshimath%2C%20Uttarakhand",
            &loaded_assessor(),
        );
        assert_eq!(status, 200);
        assert_eq!(body["terrain_risky"], true);
        assert!(body["predicted_class"].is_string());
        assert!(body["safety_rating"].as_f64().is_some());
        assert_eq!(body["region"], "Northern India");
    }

    #[test]
    fn test_assess_decodes_plus_as_space() {
        let params = parse_query("place=Koyna+Nagar&lat=17.4");
        assert_eq!(params["place"], "Koyna Nagar");
        assert_eq!(params["lat"], "17.4");
    }

    #[test]
    fn test_assess_missing_or_bad_coordinates_is_400() {
        let assessor = loaded_assessor();
        assert_eq!(route("/assess?lon=79.0", &assessor).0, 400);
        assert_eq!(route("/assess?lat=abc&lon=79.0", &assessor).0, 400);
        assert_eq!(route("/assess?lat=95&lon=79.0", &assessor).0, 400);
    }

    #[test]
    fn test_assess_empty_catalog_is_503() {
        let assessor = fixture_assessor(SeismicStore::default());
        let (status, body) = route("/assess?lat=30.0&lon=79.0", &assessor);
        assert_eq!(status, 503);
        assert!(body["error"].as_str().unwrap().contains("empty"));
    }

    #[test]
    fn test_regions_lists_every_region() {
        let (status, body) = route("/regions", &loaded_assessor());
        assert_eq!(status, 200);
        assert_eq!(body["regions"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_unknown_path_is_404() {
        let (status, body) = route("/site/05568500", &loaded_assessor());
        assert_eq!(status, 404);
        assert!(body["available_endpoints"].is_array());
    }
}
