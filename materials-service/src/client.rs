//! Materials Project REST client (summary search only).
//!
//! Endpoint used:
//!   * GET /materials/summary/?{chemsys|formula}=..&_limit=..&_fields=..

use std::time::{Duration, Instant};

use reqwest::{Client, header};
use serde_json::{Map, Value};
use tracing::{debug, error, info};

use crate::{
    config::MaterialsConfig,
    errors::{MaterialsConfigError, MaterialsError, MaterialsResult, upstream_message},
    query::{SUMMARY_FIELDS, SummarySearch},
};

/// A single summary record, already reduced to [`SUMMARY_FIELDS`].
pub type MaterialRecord = Map<String, Value>;

/// Materials Project HTTP client wrapper.
#[derive(Debug, Clone)]
pub struct MaterialsProjectClient {
    http: Client,
    url_summary: String,
    timeout: Duration,
}

impl MaterialsProjectClient {
    /// Builds a client with the API key as a default header.
    pub fn new(cfg: &MaterialsConfig) -> MaterialsResult<Self> {
        let mut key = header::HeaderValue::from_str(&cfg.api_key)
            .map_err(|_| MaterialsConfigError::InvalidApiKey)?;
        key.set_sensitive(true);

        let mut headers = header::HeaderMap::new();
        headers.insert("X-API-KEY", key);
        headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));

        let timeout = Duration::from_secs(cfg.timeout_secs);
        let http = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(MaterialsError::ClientBuild)?;

        let url_summary = format!("{}/materials/summary/", cfg.base_url.trim_end_matches('/'));
        debug!("Creating MaterialsProjectClient with url_summary={}", url_summary);

        Ok(Self {
            http,
            url_summary,
            timeout,
        })
    }

    /// Runs one summary search and returns at most `search.limit` records,
    /// each projected onto [`SUMMARY_FIELDS`].
    pub async fn search(&self, search: &SummarySearch) -> MaterialsResult<Vec<MaterialRecord>> {
        let started = Instant::now();
        debug!(
            criterion = search.criterion.param_name(),
            value = %search.criterion.value(),
            limit = search.limit,
            "GET {}", self.url_summary
        );

        let resp = self
            .http
            .get(&self.url_summary)
            .query(&search.to_params())
            .send()
            .await
            .map_err(|e| self.transport_error(e, started))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            let snippet = upstream_message(&text);
            error!(
                %status,
                url = %self.url_summary,
                %snippet,
                latency_ms = started.elapsed().as_millis(),
                "Materials Project returned non-success status"
            );
            return Err(MaterialsError::HttpStatus {
                status,
                url: self.url_summary.clone(),
                snippet,
            });
        }

        let body: Value = resp.json().await.map_err(|e| {
            error!(error = %e, "failed to decode Materials Project response");
            MaterialsError::InvalidResponse(format!("body is not JSON: {e}"))
        })?;

        let records = extract_records(body, search.limit)?;

        info!(
            hits = records.len(),
            latency_ms = started.elapsed().as_millis(),
            "materials summary search completed"
        );

        Ok(records)
    }

    fn transport_error(&self, err: reqwest::Error, started: Instant) -> MaterialsError {
        error!(
            error = %err,
            url = %self.url_summary,
            latency_ms = started.elapsed().as_millis(),
            "Materials Project transport failure"
        );
        if err.is_timeout() {
            MaterialsError::Timeout(self.timeout)
        } else {
            MaterialsError::Network(err)
        }
    }
}

/// Unwraps the `{"data": [...]}` envelope, keeps object entries only,
/// truncates to `limit` and drops keys outside [`SUMMARY_FIELDS`].
pub fn extract_records(body: Value, limit: u32) -> MaterialsResult<Vec<MaterialRecord>> {
    let Value::Object(mut envelope) = body else {
        return Err(MaterialsError::InvalidResponse(
            "expected a JSON object envelope".into(),
        ));
    };
    let Some(Value::Array(items)) = envelope.remove("data") else {
        return Err(MaterialsError::InvalidResponse(
            "missing `data` array in envelope".into(),
        ));
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(map) => Some(project_fields(map)),
            _ => None,
        })
        .take(limit as usize)
        .collect())
}

fn project_fields(mut map: MaterialRecord) -> MaterialRecord {
    map.retain(|k, _| SUMMARY_FIELDS.contains(&k.as_str()));
    map
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        sync::{Arc, Mutex},
    };

    use axum::{
        Json, Router,
        extract::{Query, State},
        http::{HeaderMap, StatusCode},
        routing::get,
    };
    use serde_json::json;

    use super::*;
    use crate::query::SearchCriterion;

    #[derive(Clone, Default)]
    struct Seen {
        calls: Arc<Mutex<Vec<(HashMap<String, String>, Option<String>)>>>,
    }

    async fn spawn(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn client(base: &str) -> MaterialsProjectClient {
        MaterialsProjectClient::new(&MaterialsConfig {
            base_url: base.into(),
            api_key: "mp-test".into(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    fn record(i: usize) -> Value {
        json!({
            "material_id": format!("mp-{i}"),
            "formula_pretty": "LiFeO2",
            "chemsys": "Fe-Li-O",
            "band_gap": 1.5,
            "density": 4.3,
            "is_stable": i == 0,
            "energy_above_hull": 0.01,
            "nelements": 3,
            "structure": { "lattice": "..." },
            "builder_meta": { "emmet_version": "0.1" }
        })
    }

    #[test]
    fn extract_truncates_and_projects() {
        let body = json!({ "data": (0..8).map(record).collect::<Vec<_>>(), "meta": {} });
        let out = extract_records(body, 5).unwrap();

        assert_eq!(out.len(), 5);
        for r in &out {
            assert!(r.keys().all(|k| SUMMARY_FIELDS.contains(&k.as_str())));
            assert_eq!(r.len(), SUMMARY_FIELDS.len());
        }
    }

    #[test]
    fn extract_rejects_missing_envelope() {
        assert!(matches!(
            extract_records(json!({ "detail": "nope" }), 5),
            Err(MaterialsError::InvalidResponse(_))
        ));
        assert!(matches!(
            extract_records(json!([1, 2, 3]), 5),
            Err(MaterialsError::InvalidResponse(_))
        ));
        assert!(matches!(
            extract_records(json!({ "data": "not-a-list" }), 5),
            Err(MaterialsError::InvalidResponse(_))
        ));
    }

    #[test]
    fn extract_skips_non_object_entries() {
        let body = json!({ "data": [1, record(0), "x", null] });
        let out = extract_records(body, 20).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0]["material_id"], "mp-0");
    }

    #[tokio::test]
    async fn search_sends_one_request_with_key_and_params() {
        let seen = Seen::default();
        let router = Router::new()
            .route(
                "/materials/summary/",
                get(
                    |State(seen): State<Seen>,
                     headers: HeaderMap,
                     Query(q): Query<HashMap<String, String>>| async move {
                        let key = headers
                            .get("x-api-key")
                            .and_then(|h| h.to_str().ok())
                            .map(str::to_string);
                        seen.calls.lock().unwrap().push((q, key));
                        Json(json!({ "data": (0..3).map(record).collect::<Vec<_>>() }))
                    },
                ),
            )
            .with_state(seen.clone());
        let base = spawn(router).await;

        let search = SummarySearch::new(SearchCriterion::ChemSys("Li-Fe-O".into()), 5);
        let out = client(&base).search(&search).await.unwrap();
        assert_eq!(out.len(), 3);

        let calls = seen.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (params, key) = &calls[0];
        assert_eq!(key.as_deref(), Some("mp-test"));
        assert_eq!(params["chemsys"], "Li-Fe-O");
        assert_eq!(params["_limit"], "5");
        assert_eq!(params["_fields"], SUMMARY_FIELDS.join(","));
        assert!(!params.contains_key("formula"));
    }

    #[tokio::test]
    async fn upstream_failure_status_keeps_message() {
        let router = Router::new().route(
            "/materials/summary/",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance window") }),
        );
        let base = spawn(router).await;

        let search = SummarySearch::new(SearchCriterion::Formula("Fe2O3".into()), 20);
        let err = client(&base).search(&search).await.unwrap_err();

        assert!(err.is_upstream());
        match err {
            MaterialsError::HttpStatus { status, snippet, .. } => {
                assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
                assert_eq!(snippet, "maintenance window");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn upstream_detail_field_becomes_message() {
        let router = Router::new().route(
            "/materials/summary/",
            get(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "detail": "Invalid or missing API key" })),
                )
            }),
        );
        let base = spawn(router).await;

        let search = SummarySearch::new(SearchCriterion::Formula("Fe2O3".into()), 20);
        let err = client(&base).search(&search).await.unwrap_err();
        assert!(matches!(
            err,
            MaterialsError::HttpStatus { status: StatusCode::UNAUTHORIZED, ref snippet, .. }
                if snippet == "Invalid or missing API key"
        ));
    }

    #[tokio::test]
    async fn non_json_body_is_invalid_response() {
        let router = Router::new().route(
            "/materials/summary/",
            get(|| async { "<html>oops</html>" }),
        );
        let base = spawn(router).await;

        let search = SummarySearch::new(SearchCriterion::Formula("Fe2O3".into()), 20);
        let err = client(&base).search(&search).await.unwrap_err();
        assert!(matches!(err, MaterialsError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn unreachable_host_is_network_error() {
        // Bind then drop to obtain a port nobody listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let search = SummarySearch::new(SearchCriterion::ChemSys("Si".into()), 20);
        let err = client(&format!("http://{addr}"))
            .search(&search)
            .await
            .unwrap_err();

        assert!(err.is_upstream());
        assert!(matches!(err, MaterialsError::Network(_)));
    }

    #[tokio::test]
    async fn slow_upstream_hits_timeout() {
        let router = Router::new().route(
            "/materials/summary/",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                Json(json!({ "data": [] }))
            }),
        );
        let base = spawn(router).await;

        let slow = MaterialsProjectClient::new(&MaterialsConfig {
            base_url: base,
            api_key: "mp-test".into(),
            timeout_secs: 1,
        })
        .unwrap();
        let search = SummarySearch::new(SearchCriterion::ChemSys("Si".into()), 20);
        let err = slow.search(&search).await.unwrap_err();

        assert!(err.is_upstream());
        assert!(matches!(err, MaterialsError::Timeout(d) if d == Duration::from_secs(1)));
    }
}
