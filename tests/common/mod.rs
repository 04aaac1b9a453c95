//! In-process stand-in for the TMDB v3 API.

#![allow(dead_code)]

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use moviefix::config::CatalogConfig;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const API_KEY: &str = "test-key";
pub const DISCOVER_TOTAL_PAGES: u32 = 3;
pub const DISCOVER_PAGE_SIZE: u32 = 20;

/// Movie ids ending in 13 have no detail record.
pub const MISSING_DETAIL_SUFFIX: i64 = 13;

/// Detail lookups for this id answer 200 with a body that is not JSON.
pub const GARBLED_MOVIE_ID: i64 = 999;

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub path: String,
    pub params: HashMap<String, String>,
}

#[derive(Clone, Default)]
struct MockState {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

pub struct MockTmdb {
    pub addr: SocketAddr,
    state: MockState,
}

impl MockTmdb {
    pub async fn start() -> Self {
        let state = MockState::default();
        let app = Router::new()
            .fallback(handle)
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/3", self.addr)
    }

    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig {
            base_url: self.base_url(),
            api_key: API_KEY.to_string(),
            request_timeout_seconds: 5,
            ..CatalogConfig::default()
        }
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, prefix: &str) -> Vec<CapturedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path.starts_with(prefix))
            .collect()
    }
}

async fn handle(State(state): State<MockState>, uri: Uri) -> Response {
    let path = uri.path().to_string();
    let params: HashMap<String, String> = uri
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default();

    state.requests.lock().unwrap().push(CapturedRequest {
        path: path.clone(),
        params: params.clone(),
    });

    if params.get("api_key").map(String::as_str) != Some(API_KEY) {
        return error(
            StatusCode::UNAUTHORIZED,
            "Invalid API key: You must be granted a valid key.",
        );
    }

    let page: u32 = params
        .get("page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(1);

    match path.as_str() {
        "/3/genre/movie/list" => axum::Json(json!({
            "genres": [
                {"id": 28, "name": "Action"},
                {"id": 35, "name": "Comedy"}
            ]
        }))
        .into_response(),
        "/3/discover/movie" => discover(&params, page),
        "/3/search/movie" => search(&params, page),
        _ => match path.strip_prefix("/3/movie/").and_then(|id| id.parse().ok()) {
            Some(id) => movie(id),
            None => error(
                StatusCode::NOT_FOUND,
                "The resource you requested could not be found.",
            ),
        },
    }
}

fn discover(params: &HashMap<String, String>, page: u32) -> Response {
    let year = params
        .get("primary_release_year")
        .cloned()
        .unwrap_or_default();

    let results: Vec<Value> = (0..DISCOVER_PAGE_SIZE)
        .map(|i| {
            let id = i64::from(page) * 100 + i64::from(i);
            summary(id, &format!("Discover {year} {page}-{i}"))
        })
        .collect();

    axum::Json(json!({
        "page": page,
        "total_pages": DISCOVER_TOTAL_PAGES,
        "results": results
    }))
    .into_response()
}

fn search(params: &HashMap<String, String>, page: u32) -> Response {
    let results = if params.get("query").map(String::as_str) == Some("Matrix") {
        vec![summary(603, "The Matrix"), summary(604, "The Matrix Reloaded")]
    } else {
        Vec::new()
    };
    let total_pages = u32::from(!results.is_empty());

    axum::Json(json!({
        "page": page,
        "total_pages": total_pages,
        "results": results
    }))
    .into_response()
}

fn movie(id: i64) -> Response {
    if id == GARBLED_MOVIE_ID {
        return (StatusCode::OK, "<html>upstream error</html>").into_response();
    }
    if id % 100 == MISSING_DETAIL_SUFFIX {
        return error(
            StatusCode::NOT_FOUND,
            "The resource you requested could not be found.",
        );
    }

    let cast: Vec<Value> = (0..8)
        .map(|i| json!({"id": i, "name": format!("Actor {id}-{i}"), "character": null}))
        .collect();

    let mut body = summary(id, &format!("Movie {id}"));
    body["genres"] = json!([{"id": 28, "name": "Action"}]);
    body["credits"] = json!({
        "cast": cast,
        "crew": [
            {"id": 1, "name": "Assistant", "job": "Assistant Director"},
            {"id": 2, "name": format!("Director {id}"), "job": "Director"},
            {"id": 3, "name": "Second Director", "job": "Director"}
        ]
    });

    axum::Json(body).into_response()
}

fn summary(id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "poster_path": format!("/{id}.jpg"),
        "vote_average": 7.25,
        "release_date": "2012-06-01",
        "overview": ""
    })
}

fn error(status: StatusCode, message: &str) -> Response {
    (
        status,
        axum::Json(json!({
            "status_code": 7,
            "status_message": message,
            "success": false
        })),
    )
        .into_response()
}
