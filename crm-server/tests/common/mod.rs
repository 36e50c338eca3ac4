//! Shared helpers for router-level tests

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use crm_server::db::MemoryStore;
use crm_server::{build_router, AppState, FixedClock};

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
}

impl TestApp {
    /// Router over an empty in-memory store, with "now" pinned to `hour:min`.
    pub fn at(hour: u32, min: u32) -> Self {
        let store = Arc::new(MemoryStore::new());
        let state = AppState::in_memory(store.clone(), Arc::new(FixedClock::at(hour, min)));
        Self {
            router: build_router(state),
            store,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn create_group(&self, subject: &str, start: &str, end: &str) -> i64 {
        let (status, body) = self.post("/groups", group_body(subject, start, end)).await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_i64().unwrap()
    }

    pub async fn create_student(&self, name: &str) -> i64 {
        let (status, body) = self.post("/students", json!({ "full_name": name })).await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_i64().unwrap()
    }
}

pub fn group_body(subject: &str, start: &str, end: &str) -> Value {
    json!({
        "subject": subject,
        "days": "Mon/Wed/Fri",
        "startTime": start,
        "endTime": end,
        "teacher_name": "Malika Saidova",
        "teacher_phone": "+998935550011"
    })
}
