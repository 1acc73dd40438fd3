//! Shared helpers for the HTTP-level integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use tepidolacuenta::adapters::auth::MockSessionValidator;
use tepidolacuenta::app::{App, AppSettings, Repositories};

pub const OWNER_TOKEN: &str = "owner-token";
pub const STRANGER_TOKEN: &str = "stranger-token";

pub fn test_app() -> App {
    let validator = MockSessionValidator::new()
        .with_test_user(OWNER_TOKEN, "owner-1")
        .unwrap()
        .with_test_user(STRANGER_TOKEN, "stranger-1")
        .unwrap();

    App::build(
        Repositories::in_memory(),
        Arc::new(validator),
        AppSettings {
            qr_base_url: "https://tepidolacuenta.test".to_string(),
            ..AppSettings::default()
        },
    )
}

/// Sends one request through the router and decodes the JSON body.
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

/// A provisioned table and the query parameters printed in its QR code.
#[derive(Debug, Clone)]
pub struct ProvisionedTable {
    pub restaurant_id: String,
    pub branch_id: String,
    pub table_id: String,
    pub number: i64,
    pub hash: String,
}

impl ProvisionedTable {
    /// Body the diner frontend posts after scanning the code.
    pub fn request_body(&self) -> Value {
        json!({
            "restaurantId": self.restaurant_id,
            "branchId": self.branch_id,
            "tableId": self.table_id,
            "tableNumber": self.number,
            "hash": self.hash,
        })
    }
}

/// Creates restaurant, branch and table number `number` as the owner.
pub async fn provision_table(router: &Router, number: u32) -> ProvisionedTable {
    let (status, restaurant) = send(
        router,
        Method::POST,
        "/api/v1/restaurants",
        Some(OWNER_TOKEN),
        Some(json!({
            "name": "La Esquina",
            "address": "Av. Corrientes 1234",
            "phone": "1155550000"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", restaurant);
    let restaurant_id = restaurant["id"].as_str().unwrap().to_string();

    let (status, branch) = send(
        router,
        Method::POST,
        "/api/v1/branches",
        Some(OWNER_TOKEN),
        Some(json!({ "restaurantId": restaurant_id, "address": "Av. Corrientes 1234" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", branch);
    let branch_id = branch["id"].as_str().unwrap().to_string();

    let (status, table) = send(
        router,
        Method::POST,
        "/api/v1/tables",
        Some(OWNER_TOKEN),
        Some(json!({
            "restaurantId": restaurant_id,
            "branchId": branch_id,
            "number": number,
            "capacity": 4
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", table);

    let params = query_params(table["qrCode"].as_str().unwrap());
    assert_eq!(params["r"], restaurant_id);
    assert_eq!(params["b"], branch_id);

    ProvisionedTable {
        restaurant_id,
        branch_id,
        table_id: params["t"].clone(),
        number: params["n"].parse().unwrap(),
        hash: params["h"].clone(),
    }
}

pub fn query_params(url: &str) -> HashMap<String, String> {
    let (_, query) = url.split_once('?').unwrap();
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
