//! HTTP integration tests for the back-office API.
//!
//! Drives the fully wired router (in-memory repositories, mock session
//! validator) through `tower::ServiceExt::oneshot`. Verifies:
//! - Owner provisioning of restaurants, branches and tables
//! - Owner edits and deletes; renumbering re-issues the QR code
//! - One-shot setup and bulk table creation
//! - The public diner endpoint accepts only valid QR proofs
//! - Request listing, status updates and deletion are owner-scoped
//! - The dashboard endpoint authorizes before upgrading

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{provision_table, query_params, send, test_app, OWNER_TOKEN, STRANGER_TOKEN};

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_reports_service_name() {
    let app = test_app();

    let (status, body) = send(&app.router, Method::GET, "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "tepidolacuenta");
}

// =============================================================================
// Provisioning
// =============================================================================

#[tokio::test]
async fn owner_routes_require_a_token() {
    let app = test_app();

    let (status, body) = send(&app.router, Method::GET, "/api/v1/restaurants", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn invalid_token_is_rejected() {
    let app = test_app();

    let (status, body) = send(
        &app.router,
        Method::GET,
        "/api/v1/restaurants",
        Some("forged"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "AUTH_ERROR");
}

#[tokio::test]
async fn provisioned_table_lists_under_its_restaurant() {
    let app = test_app();
    let table = provision_table(&app.router, 9).await;
    assert_eq!(table.number, 9);

    let uri = format!("/api/v1/tables/restaurant/{}", table.restaurant_id);
    let (status, body) = send(&app.router, Method::GET, &uri, Some(OWNER_TOKEN), None).await;

    assert_eq!(status, StatusCode::OK);
    let tables = body.as_array().unwrap();
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0]["number"], 9);
    assert!(tables[0]["qrCode"]
        .as_str()
        .unwrap()
        .starts_with("https://tepidolacuenta.test/request?"));
}

#[tokio::test]
async fn duplicate_table_number_conflicts() {
    let app = test_app();
    let table = provision_table(&app.router, 3).await;

    let (status, _) = send(
        &app.router,
        Method::POST,
        "/api/v1/tables",
        Some(OWNER_TOKEN),
        Some(json!({
            "restaurantId": table.restaurant_id,
            "branchId": table.branch_id,
            "number": 3,
            "capacity": 2
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn stranger_cannot_read_someone_elses_restaurant() {
    let app = test_app();
    let table = provision_table(&app.router, 1).await;

    let uri = format!("/api/v1/restaurants/{}", table.restaurant_id);
    let (status, _) = send(&app.router, Method::GET, &uri, Some(STRANGER_TOKEN), None).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

// =============================================================================
// Management
// =============================================================================

#[tokio::test]
async fn owner_updates_restaurant_and_branch() {
    let app = test_app();
    let table = provision_table(&app.router, 1).await;

    let uri = format!("/api/v1/restaurants/{}", table.restaurant_id);
    let (status, body) = send(
        &app.router,
        Method::PUT,
        &uri,
        Some(OWNER_TOKEN),
        Some(json!({ "name": "La Esquina de Boedo" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["name"], "La Esquina de Boedo");
    assert_eq!(body["phone"], "1155550000");

    let uri = format!("/api/v1/branches/{}", table.branch_id);
    let (status, body) = send(
        &app.router,
        Method::PUT,
        &uri,
        Some(OWNER_TOKEN),
        Some(json!({ "isActive": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["isActive"], false);

    let (_, body) = send(&app.router, Method::GET, &uri, Some(OWNER_TOKEN), None).await;
    assert_eq!(body["isActive"], false);
}

#[tokio::test]
async fn stranger_cannot_edit_or_delete() {
    let app = test_app();
    let table = provision_table(&app.router, 1).await;

    let restaurant = format!("/api/v1/restaurants/{}", table.restaurant_id);
    let branch = format!("/api/v1/branches/{}", table.branch_id);
    let table_uri = format!("/api/v1/tables/{}", table.table_id);
    for (method, uri, body) in [
        (Method::PUT, &restaurant, Some(json!({ "name": "Mine now" }))),
        (Method::DELETE, &restaurant, None),
        (Method::GET, &branch, None),
        (Method::DELETE, &branch, None),
        (Method::GET, &table_uri, None),
        (Method::PUT, &table_uri, Some(json!({ "number": 2 }))),
        (Method::DELETE, &table_uri, None),
    ] {
        let (status, _) = send(&app.router, method.clone(), uri, Some(STRANGER_TOKEN), body).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{} {}", method, uri);
    }

    let (status, _) = send(&app.router, Method::GET, &table_uri, Some(OWNER_TOKEN), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn renumbered_table_invalidates_its_old_qr_code() {
    let app = test_app();
    let table = provision_table(&app.router, 9).await;

    let uri = format!("/api/v1/tables/{}", table.table_id);
    let (status, body) = send(
        &app.router,
        Method::PUT,
        &uri,
        Some(OWNER_TOKEN),
        Some(json!({ "number": 12 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["number"], 12);
    let params = query_params(body["qrCode"].as_str().unwrap());
    assert_eq!(params["n"], "12");
    assert_ne!(params["h"], table.hash);

    let (status, _) = send(
        &app.router,
        Method::POST,
        "/api/v1/public/request-account",
        None,
        Some(table.request_body()),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let mut reprinted = table.request_body();
    reprinted["tableNumber"] = json!(12);
    reprinted["hash"] = json!(params["h"]);
    let (status, body) = send(
        &app.router,
        Method::POST,
        "/api/v1/public/request-account",
        None,
        Some(reprinted),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    assert_eq!(body["tableNumber"], 12);
}

#[tokio::test]
async fn renumbering_onto_a_taken_number_conflicts() {
    let app = test_app();
    let table = provision_table(&app.router, 1).await;
    let (status, _) = send(
        &app.router,
        Method::POST,
        "/api/v1/tables",
        Some(OWNER_TOKEN),
        Some(json!({
            "restaurantId": table.restaurant_id,
            "branchId": table.branch_id,
            "number": 2,
            "capacity": 4
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let uri = format!("/api/v1/tables/{}", table.table_id);
    let (status, body) = send(
        &app.router,
        Method::PUT,
        &uri,
        Some(OWNER_TOKEN),
        Some(json!({ "number": 2 })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CONFLICT");
}

#[tokio::test]
async fn deleted_restaurant_stops_taking_requests() {
    let app = test_app();
    let table = provision_table(&app.router, 9).await;

    let uri = format!("/api/v1/restaurants/{}", table.restaurant_id);
    let (status, _) = send(&app.router, Method::DELETE, &uri, Some(OWNER_TOKEN), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app.router, Method::GET, &uri, Some(OWNER_TOKEN), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app.router,
        Method::POST,
        "/api/v1/public/request-account",
        None,
        Some(table.request_body()),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleted_table_is_gone() {
    let app = test_app();
    let table = provision_table(&app.router, 9).await;

    let uri = format!("/api/v1/tables/{}", table.table_id);
    let (status, _) = send(&app.router, Method::DELETE, &uri, Some(OWNER_TOKEN), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app.router, Method::GET, &uri, Some(OWNER_TOKEN), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn bulk_create_continues_numbering() {
    let app = test_app();
    let table = provision_table(&app.router, 4).await;

    let (status, body) = send(
        &app.router,
        Method::POST,
        "/api/v1/tables/bulk",
        Some(OWNER_TOKEN),
        Some(json!({
            "restaurantId": table.restaurant_id,
            "branchId": table.branch_id,
            "count": 3
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "{}", body);
    let numbers: Vec<u64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["number"].as_u64().unwrap())
        .collect();
    assert_eq!(numbers, vec![5, 6, 7]);
    assert_eq!(body[0]["capacity"], 4);
}

#[tokio::test]
async fn setup_creates_restaurant_branch_and_tables() {
    let app = test_app();

    let (status, body) = send(
        &app.router,
        Method::POST,
        "/api/v1/restaurants/setup",
        Some(OWNER_TOKEN),
        Some(json!({
            "name": "La Esquina",
            "address": "Av. Corrientes 1234",
            "phone": "1155550000",
            "tableCount": 2
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "{}", body);
    assert_eq!(body["branch"]["address"], "Av. Corrientes 1234");
    let tables = body["tables"].as_array().unwrap();
    assert_eq!(tables.len(), 2);

    let params = query_params(tables[1]["qrCode"].as_str().unwrap());
    let (status, request) = send(
        &app.router,
        Method::POST,
        "/api/v1/public/request-account",
        None,
        Some(json!({
            "restaurantId": params["r"],
            "branchId": params["b"],
            "tableId": params["t"],
            "tableNumber": 2,
            "hash": params["h"],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", request);
}

#[tokio::test]
async fn setup_with_too_many_tables_creates_nothing() {
    let app = test_app();

    let (status, body) = send(
        &app.router,
        Method::POST,
        "/api/v1/restaurants/setup",
        Some(OWNER_TOKEN),
        Some(json!({
            "name": "La Esquina",
            "address": "Av. Corrientes 1234",
            "phone": "1155550000",
            "tableCount": 101
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{}", body);

    let (_, list) = send(&app.router, Method::GET, "/api/v1/restaurants", Some(OWNER_TOKEN), None).await;
    assert_eq!(list.as_array().unwrap().len(), 0);
}

// =============================================================================
// Diner requests
// =============================================================================

#[tokio::test]
async fn valid_qr_creates_a_pending_request() {
    let app = test_app();
    let table = provision_table(&app.router, 9).await;

    let (status, body) = send(
        &app.router,
        Method::POST,
        "/api/v1/public/request-account",
        None,
        Some(table.request_body()),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "{}", body);
    assert_eq!(body["tableNumber"], 9);
    assert_eq!(body["status"], "pending");
    assert_eq!(body["restaurantId"], table.restaurant_id.as_str());
}

#[tokio::test]
async fn tampered_qr_is_rejected() {
    let app = test_app();
    let table = provision_table(&app.router, 9).await;

    let mut forged = table.request_body();
    forged["tableNumber"] = json!(10);
    let (status, body) = send(
        &app.router,
        Method::POST,
        "/api/v1/public/request-account",
        None,
        Some(forged),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_QR_CODE");

    let uri = format!("/api/v1/requests/restaurant/{}", table.restaurant_id);
    let (_, list) = send(&app.router, Method::GET, &uri, Some(OWNER_TOKEN), None).await;
    assert_eq!(list["total"], 0);
}

#[tokio::test]
async fn owner_walks_a_request_through_its_lifecycle() {
    let app = test_app();
    let table = provision_table(&app.router, 4).await;

    let (_, created) = send(
        &app.router,
        Method::POST,
        "/api/v1/public/request-account",
        None,
        Some(table.request_body()),
    )
    .await;
    let request_id = created["id"].as_str().unwrap().to_string();

    let pending_uri = format!("/api/v1/requests/restaurant/{}/pending", table.restaurant_id);
    let (status, pending) =
        send(&app.router, Method::GET, &pending_uri, Some(OWNER_TOKEN), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(pending["total"], 1);

    let status_uri = format!("/api/v1/requests/{}/status", request_id);
    let (status, updated) = send(
        &app.router,
        Method::PUT,
        &status_uri,
        Some(OWNER_TOKEN),
        Some(json!({ "status": "attended" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", updated);
    assert_eq!(updated["status"], "attended");

    let (_, pending) = send(&app.router, Method::GET, &pending_uri, Some(OWNER_TOKEN), None).await;
    assert_eq!(pending["total"], 0);

    let all_uri = format!("/api/v1/requests/restaurant/{}", table.restaurant_id);
    let (_, all) = send(&app.router, Method::GET, &all_uri, Some(OWNER_TOKEN), None).await;
    assert_eq!(all["total"], 1);

    let request_uri = format!("/api/v1/requests/{}", request_id);
    let (status, _) = send(&app.router, Method::DELETE, &request_uri, Some(OWNER_TOKEN), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app.router, Method::GET, &request_uri, Some(OWNER_TOKEN), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_status_is_a_bad_request() {
    let app = test_app();
    let table = provision_table(&app.router, 2).await;
    let (_, created) = send(
        &app.router,
        Method::POST,
        "/api/v1/public/request-account",
        None,
        Some(table.request_body()),
    )
    .await;

    let uri = format!("/api/v1/requests/{}/status", created["id"].as_str().unwrap());
    let (status, _) = send(
        &app.router,
        Method::PUT,
        &uri,
        Some(OWNER_TOKEN),
        Some(json!({ "status": "closed" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn stranger_cannot_list_requests() {
    let app = test_app();
    let table = provision_table(&app.router, 5).await;

    let uri = format!("/api/v1/requests/restaurant/{}", table.restaurant_id);
    let (status, _) = send(&app.router, Method::GET, &uri, Some(STRANGER_TOKEN), None).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

// =============================================================================
// Dashboard endpoint authorization
// =============================================================================

#[tokio::test]
async fn dashboard_requires_a_token() {
    let app = test_app();
    let table = provision_table(&app.router, 1).await;

    let uri = format!("/api/v1/requests/ws/{}", table.restaurant_id);
    let (status, _) = send(&app.router, Method::GET, &uri, None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn dashboard_rejects_non_owner() {
    let app = test_app();
    let table = provision_table(&app.router, 1).await;

    let uri = format!("/api/v1/requests/ws/{}", table.restaurant_id);
    let (status, _) = send(&app.router, Method::GET, &uri, Some(STRANGER_TOKEN), None).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn dashboard_for_unknown_restaurant_is_not_found() {
    let app = test_app();

    let (status, _) = send(
        &app.router,
        Method::GET,
        "/api/v1/requests/ws/no-such-restaurant",
        Some(OWNER_TOKEN),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn dashboard_without_upgrade_headers_asks_for_upgrade() {
    let app = test_app();
    let table = provision_table(&app.router, 1).await;

    let uri = format!(
        "/api/v1/requests/ws/{}?token={}",
        table.restaurant_id, OWNER_TOKEN
    );
    let (status, _) = send(&app.router, Method::GET, &uri, None, None).await;

    assert_eq!(status, StatusCode::UPGRADE_REQUIRED);
}
