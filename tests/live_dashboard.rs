//! Live dashboard tests over a real TCP socket.
//!
//! Serves the wired router on an ephemeral port and connects with a
//! WebSocket client, the way the owner dashboard does.

mod common;

use std::time::Duration;

use axum::http::{Method, StatusCode};
use futures::{SinkExt, StreamExt};
use serde_json::Value;
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::tungstenite::{Error as WsError, Message};
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use common::{provision_table, send, test_app, OWNER_TOKEN, STRANGER_TOKEN};
use tepidolacuenta::domain::foundation::RestaurantId;

type Client = WebSocketStream<MaybeTlsStream<TcpStream>>;

async fn serve(router: axum::Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("ws://{}", addr)
}

async fn next_json(client: &mut Client) -> Value {
    loop {
        let message = tokio::time::timeout(Duration::from_secs(5), client.next())
            .await
            .expect("timed out waiting for a frame")
            .expect("stream ended")
            .unwrap();
        if let Message::Text(text) = message {
            return serde_json::from_str(&text).unwrap();
        }
    }
}

#[tokio::test]
async fn owner_receives_greeting_then_new_requests() {
    let app = test_app();
    let table = provision_table(&app.router, 9).await;
    let base = serve(app.router.clone()).await;

    let url = format!(
        "{}/api/v1/requests/ws/{}?token={}",
        base, table.restaurant_id, OWNER_TOKEN
    );
    let (mut client, _) = connect_async(url).await.unwrap();

    let greeting = next_json(&mut client).await;
    assert_eq!(greeting["type"], "connected");
    assert_eq!(greeting["restaurantId"], table.restaurant_id.as_str());

    let restaurant_id = RestaurantId::new(table.restaurant_id.clone()).unwrap();
    assert_eq!(app.hub.count_subscribers(&restaurant_id), 1);

    let (status, created) = send(
        &app.router,
        Method::POST,
        "/api/v1/public/request-account",
        None,
        Some(table.request_body()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let event = next_json(&mut client).await;
    assert_eq!(event["type"], "request.created");
    assert_eq!(event["request"]["id"], created["id"]);
    assert_eq!(event["request"]["tableNumber"], 9);
}

#[tokio::test]
async fn closing_the_socket_unregisters_the_dashboard() {
    let app = test_app();
    let table = provision_table(&app.router, 1).await;
    let base = serve(app.router.clone()).await;

    let url = format!(
        "{}/api/v1/requests/ws/{}?token={}",
        base, table.restaurant_id, OWNER_TOKEN
    );
    let (mut client, _) = connect_async(url).await.unwrap();
    next_json(&mut client).await;

    client.send(Message::Close(None)).await.unwrap();

    let restaurant_id = RestaurantId::new(table.restaurant_id.clone()).unwrap();
    for _ in 0..50 {
        if app.hub.count_subscribers(&restaurant_id) == 0 {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("dashboard still registered after close");
}

#[tokio::test]
async fn non_owner_handshake_is_refused() {
    let app = test_app();
    let table = provision_table(&app.router, 1).await;
    let base = serve(app.router.clone()).await;

    let url = format!(
        "{}/api/v1/requests/ws/{}?token={}",
        base, table.restaurant_id, STRANGER_TOKEN
    );
    let err = connect_async(url).await.unwrap_err();

    match err {
        WsError::Http(response) => assert_eq!(response.status().as_u16(), 403),
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(app.hub.total_connections(), 0);
}
