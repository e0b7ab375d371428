//! HTTP round trips through the router, with the real actors behind it.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use web_pos::config::ActorConfig;
use web_pos::lifecycle::PosSystem;

const BOUNDARY: &str = "web-pos-test-boundary";

fn app() -> Router {
    app_with_limit(1024 * 1024)
}

fn app_with_limit(max_upload_bytes: usize) -> Router {
    let system = PosSystem::new(&ActorConfig { buffer_size: 16 });
    web_pos::api::router(system.clients(), max_upload_bytes)
}

/// Builds a `multipart/form-data` body; parts named in `files` are sent as PNG uploads.
fn multipart(fields: &[(&str, &str)], files: &[(&str, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    for (name, bytes) in files {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"pic.png\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn form_request(method: Method, uri: &str, body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn create_customer(app: &Router) -> String {
    let body = multipart(
        &[
            ("name", "Kasun Silva"),
            ("address", "22, Temple Road, Matara"),
            ("mobile", "0751234567"),
        ],
        &[("profilePic", b"\x89PNG".as_slice())],
    );
    let (status, body) = send(app, form_request(Method::POST, "/api/v1/customers", body)).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["id"].as_str().unwrap().to_string()
}

async fn create_item(app: &Router, description: &str, price: f64, qty: i64) -> String {
    let (status, body) = send(
        app,
        json_request(
            Method::POST,
            "/api/v1/items",
            json!({ "description": description, "price": price, "qty": qty }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["code"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_health() {
    let app = app();
    let (status, _) = send(&app, get("/api/v1/health")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_customer_lifecycle() {
    let app = app();
    let id = create_customer(&app).await;

    let (status, body) = send(&app, get(&format!("/api/v1/customers/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Kasun Silva");
    assert_eq!(body["profilePic"], "iVBORw==");
    assert_eq!(body["orders"], json!([]));

    let update = multipart(
        &[
            ("updateName", "Kasun Perera"),
            ("updateAddress", "3, Beach Road"),
            ("updateMobile", "0767654321"),
        ],
        &[("updateProfilePic", b"GIF89a".as_slice())],
    );
    let (status, _) = send(
        &app,
        form_request(Method::PATCH, &format!("/api/v1/customers/{id}"), update),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&app, get("/api/v1/customers/allcustomers")).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["mobile"], "0767654321");

    let delete = Request::builder()
        .method(Method::DELETE)
        .uri(format!("/api/v1/customers/{id}"))
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, delete).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, get(&format!("/api/v1/customers/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn test_customer_form_validation_messages() {
    let app = app();

    let body = multipart(
        &[("name", "Kasun Silva"), ("address", "Colombo"), ("mobile", "12345")],
        &[("profilePic", b"\x89PNG".as_slice())],
    );
    let (status, body) = send(&app, form_request(Method::POST, "/api/v1/customers", body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "status": "error", "message": "Mobile must be exactly 10 digits" })
    );

    let body = multipart(
        &[("name", "Kasun Silva"), ("address", "Colombo"), ("mobile", "0751234567")],
        &[],
    );
    let (status, body) = send(&app, form_request(Method::POST, "/api/v1/customers", body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Profile picture is required");
}

#[tokio::test]
async fn test_customer_write_without_multipart_gets_json_error() {
    let app = app();
    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/v1/customers",
            json!({ "name": "Kasun Silva", "address": "Colombo", "mobile": "0751234567" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().contains("boundary"));

    let (status, body) = send(
        &app,
        json_request(Method::PATCH, "/api/v1/customers/CUSTOMER-1", json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn test_oversized_picture_is_payload_too_large() {
    let app = app_with_limit(1024);
    let picture = vec![0x42u8; 4096];
    let body = multipart(
        &[
            ("name", "Kasun Silva"),
            ("address", "Colombo"),
            ("mobile", "0751234567"),
        ],
        &[("profilePic", picture.as_slice())],
    );
    let (status, body) = send(&app, form_request(Method::POST, "/api/v1/customers", body)).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(
        body,
        json!({ "status": "error", "message": "Request body is too large" })
    );
}

#[tokio::test]
async fn test_item_endpoints() {
    let app = app();
    let code = create_item(&app, "Coconut oil 1l", 720.0, 12).await;

    let (status, body) = send(&app, get(&format!("/api/v1/items/{code}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["qty"], 12);

    let (status, _) = send(
        &app,
        json_request(
            Method::PATCH,
            &format!("/api/v1/items/{code}"),
            json!({ "description": "Coconut oil 1l", "price": 750.0, "qty": 20 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/v1/items",
            json!({ "description": "Broken", "price": 10.0, "qty": -1 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Quantity cannot be negative");

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/v1/items",
            json!({ "description": "Free", "price": 0.0, "qty": 1 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Price must be a positive number");

    let (_, body) = send(&app, get("/api/v1/items/allitems")).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["price"], 750.0);
}

#[tokio::test]
async fn test_place_order_endpoint() {
    let app = app();
    let customer_id = create_customer(&app).await;
    let code = create_item(&app, "Biscuits", 200.0, 5).await;

    let (status, order) = send(
        &app,
        json_request(
            Method::POST,
            "/api/v1/orders",
            json!({
                "customerId": customer_id,
                "orderDetails": [{ "itemCode": code, "quantity": 2 }],
                "discount": 50,
                "cash": 500
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{order}");
    assert_eq!(order["subtotal"], 400.0);
    assert_eq!(order["discountAmount"], 200.0);
    assert_eq!(order["total"], 200.0);
    assert_eq!(order["balance"], 300.0);
    assert_eq!(order["orderDetails"][0]["totalPrice"], 200.0);

    let order_id = order["orderId"].as_str().unwrap();
    let (status, stored) = send(&app, get(&format!("/api/v1/orders/{order_id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stored, order);

    let (_, item) = send(&app, get(&format!("/api/v1/items/{code}"))).await;
    assert_eq!(item["qty"], 3);

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/v1/orders",
            json!({
                "customerId": customer_id,
                "orderDetails": [{ "itemCode": code, "quantity": 1 }],
                "cash": 100
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");

    let delete = Request::builder()
        .method(Method::DELETE)
        .uri(format!("/api/v1/customers/{customer_id}"))
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, delete).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(
        &app,
        json_request(
            Method::POST,
            "/api/v1/orders",
            json!({
                "customerId": "CUSTOMER-unknown",
                "orderDetails": [{ "itemCode": code, "quantity": 1 }],
                "cash": 1000
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_json_is_a_bad_request() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/orders")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"customerId\":"))
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
}
