use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use carzone::create_router;
use carzone::handlers::AppState;
use carzone::repository::MemoryStore;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tokio::net::TcpListener;

async fn create_test_server() -> SocketAddr {
    let store = MemoryStore::new();
    let app = create_router(AppState::new(Arc::new(store.clone()), Arc::new(store)));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let mut retries = 0;
    while retries < 10 {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
        retries += 1;
    }

    addr
}

fn engine_body() -> Value {
    json!({ "displacement": 1998, "no_of_cylinders": 4, "car_range": 600 })
}

fn car_body(engine_id: &str) -> Value {
    json!({
        "name": "Model X",
        "year": 2023,
        "brand": "Acme",
        "fuel_type": "petrol",
        "price": 45000,
        "engine_id": engine_id
    })
}

async fn create_engine(client: &Client, addr: SocketAddr) -> Value {
    let response = client
        .post(format!("http://{}/engine", addr))
        .json(&engine_body())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    response.json().await.unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let addr = create_test_server().await;

    let response = reqwest::get(format!("http://{}/health", addr)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_car_lifecycle_end_to_end() {
    let addr = create_test_server().await;
    let client = Client::new();

    let engine = create_engine(&client, addr).await;
    let engine_id = engine["engine_id"].as_str().unwrap().to_string();
    assert_eq!(engine["displacement"], 1998);
    assert_eq!(engine["no_of_cylinders"], 4);
    assert_eq!(engine["car_range"], 600);

    let response = client
        .post(format!("http://{}/cars", addr))
        .json(&car_body(&engine_id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Value = response.json().await.unwrap();
    let car_id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["name"], "Model X");
    assert_eq!(created["engine_id"], engine_id.as_str());
    assert_eq!(created["engine"]["displacement"], 1998);

    let response = client
        .get(format!("http://{}/cars/{}", addr, car_id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Value = response.json().await.unwrap();
    assert_eq!(fetched, created);

    let response = client
        .delete(format!("http://{}/cars/{}", addr, car_id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let deleted: Value = response.json().await.unwrap();
    assert_eq!(deleted, created);

    let response = client
        .delete(format!("http://{}/cars/{}", addr, car_id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn test_create_car_with_unknown_engine_is_rejected() {
    let addr = create_test_server().await;
    let client = Client::new();

    let response = client
        .post(format!("http://{}/cars", addr))
        .json(&car_body("6f1c0a55-3a0e-4c7e-9a53-0d2a4f7b8e11"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let cars: Vec<Value> = client
        .get(format!("http://{}/cars?brand=Acme", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(cars.is_empty());
}

#[tokio::test]
async fn test_list_by_brand_with_and_without_engine() {
    let addr = create_test_server().await;
    let client = Client::new();

    let engine = create_engine(&client, addr).await;
    let engine_id = engine["engine_id"].as_str().unwrap();
    client
        .post(format!("http://{}/cars", addr))
        .json(&car_body(engine_id))
        .send()
        .await
        .unwrap();

    let plain: Vec<Value> = client
        .get(format!("http://{}/cars?brand=Acme", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(plain.len(), 1);
    assert!(plain[0].get("engine").is_none());

    let joined: Vec<Value> = client
        .get(format!("http://{}/cars?brand=Acme&isEngine=true", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(joined.len(), 1);
    assert_eq!(joined[0]["engine"], engine);
}

#[tokio::test]
async fn test_engine_validation_and_not_found() {
    let addr = create_test_server().await;
    let client = Client::new();

    let response = client
        .post(format!("http://{}/engine", addr))
        .json(&json!({ "displacement": 1998, "no_of_cylinders": 0, "car_range": 600 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "no_of_cylinders must be greater than zero");

    let response = client
        .get(format!("http://{}/engine/6f1c0a55-3a0e-4c7e-9a53-0d2a4f7b8e11", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = client
        .delete(format!("http://{}/engine/6f1c0a55-3a0e-4c7e-9a53-0d2a4f7b8e11", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_engine_update_and_restricted_delete() {
    let addr = create_test_server().await;
    let client = Client::new();

    let engine = create_engine(&client, addr).await;
    let engine_id = engine["engine_id"].as_str().unwrap();

    let response = client
        .put(format!("http://{}/engine/{}", addr, engine_id))
        .json(&json!({ "displacement": 2500, "noOfCylinders": 6, "carRange": 550 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["no_of_cylinders"], 6);

    let created: Value = client
        .post(format!("http://{}/cars", addr))
        .json(&car_body(engine_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let response = client
        .delete(format!("http://{}/engine/{}", addr, engine_id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    client
        .delete(format!("http://{}/cars/{}", addr, created["id"].as_str().unwrap()))
        .send()
        .await
        .unwrap();

    let response = client
        .delete(format!("http://{}/engine/{}", addr, engine_id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let deleted: Value = response.json().await.unwrap();
    assert_eq!(deleted, updated);
}

#[tokio::test]
async fn test_malformed_id_is_a_client_error() {
    let addr = create_test_server().await;

    let response = reqwest::get(format!("http://{}/cars/not-a-uuid", addr))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers()["content-type"],
        "application/json"
    );
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], 400);
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_body_is_reported_as_json() {
    let addr = create_test_server().await;
    let client = Client::new();

    let response = client
        .post(format!("http://{}/engine", addr))
        .json(&json!({ "displacement": 1998, "no_of_cylinders": 4 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], 422);
    assert!(body["error"].as_str().unwrap().contains("car_range"));

    let response = client
        .put(format!("http://{}/cars/not-a-uuid", addr))
        .json(&car_body("6f1c0a55-3a0e-4c7e-9a53-0d2a4f7b8e11"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_engine_accepts_legacy_cylinder_key() {
    let addr = create_test_server().await;
    let client = Client::new();

    let response = client
        .post(format!("http://{}/engine", addr))
        .json(&json!({ "displacement": 1998, "noOfCyclinders": 4, "carRange": 600 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let engine: Value = response.json().await.unwrap();
    assert_eq!(engine["no_of_cylinders"], 4);
    assert_eq!(engine["car_range"], 600);
}
