//! Handler tests for the items domain
//!
//! These drive the router end to end with `oneshot`, backed by an in-memory
//! repository that enforces the same uniqueness and atomic increment contract
//! as MongoDB.

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use domain_items::{
    CreateItem, Item, ItemError, ItemRepository, ItemResult, ItemService, handlers,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Mutex;
use std::time::Duration;
use test_utils::assertions::assert_object_id;
use tower::ServiceExt;

#[derive(Default)]
struct InMemoryItemRepository {
    items: Mutex<Vec<Item>>,
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn ensure_indexes(&self) -> ItemResult<()> {
        Ok(())
    }

    async fn create(&self, input: CreateItem) -> ItemResult<Item> {
        let mut items = self.items.lock().unwrap();
        if items.iter().any(|i| i.name == input.name) {
            return Err(ItemError::DuplicateName(input.name));
        }
        let item = Item {
            id: format!("{:024x}", items.len() + 1),
            name: input.name,
            count: input.count,
        };
        items.push(item.clone());
        Ok(item)
    }

    async fn list(&self, limit: i64) -> ItemResult<Vec<Item>> {
        let items = self.items.lock().unwrap();
        Ok(items.iter().take(limit as usize).cloned().collect())
    }

    async fn get_by_name(&self, name: &str) -> ItemResult<Option<Item>> {
        let items = self.items.lock().unwrap();
        Ok(items.iter().find(|i| i.name == name).cloned())
    }

    async fn increment_by_name(&self, name: &str) -> ItemResult<Option<Item>> {
        let mut items = self.items.lock().unwrap();
        Ok(items.iter_mut().find(|i| i.name == name).map(|item| {
            item.count += 1;
            item.clone()
        }))
    }
}

/// Repository whose calls never finish within a short deadline
struct StalledItemRepository;

#[async_trait]
impl ItemRepository for StalledItemRepository {
    async fn ensure_indexes(&self) -> ItemResult<()> {
        Ok(())
    }

    async fn create(&self, _input: CreateItem) -> ItemResult<Item> {
        std::future::pending().await
    }

    async fn list(&self, _limit: i64) -> ItemResult<Vec<Item>> {
        std::future::pending().await
    }

    async fn get_by_name(&self, _name: &str) -> ItemResult<Option<Item>> {
        std::future::pending().await
    }

    async fn increment_by_name(&self, _name: &str) -> ItemResult<Option<Item>> {
        std::future::pending().await
    }
}

fn app_with<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    Router::new().nest("/items", handlers::router(service))
}

fn app() -> Router {
    app_with(ItemService::new(InMemoryItemRepository::default()))
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn patch(uri: &str) -> Request<Body> {
    Request::builder()
        .method("PATCH")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_create_returns_id_name_count() {
    let response = app()
        .oneshot(post_json("/items", json!({"name": "ahmed", "count": 2000})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_object_id(body["id"].as_str().unwrap(), "created id");
    assert_eq!(body["name"], "ahmed");
    assert_eq!(body["count"], 2000);
    assert!(body.get("_id").is_none());
}

#[tokio::test]
async fn test_create_get_increment_scenario() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post_json("/items", json!({"name": "ahmed", "count": 2000})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created = json_body(response).await;

    let response = app
        .clone()
        .oneshot(post_json("/items", json!({"name": "ahmed", "count": 1})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = json_body(response).await;
    assert_eq!(body["error"], "CONFLICT");
    assert_eq!(body["message"], "Item with name 'ahmed' already exists");

    let response = app.clone().oneshot(get("/items/ahmed")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["_id"], created["id"]);
    assert_eq!(body["count"], 2000);

    let response = app.clone().oneshot(patch("/items/ahmed")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["name"], "ahmed");
    assert_eq!(body["count"], 2001);

    let response = app.clone().oneshot(patch("/items/missing")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["error"], "NOT_FOUND");

    let response = app.oneshot(get("/items")).await.unwrap();
    let body = json_body(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_missing_item_is_404() {
    let response = app().oneshot(get("/items/nobody")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["code"], 1004);
    assert_eq!(body["message"], "Item 'nobody' not found");
}

#[tokio::test]
async fn test_create_empty_name_is_422() {
    let response = app()
        .oneshot(post_json("/items", json!({"name": "", "count": 1})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["name"].is_array());
}

#[tokio::test]
async fn test_create_negative_count_is_422_and_not_stored() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post_json("/items", json!({"name": "neg", "count": -5})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert!(body["details"]["count"].is_array());

    let response = app.oneshot(get("/items/neg")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_missing_count_is_422() {
    let response = app()
        .oneshot(post_json("/items", json!({"name": "ahmed"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_list_is_capped_and_keeps_insertion_order() {
    let app = app_with(ItemService::new(InMemoryItemRepository::default()).with_list_limit(3));

    for (i, name) in ["a", "b", "c", "d", "e"].iter().enumerate() {
        let response = app
            .clone()
            .oneshot(post_json("/items", json!({"name": name, "count": i})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.oneshot(get("/items")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn test_list_empty() {
    let response = app().oneshot(get("/items")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!([]));
}

#[tokio::test]
async fn test_stalled_store_is_504() {
    let app = app_with(
        ItemService::new(StalledItemRepository).with_store_timeout(Duration::from_millis(20)),
    );

    let response = app.oneshot(get("/items/ahmed")).await.unwrap();

    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    let body = json_body(response).await;
    assert_eq!(body["error"], "GATEWAY_TIMEOUT");
}
