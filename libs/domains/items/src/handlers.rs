use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{
        ConflictResponse, GatewayTimeoutResponse, InternalServerErrorResponse, NotFoundResponse,
        ValidationErrorResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ItemResult;
use crate::models::{CreateItem, CreatedItem, Item};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, create_item, get_item, increment_item),
    components(
        schemas(Item, CreatedItem, CreateItem),
        responses(
            NotFoundResponse,
            ValidationErrorResponse,
            ConflictResponse,
            GatewayTimeoutResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Items", description = "Named counters stored in MongoDB")
    )
)]
pub struct ApiDoc;

/// Create the items router; mount it under `/items`
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/{name}", get(get_item).patch(increment_item))
        .with_state(shared_service)
}

/// List items (at most 100, store order)
#[utoipa::path(
    get,
    path = "",
    tag = "Items",
    responses(
        (status = 200, description = "List of items", body = Vec<Item>),
        (status = 504, response = GatewayTimeoutResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> ItemResult<Json<Vec<Item>>> {
    let items = service.list_items().await?;
    Ok(Json(items))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "",
    tag = "Items",
    request_body = CreateItem,
    responses(
        (status = 200, description = "Item created", body = CreatedItem),
        (status = 409, response = ConflictResponse),
        (status = 422, response = ValidationErrorResponse),
        (status = 504, response = GatewayTimeoutResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateItem>,
) -> ItemResult<Json<CreatedItem>> {
    let item = service.create_item(input).await?;
    Ok(Json(item.into()))
}

/// Get an item by name
#[utoipa::path(
    get,
    path = "/{name}",
    tag = "Items",
    params(
        ("name" = String, Path, description = "Item name")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 404, response = NotFoundResponse),
        (status = 504, response = GatewayTimeoutResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Path(name): Path<String>,
) -> ItemResult<Json<Item>> {
    let item = service.get_item(&name).await?;
    Ok(Json(item))
}

/// Increment an item's count by one
#[utoipa::path(
    patch,
    path = "/{name}",
    tag = "Items",
    params(
        ("name" = String, Path, description = "Item name")
    ),
    responses(
        (status = 200, description = "Item after increment", body = Item),
        (status = 404, response = NotFoundResponse),
        (status = 504, response = GatewayTimeoutResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn increment_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Path(name): Path<String>,
) -> ItemResult<Json<Item>> {
    let item = service.increment_item(&name).await?;
    Ok(Json(item))
}
