use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post, put},
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{
        BadRequestResponse, InternalServerErrorResponse, NotFoundResponse,
        UnprocessableEntityResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ItemResult;
use crate::models::Item;
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(
        create_item,
        list_items,
        get_item_by_name,
        update_item,
        delete_item,
    ),
    components(
        schemas(Item),
        responses(
            BadRequestResponse,
            NotFoundResponse,
            UnprocessableEntityResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Item", description = "Item CRUD endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Create the items router with all HTTP endpoints.
///
/// Mount it under `/Item`.
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/Create", post(create_item))
        .route("/GetAll", get(list_items))
        .route("/GetByName/{name}", get(get_item_by_name))
        .route("/Update/{id}", put(update_item))
        .route("/Delete/{id}", delete(delete_item))
        .with_state(shared_service)
}

/// Create a new item
#[utoipa::path(
    post,
    path = "/Create",
    tag = "Item",
    request_body = Item,
    responses(
        (status = 200, description = "Item created", body = Item),
        (status = 400, response = BadRequestResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ValidatedJson(input): ValidatedJson<Item>,
) -> ItemResult<Json<Item>> {
    let item = service.create_item(input).await?;
    Ok(Json(item))
}

/// List all items
#[utoipa::path(
    get,
    path = "/GetAll",
    tag = "Item",
    responses(
        (status = 200, description = "Every stored item", body = Vec<Item>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> ItemResult<Json<Vec<Item>>> {
    let items = service.list_items().await?;
    Ok(Json(items))
}

/// Get an item by exact name
#[utoipa::path(
    get,
    path = "/GetByName/{name}",
    tag = "Item",
    params(
        ("name" = String, Path, description = "Item name")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_item_by_name<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Path(name): Path<String>,
) -> ItemResult<Json<Item>> {
    let item = service.get_item_by_name(&name).await?;
    Ok(Json(item))
}

/// Replace the fields of an item
#[utoipa::path(
    put,
    path = "/Update/{id}",
    tag = "Item",
    params(
        ("id" = String, Path, description = "Item ID (24 hex chars)")
    ),
    request_body = Item,
    responses(
        (status = 200, description = "Item after the update", body = Item),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<Item>,
) -> ItemResult<Json<Item>> {
    let item = service.update_item(&id, input).await?;
    Ok(Json(item))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/Delete/{id}",
    tag = "Item",
    params(
        ("id" = String, Path, description = "Item ID (24 hex chars)")
    ),
    responses(
        (status = 200, description = "The item as it was before deletion", body = Item),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Path(id): Path<String>,
) -> ItemResult<Json<Item>> {
    let item = service.delete_item(&id).await?;
    Ok(Json(item))
}
