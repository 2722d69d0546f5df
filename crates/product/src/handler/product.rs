use crate::{
    abstract_trait::product::service::{DynProductCommandService, DynProductQueryService},
    domain::{
        requests::product::{CreateProductRequest, FindAllProducts, UpdateProductRequest},
        response::{
            api::{ApiResponse, ApiResponsePagination},
            product::ProductResponse,
        },
    },
    middleware::SimpleValidatedJson,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde_json::json;
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use tracing::warn;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/produtos",
    tag = "Produtos",
    params(FindAllProducts),
    responses(
        (status = 200, description = "Filtered page of products", body = ApiResponsePagination<Vec<ProductResponse>>),
        (status = 503, description = "Storage unavailable", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_products(
    Extension(service): Extension<DynProductQueryService>,
    Query(params): Query<FindAllProducts>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/produtos/{id}",
    tag = "Produtos",
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn get_product(
    Extension(service): Extension<DynProductQueryService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(&id).await.map_err(not_found_as(&id))?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/produtos",
    tag = "Produtos",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_product(
    Extension(service): Extension<DynProductCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_product(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/produtos/{id}",
    tag = "Produtos",
    params(("id" = String, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Validation error or id mismatch", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn update_product(
    Extension(service): Extension<DynProductCommandService>,
    Path(id): Path<String>,
    SimpleValidatedJson(mut body): SimpleValidatedJson<UpdateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    if let Some(body_id) = body.id.as_deref().filter(|b| *b != id.as_str()) {
        warn!("⚠️ Path id {id} does not match body id {body_id}");
        return Err(HttpError::BadRequest(format!(
            "Product id in body ({body_id}) does not match path id ({id})"
        )));
    }
    body.id = Some(id.clone());

    let response = service
        .update_product(&id, &body)
        .await
        .map_err(not_found_as(&id))?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/produtos/{id}",
    tag = "Produtos",
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted permanently"),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn delete_product(
    Extension(service): Extension<DynProductCommandService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_product(&id).await.map_err(not_found_as(&id))?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "status": response.status,
            "message": response.message
        })),
    ))
}

fn not_found_as(id: &str) -> impl FnOnce(shared::errors::ServiceError) -> HttpError + '_ {
    move |err| {
        if err.is_not_found() {
            HttpError::NotFound(format!("Product {id} not found"))
        } else {
            HttpError::from(err)
        }
    }
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/produtos", get(get_products))
        .route("/api/produtos/{id}", get(get_product))
        .route("/api/produtos", post(create_product))
        .route("/api/produtos/{id}", put(update_product))
        .route("/api/produtos/{id}", delete(delete_product))
        .layer(Extension(app_state.di_container.product_query.clone()))
        .layer(Extension(app_state.di_container.product_command.clone()))
}
