//! # Product Routes
//!
//! Create and list handlers.
//!
//! ## Create Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    POST /products                                       │
//! │                                                                         │
//! │  form: id, name, description, price (missing → "")                     │
//! │        urlencoded or multipart/form-data                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProductRepository::store([item])                                      │
//! │       │                                                                 │
//! │       ├── Ok  ──► 200 {"status":"created", name, description, price}   │
//! │       └── Err ──► 500 {"status":"Error running create action ..."}     │
//! │                                                                         │
//! │  Legacy status mode swaps the two outcomes.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::error::ApiError;
use crate::state::AppState;
use catalog_core::ProductItem;

/// Form body accepted by `POST /products`.
///
/// Extracted from either `application/x-www-form-urlencoded` or
/// `multipart/form-data`. In a multipart body the first value of a field
/// wins and file parts are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateProductForm {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
}

impl<S> FromRequest<S> for CreateProductForm
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("multipart/form-data"));

        if !is_multipart {
            let Form(form) = Form::<CreateProductForm>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            return Ok(form);
        }

        let multipart = Multipart::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        Self::from_multipart(multipart)
            .await
            .map_err(IntoResponse::into_response)
    }
}

impl CreateProductForm {
    async fn from_multipart(
        mut multipart: Multipart,
    ) -> Result<Self, axum::extract::multipart::MultipartError> {
        let (mut id, mut name, mut description, mut price) = (None, None, None, None);

        while let Some(field) = multipart.next_field().await? {
            if field.file_name().is_some() {
                continue;
            }

            let slot = match field.name() {
                Some("id") => &mut id,
                Some("name") => &mut name,
                Some("description") => &mut description,
                Some("price") => &mut price,
                _ => continue,
            };

            let value = field.text().await?;
            slot.get_or_insert(value);
        }

        Ok(CreateProductForm {
            id: id.unwrap_or_default(),
            name: name.unwrap_or_default(),
            description: description.unwrap_or_default(),
            price: price.unwrap_or_default(),
        })
    }
}

impl From<CreateProductForm> for ProductItem {
    fn from(form: CreateProductForm) -> Self {
        ProductItem {
            id: form.id,
            name: form.name,
            description: form.description,
            price: form.price,
        }
    }
}

/// `POST /products` - insert or replace a single product.
///
/// The response echoes name, description and price but not the id.
pub async fn create_product(
    State(state): State<AppState>,
    form: CreateProductForm,
) -> Result<Json<Value>, ApiError> {
    let product = ProductItem::from(form);
    info!(id = %product.id, "Creating product");

    let result = state
        .db
        .products()
        .store(std::slice::from_ref(&product))
        .await;

    match (result, state.config.legacy_inverted_create_status) {
        (Ok(_), false) => Ok(created(&product)),
        (Err(e), false) => Err(ApiError::CreateFailed(e)),

        // Legacy status mode: a failed store is reported as created and a
        // successful one as an error.
        (Err(e), true) => {
            warn!(error = %e, "Store failed; legacy status mode reports created");
            Ok(created(&product))
        }
        (Ok(_), true) => Err(ApiError::CreateReportedAsFailed),
    }
}

fn created(product: &ProductItem) -> Json<Value> {
    Json(json!({
        "status": "created",
        "name": product.name,
        "description": product.description,
        "price": product.price,
    }))
}

/// `GET /products` - every product, most recently written first.
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let products = state
        .db
        .products()
        .read_all()
        .await
        .map_err(ApiError::ListFailed)?;

    info!(count = products.len(), "Listed products");

    Ok(Json(json!({
        "message": "Sucesfully fetched products",
        "products": products,
    })))
}

// =============================================================================
// Unit Tests
// =============================================================================
