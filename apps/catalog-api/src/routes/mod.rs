//! # HTTP Routes
//!
//! | Method | Path        | Handler                      |
//! |--------|-------------|------------------------------|
//! | GET    | `/`         | [`health::status`]           |
//! | POST   | `/products` | [`products::create_product`] |
//! | GET    | `/products` | [`products::list_products`]  |

pub mod health;
pub mod products;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Builds the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::status))
        .route(
            "/products",
            get(products::list_products).post(products::create_product),
        )
        .with_state(state)
}
