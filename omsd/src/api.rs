//! HTTP API for the OMS daemon.
//!
//! Provides REST endpoints for:
//! - Health check
//! - Create order
//! - List orders
//! - Get order by ID
//! - Update order status
//!
//! Request DTOs are deliberately lenient (`Option` fields) and bodies are
//! decoded through [`ApiJson`], so missing or mistyped input is answered
//! with a 400 and a JSON message instead of a framework-default 422.

use axum::{
    async_trait,
    extract::{FromRequest, Path, Request, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use oms_connectors::ProductCatalog;
use oms_domain::{Order, OrderStatus};
use oms_store::OrderStore;
use oms_workflow::{NewLineItem, OrderWorkflow, WorkflowError};

// =============================================================================
// API State
// =============================================================================

/// Shared state for API handlers.
pub struct ApiState<C: ProductCatalog + 'static, S: OrderStore + 'static> {
    pub workflow: Arc<OrderWorkflow<C, S>>,
}

// =============================================================================
// Request/Response Types
// =============================================================================

/// Request to create an order.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer_id: Option<String>,
    pub items: Option<Vec<CreateOrderItem>>,
}

/// One requested line in an order creation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderItem {
    pub product_id: Option<String>,
    pub quantity: Option<i64>,
}

/// Request to update an order's status.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

/// Error response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_statuses: Option<Vec<String>>,
}

// =============================================================================
// Extractors
// =============================================================================

/// JSON body extractor that answers malformed bodies with this API's 400
/// envelope.
///
/// The stock `Json` extractor rejects a wrong-typed field (for example a
/// string where an integer belongs) with a plain-text 422; wire mistakes
/// surface here like any other validation failure instead.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    message: rejection.body_text(),
                    valid_statuses: None,
                }),
            )),
        }
    }
}

// =============================================================================
// Router
// =============================================================================

/// Create the API router.
pub fn create_router<C, S>(state: Arc<ApiState<C, S>>) -> Router
where
    C: ProductCatalog + 'static,
    S: OrderStore + 'static,
{
    Router::new()
        .route("/health-check", get(health_check_handler))
        .route("/api/v1/orders", post(create_order_handler))
        .route("/api/v1/orders", get(list_orders_handler))
        .route("/api/v1/orders/:id", get(get_order_handler))
        .route("/api/v1/orders/:id", patch(update_status_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint.
async fn health_check_handler() -> &'static str {
    "Health check passed"
}

/// Create a new order.
async fn create_order_handler<C, S>(
    State(state): State<Arc<ApiState<C, S>>>,
    ApiJson(req): ApiJson<CreateOrderRequest>,
) -> Result<(StatusCode, Json<Order>), (StatusCode, Json<ErrorResponse>)>
where
    C: ProductCatalog + 'static,
    S: OrderStore + 'static,
{
    // Missing fields become values the workflow rejects as validation errors
    let items: Vec<NewLineItem> = req
        .items
        .unwrap_or_default()
        .into_iter()
        .map(|item| NewLineItem {
            product_id: item.product_id.unwrap_or_default(),
            quantity: item.quantity.unwrap_or(0),
        })
        .collect();

    let order = state
        .workflow
        .create_order(req.customer_id, items)
        .await
        .map_err(to_error_response)?;

    Ok((StatusCode::CREATED, Json(order)))
}

/// List all orders.
async fn list_orders_handler<C, S>(
    State(state): State<Arc<ApiState<C, S>>>,
) -> Result<Json<Vec<Order>>, (StatusCode, Json<ErrorResponse>)>
where
    C: ProductCatalog + 'static,
    S: OrderStore + 'static,
{
    let orders = state
        .workflow
        .list_orders()
        .await
        .map_err(to_error_response)?;

    Ok(Json(orders))
}

/// Get a single order.
async fn get_order_handler<C, S>(
    State(state): State<Arc<ApiState<C, S>>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Order>, (StatusCode, Json<ErrorResponse>)>
where
    C: ProductCatalog + 'static,
    S: OrderStore + 'static,
{
    let order = state
        .workflow
        .get_order(id)
        .await
        .map_err(to_error_response)?
        .ok_or_else(|| order_not_found(id))?;

    Ok(Json(order))
}

/// Update the status of an order.
async fn update_status_handler<C, S>(
    State(state): State<Arc<ApiState<C, S>>>,
    Path(id): Path<Uuid>,
    ApiJson(req): ApiJson<UpdateStatusRequest>,
) -> Result<Json<Order>, (StatusCode, Json<ErrorResponse>)>
where
    C: ProductCatalog + 'static,
    S: OrderStore + 'static,
{
    // Parse the requested status before touching the store
    let status = match req.status.as_deref() {
        None => return Err(invalid_status_response("Status is required".to_string())),
        Some(raw) => raw
            .parse::<OrderStatus>()
            .map_err(|_| invalid_status_response(format!("Invalid status: {}", raw)))?,
    };

    let order = state
        .workflow
        .update_status(id, status)
        .await
        .map_err(to_error_response)?
        .ok_or_else(|| order_not_found(id))?;

    Ok(Json(order))
}

// =============================================================================
// Helpers
// =============================================================================

fn to_error_response(error: WorkflowError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &error {
        WorkflowError::Validation(_) => StatusCode::BAD_REQUEST,
        WorkflowError::ProductNotFound { .. } => StatusCode::NOT_FOUND,
        WorkflowError::Lookup(_) | WorkflowError::Store(_) => {
            tracing::error!(error = %error, "Order operation failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    // Upstream details stay in the logs
    let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
        "Internal server error".to_string()
    } else {
        error.to_string()
    };

    (
        status,
        Json(ErrorResponse {
            message,
            valid_statuses: None,
        }),
    )
}

fn order_not_found(id: Uuid) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            message: format!("Order not found: {}", id),
            valid_statuses: None,
        }),
    )
}

fn invalid_status_response(message: String) -> (StatusCode, Json<ErrorResponse>) {
    let valid = OrderStatus::ALL.iter().map(|s| s.name().to_string()).collect();

    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            message,
            valid_statuses: Some(valid),
        }),
    )
}

// =============================================================================
// Tests
// =============================================================================
