use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, patch, post, put},
};
use uuid::Uuid;

use crate::{
    dto::flows::{ContactRequest, CreateFlowRequest, DateRangeRequest, FlowView},
    error::AppResult,
    response::ApiResponse,
    services::flow_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_flow))
        .route("/{id}", get(get_flow))
        .route("/{id}/dates", patch(update_dates))
        .route("/{id}/confirmation", post(toggle_confirmation))
        .route("/{id}/contact", put(update_contact))
        .route("/{id}/submit", post(submit_order))
        .route("/{id}/payment-intent", post(retry_payment_intent))
}

#[utoipa::path(
    post,
    path = "/api/flows",
    request_body = CreateFlowRequest,
    responses(
        (status = 200, description = "Flow created", body = ApiResponse<FlowView>),
        (status = 404, description = "Product not found"),
    ),
    tag = "Flows"
)]
pub async fn create_flow(
    State(state): State<AppState>,
    Json(payload): Json<CreateFlowRequest>,
) -> AppResult<Json<ApiResponse<FlowView>>> {
    let response = flow_service::create_flow(&state, payload).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/flows/{id}",
    params(
        ("id" = Uuid, Path, description = "Flow id")
    ),
    responses(
        (status = 200, description = "Current flow state", body = ApiResponse<FlowView>),
        (status = 404, description = "Flow not found"),
    ),
    tag = "Flows"
)]
pub async fn get_flow(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<FlowView>>> {
    let response = flow_service::get_flow(&state, id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    patch,
    path = "/api/flows/{id}/dates",
    params(
        ("id" = Uuid, Path, description = "Flow id")
    ),
    request_body = DateRangeRequest,
    responses(
        (status = 200, description = "Dates updated", body = ApiResponse<FlowView>),
        (status = 404, description = "Flow not found"),
    ),
    tag = "Flows"
)]
pub async fn update_dates(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<DateRangeRequest>,
) -> AppResult<Json<ApiResponse<FlowView>>> {
    let response = flow_service::update_dates(&state, id, payload).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/flows/{id}/confirmation",
    params(
        ("id" = Uuid, Path, description = "Flow id")
    ),
    responses(
        (status = 200, description = "Confirmation toggled", body = ApiResponse<FlowView>),
        (status = 404, description = "Flow not found"),
    ),
    tag = "Flows"
)]
pub async fn toggle_confirmation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<FlowView>>> {
    let response = flow_service::toggle_confirmation(&state, id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    put,
    path = "/api/flows/{id}/contact",
    params(
        ("id" = Uuid, Path, description = "Flow id")
    ),
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Contact updated", body = ApiResponse<FlowView>),
        (status = 404, description = "Flow not found"),
    ),
    tag = "Flows"
)]
pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ContactRequest>,
) -> AppResult<Json<ApiResponse<FlowView>>> {
    let response = flow_service::update_contact(&state, id, payload).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/flows/{id}/submit",
    params(
        ("id" = Uuid, Path, description = "Flow id")
    ),
    responses(
        (status = 200, description = "Order submitted", body = ApiResponse<FlowView>),
        (status = 400, description = "Submission blocked by validation"),
        (status = 502, description = "Notification service failure"),
    ),
    tag = "Flows"
)]
pub async fn submit_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<FlowView>>> {
    let response = flow_service::submit_order(&state, id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/flows/{id}/payment-intent",
    params(
        ("id" = Uuid, Path, description = "Flow id")
    ),
    responses(
        (status = 200, description = "Payment intent created", body = ApiResponse<FlowView>),
        (status = 400, description = "Nothing to pay"),
        (status = 502, description = "Payment service failure"),
    ),
    tag = "Flows"
)]
pub async fn retry_payment_intent(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<FlowView>>> {
    let response = flow_service::retry_payment_intent(&state, id).await?;
    Ok(Json(response))
}
