// src/handlers/bookings.rs

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::tenancy::OrgContext,
    models::bookings::{Booking, BookingDetail, BookingStatus},
};

// validator não conhece Decimal; a checagem de sinal é nossa
fn validate_non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        return Err(ValidationError::new("non_negative"));
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingPayload {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub client_id: Uuid,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Casamento Maria & Pedro")]
    pub title: String,

    #[validate(custom(function = "validate_non_negative"))]
    #[schema(example = "12000.00")]
    pub package_cost: Decimal,

    pub note: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingPayload {
    #[validate(length(min = 1, message = "required"))]
    pub title: String,

    #[validate(custom(function = "validate_non_negative"))]
    pub package_cost: Decimal,

    pub note: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransitionStatusPayload {
    #[schema(example = "Preparation")]
    pub status: BookingStatus,
}

// POST /api/bookings
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = "Bookings",
    request_body = CreateBookingPayload,
    responses(
        (status = 201, description = "Reserva criada", body = Booking),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Cliente não encontrado")
    ),
    params(("x-org-id" = Uuid, Header, description = "ID do Estúdio")),
    security(("api_jwt" = []))
)]
pub async fn create_booking(
    State(app_state): State<AppState>,
    org: OrgContext,
    Json(payload): Json<CreateBookingPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let booking = app_state
        .booking_service
        .create_booking(
            org.0,
            payload.client_id,
            &payload.title,
            payload.package_cost,
            payload.note.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(booking)))
}

// GET /api/bookings
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = "Bookings",
    responses(
        (status = 200, description = "Reservas do estúdio", body = Vec<Booking>)
    ),
    params(("x-org-id" = Uuid, Header, description = "ID do Estúdio")),
    security(("api_jwt" = []))
)]
pub async fn list_bookings(
    State(app_state): State<AppState>,
    org: OrgContext,
) -> Result<impl IntoResponse, AppError> {
    let bookings = app_state.booking_service.list_bookings(org.0).await?;

    Ok((StatusCode::OK, Json(bookings)))
}

// GET /api/bookings/{id}
#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    tag = "Bookings",
    responses(
        (status = 200, description = "Detalhe completo da reserva, com resumo financeiro e marcos", body = BookingDetail),
        (status = 404, description = "Reserva não encontrada")
    ),
    params(
        ("id" = Uuid, Path, description = "ID da reserva"),
        ("x-org-id" = Uuid, Header, description = "ID do Estúdio")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_booking_detail(
    State(app_state): State<AppState>,
    org: OrgContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    // O relógio entra aqui; dali para dentro a agregação é pura
    let detail = app_state
        .booking_service
        .get_booking_detail(org.0, id, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(detail)))
}

// PUT /api/bookings/{id}
#[utoipa::path(
    put,
    path = "/api/bookings/{id}",
    tag = "Bookings",
    request_body = UpdateBookingPayload,
    responses(
        (status = 200, description = "Reserva atualizada", body = Booking),
        (status = 404, description = "Reserva não encontrada")
    ),
    params(
        ("id" = Uuid, Path, description = "ID da reserva"),
        ("x-org-id" = Uuid, Header, description = "ID do Estúdio")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_booking(
    State(app_state): State<AppState>,
    org: OrgContext,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateBookingPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let booking = app_state
        .booking_service
        .update_booking(
            org.0,
            id,
            &payload.title,
            payload.package_cost,
            payload.note.as_deref(),
        )
        .await?;

    Ok((StatusCode::OK, Json(booking)))
}

// POST /api/bookings/{id}/status
#[utoipa::path(
    post,
    path = "/api/bookings/{id}/status",
    tag = "Bookings",
    request_body = TransitionStatusPayload,
    responses(
        (status = 200, description = "Status alterado", body = Booking),
        (status = 404, description = "Reserva não encontrada"),
        (status = 422, description = "Transição fora do fluxo permitido")
    ),
    params(
        ("id" = Uuid, Path, description = "ID da reserva"),
        ("x-org-id" = Uuid, Header, description = "ID do Estúdio")
    ),
    security(("api_jwt" = []))
)]
pub async fn transition_booking_status(
    State(app_state): State<AppState>,
    org: OrgContext,
    Path(id): Path<Uuid>,
    Json(payload): Json<TransitionStatusPayload>,
) -> Result<impl IntoResponse, AppError> {
    let booking = app_state
        .booking_service
        .transition_status(org.0, id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(booking)))
}

// DELETE /api/bookings/{id}
#[utoipa::path(
    delete,
    path = "/api/bookings/{id}",
    tag = "Bookings",
    responses(
        (status = 204, description = "Reserva removida"),
        (status = 404, description = "Reserva não encontrada")
    ),
    params(
        ("id" = Uuid, Path, description = "ID da reserva"),
        ("x-org-id" = Uuid, Header, description = "ID do Estúdio")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_booking(
    State(app_state): State<AppState>,
    org: OrgContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.booking_service.delete_booking(org.0, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// GET /api/bookings/{id}/invoice
#[utoipa::path(
    get,
    path = "/api/bookings/{id}/invoice",
    tag = "Bookings",
    responses(
        (status = 200, description = "Fatura em PDF", body = Vec<u8>, content_type = "application/pdf"),
        (status = 404, description = "Reserva não encontrada")
    ),
    params(
        ("id" = Uuid, Path, description = "ID da reserva"),
        ("x-org-id" = Uuid, Header, description = "ID do Estúdio")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_booking_invoice(
    State(app_state): State<AppState>,
    org: OrgContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let pdf_bytes = app_state
        .document_service
        .generate_invoice_pdf(org.0, id)
        .await?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/pdf")],
        pdf_bytes,
    ))
}
