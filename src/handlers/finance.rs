// src/handlers/finance.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::tenancy::OrgContext,
    models::finance::{BillTo, Expense, PaymentSchedule, ReceivedAmount},
};

// validator não conhece Decimal; a checagem de sinal é nossa
fn validate_non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        return Err(ValidationError::new("non_negative"));
    }
    Ok(())
}

// =============================================================================
//  ÁREA 1: VALORES RECEBIDOS
// =============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddReceivedPayload {
    #[validate(custom(function = "validate_non_negative"))]
    #[schema(example = "1500.00")]
    pub amount: Decimal,

    #[schema(value_type = Option<String>, format = Date, example = "2026-03-10")]
    pub paid_on: Option<NaiveDate>,

    #[schema(example = "Sinal (30%)")]
    pub description: Option<String>,
}

// POST /api/bookings/{id}/payments
#[utoipa::path(
    post,
    path = "/api/bookings/{id}/payments",
    tag = "Finance",
    request_body = AddReceivedPayload,
    responses(
        (status = 201, description = "Pagamento registrado", body = ReceivedAmount),
        (status = 404, description = "Reserva não encontrada")
    ),
    params(
        ("id" = Uuid, Path, description = "ID da reserva"),
        ("x-org-id" = Uuid, Header, description = "ID do Estúdio")
    ),
    security(("api_jwt" = []))
)]
pub async fn add_received(
    State(app_state): State<AppState>,
    org: OrgContext,
    Path(booking_id): Path<Uuid>,
    Json(payload): Json<AddReceivedPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let received = app_state
        .finance_service
        .add_received(
            org.0,
            booking_id,
            payload.amount,
            payload.paid_on,
            payload.description.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(received)))
}

// GET /api/bookings/{id}/payments
#[utoipa::path(
    get,
    path = "/api/bookings/{id}/payments",
    tag = "Finance",
    responses(
        (status = 200, description = "Pagamentos recebidos da reserva", body = Vec<ReceivedAmount>)
    ),
    params(
        ("id" = Uuid, Path, description = "ID da reserva"),
        ("x-org-id" = Uuid, Header, description = "ID do Estúdio")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_received(
    State(app_state): State<AppState>,
    org: OrgContext,
    Path(booking_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let rows = app_state.finance_service.list_received(org.0, booking_id).await?;

    Ok((StatusCode::OK, Json(rows)))
}

// DELETE /api/payments/{id}
#[utoipa::path(
    delete,
    path = "/api/payments/{id}",
    tag = "Finance",
    responses(
        (status = 204, description = "Pagamento removido"),
        (status = 404, description = "Pagamento não encontrado")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do pagamento"),
        ("x-org-id" = Uuid, Header, description = "ID do Estúdio")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_received(
    State(app_state): State<AppState>,
    org: OrgContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.finance_service.delete_received(org.0, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  ÁREA 2: PARCELAS AGENDADAS
// =============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddSchedulePayload {
    #[validate(custom(function = "validate_non_negative"))]
    #[schema(example = "3500.00")]
    pub amount: Decimal,

    #[schema(value_type = Option<String>, format = Date, example = "2026-05-01")]
    pub due_date: Option<NaiveDate>,

    #[schema(example = "Parcela final na entrega")]
    pub description: Option<String>,
}

// POST /api/bookings/{id}/schedules
#[utoipa::path(
    post,
    path = "/api/bookings/{id}/schedules",
    tag = "Finance",
    request_body = AddSchedulePayload,
    responses(
        (status = 201, description = "Parcela agendada", body = PaymentSchedule),
        (status = 404, description = "Reserva não encontrada")
    ),
    params(
        ("id" = Uuid, Path, description = "ID da reserva"),
        ("x-org-id" = Uuid, Header, description = "ID do Estúdio")
    ),
    security(("api_jwt" = []))
)]
pub async fn add_schedule(
    State(app_state): State<AppState>,
    org: OrgContext,
    Path(booking_id): Path<Uuid>,
    Json(payload): Json<AddSchedulePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let schedule = app_state
        .finance_service
        .add_schedule(
            org.0,
            booking_id,
            payload.amount,
            payload.due_date,
            payload.description.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(schedule)))
}

// GET /api/bookings/{id}/schedules
#[utoipa::path(
    get,
    path = "/api/bookings/{id}/schedules",
    tag = "Finance",
    responses(
        (status = 200, description = "Parcelas combinadas da reserva", body = Vec<PaymentSchedule>)
    ),
    params(
        ("id" = Uuid, Path, description = "ID da reserva"),
        ("x-org-id" = Uuid, Header, description = "ID do Estúdio")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_schedules(
    State(app_state): State<AppState>,
    org: OrgContext,
    Path(booking_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let rows = app_state
        .finance_service
        .list_schedules(org.0, booking_id)
        .await?;

    Ok((StatusCode::OK, Json(rows)))
}

// DELETE /api/schedules/{id}
#[utoipa::path(
    delete,
    path = "/api/schedules/{id}",
    tag = "Finance",
    responses(
        (status = 204, description = "Parcela removida"),
        (status = 404, description = "Parcela não encontrada")
    ),
    params(
        ("id" = Uuid, Path, description = "ID da parcela"),
        ("x-org-id" = Uuid, Header, description = "ID do Estúdio")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_schedule(
    State(app_state): State<AppState>,
    org: OrgContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.finance_service.delete_schedule(org.0, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  ÁREA 3: DESPESAS
// =============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddExpensePayload {
    #[validate(custom(function = "validate_non_negative"))]
    #[schema(example = "450.00")]
    pub amount: Decimal,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Transporte")]
    pub category: String,

    #[schema(value_type = String, format = Date, example = "2026-03-12")]
    pub spent_on: NaiveDate,

    #[schema(example = "Studio")]
    pub bill_to: BillTo,

    pub note: Option<String>,
}

// POST /api/bookings/{id}/expenses
#[utoipa::path(
    post,
    path = "/api/bookings/{id}/expenses",
    tag = "Finance",
    request_body = AddExpensePayload,
    responses(
        (status = 201, description = "Despesa registrada", body = Expense),
        (status = 404, description = "Reserva não encontrada")
    ),
    params(
        ("id" = Uuid, Path, description = "ID da reserva"),
        ("x-org-id" = Uuid, Header, description = "ID do Estúdio")
    ),
    security(("api_jwt" = []))
)]
pub async fn add_expense(
    State(app_state): State<AppState>,
    org: OrgContext,
    Path(booking_id): Path<Uuid>,
    Json(payload): Json<AddExpensePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let expense = app_state
        .finance_service
        .add_expense(
            org.0,
            booking_id,
            payload.amount,
            &payload.category,
            payload.spent_on,
            payload.bill_to,
            payload.note.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(expense)))
}

// GET /api/bookings/{id}/expenses
#[utoipa::path(
    get,
    path = "/api/bookings/{id}/expenses",
    tag = "Finance",
    responses(
        (status = 200, description = "Despesas da reserva", body = Vec<Expense>)
    ),
    params(
        ("id" = Uuid, Path, description = "ID da reserva"),
        ("x-org-id" = Uuid, Header, description = "ID do Estúdio")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_expenses(
    State(app_state): State<AppState>,
    org: OrgContext,
    Path(booking_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let rows = app_state
        .finance_service
        .list_expenses(org.0, booking_id)
        .await?;

    Ok((StatusCode::OK, Json(rows)))
}

// DELETE /api/expenses/{id}
#[utoipa::path(
    delete,
    path = "/api/expenses/{id}",
    tag = "Finance",
    responses(
        (status = 204, description = "Despesa removida"),
        (status = 404, description = "Despesa não encontrada")
    ),
    params(
        ("id" = Uuid, Path, description = "ID da despesa"),
        ("x-org-id" = Uuid, Header, description = "ID do Estúdio")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_expense(
    State(app_state): State<AppState>,
    org: OrgContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.finance_service.delete_expense(org.0, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
