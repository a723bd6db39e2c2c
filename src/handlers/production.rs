// src/handlers/production.rs

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
    models::{
        crm::{AssignmentKind, CrewAssignment},
        insights::StatusGroup,
        production::{Deliverable, DeliverableStatus, Shoot},
    },
};

fn validate_non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        return Err(ValidationError::new("non_negative"));
    }
    Ok(())
}

// =============================================================================
//  ÁREA 1: SESSÕES
// =============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShootPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Ensaio pré-wedding")]
    pub title: String,

    #[schema(value_type = Option<String>, format = Date, example = "2026-04-18")]
    pub date: Option<NaiveDate>,

    #[schema(example = "Parque Ibirapuera")]
    pub location: Option<String>,
}

// POST /api/bookings/{id}/shoots
#[utoipa::path(
    post,
    path = "/api/bookings/{id}/shoots",
    tag = "Production",
    request_body = ShootPayload,
    responses(
        (status = 201, description = "Sessão criada", body = Shoot),
        (status = 404, description = "Reserva não encontrada")
    ),
    params(
        ("id" = Uuid, Path, description = "ID da reserva"),
        ("x-org-id" = Uuid, Header, description = "ID do Estúdio")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_shoot(
    State(app_state): State<AppState>,
    org: OrgContext,
    Path(booking_id): Path<Uuid>,
    Json(payload): Json<ShootPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let shoot = app_state
        .production_service
        .create_shoot(
            org.0,
            booking_id,
            &payload.title,
            payload.date,
            payload.location.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(shoot)))
}

// GET /api/bookings/{id}/shoots
#[utoipa::path(
    get,
    path = "/api/bookings/{id}/shoots",
    tag = "Production",
    responses(
        (status = 200, description = "Sessões da reserva", body = Vec<Shoot>)
    ),
    params(
        ("id" = Uuid, Path, description = "ID da reserva"),
        ("x-org-id" = Uuid, Header, description = "ID do Estúdio")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_shoots(
    State(app_state): State<AppState>,
    org: OrgContext,
    Path(booking_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let shoots = app_state
        .production_service
        .list_shoots(org.0, booking_id)
        .await?;

    Ok((StatusCode::OK, Json(shoots)))
}

// PUT /api/shoots/{id}
#[utoipa::path(
    put,
    path = "/api/shoots/{id}",
    tag = "Production",
    request_body = ShootPayload,
    responses(
        (status = 200, description = "Sessão atualizada", body = Shoot),
        (status = 404, description = "Sessão não encontrada")
    ),
    params(
        ("id" = Uuid, Path, description = "ID da sessão"),
        ("x-org-id" = Uuid, Header, description = "ID do Estúdio")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_shoot(
    State(app_state): State<AppState>,
    org: OrgContext,
    Path(id): Path<Uuid>,
    Json(payload): Json<ShootPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let shoot = app_state
        .production_service
        .update_shoot(
            org.0,
            id,
            &payload.title,
            payload.date,
            payload.location.as_deref(),
        )
        .await?;

    Ok((StatusCode::OK, Json(shoot)))
}

// DELETE /api/shoots/{id}
#[utoipa::path(
    delete,
    path = "/api/shoots/{id}",
    tag = "Production",
    responses(
        (status = 204, description = "Sessão removida"),
        (status = 404, description = "Sessão não encontrada")
    ),
    params(
        ("id" = Uuid, Path, description = "ID da sessão"),
        ("x-org-id" = Uuid, Header, description = "ID do Estúdio")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_shoot(
    State(app_state): State<AppState>,
    org: OrgContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.production_service.delete_shoot(org.0, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  ÁREA 2: ENTREGAS
// =============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeliverablePayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Álbum 30x30")]
    pub title: String,

    #[validate(custom(function = "validate_non_negative"))]
    #[schema(example = "800.00")]
    pub cost: Decimal,

    #[validate(range(min = 1, message = "min_one"))]
    #[schema(example = 1)]
    pub quantity: i32,

    #[schema(value_type = Option<String>, format = Date, example = "2026-06-30")]
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDeliverableStatusPayload {
    #[schema(example = "InProgress")]
    pub status: DeliverableStatus,
}

// POST /api/bookings/{id}/deliverables
#[utoipa::path(
    post,
    path = "/api/bookings/{id}/deliverables",
    tag = "Production",
    request_body = CreateDeliverablePayload,
    responses(
        (status = 201, description = "Entrega criada", body = Deliverable),
        (status = 404, description = "Reserva não encontrada")
    ),
    params(
        ("id" = Uuid, Path, description = "ID da reserva"),
        ("x-org-id" = Uuid, Header, description = "ID do Estúdio")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_deliverable(
    State(app_state): State<AppState>,
    org: OrgContext,
    Path(booking_id): Path<Uuid>,
    Json(payload): Json<CreateDeliverablePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let deliverable = app_state
        .production_service
        .create_deliverable(
            org.0,
            booking_id,
            &payload.title,
            payload.cost,
            payload.quantity,
            payload.due_date,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(deliverable)))
}

// GET /api/bookings/{id}/deliverables
#[utoipa::path(
    get,
    path = "/api/bookings/{id}/deliverables",
    tag = "Production",
    responses(
        (status = 200, description = "Entregas da reserva", body = Vec<Deliverable>)
    ),
    params(
        ("id" = Uuid, Path, description = "ID da reserva"),
        ("x-org-id" = Uuid, Header, description = "ID do Estúdio")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_deliverables(
    State(app_state): State<AppState>,
    org: OrgContext,
    Path(booking_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let deliverables = app_state
        .production_service
        .list_deliverables(org.0, booking_id)
        .await?;

    Ok((StatusCode::OK, Json(deliverables)))
}

// GET /api/bookings/{id}/deliverables/grouped
#[utoipa::path(
    get,
    path = "/api/bookings/{id}/deliverables/grouped",
    tag = "Production",
    responses(
        (status = 200, description = "Entregas agrupadas por status, na ordem do fluxo", body = [StatusGroup<Deliverable>])
    ),
    params(
        ("id" = Uuid, Path, description = "ID da reserva"),
        ("x-org-id" = Uuid, Header, description = "ID do Estúdio")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_deliverables_grouped(
    State(app_state): State<AppState>,
    org: OrgContext,
    Path(booking_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let groups = app_state
        .insight_service
        .deliverables_grouped(org.0, booking_id)
        .await?;

    Ok((StatusCode::OK, Json(groups)))
}

// POST /api/deliverables/{id}/status
#[utoipa::path(
    post,
    path = "/api/deliverables/{id}/status",
    tag = "Production",
    request_body = UpdateDeliverableStatusPayload,
    responses(
        (status = 200, description = "Status da entrega alterado", body = Deliverable),
        (status = 404, description = "Entrega não encontrada")
    ),
    params(
        ("id" = Uuid, Path, description = "ID da entrega"),
        ("x-org-id" = Uuid, Header, description = "ID do Estúdio")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_deliverable_status(
    State(app_state): State<AppState>,
    org: OrgContext,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateDeliverableStatusPayload>,
) -> Result<impl IntoResponse, AppError> {
    let deliverable = app_state
        .production_service
        .update_deliverable_status(org.0, id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(deliverable)))
}

// =============================================================================
//  ÁREA 3: VÍNCULOS DE EQUIPE
// =============================================================================

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignCrewPayload {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub crew_member_id: Uuid,

    #[schema(example = "Shoot")]
    pub kind: AssignmentKind,

    #[schema(example = "550e8400-e29b-41d4-a716-446655440001")]
    pub target_id: Uuid,
}

// POST /api/assignments
#[utoipa::path(
    post,
    path = "/api/assignments",
    tag = "Production",
    request_body = AssignCrewPayload,
    responses(
        (status = 201, description = "Membro alocado", body = CrewAssignment),
        (status = 404, description = "Membro ou alvo não encontrado"),
        (status = 409, description = "Membro já alocado a este item")
    ),
    params(("x-org-id" = Uuid, Header, description = "ID do Estúdio")),
    security(("api_jwt" = []))
)]
pub async fn assign_crew(
    State(app_state): State<AppState>,
    org: OrgContext,
    Json(payload): Json<AssignCrewPayload>,
) -> Result<impl IntoResponse, AppError> {
    let assignment = app_state
        .production_service
        .assign_crew(org.0, payload.crew_member_id, payload.kind, payload.target_id)
        .await?;

    Ok((StatusCode::CREATED, Json(assignment)))
}

// DELETE /api/assignments/{id}
#[utoipa::path(
    delete,
    path = "/api/assignments/{id}",
    tag = "Production",
    responses(
        (status = 204, description = "Vínculo removido"),
        (status = 404, description = "Vínculo não encontrado")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do vínculo"),
        ("x-org-id" = Uuid, Header, description = "ID do Estúdio")
    ),
    security(("api_jwt" = []))
)]
pub async fn unassign_crew(
    State(app_state): State<AppState>,
    org: OrgContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.production_service.unassign_crew(org.0, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
