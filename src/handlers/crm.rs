// src/handlers/crm.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::tenancy::OrgContext,
    models::crm::{Client, CrewMember},
};

// =============================================================================
//  ÁREA 1: CLIENTES
// =============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Maria da Silva")]
    pub full_name: String,

    #[validate(email(message = "invalid_email"))]
    #[schema(example = "maria@email.com")]
    pub email: Option<String>,

    pub phone: Option<String>,
    pub address: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchParams {
    #[schema(example = "maria")]
    pub q: String,
}

// POST /api/clients
#[utoipa::path(
    post,
    path = "/api/clients",
    tag = "CRM",
    request_body = ClientPayload,
    responses(
        (status = 201, description = "Cliente criado", body = Client),
        (status = 400, description = "Dados inválidos")
    ),
    params(("x-org-id" = Uuid, Header, description = "ID do Estúdio")),
    security(("api_jwt" = []))
)]
pub async fn create_client(
    State(app_state): State<AppState>,
    org: OrgContext,
    Json(payload): Json<ClientPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let client = app_state
        .crm_service
        .create_client(
            org.0,
            &payload.full_name,
            payload.email.as_deref(),
            payload.phone.as_deref(),
            payload.address.as_deref(),
            payload.note.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(client)))
}

// GET /api/clients
#[utoipa::path(
    get,
    path = "/api/clients",
    tag = "CRM",
    responses(
        (status = 200, description = "Lista de clientes", body = Vec<Client>)
    ),
    params(("x-org-id" = Uuid, Header, description = "ID do Estúdio")),
    security(("api_jwt" = []))
)]
pub async fn list_clients(
    State(app_state): State<AppState>,
    org: OrgContext,
) -> Result<impl IntoResponse, AppError> {
    let clients = app_state.crm_service.list_clients(org.0).await?;

    Ok((StatusCode::OK, Json(clients)))
}

// GET /api/clients/search?q=
#[utoipa::path(
    get,
    path = "/api/clients/search",
    tag = "CRM",
    responses(
        (status = 200, description = "Clientes que batem com a busca", body = Vec<Client>)
    ),
    params(
        ("q" = String, Query, description = "Nome, e-mail ou telefone"),
        ("x-org-id" = Uuid, Header, description = "ID do Estúdio")
    ),
    security(("api_jwt" = []))
)]
pub async fn search_clients(
    State(app_state): State<AppState>,
    org: OrgContext,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let clients = app_state.crm_service.search_clients(org.0, &params.q).await?;

    Ok((StatusCode::OK, Json(clients)))
}

// PUT /api/clients/{id}
#[utoipa::path(
    put,
    path = "/api/clients/{id}",
    tag = "CRM",
    request_body = ClientPayload,
    responses(
        (status = 200, description = "Cliente atualizado", body = Client),
        (status = 404, description = "Cliente não encontrado")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do cliente"),
        ("x-org-id" = Uuid, Header, description = "ID do Estúdio")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_client(
    State(app_state): State<AppState>,
    org: OrgContext,
    Path(id): Path<Uuid>,
    Json(payload): Json<ClientPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let client = app_state
        .crm_service
        .update_client(
            org.0,
            id,
            &payload.full_name,
            payload.email.as_deref(),
            payload.phone.as_deref(),
            payload.address.as_deref(),
            payload.note.as_deref(),
        )
        .await?;

    Ok((StatusCode::OK, Json(client)))
}

// DELETE /api/clients/{id}
#[utoipa::path(
    delete,
    path = "/api/clients/{id}",
    tag = "CRM",
    responses(
        (status = 204, description = "Cliente removido"),
        (status = 404, description = "Cliente não encontrado")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do cliente"),
        ("x-org-id" = Uuid, Header, description = "ID do Estúdio")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_client(
    State(app_state): State<AppState>,
    org: OrgContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.crm_service.delete_client(org.0, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  ÁREA 2: EQUIPE
// =============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCrewMemberPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "João Pereira")]
    pub full_name: String,

    #[schema(example = "Fotógrafo")]
    pub role_title: Option<String>,
    pub phone: Option<String>,
}

// POST /api/crew
#[utoipa::path(
    post,
    path = "/api/crew",
    tag = "CRM",
    request_body = CreateCrewMemberPayload,
    responses(
        (status = 201, description = "Membro da equipe criado", body = CrewMember)
    ),
    params(("x-org-id" = Uuid, Header, description = "ID do Estúdio")),
    security(("api_jwt" = []))
)]
pub async fn create_crew_member(
    State(app_state): State<AppState>,
    org: OrgContext,
    Json(payload): Json<CreateCrewMemberPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let member = app_state
        .crm_service
        .create_crew_member(
            org.0,
            &payload.full_name,
            payload.role_title.as_deref(),
            payload.phone.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(member)))
}

// GET /api/crew
#[utoipa::path(
    get,
    path = "/api/crew",
    tag = "CRM",
    responses(
        (status = 200, description = "Equipe do estúdio", body = Vec<CrewMember>)
    ),
    params(("x-org-id" = Uuid, Header, description = "ID do Estúdio")),
    security(("api_jwt" = []))
)]
pub async fn list_crew_members(
    State(app_state): State<AppState>,
    org: OrgContext,
) -> Result<impl IntoResponse, AppError> {
    let members = app_state.crm_service.list_crew_members(org.0).await?;

    Ok((StatusCode::OK, Json(members)))
}
