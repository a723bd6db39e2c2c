// src/handlers/tenancy.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::tenancy::{Organization, UserOrganization},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrganizationPayload {
    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres"))]
    #[schema(example = "Atelier Luz & Prata")]
    pub name: String,

    pub description: Option<String>,

    // Usados na fatura em PDF
    #[schema(example = "pix@estudio.com")]
    pub pix_key: Option<String>,
    pub address: Option<String>,
}

// POST /api/orgs
#[utoipa::path(
    post,
    path = "/api/orgs",
    tag = "Tenancy",
    request_body = CreateOrganizationPayload,
    responses(
        (status = 201, description = "Estúdio criado (criador vira OWNER)", body = Organization),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_organization(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateOrganizationPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let org = app_state
        .tenancy_service
        .create_organization(
            user.0.id,
            &payload.name,
            payload.description.as_deref(),
            payload.pix_key.as_deref(),
            payload.address.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(org)))
}

// GET /api/orgs
#[utoipa::path(
    get,
    path = "/api/orgs",
    tag = "Tenancy",
    responses(
        (status = 200, description = "Estúdios do usuário autenticado", body = Vec<UserOrganization>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_my_organizations(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let orgs = app_state
        .tenancy_service
        .list_my_organizations(user.0.id)
        .await?;

    Ok((StatusCode::OK, Json(orgs)))
}
