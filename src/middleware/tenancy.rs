// src/middleware/tenancy.rs

use axum::{
    extract::{FromRequestParts, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::{common::error::AppError, config::AppState, models::auth::User};

// O nome do nosso cabeçalho HTTP customizado
const ORG_ID_HEADER: &str = "x-org-id";

// O contexto de tenancy da requisição: o UUID do estúdio que o usuário
// quer acessar, já verificado contra a tabela de membros.
#[derive(Debug, Clone, Copy)]
pub struct OrgContext(pub Uuid);

/// Roda depois do auth_guard: lê o cabeçalho x-org-id, confirma que o
/// usuário autenticado é membro daquele estúdio e deixa o OrgContext nos
/// extensions. Sem membership, 403; nenhum handler org-scoped executa.
pub async fn org_guard(
    State(app_state): State<AppState>,
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, AppError> {
    // O auth_guard precisa ter rodado antes
    let user = request
        .extensions()
        .get::<User>()
        .cloned()
        .ok_or(AppError::InvalidToken)?;

    let org_id = request
        .headers()
        .get(ORG_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Uuid::parse_str(value).ok())
        .ok_or(AppError::InvalidOrgHeader)?;

    let is_member = app_state.tenancy_service.is_member(user.id, org_id).await?;
    if !is_member {
        return Err(AppError::NoOrgAccess);
    }

    request.extensions_mut().insert(OrgContext(org_id));
    Ok(next.run(request).await)
}

impl<S> FromRequestParts<S> for OrgContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<OrgContext>()
            .copied()
            .ok_or(AppError::InvalidOrgHeader)
    }
}
