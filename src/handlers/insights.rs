// src/handlers/insights.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::tenancy::OrgContext,
    models::insights::OrgOverview,
};

// GET /api/insights/overview
#[utoipa::path(
    get,
    path = "/api/insights/overview",
    tag = "Insights",
    responses(
        (status = 200, description = "Visão geral do estúdio: reservas por status, recebido e gasto no mês, parcelas em aberto", body = OrgOverview),
        (status = 401, description = "Não autorizado"),
        (status = 403, description = "Sem acesso ao estúdio")
    ),
    params(("x-org-id" = Uuid, Header, description = "ID do Estúdio")),
    security(("api_jwt" = []))
)]
pub async fn get_overview(
    State(app_state): State<AppState>,
    org: OrgContext,
) -> Result<impl IntoResponse, AppError> {
    let overview = app_state
        .insight_service
        .get_overview(&app_state.db_pool, org.0)
        .await?;

    Ok((StatusCode::OK, Json(overview)))
}
