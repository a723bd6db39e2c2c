// src/handlers/tasks.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::tenancy::OrgContext,
    models::{
        insights::{StatusGroup, TaskBoardColumn},
        tasks::{Task, TaskPriority, TaskStatus},
    },
    services::insight_service::TaskGrouping,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Seleção de fotos do ensaio")]
    pub title: String,

    #[schema(example = "High")]
    pub priority: TaskPriority,

    #[schema(value_type = Option<String>, format = Date, example = "2026-04-25")]
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskStatusPayload {
    #[schema(example = "Completed")]
    pub status: TaskStatus,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct GroupedParams {
    // "status" (padrão) ou "priority"
    #[schema(example = "priority")]
    pub by: Option<String>,
}

// POST /api/bookings/{id}/tasks
#[utoipa::path(
    post,
    path = "/api/bookings/{id}/tasks",
    tag = "Tasks",
    request_body = CreateTaskPayload,
    responses(
        (status = 201, description = "Tarefa criada", body = Task),
        (status = 404, description = "Reserva não encontrada")
    ),
    params(
        ("id" = Uuid, Path, description = "ID da reserva"),
        ("x-org-id" = Uuid, Header, description = "ID do Estúdio")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_task(
    State(app_state): State<AppState>,
    org: OrgContext,
    Path(booking_id): Path<Uuid>,
    Json(payload): Json<CreateTaskPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let task = app_state
        .production_service
        .create_task(
            org.0,
            booking_id,
            &payload.title,
            payload.priority,
            payload.due_date,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(task)))
}

// GET /api/bookings/{id}/tasks
#[utoipa::path(
    get,
    path = "/api/bookings/{id}/tasks",
    tag = "Tasks",
    responses(
        (status = 200, description = "Tarefas da reserva", body = Vec<Task>)
    ),
    params(
        ("id" = Uuid, Path, description = "ID da reserva"),
        ("x-org-id" = Uuid, Header, description = "ID do Estúdio")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_tasks(
    State(app_state): State<AppState>,
    org: OrgContext,
    Path(booking_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let tasks = app_state
        .production_service
        .list_tasks(org.0, booking_id)
        .await?;

    Ok((StatusCode::OK, Json(tasks)))
}

// POST /api/tasks/{id}/status
#[utoipa::path(
    post,
    path = "/api/tasks/{id}/status",
    tag = "Tasks",
    request_body = UpdateTaskStatusPayload,
    responses(
        (status = 200, description = "Status da tarefa alterado", body = Task),
        (status = 404, description = "Tarefa não encontrada")
    ),
    params(
        ("id" = Uuid, Path, description = "ID da tarefa"),
        ("x-org-id" = Uuid, Header, description = "ID do Estúdio")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_task_status(
    State(app_state): State<AppState>,
    org: OrgContext,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTaskStatusPayload>,
) -> Result<impl IntoResponse, AppError> {
    let task = app_state
        .production_service
        .update_task_status(org.0, id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(task)))
}

// GET /api/tasks/board
#[utoipa::path(
    get,
    path = "/api/tasks/board",
    tag = "Tasks",
    responses(
        (status = 200, description = "Quadro por vencimento: Overdue, Today, Tomorrow, ThisWeek, Upcoming, NoDueDate, Completed", body = Vec<TaskBoardColumn>)
    ),
    params(("x-org-id" = Uuid, Header, description = "ID do Estúdio")),
    security(("api_jwt" = []))
)]
pub async fn get_task_board(
    State(app_state): State<AppState>,
    org: OrgContext,
) -> Result<impl IntoResponse, AppError> {
    let board = app_state.insight_service.task_board(org.0).await?;

    Ok((StatusCode::OK, Json(board)))
}

// GET /api/tasks/grouped?by=status|priority
#[utoipa::path(
    get,
    path = "/api/tasks/grouped",
    tag = "Tasks",
    responses(
        (status = 200, description = "Tarefas agrupadas pelo critério pedido", body = [StatusGroup<Task>])
    ),
    params(
        ("by" = Option<String>, Query, description = "status (padrão) ou priority"),
        ("x-org-id" = Uuid, Header, description = "ID do Estúdio")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_tasks_grouped(
    State(app_state): State<AppState>,
    org: OrgContext,
    Query(params): Query<GroupedParams>,
) -> Result<impl IntoResponse, AppError> {
    let grouping = match params.by.as_deref() {
        Some("priority") => TaskGrouping::Priority,
        _ => TaskGrouping::Status,
    };

    let groups = app_state
        .insight_service
        .tasks_grouped(org.0, grouping)
        .await?;

    Ok((StatusCode::OK, Json(groups)))
}
