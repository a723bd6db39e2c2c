// src/services/insight_service.rs

use chrono::Utc;
use sqlx::{Acquire, Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{BookingRepository, InsightRepository, ProductionRepository},
    models::{
        insights::{OrgOverview, StatusGroup, TaskBoardColumn},
        production::Deliverable,
        tasks::Task,
    },
    services::aggregation,
};

// Ordens de exibição dos agrupamentos. Status fora destas listas saem em
// ordem alfabética, depois dos listados.
const DELIVERABLE_ORDER: [&str; 6] = [
    "Pending",
    "InProgress",
    "InRevision",
    "Delivered",
    "Completed",
    "Cancelled",
];
const TASK_STATUS_ORDER: [&str; 4] = ["Todo", "InProgress", "Completed", "Cancelled"];
const TASK_PRIORITY_ORDER: [&str; 4] = ["Urgent", "High", "Medium", "Low"];

// Critérios aceitos em GET /api/tasks/grouped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskGrouping {
    Status,
    Priority,
}

#[derive(Clone)]
pub struct InsightService {
    repo: InsightRepository,
    production_repo: ProductionRepository,
    booking_repo: BookingRepository,
}

impl InsightService {
    pub fn new(
        repo: InsightRepository,
        production_repo: ProductionRepository,
        booking_repo: BookingRepository,
    ) -> Self {
        Self { repo, production_repo, booking_repo }
    }

    pub async fn get_overview<'e, E>(
        &self,
        executor: E,
        org_id: Uuid,
    ) -> Result<OrgOverview, AppError>
    where
        E: Executor<'e, Database = Postgres> + Acquire<'e, Database = Postgres>,
    {
        self.repo.get_overview(executor, org_id).await
    }

    /// Quadro de tarefas do estúdio inteiro, por vencimento. O relógio é
    /// lido aqui, na borda; a classificação em si é pura.
    pub async fn task_board(&self, org_id: Uuid) -> Result<Vec<TaskBoardColumn>, AppError> {
        let tasks = self.production_repo.list_org_tasks(org_id).await?;
        let today = Utc::now().date_naive();
        Ok(aggregation::bucket_tasks_by_due_date(tasks, today))
    }

    pub async fn tasks_grouped(
        &self,
        org_id: Uuid,
        grouping: TaskGrouping,
    ) -> Result<Vec<StatusGroup<Task>>, AppError> {
        let tasks = self.production_repo.list_org_tasks(org_id).await?;

        let groups = match grouping {
            TaskGrouping::Status => aggregation::group_by_status(
                tasks,
                &TASK_STATUS_ORDER,
                |t: &Task| t.status.as_str().to_string(),
            ),
            TaskGrouping::Priority => aggregation::group_by_status(
                tasks,
                &TASK_PRIORITY_ORDER,
                |t: &Task| t.priority.as_str().to_string(),
            ),
        };

        Ok(groups)
    }

    pub async fn deliverables_grouped(
        &self,
        org_id: Uuid,
        booking_id: Uuid,
    ) -> Result<Vec<StatusGroup<Deliverable>>, AppError> {
        self.booking_repo
            .find_booking(org_id, booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva não encontrada.".to_string()))?;

        let deliverables = self
            .production_repo
            .list_deliverables(org_id, booking_id)
            .await?;

        Ok(aggregation::group_by_status(
            deliverables,
            &DELIVERABLE_ORDER,
            |d: &Deliverable| d.status.as_str().to_string(),
        ))
    }
}
