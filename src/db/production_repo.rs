// src/db/production_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        crm::{AssignmentKind, BookingAssignmentRow, CrewAssignment},
        production::{Deliverable, DeliverableStatus, Shoot},
        tasks::{Task, TaskPriority, TaskStatus},
    },
};

#[derive(Clone)]
pub struct ProductionRepository {
    pool: PgPool,
}

impl ProductionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  SESSÕES
    // =========================================================================

    pub async fn create_shoot(
        &self,
        org_id: Uuid,
        booking_id: Uuid,
        title: &str,
        date: Option<NaiveDate>,
        location: Option<&str>,
    ) -> Result<Shoot, AppError> {
        let shoot = sqlx::query_as::<_, Shoot>(
            r#"
            INSERT INTO shoots (org_id, booking_id, title, date, location)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(org_id)
        .bind(booking_id)
        .bind(title)
        .bind(date)
        .bind(location)
        .fetch_one(&self.pool)
        .await?;

        Ok(shoot)
    }

    pub async fn list_shoots(&self, org_id: Uuid, booking_id: Uuid) -> Result<Vec<Shoot>, AppError> {
        let shoots = sqlx::query_as::<_, Shoot>(
            r#"
            SELECT * FROM shoots
            WHERE org_id = $1 AND booking_id = $2
            ORDER BY date ASC NULLS LAST, created_at ASC
            "#,
        )
        .bind(org_id)
        .bind(booking_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(shoots)
    }

    pub async fn update_shoot(
        &self,
        org_id: Uuid,
        id: Uuid,
        title: &str,
        date: Option<NaiveDate>,
        location: Option<&str>,
    ) -> Result<Option<Shoot>, AppError> {
        let shoot = sqlx::query_as::<_, Shoot>(
            r#"
            UPDATE shoots
            SET title = $3, date = $4, location = $5, updated_at = NOW()
            WHERE org_id = $1 AND id = $2
            RETURNING *
            "#,
        )
        .bind(org_id)
        .bind(id)
        .bind(title)
        .bind(date)
        .bind(location)
        .fetch_optional(&self.pool)
        .await?;

        Ok(shoot)
    }

    pub async fn delete_shoot(&self, org_id: Uuid, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM shoots WHERE org_id = $1 AND id = $2")
            .bind(org_id)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    // =========================================================================
    //  ENTREGAS
    // =========================================================================

    pub async fn create_deliverable(
        &self,
        org_id: Uuid,
        booking_id: Uuid,
        title: &str,
        cost: Decimal,
        quantity: i32,
        due_date: Option<NaiveDate>,
    ) -> Result<Deliverable, AppError> {
        let deliverable = sqlx::query_as::<_, Deliverable>(
            r#"
            INSERT INTO deliverables (org_id, booking_id, title, cost, quantity, due_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(org_id)
        .bind(booking_id)
        .bind(title)
        .bind(cost)
        .bind(quantity)
        .bind(due_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(deliverable)
    }

    pub async fn list_deliverables(
        &self,
        org_id: Uuid,
        booking_id: Uuid,
    ) -> Result<Vec<Deliverable>, AppError> {
        let deliverables = sqlx::query_as::<_, Deliverable>(
            r#"
            SELECT * FROM deliverables
            WHERE org_id = $1 AND booking_id = $2
            ORDER BY due_date ASC NULLS LAST, created_at ASC
            "#,
        )
        .bind(org_id)
        .bind(booking_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(deliverables)
    }

    pub async fn update_deliverable_status(
        &self,
        org_id: Uuid,
        id: Uuid,
        status: DeliverableStatus,
    ) -> Result<Option<Deliverable>, AppError> {
        let deliverable = sqlx::query_as::<_, Deliverable>(
            r#"
            UPDATE deliverables
            SET status = $3, updated_at = NOW()
            WHERE org_id = $1 AND id = $2
            RETURNING *
            "#,
        )
        .bind(org_id)
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(deliverable)
    }

    // =========================================================================
    //  TAREFAS
    // =========================================================================

    pub async fn create_task(
        &self,
        org_id: Uuid,
        booking_id: Uuid,
        title: &str,
        priority: TaskPriority,
        due_date: Option<NaiveDate>,
    ) -> Result<Task, AppError> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (org_id, booking_id, title, priority, due_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(org_id)
        .bind(booking_id)
        .bind(title)
        .bind(priority)
        .bind(due_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(task)
    }

    pub async fn list_tasks(&self, org_id: Uuid, booking_id: Uuid) -> Result<Vec<Task>, AppError> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT * FROM tasks
            WHERE org_id = $1 AND booking_id = $2
            ORDER BY due_date ASC NULLS LAST, created_at ASC
            "#,
        )
        .bind(org_id)
        .bind(booking_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    /// Todas as tarefas do estúdio, para o quadro por vencimento
    pub async fn list_org_tasks(&self, org_id: Uuid) -> Result<Vec<Task>, AppError> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT * FROM tasks
            WHERE org_id = $1
            ORDER BY due_date ASC NULLS LAST, created_at ASC
            "#,
        )
        .bind(org_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    pub async fn update_task_status(
        &self,
        org_id: Uuid,
        id: Uuid,
        status: TaskStatus,
    ) -> Result<Option<Task>, AppError> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET status = $3, updated_at = NOW()
            WHERE org_id = $1 AND id = $2
            RETURNING *
            "#,
        )
        .bind(org_id)
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(task)
    }

    // =========================================================================
    //  VÍNCULOS DE EQUIPE
    // =========================================================================

    pub async fn create_assignment(
        &self,
        org_id: Uuid,
        crew_member_id: Uuid,
        kind: AssignmentKind,
        target_id: Uuid,
    ) -> Result<CrewAssignment, AppError> {
        sqlx::query_as::<_, CrewAssignment>(
            r#"
            INSERT INTO crew_assignments (org_id, crew_member_id, kind, target_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(org_id)
        .bind(crew_member_id)
        .bind(kind)
        .bind(target_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AppError::UniqueConstraintViolation(
                        "Este membro já está alocado a este item.".to_string(),
                    );
                }
            }
            e.into()
        })
    }

    pub async fn delete_assignment(&self, org_id: Uuid, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM crew_assignments WHERE org_id = $1 AND id = $2")
            .bind(org_id)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Todos os vínculos das coleções de uma reserva, já com o nome do
    /// membro. O chamador distribui cada linha pelo (kind, target_id).
    pub async fn list_booking_assignments(
        &self,
        org_id: Uuid,
        booking_id: Uuid,
    ) -> Result<Vec<BookingAssignmentRow>, AppError> {
        let rows = sqlx::query_as::<_, BookingAssignmentRow>(
            r#"
            SELECT
                ca.id AS assignment_id,
                ca.crew_member_id,
                cm.full_name,
                cm.role_title,
                ca.kind,
                ca.target_id
            FROM crew_assignments ca
            INNER JOIN crew_members cm ON cm.id = ca.crew_member_id
            WHERE ca.org_id = $1
              AND ca.target_id IN (
                  SELECT id FROM shoots WHERE booking_id = $2
                  UNION ALL
                  SELECT id FROM deliverables WHERE booking_id = $2
                  UNION ALL
                  SELECT id FROM tasks WHERE booking_id = $2
                  UNION ALL
                  SELECT id FROM expenses WHERE booking_id = $2
              )
            ORDER BY cm.full_name ASC
            "#,
        )
        .bind(org_id)
        .bind(booking_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Confirma que o alvo de um vínculo existe e pertence ao estúdio.
    /// O nome da tabela vem do `kind`; não dá para parametrizar via bind.
    pub async fn target_exists(
        &self,
        org_id: Uuid,
        kind: AssignmentKind,
        target_id: Uuid,
    ) -> Result<bool, AppError> {
        let sql = match kind {
            AssignmentKind::Shoot => "SELECT COUNT(*) FROM shoots WHERE org_id = $1 AND id = $2",
            AssignmentKind::Deliverable => {
                "SELECT COUNT(*) FROM deliverables WHERE org_id = $1 AND id = $2"
            }
            AssignmentKind::Task => "SELECT COUNT(*) FROM tasks WHERE org_id = $1 AND id = $2",
            AssignmentKind::Expense => {
                "SELECT COUNT(*) FROM expenses WHERE org_id = $1 AND id = $2"
            }
        };

        let found = sqlx::query_scalar::<_, i64>(sql)
            .bind(org_id)
            .bind(target_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(found > 0)
    }
}
