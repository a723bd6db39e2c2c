// src/db/finance_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::finance::{BillTo, Expense, PaymentSchedule, ReceivedAmount},
};

#[derive(Clone)]
pub struct FinanceRepository {
    pool: PgPool,
}

impl FinanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  VALORES RECEBIDOS
    // =========================================================================

    pub async fn add_received(
        &self,
        org_id: Uuid,
        booking_id: Uuid,
        amount: Decimal,
        paid_on: Option<NaiveDate>,
        description: Option<&str>,
    ) -> Result<ReceivedAmount, AppError> {
        let received = sqlx::query_as::<_, ReceivedAmount>(
            r#"
            INSERT INTO received_amounts (org_id, booking_id, amount, paid_on, description)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(org_id)
        .bind(booking_id)
        .bind(amount)
        .bind(paid_on)
        .bind(description)
        .fetch_one(&self.pool)
        .await?;

        Ok(received)
    }

    pub async fn list_received(
        &self,
        org_id: Uuid,
        booking_id: Uuid,
    ) -> Result<Vec<ReceivedAmount>, AppError> {
        let rows = sqlx::query_as::<_, ReceivedAmount>(
            r#"
            SELECT * FROM received_amounts
            WHERE org_id = $1 AND booking_id = $2
            ORDER BY paid_on ASC NULLS LAST, created_at ASC
            "#,
        )
        .bind(org_id)
        .bind(booking_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn delete_received(&self, org_id: Uuid, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM received_amounts WHERE org_id = $1 AND id = $2")
            .bind(org_id)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    // =========================================================================
    //  PARCELAS AGENDADAS
    // =========================================================================

    pub async fn add_schedule(
        &self,
        org_id: Uuid,
        booking_id: Uuid,
        amount: Decimal,
        due_date: Option<NaiveDate>,
        description: Option<&str>,
    ) -> Result<PaymentSchedule, AppError> {
        let schedule = sqlx::query_as::<_, PaymentSchedule>(
            r#"
            INSERT INTO payment_schedules (org_id, booking_id, amount, due_date, description)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(org_id)
        .bind(booking_id)
        .bind(amount)
        .bind(due_date)
        .bind(description)
        .fetch_one(&self.pool)
        .await?;

        Ok(schedule)
    }

    pub async fn list_schedules(
        &self,
        org_id: Uuid,
        booking_id: Uuid,
    ) -> Result<Vec<PaymentSchedule>, AppError> {
        let rows = sqlx::query_as::<_, PaymentSchedule>(
            r#"
            SELECT * FROM payment_schedules
            WHERE org_id = $1 AND booking_id = $2
            ORDER BY due_date ASC NULLS LAST, created_at ASC
            "#,
        )
        .bind(org_id)
        .bind(booking_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn delete_schedule(&self, org_id: Uuid, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM payment_schedules WHERE org_id = $1 AND id = $2")
            .bind(org_id)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    // =========================================================================
    //  DESPESAS
    // =========================================================================

    pub async fn add_expense(
        &self,
        org_id: Uuid,
        booking_id: Uuid,
        amount: Decimal,
        category: &str,
        spent_on: NaiveDate,
        bill_to: BillTo,
        note: Option<&str>,
    ) -> Result<Expense, AppError> {
        let expense = sqlx::query_as::<_, Expense>(
            r#"
            INSERT INTO expenses (org_id, booking_id, amount, category, spent_on, bill_to, note)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(org_id)
        .bind(booking_id)
        .bind(amount)
        .bind(category)
        .bind(spent_on)
        .bind(bill_to)
        .bind(note)
        .fetch_one(&self.pool)
        .await?;

        Ok(expense)
    }

    pub async fn list_expenses(
        &self,
        org_id: Uuid,
        booking_id: Uuid,
    ) -> Result<Vec<Expense>, AppError> {
        let rows = sqlx::query_as::<_, Expense>(
            r#"
            SELECT * FROM expenses
            WHERE org_id = $1 AND booking_id = $2
            ORDER BY spent_on ASC, created_at ASC
            "#,
        )
        .bind(org_id)
        .bind(booking_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn delete_expense(&self, org_id: Uuid, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM expenses WHERE org_id = $1 AND id = $2")
            .bind(org_id)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
