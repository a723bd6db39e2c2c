// src/db/insight_repo.rs

use rust_decimal::Decimal;
use sqlx::{Acquire, Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::insights::{BookingStatusCount, OrgOverview},
};

#[derive(Clone)]
pub struct InsightRepository {
    pool: PgPool,
}

impl InsightRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Visão geral do estúdio. Roda tudo numa transação para ter um
    /// snapshot consistente dos números.
    pub async fn get_overview<'e, E>(
        &self,
        executor: E,
        org_id: Uuid,
    ) -> Result<OrgOverview, AppError>
    where
        E: Executor<'e, Database = Postgres> + Acquire<'e, Database = Postgres>,
    {
        let mut tx = executor.begin().await?;

        // A. Reservas por status
        let bookings_by_status = sqlx::query_as::<_, BookingStatusCount>(
            r#"
            SELECT status, COUNT(*) AS total
            FROM bookings
            WHERE org_id = $1
            GROUP BY status
            ORDER BY total DESC
            "#,
        )
        .bind(org_id)
        .fetch_all(&mut *tx)
        .await?;

        // B. Recebido no mês corrente
        let received_this_month = sqlx::query_scalar::<_, Option<Decimal>>(
            r#"
            SELECT SUM(amount)
            FROM received_amounts
            WHERE org_id = $1
              AND paid_on >= date_trunc('month', CURRENT_DATE)::date
            "#,
        )
        .bind(org_id)
        .fetch_one(&mut *tx)
        .await?
        .unwrap_or(Decimal::ZERO);

        // C. Despesas no mês corrente
        let expenses_this_month = sqlx::query_scalar::<_, Option<Decimal>>(
            r#"
            SELECT SUM(amount)
            FROM expenses
            WHERE org_id = $1
              AND spent_on >= date_trunc('month', CURRENT_DATE)::date
            "#,
        )
        .bind(org_id)
        .fetch_one(&mut *tx)
        .await?
        .unwrap_or(Decimal::ZERO);

        // D. Parcelas agendadas em aberto (sem data ou ainda não vencidas
        // contam igualmente: é dinheiro combinado que não entrou)
        let outstanding_scheduled = sqlx::query_scalar::<_, Option<Decimal>>(
            r#"
            SELECT SUM(s.amount)
            FROM payment_schedules s
            INNER JOIN bookings b ON b.id = s.booking_id
            WHERE s.org_id = $1
              AND b.status NOT IN ('COMPLETED', 'CANCELLED')
            "#,
        )
        .bind(org_id)
        .fetch_one(&mut *tx)
        .await?
        .unwrap_or(Decimal::ZERO);

        // E. Reservas ativas
        let active_bookings = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM bookings
            WHERE org_id = $1
              AND status NOT IN ('COMPLETED', 'CANCELLED')
            "#,
        )
        .bind(org_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(OrgOverview {
            bookings_by_status,
            received_this_month,
            expenses_this_month,
            outstanding_scheduled,
            active_bookings,
        })
    }
}
