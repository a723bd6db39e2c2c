// src/db/booking_repo.rs

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::bookings::{Booking, BookingStatus},
};

#[derive(Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_booking(
        &self,
        org_id: Uuid,
        client_id: Uuid,
        title: &str,
        package_cost: Decimal,
        note: Option<&str>,
    ) -> Result<Booking, AppError> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (org_id, client_id, title, package_cost, note)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(org_id)
        .bind(client_id)
        .bind(title)
        .bind(package_cost)
        .bind(note)
        .fetch_one(&self.pool)
        .await?;

        Ok(booking)
    }

    pub async fn list_bookings(&self, org_id: Uuid) -> Result<Vec<Booking>, AppError> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE org_id = $1 ORDER BY created_at DESC",
        )
        .bind(org_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    pub async fn find_booking(&self, org_id: Uuid, id: Uuid) -> Result<Option<Booking>, AppError> {
        let booking =
            sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE org_id = $1 AND id = $2")
                .bind(org_id)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(booking)
    }

    pub async fn update_booking(
        &self,
        org_id: Uuid,
        id: Uuid,
        title: &str,
        package_cost: Decimal,
        note: Option<&str>,
    ) -> Result<Option<Booking>, AppError> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings
            SET title = $3, package_cost = $4, note = $5, updated_at = NOW()
            WHERE org_id = $1 AND id = $2
            RETURNING *
            "#,
        )
        .bind(org_id)
        .bind(id)
        .bind(title)
        .bind(package_cost)
        .bind(note)
        .fetch_optional(&self.pool)
        .await?;

        Ok(booking)
    }

    /// Troca o status. A validação do fluxo acontece no service; aqui só
    /// gravamos.
    pub async fn update_status(
        &self,
        org_id: Uuid,
        id: Uuid,
        status: BookingStatus,
    ) -> Result<Option<Booking>, AppError> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings
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

        Ok(booking)
    }

    pub async fn delete_booking(&self, org_id: Uuid, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM bookings WHERE org_id = $1 AND id = $2")
            .bind(org_id)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
