// src/db/crm_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::crm::{Client, CrewMember},
};

#[derive(Clone)]
pub struct CrmRepository {
    pool: PgPool,
}

impl CrmRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  CLIENTES
    // =========================================================================

    pub async fn create_client(
        &self,
        org_id: Uuid,
        full_name: &str,
        email: Option<&str>,
        phone: Option<&str>,
        address: Option<&str>,
        note: Option<&str>,
    ) -> Result<Client, AppError> {
        let client = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (org_id, full_name, email, phone, address, note)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(org_id)
        .bind(full_name)
        .bind(email)
        .bind(phone)
        .bind(address)
        .bind(note)
        .fetch_one(&self.pool)
        .await?;

        Ok(client)
    }

    pub async fn list_clients(&self, org_id: Uuid) -> Result<Vec<Client>, AppError> {
        let clients = sqlx::query_as::<_, Client>(
            "SELECT * FROM clients WHERE org_id = $1 ORDER BY full_name ASC",
        )
        .bind(org_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(clients)
    }

    /// Busca por nome, e-mail ou telefone (ILIKE, limitada a 50)
    pub async fn search_clients(&self, org_id: Uuid, query: &str) -> Result<Vec<Client>, AppError> {
        let search_term = format!("%{}%", query);

        let clients = sqlx::query_as::<_, Client>(
            r#"
            SELECT * FROM clients
            WHERE org_id = $1
              AND (full_name ILIKE $2 OR email ILIKE $2 OR phone ILIKE $2)
            ORDER BY full_name ASC
            LIMIT 50
            "#,
        )
        .bind(org_id)
        .bind(search_term)
        .fetch_all(&self.pool)
        .await?;

        Ok(clients)
    }

    pub async fn find_client(&self, org_id: Uuid, id: Uuid) -> Result<Option<Client>, AppError> {
        let client =
            sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE org_id = $1 AND id = $2")
                .bind(org_id)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(client)
    }

    pub async fn update_client(
        &self,
        org_id: Uuid,
        id: Uuid,
        full_name: &str,
        email: Option<&str>,
        phone: Option<&str>,
        address: Option<&str>,
        note: Option<&str>,
    ) -> Result<Option<Client>, AppError> {
        let client = sqlx::query_as::<_, Client>(
            r#"
            UPDATE clients
            SET full_name = $3, email = $4, phone = $5, address = $6, note = $7,
                updated_at = NOW()
            WHERE org_id = $1 AND id = $2
            RETURNING *
            "#,
        )
        .bind(org_id)
        .bind(id)
        .bind(full_name)
        .bind(email)
        .bind(phone)
        .bind(address)
        .bind(note)
        .fetch_optional(&self.pool)
        .await?;

        Ok(client)
    }

    pub async fn delete_client(&self, org_id: Uuid, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM clients WHERE org_id = $1 AND id = $2")
            .bind(org_id)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    // =========================================================================
    //  EQUIPE
    // =========================================================================

    pub async fn create_crew_member(
        &self,
        org_id: Uuid,
        full_name: &str,
        role_title: Option<&str>,
        phone: Option<&str>,
    ) -> Result<CrewMember, AppError> {
        let member = sqlx::query_as::<_, CrewMember>(
            r#"
            INSERT INTO crew_members (org_id, full_name, role_title, phone)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(org_id)
        .bind(full_name)
        .bind(role_title)
        .bind(phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(member)
    }

    pub async fn list_crew_members(&self, org_id: Uuid) -> Result<Vec<CrewMember>, AppError> {
        let members = sqlx::query_as::<_, CrewMember>(
            "SELECT * FROM crew_members WHERE org_id = $1 ORDER BY full_name ASC",
        )
        .bind(org_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }

    pub async fn find_crew_member(
        &self,
        org_id: Uuid,
        id: Uuid,
    ) -> Result<Option<CrewMember>, AppError> {
        let member = sqlx::query_as::<_, CrewMember>(
            "SELECT * FROM crew_members WHERE org_id = $1 AND id = $2",
        )
        .bind(org_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(member)
    }
}
