// src/db/tenancy_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::tenancy::{MemberRole, Organization, OrganizationMember, UserOrganization},
};

#[derive(Clone)]
pub struct TenancyRepository {
    pool: PgPool,
}

impl TenancyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Cria o estúdio. Recebe um executor para participar da transação que
    /// também grava o membro OWNER.
    pub async fn create_organization<'e, E>(
        &self,
        executor: E,
        name: &str,
        description: Option<&str>,
        pix_key: Option<&str>,
        address: Option<&str>,
    ) -> Result<Organization, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let org = sqlx::query_as::<_, Organization>(
            r#"
            INSERT INTO organizations (name, description, pix_key, address)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(pix_key)
        .bind(address)
        .fetch_one(executor)
        .await?;

        Ok(org)
    }

    pub async fn add_member<'e, E>(
        &self,
        executor: E,
        org_id: Uuid,
        user_id: Uuid,
        role: MemberRole,
    ) -> Result<OrganizationMember, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let member = sqlx::query_as::<_, OrganizationMember>(
            r#"
            INSERT INTO organization_members (org_id, user_id, role)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(org_id)
        .bind(user_id)
        .bind(role)
        .fetch_one(executor)
        .await?;

        Ok(member)
    }

    /// Lista os estúdios aos quais o usuário pertence, com o papel dele
    pub async fn list_user_organizations(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<UserOrganization>, AppError> {
        let orgs = sqlx::query_as::<_, UserOrganization>(
            r#"
            SELECT o.id, o.name, m.role
            FROM organizations o
            INNER JOIN organization_members m ON m.org_id = o.id
            WHERE m.user_id = $1
            ORDER BY o.name ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(orgs)
    }

    /// A pergunta que o guard de tenancy faz em toda requisição org-scoped
    pub async fn is_member(&self, user_id: Uuid, org_id: Uuid) -> Result<bool, AppError> {
        let found = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM organization_members WHERE user_id = $1 AND org_id = $2",
        )
        .bind(user_id)
        .bind(org_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(found > 0)
    }

    pub async fn find_organization(&self, org_id: Uuid) -> Result<Option<Organization>, AppError> {
        let org = sqlx::query_as::<_, Organization>("SELECT * FROM organizations WHERE id = $1")
            .bind(org_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(org)
    }
}
