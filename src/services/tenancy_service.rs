// src/services/tenancy_service.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::TenancyRepository,
    models::tenancy::{MemberRole, Organization, UserOrganization},
};

#[derive(Clone)]
pub struct TenancyService {
    repo: TenancyRepository,
    pool: PgPool,
}

impl TenancyService {
    pub fn new(repo: TenancyRepository, pool: PgPool) -> Self {
        Self { repo, pool }
    }

    /// Cria o estúdio e o vínculo OWNER do criador numa única transação:
    /// ou existe tudo, ou não existe nada.
    pub async fn create_organization(
        &self,
        user_id: Uuid,
        name: &str,
        description: Option<&str>,
        pix_key: Option<&str>,
        address: Option<&str>,
    ) -> Result<Organization, AppError> {
        let mut tx = self.pool.begin().await?;

        let org = self
            .repo
            .create_organization(&mut *tx, name, description, pix_key, address)
            .await?;

        self.repo
            .add_member(&mut *tx, org.id, user_id, MemberRole::Owner)
            .await?;

        tx.commit().await?;

        tracing::info!("🏠 Estúdio '{}' criado por {}", org.name, user_id);
        Ok(org)
    }

    pub async fn list_my_organizations(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<UserOrganization>, AppError> {
        self.repo.list_user_organizations(user_id).await
    }

    pub async fn is_member(&self, user_id: Uuid, org_id: Uuid) -> Result<bool, AppError> {
        self.repo.is_member(user_id, org_id).await
    }

    pub async fn get_organization(&self, org_id: Uuid) -> Result<Organization, AppError> {
        self.repo
            .find_organization(org_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Estúdio não encontrado.".to_string()))
    }
}
