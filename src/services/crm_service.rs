// src/services/crm_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::CrmRepository,
    models::crm::{Client, CrewMember},
};

#[derive(Clone)]
pub struct CrmService {
    repo: CrmRepository,
}

impl CrmService {
    pub fn new(repo: CrmRepository) -> Self {
        Self { repo }
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
        self.repo
            .create_client(org_id, full_name, email, phone, address, note)
            .await
    }

    pub async fn list_clients(&self, org_id: Uuid) -> Result<Vec<Client>, AppError> {
        self.repo.list_clients(org_id).await
    }

    pub async fn search_clients(&self, org_id: Uuid, query: &str) -> Result<Vec<Client>, AppError> {
        self.repo.search_clients(org_id, query).await
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
    ) -> Result<Client, AppError> {
        self.repo
            .update_client(org_id, id, full_name, email, phone, address, note)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente não encontrado.".to_string()))
    }

    pub async fn delete_client(&self, org_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repo.delete_client(org_id, id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Cliente não encontrado.".to_string()));
        }
        Ok(())
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
        self.repo
            .create_crew_member(org_id, full_name, role_title, phone)
            .await
    }

    pub async fn list_crew_members(&self, org_id: Uuid) -> Result<Vec<CrewMember>, AppError> {
        self.repo.list_crew_members(org_id).await
    }
}
