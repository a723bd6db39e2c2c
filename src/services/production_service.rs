// src/services/production_service.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{BookingRepository, CrmRepository, ProductionRepository},
    models::{
        crm::{AssignmentKind, CrewAssignment},
        production::{Deliverable, DeliverableStatus, Shoot},
        tasks::{Task, TaskPriority, TaskStatus},
    },
};

#[derive(Clone)]
pub struct ProductionService {
    repo: ProductionRepository,
    crm_repo: CrmRepository,
    booking_repo: BookingRepository,
}

impl ProductionService {
    pub fn new(
        repo: ProductionRepository,
        crm_repo: CrmRepository,
        booking_repo: BookingRepository,
    ) -> Self {
        Self { repo, crm_repo, booking_repo }
    }

    async fn ensure_booking(&self, org_id: Uuid, booking_id: Uuid) -> Result<(), AppError> {
        self.booking_repo
            .find_booking(org_id, booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva não encontrada.".to_string()))?;
        Ok(())
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
        self.ensure_booking(org_id, booking_id).await?;
        self.repo
            .create_shoot(org_id, booking_id, title, date, location)
            .await
    }

    pub async fn list_shoots(&self, org_id: Uuid, booking_id: Uuid) -> Result<Vec<Shoot>, AppError> {
        self.ensure_booking(org_id, booking_id).await?;
        self.repo.list_shoots(org_id, booking_id).await
    }

    pub async fn update_shoot(
        &self,
        org_id: Uuid,
        id: Uuid,
        title: &str,
        date: Option<NaiveDate>,
        location: Option<&str>,
    ) -> Result<Shoot, AppError> {
        self.repo
            .update_shoot(org_id, id, title, date, location)
            .await?
            .ok_or_else(|| AppError::NotFound("Sessão não encontrada.".to_string()))
    }

    pub async fn delete_shoot(&self, org_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repo.delete_shoot(org_id, id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Sessão não encontrada.".to_string()));
        }
        Ok(())
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
        self.ensure_booking(org_id, booking_id).await?;
        self.repo
            .create_deliverable(org_id, booking_id, title, cost, quantity, due_date)
            .await
    }

    pub async fn list_deliverables(
        &self,
        org_id: Uuid,
        booking_id: Uuid,
    ) -> Result<Vec<Deliverable>, AppError> {
        self.ensure_booking(org_id, booking_id).await?;
        self.repo.list_deliverables(org_id, booking_id).await
    }

    pub async fn update_deliverable_status(
        &self,
        org_id: Uuid,
        id: Uuid,
        status: DeliverableStatus,
    ) -> Result<Deliverable, AppError> {
        self.repo
            .update_deliverable_status(org_id, id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("Entrega não encontrada.".to_string()))
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
        self.ensure_booking(org_id, booking_id).await?;
        self.repo
            .create_task(org_id, booking_id, title, priority, due_date)
            .await
    }

    pub async fn list_tasks(&self, org_id: Uuid, booking_id: Uuid) -> Result<Vec<Task>, AppError> {
        self.ensure_booking(org_id, booking_id).await?;
        self.repo.list_tasks(org_id, booking_id).await
    }

    pub async fn update_task_status(
        &self,
        org_id: Uuid,
        id: Uuid,
        status: TaskStatus,
    ) -> Result<Task, AppError> {
        self.repo
            .update_task_status(org_id, id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("Tarefa não encontrada.".to_string()))
    }

    // =========================================================================
    //  VÍNCULOS DE EQUIPE
    // =========================================================================

    /// Aloca um membro da equipe a uma sessão/entrega/tarefa/despesa.
    /// Membro e alvo precisam existir no mesmo estúdio.
    pub async fn assign_crew(
        &self,
        org_id: Uuid,
        crew_member_id: Uuid,
        kind: AssignmentKind,
        target_id: Uuid,
    ) -> Result<CrewAssignment, AppError> {
        self.crm_repo
            .find_crew_member(org_id, crew_member_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Membro da equipe não encontrado.".to_string()))?;

        if !self.repo.target_exists(org_id, kind, target_id).await? {
            return Err(AppError::NotFound(
                "Item a ser vinculado não encontrado.".to_string(),
            ));
        }

        self.repo
            .create_assignment(org_id, crew_member_id, kind, target_id)
            .await
    }

    pub async fn unassign_crew(&self, org_id: Uuid, assignment_id: Uuid) -> Result<(), AppError> {
        let deleted = self.repo.delete_assignment(org_id, assignment_id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Vínculo não encontrado.".to_string()));
        }
        Ok(())
    }
}
