// src/services/booking_service.rs

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{BookingRepository, CrmRepository, FinanceRepository, ProductionRepository},
    models::{
        bookings::{
            Booking, BookingDetail, BookingStatus, DeliverableWithCrew, ExpenseWithCrew,
            ShootWithCrew, TaskWithCrew,
        },
        crm::{AssignedCrew, AssignmentKind},
    },
    services::aggregation,
};

#[derive(Clone)]
pub struct BookingService {
    repo: BookingRepository,
    crm_repo: CrmRepository,
    finance_repo: FinanceRepository,
    production_repo: ProductionRepository,
}

impl BookingService {
    pub fn new(
        repo: BookingRepository,
        crm_repo: CrmRepository,
        finance_repo: FinanceRepository,
        production_repo: ProductionRepository,
    ) -> Self {
        Self { repo, crm_repo, finance_repo, production_repo }
    }

    pub async fn create_booking(
        &self,
        org_id: Uuid,
        client_id: Uuid,
        title: &str,
        package_cost: Decimal,
        note: Option<&str>,
    ) -> Result<Booking, AppError> {
        // O cliente precisa existir no mesmo estúdio
        self.crm_repo
            .find_client(org_id, client_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente não encontrado.".to_string()))?;

        self.repo
            .create_booking(org_id, client_id, title, package_cost, note)
            .await
    }

    pub async fn list_bookings(&self, org_id: Uuid) -> Result<Vec<Booking>, AppError> {
        self.repo.list_bookings(org_id).await
    }

    pub async fn update_booking(
        &self,
        org_id: Uuid,
        id: Uuid,
        title: &str,
        package_cost: Decimal,
        note: Option<&str>,
    ) -> Result<Booking, AppError> {
        self.repo
            .update_booking(org_id, id, title, package_cost, note)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva não encontrada.".to_string()))
    }

    /// Valida o fluxo antes de gravar: só anda para frente, e cancelar é
    /// permitido em qualquer estado não-terminal.
    pub async fn transition_status(
        &self,
        org_id: Uuid,
        id: Uuid,
        next: BookingStatus,
    ) -> Result<Booking, AppError> {
        let booking = self
            .repo
            .find_booking(org_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva não encontrada.".to_string()))?;

        if !booking.status.can_transition_to(next) {
            return Err(AppError::InvalidTransition(format!(
                "{} -> {}",
                booking.status.as_str(),
                next.as_str()
            )));
        }

        self.repo
            .update_status(org_id, id, next)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva não encontrada.".to_string()))
    }

    pub async fn delete_booking(&self, org_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repo.delete_booking(org_id, id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Reserva não encontrada.".to_string()));
        }
        Ok(())
    }

    /// O agregado completo da tela de detalhe: reserva, coleções, equipe
    /// resolvida e o resumo derivado (financeiro + marcos). O `now` vem
    /// de fora para manter a agregação determinística.
    pub async fn get_booking_detail(
        &self,
        org_id: Uuid,
        booking_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<BookingDetail, AppError> {
        let booking = self
            .repo
            .find_booking(org_id, booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva não encontrada.".to_string()))?;

        let client = self
            .crm_repo
            .find_client(org_id, booking.client_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente não encontrado.".to_string()))?;

        let shoots = self.production_repo.list_shoots(org_id, booking_id).await?;
        let deliverables = self
            .production_repo
            .list_deliverables(org_id, booking_id)
            .await?;
        let tasks = self.production_repo.list_tasks(org_id, booking_id).await?;
        let received_amounts = self.finance_repo.list_received(org_id, booking_id).await?;
        let payment_schedules = self.finance_repo.list_schedules(org_id, booking_id).await?;
        let expenses = self.finance_repo.list_expenses(org_id, booking_id).await?;

        // Distribui os vínculos de equipe por alvo, um mapa por tipo
        let mut shoot_crew: HashMap<Uuid, Vec<AssignedCrew>> = HashMap::new();
        let mut deliverable_crew: HashMap<Uuid, Vec<AssignedCrew>> = HashMap::new();
        let mut task_crew: HashMap<Uuid, Vec<AssignedCrew>> = HashMap::new();
        let mut expense_crew: HashMap<Uuid, Vec<AssignedCrew>> = HashMap::new();

        let assignment_rows = self
            .production_repo
            .list_booking_assignments(org_id, booking_id)
            .await?;

        for row in assignment_rows {
            let assigned = AssignedCrew {
                assignment_id: row.assignment_id,
                crew_member_id: row.crew_member_id,
                full_name: row.full_name,
                role_title: row.role_title,
            };
            let map = match row.kind {
                AssignmentKind::Shoot => &mut shoot_crew,
                AssignmentKind::Deliverable => &mut deliverable_crew,
                AssignmentKind::Task => &mut task_crew,
                AssignmentKind::Expense => &mut expense_crew,
            };
            map.entry(row.target_id).or_default().push(assigned);
        }

        // O resumo derivado: agregação pura sobre o que acabamos de buscar
        let financial_summary = aggregation::financial_summary(
            booking.package_cost,
            &received_amounts,
            &payment_schedules,
            &expenses,
        );
        let milestones = aggregation::booking_milestones(
            booking.package_cost,
            &shoots,
            &deliverables,
            &received_amounts,
            now,
        );
        let overall_completion = aggregation::overall_completion(&milestones);

        Ok(BookingDetail {
            client_name: client.full_name,
            shoots: shoots
                .into_iter()
                .map(|s| {
                    let crew = shoot_crew.remove(&s.id).unwrap_or_default();
                    ShootWithCrew { shoot: s, crew }
                })
                .collect(),
            deliverables: deliverables
                .into_iter()
                .map(|d| {
                    let crew = deliverable_crew.remove(&d.id).unwrap_or_default();
                    DeliverableWithCrew { deliverable: d, crew }
                })
                .collect(),
            tasks: tasks
                .into_iter()
                .map(|t| {
                    let crew = task_crew.remove(&t.id).unwrap_or_default();
                    TaskWithCrew { task: t, crew }
                })
                .collect(),
            expenses: expenses
                .into_iter()
                .map(|e| {
                    let crew = expense_crew.remove(&e.id).unwrap_or_default();
                    ExpenseWithCrew { expense: e, crew }
                })
                .collect(),
            received_amounts,
            payment_schedules,
            financial_summary,
            milestones,
            overall_completion,
            booking,
        })
    }
}
