// src/services/finance_service.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{BookingRepository, FinanceRepository},
    models::finance::{BillTo, Expense, PaymentSchedule, ReceivedAmount},
};

#[derive(Clone)]
pub struct FinanceService {
    repo: FinanceRepository,
    booking_repo: BookingRepository,
}

impl FinanceService {
    pub fn new(repo: FinanceRepository, booking_repo: BookingRepository) -> Self {
        Self { repo, booking_repo }
    }

    // Toda coleção financeira pende de uma reserva; confirma que ela
    // existe (e pertence ao estúdio) antes de mexer.
    async fn ensure_booking(&self, org_id: Uuid, booking_id: Uuid) -> Result<(), AppError> {
        self.booking_repo
            .find_booking(org_id, booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva não encontrada.".to_string()))?;
        Ok(())
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
        self.ensure_booking(org_id, booking_id).await?;
        self.repo
            .add_received(org_id, booking_id, amount, paid_on, description)
            .await
    }

    pub async fn list_received(
        &self,
        org_id: Uuid,
        booking_id: Uuid,
    ) -> Result<Vec<ReceivedAmount>, AppError> {
        self.ensure_booking(org_id, booking_id).await?;
        self.repo.list_received(org_id, booking_id).await
    }

    pub async fn delete_received(&self, org_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repo.delete_received(org_id, id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Pagamento não encontrado.".to_string()));
        }
        Ok(())
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
        self.ensure_booking(org_id, booking_id).await?;
        self.repo
            .add_schedule(org_id, booking_id, amount, due_date, description)
            .await
    }

    pub async fn list_schedules(
        &self,
        org_id: Uuid,
        booking_id: Uuid,
    ) -> Result<Vec<PaymentSchedule>, AppError> {
        self.ensure_booking(org_id, booking_id).await?;
        self.repo.list_schedules(org_id, booking_id).await
    }

    pub async fn delete_schedule(&self, org_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repo.delete_schedule(org_id, id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Parcela não encontrada.".to_string()));
        }
        Ok(())
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
        self.ensure_booking(org_id, booking_id).await?;
        self.repo
            .add_expense(org_id, booking_id, amount, category, spent_on, bill_to, note)
            .await
    }

    pub async fn list_expenses(
        &self,
        org_id: Uuid,
        booking_id: Uuid,
    ) -> Result<Vec<Expense>, AppError> {
        self.ensure_booking(org_id, booking_id).await?;
        self.repo.list_expenses(org_id, booking_id).await
    }

    pub async fn delete_expense(&self, org_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repo.delete_expense(org_id, id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Despesa não encontrada.".to_string()));
        }
        Ok(())
    }
}
