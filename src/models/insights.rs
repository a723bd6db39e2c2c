// src/models/insights.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::{bookings::BookingStatus, tasks::Task};

// ---
// RESUMO FINANCEIRO DA RESERVA
// ---
// Tudo aqui é derivado das coleções já buscadas; nada é persistido.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    #[schema(example = "12000.00")]
    pub package_cost: Decimal,

    #[schema(example = "5000.00")]
    pub total_received: Decimal,

    #[schema(example = "7000.00")]
    pub total_scheduled: Decimal,

    #[schema(example = "1800.00")]
    pub total_expenses: Decimal,

    // package_cost - total_received. Negativo significa crédito do cliente.
    #[schema(example = "7000.00")]
    pub pending_amount: Decimal,

    // package_cost - total_expenses
    #[schema(example = "10200.00")]
    pub profit: Decimal,

    // Inteiro 0..=100. Sempre 0 quando o pacote custa zero.
    #[schema(example = 42)]
    pub payment_percentage: i32,
}

// ---
// MARCOS (Milestones)
// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum MilestoneStatus {
    Completed,
    InProgress,
    NotStarted,
}

// Um checkpoint derivado do progresso da reserva (sinal pago, sessões
// feitas, entregas concluídas, pagamento quitado).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    #[schema(example = "advance")]
    pub id: &'static str,

    #[schema(example = "Sinal recebido")]
    pub label: &'static str,

    pub status: MilestoneStatus,

    #[schema(value_type = Option<String>, format = Date, example = "2026-03-10")]
    pub date: Option<NaiveDate>,
}

// ---
// AGRUPAMENTOS
// ---

// Um balde de itens com o mesmo status, na ordem pedida pelo chamador.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusGroup<T: ToSchema> {
    #[schema(example = "Pending")]
    pub status: String,
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum DueBucket {
    Overdue,
    Today,
    Tomorrow,
    ThisWeek,
    Upcoming,
    NoDueDate,
    Completed,
}

// Uma coluna do quadro de tarefas por vencimento. O quadro sempre traz as
// sete colunas, mesmo vazias, para a UI ter um formato estável.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskBoardColumn {
    pub bucket: DueBucket,
    pub tasks: Vec<Task>,
}

// ---
// VISÃO GERAL DO ESTÚDIO (dashboard)
// ---

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingStatusCount {
    pub status: BookingStatus,
    pub total: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrgOverview {
    pub bookings_by_status: Vec<BookingStatusCount>,

    #[schema(example = "18500.00")]
    pub received_this_month: Decimal,

    #[schema(example = "4200.00")]
    pub expenses_this_month: Decimal,

    // Soma das parcelas agendadas com vencimento ainda em aberto
    #[schema(example = "26000.00")]
    pub outstanding_scheduled: Decimal,

    #[schema(example = 7)]
    pub active_bookings: i64,
}
