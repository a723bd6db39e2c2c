// src/models/bookings.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{
    crm::AssignedCrew,
    finance::{Expense, PaymentSchedule, ReceivedAmount},
    insights::{FinancialSummary, Milestone},
    production::{Deliverable, Shoot},
    tasks::Task,
};

// --- Enums (Mapeando o Postgres) ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "booking_status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    New,
    Preparation,
    Shooting,
    Delivery,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::New => "New",
            BookingStatus::Preparation => "Preparation",
            BookingStatus::Shooting => "Shooting",
            BookingStatus::Delivery => "Delivery",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }

    // O fluxo só anda para frente; cancelar é permitido em qualquer
    // estado não-terminal.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        use BookingStatus::*;
        match (self, next) {
            (New, Preparation)
            | (Preparation, Shooting)
            | (Shooting, Delivery)
            | (Delivery, Completed) => true,
            (New | Preparation | Shooting | Delivery, Cancelled) => true,
            _ => false,
        }
    }
}

// --- Structs ---

// O contrato com o cliente: pacote fechado, status do fluxo e anotações.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,

    #[schema(ignore)]
    pub org_id: Uuid,

    pub client_id: Uuid,

    #[schema(example = "Casamento Maria & Pedro")]
    pub title: String,

    #[schema(example = "12000.00")]
    pub package_cost: Decimal,

    pub status: BookingStatus,
    pub note: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// --- Sub-entidades com a equipe já resolvida ---

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShootWithCrew {
    #[serde(flatten)]
    pub shoot: Shoot,
    pub crew: Vec<AssignedCrew>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeliverableWithCrew {
    #[serde(flatten)]
    pub deliverable: Deliverable,
    pub crew: Vec<AssignedCrew>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskWithCrew {
    #[serde(flatten)]
    pub task: Task,
    pub crew: Vec<AssignedCrew>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseWithCrew {
    #[serde(flatten)]
    pub expense: Expense,
    pub crew: Vec<AssignedCrew>,
}

// O agregado completo que a tela de detalhe consome: a reserva, todas as
// coleções relacionadas e o resumo derivado (financeiro + marcos).
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetail {
    pub booking: Booking,

    #[schema(example = "Maria da Silva")]
    pub client_name: String,

    pub shoots: Vec<ShootWithCrew>,
    pub deliverables: Vec<DeliverableWithCrew>,
    pub received_amounts: Vec<ReceivedAmount>,
    pub payment_schedules: Vec<PaymentSchedule>,
    pub expenses: Vec<ExpenseWithCrew>,
    pub tasks: Vec<TaskWithCrew>,

    pub financial_summary: FinancialSummary,
    pub milestones: Vec<Milestone>,

    #[schema(example = 50)]
    pub overall_completion: i32,
}
