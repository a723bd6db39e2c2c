// src/models/finance.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// --- Enums (Mapeando o Postgres) ---

// Quem banca a despesa: o estúdio (sai do lucro) ou o cliente (repasse).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "bill_to", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillTo {
    Studio,
    Client,
}

// --- Structs ---

// Um pagamento que de fato entrou no caixa, vinculado à reserva.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReceivedAmount {
    pub id: Uuid,

    #[schema(ignore)]
    pub org_id: Uuid,

    pub booking_id: Uuid,

    #[schema(example = "1500.00")]
    pub amount: Decimal,

    #[schema(value_type = Option<String>, format = Date, example = "2026-03-10")]
    pub paid_on: Option<NaiveDate>,

    #[schema(example = "Sinal (30%)")]
    pub description: Option<String>,

    pub created_at: DateTime<Utc>,
}

// Uma parcela combinada com o cliente, ainda não necessariamente paga.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSchedule {
    pub id: Uuid,

    #[schema(ignore)]
    pub org_id: Uuid,

    pub booking_id: Uuid,

    #[schema(example = "3500.00")]
    pub amount: Decimal,

    #[schema(value_type = Option<String>, format = Date, example = "2026-05-01")]
    pub due_date: Option<NaiveDate>,

    #[schema(example = "Parcela final na entrega")]
    pub description: Option<String>,

    pub created_at: DateTime<Utc>,
}

// Custo incorrido para executar a reserva (locação, transporte, freela...)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: Uuid,

    #[schema(ignore)]
    pub org_id: Uuid,

    pub booking_id: Uuid,

    #[schema(example = "450.00")]
    pub amount: Decimal,

    #[schema(example = "Transporte")]
    pub category: String,

    #[schema(value_type = String, format = Date, example = "2026-03-12")]
    pub spent_on: NaiveDate,

    pub bill_to: BillTo,
    pub note: Option<String>,

    pub created_at: DateTime<Utc>,
}
