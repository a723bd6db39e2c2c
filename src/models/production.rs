// src/models/production.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// --- Enums (Mapeando o Postgres) ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "deliverable_status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliverableStatus {
    Pending,
    InProgress,
    InRevision,
    Delivered,
    Completed,
    Cancelled,
}

impl DeliverableStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliverableStatus::Pending => "Pending",
            DeliverableStatus::InProgress => "InProgress",
            DeliverableStatus::InRevision => "InRevision",
            DeliverableStatus::Delivered => "Delivered",
            DeliverableStatus::Completed => "Completed",
            DeliverableStatus::Cancelled => "Cancelled",
        }
    }
}

// --- Structs ---

// Uma sessão agendada (ensaio, cobertura, diária de filmagem).
// A data é opcional de propósito: sessões recém-criadas podem ainda não
// ter dia marcado.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Shoot {
    pub id: Uuid,

    #[schema(ignore)]
    pub org_id: Uuid,

    pub booking_id: Uuid,

    #[schema(example = "Ensaio pré-wedding")]
    pub title: String,

    #[schema(value_type = Option<String>, format = Date, example = "2026-04-18")]
    pub date: Option<NaiveDate>,

    #[schema(example = "Parque Ibirapuera")]
    pub location: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Um produto contratado (álbum, vídeo, caixa de fotos), com ciclo de vida
// próprio até a entrega.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Deliverable {
    pub id: Uuid,

    #[schema(ignore)]
    pub org_id: Uuid,

    pub booking_id: Uuid,

    #[schema(example = "Álbum 30x30")]
    pub title: String,

    pub status: DeliverableStatus,

    #[schema(example = "800.00")]
    pub cost: Decimal,

    #[schema(example = 1)]
    pub quantity: i32,

    #[schema(value_type = Option<String>, format = Date, example = "2026-06-30")]
    pub due_date: Option<NaiveDate>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
