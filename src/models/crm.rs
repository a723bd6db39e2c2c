// src/models/crm.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// ---
// CLIENTE
// ---
// A pessoa (ou empresa) que contrata o estúdio. Toda reserva aponta para um
// cliente deste cadastro.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Uuid,

    #[schema(ignore)]
    pub org_id: Uuid,

    #[schema(example = "Maria da Silva")]
    pub full_name: String,

    #[schema(example = "maria@email.com")]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub note: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ---
// EQUIPE (Crew)
// ---
// Fotógrafos, cinegrafistas, editores... quem executa o trabalho.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CrewMember {
    pub id: Uuid,

    #[schema(ignore)]
    pub org_id: Uuid,

    #[schema(example = "João Pereira")]
    pub full_name: String,

    #[schema(example = "Fotógrafo")]
    pub role_title: Option<String>,
    pub phone: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "assignment_kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentKind {
    Shoot,
    Deliverable,
    Task,
    Expense,
}

// Vínculo cru: um membro da equipe alocado a uma sessão/entrega/tarefa/despesa
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CrewAssignment {
    pub id: Uuid,

    #[schema(ignore)]
    pub org_id: Uuid,

    pub crew_member_id: Uuid,
    pub kind: AssignmentKind,
    pub target_id: Uuid,
    pub created_at: DateTime<Utc>,
}

// Vínculo já resolvido com o nome do membro, para exibição no detalhe da reserva
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignedCrew {
    pub assignment_id: Uuid,
    pub crew_member_id: Uuid,

    #[schema(example = "João Pereira")]
    pub full_name: String,
    pub role_title: Option<String>,
}

// Linha intermediária usada ao montar o detalhe da reserva: além do nome,
// carrega o alvo para distribuir cada vínculo na coleção certa.
#[derive(Debug, Clone, FromRow)]
pub struct BookingAssignmentRow {
    pub assignment_id: Uuid,
    pub crew_member_id: Uuid,
    pub full_name: String,
    pub role_title: Option<String>,
    pub kind: AssignmentKind,
    pub target_id: Uuid,
}
