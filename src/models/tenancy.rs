// src/models/tenancy.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// ---
// 1. Organization (O "Estúdio")
// ---
// A conta principal: cada estúdio de fotografia/vídeo é uma organização,
// e todos os dados operacionais vivem debaixo dela.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: Uuid,

    #[schema(example = "Atelier Luz & Prata")]
    pub name: String,
    pub description: Option<String>,

    // Dados usados no cabeçalho/rodapé da fatura em PDF
    pub pix_key: Option<String>,
    pub address: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "member_role", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberRole {
    Owner,
    Member,
}

// ---
// 2. OrganizationMember (A "Ponte" Usuário-Estúdio)
// ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationMember {
    pub user_id: Uuid,
    pub org_id: Uuid,
    pub role: MemberRole,
    pub created_at: DateTime<Utc>,
}

// Resumo dos estúdios aos quais um usuário pertence (JOIN com members)
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserOrganization {
    pub id: Uuid,
    pub name: String,
    pub role: MemberRole,
}
