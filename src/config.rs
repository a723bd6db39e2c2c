// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    db::{
        BookingRepository, CrmRepository, FinanceRepository, InsightRepository,
        ProductionRepository, TenancyRepository, UserRepository,
    },
    services::{
        AuthService, BookingService, CrmService, DocumentService, FinanceService, InsightService,
        ProductionService, TenancyService,
    },
};

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub jwt_secret: String,

    pub auth_service: AuthService,
    pub tenancy_service: TenancyService,
    pub crm_service: CrmService,
    pub booking_service: BookingService,
    pub finance_service: FinanceService,
    pub production_service: ProductionService,
    pub insight_service: InsightService,
    pub document_service: DocumentService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o grafo de dependências ---
        let user_repo = UserRepository::new(db_pool.clone());
        let tenancy_repo = TenancyRepository::new(db_pool.clone());
        let crm_repo = CrmRepository::new(db_pool.clone());
        let booking_repo = BookingRepository::new(db_pool.clone());
        let finance_repo = FinanceRepository::new(db_pool.clone());
        let production_repo = ProductionRepository::new(db_pool.clone());
        let insight_repo = InsightRepository::new(db_pool.clone());

        let auth_service = AuthService::new(user_repo, jwt_secret.clone());
        let tenancy_service = TenancyService::new(tenancy_repo.clone(), db_pool.clone());
        let crm_service = CrmService::new(crm_repo.clone());
        let booking_service = BookingService::new(
            booking_repo.clone(),
            crm_repo.clone(),
            finance_repo.clone(),
            production_repo.clone(),
        );
        let finance_service = FinanceService::new(finance_repo.clone(), booking_repo.clone());
        let production_service = ProductionService::new(
            production_repo.clone(),
            crm_repo.clone(),
            booking_repo.clone(),
        );
        let insight_service = InsightService::new(
            insight_repo,
            production_repo,
            booking_repo.clone(),
        );
        let document_service = DocumentService::new(
            booking_repo,
            crm_repo,
            finance_repo,
            tenancy_repo,
        );

        Ok(Self {
            db_pool,
            jwt_secret,
            auth_service,
            tenancy_service,
            crm_service,
            booking_service,
            finance_service,
            production_service,
            insight_service,
            document_service,
        })
    }
}
