// src/services.rs

pub mod aggregation;
pub mod auth;
pub mod booking_service;
pub mod crm_service;
pub mod document_service;
pub mod finance_service;
pub mod insight_service;
pub mod production_service;
pub mod tenancy_service;

pub use auth::AuthService;
pub use booking_service::BookingService;
pub use crm_service::CrmService;
pub use document_service::DocumentService;
pub use finance_service::FinanceService;
pub use insight_service::InsightService;
pub use production_service::ProductionService;
pub use tenancy_service::TenancyService;
