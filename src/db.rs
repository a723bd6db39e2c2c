// src/db.rs

pub mod booking_repo;
pub mod crm_repo;
pub mod finance_repo;
pub mod insight_repo;
pub mod production_repo;
pub mod tenancy_repo;
pub mod user_repo;

pub use booking_repo::BookingRepository;
pub use crm_repo::CrmRepository;
pub use finance_repo::FinanceRepository;
pub use insight_repo::InsightRepository;
pub use production_repo::ProductionRepository;
pub use tenancy_repo::TenancyRepository;
pub use user_repo::UserRepository;
