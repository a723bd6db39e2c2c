// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,

        // --- Users ---
        handlers::auth::get_me,
        handlers::auth::get_my_organizations,

        // --- Tenancy ---
        handlers::tenancy::create_organization,
        handlers::tenancy::list_my_organizations,

        // --- CRM ---
        handlers::crm::create_client,
        handlers::crm::list_clients,
        handlers::crm::search_clients,
        handlers::crm::update_client,
        handlers::crm::delete_client,
        handlers::crm::create_crew_member,
        handlers::crm::list_crew_members,

        // --- BOOKINGS ---
        handlers::bookings::create_booking,
        handlers::bookings::list_bookings,
        handlers::bookings::get_booking_detail,
        handlers::bookings::update_booking,
        handlers::bookings::transition_booking_status,
        handlers::bookings::delete_booking,
        handlers::bookings::get_booking_invoice,

        // --- FINANCE ---
        handlers::finance::add_received,
        handlers::finance::list_received,
        handlers::finance::delete_received,
        handlers::finance::add_schedule,
        handlers::finance::list_schedules,
        handlers::finance::delete_schedule,
        handlers::finance::add_expense,
        handlers::finance::list_expenses,
        handlers::finance::delete_expense,

        // --- PRODUCTION ---
        handlers::production::create_shoot,
        handlers::production::list_shoots,
        handlers::production::update_shoot,
        handlers::production::delete_shoot,
        handlers::production::create_deliverable,
        handlers::production::list_deliverables,
        handlers::production::get_deliverables_grouped,
        handlers::production::update_deliverable_status,
        handlers::production::assign_crew,
        handlers::production::unassign_crew,

        // --- TASKS ---
        handlers::tasks::create_task,
        handlers::tasks::list_tasks,
        handlers::tasks::update_task_status,
        handlers::tasks::get_task_board,
        handlers::tasks::get_tasks_grouped,

        // --- Insights ---
        handlers::insights::get_overview,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::User,
            models::auth::RegisterUserPayload,
            models::auth::LoginUserPayload,
            models::auth::AuthResponse,

            // --- TENANCY ---
            models::tenancy::MemberRole,
            models::tenancy::Organization,
            models::tenancy::OrganizationMember,
            models::tenancy::UserOrganization,
            handlers::tenancy::CreateOrganizationPayload,

            // --- CRM ---
            models::crm::Client,
            models::crm::CrewMember,
            models::crm::AssignmentKind,
            models::crm::CrewAssignment,
            models::crm::AssignedCrew,
            handlers::crm::ClientPayload,
            handlers::crm::CreateCrewMemberPayload,

            // --- BOOKINGS ---
            models::bookings::BookingStatus,
            models::bookings::Booking,
            models::bookings::BookingDetail,
            models::bookings::ShootWithCrew,
            models::bookings::DeliverableWithCrew,
            models::bookings::TaskWithCrew,
            models::bookings::ExpenseWithCrew,
            handlers::bookings::CreateBookingPayload,
            handlers::bookings::UpdateBookingPayload,
            handlers::bookings::TransitionStatusPayload,

            // --- FINANCE ---
            models::finance::BillTo,
            models::finance::ReceivedAmount,
            models::finance::PaymentSchedule,
            models::finance::Expense,
            handlers::finance::AddReceivedPayload,
            handlers::finance::AddSchedulePayload,
            handlers::finance::AddExpensePayload,

            // --- PRODUCTION ---
            models::production::DeliverableStatus,
            models::production::Shoot,
            models::production::Deliverable,
            handlers::production::ShootPayload,
            handlers::production::CreateDeliverablePayload,
            handlers::production::UpdateDeliverableStatusPayload,
            handlers::production::AssignCrewPayload,

            // --- TASKS ---
            models::tasks::TaskStatus,
            models::tasks::TaskPriority,
            models::tasks::Task,
            handlers::tasks::CreateTaskPayload,
            handlers::tasks::UpdateTaskStatusPayload,

            // --- INSIGHTS (derivados) ---
            models::insights::StatusGroup<models::production::Deliverable>,
            models::insights::StatusGroup<models::tasks::Task>,
            models::insights::FinancialSummary,
            models::insights::MilestoneStatus,
            models::insights::Milestone,
            models::insights::DueBucket,
            models::insights::TaskBoardColumn,
            models::insights::BookingStatusCount,
            models::insights::OrgOverview,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação e Registro"),
        (name = "Users", description = "Dados do Usuário e Perfil"),
        (name = "Tenancy", description = "Gestão de Estúdios e Acesso"),
        (name = "CRM", description = "Clientes e Equipe"),
        (name = "Bookings", description = "Reservas e seu ciclo de vida"),
        (name = "Finance", description = "Pagamentos, Parcelas e Despesas"),
        (name = "Production", description = "Sessões, Entregas e Alocação de Equipe"),
        (name = "Tasks", description = "Tarefas internas e Quadro por Vencimento"),
        (name = "Insights", description = "Indicadores derivados do Estúdio")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
