// src/main.rs

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::middleware::{auth::auth_guard, tenancy::org_guard};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Rotas de autenticação (públicas)
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login));

    // Rotas de usuário (protegidas pelo middleware de auth)
    let user_routes = Router::new()
        .route("/me", get(handlers::auth::get_me))
        .route("/me/organizations", get(handlers::auth::get_my_organizations))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Criação/listagem de estúdios exige só auth (ainda não há tenancy)
    let org_routes = Router::new()
        .route(
            "/",
            post(handlers::tenancy::create_organization)
                .get(handlers::tenancy::list_my_organizations),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Todas as rotas abaixo são org-scoped: auth_guard roda primeiro,
    // depois o org_guard confirma a membership do x-org-id.
    // (camadas executam de fora para dentro; a última adicionada roda antes)
    let org_layers = |router: Router<AppState>| {
        router
            .layer(axum_middleware::from_fn_with_state(
                app_state.clone(),
                org_guard,
            ))
            .layer(axum_middleware::from_fn_with_state(
                app_state.clone(),
                auth_guard,
            ))
    };

    let client_routes = org_layers(
        Router::new()
            .route(
                "/",
                post(handlers::crm::create_client).get(handlers::crm::list_clients),
            )
            .route("/search", get(handlers::crm::search_clients))
            .route(
                "/{id}",
                put(handlers::crm::update_client).delete(handlers::crm::delete_client),
            ),
    );

    let crew_routes = org_layers(Router::new().route(
        "/",
        post(handlers::crm::create_crew_member).get(handlers::crm::list_crew_members),
    ));

    let booking_routes = org_layers(
        Router::new()
            .route(
                "/",
                post(handlers::bookings::create_booking).get(handlers::bookings::list_bookings),
            )
            .route(
                "/{id}",
                get(handlers::bookings::get_booking_detail)
                    .put(handlers::bookings::update_booking)
                    .delete(handlers::bookings::delete_booking),
            )
            .route("/{id}/status", post(handlers::bookings::transition_booking_status))
            .route("/{id}/invoice", get(handlers::bookings::get_booking_invoice))
            .route(
                "/{id}/payments",
                post(handlers::finance::add_received).get(handlers::finance::list_received),
            )
            .route(
                "/{id}/schedules",
                post(handlers::finance::add_schedule).get(handlers::finance::list_schedules),
            )
            .route(
                "/{id}/expenses",
                post(handlers::finance::add_expense).get(handlers::finance::list_expenses),
            )
            .route(
                "/{id}/shoots",
                post(handlers::production::create_shoot).get(handlers::production::list_shoots),
            )
            .route(
                "/{id}/deliverables",
                post(handlers::production::create_deliverable)
                    .get(handlers::production::list_deliverables),
            )
            .route(
                "/{id}/deliverables/grouped",
                get(handlers::production::get_deliverables_grouped),
            )
            .route(
                "/{id}/tasks",
                post(handlers::tasks::create_task).get(handlers::tasks::list_tasks),
            ),
    );

    let payment_routes =
        org_layers(Router::new().route("/{id}", delete(handlers::finance::delete_received)));
    let schedule_routes =
        org_layers(Router::new().route("/{id}", delete(handlers::finance::delete_schedule)));
    let expense_routes =
        org_layers(Router::new().route("/{id}", delete(handlers::finance::delete_expense)));

    let shoot_routes = org_layers(Router::new().route(
        "/{id}",
        put(handlers::production::update_shoot).delete(handlers::production::delete_shoot),
    ));

    let deliverable_routes = org_layers(
        Router::new().route(
            "/{id}/status",
            post(handlers::production::update_deliverable_status),
        ),
    );

    let task_routes = org_layers(
        Router::new()
            .route("/board", get(handlers::tasks::get_task_board))
            .route("/grouped", get(handlers::tasks::get_tasks_grouped))
            .route("/{id}/status", post(handlers::tasks::update_task_status)),
    );

    let assignment_routes = org_layers(
        Router::new()
            .route("/", post(handlers::production::assign_crew))
            .route("/{id}", delete(handlers::production::unassign_crew)),
    );

    let insight_routes =
        org_layers(Router::new().route("/overview", get(handlers::insights::get_overview)));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/auth", auth_routes)
        .nest("/api/users", user_routes)
        .nest("/api/orgs", org_routes)
        .nest("/api/clients", client_routes)
        .nest("/api/crew", crew_routes)
        .nest("/api/bookings", booking_routes)
        .nest("/api/payments", payment_routes)
        .nest("/api/schedules", schedule_routes)
        .nest("/api/expenses", expense_routes)
        .nest("/api/shoots", shoot_routes)
        .nest("/api/deliverables", deliverable_routes)
        .nest("/api/tasks", task_routes)
        .nest("/api/assignments", assignment_routes)
        .nest("/api/insights", insight_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}
