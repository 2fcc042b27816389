pub mod actions;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;
pub mod validation;

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use actions::auth::CredentialVerifier;
use infrastructure::cache::PathCache;
use infrastructure::store::{DieselCustomerStore, DieselInvoiceStore};

pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) {
    let mut conn = pool.get().expect("Failed to get DB connection for migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run database migrations");
}

/// Shared per-request state: the two stores, the listing cache, and the
/// credential verifier. Cache and verifier are injected so tests can
/// observe invalidations and stub out authentication.
pub struct AppState {
    pub invoices: DieselInvoiceStore,
    pub customers: DieselCustomerStore,
    pub cache: Arc<PathCache>,
    pub verifier: Arc<dyn CredentialVerifier>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::invoices::create_invoice,
        handlers::invoices::update_invoice,
        handlers::invoices::delete_invoice,
        handlers::customers::create_customer,
        handlers::customers::update_customer,
        handlers::customers::delete_customer,
        handlers::auth::login,
    ),
    components(schemas(actions::ActionFailure, actions::auth::Credentials)),
    tags(
        (name = "invoices", description = "Invoice form actions"),
        (name = "customers", description = "Customer form actions"),
        (name = "auth", description = "Authentication"),
    )
)]
struct ApiDoc;

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    pool: DbPool,
    cache: Arc<PathCache>,
    verifier: Arc<dyn CredentialVerifier>,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let state = web::Data::new(AppState {
        invoices: DieselInvoiceStore::new(pool.clone()),
        customers: DieselCustomerStore::new(pool),
        cache,
        verifier,
    });

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .service(
                web::scope("/dashboard")
                    .service(
                        web::scope("/invoices")
                            .route("", web::post().to(handlers::invoices::create_invoice))
                            .route("/{id}", web::post().to(handlers::invoices::update_invoice))
                            .route(
                                "/{id}/delete",
                                web::post().to(handlers::invoices::delete_invoice),
                            ),
                    )
                    .service(
                        web::scope("/customers")
                            .route("", web::post().to(handlers::customers::create_customer))
                            .route("/{id}", web::post().to(handlers::customers::update_customer))
                            .route(
                                "/{id}/delete",
                                web::post().to(handlers::customers::delete_customer),
                            ),
                    ),
            )
            .route("/login", web::post().to(handlers::auth::login))
    })
    .bind((host.to_string(), port))?
    .run())
}
