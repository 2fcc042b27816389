use std::env;
use std::sync::Arc;

use dashboard_service::actions::auth::EnvCredentialVerifier;
use dashboard_service::infrastructure::cache::PathCache;
use dashboard_service::{build_server, create_pool, run_migrations};
use dotenvy::dotenv;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .expect("PORT must be a valid number");

    // Single seeded dashboard account; a real identity provider sits
    // behind the CredentialVerifier trait.
    let login_email = env::var("DASHBOARD_EMAIL").unwrap_or_else(|_| "user@nextmail.com".to_string());
    let login_password = env::var("DASHBOARD_PASSWORD").unwrap_or_else(|_| "123456".to_string());

    let pool = create_pool(&database_url);
    run_migrations(&pool);

    let cache = Arc::new(PathCache::new());
    let verifier = Arc::new(EnvCredentialVerifier::new(login_email, login_password));

    log::info!("Starting server at http://{}:{}", host, port);

    build_server(pool, cache, verifier, &host, port)?.await
}
