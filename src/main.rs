use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use pushkind_shop::config::ServerConfig;
use pushkind_shop::db::{establish_connection_pool, run_migrations};
use pushkind_shop::repository::DieselRepository;
use pushkind_shop::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let config = ServerConfig::from_env();

    let pool = match establish_connection_pool(&config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_migrations(&pool) {
        log::error!("Failed to prepare database schema: {e}");
        std::process::exit(1);
    }

    let repo = DieselRepository::new(pool);

    log::info!(
        "Serving {} on {}:{}",
        config.database_url,
        config.address,
        config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .configure(routes::configure)
    })
    .bind((config.address.clone(), config.port))?
    .run()
    .await
}
