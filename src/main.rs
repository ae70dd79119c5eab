use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use sqlx::PgPool;

use todoserve::auth::{AuthMiddleware, TokenService};
use todoserve::config::Config;
use todoserve::routes;
use todoserve::store::{TodoStore, UserStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let pool = PgPool::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    // Shared application state, constructed once. The token service holds
    // the signing key for the lifetime of the process.
    let tokens = web::Data::new(TokenService::new(&config.jwt_secret));
    let users = web::Data::new(UserStore::new(pool.clone()));
    let todos = web::Data::new(TodoStore::new(pool.clone()));

    log::info!("Starting todoserve at {}", config.server_url());
    let bind_addr = (config.server_host.clone(), config.server_port);

    HttpServer::new(move || {
        App::new()
            .app_data(tokens.clone())
            .app_data(users.clone())
            .app_data(todos.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(routes::health::health)
            .service(
                web::scope("/api")
                    .wrap(AuthMiddleware)
                    .configure(routes::config),
            )
    })
    .bind(bind_addr)?
    .run()
    .await
}
