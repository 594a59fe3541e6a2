use std::env;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger, web};
use log::{error, info};

use blogapp_be::repositories::{BlogStore, MongoBlogStore};
use blogapp_be::storage::FileStore;
use blogapp_be::{AppState, config, routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    dotenv::dotenv().ok();

    let db = match config::get_mongo_database().await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to the document store: {}", e);
            std::process::exit(1);
        }
    };

    let upload_dir = env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string());
    let files = FileStore::new(&upload_dir);
    if let Err(e) = files.ensure_dir().await {
        error!("Failed to prepare upload directory {}: {}", upload_dir, e);
        std::process::exit(1);
    }

    let store: Arc<dyn BlogStore> = Arc::new(MongoBlogStore::new(&db));
    let state = web::Data::new(AppState { store, files });

    let allowed_origins = env::var("ALLOWED_ORIGINS").ok();

    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let bind_address = format!("0.0.0.0:{}", port);
    info!("Listening on port {}", port);

    HttpServer::new(move || {
        let cors = match &allowed_origins {
            None => Cors::permissive(),
            Some(origins) => {
                let mut cors = Cors::default()
                    .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                    .allowed_headers(vec!["authorization", "content-type", "accept"])
                    .max_age(3600);
                for origin in origins.split(',').map(|s| s.trim()).filter(|s| !s.is_empty()) {
                    cors = cors.allowed_origin(origin);
                }
                cors
            }
        };

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes)
    })
    .bind(&bind_address)?
    .run()
    .await
}
