use actix_web::{App, HttpServer, middleware::Logger, web};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tutorank_core::{RankingPipeline, Settings};
use tutorank_server::{AppState, configure_routes, cors, static_files};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load()?;
    // Fail before binding rather than on the first request
    settings.validate_api_key()?;

    let bind_addr = settings.bind_addr();
    let static_dir = settings.static_dir.clone();
    let state = web::Data::new(AppState::new(RankingPipeline::from_settings(&settings)));

    info!("Tutorank server listening on {}", bind_addr);
    info!("Serving static files from {}", static_dir);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(cors())
            .wrap(Logger::default())
            .configure(configure_routes)
            .service(static_files(&static_dir))
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}
