use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use portfolio_content::{
    export::bundle_writer::export_bundle,
    graceful_shutdown::shutdown_signal,
    middlewares::dotfiles::DenyDotfiles,
    routes::configure_routes,
    settings::AppConfig,
    telemetry::logging::init_tracing,
    AppCatalogHandler, AppState
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = match AppConfig::new() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(config.log_format);
    tracing::info!("Loaded configuration: {:?}", config);

    let catalog = AppCatalogHandler::from_config(&config);
    let bundle = catalog.load().await?;

    export_bundle(&bundle, &config.out_dir, config.empty_out_dir).await?;

    if !config.serve {
        return Ok(());
    }

    let app_state = web::Data::new(AppState::new(&config, bundle));
    let deny_dotfiles = config.deny_dotfiles;
    let server_addr = config.server_addr();

    tracing::info!(
        "🚀 Starting preview server v{} on http://{}",
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(DenyDotfiles::new(deny_dotfiles))
            .wrap(TracingLogger::default())
            .configure(configure_routes)
    })
    .workers(config.worker_count)
    .bind(server_addr)?
    .run();

    tokio::select! {
        res = server => res?,
        _ = shutdown_signal() => {},
    }

    Ok(())
}
