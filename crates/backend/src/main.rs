pub mod domain;
pub mod handlers;
pub mod shared;
pub mod system;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::http::{header, Method};
    use axum::middleware;
    use axum::{
        routing::{get, post},
        Router,
    };
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::ServeDir;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Log directory for the file layer
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backend.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                // Keep SQL noise down, keep application logs
                "info,sqlx=warn,sea_orm=warn".into()
            }),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    let config = shared::config::load_config()?;
    let db_path = shared::config::get_database_path(&config)?;
    let db = shared::data::db::connect(&db_path.to_string_lossy()).await?;
    shared::data::db::ensure_schema(&db).await?;

    // One context for the whole process; handlers receive it through state
    let ctx = shared::data::context::AppContext::new(db).await?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    let require_auth =
        middleware::from_fn_with_state(ctx.clone(), system::auth::middleware::require_auth);

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM AUTH ROUTES (PUBLIC)
        // ========================================
        .route(
            "/api/system/auth/login",
            post(system::handlers::auth::login),
        )
        .route(
            "/api/system/auth/refresh",
            post(system::handlers::auth::refresh),
        )
        .route(
            "/api/system/auth/logout",
            post(system::handlers::auth::logout),
        )
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_user).layer(require_auth.clone()),
        )
        // ========================================
        // COLLECTION ROUTES (PROTECTED)
        // ========================================
        .route(
            "/api/expenses",
            get(handlers::a001_expense::list_all)
                .post(handlers::a001_expense::create)
                .layer(require_auth.clone()),
        )
        .route(
            "/api/expenses/subscribe",
            get(handlers::a001_expense::subscribe),
        )
        .route(
            "/api/eggs",
            get(handlers::a002_egg_log::list_all)
                .post(handlers::a002_egg_log::create)
                .layer(require_auth.clone()),
        )
        .route("/api/eggs/subscribe", get(handlers::a002_egg_log::subscribe))
        .route(
            "/api/feed_consumption",
            get(handlers::a003_feed_log::list_all)
                .post(handlers::a003_feed_log::create)
                .layer(require_auth.clone()),
        )
        .route(
            "/api/feed_consumption/subscribe",
            get(handlers::a003_feed_log::subscribe),
        )
        .route(
            "/api/employees",
            get(handlers::a004_employee::list_all)
                .post(handlers::a004_employee::create)
                .layer(require_auth.clone()),
        )
        .route(
            "/api/employees/subscribe",
            get(handlers::a004_employee::subscribe),
        )
        .route(
            "/api/attendance",
            get(handlers::a005_attendance::list_all)
                .post(handlers::a005_attendance::create)
                .layer(require_auth.clone()),
        )
        .route(
            "/api/attendance/subscribe",
            get(handlers::a005_attendance::subscribe),
        )
        .route(
            "/api/mortality",
            get(handlers::a006_mortality_log::list_all)
                .post(handlers::a006_mortality_log::create)
                .layer(require_auth.clone()),
        )
        .route(
            "/api/mortality/subscribe",
            get(handlers::a006_mortality_log::subscribe),
        )
        .fallback_service(ServeDir::new("dist"))
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors)
        .with_state(ctx);

    let addr: SocketAddr = ([0, 0, 0, 0], config.server.port).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    config.server.port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", config.server.port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
