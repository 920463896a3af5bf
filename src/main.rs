use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use car_rental_backend::config::environment::EnvironmentConfig;
use car_rental_backend::database;
use car_rental_backend::routes::create_api_router;
use car_rental_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenvy::dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Car Rental Backend");
    info!("=====================");

    let config = EnvironmentConfig::from_env();

    // Inicializar base de datos y aplicar migraciones
    let pool = match database::create_pool(&config.database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(e);
        }
    };
    database::run_migrations(&pool).await?;

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let app = create_api_router(AppState::new(pool, config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /test - Endpoint de prueba");
    info!("👤 Clients:");
    info!("   GET    /api/clients - Listar clientes");
    info!("   POST   /api/clients - Crear cliente");
    info!("   DELETE /api/clients/:id - Eliminar cliente (si no tiene rentals pendientes)");
    info!("🚙 Vehicles:");
    info!("   GET    /api/vehicles - Listar vehículos");
    info!("   POST   /api/vehicles - Crear vehículo");
    info!("   DELETE /api/vehicles/:id - Eliminar vehículo (si no tiene rentals pendientes)");
    info!("📋 Rentals:");
    info!("   GET    /api/rentals - Listar rentals con cliente y vehículo");
    info!("   POST   /api/rentals - Crear rental (valida fechas y disponibilidad)");
    info!("   DELETE /api/rentals/:id - Cancelar rental (soft-cancel)");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
