use crate::{config, config::Settings, db::Database, error, info, success};

pub async fn check(ping: bool) {
    info!("API base URL: {}", config::api_base_url());

    let settings = match Settings::from_env() {
        Ok(s) => s,
        Err(e) => error!("Invalid server configuration. Err: {}", e),
    };

    info!("Frontend URL: {}", settings.frontend_url);
    info!("Backend URL:  {}", settings.backend_url);
    info!("Bind address: {}", settings.server_address);
    info!("Debug:        {}", settings.debug);

    if ping {
        let db = match Database::global(&settings) {
            Ok(db) => db,
            Err(e) => error!("Cannot set up database pool. Err: {}", e),
        };
        if let Err(e) = db.ping().await {
            error!("Database is not reachable. Err: {}", e);
        }
        success!("Database is reachable.");
    }

    success!("Server configuration is valid.");
}
