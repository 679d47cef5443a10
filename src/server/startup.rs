use crate::server::{config::Config, error::Error, service::guide::GuideClient};

/// Build and configure the guide chat-completion client with the provided credentials
pub fn build_guide_client(config: &Config) -> Result<GuideClient, Error> {
    let guide_client = GuideClient::new(
        &config.guide_api_url,
        &config.guide_api_key,
        &config.guide_model,
    )
    .map_err(|e| Error::InternalError(format!("Failed to build guide client: {e}")))?;

    Ok(guide_client)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
