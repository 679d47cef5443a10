use sea_orm::DatabaseConnection;

use crate::server::service::guide::GuideClient;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub guide_client: GuideClient,
}
