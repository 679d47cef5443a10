use mockito::{Server, ServerGuard};
use sea_orm::Database;

use crate::server::{model::app::AppState, service::guide::GuideClient};

pub static TEST_GUIDE_MODEL: &str = "qwen-turbo";
static TEST_GUIDE_API_KEY: &str = "guide_api_key";

pub struct TestSetup {
    pub server: ServerGuard,
    pub state: AppState,
}

/// Returns an [`AppState`] backed by in-memory SQLite and a guide client
/// pointed at a mockito server, used across data and service tests.
pub async fn test_setup() -> TestSetup {
    let mock_server = Server::new_async().await;
    let mock_server_url = mock_server.url();

    let guide_client = GuideClient::new(&mock_server_url, TEST_GUIDE_API_KEY, TEST_GUIDE_MODEL)
        .expect("Failed to build guide client");

    let db = Database::connect("sqlite::memory:").await.unwrap();

    let state = AppState { db, guide_client };

    TestSetup {
        server: mock_server,
        state,
    }
}
