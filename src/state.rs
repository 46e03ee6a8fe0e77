use crate::config::api_key::ApiKeyConfig;
use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;
use crate::config::jwt::JwtConfig;
use crate::modules::revocation::RevocationStore;

#[derive(Clone, Debug)]
pub struct AppState {
    pub revocation: RevocationStore,
    pub jwt_config: JwtConfig,
    pub api_config: ApiKeyConfig,
    pub cors_config: CorsConfig,
}

pub async fn init_app_state() -> AppState {
    AppState {
        revocation: RevocationStore::new(init_db_pool().await),
        jwt_config: JwtConfig::from_env(),
        api_config: ApiKeyConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    }
}
