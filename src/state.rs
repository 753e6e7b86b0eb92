use crate::config::AppConfig;
use crate::store::Store;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<Store>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let store = Arc::new(Store::open(&config.data_dir).await?);
        Ok(Self::from_parts(config, store))
    }

    pub fn from_parts(config: Arc<AppConfig>, store: Arc<Store>) -> Self {
        Self { config, store }
    }

    /// State backed by a throwaway data directory.
    #[cfg(test)]
    pub async fn fake(dir: &std::path::Path) -> Self {
        let config = Arc::new(AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            data_dir: dir.to_path_buf(),
        });
        let store = Arc::new(Store::open(dir).await.expect("open temp store"));
        Self::from_parts(config, store)
    }
}
