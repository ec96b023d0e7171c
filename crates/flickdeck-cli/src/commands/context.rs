use color_eyre::Result;
use flickdeck_catalog::CatalogClient;
use flickdeck_config::{Config, CredentialStore, PathManager};
use flickdeck_store::{RestStore, SessionHandle};

/// Everything a command needs: loaded config, the catalog client, the
/// remote store and the restored session.
pub struct AppContext {
    pub config: Config,
    pub catalog: CatalogClient,
    pub store: RestStore,
    pub session: SessionHandle,
    pub paths: PathManager,
}

impl AppContext {
    pub fn load() -> Result<Self> {
        let paths = PathManager::default();
        let config = Config::load(&paths.config_file()).map_err(|e| {
            color_eyre::eyre::eyre!(
                "No usable config at {}: {}. Create it with [catalog] api_key and [store] url/anon_key",
                paths.config_file().display(),
                e
            )
        })?;

        let mut creds = CredentialStore::new(paths.credentials_file());
        creds
            .load()
            .map_err(|e| color_eyre::eyre::eyre!("Failed to load credentials: {}", e))?;

        let session = match creds.get_session_user_id() {
            Some(user_id) => SessionHandle::with_user(user_id.clone()),
            None => SessionHandle::new(),
        };

        let catalog = CatalogClient::new(&config.catalog);
        let store = match creds.get_session_access_token() {
            Some(token) => RestStore::new(&config.store).with_access_token(token.clone()),
            None => RestStore::new(&config.store),
        };

        Ok(Self {
            config,
            catalog,
            store,
            session,
            paths,
        })
    }

    pub fn credentials(&self) -> Result<CredentialStore> {
        let mut creds = CredentialStore::new(self.paths.credentials_file());
        creds
            .load()
            .map_err(|e| color_eyre::eyre::eyre!("Failed to load credentials: {}", e))?;
        Ok(creds)
    }
}
