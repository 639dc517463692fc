pub mod reconcile;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{Auth, HttpClient};
use crate::models::{Folder, Profile, TvShow};
use reconcile::Reconciliation;
use tracing::{debug, error, info, instrument};

#[derive(Debug, Clone)]
pub struct SonarrClient {
    http: HttpClient,
    base_url: String,
    max_results: usize,
}

impl SonarrClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let base_url = config.api_url();

        let basic = config
            .has_credentials()
            .then(|| (config.username.clone(), config.password.clone()));
        let auth = Auth {
            api_key: config.api_key.clone(),
            basic,
        };

        let http = HttpClient::new(&base_url, auth)?;

        Ok(Self {
            http,
            base_url,
            max_results: config.max_results,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    #[instrument(skip(self))]
    pub async fn search_shows(&self, term: &str) -> Result<Vec<TvShow>> {
        let mut shows: Vec<TvShow> = self
            .http
            .get_json("series/lookup", &[("term", term)])
            .await?;

        debug!("Lookup returned {} shows", shows.len());
        shows.truncate(self.max_results);
        Ok(shows)
    }

    #[instrument(skip(self))]
    pub async fn get_folders(&self) -> Result<Vec<Folder>> {
        self.http.get_json("rootfolder", &[]).await
    }

    /// Lists quality profiles from `path` (`profile` on v2, `qualityprofile`
    /// on v3).
    #[instrument(skip(self))]
    pub async fn get_profile(&self, path: &str) -> Result<Vec<Profile>> {
        self.http.get_json(path, &[]).await
    }

    #[instrument(skip(self))]
    pub async fn get_tv_shows(&self) -> Result<Vec<TvShow>> {
        self.http.get_json("series", &[]).await
    }

    /// Adds `show`, or monitors more of its seasons if the catalog already
    /// has an entry with the same TVDB id.
    #[instrument(skip(self, show), fields(title = %show.title, tvdb_id = show.tvdb_id))]
    pub async fn add_tv_show(
        &self,
        show: &TvShow,
        seasons: &[i32],
        quality_profile_id: i32,
        root_folder_path: &str,
    ) -> Result<TvShow> {
        let result = self
            .reconcile_and_write(show, seasons, quality_profile_id, root_folder_path)
            .await;

        if let Err(e) = &result {
            error!("Failed to add series '{}': {}", show.title, e);
        }

        result
    }

    async fn reconcile_and_write(
        &self,
        show: &TvShow,
        seasons: &[i32],
        quality_profile_id: i32,
        root_folder_path: &str,
    ) -> Result<TvShow> {
        let catalog = self.get_tv_shows().await?;

        match reconcile::reconcile(show, &catalog, seasons, quality_profile_id, root_folder_path) {
            Reconciliation::Update(updated) => {
                info!(
                    "Series '{}' (TVDB: {}) already exists in Sonarr, updating monitored seasons",
                    updated.title, updated.tvdb_id
                );
                self.http.put_json("series", &updated).await
            }
            Reconciliation::Create(request) => {
                info!("Adding series to Sonarr: {}", request.title);
                self.http.post_json("series", &request).await
            }
        }
    }
}
