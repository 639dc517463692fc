use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A show as Sonarr returns it from `series` and `series/lookup`.
///
/// Fields this crate does not model are kept in `extra_fields` so a fetched
/// record can be sent back in a PUT without losing server-side data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TvShow {
    /// Absent on lookup results for shows that are not tracked yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(rename = "tvdbId", default)]
    pub tvdb_id: i32,
    pub title: String,
    #[serde(rename = "titleSlug", default)]
    pub title_slug: String,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(rename = "remotePoster", default, skip_serializing_if = "Option::is_none")]
    pub remote_poster: Option<String>,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub seasons: Vec<Season>,
    #[serde(flatten)]
    pub extra_fields: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    #[serde(rename = "seasonNumber")]
    pub season_number: i32,
    #[serde(default)]
    pub monitored: bool,
    #[serde(flatten)]
    pub extra_fields: Map<String, Value>,
}

impl Season {
    pub fn new(season_number: i32, monitored: bool) -> Self {
        Self {
            season_number,
            monitored,
            extra_fields: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    #[serde(rename = "coverType", default)]
    pub cover_type: String,
    #[serde(default)]
    pub url: String,
    #[serde(rename = "remoteUrl", default, skip_serializing_if = "Option::is_none")]
    pub remote_url: Option<String>,
    #[serde(flatten)]
    pub extra_fields: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub path: String,
    #[serde(rename = "freeSpace", default, skip_serializing_if = "Option::is_none")]
    pub free_space: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i32,
    pub name: String,
}

/// Body of the POST that starts tracking a new show.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddShowRequest {
    pub title: String,
    #[serde(rename = "titleSlug")]
    pub title_slug: String,
    pub images: Vec<Image>,
    #[serde(rename = "tvdbId")]
    pub tvdb_id: i32,
    #[serde(rename = "rootFolderPath")]
    pub root_folder_path: String,
    pub monitored: bool,
    pub year: i32,
    pub seasons: Vec<Season>,
    #[serde(rename = "qualityProfileId")]
    pub quality_profile_id: i32,
    #[serde(rename = "seasonFolder")]
    pub season_folder: bool,
    #[serde(rename = "addOptions")]
    pub add_options: AddShowOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddShowOptions {
    #[serde(rename = "searchForMissingEpisodes")]
    pub search_for_missing_episodes: bool,
}
