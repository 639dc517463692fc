//! Decides whether adding a show updates an existing catalog entry or creates
//! a new one, and which seasons end up monitored.

use crate::models::{AddShowOptions, AddShowRequest, Season, TvShow};

/// The write `add_tv_show` has to issue.
#[derive(Debug, Clone, PartialEq)]
pub enum Reconciliation {
    /// PUT the existing entry with the requested seasons switched on.
    Update(TvShow),
    /// POST a new entry with only the requested seasons monitored.
    Create(AddShowRequest),
}

/// First catalog entry with the same TVDB id. Internal ids are not compared.
pub fn find_existing(catalog: &[TvShow], tvdb_id: i32) -> Option<&TvShow> {
    catalog.iter().find(|show| show.tvdb_id == tvdb_id)
}

/// Returns a copy of `seasons` with every requested season monitored.
///
/// Seasons that are not requested keep their flag. Requested numbers that do
/// not exist in `seasons` are ignored.
pub fn monitor_requested(seasons: &[Season], requested: &[i32]) -> Vec<Season> {
    seasons
        .iter()
        .map(|season| Season {
            monitored: season.monitored || requested.contains(&season.season_number),
            ..season.clone()
        })
        .collect()
}

/// Like [`monitor_requested`], but every season that is not requested is
/// switched off first.
pub fn monitor_only_requested(seasons: &[Season], requested: &[i32]) -> Vec<Season> {
    let cleared: Vec<Season> = seasons
        .iter()
        .map(|season| Season {
            monitored: false,
            ..season.clone()
        })
        .collect();

    monitor_requested(&cleared, requested)
}

pub fn reconcile(
    candidate: &TvShow,
    catalog: &[TvShow],
    requested_seasons: &[i32],
    quality_profile_id: i32,
    root_folder_path: &str,
) -> Reconciliation {
    if let Some(existing) = find_existing(catalog, candidate.tvdb_id) {
        return Reconciliation::Update(TvShow {
            seasons: monitor_requested(&existing.seasons, requested_seasons),
            ..existing.clone()
        });
    }

    Reconciliation::Create(AddShowRequest {
        title: candidate.title.clone(),
        title_slug: candidate.title_slug.clone(),
        images: candidate.images.clone(),
        tvdb_id: candidate.tvdb_id,
        root_folder_path: root_folder_path.to_string(),
        monitored: true,
        year: candidate.year,
        seasons: monitor_only_requested(&candidate.seasons, requested_seasons),
        quality_profile_id,
        season_folder: true,
        add_options: AddShowOptions {
            search_for_missing_episodes: true,
        },
    })
}
