//! Client for the Sonarr TV show manager.
//!
//! Search the lookup endpoint, list root folders, quality profiles and tracked
//! series, and add a series (or switch on more of its seasons) with
//! [`SonarrClient::add_tv_show`].

pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod sonarr;

pub use config::{ClientConfig, Configuration};
pub use error::SonarrError;
pub use models::{AddShowOptions, AddShowRequest, Folder, Image, Profile, Season, TvShow};
pub use sonarr::SonarrClient;
