use std::path::PathBuf;

use prayer_times::UpstreamSettings;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct RegionSettings {
    pub data_file: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub upstream: UpstreamSettings,
    pub regions: RegionSettings,
}
