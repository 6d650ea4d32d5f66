use once_cell::sync::Lazy;
use serde::Deserialize;

use libs::util;

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub backend_port: u16,
    pub backend_ipv4_address: String,
    pub backend_seed_file: String,
    pub prometheus_port: u16,
    pub prometheus_ipv4_address: String,
    pub prometheus_refresh_interval: u64,
    pub legacy_status_codes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_port: 8080,
            backend_ipv4_address: "0.0.0.0".to_string(),
            backend_seed_file: "data/pictures.json".to_string(),
            prometheus_port: 9090,
            prometheus_ipv4_address: "0.0.0.0".to_string(),
            prometheus_refresh_interval: 15,
            legacy_status_codes: true,
        }
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    let mut config = envy::from_env::<Config>()
        .unwrap_or_else(|err| panic!("Failed to load configuration from env: {:#?}", err));

    let config_dir = util::get_config_dir()
        .unwrap_or_else(|err| panic!("Failed to prepare config directory: {err}"));

    // update the config with the full path
    config.backend_seed_file = util::resolve_path(&config_dir, &config.backend_seed_file)
        .to_string_lossy()
        .into_owned();

    config
});
