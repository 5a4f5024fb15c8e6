use std::env;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by stored objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
    fn version(&self) -> i64;
}


// Configuration abstracts config options for the lending service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub page_size: usize,
    pub log_level: String,
    pub seed_titles: usize,
    pub seed_requesters: usize,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            page_size: 50,
            log_level: "info".to_string(),
            seed_titles: 10,
            seed_requesters: 20,
        }
    }

    // from_env starts from the defaults of the branch and applies LENDING_* overrides
    pub fn from_env(branch_id: &str) -> Self {
        let mut config = Configuration::new(
            env::var("LENDING_BRANCH_ID").unwrap_or_else(|_| branch_id.to_string()).as_str());
        config.page_size = parse_env("LENDING_PAGE_SIZE", config.page_size);
        config.seed_titles = parse_env("LENDING_SEED_TITLES", config.seed_titles);
        config.seed_requesters = parse_env("LENDING_SEED_REQUESTERS", config.seed_requesters);
        if let Ok(level) = env::var("LENDING_LOG_LEVEL") {
            config.log_level = level;
        }
        config
    }
}

fn parse_env<T: FromStr>(key: &str, default: T) -> T {
    env::var(key).ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}
