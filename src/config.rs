use std::{collections::HashMap, fs, time::Duration};

use directories::UserDirs;

use crate::{error::Error, Result};

pub static DEFAULT_BASE_URL: &str = "https://ksk.moe";

/// The site allows 40 requests per minute; one every two seconds keeps us
/// comfortably under that.
pub const DEFAULT_WAIT: Duration = Duration::from_secs(2);

#[derive(Clone, Debug, Default)]
pub struct Configuration {
    config: HashMap<Key, String>,
}

impl Configuration {
    /// Reads `~/.koushoku.conf`.
    ///
    /// Should there be no configuration file, a blank configuration provider
    /// will be produced.
    pub fn init() -> Self {
        let text = UserDirs::new()
            .map(|dirs| dirs.home_dir().join(".koushoku.conf"))
            .and_then(|conf| fs::read_to_string(conf).ok());

        text.map(|text| Configuration {
            config: read_config(&text),
        })
        .unwrap_or_default()
    }

    pub fn get_config(&self, key: Key) -> Result<&str> {
        self.config
            .get(&key)
            .map(AsRef::as_ref)
            .ok_or(Error::Configuration(key))
    }

    pub fn base_url(&self) -> &str {
        self.get_config(Key::BaseUrl).unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.get_config(Key::UserAgent).ok()
    }

    /// A malformed `wait` entry falls back to the default rather than failing.
    pub fn wait(&self) -> Duration {
        self.get_config(Key::Wait)
            .ok()
            .and_then(|secs| secs.trim().parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_WAIT)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Key {
    BaseUrl,
    UserAgent,
    Wait,
}

impl Key {
    fn from_identifier(identifier: &str) -> Option<Self> {
        match identifier {
            "base_url" => Some(Key::BaseUrl),
            "user_agent" => Some(Key::UserAgent),
            "wait" => Some(Key::Wait),
            _ => None,
        }
    }
}

fn read_config(text: &str) -> HashMap<Key, String> {
    text.lines()
        .filter_map(|line| {
            if line.is_empty() || line.starts_with('#') {
                return None;
            }

            // Values may themselves hold '=' (user agents, urls with queries).
            let (key, value) = line.split_once('=')?;
            Key::from_identifier(key.trim()).map(|key| (key, value.trim().to_string()))
        })
        .collect()
}
