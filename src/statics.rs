use std::sync::OnceLock;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::consts::{HEADER_OFFSET, MOUNTPOINT, TITLE_BASE};

/// The global config.
///
/// The host page passes the config to [`run`]. Every field is optional; missing fields take
/// the compile-time defaults from [`consts`].
///
/// [`run`]: crate::run
/// [`consts`]: crate::consts
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The id of the element the app is mounted at.
    pub mountpoint: Box<str>,
    /// The document title.
    pub title: Box<str>,
    /// Height of the fixed page header in pixels. A section counts as reached once its top
    /// edge is within this distance of the viewport top.
    pub header_offset: f64,
    pub log_level: LevelFilter,
}

impl Config {
    #[inline]
    pub fn mountpoint(&self) -> &str {
        &self.mountpoint
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn header_offset(&self) -> f64 {
        self.header_offset
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mountpoint: MOUNTPOINT.into(),
            title: TITLE_BASE.into(),
            header_offset: HEADER_OFFSET,
            log_level: LevelFilter::Info,
        }
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Returns the global config, or the default config if [`set_config`] was never called.
#[inline]
pub fn config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

/// Sets the global config. Only the first call has an effect; returns `false` if the config
/// was already set.
#[inline]
pub(crate) fn set_config(config: Config) -> bool {
    CONFIG.set(config).is_ok()
}
