pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::config::toml_config::WindowConfig;
pub use crate::core::duration::{parse_duration, parse_lookback};
pub use crate::core::id::{is_canonical_uuid, uuid};
pub use crate::core::timestamp::{dt_to_string, parse_date, TIMESTAMP_FORMAT};
pub use crate::core::window::QueryWindow;
pub use crate::domain::model::{DurationUnit, LookbackDuration};
pub use crate::utils::error::{Result, TimekitError};
