//! User configuration.
//!
//! `~/.mapcart/config.ini` is read into a [`ConfigFile`], whose sections
//! convert into the typed component configs used elsewhere in the crate:
//!
//! ```no_run
//! use mapcart::config::ConfigFile;
//!
//! let config = ConfigFile::load()?;
//! let geocoder = config.geocoder_config();
//! let palette = config.style_palette();
//! # let _ = (geocoder, palette);
//! # Ok::<(), mapcart::config::ConfigFileError>(())
//! ```

mod file;
mod parser;
mod settings;
mod writer;

pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{ConfigFile, GeocoderSettings, LoggingSettings, NamingSettings, StyleSettings};
