//! CLI runner for common setup.
//!
//! Loads configuration, initializes logging, and builds the pieces a command
//! needs to drive a session: the async runtime and the name resolver.

use std::time::Duration;

use mapcart::cart::CartStore;
use mapcart::config::ConfigFile;
use mapcart::geocode::{
    GeocodeError, NameResolver, NominatimGeocoder, OfflineGeocoder, ReverseGeocoder,
};
use mapcart::logging::{init_logging, LoggingGuard};
use mapcart::surface::HeadlessSurface;
use mapcart::workflow::SelectionWorkflow;
use tracing::info;

use crate::error::CliError;

/// Geocoder chosen at runtime from flags and configuration.
pub enum CliGeocoder {
    Nominatim(NominatimGeocoder),
    Offline(OfflineGeocoder),
}

impl ReverseGeocoder for CliGeocoder {
    async fn reverse_lookup(&self, lat: f64, lon: f64) -> Result<String, GeocodeError> {
        match self {
            CliGeocoder::Nominatim(g) => g.reverse_lookup(lat, lon).await,
            CliGeocoder::Offline(g) => g.reverse_lookup(lat, lon).await,
        }
    }
}

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Keeps the log writer alive while the runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    config: ConfigFile,
}

impl CliRunner {
    /// Load config and initialize logging.
    ///
    /// With `verbose`, log events are mirrored to stdout as well as the file.
    pub fn new(verbose: bool) -> Result<Self, CliError> {
        let config = ConfigFile::load()?;

        let logging_guard = init_logging(&config.logging.directory, &config.logging.file, verbose)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("mapcart v{}", mapcart::VERSION);
        info!("mapcart CLI: {} command", command);
    }

    /// Build a single-threaded runtime for the session loop and lookups.
    pub fn runtime(&self) -> Result<tokio::runtime::Runtime, CliError> {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(CliError::Runtime)
    }

    /// Build the name resolver.
    ///
    /// Lookups are disabled by `--offline` or by `[geocoder] enabled = false`.
    pub fn resolver(&self, offline: bool) -> Result<NameResolver<CliGeocoder>, CliError> {
        let config = self.config.geocoder_config();

        let geocoder = if offline || !config.enabled() {
            info!(offline, enabled = config.enabled(), "Reverse geocoding disabled");
            CliGeocoder::Offline(OfflineGeocoder)
        } else {
            let geocoder = NominatimGeocoder::new(&config)?;
            info!(url = geocoder.url(), "Using reverse geocoder");
            CliGeocoder::Nominatim(geocoder)
        };

        Ok(NameResolver::new(
            geocoder,
            Duration::from_secs(config.timeout_secs()),
        ))
    }

    /// A workflow over a headless surface, styled and named from config.
    pub fn headless_workflow(&self) -> SelectionWorkflow<HeadlessSurface> {
        SelectionWorkflow::with_parts(
            CartStore::new(),
            HeadlessSurface::new(),
            self.config.style_palette(),
            self.config.placeholder_namer(),
        )
    }
}
