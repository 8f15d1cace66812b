//! Resolve a display name for a single coordinate.

use mapcart::geocode::fallback_name;
use mapcart::geometry::LonLat;
use tracing::info;

use crate::error::CliError;
use crate::runner::CliRunner;

/// Reject coordinates outside WGS84 bounds.
pub fn validate(lat: f64, lon: f64) -> Result<LonLat, CliError> {
    if !(-90.0..=90.0).contains(&lat) {
        return Err(CliError::InvalidArgument(format!(
            "latitude {} is outside -90..90",
            lat
        )));
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(CliError::InvalidArgument(format!(
            "longitude {} is outside -180..180",
            lon
        )));
    }
    Ok(LonLat::new(lon, lat))
}

/// Run the `geocode` command.
pub fn run(lat: f64, lon: f64, offline: bool, verbose: bool) -> Result<(), CliError> {
    let center = validate(lat, lon)?;

    let runner = CliRunner::new(verbose)?;
    runner.log_startup("geocode");

    let resolver = runner.resolver(offline)?;
    let runtime = runner.runtime()?;
    let name = runtime.block_on(resolver.resolve(center));

    let source = if name == fallback_name(center) {
        "coordinates"
    } else {
        "geocoder"
    };
    info!(%center, name = %name, source, "Name resolved");
    println!("{}", name);
    Ok(())
}
