//! Console logging setup.

use tracing::Level;
use tracing_subscriber::prelude::*;

/// Installs a compact stderr logger.
///
/// Library warnings (such as skipped characters) are always shown;
/// `verbose` additionally enables layout debug output.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = tracing_subscriber::filter::Targets::new()
        .with_target("pixeltext_render", level)
        .with_target("pixeltext_cli", level)
        .with_default(Level::WARN);

    let format = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .init();
}
