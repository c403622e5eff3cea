pub mod utils;

/// Load `.env` if present, then initialize default logging.
/// Convenience for binaries and integration test setups.
pub fn init() {
    let _ = dotenvy::dotenv();
    utils::logging::init_logging_default();
}
