//! Shared plumbing for the travel workspace: logging setup and env loading.

pub mod utils;

/// Load `.env` (if present) and initialize the default tracing subscriber.
/// Hosts embedding the stores call this once at startup.
pub fn init() {
    dotenvy::dotenv().ok();
    utils::logging::init_logging_default();
}
