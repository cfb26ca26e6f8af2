//! FFI library initialization

/// Initialize the library
///
/// Installs `env_logger` (configured through `RUST_LOG`) unless a logger is
/// already set. Safe to call more than once.
#[no_mangle]
pub extern "C" fn ipatch_init() {
    if env_logger::try_init().is_err() {
        log::debug!("logger already initialized");
    }
    log::info!("libInstPatch {} initialized", crate::VERSION);
}

