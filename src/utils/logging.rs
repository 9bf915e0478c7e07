/// Routes `log` records to the browser console on wasm and to stderr elsewhere.
///
/// A logger may already be installed by the host (or by an earlier call), so
/// initialization failures are ignored.
pub fn init_logging(level: log::Level) {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = console_log::init_with_level(level);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = env_logger::Builder::new().filter_level(level.to_level_filter()).try_init();
    }
}
