//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Wall-clock time (profile ids, RNG seeds)
//! - Logger setup
//! - Blocking notices (`alert` on web)

/// Milliseconds since the Unix epoch
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Install the logger back end (call once at start-up)
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    let _ = env_logger::try_init();
}

/// Show a message the player has to acknowledge
#[cfg(target_arch = "wasm32")]
pub fn notify_blocking(message: &str) {
    let shown = web_sys::window()
        .map(|w| w.alert_with_message(message).is_ok())
        .unwrap_or(false);
    if !shown {
        log::warn!("Notice not shown: {message}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn notify_blocking(message: &str) {
    log::warn!("{message}");
    eprintln!("\n  !! {message}\n");
}
