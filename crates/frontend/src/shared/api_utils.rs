//! Backend endpoint resolution

/// Port the record store backend listens on
const BACKEND_PORT: u16 = 3000;

/// Base URL for API requests.
///
/// During development trunk serves the wasm bundle from its own port, so
/// the origin is rebuilt from the page's protocol and hostname with the
/// backend port substituted in.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    format!(
        "{}//{}:{}",
        location.protocol().unwrap_or_else(|_| "http:".into()),
        location.hostname().unwrap_or_else(|_| "127.0.0.1".into()),
        BACKEND_PORT
    )
}
