use shared::ShareConfig;
use web_sys::window;

pub fn get_website_url() -> String {
    if let Some(window) = window() {
        if let Ok(origin) = window.location().origin() {
            // Share captions append the route path without its leading slash
            return format!("{}/", origin.trim_end_matches('/'));
        }
    }

    // Default to 127.0.0.1 for development
    "http://127.0.0.1:8080/".to_string()
}

pub fn share_config() -> ShareConfig {
    ShareConfig::default().with_website_url(get_website_url())
}
