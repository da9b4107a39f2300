//! Page Configuration Loader
//!
//! Reads optional JSON overrides embedded in `index.html`:
//!
//! ```html
//! <script id="device-admin-config" type="application/json">{"toast_duration_ms": 3000}</script>
//! ```

use device_domain::{AdminConfig, DomainResult};

pub const CONFIG_ELEMENT_ID: &str = "device-admin-config";

/// Defaults when the element is missing or empty; an error when it holds bad JSON
pub fn read_config() -> DomainResult<AdminConfig> {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty());

    match raw {
        Some(json) => AdminConfig::from_json(&json),
        None => Ok(AdminConfig::default()),
    }
}
