//! Config Loading
//!
//! Reads the JSON config embedded in the page, if any.

use habits_core::{ConfigError, HabitsConfig};

/// Id of the `<script type="application/json">` element holding the config
pub const CONFIG_ELEMENT_ID: &str = "habits-config";

/// Config from the page, or defaults when the page embeds none
pub fn load() -> Result<HabitsConfig, ConfigError> {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match text {
        Some(json) if !json.trim().is_empty() => HabitsConfig::from_json(&json),
        _ => Ok(HabitsConfig::default()),
    }
}
