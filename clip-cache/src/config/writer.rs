//! Serializes a `ConfigFile` into the commented INI written to `config.ini`.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let client_id = config.api.client_id.as_deref().unwrap_or("");
    let auth_token = config.api.auth_token.as_deref().unwrap_or("");
    let locales_file = config
        .locales
        .file
        .as_ref()
        .map(|p| path_to_string(p))
        .unwrap_or_default();

    format!(
        r#"[api]
; Backend origin (default: https://commonvoice.mozilla.org)
base_url = {}
; Timeout in seconds for HTTP requests (default: 30)
timeout = {}
; Client identifier sent with every request (optional)
client_id = {}
; Bearer token for a signed-in account (optional)
auth_token = {}

[session]
; Locale to validate when none is given on the command line (default: en)
locale = {}

[cache]
; Fetch more clips once this many or fewer are queued (default: 10, minimum: 1)
; Each refill requests this many clips
low_water_mark = {}

[locales]
; JSON array of contributable locale codes, e.g. ["en", "fr", "de"]
; If empty, a built-in list is used
file = {}

[logging]
; Directory for log files (default: ~/.clip-cache/logs)
directory = {}
; Log file name, cleared at the start of each session (default: clip-cache.log)
file = {}
"#,
        config.api.base_url,
        config.api.timeout,
        client_id,
        auth_token,
        config.session.locale,
        config.cache.low_water_mark,
        locales_file,
        path_to_string(&config.logging.directory),
        config.logging.file,
    )
}

fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
