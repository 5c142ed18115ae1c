//! INI parsing: the single place where INI key names map to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [api] section
    if let Some(section) = ini.section(Some("api")) {
        if let Some(v) = section.get("base_url") {
            let v = v.trim();
            if !(v.starts_with("http://") || v.starts_with("https://")) {
                return Err(invalid("api", "base_url", v, "must start with http:// or https://"));
            }
            config.api.base_url = v.trim_end_matches('/').to_string();
        }
        if let Some(v) = section.get("timeout") {
            config.api.timeout = match v.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(invalid(
                        "api",
                        "timeout",
                        v,
                        "must be a positive integer (seconds)",
                    ))
                }
            };
        }
        config.api.client_id = non_empty(section.get("client_id"));
        config.api.auth_token = non_empty(section.get("auth_token"));
    }

    // [session] section
    if let Some(section) = ini.section(Some("session")) {
        if let Some(v) = section.get("locale") {
            let v = v.trim();
            if v.is_empty() {
                return Err(invalid("session", "locale", v, "must not be empty"));
            }
            config.session.locale = v.to_string();
        }
    }

    // [cache] section
    if let Some(section) = ini.section(Some("cache")) {
        if let Some(v) = section.get("low_water_mark") {
            config.cache.low_water_mark = match v.trim().parse::<usize>() {
                Ok(mark) if mark >= 1 => mark,
                _ => {
                    return Err(invalid(
                        "cache",
                        "low_water_mark",
                        v,
                        "must be an integer of at least 1",
                    ))
                }
            };
        }
    }

    // [locales] section
    if let Some(section) = ini.section(Some("locales")) {
        config.locales.file = non_empty(section.get("file")).map(|v| expand_tilde(&v));
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = non_empty(section.get("directory")) {
            config.logging.directory = expand_tilde(&v);
        }
        if let Some(v) = non_empty(section.get("file")) {
            config.logging.file = v;
        }
    }

    Ok(config)
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Empty values mean "unset".
fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Expand tilde (~) to home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn load(content: &str) -> Result<ConfigFile, ConfigFileError> {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");
        std::fs::write(&config_path, content).unwrap();
        ConfigFile::load_from(&config_path)
    }

    #[test]
    fn test_partial_config() {
        let config = load(
            r#"
[session]
locale = pt
"#,
        )
        .unwrap();

        assert_eq!(config.session.locale, "pt");
        assert_eq!(config.api, ConfigFile::default().api);
        assert_eq!(config.cache, ConfigFile::default().cache);
    }

    #[test]
    fn test_api_section() {
        let config = load(
            r#"
[api]
base_url = http://localhost:9000/
timeout = 12
client_id = abc
auth_token =
"#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "http://localhost:9000");
        assert_eq!(config.api.timeout, 12);
        assert_eq!(config.api.client_id.as_deref(), Some("abc"));
        assert!(config.api.auth_token.is_none());
    }

    #[test]
    fn test_invalid_base_url() {
        let err = load("[api]\nbase_url = voice.example.org\n").unwrap_err();
        assert!(err.to_string().contains("api.base_url"));
        assert!(err.to_string().contains("http://"));
    }

    #[test]
    fn test_invalid_timeout() {
        let err = load("[api]\ntimeout = 0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigFileError::InvalidValue { ref key, .. } if key == "timeout"
        ));
    }

    #[test]
    fn test_low_water_mark_must_be_positive() {
        let err = load("[cache]\nlow_water_mark = 0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigFileError::InvalidValue { ref section, ref value, .. }
                if section == "cache" && value == "0"
        ));

        assert!(load("[cache]\nlow_water_mark = lots\n").is_err());
        assert_eq!(
            load("[cache]\nlow_water_mark = 1\n").unwrap().cache.low_water_mark,
            1
        );
    }

    #[test]
    fn test_empty_locale_rejected() {
        assert!(load("[session]\nlocale =\n").is_err());
    }

    #[test]
    fn test_locales_and_logging_paths() {
        let config = load(
            r#"
[locales]
file = /srv/voice/contributable.json

[logging]
directory = /var/log/clip-cache
file = session.log
"#,
        )
        .unwrap();

        assert_eq!(
            config.locales.file,
            Some(PathBuf::from("/srv/voice/contributable.json"))
        );
        assert_eq!(config.logging.directory, PathBuf::from("/var/log/clip-cache"));
        assert_eq!(config.logging.file, "session.log");
    }

    #[test]
    fn test_expand_tilde() {
        let path = expand_tilde("~/test/path");
        if let Some(home) = dirs::home_dir() {
            assert_eq!(path, home.join("test/path"));
        }

        let path = expand_tilde("/absolute/path");
        assert_eq!(path, PathBuf::from("/absolute/path"));
    }
}
