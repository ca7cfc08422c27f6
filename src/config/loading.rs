use config::{Config, ConfigError, Environment, File, Source};
use log::info;

use super::models::Settings;

pub fn load_config() -> Result<Settings, ConfigError> {
    // As Rust has no native support for .env files,
    // we use the dotenv_flow crate to import to actual ENV vars.
    if let Ok(dotenv_path) = dotenv_flow::dotenv_flow() {
        info!("Loaded dotenv file: {:?}", dotenv_path);
    }

    build_settings(File::with_name("printer-info").required(false))
}

/// Layers the ENV vars over `file`. Multi-word settings have their
/// defaults in [`Settings`] itself.
fn build_settings<T>(file: T) -> Result<Settings, ConfigError>
where
    T: Source + Send + Sync + 'static,
{
    let config = Config::builder()
        .add_source(file)
        .add_source(Environment::default()
            .prefix("PI")
            .separator("_")
            .prefix_separator("_")
            .try_parsing(true)
            .with_list_parse_key("printer.uris")
            .list_separator(","))
            .set_default("mqtt.enabled", "true")?
            .set_default("mqtt.host", "localhost")?
            .set_default("mqtt.port", "1883")?
            .set_default("mqtt.secure", "false")?
            .set_default("mqtt.username", "")?
            .set_default("mqtt.password", "")?
            .set_default("mqtt.retain", "true")?
            .set_default("printer.uris", Vec::<String>::new())?
            .set_default("printer.username", "")?
            .set_default("printer.password", "")?
            .set_default("poll.schedule", "30s")?
        .build()?;

    config.try_deserialize()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use config::FileFormat;

    use crate::config::schedule::TimeSchedule;

    use super::*;

    fn load_toml(toml: &str) -> Result<Settings, ConfigError> {
        build_settings(File::from_str(toml, FileFormat::Toml))
    }

    #[test]
    fn file_may_use_the_field_names() {
        let settings = load_toml(
            r#"
            [mqtt]
            root_topic = "office"
            client_id = "office-printers"

            [printer]
            uris = ["ipp://laser.local/ipp/print"]
            request_timeout = "3s"

            [poll]
            schedule = "0 */5 * * *"
            max_retries = 1
            "#,
        )
        .unwrap();

        assert_eq!(settings.mqtt.root_topic, "office");
        assert_eq!(settings.mqtt.client_id, "office-printers");
        assert_eq!(settings.printer.uris, vec!["ipp://laser.local/ipp/print"]);
        assert_eq!(settings.printer.request_timeout, Duration::from_secs(3));
        assert!(matches!(settings.poll.schedule, TimeSchedule::Cron(_)));
        assert_eq!(settings.poll.max_retries, 1);
    }

    #[test]
    fn file_may_use_the_env_spelling() {
        let settings = load_toml(
            r#"
            [mqtt]
            roottopic = "lab"
            ignoretlserrors = true
            "#,
        )
        .unwrap();

        assert_eq!(settings.mqtt.root_topic, "lab");
        assert!(settings.mqtt.ignore_tls_errors);
    }

    #[test]
    fn empty_file_gives_the_defaults() {
        let settings = load_toml("").unwrap();

        assert_eq!(settings.mqtt.root_topic, "printer-info");
        assert_eq!(settings.mqtt.client_id, "printer-info");
        assert!(!settings.mqtt.ignore_tls_errors);
        assert!(settings.printer.ignore_tls_errors);
        assert_eq!(settings.printer.request_timeout, Duration::from_secs(10));
        assert_eq!(settings.poll.max_retries, 3);
        assert!(matches!(settings.poll.schedule, TimeSchedule::Interval(d) if d == Duration::from_secs(30)));
        assert_eq!(settings.sentry_dsn, None);
    }
}
