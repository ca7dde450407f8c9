use super::*;
use proptest::prelude::*;

fn arb_config() -> impl Strategy<Value = Config> {
    (
        "[a-z0-9_./]{1,20}",
        "[a-z0-9.]{1,15}",
        any::<u16>(),
        prop::option::of("[a-z/]{1,10}"),
    )
        .prop_map(|(database_url, host, port, log_dir)| Config {
            database_url,
            host,
            port,
            log_dir: log_dir.map(PathBuf::from),
        })
}

fn arb_config_update() -> impl Strategy<Value = ConfigUpdate> {
    (
        prop::option::of("[a-z0-9_./]{1,20}"),
        prop::option::of("[a-z0-9.]{1,15}"),
        prop::option::of(any::<u16>()),
        prop::option::of("[a-z/]{1,10}"),
    )
        .prop_map(|(database_url, host, port, log_dir)| ConfigUpdate {
            database_url,
            host,
            port,
            log_dir: log_dir.map(PathBuf::from),
            server_url: None,
        })
}

proptest! {
    /// An empty update leaves the config untouched
    #[test]
    fn prop_empty_update_is_identity(config in arb_config()) {
        prop_assert_eq!(config.clone().apply_update(ConfigUpdate::default()), config);
    }

    /// Each field comes from the update when set, from the base otherwise
    #[test]
    fn prop_update_fields_take_precedence(config in arb_config(), update in arb_config_update()) {
        let merged = config.clone().apply_update(update.clone());

        prop_assert_eq!(&merged.database_url, update.database_url.as_ref().unwrap_or(&config.database_url));
        prop_assert_eq!(&merged.host, update.host.as_ref().unwrap_or(&config.host));
        prop_assert_eq!(merged.port, update.port.unwrap_or(config.port));
        prop_assert_eq!(&merged.log_dir, &update.log_dir.clone().or(config.log_dir.clone()));
    }

    /// Applying the same update twice is the same as applying it once
    #[test]
    fn prop_apply_update_idempotent(config in arb_config(), update in arb_config_update()) {
        let once = config.clone().apply_update(update.clone());
        let twice = once.clone().apply_update(update);
        prop_assert_eq!(once, twice);
    }
}
