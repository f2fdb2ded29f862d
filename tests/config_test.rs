use std::env;

use doctor_network::config::{get_config, init_config, Config, LogFormat};
use doctor_network::telemetry::init_tracing;
use doctor_network::Error;

// Single test: the process environment is shared between test threads.
#[test]
fn config_from_env_and_tracing_bootstrap() {
    env::set_var("APP_NAME", "doctor-network-test");
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");

    let config = Config::from_env().expect("config");
    assert_eq!(config.app_name, "doctor-network-test");
    assert_eq!(config.log_filter, "debug");
    assert_eq!(config.log_format, LogFormat::Json);

    env::set_var("LOG_FORMAT", "xml");
    assert!(matches!(Config::from_env(), Err(Error::Config(_))));

    env::remove_var("LOG_FORMAT");
    env::remove_var("APP_NAME");
    assert_eq!(Config::from_env().unwrap().log_format, LogFormat::Pretty);

    assert!(get_config().is_err());
    init_config().expect("first init");
    assert_eq!(get_config().unwrap().app_name, "doctor-network");
    assert!(init_config().is_err());

    let config = get_config().unwrap();
    init_tracing(config).expect("first subscriber");
    assert!(matches!(init_tracing(config), Err(Error::Config(_))));
    assert_eq!(Config::default().log_filter, "info");
}
