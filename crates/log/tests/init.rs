//! Global installation. Kept in its own test binary because a global
//! subscriber can only be installed once per process.

use castellan_log::{Config, Fields, LogError, LoggerBuilder};

#[test]
fn installs_once_then_reports_already_set() {
    let config = Config {
        fields: Fields {
            service: Some("castellan".into()),
            ..Fields::default()
        },
        ..Config::test()
    };

    let guard = castellan_log::init_with(config).unwrap();
    assert!(guard.has_root_span());
    castellan_log::info!(ready = true, "logger installed");

    let err = LoggerBuilder::from_config(Config::test()).build().unwrap_err();
    assert!(matches!(err, LogError::Init(_)));

    let again = castellan_log::auto_init().unwrap();
    assert!(!again.has_root_span());
}
