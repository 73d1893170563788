//! Unit tests for bot runtime

use fxsignal::core::runtime::RuntimeConfig;

#[test]
fn test_runtime_config_default() {
    let config = RuntimeConfig::default();
    assert_eq!(config.evaluation_interval_seconds, 120);
    assert_eq!(config.port, 8080);
    assert!(config.run_on_startup);
}
