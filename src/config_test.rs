use super::*;
use motion::rotator::RotatorVariant;

// =============================================================================
// env_parse
// =============================================================================

#[test]
fn env_parse_missing_returns_default() {
    let val: u16 = env_parse("__FOLIO_TEST_MISSING_KEY__", 42);
    assert_eq!(val, 42);
}

#[test]
fn env_parse_present_valid() {
    unsafe { std::env::set_var("__FOLIO_TEST_EP_VALID__", "8080") };
    let val: u16 = env_parse("__FOLIO_TEST_EP_VALID__", 0);
    assert_eq!(val, 8080);
    unsafe { std::env::remove_var("__FOLIO_TEST_EP_VALID__") };
}

#[test]
fn env_parse_present_invalid_returns_default() {
    unsafe { std::env::set_var("__FOLIO_TEST_EP_INVALID__", "not-a-port") };
    let val: u16 = env_parse("__FOLIO_TEST_EP_INVALID__", 7);
    assert_eq!(val, 7);
    unsafe { std::env::remove_var("__FOLIO_TEST_EP_INVALID__") };
}

#[test]
fn env_parse_reads_ip_addresses() {
    unsafe { std::env::set_var("__FOLIO_TEST_EP_HOST__", "127.0.0.1") };
    let val: IpAddr = env_parse("__FOLIO_TEST_EP_HOST__", DEFAULT_HOST);
    assert_eq!(val, IpAddr::V4(Ipv4Addr::LOCALHOST));
    unsafe { std::env::remove_var("__FOLIO_TEST_EP_HOST__") };
}

// =============================================================================
// SiteConfig
// =============================================================================

#[test]
fn site_config_addr_joins_host_and_port() {
    let config = SiteConfig { host: IpAddr::V4(Ipv4Addr::LOCALHOST), port: 4000 };
    assert_eq!(config.addr().to_string(), "127.0.0.1:4000");
}

#[test]
fn default_host_is_unspecified() {
    assert_eq!(DEFAULT_HOST.to_string(), "0.0.0.0");
    assert_eq!(DEFAULT_PORT, 3000);
}

// =============================================================================
// motion override
// =============================================================================

#[test]
fn parse_motion_accepts_partial_override() {
    let config = parse_motion(r#"{"rotator":"spin","count_up_duration_ms":2000}"#);
    assert_eq!(config.rotator, RotatorVariant::Spin);
    assert_eq!(config.count_up_duration_ms, 2000);
    assert!((config.visibility_threshold - 0.5).abs() < f64::EPSILON);
}

#[test]
fn parse_motion_malformed_falls_back_to_defaults() {
    assert_eq!(parse_motion("{not json"), MotionConfig::default());
}

#[test]
fn parse_motion_invalid_threshold_falls_back_to_defaults() {
    assert_eq!(parse_motion(r#"{"visibility_threshold":1.5}"#), MotionConfig::default());
}
