use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use super::*;

#[test]
fn from_values_defaults_when_unset() {
    let cfg = ServerConfig::from_values(None, None).unwrap();
    assert_eq!(cfg.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_values_blank_uses_defaults() {
    let cfg = ServerConfig::from_values(Some("  "), Some("")).unwrap();
    assert_eq!(cfg, ServerConfig::from_values(None, None).unwrap());
}

#[test]
fn from_values_parses_overrides() {
    let cfg = ServerConfig::from_values(Some("127.0.0.1"), Some(" 8080 ")).unwrap();
    assert_eq!(cfg.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert_eq!(cfg.port, 8080);
}

#[test]
fn from_values_accepts_ipv6_host() {
    let cfg = ServerConfig::from_values(Some("::1"), None).unwrap();
    assert_eq!(cfg.host, IpAddr::V6(Ipv6Addr::LOCALHOST));
    assert_eq!(cfg.socket_addr().to_string(), "[::1]:3000");
}

#[test]
fn from_values_rejects_bad_port() {
    let err = ServerConfig::from_values(None, Some("eighty")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "eighty"));
    assert!(err.to_string().starts_with("invalid PORT 'eighty'"));
}

#[test]
fn from_values_rejects_out_of_range_port() {
    assert!(matches!(
        ServerConfig::from_values(None, Some("70000")),
        Err(ConfigError::InvalidPort { .. })
    ));
}

#[test]
fn from_values_rejects_bad_host() {
    let err = ServerConfig::from_values(Some("localhost"), None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidHost { ref value, .. } if value == "localhost"));
}
