//! Tests for the auth module

use super::*;
use crate::config::Configuration;
use crate::error::Error;

fn build(config: &Configuration) -> reqwest::Request {
    let auth = Authenticator::new(config).unwrap();
    let client = reqwest::Client::new();
    let req = client.get("https://example.com/api/v3/lego/colors/");
    auth.apply(req).build().unwrap()
}

#[test]
fn test_api_key_default_header() {
    let config = Configuration::new("test-key-123").unwrap();
    let built = build(&config);
    assert_eq!(
        built.headers().get("Authorization").unwrap(),
        "key test-key-123"
    );
}

#[test]
fn test_api_key_custom_header_and_prefix() {
    let config = Configuration::builder("my-token")
        .header_name("X-Api-Key")
        .prefix("Token")
        .build()
        .unwrap();
    let built = build(&config);
    assert_eq!(built.headers().get("X-Api-Key").unwrap(), "Token my-token");
    assert!(built.headers().get("Authorization").is_none());
}

#[test]
fn test_api_key_without_prefix() {
    let config = Configuration::builder("bare").prefix("").build().unwrap();
    let built = build(&config);
    assert_eq!(built.headers().get("Authorization").unwrap(), "bare");
}

#[test]
fn test_header_value_is_sensitive() {
    let config = Configuration::new("secret").unwrap();
    let built = build(&config);
    assert!(built.headers().get("Authorization").unwrap().is_sensitive());
}

#[test]
fn test_invalid_header_name_rejected() {
    let config = Configuration::builder("k")
        .header_name("Bad Header")
        .build()
        .unwrap();
    let err = Authenticator::new(&config).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[test]
fn test_invalid_key_characters_rejected() {
    let config = Configuration::new("line\nbreak").unwrap();
    let err = Authenticator::new(&config).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[test]
fn test_authenticator_debug_hides_key() {
    let config = Configuration::new("secret").unwrap();
    let auth = Authenticator::new(&config).unwrap();
    let debug_str = format!("{auth:?}");
    assert!(debug_str.contains("Authenticator"));
    assert!(!debug_str.contains("secret"));
}
