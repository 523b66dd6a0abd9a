//! Unions as ordinary `std::error::Error` values.

use std::error::Error as StdError;
use std::io;

use thiserror::Error;
use zipmatch::{Error2, Error3, try_get};

#[derive(Debug, Error)]
#[error("config missing key {0}")]
struct MissingKey(&'static str);

#[derive(Debug, Error)]
#[error("could not read config")]
struct ReadFailed(#[source] io::Error);

type ConfigError = Error2<MissingKey, ReadFailed>;

fn read(fail: bool) -> Result<String, ReadFailed> {
    if fail {
        Err(ReadFailed(io::Error::new(io::ErrorKind::NotFound, "config.toml")))
    } else {
        Ok("name = \"zipmatch\"".to_string())
    }
}

fn key(text: &str) -> Result<&'static str, MissingKey> {
    if text.contains("name") { Ok("name") } else { Err(MissingKey("name")) }
}

fn load(fail: bool) -> Result<&'static str, ConfigError> {
    let text = try_get!(read(fail));
    Ok(try_get!(key(&text)))
}

fn load_anyhow(fail: bool) -> anyhow::Result<&'static str> {
    Ok(load(fail)?)
}

fn load_boxed(fail: bool) -> Result<&'static str, Box<dyn StdError + Send + Sync>> {
    Ok(load(fail)?)
}

#[test]
fn test_question_mark_into_anyhow() {
    assert_eq!(load_anyhow(false).unwrap(), "name");

    let err = load_anyhow(true).unwrap_err();
    assert_eq!(err.to_string(), "could not read config");
    let chain: Vec<String> = err.chain().map(ToString::to_string).collect();
    assert_eq!(chain, ["could not read config", "config.toml"]);
}

#[test]
fn test_question_mark_into_boxed_error() {
    let err = load_boxed(true).unwrap_err();
    assert!(err.source().is_some());
    assert!(err.downcast_ref::<ConfigError>().is_some());
}

#[test]
fn test_downcast_recovers_slot() {
    let err = load_anyhow(true).unwrap_err();
    let union = err.downcast_ref::<ConfigError>().unwrap();
    assert!(union.as_second().is_some());
    assert!(union.as_first().is_none());
}

#[test]
fn test_leaf_without_source() {
    let err: Error3<MissingKey, ReadFailed, io::Error> = Error3::First(MissingKey("port"));
    assert_eq!(err.to_string(), "config missing key port");
    assert!(err.source().is_none());
}
