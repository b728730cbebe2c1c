//! Integration tests for configuration and command helpers

use clash_inviter::{
    commands::common::prompt_invite_count,
    core::{config::resolve_token, AppConfig},
    ClashError, TOKEN_ENV_VAR,
};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

#[test]
fn test_prompt_reads_target() {
    let mut input = Cursor::new("x\n4\n");
    let mut output = Vec::new();
    let count = prompt_invite_count(&mut input, &mut output).unwrap();
    assert_eq!(count.as_u32(), 4);
}

#[test]
fn test_config_file_thresholds() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[criteria]
town_hall_min = 12
trophies_min = 3000

[criteria.troop_min_levels]
Archer = 9
"#
    )
    .unwrap();

    let config = AppConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.criteria.town_hall_min, 12);
    assert_eq!(config.criteria.trophies_min, 3000);
    assert_eq!(config.criteria.troop_min_levels.len(), 1);
}

#[test]
fn test_explicit_missing_config_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = AppConfig::load(Some(&dir.path().join("nope.toml")));
    assert!(matches!(result, Err(ClashError::Config { .. })));
}

#[test]
fn test_missing_token_names_env_var() {
    match resolve_token(None, None).unwrap_err() {
        ClashError::MissingToken { env_var } => assert_eq!(env_var, TOKEN_ENV_VAR),
        other => panic!("Expected MissingToken, got {other:?}"),
    }
}
