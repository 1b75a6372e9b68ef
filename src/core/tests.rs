//! Core domain: tests for configuration parsing.

use super::config::{GameConfig, parse_game_config};
use crate::core::PlayerSounds;
use crate::movement::{ControllerConfig, SoundCue};

#[test]
fn test_shipped_config_parses_and_validates() {
    let config = parse_game_config(include_str!("../../assets/data/tabby.ron"), "tabby.ron")
        .expect("shipped config should parse");

    assert!(config.controller.validate().is_ok());
    assert_eq!(config.controller.max_jump_count, 2);
    assert!(config.controller.wet_speed < config.controller.base_speed);
}

#[test]
fn test_parse_full_config() {
    let source = r#"(
        controller: (
            base_speed: 300.0,
            wet_speed: 90.0,
            jump_impulse: 500.0,
            max_jump_count: 3,
        ),
        sounds: (
            jump: "audio/jump.ogg",
        ),
    )"#;

    let config = parse_game_config(source, "inline").unwrap();
    assert_eq!(
        config.controller,
        ControllerConfig {
            base_speed: 300.0,
            wet_speed: 90.0,
            jump_impulse: 500.0,
            max_jump_count: 3,
        }
    );
    assert_eq!(config.sounds.jump.as_deref(), Some("audio/jump.ogg"));
    assert!(config.sounds.splash.is_none());
}

#[test]
fn test_max_jump_count_defaults_to_double_jump() {
    let source = "(controller: (base_speed: 1.0, wet_speed: 0.5, jump_impulse: 2.0))";

    let config = parse_game_config(source, "inline").unwrap();
    assert_eq!(config.controller.max_jump_count, 2);
}

#[test]
fn test_empty_config_uses_defaults() {
    let config = parse_game_config("()", "inline").unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_parse_error_names_origin() {
    let err = parse_game_config("(controller: (base_speed: \"fast\"))", "broken.ron").unwrap_err();
    assert_eq!(err.file, "broken.ron");
    assert!(err.to_string().starts_with("Failed to load broken.ron"));
}

#[test]
fn test_player_sounds_lookup_by_cue() {
    let sounds = PlayerSounds::default();
    assert!(sounds.is_empty());
    assert!(sounds.clip(SoundCue::Jump).is_none());
    assert!(sounds.clip(SoundCue::Splash).is_none());
}

#[test]
fn test_shipped_config_matches_defaults() {
    let config = parse_game_config(include_str!("../../assets/data/tabby.ron"), "tabby.ron")
        .expect("shipped config should parse");

    assert_eq!(config.controller, ControllerConfig::default());
}
