use gofish_cli::run;
use serde_json::Value;
use serial_test::serial;

const VARS: &[&str] = &[
    "GOFISH_CONFIG",
    "GOFISH_PLAYERS",
    "GOFISH_HUMANS",
    "GOFISH_DEMO",
    "GOFISH_SEED",
    "GOFISH_AI",
];

fn clear_env() {
    for var in VARS {
        unsafe {
            std::env::remove_var(var);
        }
    }
}

fn cfg_json() -> (i32, Value, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["gofish", "cfg"], &mut out, &mut err);
    let json = serde_json::from_slice(&out).unwrap_or(Value::Null);
    (code, json, String::from_utf8_lossy(&err).into_owned())
}

#[test]
#[serial]
fn cfg_shows_defaults() {
    clear_env();
    let (code, json, _) = cfg_json();
    assert_eq!(code, 0);
    assert_eq!(json["players"]["value"], 4);
    assert_eq!(json["players"]["source"], "default");
    assert_eq!(json["humans"]["value"], 1);
    assert_eq!(json["demo_mode"]["value"], false);
    assert_eq!(json["ai"]["value"], "baseline");
    assert!(json["seed"]["value"].is_null());
}

#[test]
#[serial]
fn env_takes_precedence_over_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gofish.toml");
    std::fs::write(&path, "players = 3\nseed = 456\ndemo_mode = true\n").unwrap();
    unsafe {
        std::env::set_var("GOFISH_CONFIG", &path);
    }

    let (code, json, _) = cfg_json();
    assert_eq!(code, 0);
    assert_eq!(json["players"]["value"], 3);
    assert_eq!(json["players"]["source"], "file");
    assert_eq!(json["seed"]["value"], 456);
    assert_eq!(json["seed"]["source"], "file");
    assert_eq!(json["demo_mode"]["source"], "file");

    unsafe {
        std::env::set_var("GOFISH_SEED", "123");
        std::env::set_var("GOFISH_PLAYERS", "2");
    }
    let (code, json, _) = cfg_json();
    assert_eq!(code, 0);
    assert_eq!(json["seed"]["value"], 123);
    assert_eq!(json["seed"]["source"], "env");
    assert_eq!(json["players"]["value"], 2);
    assert_eq!(json["players"]["source"], "env");
    assert_eq!(json["humans"]["source"], "default");

    clear_env();
}

#[test]
#[serial]
fn invalid_env_value_fails() {
    clear_env();
    unsafe {
        std::env::set_var("GOFISH_HUMANS", "lots");
    }
    let (code, _, err) = cfg_json();
    assert_eq!(code, 2);
    assert!(err.contains("Invalid GOFISH_HUMANS 'lots'"));
    clear_env();
}

#[test]
#[serial]
fn flags_override_environment() {
    clear_env();
    unsafe {
        std::env::set_var("GOFISH_PLAYERS", "4");
        std::env::set_var("GOFISH_SEED", "1");
    }
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(
        ["gofish", "deal", "--players", "2", "--seed", "77"],
        &mut out,
        &mut err,
    );
    clear_env();
    assert_eq!(code, 0);
    let stdout = String::from_utf8_lossy(&out);
    assert!(stdout.starts_with("Seed: 77"));
    assert!(stdout.contains("Deck: 42 cards remaining"));
}
