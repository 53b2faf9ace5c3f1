use assert_cmd::cargo::cargo_bin_cmd;
use medals_testing::TestWorld;
use predicates::prelude::*;

#[test]
fn test_config_show_reports_defaults() {
    let world = TestWorld::new();

    let result = world.run(&["config", "show", "--format", "json"]).unwrap();
    assert!(result.success());

    let json = result.json().unwrap();
    assert_eq!(json["content"]["config_exists"], false);
    assert_eq!(json["content"]["appearance"], "dark");
    assert_eq!(json["content"]["timeout_secs"], 30);
    // --api-url from the world wins over the file default
    assert!(
        json["content"]["base_url"]
            .as_str()
            .unwrap()
            .ends_with("/api/country")
    );
    assert_eq!(json["suggestions"][0]["command"], "medals config init");
}

#[test]
fn test_config_init_writes_once() {
    let world = TestWorld::new();
    let config_path = world.data_dir().join("config.toml");

    let first = world.run(&["config", "init"]).unwrap();
    assert!(first.success());
    assert!(config_path.exists());
    assert!(first.stdout().contains("Wrote"));

    std::fs::write(&config_path, "[ui]\nappearance = \"light\"\n").unwrap();

    let second = world.run(&["config", "init"]).unwrap();
    assert!(second.success());
    assert!(second.stdout().contains("--force"));
    assert!(
        std::fs::read_to_string(&config_path)
            .unwrap()
            .contains("light")
    );

    let forced = world.run(&["config", "init", "--force"]).unwrap();
    assert!(forced.success());
    assert!(
        std::fs::read_to_string(&config_path)
            .unwrap()
            .contains("appearance = \"dark\"")
    );
}

#[test]
fn test_config_file_appearance_is_reported() {
    let world = TestWorld::new();
    std::fs::write(
        world.data_dir().join("config.toml"),
        "[ui]\nappearance = \"light\"\n",
    )
    .unwrap();

    let result = world.run(&["config", "show"]).unwrap();

    assert!(result.success());
    assert!(result.stdout().contains("appearance   light"));
}

#[test]
fn test_invalid_config_file_fails() {
    let world = TestWorld::new();
    std::fs::write(world.data_dir().join("config.toml"), "[api\n").unwrap();

    let result = world.run(&["medals"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("Configuration error"));
}

#[test]
fn test_env_var_selects_data_dir() {
    let temp = tempfile::TempDir::new().unwrap();
    let data_dir = temp.path().join("from-env");

    cargo_bin_cmd!("medals")
        .env("MEDALS_PATH", &data_dir)
        .env_remove("MEDALS_API_URL")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(data_dir.display().to_string()))
        .stdout(predicate::str::contains(
            "https://mod-9-medals-api.azurewebsites.net/api/country",
        ));
}

#[test]
fn test_env_var_selects_api_url() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("medals");
    cmd.env("MEDALS_API_URL", "http://localhost:7071/api/country")
        .env_remove("RUST_LOG")
        .arg("--data-dir")
        .arg(world.data_dir())
        .args(["config", "show"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("http://localhost:7071/api/country"));
}
