use assert_cmd::cargo::cargo_bin_cmd;
use medals_testing::TestWorld;
use predicates::prelude::*;

#[test]
fn test_help_describes_the_tool() {
    cargo_bin_cmd!("medals")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Olympic medal board for the terminal"))
        .stdout(predicate::str::contains("delete"))
        .stdout(predicate::str::contains("--api-url"));
}

#[test]
fn test_medals_catalog() {
    let world = TestWorld::new();

    let result = world.run(&["medals", "--format", "json"]).unwrap();
    assert!(result.success());

    let json = result.json().unwrap();
    let medals = json["content"]["medals"].as_array().unwrap();
    assert_eq!(medals.len(), 3);
    assert_eq!(medals[0]["name"], "gold");
    assert_eq!(medals[0]["color"], "#FFD700");
    assert_eq!(medals[2]["rank"], 3);
}

#[test]
fn test_board_requires_a_terminal() {
    let world = TestWorld::new();

    let result = world.run(&[]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("interactive terminal"));
    assert!(world.data_dir().join("medals.log").exists());
}
