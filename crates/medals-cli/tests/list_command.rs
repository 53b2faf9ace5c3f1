use medals_testing::{TestWorld, fixtures};

#[test]
fn test_list_json_is_sorted_by_name() {
    let mut world = TestWorld::new();
    world.api().with_countries(&fixtures::sample_countries());

    let result = world.run(&["list", "--format", "json"]).unwrap();
    assert!(result.success(), "list failed: {}", result.stderr());

    let json = result.json().unwrap();
    let names: Vec<&str> = json["content"]["countries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();

    assert_eq!(
        names,
        vec![
            "Brazil",
            "China",
            "France",
            "Germany",
            "Ireland",
            "Italy",
            "Poland",
            "Scotland",
            "Spain",
            "Sweden",
            "Switzerland",
            "United Kingdom",
            "United States",
        ]
    );
    assert_eq!(json["content"]["total"], fixtures::SAMPLE_TOTAL);
    assert_eq!(json["content"]["countries"][0]["total"], 3);
    world.api().assert_all();
}

#[test]
fn test_list_plain_output() {
    let mut world = TestWorld::new();
    world.api().with_countries(&fixtures::brazil_and_italy());

    let result = world.run(&["list"]).unwrap();
    assert!(result.success());

    let stdout = result.stdout();
    assert!(stdout.starts_with("Olympic Medals (1)"));
    let brazil = stdout.find("Brazil").unwrap();
    let italy = stdout.find("Italy").unwrap();
    assert!(brazil < italy);
    assert!(!stdout.contains('\u{1b}'), "piped output must not be colored");
}

#[test]
fn test_empty_list_suggests_add() {
    let mut world = TestWorld::new();
    world.api().with_countries(&[]);

    let result = world.run(&["list"]).unwrap();
    assert!(result.success());
    assert!(result.stdout().contains("No countries yet"));
    assert!(result.stdout().contains("medals add <NAME>"));
}

#[test]
fn test_list_server_error_fails() {
    let mut world = TestWorld::new();
    world.api().with_list_failure(500);

    let result = world.run(&["list"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("HTTP 500"), "stderr: {}", result.stderr());
    assert!(result.stdout().is_empty());
}

#[test]
fn test_total_prints_grand_total() {
    let mut world = TestWorld::new();
    world.api().with_countries(&fixtures::sample_countries());

    let result = world.run(&["total"]).unwrap();

    assert!(result.success());
    assert_eq!(result.stdout().trim(), fixtures::SAMPLE_TOTAL.to_string());
}
