use medals_testing::{TestWorld, fixtures};

#[test]
fn test_add_sends_zeroed_medals() {
    let mut world = TestWorld::new();
    let created = fixtures::country(14, "Chile", 0, 0, 0);
    world.api().with_created(&created);

    let result = world
        .run(&["add", "Chile", "--gold", "5", "--bronze", "2", "--format", "json"])
        .unwrap();
    assert!(result.success(), "add failed: {}", result.stderr());

    let json = result.json().unwrap();
    assert_eq!(json["badge"]["level"], "success");
    assert_eq!(json["content"]["country"]["id"], 14);
    assert_eq!(json["content"]["country"]["total"], 0);
    assert!(json["suggestions"][0]["description"]
        .as_str()
        .unwrap()
        .contains("zero medals"));

    world.api().assert_all();
}

#[test]
fn test_add_plain_output() {
    let mut world = TestWorld::new();
    world
        .api()
        .with_created(&fixtures::country(14, "Chile", 0, 0, 0));

    let result = world.run(&["add", "Chile"]).unwrap();

    assert!(result.success());
    assert!(result.stdout().contains("Added Chile (id 14)"));
}

#[test]
fn test_add_rejects_blank_name() {
    let world = TestWorld::new();

    let result = world.run(&["add", "   "]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("must not be empty"));
}

#[test]
fn test_add_failure_exits_nonzero() {
    let mut world = TestWorld::new();
    world.api().with_create_failure(500);

    let result = world.run(&["add", "Chile"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("HTTP 500"));
}
