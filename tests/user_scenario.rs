//! End-to-end tests of the user service as resolved from the container.

use std::collections::HashSet;

use userdi::{App, AppConfig, Error, cli::output::format_user};

#[test]
fn test_reference_scenario() {
    let service = App::new().user_service().unwrap();

    service.add("user1@email.com", "user1", "secret");
    service.add("user2@email.com", "user2", "secret");

    let user = service.get("user2@email.com").expect("user2 should exist");
    assert_eq!(user.name(), "user2");
    assert_eq!(user.email(), "user2@email.com");
    assert_eq!(user.password(), "secret");

    let users = service.get_all();
    let names: Vec<&str> = users.iter().map(|u| u.name()).collect();
    assert_eq!(names, vec!["user1", "user2"]);
    assert_eq!(
        format_user(&users[1]),
        format!(
            "User ID: {}, Name: user2, Email: user2@email.com, Password: secret",
            user.id()
        )
    );
}

#[test]
fn test_round_trip_generates_distinct_ids() {
    let service = App::new().user_service().unwrap();

    for i in 0..10 {
        service.add(&format!("user{i}@email.com"), &format!("user{i}"), "pw");
    }

    let round_trip = service.get("user3@email.com").unwrap();
    assert_eq!(round_trip.email(), "user3@email.com");
    assert_eq!(round_trip.name(), "user3");
    assert_eq!(round_trip.password(), "pw");
    assert!(!round_trip.id().to_string().is_empty());

    let ids: HashSet<_> = service.get_all().iter().map(|u| u.id()).collect();
    assert_eq!(ids.len(), 10);
}

#[test]
fn test_duplicate_emails_return_first_added() {
    let service = App::new().user_service().unwrap();

    service.add("dup@email.com", "original", "a");
    service.add("dup@email.com", "impostor", "b");

    assert_eq!(service.get("dup@email.com").unwrap().name(), "original");
    assert_eq!(service.get_all().len(), 2);
}

#[test]
fn test_missing_user_is_absent_not_error() {
    let service = App::new().user_service().unwrap();
    assert!(service.get("ghost@email.com").is_none());

    service.add("user1@email.com", "user1", "secret");
    assert!(service.get("ghost@email.com").is_none());
    assert!(matches!(
        service.require("ghost@email.com"),
        Err(Error::UserNotFound { .. })
    ));
}

#[test]
fn test_snapshot_unaffected_by_later_adds() {
    let service = App::new().user_service().unwrap();
    service.add("user1@email.com", "user1", "secret");

    let snapshot = service.get_all();
    service.add("user2@email.com", "user2", "secret");

    assert_eq!(snapshot.len(), 1);
    assert_eq!(service.get_all().len(), 2);
}

#[test]
fn test_seeded_users_precede_added_users() {
    let config = AppConfig::new().with_user("admin@email.com", "admin", "root");
    let service = App::with_config(&config).user_service().unwrap();
    service.add("user1@email.com", "user1", "secret");

    let names: Vec<String> = service
        .get_all()
        .iter()
        .map(|u| u.name().to_string())
        .collect();
    assert_eq!(names, vec!["admin", "user1"]);
}
