use api::{ApiError, Endpoint, MemorySource, PresenceSource, User};
use futures::executor::block_on;
use serde_json::json;

fn fixture() -> MemorySource {
    MemorySource::new()
        .with_json(
            Endpoint::UsersData,
            json!([
                {"user_id": 11, "name": "Zenon", "avatar": "/a/11.png", "email": "z@x"},
                {"user_id": 10, "name": "Adam", "avatar": "/a/10.png", "email": "a@x"}
            ]),
        )
        .with_json(
            Endpoint::MeanTimeWeekday(3),
            json!([["Mon", 3600], ["Tue", 7200]]),
        )
        .with_json(Endpoint::PresenceDays(3), json!({"unexpected": true}))
        .with_error(Endpoint::PresenceStartEnd(3), ApiError::Status { code: 500 })
}

#[test]
fn typed_accessors_decode_fixture_bodies() {
    let source = fixture();

    let users = block_on(source.users_data()).unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0], User::new(11, "Zenon").with_avatar("/a/11.png"));

    let rows = block_on(source.mean_time_weekday(3)).unwrap();
    assert_eq!(
        rows,
        vec![("Mon".to_string(), 3600.0), ("Tue".to_string(), 7200.0)]
    );
}

#[test]
fn missing_endpoint_is_not_found() {
    let source = fixture();
    let err = block_on(source.presence_weekday(7)).unwrap_err();
    assert_eq!(err, ApiError::NotFound);
    assert_eq!(source.requests(), vec![Endpoint::PresenceWeekday(7)]);
}

#[test]
fn wrong_shape_is_a_decode_error() {
    let source = fixture();
    let err = block_on(source.presence_days(3)).unwrap_err();
    assert!(matches!(err, ApiError::Decode(msg) if msg.contains("/api/v1/presence_days/3")));
}

#[test]
fn canned_errors_pass_through() {
    let source = fixture();
    let err = block_on(source.presence_start_end(3)).unwrap_err();
    assert_eq!(err, ApiError::Status { code: 500 });
}
