use crate::{Timestamps, UuidIdentity};

#[test]
fn test_timestamps_now_sets_both_fields() {
    let timestamps = Timestamps::now();

    assert_eq!(timestamps.created_on, timestamps.updated_on);
}

#[test]
fn test_timestamps_touch_only_moves_updated_on() {
    let mut timestamps = Timestamps::now();
    let created_on = timestamps.created_on;

    std::thread::sleep(std::time::Duration::from_millis(5));
    timestamps.touch();

    assert_eq!(timestamps.created_on, created_on);
    assert!(timestamps.updated_on > created_on);
}

#[test]
fn test_timestamps_are_whole_milliseconds() {
    let mut timestamps = Timestamps::now();
    timestamps.touch();

    assert_eq!(timestamps.created_on.timestamp_subsec_nanos() % 1_000_000, 0);
    assert_eq!(timestamps.updated_on.timestamp_subsec_nanos() % 1_000_000, 0);
}

#[test]
fn test_uuid_identity_is_unique_per_record() {
    let first = UuidIdentity::generate();
    let second = UuidIdentity::generate();

    assert_ne!(first, second);
    assert_eq!(first.uuid().get_version_num(), 4);
}

#[test]
fn test_uuid_identity_round_trips_through_storage() {
    let identity = UuidIdentity::generate();

    let restored = UuidIdentity::from_stored(identity.uuid());

    assert_eq!(restored, identity);
    assert_eq!(restored.to_string(), identity.uuid().to_string());
}
