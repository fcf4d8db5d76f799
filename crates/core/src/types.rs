/// User primary keys are UUIDv4, generated by the store at creation time
/// and immutable afterwards.
pub type UserId = uuid::Uuid;

/// All persisted times are UTC Unix timestamps in whole seconds.
pub type UnixSeconds = i64;

/// Current wall-clock time as Unix seconds.
pub fn unix_now() -> UnixSeconds {
    chrono::Utc::now().timestamp()
}
