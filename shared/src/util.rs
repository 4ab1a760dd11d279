//! Clock and id generation for stored orders

use rand::Rng;

/// Ids count milliseconds from 2024-01-01T00:00:00Z
const ID_EPOCH_MS: i64 = 1_704_067_200_000;
const TIME_BITS: u32 = 41;
const SALT_BITS: u32 = 12;

/// Wall clock in UTC milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Numeric order id: elapsed time in the high bits, a random salt in the
/// low 12. Ids sort by creation time (to the millisecond) and fit in 53 bits.
pub fn snowflake_id() -> i64 {
    let elapsed = (now_millis() - ID_EPOCH_MS) & ((1 << TIME_BITS) - 1);
    let salt = rand::thread_rng().gen_range(0..1_i64 << SALT_BITS);
    (elapsed << SALT_BITS) | salt
}
