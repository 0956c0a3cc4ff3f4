//! Opaque report tokens.
//!
//! A token is a time-based component (hex milliseconds) joined to a
//! random component (truncated v4 UUID). Collision resistance comes from
//! the randomness alone — no global uniqueness is enforced beyond it.

use uuid::Uuid;

pub fn report_token() -> String {
    let millis = jiff::Timestamp::now().as_millisecond();
    let random = Uuid::new_v4().simple().to_string();
    format!("{millis:x}-{}", &random[..8])
}
