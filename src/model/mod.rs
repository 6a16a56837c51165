//! Photo API user data model and its flat wire-map codec.
//!
//! Wire keys are the API's snake_case field names. Absent optional fields
//! are never written as `null`; they are omitted.

mod links;
mod user;
mod wire;

pub use links::{ProfileImage, UserLinks};
pub use user::{UserRecord, UserRecordBuilder};
pub use wire::WireMap;

use crate::error::CodecError;

/// Decode a user record from a wire map.
pub fn decode(map: &WireMap) -> Result<UserRecord, CodecError> {
    UserRecord::decode(map)
}

/// Encode a user record to a wire map.
#[must_use]
pub fn encode(record: &UserRecord) -> WireMap {
    record.encode()
}
