//! Generic protobuf ↔ domain conversions
//!
//! Reusable conversion functions between `google.protobuf.Timestamp`
//! and `chrono::DateTime<Utc>`. These helpers are domain-agnostic and
//! shared by the gRPC service implementation and the gateway handlers.

use chrono::{DateTime, Utc};
use prost_types::Timestamp;

/// Convert DateTime<Utc> to a protobuf Timestamp
///
/// Never fails; chrono datetimes are always within the protobuf
/// timestamp range.
pub fn datetime_to_timestamp(dt: DateTime<Utc>) -> Timestamp {
  Timestamp {
    seconds: dt.timestamp(),
    nanos: dt.timestamp_subsec_nanos() as i32,
  }
}

/// Convert a protobuf Timestamp to DateTime<Utc>
///
/// Returns an error for malformed timestamps: negative nanos or a
/// seconds value outside the representable range.
pub fn timestamp_to_datetime(ts: &Timestamp) -> Result<DateTime<Utc>, String> {
  let nanos = u32::try_from(ts.nanos)
    .map_err(|_| format!("invalid nanos value: {}", ts.nanos))?;

  DateTime::from_timestamp(ts.seconds, nanos)
    .ok_or_else(|| format!("timestamp out of range: {}s {}ns", ts.seconds, ts.nanos))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_timestamp_roundtrip() {
    let now = Utc::now();
    let ts = datetime_to_timestamp(now);
    let dt_back = timestamp_to_datetime(&ts).unwrap();
    assert_eq!(now, dt_back);
  }

  #[test]
  fn test_negative_nanos_rejected() {
    let ts = Timestamp {
      seconds: 0,
      nanos: -1,
    };
    assert!(timestamp_to_datetime(&ts).is_err());
  }

  #[test]
  fn test_out_of_range_seconds_rejected() {
    let ts = Timestamp {
      seconds: i64::MAX,
      nanos: 0,
    };
    assert!(timestamp_to_datetime(&ts).is_err());
  }

  #[test]
  fn test_epoch() {
    let ts = Timestamp {
      seconds: 0,
      nanos: 0,
    };
    let dt = timestamp_to_datetime(&ts).unwrap();
    assert_eq!(dt.timestamp(), 0);
  }
}
