// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Prefix used when the operator has not configured one.
pub const DEFAULT_BOOKING_PREFIX: &str = "KI";

const BASE36_DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The reference handed to the guest once a registration is submitted.
///
/// Formatted as `<prefix>-<timestamp in base 36>`, uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingReference {
    value: String,
}

impl BookingReference {
    /// Derives a booking reference from the submission time.
    ///
    /// # Arguments
    ///
    /// * `prefix` - Short business prefix, uppercased on the way in
    /// * `timestamp_millis` - Milliseconds since the Unix epoch
    #[must_use]
    pub fn from_timestamp(prefix: &str, timestamp_millis: u64) -> Self {
        Self {
            value: format!(
                "{}-{}",
                prefix.to_uppercase(),
                to_base36(timestamp_millis)
            ),
        }
    }

    /// Returns the reference value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for BookingReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Encodes `value` in base 36 using uppercase digits.
#[allow(clippy::cast_possible_truncation)]
fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return String::from("0");
    }

    let mut digits: Vec<u8> = Vec::new();
    while value > 0 {
        // remainder is always < 36
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    digits.into_iter().map(char::from).collect()
}
