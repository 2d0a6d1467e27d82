// SPDX-License-Identifier: MPL-2.0
//! Messaging session identifier passed to the viewer with `-u`.

use rand::Rng;

/// Upper bound (inclusive) of the random session prefix.
pub const MAX_SESSION_PREFIX: u32 = 10_000;

/// Name used when the invoking user cannot be determined.
const UNKNOWN_USER: &str = "unknown";

/// Environment variables holding the login name, in lookup order.
const USER_VARS: [&str; 4] = ["LOGNAME", "USER", "LNAME", "USERNAME"];

/// Returns the invoking user's login name.
#[must_use]
pub fn current_user() -> String {
    user_from(|var| std::env::var(var).ok())
}

fn user_from(lookup: impl Fn(&str) -> Option<String>) -> String {
    USER_VARS
        .iter()
        .filter_map(|var| lookup(var))
        .find(|name| !name.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_USER.to_string())
}

/// Builds `<random 0..=10000>-<user>` from the given generator.
pub fn session_id_with<R: Rng + ?Sized>(rng: &mut R, user: &str) -> String {
    let prefix = rng.random_range(0..=MAX_SESSION_PREFIX);
    format!("{prefix}-{user}")
}

/// Builds a fresh session identifier for the invoking user.
#[must_use]
pub fn session_id() -> String {
    session_id_with(&mut rand::rng(), &current_user())
}
