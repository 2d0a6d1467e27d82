// SPDX-License-Identifier: MPL-2.0
//! Periodic subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Clock refresh interval; also drives toast expiry.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Ticks once per second for the whole lifetime of the window.
pub fn create_tick_subscription() -> Subscription<Message> {
    time::every(TICK_INTERVAL).map(Message::Tick)
}
