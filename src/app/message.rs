// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::protocol::Protocol;
use crate::ui::notifications;
use std::time::Instant;

/// Messages consumed by `App::update`, one per form interaction.
#[derive(Debug, Clone)]
pub enum Message {
    EndTimeChanged(String),
    /// Put the current UTC time back into the end-time field.
    ResetEndTime,
    BufferChanged(String),
    BufferPicked(String),
    ProtocolSelected(Protocol),
    /// Free-text edit of the stream selection.
    StreamSelectionChanged(String),
    StreamPresetPicked(String),
    ShowPicksToggled(bool),
    NoInventoryToggled(bool),
    OfflineToggled(bool),
    Submit,
    Quit,
    /// One-second clock tick.
    Tick(Instant),
    Notification(notifications::NotificationMessage),
}

/// Runtime flags passed from the command line to the application.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP 47 format (e.g. `fr`).
    pub lang: Option<String>,
    /// Log the viewer command instead of starting it.
    pub dry_run: bool,
}
