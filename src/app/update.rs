// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Handlers take the current UTC time as a parameter so tests can pin it.

use super::Message;
use crate::error::Error;
use crate::form::Controller;
use crate::launcher::{session, Launcher};
use crate::ui::notifications::{self, Notification};
use chrono::{DateTime, Utc};
use iced::Task;

/// Mutable borrows of the parts of `App` that messages touch.
pub struct UpdateContext<'a> {
    pub form: &'a mut Controller,
    pub launcher: &'a mut dyn Launcher,
    pub notifications: &'a mut notifications::Manager,
    pub clock: &'a mut DateTime<Utc>,
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message, now: DateTime<Utc>) -> Task<Message> {
    match message {
        Message::EndTimeChanged(text) => ctx.form.set_end_time(text),
        Message::ResetEndTime => ctx.form.reset_end_time(now),
        Message::BufferChanged(text) | Message::BufferPicked(text) => ctx.form.set_buffer(text),
        Message::ProtocolSelected(protocol) => ctx.form.set_protocol(protocol),
        Message::StreamSelectionChanged(selection) => ctx.form.set_stream_selection(selection),
        Message::StreamPresetPicked(name) => ctx.form.pick_stream_preset(name),
        Message::ShowPicksToggled(enabled) => ctx.form.set_show_picks(enabled),
        Message::NoInventoryToggled(enabled) => ctx.form.set_no_inventory(enabled),
        Message::OfflineToggled(enabled) => ctx.form.set_offline(enabled),
        Message::Submit => handle_submit(ctx, now),
        Message::Quit => {
            log::debug!("Quit requested");
            return iced::exit();
        }
        Message::Tick(instant) => {
            *ctx.clock = now;
            ctx.notifications.tick(instant);
        }
        Message::Notification(notification_message) => {
            ctx.notifications.handle_message(&notification_message);
        }
    }
    Task::none()
}

fn handle_submit(ctx: &mut UpdateContext<'_>, now: DateTime<Utc>) {
    let session = session::session_id();
    let notification = match ctx.form.submit(now, &session, ctx.launcher) {
        Ok(command) => {
            Notification::success("notification-viewer-launched").with_arg("program", command.program())
        }
        Err(err) => notification_for(&err),
    };
    ctx.notifications.push(notification);
}

/// Maps a submission failure to the toast the user sees.
fn notification_for(err: &Error) -> Notification {
    match err {
        Error::Launch { program, .. } => {
            Notification::error(err.i18n_key()).with_arg("program", program.as_str())
        }
        _ if err.is_validation() => Notification::warning(err.i18n_key()),
        _ => Notification::error(err.i18n_key()),
    }
}
