// SPDX-License-Identifier: MPL-2.0
//! View rendering for the launcher form.
//!
//! Layout, top to bottom: one labelled row per field, the three viewer
//! toggles, Quit/OK buttons, then the UTC clock. Toasts float above it all.

use super::Message;
use crate::domain::protocol::Protocol;
use crate::domain::time_window;
use crate::form::FormState;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::theming::ColorScheme;
use chrono::{DateTime, Utc};
use iced::widget::{
    button, checkbox, container, pick_list, text, text_input, tooltip, Column, Container, Row,
    Stack, Text,
};
use iced::{alignment, Element, Length, Theme};

static PROTOCOLS: [Protocol; 5] = Protocol::ALL;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a FormState,
    pub buffer_choices: &'a [String],
    pub preset_names: Vec<String>,
    /// Codes the stream selection resolves to.
    pub stream_codes: &'a str,
    pub clock: DateTime<Utc>,
    pub colors: ColorScheme,
    pub notifications: &'a Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let end_time_input = text_input(&i18n.tr("form-end-time-placeholder"), &state.end_time)
        .on_input(Message::EndTimeChanged)
        .on_submit(Message::Submit)
        .padding(spacing::XS)
        .width(Length::Fill);
    let reset_button = button(Text::new(i18n.tr("form-reset-time-button")))
        .on_press(Message::ResetEndTime)
        .padding([spacing::XS, spacing::SM]);
    let end_time_row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(with_tooltip(end_time_input, i18n.tr("form-end-time-tooltip")))
        .push(with_tooltip(reset_button, i18n.tr("form-reset-time-tooltip")));

    let buffer_input = text_input("", &state.buffer)
        .on_input(Message::BufferChanged)
        .on_submit(Message::Submit)
        .padding(spacing::XS)
        .width(Length::Fill);
    let selected_buffer = ctx
        .buffer_choices
        .iter()
        .find(|choice| **choice == state.buffer)
        .cloned();
    let buffer_picker = pick_list(ctx.buffer_choices, selected_buffer, Message::BufferPicked)
        .placeholder(i18n.tr("form-buffer-placeholder"))
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::PICKER_WIDTH));
    let buffer_row = Row::new()
        .spacing(spacing::XS)
        .push(buffer_input)
        .push(buffer_picker);

    let protocol_picker = pick_list(
        &PROTOCOLS[..],
        Some(state.protocol),
        Message::ProtocolSelected,
    )
    .padding(spacing::XS)
    .width(Length::Fill);
    let protocol_column = Column::new()
        .spacing(spacing::XXS)
        .push(with_tooltip(protocol_picker, i18n.tr("form-protocol-tooltip")))
        .push(caption(i18n.tr(state.protocol.description_key()), &ctx.colors));

    let streams_input = text_input(&i18n.tr("form-streams-placeholder"), &state.stream_selection)
        .on_input(Message::StreamSelectionChanged)
        .on_submit(Message::Submit)
        .padding(spacing::XS)
        .width(Length::Fill);
    let selected_preset = ctx
        .preset_names
        .iter()
        .find(|name| **name == state.stream_selection)
        .cloned();
    let preset_picker = pick_list(ctx.preset_names, selected_preset, Message::StreamPresetPicked)
        .placeholder(i18n.tr("form-streams-preset-placeholder"))
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::PICKER_WIDTH));
    let streams_column = Column::new()
        .spacing(spacing::XXS)
        .push(
            Row::new()
                .spacing(spacing::XS)
                .push(with_tooltip(streams_input, i18n.tr("form-streams-tooltip")))
                .push(preset_picker),
        )
        .push(caption(ctx.stream_codes.to_string(), &ctx.colors));

    let show_picks = checkbox(state.flags.show_picks).on_toggle(Message::ShowPicksToggled);
    let no_inventory = checkbox(state.flags.no_inventory).on_toggle(Message::NoInventoryToggled);
    let offline = checkbox(state.flags.offline).on_toggle(Message::OfflineToggled);

    let form = Column::new()
        .spacing(spacing::SM)
        .push(field_row(i18n.tr("form-end-time-label"), end_time_row))
        .push(field_row(
            i18n.tr("form-buffer-label"),
            with_tooltip(buffer_row, i18n.tr("form-buffer-tooltip")),
        ))
        .push(field_row(i18n.tr("form-protocol-label"), protocol_column))
        .push(field_row(i18n.tr("form-streams-label"), streams_column))
        .push(field_row(
            i18n.tr("form-show-picks-label"),
            with_tooltip(show_picks, i18n.tr("form-show-picks-tooltip")),
        ))
        .push(field_row(
            i18n.tr("form-no-inventory-label"),
            with_tooltip(no_inventory, i18n.tr("form-no-inventory-tooltip")),
        ))
        .push(field_row(
            i18n.tr("form-offline-label"),
            with_tooltip(offline, i18n.tr("form-offline-tooltip")),
        ));

    let quit_button = button(Text::new(i18n.tr("form-quit-button")))
        .on_press(Message::Quit)
        .style(button::secondary)
        .padding([spacing::XS, spacing::LG]);
    let ok_button = button(Text::new(i18n.tr("form-ok-button")))
        .on_press(Message::Submit)
        .style(button::primary)
        .padding([spacing::XS, spacing::LG]);
    let buttons = Row::new()
        .spacing(spacing::SM)
        .push(
            Container::new(with_tooltip(quit_button, i18n.tr("form-quit-tooltip")))
                .width(Length::Fill),
        )
        .push(
            Container::new(with_tooltip(ok_button, i18n.tr("form-ok-tooltip")))
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right),
        );

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(form)
        .push(buttons)
        .push(clock_label(i18n, ctx.clock, &ctx.colors));

    let toasts = Toast::view_overlay(ctx.notifications, i18n).map(Message::Notification);

    Stack::new()
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(toasts)
        .into()
}

fn field_row<'a>(
    label: String,
    field: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(label)
                .size(typography::BODY)
                .width(Length::Fixed(sizing::LABEL_WIDTH)),
        )
        .push(Container::new(field).width(Length::Fill))
        .into()
}

fn with_tooltip<'a>(
    content: impl Into<Element<'a, Message>>,
    hint: String,
) -> Element<'a, Message> {
    tooltip(
        content,
        container(Text::new(hint).size(typography::CAPTION))
            .padding(spacing::XS)
            .style(container::rounded_box),
        tooltip::Position::Bottom,
    )
    .gap(spacing::XXS)
    .into()
}

fn caption<'a>(value: String, colors: &ColorScheme) -> Element<'a, Message> {
    let color = colors.text_secondary;
    Text::new(value)
        .size(typography::CAPTION)
        .style(move |_theme: &Theme| text::Style { color: Some(color) })
        .into()
}

/// The yellow "Current Date and Time (UTC)" strip.
fn clock_label<'a>(i18n: &I18n, now: DateTime<Utc>, colors: &ColorScheme) -> Element<'a, Message> {
    let background = colors.clock_background;
    let foreground = colors.clock_text;
    let time = time_window::format_clock(now);
    let label = i18n.tr_with_args("clock-label", &[("time", time.as_str())]);

    Container::new(Text::new(label).size(typography::BODY))
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(move |_theme: &Theme| container::Style {
            background: Some(background.into()),
            text_color: Some(foreground),
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
