// SPDX-License-Identifier: MPL-2.0
//! Application root state and the iced wiring around the launcher form.
//!
//! `App` owns the form controller, the launcher that starts the viewer, the
//! toast queue and the clock. Messages go through [`update`]; rendering is in
//! [`view`].

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, LauncherConfig};
use crate::form::Controller;
use crate::i18n::fluent::I18n;
use crate::launcher::{DryRunLauncher, Launcher, ProcessLauncher};
use crate::ui::design_tokens::sizing;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::Appearance;
use chrono::{DateTime, Utc};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub struct App {
    pub i18n: I18n,
    form: Controller,
    launcher: Box<dyn Launcher>,
    notifications: notifications::Manager,
    /// Resolved once at startup; `System` detection is not cheap.
    appearance: Appearance,
    /// Time shown in the clock strip, refreshed every tick.
    clock: DateTime<Utc>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("form", self.form.state())
            .field("appearance", &self.appearance)
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(sizing::WINDOW_WIDTH, sizing::WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(sizing::WINDOW_WIDTH, sizing::WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the config, picks the locale and the launcher, and queues a
    /// warning toast when the config file could not be read.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let launcher: Box<dyn Launcher> = if flags.dry_run {
            log::info!("Dry run enabled; the viewer will not be started");
            Box::new(DryRunLauncher)
        } else {
            Box::new(ProcessLauncher)
        };

        let mut app = Self::with_parts(&config, i18n, launcher, Utc::now());
        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        (app, Task::none())
    }

    /// Assembles an `App` from already-resolved parts.
    pub fn with_parts(
        config: &Config,
        i18n: I18n,
        launcher: Box<dyn Launcher>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            i18n,
            form: Controller::new(LauncherConfig::from(config), now),
            launcher,
            notifications: notifications::Manager::new(),
            appearance: config.general.theme_mode.resolve(),
            clock: now,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.appearance.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.update_at(message, Utc::now())
    }

    /// Applies `message` as if the wall clock read `now`.
    pub fn update_at(&mut self, message: Message, now: DateTime<Utc>) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            form: &mut self.form,
            launcher: self.launcher.as_mut(),
            notifications: &mut self.notifications,
            clock: &mut self.clock,
        };
        update::update(&mut ctx, message, now)
    }

    fn view(&self) -> Element<'_, Message> {
        let config = self.form.config();
        view::view(view::ViewContext {
            i18n: &self.i18n,
            state: self.form.state(),
            buffer_choices: &config.buffer_choices,
            preset_names: config.presets.names().map(String::from).collect(),
            stream_codes: self.form.stream_codes(),
            clock: self.clock,
            colors: self.appearance.colors(),
            notifications: &self.notifications,
        })
    }

    #[must_use]
    pub fn form(&self) -> &Controller {
        &self.form
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }
}
