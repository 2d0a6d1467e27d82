// SPDX-License-Identifier: MPL-2.0
//! The launcher form: its field values and the controller that turns them
//! into a viewer invocation.
//!
//! The controller is toolkit-agnostic. The iced application forwards user
//! messages to it and renders whatever [`FormState`] holds; tests drive it
//! directly with a fixed clock and a [`RecordingLauncher`](crate::launcher::RecordingLauncher).

use crate::config::LauncherConfig;
use crate::domain::buffer::BufferLength;
use crate::domain::protocol::Protocol;
use crate::domain::time_window::{self, TimeWindow};
use crate::error::Result;
use crate::launcher::{Launcher, Request, ViewerCommand, ViewerFlags};
use chrono::{DateTime, Utc};

/// Current values of every form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    /// End time text, `dd/MM/yyyy HH:mm:ss`, UTC.
    pub end_time: String,
    /// Buffer length text in hours.
    pub buffer: String,
    pub protocol: Protocol,
    /// Preset name or free-text stream-code pattern.
    pub stream_selection: String,
    pub flags: ViewerFlags,
}

impl FormState {
    /// Initial values: end time `now`, first buffer choice, first protocol,
    /// first preset, all toggles off.
    #[must_use]
    pub fn initial(config: &LauncherConfig, now: DateTime<Utc>) -> Self {
        Self {
            end_time: time_window::format_end_time(now),
            buffer: config.buffer_choices.first().cloned().unwrap_or_default(),
            protocol: Protocol::default(),
            stream_selection: config.presets.first_name().unwrap_or_default().to_string(),
            flags: ViewerFlags::default(),
        }
    }
}

/// Owns the form state and the immutable launcher configuration.
#[derive(Debug, Clone)]
pub struct Controller {
    config: LauncherConfig,
    state: FormState,
}

impl Controller {
    #[must_use]
    pub fn new(config: LauncherConfig, now: DateTime<Utc>) -> Self {
        let state = FormState::initial(&config, now);
        Self { config, state }
    }

    #[must_use]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    /// Sets the end time to `now`.
    pub fn reset_end_time(&mut self, now: DateTime<Utc>) {
        self.state.end_time = time_window::format_end_time(now);
    }

    pub fn set_end_time(&mut self, text: String) {
        self.state.end_time = text;
    }

    pub fn set_buffer(&mut self, text: String) {
        self.state.buffer = text;
    }

    pub fn set_protocol(&mut self, protocol: Protocol) {
        self.state.protocol = protocol;
    }

    /// Free-text edit of the stream selection.
    pub fn set_stream_selection(&mut self, selection: String) {
        self.state.stream_selection = selection;
    }

    /// Selects a preset from the dropdown; logged when the choice changes.
    pub fn pick_stream_preset(&mut self, name: String) {
        if self.state.stream_selection != name {
            log::info!("Stream codes: {}", self.config.presets.resolve(&name));
        }
        self.state.stream_selection = name;
    }

    pub fn set_show_picks(&mut self, enabled: bool) {
        self.state.flags.show_picks = enabled;
    }

    pub fn set_no_inventory(&mut self, enabled: bool) {
        self.state.flags.no_inventory = enabled;
    }

    pub fn set_offline(&mut self, enabled: bool) {
        self.state.flags.offline = enabled;
    }

    /// Stream codes the current selection resolves to.
    #[must_use]
    pub fn stream_codes(&self) -> &str {
        self.config.presets.resolve(&self.state.stream_selection)
    }

    /// Endpoint URI of the selected protocol.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.config.endpoints.endpoint(self.state.protocol)
    }

    /// Validates the form and derives the viewer command, without launching.
    pub fn prepare(&self, now: DateTime<Utc>, session: &str) -> Result<ViewerCommand> {
        let end = time_window::parse_end_time(&self.state.end_time)?;
        time_window::ensure_not_future(end, now)?;

        let buffer = BufferLength::parse(&self.state.buffer)?;
        let window = TimeWindow::ending_at(end, buffer)?;

        Ok(ViewerCommand::build(
            &self.config,
            &Request {
                session,
                protocol: self.state.protocol,
                window,
                stream_codes: self.stream_codes(),
                flags: self.state.flags,
            },
        ))
    }

    /// Validates, derives, and launches the viewer.
    ///
    /// Validation failures are logged as warnings and nothing is launched.
    /// Launch failures are logged as errors. Either way the form keeps its
    /// values so the user can correct and resubmit.
    pub fn submit(
        &self,
        now: DateTime<Utc>,
        session: &str,
        launcher: &mut dyn Launcher,
    ) -> Result<ViewerCommand> {
        let command = self.prepare(now, session).inspect_err(|err| {
            log::warn!("Submission rejected: {err}");
        })?;

        log::info!("Launching viewer: {command}");
        launcher.launch(&command).inspect_err(|err| {
            log::error!("An error occurred: {err}");
        })?;

        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::launcher::RecordingLauncher;
    use chrono::TimeZone;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    fn controller() -> Controller {
        Controller::new(LauncherConfig::default(), at(2024, 1, 2, 0, 0, 0))
    }

    #[test]
    fn initial_state_uses_first_choices() {
        let state = controller().state().clone();
        assert_eq!(state.end_time, "02/01/2024 00:00:00");
        assert_eq!(state.buffer, "0.1");
        assert_eq!(state.protocol, Protocol::Fdsnws);
        assert_eq!(state.stream_selection, "Fijian Stations");
        assert_eq!(state.flags, ViewerFlags::default());
    }

    #[test]
    fn reset_end_time_uses_given_clock() {
        let mut controller = controller();
        controller.set_end_time("garbage".into());
        controller.reset_end_time(at(2025, 5, 6, 7, 8, 9));
        assert_eq!(controller.state().end_time, "06/05/2025 07:08:09");
    }

    #[test]
    fn prepare_matches_reference_example() {
        let mut controller = controller();
        controller.set_buffer("1".into());

        let command = controller
            .prepare(at(2024, 1, 2, 0, 0, 0), "7-sysop")
            .expect("valid form");
        let text = command.to_string();

        assert_eq!(command.value_of("--buffer-size"), Some("3600"));
        assert!(text.contains("--start-time=\"2024-01-01 23:00:00\""));
        assert!(text.contains("--end-time=\"2024-01-02 00:00:00\""));
        assert!(text.contains("--streams.codes=\"FJ.*.*.?HZ\""));
        assert!(text.contains("-I fdsnws://localhost:8081"));
        assert!(text.contains("--showPicks=false"));
        assert!(!text.contains("--no-inventory"));
        assert!(!text.contains("--offline"));
    }

    #[test]
    fn each_protocol_selects_its_endpoint() {
        let mut controller = controller();
        let config = LauncherConfig::default();
        for protocol in Protocol::ALL {
            controller.set_protocol(protocol);
            let command = controller.prepare(at(2024, 1, 2, 0, 0, 0), "1-u").unwrap();
            assert_eq!(command.value_of("-I"), Some(config.endpoints.endpoint(protocol)));
            assert_eq!(controller.endpoint(), config.endpoints.endpoint(protocol));
        }
    }

    #[test]
    fn picking_a_preset_selects_its_codes() {
        let mut controller = controller();
        controller.pick_stream_preset("Australian Arrays".into());
        assert_eq!(controller.state().stream_selection, "Australian Arrays");
        assert!(controller.stream_codes().starts_with("AU.AS*..?HZ"));
    }

    #[test]
    fn free_text_streams_pass_through() {
        let mut controller = controller();
        controller.set_stream_selection("AU.ARMA.*.?HZ".into());
        assert_eq!(controller.stream_codes(), "AU.ARMA.*.?HZ");
    }

    #[test]
    fn invalid_end_time_is_recoverable() {
        let mut controller = controller();
        controller.set_end_time("2024-01-02".into());
        let mut launcher = RecordingLauncher::new();

        let result = controller.submit(at(2024, 1, 2, 0, 0, 0), "1-u", &mut launcher);

        assert!(matches!(result, Err(Error::InvalidEndTime(_))));
        assert!(launcher.launched().is_empty());
        assert_eq!(controller.state().end_time, "2024-01-02");
    }

    #[test]
    fn future_end_time_never_launches() {
        let controller = Controller::new(LauncherConfig::default(), at(2024, 1, 2, 0, 0, 1));
        let mut launcher = RecordingLauncher::new();

        let result = controller.submit(at(2024, 1, 2, 0, 0, 0), "1-u", &mut launcher);

        assert!(matches!(result, Err(Error::FutureEndTime(_))));
        assert!(launcher.launched().is_empty());
    }

    #[test]
    fn future_check_runs_before_buffer_validation() {
        let mut controller = Controller::new(LauncherConfig::default(), at(2030, 1, 1, 0, 0, 0));
        controller.set_buffer("lots".into());
        let result = controller.prepare(at(2024, 1, 1, 0, 0, 0), "1-u");
        assert!(matches!(result, Err(Error::FutureEndTime(_))));
    }

    #[test]
    fn invalid_buffer_is_rejected() {
        let mut controller = controller();
        controller.set_buffer("-2".into());
        let result = controller.prepare(at(2024, 1, 2, 0, 0, 0), "1-u");
        assert!(matches!(result, Err(Error::InvalidBuffer(_))));
    }

    #[test]
    fn successful_submit_launches_once_per_call() {
        let controller = controller();
        let mut launcher = RecordingLauncher::new();
        let now = at(2024, 1, 2, 0, 0, 0);

        controller.submit(now, "1-u", &mut launcher).unwrap();
        controller.submit(now, "2-u", &mut launcher).unwrap();

        assert_eq!(launcher.launched().len(), 2);
        assert_eq!(launcher.launched()[1].value_of("-u"), Some("2-u"));
    }

    #[test]
    fn launch_failure_is_returned() {
        let controller = controller();
        let mut launcher = RecordingLauncher::failing("No such file or directory");
        let result = controller.submit(at(2024, 1, 2, 0, 0, 0), "1-u", &mut launcher);
        assert!(matches!(result, Err(Error::Launch { .. })));
    }

    #[test]
    fn toggles_map_to_flags() {
        let mut controller = controller();
        controller.set_show_picks(true);
        controller.set_offline(true);
        let command = controller.prepare(at(2024, 1, 2, 0, 0, 0), "1-u").unwrap();

        assert_eq!(command.value_of("--showPicks"), Some("true"));
        assert!(command.has_switch("--offline"));
        assert!(!command.has_switch("--no-inventory"));
    }
}
