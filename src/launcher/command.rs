// SPDX-License-Identifier: MPL-2.0
//! Viewer command line as a list of discrete arguments.
//!
//! The argv list is what gets executed; no shell ever sees it. The display
//! string is for logs and mirrors the quoting of the legacy shell command.

use crate::config::LauncherConfig;
use crate::domain::protocol::Protocol;
use crate::domain::time_window::TimeWindow;
use std::fmt;

/// One logical argument of the viewer command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    /// A bare switch such as `--debug`.
    Switch(&'static str),
    /// An option whose value is the next argv entry, such as `-H host`.
    Pair(&'static str, String),
    /// A single `key=value` argv entry. `quoted` only affects the display string.
    Assign {
        key: &'static str,
        value: String,
        quoted: bool,
    },
}

impl Arg {
    fn assign(key: &'static str, value: impl Into<String>) -> Self {
        Arg::Assign {
            key,
            value: value.into(),
            quoted: false,
        }
    }

    fn quoted(key: &'static str, value: impl Into<String>) -> Self {
        Arg::Assign {
            key,
            value: value.into(),
            quoted: true,
        }
    }

    fn push_argv(&self, argv: &mut Vec<String>) {
        match self {
            Arg::Switch(flag) => argv.push((*flag).to_string()),
            Arg::Pair(flag, value) => {
                argv.push((*flag).to_string());
                argv.push(value.clone());
            }
            Arg::Assign { key, value, .. } => argv.push(format!("{key}={value}")),
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Switch(flag) => f.write_str(flag),
            Arg::Pair(flag, value) => write!(f, "{flag} {value}"),
            Arg::Assign {
                key,
                value,
                quoted: true,
            } => write!(f, "{key}=\"{value}\""),
            Arg::Assign {
                key,
                value,
                quoted: false,
            } => write!(f, "{key}={value}"),
        }
    }
}

/// Display toggles forwarded to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewerFlags {
    pub show_picks: bool,
    pub no_inventory: bool,
    pub offline: bool,
}

/// Everything the command needs beyond the fixed configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request<'a> {
    pub session: &'a str,
    pub protocol: Protocol,
    pub window: TimeWindow,
    pub stream_codes: &'a str,
    pub flags: ViewerFlags,
}

/// A fully derived viewer invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerCommand {
    program: String,
    args: Vec<Arg>,
}

impl ViewerCommand {
    /// Builds the invocation in the order the viewer has always received it.
    #[must_use]
    pub fn build(config: &LauncherConfig, request: &Request<'_>) -> Self {
        let mut args = Vec::with_capacity(24);

        if config.debug {
            args.push(Arg::Switch("--debug"));
        }
        args.push(Arg::Pair("-u", request.session.to_string()));
        args.push(Arg::Pair("-H", config.remote_host.clone()));
        args.push(Arg::Pair("-d", config.database.clone()));
        args.push(Arg::assign("--maxDelay", "0"));
        args.push(Arg::Pair(
            "-I",
            config.endpoints.endpoint(request.protocol).to_string(),
        ));
        args.push(Arg::quoted("--resortAutomatically", "false"));
        args.push(Arg::quoted("--autoApplyFilter", "true"));
        args.push(Arg::quoted(
            "--buffer-size",
            request.window.buffer_seconds().to_string(),
        ));
        args.push(Arg::quoted("--start-time", request.window.start_text()));
        args.push(Arg::quoted("--end-time", request.window.end_text()));
        args.push(Arg::quoted("--streams.codes", request.stream_codes));
        args.push(Arg::quoted(
            "--scheme.colors.records.foreground",
            config.colors.foreground.clone(),
        ));
        args.push(Arg::quoted(
            "--scheme.colors.records.background",
            config.colors.background.clone(),
        ));
        args.push(Arg::quoted(
            "--scheme.colors.records.alternateBackground",
            config.colors.alternate_background.clone(),
        ));
        args.push(Arg::quoted(
            "--scheme.colors.records.gaps",
            config.colors.gaps.clone(),
        ));
        args.push(Arg::assign(
            "--showPicks",
            request.flags.show_picks.to_string(),
        ));
        if request.flags.no_inventory {
            args.push(Arg::Switch("--no-inventory"));
        }
        if request.flags.offline {
            args.push(Arg::Switch("--offline"));
        }

        Self {
            program: config.program.clone(),
            args,
        }
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments as handed to the OS, program name excluded.
    #[must_use]
    pub fn argv(&self) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.args.len() + 4);
        for arg in &self.args {
            arg.push_argv(&mut argv);
        }
        argv
    }

    /// Returns whether a bare switch is present.
    #[must_use]
    pub fn has_switch(&self, flag: &str) -> bool {
        self.args
            .iter()
            .any(|arg| matches!(arg, Arg::Switch(f) if *f == flag))
    }

    /// Returns the value of a `-x value` or `--key=value` argument.
    #[must_use]
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.args.iter().find_map(|arg| match arg {
            Arg::Pair(flag, value) if *flag == name => Some(value.as_str()),
            Arg::Assign { key, value, .. } if *key == name => Some(value.as_str()),
            _ => None,
        })
    }
}

impl fmt::Display for ViewerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::buffer::BufferLength;
    use chrono::{TimeZone, Utc};

    fn window() -> TimeWindow {
        let end = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        TimeWindow::ending_at(end, BufferLength::parse("1").unwrap()).unwrap()
    }

    fn build(flags: ViewerFlags) -> ViewerCommand {
        let config = LauncherConfig::default();
        ViewerCommand::build(
            &config,
            &Request {
                session: "42-sysop",
                protocol: Protocol::Fdsnws,
                window: window(),
                stream_codes: "FJ.*.*.?HZ",
                flags,
            },
        )
    }

    #[test]
    fn display_string_matches_legacy_quoting() {
        let text = build(ViewerFlags::default()).to_string();

        assert!(text.starts_with("scrttv --debug -u 42-sysop -H localhost:18180 -d "));
        assert!(text.contains("--maxDelay=0 -I fdsnws://localhost:8081"));
        assert!(text.contains("--resortAutomatically=\"false\" --autoApplyFilter=\"true\""));
        assert!(text.contains("--buffer-size=\"3600\""));
        assert!(text.contains("--start-time=\"2024-01-01 23:00:00\""));
        assert!(text.contains("--end-time=\"2024-01-02 00:00:00\""));
        assert!(text.contains("--streams.codes=\"FJ.*.*.?HZ\""));
        assert!(text.contains("--scheme.colors.records.gaps=\"ff7f7f\""));
        assert!(text.ends_with("--showPicks=false"));
    }

    #[test]
    fn argv_keeps_values_with_spaces_in_one_entry() {
        let argv = build(ViewerFlags::default()).argv();

        assert!(argv.contains(&"--start-time=2024-01-01 23:00:00".to_string()));
        assert!(argv.contains(&"--streams.codes=FJ.*.*.?HZ".to_string()));
        let host = argv.iter().position(|a| a == "-H").expect("-H present");
        assert_eq!(argv[host + 1], "localhost:18180");
        assert!(argv.iter().all(|a| !a.contains('"')));
    }

    #[test]
    fn argv_order_is_stable() {
        let argv = build(ViewerFlags::default()).argv();
        assert_eq!(
            &argv[..6],
            &["--debug", "-u", "42-sysop", "-H", "localhost:18180", "-d"]
        );
        assert_eq!(argv.last().map(String::as_str), Some("--showPicks=false"));
    }

    #[test]
    fn optional_switches_follow_their_toggles() {
        let plain = build(ViewerFlags::default());
        assert!(!plain.has_switch("--no-inventory"));
        assert!(!plain.has_switch("--offline"));

        let no_inventory = build(ViewerFlags {
            no_inventory: true,
            ..ViewerFlags::default()
        });
        assert!(no_inventory.has_switch("--no-inventory"));
        assert!(!no_inventory.has_switch("--offline"));

        let offline = build(ViewerFlags {
            offline: true,
            ..ViewerFlags::default()
        });
        assert!(offline.has_switch("--offline"));
        assert!(!offline.has_switch("--no-inventory"));

        // Toggles leave every other argument untouched
        let mut base = plain.argv();
        base.push("--no-inventory".to_string());
        base.push("--offline".to_string());
        let both = build(ViewerFlags {
            no_inventory: true,
            offline: true,
            ..ViewerFlags::default()
        });
        assert_eq!(both.argv(), base);
    }

    #[test]
    fn show_picks_is_always_present() {
        let shown = build(ViewerFlags {
            show_picks: true,
            ..ViewerFlags::default()
        });
        assert_eq!(shown.value_of("--showPicks"), Some("true"));
        assert_eq!(
            build(ViewerFlags::default()).value_of("--showPicks"),
            Some("false")
        );
    }

    #[test]
    fn debug_switch_can_be_disabled() {
        let config = LauncherConfig {
            debug: false,
            ..LauncherConfig::default()
        };
        let command = ViewerCommand::build(
            &config,
            &Request {
                session: "1-a",
                protocol: Protocol::SeedLink,
                window: window(),
                stream_codes: "AU.*.*.?HZ",
                flags: ViewerFlags::default(),
            },
        );
        assert!(!command.has_switch("--debug"));
        assert_eq!(command.value_of("-I"), Some("slink://localhost:18000"));
    }
}
