// SPDX-License-Identifier: MPL-2.0
//! Building and starting the external waveform viewer.
//!
//! - [`command`] - argv builder and display string
//! - [`session`] - `-u` session identifier
//!
//! A [`Launcher`] starts one detached process per call. The caller never waits
//! for the viewer; a helper thread reaps it and logs the exit status.

pub mod command;
pub mod session;

pub use command::{Arg, Request, ViewerCommand, ViewerFlags};

use crate::error::{Error, Result};
use std::process::Command;

/// Starts a viewer process for a derived command.
pub trait Launcher {
    fn launch(&mut self, command: &ViewerCommand) -> Result<()>;
}

/// Spawns the viewer as a real OS process, without a shell.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&mut self, command: &ViewerCommand) -> Result<()> {
        let mut child = Command::new(command.program())
            .args(command.argv())
            .spawn()
            .map_err(|err| Error::Launch {
                program: command.program().to_string(),
                reason: err.to_string(),
            })?;

        let pid = child.id();
        log::info!("Started {} (pid {pid})", command.program());

        let reaper = std::thread::Builder::new()
            .name(format!("viewer-{pid}"))
            .spawn(move || match child.wait() {
                Ok(status) => log::debug!("Viewer pid {pid} exited with {status}"),
                Err(err) => log::warn!("Could not wait for viewer pid {pid}: {err}"),
            });
        if let Err(err) = reaper {
            log::warn!("Could not start reaper thread for pid {pid}: {err}");
        }

        Ok(())
    }
}

/// Logs the command instead of running it (`--dry-run`).
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunLauncher;

impl Launcher for DryRunLauncher {
    fn launch(&mut self, command: &ViewerCommand) -> Result<()> {
        log::info!("Dry run, not starting: {command}");
        Ok(())
    }
}

/// Remembers every command it is asked to launch. Used by tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingLauncher {
    launched: Vec<ViewerCommand>,
    failure: Option<String>,
}

impl RecordingLauncher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A launcher whose every launch fails with `reason`.
    #[must_use]
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            launched: Vec::new(),
            failure: Some(reason.into()),
        }
    }

    #[must_use]
    pub fn launched(&self) -> &[ViewerCommand] {
        &self.launched
    }
}

impl Launcher for RecordingLauncher {
    fn launch(&mut self, command: &ViewerCommand) -> Result<()> {
        if let Some(reason) = &self.failure {
            return Err(Error::Launch {
                program: command.program().to_string(),
                reason: reason.clone(),
            });
        }
        self.launched.push(command.clone());
        Ok(())
    }
}
