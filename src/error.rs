// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    /// End time text does not match the `dd/MM/yyyy HH:mm:ss` display format.
    #[error("Invalid end time '{0}': expected dd/MM/yyyy HH:mm:ss")]
    InvalidEndTime(String),

    /// End time lies after the current UTC time.
    #[error("End time {0} is in the future")]
    FutureEndTime(String),

    /// Buffer text is not a finite, non-negative number of hours.
    #[error("Invalid buffer length '{0}': expected a non-negative number of hours")]
    InvalidBuffer(String),

    /// The operating system refused to start the viewer process.
    #[error("Failed to launch {program}: {reason}")]
    Launch { program: String, reason: String },

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),
}

impl Error {
    /// Returns the i18n message key used when this error is shown to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::InvalidEndTime(_) => "notification-invalid-end-time",
            Error::FutureEndTime(_) => "notification-future-end-time",
            Error::InvalidBuffer(_) => "notification-invalid-buffer",
            Error::Launch { .. } => "notification-launch-error",
            Error::Io(_) => "notification-io-error",
            Error::Config(_) => "notification-config-load-error",
        }
    }

    /// Returns whether the error is a form validation problem the user can fix.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidEndTime(_) | Error::FutureEndTime(_) | Error::InvalidBuffer(_)
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn launch_error_names_program() {
        let err = Error::Launch {
            program: "scrttv".into(),
            reason: "No such file or directory".into(),
        };
        let text = err.to_string();
        assert!(text.contains("scrttv"));
        assert!(text.contains("No such file"));
    }

    #[test]
    fn validation_errors_are_flagged() {
        assert!(Error::InvalidEndTime("x".into()).is_validation());
        assert!(Error::FutureEndTime("x".into()).is_validation());
        assert!(Error::InvalidBuffer("x".into()).is_validation());
        assert!(!Error::Io("x".into()).is_validation());
    }

    #[test]
    fn i18n_keys_are_distinct_for_validation_errors() {
        assert_eq!(
            Error::InvalidEndTime(String::new()).i18n_key(),
            "notification-invalid-end-time"
        );
        assert_eq!(
            Error::FutureEndTime(String::new()).i18n_key(),
            "notification-future-end-time"
        );
        assert_eq!(
            Error::InvalidBuffer(String::new()).i18n_key(),
            "notification-invalid-buffer"
        );
    }
}
