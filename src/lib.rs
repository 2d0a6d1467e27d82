// SPDX-License-Identifier: MPL-2.0
//! `seiswave_scanner` is a small launcher form for the `scrttv` waveform
//! viewer, built with the Iced GUI framework.
//!
//! The user picks an end time, a look-back buffer, a record source and a set
//! of stream codes; the application derives the viewer's command line and
//! starts it as a detached process.
//!
//! Everything below [`app`] and [`ui`] is toolkit-independent and can be
//! driven directly from tests.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod form;
pub mod i18n;
pub mod launcher;
pub mod ui;
