// SPDX-License-Identifier: MPL-2.0
//! Domain layer - form values and the rules that turn them into viewer inputs.
//!
//! Apart from `chrono` for calendar arithmetic, this module depends only on
//! `std`, so every rule can be tested without a window.
//!
//! # Modules
//!
//! - [`protocol`]: Record stream protocols ([`Protocol`](protocol::Protocol))
//! - [`stream`]: Stream-code presets and selection ([`StreamPresets`](stream::StreamPresets))
//! - [`buffer`]: Look-back window ([`BufferLength`](buffer::BufferLength))
//! - [`time_window`]: End time parsing and the derived start time

pub mod buffer;
pub mod protocol;
pub mod stream;
pub mod time_window;
