// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! All user-facing strings come from Fluent `.ftl` resources embedded at
//! build time. The locale is chosen from the CLI, the config file, or the
//! operating system, falling back to `en-US`.

pub mod fluent;
