// SPDX-License-Identifier: MPL-2.0
//! Record stream protocols offered by the form.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Data source the viewer should read waveforms from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Protocol {
    /// Local FDSN web service.
    #[default]
    #[serde(rename = "FDSNWS")]
    Fdsnws,
    /// Local SeedLink server.
    #[serde(rename = "SLINK")]
    SeedLink,
    /// Router record stream combining several sources.
    #[serde(rename = "ROUTER")]
    Router,
    /// IRIS FDSN web service.
    #[serde(rename = "IRIS-FDSNWS")]
    IrisFdsnws,
    /// Local CAPS server.
    #[serde(rename = "CAPS-SERVER")]
    CapsServer,
}

impl Protocol {
    /// All protocols, in the order the form lists them.
    pub const ALL: [Protocol; 5] = [
        Protocol::Fdsnws,
        Protocol::SeedLink,
        Protocol::Router,
        Protocol::IrisFdsnws,
        Protocol::CapsServer,
    ];

    /// Returns the label shown in the protocol selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Protocol::Fdsnws => "FDSNWS",
            Protocol::SeedLink => "SLINK",
            Protocol::Router => "ROUTER",
            Protocol::IrisFdsnws => "IRIS-FDSNWS",
            Protocol::CapsServer => "CAPS-SERVER",
        }
    }

    /// Returns the i18n key of the description shown next to the selector.
    #[must_use]
    pub fn description_key(self) -> &'static str {
        match self {
            Protocol::Fdsnws => "protocol-description-fdsnws",
            Protocol::SeedLink => "protocol-description-slink",
            Protocol::Router => "protocol-description-router",
            Protocol::IrisFdsnws => "protocol-description-iris-fdsnws",
            Protocol::CapsServer => "protocol-description-caps-server",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
