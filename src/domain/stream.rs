// SPDX-License-Identifier: MPL-2.0
//! Stream-code presets and the resolution of the stream selector text.

use serde::{Deserialize, Serialize};

/// A named NET.STA.LOC.CHA pattern offered as a shortcut in the selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamPreset {
    pub name: String,
    pub codes: String,
}

impl StreamPreset {
    pub fn new(name: impl Into<String>, codes: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            codes: codes.into(),
        }
    }
}

/// Ordered, read-only list of presets.
///
/// Lookups are by exact name. When the selector text equals a preset name the
/// preset's pattern wins, even if the user typed it by hand.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StreamPresets {
    presets: Vec<StreamPreset>,
}

impl StreamPresets {
    /// Builds the list, keeping the first preset when a name repeats.
    #[must_use]
    pub fn new(presets: Vec<StreamPreset>) -> Self {
        let mut unique: Vec<StreamPreset> = Vec::with_capacity(presets.len());
        for preset in presets {
            if !unique.iter().any(|p| p.name == preset.name) {
                unique.push(preset);
            }
        }
        Self { presets: unique }
    }

    /// Returns the pattern registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.presets
            .iter()
            .find(|preset| preset.name == name)
            .map(|preset| preset.codes.as_str())
    }

    /// Maps the selector text to stream codes: preset pattern or the literal text.
    #[must_use]
    pub fn resolve<'a>(&'a self, selection: &'a str) -> &'a str {
        self.get(selection).unwrap_or(selection)
    }

    /// Preset names in display order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().map(|preset| preset.name.as_str())
    }

    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.presets.first().map(|preset| preset.name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
