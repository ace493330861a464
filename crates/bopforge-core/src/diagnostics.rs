// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Non-fatal advisories raised while building or exporting a level.
//!
//! A [`Diagnostics`] context is owned by the caller and passed to the few
//! operations that can produce advisories. Every warning is recorded and
//! forwarded to the `log` facade at `warn` level. Deprecation notices are
//! only reported the first time per context.

use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// A deprecated API whose use is reported once per [`Diagnostics`] context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deprecation {
    /// Reading the whole point list through the legacy accessor.
    GetPositionPoints,
    /// Replacing the whole point list through the legacy setter.
    SetPositionPoints,
    /// Using the `transparency_enabled` flag removed in game version 1.1.0.
    TransparencyEnabled,
}

impl Deprecation {
    /// The advice printed alongside the notice.
    pub fn advice(&self) -> &'static str {
        match self {
            Self::GetPositionPoints => "use the position point methods to read points instead",
            Self::SetPositionPoints => "use the position point methods to set points instead",
            Self::TransparencyEnabled => {
                "the flag was removed in game version 1.1.0, use the opacity directly"
            }
        }
    }
}

impl fmt::Display for Deprecation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::GetPositionPoints => "getting position_points directly",
            Self::SetPositionPoints => "setting position_points directly",
            Self::TransparencyEnabled => "using transparency_enabled",
        })
    }
}

/// A single non-fatal advisory.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Warning {
    /// The level holds more entities than an online server accepts.
    #[error(
        "level has {count} blocks, which exceeds the server block limit of {limit}; \
         it can still be played offline but not published or imported online"
    )]
    ServerBlockLimit {
        /// Number of entities in the level.
        count: usize,
        /// The configured limit.
        limit: usize,
    },
    /// A deprecated API was used.
    #[error("{0} is deprecated and will be removed in a future version: {advice}", advice = .0.advice())]
    Deprecated(Deprecation),
    /// A decal was given a depth, which defeats the purpose of a decal.
    #[error("decal \"{name}\" has a Z scale of {depth}; consider an item mesh instead")]
    DecalDepth {
        /// Name of the offending entity.
        name: String,
        /// The requested Z scale.
        depth: f64,
    },
}

/// Collects the warnings produced during one authoring session.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
    deprecations: HashSet<Deprecation>,
}

impl Diagnostics {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a warning and forwards it to the logger.
    pub fn report(&mut self, warning: Warning) {
        if let Warning::Deprecated(deprecation) = &warning {
            if !self.deprecations.insert(*deprecation) {
                return;
            }
        }
        log::warn!("{warning}");
        self.warnings.push(warning);
    }

    /// Records a deprecation notice, once per context.
    #[inline]
    pub fn deprecated(&mut self, deprecation: Deprecation) {
        self.report(Warning::Deprecated(deprecation));
    }

    /// Returns `true` if this deprecation was already reported.
    #[inline]
    pub fn has_reported(&self, deprecation: Deprecation) -> bool {
        self.deprecations.contains(&deprecation)
    }

    /// The warnings recorded so far, oldest first.
    #[inline]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Drains the recorded warnings. Deprecations stay marked as reported.
    pub fn take(&mut self) -> Vec<Warning> {
        std::mem::take(&mut self.warnings)
    }

    /// Returns `true` if nothing has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deprecations_are_reported_once() {
        let mut diagnostics = Diagnostics::new();

        diagnostics.deprecated(Deprecation::GetPositionPoints);
        diagnostics.deprecated(Deprecation::GetPositionPoints);
        diagnostics.deprecated(Deprecation::SetPositionPoints);

        assert_eq!(
            diagnostics.warnings(),
            &[
                Warning::Deprecated(Deprecation::GetPositionPoints),
                Warning::Deprecated(Deprecation::SetPositionPoints),
            ]
        );
        assert!(diagnostics.has_reported(Deprecation::GetPositionPoints));
        assert!(!diagnostics.has_reported(Deprecation::TransparencyEnabled));
    }

    #[test]
    fn test_other_warnings_repeat() {
        let mut diagnostics = Diagnostics::new();
        let warning = Warning::ServerBlockLimit {
            count: 2049,
            limit: 2048,
        };

        diagnostics.report(warning.clone());
        diagnostics.report(warning);

        assert_eq!(diagnostics.warnings().len(), 2);
    }

    #[test]
    fn test_take_keeps_deprecation_memory() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.deprecated(Deprecation::GetPositionPoints);

        let drained = diagnostics.take();
        assert_eq!(drained.len(), 1);
        assert!(diagnostics.is_empty());

        diagnostics.deprecated(Deprecation::GetPositionPoints);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_contexts_are_independent() {
        let mut first = Diagnostics::new();
        let mut second = Diagnostics::new();
        first.deprecated(Deprecation::TransparencyEnabled);
        second.deprecated(Deprecation::TransparencyEnabled);
        assert_eq!(first.warnings().len(), 1);
        assert_eq!(second.warnings().len(), 1);
    }

    #[test]
    fn test_messages_name_the_numbers() {
        let warning = Warning::ServerBlockLimit {
            count: 3000,
            limit: 2048,
        };
        let message = warning.to_string();
        assert!(message.contains("3000"));
        assert!(message.contains("2048"));
    }
}
