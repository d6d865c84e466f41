//! Proximity tiers of component declarations.

use serde::Serialize;

/// How close a component declaration is to the point of use.
///
/// Variants are ordered nearest first, so `Proximity::Local < Proximity::Global`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Proximity {
    /// Imported or registered by the file itself.
    Local,
    /// Registered on the owning application.
    App,
    /// Installed by a plugin.
    Plugin,
    /// Registered globally.
    Global,
    /// Declared somewhere in the project but not registered where it is used.
    OutOfScope,
}

impl Proximity {
    /// Every tier, nearest first.
    pub const ALL: [Proximity; 5] = [
        Proximity::Local,
        Proximity::App,
        Proximity::Plugin,
        Proximity::Global,
        Proximity::OutOfScope,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::App => "app",
            Self::Plugin => "plugin",
            Self::Global => "global",
            Self::OutOfScope => "out-of-scope",
        }
    }

    /// Tiers from the nearest up to and including `furthest`.
    pub fn up_to(furthest: Proximity) -> impl Iterator<Item = Proximity> {
        Self::ALL.into_iter().take_while(move |p| *p <= furthest)
    }
}

impl std::fmt::Display for Proximity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
