//! Circuit configuration: AC/DC and phase count.
//!
//! The scenario engines branch on these instead of on loose flags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// AC phase arrangement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Phase {
    #[default]
    Single,
    Three,
}

impl Phase {
    /// All phase variants for selection lists
    pub const ALL: [Phase; 2] = [Phase::Single, Phase::Three];

    /// Ungrounded (hot) conductors carrying load current
    pub fn current_carrying_conductors(self) -> u32 {
        match self {
            Phase::Single => 2,
            Phase::Three => 3,
        }
    }

    /// Poles on the overcurrent device
    pub fn breaker_poles(self) -> u32 {
        match self {
            Phase::Single => 2,
            Phase::Three => 3,
        }
    }

    /// Display name
    pub fn display_name(self) -> &'static str {
        match self {
            Phase::Single => "Single-phase",
            Phase::Three => "Three-phase",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Circuit type for amperage derivation and voltage drop.
///
/// ## JSON
///
/// ```json
/// "Dc"
/// { "Ac": "Three" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Circuit {
    Dc,
    Ac(Phase),
}

impl Default for Circuit {
    fn default() -> Self {
        Circuit::Ac(Phase::Single)
    }
}

impl Circuit {
    /// Build from the form's AC/DC and three-phase switches.
    /// Phase is ignored for DC.
    pub fn from_flags(is_ac: bool, is_three_phase: bool) -> Self {
        match (is_ac, is_three_phase) {
            (false, _) => Circuit::Dc,
            (true, false) => Circuit::Ac(Phase::Single),
            (true, true) => Circuit::Ac(Phase::Three),
        }
    }

    pub fn is_ac(self) -> bool {
        matches!(self, Circuit::Ac(_))
    }

    pub fn is_three_phase(self) -> bool {
        matches!(self, Circuit::Ac(Phase::Three))
    }

    /// Conductors carrying load current.
    ///
    /// DC is counted as a single conductor, matching the form it replaces.
    pub fn current_carrying_conductors(self) -> u32 {
        match self {
            Circuit::Dc => 1,
            Circuit::Ac(phase) => phase.current_carrying_conductors(),
        }
    }

    /// Conductors in the raceway: current-carrying plus one neutral/ground
    pub fn total_wires(self) -> u32 {
        self.current_carrying_conductors() + 1
    }

    /// Installed conductor breakdown for reports
    pub fn wire_breakdown(self) -> &'static str {
        match self {
            Circuit::Ac(Phase::Three) => "5 Total (3 Hots, 1 Neutral, 1 Ground)",
            Circuit::Ac(Phase::Single) => "3 Total (1 Hot, 1 Neutral, 1 Ground)",
            Circuit::Dc => "2 Total (1 Hot, 1 Ground)",
        }
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Circuit::Dc => write!(f, "DC"),
            Circuit::Ac(phase) => write!(f, "AC {}", phase),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags() {
        assert_eq!(Circuit::from_flags(false, true), Circuit::Dc);
        assert_eq!(Circuit::from_flags(true, false), Circuit::Ac(Phase::Single));
        assert_eq!(Circuit::from_flags(true, true), Circuit::Ac(Phase::Three));
    }

    #[test]
    fn test_conductor_counts() {
        assert_eq!(Circuit::Dc.total_wires(), 2);
        assert_eq!(Circuit::Ac(Phase::Single).total_wires(), 3);
        assert_eq!(Circuit::Ac(Phase::Three).total_wires(), 4);
    }

    #[test]
    fn test_breaker_poles() {
        assert_eq!(Phase::Single.breaker_poles(), 2);
        assert_eq!(Phase::Three.breaker_poles(), 3);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Circuit::Ac(Phase::Three)).unwrap();
        assert_eq!(json, r#"{"Ac":"Three"}"#);
        let dc: Circuit = serde_json::from_str("\"Dc\"").unwrap();
        assert_eq!(dc, Circuit::Dc);
    }

    #[test]
    fn test_display() {
        assert_eq!(Circuit::Ac(Phase::Single).to_string(), "AC Single-phase");
        assert_eq!(Circuit::Dc.to_string(), "DC");
    }
}
