use serde::{Deserialize, Serialize};
use std::fmt;

use crate::role::Role;

/// One of the two shift slots in a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayHalf {
    Morning,
    Afternoon,
}

impl DayHalf {
    pub const ALL: [DayHalf; 2] = [DayHalf::Morning, DayHalf::Afternoon];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayHalf::Morning => "morning",
            DayHalf::Afternoon => "afternoon",
        }
    }
}

impl fmt::Display for DayHalf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Legal shift codes for a role and day half. The empty string comes
/// first and means "unassigned".
pub fn legal_codes(role: Role, half: DayHalf) -> &'static [&'static str] {
    match (role, half) {
        (Role::Manager, DayHalf::Morning) => &["", "Q1", "Q2", "Q3"],
        (Role::Manager, DayHalf::Afternoon) => &[""],
        (Role::Service, DayHalf::Morning) => &["", "S1", "S2", "S3"],
        (Role::Service, DayHalf::Afternoon) => &["", "C1", "C2", "C3"],
        (Role::Other, DayHalf::Morning) => &["", "B1", "B2", "B3"],
        (Role::Other, DayHalf::Afternoon) => &["", "B4", "B5", "B6"],
    }
}

/// True unless the combination has nothing to assign. Managers have no
/// afternoon shift, so that slot is locked.
pub fn is_editable(role: Role, half: DayHalf) -> bool {
    !(role == Role::Manager && half == DayHalf::Afternoon)
}

/// Trimmed membership check against [`legal_codes`].
pub fn is_legal(role: Role, half: DayHalf, code: &str) -> bool {
    let trimmed = code.trim();
    legal_codes(role, half).contains(&trimmed)
}

/// Color category of a shift code, derived from its leading letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorKey {
    Q,
    S,
    C,
    B,
    None,
}

impl ColorKey {
    /// Background hex color for the category, if any. The palette matches
    /// the grid highlight colors of the original tool.
    pub fn background_hex(&self) -> Option<&'static str> {
        match self {
            ColorKey::Q => Some("#1b4f8a"),
            ColorKey::S => Some("#1a5c30"),
            ColorKey::C => Some("#6b5000"),
            ColorKey::B => Some("#7a2800"),
            ColorKey::None => None,
        }
    }
}

/// Foreground color used on top of any shift background.
pub const SHIFT_FOREGROUND_HEX: &str = "#ffffff";

/// Presentation metadata for one slot value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotStyle {
    pub color: ColorKey,
    pub emphasized: bool,
}

/// Style for a code, keyed on the trimmed code's first letter uppercased.
/// Empty or unrecognized codes render unstyled.
pub fn style_of(code: &str) -> SlotStyle {
    let color = match code.trim().chars().next().map(|c| c.to_ascii_uppercase()) {
        Some('Q') => ColorKey::Q,
        Some('S') => ColorKey::S,
        Some('C') => ColorKey::C,
        Some('B') => ColorKey::B,
        _ => ColorKey::None,
    };
    SlotStyle {
        color,
        emphasized: color != ColorKey::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_code_is_always_legal_and_first() {
        for role in Role::ALL {
            for half in DayHalf::ALL {
                let codes = legal_codes(role, half);
                assert_eq!(codes.first(), Some(&""), "{role}/{half}");
                assert!(is_legal(role, half, ""));
                assert!(is_legal(role, half, "  "));
            }
        }
    }

    #[test]
    fn legal_codes_carry_expected_leading_letter() {
        let expected = [
            (Role::Manager, DayHalf::Morning, Some('Q')),
            (Role::Manager, DayHalf::Afternoon, None),
            (Role::Service, DayHalf::Morning, Some('S')),
            (Role::Service, DayHalf::Afternoon, Some('C')),
            (Role::Other, DayHalf::Morning, Some('B')),
            (Role::Other, DayHalf::Afternoon, Some('B')),
        ];
        for (role, half, letter) in expected {
            let non_empty: Vec<&str> = legal_codes(role, half)
                .iter()
                .copied()
                .filter(|code| !code.is_empty())
                .collect();
            match letter {
                Some(letter) => {
                    assert!(!non_empty.is_empty());
                    for code in non_empty {
                        assert!(code.starts_with(letter), "{role}/{half}: {code}");
                    }
                }
                None => assert!(non_empty.is_empty(), "{role}/{half}"),
            }
        }
    }

    #[test]
    fn editability_matrix() {
        assert!(!is_editable(Role::Manager, DayHalf::Afternoon));
        assert!(is_editable(Role::Manager, DayHalf::Morning));
        assert!(is_editable(Role::Service, DayHalf::Afternoon));
        assert!(is_editable(Role::Other, DayHalf::Afternoon));
    }

    #[test]
    fn styles_follow_leading_letter() {
        assert_eq!(style_of("Q2").color, ColorKey::Q);
        assert_eq!(style_of(" s1 ").color, ColorKey::S);
        assert_eq!(style_of("C3").color, ColorKey::C);
        assert_eq!(style_of("B6").color, ColorKey::B);
        assert!(style_of("Q2").emphasized);
        let unstyled = style_of("");
        assert_eq!(unstyled.color, ColorKey::None);
        assert!(!unstyled.emphasized);
        assert_eq!(style_of("X9").color, ColorKey::None);
    }

    #[test]
    fn every_producible_code_has_a_defined_color() {
        for role in Role::ALL {
            for half in DayHalf::ALL {
                for code in legal_codes(role, half) {
                    if code.is_empty() {
                        continue;
                    }
                    let style = style_of(code);
                    assert!(style.color.background_hex().is_some(), "{code}");
                }
            }
        }
    }
}
