//! Declared weekly frequency of a habit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Weekly target a habit is tracked against.
///
/// Labels outside the known set (or a missing label) map to
/// [`Regularity::Unrecognized`], which scores like [`Regularity::Everyday`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum Regularity {
    Everyday,
    SixTimesAWeek,
    FiveTimesAWeek,
    FourTimesAWeek,
    ThreeTimesAWeek,
    TwiceAWeek,
    OnceAWeek,
    Unrecognized,
}

impl Regularity {
    /// Options offered when creating or editing a habit, in picker order.
    pub const OPTIONS: [Regularity; 7] = [
        Regularity::Everyday,
        Regularity::OnceAWeek,
        Regularity::TwiceAWeek,
        Regularity::ThreeTimesAWeek,
        Regularity::FourTimesAWeek,
        Regularity::FiveTimesAWeek,
        Regularity::SixTimesAWeek,
    ];

    /// Parse a display label, ignoring ASCII case. Never fails.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "everyday" => Regularity::Everyday,
            "6 times a week" => Regularity::SixTimesAWeek,
            "5 times a week" => Regularity::FiveTimesAWeek,
            "4 times a week" => Regularity::FourTimesAWeek,
            "3 times a week" => Regularity::ThreeTimesAWeek,
            "2 times a week" => Regularity::TwiceAWeek,
            "once a week" => Regularity::OnceAWeek,
            _ => Regularity::Unrecognized,
        }
    }

    /// Display label, `None` for [`Regularity::Unrecognized`].
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Regularity::Everyday => Some("Everyday"),
            Regularity::SixTimesAWeek => Some("6 Times a Week"),
            Regularity::FiveTimesAWeek => Some("5 Times a Week"),
            Regularity::FourTimesAWeek => Some("4 Times a Week"),
            Regularity::ThreeTimesAWeek => Some("3 Times a Week"),
            Regularity::TwiceAWeek => Some("2 Times a Week"),
            Regularity::OnceAWeek => Some("Once a Week"),
            Regularity::Unrecognized => None,
        }
    }

    /// Expected completions per 7 days.
    pub fn weekly_target(&self) -> u32 {
        match self {
            Regularity::Everyday => 7,
            Regularity::SixTimesAWeek => 6,
            Regularity::FiveTimesAWeek => 5,
            Regularity::FourTimesAWeek => 4,
            Regularity::ThreeTimesAWeek => 3,
            Regularity::TwiceAWeek => 2,
            Regularity::OnceAWeek => 1,
            Regularity::Unrecognized => 7,
        }
    }
}

impl From<Option<String>> for Regularity {
    fn from(label: Option<String>) -> Self {
        label
            .as_deref()
            .map(Regularity::from_label)
            .unwrap_or(Regularity::Unrecognized)
    }
}

impl From<Regularity> for Option<String> {
    fn from(regularity: Regularity) -> Self {
        regularity.label().map(str::to_string)
    }
}

impl fmt::Display for Regularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().unwrap_or("Unrecognized"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekly_targets() {
        assert_eq!(Regularity::Everyday.weekly_target(), 7);
        assert_eq!(Regularity::SixTimesAWeek.weekly_target(), 6);
        assert_eq!(Regularity::ThreeTimesAWeek.weekly_target(), 3);
        assert_eq!(Regularity::OnceAWeek.weekly_target(), 1);
        assert_eq!(Regularity::Unrecognized.weekly_target(), 7);
    }

    #[test]
    fn test_from_label_is_case_insensitive() {
        assert_eq!(Regularity::from_label("everyday"), Regularity::Everyday);
        assert_eq!(Regularity::from_label("ONCE A WEEK"), Regularity::OnceAWeek);
        assert_eq!(Regularity::from_label("3 times A week"), Regularity::ThreeTimesAWeek);
    }

    #[test]
    fn test_unknown_label_falls_back() {
        assert_eq!(Regularity::from_label("7 Times a Week"), Regularity::Unrecognized);
        assert_eq!(Regularity::from_label(""), Regularity::Unrecognized);
        assert_eq!(Regularity::from(None), Regularity::Unrecognized);
    }

    #[test]
    fn test_labels_parse_back() {
        for option in Regularity::OPTIONS {
            let label = option.label().unwrap();
            assert_eq!(Regularity::from_label(label), option);
        }
    }

    #[test]
    fn test_serde_uses_display_label() {
        let json = serde_json::to_string(&Regularity::TwiceAWeek).unwrap();
        assert_eq!(json, "\"2 Times a Week\"");

        let parsed: Regularity = serde_json::from_str("\"4 times a week\"").unwrap();
        assert_eq!(parsed, Regularity::FourTimesAWeek);

        let parsed: Regularity = serde_json::from_str("null").unwrap();
        assert_eq!(parsed, Regularity::Unrecognized);

        assert_eq!(serde_json::to_string(&Regularity::Unrecognized).unwrap(), "null");
    }
}
