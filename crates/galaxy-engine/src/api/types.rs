use serde::{Deserialize, Serialize};

/// Identifier of a live trail artifact. Unique for the emitter's lifetime,
/// so a late removal can never hit a different artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtifactId(pub u32);

/// Color scheme supplied by the host; read every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_flag_round_trip() {
        assert_eq!(Theme::from_dark_flag(true), Theme::Dark);
        assert!(!Theme::from_dark_flag(false).is_dark());
    }

    #[test]
    fn theme_deserializes_lowercase() {
        let t: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(t, Theme::Light);
    }
}
