//! Round status and gallows progression.
use crate::config::GameConfig;

/// Where a round stands.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum GameStatus {
    /// Letters remain hidden and the gallows is not complete.
    #[default]
    InProgress,
    /// Every letter of the mystery word has been revealed.
    Won,
    /// The gallows reached its final stage.
    Lost,
}

impl GameStatus {
    pub const fn is_finished(&self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Index of the gallows image to display, `0` (empty) to `9` (complete).
///
/// Equal to the number of incorrect guesses so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GallowsStage(u8);

impl GallowsStage {
    pub const EMPTY: Self = Self(0);
    pub const FINAL: Self = Self(GameConfig::MAX_FAILURES);
    pub const COUNT: usize = GameConfig::GALLOWS_STAGES;

    /// Stage for the given failure count, saturating at [`Self::FINAL`].
    pub const fn from_failures(failures: u8) -> Self {
        if failures > GameConfig::MAX_FAILURES {
            Self::FINAL
        } else {
            Self(failures)
        }
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn is_final(self) -> bool {
        self.0 == GameConfig::MAX_FAILURES
    }

    /// Iterates over every stage in display order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=GameConfig::MAX_FAILURES).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_strings_match_wire_names() {
        assert_eq!(GameStatus::InProgress.to_string(), "IN_PROGRESS");
        assert_eq!(GameStatus::Won.as_ref(), "WON");
        assert_eq!("lost".parse::<GameStatus>().unwrap(), GameStatus::Lost);
    }

    #[test]
    fn only_won_and_lost_are_finished() {
        assert!(!GameStatus::InProgress.is_finished());
        assert!(GameStatus::Won.is_finished());
        assert!(GameStatus::Lost.is_finished());
    }

    #[test]
    fn stage_saturates_at_final() {
        assert_eq!(GallowsStage::from_failures(0), GallowsStage::EMPTY);
        assert_eq!(GallowsStage::from_failures(9), GallowsStage::FINAL);
        assert_eq!(GallowsStage::from_failures(200), GallowsStage::FINAL);
        assert!(GallowsStage::FINAL.is_final());
        assert_eq!(GallowsStage::all().count(), GallowsStage::COUNT);
    }
}
