use serde::{Deserialize, Serialize};

/// How the 1 or 2 sandwiches of an order are composed. Wire names match the
/// backend contract; matching is exhaustive everywhere, there are no
/// substring checks on mode names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SandwichConfig {
    #[serde(rename = "SPECIAL")]
    Special,
    #[serde(rename = "CUSTOM")]
    Custom,
    #[serde(rename = "2_SPECIAL")]
    DoubleSpecial,
    #[serde(rename = "2_CUSTOM")]
    DoubleCustom,
    #[serde(rename = "MIXED")]
    Mixed,
}

impl SandwichConfig {
    pub fn sandwich_count(self) -> SandwichCount {
        match self {
            SandwichConfig::Special | SandwichConfig::Custom => SandwichCount::One,
            SandwichConfig::DoubleSpecial | SandwichConfig::DoubleCustom | SandwichConfig::Mixed => {
                SandwichCount::Two
            }
        }
    }

    /// Whether this configuration includes a special-recipe sandwich, i.e.
    /// a recipe id is required.
    pub fn wants_special(self) -> bool {
        match self {
            SandwichConfig::Special | SandwichConfig::DoubleSpecial | SandwichConfig::Mixed => true,
            SandwichConfig::Custom | SandwichConfig::DoubleCustom => false,
        }
    }

    /// Whether this configuration includes a custom sandwich, i.e. the
    /// ingredient selection is subject to the category rules.
    pub fn wants_custom(self) -> bool {
        match self {
            SandwichConfig::Custom | SandwichConfig::DoubleCustom | SandwichConfig::Mixed => true,
            SandwichConfig::Special | SandwichConfig::DoubleSpecial => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SandwichCount {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
}

/// Selector state machine over [`SandwichConfig`].
///
/// Choosing a count always resets to that count's default configuration
/// (1 -> SPECIAL, 2 -> 2_SPECIAL); a secondary combination choice is then
/// accepted only within the current count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigSelector {
    current: SandwichConfig,
}

impl Default for ConfigSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigSelector {
    pub fn new() -> Self {
        Self {
            current: SandwichConfig::Special,
        }
    }

    pub fn current(&self) -> SandwichConfig {
        self.current
    }

    pub fn choose_count(&mut self, count: SandwichCount) {
        self.current = match count {
            SandwichCount::One => SandwichConfig::Special,
            SandwichCount::Two => SandwichConfig::DoubleSpecial,
        };
    }

    /// Returns false (and keeps the current state) if the combination does
    /// not belong to the currently selected count.
    pub fn choose_combination(&mut self, config: SandwichConfig) -> bool {
        if config.sandwich_count() != self.current.sandwich_count() {
            return false;
        }
        self.current = config;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names() {
        assert_eq!(
            serde_json::to_string(&SandwichConfig::DoubleSpecial).unwrap(),
            "\"2_SPECIAL\""
        );
        assert_eq!(
            serde_json::from_str::<SandwichConfig>("\"MIXED\"").unwrap(),
            SandwichConfig::Mixed
        );
    }

    #[test]
    fn starts_as_single_special() {
        assert_eq!(ConfigSelector::new().current(), SandwichConfig::Special);
    }

    #[test]
    fn choosing_two_defaults_to_double_special() {
        let mut selector = ConfigSelector::new();
        selector.choose_count(SandwichCount::Two);
        assert_eq!(selector.current(), SandwichConfig::DoubleSpecial);
    }

    #[test]
    fn combination_is_scoped_to_the_current_count() {
        let mut selector = ConfigSelector::new();
        selector.choose_count(SandwichCount::Two);

        assert!(selector.choose_combination(SandwichConfig::Mixed));
        assert_eq!(selector.current(), SandwichConfig::Mixed);

        // single-sandwich combination is rejected while count is 2
        assert!(!selector.choose_combination(SandwichConfig::Custom));
        assert_eq!(selector.current(), SandwichConfig::Mixed);
    }

    #[test]
    fn reselecting_one_collapses_back_to_special() {
        let mut selector = ConfigSelector::new();
        selector.choose_count(SandwichCount::Two);
        selector.choose_combination(SandwichConfig::DoubleCustom);
        selector.choose_count(SandwichCount::One);
        assert_eq!(selector.current(), SandwichConfig::Special);
    }

    #[test]
    fn wants_flags_cover_every_mode() {
        assert!(SandwichConfig::Special.wants_special());
        assert!(!SandwichConfig::Special.wants_custom());
        assert!(SandwichConfig::Mixed.wants_special());
        assert!(SandwichConfig::Mixed.wants_custom());
        assert!(!SandwichConfig::DoubleCustom.wants_special());
        assert!(SandwichConfig::DoubleCustom.wants_custom());
    }
}
