//! Assistive feature identifiers and the per-user feature set.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An assistive feature the user can switch on or off.
///
/// This is a closed enumeration rather than a free-form string key so a
/// typo cannot silently create a new feature, and so effectors can match
/// exhaustively. Serialization uses the labels the settings UI and the
/// profile API have always used, so stored records stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Feature {
    #[serde(rename = "Ativar alto contraste")]
    HighContrast,
    #[serde(rename = "Ativar narração")]
    Narration,
    #[serde(rename = "Ativar Legenda")]
    Captions,
    #[serde(rename = "Assistente de libras")]
    SignLanguageAssistant,
    #[serde(rename = "Ativar feedback tátil")]
    TactileFeedback,
    #[serde(rename = "Ativar feedback sonoro")]
    SoundFeedback,
    #[serde(rename = "Ativar controle por movimento ocular")]
    EyeTracking,
}

impl Feature {
    /// All features, in settings display order.
    pub const ALL: [Feature; 7] = [
        Feature::HighContrast,
        Feature::Narration,
        Feature::Captions,
        Feature::SignLanguageAssistant,
        Feature::TactileFeedback,
        Feature::SoundFeedback,
        Feature::EyeTracking,
    ];

    /// The storage/API label for this feature.
    pub fn label(&self) -> &'static str {
        match self {
            Feature::HighContrast => "Ativar alto contraste",
            Feature::Narration => "Ativar narração",
            Feature::Captions => "Ativar Legenda",
            Feature::SignLanguageAssistant => "Assistente de libras",
            Feature::TactileFeedback => "Ativar feedback tátil",
            Feature::SoundFeedback => "Ativar feedback sonoro",
            Feature::EyeTracking => "Ativar controle por movimento ocular",
        }
    }

    /// Parse a storage/API label back into a feature identifier.
    pub fn from_label(label: &str) -> Option<Feature> {
        Feature::ALL.into_iter().find(|f| f.label() == label)
    }

    fn index(&self) -> usize {
        Feature::ALL
            .iter()
            .position(|f| f == self)
            .expect("feature present in ALL")
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Total mapping from [`Feature`] to its enabled state.
///
/// Every feature always has a defined state; there is no "absent" entry.
/// The default set has narration enabled and everything else off, which is
/// what a first-time user gets before onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSet {
    enabled: [bool; 7],
}

impl FeatureSet {
    /// A set with every feature disabled (no narration default).
    pub fn all_disabled() -> Self {
        Self { enabled: [false; 7] }
    }

    /// Whether a feature is enabled.
    pub fn enabled(&self, feature: Feature) -> bool {
        self.enabled[feature.index()]
    }

    /// Set a single feature, leaving the others untouched.
    pub fn set(&mut self, feature: Feature, on: bool) {
        self.enabled[feature.index()] = on;
    }

    /// Flip a single feature, returning its new state.
    pub fn toggle(&mut self, feature: Feature) -> bool {
        let idx = feature.index();
        self.enabled[idx] = !self.enabled[idx];
        self.enabled[idx]
    }

    /// Features currently enabled, in display order.
    pub fn enabled_features(&self) -> Vec<Feature> {
        Feature::ALL
            .into_iter()
            .filter(|f| self.enabled(*f))
            .collect()
    }

    /// Iterate every feature with its state.
    pub fn iter(&self) -> impl Iterator<Item = (Feature, bool)> + '_ {
        Feature::ALL.into_iter().map(move |f| (f, self.enabled(f)))
    }

    /// Build a set from label-keyed entries.
    ///
    /// Unknown labels are ignored and missing features are off, except
    /// narration which stays on unless the entries explicitly disable it.
    /// This keeps records written before a feature existed loadable.
    pub fn from_labeled_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        let mut set = FeatureSet::default();
        for (label, on) in entries {
            if let Some(feature) = Feature::from_label(label) {
                set.set(feature, on);
            }
        }
        set
    }
}

impl Default for FeatureSet {
    fn default() -> Self {
        let mut set = Self { enabled: [false; 7] };
        set.set(Feature::Narration, true);
        set
    }
}

impl Serialize for FeatureSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Feature::ALL.len()))?;
        for (feature, on) in self.iter() {
            map.serialize_entry(feature.label(), &on)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FeatureSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FeatureSetVisitor;

        impl<'de> Visitor<'de> for FeatureSetVisitor {
            type Value = FeatureSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of feature labels to booleans")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut set = FeatureSet::default();
                while let Some((label, on)) = access.next_entry::<String, bool>()? {
                    if let Some(feature) = Feature::from_label(&label) {
                        set.set(feature, on);
                    }
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(FeatureSetVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_enables_only_narration() {
        let set = FeatureSet::default();
        assert_eq!(set.enabled_features(), vec![Feature::Narration]);
    }

    #[test]
    fn toggle_flips_and_reports_new_state() {
        let mut set = FeatureSet::default();
        assert!(set.toggle(Feature::HighContrast));
        assert!(set.enabled(Feature::HighContrast));
        assert!(!set.toggle(Feature::HighContrast));
        assert!(!set.enabled(Feature::HighContrast));
    }

    #[test]
    fn set_leaves_other_features_untouched() {
        let mut set = FeatureSet::default();
        set.set(Feature::Captions, true);
        assert!(set.enabled(Feature::Captions));
        assert!(set.enabled(Feature::Narration));
        assert!(!set.enabled(Feature::SoundFeedback));
    }

    #[test]
    fn serializes_to_labeled_map() {
        let json = serde_json::to_value(FeatureSet::default()).unwrap();
        assert_eq!(json["Ativar narração"], true);
        assert_eq!(json["Ativar alto contraste"], false);
        assert_eq!(json.as_object().unwrap().len(), Feature::ALL.len());
    }

    #[test]
    fn deserialization_ignores_unknown_labels() {
        let set: FeatureSet =
            serde_json::from_str(r#"{"Ativar Legenda": true, "Modo turbo": true}"#).unwrap();
        assert!(set.enabled(Feature::Captions));
        assert_eq!(set.enabled_features().len(), 2); // Captions + narration default
    }

    #[test]
    fn narration_default_applies_when_key_is_absent() {
        let set: FeatureSet = serde_json::from_str(r#"{"Ativar alto contraste": true}"#).unwrap();
        assert!(set.enabled(Feature::Narration));
    }

    #[test]
    fn explicit_narration_off_is_respected() {
        let set: FeatureSet = serde_json::from_str(r#"{"Ativar narração": false}"#).unwrap();
        assert!(!set.enabled(Feature::Narration));
    }

    #[test]
    fn label_round_trips_for_all_features() {
        for feature in Feature::ALL {
            assert_eq!(Feature::from_label(feature.label()), Some(feature));
        }
    }

    proptest! {
        #[test]
        fn toggling_twice_restores_the_set(states in prop::collection::vec(any::<bool>(), 7)) {
            let mut set = FeatureSet::all_disabled();
            for (feature, on) in Feature::ALL.into_iter().zip(states.iter()) {
                set.set(feature, *on);
            }
            let before = set;
            for feature in Feature::ALL {
                set.toggle(feature);
                set.toggle(feature);
            }
            prop_assert_eq!(set, before);
        }

        #[test]
        fn json_round_trip_preserves_every_state(states in prop::collection::vec(any::<bool>(), 7)) {
            let mut set = FeatureSet::all_disabled();
            for (feature, on) in Feature::ALL.into_iter().zip(states.iter()) {
                set.set(feature, *on);
            }
            let json = serde_json::to_string(&set).unwrap();
            let back: FeatureSet = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back, set);
        }
    }
}
