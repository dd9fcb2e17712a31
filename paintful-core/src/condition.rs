use serde::{Deserialize, Serialize};

/// Closed set of weather categories used throughout the model,
/// independent of the upstream provider's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalCondition {
    #[default]
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    Mist,
    Fog,
    Haze,
}

impl CanonicalCondition {
    pub const ALL: [CanonicalCondition; 9] = [
        CanonicalCondition::Clear,
        CanonicalCondition::Clouds,
        CanonicalCondition::Rain,
        CanonicalCondition::Drizzle,
        CanonicalCondition::Thunderstorm,
        CanonicalCondition::Snow,
        CanonicalCondition::Mist,
        CanonicalCondition::Fog,
        CanonicalCondition::Haze,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalCondition::Clear => "clear",
            CanonicalCondition::Clouds => "clouds",
            CanonicalCondition::Rain => "rain",
            CanonicalCondition::Drizzle => "drizzle",
            CanonicalCondition::Thunderstorm => "thunderstorm",
            CanonicalCondition::Snow => "snow",
            CanonicalCondition::Mist => "mist",
            CanonicalCondition::Fog => "fog",
            CanonicalCondition::Haze => "haze",
        }
    }

    /// Icon family used by front ends to pick artwork for a condition.
    pub fn icon_name(&self) -> &'static str {
        match self {
            CanonicalCondition::Clear => "sun",
            CanonicalCondition::Clouds => "cloud",
            CanonicalCondition::Rain | CanonicalCondition::Drizzle => "cloud-rain",
            CanonicalCondition::Thunderstorm => "cloud-lightning",
            CanonicalCondition::Snow => "snowflake",
            CanonicalCondition::Mist | CanonicalCondition::Fog | CanonicalCondition::Haze => {
                "cloud-fog"
            }
        }
    }
}

impl std::fmt::Display for CanonicalCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a provider's primary weather category to a canonical tag.
///
/// The caller lowercases `raw` first. Matching is exact; anything outside
/// the table (including the empty string) becomes [`CanonicalCondition::Clear`].
pub fn normalize(raw: &str) -> CanonicalCondition {
    CanonicalCondition::ALL
        .into_iter()
        .find(|c| c.as_str() == raw)
        .unwrap_or_default()
}
