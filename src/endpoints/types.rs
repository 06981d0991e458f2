pub use super::country::Country;
use crate::role::Role;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Active-only or everyone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoxrecStatus {
    #[serde(rename = "a")]
    Active,
    #[default]
    #[serde(rename = "")]
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightDivision {
    Heavyweight,
    Cruiserweight,
    #[serde(rename = "light heavyweight")]
    LightHeavyweight,
    #[serde(rename = "super middleweight")]
    SuperMiddleweight,
    Middleweight,
    #[serde(rename = "super welterweight")]
    SuperWelterweight,
    Welterweight,
    #[serde(rename = "super lightweight")]
    SuperLightweight,
    Lightweight,
    #[serde(rename = "super featherweight")]
    SuperFeatherweight,
    Featherweight,
    #[serde(rename = "super bantamweight")]
    SuperBantamweight,
    Bantamweight,
    #[serde(rename = "super flyweight")]
    SuperFlyweight,
    Flyweight,
    #[serde(rename = "light flyweight")]
    LightFlyweight,
    Minimumweight,
}

impl WeightDivision {
    pub const ALL: [WeightDivision; 17] = [
        WeightDivision::Heavyweight,
        WeightDivision::Cruiserweight,
        WeightDivision::LightHeavyweight,
        WeightDivision::SuperMiddleweight,
        WeightDivision::Middleweight,
        WeightDivision::SuperWelterweight,
        WeightDivision::Welterweight,
        WeightDivision::SuperLightweight,
        WeightDivision::Lightweight,
        WeightDivision::SuperFeatherweight,
        WeightDivision::Featherweight,
        WeightDivision::SuperBantamweight,
        WeightDivision::Bantamweight,
        WeightDivision::SuperFlyweight,
        WeightDivision::Flyweight,
        WeightDivision::LightFlyweight,
        WeightDivision::Minimumweight,
    ];

    /// Capitalized form used by the titles page, e.g. `Super Middleweight`.
    pub fn title_case(&self) -> &'static str {
        match self {
            Self::Heavyweight => "Heavyweight",
            Self::Cruiserweight => "Cruiserweight",
            Self::LightHeavyweight => "Light Heavyweight",
            Self::SuperMiddleweight => "Super Middleweight",
            Self::Middleweight => "Middleweight",
            Self::SuperWelterweight => "Super Welterweight",
            Self::Welterweight => "Welterweight",
            Self::SuperLightweight => "Super Lightweight",
            Self::Lightweight => "Lightweight",
            Self::SuperFeatherweight => "Super Featherweight",
            Self::Featherweight => "Featherweight",
            Self::SuperBantamweight => "Super Bantamweight",
            Self::Bantamweight => "Bantamweight",
            Self::SuperFlyweight => "Super Flyweight",
            Self::Flyweight => "Flyweight",
            Self::LightFlyweight => "Light Flyweight",
            Self::Minimumweight => "Minimumweight",
        }
    }
}

/// A division as the titles form spells it (capitalized).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TitleDivision(pub WeightDivision);

impl Serialize for TitleDivision {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0.title_case())
    }
}

impl<'de> Deserialize<'de> for TitleDivision {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        WeightDivision::ALL
            .iter()
            .copied()
            .find(|d| d.title_case() == raw)
            .map(TitleDivision)
            .ok_or_else(|| de::Error::custom(format!("unknown title division `{raw}`")))
    }
}

/// People search. `role` is sent as the vocabulary's URL segment, `all` when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip)]
    pub role: Option<Role>,
    pub status: BoxrecStatus,
}

impl SearchParams {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            role: None,
            status: BoxrecStatus::All,
        }
    }

    pub fn with_role(mut self, role: Option<Role>) -> Self {
        self.role = role;
        self
    }

    pub fn with_status(mut self, status: BoxrecStatus) -> Self {
        self.status = status;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingsParams {
    pub division: Option<WeightDivision>,
    pub sex: Option<Sex>,
    pub status: Option<BoxrecStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsParams {
    pub country_code: Option<Country>,
    pub division: Option<WeightDivision>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleParams {
    pub country_code: Option<Country>,
    pub division: Option<WeightDivision>,
    pub tv: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitlesParams {
    pub bout_title: u32,
    pub division: TitleDivision,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsParams {
    pub country: Option<Country>,
    pub region: Option<String>,
    pub town: Option<String>,
    pub venue: Option<String>,
    pub year: Option<u16>,
}

/// People by location. `role` is sent as the vocabulary's URL segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeopleParams {
    pub country: Option<Country>,
    pub division: Option<WeightDivision>,
    pub region: Option<String>,
    #[serde(skip)]
    pub role: Option<Role>,
    pub town: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Corner {
    Red,
    Blue,
}

impl Corner {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
        }
    }
}

/// A user's score for a bout, round by round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub rounds: BTreeMap<u32, BTreeMap<Corner, u32>>,
}

impl ScoreCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn round(mut self, round: u32, red: u32, blue: u32) -> Self {
        self.rounds
            .insert(round, BTreeMap::from([(Corner::Red, red), (Corner::Blue, blue)]));
        self
    }

    /// Form fields, `score[{round}][{corner}]`.
    pub fn to_params(&self) -> Vec<(String, String)> {
        self.rounds
            .iter()
            .flat_map(|(round, corners)| {
                corners.iter().map(move |(corner, points)| {
                    (format!("score[{round}][{}]", corner.as_str()), points.to_string())
                })
            })
            .collect()
    }
}
