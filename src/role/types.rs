use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Profile variant of a person on BoxRec.
///
/// A person holds one profile per role; the same global id is shared between
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    ProBoxer,
    AmateurBoxer,
    WorldSeriesBoxer,
    BareKnuckleBoxer,
    ProKickBoxer,
    AmateurKickBoxer,
    ProMuayThaiBoxer,
    AmateurMuayThaiBoxer,
    Judge,
    Referee,
    Supervisor,
    Doctor,
    Inspector,
    Manager,
    Matchmaker,
    Promoter,
}

impl Role {
    /// Every role, in lookup order. When several roles share a URL segment the
    /// first one listed here is reported for that segment.
    pub const ALL: [Role; 16] = [
        Role::ProBoxer,
        Role::AmateurBoxer,
        Role::WorldSeriesBoxer,
        Role::BareKnuckleBoxer,
        Role::ProKickBoxer,
        Role::AmateurKickBoxer,
        Role::ProMuayThaiBoxer,
        Role::AmateurMuayThaiBoxer,
        Role::Judge,
        Role::Referee,
        Role::Supervisor,
        Role::Doctor,
        Role::Inspector,
        Role::Manager,
        Role::Matchmaker,
        Role::Promoter,
    ];

    /// Human readable label, as BoxRec prints it in role columns.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ProBoxer => "pro boxer",
            Self::AmateurBoxer => "amateur boxer",
            Self::WorldSeriesBoxer => "world series boxer",
            Self::BareKnuckleBoxer => "bare-knuckle boxer",
            Self::ProKickBoxer => "pro kickboxer",
            Self::AmateurKickBoxer => "amateur kickboxer",
            Self::ProMuayThaiBoxer => "pro muay-thai boxer",
            Self::AmateurMuayThaiBoxer => "amateur muay-thai boxer",
            Self::Judge => "judge",
            Self::Referee => "referee",
            Self::Supervisor => "supervisor",
            Self::Doctor => "doctor",
            Self::Inspector => "inspector",
            Self::Manager => "manager",
            Self::Matchmaker => "matchmaker",
            Self::Promoter => "promoter",
        }
    }

    fn default_segment(&self) -> &'static str {
        match self {
            Self::ProBoxer => "proboxer",
            Self::AmateurBoxer | Self::WorldSeriesBoxer => "amateurboxer",
            Self::BareKnuckleBoxer => "bareknuckleboxer",
            Self::ProKickBoxer | Self::AmateurKickBoxer => "kickboxer",
            Self::ProMuayThaiBoxer => "muaythaiboxer",
            Self::AmateurMuayThaiBoxer => "amateurmuaythaiboxer",
            Self::Judge => "judge",
            Self::Referee => "referee",
            Self::Supervisor => "supervisor",
            Self::Doctor => "doctor",
            Self::Inspector => "inspector",
            Self::Manager => "manager",
            Self::Matchmaker => "matchmaker",
            Self::Promoter => "promoter",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Role → URL path segment table.
///
/// Roles sharing a segment are aliases: a profile page reporting that segment
/// validates for any of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleVocabulary(pub BTreeMap<Role, String>);

impl Default for RoleVocabulary {
    fn default() -> Self {
        Self(
            Role::ALL
                .iter()
                .map(|r| (*r, r.default_segment().to_string()))
                .collect(),
        )
    }
}

impl RoleVocabulary {
    /// Segments are stored lowercased, the way the site prints them in URLs.
    pub fn with_segment(mut self, role: Role, segment: &str) -> Self {
        self.0.insert(role, segment.to_ascii_lowercase());
        self
    }

    /// URL segment for `role`.
    pub fn segment(&self, role: Role) -> &str {
        self.0
            .get(&role)
            .map(String::as_str)
            .unwrap_or_else(|| role.default_segment())
    }

    /// First role (in [`Role::ALL`] order) that owns `segment`.
    pub fn role_for_segment(&self, segment: &str) -> Option<Role> {
        Role::ALL
            .iter()
            .copied()
            .find(|r| self.segment(*r).eq_ignore_ascii_case(segment))
    }

    /// Whether two roles resolve to the same profile URL segment, ignoring case.
    pub fn equivalent(&self, a: Role, b: Role) -> bool {
        a == b || self.segment(a).eq_ignore_ascii_case(self.segment(b))
    }
}

/// How many data-table columns a complete profile page of a role shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnExpectation {
    Exactly(usize),
    NotEqual(usize),
    Any,
}

impl ColumnExpectation {
    pub fn is_met(&self, columns: usize) -> bool {
        match self {
            Self::Exactly(n) => columns == *n,
            Self::NotEqual(n) => columns != *n,
            Self::Any => true,
        }
    }
}

impl fmt::Display for ColumnExpectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exactly(n) => write!(f, "{n}"),
            Self::NotEqual(n) => write!(f, "!{n}"),
            Self::Any => f.write_str("any"),
        }
    }
}

/// Per-role column expectations. Roles without an entry accept any page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleExpectations(pub BTreeMap<Role, ColumnExpectation>);

impl Default for RoleExpectations {
    fn default() -> Self {
        // boxers carry `last6` columns, officials list bouts without them
        Self(BTreeMap::from([
            (Role::ProBoxer, ColumnExpectation::Exactly(16)),
            (Role::Judge, ColumnExpectation::NotEqual(16)),
            (Role::Referee, ColumnExpectation::NotEqual(16)),
            (Role::Supervisor, ColumnExpectation::NotEqual(16)),
        ]))
    }
}

impl RoleExpectations {
    pub fn with(mut self, role: Role, expectation: ColumnExpectation) -> Self {
        self.0.insert(role, expectation);
        self
    }

    pub fn get(&self, role: Role) -> ColumnExpectation {
        self.0.get(&role).copied().unwrap_or(ColumnExpectation::Any)
    }
}
