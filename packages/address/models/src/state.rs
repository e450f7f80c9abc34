//! The 50 US states + DC as two-letter postal codes.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A US state (or the District of Columbia), identified by its two-letter
/// postal code.
///
/// Parsing via [`std::str::FromStr`] is case-insensitive on the code:
/// `"il".parse::<UsState>()` yields [`UsState::Illinois`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum UsState {
    #[serde(rename = "AK")]
    #[strum(serialize = "AK")]
    Alaska,
    #[serde(rename = "AL")]
    #[strum(serialize = "AL")]
    Alabama,
    #[serde(rename = "AR")]
    #[strum(serialize = "AR")]
    Arkansas,
    #[serde(rename = "AZ")]
    #[strum(serialize = "AZ")]
    Arizona,
    #[serde(rename = "CA")]
    #[strum(serialize = "CA")]
    California,
    #[serde(rename = "CO")]
    #[strum(serialize = "CO")]
    Colorado,
    #[serde(rename = "CT")]
    #[strum(serialize = "CT")]
    Connecticut,
    #[serde(rename = "DC")]
    #[strum(serialize = "DC")]
    DistrictOfColumbia,
    #[serde(rename = "DE")]
    #[strum(serialize = "DE")]
    Delaware,
    #[serde(rename = "FL")]
    #[strum(serialize = "FL")]
    Florida,
    #[serde(rename = "GA")]
    #[strum(serialize = "GA")]
    Georgia,
    #[serde(rename = "HI")]
    #[strum(serialize = "HI")]
    Hawaii,
    #[serde(rename = "IA")]
    #[strum(serialize = "IA")]
    Iowa,
    #[serde(rename = "ID")]
    #[strum(serialize = "ID")]
    Idaho,
    #[serde(rename = "IL")]
    #[strum(serialize = "IL")]
    Illinois,
    #[serde(rename = "IN")]
    #[strum(serialize = "IN")]
    Indiana,
    #[serde(rename = "KS")]
    #[strum(serialize = "KS")]
    Kansas,
    #[serde(rename = "KY")]
    #[strum(serialize = "KY")]
    Kentucky,
    #[serde(rename = "LA")]
    #[strum(serialize = "LA")]
    Louisiana,
    #[serde(rename = "MA")]
    #[strum(serialize = "MA")]
    Massachusetts,
    #[serde(rename = "MD")]
    #[strum(serialize = "MD")]
    Maryland,
    #[serde(rename = "ME")]
    #[strum(serialize = "ME")]
    Maine,
    #[serde(rename = "MI")]
    #[strum(serialize = "MI")]
    Michigan,
    #[serde(rename = "MN")]
    #[strum(serialize = "MN")]
    Minnesota,
    #[serde(rename = "MO")]
    #[strum(serialize = "MO")]
    Missouri,
    #[serde(rename = "MS")]
    #[strum(serialize = "MS")]
    Mississippi,
    #[serde(rename = "MT")]
    #[strum(serialize = "MT")]
    Montana,
    #[serde(rename = "NC")]
    #[strum(serialize = "NC")]
    NorthCarolina,
    #[serde(rename = "ND")]
    #[strum(serialize = "ND")]
    NorthDakota,
    #[serde(rename = "NE")]
    #[strum(serialize = "NE")]
    Nebraska,
    #[serde(rename = "NH")]
    #[strum(serialize = "NH")]
    NewHampshire,
    #[serde(rename = "NJ")]
    #[strum(serialize = "NJ")]
    NewJersey,
    #[serde(rename = "NM")]
    #[strum(serialize = "NM")]
    NewMexico,
    #[serde(rename = "NV")]
    #[strum(serialize = "NV")]
    Nevada,
    #[serde(rename = "NY")]
    #[strum(serialize = "NY")]
    NewYork,
    #[serde(rename = "OH")]
    #[strum(serialize = "OH")]
    Ohio,
    #[serde(rename = "OK")]
    #[strum(serialize = "OK")]
    Oklahoma,
    #[serde(rename = "OR")]
    #[strum(serialize = "OR")]
    Oregon,
    #[serde(rename = "PA")]
    #[strum(serialize = "PA")]
    Pennsylvania,
    #[serde(rename = "RI")]
    #[strum(serialize = "RI")]
    RhodeIsland,
    #[serde(rename = "SC")]
    #[strum(serialize = "SC")]
    SouthCarolina,
    #[serde(rename = "SD")]
    #[strum(serialize = "SD")]
    SouthDakota,
    #[serde(rename = "TN")]
    #[strum(serialize = "TN")]
    Tennessee,
    #[serde(rename = "TX")]
    #[strum(serialize = "TX")]
    Texas,
    #[serde(rename = "UT")]
    #[strum(serialize = "UT")]
    Utah,
    #[serde(rename = "VA")]
    #[strum(serialize = "VA")]
    Virginia,
    #[serde(rename = "VT")]
    #[strum(serialize = "VT")]
    Vermont,
    #[serde(rename = "WA")]
    #[strum(serialize = "WA")]
    Washington,
    #[serde(rename = "WI")]
    #[strum(serialize = "WI")]
    Wisconsin,
    #[serde(rename = "WV")]
    #[strum(serialize = "WV")]
    WestVirginia,
    #[serde(rename = "WY")]
    #[strum(serialize = "WY")]
    Wyoming,
}

/// Two-letter codes for every [`UsState`], in alphabetical order.
pub const STATE_CODES: &[&str] = &[
    "AK", "AL", "AR", "AZ", "CA", "CO", "CT", "DC", "DE", "FL", "GA", "HI", "IA", "ID", "IL", "IN",
    "KS", "KY", "LA", "MA", "MD", "ME", "MI", "MN", "MO", "MS", "MT", "NC", "ND", "NE", "NH", "NJ",
    "NM", "NV", "NY", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VA", "VT", "WA",
    "WI", "WV", "WY",
];

impl UsState {
    /// Returns every state, ordered by postal code.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Alaska,
            Self::Alabama,
            Self::Arkansas,
            Self::Arizona,
            Self::California,
            Self::Colorado,
            Self::Connecticut,
            Self::DistrictOfColumbia,
            Self::Delaware,
            Self::Florida,
            Self::Georgia,
            Self::Hawaii,
            Self::Iowa,
            Self::Idaho,
            Self::Illinois,
            Self::Indiana,
            Self::Kansas,
            Self::Kentucky,
            Self::Louisiana,
            Self::Massachusetts,
            Self::Maryland,
            Self::Maine,
            Self::Michigan,
            Self::Minnesota,
            Self::Missouri,
            Self::Mississippi,
            Self::Montana,
            Self::NorthCarolina,
            Self::NorthDakota,
            Self::Nebraska,
            Self::NewHampshire,
            Self::NewJersey,
            Self::NewMexico,
            Self::Nevada,
            Self::NewYork,
            Self::Ohio,
            Self::Oklahoma,
            Self::Oregon,
            Self::Pennsylvania,
            Self::RhodeIsland,
            Self::SouthCarolina,
            Self::SouthDakota,
            Self::Tennessee,
            Self::Texas,
            Self::Utah,
            Self::Virginia,
            Self::Vermont,
            Self::Washington,
            Self::Wisconsin,
            Self::WestVirginia,
            Self::Wyoming,
        ]
    }

    /// Returns the two-letter postal code (e.g. `"IL"`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Alaska => "AK",
            Self::Alabama => "AL",
            Self::Arkansas => "AR",
            Self::Arizona => "AZ",
            Self::California => "CA",
            Self::Colorado => "CO",
            Self::Connecticut => "CT",
            Self::DistrictOfColumbia => "DC",
            Self::Delaware => "DE",
            Self::Florida => "FL",
            Self::Georgia => "GA",
            Self::Hawaii => "HI",
            Self::Iowa => "IA",
            Self::Idaho => "ID",
            Self::Illinois => "IL",
            Self::Indiana => "IN",
            Self::Kansas => "KS",
            Self::Kentucky => "KY",
            Self::Louisiana => "LA",
            Self::Massachusetts => "MA",
            Self::Maryland => "MD",
            Self::Maine => "ME",
            Self::Michigan => "MI",
            Self::Minnesota => "MN",
            Self::Missouri => "MO",
            Self::Mississippi => "MS",
            Self::Montana => "MT",
            Self::NorthCarolina => "NC",
            Self::NorthDakota => "ND",
            Self::Nebraska => "NE",
            Self::NewHampshire => "NH",
            Self::NewJersey => "NJ",
            Self::NewMexico => "NM",
            Self::Nevada => "NV",
            Self::NewYork => "NY",
            Self::Ohio => "OH",
            Self::Oklahoma => "OK",
            Self::Oregon => "OR",
            Self::Pennsylvania => "PA",
            Self::RhodeIsland => "RI",
            Self::SouthCarolina => "SC",
            Self::SouthDakota => "SD",
            Self::Tennessee => "TN",
            Self::Texas => "TX",
            Self::Utah => "UT",
            Self::Virginia => "VA",
            Self::Vermont => "VT",
            Self::Washington => "WA",
            Self::Wisconsin => "WI",
            Self::WestVirginia => "WV",
            Self::Wyoming => "WY",
        }
    }

    /// Returns the full state name (e.g. `"Illinois"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Alaska => "Alaska",
            Self::Alabama => "Alabama",
            Self::Arkansas => "Arkansas",
            Self::Arizona => "Arizona",
            Self::California => "California",
            Self::Colorado => "Colorado",
            Self::Connecticut => "Connecticut",
            Self::DistrictOfColumbia => "District of Columbia",
            Self::Delaware => "Delaware",
            Self::Florida => "Florida",
            Self::Georgia => "Georgia",
            Self::Hawaii => "Hawaii",
            Self::Iowa => "Iowa",
            Self::Idaho => "Idaho",
            Self::Illinois => "Illinois",
            Self::Indiana => "Indiana",
            Self::Kansas => "Kansas",
            Self::Kentucky => "Kentucky",
            Self::Louisiana => "Louisiana",
            Self::Massachusetts => "Massachusetts",
            Self::Maryland => "Maryland",
            Self::Maine => "Maine",
            Self::Michigan => "Michigan",
            Self::Minnesota => "Minnesota",
            Self::Missouri => "Missouri",
            Self::Mississippi => "Mississippi",
            Self::Montana => "Montana",
            Self::NorthCarolina => "North Carolina",
            Self::NorthDakota => "North Dakota",
            Self::Nebraska => "Nebraska",
            Self::NewHampshire => "New Hampshire",
            Self::NewJersey => "New Jersey",
            Self::NewMexico => "New Mexico",
            Self::Nevada => "Nevada",
            Self::NewYork => "New York",
            Self::Ohio => "Ohio",
            Self::Oklahoma => "Oklahoma",
            Self::Oregon => "Oregon",
            Self::Pennsylvania => "Pennsylvania",
            Self::RhodeIsland => "Rhode Island",
            Self::SouthCarolina => "South Carolina",
            Self::SouthDakota => "South Dakota",
            Self::Tennessee => "Tennessee",
            Self::Texas => "Texas",
            Self::Utah => "Utah",
            Self::Virginia => "Virginia",
            Self::Vermont => "Vermont",
            Self::Washington => "Washington",
            Self::Wisconsin => "Wisconsin",
            Self::WestVirginia => "West Virginia",
            Self::Wyoming => "Wyoming",
        }
    }

    /// Looks up a state by its two-letter code, ignoring ASCII case.
    ///
    /// Returns `None` for anything that is not one of the 51 codes.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        code.parse().ok()
    }
}
