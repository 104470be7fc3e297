use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CityCategory {
    #[default]
    #[serde(rename = "metro")]
    Metro,
    #[serde(rename = "non-metro")]
    NonMetro,
}

impl CityCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Metro => "metro",
            Self::NonMetro => "non-metro",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "metro" => Some(Self::Metro),
            "non-metro" => Some(Self::NonMetro),
            _ => None,
        }
    }
}
