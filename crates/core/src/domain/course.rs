use serde::{Deserialize, Serialize};

/// The closed set of topics the catalog supports. Catalog lookups are total
/// because every variant maps to exactly one course definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topic {
    Web,
    DataScience,
    Mobile,
    Ai,
}

impl Topic {
    pub const ALL: [Topic; 4] = [Topic::Web, Topic::DataScience, Topic::Mobile, Topic::Ai];

    pub fn as_key(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::DataScience => "data-science",
            Self::Mobile => "mobile",
            Self::Ai => "ai",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Web => "Web",
            Self::DataScience => "Data Science",
            Self::Mobile => "Mobile Apps",
            Self::Ai => "Artificial Intelligence",
        }
    }
}

/// Experience levels the slot extractor can produce. "advanced" is recognized
/// as a keyword during classification but is not a supported level, so it has
/// no variant here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
}

impl ExperienceLevel {
    pub fn as_key(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    pub url: String,
}

impl Material {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self { name: name.into(), url: url.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDefinition {
    pub display_name: String,
    pub description: String,
    pub materials: Vec<Material>,
    pub learning_path: Vec<String>,
}
