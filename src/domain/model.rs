use serde::{Deserialize, Serialize};
use std::fmt;

/// One travel package as published in `packages.json`.
///
/// Missing fields deserialize to empty values so a sparse record simply
/// contributes no matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageRecord {
    pub name: String,
    pub cities: Vec<String>,
    pub region: String,
    pub tags: Vec<String>,
    pub r#type: String,
    pub duration: String,
    pub folder: String,
    pub filename: String,
}

/// The package list loaded once per session. Read-only after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    packages: Vec<PackageRecord>,
}

impl Catalog {
    pub fn new(packages: Vec<PackageRecord>) -> Self {
        Self { packages }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// 解析 `{ "packages": [...] }` 格式的目錄
    pub fn from_json_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    pub fn packages(&self) -> &[PackageRecord] {
        &self.packages
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

/// Field categories that can contribute to a package's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchedField {
    Name,
    City,
    Region,
    Tag,
    Type,
    Duration,
}

impl MatchedField {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchedField::Name => "name",
            MatchedField::City => "city",
            MatchedField::Region => "region",
            MatchedField::Tag => "tag",
            MatchedField::Type => "type",
            MatchedField::Duration => "duration",
        }
    }

    /// Points added for each matching occurrence of this field.
    pub fn weight(&self) -> u32 {
        match self {
            MatchedField::Name => 10,
            MatchedField::City => 8,
            MatchedField::Region => 6,
            MatchedField::Tag => 5,
            MatchedField::Type => 4,
            MatchedField::Duration => 3,
        }
    }
}

impl fmt::Display for MatchedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A package that matched a query, with its score and the fields that hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedResult {
    #[serde(flatten)]
    pub package: PackageRecord,
    pub score: u32,
    #[serde(rename = "matchedFields")]
    pub matched_fields: Vec<MatchedField>,
}
