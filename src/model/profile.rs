//! Profile enumeration model (`--enumprofiles` JSON report)

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Report written by `pdfToolbox --format=json --enumprofiles`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumerateProfilesResponse {
    pub information: Information,
    pub profiles: Vec<Profile>,
}

/// Host and product information from the report header
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Information {
    pub computername: String,
    pub date_time: Option<DateTime<FixedOffset>>,
    pub operating_system: String,
    pub product_name: String,
    pub product_version: String,
    pub username: String,
}

/// A profile found in the enumerated folder
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub comment: String,
    pub creation_date: Option<DateTime<FixedOffset>>,
    pub modification_date: Option<DateTime<FixedOffset>>,
    pub name: String,
    /// Absolute path of the `.kfpx` file
    pub path: String,
    pub size: String,
    /// Variables the profile declares, with their defaults
    pub variables: Vec<Variable>,
    pub vars: HashMap<String, serde_json::Value>,
}

impl Profile {
    /// Find a declared variable by key
    pub fn variable(&self, key: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.key == key)
    }
}

/// A variable declared by a profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Variable {
    pub key: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: serde_json::Value,
}
