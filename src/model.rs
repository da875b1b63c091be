use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub const DEFAULT_LOGO: &str = "/default-logo.png";
pub const NO_DESCRIPTION: &str = "No description available.";
pub const NO_DATE: &str = "No date available";
pub const NOT_AVAILABLE: &str = "N/A";

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub scripts: Vec<Script>,
}

impl Category {
    pub fn script_count(&self) -> usize {
        self.scripts.len()
    }

    pub fn description_or_placeholder(&self) -> &str {
        non_blank(self.description.as_deref()).unwrap_or(NO_DESCRIPTION)
    }
}

/// Sum of script counts over every category.
pub fn total_scripts(categories: &[Category]) -> usize {
    categories.iter().map(Category::script_count).sum()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub install_methods: Vec<InstallMethod>,
}

impl Script {
    pub fn logo_or_default(&self) -> &str {
        non_blank(self.logo.as_deref()).unwrap_or(DEFAULT_LOGO)
    }

    pub fn date_or_placeholder(&self) -> &str {
        non_blank(self.date_created.as_deref()).unwrap_or(NO_DATE)
    }

    pub fn description_or_placeholder(&self) -> &str {
        non_blank(self.description.as_deref()).unwrap_or(NO_DESCRIPTION)
    }

    /// Resource hints of the first install method, if there is one.
    pub fn primary_resources(&self) -> Option<&Resources> {
        self.install_methods.first().map(|m| &m.resources)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InstallMethod {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resources: Resources,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Resources {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<ResourceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram: Option<ResourceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdd: Option<ResourceValue>,
}

/// Numeric-like resource figure. Catalogs publish these both as JSON numbers
/// and as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceValue {
    Number(serde_json::Number),
    Text(String),
}

impl ResourceValue {
    /// Zero and empty values count as absent.
    pub fn is_blank(&self) -> bool {
        match self {
            ResourceValue::Number(n) => n.as_f64() == Some(0.0),
            ResourceValue::Text(s) => s.trim().is_empty(),
        }
    }
}

impl fmt::Display for ResourceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceValue::Number(n) => write!(f, "{}", n),
            ResourceValue::Text(s) => write!(f, "{}", s),
        }
    }
}
