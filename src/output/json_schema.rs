use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{total_scripts, Category, Script};
use crate::route::script_url;
use crate::tui::logic::sorted_scripts;
use crate::utils::{format_cpu, format_hdd, format_ram, truncate_description};

const SCHEMA_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryListResult {
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub source: String,
    pub total_scripts: usize,
    pub categories: Vec<CategorySummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySummary {
    pub name: String,
    pub description: String,
    pub script_count: usize,
    pub scripts: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDetailResult {
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub category: String,
    pub description: String,
    pub scripts: Vec<ScriptCard>,
}

/// A script as its detail card presents it: placeholders applied, description truncated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptCard {
    pub name: String,
    pub slug: String,
    pub url: String,
    pub logo: String,
    pub date_created: String,
    pub description: String,
    pub cpu: String,
    pub ram: String,
    pub hdd: String,
}

impl ScriptCard {
    pub fn new(script: &Script, site_url: &str) -> Self {
        let resources = script.primary_resources();
        Self {
            name: script.name.clone(),
            slug: script.slug.clone(),
            url: script_url(site_url, &script.slug),
            logo: script.logo_or_default().to_string(),
            date_created: script.date_or_placeholder().to_string(),
            description: truncate_description(script.description_or_placeholder()),
            cpu: format_cpu(resources),
            ram: format_ram(resources),
            hdd: format_hdd(resources),
        }
    }
}

impl CategoryListResult {
    pub fn new(categories: &[Category], source: String) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            timestamp: Utc::now(),
            source,
            total_scripts: total_scripts(categories),
            categories: categories
                .iter()
                .map(|c| CategorySummary {
                    name: c.name.clone(),
                    description: c.description_or_placeholder().to_string(),
                    script_count: c.script_count(),
                    scripts: sorted_scripts(c).iter().map(|s| s.slug.clone()).collect(),
                })
                .collect(),
        }
    }
}

impl CategoryDetailResult {
    pub fn new(category: &Category, site_url: &str) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            timestamp: Utc::now(),
            category: category.name.clone(),
            description: category.description_or_placeholder().to_string(),
            scripts: sorted_scripts(category)
                .into_iter()
                .map(|s| ScriptCard::new(s, site_url))
                .collect(),
        }
    }
}
