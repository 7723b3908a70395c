//! Module documentation assembled from the filter table, exportable as YAML.

use serde::Serialize;

use crate::registry::{FilterDef, FilterSet};

const MODULE_NAME: &str = "text_filters";
const SHORT_DESCRIPTION: &str = "Text transformation filters.";
const DESCRIPTION: &str = "Provides a set of filters to perform common text transformations.";

/// Documentation for the whole filter module.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleDocumentation {
    pub module: &'static str,
    pub short_description: &'static str,
    pub description: &'static str,
    pub version_added: &'static str,
    pub filters: Vec<FilterDocumentation>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterDocumentation {
    pub name: &'static str,
    pub description: &'static str,
    pub options: Vec<OptionDocumentation>,
    pub example: &'static str,
    pub returns: ReturnDocumentation,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionDocumentation {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub type_name: &'static str,
    pub required: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReturnDocumentation {
    pub description: &'static str,
    #[serde(rename = "type")]
    pub type_name: &'static str,
    pub returned: &'static str,
}

impl ModuleDocumentation {
    /// Build documentation for every filter in the registry.
    pub fn collect() -> Self {
        Self {
            module: MODULE_NAME,
            short_description: SHORT_DESCRIPTION,
            description: DESCRIPTION,
            version_added: env!("CARGO_PKG_VERSION"),
            filters: FilterSet::filters().iter().map(FilterDocumentation::from).collect(),
        }
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

impl From<&FilterDef> for FilterDocumentation {
    fn from(def: &FilterDef) -> Self {
        Self {
            name: def.name,
            description: def.doc.description,
            options: def
                .doc
                .parameters
                .iter()
                .map(|p| OptionDocumentation {
                    name: p.name,
                    description: p.description,
                    type_name: p.type_name,
                    required: p.required,
                })
                .collect(),
            example: def.doc.example,
            returns: ReturnDocumentation {
                description: def.doc.returns,
                type_name: "str",
                returned: "always",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_covers_all_filters() {
        let docs = ModuleDocumentation::collect();
        assert_eq!(docs.module, "text_filters");
        let names: Vec<_> = docs.filters.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            ["to_upper", "to_lower", "reverse_text", "remove_character"]
        );
    }

    #[test]
    fn test_to_yaml() {
        let yaml = ModuleDocumentation::collect().to_yaml().unwrap();
        let parsed: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(parsed["module"].as_str(), Some("text_filters"));
        let remove = &parsed["filters"][3];
        assert_eq!(remove["name"].as_str(), Some("remove_character"));
        assert_eq!(remove["options"][1]["name"].as_str(), Some("position"));
        assert_eq!(remove["options"][1]["type"].as_str(), Some("int"));
        assert_eq!(remove["returns"]["returned"].as_str(), Some("always"));
    }
}
