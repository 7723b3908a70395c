//! Static filter table and registration with a Tera instance.

use std::collections::BTreeMap;

use tera::Tera;

use crate::config::{ConfigError, FilterConfig};
use crate::filters::{self, FilterFn};

/// A registered filter: its name, callable and documentation.
#[derive(Debug, Clone, Copy)]
pub struct FilterDef {
    pub name: &'static str,
    pub filter: FilterFn,
    pub doc: FilterDoc,
}

/// Presentational metadata for a filter. Has no runtime effect.
#[derive(Debug, Clone, Copy)]
pub struct FilterDoc {
    /// One-line description of the transformation.
    pub description: &'static str,
    /// Arguments besides the filtered value.
    pub parameters: &'static [ParamDoc],
    /// Template expression showing typical use.
    pub example: &'static str,
    /// Description of the returned value.
    pub returns: &'static str,
}

/// Documentation for a single filter argument.
#[derive(Debug, Clone, Copy)]
pub struct ParamDoc {
    pub name: &'static str,
    pub description: &'static str,
    /// Type name as shown to template authors (`str`, `int`).
    pub type_name: &'static str,
    pub required: bool,
}

const TEXT_PARAM: ParamDoc = ParamDoc {
    name: "text",
    description: "The text to transform.",
    type_name: "str",
    required: true,
};

static FILTERS: &[FilterDef] = &[
    FilterDef {
        name: "to_upper",
        filter: filters::to_upper,
        doc: FilterDoc {
            description: "Convert all characters in a string to uppercase.",
            parameters: &[TEXT_PARAM],
            example: "{{ 'hello' | to_upper }}",
            returns: "The input string converted to uppercase.",
        },
    },
    FilterDef {
        name: "to_lower",
        filter: filters::to_lower,
        doc: FilterDoc {
            description: "Convert all characters in a string to lowercase.",
            parameters: &[TEXT_PARAM],
            example: "{{ 'HELLO' | to_lower }}",
            returns: "The input string converted to lowercase.",
        },
    },
    FilterDef {
        name: "reverse_text",
        filter: filters::reverse_text,
        doc: FilterDoc {
            description: "Reverse the order of characters in a string.",
            parameters: &[TEXT_PARAM],
            example: "{{ 'hello' | reverse_text }}",
            returns: "The input string with characters in reverse order.",
        },
    },
    FilterDef {
        name: "remove_character",
        filter: filters::remove_character,
        doc: FilterDoc {
            description: "Remove a character from a string at a specified position.",
            parameters: &[
                ParamDoc {
                    name: "text",
                    description: "The text from which a character will be removed.",
                    type_name: "str",
                    required: true,
                },
                ParamDoc {
                    name: filters::POSITION_ARG,
                    description: "The 0-based position of the character to remove.",
                    type_name: "int",
                    required: true,
                },
            ],
            example: "{{ 'hello' | remove_character(position=1) }}",
            returns: "The input string with the specified character removed.",
        },
    },
];

/// The set of text filters this crate provides.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterSet;

impl FilterSet {
    /// All filters, in declaration order.
    pub fn filters() -> &'static [FilterDef] {
        FILTERS
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        FILTERS.iter().map(|def| def.name)
    }

    pub fn get(name: &str) -> Option<&'static FilterDef> {
        FILTERS.iter().find(|def| def.name == name)
    }

    /// Name-to-callable table handed to a host engine.
    pub fn mapping() -> BTreeMap<&'static str, FilterFn> {
        FILTERS.iter().map(|def| (def.name, def.filter)).collect()
    }

    /// Register the filters enabled by `config` on `tera`.
    ///
    /// Returns the names under which the filters were registered, which include
    /// the configured namespace prefix.
    pub fn register(tera: &mut Tera, config: &FilterConfig) -> Result<Vec<String>, ConfigError> {
        config.validate()?;

        let mut registered = Vec::new();
        for def in FILTERS.iter().filter(|def| config.is_enabled(def.name)) {
            let name = config.registered_name(def.name);
            tera.register_filter(&name, def.filter);
            registered.push(name);
        }

        tracing::debug!(
            count = registered.len(),
            namespace = config.namespace.as_deref().unwrap_or(""),
            "Registered text filters"
        );
        Ok(registered)
    }
}
