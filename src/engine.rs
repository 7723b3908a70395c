//! Tera rendering engine with the text filters registered.

use std::path::Path;

use tera::{Context, Tera};

use crate::config::{ConfigError, FilterConfig};
use crate::registry::FilterSet;

const INLINE_TEMPLATE: &str = "__inline__";

/// A Tera instance with the text filters registered.
#[derive(Debug, Clone)]
pub struct TemplateEngine {
    tera: Tera,
    registered: Vec<String>,
}

impl TemplateEngine {
    /// Engine with every filter registered under its plain name.
    pub fn new() -> Result<Self, EngineError> {
        Self::with_config(&FilterConfig::default())
    }

    pub fn with_config(config: &FilterConfig) -> Result<Self, EngineError> {
        Self::from_tera(Tera::default(), config)
    }

    /// Load all `.tera` files from `template_dir`, registered by filename
    /// (e.g. `motd.txt.tera`).
    pub fn load(template_dir: &Path, config: &FilterConfig) -> Result<Self, EngineError> {
        let glob_pattern = template_dir.join("*.tera").to_string_lossy().to_string();
        let tera = Tera::new(&glob_pattern).map_err(|e| EngineError::Load {
            dir: template_dir.to_path_buf(),
            source: e,
        })?;
        tracing::debug!(
            dir = ?template_dir,
            templates = tera.get_template_names().count(),
            "Loaded templates"
        );
        Self::from_tera(tera, config)
    }

    fn from_tera(mut tera: Tera, config: &FilterConfig) -> Result<Self, EngineError> {
        let registered = FilterSet::register(&mut tera, config)?;
        Ok(Self { tera, registered })
    }

    /// Names the filters were registered under.
    pub fn registered_filters(&self) -> &[String] {
        &self.registered
    }

    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), EngineError> {
        self.tera
            .add_raw_template(name, source)
            .map_err(|e| EngineError::Render {
                template: name.to_string(),
                source: e,
            })
    }

    pub fn render(&self, name: &str, context: &Context) -> Result<String, EngineError> {
        self.tera
            .render(name, context)
            .map_err(|e| EngineError::Render {
                template: name.to_string(),
                source: e,
            })
    }

    /// Render a one-off template string.
    pub fn render_str(&self, template_str: &str, context: &Context) -> Result<String, EngineError> {
        // Clone so the registered filters are available without mutating self
        let mut inline = self.tera.clone();
        inline
            .add_raw_template(INLINE_TEMPLATE, template_str)
            .map_err(|e| EngineError::Render {
                template: template_str.to_string(),
                source: e,
            })?;
        inline
            .render(INLINE_TEMPLATE, context)
            .map_err(|e| EngineError::Render {
                template: template_str.to_string(),
                source: e,
            })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("filter config error: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to load templates from {dir}: {source}")]
    Load {
        dir: std::path::PathBuf,
        source: tera::Error,
    },
    #[error("render error for '{template}': {source}")]
    Render {
        template: String,
        source: tera::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::fs;

    /// Full error chain joined into one string, so assertions can see the
    /// filter's own message underneath Tera's wrapping.
    fn chain(err: &EngineError) -> String {
        let mut parts = vec![err.to_string()];
        let mut source = err.source();
        while let Some(e) = source {
            parts.push(e.to_string());
            source = e.source();
        }
        parts.join(" | ")
    }

    #[test]
    fn test_render_str() {
        let engine = TemplateEngine::new().unwrap();
        let out = engine
            .render_str(
                "{{ 'hello' | to_upper }} {{ 'HELLO' | to_lower }} {{ 'hello' | reverse_text }}",
                &Context::new(),
            )
            .unwrap();
        assert_eq!(out, "HELLO hello olleh");
    }

    #[test]
    fn test_render_str_remove_character() {
        let engine = TemplateEngine::new().unwrap();
        let mut ctx = Context::new();
        ctx.insert("word", "hello");
        ctx.insert("pos", &1);
        let out = engine
            .render_str("{{ word | remove_character(position=pos) }}", &ctx)
            .unwrap();
        assert_eq!(out, "hllo");
    }

    #[test]
    fn test_filter_error_surfaces_as_render_error() {
        let engine = TemplateEngine::new().unwrap();
        let err = engine
            .render_str("{{ 42 | to_upper }}", &Context::new())
            .unwrap_err();
        assert!(matches!(err, EngineError::Render { .. }));
        assert!(chain(&err).contains("to_upper: expected a string, got integer"));
    }

    #[test]
    fn test_out_of_range_surfaces_as_render_error() {
        let engine = TemplateEngine::new().unwrap();
        let err = engine
            .render_str(
                "{{ 'hello' | remove_character(position=5) }}",
                &Context::new(),
            )
            .unwrap_err();
        assert!(chain(&err).contains("position 5 is out of range"));
    }

    #[test]
    fn test_named_template() {
        let mut engine = TemplateEngine::new().unwrap();
        engine
            .add_template("greeting", "{{ name | to_upper }}!")
            .unwrap();
        let mut ctx = Context::new();
        ctx.insert("name", "world");
        assert_eq!(engine.render("greeting", &ctx).unwrap(), "WORLD!");
    }

    #[test]
    fn test_with_config_namespace() {
        let config = FilterConfig::from_toml_str("namespace = \"training.example\"").unwrap();
        let engine = TemplateEngine::with_config(&config).unwrap();
        assert_eq!(engine.registered_filters().len(), 4);
        let out = engine
            .render_str("{{ 'abc' | training_example_to_upper }}", &Context::new())
            .unwrap();
        assert_eq!(out, "ABC");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = FilterConfig {
            namespace: Some("9lives".to_string()),
            enabled: Vec::new(),
        };
        let err = TemplateEngine::with_config(&config).unwrap_err();
        assert!(matches!(
            err,
            EngineError::Config(ConfigError::InvalidNamespace { .. })
        ));
    }

    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("motd.txt.tera"),
            "Welcome to {{ host | to_upper }}\n",
        )
        .unwrap();
        fs::write(dir.path().join("README.md"), "# Not a template").unwrap();

        let engine = TemplateEngine::load(dir.path(), &FilterConfig::default()).unwrap();
        let mut ctx = Context::new();
        ctx.insert("host", "web01");
        let out = engine.render("motd.txt.tera", &ctx).unwrap();
        assert_eq!(out, "Welcome to WEB01\n");
    }

    #[test]
    fn test_render_missing_template() {
        let engine = TemplateEngine::new().unwrap();
        let err = engine.render("nonexistent.tera", &Context::new()).unwrap_err();
        assert!(matches!(err, EngineError::Render { .. }));
    }
}
