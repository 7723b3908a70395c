//! Text transformation filters for Tera templates.
//!
//! Four filters are provided: `to_upper`, `to_lower`, `reverse_text` and
//! `remove_character`. Each is a pure function over its input; invalid input
//! produces an [`InvalidArgument`] error, which Tera reports as a rendering
//! failure.
//!
//! ```
//! use tera::Context;
//! use text_filters::TemplateEngine;
//!
//! let engine = TemplateEngine::new().unwrap();
//! let out = engine
//!     .render_str("{{ 'hello' | remove_character(position=1) }}", &Context::new())
//!     .unwrap();
//! assert_eq!(out, "hllo");
//! ```
//!
//! # Modules
//!
//! - [`text`] — Typed string operations
//! - [`filters`] — Tera filter functions wrapping [`text`]
//! - [`registry`] — Static filter table and registration
//! - [`config`] — Namespace and filter selection, loadable from TOML
//! - [`docs`] — Filter documentation, exportable as YAML
//! - [`engine`] — Tera engine with the filters pre-registered

pub mod config;
pub mod docs;
pub mod engine;
pub mod error;
pub mod filters;
pub mod registry;
pub mod text;

pub use config::{ConfigError, FilterConfig};
pub use docs::ModuleDocumentation;
pub use engine::{EngineError, TemplateEngine};
pub use error::{InvalidArgument, InvalidReason, ValueKind};
pub use registry::{FilterDef, FilterDoc, FilterSet, ParamDoc};
