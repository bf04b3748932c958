//! Registry of optional tag categories ("extras").
//!
//! A tag generator emits one primary entry per recognized symbol. Extras are opt-in
//! categories of additional entries: file-scope tags, pseudo tags, qualified-name
//! duplicates, reference tags, tags produced by guest parsers or subparsers, and so on.
//!
//! # Key types
//!
//! | Type | Role |
//! |------|------|
//! | [`XtagDefinition`] | Name, shorthand, description, default state and optional hooks. |
//! | [`XtagRegistry`] | Append-only table of definitions with dense [`XtagId`]s. |
//! | [`LanguageHost`] | Collaborator that declares language extras on demand. |
//! | [`Catalog`] | TOML-backed [`LanguageHost`]. |
//! | [`XtagTable`] | Sorted listing of extras. |
//!
//! # Example
//!
//! ```
//! use xtags_registry::{CommonHooks, CommonXtag, Scope, XtagRegistry};
//!
//! let mut registry = XtagRegistry::initialize(CommonHooks::default());
//! let qualified = registry.find_by_name("qualified", Scope::Auto).unwrap();
//! assert_eq!(qualified, CommonXtag::Qualified.id());
//! assert!(!registry.set_enabled(qualified, true));
//! assert!(registry.is_enabled(qualified));
//! ```

pub mod catalog;
pub mod common;
pub mod def;
pub mod error;
pub mod flags;
pub mod id;
pub mod registry;
pub mod report;
pub mod table;

pub use catalog::{Catalog, ExtraSpec, LanguageSpec};
pub use common::{
	COMMON_XTAG_COUNT, CommonHooks, CommonXtag, DefaultFileKind, FileKindSwitch, OutputCapabilities, OutputTarget,
};
pub use def::{EnableHook, StateHook, XtagDefinition};
pub use error::{CatalogError, FlagError, XtagError};
pub use flags::apply_extras_flags;
pub use id::{LanguageId, Scope, XtagId};
pub use registry::{LanguageHost, NO_OWNER_LABEL, XtagEntry, XtagRegistry};
pub use report::{NO_LETTER_LABEL, ReportMode, XtagTable};
