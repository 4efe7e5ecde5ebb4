//! Core generators for the crudgen CRUD scaffolding tool.
//!
//! Everything here is pure with respect to the project being scaffolded:
//! generators take an entity description and a configuration and return the
//! files they would produce. Writing those files to disk, prompting, and
//! styling output are the CLI crate's concern.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod entity;
pub mod generator;
pub mod humanize;
pub mod templates;

pub use config::{CrudConfig, FilterType, RouteFormat, DEFAULT_BASE_TEMPLATE};
pub use entity::{EntityDefinition, FieldDefinition, FieldType};
pub use generator::{
    generate_crud, generate_filter, generate_form, update_routing, GeneratedFile, RoutingOutcome,
};
pub use templates::TemplateRegistry;
