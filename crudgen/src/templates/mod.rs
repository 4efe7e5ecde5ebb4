//! Skeleton template registry.
//!
//! Every generated file is rendered from a named handlebars skeleton. The
//! built-in skeletons live in this module as string constants; a project can
//! shadow any of them by dropping a `<name>.hbs` file into
//! `.crudgen/skeleton/`. The `humanize_lc` and `humanize_uc` helpers are
//! registered on the engine so skeletons can turn identifiers into labels.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use handlebars::{handlebars_helper, Handlebars};
use walkdir::WalkDir;

use crate::humanize::{humanize_lower, humanize_sentence};

mod controller;
mod forms;
mod routing;
mod views;

pub use controller::CONTROLLER;
pub use forms::{FILTER, FORM};
pub use routing::{ROUTING_TOML, ROUTING_YAML};
pub use views::{
    VIEW_EDIT, VIEW_FILTER, VIEW_FORM, VIEW_INDEX, VIEW_NEW, VIEW_SEARCH, VIEW_SHOW,
};

/// Directory (relative to the project root) scanned for skeleton overrides.
pub const SKELETON_OVERRIDE_DIR: &str = ".crudgen/skeleton";

const BUILT_IN: &[(&str, &str)] = &[
    ("controller", CONTROLLER),
    ("form", FORM),
    ("filter", FILTER),
    ("view_index", VIEW_INDEX),
    ("view_show", VIEW_SHOW),
    ("view_new", VIEW_NEW),
    ("view_edit", VIEW_EDIT),
    ("view_form", VIEW_FORM),
    ("view_filter", VIEW_FILTER),
    ("view_search", VIEW_SEARCH),
    ("routing_yaml", ROUTING_YAML),
    ("routing_toml", ROUTING_TOML),
];

handlebars_helper!(humanize_lc: |text: String| humanize_lower(&text));
handlebars_helper!(humanize_uc: |text: String| humanize_sentence(&text));

/// Named skeleton templates backed by a configured handlebars engine.
pub struct TemplateRegistry {
    handlebars: Handlebars<'static>,
}

impl TemplateRegistry {
    /// Registry with only the built-in skeletons.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in skeleton fails to compile.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Disable HTML escaping since we're generating code
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.register_helper("humanize_lc", Box::new(humanize_lc));
        handlebars.register_helper("humanize_uc", Box::new(humanize_uc));

        for (name, template) in BUILT_IN {
            handlebars
                .register_template_string(name, *template)
                .with_context(|| format!("Failed to register built-in skeleton '{name}'"))?;
        }

        Ok(Self { handlebars })
    }

    /// Registry with project-local overrides applied on top of the
    /// built-ins: any `<name>.hbs` under [`SKELETON_OVERRIDE_DIR`] shadows
    /// the built-in skeleton of the same name.
    ///
    /// # Errors
    ///
    /// Returns an error if an override file cannot be read or compiled.
    pub fn with_overrides(project_root: &Path) -> Result<Self> {
        let mut registry = Self::new()?;

        let override_dir = project_root.join(SKELETON_OVERRIDE_DIR);
        if !override_dir.is_dir() {
            return Ok(registry);
        }

        for entry in WalkDir::new(&override_dir)
            .into_iter()
            .filter_map(std::result::Result::ok)
        {
            let path = entry.path();
            if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "hbs") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read skeleton override: {}", path.display()))?;
            registry
                .handlebars
                .register_template_string(name, contents)
                .with_context(|| format!("Failed to register skeleton override '{name}'"))?;
        }

        Ok(registry)
    }

    /// Render the named skeleton with the given context.
    ///
    /// # Errors
    ///
    /// Returns an error when the skeleton is unknown or rendering fails.
    pub fn render(&self, name: &str, context: &serde_json::Value) -> Result<String> {
        self.handlebars
            .render(name, context)
            .with_context(|| format!("Failed to render skeleton '{name}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn built_in_skeletons_compile() {
        assert!(TemplateRegistry::new().is_ok());
    }

    #[test]
    fn humanize_helpers_are_available_to_skeletons() {
        let mut registry = TemplateRegistry::new().unwrap();
        registry
            .handlebars
            .register_template_string("probe", "{{humanize_uc name}} / {{humanize_lc name}}")
            .unwrap();

        let rendered = registry
            .render("probe", &json!({"name": "firstName"}))
            .unwrap();
        assert_eq!(rendered, "First name / first name");
    }

    #[test]
    fn routing_yaml_renders_the_entry() {
        let registry = TemplateRegistry::new().unwrap();
        let rendered = registry
            .render(
                "routing_yaml",
                &json!({"entity_snake": "post", "route_prefix": "post"}),
            )
            .unwrap();
        assert!(rendered.contains("post:"));
        assert!(rendered.contains("prefix: /post"));
    }

    #[test]
    fn overrides_shadow_built_ins() {
        let temp_dir = tempfile::tempdir().unwrap();
        let skeleton_dir = temp_dir.path().join(SKELETON_OVERRIDE_DIR);
        fs::create_dir_all(&skeleton_dir).unwrap();
        fs::write(
            skeleton_dir.join("routing_yaml.hbs"),
            "custom {{entity_snake}}\n",
        )
        .unwrap();

        let registry = TemplateRegistry::with_overrides(temp_dir.path()).unwrap();
        let rendered = registry
            .render("routing_yaml", &json!({"entity_snake": "post"}))
            .unwrap();
        assert_eq!(rendered, "custom post\n");
    }

    #[test]
    fn non_hbs_files_are_ignored() {
        let temp_dir = tempfile::tempdir().unwrap();
        let skeleton_dir = temp_dir.path().join(SKELETON_OVERRIDE_DIR);
        fs::create_dir_all(&skeleton_dir).unwrap();
        fs::write(skeleton_dir.join("notes.txt"), "not a skeleton").unwrap();

        let registry = TemplateRegistry::with_overrides(temp_dir.path()).unwrap();
        let rendered = registry
            .render(
                "routing_yaml",
                &json!({"entity_snake": "post", "route_prefix": "post"}),
            )
            .unwrap();
        assert!(rendered.contains("resource:"));
    }
}
