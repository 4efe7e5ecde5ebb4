//! Code generators producing files from an entity description.
//!
//! Generators are pure: they render skeletons into [`GeneratedFile`] values
//! and never touch the file system, with the one exception of the routing
//! updater, which edits the routing manifest in place.

mod crud;
mod filter;
mod form;
mod routes;

pub use crud::generate_crud;
pub use filter::generate_filter;
pub use form::generate_form;
pub use routes::{update_routing, RoutingOutcome};

use std::path::PathBuf;

use serde_json::{json, Value};

use crate::config::{CrudConfig, FilterType, RouteFormat};
use crate::entity::EntityDefinition;

/// A file produced by a generator, not yet written to disk.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    /// Relative path from the project root
    pub path: PathBuf,
    /// File content
    pub content: String,
    /// Short description for user feedback
    pub description: String,
}

/// Full skeleton context: the entity's own context extended with the
/// resolved configuration toggles.
pub(crate) fn render_context(entity: &EntityDefinition, config: &CrudConfig) -> Value {
    let mut context = entity.template_context();

    let extra = json!({
        "route_prefix": config.resolved_prefix(&entity.snake_name()),
        "base_template": config.base_template,
        "with_write": config.with_write(),
        "with_show": config.with_show(),
        "with_bulk": config.with_bulk(),
        "filter_form": matches!(config.filter_type, FilterType::Form),
        "filter_input": matches!(config.filter_type, FilterType::Input),
        "filter_none": matches!(config.filter_type, FilterType::None),
        "route_annotation": matches!(config.format, RouteFormat::Annotation),
    });

    if let (Value::Object(base), Value::Object(overlay)) = (&mut context, extra) {
        base.extend(overlay);
    }
    context
}

/// Directory the generated views live in, relative to the project root.
pub(crate) fn views_dir(entity: &EntityDefinition, config: &CrudConfig) -> PathBuf {
    let snake = entity.snake_name();
    if config.module_views {
        PathBuf::from(format!("src/{snake}/templates"))
    } else {
        PathBuf::from(format!("templates/{snake}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity() -> EntityDefinition {
        EntityDefinition::new(
            "Post",
            &["title:string".to_string(), "body:text".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn context_reflects_the_config_toggles() {
        let config = CrudConfig {
            without_write: true,
            filter_type: FilterType::Input,
            format: RouteFormat::Yaml,
            ..CrudConfig::default()
        };
        let context = render_context(&entity(), &config);

        assert_eq!(context["with_write"], false);
        assert_eq!(context["with_bulk"], false);
        assert_eq!(context["filter_input"], true);
        assert_eq!(context["filter_form"], false);
        assert_eq!(context["route_annotation"], false);
        assert_eq!(context["route_prefix"], "post");
    }

    #[test]
    fn views_land_beside_the_module_on_request() {
        let config = CrudConfig::default();
        assert_eq!(views_dir(&entity(), &config), PathBuf::from("templates/post"));

        let config = CrudConfig {
            module_views: true,
            ..CrudConfig::default()
        };
        assert_eq!(
            views_dir(&entity(), &config),
            PathBuf::from("src/post/templates")
        );
    }
}
