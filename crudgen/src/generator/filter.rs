//! Filter struct generation.

use anyhow::Result;

use super::{render_context, GeneratedFile};
use crate::config::{CrudConfig, FilterType};
use crate::entity::EntityDefinition;
use crate::templates::TemplateRegistry;

/// Generate the `{Entity}Filter` criteria struct applied to the list action.
///
/// Only the `form` filter flavor needs generated Rust; the `input` flavor is
/// a view partial plus a query parameter on the controller, and `none`
/// generates nothing.
///
/// # Errors
///
/// Returns an error when the skeleton fails to render.
pub fn generate_filter(
    entity: &EntityDefinition,
    config: &CrudConfig,
    templates: &TemplateRegistry,
) -> Result<Option<GeneratedFile>> {
    match config.filter_type {
        FilterType::Form => {
            let context = render_context(entity, config);
            let snake = entity.snake_name();
            Ok(Some(GeneratedFile {
                path: format!("src/filters/{snake}.rs").into(),
                content: templates.render("filter", &context)?,
                description: format!("{} list filter", entity.name()),
            }))
        }
        FilterType::Input | FilterType::None => Ok(None),
    }
}
