//! Form struct generation.

use anyhow::Result;

use super::{render_context, GeneratedFile};
use crate::config::CrudConfig;
use crate::entity::EntityDefinition;
use crate::templates::TemplateRegistry;

/// Generate the `{Entity}Form` struct consumed by the create and update
/// actions. Forms only exist alongside the write actions, so `None` is
/// returned when those are disabled.
///
/// # Errors
///
/// Returns an error when the skeleton fails to render.
pub fn generate_form(
    entity: &EntityDefinition,
    config: &CrudConfig,
    templates: &TemplateRegistry,
) -> Result<Option<GeneratedFile>> {
    if !config.with_write() {
        return Ok(None);
    }

    let context = render_context(entity, config);
    let snake = entity.snake_name();

    Ok(Some(GeneratedFile {
        path: format!("src/forms/{snake}.rs").into(),
        content: templates.render("form", &context)?,
        description: format!("{} form validation", entity.name()),
    }))
}
