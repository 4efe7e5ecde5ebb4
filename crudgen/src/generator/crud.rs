//! CRUD scaffold generation: the controller and its views.

use anyhow::Result;

use super::{render_context, views_dir, GeneratedFile};
use crate::config::{CrudConfig, FilterType};
use crate::entity::EntityDefinition;
use crate::templates::TemplateRegistry;

/// Generate the controller and view files for `entity`.
///
/// The list action and its view are always present; show, the write
/// actions, bulk delete and the filter/search partials follow the
/// configured toggles.
///
/// # Errors
///
/// Returns an error when a skeleton fails to render.
pub fn generate_crud(
    entity: &EntityDefinition,
    config: &CrudConfig,
    templates: &TemplateRegistry,
) -> Result<Vec<GeneratedFile>> {
    let context = render_context(entity, config);
    let snake = entity.snake_name();
    let views = views_dir(entity, config);

    let mut files = vec![GeneratedFile {
        path: format!("src/controllers/{snake}.rs").into(),
        content: templates.render("controller", &context)?,
        description: format!("{} CRUD handlers", entity.name()),
    }];

    let view = |skeleton: &str, file_name: &str, description: String| -> Result<GeneratedFile> {
        Ok(GeneratedFile {
            path: views.join(file_name),
            content: templates.render(skeleton, &context)?,
            description,
        })
    };

    files.push(view("view_index", "index.html", format!("{} list view", entity.name()))?);

    if config.with_show() {
        files.push(view("view_show", "show.html", format!("{} show view", entity.name()))?);
    }

    if config.with_write() {
        files.push(view("view_new", "new.html", format!("{} new view", entity.name()))?);
        files.push(view("view_edit", "edit.html", format!("{} edit view", entity.name()))?);
        files.push(view("view_form", "_form.html", format!("{} form partial", entity.name()))?);
    }

    match config.filter_type {
        FilterType::Form => {
            files.push(view(
                "view_filter",
                "_filter.html",
                format!("{} filter partial", entity.name()),
            )?);
        }
        FilterType::Input => {
            files.push(view(
                "view_search",
                "_search.html",
                format!("{} search partial", entity.name()),
            )?);
        }
        FilterType::None => {}
    }

    Ok(files)
}
