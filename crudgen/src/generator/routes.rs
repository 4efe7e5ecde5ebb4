//! Routing manifest updates.
//!
//! Routing trouble never fails a finished generation: when the manifest is
//! missing, the updater hands back the lines the user should add manually
//! and the CLI reports them as warnings.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::render_context;
use crate::config::{CrudConfig, RouteFormat};
use crate::entity::EntityDefinition;
use crate::templates::TemplateRegistry;

/// Result of a routing update attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingOutcome {
    /// Entry appended to the manifest at this path
    Updated(PathBuf),
    /// The manifest already mentions the entity; nothing was written
    AlreadyPresent(PathBuf),
    /// Nothing was written; wire the routes manually with these lines
    Instructions(Vec<String>),
}

/// Record the entity's routes according to the configured format.
///
/// `Annotation` keeps routes beside the controller, so the outcome is the
/// mount instruction for its `router()` function. `Yaml`/`Toml` append an
/// entry to the matching manifest under `config/`, leaving an existing entry
/// for the same entity untouched.
///
/// # Errors
///
/// Returns an error when the manifest exists but cannot be read or written,
/// or when the entry skeleton fails to render.
pub fn update_routing(
    project_root: &Path,
    entity: &EntityDefinition,
    config: &CrudConfig,
    templates: &TemplateRegistry,
) -> Result<RoutingOutcome> {
    let snake = entity.snake_name();

    match config.format {
        RouteFormat::Annotation => Ok(RoutingOutcome::Instructions(vec![
            "Mount the controller routes in your application setup:".to_string(),
            format!("    .merge(controllers::{snake}::router())"),
        ])),
        RouteFormat::Yaml => append_entry(
            project_root,
            "config/routes.yaml",
            "routing_yaml",
            &format!("{snake}:"),
            entity,
            config,
            templates,
        ),
        RouteFormat::Toml => append_entry(
            project_root,
            "config/routes.toml",
            "routing_toml",
            &format!("[routes.{snake}]"),
            entity,
            config,
            templates,
        ),
    }
}

fn append_entry(
    project_root: &Path,
    manifest: &str,
    skeleton: &str,
    marker: &str,
    entity: &EntityDefinition,
    config: &CrudConfig,
    templates: &TemplateRegistry,
) -> Result<RoutingOutcome> {
    let context = render_context(entity, config);
    let entry = templates.render(skeleton, &context)?;
    let path = project_root.join(manifest);

    if !path.exists() {
        let mut lines = vec![format!(
            "Routing manifest {manifest} was not found. Add this entry yourself:"
        )];
        lines.extend(entry.lines().map(|line| format!("    {line}")));
        return Ok(RoutingOutcome::Instructions(lines));
    }

    let existing = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read routing manifest: {}", path.display()))?;
    if existing.contains(marker) {
        return Ok(RoutingOutcome::AlreadyPresent(path));
    }

    let mut contents = existing;
    if !contents.is_empty() && !contents.ends_with('\n') {
        contents.push('\n');
    }
    if !contents.is_empty() {
        contents.push('\n');
    }
    contents.push_str(&entry);

    fs::write(&path, contents)
        .with_context(|| format!("Failed to write routing manifest: {}", path.display()))?;

    Ok(RoutingOutcome::Updated(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FilterType;

    fn entity() -> EntityDefinition {
        EntityDefinition::new("Post", &["title:string".to_string()]).unwrap()
    }

    fn config(format: RouteFormat) -> CrudConfig {
        CrudConfig {
            format,
            filter_type: FilterType::None,
            ..CrudConfig::default()
        }
    }

    #[test]
    fn annotation_format_returns_the_mount_instruction() {
        let temp_dir = tempfile::tempdir().unwrap();
        let templates = TemplateRegistry::new().unwrap();

        let outcome = update_routing(
            temp_dir.path(),
            &entity(),
            &config(RouteFormat::Annotation),
            &templates,
        )
        .unwrap();

        let RoutingOutcome::Instructions(lines) = outcome else {
            panic!("expected instructions");
        };
        assert!(lines
            .iter()
            .any(|line| line.contains("controllers::post::router()")));
    }

    #[test]
    fn yaml_entry_is_appended_once() {
        let temp_dir = tempfile::tempdir().unwrap();
        let manifest = temp_dir.path().join("config/routes.yaml");
        fs::create_dir_all(manifest.parent().unwrap()).unwrap();
        fs::write(&manifest, "home:\n    resource: controllers::home\n").unwrap();

        let templates = TemplateRegistry::new().unwrap();

        let outcome = update_routing(
            temp_dir.path(),
            &entity(),
            &config(RouteFormat::Yaml),
            &templates,
        )
        .unwrap();
        assert_eq!(outcome, RoutingOutcome::Updated(manifest.clone()));

        let contents = fs::read_to_string(&manifest).unwrap();
        assert!(contents.starts_with("home:"));
        assert!(contents.contains("post:"));
        assert!(contents.contains("prefix: /post"));

        // A second run leaves the manifest alone.
        let outcome = update_routing(
            temp_dir.path(),
            &entity(),
            &config(RouteFormat::Yaml),
            &templates,
        )
        .unwrap();
        assert_eq!(outcome, RoutingOutcome::AlreadyPresent(manifest.clone()));
        assert_eq!(fs::read_to_string(&manifest).unwrap(), contents);
    }

    #[test]
    fn toml_entry_uses_the_toml_skeleton() {
        let temp_dir = tempfile::tempdir().unwrap();
        let manifest = temp_dir.path().join("config/routes.toml");
        fs::create_dir_all(manifest.parent().unwrap()).unwrap();
        fs::write(&manifest, "").unwrap();

        let templates = TemplateRegistry::new().unwrap();

        let outcome = update_routing(
            temp_dir.path(),
            &entity(),
            &config(RouteFormat::Toml),
            &templates,
        )
        .unwrap();
        assert_eq!(outcome, RoutingOutcome::Updated(manifest.clone()));

        let contents = fs::read_to_string(&manifest).unwrap();
        assert!(contents.contains("[routes.post]"));
        assert!(contents.contains(r#"prefix = "/post""#));
    }

    #[test]
    fn missing_manifest_degrades_to_instructions() {
        let temp_dir = tempfile::tempdir().unwrap();
        let templates = TemplateRegistry::new().unwrap();

        let outcome = update_routing(
            temp_dir.path(),
            &entity(),
            &config(RouteFormat::Yaml),
            &templates,
        )
        .unwrap();

        let RoutingOutcome::Instructions(lines) = outcome else {
            panic!("expected instructions");
        };
        assert!(lines[0].contains("config/routes.yaml"));
        assert!(lines.iter().any(|line| line.contains("post:")));
    }
}
