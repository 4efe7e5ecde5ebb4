//! Integration tests for end-to-end scaffold generation.

use std::fs;

use crudgen::{
    generate_crud, generate_filter, generate_form, update_routing, CrudConfig, EntityDefinition,
    FilterType, RouteFormat, RoutingOutcome, TemplateRegistry,
};
use crudgen_cli::writer::{write_files, OverwriteMode};
use tempfile::TempDir;

fn entity() -> EntityDefinition {
    EntityDefinition::new(
        "BlogPost",
        &[
            "title:string".to_string(),
            "body:text".to_string(),
            "published:boolean".to_string(),
            "published_at:datetime:optional".to_string(),
        ],
    )
    .unwrap()
}

fn generate_all(config: &CrudConfig, root: &std::path::Path) -> Vec<crudgen::GeneratedFile> {
    let entity = entity();
    let templates = TemplateRegistry::with_overrides(root).unwrap();
    let mut files = generate_crud(&entity, config, &templates).unwrap();
    files.extend(generate_form(&entity, config, &templates).unwrap());
    files.extend(generate_filter(&entity, config, &templates).unwrap());
    files
}

/// A default run produces the full scaffold on disk.
#[test]
fn full_scaffold_lands_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let config = CrudConfig::default();

    let files = generate_all(&config, temp_dir.path());
    let summary = write_files(temp_dir.path(), &files, OverwriteMode::Skip).unwrap();

    assert_eq!(summary.written.len(), files.len());
    assert!(summary.skipped.is_empty());

    for relative in [
        "src/controllers/blog_post.rs",
        "src/forms/blog_post.rs",
        "src/filters/blog_post.rs",
        "templates/blog_post/index.html",
        "templates/blog_post/show.html",
        "templates/blog_post/new.html",
        "templates/blog_post/edit.html",
        "templates/blog_post/_form.html",
        "templates/blog_post/_filter.html",
    ] {
        assert!(
            temp_dir.path().join(relative).is_file(),
            "missing {relative}"
        );
    }
}

/// Generated artifacts carry humanized labels derived from identifiers.
#[test]
fn generated_views_humanize_field_names() {
    let temp_dir = TempDir::new().unwrap();
    let files = generate_all(&CrudConfig::default(), temp_dir.path());

    let form = files
        .iter()
        .find(|file| file.path.ends_with("_form.html"))
        .unwrap();
    assert!(form.content.contains(">Published at</label>"));
    assert!(form.content.contains(">Title</label>"));

    let index = files
        .iter()
        .find(|file| file.path.ends_with("index.html"))
        .unwrap();
    assert!(index.content.contains("Blog posts"));
}

/// `--without-write` trims the scaffold down to the read-only surface.
#[test]
fn read_only_scaffold_has_no_write_artifacts() {
    let temp_dir = TempDir::new().unwrap();
    let config = CrudConfig {
        without_write: true,
        filter_type: FilterType::None,
        ..CrudConfig::default()
    };

    let files = generate_all(&config, temp_dir.path());
    write_files(temp_dir.path(), &files, OverwriteMode::Skip).unwrap();

    assert!(!temp_dir.path().join("src/forms/blog_post.rs").exists());
    assert!(!temp_dir.path().join("src/filters/blog_post.rs").exists());
    assert!(!temp_dir.path().join("templates/blog_post/new.html").exists());

    let controller =
        fs::read_to_string(temp_dir.path().join("src/controllers/blog_post.rs")).unwrap();
    assert!(!controller.contains("pub async fn create"));
    assert!(!controller.contains("bulk_delete"));
    assert!(controller.contains("pub async fn index"));
    assert!(controller.contains("pub async fn show"));
}

/// Module views land inside src/ instead of the templates/ tree.
#[test]
fn module_views_relocate_the_view_tree() {
    let temp_dir = TempDir::new().unwrap();
    let config = CrudConfig {
        module_views: true,
        ..CrudConfig::default()
    };

    let files = generate_all(&config, temp_dir.path());
    write_files(temp_dir.path(), &files, OverwriteMode::Skip).unwrap();

    assert!(temp_dir
        .path()
        .join("src/blog_post/templates/index.html")
        .is_file());
    assert!(!temp_dir.path().join("templates/blog_post").exists());
}

/// A second non-overwriting run leaves edited files alone.
#[test]
fn second_run_without_overwrite_skips_existing_files() {
    let temp_dir = TempDir::new().unwrap();
    let config = CrudConfig::default();

    let files = generate_all(&config, temp_dir.path());
    write_files(temp_dir.path(), &files, OverwriteMode::Skip).unwrap();

    let controller_path = temp_dir.path().join("src/controllers/blog_post.rs");
    fs::write(&controller_path, "// hand-edited\n").unwrap();

    let summary = write_files(temp_dir.path(), &files, OverwriteMode::Skip).unwrap();
    assert!(summary
        .skipped
        .iter()
        .any(|path| path.ends_with("blog_post.rs")));
    assert_eq!(
        fs::read_to_string(&controller_path).unwrap(),
        "// hand-edited\n"
    );

    let summary = write_files(temp_dir.path(), &files, OverwriteMode::Force).unwrap();
    assert!(summary
        .written
        .iter()
        .any(|path| path.ends_with("blog_post.rs")));
    assert!(fs::read_to_string(&controller_path)
        .unwrap()
        .contains("pub async fn index"));
}

/// The yaml routing format appends a manifest entry once.
#[test]
fn yaml_routing_manifest_is_maintained() {
    let temp_dir = TempDir::new().unwrap();
    let manifest = temp_dir.path().join("config/routes.yaml");
    fs::create_dir_all(manifest.parent().unwrap()).unwrap();
    fs::write(&manifest, "home:\n    resource: controllers::home\n").unwrap();

    let config = CrudConfig {
        format: RouteFormat::Yaml,
        ..CrudConfig::default()
    };
    let entity = entity();
    let templates = TemplateRegistry::with_overrides(temp_dir.path()).unwrap();

    let outcome = update_routing(temp_dir.path(), &entity, &config, &templates).unwrap();
    assert!(matches!(outcome, RoutingOutcome::Updated(_)));

    let outcome = update_routing(temp_dir.path(), &entity, &config, &templates).unwrap();
    assert!(matches!(outcome, RoutingOutcome::AlreadyPresent(_)));

    let contents = fs::read_to_string(&manifest).unwrap();
    assert_eq!(contents.matches("blog_post:").count(), 1);
    assert!(contents.contains("prefix: /blog_post"));
}

/// Skeleton overrides shadow the built-in templates during a real run.
#[test]
fn skeleton_overrides_apply_to_generation() {
    let temp_dir = TempDir::new().unwrap();
    let skeleton_dir = temp_dir.path().join(".crudgen/skeleton");
    fs::create_dir_all(&skeleton_dir).unwrap();
    fs::write(
        skeleton_dir.join("view_index.hbs"),
        "custom index for {{entity_name}}\n",
    )
    .unwrap();

    let files = generate_all(&CrudConfig::default(), temp_dir.path());
    let index = files
        .iter()
        .find(|file| file.path.ends_with("index.html"))
        .unwrap();
    assert_eq!(index.content, "custom index for BlogPost\n");
}
