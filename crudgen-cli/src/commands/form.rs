//! Standalone form generation command.

use anyhow::{bail, Context, Result};
use console::style;
use crudgen::{generate_form, CrudConfig, EntityDefinition, TemplateRegistry};

use crate::writer::{write_files, OverwriteMode};

/// Generate only the form struct for an entity.
pub struct FormCommand {
    entity: String,
    fields: Vec<String>,
    overwrite: bool,
}

impl FormCommand {
    /// Create the command from parsed arguments.
    #[must_use]
    pub const fn new(entity: String, fields: Vec<String>, overwrite: bool) -> Self {
        Self {
            entity,
            fields,
            overwrite,
        }
    }

    /// Run the generation.
    ///
    /// # Errors
    ///
    /// Returns an error on invalid entity or field specs, or any failure
    /// while rendering or writing the file.
    pub fn execute(&self) -> Result<()> {
        let entity = EntityDefinition::new(&self.entity, &self.fields)?;
        let project_root =
            std::env::current_dir().context("Failed to get current directory")?;

        println!(
            "\n{} {} {}",
            style("Generating form for").cyan().bold(),
            style(entity.name()).green().bold(),
            style("...").cyan().bold()
        );

        let templates = TemplateRegistry::with_overrides(&project_root)?;
        let config = CrudConfig {
            overwrite: self.overwrite,
            ..CrudConfig::default()
        };
        let Some(file) = generate_form(&entity, &config, &templates)? else {
            bail!("Form generation produced no file");
        };

        let mode = if self.overwrite {
            OverwriteMode::Force
        } else {
            OverwriteMode::Skip
        };
        write_files(&project_root, &[file], mode)?;

        println!("\n{}", style("Next steps:").cyan().bold());
        println!(
            "  1. Register the form: {}",
            style(format!("pub mod {};", entity.snake_name())).yellow()
        );

        Ok(())
    }
}
