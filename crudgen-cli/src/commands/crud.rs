//! Complete CRUD generation command.
//!
//! Resolves options through flags or the interactive wizard, runs the three
//! generators, writes the files and records the routes. The wizard follows
//! the same question order every time: write actions, filter type, bulk
//! actions, base template, routing format, route prefix, then a summary and
//! a final confirmation gate.

use anyhow::{bail, Context, Result};
use clap::Args;
use console::{style, user_attended, Emoji};
use crudgen::{
    generate_crud, generate_filter, generate_form, update_routing, CrudConfig, EntityDefinition,
    FilterType, RouteFormat, RoutingOutcome, TemplateRegistry, DEFAULT_BASE_TEMPLATE,
};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};

use crate::writer::{write_files, OverwriteMode, WriteSummary};

static SPARKLE: Emoji = Emoji("✨", ":-)");

/// Options recognized by `crudgen crud`.
#[derive(Debug, Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct CrudOptions {
    /// Route prefix all actions are mounted under (defaults to the entity name)
    #[arg(short = 'r', long)]
    pub route_prefix: Option<String>,

    /// Base template the generated views extend
    #[arg(short = 't', long, default_value = DEFAULT_BASE_TEMPLATE)]
    pub template: String,

    /// Routing artifact format
    #[arg(short = 'f', long, value_enum, default_value_t = RouteFormat::Annotation)]
    pub format: RouteFormat,

    /// Overwrite existing files without asking
    #[arg(short = 'o', long)]
    pub overwrite: bool,

    /// Store view files next to the module instead of under templates/
    #[arg(short = 'm', long)]
    pub module_views: bool,

    /// Skip the new, create, edit, update and delete actions
    #[arg(long)]
    pub without_write: bool,

    /// Skip the show action and view
    #[arg(long)]
    pub without_show: bool,

    /// Skip bulk delete actions
    #[arg(long)]
    pub without_bulk: bool,

    /// Filtering flavor for the list view
    #[arg(long, value_enum, default_value_t = FilterType::Form)]
    pub filter_type: FilterType,

    /// Never ask questions; use the option values as given
    #[arg(short = 'n', long)]
    pub no_interaction: bool,
}

/// Generate a complete CRUD resource for one entity.
pub struct CrudCommand {
    entity: String,
    fields: Vec<String>,
    options: CrudOptions,
}

impl CrudCommand {
    /// Create the command from parsed arguments.
    #[must_use]
    pub const fn new(entity: String, fields: Vec<String>, options: CrudOptions) -> Self {
        Self {
            entity,
            fields,
            options,
        }
    }

    /// Run the generation.
    ///
    /// # Errors
    ///
    /// Returns an error on invalid entity or field specs, declined
    /// confirmation, or any failure while rendering or writing files.
    pub fn execute(mut self) -> Result<()> {
        let entity = EntityDefinition::new(&self.entity, &self.fields)?;
        let interactive = user_attended() && !self.options.no_interaction;

        if interactive {
            self.interact(&entity)?;
        }

        let config = CrudConfig {
            route_prefix: self
                .options
                .route_prefix
                .clone()
                .unwrap_or_else(|| entity.snake_name()),
            base_template: self.options.template.clone(),
            format: self.options.format,
            overwrite: self.options.overwrite,
            module_views: self.options.module_views,
            without_write: self.options.without_write,
            without_show: self.options.without_show,
            without_bulk: self.options.without_bulk,
            filter_type: self.options.filter_type,
        };

        if interactive {
            Self::summarize(&entity, &config);
            let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt("Do you confirm generation?")
                .default(true)
                .interact()
                .context("Failed to read confirmation")?;
            if !confirmed {
                bail!("Command aborted");
            }
        }

        let project_root =
            std::env::current_dir().context("Failed to get current directory")?;

        println!(
            "\n{} {} {}",
            style("Generating CRUD for").cyan().bold(),
            style(entity.name()).green().bold(),
            style("...").cyan().bold()
        );

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        spinner.set_message("Rendering skeletons...");

        let templates = TemplateRegistry::with_overrides(&project_root)?;
        let mut files = generate_crud(&entity, &config, &templates)?;
        files.extend(generate_form(&entity, &config, &templates)?);
        files.extend(generate_filter(&entity, &config, &templates)?);

        spinner.finish_and_clear();

        println!(
            "\n{} {} files:",
            style("Generated").green().bold(),
            files.len()
        );

        let mode = if config.overwrite {
            OverwriteMode::Force
        } else if interactive {
            OverwriteMode::Ask
        } else {
            OverwriteMode::Skip
        };
        let summary = write_files(&project_root, &files, mode)?;

        println!("\n{}", style("Updating the routing:").cyan().bold());
        let mut warnings = Vec::new();
        match update_routing(&project_root, &entity, &config, &templates)? {
            RoutingOutcome::Updated(path) => {
                println!("  {} {}", style("✓").green(), style(path.display()).dim());
            }
            RoutingOutcome::AlreadyPresent(path) => {
                println!(
                    "  {} {} (entry already present)",
                    style("-").yellow(),
                    style(path.display()).dim()
                );
            }
            RoutingOutcome::Instructions(lines) => warnings.extend(lines),
        }
        for path in &summary.skipped {
            warnings.push(format!("Left existing file untouched: {}", path.display()));
        }

        Self::print_summary(&entity, &config, &summary, &warnings);

        Ok(())
    }

    /// Interactive wizard adjusting the options in place.
    fn interact(&mut self, entity: &EntityDefinition) -> Result<()> {
        let theme = ColorfulTheme::default();

        println!(
            "\n{}",
            style("Welcome to the crudgen CRUD generator").cyan().bold()
        );
        println!(
            "\nThis command generates CRUD controllers, forms, filters and views for the {} entity.\n",
            style(entity.name()).green()
        );

        let write = Confirm::with_theme(&theme)
            .with_prompt("Do you want to generate the \"write\" actions (new, edit, delete)?")
            .default(!self.options.without_write)
            .interact()
            .context("Failed to read answer")?;
        self.options.without_write = !write;

        let filter_choices = [FilterType::Form, FilterType::Input, FilterType::None];
        let default_filter = filter_choices
            .iter()
            .position(|choice| *choice == self.options.filter_type)
            .unwrap_or(0);
        let selected = Select::with_theme(&theme)
            .with_prompt("Filter type for the list view")
            .items(&filter_choices)
            .default(default_filter)
            .interact()
            .context("Failed to read answer")?;
        self.options.filter_type = filter_choices[selected];

        if write {
            let bulk = Confirm::with_theme(&theme)
                .with_prompt("Do you want to generate bulk delete actions?")
                .default(!self.options.without_bulk)
                .interact()
                .context("Failed to read answer")?;
            self.options.without_bulk = !bulk;
        }

        let template: String = Input::with_theme(&theme)
            .with_prompt("Base template for the views")
            .default(self.options.template.clone())
            .interact_text()
            .context("Failed to read answer")?;
        self.options.template = template;

        let format_choices = [RouteFormat::Annotation, RouteFormat::Yaml, RouteFormat::Toml];
        let default_format = format_choices
            .iter()
            .position(|choice| *choice == self.options.format)
            .unwrap_or(0);
        let selected = Select::with_theme(&theme)
            .with_prompt("Routing format")
            .items(&format_choices)
            .default(default_format)
            .interact()
            .context("Failed to read answer")?;
        self.options.format = format_choices[selected];

        let default_prefix = self
            .options
            .route_prefix
            .clone()
            .unwrap_or_else(|| entity.snake_name());
        let prefix: String = Input::with_theme(&theme)
            .with_prompt("Routes prefix")
            .default(format!("/{default_prefix}"))
            .interact_text()
            .context("Failed to read answer")?;
        self.options.route_prefix = Some(prefix.trim_start_matches('/').to_string());

        Ok(())
    }

    fn summarize(entity: &EntityDefinition, config: &CrudConfig) {
        let yes_no = |flag: bool| if flag { "yes" } else { "no" };

        println!(
            "\n{}",
            style(" Summary before generation ").white().on_blue().bold()
        );
        println!();
        println!(
            "You are going to generate CRUD code for {}",
            style(entity.name()).green().bold()
        );
        println!(
            "  route prefix     {}",
            style(format!("/{}", config.resolved_prefix(&entity.snake_name()))).yellow()
        );
        println!("  base template    {}", style(&config.base_template).yellow());
        println!("  routing format   {}", style(config.format).yellow());
        println!("  write actions    {}", style(yes_no(config.with_write())).yellow());
        println!("  show action      {}", style(yes_no(config.with_show())).yellow());
        println!("  bulk actions     {}", style(yes_no(config.with_bulk())).yellow());
        println!("  filter type      {}", style(config.filter_type).yellow());
        println!();
    }

    fn print_summary(
        entity: &EntityDefinition,
        config: &CrudConfig,
        summary: &WriteSummary,
        warnings: &[String],
    ) {
        if warnings.is_empty() {
            println!(
                "\n{} CRUD scaffold for {} is ready!",
                SPARKLE,
                style(entity.name()).green().bold()
            );
        } else {
            println!(
                "\n{} CRUD scaffold for {} generated with {} warning(s):",
                style("!").yellow().bold(),
                style(entity.name()).green().bold(),
                warnings.len()
            );
            for warning in warnings {
                println!("  {} {warning}", style("-").yellow());
            }
        }

        let snake = entity.snake_name();
        println!("\n{}", style("Next steps:").cyan().bold());
        println!(
            "  1. Register the controller: {}",
            style(format!("pub mod {snake};")).yellow()
        );
        if config.with_write() {
            println!(
                "  2. Register the form: {}",
                style(format!("pub mod {snake};")).yellow()
            );
        }
        println!(
            "  {}. Make sure the {} model exists with the query helpers the handlers call",
            if config.with_write() { 3 } else { 2 },
            style(entity.name()).green()
        );
        if !summary.written.is_empty() {
            println!(
                "  {}. Build your project: {}",
                if config.with_write() { 4 } else { 3 },
                style("cargo build").yellow()
            );
        }
    }
}
