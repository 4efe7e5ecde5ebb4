//! crudgen CLI tool.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use crudgen_cli::commands::{CrudCommand, CrudOptions, FilterCommand, FormCommand};

#[derive(Parser)]
#[command(name = "crudgen")]
#[command(version)]
#[command(
    about = "A CRUD generator with pagination, filters, bulk delete and ready-made views",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a complete CRUD resource (controller, form, filter, views, routing)
    Crud {
        /// Entity name (`PascalCase`, e.g. `Post`, `UserProfile`)
        entity: String,
        /// Field definitions (e.g. `title:string`, `published_at:datetime:optional`)
        #[arg(required = true)]
        fields: Vec<String>,
        #[command(flatten)]
        options: CrudOptions,
    },
    /// Generate only the form struct for an entity
    Form {
        /// Entity name (`PascalCase`)
        entity: String,
        /// Field definitions (e.g. `title:string`)
        #[arg(required = true)]
        fields: Vec<String>,
        /// Overwrite an existing file
        #[arg(short, long)]
        overwrite: bool,
    },
    /// Generate only the filter struct for an entity
    Filter {
        /// Entity name (`PascalCase`)
        entity: String,
        /// Field definitions (e.g. `title:string`)
        #[arg(required = true)]
        fields: Vec<String>,
        /// Overwrite an existing file
        #[arg(short, long)]
        overwrite: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Crud {
            entity,
            fields,
            options,
        } => CrudCommand::new(entity, fields, options).execute(),
        Commands::Form {
            entity,
            fields,
            overwrite,
        } => FormCommand::new(entity, fields, overwrite).execute(),
        Commands::Filter {
            entity,
            fields,
            overwrite,
        } => FilterCommand::new(entity, fields, overwrite).execute(),
    }
}
