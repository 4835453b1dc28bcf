use anyhow::Context;
use clap::Parser;

use seedwork_catalog::{Category, CategoryProperties};
use seedwork_core::{UniqueEntityId, deep_freeze};

#[derive(Debug, Parser)]
#[command(name = "seedwork-demo")]
#[command(about = "Build a category and print its frozen projection")]
#[command(version)]
struct Cli {
    /// Category name
    name: String,

    /// Optional description
    #[arg(long)]
    description: Option<String>,

    /// Adopt this identifier instead of generating one
    #[arg(long)]
    id: Option<UniqueEntityId>,

    /// Create the category deactivated
    #[arg(long)]
    inactive: bool,
}

impl Cli {
    fn into_category(self) -> anyhow::Result<Category> {
        Category::new(
            CategoryProperties {
                description: self.description,
                is_active: Some(!self.inactive),
                ..CategoryProperties::named(self.name)
            },
            self.id,
        )
        .context("invalid category")
    }
}

fn main() -> anyhow::Result<()> {
    seedwork_observability::init();

    let category = Cli::parse().into_category()?;
    tracing::info!(id = %category.id(), "category created");

    let snapshot = deep_freeze(category.to_object()?);
    println!("{}", serde_json::to_string_pretty(&*snapshot)?);
    Ok(())
}
