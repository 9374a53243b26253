mod chart;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;

use mise_core::{
    restrictions, EmbeddedNutrition, Recipe, RecipeCatalog, SelectError, SelectionSession,
};

#[derive(Parser)]
#[command(name = "mise")]
#[command(about = "Suggest recipes from the ingredients you have", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter, score, and rank recipes, then pick one
    Suggest {
        /// Path to the recipe catalog (JSON)
        #[arg(long, default_value = "data/catalog.json")]
        catalog: PathBuf,
        /// Ingredient you have (repeat or comma-separate)
        #[arg(long = "have", value_delimiter = ',', required = true)]
        have: Vec<String>,
        /// Active dietary restriction (repeatable)
        #[arg(long = "restrict")]
        restrict: Vec<String>,
        /// Minimum ingredient coverage in 0..=1 (1.0 = nothing missing)
        #[arg(long, default_value_t = 1.0)]
        threshold: f64,
        /// Show only the top N candidates
        #[arg(long)]
        top: Option<usize>,
        /// Pick this candidate index instead of prompting
        #[arg(long)]
        pick: Option<usize>,
    },
    /// List the built-in dietary restrictions
    Restrictions,
    /// Print one recipe from a catalog by name
    Show {
        /// Path to the recipe catalog (JSON)
        #[arg(long, default_value = "data/catalog.json")]
        catalog: PathBuf,
        /// Recipe name (case-insensitive)
        name: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Suggest {
            catalog,
            have,
            restrict,
            threshold,
            top,
            pick,
        } => suggest(&catalog, &have, &restrict, threshold, top, pick),
        Commands::Restrictions => {
            list_restrictions();
            Ok(())
        }
        Commands::Show { catalog, name } => show(&catalog, &name),
    }
}

fn suggest(
    catalog_path: &PathBuf,
    have: &[String],
    restrict: &[String],
    threshold: f64,
    top: Option<usize>,
    pick: Option<usize>,
) -> Result<()> {
    let catalog = RecipeCatalog::load(catalog_path)
        .with_context(|| format!("loading catalog {}", catalog_path.display()))?;

    let mut session = SelectionSession::new(&catalog);
    session.add_ingredients(have);
    session.set_threshold(threshold);
    for name in restrict {
        session.add_restriction(name)?;
    }

    match session.run(&EmbeddedNutrition) {
        Ok(_) => {}
        Err(SelectError::NoMatchingRecipe) => {
            println!("No recipe matches those ingredients and restrictions.");
            if session.threshold() == 1.0 {
                println!("Try lowering --threshold to allow missing ingredients.");
            }
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    }

    for (name, err) in session.dropped() {
        warn!(recipe = %name, %err, "recipe skipped");
    }

    println!("Best matches (healthiness score out of 100):\n");
    print!("{}", chart::render(&session.ranked(), top));
    println!();

    let shown = top.unwrap_or(usize::MAX).min(session.candidates().len());

    let index = match pick {
        Some(index) => index,
        None => match prompt_for_choice(&session, shown)? {
            Some(index) => index,
            None => {
                println!("Aborted.");
                return Ok(());
            }
        },
    };

    let missing = session
        .candidates()
        .get(index)
        .map(|c| c.coverage.missing.clone())
        .unwrap_or_default();
    let recipe = session.choose(index)?;
    print_recipe(recipe, &missing);
    Ok(())
}

/// Prompt until a valid index is given. An out-of-range index
/// re-prompts; EOF (Ctrl-D) aborts cleanly and returns None.
fn prompt_for_choice(session: &SelectionSession<'_>, shown: usize) -> Result<Option<usize>> {
    let stdin = io::stdin();
    loop {
        print!("Pick a recipe [0-{}]: ", shown.saturating_sub(1));
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let Ok(index) = trimmed.parse::<usize>() else {
            println!("Not a number: {trimmed}");
            continue;
        };

        if session.candidates().get(index).is_none() {
            println!(
                "{}",
                SelectError::InvalidSelection {
                    index,
                    count: session.candidates().len(),
                }
            );
            continue;
        }
        return Ok(Some(index));
    }
}

fn print_recipe(recipe: &Recipe, missing: &[String]) {
    println!("=== {} ===", recipe.name);
    if !recipe.tags.is_empty() {
        let tags: Vec<_> = recipe.tags.iter().map(String::as_str).collect();
        println!("Tags: {}", tags.join(", "));
    }

    println!("\nIngredients:");
    for ing in &recipe.ingredients {
        let line = ing.raw.as_deref().unwrap_or(&ing.name);
        match &ing.category {
            Some(category) => println!("  - {line} ({category})"),
            None => println!("  - {line}"),
        }
    }

    if missing.is_empty() {
        println!("\nYou have all the ingredients.");
    } else {
        println!("\nYou are missing:");
        for name in missing {
            println!("  - {name}");
        }
    }

    if !recipe.steps.is_empty() {
        println!("\nDirections:");
        for (i, step) in recipe.steps.iter().enumerate() {
            println!("  {}. {step}", i + 1);
        }
    }
}

fn list_restrictions() {
    for restriction in restrictions::all() {
        println!("{}", restriction.name);
        println!("  forbids: {}", restriction.forbidden.join(", "));
    }
}

fn show(catalog_path: &PathBuf, name: &str) -> Result<()> {
    let catalog = RecipeCatalog::load(catalog_path)
        .with_context(|| format!("loading catalog {}", catalog_path.display()))?;
    let recipe = catalog
        .get(name)
        .with_context(|| format!("no recipe named {name:?} in the catalog"))?;
    print_recipe(recipe, &[]);
    Ok(())
}
