use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use log::debug;
use serde::Serialize;

use forage_import::{
    generate_slug, import_with_catalog, parse_recipe_text, ImportConfig, ImportError,
    InMemoryCatalog, RecipeDraft, RecipeImporter, RecipeIngredient,
};

#[derive(Debug, Parser)]
#[command(name = "forage-import")]
#[command(about = "Turn pasted recipe text into structured recipes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Split recipe text into ingredients and instructions
    Parse {
        /// Input file, or `-` / omitted for stdin
        file: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Build a titled recipe draft from recipe text
    Draft {
        /// Input file, or `-` / omitted for stdin
        file: Option<PathBuf>,
        /// Recipe title
        #[arg(long)]
        title: String,
        /// Recipe description (defaults to the start of the instructions)
        #[arg(long)]
        description: Option<String>,
        /// JSON array of known ingredient names to match against
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Print the URL slug for a title
    Slug {
        /// Title text
        text: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Markdown,
}

#[derive(Serialize)]
struct ResolvedDraft<'a> {
    draft: &'a RecipeDraft,
    ingredients: Vec<ResolvedIngredient<'a>>,
}

#[derive(Serialize)]
struct ResolvedIngredient<'a> {
    #[serde(flatten)]
    ingredient: &'a RecipeIngredient,
    created: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), ImportError> {
    match cli.command {
        Command::Parse { file, format } => {
            let text = read_input(file.as_deref())?;
            let recipe = parse_recipe_text(&text);
            match format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&recipe)?),
                Format::Markdown => print!("{}", recipe.to_markdown()),
            }
        }
        Command::Draft {
            file,
            title,
            description,
            catalog,
        } => {
            let config = ImportConfig::load()?;
            debug!("Loaded configuration: {:?}", config);
            let text = read_input(file.as_deref())?;

            match catalog {
                Some(path) => {
                    let names: Vec<String> = serde_json::from_str(&fs::read_to_string(path)?)?;
                    let mut catalog =
                        InMemoryCatalog::from_names(&names, &config.catalog.default_category)?;
                    let known = catalog.len() as u64;

                    let (draft, ingredients) = import_with_catalog(
                        &text,
                        &title,
                        description.as_deref(),
                        &mut catalog,
                        &config,
                    )?;
                    debug!("Catalog now holds {} ingredients", catalog.len());

                    let output = ResolvedDraft {
                        draft: &draft,
                        ingredients: ingredients
                            .iter()
                            .map(|ingredient| ResolvedIngredient {
                                ingredient,
                                created: ingredient.ingredient.id > known,
                            })
                            .collect(),
                    };
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                None => {
                    let mut builder = RecipeImporter::builder()
                        .text(text)
                        .title(title)
                        .config(config.draft);
                    if let Some(description) = description {
                        builder = builder.description(description);
                    }
                    println!("{}", serde_json::to_string_pretty(&builder.build()?)?);
                }
            }
        }
        Command::Slug { text } => println!("{}", generate_slug(&text)),
    }

    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String, ImportError> {
    match file {
        Some(path) if path != Path::new("-") => Ok(fs::read_to_string(path)?),
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

