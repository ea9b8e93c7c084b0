//! Turn pasted free-text recipes into structured recipe drafts.
//!
//! The core is [`parse_recipe_text`], a total function that splits text into
//! ingredient lines and an instructions block. Around it sit the helpers used
//! when storing an import: slugs, a draft builder and ingredient catalog
//! resolution.

pub mod builder;
pub mod catalog;
pub mod config;
pub mod error;
pub mod importer;
pub mod model;
pub mod slug;
pub mod uniffi_bindings;

// Re-export main types
pub use builder::{RecipeImporter, RecipeImporterBuilder};
pub use catalog::{resolve_ingredients, InMemoryCatalog, IngredientCatalog};
pub use config::{CatalogConfig, DraftConfig, ImportConfig};
pub use error::ImportError;
pub use importer::{parse_ingredient_line, parse_recipe_text};
pub use model::{
    Ingredient, ParsedIngredientLine, ParsedRecipe, RecipeDraft, RecipeIngredient,
    PLACEHOLDER_TITLE,
};
pub use slug::{generate_slug, generate_unique_slug, is_valid_slug};

/// Build a draft and resolve its ingredients against `catalog` in one step,
/// using settings from `config`.
pub fn import_with_catalog<C>(
    text: &str,
    title: &str,
    description: Option<&str>,
    catalog: &mut C,
    config: &ImportConfig,
) -> Result<(RecipeDraft, Vec<RecipeIngredient>), ImportError>
where
    C: IngredientCatalog + ?Sized,
{
    let mut builder = RecipeImporter::builder()
        .text(text)
        .title(title)
        .config(config.draft.clone());
    if let Some(description) = description {
        builder = builder.description(description);
    }

    let draft = builder.build()?;
    let ingredients = resolve_ingredients(
        &draft.ingredients,
        catalog,
        &config.catalog.default_category,
    )?;
    Ok((draft, ingredients))
}
