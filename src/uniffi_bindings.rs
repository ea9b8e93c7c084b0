//! UniFFI bindings for forage-import
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! Everything here is synchronous; the importer does no I/O.

use std::fmt;

use crate::{ImportError, ParsedIngredientLine, ParsedRecipe, RecipeDraft};

// UniFFI scaffolding, generated from the proc-macros below
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible ingredient line
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiIngredientLine {
    pub name: String,
    /// Quantity text, empty if none
    pub quantity: String,
    /// Notes from trailing parentheses, empty if none
    pub notes: String,
}

impl From<ParsedIngredientLine> for FfiIngredientLine {
    fn from(line: ParsedIngredientLine) -> Self {
        FfiIngredientLine {
            name: line.name,
            quantity: line.quantity,
            notes: line.notes,
        }
    }
}

/// FFI-compatible parse result
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiParsedRecipe {
    pub title: String,
    pub ingredients: Vec<FfiIngredientLine>,
    pub instructions: String,
}

impl From<ParsedRecipe> for FfiParsedRecipe {
    fn from(recipe: ParsedRecipe) -> Self {
        FfiParsedRecipe {
            title: recipe.title,
            ingredients: recipe.ingredients.into_iter().map(Into::into).collect(),
            instructions: recipe.instructions,
        }
    }
}

/// FFI-compatible recipe draft
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipeDraft {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub ingredients: Vec<FfiIngredientLine>,
    pub instructions: String,
}

impl From<RecipeDraft> for FfiRecipeDraft {
    fn from(draft: RecipeDraft) -> Self {
        FfiRecipeDraft {
            title: draft.title,
            slug: draft.slug,
            description: draft.description,
            ingredients: draft.ingredients.into_iter().map(Into::into).collect(),
            instructions: draft.instructions,
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiImportError {
    /// Recipe text or title missing
    InvalidInput { message: String },
    /// No ingredient lines were found
    NoIngredients { message: String },
    /// Ingredient catalog failure
    CatalogError { message: String },
    /// Configuration error
    ConfigError { message: String },
    /// I/O or serialization failure
    Other { message: String },
}

impl fmt::Display for FfiImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiImportError::InvalidInput { message } => write!(f, "Invalid input: {}", message),
            FfiImportError::NoIngredients { message } => write!(f, "No ingredients: {}", message),
            FfiImportError::CatalogError { message } => write!(f, "Catalog error: {}", message),
            FfiImportError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiImportError::Other { message } => write!(f, "Error: {}", message),
        }
    }
}

impl std::error::Error for FfiImportError {}

impl From<ImportError> for FfiImportError {
    fn from(err: ImportError) -> Self {
        let message = err.to_string();
        match err {
            ImportError::EmptyText | ImportError::MissingTitle => {
                FfiImportError::InvalidInput { message }
            }
            ImportError::NoIngredients => FfiImportError::NoIngredients { message },
            ImportError::DuplicateIngredient(_) | ImportError::CatalogError(_) => {
                FfiImportError::CatalogError { message }
            }
            ImportError::ConfigError(_) => FfiImportError::ConfigError { message },
            ImportError::IoError(_) | ImportError::JsonError(_) => {
                FfiImportError::Other { message }
            }
        }
    }
}

/// Split pasted recipe text into ingredients and instructions
///
/// Never fails; unrecognized text yields empty sections.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn parse_recipe_text(text: String) -> FfiParsedRecipe {
    crate::parse_recipe_text(&text).into()
}

/// Build a titled recipe draft from pasted text
///
/// # Arguments
/// * `text` - The pasted recipe text
/// * `title` - Recipe title supplied by the user
/// * `description` - Optional description; derived from the instructions when absent
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn build_recipe_draft(
    text: String,
    title: String,
    description: Option<String>,
) -> Result<FfiRecipeDraft, FfiImportError> {
    let mut builder = crate::RecipeImporter::builder().text(text).title(title);

    if let Some(description) = description {
        builder = builder.description(description);
    }

    Ok(builder.build()?.into())
}

/// Generate a URL slug from a title
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn generate_slug(text: String) -> String {
    crate::generate_slug(&text)
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
