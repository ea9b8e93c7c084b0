use thiserror::Error;

/// Errors that can occur while turning pasted text into a recipe draft.
///
/// Parsing itself never fails; these cover validation of the result and the
/// surfaces around it.
#[derive(Error, Debug)]
pub enum ImportError {
    /// No recipe text was provided, or it was blank
    #[error("Recipe text cannot be empty")]
    EmptyText,

    /// The recipe needs a title supplied by the user
    #[error("Recipe title is required")]
    MissingTitle,

    /// The text did not contain any recognizable ingredient lines
    #[error("No ingredients found in the recipe text")]
    NoIngredients,

    /// An ingredient with this name already exists in the catalog
    #[error("Ingredient already exists: {0}")]
    DuplicateIngredient(String),

    /// The ingredient catalog rejected an operation
    #[error("Catalog error: {0}")]
    CatalogError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Failed to read input
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to read or write JSON
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
