use log::info;

use crate::config::DraftConfig;
use crate::model::RecipeDraft;
use crate::{generate_slug, parse_recipe_text, ImportError};

/// Builder for turning pasted text into a [`RecipeDraft`]
#[derive(Debug, Default)]
pub struct RecipeImporterBuilder {
    text: Option<String>,
    title: Option<String>,
    description: Option<String>,
    config: DraftConfig,
}

impl RecipeImporterBuilder {
    /// Set the pasted recipe text
    ///
    /// # Example
    /// ```
    /// use forage_import::RecipeImporter;
    ///
    /// let builder = RecipeImporter::builder()
    ///     .text("Ingredients\n2 cups flour\nInstructions\nMix well.");
    /// ```
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the recipe title
    ///
    /// The importer only produces a placeholder title, so one must be supplied here.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the recipe description
    ///
    /// When omitted or blank, the description is taken from the first line of
    /// the instructions.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Override the draft settings (description excerpt length and suffix)
    pub fn config(mut self, config: DraftConfig) -> Self {
        self.config = config;
        self
    }

    /// Parse the text and assemble the draft
    ///
    /// # Errors
    /// Returns `ImportError` if:
    /// - No text was given, or it is blank
    /// - No title was given, or it is blank
    /// - The text contains no ingredient lines
    ///
    /// # Example
    /// ```
    /// use forage_import::RecipeImporter;
    ///
    /// let draft = RecipeImporter::builder()
    ///     .text("3 eggs\nSalt\nBeat the eggs. Cook gently.")
    ///     .title("Scrambled Eggs")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(draft.slug, "scrambled-eggs");
    /// assert_eq!(draft.ingredients.len(), 2);
    /// assert_eq!(draft.description, "Beat the eggs. Cook gently....");
    /// ```
    pub fn build(self) -> Result<RecipeDraft, ImportError> {
        let text = self
            .text
            .filter(|text| !text.trim().is_empty())
            .ok_or(ImportError::EmptyText)?;

        let title = self
            .title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .ok_or(ImportError::MissingTitle)?
            .to_string();

        let parsed = parse_recipe_text(&text);
        if parsed.ingredients.is_empty() {
            return Err(ImportError::NoIngredients);
        }

        let description = match self.description {
            Some(description) if !description.trim().is_empty() => description,
            _ => excerpt(&parsed.instructions, &self.config),
        };

        let draft = RecipeDraft {
            slug: generate_slug(&title),
            title,
            description,
            ingredients: parsed.ingredients,
            instructions: parsed.instructions,
        };

        info!(
            "Built draft '{}' with {} ingredients",
            draft.slug,
            draft.ingredients.len()
        );
        Ok(draft)
    }
}

/// First line of the instructions, cut to the configured length, plus the suffix.
fn excerpt(instructions: &str, config: &DraftConfig) -> String {
    let first_line = instructions.split('\n').next().unwrap_or_default();
    let mut out: String = first_line
        .chars()
        .take(config.description_excerpt_chars)
        .collect();
    out.push_str(&config.description_suffix);
    out
}

/// Main entry point for the builder API
pub struct RecipeImporter;

impl RecipeImporter {
    /// Creates a new builder for importing recipes
    ///
    /// # Example
    /// ```
    /// use forage_import::RecipeImporter;
    ///
    /// let builder = RecipeImporter::builder();
    /// ```
    pub fn builder() -> RecipeImporterBuilder {
        RecipeImporterBuilder::default()
    }
}
