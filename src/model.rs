use serde::{Deserialize, Serialize};

/// Title given to every freshly parsed recipe.
///
/// Callers are expected to replace it with a title supplied by the user.
pub const PLACEHOLDER_TITLE: &str = "Imported Recipe";

/// A single ingredient line split into its parts.
///
/// `quantity` is kept as opaque text (e.g. `"2 cups"`, `"1/2"`), never parsed
/// into a number and unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedIngredientLine {
    pub name: String,
    pub quantity: String,
    pub notes: String,
}

impl ParsedIngredientLine {
    pub fn new(
        name: impl Into<String>,
        quantity: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            notes: notes.into(),
        }
    }

    /// Render the line back into a single human readable string,
    /// e.g. `2 cups flour (sifted)`.
    pub fn display_line(&self) -> String {
        let mut out = String::new();
        if !self.quantity.is_empty() {
            out.push_str(&self.quantity);
            out.push(' ');
        }
        out.push_str(&self.name);
        if !self.notes.is_empty() {
            out.push_str(&format!(" ({})", self.notes));
        }
        out
    }
}

/// Result of importing a block of free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRecipe {
    pub title: String,
    pub ingredients: Vec<ParsedIngredientLine>,
    /// Instruction paragraphs separated by a blank line.
    pub instructions: String,
}

impl Default for ParsedRecipe {
    fn default() -> Self {
        Self {
            title: PLACEHOLDER_TITLE.to_string(),
            ingredients: Vec::new(),
            instructions: String::new(),
        }
    }
}

impl ParsedRecipe {
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty() && self.instructions.is_empty()
    }

    /// Render as a small markdown document with ingredient and instruction sections.
    pub fn to_markdown(&self) -> String {
        let mut out = format!("# {}\n", self.title);

        if !self.ingredients.is_empty() {
            out.push_str("\n## Ingredients\n\n");
            for ingredient in &self.ingredients {
                out.push_str("- ");
                out.push_str(&ingredient.display_line());
                out.push('\n');
            }
        }

        if !self.instructions.is_empty() {
            out.push_str("\n## Instructions\n\n");
            out.push_str(&self.instructions);
            out.push('\n');
        }

        out
    }
}

/// A stored ingredient record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: u64,
    pub name: String,
    pub category: String,
}

/// A parsed ingredient line matched to its catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub ingredient: Ingredient,
    pub quantity: String,
    pub notes: String,
}

/// A validated recipe ready to be stored, produced by
/// [`RecipeImporterBuilder::build`](crate::RecipeImporterBuilder::build).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub ingredients: Vec<ParsedIngredientLine>,
    pub instructions: String,
}

impl RecipeDraft {
    /// Make the slug unique against slugs already in use by appending `-1`, `-2`, ...
    pub fn with_unique_slug<S: AsRef<str>>(mut self, existing: &[S]) -> Self {
        self.slug = crate::slug::generate_unique_slug(&self.slug, existing);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_recipe_uses_placeholder_title() {
        let recipe = ParsedRecipe::default();
        assert_eq!(recipe.title, "Imported Recipe");
        assert!(recipe.is_empty());
    }

    #[test]
    fn test_display_line() {
        assert_eq!(
            ParsedIngredientLine::new("rice", "1 cup", "jasmine preferred").display_line(),
            "1 cup rice (jasmine preferred)"
        );
        assert_eq!(ParsedIngredientLine::new("Salt", "", "").display_line(), "Salt");
    }

    #[test]
    fn test_to_markdown() {
        let recipe = ParsedRecipe {
            title: PLACEHOLDER_TITLE.to_string(),
            ingredients: vec![
                ParsedIngredientLine::new("flour", "2 cups", ""),
                ParsedIngredientLine::new("eggs", "3", "room temperature"),
            ],
            instructions: "Mix well.\n\nBake.".to_string(),
        };

        let markdown = recipe.to_markdown();
        assert!(markdown.starts_with("# Imported Recipe\n"));
        assert!(markdown.contains("- 2 cups flour\n"));
        assert!(markdown.contains("- 3 eggs (room temperature)\n"));
        assert!(markdown.contains("## Instructions\n\nMix well.\n\nBake.\n"));
    }

    #[test]
    fn test_json_field_names() {
        let line = ParsedIngredientLine::new("rice", "1 cup", "");
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["name"], "rice");
        assert_eq!(json["quantity"], "1 cup");
        assert_eq!(json["notes"], "");
    }
}
