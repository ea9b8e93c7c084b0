//! Heuristic splitter for pasted recipe text.
//!
//! The importer never fails: any input, including an empty string, yields a
//! [`ParsedRecipe`]. Ambiguous text degrades to fewer ingredients or empty
//! instructions instead of an error.

mod ingredient;
mod sections;

use log::{debug, trace, warn};

use crate::model::ParsedRecipe;

pub use self::ingredient::parse_ingredient_line;
pub use self::sections::{
    detect_sections, is_ingredients_header, is_instructions_header, is_sentence_like,
    normalize_lines, Sections,
};

/// Parse free text into ingredient lines and an instructions block.
///
/// # Example
/// ```
/// use forage_import::parse_recipe_text;
///
/// let recipe = parse_recipe_text("Ingredients\n2 cups flour\n\nInstructions\nMix well.");
/// assert_eq!(recipe.ingredients[0].name, "flour");
/// assert_eq!(recipe.ingredients[0].quantity, "2 cups");
/// assert_eq!(recipe.instructions, "Mix well.");
/// ```
pub fn parse_recipe_text(text: &str) -> ParsedRecipe {
    let lines = normalize_lines(text);
    let sections = detect_sections(&lines);
    debug!(
        "Detected sections in {} lines: ingredients {}..{}, instructions from {}",
        lines.len(),
        sections.ingredients_start,
        sections.ingredients_end,
        sections.instructions_start
    );

    let ingredients: Vec<_> = lines
        .get(sections.ingredients_start..sections.ingredients_end)
        .unwrap_or_default()
        .iter()
        .filter_map(|line| {
            let parsed = parse_ingredient_line(line);
            trace!("{:?} -> {:?}", line, parsed);
            parsed
        })
        .collect();

    let instructions = lines
        .get(sections.instructions_start..)
        .unwrap_or_default()
        .join("\n\n");

    if !lines.is_empty() && ingredients.is_empty() {
        warn!("No ingredient lines found in {} lines of input", lines.len());
    }

    ParsedRecipe {
        ingredients,
        instructions,
        ..Default::default()
    }
}
