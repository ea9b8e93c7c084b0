use std::sync::LazyLock;

use regex::Regex;

use crate::model::ParsedIngredientLine;

/// Leading number or simple fraction, optionally followed by a known unit.
/// The unit list is fixed; unicode fractions such as `½` are not recognized.
static QUANTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^([0-9]+/?[0-9]*\s*(?:cups?|tablespoons?|tbsp|teaspoons?|tsp|lbs?|pounds?|oz|ounces?|grams?|g|kg|ml|liters?|l|pinch|cloves?|bunches?|slices?)?)\s+(.+)$",
    )
    .expect("quantity pattern is valid")
});

/// `<name> (<notes>)` at the end of a line.
static TRAILING_NOTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s*\((.+)\)$").expect("notes pattern is valid"));

static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-•*]\s*").expect("bullet pattern is valid"));

/// Parse one ingredient line into quantity, name and notes.
///
/// Returns `None` when nothing is left after removing the bullet.
pub fn parse_ingredient_line(line: &str) -> Option<ParsedIngredientLine> {
    let line = BULLET.replace(line, "");
    if line.is_empty() {
        return None;
    }

    if let Some(caps) = QUANTITY.captures(&line) {
        let quantity = caps[1].trim();
        let rest = caps[2].trim();

        let (name, notes) = split_notes(rest).unwrap_or((rest, ""));
        return Some(ParsedIngredientLine::new(name, quantity, notes));
    }

    let parsed = match split_notes(&line) {
        Some((name, notes)) => ParsedIngredientLine::new(name, "", notes),
        None => ParsedIngredientLine::new(line.to_string(), "", ""),
    };
    Some(parsed)
}

fn split_notes(text: &str) -> Option<(&str, &str)> {
    let caps = TRAILING_NOTES.captures(text)?;
    let name = caps.get(1)?.as_str().trim();
    let notes = caps.get(2)?.as_str().trim();
    Some((name, notes))
}
