//! Quick import of pasted recipe text
//!
//! Shows the two layers of the API:
//! 1. `parse_recipe_text`: raw split into ingredients and instructions
//! 2. `import_with_catalog`: titled draft with ingredients matched to a catalog

use forage_import::{import_with_catalog, parse_recipe_text, ImportConfig, InMemoryCatalog};

const PASTED: &str = r#"
Ingredients
- 2 cups elderberries (stems removed)
- 1 cup sugar
- 1 lemon
- 4 cups water

Directions
Simmer the berries in the water for 20 minutes. Strain through muslin.
Add sugar and lemon juice, then boil for 5 minutes.
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Parse ===");
    let parsed = parse_recipe_text(PASTED);
    print!("{}", parsed.to_markdown());

    println!("\n=== Draft with catalog ===");
    let config = ImportConfig::default();
    let mut catalog = InMemoryCatalog::from_names(["Sugar", "Water"], "pantry")?;
    let (draft, ingredients) = import_with_catalog(
        PASTED,
        "Elderberry Syrup",
        None,
        &mut catalog,
        &config,
    )?;

    println!("{} ({})", draft.title, draft.slug);
    println!("{}", draft.description);
    for ingredient in &ingredients {
        println!(
            "  #{} {} [{}] {}",
            ingredient.ingredient.id,
            ingredient.ingredient.name,
            ingredient.ingredient.category,
            ingredient.quantity
        );
    }

    Ok(())
}
