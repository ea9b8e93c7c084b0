//! Matching parsed ingredient lines to stored ingredient records.

use std::collections::HashMap;

use log::info;

use crate::error::ImportError;
use crate::model::{Ingredient, ParsedIngredientLine, RecipeIngredient};

/// Store of known ingredients, matched by case-insensitive name.
pub trait IngredientCatalog {
    fn find_by_name(&self, name: &str) -> Option<Ingredient>;
    fn create(&mut self, name: &str, category: &str) -> Result<Ingredient, ImportError>;
}

/// Catalog kept in memory, keyed by lower-cased name.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalog {
    by_name: HashMap<String, Ingredient>,
    next_id: u64,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the catalog with existing ingredient names, all in `category`.
    ///
    /// Names that differ only in case from one already seeded are skipped.
    pub fn from_names<I, S>(names: I, category: &str) -> Result<Self, ImportError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut catalog = Self::new();
        for name in names {
            let name = name.as_ref();
            if catalog.find_by_name(name).is_none() {
                catalog.create(name, category)?;
            }
        }
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// All ingredients ordered by id.
    pub fn ingredients(&self) -> Vec<&Ingredient> {
        let mut all: Vec<_> = self.by_name.values().collect();
        all.sort_by_key(|ingredient| ingredient.id);
        all
    }
}

impl IngredientCatalog for InMemoryCatalog {
    fn find_by_name(&self, name: &str) -> Option<Ingredient> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    fn create(&mut self, name: &str, category: &str) -> Result<Ingredient, ImportError> {
        if name.trim().is_empty() {
            return Err(ImportError::CatalogError(
                "Ingredient name cannot be empty".to_string(),
            ));
        }

        let key = name.to_lowercase();
        if self.by_name.contains_key(&key) {
            return Err(ImportError::DuplicateIngredient(name.to_string()));
        }

        self.next_id += 1;
        let ingredient = Ingredient {
            id: self.next_id,
            name: name.to_string(),
            category: category.to_string(),
        };
        self.by_name.insert(key, ingredient.clone());
        Ok(ingredient)
    }
}

/// Pair every parsed line with a catalog record, creating missing ingredients
/// in `default_category`. Output order follows `lines`.
pub fn resolve_ingredients<C>(
    lines: &[ParsedIngredientLine],
    catalog: &mut C,
    default_category: &str,
) -> Result<Vec<RecipeIngredient>, ImportError>
where
    C: IngredientCatalog + ?Sized,
{
    let mut resolved = Vec::with_capacity(lines.len());

    for line in lines {
        let ingredient = match catalog.find_by_name(&line.name) {
            Some(existing) => existing,
            None => {
                let created = catalog.create(&line.name, default_category)?;
                info!(
                    "Created ingredient '{}' (id {}) in category '{}'",
                    created.name, created.id, created.category
                );
                created
            }
        };

        resolved.push(RecipeIngredient {
            ingredient,
            quantity: line.quantity.clone(),
            notes: line.notes.clone(),
        });
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_is_case_insensitive() {
        let catalog = InMemoryCatalog::from_names(["Wild Garlic"], "herb").unwrap();
        let found = catalog.find_by_name("wild garlic").unwrap();
        assert_eq!(found.name, "Wild Garlic");
        assert_eq!(found.category, "herb");
        assert!(catalog.find_by_name("garlic").is_none());
    }

    #[test]
    fn test_ids_increase_from_one() {
        let mut catalog = InMemoryCatalog::new();
        assert_eq!(catalog.create("Sorrel", "other").unwrap().id, 1);
        assert_eq!(catalog.create("Nettles", "other").unwrap().id, 2);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_duplicate_create_is_rejected() {
        let mut catalog = InMemoryCatalog::new();
        catalog.create("Morels", "mushroom").unwrap();
        let err = catalog.create("MORELS", "mushroom").unwrap_err();
        assert!(matches!(err, ImportError::DuplicateIngredient(name) if name == "MORELS"));
    }

    #[test]
    fn test_seeding_skips_case_duplicates() {
        let catalog = InMemoryCatalog::from_names(["Salt", "salt", "Pepper"], "pantry").unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find_by_name("SALT").unwrap().name, "Salt");
        assert_eq!(catalog.find_by_name("pepper").unwrap().id, 2);
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let mut catalog = InMemoryCatalog::new();
        assert!(matches!(
            catalog.create("  ", "other"),
            Err(ImportError::CatalogError(_))
        ));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_resolve_reuses_and_creates() {
        let mut catalog = InMemoryCatalog::from_names(["Flour"], "baking").unwrap();
        let lines = vec![
            ParsedIngredientLine::new("flour", "2 cups", ""),
            ParsedIngredientLine::new("Ramps", "1 bunches", "cleaned"),
        ];

        let resolved = resolve_ingredients(&lines, &mut catalog, "other").unwrap();

        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].ingredient.id, 1);
        assert_eq!(resolved[0].ingredient.name, "Flour");
        assert_eq!(resolved[0].quantity, "2 cups");
        assert_eq!(resolved[1].ingredient.name, "Ramps");
        assert_eq!(resolved[1].ingredient.category, "other");
        assert_eq!(resolved[1].notes, "cleaned");
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_resolve_duplicate_lines_share_one_record() {
        let mut catalog = InMemoryCatalog::new();
        let lines = vec![
            ParsedIngredientLine::new("Salt", "1 pinch", ""),
            ParsedIngredientLine::new("salt", "", "to taste"),
        ];

        let resolved = resolve_ingredients(&lines, &mut catalog, "other").unwrap();

        assert_eq!(resolved[0].ingredient, resolved[1].ingredient);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_ingredients_sorted_by_id() {
        let catalog = InMemoryCatalog::from_names(["b", "a", "c"], "other").unwrap();
        let names: Vec<_> = catalog.ingredients().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }
}
