use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::{non_empty, required, required_non_empty, ValidationError};

pub type RecipeId = u64;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create payload: every field required, `ingredients` may be empty.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub ingredients: Option<Vec<String>>,
    #[serde(default)]
    pub instructions: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidRecipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
}

/// Update payload: only the fields that are present get written.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl RecipeInput {
    pub fn new<I, S>(name: impl Into<String>, ingredients: I, instructions: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: Some(name.into()),
            ingredients: Some(ingredients.into_iter().map(Into::into).collect()),
            instructions: Some(instructions.into()),
        }
    }

    pub fn validate(self) -> Result<ValidRecipe, ValidationError> {
        let name = required_non_empty(self.name, "name")?;
        let ingredients = required(self.ingredients, "ingredients")?;
        let instructions = required(self.instructions, "instructions")?;
        Ok(ValidRecipe { name, ingredients, instructions })
    }
}

impl ValidRecipe {
    pub fn into_recipe(self, id: RecipeId, now: DateTime<Utc>) -> Recipe {
        Recipe {
            id,
            name: self.name,
            ingredients: self.ingredients,
            instructions: self.instructions,
            created_at: now,
            updated_at: now,
        }
    }
}

impl RecipePatch {
    /// A present `name` must not be empty; absent fields are always fine.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            non_empty(name, "name")?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.ingredients.is_none() && self.instructions.is_none()
    }
}

/// Overwrite the fields present in `patch` and stamp `updated_at`, even when
/// nothing else changed. `id` and `created_at` are never touched.
pub fn merge(stored: Recipe, patch: RecipePatch, now: DateTime<Utc>) -> Recipe {
    Recipe {
        name: patch.name.unwrap_or(stored.name),
        ingredients: patch.ingredients.unwrap_or(stored.ingredients),
        instructions: patch.instructions.unwrap_or(stored.instructions),
        updated_at: now,
        ..stored
    }
}

/// Case-insensitive substring match on the name; an empty query matches all.
pub fn name_matches(recipe: &Recipe, query_lower: &str) -> bool {
    query_lower.is_empty() || recipe.name.to_lowercase().contains(query_lower)
}

pub fn parse_recipe_id(raw: &str) -> Result<RecipeId, ValidationError> {
    raw.trim().parse::<RecipeId>().map_err(|_| ValidationError::InvalidId {
        resource: "recipe",
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn pasta(now: DateTime<Utc>) -> Recipe {
        RecipeInput::new("Pasta", ["pasta", "water"], "boil")
            .validate()
            .unwrap()
            .into_recipe(1, now)
    }

    #[test]
    fn empty_patch_only_moves_updated_at() {
        let t0 = Utc::now();
        let stored = pasta(t0);
        let later = t0 + Duration::seconds(5);
        let merged = merge(stored.clone(), RecipePatch::default(), later);
        assert_eq!(merged.name, stored.name);
        assert_eq!(merged.ingredients, stored.ingredients);
        assert_eq!(merged.instructions, stored.instructions);
        assert_eq!(merged.created_at, t0);
        assert_eq!(merged.updated_at, later);
    }

    #[test]
    fn patch_overwrites_only_present_fields() {
        let t0 = Utc::now();
        let patch = RecipePatch { ingredients: Some(vec![]), ..Default::default() };
        let merged = merge(pasta(t0), patch, t0);
        assert_eq!(merged.name, "Pasta");
        assert!(merged.ingredients.is_empty());
        assert_eq!(merged.instructions, "boil");
        assert_eq!(merged.id, 1);
    }

    #[test]
    fn patch_deserializes_absent_and_null_as_unset() {
        let patch: RecipePatch = serde_json::from_str(r#"{"name":"Soup","instructions":null}"#).unwrap();
        assert_eq!(patch.name.as_deref(), Some("Soup"));
        assert!(patch.instructions.is_none());
        assert!(patch.ingredients.is_none());
        assert!(serde_json::from_str::<RecipePatch>("{}").unwrap().is_empty());
    }

    #[test]
    fn empty_name_in_patch_rejected_but_whitespace_kept() {
        let patch = RecipePatch { name: Some("".into()), ..Default::default() };
        assert_eq!(patch.validate(), Err(ValidationError::EmptyField { field: "name" }));
        let patch = RecipePatch { name: Some("  ".into()), ..Default::default() };
        assert_eq!(patch.validate(), Ok(()));
    }

    #[test]
    fn input_requires_all_fields() {
        let input: RecipeInput = serde_json::from_str(r#"{"name":"Pasta","instructions":"boil"}"#).unwrap();
        assert_eq!(input.validate(), Err(ValidationError::MissingField { field: "ingredients" }));
        assert!(serde_json::from_str::<RecipeInput>(r#"{"ingredients":[1,2]}"#).is_err());
    }

    #[test]
    fn name_matching_ignores_case() {
        let r = pasta(Utc::now());
        assert!(name_matches(&r, ""));
        assert!(name_matches(&r, "ast"));
        assert!(name_matches(&r, &"PASTA".to_lowercase()));
        assert!(!name_matches(&r, "soup"));
    }

    #[test]
    fn parse_recipe_id_rejects_non_integers() {
        assert_eq!(parse_recipe_id("12"), Ok(12));
        assert!(parse_recipe_id("-1").is_err());
        assert!(parse_recipe_id("abc").is_err());
    }
}
