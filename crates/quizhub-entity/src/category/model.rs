//! Category entity model.

use quizhub_core::types::fold;
use serde::{Deserialize, Serialize};

/// A quiz category.
///
/// Uniqueness and reference counting compare the normalized form, so
/// `"Catégorie"` and `"categorie"` are the same category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Display name as entered by the creator.
    pub name: String,
}

impl Category {
    /// Creates a category, keeping the entered name as display form.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The normalized form used for uniqueness and reference counting.
    pub fn normalized_name(&self) -> String {
        fold(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_name_folds_accents_and_case() {
        let a = Category::new("Géographie");
        let b = Category::new("geographie");
        assert_eq!(a.normalized_name(), b.normalized_name());
        assert_eq!(a.name, "Géographie");
    }
}
