//! Diagnosis category taxonomy.
//!
//! Categories are kept in declaration order: classification is first-match
//! over that order and the last category doubles as the fallback for
//! supplemental (E/V) codes.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::ids::CategoryId;

/// Prefix of the per-category diagnosis counter keys.
pub const CATEGORY_COUNT_PREFIX: &str = "[diagnosis_count]_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisCategory {
    pub name: String,
    /// Inclusive lower bound.
    pub start: i64,
    /// Inclusive upper bound.
    pub end: i64,
}

impl DiagnosisCategory {
    pub fn new(name: impl Into<String>, start: i64, end: i64) -> Result<Self> {
        let name = name.into();
        if start > end {
            return Err(ModelError::InvalidRange { name, start, end });
        }
        Ok(Self { name, start, end })
    }

    pub fn contains(&self, value: f64) -> bool {
        self.start as f64 <= value && value <= self.end as f64
    }

    /// Feature key of this category's counter, e.g.
    /// `[diagnosis_count]_Diseases_of_the_Circulatory_System`.
    pub fn column_name(&self) -> String {
        format!("{CATEGORY_COUNT_PREFIX}{}", self.name.replace(' ', "_"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Taxonomy {
    categories: Vec<DiagnosisCategory>,
}

impl Taxonomy {
    pub fn new(categories: Vec<DiagnosisCategory>) -> Result<Self> {
        if categories.is_empty() {
            return Err(ModelError::EmptyTaxonomy);
        }
        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[DiagnosisCategory] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get(&self, id: CategoryId) -> Option<&DiagnosisCategory> {
        self.categories.get(id.index())
    }

    /// Categories with their ids, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (CategoryId, &DiagnosisCategory)> {
        self.categories
            .iter()
            .enumerate()
            .map(|(idx, category)| (CategoryId::new(idx), category))
    }

    /// The last declared category.
    pub fn fallback(&self) -> CategoryId {
        CategoryId::new(self.categories.len() - 1)
    }
}
