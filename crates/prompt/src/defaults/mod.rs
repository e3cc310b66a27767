//! Shipped prompt text catalog.
//!
//! One submodule per category builds the store consumed by the bundled MCP
//! server profiles. Members no shipped profile references stay unregistered;
//! composing one of those surfaces the missing-text error.

pub mod modality;
pub mod output_control;
pub mod refinement;
pub mod task_context;
pub mod tech_constraint;

use crate::store::CategoryStore;

/// Build the five shipped stores, one per category.
pub fn default_stores() -> Vec<CategoryStore> {
    vec![
        task_context::store().into(),
        modality::store().into(),
        tech_constraint::store().into(),
        output_control::store().into(),
        refinement::store().into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Category;

    #[test]
    fn test_default_stores_cover_every_category_once() {
        let stores = default_stores();
        let mut categories: Vec<Category> = stores.iter().map(|s| s.category()).collect();
        categories.sort_by_key(|c| format!("{}", c));
        categories.dedup();
        assert_eq!(categories.len(), 5);
    }
}
