//! The prompt composer.
//!
//! Maps each category to its store and concatenates per-component texts
//! into one prompt string, in request order, with no added separators.

use std::collections::HashMap;

use crate::component::{Category, Component};
use crate::defaults;
use crate::error::ComposeError;
use crate::store::{Audience, CategoryStore};

/// Resolves components to stores and concatenates their texts.
///
/// The composer is a constructed value: build one, register the stores it
/// should know about, and pass it wherever composition happens. The shipped
/// configuration comes from [`PromptComposer::with_defaults`].
#[derive(Debug, Clone, Default)]
pub struct PromptComposer {
    stores: HashMap<Category, CategoryStore>,
}

impl PromptComposer {
    /// Create a composer with no registered stores.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a composer populated with the shipped text catalog.
    pub fn with_defaults() -> Self {
        let mut composer = Self::new();
        for store in defaults::default_stores() {
            composer.register_store(store);
        }
        composer
    }

    /// Bind a store under its own category.
    ///
    /// Registering a second store for the same category replaces the first.
    pub fn register_store(&mut self, store: CategoryStore) {
        self.stores.insert(store.category(), store);
    }

    /// Remove the binding for `category`, returning the store if one was
    /// bound. Subsequent compositions touching that category fail.
    pub fn unregister_store(&mut self, category: Category) -> Option<CategoryStore> {
        self.stores.remove(&category)
    }

    /// The store bound to `category`, if any.
    pub fn store(&self, category: Category) -> Option<&CategoryStore> {
        self.stores.get(&category)
    }

    /// Compose the texts of `components` for `audience`, in input order.
    ///
    /// All-or-nothing: the first unresolvable component aborts the whole
    /// composition and no partial string is returned. An empty component
    /// sequence composes to the empty string.
    pub fn compose(
        &self,
        audience: Audience,
        components: &[Component],
    ) -> Result<String, ComposeError> {
        let mut prompt = String::new();

        for component in components {
            let category = component.category();
            let store = self
                .stores
                .get(&category)
                .ok_or(ComposeError::UnregisteredCategory(category))?;
            prompt.push_str(store.text(audience, component)?);
        }

        Ok(prompt)
    }
}
