//! Per-category prompt stores.
//!
//! A [`PromptStore`] owns two independent member-to-text mappings, one per
//! audience. The generic parameter pins each store to exactly one category,
//! so two categories can never share storage. [`CategoryStore`] erases the
//! parameter for registry use; the residual category check lives there.

use std::collections::HashMap;
use std::fmt;

use crate::component::{
    Category, CategoryMember, Component, Modality, OutputControl, Refinement, TaskContext,
    TechConstraint,
};
use crate::error::ComposeError;

/// The target audience a prompt text is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Audience {
    Frontend,
    Backend,
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Audience::Frontend => write!(f, "frontend"),
            Audience::Backend => write!(f, "backend"),
        }
    }
}

/// Holds the frontend and backend prompt texts for one component category.
///
/// The two mappings are independent: a missing entry for one audience is
/// never inferred from the other.
#[derive(Debug, Clone)]
pub struct PromptStore<C: CategoryMember> {
    frontend: HashMap<C, String>,
    backend: HashMap<C, String>,
}

impl<C: CategoryMember> PromptStore<C> {
    /// Create an empty store for category `C`.
    pub fn new() -> Self {
        Self {
            frontend: HashMap::new(),
            backend: HashMap::new(),
        }
    }

    /// The category this store is bound to.
    pub fn category(&self) -> Category {
        C::CATEGORY
    }

    /// Register `text` for `member` under `audience`.
    ///
    /// Inserting over an existing entry overwrites it (last write wins).
    pub fn register(&mut self, audience: Audience, member: C, text: impl Into<String>) {
        self.map_mut(audience).insert(member, text.into());
    }

    /// Fetch the text registered for `member` under `audience`.
    pub fn get(&self, audience: Audience, member: C) -> Result<&str, ComposeError> {
        self.map(audience)
            .get(&member)
            .map(String::as_str)
            .ok_or(ComposeError::MissingText {
                component: member.into(),
                audience,
            })
    }

    /// Remove the entry for `member` under `audience`; no-op when absent.
    pub fn remove(&mut self, audience: Audience, member: C) {
        self.map_mut(audience).remove(&member);
    }

    /// The full mapping for `audience`, for introspection.
    pub fn texts(&self, audience: Audience) -> &HashMap<C, String> {
        self.map(audience)
    }

    fn map(&self, audience: Audience) -> &HashMap<C, String> {
        match audience {
            Audience::Frontend => &self.frontend,
            Audience::Backend => &self.backend,
        }
    }

    fn map_mut(&mut self, audience: Audience) -> &mut HashMap<C, String> {
        match audience {
            Audience::Frontend => &mut self.frontend,
            Audience::Backend => &mut self.backend,
        }
    }
}

impl<C: CategoryMember> Default for PromptStore<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// A prompt store with its category parameter erased.
///
/// This is what the composer registry holds. Fetching a text through it
/// re-checks that the component belongs to the wrapped store's category.
#[derive(Debug, Clone)]
pub enum CategoryStore {
    TaskContext(PromptStore<TaskContext>),
    Modality(PromptStore<Modality>),
    TechConstraint(PromptStore<TechConstraint>),
    OutputControl(PromptStore<OutputControl>),
    Refinement(PromptStore<Refinement>),
}

impl CategoryStore {
    /// The category of the wrapped store.
    pub fn category(&self) -> Category {
        match self {
            CategoryStore::TaskContext(_) => Category::TaskContext,
            CategoryStore::Modality(_) => Category::Modality,
            CategoryStore::TechConstraint(_) => Category::TechConstraint,
            CategoryStore::OutputControl(_) => Category::OutputControl,
            CategoryStore::Refinement(_) => Category::Refinement,
        }
    }

    /// Fetch the text for `component` under `audience`.
    ///
    /// Fails with [`ComposeError::CategoryMismatch`] when the component does
    /// not belong to the wrapped store's category, even if the two categories
    /// share a member spelling.
    pub fn text(&self, audience: Audience, component: &Component) -> Result<&str, ComposeError> {
        match (self, component) {
            (CategoryStore::TaskContext(store), Component::TaskContext(m)) => {
                store.get(audience, *m)
            }
            (CategoryStore::Modality(store), Component::Modality(m)) => store.get(audience, *m),
            (CategoryStore::TechConstraint(store), Component::TechConstraint(m)) => {
                store.get(audience, *m)
            }
            (CategoryStore::OutputControl(store), Component::OutputControl(m)) => {
                store.get(audience, *m)
            }
            (CategoryStore::Refinement(store), Component::Refinement(m)) => store.get(audience, *m),
            _ => Err(ComposeError::CategoryMismatch {
                expected: self.category(),
                found: component.category(),
            }),
        }
    }
}

impl From<PromptStore<TaskContext>> for CategoryStore {
    fn from(store: PromptStore<TaskContext>) -> Self {
        CategoryStore::TaskContext(store)
    }
}

impl From<PromptStore<Modality>> for CategoryStore {
    fn from(store: PromptStore<Modality>) -> Self {
        CategoryStore::Modality(store)
    }
}

impl From<PromptStore<TechConstraint>> for CategoryStore {
    fn from(store: PromptStore<TechConstraint>) -> Self {
        CategoryStore::TechConstraint(store)
    }
}

impl From<PromptStore<OutputControl>> for CategoryStore {
    fn from(store: PromptStore<OutputControl>) -> Self {
        CategoryStore::OutputControl(store)
    }
}

impl From<PromptStore<Refinement>> for CategoryStore {
    fn from(store: PromptStore<Refinement>) -> Self {
        CategoryStore::Refinement(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get_exact_text() {
        let mut store = PromptStore::new();
        store.register(Audience::Frontend, Modality::Text, "A");

        assert_eq!(store.get(Audience::Frontend, Modality::Text).unwrap(), "A");
    }

    #[test]
    fn test_audiences_are_independent() {
        let mut store = PromptStore::new();
        store.register(Audience::Frontend, Modality::Image, "frontend only");

        let err = store.get(Audience::Backend, Modality::Image).unwrap_err();
        assert_eq!(
            err,
            ComposeError::MissingText {
                component: Modality::Image.into(),
                audience: Audience::Backend,
            }
        );
    }

    #[test]
    fn test_register_overwrites_last_write_wins() {
        let mut store = PromptStore::new();
        store.register(Audience::Frontend, Modality::Text, "first");
        store.register(Audience::Frontend, Modality::Text, "second");

        assert_eq!(
            store.get(Audience::Frontend, Modality::Text).unwrap(),
            "second"
        );
        assert_eq!(store.texts(Audience::Frontend).len(), 1);
    }

    #[test]
    fn test_register_same_text_twice_is_idempotent() {
        let mut once = PromptStore::new();
        once.register(Audience::Frontend, Modality::Text, "A");

        let mut twice = PromptStore::new();
        twice.register(Audience::Frontend, Modality::Text, "A");
        twice.register(Audience::Frontend, Modality::Text, "A");

        assert_eq!(
            once.texts(Audience::Frontend),
            twice.texts(Audience::Frontend)
        );
    }

    #[test]
    fn test_remove_is_noop_when_absent() {
        let mut store: PromptStore<Modality> = PromptStore::new();
        store.remove(Audience::Frontend, Modality::Sketch);

        store.register(Audience::Frontend, Modality::Sketch, "S");
        store.remove(Audience::Frontend, Modality::Sketch);
        assert!(store.get(Audience::Frontend, Modality::Sketch).is_err());
    }

    #[test]
    fn test_store_category() {
        let store: PromptStore<Refinement> = PromptStore::new();
        assert_eq!(store.category(), Category::Refinement);
    }

    #[test]
    fn test_category_store_rejects_foreign_component() {
        let mut store = PromptStore::new();
        store.register(Audience::Frontend, Modality::Text, "A");
        let wrapped = CategoryStore::from(store);

        let err = wrapped
            .text(Audience::Frontend, &TaskContext::UiGeneration.into())
            .unwrap_err();
        assert_eq!(
            err,
            ComposeError::CategoryMismatch {
                expected: Category::Modality,
                found: Category::TaskContext,
            }
        );
    }

    #[test]
    fn test_category_store_passes_through_matching_component() {
        let mut store = PromptStore::new();
        store.register(Audience::Frontend, OutputControl::CopyPasteReady, "ready");
        let wrapped = CategoryStore::from(store);

        let text = wrapped
            .text(Audience::Frontend, &OutputControl::CopyPasteReady.into())
            .unwrap();
        assert_eq!(text, "ready");
    }
}
