//! Composition error types.
//!
//! Errors here are structured so callers can match on what went wrong;
//! they convert into [`uigen_core::AppError`] at the CLI boundary.

use thiserror::Error;

use uigen_core::AppError;

use crate::component::{Category, Component};
use crate::store::Audience;

/// Errors raised while resolving components to prompt texts.
///
/// Composition is all-or-nothing: the first error aborts the whole request
/// and no partial prompt string is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComposeError {
    /// A component was presented to a store bound to a different category.
    #[error("category mismatch: store is bound to {expected}, component belongs to {found}")]
    CategoryMismatch { expected: Category, found: Category },

    /// No store is registered for the component's category.
    #[error("no store registered for category {0}")]
    UnregisteredCategory(Category),

    /// The component's category is registered but no text exists for the
    /// requested audience.
    #[error("no {audience} text registered for {component}")]
    MissingText {
        component: Component,
        audience: Audience,
    },
}

impl From<ComposeError> for AppError {
    fn from(err: ComposeError) -> Self {
        AppError::Compose(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Modality;

    #[test]
    fn test_unregistered_category_names_category() {
        let err = ComposeError::UnregisteredCategory(Category::Refinement);
        assert_eq!(err.to_string(), "no store registered for category Refinement");
    }

    #[test]
    fn test_missing_text_names_component_and_audience() {
        let err = ComposeError::MissingText {
            component: Modality::Sketch.into(),
            audience: Audience::Backend,
        };
        assert_eq!(
            err.to_string(),
            "no backend text registered for Modality::Sketch"
        );
    }

    #[test]
    fn test_conversion_to_app_error() {
        let err = ComposeError::CategoryMismatch {
            expected: Category::Modality,
            found: Category::TaskContext,
        };
        let app: AppError = err.into();
        assert!(app.to_string().contains("bound to Modality"));
    }
}
