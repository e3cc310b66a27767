//! Shipped task-context texts.
//!
//! These set the role and high-level goal of a generation run. The
//! generation role text is registered for both audiences; the rest are
//! frontend-only, matching what the bundled profiles compose.

use crate::component::TaskContext;
use crate::store::{Audience, PromptStore};

/// Build the shipped task-context store.
pub fn store() -> PromptStore<TaskContext> {
    let mut store = PromptStore::new();

    store.register(Audience::Frontend, TaskContext::UiGeneration, UI_GENERATION);
    store.register(Audience::Backend, TaskContext::UiGeneration, UI_GENERATION);

    store.register(Audience::Frontend, TaskContext::UiThemeGen, UI_THEME_GEN);
    store.register(Audience::Frontend, TaskContext::UiA11yReview, UI_A11Y_REVIEW);
    store.register(
        Audience::Frontend,
        TaskContext::UiComponentLibGen,
        UI_COMPONENT_LIB_GEN,
    );
    store.register(Audience::Frontend, TaskContext::UiSpecToCode, UI_SPEC_TO_CODE);
    store.register(Audience::Frontend, TaskContext::UiTestGen, UI_TEST_GEN);
    store.register(Audience::Frontend, TaskContext::UiRefactor, UI_REFACTOR);
    store.register(Audience::Frontend, TaskContext::UiMigration, UI_MIGRATION);
    store.register(Audience::Frontend, TaskContext::UiDocGen, UI_DOC_GEN);
    store.register(
        Audience::Frontend,
        TaskContext::UiAutomationWidget,
        UI_AUTOMATION_WIDGET,
    );
    store.register(
        Audience::Frontend,
        TaskContext::UiErrorBoundaryGen,
        UI_ERROR_BOUNDARY_GEN,
    );
    store.register(Audience::Frontend, TaskContext::UiI18nGen, UI_I18N_GEN);
    store.register(Audience::Frontend, TaskContext::UiFormBuilder, UI_FORM_BUILDER);

    store
}

const UI_GENERATION: &str = r#"
You are a **senior frontend engineer** tasked with building a **fully functional, production-grade web application**.
The application must be **visually and behaviorally identical** and must **connect directly to the real backend**.
"#;

const UI_THEME_GEN: &str = r#"
You are a **senior design systems engineer** creating or extending **design tokens and themes** for an existing application.
Deliver a coherent, centrally defined theme that downstream components consume without hardcoded values.
"#;

const UI_A11Y_REVIEW: &str = r#"
You are a **senior accessibility engineer** auditing an existing interface for **ARIA and WCAG compliance**.
Report every violation you find and apply the fixes directly, keeping visual behavior unchanged.
"#;

const UI_COMPONENT_LIB_GEN: &str = r#"
You are a **senior frontend engineer** building a **reusable component library** intended to serve as a design system foundation.
Every component must be self-contained, documented, and consistent with the rest of the library.
"#;

const UI_SPEC_TO_CODE: &str = r#"
You are a **senior frontend engineer** converting a written specification into **working, production-grade code**.
The specification is the single source of truth; implement it exactly, with no invented scope.
"#;

const UI_TEST_GEN: &str = r#"
You are a **senior frontend engineer** writing a **comprehensive test suite** for existing UI components.
Cover rendering, interaction, and edge cases so regressions surface immediately.
"#;

const UI_REFACTOR: &str = r#"
You are a **senior frontend engineer** refactoring existing UI code for **performance, readability, and structure**.
Preserve observable behavior exactly while improving the implementation underneath.
"#;

const UI_MIGRATION: &str = r#"
You are a **senior frontend engineer** migrating an existing interface **from one framework to another**.
Reproduce the current behavior and appearance exactly in the target stack, leaving no legacy code behind.
"#;

const UI_DOC_GEN: &str = r#"
You are a **senior frontend engineer** producing **documentation and Storybook stories** for existing components.
Document every public prop, state, and usage pattern so the components are adoptable without reading their source.
"#;

const UI_AUTOMATION_WIDGET: &str = r#"
You are a **senior frontend engineer** building an **admin panel or automation dashboard** for operational use.
Wire every widget to real data sources and make every action immediately effective against the backend.
"#;

const UI_ERROR_BOUNDARY_GEN: &str = r#"
You are a **senior frontend engineer** scaffolding **robust error boundaries** for an application.
Every failure path must be caught, reported, and presented with a graceful fallback UI.
"#;

const UI_I18N_GEN: &str = r#"
You are a **senior frontend engineer** scaffolding **localization and internationalization support**.
Externalize every user-facing string and wire locale switching through the whole interface.
"#;

const UI_FORM_BUILDER: &str = r#"
You are a **senior frontend engineer** generating **forms from a schema or specification**.
Every field, validation rule, and submission behavior must come from the schema, not from guesswork.
"#;
