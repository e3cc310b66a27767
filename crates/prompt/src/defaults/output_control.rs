//! Shipped output-control texts.
//!
//! These constrain the form of what the agent delivers: compliance level,
//! completeness, typing, accessibility, and responsiveness requirements.

use crate::component::OutputControl;
use crate::store::{Audience, PromptStore};

/// Build the shipped output-control store.
pub fn store() -> PromptStore<OutputControl> {
    let mut store = PromptStore::new();

    store.register(
        Audience::Frontend,
        OutputControl::StrictCompliance,
        STRICT_COMPLIANCE,
    );
    store.register(
        Audience::Frontend,
        OutputControl::CopyPasteReady,
        COPY_PASTE_READY,
    );
    store.register(Audience::Frontend, OutputControl::FullModule, FULL_MODULE);
    store.register(Audience::Frontend, OutputControl::Explainable, EXPLAINABLE);
    store.register(Audience::Frontend, OutputControl::WithTests, WITH_TESTS);
    store.register(Audience::Frontend, OutputControl::A11yEnforced, A11Y_ENFORCED);
    store.register(
        Audience::Frontend,
        OutputControl::TypeAnnotated,
        TYPE_ANNOTATED,
    );
    store.register(
        Audience::Frontend,
        OutputControl::PerformanceSafe,
        PERFORMANCE_SAFE,
    );
    store.register(
        Audience::Frontend,
        OutputControl::ExtractVariables,
        EXTRACT_VARIABLES,
    );
    store.register(
        Audience::Frontend,
        OutputControl::MobileResponsive,
        MOBILE_RESPONSIVE,
    );
    store.register(
        Audience::Frontend,
        OutputControl::DarkModeSupported,
        DARK_MODE_SUPPORTED,
    );
    store.register(
        Audience::Frontend,
        OutputControl::IntegrationReady,
        INTEGRATION_READY,
    );

    store
}

const STRICT_COMPLIANCE: &str = r#"
### Final Deliverables

* Must be **live-demo ready** with full real-world functionality
* Must showcase **working UI and backend-connected logic**
* Must use **axios** and **centralized state**
* Must support:

* Navigation
* User flows
* Error states
* Edge case handling
* Must enforce **strict JSON API communication** as per contract

Required: Schema-Driven Validation & Safety (NEW SECTION)
* All request payloads and responses must be bound to strict TypeScript types derived
* Optionally use runtime validators (e.g. Zod, Yup) to enforce shape before sending
* Add a validation layer to all axios calls that:
* Asserts required keys and types are present
* Rejects calls that deviate from schema
* Ensure request body structure and field types are 100% compliant with backend contract — even a missing or extra field must cause dev-time failure

---

### Absolutely Forbidden

* Using Pages Router
* Using `fetch`, GraphQL, or any HTTP library besides `axios`
* Using mocks, dummy data, or faked responses
* Inferring, guessing, or modifying backend behavior
* Using any state manager other than Zustand or Redux Toolkit
* Writing any `GET` or `POST` call with incorrect or partial JSON payloads
* Using `any` in TypeScript

---

**Failure to follow any point above — especially any deviation from expected API JSON schema — will result in project rejection.** This must be a **production-ready**, **error-free**, **pixel-perfect**, and **strictly compliant** frontend system.
Any mismatch between frontend and backend schemas (resulting in 422 or 500 errors) will lead to immediate rejection.
The final result must be error-free, pixel-perfect, and contract-compliant in every interaction.
"#;

const COPY_PASTE_READY: &str = r#"
Output must be **drop-in ready**: paste it into the codebase and it works without edits.
Include everything the code needs and assume nothing that is not stated.
"#;

const FULL_MODULE: &str = r#"
Deliver **complete modules** including imports, styles, and setup, not fragments.
Each file must be valid on its own and in its stated location in the project tree.
"#;

const EXPLAINABLE: &str = r#"
Include clear inline and block comments explaining structure, intent, and non-obvious decisions.
A reviewer must be able to follow the implementation without asking questions.
"#;

const WITH_TESTS: &str = r#"
Ship tests alongside the implementation, covering behavior, edge cases, and failure paths.
Tests must pass as delivered and run with the project's standard test runner.
"#;

const A11Y_ENFORCED: &str = r#"
The output must pass an accessibility audit: semantic markup, ARIA where needed, full keyboard support.
Treat WCAG conformance as a hard requirement, not a suggestion.
"#;

const TYPE_ANNOTATED: &str = r#"
Annotate all types explicitly (TypeScript interfaces or JSDoc) with no implicit `any`.
Public surfaces must be fully typed so misuse fails at compile time.
"#;

const PERFORMANCE_SAFE: &str = r#"
Avoid performance anti-patterns: unnecessary rerenders, unkeyed lists, unbounded effects, oversized bundles.
Memoize and split where measurement would justify it, and nowhere else.
"#;

const EXTRACT_VARIABLES: &str = r#"
Extract hardcoded values into named tokens, constants, or configuration.
Colors, spacing, durations, and endpoints must be defined once and referenced everywhere.
"#;

const MOBILE_RESPONSIVE: &str = r#"
The result must render correctly across mobile, tablet, and desktop breakpoints.
Layouts adapt fluidly; no horizontal scrolling or clipped content at any supported width.
"#;

const DARK_MODE_SUPPORTED: &str = r#"
Support dark mode alongside light mode from a single source of theme truth.
Every surface, text color, and border must resolve correctly in both schemes.
"#;

const INTEGRATION_READY: &str = r#"
Wire the result into the application's layout, routing, and state store rather than leaving it standalone.
Expose the integration points explicitly so the surrounding app consumes it without rework.
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_compliance_carries_forbidden_section() {
        let store = store();
        let text = store
            .get(Audience::Frontend, OutputControl::StrictCompliance)
            .unwrap();
        assert!(text.contains("Absolutely Forbidden"));
        assert!(text.contains("pixel-perfect"));
    }

    #[test]
    fn test_snippet_controls_have_no_shipped_text() {
        let store = store();
        assert!(store.get(Audience::Frontend, OutputControl::NoImports).is_err());
        assert!(store.get(Audience::Frontend, OutputControl::SnippetOnly).is_err());
        assert!(store.get(Audience::Frontend, OutputControl::NoComments).is_err());
    }
}
