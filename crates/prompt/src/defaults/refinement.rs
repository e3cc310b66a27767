//! Shipped refinement texts.
//!
//! Post-generation improvement directives. Every refinement member has a
//! frontend text; these are the building blocks of the audit and
//! optimization profiles.

use crate::component::Refinement;
use crate::store::{Audience, PromptStore};

/// Build the shipped refinement store.
pub fn store() -> PromptStore<Refinement> {
    let mut store = PromptStore::new();

    store.register(
        Audience::Frontend,
        Refinement::FixVisualLayout,
        FIX_VISUAL_LAYOUT,
    );
    store.register(Audience::Frontend, Refinement::FixA11y, FIX_A11Y);
    store.register(
        Audience::Frontend,
        Refinement::AddResponsiveness,
        ADD_RESPONSIVENESS,
    );
    store.register(
        Audience::Frontend,
        Refinement::FixInteractivity,
        FIX_INTERACTIVITY,
    );
    store.register(
        Audience::Frontend,
        Refinement::ExtractConstants,
        EXTRACT_CONSTANTS,
    );
    store.register(Audience::Frontend, Refinement::AddComments, ADD_COMMENTS);
    store.register(
        Audience::Frontend,
        Refinement::RemoveDuplication,
        REMOVE_DUPLICATION,
    );
    store.register(
        Audience::Frontend,
        Refinement::ApplyBestPractices,
        APPLY_BEST_PRACTICES,
    );
    store.register(
        Audience::Frontend,
        Refinement::SplitComponent,
        SPLIT_COMPONENT,
    );
    store.register(Audience::Frontend, Refinement::AddTypes, ADD_TYPES);
    store.register(
        Audience::Frontend,
        Refinement::UpgradeSemantics,
        UPGRADE_SEMANTICS,
    );
    store.register(
        Audience::Frontend,
        Refinement::ImproveContrast,
        IMPROVE_CONTRAST,
    );
    store.register(
        Audience::Frontend,
        Refinement::FixStateManagement,
        FIX_STATE_MANAGEMENT,
    );
    store.register(
        Audience::Frontend,
        Refinement::ReduceBundleSize,
        REDUCE_BUNDLE_SIZE,
    );
    store.register(
        Audience::Frontend,
        Refinement::AddLoadingStates,
        ADD_LOADING_STATES,
    );
    store.register(
        Audience::Frontend,
        Refinement::EnforceNamingConventions,
        ENFORCE_NAMING_CONVENTIONS,
    );

    store
}

const FIX_VISUAL_LAYOUT: &str = r#"
Identify and fix visual layout issues including spacing problems, alignment issues, and element positioning.
Correct CSS layout bugs, improper margins/padding, and visual inconsistencies in component arrangement.
Ensure proper visual hierarchy and clean alignment throughout the interface.
"#;

const FIX_A11Y: &str = r#"
Add comprehensive accessibility features including ARIA labels, semantic HTML tags, and screen reader support.
Implement keyboard navigation, focus management, and accessibility best practices for inclusive design.
Ensure components meet WCAG guidelines and are usable by people with disabilities.
"#;

const ADD_RESPONSIVENESS: &str = r#"
Implement responsive design patterns to ensure proper rendering across mobile, tablet, and desktop devices.
Add appropriate breakpoints, flexible layouts, and adaptive styling for different screen sizes.
Optimize user experience for touch interfaces and varying viewport dimensions.
"#;

const FIX_INTERACTIVITY: &str = r#"
Fix interactive element functionality including button actions, form inputs, and user interaction handlers.
Ensure proper event handling, state updates, and user feedback for all interactive components.
Correct broken click handlers, form submissions, and interactive behavior issues.
"#;

const EXTRACT_CONSTANTS: &str = r#"
Identify hardcoded values and extract them into named constants or configuration objects.
Replace magic numbers, string literals, and repeated values with meaningful constant definitions.
Improve code maintainability by centralizing configurable values and eliminating duplication.
"#;

const ADD_COMMENTS: &str = r#"
Add helpful developer comments that explain complex logic, design decisions, and implementation details.
Include documentation for component APIs, usage patterns, and important behavioral considerations.
Make the code more maintainable through clear, concise explanatory comments.
"#;

const REMOVE_DUPLICATION: &str = r#"
Identify and eliminate code duplication by extracting common functionality into reusable components or utilities.
Refactor repeated patterns into shared functions, hooks, or component abstractions.
Improve code maintainability by following the DRY (Don't Repeat Yourself) principle.
"#;

const APPLY_BEST_PRACTICES: &str = r#"
Apply modern UI development best practices including proper component architecture and clean code principles.
Implement industry-standard patterns for state management, component composition, and code organization.
Ensure code follows established conventions and maintainability guidelines.
"#;

const SPLIT_COMPONENT: &str = r#"
Break down large, monolithic components into smaller, focused, and reusable component pieces.
Separate concerns by extracting logical units into individual components with clear responsibilities.
Improve component maintainability and reusability through proper decomposition.
"#;

const ADD_TYPES: &str = r#"
Add comprehensive type annotations using available type checking systems for the target platform.
Define interfaces, type definitions, and type constraints for better code safety and developer experience.
Ensure all component props, function parameters, and return values have explicit type information.
"#;

const UPGRADE_SEMANTICS: &str = r#"
Replace generic HTML elements with proper semantic HTML5 tags such as section, nav, article, and header.
Improve document structure and accessibility by using meaningful semantic elements.
Enhance SEO and screen reader compatibility through proper semantic markup.
"#;

const IMPROVE_CONTRAST: &str = r#"
Analyze and improve color contrast ratios to meet accessibility standards and enhance visual readability.
Adjust color choices, text styling, and background combinations for better visual contrast.
Ensure color schemes meet WCAG contrast requirements for all user interface elements.
"#;

const FIX_STATE_MANAGEMENT: &str = r#"
Correct issues with component state management including improper hook usage, state mutation, and prop handling.
Fix state update patterns, event handling logic, and component lifecycle management problems.
Ensure proper state flow and prevent common state-related bugs and anti-patterns.
"#;

const REDUCE_BUNDLE_SIZE: &str = r#"
Optimize code for smaller bundle sizes through tree shaking, lazy loading, and efficient import patterns.
Eliminate unnecessary dependencies, unused code, and optimize component loading strategies.
Implement code splitting and dynamic imports to reduce initial bundle size and improve performance.
"#;

const ADD_LOADING_STATES: &str = r#"
Implement loading indicators and states for asynchronous operations and data fetching workflows.
Add proper loading spinners, skeleton screens, and progress indicators for better user experience.
Handle loading, error, and success states appropriately in async component interactions.
"#;

const ENFORCE_NAMING_CONVENTIONS: &str = r#"
Standardize naming conventions for components, props, functions, and CSS classes throughout the codebase.
Apply consistent naming patterns that follow industry standards and team conventions.
Improve code readability and maintainability through clear, descriptive, and consistent naming.
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_refinement_member_has_frontend_text() {
        let store = store();
        assert_eq!(store.texts(Audience::Frontend).len(), 16);
    }

    #[test]
    fn test_no_backend_refinement_texts_shipped() {
        let store = store();
        assert!(store.texts(Audience::Backend).is_empty());
    }
}
