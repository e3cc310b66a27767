//! Ready-made server profiles.
//!
//! Two servers ship with the tool: a minimal default server exposing the
//! single frontend generation prompt, and the builtin catalog covering
//! the full range of Next.js generation workflows. Both compose against
//! the shipped text catalog.

use uigen_prompt::{
    Modality, OutputControl, PromptComposer, Refinement, TaskContext, TechConstraint,
};

use crate::error::FactoryError;
use crate::factory::ServerFactory;
use crate::server::PromptServer;

/// Selects which shipped server to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Single-prompt server for the standard image-plus-contract workflow.
    Default,
    /// Full catalog of Next.js generation prompts.
    Builtin,
}

impl Profile {
    /// Build the server for this profile against the shipped text catalog.
    pub fn server(self) -> Result<PromptServer, FactoryError> {
        let composer = PromptComposer::with_defaults();
        match self {
            Profile::Default => default_server(&composer),
            Profile::Builtin => builtin_server(&composer),
        }
    }
}

/// Build the default server: one prompt for generating a UI from reference
/// images and an API contract.
pub fn default_server(composer: &PromptComposer) -> Result<PromptServer, FactoryError> {
    ServerFactory::new("ui-gen")
        .add_frontend_generation_prompt(
            "frontend_generation",
            "Returns setup instructions for building a UI from images and api_contract",
            vec![
                TaskContext::UiGeneration.into(),
                Modality::Image.into(),
                Modality::Text.into(),
                TechConstraint::Nextjs.into(),
                OutputControl::StrictCompliance.into(),
            ],
        )
        .build(composer)
}

/// Build the builtin server: the full catalog of generation prompts.
pub fn builtin_server(composer: &PromptComposer) -> Result<PromptServer, FactoryError> {
    ServerFactory::new("ui-gen-builtin")
        .add_frontend_generation_prompt(
            "screenshot_text_to_compiled_ui",
            "Generate strictly compiled Next.js components taking layout from screenshots \
             and functionality from text descriptions",
            vec![
                TaskContext::UiGeneration.into(),
                Modality::Image.into(),
                Modality::Text.into(),
                TechConstraint::Nextjs.into(),
                TechConstraint::React.into(),
                TechConstraint::Tailwind.into(),
                TechConstraint::Typescript.into(),
                OutputControl::StrictCompliance.into(),
                OutputControl::CopyPasteReady.into(),
                OutputControl::TypeAnnotated.into(),
                OutputControl::FullModule.into(),
            ],
        )
        .add_frontend_generation_prompt(
            "nextjs_image_to_component",
            "Generate Next.js React components from UI images/screenshots with Tailwind \
             CSS styling",
            vec![
                TaskContext::UiGeneration.into(),
                Modality::Image.into(),
                TechConstraint::Nextjs.into(),
                TechConstraint::React.into(),
                TechConstraint::Tailwind.into(),
                TechConstraint::Typescript.into(),
                OutputControl::CopyPasteReady.into(),
                OutputControl::TypeAnnotated.into(),
                OutputControl::MobileResponsive.into(),
            ],
        )
        .add_frontend_generation_prompt(
            "nextjs_sketch_to_component",
            "Convert hand-drawn sketches and wireframes to Next.js components",
            vec![
                TaskContext::UiGeneration.into(),
                Modality::Sketch.into(),
                TechConstraint::Nextjs.into(),
                TechConstraint::React.into(),
                TechConstraint::Tailwind.into(),
                TechConstraint::Typescript.into(),
                OutputControl::CopyPasteReady.into(),
                OutputControl::MobileResponsive.into(),
            ],
        )
        .add_frontend_generation_prompt(
            "nextjs_spec_to_component",
            "Build Next.js components from markdown specifications and requirements",
            vec![
                TaskContext::UiSpecToCode.into(),
                Modality::MarkdownSpec.into(),
                TechConstraint::Nextjs.into(),
                TechConstraint::React.into(),
                TechConstraint::Tailwind.into(),
                TechConstraint::Typescript.into(),
                OutputControl::FullModule.into(),
                OutputControl::WithTests.into(),
                OutputControl::TypeAnnotated.into(),
            ],
        )
        .add_frontend_generation_prompt(
            "nextjs_component_library",
            "Generate reusable Next.js component libraries with Storybook integration",
            vec![
                TaskContext::UiComponentLibGen.into(),
                Modality::Text.into(),
                TechConstraint::Nextjs.into(),
                TechConstraint::React.into(),
                TechConstraint::Tailwind.into(),
                TechConstraint::Typescript.into(),
                TechConstraint::Storybook.into(),
                OutputControl::FullModule.into(),
                OutputControl::WithTests.into(),
                OutputControl::TypeAnnotated.into(),
                OutputControl::A11yEnforced.into(),
            ],
        )
        .add_frontend_generation_prompt(
            "nextjs_form_builder",
            "Generate dynamic forms from JSON schemas with validation and Next.js \
             integration",
            vec![
                TaskContext::UiFormBuilder.into(),
                Modality::JsonSchema.into(),
                TechConstraint::Nextjs.into(),
                TechConstraint::React.into(),
                TechConstraint::Tailwind.into(),
                TechConstraint::Typescript.into(),
                OutputControl::CopyPasteReady.into(),
                OutputControl::TypeAnnotated.into(),
                OutputControl::A11yEnforced.into(),
            ],
        )
        .add_frontend_generation_prompt(
            "nextjs_accessibility_audit",
            "Audit and improve accessibility of Next.js components for WCAG compliance",
            vec![
                TaskContext::UiA11yReview.into(),
                Modality::Html.into(),
                TechConstraint::Nextjs.into(),
                TechConstraint::React.into(),
                TechConstraint::Tailwind.into(),
                OutputControl::A11yEnforced.into(),
                OutputControl::Explainable.into(),
                Refinement::FixA11y.into(),
            ],
        )
        .add_frontend_generation_prompt(
            "nextjs_performance_optimizer",
            "Optimize Next.js components for performance and bundle size",
            vec![
                TaskContext::UiRefactor.into(),
                Modality::Text.into(),
                TechConstraint::Nextjs.into(),
                TechConstraint::React.into(),
                TechConstraint::Typescript.into(),
                OutputControl::PerformanceSafe.into(),
                OutputControl::TypeAnnotated.into(),
                Refinement::ReduceBundleSize.into(),
                Refinement::ApplyBestPractices.into(),
            ],
        )
        .add_frontend_generation_prompt(
            "nextjs_responsive_enhancer",
            "Add responsive design capabilities to existing Next.js components",
            vec![
                TaskContext::UiGeneration.into(),
                Modality::Html.into(),
                TechConstraint::Nextjs.into(),
                TechConstraint::Tailwind.into(),
                OutputControl::MobileResponsive.into(),
                OutputControl::CopyPasteReady.into(),
                Refinement::AddResponsiveness.into(),
                Refinement::FixVisualLayout.into(),
            ],
        )
        .add_frontend_generation_prompt(
            "nextjs_theme_generator",
            "Generate comprehensive design systems and themes for Next.js applications",
            vec![
                TaskContext::UiThemeGen.into(),
                Modality::Text.into(),
                TechConstraint::Nextjs.into(),
                TechConstraint::Tailwind.into(),
                TechConstraint::Typescript.into(),
                OutputControl::FullModule.into(),
                OutputControl::DarkModeSupported.into(),
                OutputControl::ExtractVariables.into(),
            ],
        )
        .add_frontend_generation_prompt(
            "nextjs_test_generator",
            "Generate comprehensive test suites for Next.js components",
            vec![
                TaskContext::UiTestGen.into(),
                Modality::Text.into(),
                TechConstraint::Nextjs.into(),
                TechConstraint::React.into(),
                TechConstraint::Typescript.into(),
                OutputControl::WithTests.into(),
                OutputControl::TypeAnnotated.into(),
                OutputControl::A11yEnforced.into(),
            ],
        )
        .add_frontend_generation_prompt(
            "nextjs_error_boundary",
            "Generate robust error boundaries for Next.js applications",
            vec![
                TaskContext::UiErrorBoundaryGen.into(),
                Modality::Text.into(),
                TechConstraint::Nextjs.into(),
                TechConstraint::React.into(),
                TechConstraint::Typescript.into(),
                OutputControl::FullModule.into(),
                OutputControl::TypeAnnotated.into(),
                OutputControl::Explainable.into(),
            ],
        )
        .add_frontend_generation_prompt(
            "nextjs_i18n_setup",
            "Set up internationalization for Next.js applications",
            vec![
                TaskContext::UiI18nGen.into(),
                Modality::Text.into(),
                TechConstraint::Nextjs.into(),
                TechConstraint::React.into(),
                TechConstraint::Typescript.into(),
                OutputControl::FullModule.into(),
                OutputControl::IntegrationReady.into(),
                OutputControl::TypeAnnotated.into(),
            ],
        )
        .add_frontend_generation_prompt(
            "nextjs_migration_assistant",
            "Migrate UI components to Next.js from other frameworks",
            vec![
                TaskContext::UiMigration.into(),
                Modality::Html.into(),
                TechConstraint::Nextjs.into(),
                TechConstraint::React.into(),
                TechConstraint::Tailwind.into(),
                TechConstraint::Typescript.into(),
                OutputControl::CopyPasteReady.into(),
                OutputControl::TypeAnnotated.into(),
            ],
        )
        .add_frontend_generation_prompt(
            "nextjs_doc_generator",
            "Generate comprehensive documentation and Storybook stories for Next.js \
             components",
            vec![
                TaskContext::UiDocGen.into(),
                Modality::Text.into(),
                TechConstraint::Nextjs.into(),
                TechConstraint::Storybook.into(),
                TechConstraint::Typescript.into(),
                OutputControl::FullModule.into(),
                OutputControl::Explainable.into(),
                OutputControl::TypeAnnotated.into(),
            ],
        )
        .add_frontend_generation_prompt(
            "nextjs_automation_dashboard",
            "Generate admin panels and automation dashboards with Next.js",
            vec![
                TaskContext::UiAutomationWidget.into(),
                Modality::JsonSchema.into(),
                TechConstraint::Nextjs.into(),
                TechConstraint::React.into(),
                TechConstraint::Tailwind.into(),
                TechConstraint::Typescript.into(),
                OutputControl::FullModule.into(),
                OutputControl::IntegrationReady.into(),
                OutputControl::TypeAnnotated.into(),
            ],
        )
        .build(composer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_server_exposes_the_generation_prompt() {
        let composer = PromptComposer::with_defaults();
        let server = default_server(&composer).unwrap();

        assert_eq!(server.len(), 1);
        let served = server.get("frontend_generation").unwrap();
        assert!(served.text.contains("senior frontend engineer"));
        assert!(served.text.contains("Pixel-perfect reference images"));
        assert!(served.text.contains("App Router"));
        assert!(served.text.contains("Final Deliverables"));
    }

    #[test]
    fn test_builtin_server_exposes_the_full_catalog() {
        let composer = PromptComposer::with_defaults();
        let server = builtin_server(&composer).unwrap();

        assert_eq!(server.len(), 16);
        let names = server.prompt_names();
        assert_eq!(names[0], "screenshot_text_to_compiled_ui");
        assert!(names.contains(&"nextjs_accessibility_audit"));
        assert!(names.contains(&"nextjs_automation_dashboard"));
    }

    #[test]
    fn test_builtin_prompt_names_are_unique() {
        let composer = PromptComposer::with_defaults();
        let server = builtin_server(&composer).unwrap();

        let names = server.prompt_names();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_every_builtin_prompt_has_text_and_description() {
        let composer = PromptComposer::with_defaults();
        let server = builtin_server(&composer).unwrap();

        for name in server.prompt_names() {
            let served = server.get(name).unwrap();
            assert!(!served.text.is_empty(), "empty text for {}", name);
            assert!(!served.description.is_empty(), "empty description for {}", name);
        }
    }

    #[test]
    fn test_profiles_dispatch_to_their_servers() {
        assert_eq!(Profile::Default.server().unwrap().len(), 1);
        assert_eq!(Profile::Builtin.server().unwrap().len(), 16);
    }

    #[test]
    fn test_accessibility_audit_includes_refinement_text() {
        let composer = PromptComposer::with_defaults();
        let server = builtin_server(&composer).unwrap();

        let served = server.get("nextjs_accessibility_audit").unwrap();
        // FIX_A11Y refinement text is appended after the output controls.
        assert!(served.text.contains("accessibility"));
    }
}
