//! Assembly of prompt servers from component lists.
//!
//! [`ServerFactory`] collects prompt specifications through a fluent
//! interface, then composes all of them against a [`PromptComposer`] in a
//! single `build` step. Recording a specification never fails; every
//! failure mode is reported by `build`, and a failed build produces no
//! server at all.

use tracing::debug;
use uigen_prompt::{Audience, Component, PromptComposer};

use crate::error::FactoryError;
use crate::server::{PromptServer, ServedPrompt};

/// Specification for one prompt: which audience layer it targets, its
/// public name and description, and the components to compose.
#[derive(Debug, Clone)]
struct PromptSpec {
    audience: Audience,
    name: String,
    description: String,
    components: Vec<Component>,
}

/// Builder for [`PromptServer`] instances.
#[derive(Debug, Clone)]
pub struct ServerFactory {
    name: String,
    specs: Vec<PromptSpec>,
}

impl ServerFactory {
    /// Start a factory for a server with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            specs: Vec::new(),
        }
    }

    /// Record a prompt specification for the given audience layer.
    pub fn add_prompt(
        mut self,
        audience: Audience,
        name: impl Into<String>,
        description: impl Into<String>,
        components: Vec<Component>,
    ) -> Self {
        self.specs.push(PromptSpec {
            audience,
            name: name.into(),
            description: description.into(),
            components,
        });
        self
    }

    /// Record a prompt composed from frontend-layer texts.
    pub fn add_frontend_generation_prompt(
        self,
        name: impl Into<String>,
        description: impl Into<String>,
        components: Vec<Component>,
    ) -> Self {
        self.add_prompt(Audience::Frontend, name, description, components)
    }

    /// Record a prompt composed from backend-layer texts.
    pub fn add_backend_generation_prompt(
        self,
        name: impl Into<String>,
        description: impl Into<String>,
        components: Vec<Component>,
    ) -> Self {
        self.add_prompt(Audience::Backend, name, description, components)
    }

    /// Number of prompt specifications recorded so far.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether no prompt specifications have been recorded.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Compose every recorded prompt and build the server.
    ///
    /// Prompts are composed in registration order. The first duplicate
    /// name or composition failure aborts the build; on error nothing is
    /// installed and no server exists.
    pub fn build(self, composer: &PromptComposer) -> Result<PromptServer, FactoryError> {
        let mut prompts: Vec<(String, ServedPrompt)> = Vec::with_capacity(self.specs.len());

        for spec in self.specs {
            if prompts.iter().any(|(name, _)| name == &spec.name) {
                return Err(FactoryError::DuplicateName(spec.name));
            }

            let text = composer
                .compose(spec.audience, &spec.components)
                .map_err(|source| FactoryError::Compose {
                    name: spec.name.clone(),
                    source,
                })?;

            debug!(
                prompt = %spec.name,
                audience = %spec.audience,
                components = spec.components.len(),
                "composed server prompt"
            );

            prompts.push((
                spec.name,
                ServedPrompt {
                    description: spec.description,
                    text,
                },
            ));
        }

        Ok(PromptServer::new(self.name, prompts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uigen_prompt::{
        CategoryStore, ComposeError, Modality, OutputControl, PromptStore, TaskContext,
    };

    fn two_audience_composer() -> PromptComposer {
        let mut contexts: PromptStore<TaskContext> = PromptStore::new();
        contexts.register(Audience::Frontend, TaskContext::UiGeneration, "F");
        contexts.register(Audience::Backend, TaskContext::UiGeneration, "B");

        let mut modalities: PromptStore<Modality> = PromptStore::new();
        modalities.register(Audience::Frontend, Modality::Image, "I");

        let mut composer = PromptComposer::new();
        composer.register_store(CategoryStore::from(contexts));
        composer.register_store(CategoryStore::from(modalities));
        composer
    }

    #[test]
    fn test_build_composes_recorded_prompts() {
        let composer = two_audience_composer();
        let server = ServerFactory::new("ui-gen")
            .add_frontend_generation_prompt(
                "generate",
                "Frontend generation",
                vec![TaskContext::UiGeneration.into(), Modality::Image.into()],
            )
            .build(&composer)
            .unwrap();

        assert_eq!(server.name(), "ui-gen");
        assert_eq!(server.get("generate").unwrap().text, "FI");
    }

    #[test]
    fn test_layer_wrappers_select_audience() {
        let composer = two_audience_composer();
        let server = ServerFactory::new("ui-gen")
            .add_frontend_generation_prompt(
                "front",
                "front",
                vec![TaskContext::UiGeneration.into()],
            )
            .add_backend_generation_prompt("back", "back", vec![TaskContext::UiGeneration.into()])
            .build(&composer)
            .unwrap();

        assert_eq!(server.get("front").unwrap().text, "F");
        assert_eq!(server.get("back").unwrap().text, "B");
    }

    #[test]
    fn test_build_preserves_registration_order() {
        let composer = two_audience_composer();
        let server = ServerFactory::new("ui-gen")
            .add_frontend_generation_prompt("one", "1", vec![TaskContext::UiGeneration.into()])
            .add_frontend_generation_prompt("two", "2", vec![Modality::Image.into()])
            .add_frontend_generation_prompt("three", "3", vec![TaskContext::UiGeneration.into()])
            .build(&composer)
            .unwrap();

        assert_eq!(server.prompt_names(), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_duplicate_prompt_name_fails_the_build() {
        let composer = two_audience_composer();
        let result = ServerFactory::new("ui-gen")
            .add_frontend_generation_prompt("generate", "a", vec![TaskContext::UiGeneration.into()])
            .add_frontend_generation_prompt("generate", "b", vec![Modality::Image.into()])
            .build(&composer);

        assert_eq!(
            result.err(),
            Some(FactoryError::DuplicateName("generate".to_string()))
        );
    }

    #[test]
    fn test_compose_failure_produces_no_server() {
        let composer = two_audience_composer();
        let result = ServerFactory::new("ui-gen")
            .add_frontend_generation_prompt("good", "ok", vec![TaskContext::UiGeneration.into()])
            .add_frontend_generation_prompt(
                "bad",
                "unregistered category",
                vec![OutputControl::WithTests.into()],
            )
            .build(&composer);

        match result {
            Err(FactoryError::Compose { name, source }) => {
                assert_eq!(name, "bad");
                assert!(matches!(source, ComposeError::UnregisteredCategory(_)));
            }
            other => panic!("expected compose failure, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_audience_text_fails_the_build() {
        let composer = two_audience_composer();
        let result = ServerFactory::new("ui-gen")
            .add_backend_generation_prompt("back", "no backend image", vec![Modality::Image.into()])
            .build(&composer);

        match result {
            Err(FactoryError::Compose { name, source }) => {
                assert_eq!(name, "back");
                assert!(matches!(source, ComposeError::MissingText { .. }));
            }
            other => panic!("expected compose failure, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_factory_builds_empty_server() {
        let composer = two_audience_composer();
        let factory = ServerFactory::new("ui-gen");
        assert!(factory.is_empty());
        let server = factory.build(&composer).unwrap();
        assert!(server.is_empty());
    }
}
