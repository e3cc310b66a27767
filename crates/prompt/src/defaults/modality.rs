//! Shipped input-modality texts.
//!
//! Each text tells the agent what kind of input it is working from and how
//! authoritative that input is.

use crate::component::Modality;
use crate::store::{Audience, PromptStore};

/// Build the shipped modality store.
pub fn store() -> PromptStore<Modality> {
    let mut store = PromptStore::new();

    store.register(Audience::Frontend, Modality::Image, IMAGE);
    store.register(Audience::Frontend, Modality::Text, TEXT);
    store.register(Audience::Frontend, Modality::Sketch, SKETCH);
    store.register(Audience::Frontend, Modality::MarkdownSpec, MARKDOWN_SPEC);
    store.register(Audience::Frontend, Modality::JsonSchema, JSON_SCHEMA);
    store.register(Audience::Frontend, Modality::Html, HTML);

    store
}

const IMAGE: &str = r#"
### Input Assets

* `UI/layout/`: Pixel-perfect reference images for all screens, modals, forms, and interaction states (hover, loading, error, empty, disabled, success). **You must match these exactly — no approximations allowed.**
* `UI/api_contract.md`: The **sole source of truth** describing all endpoints, request/response JSON schemas, payload types, status codes, and behaviors. **No guessing, inferring, or altering any behavior**.
"#;

const TEXT: &str = r#"
### Input: Task Description

The accompanying text is the full statement of required functionality and behavior.
Implement everything it states and nothing it does not; ambiguity resolves toward the stricter reading.
"#;

const SKETCH: &str = r#"
### Input: Sketch

The input is a hand-drawn sketch or whiteboard wireframe of the intended interface.
Treat its structure and element placement as authoritative, and render it with production-quality visual polish.
"#;

const MARKDOWN_SPEC: &str = r#"
### Input: Markdown Specification

The input is a Markdown document specifying the required screens, components, and behaviors.
Implement the specification section by section; every stated requirement must appear in the result.
"#;

const JSON_SCHEMA: &str = r#"
### Input: JSON Schema

The input is a JSON schema describing the backend data model.
Derive field types, validation rules, and UI structure directly from the schema without inventing fields.
"#;

const HTML: &str = r#"
### Input: Existing HTML

The input is existing HTML markup to audit, enhance, or migrate.
Preserve its rendered appearance and semantics except where the task explicitly directs a change.
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_text_is_frontend_only() {
        let store = store();
        assert!(store.get(Audience::Frontend, Modality::Image).is_ok());
        assert!(store.get(Audience::Backend, Modality::Image).is_err());
    }

    #[test]
    fn test_config_modalities_have_no_shipped_text() {
        let store = store();
        assert!(store.get(Audience::Frontend, Modality::YamlUiConfig).is_err());
        assert!(store.get(Audience::Frontend, Modality::DslUiLang).is_err());
    }
}
