//! Component catalog for the UI Gen CLI.
//!
//! This module defines the closed vocabulary of prompt components. Each
//! category is its own enum; [`Component`] ties them together as a tagged
//! union so mixed-category sequences can be passed around while category
//! membership stays checked by the type system.

use std::fmt;
use std::hash::Hash;

/// The fixed set of component categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    TaskContext,
    Modality,
    TechConstraint,
    OutputControl,
    Refinement,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::TaskContext => "TaskContext",
            Category::Modality => "Modality",
            Category::TechConstraint => "TechConstraint",
            Category::OutputControl => "OutputControl",
            Category::Refinement => "Refinement",
        };
        write!(f, "{}", name)
    }
}

/// A member of one component category.
///
/// Implemented exactly once per category enum; generic code uses it to name
/// a member type's category and to widen members into [`Component`] values.
pub trait CategoryMember: Copy + Eq + Hash + Into<Component> + fmt::Debug {
    /// The category this member type belongs to.
    const CATEGORY: Category;
}

/// The primary intent or goal of the prompt generation process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskContext {
    /// Generate standard UI components (forms, buttons, navbars, etc.)
    UiGeneration,
    /// Detect and repair UI layout/styling/behavior bugs
    UiFixBugs,
    /// Create or extend design tokens and themes
    UiThemeGen,
    /// Audit and improve accessibility (ARIA, WCAG)
    UiA11yReview,
    /// Generate reusable component libraries / design systems
    UiComponentLibGen,
    /// Convert specs (Markdown, Figma) to code
    UiSpecToCode,
    /// Generate tests (unit/E2E) for UI components
    UiTestGen,
    /// Refactor for performance, readability, or structure
    UiRefactor,
    /// Migrate UI from one framework to another
    UiMigration,
    /// Generate Storybook or inline documentation
    UiDocGen,
    /// Build tools like admin panels or dashboards
    UiAutomationWidget,
    /// Scaffold robust error boundaries
    UiErrorBoundaryGen,
    /// Scaffold localization/internationalization support
    UiI18nGen,
    /// Auto-generate forms from JSON/schema/spec
    UiFormBuilder,
}

/// The modality of the input used to generate UI prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modality {
    /// Free-form prompt or command text
    Text,
    /// UI screenshot or rendered component
    Image,
    /// Hand-drawn sketch or whiteboard wireframe
    Sketch,
    /// Markdown-formatted spec or requirement
    MarkdownSpec,
    /// Backend data model or schema
    JsonSchema,
    /// Existing HTML (for audit/migration)
    Html,
    /// DSL-style YAML config describing UI
    YamlUiConfig,
    /// Domain-specific language (e.g., Retool DSL)
    DslUiLang,
}

/// Technologies, libraries, or design systems the output must conform to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TechConstraint {
    React,
    Nextjs,
    Vue,
    Svelte,
    Tailwind,
    ChakraUi,
    MaterialUi,
    Storybook,
    Typescript,
    Flutter,
    ReactNative,
    AntDesign,
    Bootstrap,
    WebComponents,
    Pyqt,
    AndroidJetpack,
    NoFramework,
}

/// The style, format, and functional requirements of the generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputControl {
    /// Must follow spec or pattern exactly
    StrictCompliance,
    /// Can be dropped directly into codebase
    CopyPasteReady,
    /// Must not include external imports
    NoImports,
    /// Includes imports, styles, setup
    FullModule,
    /// Output only code snippet body
    SnippetOnly,
    /// Include inline/block comments
    Explainable,
    /// Bare code only
    NoComments,
    /// Include tests in output
    WithTests,
    /// Must pass accessibility audit
    A11yEnforced,
    /// Must include types (JSDoc, TS)
    TypeAnnotated,
    /// Avoid anti-patterns (rerenders, bloat)
    PerformanceSafe,
    /// Extract hardcoded values as tokens
    ExtractVariables,
    /// Must be responsive
    MobileResponsive,
    /// Includes dark mode compatibility
    DarkModeSupported,
    /// Should hook into app layout/store
    IntegrationReady,
}

/// Post-generation improvement or bug-fix directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Refinement {
    /// Fix spacing, alignment, layout issues
    FixVisualLayout,
    /// Add accessibility features (labels, ARIA)
    FixA11y,
    /// Ensure proper rendering on mobile/tablet
    AddResponsiveness,
    /// Make buttons/inputs functional or correct behavior
    FixInteractivity,
    /// Extract magic values to variables
    ExtractConstants,
    /// Add helpful developer comments
    AddComments,
    /// Refactor repeated code into reusable parts
    RemoveDuplication,
    /// Clean code to follow modern UI best practices
    ApplyBestPractices,
    /// Break large monolith into multiple small components
    SplitComponent,
    /// Add TypeScript or PropTypes
    AddTypes,
    /// Use proper HTML5 tags (e.g., `<section>`, `<nav>`)
    UpgradeSemantics,
    /// Adjust colors for better visual contrast
    ImproveContrast,
    /// Correct issues with hooks, state, props
    FixStateManagement,
    /// Simplify logic, lazy-load where needed
    ReduceBundleSize,
    /// Insert loading indicators for async flows
    AddLoadingStates,
    /// Rename components, props, CSS classes
    EnforceNamingConventions,
}

impl CategoryMember for TaskContext {
    const CATEGORY: Category = Category::TaskContext;
}

impl CategoryMember for Modality {
    const CATEGORY: Category = Category::Modality;
}

impl CategoryMember for TechConstraint {
    const CATEGORY: Category = Category::TechConstraint;
}

impl CategoryMember for OutputControl {
    const CATEGORY: Category = Category::OutputControl;
}

impl CategoryMember for Refinement {
    const CATEGORY: Category = Category::Refinement;
}

/// A single component value from any category.
///
/// One variant per category; a value always belongs to exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    TaskContext(TaskContext),
    Modality(Modality),
    TechConstraint(TechConstraint),
    OutputControl(OutputControl),
    Refinement(Refinement),
}

impl Component {
    /// The category this component value belongs to.
    pub fn category(&self) -> Category {
        match self {
            Component::TaskContext(_) => Category::TaskContext,
            Component::Modality(_) => Category::Modality,
            Component::TechConstraint(_) => Category::TechConstraint,
            Component::OutputControl(_) => Category::OutputControl,
            Component::Refinement(_) => Category::Refinement,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::TaskContext(m) => write!(f, "TaskContext::{:?}", m),
            Component::Modality(m) => write!(f, "Modality::{:?}", m),
            Component::TechConstraint(m) => write!(f, "TechConstraint::{:?}", m),
            Component::OutputControl(m) => write!(f, "OutputControl::{:?}", m),
            Component::Refinement(m) => write!(f, "Refinement::{:?}", m),
        }
    }
}

impl From<TaskContext> for Component {
    fn from(member: TaskContext) -> Self {
        Component::TaskContext(member)
    }
}

impl From<Modality> for Component {
    fn from(member: Modality) -> Self {
        Component::Modality(member)
    }
}

impl From<TechConstraint> for Component {
    fn from(member: TechConstraint) -> Self {
        Component::TechConstraint(member)
    }
}

impl From<OutputControl> for Component {
    fn from(member: OutputControl) -> Self {
        Component::OutputControl(member)
    }
}

impl From<Refinement> for Component {
    fn from(member: Refinement) -> Self {
        Component::Refinement(member)
    }
}
