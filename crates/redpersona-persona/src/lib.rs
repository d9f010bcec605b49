//! Persona generation for redpersona.
//!
//! Two pure renderers share one section layout: [`build_template_persona`]
//! produces the deterministic fallback document and [`compose_prompt`] turns a
//! reduced view of the same profile into a model prompt. [`synthesize`] runs the
//! prompt through a [`TextGenerator`] and falls back to the template when the
//! call fails or the output does not pass the quality gate.

pub mod error;
pub mod generator;
pub mod prompt;
pub mod synthesize;
pub mod template;

mod sections;

pub use error::{GenerationError, SynthesisFailure};
pub use generator::{GenerationSettings, TextGenerator, TgiClient};
pub use prompt::{compose_prompt, COMPLETION_CUE};
pub use synthesize::{extract_continuation, synthesize, MIN_PERSONA_CHARS};
pub use template::build_template_persona;
