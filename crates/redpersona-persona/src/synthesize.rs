//! Narrative synthesis with template fallback.

use redpersona_core::{Outcome, ProfileData};

use crate::error::SynthesisFailure;
use crate::generator::TextGenerator;
use crate::prompt::COMPLETION_CUE;
use crate::template::build_template_persona;

/// Generated personas shorter than this (in characters, after trimming) are
/// rejected.
pub const MIN_PERSONA_CHARS: usize = 100;

/// Generates a persona for `data` from `prompt`, falling back to the template.
///
/// The generator receives `prompt` followed by [`COMPLETION_CUE`]. Its output
/// is reduced with [`extract_continuation`] and rejected when empty or shorter
/// than [`MIN_PERSONA_CHARS`]. Generator errors and rejections both yield
/// [`Outcome::Degraded`] carrying [`build_template_persona`]`(data)`.
pub async fn synthesize<G>(
    generator: &G,
    prompt: &str,
    data: &ProfileData,
) -> Outcome<String, SynthesisFailure>
where
    G: TextGenerator + ?Sized,
{
    let full_prompt = format!("{prompt}{COMPLETION_CUE}");

    let generated = match generator.generate(&full_prompt).await {
        Ok(generated) => generated,
        Err(e) => {
            tracing::warn!(
                username = %data.username,
                error = %e,
                "text generation failed; using template persona"
            );
            return Outcome::Degraded {
                value: build_template_persona(data),
                cause: SynthesisFailure::Generation(e),
            };
        }
    };

    let persona = extract_continuation(&generated, prompt);
    let chars = persona.chars().count();
    if chars < MIN_PERSONA_CHARS {
        tracing::warn!(
            username = %data.username,
            chars,
            min = MIN_PERSONA_CHARS,
            "generated persona too short; using template persona"
        );
        return Outcome::Degraded {
            value: build_template_persona(data),
            cause: SynthesisFailure::Rejected { chars },
        };
    }

    tracing::debug!(username = %data.username, chars, "accepted generated persona");
    Outcome::Complete(persona)
}

/// Pulls the model's continuation out of `generated`.
///
/// Takes the text after the last [`COMPLETION_CUE`]. Without a cue, drops as
/// many leading characters as `prompt` has. The result is trimmed.
#[must_use]
pub fn extract_continuation(generated: &str, prompt: &str) -> String {
    let continuation = match generated.rfind(COMPLETION_CUE) {
        Some(idx) => &generated[idx + COMPLETION_CUE.len()..],
        None => {
            let skip = prompt.chars().count();
            generated
                .char_indices()
                .nth(skip)
                .map_or("", |(byte_idx, _)| &generated[byte_idx..])
        }
    };
    continuation.trim().to_owned()
}
