use thiserror::Error;

/// Errors raised by a [`crate::TextGenerator`].
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status (model loading, overloaded, ...).
    #[error("generator returned status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("generator response parse error: {0}")]
    Deserialize(String),

    /// The server answered but produced no sequences.
    #[error("generator returned no output")]
    Empty,
}

/// Why [`crate::synthesize`] substituted the template persona.
#[derive(Debug, Error)]
pub enum SynthesisFailure {
    #[error("text generation failed: {0}")]
    Generation(#[from] GenerationError),

    /// The generated text was empty or shorter than [`crate::MIN_PERSONA_CHARS`].
    #[error("generated persona rejected: {chars} characters")]
    Rejected { chars: usize },
}
