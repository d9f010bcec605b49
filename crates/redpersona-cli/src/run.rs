//! End-to-end persona run: fetch, compose, synthesize, write.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;

use redpersona_persona::{compose_prompt, synthesize, SynthesisFailure, TextGenerator};
use redpersona_reddit::{fetch_profile, FetchProgress, ProfileSource};

/// Closing lines appended after the persona body.
const CITATION_FOOTER: &str = "## Citations\nGenerated based on Reddit data.";

/// Runs one persona generation for `input` and writes the result under `out_dir`.
///
/// Retrieval and generation failures degrade (empty profile, template
/// persona) and are reported on `out`; only writing the output file can fail.
///
/// # Errors
///
/// Returns an error if the persona file cannot be written.
pub(crate) async fn run<S, G, W>(
    input: &str,
    source: &S,
    generator: &G,
    limit: usize,
    out_dir: &Path,
    progress: &mut dyn FetchProgress,
    out: &mut W,
) -> anyhow::Result<PathBuf>
where
    S: ProfileSource + ?Sized,
    G: TextGenerator + ?Sized,
    W: Write,
{
    let data = fetch_profile(source, input, limit, progress)
        .await
        .into_value();

    let prompt = compose_prompt(&data);
    let outcome = synthesize(generator, &prompt, &data).await;
    match outcome.cause() {
        Some(SynthesisFailure::Rejected { .. }) => {
            writeln!(out, "LLM output unsatisfactory, using fallback simple persona.")?;
        }
        Some(SynthesisFailure::Generation(e)) => {
            writeln!(out, "LLM call failed: {e}")?;
        }
        None => {}
    }

    let document = render_document(&data.username, &outcome.into_value());
    let file_name = output_file_name(&data.username);
    let path = out_dir.join(&file_name);
    tokio::fs::write(&path, document)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;

    tracing::info!(username = %data.username, path = %path.display(), "persona written");
    writeln!(out, "Persona saved to {file_name}")?;
    Ok(path)
}

/// Title line, blank line, persona body, blank line, citation footer.
fn render_document(username: &str, persona: &str) -> String {
    format!(
        "# PERSONA: {}\n\n{persona}\n\n{CITATION_FOOTER}",
        username.to_uppercase()
    )
}

fn output_file_name(username: &str) -> String {
    format!("persona_{username}.txt")
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
