//! Terminal interaction: the username prompt and fetch progress counters.

use std::io::{BufRead, Write};

use anyhow::Context;

use redpersona_reddit::{FetchProgress, ListingKind};

/// Prompts for a username on `out` and reads one line from `input`.
///
/// # Errors
///
/// Fails if `input` is already at end of stream or cannot be read.
pub(crate) fn read_username<R: BufRead, W: Write>(
    mut input: R,
    mut out: W,
) -> anyhow::Result<String> {
    write!(out, "Enter Reddit username: ")?;
    out.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read username from stdin")?;
    if read == 0 {
        anyhow::bail!("no username given: reached end of input");
    }

    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

/// Renders one `\r`-refreshed counter line per listing.
pub(crate) struct ConsoleProgress<W: Write + Send> {
    out: W,
    active: Option<ListingKind>,
}

impl<W: Write + Send> ConsoleProgress<W> {
    pub(crate) fn new(out: W) -> Self {
        Self { out, active: None }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> FetchProgress for ConsoleProgress<W> {
    fn advance(&mut self, kind: ListingKind, fetched: usize, limit: usize) {
        self.active = Some(kind);
        // Progress output is best-effort.
        let _ = write!(self.out, "\r{kind}: {fetched}/{limit}");
        let _ = self.out.flush();
    }

    fn finish(&mut self, kind: ListingKind) {
        if self.active.take() == Some(kind) {
            let _ = writeln!(self.out);
        }
    }
}
