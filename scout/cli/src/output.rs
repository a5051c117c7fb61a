use scout_lib::{QueryOutcome, RenderStyle, Result};
use std::io::{self, Write};
use std::path::Path;

/// Print the rendered outcome as one block on stdout.
pub fn print_outcome(outcome: &QueryOutcome, style: RenderStyle) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", outcome.render(style))?;
    handle.flush()?;
    Ok(())
}

/// Save a successful body to `path`.
///
/// Failed outcomes leave any existing file untouched so a previously saved
/// profile survives a rate-limited rerun.
pub fn write_data_file(outcome: &QueryOutcome, style: RenderStyle, path: &Path) -> Result<()> {
    if !outcome.is_success() {
        tracing::warn!(path = %path.display(), "Lookup failed; output file not written");
        return Ok(());
    }

    let mut contents = outcome.render(style);
    contents.push('\n');
    std::fs::write(path, contents)?;
    tracing::info!(path = %path.display(), "Wrote lookup result");
    Ok(())
}
