use super::Workspace;
use crate::output::Output;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use dialoguer::Confirm;
use std::fs;
use std::path::Path;
use tracing::info;

pub fn run_clear(workspace: &Workspace, yes: bool, output: &Output) -> Result<()> {
    let movies_file = workspace.movies_file();

    if !movies_file.exists() {
        output.info(format!("No data file found at {}", movies_file.display()));
        return Ok(());
    }

    if !yes && !confirm(&movies_file)? {
        output.warn("Aborted, nothing was deleted");
        return Ok(());
    }

    fs::remove_file(&movies_file)
        .map_err(|e| eyre!("Failed to remove {}: {}", movies_file.display(), e))?;
    info!(operation = "data_cleared", path = %movies_file.display(), "Removed movies file");
    output.success(format!("Removed {}", movies_file.display()));

    let backup = movies_file.with_extension("json.bak");
    if backup.exists() {
        fs::remove_file(&backup)
            .map_err(|e| eyre!("Failed to remove {}: {}", backup.display(), e))?;
        output.success(format!("Removed {}", backup.display()));
    }
    Ok(())
}

fn confirm(movies_file: &Path) -> Result<bool> {
    Confirm::new()
        .with_prompt(format!(
            "Delete every movie in {}?",
            movies_file.display()
        ))
        .default(false)
        .interact()
        .map_err(|e| eyre!("Failed to read confirmation: {}", e))
}
