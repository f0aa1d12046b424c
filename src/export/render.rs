// src/export/render.rs
use std::path::Path;
use std::process::{Command, Stdio};

use log::{info, warn};

use crate::config::ExportConfig;
use crate::error::{GraphError, Result};

/// True if `command -V` runs and exits cleanly.
#[must_use]
pub fn graphviz_available(command: &str) -> bool {
    Command::new(command)
        .arg("-V")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|status| status.success())
}

/// Runs Graphviz on `dot_file`, writing `image_file` in the configured format.
///
/// # Errors
/// Returns `GraphError::Render` if Graphviz is missing or exits non-zero.
pub fn render_image(config: &ExportConfig, dot_file: &Path, image_file: &Path) -> Result<()> {
    if !graphviz_available(&config.dot_command) {
        warn!("Graphviz `{}` not found on PATH", config.dot_command);
        return Err(GraphError::Render(format!(
            "`{}` is not available; install Graphviz and add it to PATH",
            config.dot_command
        )));
    }

    let output = Command::new(&config.dot_command)
        .arg(format!("-T{}", config.image_format))
        .arg(dot_file)
        .arg("-o")
        .arg(image_file)
        .output()
        .map_err(|e| GraphError::Render(format!("failed to run `{}`: {e}", config.dot_command)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GraphError::Render(format!(
            "`{}` exited with {}: {}",
            config.dot_command,
            output.status,
            stderr.trim()
        )));
    }

    info!("Rendered {} to {}", dot_file.display(), image_file.display());
    Ok(())
}
