use std::{fs::File, io::Write, path::Path};

use crate::model::TrafficError;

/// creates the directory that will hold `path`, if it is missing.
pub fn ensure_parent_dir(path: &Path) -> Result<(), TrafficError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            log::debug!("creating output directory {}", parent.display());
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// writes the contents to a file, or to stdout when no file is given.
pub fn write_output(output_file: Option<&Path>, contents: &str) -> Result<(), TrafficError> {
    match output_file {
        Some(path) => {
            ensure_parent_dir(path)?;
            let mut file = File::create(path)?;
            file.write_all(contents.as_bytes())?;
            log::info!("wrote {} bytes to {}", contents.len(), path.display());
            Ok(())
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(contents.as_bytes())?;
            writeln!(handle)?;
            Ok(())
        }
    }
}
