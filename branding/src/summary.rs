use crate::{directories::is_icon_file, Layout};
use std::{fmt, io, path::Path};
use tokio::fs;

/// Icon files in `dir` with their sizes, sorted by name.
pub(crate) async fn icon_files(dir: &Path) -> io::Result<Vec<(String, u64)>> {
    let mut files = Vec::new();
    let mut entries = fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if !is_icon_file(&path) {
            continue;
        }
        let metadata = entry.metadata().await?;
        if metadata.is_file() {
            let name = entry.file_name().to_string_lossy().into_owned();
            files.push((name, metadata.len()));
        }
    }
    files.sort();

    Ok(files)
}

/// What is on disk after a run, including files left over from earlier runs.
#[derive(Debug, Default)]
pub struct Summary {
    pub public_dir: String,
    pub icons: Vec<(String, u64)>,
    pub stylesheet: Option<(String, u64)>,
}

impl Summary {
    pub async fn collect(layout: &Layout) -> Self {
        let public_dir = layout.public_dir();
        let icons = icon_files(&public_dir).await.unwrap_or_else(|e| {
            debug!("No icons listed in {}: {e}", public_dir.display());
            Vec::new()
        });

        let definitions = layout.definitions_file();
        let stylesheet = match fs::metadata(&definitions).await {
            Ok(metadata) => Some((definitions.display().to_string(), metadata.len())),
            Err(e) => {
                debug!("No stylesheet at {}: {e}", definitions.display());
                None
            }
        };

        Self {
            public_dir: public_dir.display().to_string(),
            icons,
            stylesheet,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generated files:")?;
        if !self.icons.is_empty() {
            writeln!(f, "  Icons: {} files in {}/", self.icons.len(), self.public_dir)?;
            for (name, size) in &self.icons {
                writeln!(f, "    {name} ({size} bytes)")?;
            }
        }
        if let Some((path, size)) = &self.stylesheet {
            writeln!(f, "  Styles: {path}")?;
            writeln!(f, "    Size: {size} bytes")?;
        }

        Ok(())
    }
}
