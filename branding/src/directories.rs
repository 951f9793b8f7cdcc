use crate::Error;
use std::path::{Path, PathBuf};
use tokio::fs;

const IGNORE_RULES: &str = "# Generated customization files\npublic/\nstyles/\n";
const ICON_EXTENSIONS: [&str; 3] = ["png", "ico", "svg"];

/// Paths of the customization tree.
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn public_dir(&self) -> PathBuf {
        self.root.join("public")
    }

    pub fn styles_dir(&self) -> PathBuf {
        self.root.join("styles")
    }

    pub fn definitions_file(&self) -> PathBuf {
        self.styles_dir().join("_definitions.scss")
    }

    pub fn ignore_file(&self) -> PathBuf {
        self.root.join(".gitignore")
    }
}

pub(crate) fn is_icon_file(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| ICON_EXTENSIONS.contains(&extension))
}

pub async fn ensure_directories(layout: &Layout) -> Result<(), Error> {
    info!("Setting up directory structure...");

    for dir in [layout.root().to_path_buf(), layout.public_dir(), layout.styles_dir()] {
        if fs::try_exists(&dir).await.unwrap_or(false) {
            info!("Directory already exists: {}", dir.display());
        } else {
            fs::create_dir_all(&dir)
                .await
                .map_err(Error::filesystem(&dir))?;
            info!("Created directory: {}", dir.display());
        }
    }

    Ok(())
}

/// Removes generated icons and the stylesheet. Whatever is already gone counts as clean.
pub async fn clean_previous(layout: &Layout) {
    info!("Cleaning previous customizations...");

    let public_dir = layout.public_dir();
    match fs::read_dir(&public_dir).await {
        Ok(mut entries) => {
            while let Ok(Some(entry)) = entries.next_entry().await {
                let path = entry.path();
                if is_icon_file(&path) {
                    match fs::remove_file(&path).await {
                        Ok(()) => debug!("Removed {}", path.display()),
                        Err(e) => debug!("Cannot remove {}: {e}", path.display()),
                    }
                }
            }
        }
        Err(e) => debug!("Skipping {}: {e}", public_dir.display()),
    }

    let definitions = layout.definitions_file();
    if let Err(e) = fs::remove_file(&definitions).await {
        debug!("Skipping {}: {e}", definitions.display());
    }

    info!("Previous customizations cleaned");
}

/// Writes the ignore rules for the generated folders unless the file is already there.
pub async fn write_ignore_file(layout: &Layout) -> Result<(), Error> {
    let path = layout.ignore_file();
    if fs::try_exists(&path).await.unwrap_or(false) {
        debug!("Keeping existing {}", path.display());
        return Ok(());
    }

    info!("Creating .gitignore for custom folder...");
    fs::write(&path, IGNORE_RULES)
        .await
        .map_err(Error::filesystem(&path))?;
    info!("Created {}", path.display());

    Ok(())
}
