use crate::DownloadError;
use image::{DynamicImage, ImageReader};
use std::{
    io::Cursor,
    path::{Path, PathBuf},
};

/// A fetched source image. The backing temporary file is removed on drop.
pub struct Downloaded {
    path: PathBuf,
    pub image: DynamicImage,
}

impl Downloaded {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for Downloaded {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => trace!("Removed temporary {}", self.path.display()),
            Err(e) => trace!("Temporary {} not removed: {e}", self.path.display()),
        }
    }
}

/// Removes a partially written file unless the download is kept.
struct PartialFile<'a>(Option<&'a Path>);

impl PartialFile<'_> {
    fn keep(mut self) {
        self.0 = None;
    }
}

impl Drop for PartialFile<'_> {
    fn drop(&mut self) {
        if let Some(path) = self.0 {
            match std::fs::remove_file(path) {
                Ok(()) => trace!("Removed partial {}", path.display()),
                Err(e) => trace!("Partial {} not removed: {e}", path.display()),
            }
        }
    }
}

pub async fn download_image(
    client: &reqwest::Client,
    url: &str,
    target: &Path,
    description: &str,
) -> Result<Downloaded, DownloadError> {
    info!("Downloading {description} from: {url}");

    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(DownloadError::Status { status });
    }
    let body = response.bytes().await?;
    debug!("Received {} bytes for {description}", body.len());

    let partial = PartialFile(Some(target));
    tokio::fs::write(target, &body)
        .await
        .map_err(|source| DownloadError::Write {
            path: target.to_path_buf(),
            source,
        })?;
    let image = decode(target).await?;
    partial.keep();

    info!("Successfully downloaded and validated {description}");

    Ok(Downloaded {
        path: target.to_path_buf(),
        image,
    })
}

async fn decode(path: &Path) -> Result<DynamicImage, DownloadError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| DownloadError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    let image = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(image::ImageError::IoError)?
        .decode()?;

    Ok(image)
}
