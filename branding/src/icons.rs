mod download;
mod render;

use self::download::{download_image, Downloaded};
use self::render::{
    contain, encode_ico, encode_png, svg_document, TRANSPARENT, WHITE_TRANSPARENT,
};
use crate::{config::Config, summary, ConfigError, Error, HEADER};
use image::DynamicImage;
use std::path::Path;

const LOGO_SIZE: u32 = 512;
const ICO_SIZES: [u32; 3] = [16, 32, 48];

#[derive(Clone, Copy)]
enum Source {
    Main,
    Dark,
}

struct Favicon {
    file_name: &'static str,
    size: u32,
    source: Source,
    description: &'static str,
}

const FAVICONS: [Favicon; 5] = [
    Favicon {
        file_name: "favicon-16x16.png",
        size: 16,
        source: Source::Main,
        description: "16x16 favicon",
    },
    Favicon {
        file_name: "favicon-32x32.png",
        size: 32,
        source: Source::Main,
        description: "32x32 favicon",
    },
    Favicon {
        file_name: "favicon-16x16-dark.png",
        size: 16,
        source: Source::Dark,
        description: "16x16 dark favicon",
    },
    Favicon {
        file_name: "favicon-32x32-dark.png",
        size: 32,
        source: Source::Dark,
        description: "32x32 dark favicon",
    },
    Favicon {
        file_name: "apple-touch-icon.png",
        size: 180,
        source: Source::Main,
        description: "Apple Touch Icon",
    },
];

/// Downloads the configured sources and writes every favicon variant plus `logo.svg`.
pub async fn generate_icons(config: &Config) -> Result<(), Error> {
    info!(target: HEADER, "Generating custom icons...");

    let output_dir = config.layout.public_dir();
    tokio::fs::create_dir_all(&output_dir)
        .await
        .map_err(Error::filesystem(&output_dir))?;

    let sources = &config.sources;
    let icon_url = sources
        .icon_url
        .as_deref()
        .ok_or(ConfigError::MissingIconUrl)?;

    let client = reqwest::Client::builder()
        .timeout(config.download_timeout)
        .build()
        .map_err(|source| Error::Download {
            description: "main icon",
            url: icon_url.to_string(),
            source: source.into(),
        })?;

    let main_icon = download_image(
        &client,
        icon_url,
        &output_dir.join("main_icon_temp.png"),
        "main icon",
    )
    .await
    .map_err(|source| Error::Download {
        description: "main icon",
        url: icon_url.to_string(),
        source,
    })?;

    let black_icon = match sources.icon_black_url.as_deref() {
        Some(url) => {
            let target = output_dir.join("black_icon_temp.png");
            fetch_optional(&client, url, &target, "black icon").await
        }
        None => None,
    };
    if black_icon.is_none() {
        warn!("No black icon available, using main icon for dark variants");
    }
    let dark_source = black_icon.as_ref().unwrap_or(&main_icon);

    for favicon in &FAVICONS {
        let source = match favicon.source {
            Source::Main => &main_icon,
            Source::Dark => dark_source,
        };
        info!(
            "Generating {} ({}x{})",
            favicon.description, favicon.size, favicon.size
        );
        let png = encode_png(&contain(&source.image, favicon.size, TRANSPARENT))?;
        write_output(&output_dir.join(favicon.file_name), png).await?;
    }

    info!("Generating favicon.ico with sizes {ICO_SIZES:?}");
    let ico = encode_ico(&main_icon.image, &ICO_SIZES)?;
    write_output(&output_dir.join("favicon.ico"), ico).await?;

    let logo = match sources.distinct_logo_url() {
        Some(url) => {
            let target = output_dir.join("logo_temp.png");
            let logo = fetch_optional(&client, url, &target, "logo image").await;
            if logo.is_none() {
                warn!("Failed to download logo, using icon as fallback");
            }
            logo
        }
        None => None,
    };
    let logo_path = output_dir.join("logo.svg");
    generate_svg_logo(&logo.as_ref().unwrap_or(&main_icon).image, &logo_path).await?;
    info!("SVG logo generated successfully at: {}", logo_path.display());

    drop(logo);
    drop(black_icon);
    drop(main_icon);

    info!("Icon generation completed successfully!");
    report_files(&output_dir).await;

    Ok(())
}

/// Failures of optional sources only degrade the output.
async fn fetch_optional(
    client: &reqwest::Client,
    url: &str,
    target: &Path,
    description: &'static str,
) -> Option<Downloaded> {
    match download_image(client, url, target, description).await {
        Ok(downloaded) => {
            debug!("Using {} for the {description}", downloaded.path().display());
            Some(downloaded)
        }
        Err(e) => {
            warn!("Failed to download {description} from {url}: {e}");
            None
        }
    }
}

async fn generate_svg_logo(source: &DynamicImage, path: &Path) -> Result<(), Error> {
    info!("Generating SVG logo");

    let png = encode_png(&contain(source, LOGO_SIZE, WHITE_TRANSPARENT))?;
    let svg = svg_document(&png, LOGO_SIZE, LOGO_SIZE);

    write_output(path, svg).await
}

async fn write_output(path: &Path, contents: impl AsRef<[u8]>) -> Result<(), Error> {
    tokio::fs::write(path, contents)
        .await
        .map_err(Error::filesystem(path))?;
    trace!("Wrote {}", path.display());

    Ok(())
}

async fn report_files(output_dir: &Path) {
    match summary::icon_files(output_dir).await {
        Ok(files) => {
            info!("Generated files in {}:", output_dir.display());
            for (name, size) in files {
                println!("    {name} ({size} bytes)");
            }
        }
        Err(e) => warn!("Could not list generated files: {e}"),
    }
}
