use crate::{
    config::Config, directories, generate_icons, generate_styles, ConfigError, Error, Summary,
    HEADER,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Targets {
    #[default]
    All,
    IconsOnly,
    StylesOnly,
}

impl Targets {
    /// `--styles-only` wins when both restrictions are requested.
    pub fn from_flags(icons_only: bool, styles_only: bool) -> Self {
        if styles_only {
            Self::StylesOnly
        } else if icons_only {
            Self::IconsOnly
        } else {
            Self::All
        }
    }

    pub fn icons(self) -> bool {
        self != Self::StylesOnly
    }

    pub fn styles(self) -> bool {
        self != Self::IconsOnly
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Plan {
    pub clean: bool,
    pub targets: Targets,
}

/// Runs a whole customization: directory setup, the requested pipelines, then the summary.
pub async fn customize(config: &Config, plan: Plan) -> Result<Summary, Error> {
    info!(target: HEADER, "Customizer");
    info!("Starting customization process...");

    if plan.targets.icons() && config.sources.icon_url.is_none() {
        return Err(ConfigError::MissingIconUrl.into());
    }

    directories::ensure_directories(&config.layout).await?;
    if plan.clean {
        directories::clean_previous(&config.layout).await;
    }
    directories::write_ignore_file(&config.layout).await?;

    if plan.targets.icons() {
        generate_icons(config).await?;
    }
    if plan.targets.styles() {
        generate_styles(&config.theme, &config.layout).await?;
    }

    Ok(Summary::collect(&config.layout).await)
}
