pub mod defaults;
mod theme;

use crate::directories::Layout;
use std::{env, path::PathBuf, time::Duration};
pub use theme::{to_boolean, Theme};

pub struct Config {
    pub layout: Layout,
    pub download_timeout: Duration,
    pub sources: IconSources,
    pub theme: Theme,
}

impl Config {
    /// Reads every option from the process environment.
    pub fn from_env(output_dir: PathBuf, download_timeout: Duration) -> Self {
        Self::from_lookup(output_dir, download_timeout, |key| env::var(key).ok())
    }

    pub fn from_lookup<F>(output_dir: PathBuf, download_timeout: Duration, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            layout: Layout::new(output_dir),
            download_timeout,
            sources: IconSources::from_lookup(&lookup),
            theme: Theme::from_lookup(&lookup),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct IconSources {
    pub icon_url: Option<String>,
    pub logo_url: Option<String>,
    pub icon_black_url: Option<String>,
}

impl IconSources {
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = |key: &str| lookup(key).filter(|value| !value.is_empty());

        Self {
            icon_url: url("ICON_URL"),
            logo_url: url("LOGO_URL"),
            icon_black_url: url("ICON_BLACK_URL"),
        }
    }

    /// The logo is fetched separately only when it points somewhere else than the icon.
    pub fn distinct_logo_url(&self) -> Option<&str> {
        self.logo_url
            .as_deref()
            .filter(|logo_url| self.icon_url.as_deref() != Some(*logo_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[rstest]
    fn empty_urls_are_unset() {
        let sources = IconSources::from_lookup(&lookup(&[
            ("ICON_URL", ""),
            ("LOGO_URL", "https://example.com/logo.png"),
        ]));

        assert_eq!(None, sources.icon_url);
        assert_eq!(
            Some("https://example.com/logo.png".to_string()),
            sources.logo_url
        );
        assert_eq!(None, sources.icon_black_url);
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some("https://example.com/icon.png"), None)]
    #[case(Some("https://example.com/logo.png"), Some("https://example.com/logo.png"))]
    fn distinct_logo(#[case] logo_url: Option<&str>, #[case] expected: Option<&str>) {
        let sources = IconSources {
            icon_url: Some("https://example.com/icon.png".to_string()),
            logo_url: logo_url.map(str::to_string),
            icon_black_url: None,
        };

        assert_eq!(expected, sources.distinct_logo_url());
    }

    #[rstest]
    fn lookup_builds_layout() {
        let config = Config::from_lookup(
            PathBuf::from("out"),
            Duration::from_secs(5),
            lookup(&[("CUSTOM_RED_COLOR", "#f00")]),
        );

        assert_eq!(PathBuf::from("out/public"), config.layout.public_dir());
        assert_eq!(Duration::from_secs(5), config.download_timeout);
        assert_eq!("#f00", config.theme.red_color);
    }
}
