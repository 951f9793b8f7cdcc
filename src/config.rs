use anyhow::Context;
use branding::{config::defaults, Plan, Targets};
use clap::{arg, value_parser, Arg, ArgAction, ArgMatches, Command};
use log::LevelFilter;
use std::{path::PathBuf, time::Duration};

const ENVIRONMENT_HELP: &str = "\
Environment variables (set in .env file):
  ICON_URL                            - URL to main icon image (required unless --styles-only)
  LOGO_URL                            - URL to logo image for SVG (optional, uses ICON_URL if not set)
  ICON_BLACK_URL                      - URL to black variant of icon (optional)
  CUSTOM_PRIMARY_COLOR                - Primary color (default: #0a0d10)
  CUSTOM_SECONDARY_COLOR              - Secondary color (default: #0a0d10)
  CUSTOM_RED_COLOR                    - Red/danger color (default: #d74949)
  CUSTOM_GREEN_COLOR                  - Green/success color (default: #319236)
  CUSTOM_TEXT_MUTED_COLOR             - Muted text color (default: #888)
  CUSTOM_SECONDARY_BACKGROUND_COLOR   - Secondary background color (default: #f1f1f1)
  CUSTOM_SECONDARY_TEXT_COLOR         - Secondary text color (default: #7a7a7a)
  CUSTOM_FORCE_LINK_UNDERLINE         - Underline links (default: true)
  CUSTOM_LIGHTER_PRIMARY_HOVER        - Lighten primary buttons on hover (default: true)
  CUSTOM_LIGHTER_SECONDARY_HOVER      - Lighten secondary buttons on hover (default: true)
  CUSTOM_HEADER_LOGO                  - Show the logo in the header (default: true)

Switches accept true/yes/1/on, any other value turns them off.";

pub struct Config {
    pub plan: Plan,
    pub output_dir: PathBuf,
    pub download_timeout: Duration,
    pub env_file: Option<PathBuf>,
    pub verbosity: LevelFilter,
}

fn command() -> Command {
    Command::new("customize")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generates branding icons and theme stylesheet variables")
        .after_help(ENVIRONMENT_HELP)
        .args([
            arg!(-c --clean "Clean previous customizations before generating new ones"),
            arg!(--"icons-only" "Generate only icons"),
            arg!(--"styles-only" "Generate only styles"),
            arg!(--"output-dir" <DIR> "Customization directory")
                .value_parser(value_parser!(PathBuf))
                .default_value(defaults::output_dir()),
            arg!(--timeout <SECONDS> "Timeout of each image download")
                .value_parser(value_parser!(u64))
                .default_value(defaults::download_timeout_seconds().to_string()),
            arg!(--"env-file" <FILE> "Environment file to load instead of .env")
                .value_parser(value_parser!(PathBuf)),
            Arg::new("verbosity")
                .short('v')
                .help("Verbosity level: -v for debug, -vv for trace")
                .action(ArgAction::Count),
        ])
}

impl Config {
    pub fn from_cli() -> anyhow::Result<Self> {
        Self::from_matches(&command().get_matches())
    }

    fn from_matches(matches: &ArgMatches) -> anyhow::Result<Self> {
        let verbosity = match matches.get_count("verbosity") {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        let timeout = *matches
            .get_one::<u64>("timeout")
            .context("Timeout has no value")?;

        Ok(Self {
            plan: Plan {
                clean: matches.get_flag("clean"),
                targets: Targets::from_flags(
                    matches.get_flag("icons-only"),
                    matches.get_flag("styles-only"),
                ),
            },
            output_dir: matches
                .get_one::<PathBuf>("output-dir")
                .cloned()
                .context("Output directory has no value")?,
            download_timeout: Duration::from_secs(timeout),
            env_file: matches.get_one::<PathBuf>("env-file").cloned(),
            verbosity,
        })
    }

    /// An explicit file must exist, the default `.env` is optional.
    pub fn load_env_file(&self) -> anyhow::Result<Option<PathBuf>> {
        match &self.env_file {
            Some(path) => {
                dotenvy::from_path(path)
                    .with_context(|| format!("Cannot load {}", path.display()))?;
                Ok(Some(path.clone()))
            }
            None => match dotenvy::from_path(".env") {
                Ok(()) => Ok(Some(PathBuf::from(".env"))),
                Err(e) if e.not_found() => Ok(None),
                Err(e) => Err(e).context("Cannot load .env"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(args: &[&str]) -> Config {
        let matches = command()
            .try_get_matches_from(std::iter::once("customize").chain(args.iter().copied()))
            .unwrap();
        Config::from_matches(&matches).unwrap()
    }

    #[rstest]
    fn defaults() {
        let config = parse(&[]);

        assert!(!config.plan.clean);
        assert_eq!(Targets::All, config.plan.targets);
        assert_eq!(PathBuf::from("custom"), config.output_dir);
        assert_eq!(Duration::from_secs(30), config.download_timeout);
        assert_eq!(None, config.env_file);
        assert_eq!(LevelFilter::Info, config.verbosity);
    }

    #[rstest]
    #[case(&["-c"], true, Targets::All)]
    #[case(&["--clean", "--icons-only"], true, Targets::IconsOnly)]
    #[case(&["--styles-only"], false, Targets::StylesOnly)]
    #[case(&["--icons-only", "--styles-only"], false, Targets::StylesOnly)]
    fn plan(#[case] args: &[&str], #[case] clean: bool, #[case] targets: Targets) {
        let config = parse(args);

        assert_eq!(clean, config.plan.clean);
        assert_eq!(targets, config.plan.targets);
    }

    #[rstest]
    fn options() {
        let config = parse(&["--output-dir", "brand", "--timeout", "3", "-vv"]);

        assert_eq!(PathBuf::from("brand"), config.output_dir);
        assert_eq!(Duration::from_secs(3), config.download_timeout);
        assert_eq!(LevelFilter::Trace, config.verbosity);
    }

    #[rstest]
    fn help_lists_environment() {
        let help = command().render_long_help().to_string();

        assert!(help.contains("--styles-only"));
        assert!(help.contains("CUSTOM_SECONDARY_TEXT_COLOR"));
    }

    #[rstest]
    fn explicit_env_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "CUSTOMIZE_TEST_ONLY_VARIABLE=loaded").unwrap();
        let path = file.path().to_path_buf();
        let config = parse(&["--env-file", path.to_str().unwrap()]);

        assert_eq!(Some(path), config.load_env_file().unwrap());
        assert_eq!(
            "loaded",
            std::env::var("CUSTOMIZE_TEST_ONLY_VARIABLE").unwrap()
        );
    }

    #[rstest]
    fn missing_explicit_env_file() {
        let config = parse(&["--env-file", "/nonexistent/customize.env"]);

        assert!(config.load_env_file().is_err());
    }
}
