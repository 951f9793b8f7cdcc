use crate::{config::Theme, ConfigError, Error, Layout, HEADER};
use regex::Regex;
use std::sync::LazyLock;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^#(?:[0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$").unwrap());

pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

/// Stops at the first color that is not `#RGB` or `#RRGGBB`.
pub fn validate(theme: &Theme) -> Result<(), ConfigError> {
    for (name, value) in theme.colors() {
        if !is_hex_color(value) {
            return Err(ConfigError::InvalidColor {
                name,
                value: value.to_string(),
            });
        }
    }

    Ok(())
}

pub fn render_definitions(theme: &Theme) -> String {
    format!(
        r#"@use "sass:color";

// Override theme colors for Bootstrap.
// These are defined before the imports below for use in the application's own SCSS.

// For Bootstrap components, the overrides are made in the frontend's styles/app.scss.
// If you want to override more colors, you'll also need to add them to the @use there.

// CUSTOMIZED COLORS - Generated by customize
$primary: {primary} !default;
$secondary: {secondary} !default;
$red: {red} !default; // further assigned to $danger by Bootstrap
$green: {green} !default; // further assigned to $success by Bootstrap
$text-muted: {text_muted} !default;

// Links are impossible to see with dark primary colors.
// You can disable this if you use something light.
$force-link-underline: {force_link_underline} !default;

// Default button hover color logic doesn't work with dark primary colors.
// You can disable this if you use something light.
$lighter-primary-hover: {lighter_primary_hover} !default;
$lighter-secondary-hover: {lighter_secondary_hover} !default;

// Additional colors, only used by the application's own SCSS.

$secondary-background: {secondary_background} !default;
$secondary-text-color: {secondary_text} !default;

// If you don't want a header logo, set this to false.
$header-logo: {header_logo} !default;

// Import Bootstrap core mixins/variables/functions for use in the application's own SCSS.

@import "bootstrap/scss/functions";
@import "bootstrap/scss/variables";
@import "bootstrap/scss/mixins";

// Colors for signup states. You can use Bootstrap variables here.

$signup-state-not-opened: $body-color !default;
$signup-state-opened: $green !default;
$signup-state-closed: $red !default;
$signup-state-disabled: color.change($body-color, $alpha: 0.45) !default;
"#,
        primary = theme.primary_color,
        secondary = theme.secondary_color,
        red = theme.red_color,
        green = theme.green_color,
        text_muted = theme.text_muted_color,
        force_link_underline = theme.force_link_underline,
        lighter_primary_hover = theme.lighter_primary_hover,
        lighter_secondary_hover = theme.lighter_secondary_hover,
        secondary_background = theme.secondary_background_color,
        secondary_text = theme.secondary_text_color,
        header_logo = theme.header_logo,
    )
}

/// Report of every value going into the stylesheet, colors first.
fn resolved_values(theme: &Theme) -> Vec<String> {
    let colors = [
        ("Primary", &theme.primary_color),
        ("Secondary", &theme.secondary_color),
        ("Red", &theme.red_color),
        ("Green", &theme.green_color),
        ("Text Muted", &theme.text_muted_color),
        ("Secondary Background", &theme.secondary_background_color),
        ("Secondary Text", &theme.secondary_text_color),
    ];
    let switches = [
        ("Force Link Underline", theme.force_link_underline),
        ("Lighter Primary Hover", theme.lighter_primary_hover),
        ("Lighter Secondary Hover", theme.lighter_secondary_hover),
        ("Header Logo", theme.header_logo),
    ];

    let mut lines = vec!["Using colors:".to_string()];
    lines.extend(colors.iter().map(|(label, value)| format!("  {label}: {value}")));
    lines.push("Using switches:".to_string());
    lines.extend(switches.iter().map(|(label, value)| format!("  {label}: {value}")));

    lines
}

/// Validates the theme and writes `_definitions.scss`.
pub async fn generate_styles(theme: &Theme, layout: &Layout) -> Result<(), Error> {
    info!(target: HEADER, "Generating custom styles...");

    let output_dir = layout.styles_dir();
    tokio::fs::create_dir_all(&output_dir)
        .await
        .map_err(Error::filesystem(&output_dir))?;

    validate(theme)?;

    for line in resolved_values(theme) {
        info!("{line}");
    }

    let contents = render_definitions(theme);
    let output_file = layout.definitions_file();
    tokio::fs::write(&output_file, &contents)
        .await
        .map_err(Error::filesystem(&output_file))?;

    info!(
        "Custom _definitions.scss generated successfully at: {}",
        output_file.display()
    );
    info!("File size: {} bytes", contents.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    #[rstest]
    #[case("#fff")]
    #[case("#FFF")]
    #[case("#0a0d10")]
    #[case("#A1b2C3")]
    fn accepts_hex_colors(#[case] value: &str) {
        assert!(is_hex_color(value));
    }

    #[rstest]
    #[case("")]
    #[case("fff")]
    #[case("#ff")]
    #[case("#ffff")]
    #[case("#fffffff")]
    #[case("#ggg")]
    #[case(" #fff")]
    #[case("#fff\n")]
    #[case("red")]
    fn rejects_other_strings(#[case] value: &str) {
        assert!(!is_hex_color(value));
    }

    #[rstest]
    fn unset_switches_render_true() {
        let rendered = render_definitions(&Theme::default());

        assert!(rendered.contains("$force-link-underline: true !default;"));
        assert!(rendered.contains("$header-logo: true !default;"));
        assert!(rendered.contains("$primary: #0a0d10 !default;"));
        assert!(rendered.contains("$text-muted: #888 !default;"));
    }

    #[rstest]
    fn values_are_substituted_verbatim() {
        let theme = Theme {
            primary_color: "#ABC".to_string(),
            lighter_secondary_hover: false,
            ..Theme::default()
        };

        let rendered = render_definitions(&theme);

        assert!(rendered.contains("$primary: #ABC !default;"));
        assert!(rendered.contains("$lighter-secondary-hover: false !default;"));
        assert!(rendered.contains("$lighter-primary-hover: true !default;"));
    }

    #[rstest]
    fn reports_colors_and_switches() {
        let theme = Theme {
            header_logo: false,
            ..Theme::default()
        };

        let lines = resolved_values(&theme);

        assert_eq!("Using colors:", lines[0]);
        assert_eq!("  Primary: #0a0d10", lines[1]);
        assert_eq!("  Secondary Text: #7a7a7a", lines[7]);
        assert_eq!("Using switches:", lines[8]);
        assert_eq!("  Force Link Underline: true", lines[9]);
        assert_eq!("  Header Logo: false", lines[12]);
        assert_eq!(13, lines.len());
    }

    #[tokio::test]
    async fn writes_definitions() {
        let dir = TempDir::new().unwrap();
        let layout = Layout::new(dir.path());

        generate_styles(&Theme::default(), &layout).await.unwrap();

        let written = std::fs::read_to_string(layout.definitions_file()).unwrap();
        assert_eq!(render_definitions(&Theme::default()), written);
    }

    #[tokio::test]
    async fn invalid_color_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let layout = Layout::new(dir.path());
        let theme = Theme {
            green_color: "#12345".to_string(),
            secondary_text_color: "nope".to_string(),
            ..Theme::default()
        };

        let result = generate_styles(&theme, &layout).await;

        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidColor {
                name: "CUSTOM_GREEN_COLOR",
                ..
            }))
        ));
        assert!(!layout.definitions_file().exists());
    }
}
