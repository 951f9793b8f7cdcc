use super::defaults;

/// Colors and switches substituted into the generated stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub primary_color: String,
    pub secondary_color: String,
    pub red_color: String,
    pub green_color: String,
    pub text_muted_color: String,
    pub secondary_background_color: String,
    pub secondary_text_color: String,
    pub force_link_underline: bool,
    pub lighter_primary_hover: bool,
    pub lighter_secondary_hover: bool,
    pub header_logo: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_lookup(&|_: &str| None)
    }
}

impl Theme {
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let color = |key: &str, default: fn() -> String| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(default)
        };
        let flag = |key: &str| to_boolean(lookup(key).as_deref());

        Self {
            primary_color: color("CUSTOM_PRIMARY_COLOR", defaults::primary_color),
            secondary_color: color("CUSTOM_SECONDARY_COLOR", defaults::secondary_color),
            red_color: color("CUSTOM_RED_COLOR", defaults::red_color),
            green_color: color("CUSTOM_GREEN_COLOR", defaults::green_color),
            text_muted_color: color("CUSTOM_TEXT_MUTED_COLOR", defaults::text_muted_color),
            secondary_background_color: color(
                "CUSTOM_SECONDARY_BACKGROUND_COLOR",
                defaults::secondary_background_color,
            ),
            secondary_text_color: color(
                "CUSTOM_SECONDARY_TEXT_COLOR",
                defaults::secondary_text_color,
            ),
            force_link_underline: flag("CUSTOM_FORCE_LINK_UNDERLINE"),
            lighter_primary_hover: flag("CUSTOM_LIGHTER_PRIMARY_HOVER"),
            lighter_secondary_hover: flag("CUSTOM_LIGHTER_SECONDARY_HOVER"),
            header_logo: flag("CUSTOM_HEADER_LOGO"),
        }
    }

    /// Colors paired with the variable that sets them, in validation order.
    pub fn colors(&self) -> [(&'static str, &str); 7] {
        [
            ("CUSTOM_PRIMARY_COLOR", &self.primary_color),
            ("CUSTOM_SECONDARY_COLOR", &self.secondary_color),
            ("CUSTOM_RED_COLOR", &self.red_color),
            ("CUSTOM_GREEN_COLOR", &self.green_color),
            ("CUSTOM_TEXT_MUTED_COLOR", &self.text_muted_color),
            (
                "CUSTOM_SECONDARY_BACKGROUND_COLOR",
                &self.secondary_background_color,
            ),
            ("CUSTOM_SECONDARY_TEXT_COLOR", &self.secondary_text_color),
        ]
    }
}

/// An unset switch is on. Any set value other than true/yes/1/on, including an empty one, is off.
pub fn to_boolean(value: Option<&str>) -> bool {
    match value {
        Some(value) => ["true", "yes", "1", "on"]
            .iter()
            .any(|truthy| value.eq_ignore_ascii_case(truthy)),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("true"), true)]
    #[case(Some("TRUE"), true)]
    #[case(Some("Yes"), true)]
    #[case(Some("1"), true)]
    #[case(Some("on"), true)]
    #[case(Some("false"), false)]
    #[case(Some("0"), false)]
    #[case(Some("off"), false)]
    #[case(Some(""), false)]
    #[case(Some("enabled"), false)]
    #[case(None, true)]
    fn boolean_coercion(#[case] value: Option<&str>, #[case] expected: bool) {
        assert_eq!(expected, to_boolean(value));
    }

    #[rstest]
    fn defaults() {
        let theme = Theme::default();

        assert_eq!("#0a0d10", theme.primary_color);
        assert_eq!("#0a0d10", theme.secondary_color);
        assert_eq!("#d74949", theme.red_color);
        assert_eq!("#319236", theme.green_color);
        assert_eq!("#888", theme.text_muted_color);
        assert_eq!("#f1f1f1", theme.secondary_background_color);
        assert_eq!("#7a7a7a", theme.secondary_text_color);
        assert!(theme.force_link_underline);
        assert!(theme.lighter_primary_hover);
        assert!(theme.lighter_secondary_hover);
        assert!(theme.header_logo);
    }

    #[rstest]
    fn overrides() {
        let theme = Theme::from_lookup(&|key: &str| match key {
            "CUSTOM_PRIMARY_COLOR" => Some("#123456".to_string()),
            "CUSTOM_GREEN_COLOR" => Some(String::new()),
            "CUSTOM_HEADER_LOGO" => Some("no".to_string()),
            _ => None,
        });

        assert_eq!("#123456", theme.primary_color);
        assert_eq!("#319236", theme.green_color);
        assert!(!theme.header_logo);
        assert!(theme.force_link_underline);
    }
}
