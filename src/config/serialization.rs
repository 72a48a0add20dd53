//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render this config as a commented TOML file
    pub fn to_toml(&self) -> String {
        let locale = match &self.locale {
            Some(name) => format!("locale = {:?}\n", name),
            None => "# locale = \"en\"\n".to_string(),
        };

        format!(
            r#"# numfmt configuration
# Precedence: command line > environment (NUMFMT_*) > this file > defaults

# Locale for digit grouping and decimal marks ("en", "de", "en-IN", "de_CH.UTF-8").
# Unset means the host locale from LC_ALL, LC_NUMERIC or LANG.
{locale}
# Maximum fraction digits; trailing zeros are always dropped
precision = {precision}

# Abbreviate thousands and millions ("1.5K", "2.5M")
abbreviate = {abbreviate}

[logging]
# trace, debug, info, warn, error (RUST_LOG overrides)
level = {level:?}
# "text" or "json"
format = "{format}"
"#,
            locale = locale,
            precision = self.precision,
            abbreviate = self.abbreviate,
            level = self.logging.level,
            format = self.logging.format.as_str(),
        )
    }
}
