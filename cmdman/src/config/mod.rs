//! Generation settings shared by every page in a run.

mod layers;
mod text;

use camino::Utf8PathBuf;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::roff::TemplateSource;

pub use layers::{ConfigOverrides, load_config};

/// Manual section used when none is configured.
pub const DEFAULT_SECTION: &str = "1";
/// Separator replacing spaces in page filenames when none is configured.
pub const DEFAULT_SEPARATOR: &str = "-";

/// Caller-supplied settings for a man page run.
///
/// Text fields left unset or empty fall back to their defaults; the FILES,
/// BUGS and ENVIRONMENT texts apply to every page unless a command carries
/// its own annotation. `out_dir` has no default and must be supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManConfig {
    /// Manual section, `1` when unset.
    #[serde(default, deserialize_with = "text::optional_text")]
    pub section: Option<String>,
    /// Center footer; defaults to the page date as `Jan 2026`.
    #[serde(default, deserialize_with = "text::optional_text")]
    pub center_footer: Option<String>,
    /// Fixed page date; the clock is read when unset.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Left footer.
    #[serde(default, deserialize_with = "text::optional_text")]
    pub left_footer: Option<String>,
    /// Center header.
    #[serde(default, deserialize_with = "text::optional_text")]
    pub center_header: Option<String>,
    /// FILES section text for every page.
    #[serde(default, deserialize_with = "text::optional_text")]
    pub files: Option<String>,
    /// BUGS section text for every page.
    #[serde(default, deserialize_with = "text::optional_text")]
    pub bugs: Option<String>,
    /// ENVIRONMENT section text for every page.
    #[serde(default, deserialize_with = "text::optional_text")]
    pub environment: Option<String>,
    /// AUTHOR section text for every page.
    #[serde(default, deserialize_with = "text::optional_text")]
    pub author: Option<String>,
    /// Directory receiving the generated pages.
    pub out_dir: Utf8PathBuf,
    /// Separator replacing spaces in page filenames, `-` when unset.
    #[serde(default, deserialize_with = "text::optional_text")]
    pub command_separator: Option<String>,
    /// Template source replacing the bundled template.
    #[serde(default, deserialize_with = "text::optional_text")]
    pub template: Option<String>,
}

impl ManConfig {
    /// Creates a configuration writing pages into `out_dir`.
    #[must_use]
    pub fn new(out_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            section: None,
            center_footer: None,
            date: None,
            left_footer: None,
            center_header: None,
            files: None,
            bugs: None,
            environment: None,
            author: None,
            out_dir: out_dir.into(),
            command_separator: None,
            template: None,
        }
    }

    /// Returns the manual section, falling back to [`DEFAULT_SECTION`].
    #[must_use]
    pub fn section(&self) -> &str {
        non_empty(self.section.as_deref()).unwrap_or(DEFAULT_SECTION)
    }

    /// Returns the filename separator, falling back to [`DEFAULT_SEPARATOR`].
    #[must_use]
    pub fn separator(&self) -> &str {
        non_empty(self.command_separator.as_deref()).unwrap_or(DEFAULT_SEPARATOR)
    }

    /// Returns the template the renderer should parse.
    #[must_use]
    pub fn template_source(&self) -> TemplateSource {
        non_empty(self.template.as_deref())
            .map_or(TemplateSource::Builtin, |src| {
                TemplateSource::Custom(src.to_owned())
            })
    }

    /// Converts a command path into a page basename, or `None` when the
    /// path is empty.
    #[must_use]
    pub fn page_basename(&self, command_path: &str) -> Option<String> {
        let basename = command_path.replace(' ', self.separator());
        (!basename.is_empty()).then_some(basename)
    }
}

/// Treats empty strings like absent values.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_apply_to_unset_and_empty_values() {
        let mut config = ManConfig::new("/out");
        assert_eq!(config.section(), "1");
        assert_eq!(config.separator(), "-");

        config.section = Some(String::new());
        config.command_separator = Some(String::new());
        assert_eq!(config.section(), "1");
        assert_eq!(config.separator(), "-");
    }

    #[rstest]
    #[case("app sub", "-", Some("app-sub"))]
    #[case("app sub leaf", "_", Some("app_sub_leaf"))]
    #[case("app", "-", Some("app"))]
    #[case("", "-", None)]
    fn page_basename_replaces_spaces(
        #[case] path: &str,
        #[case] separator: &str,
        #[case] expected: Option<&str>,
    ) {
        let config = ManConfig {
            command_separator: Some(separator.to_owned()),
            ..ManConfig::new("/out")
        };
        assert_eq!(config.page_basename(path).as_deref(), expected);
    }

    #[rstest]
    fn template_source_prefers_custom_text() {
        let mut config = ManConfig::new("/out");
        assert_eq!(config.template_source(), TemplateSource::Builtin);
        config.template = Some("{{ command_path }}".to_owned());
        assert_eq!(
            config.template_source(),
            TemplateSource::Custom("{{ command_path }}".to_owned())
        );
    }
}
