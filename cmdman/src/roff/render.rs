//! Template rendering for man pages.
//!
//! A [`ManRenderer`] wraps a `tera` instance holding one template named
//! [`TEMPLATE_NAME`], with the escaping helpers bound as filters.

use std::collections::HashMap;

use tera::{Context, Tera, Value};

use super::escape;
use crate::error::ManError;
use crate::page::PageModel;

/// Name under which the man page template is registered.
pub const TEMPLATE_NAME: &str = "man";

const BUILTIN_TEMPLATE: &str = include_str!("man.tera");

/// Where the man page template comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TemplateSource {
    /// The bundled `man(7)` template.
    #[default]
    Builtin,
    /// Caller-supplied template text.
    Custom(String),
}

impl TemplateSource {
    /// Returns the template text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Builtin => BUILTIN_TEMPLATE,
            Self::Custom(text) => text,
        }
    }
}

/// Parsed man page template with the escaping filters registered.
#[derive(Debug)]
pub struct ManRenderer {
    tera: Tera,
}

impl ManRenderer {
    /// Parses the template from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`ManError::TemplateParse`] when the template is malformed.
    pub fn new(source: &TemplateSource) -> Result<Self, ManError> {
        let mut tera = Tera::default();
        tera.autoescape_on(Vec::new());

        tera.register_filter("upper", string_filter("upper", str::to_uppercase));
        tera.register_filter("lower", string_filter("lower", str::to_lowercase));
        tera.register_filter(
            "backslashify",
            string_filter("backslashify", escape::backslashify),
        );
        tera.register_filter("dashify", string_filter("dashify", escape::dashify));
        tera.register_filter("quote_arg", string_filter("quote_arg", escape::quote_arg));
        tera.register_filter(
            "simple_to_troff",
            string_filter("simple_to_troff", escape::simple_to_troff),
        );
        tera.register_filter(
            "simple_to_mdoc",
            string_filter("simple_to_mdoc", escape::simple_to_mdoc),
        );

        tera.add_raw_template(TEMPLATE_NAME, source.text())
            .map_err(|parse_err| ManError::TemplateParse { source: parse_err })?;
        tracing::debug!(
            builtin = matches!(source, TemplateSource::Builtin),
            "parsed man page template"
        );

        Ok(Self { tera })
    }

    /// Renders `page` into a complete man page.
    ///
    /// # Errors
    ///
    /// Returns [`ManError::TemplateRender`] when the template references an
    /// unknown field or filter, or a filter rejects its input.
    pub fn render(&self, page: &PageModel) -> Result<String, ManError> {
        let render_error = |source| ManError::TemplateRender {
            command: page.command_path.clone(),
            source,
        };
        let context = Context::from_serialize(page).map_err(render_error)?;
        self.tera
            .render(TEMPLATE_NAME, &context)
            .map_err(render_error)
    }
}

type FilterResult = tera::Result<Value>;

fn string_filter(
    name: &'static str,
    transform: fn(&str) -> String,
) -> impl Fn(&Value, &HashMap<String, Value>) -> FilterResult + Send + Sync {
    move |value, _args| match value {
        Value::String(text) => Ok(Value::String(transform(text))),
        Value::Null => Ok(Value::String(String::new())),
        other => Err(tera::Error::msg(format!(
            "{name} filter expects a string, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn apply(name: &'static str, transform: fn(&str) -> String, input: &str) -> String {
        let filter = string_filter(name, transform);
        let value = filter(&Value::String(input.to_owned()), &HashMap::new()).expect("filter");
        value.as_str().expect("string").to_owned()
    }

    #[rstest]
    #[case("upper", str::to_uppercase as fn(&str) -> String, "app sub", "APP SUB")]
    #[case("lower", str::to_lowercase as fn(&str) -> String, "APP", "app")]
    #[case("dashify", escape::dashify as fn(&str) -> String, "a-b", "a\\-b")]
    fn filters_transform_strings(
        #[case] name: &'static str,
        #[case] transform: fn(&str) -> String,
        #[case] input: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(apply(name, transform, input), expected);
    }

    #[rstest]
    fn filters_reject_non_strings() {
        let filter = string_filter("upper", str::to_uppercase);
        let err = filter(&Value::Bool(true), &HashMap::new()).expect_err("bool input");
        assert!(err.to_string().contains("upper filter expects a string"));
    }

    #[rstest]
    fn malformed_templates_fail_to_parse() {
        let err = ManRenderer::new(&TemplateSource::Custom("{% if %}".to_owned()))
            .expect_err("malformed template");
        assert!(matches!(err, ManError::TemplateParse { .. }));
    }

    #[rstest]
    fn builtin_template_parses() {
        assert!(ManRenderer::new(&TemplateSource::Builtin).is_ok());
    }
}
