//! Generator configuration.
//!
//! One struct enumerates every option the generators recognize; the CLI
//! resolves flags and wizard answers into a [`CrudConfig`] and passes it by
//! reference into the generator functions. The closed option sets are real
//! enums, matched exhaustively wherever they are consumed.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Base template generated views extend unless overridden.
pub const DEFAULT_BASE_TEMPLATE: &str = "layouts/base.html";

/// Error returned when an option value is not one of the recognized tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized value '{value}' (expected one of: {expected})")]
pub struct ParseOptionError {
    value: String,
    expected: &'static str,
}

/// Filtering flavor generated for the list view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum FilterType {
    /// Typed filter form with one optional criterion per field (default)
    #[default]
    Form,
    /// Single search input matched against the entity's text fields
    Input,
    /// No filtering UI at all
    None,
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::Form => "form",
            Self::Input => "input",
            Self::None => "none",
        };
        f.write_str(token)
    }
}

impl FromStr for FilterType {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "form" => Ok(Self::Form),
            "input" => Ok(Self::Input),
            "none" => Ok(Self::None),
            other => Err(ParseOptionError {
                value: other.to_string(),
                expected: "form, input, none",
            }),
        }
    }
}

/// Where generated routes are declared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum RouteFormat {
    /// Routes live beside the controller, as its `router()` function (default)
    #[default]
    Annotation,
    /// A `config/routes.yaml` manifest additionally records the mount
    Yaml,
    /// A `config/routes.toml` manifest additionally records the mount
    Toml,
}

impl fmt::Display for RouteFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::Annotation => "annotation",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
        };
        f.write_str(token)
    }
}

impl FromStr for RouteFormat {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "annotation" => Ok(Self::Annotation),
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            other => Err(ParseOptionError {
                value: other.to_string(),
                expected: "annotation, yaml, toml",
            }),
        }
    }
}

/// Every option the CRUD generator recognizes, resolved before generation.
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct CrudConfig {
    /// Route prefix all actions are mounted under, without a leading slash.
    /// Empty means "use the entity's snake_case name".
    pub route_prefix: String,
    /// Base template the generated views extend
    pub base_template: String,
    /// Routing artifact format
    pub format: RouteFormat,
    /// Replace existing files without asking
    pub overwrite: bool,
    /// Store view files next to the module instead of under `templates/`
    pub module_views: bool,
    /// Skip the new, create, edit, update and delete actions
    pub without_write: bool,
    /// Skip the show action and view
    pub without_show: bool,
    /// Skip bulk delete actions
    pub without_bulk: bool,
    /// Filtering flavor for the list view
    pub filter_type: FilterType,
}

impl Default for CrudConfig {
    fn default() -> Self {
        Self {
            route_prefix: String::new(),
            base_template: DEFAULT_BASE_TEMPLATE.to_string(),
            format: RouteFormat::default(),
            overwrite: false,
            module_views: false,
            without_write: false,
            without_show: false,
            without_bulk: false,
            filter_type: FilterType::default(),
        }
    }
}

impl CrudConfig {
    /// Whether the write actions (new, create, edit, update, delete) are
    /// generated.
    #[must_use]
    pub const fn with_write(&self) -> bool {
        !self.without_write
    }

    /// Whether the show action is generated.
    #[must_use]
    pub const fn with_show(&self) -> bool {
        !self.without_show
    }

    /// Whether bulk delete actions are generated. Bulk actions only exist
    /// alongside the write actions.
    #[must_use]
    pub const fn with_bulk(&self) -> bool {
        !self.without_bulk && !self.without_write
    }

    /// Route prefix to mount under, falling back to `default_prefix` when
    /// unset and normalized to carry no leading slash.
    #[must_use]
    pub fn resolved_prefix(&self, default_prefix: &str) -> String {
        let prefix = if self.route_prefix.is_empty() {
            default_prefix
        } else {
            &self.route_prefix
        };
        prefix.trim_start_matches('/').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_type_parses_known_tokens() {
        assert_eq!("form".parse::<FilterType>().unwrap(), FilterType::Form);
        assert_eq!("Input".parse::<FilterType>().unwrap(), FilterType::Input);
        assert_eq!(" none ".parse::<FilterType>().unwrap(), FilterType::None);
        assert!("fancy".parse::<FilterType>().is_err());
    }

    #[test]
    fn route_format_parses_known_tokens() {
        assert_eq!(
            "annotation".parse::<RouteFormat>().unwrap(),
            RouteFormat::Annotation
        );
        assert_eq!("yml".parse::<RouteFormat>().unwrap(), RouteFormat::Yaml);
        assert_eq!("toml".parse::<RouteFormat>().unwrap(), RouteFormat::Toml);
        assert!("xml".parse::<RouteFormat>().is_err());
    }

    #[test]
    fn parse_errors_name_the_expected_tokens() {
        let err = "fancy".parse::<FilterType>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unrecognized value 'fancy' (expected one of: form, input, none)"
        );
    }

    #[test]
    fn bulk_requires_write_actions() {
        let config = CrudConfig {
            without_write: true,
            ..CrudConfig::default()
        };
        assert!(!config.with_bulk());

        let config = CrudConfig::default();
        assert!(config.with_bulk());
    }

    #[test]
    fn prefix_resolution_strips_leading_slashes() {
        let config = CrudConfig::default();
        assert_eq!(config.resolved_prefix("post"), "post");

        let config = CrudConfig {
            route_prefix: "/admin/posts".to_string(),
            ..CrudConfig::default()
        };
        assert_eq!(config.resolved_prefix("post"), "admin/posts");
    }
}
