//! Form and filter struct skeletons.

/// Skeleton for `src/forms/<entity>.rs`: the payload struct accepted by the
/// create and update actions, with derived validation rules.
pub const FORM: &str = r##"//! Form payload for {{humanize_lc entity_name}} write actions.

use serde::Deserialize;
use validator::Validate;

/// Payload accepted by the create and update actions.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct {{entity_name}}Form {
{{#each fields}}
{{#if validation}}
    #[validate({{validation}})]
{{/if}}
    pub {{name}}: {{form_type}},
{{/each}}
}
"##;

/// Skeleton for `src/filters/<entity>.rs`: the all-optional criteria struct
/// applied to the list action when form filtering is enabled.
pub const FILTER: &str = r##"//! List filter for {{humanize_lc entity_plural}}.

use serde::Deserialize;

/// Optional criteria applied to the {{humanize_lc entity_name}} list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct {{entity_name}}Filter {
{{#each fields}}
    #[serde(default)]
    pub {{name}}: Option<{{rust_type}}>,
{{/each}}
}

impl {{entity_name}}Filter {
    /// True when no criterion is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        {{#each fields}}self.{{name}}.is_none(){{#unless @last}}
            && {{/unless}}{{/each}}
    }
}
"##;
