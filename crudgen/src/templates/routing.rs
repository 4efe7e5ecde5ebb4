//! Routing manifest entry skeletons.

/// Entry appended to `config/routes.yaml`.
pub const ROUTING_YAML: &str = r#"{{entity_snake}}:
    resource: controllers::{{entity_snake}}
    prefix: /{{route_prefix}}
"#;

/// Entry appended to `config/routes.toml`.
pub const ROUTING_TOML: &str = r#"[routes.{{entity_snake}}]
resource = "controllers::{{entity_snake}}"
prefix = "/{{route_prefix}}"
"#;
