use serde::Deserialize;

/// Serialized form of a belongs-to registration.
///
/// ```
/// # use tether::RelationConfig;
/// let config: RelationConfig = serde_json::from_str(
///     r#"{ "model": "parent", "as": "owner", "foreignKey": "owner_id" }"#,
/// ).unwrap();
///
/// assert_eq!(config.alias.as_deref(), Some("owner"));
/// assert!(!config.immutable);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RelationConfig {
    /// Table name of the target model.
    pub model: String,

    #[serde(default, rename = "as")]
    pub alias: Option<String>,

    #[serde(default, alias = "foreign_key")]
    pub foreign_key: Option<String>,

    #[serde(default)]
    pub immutable: bool,
}

impl RelationConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            alias: None,
            foreign_key: None,
            immutable: false,
        }
    }
}
