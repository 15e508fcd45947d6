use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A value placed between two fragments of a template definition.
///
/// `text` and `number` are folded into the static text when the template is
/// normalized. The remaining kinds are re-evaluated on every render.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ValueDefinition {
    Text(String),
    Number(serde_yaml::Number),
    Env(String),
    Counter {
        #[serde(default)]
        start: i64,
        #[serde(default = "default_step")]
        step: i64,
    },
    ElapsedMs,
}

fn default_step() -> i64 {
    1
}

impl ValueDefinition {
    pub fn is_dynamic(&self) -> bool {
        matches!(
            self,
            Self::Env(_) | Self::Counter { .. } | Self::ElapsedMs
        )
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct TemplateDefinition {
    pub id: String,
    pub description: Option<String>,
    pub fragments: Vec<String>,
    #[serde(default)]
    pub values: Vec<ValueDefinition>,
}

impl Display for TemplateDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.description {
            Some(desc) => write!(formatter, "{} ({})", self.id, desc),
            None => formatter.write_str(&self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_definitions_from_yaml() {
        let yaml = r#"
- text: "nightly"
- number: 42
- env: USER
- counter: { start: 5 }
- elapsed_ms
"#;
        let values: Vec<ValueDefinition> = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(values[0], ValueDefinition::Text("nightly".to_string()));
        assert_eq!(values[1], ValueDefinition::Number(42_i64.into()));
        assert_eq!(values[2], ValueDefinition::Env("USER".to_string()));
        assert_eq!(values[3], ValueDefinition::Counter { start: 5, step: 1 });
        assert_eq!(values[4], ValueDefinition::ElapsedMs);
    }

    #[test]
    fn test_is_dynamic() {
        assert!(!ValueDefinition::Text("a".to_string()).is_dynamic());
        assert!(!ValueDefinition::Number(1_i64.into()).is_dynamic());
        assert!(ValueDefinition::Env("HOME".to_string()).is_dynamic());
        assert!(ValueDefinition::Counter { start: 0, step: 1 }.is_dynamic());
        assert!(ValueDefinition::ElapsedMs.is_dynamic());
    }

    #[test]
    fn test_display_with_and_without_description() {
        let mut definition = TemplateDefinition {
            id: "status".to_string(),
            description: Some("Status line".to_string()),
            fragments: vec!["plain".to_string()],
            values: vec![],
        };
        assert_eq!(format!("{definition}"), "status (Status line)");

        definition.description = None;
        assert_eq!(format!("{definition}"), "status");
    }
}
