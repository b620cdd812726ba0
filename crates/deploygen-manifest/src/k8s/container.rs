use serde::{Deserialize, Serialize};

/// A single `{name, value}` entry of a container's `env` list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnvVar {
    pub name: String,
    pub value: String,
}

impl EnvVar {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

/// Container env in declaration order. Duplicate names are kept.
pub type EnvList = Vec<EnvVar>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Container {
    pub name: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<EnvList>,
}

impl Container {
    pub fn new(name: &str, image: &str) -> Self {
        Self {
            name: name.to_string(),
            image: image.to_string(),
            env: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_container_has_no_env() {
        let container = Container::new("web", "nginx:latest");
        assert_eq!(container.name, "web");
        assert_eq!(container.image, "nginx:latest");
        assert!(container.env.is_none());
    }
}
