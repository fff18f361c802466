use serde::{Deserialize, Serialize};

pub const DEFAULT_TOOL: &str = "pipenv";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct GlobalConfig {
    #[serde(default)]
    pub pipenv: PipenvConfig,
    #[serde(default)]
    pub shell: ShellConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct PipenvConfig {
    #[serde(default = "default_command")]
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workon_home: Option<String>,
}

impl Default for PipenvConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            workon_home: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ShellConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
}

fn default_command() -> String {
    DEFAULT_TOOL.to_string()
}
