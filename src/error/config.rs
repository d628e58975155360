use std::fmt::{ Display, Formatter };

#[derive(Debug)]
pub enum ConfigError {
    NotUnicode(String),
    InvalidJson { var: String, message: String },
}

impl ConfigError {
    pub fn not_unicode(var: &str) -> Self {
        ConfigError::NotUnicode(var.to_string())
    }

    pub fn json(var: &str, error: serde_json::Error) -> Self {
        ConfigError::InvalidJson {
            var: var.to_string(),
            message: error.to_string(),
        }
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotUnicode(var) => write!(f, "Environment variable {} is not valid unicode", var),
            ConfigError::InvalidJson { var, message } => write!(f, "Invalid JSON in {}: {}", var, message),
        }
    }
}

impl std::error::Error for ConfigError {}
