use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum BuildiumError {
    Network(String),
    Api(String),
    Deserialize(String),
}

impl fmt::Display for BuildiumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildiumError::Network(msg) => write!(f, "Network error: {msg}"),
            BuildiumError::Api(msg) => write!(f, "Buildium API error: {msg}"),
            BuildiumError::Deserialize(msg) => write!(f, "Deserialize error: {msg}"),
        }
    }
}

impl Error for BuildiumError {}
