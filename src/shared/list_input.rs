use serde::Deserialize;
use utoipa::ToSchema;

/// A list of strings that clients may send either as a JSON array or as one
/// comma separated string (`"Rust, Go"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum StringList {
    Many(Vec<String>),
    Joined(String),
}

impl StringList {
    /// Trimmed entries with empty ones dropped.
    pub fn into_vec(self) -> Vec<String> {
        let raw: Vec<String> = match self {
            StringList::Many(items) => items,
            StringList::Joined(joined) => joined.split(',').map(str::to_string).collect(),
        };

        raw.into_iter()
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect()
    }
}

impl Default for StringList {
    fn default() -> Self {
        StringList::Many(Vec::new())
    }
}
