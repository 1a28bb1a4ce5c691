use serde::{Deserialize, Serialize};
use std::fmt;

/// An employee as loaded from the uploaded list. Immutable once loaded;
/// the position stays free text and is classified, not parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub full_name: String,
    pub position: String,
}

impl Employee {
    pub fn new(full_name: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            position: position.into(),
        }
    }

    /// Role derived from the position text.
    pub fn role(&self) -> Role {
        classify(&self.position)
    }
}

/// Coarse employee category governing which shift codes are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Manager,
    Service,
    Other,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Manager, Role::Service, Role::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Manager => "Manager",
            Role::Service => "Service",
            Role::Other => "Other",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Position keywords that mark a manager. Checked before the service
/// keywords; the categories are not mutually exclusive in free text and
/// first match wins.
const MANAGER_TOKENS: [&str; 2] = ["quan ly", "manager"];
const SERVICE_TOKENS: [&str; 2] = ["phuc vu", "service"];

/// Classify a free-text position string into a [`Role`].
///
/// Total and pure: matching is case- and diacritic-insensitive substring
/// search ("Quản lý", "quan ly" and "QUẢN LÝ" all classify as manager),
/// and anything unmatched falls through to [`Role::Other`].
pub fn classify(position: &str) -> Role {
    let folded = fold_diacritics(position);
    if MANAGER_TOKENS.iter().any(|token| folded.contains(token)) {
        return Role::Manager;
    }
    if SERVICE_TOKENS.iter().any(|token| folded.contains(token)) {
        return Role::Service;
    }
    Role::Other
}

/// Lowercase and strip Vietnamese diacritics so keyword matching does not
/// depend on how the position text was typed.
fn fold_diacritics(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(fold_char)
        .collect()
}

fn fold_char(c: char) -> char {
    match c {
        'à' | 'á' | 'ả' | 'ã' | 'ạ' | 'ă' | 'ằ' | 'ắ' | 'ẳ' | 'ẵ' | 'ặ' | 'â' | 'ầ' | 'ấ' | 'ẩ'
        | 'ẫ' | 'ậ' => 'a',
        'è' | 'é' | 'ẻ' | 'ẽ' | 'ẹ' | 'ê' | 'ề' | 'ế' | 'ể' | 'ễ' | 'ệ' => 'e',
        'ì' | 'í' | 'ỉ' | 'ĩ' | 'ị' => 'i',
        'ò' | 'ó' | 'ỏ' | 'õ' | 'ọ' | 'ô' | 'ồ' | 'ố' | 'ổ' | 'ỗ' | 'ộ' | 'ơ' | 'ờ' | 'ớ' | 'ở'
        | 'ỡ' | 'ợ' => 'o',
        'ù' | 'ú' | 'ủ' | 'ũ' | 'ụ' | 'ư' | 'ừ' | 'ứ' | 'ử' | 'ữ' | 'ự' => 'u',
        'ỳ' | 'ý' | 'ỷ' | 'ỹ' | 'ỵ' => 'y',
        'đ' => 'd',
        other => other,
    }
}
