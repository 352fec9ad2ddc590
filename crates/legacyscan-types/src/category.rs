use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of deprecated repository object.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Table,
    Transaction,
    Program,
    Class,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Table,
        Category::Transaction,
        Category::Program,
        Category::Class,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Table => "TABLE",
            Category::Transaction => "TRANSACTION",
            Category::Program => "PROGRAM",
            Category::Class => "CLASS",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseCategoryError(pub String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown category: {} (expected table|transaction|program|class)",
            self.0
        )
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(Category::Table),
            "transaction" | "tcode" => Ok(Category::Transaction),
            "program" | "report" => Ok(Category::Program),
            "class" => Ok(Category::Class),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively_with_aliases() {
        assert_eq!("TABLE".parse::<Category>(), Ok(Category::Table));
        assert_eq!(" tcode ".parse::<Category>(), Ok(Category::Transaction));
        assert_eq!("Report".parse::<Category>(), Ok(Category::Program));
        assert!("view".parse::<Category>().is_err());
    }

    #[test]
    fn serializes_uppercase() {
        let json = serde_json::to_string(&Category::Table).expect("serialize");
        assert_eq!(json, "\"TABLE\"");
    }
}
