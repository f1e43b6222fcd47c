//! Target dialects: how type names are spelled and how declarations are laid
//! out, one implementation per output language.
pub mod csharp;
pub mod python;
pub mod typescript;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::decorate::OptionalStyle;
use crate::error::ConfigError;
use crate::naming::NameConverter;

pub use csharp::CSharp;
pub use python::Python;
pub use typescript::TypeScript;

/// The closed set of supported output languages, chosen once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    TypeScript,
    CSharp,
}

impl Language {
    pub fn name(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::TypeScript => "typescript",
            Self::CSharp => "csharp",
        }
    }

    pub fn dialect(self) -> &'static dyn Dialect {
        match self {
            Self::Python => &Python,
            Self::TypeScript => &TypeScript,
            Self::CSharp => &CSharp,
        }
    }
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "python" | "py" => Ok(Self::Python),
            "typescript" | "ts" => Ok(Self::TypeScript),
            "csharp" | "cs" | "c#" => Ok(Self::CSharp),
            _ => Err(ConfigError::UnsupportedLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Line layout of one output language on top of its naming rules.
///
/// All methods produce bare lines; decoration (attributes, base classes,
/// optional wrappers) is layered on by a [`crate::decorate::Decorator`].
pub trait Dialect: NameConverter + Sync {
    /// This dialect seen through its naming rules alone.
    fn names(&self) -> &dyn NameConverter;

    /// Extension of generated files, without the dot.
    fn file_extension(&self) -> &'static str;

    fn class_header(&self, class: &str) -> String;

    /// Line between the header and the first field, for brace styles that
    /// open the body on its own line.
    fn class_open(&self) -> Option<&'static str> { None }

    fn class_close(&self) -> Option<&'static str> { None }

    fn property_line(&self, field: &str, ty: &str) -> String;

    /// Blank lines between two classes in a combined stream.
    fn class_spacing(&self) -> usize { 1 }

    /// Library imports needed by the given field types (empty if none).
    fn typing_imports(&self, types: &[&str]) -> Vec<String>;

    fn generic_delimiters(&self) -> (char, char);

    /// Import of another generated class living in `stem`, if the language
    /// needs one.
    fn class_import(&self, class: &str, stem: &str) -> Option<String>;

    /// Emit a blank line after a non-empty block of class imports.
    fn blank_after_class_imports(&self) -> bool { false }

    fn optional_style(&self) -> Option<OptionalStyle>;

    /// Strip one level of generic syntax: `List[User]` → `User`,
    /// `Array<Array<T>>` → `Array<T>`. Types without generics come back as is.
    fn unwrap_generic<'t>(&self, ty: &'t str) -> &'t str {
        let (open, close) = self.generic_delimiters();
        match (ty.find(open), ty.rfind(close)) {
            (Some(start), Some(end)) if start < end => &ty[start + open.len_utf8()..end],
            _ => ty,
        }
    }
}

// ------------------------------- Tests ------------------------------------ //
