//! Names: raw JSON keys and scalar kinds → emitted type identifiers.
//!
//! Every dialect shares the same conversion rule and only differs in its
//! primitive table, its "unknown" fallback and its sequence syntax:
//! - a canonical scalar token (`string`, `integer`, `float`, `boolean`, `null`)
//!   becomes the dialect's native spelling;
//! - a name that already starts upper-case is taken as an existing class name;
//! - anything else is title-cased word by word with the separators dropped.
use serde_json::Value;

/// Runtime kind of a scalar JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    String,
    Integer,
    Float,
    Boolean,
    Null,
}

impl ScalarKind {
    /// `None` for arrays and objects.
    pub fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(Self::Null),
            Value::Bool(_) => Some(Self::Boolean),
            // serde_json keeps `1.0` as f64, so the literal decides, not the value
            Value::Number(n) if n.is_f64() => Some(Self::Float),
            Value::Number(_) => Some(Self::Integer),
            Value::String(_) => Some(Self::String),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Null => "null",
        }
    }

    pub fn from_token(raw: &str) -> Option<Self> {
        match raw {
            "string" => Some(Self::String),
            "integer" => Some(Self::Integer),
            "float" => Some(Self::Float),
            "boolean" => Some(Self::Boolean),
            "null" => Some(Self::Null),
            _ => None,
        }
    }
}

/// Dialect-specific spelling of type identifiers. Pure string transforms.
pub trait NameConverter {
    /// Native spelling of a scalar kind.
    fn primitive(&self, kind: ScalarKind) -> &'static str;

    /// Type emitted when there is nothing to sample (empty arrays, nulls).
    fn unknown_type(&self) -> &'static str;

    /// Wrap an element type in the dialect's sequence syntax.
    fn list_type_format(&self, element: &str) -> String;

    /// Convert a JSON key or a scalar kind token into a type identifier.
    ///
    /// Keys that collide with a scalar token (`{"string": {..}}`) resolve to
    /// the primitive; that is accepted best-effort naming, not an error.
    fn to_type_name(&self, raw: &str) -> String {
        if let Some(kind) = ScalarKind::from_token(raw) {
            return self.primitive(kind).to_string();
        }
        if raw.chars().next().is_some_and(char::is_uppercase) {
            return raw.to_string();
        }
        pascal_case(raw)
    }
}

/// Title-case every word and drop the separators: `user_id` → `UserId`.
///
/// A word starts at any letter that does not follow another letter, so digits
/// split words too (`address2line` → `Address2Line`). Letters inside a word are
/// lower-cased.
pub fn pascal_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_letter = false;
    for c in raw.chars() {
        if c.is_alphabetic() {
            if prev_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_letter = true;
        } else {
            if c.is_alphanumeric() {
                out.push(c);
            }
            prev_letter = false;
        }
    }
    out
}

/// Name for the element class of an array field, derived from the field's
/// type name by undoing the common English plural endings.
pub fn singular_name(type_name: &str) -> String {
    if let Some(stem) = type_name.strip_suffix("ies") {
        format!("{stem}y")
    } else if let Some(stem) = type_name.strip_suffix("es") {
        format!("{stem}e")
    } else if let Some(stem) = type_name.strip_suffix('s') {
        stem.to_string()
    } else {
        format!("{type_name}Item")
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    struct Fixture;

    impl NameConverter for Fixture {
        fn primitive(&self, kind: ScalarKind) -> &'static str {
            match kind {
                ScalarKind::String => "str",
                ScalarKind::Integer => "int",
                ScalarKind::Float => "float",
                ScalarKind::Boolean => "bool",
                ScalarKind::Null => self.unknown_type(),
            }
        }
        fn unknown_type(&self) -> &'static str { "Any" }
        fn list_type_format(&self, element: &str) -> String { format!("List[{element}]") }
    }

    #[test]
    fn scalar_kinds_follow_the_json_literal() {
        assert_eq!(ScalarKind::of(&json!("x")), Some(ScalarKind::String));
        assert_eq!(ScalarKind::of(&json!(3)), Some(ScalarKind::Integer));
        assert_eq!(ScalarKind::of(&json!(-3)), Some(ScalarKind::Integer));
        assert_eq!(ScalarKind::of(&json!(3.5)), Some(ScalarKind::Float));
        assert_eq!(ScalarKind::of(&serde_json::from_str::<Value>("1.0").unwrap()), Some(ScalarKind::Float));
        assert_eq!(ScalarKind::of(&json!(true)), Some(ScalarKind::Boolean));
        assert_eq!(ScalarKind::of(&json!(null)), Some(ScalarKind::Null));
        assert_eq!(ScalarKind::of(&json!([])), None);
        assert_eq!(ScalarKind::of(&json!({})), None);
    }

    #[test]
    fn tokens_map_to_primitives() {
        let names = Fixture;
        for kind in [ScalarKind::String, ScalarKind::Integer, ScalarKind::Float, ScalarKind::Boolean, ScalarKind::Null] {
            assert_eq!(names.to_type_name(kind.token()), names.primitive(kind));
        }
    }

    #[test]
    fn upper_case_names_are_kept() {
        let names = Fixture;
        assert_eq!(names.to_type_name("User"), "User");
        assert_eq!(names.to_type_name("HTTP_status"), "HTTP_status");
    }

    #[test]
    fn snake_case_becomes_pascal_case() {
        let names = Fixture;
        assert_eq!(names.to_type_name("spell"), "Spell");
        assert_eq!(names.to_type_name("user_profile"), "UserProfile");
        assert_eq!(names.to_type_name("first-name"), "FirstName");
        assert_eq!(names.to_type_name("address2line"), "Address2Line");
        assert_eq!(names.to_type_name("userName"), "Username");
        assert_eq!(names.to_type_name("root"), "Root");
    }

    #[test]
    fn separators_only_collapse_to_empty() {
        assert_eq!(pascal_case(""), "");
        assert_eq!(pascal_case("__"), "");
    }

    #[test]
    fn singular_names_undo_plurals() {
        assert_eq!(singular_name("Categories"), "Category");
        assert_eq!(singular_name("Names"), "Name");
        assert_eq!(singular_name("Tags"), "Tag");
        assert_eq!(singular_name("Data"), "DataItem");
        assert_eq!(singular_name("Sheep"), "SheepItem");
    }

    proptest! {
        #[test]
        fn pascal_case_of_snake_words_has_no_separators(words in proptest::collection::vec("[a-z]{1,8}", 1..5)) {
            let raw = words.join("_");
            let converted = Fixture.to_type_name(&raw);
            prop_assume!(ScalarKind::from_token(&raw).is_none());
            prop_assert!(!converted.contains('_'));
            prop_assert_eq!(converted.len(), raw.len() - (words.len() - 1));
            prop_assert!(converted.chars().next().is_some_and(char::is_uppercase));
        }

        #[test]
        fn converting_twice_is_stable(raw in "[a-z][a-z_]{0,12}") {
            prop_assume!(ScalarKind::from_token(&raw).is_none());
            let once = Fixture.to_type_name(&raw);
            prop_assume!(!once.is_empty());
            prop_assert_eq!(Fixture.to_type_name(&once), once.clone());
        }
    }
}
