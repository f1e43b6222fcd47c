//! The type model: every inferred class with its typed fields.
//!
//! Classes keep discovery order (depth-first, root first), fields keep source
//! key order. Redefining a class keeps its original position but replaces its
//! fields wholesale.
use indexmap::IndexMap;
use serde::Serialize;

/// Field name → type name, in source key order.
pub type Fields = IndexMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TypeModel {
    classes: IndexMap<String, Fields>,
}

impl TypeModel {
    pub fn new() -> Self { Self::default() }

    /// Register `name` with no fields. Returns the fields of a previous class
    /// with the same name, which are discarded (last write wins).
    pub fn define_class(&mut self, name: &str) -> Option<Fields> {
        self.classes.insert(name.to_string(), Fields::new())
    }

    /// Record a field on an already defined class; `false` if the class is unknown.
    pub fn set_field(&mut self, class: &str, field: &str, ty: String) -> bool {
        match self.classes.get_mut(class) {
            Some(fields) => {
                fields.insert(field.to_string(), ty);
                true
            }
            None => false,
        }
    }

    pub fn fields(&self, class: &str) -> Option<&Fields> { self.classes.get(class) }

    pub fn contains(&self, class: &str) -> bool { self.classes.contains_key(class) }

    pub fn classes(&self) -> impl Iterator<Item = (&str, &Fields)> {
        self.classes.iter().map(|(name, fields)| (name.as_str(), fields))
    }

    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    /// Every field type of every class, in model order.
    pub fn field_types(&self) -> impl Iterator<Item = &str> {
        self.classes.values().flat_map(|fields| fields.values().map(String::as_str))
    }

    /// Classes with their fields as ordered pairs. `==` on the model compares
    /// as maps and ignores order; this does not.
    pub fn ordered(&self) -> Vec<(&str, Vec<(&str, &str)>)> {
        self.classes()
            .map(|(class, fields)| {
                (class, fields.iter().map(|(name, ty)| (name.as_str(), ty.as_str())).collect())
            })
            .collect()
    }

    pub fn len(&self) -> usize { self.classes.len() }

    pub fn is_empty(&self) -> bool { self.classes.is_empty() }
}

/// File stem for a class: the name with its first character lower-cased.
/// `User` and `user` share a stem; nothing guards against that.
pub fn file_stem(class: &str) -> String {
    let mut chars = class.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_and_fields_keep_insertion_order() {
        let mut model = TypeModel::new();
        model.define_class("Root");
        model.define_class("Zeta");
        model.define_class("Alpha");
        model.set_field("Root", "z", "int".into());
        model.set_field("Root", "a", "str".into());

        assert_eq!(model.class_names().collect::<Vec<_>>(), ["Root", "Zeta", "Alpha"]);
        let fields = model.fields("Root").unwrap();
        assert_eq!(fields.keys().collect::<Vec<_>>(), ["z", "a"]);
    }

    #[test]
    fn redefining_replaces_fields_in_place() {
        let mut model = TypeModel::new();
        model.define_class("Item");
        model.set_field("Item", "old", "int".into());
        model.define_class("Other");

        let previous = model.define_class("Item").unwrap();
        assert_eq!(previous.get("old").map(String::as_str), Some("int"));
        assert!(model.fields("Item").unwrap().is_empty());
        assert_eq!(model.class_names().collect::<Vec<_>>(), ["Item", "Other"]);
    }

    #[test]
    fn fields_on_unknown_classes_are_rejected() {
        let mut model = TypeModel::new();
        assert!(!model.set_field("Ghost", "x", "int".into()));
        assert!(model.is_empty());
    }

    #[test]
    fn serializes_as_nested_maps() {
        let mut model = TypeModel::new();
        model.define_class("Root");
        model.set_field("Root", "user", "User".into());
        model.define_class("User");
        model.set_field("User", "name", "str".into());
        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(json, r#"{"Root":{"user":"User"},"User":{"name":"str"}}"#);
    }

    #[test]
    fn file_stems_lower_only_the_first_character() {
        assert_eq!(file_stem("UserProfile"), "userProfile");
        assert_eq!(file_stem("URL"), "uRL");
        assert_eq!(file_stem(""), "");
    }
}
