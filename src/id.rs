//! Code for handling IDs
macro_rules! define_id_type {
    ($name:ident) => {
        #[derive(
            Clone,
            std::hash::Hash,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            serde::Deserialize,
            Debug,
            serde::Serialize,
        )]
        /// An ID type (e.g. `CropType`, `MineralID`, etc.)
        pub struct $name(pub std::rc::Rc<str>);

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                $name(std::rc::Rc::from(s))
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                $name(std::rc::Rc::from(s))
            }
        }

        impl $name {
            /// Create a new ID from a string slice
            pub fn new(id: &str) -> Self {
                $name(std::rc::Rc::from(id))
            }
        }
    };
}
pub(crate) use define_id_type;

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    define_id_type!(GenericID);

    #[test]
    fn test_id_borrow_and_display() {
        let ids: HashSet<GenericID> = ["a".into(), "b".into()].into_iter().collect();
        assert!(ids.contains("a"));
        assert!(!ids.contains("c"));
        assert_eq!(GenericID::new("a").to_string(), "a");
    }

    #[test]
    fn test_id_deserialise() {
        #[derive(serde::Deserialize)]
        struct Row {
            id: GenericID,
        }

        let row: Row = toml::from_str("id = \"Onyx\"").unwrap();
        assert_eq!(row.id, "Onyx".into());
    }
}
