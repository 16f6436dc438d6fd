//! Category → subcategory map backing the exercise filter flyouts.
//!
//! The menu is supplied by the page after it fetches categories from the
//! backend. Bad entries are dropped rather than reported: blank names vanish,
//! repeated categories merge, repeated subcategories keep their first
//! position. A menu with nothing usable is simply empty.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("invalid category menu json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub subcategories: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Category>", into = "Vec<Category>")]
pub struct CategoryMenu {
    categories: Vec<Category>,
}

impl From<Vec<Category>> for CategoryMenu {
    fn from(raw: Vec<Category>) -> Self {
        let mut menu = CategoryMenu::new();
        for c in raw {
            menu.insert(c.name, c.subcategories);
        }
        menu
    }
}

impl From<CategoryMenu> for Vec<Category> {
    fn from(menu: CategoryMenu) -> Self {
        menu.categories
    }
}

impl CategoryMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, C, S, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (C, S)>,
        C: Into<String>,
        S: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut menu = CategoryMenu::new();
        for (name, subs) in pairs {
            menu.insert(name, subs);
        }
        menu
    }

    /// Accepts either an array of `{ "name", "subcategories" }` objects or an
    /// object mapping category names to arrays of names. Elements of the wrong
    /// shape are skipped; only unparseable JSON is an error.
    pub fn from_json(json: &str) -> Result<Self, MenuError> {
        let value: Value = serde_json::from_str(json)?;
        let mut menu = CategoryMenu::new();
        match value {
            Value::Array(items) => {
                for item in items {
                    match serde_json::from_value::<Category>(item) {
                        Ok(c) => menu.insert(c.name, c.subcategories),
                        Err(e) => log::debug!("menu: skipping malformed category entry: {e}"),
                    }
                }
            }
            Value::Object(map) => {
                for (name, subs) in map {
                    let subs: Vec<String> = match subs {
                        Value::Array(subs) => subs
                            .into_iter()
                            .filter_map(|s| s.as_str().map(str::to_owned))
                            .collect(),
                        _ => Vec::new(),
                    };
                    menu.insert(name, subs);
                }
            }
            other => log::debug!("menu: expected array or object, got {other}"),
        }
        Ok(menu)
    }

    pub fn insert<C, S, T>(&mut self, name: C, subcategories: S)
    where
        C: Into<String>,
        S: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let name = name.into().trim().to_owned();
        if name.is_empty() {
            return;
        }
        let idx = match self.categories.iter().position(|c| c.name == name) {
            Some(idx) => idx,
            None => {
                self.categories.push(Category {
                    name,
                    subcategories: Vec::new(),
                });
                self.categories.len() - 1
            }
        };
        let subs = &mut self.categories[idx].subcategories;
        for sub in subcategories {
            let sub = sub.into().trim().to_owned();
            if !sub.is_empty() && !subs.contains(&sub) {
                subs.push(sub);
            }
        }
    }

    pub fn subcategories(&self, category: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.subcategories.as_slice())
    }

    pub fn contains(&self, category: &str) -> bool {
        self.subcategories(category).is_some()
    }

    pub fn contains_subcategory(&self, category: &str, subcategory: &str) -> bool {
        self.subcategories(category)
            .is_some_and(|subs| subs.iter().any(|s| s == subcategory))
    }

    /// A category only gets a flyout when it has something to show in it.
    pub fn is_openable(&self, category: &str) -> bool {
        self.subcategories(category)
            .is_some_and(|subs| !subs.is_empty())
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_names_and_duplicates() {
        let menu = CategoryMenu::from_pairs([
            (" Strength ", vec!["Legs", "Arms", "Legs", "  "]),
            ("", vec!["orphan"]),
            ("Strength", vec!["Core", "Arms"]),
            ("Balance", vec![]),
        ]);

        assert_eq!(menu.len(), 2);
        assert_eq!(
            menu.subcategories("Strength").unwrap(),
            &["Legs", "Arms", "Core"]
        );
        assert!(menu.contains("Balance"));
        assert!(!menu.is_openable("Balance"));
        assert!(menu.is_openable("Strength"));
        assert!(menu.contains_subcategory("Strength", "Core"));
        assert!(!menu.contains_subcategory("Strength", "Neck"));
    }

    #[test]
    fn test_parses_array_form_and_skips_bad_entries() {
        let json = r#"[
            { "name": "Mobility", "subcategories": ["Hip", "Shoulder"] },
            { "title": "no name field" },
            { "name": "Cardio" }
        ]"#;
        let menu = CategoryMenu::from_json(json).unwrap();
        let names: Vec<_> = menu.names().collect();
        assert_eq!(names, vec!["Mobility", "Cardio"]);
        assert_eq!(menu.subcategories("Cardio").unwrap().len(), 0);
    }

    #[test]
    fn test_parses_object_form() {
        let json = r#"{ "Mobility": ["Hip", 3, "Knee"], "Broken": "nope" }"#;
        let menu = CategoryMenu::from_json(json).unwrap();
        assert_eq!(menu.subcategories("Mobility").unwrap(), &["Hip", "Knee"]);
        assert!(!menu.is_openable("Broken"));
    }

    #[test]
    fn test_scalar_json_gives_empty_menu() {
        let menu = CategoryMenu::from_json("42").unwrap();
        assert!(menu.is_empty());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(
            CategoryMenu::from_json("{ nope"),
            Err(MenuError::Json(_))
        ));
    }

    #[test]
    fn test_serde_round_trip_keeps_order() {
        let menu = CategoryMenu::from_pairs([("B", vec!["2", "1"]), ("A", vec!["x"])]);
        let json = serde_json::to_string(&menu).unwrap();
        let back: CategoryMenu = serde_json::from_str(&json).unwrap();
        assert_eq!(back, menu);
        assert_eq!(back.names().collect::<Vec<_>>(), vec!["B", "A"]);
    }
}
