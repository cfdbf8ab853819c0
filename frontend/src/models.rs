use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Product as returned by `/api/{locale}/products/`.
///
/// Every field is optional because the API has shipped several shapes over
/// time; the accessor methods pick the first usable candidate.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Product {
    #[serde(default)]
    pub id: Value,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub main_image: Option<String>,
    #[serde(default, deserialize_with = "category_ref")]
    pub category: Option<CategoryRef>,
    #[serde(default, alias = "specs", deserialize_with = "spec_list")]
    pub card_specs: Option<Vec<Spec>>,
}

impl Product {
    /// `title`, then `name`; empty strings are skipped.
    pub fn display_title(&self) -> Option<&str> {
        first_non_empty([self.title.as_deref(), self.name.as_deref()])
    }

    pub fn image_src(&self) -> Option<&str> {
        first_non_empty([
            self.image_url.as_deref(),
            self.image.as_deref(),
            self.main_image.as_deref(),
        ])
    }

    pub fn category_slug(&self) -> Option<&str> {
        self.category.as_ref().and_then(|c| c.slug.as_deref())
    }
}

/// The category object embedded in a product.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct CategoryRef {
    #[serde(default, deserialize_with = "lenient_string")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct SpecIcon {
    #[serde(default, deserialize_with = "lenient_string")]
    pub icon_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
}

/// One icon + value line on a product card.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Spec {
    #[serde(default, deserialize_with = "spec_icon")]
    pub icon: Option<SpecIcon>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub icon_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub value: Option<String>,
    #[serde(default, deserialize_with = "lenient_order")]
    pub order: Option<i64>,
}

impl Spec {
    pub fn icon_src(&self) -> Option<&str> {
        first_non_empty([
            self.icon.as_ref().and_then(|i| i.icon_url.as_deref()),
            self.icon_url.as_deref(),
        ])
    }

    pub fn icon_alt(&self) -> &str {
        first_non_empty([
            self.icon.as_ref().and_then(|i| i.name.as_deref()),
            self.name.as_deref(),
        ])
        .unwrap_or_default()
    }

    pub fn sort_key(&self) -> i64 {
        self.order.unwrap_or(0)
    }
}

/// Category as returned by `/api/{locale}/product-categories/`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Category {
    pub slug: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub hero_image_url: Option<String>,
}

impl Category {
    /// Name for headings, falling back to the slug.
    pub fn display_name(&self) -> &str {
        first_non_empty([self.name.as_deref()]).unwrap_or(&self.slug)
    }
}

/// Categories in server order, indexed by slug.
#[derive(Debug, Clone, Default)]
pub struct Categories {
    list: Vec<Category>,
    by_slug: HashMap<String, usize>,
}

impl Categories {
    pub fn new(list: Vec<Category>) -> Self {
        let mut by_slug = HashMap::with_capacity(list.len());
        for (index, category) in list.iter().enumerate() {
            // first occurrence wins, like a linear `find`
            by_slug.entry(category.slug.clone()).or_insert(index);
        }
        Categories { list, by_slug }
    }

    pub fn get(&self, slug: &str) -> Option<&Category> {
        self.by_slug.get(slug).map(|&index| &self.list[index])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.list.iter()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

/// Page envelopes the API may answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKey {
    Results,
    Products,
}

/// Pulls the item array out of a list response: one of `keys` on an object,
/// or the body itself when it is an array. Anything else has no items.
pub fn list_items(body: Value, keys: &[ListKey]) -> Vec<Value> {
    match body {
        Value::Array(items) => items,
        Value::Object(mut map) => keys
            .iter()
            .find_map(|key| {
                let field = match key {
                    ListKey::Results => "results",
                    ListKey::Products => "products",
                };
                match map.remove(field) {
                    Some(Value::Array(items)) => Some(items),
                    _ => None,
                }
            })
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// The `next` link of a paginated response, if it names another page.
pub fn next_link(body: &Value) -> Option<String> {
    match body.get("next") {
        Some(Value::String(next)) if !next.trim().is_empty() => Some(next.clone()),
        _ => None,
    }
}

fn first_non_empty<'a, const N: usize>(candidates: [Option<&'a str>; N]) -> Option<&'a str> {
    candidates.into_iter().flatten().find(|s| !s.is_empty())
}

/// Strings stay strings, numbers and booleans are stringified, the rest is `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

fn lenient_order<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// A category that is not an object (an id, `null`) counts as no category.
fn category_ref<'de, D>(deserializer: D) -> Result<Option<CategoryRef>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

fn spec_icon<'de, D>(deserializer: D) -> Result<Option<SpecIcon>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

/// Keeps the object entries of a spec array; a non-array is no spec list.
fn spec_list<'de, D>(deserializer: D) -> Result<Option<Vec<Spec>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter(Value::is_object)
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    })
}
