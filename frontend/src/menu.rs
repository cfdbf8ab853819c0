use crate::i18n::lookup;
use crate::locale::Locale;
use crate::models::Categories;
use serde::Serialize;

/// Category submenu, shared by the desktop and mobile navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Menu {
    pub heading: String,
    pub items: Vec<MenuItem>,
    /// Shown instead of the items while there are none.
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub name: String,
    pub href: String,
}

/// Catalog link for a category. `lang` is the page-level language, kept so
/// the next page resolves the same locale.
pub fn category_href(slug: &str, lang: Option<Locale>) -> String {
    let href = format!("/products/?category={}", urlencoding::encode(slug));
    match lang {
        Some(lang) => format!("{href}&lang={lang}"),
        None => href,
    }
}

pub fn build_menu(categories: &Categories, locale: Locale, lang: Option<Locale>) -> Menu {
    let items: Vec<MenuItem> = categories
        .iter()
        .map(|category| MenuItem {
            name: category.display_name().to_string(),
            href: category_href(&category.slug, lang),
        })
        .collect();
    let placeholder = items
        .is_empty()
        .then(|| lookup(locale, "status.loading").to_string());

    Menu {
        heading: lookup(locale, "menu.models").to_string(),
        items,
        placeholder,
    }
}
