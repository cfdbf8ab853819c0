//! UI strings for the catalog pages.
//!
//! Each locale has a flat `(key, text)` table. A key missing from the table
//! is rendered as the key itself, so a typo shows up on the page instead of
//! breaking it.

use crate::locale::Locale;

const UZ: &[(&str, &str)] = &[
    ("card.details", "Batafsil o'qish"),
    ("card.placeholder_title", "Mahsulot"),
    ("status.loading", "Yuklanmoqda..."),
    ("status.no_results", "Mahsulotlar topilmadi"),
    ("status.error", "Xatolik yuz berdi"),
    (
        "status.try_again",
        "Keyinroq urinib ko'ring yoki sahifani yangilang",
    ),
    ("pagination.prev", "Ortga"),
    ("pagination.next", "Oldinga"),
    ("menu.models", "Modellar"),
];

const RU: &[(&str, &str)] = &[
    ("card.details", "Подробнее"),
    ("card.placeholder_title", "Продукт"),
    ("status.loading", "Загрузка..."),
    ("status.no_results", "Товары не найдены"),
    ("status.error", "Произошла ошибка"),
    ("status.try_again", "Попробуйте позже или обновите страницу"),
    ("pagination.prev", "Назад"),
    ("pagination.next", "Вперёд"),
    ("menu.models", "Модели"),
];

const EN: &[(&str, &str)] = &[
    ("card.details", "Read more"),
    ("card.placeholder_title", "Product"),
    ("status.loading", "Loading..."),
    ("status.no_results", "No products found"),
    ("status.error", "An error occurred"),
    ("status.try_again", "Please try again later or refresh the page"),
    ("pagination.prev", "Previous"),
    ("pagination.next", "Next"),
    ("menu.models", "Models"),
];

fn table(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::Uz => UZ,
        Locale::Ru => RU,
        Locale::En => EN,
    }
}

/// Looks `key` up for `locale`, returning `key` unchanged when absent.
pub fn lookup<'a>(locale: Locale, key: &'a str) -> &'a str {
    table(locale)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, text)| *text)
        .unwrap_or(key)
}
