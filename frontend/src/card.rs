use crate::i18n::lookup;
use crate::locale::Locale;
use crate::models::Product;
use serde::Serialize;

/// Everything a product card template needs, already resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub title: String,
    pub image: Option<String>,
    pub specs: Vec<CardSpec>,
    pub detail_url: String,
    pub cta_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardSpec {
    pub icon: Option<CardIcon>,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardIcon {
    pub url: String,
    pub alt: String,
}

pub fn render_card(product: &Product, locale: Locale) -> Card {
    let mut specs: Vec<_> = product.card_specs.iter().flatten().collect();
    // stable, so equal orders keep the server sequence
    specs.sort_by_key(|spec| spec.sort_key());

    let specs = specs
        .into_iter()
        .map(|spec| CardSpec {
            icon: spec.icon_src().map(|url| CardIcon {
                url: url.to_string(),
                alt: spec.icon_alt().to_string(),
            }),
            value: spec.value.clone().unwrap_or_default(),
        })
        .collect();

    Card {
        title: product
            .display_title()
            .unwrap_or_else(|| lookup(locale, "card.placeholder_title"))
            .to_string(),
        image: product.image_src().map(str::to_string),
        specs,
        detail_url: format!("/products/{}/", product.slug.as_deref().unwrap_or_default()),
        cta_label: lookup(locale, "card.details").to_string(),
    }
}
