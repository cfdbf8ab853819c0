//! Brand strip with a paginated model panel.
//!
//! Clicking a brand opens its panel on page 1 with the first model shown;
//! clicking the open brand again closes the panel. The model picked on the
//! current page decides which car image is displayed.

use crate::pagination::{PageLinks, Pagination};
use serde::Serialize;

#[derive(Debug, PartialEq, Eq)]
pub struct Model {
    pub name: &'static str,
    pub image: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Brand {
    pub key: &'static str,
    pub name: &'static str,
    pub models: &'static [Model],
}

const fn model(name: &'static str, image: &'static str) -> Model {
    Model { name, image }
}

/// Brands in display order.
pub const BRANDS: &[Brand] = &[
    Brand {
        key: "chevrolet",
        name: "CHEVROLET",
        models: &[
            model("Malibu XL", "malibu.png"),
            model("Cobalt", "cobalt.jpg"),
            model("Tahoe", "tahoe.jpg"),
            model("Damas", "damas.png"),
            model("Tracker", "tracker.png"),
            model("Onix", "onix.png"),
            model("Spark", "spark.jpg"),
            model("Captiva", "captiva.jpg"),
            model("Nexia", "nexia3.png"),
            model("Equinox", "equinox.png"),
            model("Traverse", "traverse.png"),
        ],
    },
    Brand {
        key: "kia",
        name: "KIA",
        models: &[
            model("Optima", "optima.jpg"),
            model("Sportage", "sportage.jpg"),
            model("Sorento", "sorento.jpg"),
            model("Cerato", "cerato.jpg"),
        ],
    },
    Brand {
        key: "skoda",
        name: "SKODA",
        models: &[
            model("Octavia", "octavia.jpg"),
            model("Fabia", "fabia.jpg"),
            model("Superb", "superb.jpg"),
        ],
    },
    Brand {
        key: "jac",
        name: "JAC",
        models: &[
            model("T40", "t40.jpg"),
            model("S2", "s2.jpg"),
            model("J8", "j8.jpg"),
        ],
    },
    Brand {
        key: "jetour",
        name: "JETOUR",
        models: &[
            model("T-Sport", "t-sport.jpg"),
            model("X95", "x95.jpg"),
            model("X70", "x70.jpg"),
        ],
    },
    Brand {
        key: "honqi",
        name: "HONQI",
        models: &[
            model("H1", "h1.jpg"),
            model("H2", "h2.jpg"),
            model("H6", "h6.jpg"),
        ],
    },
];

pub fn find_brand(key: &str) -> Option<usize> {
    BRANDS.iter().position(|brand| brand.key == key)
}

#[derive(Debug, Clone)]
pub struct BrandSelector {
    brand: usize,
    pagination: Pagination,
    /// Index into the brand's full model list.
    selected: usize,
    panel_open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandTab {
    pub key: &'static str,
    pub name: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelButton {
    /// Position on the current page.
    pub index: usize,
    pub name: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandView {
    pub brands: Vec<BrandTab>,
    pub brand_key: &'static str,
    pub title: &'static str,
    pub panel_open: bool,
    pub models: Vec<ModelButton>,
    pub image: Option<String>,
    pub pagination: PageLinks,
}

impl BrandSelector {
    pub fn new(page_size: usize) -> Self {
        BrandSelector {
            brand: 0,
            pagination: Pagination::new(BRANDS[0].models.len(), page_size),
            selected: 0,
            panel_open: false,
        }
    }

    pub fn brand(&self) -> &'static Brand {
        &BRANDS[self.brand]
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn selected_model(&self) -> Option<&'static Model> {
        self.brand().models.get(self.selected)
    }

    /// Opens `key` on its first page, or closes the panel when `key` is
    /// the brand already open. Unknown keys change nothing.
    pub fn select_brand(&mut self, key: &str) -> bool {
        let Some(index) = find_brand(key) else {
            return false;
        };
        if index == self.brand && self.panel_open {
            self.close_panel();
            return true;
        }
        self.brand = index;
        self.pagination = Pagination::new(BRANDS[index].models.len(), self.pagination.page_size());
        self.select_first_on_page();
        self.panel_open = true;
        true
    }

    pub fn close_panel(&mut self) {
        self.panel_open = false;
    }

    /// Shows `page` (clamped) and picks its first model.
    pub fn goto(&mut self, page: usize) {
        self.pagination.goto(page);
        self.select_first_on_page();
    }

    pub fn next(&mut self) {
        if self.pagination.next() {
            self.select_first_on_page();
        }
    }

    pub fn prev(&mut self) {
        if self.pagination.prev() {
            self.select_first_on_page();
        }
    }

    /// Picks the model at `index` on the current page.
    pub fn select_model(&mut self, index: usize) -> bool {
        let range = self.pagination.range();
        if index >= range.len() {
            return false;
        }
        self.selected = range.start + index;
        true
    }

    fn select_first_on_page(&mut self) {
        self.selected = self.pagination.range().start;
    }

    /// `static_prefix` is the public URL of the static directory, e.g. `/static/`.
    pub fn view(&self, static_prefix: &str) -> BrandView {
        let brand = self.brand();
        let range = self.pagination.range();
        let models = self
            .pagination
            .slice(brand.models)
            .iter()
            .enumerate()
            .map(|(index, model)| ModelButton {
                index,
                name: model.name,
                active: range.start + index == self.selected,
            })
            .collect();

        BrandView {
            brands: BRANDS
                .iter()
                .enumerate()
                .map(|(index, b)| BrandTab {
                    key: b.key,
                    name: b.name,
                    active: self.panel_open && index == self.brand,
                })
                .collect(),
            brand_key: brand.key,
            title: brand.name,
            panel_open: self.panel_open,
            models,
            image: self
                .selected_model()
                .map(|model| format!("{static_prefix}images/{}", model.image)),
            pagination: self.pagination.links(),
        }
    }
}
