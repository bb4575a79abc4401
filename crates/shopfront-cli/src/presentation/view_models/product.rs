use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ProductCardViewModel {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub price_label: String,
    pub category: String,
    /// One decimal or `N/A`; shown on grid cards
    pub rating_label: String,
    /// As reported or `N/A`; shown on compact rows
    pub rating_raw: String,
    pub review_count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductListViewModel {
    pub title: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub compact: bool,
    pub products: Vec<ProductCardViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductDetailViewModel {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub price_label: String,
    /// `<rate> / 5.0`
    pub rating_label: String,
    pub review_count: u64,
    pub category_label: String,
    pub description: String,
    pub favorite: bool,
    pub favorite_glyph: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryEntryViewModel {
    pub name: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryListViewModel {
    pub categories: Vec<CategoryEntryViewModel>,
}
