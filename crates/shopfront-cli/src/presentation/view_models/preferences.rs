use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ThemeViewModel {
    pub theme: String,
    /// Glyph of the toggle button: the theme it would switch to
    pub toggle_glyph: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FavoritesViewModel {
    pub ids: Vec<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FavoriteToggleViewModel {
    pub id: u64,
    pub favorite: bool,
    pub favorite_glyph: String,
    pub total: usize,
}
