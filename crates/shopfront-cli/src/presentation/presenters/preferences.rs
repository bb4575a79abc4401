use shopfront_types::{FavoritesSet, ProductId, Theme};

use super::{FAVORITE_GLYPH, NOT_FAVORITE_GLYPH};
use crate::presentation::view_models::{
    CommandResultViewModel, FavoriteToggleViewModel, FavoritesViewModel, Guidance, StatusBadge,
    ThemeViewModel,
};

/// Glyph on the theme toggle: a moon offers dark mode, a sun offers light
pub fn theme_toggle_glyph(theme: Theme) -> &'static str {
    if theme.is_dark() { "☀️" } else { "🌙" }
}

pub fn present_theme(
    theme: Theme,
    previous: Option<Theme>,
) -> CommandResultViewModel<ThemeViewModel> {
    let changed = previous.is_some_and(|p| p != theme);
    let result = CommandResultViewModel::new(ThemeViewModel {
        theme: theme.to_string(),
        toggle_glyph: theme_toggle_glyph(theme).to_string(),
        previous: previous.map(|p| p.to_string()),
    });

    if changed {
        result.with_badge(StatusBadge::success(format!("Theme set to {}", theme)))
    } else {
        result
    }
}

pub fn present_favorites(favorites: &FavoritesSet) -> CommandResultViewModel<FavoritesViewModel> {
    let ids: Vec<u64> = favorites.iter().map(ProductId::get).collect();
    let result = CommandResultViewModel::new(FavoritesViewModel { ids });

    if favorites.is_empty() {
        result.with_suggestion(
            Guidance::new("Mark a product as favorite")
                .with_command("shopfront favorites toggle <ID>"),
        )
    } else {
        result
    }
}

pub fn present_favorite_toggle(
    id: ProductId,
    favorite: bool,
    total: usize,
) -> CommandResultViewModel<FavoriteToggleViewModel> {
    let badge = if favorite {
        StatusBadge::success(format!("Added product {} to favorites", id))
    } else {
        StatusBadge::info(format!("Removed product {} from favorites", id))
    };

    CommandResultViewModel::new(FavoriteToggleViewModel {
        id: id.get(),
        favorite,
        favorite_glyph: if favorite {
            FAVORITE_GLYPH
        } else {
            NOT_FAVORITE_GLYPH
        }
        .to_string(),
        total,
    })
    .with_badge(badge)
}
