use std::fmt;

use crate::presentation::view_models::{
    FavoriteToggleViewModel, FavoritesViewModel, ThemeViewModel,
};

pub struct ThemeView<'a> {
    data: &'a ThemeViewModel,
}

impl<'a> ThemeView<'a> {
    pub fn new(data: &'a ThemeViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ThemeView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} {}", self.data.theme, self.data.toggle_glyph)
    }
}

impl fmt::Display for ThemeViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", ThemeView::new(self))
    }
}

pub struct FavoritesView<'a> {
    data: &'a FavoritesViewModel,
}

impl<'a> FavoritesView<'a> {
    pub fn new(data: &'a FavoritesViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for FavoritesView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.ids.is_empty() {
            writeln!(f, "No favorites yet.")?;
            return Ok(());
        }
        for id in &self.data.ids {
            writeln!(f, "{}", id)?;
        }
        Ok(())
    }
}

impl fmt::Display for FavoritesViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", FavoritesView::new(self))
    }
}

pub struct FavoriteToggleView<'a> {
    data: &'a FavoriteToggleViewModel,
}

impl<'a> FavoriteToggleView<'a> {
    pub fn new(data: &'a FavoriteToggleViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for FavoriteToggleView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{} Product {} ({} favorite{})",
            self.data.favorite_glyph,
            self.data.id,
            self.data.total,
            if self.data.total == 1 { "" } else { "s" }
        )
    }
}

impl fmt::Display for FavoriteToggleViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", FavoriteToggleView::new(self))
    }
}
