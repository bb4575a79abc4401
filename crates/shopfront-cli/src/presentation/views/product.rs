use std::fmt;

use crate::presentation::formatters::truncate;
use crate::presentation::view_models::{
    CategoryListViewModel, ProductCardViewModel, ProductDetailViewModel, ProductListViewModel,
};

const TITLE_WIDTH: usize = 48;

// --------------------------------------------------------
// Product List View
// --------------------------------------------------------

pub struct ProductListView<'a> {
    data: &'a ProductListViewModel,
}

impl<'a> ProductListView<'a> {
    pub fn new(data: &'a ProductListViewModel) -> Self {
        Self { data }
    }

    fn grid_row(f: &mut fmt::Formatter, card: &ProductCardViewModel) -> fmt::Result {
        writeln!(
            f,
            "{:>4}  {:<width$}  {:>9}  {:<18}  ⭐ {}",
            card.id,
            truncate(&card.title, TITLE_WIDTH),
            card.price_label,
            card.category,
            card.rating_label,
            width = TITLE_WIDTH
        )
    }

    fn compact_row(f: &mut fmt::Formatter, card: &ProductCardViewModel) -> fmt::Result {
        writeln!(
            f,
            "{:>4}  {} | {} | {} | ⭐ {} ({})",
            card.id, card.title, card.category, card.price_label, card.rating_raw, card.review_count
        )
    }
}

impl<'a> fmt::Display for ProductListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.data.title)?;
        write!(f, "Category: {}", self.data.category)?;
        if let Some(query) = &self.data.query {
            write!(f, "  Search: \"{}\"", query)?;
        }
        writeln!(f)?;
        writeln!(f)?;

        if let Some(message) = &self.data.empty_message {
            writeln!(f, "{}", message)?;
            return Ok(());
        }

        if !self.data.compact {
            writeln!(
                f,
                "{:>4}  {:<width$}  {:>9}  {:<18}  RATING",
                "ID",
                "TITLE",
                "PRICE",
                "CATEGORY",
                width = TITLE_WIDTH
            )?;
            writeln!(f, "{}", "-".repeat(TITLE_WIDTH + 50))?;
        }

        for card in &self.data.products {
            if self.data.compact {
                Self::compact_row(f, card)?;
            } else {
                Self::grid_row(f, card)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for ProductListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", ProductListView::new(self))
    }
}

// --------------------------------------------------------
// Product Detail View
// --------------------------------------------------------

pub struct ProductDetailView<'a> {
    data: &'a ProductDetailViewModel,
}

impl<'a> ProductDetailView<'a> {
    pub fn new(data: &'a ProductDetailViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ProductDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.data;
        writeln!(f, "{} {}", d.title, d.favorite_glyph)?;
        writeln!(
            f,
            "💰 {}   ⭐ {}   👥 {} reviews",
            d.price_label, d.rating_label, d.review_count
        )?;
        writeln!(f, "Category: {}", d.category_label)?;
        writeln!(f)?;
        writeln!(f, "Description")?;
        writeln!(f, "{}", d.description)?;
        Ok(())
    }
}

impl fmt::Display for ProductDetailViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", ProductDetailView::new(self))
    }
}

// --------------------------------------------------------
// Category List View
// --------------------------------------------------------

pub struct CategoryListView<'a> {
    data: &'a CategoryListViewModel,
}

impl<'a> CategoryListView<'a> {
    pub fn new(data: &'a CategoryListViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for CategoryListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.categories.is_empty() {
            writeln!(f, "No categories found.")?;
            return Ok(());
        }
        for entry in &self.data.categories {
            writeln!(f, "{}", entry.name)?;
        }
        Ok(())
    }
}

impl fmt::Display for CategoryListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", CategoryListView::new(self))
    }
}

#[cfg(test)]
mod tests {
    use crate::presentation::presenters::{present_detail, present_product_list};
    use shopfront_testing::fixtures::sample_products;
    use shopfront_types::CategoryFilter;

    #[test]
    fn test_compact_rows() {
        let products = sample_products();
        let refs: Vec<_> = products.iter().collect();
        let result = present_product_list("Product List", &CategoryFilter::All, "", &refs, true);

        insta::assert_snapshot!(result.content.to_string(), @r"
        Product List
        Category: All Categories

           1  Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops | men's clothing | $109.95 | ⭐ 3.9 (120)
           5  John Hardy Women's Legends Naga Bracelet | jewelery | $695 | ⭐ 4.6 (400)
           9  WD 2TB Elements Portable External Hard Drive | electronics | $64 | ⭐ 3.3 (203)
          14  Samsung 49-Inch CHG90 Curved Gaming Monitor | electronics | $999.99 | ⭐ N/A (0)
        ");
    }

    #[test]
    fn test_detail_view() {
        let products = sample_products();
        let detail = present_detail(&products[1], false);

        let text = detail.to_string();
        assert!(text.starts_with(&products[1].title));
        assert!(text.contains("💰 $695   ⭐ 4.6 / 5.0   👥 400 reviews"));
        assert!(text.contains("Category: Jewelery"));
        assert!(text.contains("🤍"));
    }
}
