use shopfront_types::{Category, CategoryFilter, Product};

use super::{EMPTY_LISTING, FAVORITE_GLYPH, NOT_FAVORITE_GLYPH};
use crate::presentation::formatters::{format_price, format_rating_fixed, format_rating_raw};
use crate::presentation::view_models::{
    CategoryEntryViewModel, CategoryListViewModel, CommandResultViewModel, Guidance,
    ProductCardViewModel, ProductDetailViewModel, ProductListViewModel, StatusBadge,
};

pub fn present_card(product: &Product) -> ProductCardViewModel {
    ProductCardViewModel {
        id: product.id.get(),
        title: product.title.clone(),
        price: product.price,
        price_label: format_price(product.price),
        category: product.category.to_string(),
        rating_label: format_rating_fixed(product.rating_rate()),
        rating_raw: format_rating_raw(product.rating_rate()),
        review_count: product.review_count(),
    }
}

pub fn present_product_list(
    title: &str,
    filter: &CategoryFilter,
    query: &str,
    products: &[&Product],
    compact: bool,
) -> CommandResultViewModel<ProductListViewModel> {
    let cards: Vec<ProductCardViewModel> = products.iter().map(|p| present_card(p)).collect();
    let empty_message = cards.is_empty().then(|| EMPTY_LISTING.to_string());
    let query = (!query.trim().is_empty()).then(|| query.to_string());

    let mut result = CommandResultViewModel::new(ProductListViewModel {
        title: title.to_string(),
        category: filter.label(),
        query,
        compact,
        products: cards,
        empty_message,
    });

    if !products.is_empty() {
        result = result.with_suggestion(
            Guidance::new("View a product in detail").with_command("shopfront show <ID>"),
        );
    }
    result
}

pub fn present_detail(product: &Product, favorite: bool) -> ProductDetailViewModel {
    ProductDetailViewModel {
        id: product.id.get(),
        title: product.title.clone(),
        price: product.price,
        price_label: format_price(product.price),
        rating_label: format!("{} / 5.0", format_rating_fixed(product.rating_rate())),
        review_count: product.review_count(),
        category_label: product.category.label(),
        description: product.description.clone(),
        favorite,
        favorite_glyph: if favorite {
            FAVORITE_GLYPH
        } else {
            NOT_FAVORITE_GLYPH
        }
        .to_string(),
    }
}

pub fn present_categories(categories: &[Category]) -> CommandResultViewModel<CategoryListViewModel> {
    let entries = categories
        .iter()
        .map(|c| CategoryEntryViewModel {
            name: c.to_string(),
            label: c.label(),
        })
        .collect::<Vec<_>>();

    let badge = StatusBadge::info(format!("{} categories", entries.len()));
    CommandResultViewModel::new(CategoryListViewModel {
        categories: entries,
    })
    .with_badge(badge)
    .with_suggestion(
        Guidance::new("Filter the catalog by category")
            .with_command("shopfront products --category <NAME>"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_testing::fixtures::sample_products;

    #[test]
    fn test_card_without_rating_uses_fallbacks() {
        let products = sample_products();
        let monitor = products.iter().find(|p| p.id.get() == 14).unwrap();

        let card = present_card(monitor);
        assert_eq!(card.rating_label, "N/A");
        assert_eq!(card.rating_raw, "N/A");
        assert_eq!(card.review_count, 0);
        assert_eq!(card.price_label, "$999.99");
    }

    #[test]
    fn test_detail_labels() {
        let products = sample_products();
        let ring = products.iter().find(|p| p.id.get() == 5).unwrap();

        let detail = present_detail(ring, true);
        assert_eq!(detail.rating_label, "4.6 / 5.0");
        assert_eq!(detail.review_count, 400);
        assert_eq!(detail.category_label, "Jewelery");
        assert_eq!(detail.favorite_glyph, "❤️");
        assert_eq!(present_detail(ring, false).favorite_glyph, "🤍");
    }

    #[test]
    fn test_empty_listing_carries_message() {
        let result = present_product_list("Our Products", &CategoryFilter::All, "zzz", &[], false);
        assert_eq!(
            result.content.empty_message.as_deref(),
            Some("No products found. Try a different search term or category.")
        );
        assert_eq!(result.content.query.as_deref(), Some("zzz"));
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_categories_json_shape() {
        let categories = vec![Category::from("electronics"), Category::from("men's clothing")];
        let result = present_categories(&categories);

        insta::assert_json_snapshot!(result.content, @r#"
        {
          "categories": [
            {
              "name": "electronics",
              "label": "Electronics"
            },
            {
              "name": "men's clothing",
              "label": "Men's clothing"
            }
          ]
        }
        "#);
    }
}
