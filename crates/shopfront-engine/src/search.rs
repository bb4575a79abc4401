use shopfront_types::Product;

/// Case-insensitive substring match against title or description.
///
/// An empty query matches every product.
pub fn matches(product: &Product, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    product.title.to_lowercase().contains(&needle)
        || product.description.to_lowercase().contains(&needle)
}

/// Products matching `query`, in their original order
pub fn filter_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    products.iter().filter(|p| matches(p, query)).collect()
}
