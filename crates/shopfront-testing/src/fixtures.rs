//! Sample catalog data shaped like the FakeStore service.

use shopfront_types::{Category, Product, ProductId, Rating};

/// Build a product with the given id, title and category.
pub fn product(id: u64, title: &str, category: &str) -> Product {
    Product {
        id: ProductId::new(id),
        title: title.to_string(),
        price: 10.0 * id as f64 + 0.5,
        description: format!("Description of {}", title),
        category: Category::from(category),
        image: format!("https://fakestoreapi.com/img/{}.jpg", id),
        rating: Some(Rating {
            rate: 4.0,
            count: 10 * id,
        }),
    }
}

/// A small catalog spanning several categories.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            title: "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops".to_string(),
            price: 109.95,
            description: "Your perfect pack for everyday use and walks in the forest."
                .to_string(),
            category: Category::from("men's clothing"),
            image: "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg".to_string(),
            rating: Some(Rating {
                rate: 3.9,
                count: 120,
            }),
        },
        Product {
            id: ProductId::new(5),
            title: "John Hardy Women's Legends Naga Bracelet".to_string(),
            price: 695.0,
            description: "From our Legends Collection, the Naga was inspired by the mythical water dragon."
                .to_string(),
            category: Category::from("jewelery"),
            image: "https://fakestoreapi.com/img/71pWzhdJNwL._AC_UL640_QL65_ML3_.jpg".to_string(),
            rating: Some(Rating {
                rate: 4.6,
                count: 400,
            }),
        },
        Product {
            id: ProductId::new(9),
            title: "WD 2TB Elements Portable External Hard Drive".to_string(),
            price: 64.0,
            description: "USB 3.0 and USB 2.0 compatibility, fast data transfers.".to_string(),
            category: Category::from("electronics"),
            image: "https://fakestoreapi.com/img/61IBBVJvSDL._AC_SY879_.jpg".to_string(),
            rating: Some(Rating {
                rate: 3.3,
                count: 203,
            }),
        },
        Product {
            id: ProductId::new(14),
            title: "Samsung 49-Inch CHG90 Curved Gaming Monitor".to_string(),
            price: 999.99,
            description: "49 inch super ultrawide 32:9 curved gaming monitor.".to_string(),
            category: Category::from("electronics"),
            image: "https://fakestoreapi.com/img/81Zt42ioCgL._AC_SX679_.jpg".to_string(),
            rating: None,
        },
    ]
}

/// Distinct categories of `products`, in first-seen order.
pub fn categories_of(products: &[Product]) -> Vec<Category> {
    let mut categories: Vec<Category> = Vec::new();
    for product in products {
        if !categories.contains(&product.category) {
            categories.push(product.category.clone());
        }
    }
    categories
}

/// Percent-encode a category the way it appears in a request path.
pub fn encoded_category(category: &str) -> String {
    category.replace('%', "%25").replace(' ', "%20").replace('/', "%2F")
}
