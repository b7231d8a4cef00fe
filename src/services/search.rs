use crate::domain::product::Product;

/// Client-side filter behind the product list search box.
///
/// A blank query keeps everything. Otherwise name, description and category
/// match case-insensitively, and the raw query is also matched against the
/// price as written (so "150" finds a product priced 15000).
pub fn filter_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    if query.trim().is_empty() {
        return products.iter().collect();
    }

    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|product| {
            contains(&product.name, &needle)
                || product.description.as_deref().is_some_and(|d| contains(d, &needle))
                || product.category.as_deref().is_some_and(|c| contains(c, &needle))
                || product.price.to_string().contains(query)
        })
        .collect()
}

fn contains(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}

pub fn result_summary(count: usize, query: &str) -> String {
    if query.is_empty() {
        format!("{} results found", count)
    } else {
        format!("{} results found for \"{}\"", count, query)
    }
}
