//! Plain-text rendering of the listing, detail and admin views.

use storage::Product;

pub const EMPTY_LISTING: &str = "No products found. Add some from the admin page!";
pub const EMPTY_ADMIN: &str = "No products to manage yet.";
pub const DETAIL_NOT_FOUND: &str = "Sorry, we couldn't find a product with that ID.";

/// Compare-at price shown struck through on the detail view.
const COMPARE_AT_MARKUP: f64 = 1.15;

pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Image references are often data URLs; only their head is shown.
fn image_label(image_url: &str) -> String {
    if image_url.is_empty() {
        return "(no image)".to_string();
    }
    match image_url.split_once(',') {
        Some((head, body)) if head.starts_with("data:") => {
            format!("{} ({} bytes encoded)", head, body.len())
        }
        _ => image_url.to_string(),
    }
}

pub fn render_listing(products: &[Product]) -> String {
    if products.is_empty() {
        return format!("{}\n", EMPTY_LISTING);
    }

    let mut out = String::new();
    for product in products {
        out.push_str(&format!(
            "{}  {}\n  {}\n  id: {}\n\n",
            product.name,
            format_price(product.price),
            product.description,
            product.id
        ));
    }
    out
}

pub fn render_detail(product: &Product) -> String {
    format!(
        "{}\n{}  (was {}, -15%)\n\n{}\n\nImage: {}\n",
        product.name,
        format_price(product.price),
        format_price(product.price * COMPARE_AT_MARKUP),
        product.description,
        image_label(&product.image_url)
    )
}

pub fn render_admin(products: &[Product]) -> String {
    if products.is_empty() {
        return format!("{}\n", EMPTY_ADMIN);
    }

    let width = products
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0);
    products
        .iter()
        .map(|p| format!("{:<width$}  {}\n", p.name, p.id, width = width))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, price: f64) -> Product {
        Product {
            id: format!("id-{}", name),
            name: name.to_string(),
            price,
            description: "nice".to_string(),
            image_url: "data:image/png;base64,AAAA".to_string(),
        }
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(10.0), "$10.00");
        assert_eq!(format_price(19.999), "$20.00");
    }

    #[test]
    fn test_empty_views() {
        assert_eq!(render_listing(&[]), format!("{}\n", EMPTY_LISTING));
        assert_eq!(render_admin(&[]), format!("{}\n", EMPTY_ADMIN));
    }

    #[test]
    fn test_listing_contains_each_card() {
        let out = render_listing(&[product("Hat", 5.0), product("Shirt", 12.5)]);
        assert!(out.contains("Hat  $5.00"));
        assert!(out.contains("Shirt  $12.50"));
        assert!(out.contains("id: id-Shirt"));
        assert!(out.find("Hat").unwrap() < out.find("Shirt").unwrap());
    }

    #[test]
    fn test_detail_shows_compare_at_price() {
        let out = render_detail(&product("Hat", 20.0));
        assert!(out.starts_with("Hat\n$20.00  (was $23.00, -15%)"));
        assert!(out.contains("Image: data:image/png;base64 (4 bytes encoded)"));
    }

    #[test]
    fn test_admin_aligns_names() {
        let out = render_admin(&[product("Hat", 1.0), product("Jacket", 2.0)]);
        assert_eq!(out, "Hat     id-Hat\nJacket  id-Jacket\n");
    }
}
