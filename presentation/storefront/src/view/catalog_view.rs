use std::fmt::Write;

use business::domain::catalog::state::CatalogState;
use business::domain::product::model::Product;

/// One line per product: id, title, price, category and rating.
pub fn product_line(product: &Product) -> String {
    format!(
        "{:>6}  {:<40}  ${:>8.2}  {:<18}  {:.1}/5 ({})",
        product.id,
        truncate(&product.title, 40),
        product.price,
        product.category,
        product.rating.rate,
        product.rating.count
    )
}

/// The filtered catalog, the categories on offer and a summary of the active
/// filters.
pub fn render_catalog(state: &CatalogState) -> String {
    let visible = state.visible_products();
    let mut out = String::new();

    if state.loading {
        let _ = writeln!(out, "Loading products...");
    }
    if let Some(error) = &state.error {
        let _ = writeln!(out, "Error: {}", error);
    }

    for product in &visible {
        let _ = writeln!(out, "{}", product_line(product));
    }

    let available = state.categories();
    if !available.is_empty() {
        let _ = writeln!(out, "Available categories: {}", available.join(", "));
    }

    let categories = if state.selected_categories.is_empty() {
        "all".to_string()
    } else {
        state.selected_categories.join(", ")
    };
    let _ = write!(
        out,
        "{} of {} products | categories: {} | price: {} | rating >= {}",
        visible.len(),
        state.products.len(),
        categories,
        state.price_range,
        state.min_rating
    );
    out
}

/// Detail view of `selected_product`.
pub fn render_selected(state: &CatalogState) -> String {
    let Some(product) = &state.selected_product else {
        return match &state.error {
            Some(error) => format!("Error: {}", error),
            None => "Product not found".to_string(),
        };
    };

    format!(
        "{}\n{}\n\nPrice:    ${:.2}\nCategory: {}\nRating:   {:.1}/5 from {} reviews\nImage:    {}",
        product.title,
        product.description,
        product.price,
        product.category,
        product.rating.rate,
        product.rating.count,
        product.image
    )
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    truncated.push_str("...");
    truncated
}
