//! Listing section - one card per product.

use edge_streaming::escape_html;
use storefront_catalog::card::ProductCard;
use storefront_catalog::catalog::Product;

use crate::actions::{ADD_TO_CART_PATH, SELECT_PATH};

/// Render the listing section.
///
/// `products` and `cards` are parallel; the product JSON rides along in the
/// card's forms.
pub fn render_listing(heading: &str, products: &[Product], cards: &[ProductCard]) -> String {
    if cards.is_empty() {
        return render_empty_listing(heading);
    }

    let cards_html: String = products
        .iter()
        .zip(cards)
        .map(|(product, card)| render_product_card(product, card))
        .collect();

    format!(
        r#"<section class="listing" data-section="listing">
    <h1 class="listing-title">{}</h1>
    <div class="product-list">
        {}
    </div>
</section>"#,
        escape_html(heading),
        cards_html
    )
}

/// Render the listing with no cards.
///
/// Used before any product arrived, including after a failed fetch; no
/// message is shown.
pub fn render_empty_listing(heading: &str) -> String {
    format!(
        r#"<section class="listing" data-section="listing" data-empty="true">
    <h1 class="listing-title">{}</h1>
</section>"#,
        escape_html(heading)
    )
}

fn render_product_card(product: &Product, card: &ProductCard) -> String {
    let item = escape_html(&product.to_json());
    let quantity = &card.quantity;

    format!(
        r#"<article class="product-card" data-product-id="{id}">
    <form method="post" action="{select}" class="card-select">
        <input type="hidden" name="item" value="{item}">
        <button type="submit" class="card-link">
            <img src="{thumbnail}" alt="{title}" loading="lazy">
            <span class="card-body">
                <span class="product-title">{title}</span>
                <span class="product-description">{description}</span>
                <span class="product-price">Price: ${price}</span>
                <span class="product-rating {rating_tone}">Rating: {rating}</span>
                <span class="product-stock {stock_tone}">Stock: {stock}</span>
                <span class="product-shipping">Shipment: {shipping}</span>
            </span>
        </button>
    </form>
    <form method="post" action="{cart}" class="card-cart">
        <input type="hidden" name="item" value="{item}">
        <input type="number" name="quantity" class="quantity" min="{min}" max="{max}" value="{initial}"{degenerate}>
        <button type="submit" class="add-to-cart"{disabled}>{label}</button>
    </form>
</article>"#,
        id = card.id,
        select = SELECT_PATH,
        cart = ADD_TO_CART_PATH,
        item = item,
        thumbnail = escape_html(&card.thumbnail),
        title = escape_html(&card.title),
        description = escape_html(&card.description),
        price = escape_html(&card.price_text),
        rating_tone = card.rating_tone.css_class(),
        rating = escape_html(&card.rating_text),
        stock_tone = card.stock_tone.css_class(),
        stock = escape_html(&card.stock_text),
        shipping = escape_html(&card.shipping_text),
        min = quantity.min,
        max = quantity.max,
        initial = quantity.initial,
        degenerate = if quantity.is_degenerate() {
            r#" data-degenerate="true""#
        } else {
            ""
        },
        disabled = if card.add_to_cart_disabled { " disabled" } else { "" },
        label = card.add_to_cart_label,
    )
}
