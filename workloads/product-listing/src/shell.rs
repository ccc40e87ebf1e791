//! Document shell and styles for the listing page.

use edge_streaming::{HeadContent, Shell};

use crate::params::{ListingParams, LISTING_PATH};

/// Title known before any data arrives.
pub fn page_title(params: &ListingParams) -> String {
    if params.best_sellers {
        return "Best Sellers".to_string();
    }
    params
        .category
        .clone()
        .unwrap_or_else(|| "Products".to_string())
}

/// Create the shell for a listing titled `heading`.
pub fn create_shell(heading: &str) -> Shell {
    let head = HeadContent::new(format!("{} - EdgeStore", heading))
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_meta("description", "Browse products by category or best sellers")
        .with_style(LISTING_STYLES);

    Shell::new(head).with_body_start(format!(
        r#"<body>
<header class="site-header">
    <a href="{}" class="logo">EdgeStore</a>
    <nav class="header-nav">
        <a href="{}?best_sellers=true">Best Sellers</a>
        <a href="/cart">Cart</a>
    </nav>
</header>
<main>
"#,
        LISTING_PATH, LISTING_PATH
    ))
}

const LISTING_STYLES: &str = r##"
:root {
    --primary: #2563eb;
    --primary-hover: #1d4ed8;
    --bg: #f8fafc;
    --card-bg: #ffffff;
    --text: #1e293b;
    --text-muted: #64748b;
    --border: #e2e8f0;
    --success: #22c55e;
    --warning: #eab308;
    --error: #ef4444;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    line-height: 1.5;
}

.site-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 1rem 2rem;
    background: var(--card-bg);
    border-bottom: 1px solid var(--border);
}

.logo {
    font-size: 1.5rem;
    font-weight: 700;
    color: var(--primary);
    text-decoration: none;
}

.header-nav { display: flex; gap: 1.5rem; }
.header-nav a { color: var(--text); text-decoration: none; }

main {
    max-width: 1100px;
    margin: 0 auto;
    padding: 2rem;
}

/* Category bar */
.category-bar {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
    margin-bottom: 1.5rem;
}

.category-link {
    padding: 0.375rem 0.875rem;
    border: 1px solid var(--border);
    border-radius: 999px;
    color: var(--text);
    text-decoration: none;
    font-size: 0.875rem;
    background: var(--card-bg);
}

.category-link.active {
    background: var(--primary);
    border-color: var(--primary);
    color: white;
}

/* Listing */
.listing-title { font-size: 1.5rem; margin-bottom: 1rem; }

.product-list {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
}

.product-card {
    background: var(--card-bg);
    border: 1px solid var(--border);
    border-radius: 12px;
    overflow: hidden;
    transition: transform 0.3s, box-shadow 0.3s;
}

.product-card:hover {
    transform: scale(1.02);
    box-shadow: 0 4px 12px rgba(0,0,0,0.1);
}

.card-link {
    display: flex;
    width: 100%;
    gap: 1rem;
    border: none;
    background: none;
    text-align: left;
    color: inherit;
    font: inherit;
    cursor: pointer;
}

.card-link img {
    width: 300px;
    max-width: 40%;
    object-fit: cover;
}

.card-body {
    display: flex;
    flex-direction: column;
    gap: 0.25rem;
    padding: 1rem;
}

.product-title { font-size: 1.125rem; font-weight: 600; color: var(--primary); }
.product-description { font-size: 0.875rem; color: var(--text-muted); }
.product-price, .product-rating, .product-stock, .product-shipping { font-weight: 700; }
.product-shipping { color: #0d9488; }

.tone-green { color: var(--success); }
.tone-yellow { color: var(--warning); }
.tone-red { color: var(--error); }

.card-cart {
    display: flex;
    align-items: center;
    gap: 1rem;
    padding: 0 1rem 1rem;
}

.quantity {
    width: 5rem;
    padding: 0.25rem 0.5rem;
    border: 1px solid var(--border);
    border-radius: 6px;
}

.add-to-cart {
    padding: 0.5rem 1.25rem;
    background: var(--primary);
    color: white;
    border: none;
    border-radius: 999px;
    font-weight: 500;
    cursor: pointer;
}

.add-to-cart:hover:not(:disabled) { background: var(--primary-hover); }
.add-to-cart:disabled { background: var(--border); cursor: not-allowed; }

/* Pagination */
.pagination {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-top: 2rem;
    padding-top: 1rem;
    border-top: 1px solid var(--border);
}

.pagination-summary { font-size: 0.875rem; color: var(--text-muted); }

.pagination nav { display: flex; gap: 0.25rem; }

.pagination-page, .pagination-prev, .pagination-next {
    padding: 0.5rem 1rem;
    border: 1px solid var(--border);
    border-radius: 6px;
    text-decoration: none;
    color: var(--text);
    background: var(--card-bg);
}

.pagination-page.current {
    background: #4f46e5;
    border-color: #4f46e5;
    color: white;
}

@media (max-width: 767px) {
    main { padding: 1rem; }
    .card-link { flex-direction: column; }
    .card-link img { width: 100%; max-width: 100%; }
    .pagination { flex-direction: column; gap: 0.75rem; }
}
"##;
