//! Pagination section - summary line with previous/next controls.

use edge_streaming::escape_html;
use storefront_catalog::listing::ListingController;

use crate::params::ListingParams;

/// Render the pagination section.
///
/// Controls that are hidden on this page are left out entirely.
pub fn render_pagination(controller: &ListingController, params: &ListingParams) -> String {
    let state = controller.state();
    let href = |target| escape_html(&params.page_href(target, state.limit, state.best_seller));

    let prev_link = controller
        .previous_target()
        .map(|target| {
            format!(
                r#"<a href="{}" class="pagination-prev" data-control="previous" aria-label="Previous page">&larr; Previous</a>"#,
                href(target)
            )
        })
        .unwrap_or_default();

    let next_link = controller
        .next_target()
        .map(|target| {
            format!(
                r#"<a href="{}" class="pagination-next" data-control="next" aria-label="Next page">Next &rarr;</a>"#,
                href(target)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<section class="pagination" data-section="pagination">
    <p class="pagination-summary">{}</p>
    <nav aria-label="Pagination" data-last-page="{}">
        {}
        <span class="pagination-page current" aria-current="page">{}</span>
        {}
    </nav>
</section>"#,
        escape_html(&controller.summary()),
        controller.last_page_number(),
        prev_link,
        state.page_number,
        next_link
    )
}
