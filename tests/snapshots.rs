//! Snapshot tests — rendered tool output and stored JSON regression detection.

mod common;

use common::{service_with_library, standard_library};
use insta::{assert_json_snapshot, assert_snapshot};

use shelf_mcp::domain::model::book::SearchField;
use shelf_mcp::domain::model::library::Library;
use shelf_mcp::interface::text;

// =============================================================================
// Text snapshots
// =============================================================================

#[test]
fn snapshot_listing_full() {
    let svc = service_with_library(&standard_library());
    let listing = text::render_listing(svc.list_books());
    assert_snapshot!("listing_full", listing);
}

#[test]
fn snapshot_listing_empty() {
    let listing = text::render_listing(Library::new().books());
    assert_snapshot!("listing_empty", listing);
}

#[test]
fn snapshot_search_by_author() {
    let svc = service_with_library(&standard_library());
    let results = svc.search_books("jane austen", SearchField::Author);
    let output = text::render_search_results(&results);
    assert_snapshot!("search_jane_austen", output);
}

#[test]
fn snapshot_search_no_match() {
    let svc = service_with_library(&standard_library());
    let results = svc.search_books("Dun", SearchField::Title);
    let output = text::render_search_results(&results);
    assert_snapshot!("search_no_match", output);
}

#[test]
fn snapshot_statistics() {
    let svc = service_with_library(&standard_library());
    let stats = text::render_statistics(&svc.compute_statistics());
    assert_snapshot!("statistics_standard", stats);
}

// =============================================================================
// JSON snapshots
// =============================================================================

#[test]
fn snapshot_library_json() {
    let library = standard_library();
    assert_json_snapshot!("library_json", library);
}
