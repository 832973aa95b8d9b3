// File: crates/dotplan-core/tests/pdf_smoke.rs
// Purpose: End-to-end render smoke tests writing PDF and PNG files with system fonts.

use dotplan_core::pages::TitlePage;
use dotplan_core::render::render_page_to_png_bytes;
use dotplan_core::{spreads, FontBook, Layout, TextMeasure};

#[test]
fn month_spread_pdf_smoke() {
    let layout = Layout::default();
    let fonts = FontBook::system(&layout.style);
    let doc = spreads::month_spread(2025, 11).unwrap();

    let out = std::path::PathBuf::from("target/test_out/month_2025_11.pdf");
    doc.render_to_pdf(&layout, &fonts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "pdf should be non-empty");

    let bytes = doc.render_to_pdf_bytes(&layout, &fonts).expect("render bytes");
    assert!(bytes.starts_with(b"%PDF"), "should be PDF header");
}

#[test]
fn year_spread_pdf_has_one_page_per_page() {
    let layout = Layout::default();
    let fonts = FontBook::system(&layout.style);
    let doc = spreads::year_spread(2026);
    let bytes = doc.render_to_pdf_bytes(&layout, &fonts).expect("render bytes");
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains(&format!("/Count {}", doc.len())), "page tree should list {} pages", doc.len());
}

#[test]
fn missing_font_dir_falls_back() {
    let layout = Layout::default();
    let fonts = FontBook::load(Some(std::path::Path::new("no/such/fonts")), &layout.style);
    assert!(fonts.text_width("NOVEMBER", dotplan_core::FontRole::Text, 11.0) > 0.0);
}

#[test]
fn title_page_png_smoke() {
    let layout = Layout::default();
    let fonts = FontBook::system(&layout.style);
    let page = TitlePage::new("MOVIES").into();
    let bytes = render_page_to_png_bytes(&page, &layout, &fonts, 1.0).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}
