// tests/profile_fixtures.rs
//
// Extraction against saved profile pages.
//
use bootdev_bee::core::PageText;
use bootdev_bee::progress::ProgressReading;
use bootdev_bee::specs::profile::{extract_with_signal, Signal};
use bootdev_bee::specs::{extract, ExtractError, LengthSplit, SplitRule};

fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {path}: {e}"))
}

#[test]
fn rendered_profile_fuses_level_and_xp() {
    let page = PageText::from_html(&fixture("profile.html"));
    assert!(page.text.contains("Level 144,960 XP"), "text was {:?}", page.text);

    let got = extract_with_signal(&page, &LengthSplit::default()).unwrap();
    assert_eq!(got, (ProgressReading::new(14, 4960), Signal::Fused));
}

#[test]
fn script_only_profile_uses_fallback() {
    let page = PageText::from_html(&fixture("profile_script_only.html"));
    assert_eq!(page.scripts.len(), 2);

    let got = extract_with_signal(&page, &LengthSplit::default()).unwrap();
    assert_eq!(got, (ProgressReading::new(9, 450), Signal::Script));
}

#[test]
fn policy_only_changes_the_split() {
    let page = PageText::from_html(&fixture("profile.html"));
    let one_digit = LengthSplit::new(vec![SplitRule::new(4, 1).unwrap()]);
    assert_eq!(extract(&page, &one_digit), Ok(ProgressReading::new(1, 44960)));
}

#[test]
fn plain_marketing_page_is_not_found() {
    let html = "<html><body><h1>Learn backend</h1><p>Level up your career. Earn XP.</p></body></html>";
    let page = PageText::from_html(html);
    assert_eq!(extract(&page, &LengthSplit::default()), Err(ExtractError::NotFound));
}

#[test]
fn spec_fixtures_from_text() {
    let policy = LengthSplit::default();
    assert_eq!(
        extract(&PageText::from_text("Level 9450 XP"), &policy),
        Ok(ProgressReading::new(9, 450))
    );
    assert_eq!(
        extract(&PageText::from_text("Level 14,132 XP"), &policy),
        Ok(ProgressReading::new(14, 132))
    );
}
