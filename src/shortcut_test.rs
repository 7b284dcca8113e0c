use super::*;

#[test]
fn ctrl_shift_d_matches() {
    assert!(KeyChord::new("D").with_ctrl().with_shift().is_theme_toggle());
}

#[test]
fn cmd_shift_d_matches() {
    assert!(KeyChord::new("D").with_meta().with_shift().is_theme_toggle());
}

#[test]
fn alt_does_not_block_match() {
    assert!(KeyChord::new("D").with_ctrl().with_shift().with_alt().is_theme_toggle());
}

#[test]
fn shift_is_required() {
    assert!(!KeyChord::new("D").with_ctrl().is_theme_toggle());
    assert!(!KeyChord::new("D").with_meta().is_theme_toggle());
}

#[test]
fn ctrl_or_meta_is_required() {
    assert!(!KeyChord::new("D").with_shift().is_theme_toggle());
    assert!(!KeyChord::new("D").with_alt().with_shift().is_theme_toggle());
}

#[test]
fn key_comparison_is_case_sensitive() {
    assert!(!KeyChord::new("d").with_ctrl().with_shift().is_theme_toggle());
}

#[test]
fn other_keys_do_not_match() {
    assert!(!KeyChord::new("E").with_ctrl().with_shift().is_theme_toggle());
    assert!(!KeyChord::new("Delete").with_ctrl().with_shift().is_theme_toggle());
}
