use super::*;

#[test]
fn page_class_prefixes_theme() {
    assert_eq!(page_class("theme-classic"), "page theme-classic");
}

#[test]
fn each_variant_gets_its_own_theme() {
    let classic = page_class(copy_for(Variant::Classic).theme_class);
    let arcade = page_class(copy_for(Variant::Arcade).theme_class);
    assert_ne!(classic, arcade);
}
