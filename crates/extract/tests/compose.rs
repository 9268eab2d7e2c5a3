//! Full-configuration composition: every unit against the default theme,
//! artifacts on disk.

use extract::{CLASS_FILE, VARIANT_FILE, write_artifacts};
use rules::{Config, DEFAULT_VARIANTS, Resolved};
use std::fs;

fn resolve_everything() -> Resolved {
    let theme = theme::default_theme();
    let root = tempfile::tempdir().unwrap();
    for subdir in ["24/outline", "16/solid", "20/solid", "24/solid"] {
        fs::create_dir_all(root.path().join(subdir)).unwrap();
    }
    fs::write(root.path().join("16/solid/home.svg"), "<svg/>").unwrap();
    fs::write(root.path().join("24/outline/home.svg"), "<svg/>").unwrap();

    let config = Config::new().variants(DEFAULT_VARIANTS);
    let config = utility::install(config);
    let config = component::install(config);
    let config = config.unit("heroicons", component::heroicons(root.path()));
    // The icon files are read inside resolve, so keep the tempdir alive.
    let resolved = config.resolve(&theme).unwrap();
    drop(root);
    resolved
}

#[test]
fn the_full_configuration_resolves_and_covers_every_unit_family() {
    let resolved = resolve_everything();
    let classes = resolved.class_list();
    let has = |name: &str| classes.iter().any(|class| class == name);

    // One representative per unit.
    assert!(has("bs-4"));
    assert!(has("is-full"));
    assert!(has("mlb-4"));
    assert!(has("-mlb-4"));
    assert!(has("plb-4"));
    assert!(has("inset-block-4"));
    assert!(has("block-start-1/2"));
    assert!(has("gap-col-4"));
    assert!(has("rounded-be"));
    assert!(has("border-lb"));
    assert!(has("border-be-red-500"));
    assert!(has("border-be-red-500/50"));
    assert!(has("divide-b-reverse"));
    assert!(has("space-i-4"));
    assert!(has("scroll-mbs-4"));
    assert!(has("scroll-pie-4"));
    assert!(has("snap-inline"));
    assert!(has("overflow-block-auto"));
    assert!(has("overscroll-inline-none"));
    assert!(has("caption-block-end"));
    assert!(has("resize-inline"));
    assert!(has("el-box-4"));
    assert!(has("el-center-md"));
    assert!(has("el-cluster-4"));
    assert!(has("el-cover-h1"));
    assert!(has("el-frame-video"));
    assert!(has("el-grid-64"));
    assert!(has("el-icon"));
    assert!(has("el-imposter-fixed"));
    assert!(has("el-reel-4"));
    assert!(has("el-sidebar-1/3"));
    assert!(has("el-stack-split-2"));
    assert!(has("el-switcher-limit-3"));
    assert!(has("hero-home"));
    assert!(has("hero-home-micro"));

    // The palette DEFAULT never realizes as a bare color class.
    assert!(!has("border-be-DEFAULT"));
}

#[test]
fn generated_css_spot_checks() {
    let css = resolve_everything().to_css();
    assert!(css.contains(".bs-4 {\n  block-size: 1rem;\n}"));
    assert!(css.contains(".bs-full {\n  block-size: 100%;\n}"));
    assert!(css.contains(".mbs-4 {\n  margin-block-start: 1rem;\n}"));
    assert!(css.contains(".hero-home-micro {"));
    assert!(css.contains("url('data:image/svg+xml;utf8,<svg/>')"));
    // Physical directions never leak out of the logical property mapping.
    assert!(!css.contains("margin-top"));
    assert!(!css.contains("padding-left"));
}

#[test]
fn artifacts_are_idempotent() {
    let resolved = resolve_everything();
    let out = tempfile::tempdir().unwrap();

    write_artifacts(&resolved, out.path()).unwrap();
    let classes_first = fs::read(out.path().join(CLASS_FILE)).unwrap();
    let variants_first = fs::read(out.path().join(VARIANT_FILE)).unwrap();

    write_artifacts(&resolved, out.path()).unwrap();
    assert_eq!(fs::read(out.path().join(CLASS_FILE)).unwrap(), classes_first);
    assert_eq!(fs::read(out.path().join(VARIANT_FILE)).unwrap(), variants_first);

    let classes = String::from_utf8(classes_first).unwrap();
    assert!(classes.lines().any(|line| line == "bs-4"));
    assert!(classes.lines().any(|line| line == "border-be-red-500/50"));

    let variants = String::from_utf8(variants_first).unwrap();
    let listed: Vec<&str> = variants.lines().collect();
    assert_eq!(listed.len(), DEFAULT_VARIANTS.len());
    assert!(listed.contains(&"sm"));
    assert!(listed.contains(&"dark"));
}
