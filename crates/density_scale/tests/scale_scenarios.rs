use css_values_units::{compute_length_px, parse_length_str, parse_number_str};
use css_variables::lookup_var;
use density_scale::{
    DensityScaler, FixedPixelRatio, InlineRootStyle, MissingRatioPolicy, RootStyle, ScaleConfig,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn installed_root(ratio: f64) -> InlineRootStyle {
    let mut root = InlineRootStyle::new();
    DensityScaler::new(FixedPixelRatio(ratio))
        .install(&mut root)
        .unwrap();
    root
}

#[test]
fn standard_density_writes_reference_factors() {
    init_logging();
    let root = installed_root(1.0);
    assert_eq!(root.property("--px-per-dp"), Some("0.6"));
    assert_eq!(root.property("--px-per-sp"), Some("1"));
    assert_eq!(root.to_style_attribute(), "--px-per-dp: 0.6; --px-per-sp: 1");
}

#[test]
fn double_density_doubles_factors() {
    init_logging();
    let root = installed_root(2.0);
    assert_eq!(root.property("--px-per-dp"), Some("1.2"));
    assert_eq!(root.property("--px-per-sp"), Some("2"));
}

#[test]
fn fractional_density() {
    init_logging();
    let root = installed_root(1.5);
    assert_eq!(root.property("--px-per-dp"), Some("0.9"));
    assert_eq!(root.property("--px-per-sp"), Some("1.5"));
}

#[test]
fn factors_follow_formula_for_positive_ratios() {
    init_logging();
    for ratio in [0.75, 1.0, 1.25, 1.333, 2.0, 2.625, 3.5, 4.0] {
        let scaler = DensityScaler::new(FixedPixelRatio(ratio));
        let dp = scaler.dp_scale().unwrap();
        let sp = scaler.sp_scale().unwrap();
        assert!((dp - ratio * 96.0 / 160.0).abs() < 1e-12, "dp at {ratio}: {dp}");
        assert!((sp - ratio).abs() < 1e-12, "sp at {ratio}: {sp}");

        let root = installed_root(ratio);
        let written = parse_number_str(root.property("--px-per-sp").unwrap()).unwrap();
        assert!((written.0 - ratio).abs() < 1e-6);
    }
}

#[test]
fn repeated_dp_application_is_stable() {
    init_logging();
    let scaler = DensityScaler::new(FixedPixelRatio(2.0));
    let mut root = InlineRootStyle::new();
    scaler.apply_dp_scale(&mut root).unwrap();
    let first = root.clone();
    scaler.apply_dp_scale(&mut root).unwrap();
    assert_eq!(root, first);
    assert_eq!(root.properties().len(), 1);
    assert_eq!(root.property("--px-per-dp"), Some("1.2"));
}

#[test]
fn ratio_is_read_on_every_call() {
    init_logging();
    let ratio = std::cell::Cell::new(1.0);
    let scaler = DensityScaler::new(|| Some(ratio.get()));
    let mut root = InlineRootStyle::new();
    scaler.install(&mut root).unwrap();
    assert_eq!(root.property("--px-per-sp"), Some("1"));

    ratio.set(3.0);
    scaler.install(&mut root).unwrap();
    assert_eq!(root.property("--px-per-sp"), Some("3"));
    assert_eq!(root.properties().len(), 2);
}

#[test]
fn missing_ratio_falls_back_to_standard_density() {
    init_logging();
    for reading in [None, Some(0.0), Some(-1.0), Some(f64::NAN)] {
        let scaler = DensityScaler::new(move || reading);
        let mut root = InlineRootStyle::new();
        scaler.install(&mut root).unwrap();
        assert_eq!(root.to_style_attribute(), "--px-per-dp: 0.6; --px-per-sp: 1");
    }
}

#[test]
fn missing_ratio_can_be_rejected() {
    init_logging();
    let config = ScaleConfig::default().with_missing_ratio(MissingRatioPolicy::Reject);
    let scaler = DensityScaler::with_config(|| None::<f64>, config);
    let mut root = InlineRootStyle::new();
    let error = scaler.install(&mut root).unwrap_err();
    assert_eq!(error.to_string(), "device pixel ratio is unavailable");
    assert!(root.properties().is_empty());
}

#[test]
fn custom_names_and_references() {
    init_logging();
    let config = ScaleConfig::new(320.0, 48.0).with_property_names("dp", "--sp");
    let scaler = DensityScaler::with_config(FixedPixelRatio(1.0), config);
    let mut root = InlineRootStyle::new();
    scaler.install(&mut root).unwrap();
    assert_eq!(root.property("--dp"), Some("0.3"));
    assert_eq!(root.property("--sp"), Some("2"));
}

#[test]
fn stylesheet_consumers_resolve_lengths() {
    init_logging();
    let scaler = DensityScaler::new(FixedPixelRatio(2.0));
    let mut root = InlineRootStyle::new();
    scaler.install(&mut root).unwrap();

    assert_eq!(
        lookup_var("var(--px-per-dp)", root.properties()),
        Some("1.2".to_owned())
    );
    assert_eq!(
        lookup_var("var(--px-per-xp, 1)", root.properties()),
        Some("1".to_owned())
    );

    let scale = scaler.scale().unwrap();
    let padding = compute_length_px(parse_length_str("12dp").unwrap(), scale);
    let body_text = compute_length_px(parse_length_str("14sp").unwrap(), scale);
    assert!((padding - 14.4).abs() < 1e-6, "12dp -> {padding}");
    assert!((body_text - 28.0).abs() < 1e-6, "14sp -> {body_text}");
}
