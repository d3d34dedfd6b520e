//! Integration tests for the rendering contract.
//!
//! Covers the concrete button scenarios plus property tests for determinism,
//! defaults and accessible-name mirroring.

use std::cell::Cell;

use proptest::prelude::*;
use pushbutton::{
    render, render_html, resolve, ButtonArgs, ButtonConfig, ColorToken, ConfigError, ElementKind,
    VariantToken, BASE_STYLES,
};

fn classes(element_class: &str) -> Vec<&str> {
    element_class.split(' ').collect()
}

#[test]
fn test_solid_dark_button() {
    let element = render(
        ButtonConfig::new("Button")
            .variant(VariantToken::Solid)
            .color(ColorToken::Dark),
    )
    .unwrap();

    assert_eq!(element.kind(), ElementKind::Button);
    assert_eq!(element.text(), "Button");
    assert_eq!(element.accessible_name(), "Button");
    assert!(classes(element.class()).contains(&"bg-gray-800"));
}

#[test]
fn test_outlined_green_button() {
    let element = render(
        ButtonConfig::new("Button")
            .variant(VariantToken::Outlined)
            .color(ColorToken::Green),
    )
    .unwrap();

    let list = classes(element.class());
    assert!(list.contains(&"border"));
    assert!(list.contains(&"border-green-600"));
    // Outlined has no resting fill, only a hover fill.
    assert!(!list.contains(&"bg-green-600"));
    assert!(list.contains(&"hover:bg-green-600"));
    assert_eq!(element.accessible_name(), "Button");
}

#[test]
fn test_label_only_defaults_to_solid_dark() {
    let element = render(ButtonConfig::new("Save")).unwrap();
    let explicit = render(
        ButtonConfig::new("Save")
            .variant(VariantToken::Solid)
            .color(ColorToken::Dark),
    )
    .unwrap();

    assert_eq!(element, explicit);
    assert_eq!(element.class(), resolve(VariantToken::Solid, ColorToken::Dark));
}

#[test]
fn test_color_without_variant_is_solid() {
    let element = render(ButtonConfig::new("Go").color(ColorToken::Green)).unwrap();
    assert_eq!(element.class(), resolve(VariantToken::Solid, ColorToken::Green));
    assert!(classes(element.class()).contains(&"bg-green-600"));
}

#[test]
fn test_every_cell_starts_with_base_styles() {
    for variant in VariantToken::ALL {
        for color in ColorToken::ALL {
            let resolved = resolve(variant, color);
            assert!(resolved.starts_with(BASE_STYLES), "{variant}/{color}: {resolved}");
            assert!(resolved.len() > BASE_STYLES.len());
        }
    }
}

#[test]
fn test_activation_invokes_callback_once_without_arguments() {
    let calls = Cell::new(0u32);
    let on_click = || calls.set(calls.get() + 1);
    let element = render(ButtonConfig::new("Go").on_click(&on_click)).unwrap();

    element.activate();
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_activation_without_callback_is_silent() {
    let element = render(ButtonConfig::new("Go")).unwrap();
    assert!(!element.has_handler());
    element.activate();
}

#[test]
#[should_panic(expected = "handler failed")]
fn test_callback_panic_propagates() {
    let on_click = || panic!("handler failed");
    let element = render(ButtonConfig::new("Go").on_click(&on_click)).unwrap();
    element.activate();
}

#[test]
fn test_empty_label_is_rejected() {
    assert_eq!(
        render(ButtonConfig::new("")).unwrap_err(),
        ConfigError::MissingLabel
    );
    assert_eq!(
        render(ButtonConfig::new("   ")).unwrap_err(),
        ConfigError::MissingLabel
    );
}

#[test]
fn test_untyped_scenarios() {
    let args = ButtonArgs::from_json(r#"{"variant": "outlined", "color": "green", "label": "Button"}"#)
        .unwrap();
    let element = render(args.into_config(None).unwrap()).unwrap();
    assert_eq!(element.class(), resolve(VariantToken::Outlined, ColorToken::Green));

    let args = ButtonArgs::from_json(r#"{"color": "blue", "label": "Button"}"#).unwrap();
    assert_eq!(
        args.into_config(None).unwrap_err(),
        ConfigError::InvalidConfiguration {
            field: "color",
            value: "blue".to_string(),
        }
    );
}

#[test]
fn test_html_attributes_mirror_label() {
    let html = render_html(ButtonConfig::new("Save & exit")).unwrap();
    assert!(html.contains(r#"aria-label="Save &amp; exit""#));
    assert!(html.contains(">Save &amp; exit</button>"));
}

fn variant_strategy() -> impl Strategy<Value = VariantToken> {
    prop::sample::select(VariantToken::ALL.to_vec())
}

fn color_strategy() -> impl Strategy<Value = ColorToken> {
    prop::sample::select(ColorToken::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_resolve_is_deterministic(variant in variant_strategy(), color in color_strategy()) {
        let first = resolve(variant, color).to_string();
        let second = resolve(variant, color).to_string();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_accessible_name_equals_label(label in "\\PC*[^\\s]\\PC*") {
        let element = render(ButtonConfig::new(label.clone())).unwrap();
        prop_assert_eq!(element.accessible_name(), label.as_str());
        prop_assert_eq!(element.text(), label.as_str());
    }

    #[test]
    fn prop_defaults_match_explicit(label in "[a-zA-Z0-9 ]{0,12}[a-zA-Z0-9]") {
        let implicit = render(ButtonConfig::new(label.clone())).unwrap();
        let explicit = render(
            ButtonConfig::new(label)
                .variant(VariantToken::Solid)
                .color(ColorToken::Dark),
        )
        .unwrap();
        prop_assert_eq!(implicit, explicit);
    }
}
