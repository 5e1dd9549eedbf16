mod common;

use artwork_theme::palette::{
    Color, Denylist, SelectionError, extract_theme, metrics,
};
use common::{hex, reference_average, reference_palette};

#[test]
fn reference_palette_walks_the_whole_pipeline() {
    let colors = reference_palette();
    let average = reference_average();
    let theme = extract_theme(&colors, average, &Denylist::new()).expect("theme");

    // White has the top midtone score and zero saturation.
    assert_eq!(theme.lightest, hex("#ffffff"));

    // Background: white pulled 10% toward the gray average. Its relative
    // luminance (~0.89) sits between the correction thresholds, so no
    // adjustment fires.
    let expected_background = hex("#ffffff").blend(average, 0.1);
    assert_eq!(theme.background, expected_background);
    for channel in [
        theme.background.red(),
        theme.background.green(),
        theme.background.blue(),
    ] {
        assert!((channel - 0.950_196_08).abs() < 1e-6);
    }
    let background_luminance = metrics::luminance(theme.background);
    assert!(background_luminance > 0.7 && background_luminance < 0.95);

    // Black maximizes contrast against the light background.
    assert_eq!(theme.primary, hex("#000000"));
    assert!(metrics::contrast_ratio(theme.primary, theme.background) >= 2.0);

    // Target brightness 0.57: the gray average is the closest candidate.
    assert_eq!(theme.secondary, hex("#808080"));

    // Green edges out blue on folded hue distance from the background.
    assert_eq!(theme.highlight, hex("#00ff00"));

    assert!(theme.has_distinct_roles());
}

#[test]
fn theme_serializes_to_hex_json() {
    let theme = extract_theme(
        &reference_palette(),
        reference_average(),
        &Denylist::new(),
    )
    .expect("theme");
    let json = serde_json::to_string_pretty(&theme).expect("serialize");
    insta::assert_snapshot!(json, @r##"
    {
      "background": "#f2f2f2",
      "primary": "#000000",
      "secondary": "#808080",
      "highlight": "#00ff00",
      "average": "#808080",
      "lightest": "#ffffff"
    }
    "##);
}

#[test]
fn pipeline_is_reproducible_bit_for_bit() {
    let colors = reference_palette();
    let average = reference_average();
    let denylist: Denylist = ["#ff0000"].iter().collect();

    let first = extract_theme(&colors, average, &denylist).expect("theme");
    let second = extract_theme(&colors, average, &denylist).expect("theme");
    assert_eq!(first, second);
}

#[test]
fn empty_input_with_denylisted_average_fails() {
    let average = hex("#808080");
    let denylist: Denylist = ["#808080"].iter().collect();
    assert_eq!(
        extract_theme(&[], average, &denylist),
        Err(SelectionError::EmptyCandidatePool),
    );
}

#[test]
fn low_contrast_palette_darkens_primary() {
    // Nothing in this washed-out palette reaches the 2.0 contrast floor
    // against the near-white background, so the winner is pushed 88%
    // toward black.
    let colors = vec![
        hex("#e8e8e8"),
        hex("#d8d8d8"),
        hex("#c8c8c8"),
        hex("#b8b8b8"),
        hex("#f0f0f0"),
    ];
    let average = hex("#e0e0e0");
    let theme = extract_theme(&colors, average, &Denylist::new()).expect("theme");

    assert_eq!(theme.primary, hex("#b8b8b8").blend(Color::BLACK, 0.88));
    assert!(metrics::contrast_ratio(theme.primary, theme.background) >= 2.0);
}

#[test]
fn duplicate_input_colors_do_not_break_selection() {
    let gray = hex("#606060");
    let colors = vec![gray, gray, hex("#f0e0d0"), gray];
    let theme = extract_theme(&colors, hex("#a0a0a0"), &Denylist::new()).expect("theme");

    // Removing an assigned color removes all its copies at once; the
    // run still completes with roles drawn from what remains.
    assert!(colors.contains(&theme.secondary) || theme.secondary == hex("#a0a0a0"));
}

#[test]
fn starved_palette_reuses_colors_and_reports_it() {
    let only = hex("#445566");
    let theme = extract_theme(&[only], hex("#445566"), &Denylist::new()).expect("theme");
    assert!(!theme.has_distinct_roles());
    assert_eq!(theme.primary, only);
    assert_eq!(theme.secondary, only);
    assert_eq!(theme.highlight, only);
}
