use artwork_theme::palette::{
    Color, Denylist, SelectionError, ThemeRole, extract_theme, metrics,
};
use proptest::prelude::*;

fn arb_color() -> impl Strategy<Value = Color> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Color::from_rgb8(r, g, b))
}

proptest! {
    #[test]
    fn hue_distance_is_bounded_and_symmetric(a in arb_color(), b in arb_color()) {
        let dist = metrics::hue_distance(a, b);
        prop_assert!((0.0..=0.5).contains(&dist));
        prop_assert_eq!(dist, metrics::hue_distance(b, a));
    }

    #[test]
    fn contrast_ratio_is_symmetric_and_bounded(a in arb_color(), b in arb_color()) {
        let ratio = metrics::contrast_ratio(a, b);
        prop_assert!(ratio >= 1.0);
        prop_assert!(ratio <= 21.0 + 1e-3);
        prop_assert_eq!(ratio, metrics::contrast_ratio(b, a));
        prop_assert!((metrics::contrast_ratio(a, a) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn extraction_is_deterministic(
        colors in prop::collection::vec(arb_color(), 1..8),
        average in arb_color(),
    ) {
        let denylist = Denylist::new();
        prop_assert_eq!(
            extract_theme(&colors, average, &denylist),
            extract_theme(&colors, average, &denylist),
        );
    }

    #[test]
    fn denylisted_colors_never_win_a_pool_selection(
        colors in prop::collection::vec(arb_color(), 2..8),
        average in arb_color(),
    ) {
        let denylist: Denylist = [colors[0].hex()].iter().collect();
        let inputs: Vec<Color> = colors.iter().copied().chain([average]).collect();

        match extract_theme(&colors, average, &denylist) {
            Ok(theme) => {
                for role in ThemeRole::ALL {
                    let color = theme.role(role);
                    // Computed colors (the blended background, a darkened
                    // primary) can land anywhere; anything drawn from the
                    // candidate pool must respect the denylist.
                    if inputs.contains(&color) {
                        prop_assert!(!denylist.contains(color), "{role:?} was denylisted");
                    }
                }
            }
            Err(SelectionError::EmptyCandidatePool) => {
                prop_assert!(inputs.iter().all(|c| denylist.contains(*c)));
            }
        }
    }

    #[test]
    fn five_distinct_colors_yield_distinct_roles(
        triples in prop::collection::hash_set(any::<(u8, u8, u8)>(), 5),
        average in arb_color(),
    ) {
        let colors: Vec<Color> = triples
            .into_iter()
            .map(|(r, g, b)| Color::from_rgb8(r, g, b))
            .collect();
        let theme = extract_theme(&colors, average, &Denylist::new()).unwrap();
        prop_assert!(theme.has_distinct_roles());
    }

    #[test]
    fn primary_meets_contrast_floor_or_was_darkened(
        colors in prop::collection::vec(arb_color(), 1..8),
        average in arb_color(),
    ) {
        let theme = extract_theme(&colors, average, &Denylist::new()).unwrap();
        let ratio = metrics::contrast_ratio(theme.primary, theme.background);
        let darkened_from_candidate = colors
            .iter()
            .chain([&average])
            .any(|c| c.blend(Color::BLACK, 0.88) == theme.primary);
        prop_assert!(ratio >= 2.0 || darkened_from_candidate);
    }
}
