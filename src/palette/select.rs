//! Greedy role assignment over a filtered candidate palette.
//!
//! Selection is an ordered, non-reversible pipeline: lightest, then
//! background, primary, secondary, highlight. Each stage scans candidates
//! in extraction order with strict comparisons, so the first-seen candidate
//! wins every tie. That ordering is part of the contract: two runs over
//! the same palette must assign identical roles.

use thiserror::Error;

use super::color::Color;
use super::filter::{self, Denylist};
use super::metrics;
use super::theme::Theme;

/// Weight pulling the lightest color toward the image average.
const BACKGROUND_AVERAGE_WEIGHT: f32 = 0.1;
/// Backgrounds below this relative luminance get lightened.
const BACKGROUND_LUMINANCE_FLOOR: f32 = 0.7;
/// Luminance and brightness above this get nudged off pure white.
const BACKGROUND_MAX_LIGHTNESS: f32 = 0.95;
/// Saturation/brightness pair that marks a background as too vivid.
const VIVID_SATURATION: f32 = 0.9;
const VIVID_BRIGHTNESS: f32 = 0.9;
/// Primaries under this contrast ratio against the background are darkened.
const MIN_PRIMARY_CONTRAST: f32 = 2.0;
const PRIMARY_DARKEN_FRACTION: f32 = 0.88;
/// Secondary target sits between primary and background brightness.
const SECONDARY_PRIMARY_WEIGHT: f32 = 0.4;
const SECONDARY_BACKGROUND_WEIGHT: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// No eligible colors remained once the denylist was applied to the
    /// extracted palette plus the average color.
    #[error("no eligible colors remained after denylist filtering")]
    EmptyCandidatePool,
}

/// Assign the four theme roles from an extracted palette and the image
/// average.
///
/// The average joins the candidate palette before filtering, exactly as if
/// the caller had appended it. Roles are pairwise distinct whenever at
/// least four distinct eligible colors survive the denylist; with fewer,
/// stages that run out of candidates draw from the full eligible palette
/// again and the returned theme reports
/// [`has_distinct_roles`](Theme::has_distinct_roles) `== false`.
pub fn extract_theme(
    extracted: &[Color],
    average: Color,
    denylist: &Denylist,
) -> Result<Theme, SelectionError> {
    let mut palette = extracted.to_vec();
    palette.push(average);

    let eligible = filter::remove_denylisted(&palette, denylist);
    if eligible.is_empty() {
        return Err(SelectionError::EmptyCandidatePool);
    }

    let lightest = pick_lightest(&eligible);
    let background = derive_background(lightest, average);

    let pool = filter::remove_exact(&eligible, background);
    let (primary, pool) = pick_primary(&pool, &eligible, background);
    let (secondary, pool) = pick_secondary(&pool, &eligible, primary, background);
    let highlight = pick_highlight(&pool, &eligible, background);

    Ok(Theme {
        background,
        primary,
        secondary,
        highlight,
        average,
        lightest,
    })
}

/// Starved stages fall back to the full eligible palette instead of
/// failing; roles may then repeat.
fn refill<'a>(pool: &'a [Color], eligible: &'a [Color]) -> &'a [Color] {
    if pool.is_empty() { eligible } else { pool }
}

/// Highest midtone score wins, but only when the candidate is also less
/// saturated than the running winner. Never narrows the pool.
fn pick_lightest(candidates: &[Color]) -> Color {
    let mut winner = candidates[0];
    for &candidate in candidates {
        if metrics::midtone_score(candidate) > metrics::midtone_score(winner)
            && metrics::saturation(candidate) < metrics::saturation(winner)
        {
            winner = candidate;
        }
    }
    winner
}

/// The background is computed, not drawn from the pool: the lightest color
/// pulled slightly toward the average, then corrected away from too-dark,
/// too-white and too-vivid extremes.
fn derive_background(lightest: Color, average: Color) -> Color {
    let mut background = lightest.blend(average, BACKGROUND_AVERAGE_WEIGHT);

    if metrics::luminance(background) < BACKGROUND_LUMINANCE_FLOOR {
        background = background.blend(Color::WHITE, 0.5);
    } else if metrics::luminance(background) > BACKGROUND_MAX_LIGHTNESS
        && metrics::brightness(background) > BACKGROUND_MAX_LIGHTNESS
    {
        background = background.blend(Color::BLACK, 0.02);
    }

    if metrics::saturation(background) > VIVID_SATURATION
        && metrics::brightness(background) > VIVID_BRIGHTNESS
    {
        background = background.blend(Color::WHITE, 0.8);
    }

    background
}

/// Maximize contrast against the background; a winner still under the
/// contrast floor is darkened hard toward black. The pre-darkening winner
/// is what leaves the pool.
fn pick_primary(pool: &[Color], eligible: &[Color], background: Color) -> (Color, Vec<Color>) {
    let pool = refill(pool, eligible);
    let mut winner = pool[0];
    for &candidate in pool {
        if metrics::contrast_ratio(candidate, background)
            > metrics::contrast_ratio(winner, background)
        {
            winner = candidate;
        }
    }

    let remaining = filter::remove_exact(pool, winner);
    let primary = if metrics::contrast_ratio(winner, background) < MIN_PRIMARY_CONTRAST {
        winner.blend(Color::BLACK, PRIMARY_DARKEN_FRACTION)
    } else {
        winner
    };

    (primary, remaining)
}

/// Closest brightness to a point weighted between primary and background.
fn pick_secondary(
    pool: &[Color],
    eligible: &[Color],
    primary: Color,
    background: Color,
) -> (Color, Vec<Color>) {
    let pool = refill(pool, eligible);
    let target = metrics::brightness(primary) * SECONDARY_PRIMARY_WEIGHT
        + metrics::brightness(background) * SECONDARY_BACKGROUND_WEIGHT;

    let mut winner = pool[0];
    for &candidate in pool {
        if (metrics::brightness(candidate) - target).abs()
            < (metrics::brightness(winner) - target).abs()
        {
            winner = candidate;
        }
    }

    let remaining = filter::remove_exact(pool, winner);
    (winner, remaining)
}

/// Furthest hue from the background, gated on being more saturated than
/// the background. The seed is the pool's first element and is never
/// checked against the gate, so a highlight less saturated than the
/// background can survive when nothing beats the seed on hue distance.
fn pick_highlight(pool: &[Color], eligible: &[Color], background: Color) -> Color {
    let pool = refill(pool, eligible);
    let mut winner = pool[0];
    for &candidate in pool {
        if metrics::hue_distance(background, candidate) > metrics::hue_distance(background, winner)
            && metrics::saturation(candidate) > metrics::saturation(background)
        {
            winner = candidate;
        }
    }
    winner
}
