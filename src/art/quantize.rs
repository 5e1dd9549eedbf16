//! Histogram quantization: N representative, mutually-distinct colors.
//!
//! Pixels are bucketed on the top three bits of each channel (512 buckets),
//! buckets are ranked by population, and each surviving bucket contributes
//! its mean color. A greedy distinctness pass then drops colors that sit
//! too close (squared RGB distance) to one already kept, so near-duplicate
//! shades of a dominant hue don't crowd out the rest of the image.
//!
//! Everything here is deterministic: bucket ranking ties break on the
//! ascending bucket key, never on iteration order.

use std::collections::HashMap;

use image::DynamicImage;

use crate::palette::Color;

/// Two kept colors must differ by at least this much, squared, summed
/// over 8-bit channels.
const MIN_DISTINCT_DISTANCE_SQ: u32 = 900;

/// Pixels with alpha at or below this are not counted.
const ALPHA_CUTOFF: u8 = 128;

struct Bucket {
    r_sum: u64,
    g_sum: u64,
    b_sum: u64,
    count: u64,
}

/// Extract up to `count` distinct representative colors, most dominant
/// first. Returns fewer when the image itself has fewer distinct regions;
/// an empty result only occurs for an image with no opaque pixels.
#[must_use]
pub fn distinct_colors(image: &DynamicImage, count: usize) -> Vec<Color> {
    let rgba = image.to_rgba8();

    let mut buckets: HashMap<u16, Bucket> = HashMap::new();
    for pixel in rgba.pixels() {
        let [r, g, b, a] = pixel.0;
        if a <= ALPHA_CUTOFF {
            continue;
        }
        let key = bucket_key(r, g, b);
        let bucket = buckets.entry(key).or_insert(Bucket {
            r_sum: 0,
            g_sum: 0,
            b_sum: 0,
            count: 0,
        });
        bucket.r_sum += u64::from(r);
        bucket.g_sum += u64::from(g);
        bucket.b_sum += u64::from(b);
        bucket.count += 1;
    }

    let mut ranked: Vec<(u16, Bucket)> = buckets.into_iter().collect();
    ranked.sort_by(|(key_a, a), (key_b, b)| b.count.cmp(&a.count).then(key_a.cmp(key_b)));

    let mut kept: Vec<(u8, u8, u8)> = Vec::with_capacity(count);
    for (_, bucket) in &ranked {
        if kept.len() == count {
            break;
        }
        let mean = (
            (bucket.r_sum / bucket.count) as u8,
            (bucket.g_sum / bucket.count) as u8,
            (bucket.b_sum / bucket.count) as u8,
        );
        if kept
            .iter()
            .all(|&existing| distance_sq(existing, mean) >= MIN_DISTINCT_DISTANCE_SQ)
        {
            kept.push(mean);
        }
    }

    kept.into_iter()
        .map(|(r, g, b)| Color::from_rgb8(r, g, b))
        .collect()
}

fn bucket_key(r: u8, g: u8, b: u8) -> u16 {
    (u16::from(r >> 5) << 6) | (u16::from(g >> 5) << 3) | u16::from(b >> 5)
}

fn distance_sq(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let dr = i32::from(a.0) - i32::from(b.0);
    let dg = i32::from(a.1) - i32::from(b.1);
    let db = i32::from(a.2) - i32::from(b.2);
    (dr * dr + dg * dg + db * db) as u32
}
