//! Bounded quality adjustment.
//!
//! Quality moves one unit at a time. Every unit step checks the bound before
//! moving, so a multi-step adjustment stops at the bound instead of
//! overshooting and being clamped afterwards.

/// Quality floor for every non-legendary item.
pub const MIN_QUALITY: i32 = 0;

/// Quality ceiling for every non-legendary item.
pub const MAX_QUALITY: i32 = 50;

/// Increase `quality` by one, `steps` times, skipping steps at [`MAX_QUALITY`].
pub fn raise(quality: &mut i32, steps: u32) {
    for _ in 0..steps {
        if *quality < MAX_QUALITY {
            *quality += 1;
        }
    }
}

/// Decrease `quality` by one, `steps` times, skipping steps at [`MIN_QUALITY`].
pub fn lower(quality: &mut i32, steps: u32) {
    for _ in 0..steps {
        if *quality > MIN_QUALITY {
            *quality -= 1;
        }
    }
}

/// Whether `quality` lies inside the closed range `[MIN_QUALITY, MAX_QUALITY]`.
pub fn in_bounds(quality: i32) -> bool {
    (MIN_QUALITY..=MAX_QUALITY).contains(&quality)
}
