//! Letter point values
//!
//! Points are a process-wide constant table indexed by `letter - b'a'`.

/// Base points for `a` through `z`
pub const LETTER_POINTS: [u32; 26] = [
    1,  // a
    4,  // b
    4,  // c
    2,  // d
    1,  // e
    4,  // f
    1,  // g
    4,  // h
    1,  // i
    10, // j
    1,  // k
    1,  // l
    3,  // m
    1,  // n
    1,  // o
    4,  // p
    10, // q
    1,  // r
    1,  // s
    1,  // t
    2,  // u
    4,  // v
    4,  // w
    1,  // x
    4,  // y
    1,  // z
];

/// Index of a lowercase ASCII letter into 26-entry tables
///
/// Returns `None` for anything outside `a..=z`.
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> Option<usize> {
    if letter.is_ascii_lowercase() {
        Some((letter - b'a') as usize)
    } else {
        None
    }
}

/// Base points of a lowercase ASCII letter
///
/// # Examples
/// ```
/// use wordgrid_solver::core::letter_points;
///
/// assert_eq!(letter_points(b'a'), Some(1));
/// assert_eq!(letter_points(b'q'), Some(10));
/// assert_eq!(letter_points(b'A'), None);
/// ```
#[inline]
#[must_use]
pub const fn letter_points(letter: u8) -> Option<u32> {
    match letter_index(letter) {
        Some(idx) => Some(LETTER_POINTS[idx]),
        None => None,
    }
}
