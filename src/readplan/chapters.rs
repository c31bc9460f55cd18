//! Expansion of compact chapter-range notation.
//!
//! Plan datasets describe a day's chapters as short strings such as `"1-2"`,
//! `"3"` or `"1-2,4"`. [`parse_chapters`] turns those into the individual
//! chapter numbers that get rendered and tracked.
//!
//! Parsing never fails: a malformed segment simply contributes no chapters.

/// Widest range a single segment may expand to. No book has more chapters.
pub const MAX_SEGMENT_CHAPTERS: u32 = 150;

/// Expands a chapter-range string into its chapter numbers.
///
/// - Segments are comma separated; whitespace around each one is ignored.
/// - `start-end` is an inclusive ascending range. A reversed range, one with
///   a non-numeric end, or one spanning more than [`MAX_SEGMENT_CHAPTERS`]
///   chapters yields nothing.
/// - Anything else must be a single integer, or it yields nothing.
///
/// ```
/// use readplan::chapters::parse_chapters;
///
/// assert_eq!(parse_chapters("1-2,4"), vec![1, 2, 4]);
/// assert_eq!(parse_chapters("5-3"), Vec::<u32>::new());
/// ```
pub fn parse_chapters(spec: &str) -> Vec<u32> {
    spec.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .flat_map(expand_segment)
        .collect()
}

fn expand_segment(segment: &str) -> Vec<u32> {
    match segment.split_once('-') {
        Some((start, end)) => match (start.trim().parse::<u32>(), end.trim().parse::<u32>()) {
            (Ok(start), Ok(end)) if start <= end && end - start < MAX_SEGMENT_CHAPTERS => {
                (start..=end).collect()
            }
            _ => Vec::new(),
        },
        None => segment.parse::<u32>().map(|n| vec![n]).unwrap_or_default(),
    }
}
