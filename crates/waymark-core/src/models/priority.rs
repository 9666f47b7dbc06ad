//! Priority label scoring.

/// Maps a priority label to its numeric level.
///
/// Matching is case-insensitive. Unknown labels score 0.
///
/// ```rust
/// use waymark_core::models::priority_level;
///
/// assert_eq!(priority_level("High"), 3);
/// assert_eq!(priority_level("medium"), 2);
/// assert_eq!(priority_level("LOW"), 1);
/// assert_eq!(priority_level("urgent"), 0);
/// ```
pub fn priority_level(priority: &str) -> i32 {
    match priority.to_lowercase().as_str() {
        "high" => 3,
        "medium" => 2,
        "low" => 1,
        _ => 0,
    }
}
