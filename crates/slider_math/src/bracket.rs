/// Find the pair of neighbouring indices that bracket `query` in an
/// ascending sequence of breakpoints.
///
/// Scans forward while `breakpoints[i] <= query`, then clamps the stopping
/// index into `1..=len - 1`. The bracket is `(index - 1, index)`, so
/// queries below the first breakpoint use the first pair and queries past
/// the last use the last pair. Equal breakpoints resolve to the later index.
///
/// Returns `None` if there are fewer than two breakpoints.
///
/// ```
/// # use slider_math::bracket;
/// assert_eq!(bracket([0.0, 0.5, 1.0], 0.25), Some((0, 1)));
/// assert_eq!(bracket([0.0, 0.5, 1.0], 0.5), Some((1, 2)));
/// assert_eq!(bracket([0.0, 0.5, 1.0], 7.0), Some((1, 2)));
/// assert_eq!(bracket([0.3], 0.3), None);
/// ```
pub fn bracket<I>(breakpoints: I, query: f32) -> Option<(usize, usize)>
where
    I: IntoIterator<Item = f32>,
{
    let mut count = 0;
    let mut index = None;
    for (i, location) in breakpoints.into_iter().enumerate() {
        count = i + 1;
        if index.is_none() && query < location {
            index = Some(i);
        }
    }
    if count < 2 {
        return None;
    }
    let index = index.unwrap_or(count).clamp(1, count - 1);
    Some((index - 1, index))
}
