//! Linear min/max scan.

/// Smallest and largest element of `iter` in a single pass.
///
/// Returns `None` for an empty input. With duplicates, the first minimum and
/// the last maximum encountered are returned (the same choice as
/// `Iterator::min` and `Iterator::max`).
pub fn min_max<T, I>(iter: I) -> Option<(T, T)>
where
    T: Ord + Clone,
    I: IntoIterator<Item = T>,
{
    let mut iter = iter.into_iter();
    let first = iter.next()?;
    let mut min = first.clone();
    let mut max = first;
    for item in iter {
        if item < min {
            min = item;
        } else if item >= max {
            max = item;
        }
    }
    Some((min, max))
}
