//! Collection predicates

/// True when the slice holds at least `min` items
pub fn has_min_items<T>(items: &[T], min: usize) -> bool {
    items.len() >= min
}
