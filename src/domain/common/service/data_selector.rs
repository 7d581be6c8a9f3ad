use std::cmp::Reverse;

use crate::domain::common::model::{DataCell, DataSelectQuery, DataSelection};

/// Filter by name, count, sort newest first, then cut out the requested page.
///
/// The order is fixed: `total` is taken after filtering, and pagination
/// always operates on the sorted sequence.
pub fn select<T: DataCell>(items: Vec<T>, query: &DataSelectQuery) -> DataSelection<T> {
    let filtered = filter(items, &query.filter.name);
    let total = filtered.len();

    let sorted = sort(filtered);
    let items = paginate(sorted, query.paginate.limit, query.paginate.page);

    DataSelection { items, total }
}

/// Keep items whose name contains `pattern`. An empty pattern keeps everything.
pub fn filter<T: DataCell>(items: Vec<T>, pattern: &str) -> Vec<T> {
    if pattern.is_empty() {
        return items;
    }

    items
        .into_iter()
        .filter(|item| item.name().contains(pattern))
        .collect()
}

/// Stable sort by creation time, newest first.
pub fn sort<T: DataCell>(mut items: Vec<T>) -> Vec<T> {
    items.sort_by_cached_key(|item| Reverse(item.creation_time()));
    items
}

/// Slice out page `page` (1-based) of `limit` items.
///
/// Non-positive `limit` or `page` disables pagination. A page past the end is
/// empty.
pub fn paginate<T>(mut items: Vec<T>, limit: i64, page: i64) -> Vec<T> {
    if limit <= 0 || page <= 0 {
        return items;
    }

    let len = items.len();
    let start = limit
        .checked_mul(page - 1)
        .and_then(|start| usize::try_from(start).ok());

    let Some(start) = start.filter(|start| *start < len) else {
        return Vec::new();
    };

    // An overflowing end is clamped like any other end past the last item
    let end = limit
        .checked_mul(page)
        .and_then(|end| usize::try_from(end).ok())
        .map_or(len, |end| end.min(len));

    items.truncate(end);
    items.split_off(start)
}
