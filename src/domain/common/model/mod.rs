//! Shared domain types (selection query, selection result, listable items)

use chrono::{DateTime, Utc};

/// Anything the data selector can filter, sort and paginate.
///
/// Implemented directly on the Kubernetes wire types, so the pipeline hands
/// back the same values it was given.
pub trait DataCell {
    /// Creation time of the record. `None` sorts as the oldest possible item.
    fn creation_time(&self) -> Option<DateTime<Utc>>;

    /// Name used by the substring filter. Missing names read as `""`.
    fn name(&self) -> &str;
}

/// Filter and pagination parameters for one list request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataSelectQuery {
    pub filter: FilterQuery,
    pub paginate: PaginateQuery,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    /// Case-sensitive substring; empty matches everything.
    pub name: String,
}

/// `limit` items per page, 1-based `page`. Both must be positive to paginate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginateQuery {
    pub limit: i64,
    pub page: i64,
}

impl DataSelectQuery {
    pub fn new(filter_name: impl Into<String>, limit: i64, page: i64) -> Self {
        Self {
            filter: FilterQuery {
                name: filter_name.into(),
            },
            paginate: PaginateQuery { limit, page },
        }
    }
}

/// Page of selected items.
#[derive(Debug, Clone)]
pub struct DataSelection<T> {
    pub items: Vec<T>,
    /// Items that matched the filter, before pagination.
    pub total: usize,
}
