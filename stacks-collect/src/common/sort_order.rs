/// Specifies the direction of an ordering operation.
///
/// # Purpose
/// Selects ascending or descending order for `sort_with_order`,
/// `sort_by_order` and `sort_keys_with_order`. The plain `sort`/`sort_desc`
/// style shortcuts are built on it.
///
/// # Characteristics
/// - **Copy**: Can be copied instead of cloned
/// - **Comparable**: Can be compared for equality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Sort from smallest to largest (A to Z, 0 to 9)
    #[default]
    Ascending,
    /// Sort from largest to smallest (Z to A, 9 to 0)
    Descending,
}

impl SortOrder {
    /// Applies the direction to an ascending comparison result.
    pub fn apply(self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}
