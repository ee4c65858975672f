//! Query options for list endpoints.

/// A single `name=value` condition appended to a list request.
///
/// # Example
///
/// ```rust
/// use dnsimple::Filter;
///
/// let filter = Filter::new("name_like", "example");
/// assert_eq!(filter.name, "name_like");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Filter {
    /// The query parameter name (e.g. `name_like`).
    pub name: String,
    /// The value to match.
    pub value: String,
}

impl Filter {
    /// Creates a new filter.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Pagination, sorting and filtering for list endpoints.
///
/// Query parameters are emitted in a fixed order: the filter, then `page`,
/// `per_page` and `sort`. Unset fields are omitted.
///
/// # Example
///
/// ```rust
/// use dnsimple::{Filter, ListOptions};
///
/// let options = ListOptions::new()
///     .page(2)
///     .per_page(50)
///     .sort("expires_on:asc")
///     .filter(Filter::new("name_like", "example"));
///
/// let keys: Vec<_> = options.query_pairs().into_iter().map(|(k, _)| k).collect();
/// assert_eq!(keys, ["name_like", "page", "per_page", "sort"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// The page to fetch, starting at 1.
    pub page: Option<u32>,
    /// The number of items per page.
    pub per_page: Option<u32>,
    /// Sort order as `field:asc` or `field:desc`, comma separated.
    pub sort: Option<String>,
    /// An optional filter condition.
    pub filter: Option<Filter>,
}

impl ListOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page number.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Sets the sort order.
    #[must_use]
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Sets the filter.
    #[must_use]
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Returns the unencoded query parameters in emission order.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(filter) = &self.filter {
            pairs.push((filter.name.clone(), filter.value.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page".to_string(), per_page.to_string()));
        }
        if let Some(sort) = &self.sort {
            pairs.push(("sort".to_string(), sort.clone()));
        }
        pairs
    }
}
