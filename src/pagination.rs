//! Generic filtered, sorted and paginated listing.
//!
//! Every listable entity supplies a [`ListConfig`] naming the text fields a
//! search term is matched against and the fields a caller may sort by. The
//! caller's [`ListParams`] are resolved against that configuration into a
//! [`ListPlan`], which a [`ListSource`] turns into one page of records plus
//! the total number of matches.

use serde::{Deserialize, Serialize};

/// Page used when the caller does not ask for one.
pub const DEFAULT_PAGE: i64 = 1;
/// Page size used when the caller does not ask for one.
pub const DEFAULT_LIMIT: i64 = 10;
/// Limit value that disables pagination and returns every match.
pub const UNLIMITED: i64 = -1;

/// Raw listing parameters as supplied by the caller.
///
/// Nothing here is validated: unknown sort fields and order values fall back
/// silently and page/limit are passed through as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl ListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    pub fn paginate(mut self, page: i64, limit: i64) -> Self {
        self.page = Some(page);
        self.limit = Some(limit);
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Per-entity listing capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListConfig {
    /// Fields OR-ed together when a search term is present.
    pub searchable_fields: &'static [&'static str],
    /// Allow-list of fields that may be used for ordering.
    pub sortable_fields: &'static [&'static str],
}

impl ListConfig {
    /// Returns the allow-listed spelling of `field`, if it is sortable.
    pub fn sortable(&self, field: &str) -> Option<&'static str> {
        self.sortable_fields
            .iter()
            .copied()
            .find(|candidate| *candidate == field)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Only the exact string `"ASC"` sorts ascending; everything else,
    /// including no value at all, sorts descending.
    pub fn resolve(order: Option<&str>) -> Self {
        match order {
            Some("ASC") => SortDirection::Asc,
            _ => SortDirection::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: &'static str,
    pub direction: SortDirection,
}

/// Offset/row-cap pair applied to the data query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub offset: i64,
    pub limit: i64,
}

/// Fully resolved query handed to a [`ListSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPlan {
    pub page: i64,
    pub limit: i64,
    /// Search term, present only when non-empty.
    pub search: Option<String>,
    pub searchable_fields: &'static [&'static str],
    /// `None` leaves the store's natural order.
    pub sort: Option<SortKey>,
    /// `None` when pagination is disabled.
    pub window: Option<Window>,
}

impl ListPlan {
    /// Resolves caller parameters against an entity's configuration.
    pub fn resolve(params: &ListParams, config: &ListConfig) -> Self {
        let page = params.page.unwrap_or(DEFAULT_PAGE);
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT);

        let search = params
            .search
            .as_deref()
            .filter(|term| !term.is_empty())
            .map(str::to_string);

        let sort = params
            .sort
            .as_deref()
            .and_then(|field| config.sortable(field))
            .map(|field| SortKey {
                field,
                direction: SortDirection::resolve(params.order.as_deref()),
            });

        // Page values below 1 are not clamped and may yield a negative offset.
        let window = (limit != UNLIMITED).then(|| Window {
            offset: page.saturating_sub(1).saturating_mul(limit),
            limit,
        });

        Self {
            page,
            limit,
            search,
            searchable_fields: config.searchable_fields,
            sort,
            window,
        }
    }

    /// `LIKE` pattern matching the search term anywhere in a field.
    pub fn like_pattern(&self) -> Option<String> {
        self.search.as_ref().map(|term| format!("%{term}%"))
    }
}

/// Pagination metadata echoed back with every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
}

/// One page of mapped records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListResult<T> {
    pub result: Vec<T>,
    pub meta: ListMeta,
}

/// Query capability the executor runs a [`ListPlan`] against.
pub trait ListSource {
    type Record;
    type Error;

    /// Loads the records matching the plan's filter, ordered and windowed.
    fn load(&mut self, plan: &ListPlan) -> Result<Vec<Self::Record>, Self::Error>;

    /// Counts the records matching the plan's filter, ignoring sort and window.
    fn count(&mut self, plan: &ListPlan) -> Result<i64, Self::Error>;
}

/// Runs a listing request: one data query, one count query, then maps every
/// raw record into its domain representation.
///
/// Store failures are returned unchanged.
pub fn execute<S, T>(
    store: &mut S,
    params: &ListParams,
    config: &ListConfig,
) -> Result<ListResult<T>, S::Error>
where
    S: ListSource + ?Sized,
    T: TryFrom<S::Record>,
    S::Error: From<T::Error>,
{
    let plan = ListPlan::resolve(params, config);

    let records = store.load(&plan)?;
    let total = store.count(&plan)?;

    let result = records
        .into_iter()
        .map(T::try_from)
        .collect::<Result<Vec<T>, T::Error>>()?;

    Ok(ListResult {
        result,
        meta: ListMeta {
            page: plan.page,
            limit: plan.limit,
            total,
        },
    })
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;
    use std::convert::Infallible;

    use super::*;

    const WIDGETS: ListConfig = ListConfig {
        searchable_fields: &["name"],
        sortable_fields: &["name", "price", "createdAt"],
    };

    #[derive(Debug, Clone, PartialEq)]
    struct Widget {
        name: String,
        price: f64,
        created_at: i64,
    }

    impl Widget {
        fn text(&self, field: &str) -> Option<&str> {
            match field {
                "name" => Some(&self.name),
                _ => None,
            }
        }

        fn compare(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => self.name.cmp(&other.name),
                "price" => self.price.total_cmp(&other.price),
                "createdAt" => self.created_at.cmp(&other.created_at),
                _ => Ordering::Equal,
            }
        }
    }

    /// In-memory store that also records the plans it was asked to run.
    #[derive(Default)]
    struct MemorySource {
        rows: Vec<Widget>,
        plans: Vec<ListPlan>,
    }

    impl MemorySource {
        fn with(rows: Vec<Widget>) -> Self {
            Self {
                rows,
                plans: Vec::new(),
            }
        }

        fn matching(&self, plan: &ListPlan) -> Vec<Widget> {
            self.rows
                .iter()
                .filter(|row| match &plan.search {
                    Some(term) => plan
                        .searchable_fields
                        .iter()
                        .any(|field| row.text(field).is_some_and(|v| v.contains(term.as_str()))),
                    None => true,
                })
                .cloned()
                .collect()
        }
    }

    impl ListSource for MemorySource {
        type Record = Widget;
        type Error = Infallible;

        fn load(&mut self, plan: &ListPlan) -> Result<Vec<Widget>, Infallible> {
            self.plans.push(plan.clone());
            let mut rows = self.matching(plan);
            if let Some(key) = plan.sort {
                rows.sort_by(|a, b| match key.direction {
                    SortDirection::Asc => a.compare(b, key.field),
                    SortDirection::Desc => b.compare(a, key.field),
                });
            }
            if let Some(window) = plan.window {
                let offset = window.offset.max(0) as usize;
                let limit = if window.limit < 0 {
                    usize::MAX
                } else {
                    window.limit as usize
                };
                rows = rows.into_iter().skip(offset).take(limit).collect();
            }
            Ok(rows)
        }

        fn count(&mut self, plan: &ListPlan) -> Result<i64, Infallible> {
            Ok(self.matching(plan).len() as i64)
        }
    }

    fn widget(name: &str, price: f64, created_at: i64) -> Widget {
        Widget {
            name: name.to_string(),
            price,
            created_at,
        }
    }

    fn twenty_five_widgets() -> MemorySource {
        MemorySource::with(
            (1..=25)
                .map(|n| widget(&format!("Widget-{n}"), n as f64, n))
                .collect(),
        )
    }

    fn run(store: &mut MemorySource, params: ListParams) -> ListResult<Widget> {
        match execute(store, &params, &WIDGETS) {
            Ok(result) => result,
            Err(never) => match never {},
        }
    }

    #[test]
    fn empty_params_resolve_to_first_page_of_ten() {
        let plan = ListPlan::resolve(&ListParams::new(), &WIDGETS);
        assert_eq!(plan.page, 1);
        assert_eq!(plan.limit, 10);
        assert_eq!(
            plan.window,
            Some(Window {
                offset: 0,
                limit: 10
            })
        );
        assert_eq!(plan.sort, None);
        assert_eq!(plan.search, None);
    }

    #[test]
    fn first_page_is_capped_and_total_counts_everything() {
        let mut store = twenty_five_widgets();
        let page = run(&mut store, ListParams::new().paginate(1, 10));
        assert_eq!(page.result.len(), 10);
        assert_eq!(
            page.meta,
            ListMeta {
                page: 1,
                limit: 10,
                total: 25
            }
        );
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let mut store = twenty_five_widgets();
        let page = run(&mut store, ListParams::new().paginate(3, 10));
        assert_eq!(page.result.len(), 5);
        assert_eq!(page.meta.total, 25);
    }

    #[test]
    fn unlimited_returns_every_match() {
        let mut store = twenty_five_widgets();
        let page = run(
            &mut store,
            ListParams::new().search("Widget-1").paginate(7, UNLIMITED),
        );
        assert_eq!(page.result.len(), 11);
        assert_eq!(page.meta.total, 11);
        assert_eq!(page.meta.page, 7);
        assert_eq!(page.meta.limit, -1);
        assert_eq!(store.plans[0].window, None);
    }

    #[test]
    fn total_ignores_pagination() {
        let mut store = twenty_five_widgets();
        for (page, limit) in [(1, 1), (2, 5), (30, 10), (1, UNLIMITED)] {
            let result = run(
                &mut store,
                ListParams::new().search("Widget-2").paginate(page, limit),
            );
            assert_eq!(result.meta.total, 7);
            if limit != UNLIMITED {
                assert!(result.result.len() as i64 <= limit);
            }
        }
    }

    #[test]
    fn unknown_sort_field_is_ignored() {
        let mut store = MemorySource::with(vec![
            widget("b", 30.0, 1),
            widget("a", 10.0, 2),
            widget("c", 20.0, 3),
        ]);
        let unsorted = run(&mut store, ListParams::new());
        let unknown = run(&mut store, ListParams::new().sort("unknownField").order("ASC"));
        assert_eq!(unsorted.result, unknown.result);
        assert_eq!(store.plans[1].sort, None);
    }

    #[test]
    fn sorts_ascending_only_for_exact_asc() {
        let mut store = MemorySource::with(vec![
            widget("x", 30.0, 1),
            widget("y", 10.0, 2),
            widget("z", 20.0, 3),
        ]);

        let asc = run(&mut store, ListParams::new().sort("price").order("ASC"));
        let prices: Vec<f64> = asc.result.iter().map(|w| w.price).collect();
        assert_eq!(prices, vec![10.0, 20.0, 30.0]);

        for order in [None, Some("asc"), Some("DESC"), Some("sideways")] {
            let mut params = ListParams::new().sort("price");
            params.order = order.map(str::to_string);
            let desc = run(&mut store, params);
            let prices: Vec<f64> = desc.result.iter().map(|w| w.price).collect();
            assert_eq!(prices, vec![30.0, 20.0, 10.0]);
        }
    }

    #[test]
    fn empty_search_does_not_filter() {
        let plan = ListPlan::resolve(&ListParams::new().search(""), &WIDGETS);
        assert_eq!(plan.search, None);
        assert_eq!(plan.like_pattern(), None);

        let plan = ListPlan::resolve(&ListParams::new().search("dg"), &WIDGETS);
        assert_eq!(plan.like_pattern().as_deref(), Some("%dg%"));
    }

    #[test]
    fn non_positive_pages_pass_through() {
        let plan = ListPlan::resolve(&ListParams::new().paginate(0, 10), &WIDGETS);
        assert_eq!(plan.page, 0);
        assert_eq!(plan.window.map(|w| w.offset), Some(-10));

        let plan = ListPlan::resolve(&ListParams::new().paginate(-2, 5), &WIDGETS);
        assert_eq!(plan.window.map(|w| w.offset), Some(-15));

        let plan = ListPlan::resolve(&ListParams::new().paginate(i64::MIN, 10), &WIDGETS);
        assert_eq!(plan.page, i64::MIN);
        assert_eq!(plan.window.map(|w| w.offset), Some(i64::MIN));
    }

    #[test]
    fn empty_store_echoes_resolved_meta() {
        let mut store = MemorySource::default();
        let page = run(&mut store, ListParams::new().paginate(4, 3).search("x"));
        assert!(page.result.is_empty());
        assert_eq!(
            page.meta,
            ListMeta {
                page: 4,
                limit: 3,
                total: 0
            }
        );
    }

    #[test]
    fn executes_exactly_one_data_query() {
        let mut store = twenty_five_widgets();
        run(&mut store, ListParams::new());
        assert_eq!(store.plans.len(), 1);
    }
}
