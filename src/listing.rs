//! Client-side search, filtering, sorting and pagination
//!
//! The backend returns whole collections; narrowing them down happens here,
//! the same way the web panel does it.

use chrono::{DateTime, Days, Months, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::models::time::parse_instant;
use crate::client::models::{
    Appointment, AppointmentStatus, Barber, Customer, CustomerKind, EntityId, Review,
};

/// Rows per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 8;

// ============================================================================
// Search
// ============================================================================

/// Types that can be matched against a free-text search term
pub trait Searchable {
    /// Text fields the search looks at
    fn search_fields(&self) -> Vec<String>;

    /// Case-insensitive substring match. A blank term matches everything.
    fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&term))
    }
}

fn collect_fields(id: &EntityId, fields: &[&Option<String>]) -> Vec<String> {
    fields
        .iter()
        .filter_map(|f| f.as_ref().cloned())
        .chain(std::iter::once(id.to_string()))
        .collect()
}

impl Searchable for Appointment {
    fn search_fields(&self) -> Vec<String> {
        collect_fields(&self.id, &[&self.customer_name, &self.service, &self.barber])
    }
}

impl Searchable for Customer {
    fn search_fields(&self) -> Vec<String> {
        collect_fields(&self.id, &[&self.name, &self.email, &self.phone])
    }
}

impl Searchable for Barber {
    fn search_fields(&self) -> Vec<String> {
        collect_fields(&self.id, &[&self.name, &self.specialty])
    }
}

// ============================================================================
// Filters
// ============================================================================

/// Predicate over a listed resource
pub trait Filter<T> {
    fn matches(&self, item: &T) -> bool;

    /// Keep only the matching items, preserving order
    fn apply(&self, items: Vec<T>) -> Vec<T> {
        items.into_iter().filter(|item| self.matches(item)).collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppointmentFilter {
    pub search: Option<String>,
    pub status: Option<AppointmentStatus>,
}

impl Filter<Appointment> for AppointmentFilter {
    fn matches(&self, item: &Appointment) -> bool {
        let search_ok = self
            .search
            .as_deref()
            .is_none_or(|term| item.matches_search(term));
        let status_ok = self.status.is_none_or(|s| item.status_kind() == Some(s));
        search_ok && status_ok
    }
}

#[derive(Debug, Clone, Default)]
pub struct CustomerFilter {
    pub search: Option<String>,
    pub kind: Option<CustomerKind>,
}

impl Filter<Customer> for CustomerFilter {
    fn matches(&self, item: &Customer) -> bool {
        let search_ok = self
            .search
            .as_deref()
            .is_none_or(|term| item.matches_search(term));
        let kind_ok = self
            .kind
            .is_none_or(|k| item.kind.as_deref() == Some(k.as_str()));
        search_ok && kind_ok
    }
}

#[derive(Debug, Clone, Default)]
pub struct BarberFilter {
    pub search: Option<String>,
    /// `Some(true)` keeps only active barbers, `Some(false)` only inactive
    pub active: Option<bool>,
}

impl Filter<Barber> for BarberFilter {
    fn matches(&self, item: &Barber) -> bool {
        let search_ok = self
            .search
            .as_deref()
            .is_none_or(|term| item.matches_search(term));
        let active_ok = self.active.is_none_or(|a| item.is_active() == a);
        search_ok && active_ok
    }
}

/// Whether a review must (or must not) carry a comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CommentFilter {
    /// Only reviews with a non-blank comment
    Com,
    /// Only reviews without a comment
    Sem,
}

/// Creation-time window for reviews
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    /// Same calendar day as now
    Today,
    /// The last seven days up to now
    Week,
    /// The last calendar month up to now
    Month,
    /// Inclusive date range; the end day counts up to 23:59:59.999
    Range { from: NaiveDate, to: NaiveDate },
}

impl Period {
    pub fn contains(&self, instant: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match *self {
            Period::Today => instant.date_naive() == now.date_naive(),
            Period::Week => now
                .checked_sub_days(Days::new(7))
                .is_some_and(|start| instant >= start && instant <= now),
            Period::Month => now
                .checked_sub_months(Months::new(1))
                .is_some_and(|start| instant >= start && instant <= now),
            Period::Range { from, to } => {
                let start = from.and_time(NaiveTime::MIN).and_utc();
                let end = NaiveTime::from_hms_milli_opt(23, 59, 59, 999)
                    .map(|t| to.and_time(t).and_utc());
                end.is_some_and(|end| instant >= start && instant <= end)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReviewFilter {
    pub rating: Option<u8>,
    pub comment: Option<CommentFilter>,
    pub period: Option<Period>,
    /// Reference instant for relative periods
    pub now: DateTime<Utc>,
}

impl Default for ReviewFilter {
    fn default() -> Self {
        Self {
            rating: None,
            comment: None,
            period: None,
            now: Utc::now(),
        }
    }
}

impl Filter<Review> for ReviewFilter {
    fn matches(&self, item: &Review) -> bool {
        let rating_ok = self.rating.is_none_or(|r| item.rating == Some(r));
        let comment_ok = match self.comment {
            None => true,
            Some(CommentFilter::Com) => item.has_comment(),
            Some(CommentFilter::Sem) => !item.has_comment(),
        };
        // A review without a readable date falls outside every period
        let period_ok = self.period.is_none_or(|period| {
            item.created_instant()
                .is_some_and(|at| period.contains(at, self.now))
        });
        rating_ok && comment_ok && period_ok
    }
}

// ============================================================================
// Sorting
// ============================================================================

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Comparable value extracted from a field. Missing values sort first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Missing,
    Number(i64),
    Text(String),
    Instant(DateTime<Utc>),
}

impl SortKey {
    fn text(value: Option<&str>) -> Self {
        value
            .map(|v| SortKey::Text(v.to_lowercase()))
            .unwrap_or(SortKey::Missing)
    }

    fn instant(value: Option<&str>) -> Self {
        value
            .and_then(parse_instant)
            .map(SortKey::Instant)
            .unwrap_or(SortKey::Missing)
    }

    fn id(id: &EntityId) -> Self {
        match id {
            EntityId::Number(n) => SortKey::Number(*n),
            EntityId::Text(s) if s.is_empty() => SortKey::Missing,
            EntityId::Text(s) => SortKey::Text(s.to_lowercase()),
        }
    }
}

/// Types that can be ordered by a named field
pub trait Sortable {
    type Field: Copy;

    fn sort_key(&self, field: Self::Field) -> SortKey;
}

/// Stable sort of `items` by `field`
pub fn sort_by<T: Sortable>(items: &mut [T], field: T::Field, direction: SortDirection) {
    items.sort_by(|a, b| {
        let ordering = a.sort_key(field).cmp(&b.sort_key(field));
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum AppointmentSort {
    #[default]
    Id,
    Nome,
    Servico,
    Profissional,
    /// Appointment day, or creation time when the day is missing
    Data,
    Status,
}

impl Sortable for Appointment {
    type Field = AppointmentSort;

    fn sort_key(&self, field: AppointmentSort) -> SortKey {
        match field {
            AppointmentSort::Id => SortKey::id(&self.id),
            AppointmentSort::Nome => SortKey::text(self.customer_name.as_deref()),
            AppointmentSort::Servico => SortKey::text(self.service.as_deref()),
            AppointmentSort::Profissional => SortKey::text(self.barber.as_deref()),
            AppointmentSort::Data => SortKey::instant(self.scheduled_or_created()),
            AppointmentSort::Status => SortKey::text(self.status.as_deref()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum CustomerSort {
    #[default]
    Id,
    Nome,
    Email,
    Tipo,
    CriadoEm,
}

impl Sortable for Customer {
    type Field = CustomerSort;

    fn sort_key(&self, field: CustomerSort) -> SortKey {
        match field {
            CustomerSort::Id => SortKey::id(&self.id),
            CustomerSort::Nome => SortKey::text(self.name.as_deref()),
            CustomerSort::Email => SortKey::text(self.email.as_deref()),
            CustomerSort::Tipo => SortKey::text(self.kind.as_deref()),
            CustomerSort::CriadoEm => SortKey::instant(self.created_at.as_deref()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum BarberSort {
    #[default]
    Id,
    Nome,
    Especialidade,
    Ativo,
}

impl Sortable for Barber {
    type Field = BarberSort;

    fn sort_key(&self, field: BarberSort) -> SortKey {
        match field {
            BarberSort::Id => SortKey::id(&self.id),
            BarberSort::Nome => SortKey::text(self.name.as_deref()),
            BarberSort::Especialidade => SortKey::text(self.specialty.as_deref()),
            BarberSort::Ativo => SortKey::Number(i64::from(self.is_active())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReviewSort {
    #[default]
    Data,
    Nota,
}

impl Sortable for Review {
    type Field = ReviewSort;

    fn sort_key(&self, field: ReviewSort) -> SortKey {
        match field {
            ReviewSort::Data => SortKey::instant(self.created_at.as_deref()),
            ReviewSort::Nota => self
                .rating
                .map(|r| SortKey::Number(i64::from(r)))
                .unwrap_or(SortKey::Missing),
        }
    }
}

// ============================================================================
// Pagination
// ============================================================================

/// One page of a filtered, sorted collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number that was requested
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Slice `items` into page `page` (1-based). A zero size falls back to
/// [`DEFAULT_PAGE_SIZE`]; pages outside `1..=total_pages` are empty.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let page_size = if page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    };
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size);

    let items = if page == 0 {
        Vec::new()
    } else {
        items
            .into_iter()
            .skip((page - 1).saturating_mul(page_size))
            .take(page_size)
            .collect()
    };

    Page {
        items,
        page,
        page_size,
        total_items,
        total_pages,
    }
}

/// Filter, sort and paginate in one pass
pub fn query<T, F>(
    items: Vec<T>,
    filter: &F,
    sort: Option<(T::Field, SortDirection)>,
    page: usize,
    page_size: usize,
) -> Page<T>
where
    T: Sortable,
    F: Filter<T>,
{
    let mut items = filter.apply(items);
    if let Some((field, direction)) = sort {
        sort_by(&mut items, field, direction);
    }
    paginate(items, page, page_size)
}
