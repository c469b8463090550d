// web_app/listing.rs - Search filtering and pagination for the answers table
//
// Pure functions and a small state machine, kept free of Leptos types so the
// same code drives the table component and the tests.

use crate::web_app::model::StandardAnswer;

/// Rows shown per page on the standard answers table
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Case-insensitive substring match of `query` against the searchable fields.
///
/// An empty query matches every record.
pub fn matches_query(answer: &StandardAnswer, query: &str) -> bool {
    let needle = query.to_lowercase();
    answer
        .searchable_fields()
        .iter()
        .any(|value| value.to_lowercase().contains(&needle))
}

/// Filter records, preserving the fetched order.
pub fn filter_standard_answers<'a>(
    answers: &'a [StandardAnswer],
    query: &str,
) -> Vec<&'a StandardAnswer> {
    answers
        .iter()
        .filter(|answer| matches_query(answer, query))
        .collect()
}

/// Offset pagination over a filtered result count
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    pub total_items: usize,
    pub page_size: usize,
}

impl Pager {
    pub fn new(total_items: usize, page_size: usize) -> Self {
        Self {
            total_items,
            page_size: page_size.max(1),
        }
    }

    /// ceil(total / size); zero when there is nothing to show
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    /// Half-open index range for a 1-indexed page, clipped to the item count.
    pub fn bounds(&self, page: usize) -> std::ops::Range<usize> {
        let start = page.saturating_sub(1).saturating_mul(self.page_size);
        let end = start.saturating_add(self.page_size);
        start.min(self.total_items)..end.min(self.total_items)
    }

    /// Whether `page` has any rows; the pager is only drawn when it does.
    pub fn has_rows(&self, page: usize) -> bool {
        !self.bounds(page).is_empty()
    }

    pub fn can_go_prev(&self, page: usize) -> bool {
        page != 1
    }

    pub fn can_go_next(&self, page: usize) -> bool {
        page != self.total_pages()
    }
}

/// Slice of `items` visible on a 1-indexed page
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let pager = Pager::new(items.len(), page_size);
    &items[pager.bounds(page)]
}

/// Search text and page index owned by the table
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableState {
    pub query: String,
    /// 1-indexed
    pub current_page: usize,
    pub page_size: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            query: String::new(),
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TableState {
    /// Replace the query and jump back to the first page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.current_page = 1;
    }

    pub fn pager(&self, answers: &[StandardAnswer]) -> Pager {
        let filtered = answers
            .iter()
            .filter(|answer| matches_query(answer, &self.query))
            .count();
        Pager::new(filtered, self.page_size)
    }

    /// Rows for the current page after filtering
    pub fn visible<'a>(&self, answers: &'a [StandardAnswer]) -> Vec<&'a StandardAnswer> {
        let filtered = filter_standard_answers(answers, &self.query);
        page_slice(&filtered, self.current_page, self.page_size).to_vec()
    }

    pub fn shows_pager(&self, answers: &[StandardAnswer]) -> bool {
        self.pager(answers).has_rows(self.current_page)
    }

    pub fn prev_page(&mut self, answers: &[StandardAnswer]) {
        if self.pager(answers).can_go_prev(self.current_page) {
            self.current_page = self.current_page.saturating_sub(1).max(1);
        }
    }

    pub fn next_page(&mut self, answers: &[StandardAnswer]) {
        if self.pager(answers).can_go_next(self.current_page) {
            self.current_page += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(id: i32, keyword: &str, body: &str) -> StandardAnswer {
        StandardAnswer {
            id,
            keyword: keyword.to_string(),
            answer: body.to_string(),
            categories: vec![],
        }
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let answers = vec![answer(1, "vpn", "x"), answer(2, "", "y")];
        assert_eq!(filter_standard_answers(&answers, "").len(), 2);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let a = answer(1, "Refund Policy", "Money back");
        assert!(matches_query(&a, "refund"));
        assert!(matches_query(&a, "POLICY"));
        assert!(!matches_query(&a, "money"));
    }

    #[test]
    fn test_id_is_not_searched() {
        let a = answer(42, "vpn", "");
        assert!(!matches_query(&a, "42"));
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(Pager::new(0, 10).total_pages(), 0);
        assert_eq!(Pager::new(1, 10).total_pages(), 1);
        assert_eq!(Pager::new(10, 10).total_pages(), 1);
        assert_eq!(Pager::new(11, 10).total_pages(), 2);
    }

    #[test]
    fn test_bounds_clip_to_total() {
        let pager = Pager::new(25, 10);
        assert_eq!(pager.bounds(1), 0..10);
        assert_eq!(pager.bounds(3), 20..25);
        assert_eq!(pager.bounds(4), 25..25);
    }

    #[test]
    fn test_zero_page_size_is_treated_as_one() {
        let pager = Pager::new(3, 0);
        assert_eq!(pager.total_pages(), 3);
    }

    #[test]
    fn test_set_query_resets_page() {
        let mut state = TableState {
            current_page: 3,
            ..TableState::default()
        };
        state.set_query("vpn");
        assert_eq!(state.current_page, 1);
        assert_eq!(state.query, "vpn");
    }
}
