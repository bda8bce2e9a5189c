// secaudit - GPL-3.0-or-later
// This file is part of secaudit.
//
// Copyright (C) 2026 The secaudit Authors
//
// secaudit is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// secaudit is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with secaudit.  If not, see <https://www.gnu.org/licenses/>.

//! Pagination window planning.
//!
//! Decides which page numbers are visible in a bounded-width pager,
//! compressing hidden runs into ellipsis markers. The planner is a pure
//! function of `(current_page, total_pages)`; the hosting view owns the
//! [`PaginationState`] value and applies navigation results to it.

use std::ops::Range;

/// One entry of the rendered pager strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEntry {
    /// A clickable page number.
    Page(usize),
    /// One or more omitted page numbers.
    Ellipsis,
}

/// Direction for relative page navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Previous,
    Next,
}

/// Plan the visible pager window for `current_page` out of `total_pages`.
///
/// A page `p` is shown when `p == 1`, `p == total_pages`, or
/// `|p - current_page| <= 1`. Each hidden run collapses into a single
/// [`WindowEntry::Ellipsis`]: the run after page 1 only when
/// `current_page > 3`, the run before the last page only when
/// `current_page + 2 < total_pages`. With at most one page the pager is
/// suppressed entirely and the window is empty.
///
/// An out-of-range `current_page` is clamped, never an error.
pub fn plan_window(current_page: usize, total_pages: usize) -> Vec<WindowEntry> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let current = current_page.clamp(1, total_pages);
    let mut entries = vec![WindowEntry::Page(1)];

    if current > 3 {
        entries.push(WindowEntry::Ellipsis);
    }

    let lo = 2.max(current.saturating_sub(1));
    let hi = (total_pages - 1).min(current + 1);
    for page in lo..=hi {
        entries.push(WindowEntry::Page(page));
    }

    if current + 2 < total_pages {
        entries.push(WindowEntry::Ellipsis);
    }

    entries.push(WindowEntry::Page(total_pages));
    entries
}

/// Caller-owned pagination state.
///
/// All transitions return a new value; there is no hidden global. The
/// invariant `1 <= current_page <= max(total_pages, 1)` is re-established
/// by clamping on every transition, so no constructor or navigation call
/// can produce an out-of-range page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    current_page: usize,
    per_page: usize,
    total_items: usize,
}

impl PaginationState {
    /// Create a state on page 1 with no items yet. A `per_page` of zero is
    /// bumped to one.
    pub fn new(per_page: usize) -> Self {
        Self {
            current_page: 1,
            per_page: per_page.max(1),
            total_items: 0,
        }
    }

    /// Replace the item count, keeping the current page where possible.
    /// Shrinking the total clamps the page back into range.
    pub fn with_total_items(self, total_items: usize) -> Self {
        Self {
            total_items,
            ..self
        }
        .clamped()
    }

    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    pub const fn per_page(&self) -> usize {
        self.per_page
    }

    pub const fn total_items(&self) -> usize {
        self.total_items
    }

    /// Number of pages needed to hold all items; zero when empty.
    pub const fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.per_page)
    }

    /// Jump to an absolute page, clamped into range.
    pub fn go_to(self, page: usize) -> Self {
        Self {
            current_page: page,
            ..self
        }
        .clamped()
    }

    /// Step one page in `direction`, clamped at both ends. Idempotent at
    /// the boundaries: `Previous` on page 1 stays on page 1, `Next` on the
    /// last page stays there.
    pub fn navigate(self, direction: NavDirection) -> Self {
        let target = match direction {
            NavDirection::Previous => self.current_page.saturating_sub(1),
            NavDirection::Next => self.current_page + 1,
        };
        self.go_to(target)
    }

    /// The half-open item range `[start, end)` covered by the current page,
    /// clipped to the item count.
    pub fn page_range(&self) -> Range<usize> {
        let start = (self.current_page - 1).saturating_mul(self.per_page);
        let start = start.min(self.total_items);
        let end = start.saturating_add(self.per_page).min(self.total_items);
        start..end
    }

    /// Plan the pager window for this state. Empty when one page suffices.
    pub fn window(&self) -> Vec<WindowEntry> {
        plan_window(self.current_page, self.total_pages())
    }

    fn clamped(self) -> Self {
        Self {
            current_page: self.current_page.clamp(1, self.total_pages().max(1)),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(entries: &[WindowEntry]) -> Vec<usize> {
        entries
            .iter()
            .filter_map(|e| match e {
                WindowEntry::Page(p) => Some(*p),
                WindowEntry::Ellipsis => None,
            })
            .collect()
    }

    fn ellipsis_count(entries: &[WindowEntry]) -> usize {
        entries
            .iter()
            .filter(|e| matches!(e, WindowEntry::Ellipsis))
            .count()
    }

    #[test]
    fn test_window_suppressed_for_single_page() {
        assert!(plan_window(1, 0).is_empty());
        assert!(plan_window(1, 1).is_empty());
        assert!(plan_window(7, 1).is_empty());
    }

    #[test]
    fn test_middle_page_compresses_both_sides() {
        let window = plan_window(5, 10);
        assert_eq!(
            window,
            vec![
                WindowEntry::Page(1),
                WindowEntry::Ellipsis,
                WindowEntry::Page(4),
                WindowEntry::Page(5),
                WindowEntry::Page(6),
                WindowEntry::Ellipsis,
                WindowEntry::Page(10),
            ]
        );
    }

    #[test]
    fn test_small_pager_has_no_ellipsis() {
        let window = plan_window(2, 3);
        assert_eq!(pages(&window), vec![1, 2, 3]);
        assert_eq!(ellipsis_count(&window), 0);
    }

    #[test]
    fn test_first_and_last_page_windows() {
        assert_eq!(pages(&plan_window(1, 10)), vec![1, 2, 10]);
        assert_eq!(ellipsis_count(&plan_window(1, 10)), 1);

        assert_eq!(pages(&plan_window(10, 10)), vec![1, 9, 10]);
        assert_eq!(ellipsis_count(&plan_window(10, 10)), 1);
    }

    #[test]
    fn test_single_hidden_page_still_gets_ellipsis() {
        // Page 3 is the only hidden page; the ellipsis stands in for it
        // anyway. Accepted cosmetic approximation, pinned here.
        let window = plan_window(1, 4);
        assert_eq!(
            window,
            vec![
                WindowEntry::Page(1),
                WindowEntry::Page(2),
                WindowEntry::Ellipsis,
                WindowEntry::Page(4),
            ]
        );
    }

    #[test]
    fn test_boundaries_present_and_strictly_increasing() {
        for total in 2..=40 {
            for current in 1..=total {
                let ps = pages(&plan_window(current, total));
                assert_eq!(ps.first(), Some(&1), "total={total} current={current}");
                assert_eq!(ps.last(), Some(&total), "total={total} current={current}");
                assert!(
                    ps.windows(2).all(|w| w[0] < w[1]),
                    "not strictly increasing: total={total} current={current}"
                );
            }
        }
    }

    #[test]
    fn test_out_of_range_current_is_clamped() {
        assert_eq!(plan_window(0, 10), plan_window(1, 10));
        assert_eq!(plan_window(99, 10), plan_window(10, 10));
    }

    #[test]
    fn test_planning_is_pure() {
        assert_eq!(plan_window(5, 10), plan_window(5, 10));
    }

    #[test]
    fn test_navigation_clamps_at_boundaries() {
        let state = PaginationState::new(10).with_total_items(95);
        assert_eq!(state.total_pages(), 10);

        let first = state.navigate(NavDirection::Previous);
        assert_eq!(first.current_page(), 1);
        assert_eq!(
            first.navigate(NavDirection::Previous).current_page(),
            1,
            "previous is idempotent on page 1"
        );

        let last = state.go_to(10).navigate(NavDirection::Next);
        assert_eq!(last.current_page(), 10);
    }

    #[test]
    fn test_go_to_clamps() {
        let state = PaginationState::new(10).with_total_items(95);
        assert_eq!(state.go_to(0).current_page(), 1);
        assert_eq!(state.go_to(42).current_page(), 10);
        assert_eq!(state.go_to(7).current_page(), 7);
    }

    #[test]
    fn test_shrinking_total_pulls_page_back() {
        let state = PaginationState::new(10).with_total_items(95).go_to(10);
        assert_eq!(state.with_total_items(25).current_page(), 3);
        assert_eq!(state.with_total_items(0).current_page(), 1);
    }

    #[test]
    fn test_page_ranges_partition_items() {
        let state = PaginationState::new(10).with_total_items(95);
        let mut covered = 0;
        for page in 1..=state.total_pages() {
            let range = state.go_to(page).page_range();
            assert_eq!(range.start, covered);
            covered = range.end;
        }
        assert_eq!(covered, 95);

        let last = state.go_to(10).page_range();
        assert_eq!(last, 90..95);
    }

    #[test]
    fn test_empty_state_has_empty_range_and_window() {
        let state = PaginationState::new(10);
        assert_eq!(state.page_range(), 0..0);
        assert!(state.window().is_empty());
    }

    #[test]
    fn test_zero_per_page_is_bumped() {
        let state = PaginationState::new(0).with_total_items(3);
        assert_eq!(state.per_page(), 1);
        assert_eq!(state.total_pages(), 3);
    }
}
