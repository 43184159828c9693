//! The entry list embedded in the browser panel.
//!
//! [EntryList] owns everything about the visible list that the navigation state machine
//! does not care about: cursor, paging and the fuzzy filter. The state machine only
//! talks to it through [EntryList::set_items], [EntryList::selected_item],
//! [EntryList::reset_filter], [EntryList::set_size] and friends, and forwards any key it
//! does not handle itself to [EntryList::handle_key].

use crate::core::Entry;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

/// Rows of the list area not used by items: title, spacer and status line.
const CHROME_ROWS: u16 = 3;
/// Extra row taken by the short help bar when shown.
const HELP_ROWS: u16 = 1;

/// Whether and how a filter is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterState {
    /// No filter, all items shown.
    Unfiltered,
    /// The query is being typed, keys go to the query.
    Filtering,
    /// A query was accepted and narrows the shown items.
    Applied,
}

pub struct EntryList {
    items: Vec<Entry>,
    /// Indices into `items` of the shown entries, in display order.
    shown: Vec<usize>,
    cursor: usize,
    filter: String,
    filter_state: FilterState,
    title: String,
    width: u16,
    height: u16,
    show_help: bool,
    matcher: SkimMatcherV2,
}

impl EntryList {
    pub fn new(items: Vec<Entry>, width: u16, height: u16) -> Self {
        let mut list = EntryList {
            items: Vec::new(),
            shown: Vec::new(),
            cursor: 0,
            filter: String::new(),
            filter_state: FilterState::Unfiltered,
            title: String::new(),
            width,
            height,
            show_help: true,
            matcher: SkimMatcherV2::default(),
        };
        list.set_items(items);
        list
    }

    // Getters / Accessors

    #[inline]
    pub fn items(&self) -> &[Entry] {
        &self.items
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    #[inline]
    pub fn filter_state(&self) -> FilterState {
        self.filter_state
    }

    #[inline]
    pub fn is_filtering(&self) -> bool {
        self.filter_state == FilterState::Filtering
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    #[inline]
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn shown_len(&self) -> usize {
        self.shown.len()
    }

    // Capabilities used by the state machine

    /// Replaces the items. The cursor goes back to the top and the current filter,
    /// if any, is re-applied to the new items.
    pub fn set_items(&mut self, items: Vec<Entry>) {
        self.items = items;
        self.cursor = 0;
        self.refilter();
    }

    pub fn selected_item(&self) -> Option<&Entry> {
        self.shown
            .get(self.cursor)
            .and_then(|&idx| self.items.get(idx))
    }

    pub fn reset_filter(&mut self) {
        self.filter.clear();
        self.filter_state = FilterState::Unfiltered;
        self.refilter();
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_show_help(&mut self, show: bool) {
        self.show_help = show;
    }

    // Paging

    /// Number of items that fit on one page.
    pub fn per_page(&self) -> usize {
        let help = if self.show_help { HELP_ROWS } else { 0 };
        usize::from(self.height.saturating_sub(CHROME_ROWS + help)).max(1)
    }

    pub fn page(&self) -> usize {
        self.cursor / self.per_page()
    }

    pub fn total_pages(&self) -> usize {
        self.shown.len().div_ceil(self.per_page()).max(1)
    }

    /// The shown entries on the current page, paired with whether each is selected.
    pub fn page_items(&self) -> impl Iterator<Item = (&Entry, bool)> + '_ {
        let per_page = self.per_page();
        let start = self.page() * per_page;
        self.shown
            .iter()
            .enumerate()
            .skip(start)
            .take(per_page)
            .map(move |(pos, &idx)| (&self.items[idx], pos == self.cursor))
    }

    /// One line summary shown under the items.
    pub fn status_line(&self) -> String {
        let noun = |n: usize| if n == 1 { "item" } else { "items" };
        if self.filter_state == FilterState::Unfiltered {
            let n = self.items.len();
            if n == 0 {
                return "No items.".into();
            }
            return format!("{} {}", n, noun(n));
        }
        format!(
            "{}/{} {} match \"{}\"",
            self.shown.len(),
            self.items.len(),
            noun(self.items.len()),
            self.filter
        )
    }

    // Input

    /// Handles a key the app did not claim. Returns `true` if the key changed anything.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.is_filtering() {
            return self.handle_filter_key(key);
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_down(),
            KeyCode::Left | KeyCode::PageUp | KeyCode::Char('h') => self.prev_page(),
            KeyCode::Right | KeyCode::PageDown | KeyCode::Char('l') => self.next_page(),
            KeyCode::Home | KeyCode::Char('g') => self.go_to(0),
            KeyCode::End | KeyCode::Char('G') => self.go_to(self.shown.len().saturating_sub(1)),
            KeyCode::Char('/') => {
                self.filter_state = FilterState::Filtering;
                true
            }
            KeyCode::Esc if self.filter_state == FilterState::Applied => {
                self.reset_filter();
                true
            }
            _ => false,
        }
    }

    fn handle_filter_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => self.reset_filter(),
            KeyCode::Enter => {
                self.filter_state = if self.filter.is_empty() {
                    FilterState::Unfiltered
                } else {
                    FilterState::Applied
                };
            }
            KeyCode::Backspace => {
                self.filter.pop();
                self.refilter();
            }
            KeyCode::Up => {
                self.move_up();
            }
            KeyCode::Down => {
                self.move_down();
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.filter.push(c);
                self.refilter();
            }
            _ => return false,
        }
        true
    }

    fn move_up(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    fn move_down(&mut self) -> bool {
        if self.cursor + 1 >= self.shown.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    fn prev_page(&mut self) -> bool {
        let page = self.page();
        if page == 0 {
            return false;
        }
        self.cursor = (page - 1) * self.per_page();
        true
    }

    fn next_page(&mut self) -> bool {
        let page = self.page();
        if page + 1 >= self.total_pages() {
            return false;
        }
        self.cursor = (page + 1) * self.per_page();
        true
    }

    fn go_to(&mut self, pos: usize) -> bool {
        let moved = self.cursor != pos;
        self.cursor = pos;
        moved
    }

    /// Recomputes the shown entries from the items and the filter query.
    ///
    /// Matches are ordered by descending score, ties keep listing order.
    fn refilter(&mut self) {
        if self.filter.is_empty() {
            self.shown = (0..self.items.len()).collect();
        } else {
            let mut scored: Vec<(i64, usize)> = self
                .items
                .iter()
                .enumerate()
                .filter_map(|(idx, e)| {
                    self.matcher
                        .fuzzy_match(e.name(), &self.filter)
                        .map(|score| (score, idx))
                })
                .collect();
            scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
            self.shown = scored.into_iter().map(|(_, idx)| idx).collect();
        }
        self.cursor = self.cursor.min(self.shown.len().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn entries(names: &[&str]) -> Vec<Entry> {
        names
            .iter()
            .map(|n| Entry::new(*n, false, format!("/x/{n}")))
            .collect()
    }

    fn type_filter(list: &mut EntryList, query: &str) {
        list.handle_key(key(KeyCode::Char('/')));
        for c in query.chars() {
            list.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn cursor_moves_and_clamps() {
        let mut list = EntryList::new(entries(&["a", "b", "c"]), 80, 30);
        assert_eq!(list.selected_item().map(|e| e.name()), Some("a"));

        assert!(!list.handle_key(key(KeyCode::Up)));
        list.handle_key(key(KeyCode::Down));
        list.handle_key(key(KeyCode::Char('j')));
        assert!(!list.handle_key(key(KeyCode::Down)));
        assert_eq!(list.selected_item().map(|e| e.name()), Some("c"));

        list.handle_key(key(KeyCode::Home));
        assert_eq!(list.cursor(), 0);
    }

    #[test]
    fn empty_list_has_no_selection() {
        let mut list = EntryList::new(Vec::new(), 80, 30);
        assert!(list.selected_item().is_none());
        assert!(!list.handle_key(key(KeyCode::Down)));
        assert_eq!(list.status_line(), "No items.");
    }

    #[test]
    fn paging_follows_height() {
        let names: Vec<String> = (0..25).map(|i| format!("f{i:02}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        // 14 rows - 3 chrome - 1 help = 10 per page
        let mut list = EntryList::new(entries(&refs), 80, 14);
        assert_eq!(list.per_page(), 10);
        assert_eq!(list.total_pages(), 3);

        list.handle_key(key(KeyCode::Right));
        assert_eq!(list.cursor(), 10);
        assert_eq!(list.page_items().count(), 10);
        list.handle_key(key(KeyCode::Right));
        assert_eq!(list.page_items().count(), 5);
        assert!(!list.handle_key(key(KeyCode::Right)));
        list.handle_key(key(KeyCode::Left));
        assert_eq!(list.cursor(), 10);

        list.set_show_help(false);
        assert_eq!(list.per_page(), 11);
    }

    #[test]
    fn filter_narrows_and_reset_restores() {
        let mut list = EntryList::new(entries(&["notes.txt", "music", "nothing.md"]), 80, 30);
        type_filter(&mut list, "not");
        assert!(list.is_filtering());
        assert_eq!(list.shown_len(), 2);

        list.handle_key(key(KeyCode::Enter));
        assert_eq!(list.filter_state(), FilterState::Applied);
        assert!(list.status_line().starts_with("2/3"));

        list.handle_key(key(KeyCode::Esc));
        assert_eq!(list.filter_state(), FilterState::Unfiltered);
        assert_eq!(list.shown_len(), 3);
    }

    #[test]
    fn filter_input_captures_command_letters() {
        let mut list = EntryList::new(entries(&["quota", "other"]), 80, 30);
        type_filter(&mut list, "qj");
        assert_eq!(list.filter(), "qj");
        list.handle_key(key(KeyCode::Backspace));
        assert_eq!(list.filter(), "q");
        assert_eq!(list.selected_item().map(|e| e.name()), Some("quota"));
    }

    #[test]
    fn set_items_keeps_filter_and_resets_cursor() {
        let mut list = EntryList::new(entries(&["a", "b", "c"]), 80, 30);
        list.handle_key(key(KeyCode::End));
        assert_eq!(list.cursor(), 2);

        list.set_items(entries(&["x", "y"]));
        assert_eq!(list.cursor(), 0);
        assert_eq!(list.items().len(), 2);

        type_filter(&mut list, "zzz");
        list.set_items(entries(&["zzz1", "a"]));
        assert_eq!(list.shown_len(), 1);
        list.reset_filter();
        assert_eq!(list.shown_len(), 2);
    }
}
