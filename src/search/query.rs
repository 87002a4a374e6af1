use std::rc::Rc;

use yew::{Callback, Reducible};

use crate::catalog::{self, CatalogEntry, CATALOG};
use crate::config;

/// Identifies one scheduled lookup. Tickets only grow, across sessions too,
/// so a timer from an earlier keystroke or an earlier opening of the overlay
/// can never be mistaken for the current one.
pub type Ticket = u64;

/// State owned by a single search overlay instance.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryState {
    catalog: &'static [CatalogEntry],
    pub text: String,
    pub is_loading: bool,
    pub results: Vec<&'static CatalogEntry>,
    pending: Option<Ticket>,
    last_ticket: Ticket,
    #[cfg(test)]
    lookups: u64,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new(CATALOG)
    }
}

impl QueryState {
    pub fn new(catalog: &'static [CatalogEntry]) -> Self {
        Self {
            catalog,
            text: String::new(),
            is_loading: false,
            results: Vec::new(),
            pending: None,
            last_ticket: 0,
            #[cfg(test)]
            lookups: 0,
        }
    }

    /// Ticket of the lookup waiting for its debounce timer, if any.
    pub fn pending(&self) -> Option<Ticket> {
        self.pending
    }

    #[cfg(test)]
    fn lookups(&self) -> u64 {
        self.lookups
    }

    pub fn is_searchable(text: &str) -> bool {
        text.chars().count() >= config::MIN_QUERY_CHARS
    }

    pub fn open(&mut self) {
        self.reset();
    }

    pub fn close(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.text.clear();
        self.is_loading = false;
        self.results.clear();
        self.pending = None;
    }

    /// Echoes `text` and returns the ticket the caller must schedule, or
    /// `None` when the query is too short to search.
    ///
    /// Any earlier pending ticket is superseded.
    pub fn set_text(&mut self, text: impl Into<String>) -> Option<Ticket> {
        self.text = text.into();
        if !Self::is_searchable(&self.text) {
            self.pending = None;
            self.is_loading = false;
            self.results.clear();
            return None;
        }
        self.last_ticket += 1;
        self.pending = Some(self.last_ticket);
        self.is_loading = true;
        Some(self.last_ticket)
    }

    /// Runs the lookup for `ticket` if it is still the pending one. Returns
    /// whether anything was computed.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }
        self.pending = None;
        self.results = catalog::search(self.catalog, &self.text);
        #[cfg(test)]
        {
            self.lookups += 1;
        }
        self.is_loading = false;
        log::debug!("search {:?}: {} result(s)", self.text, self.results.len());
        true
    }
}

pub enum QueryAction {
    Open,
    SetText(String),
    Fire(Ticket),
    Close,
}

impl Reducible for QueryState {
    type Action = QueryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            QueryAction::Open => next.open(),
            QueryAction::SetText(text) => {
                next.set_text(text);
            }
            QueryAction::Fire(ticket) => {
                if !next.fire(ticket) {
                    return self;
                }
            }
            QueryAction::Close => next.close(),
        }
        Rc::new(next)
    }
}

/// How an overlay interaction completed. Each variant maps to the query
/// handed to the owner's search callback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Selection<'a> {
    Submit(&'a str),
    Result(&'a CatalogEntry),
    Trending(&'a str),
}

impl Selection<'_> {
    pub fn query(&self) -> String {
        match self {
            Selection::Submit(text) => text.to_string(),
            Selection::Result(entry) => entry.title.to_string(),
            Selection::Trending(term) => term.to_string(),
        }
    }
}

/// How the overlay went away. Only a completed interaction owes the owner
/// a search.
#[derive(Clone, Debug, PartialEq)]
pub enum Exit {
    Dismiss,
    Search(String),
}

impl From<Selection<'_>> for Exit {
    fn from(selection: Selection<'_>) -> Self {
        Exit::Search(selection.query())
    }
}

impl Exit {
    /// Emits `on_search` at most once, then `on_close` exactly once.
    pub fn notify(self, on_search: &Callback<String>, on_close: &Callback<()>) {
        if let Exit::Search(query) = self {
            on_search.emit(query);
        }
        on_close.emit(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Level;

    fn titles(state: &QueryState) -> Vec<&'static str> {
        state.results.iter().map(|e| e.title).collect()
    }

    fn settle(state: &mut QueryState, text: &str) {
        let ticket = state.set_text(text).expect("searchable query");
        assert!(state.fire(ticket));
    }

    #[test]
    fn short_queries_never_search() {
        let mut state = QueryState::default();
        for text in ["", "a", "zz", "ab", "é\u{301}"] {
            assert_eq!(state.set_text(text), None, "{text:?}");
            assert!(state.results.is_empty());
            assert!(!state.is_loading);
            assert_eq!(state.pending(), None);
        }
        assert_eq!(state.lookups(), 0);
    }

    #[test]
    fn short_query_clears_previous_results_and_pending_lookup() {
        let mut state = QueryState::default();
        settle(&mut state, "data");
        assert_eq!(titles(&state), vec!["Data Analysis with Python"]);

        let ticket = state.set_text("blockchain").unwrap();
        assert!(state.is_loading);
        state.set_text("bl");
        assert!(state.results.is_empty());
        assert!(!state.is_loading);
        assert!(!state.fire(ticket));
        assert_eq!(state.lookups(), 1);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let mut state = QueryState::default();
        // three characters, six bytes
        assert!(state.set_text("ééé").is_some());
        // two characters, four bytes
        assert!(state.set_text("éé").is_none());
    }

    #[test]
    fn text_is_echoed_immediately() {
        let mut state = QueryState::default();
        state.set_text("mach");
        assert_eq!(state.text, "mach");
        assert!(state.results.is_empty());
        assert!(state.is_loading);
    }

    #[test]
    fn scenario_over_default_catalog() {
        let mut state = QueryState::default();
        settle(&mut state, "block");
        assert_eq!(titles(&state), vec!["Blockchain Development"]);
        settle(&mut state, "data");
        assert_eq!(titles(&state), vec!["Data Analysis with Python"]);
        assert_eq!(state.set_text("zz"), None);
        assert!(state.results.is_empty());
        assert_eq!(state.lookups(), 2);
    }

    #[test]
    fn searches_whatever_catalog_it_was_given() {
        static ONE: &[CatalogEntry] = &[CatalogEntry {
            id: 7,
            title: "Rust for Embedded",
            description: "No heap required",
            category: "Systems",
            duration: "4 weeks",
            level: Level::Advanced,
            rating: 5.0,
        }];
        let mut state = QueryState::new(ONE);
        settle(&mut state, "HEAP");
        assert_eq!(titles(&state), vec!["Rust for Embedded"]);
        settle(&mut state, "python");
        assert!(state.results.is_empty());
    }

    #[test]
    fn repeated_identical_input_computes_once() {
        let mut state = QueryState::default();
        let tickets: Vec<_> = (0..5).map(|_| state.set_text("machine").unwrap()).collect();
        let computed = tickets.iter().filter(|t| state.fire(**t)).count();
        assert_eq!(computed, 1);
        assert_eq!(state.lookups(), 1);
        assert_eq!(titles(&state), vec!["Machine Learning Fundamentals"]);
    }

    #[test]
    fn latest_keystroke_wins() {
        let mut state = QueryState::default();
        let stale = state.set_text("xyz").unwrap();
        let fresh = state.set_text("machine").unwrap();

        assert!(!state.fire(stale));
        assert_eq!(state.lookups(), 0);
        assert!(state.fire(fresh));
        assert_eq!(titles(&state), vec!["Machine Learning Fundamentals"]);

        // a stale timer arriving late still changes nothing
        assert!(!state.fire(stale));
        assert_eq!(state.lookups(), 1);
    }

    #[test]
    fn close_discards_pending_lookup_across_reopen() {
        let mut state = QueryState::default();
        let orphan = state.set_text("block").unwrap();
        state.close();
        assert_eq!(state.pending(), None);
        assert!(!state.is_loading);

        state.open();
        assert!(state.text.is_empty());
        assert!(!state.fire(orphan));
        assert!(state.results.is_empty());

        // a new session issues a fresh ticket, never reusing the orphan
        let ticket = state.set_text("data").unwrap();
        assert_ne!(ticket, orphan);
        assert!(!state.fire(orphan));
        assert!(state.fire(ticket));
        assert_eq!(titles(&state), vec!["Data Analysis with Python"]);
    }

    #[test]
    fn open_resets_text_and_results() {
        let mut state = QueryState::default();
        settle(&mut state, "python");
        state.open();
        assert!(state.text.is_empty());
        assert!(state.results.is_empty());
    }

    #[test]
    fn reducer_ignores_stale_fire_without_rerender() {
        let state = Rc::new(QueryState::default());
        let state = state.reduce(QueryAction::SetText("xyz".into()));
        let stale = state.pending().unwrap();
        let state = state.reduce(QueryAction::SetText("machine".into()));

        let before = Rc::clone(&state);
        let after = state.reduce(QueryAction::Fire(stale));
        assert!(Rc::ptr_eq(&before, &after));

        let fresh = after.pending().unwrap();
        let done = after.reduce(QueryAction::Fire(fresh));
        assert_eq!(titles(&done), vec!["Machine Learning Fundamentals"]);

        let closed = done.reduce(QueryAction::Close);
        assert!(closed.results.is_empty());
        assert!(closed.text.is_empty());
    }

    #[test]
    fn selections_map_to_queries() {
        assert_eq!(Selection::Submit("zzz").query(), "zzz");
        assert_eq!(Selection::Submit("").query(), "");
        assert_eq!(Selection::Result(&CATALOG[2]).query(), "Blockchain Development");
        assert_eq!(Selection::Trending("AI Ethics").query(), "AI Ethics");
    }

    fn recorder() -> (Rc<std::cell::RefCell<Vec<String>>>, Callback<String>, Callback<()>) {
        let calls = Rc::new(std::cell::RefCell::new(Vec::new()));
        let on_search = {
            let calls = calls.clone();
            Callback::from(move |query: String| calls.borrow_mut().push(format!("search:{query}")))
        };
        let on_close = {
            let calls = calls.clone();
            Callback::from(move |_: ()| calls.borrow_mut().push("close".to_string()))
        };
        (calls, on_search, on_close)
    }

    #[test]
    fn dismiss_closes_without_searching() {
        let (calls, on_search, on_close) = recorder();
        Exit::Dismiss.notify(&on_search, &on_close);
        assert_eq!(*calls.borrow(), vec!["close"]);
    }

    #[test]
    fn every_completion_searches_once_then_closes() {
        let completions = [
            (Selection::Submit("zzz"), "search:zzz"),
            (Selection::Result(&CATALOG[0]), "search:Machine Learning Fundamentals"),
            (Selection::Trending("Python"), "search:Python"),
        ];
        for (selection, expected) in completions {
            let (calls, on_search, on_close) = recorder();
            Exit::from(selection).notify(&on_search, &on_close);
            assert_eq!(*calls.borrow(), vec![expected, "close"], "{selection:?}");
        }
    }

    #[test]
    fn closing_mid_debounce_leaves_reopened_session_empty() {
        let state = Rc::new(QueryState::default());
        let state = state.reduce(QueryAction::Open);
        let state = state.reduce(QueryAction::SetText("machine".into()));
        let late = state.pending().unwrap();

        let state = state.reduce(QueryAction::Close).reduce(QueryAction::Open);
        let state = state.reduce(QueryAction::Fire(late));
        assert!(state.text.is_empty());
        assert!(state.results.is_empty());
        assert!(!state.is_loading);
        assert_eq!(state.pending(), None);
        assert_eq!(state.lookups(), 0);
    }
}
