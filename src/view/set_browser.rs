//! Set browser: sets grouped by series, newest first.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::config;
use crate::models::CardSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SetFilter {
    #[default]
    All,
    /// Sets released in or after 2022.
    Recent,
}

impl SetFilter {
    pub fn accepts(&self, set: &CardSet) -> bool {
        match self {
            SetFilter::All => true,
            SetFilter::Recent => set
                .release_year()
                .is_some_and(|year| year >= config::RECENT_SET_YEAR),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetBrowserAction {
    Search(String),
    Filter(SetFilter),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetBrowserState {
    pub search: String,
    pub filter: SetFilter,
}

/// One series and its visible sets, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesGroup<'a> {
    pub series: &'a str,
    pub sets: Vec<&'a CardSet>,
}

impl SetBrowserState {
    pub fn update(self, action: SetBrowserAction) -> Self {
        match action {
            SetBrowserAction::Search(search) => Self { search, ..self },
            SetBrowserAction::Filter(filter) => Self { filter, ..self },
        }
    }

    /// Group, order and filter `sets`.
    ///
    /// Series are kept when their name contains the search term; inside a
    /// kept series only sets whose name contains the term and that pass the
    /// release filter remain. Series left without sets are dropped.
    pub fn render<'a>(&self, sets: &'a [CardSet]) -> Vec<SeriesGroup<'a>> {
        let term = self.search.to_lowercase();
        group_by_series(sets)
            .into_iter()
            .filter(|group| group.series.to_lowercase().contains(&term))
            .filter_map(|group| {
                let sets: Vec<&CardSet> = group
                    .sets
                    .into_iter()
                    .filter(|s| s.name.to_lowercase().contains(&term) && self.filter.accepts(s))
                    .collect();
                (!sets.is_empty()).then_some(SeriesGroup {
                    series: group.series,
                    sets,
                })
            })
            .collect()
    }
}

/// Newest release first; undated sets last.
fn by_release_desc(a: &CardSet, b: &CardSet) -> Ordering {
    match (a.release_date(), b.release_date()) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Group sets by series. Sets within a series are ordered newest first and
/// series are ordered by their newest set, newest first.
pub fn group_by_series(sets: &[CardSet]) -> Vec<SeriesGroup<'_>> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&CardSet>> = HashMap::new();

    for set in sets {
        let series = set.series.as_str();
        if !groups.contains_key(series) {
            order.push(series);
        }
        groups.entry(series).or_default().push(set);
    }

    let mut result: Vec<SeriesGroup<'_>> = order
        .into_iter()
        .filter_map(|series| {
            groups.remove(series).map(|mut sets| {
                sets.sort_by(|a, b| by_release_desc(a, b));
                SeriesGroup { series, sets }
            })
        })
        .collect();

    result.sort_by(|a, b| by_release_desc(a.sets[0], b.sets[0]));
    result
}
