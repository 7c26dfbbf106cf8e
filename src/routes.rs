//! Navigable views and their paths.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    TopPrices,
    SetSearch,
    SetDetail(String),
    CardDetail(String),
    /// Sign-in page. There is no account backend behind it.
    Auth,
    NotFound(String),
}

impl Route {
    /// Resolve a path such as `/set/base1`. Query strings, fragments and a
    /// trailing slash are ignored; anything unrecognised is `NotFound`.
    pub fn parse(path: &str) -> Self {
        let trimmed = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["top-prices"] => Route::TopPrices,
            ["set-search"] => Route::SetSearch,
            ["set", id] => Route::SetDetail((*id).to_string()),
            ["card", id] => Route::CardDetail((*id).to_string()),
            ["auth"] => Route::Auth,
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::TopPrices => "/top-prices".to_string(),
            Route::SetSearch => "/set-search".to_string(),
            Route::SetDetail(id) => format!("/set/{}", id),
            Route::CardDetail(id) => format!("/card/{}", id),
            Route::Auth => "/auth".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
