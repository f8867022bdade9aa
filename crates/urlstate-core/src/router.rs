//! Navigation capability the synchronizer reads from and writes to.
//!
//! The router owns the location. The synchronizer only reads the current
//! pathname and query, and hands finished hrefs to `push` or `replace`.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::query::QueryParams;

/// Which navigation primitive a write uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// New history entry per write.
    #[default]
    Push,
    /// Overwrite the current entry.
    Replace,
}

pub trait Router {
    fn pathname(&self) -> String;

    fn query(&self) -> QueryParams;

    fn push(&mut self, href: &str) -> Result<()>;

    fn replace(&mut self, href: &str) -> Result<()>;

    fn navigate(&mut self, mode: HistoryMode, href: &str) -> Result<()> {
        match mode {
            HistoryMode::Push => self.push(href),
            HistoryMode::Replace => self.replace(href),
        }
    }
}

impl<R: Router + ?Sized> Router for &mut R {
    fn pathname(&self) -> String {
        (**self).pathname()
    }

    fn query(&self) -> QueryParams {
        (**self).query()
    }

    fn push(&mut self, href: &str) -> Result<()> {
        (**self).push(href)
    }

    fn replace(&mut self, href: &str) -> Result<()> {
        (**self).replace(href)
    }
}

/// One history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub pathname: String,
    pub query: QueryParams,
}

impl Location {
    /// Parse a relative href (`/path?query#fragment`). The fragment is dropped.
    pub fn parse(href: &str) -> Result<Self> {
        let href = href.split('#').next().unwrap_or_default();
        let (path, query) = match href.split_once('?') {
            Some((p, q)) => (p, q),
            None => (href, ""),
        };
        if !path.is_empty() && !path.starts_with('/') {
            bail!("href must be an absolute path: {href}");
        }
        let pathname = if path.is_empty() { "/" } else { path };
        Ok(Self {
            pathname: pathname.to_string(),
            query: QueryParams::parse(query),
        })
    }

    pub fn href(&self) -> String {
        if self.query.is_empty() {
            self.pathname.clone()
        } else {
            format!("{}?{}", self.pathname, self.query)
        }
    }
}

/// In-memory browser-style history.
///
/// `push` drops any forward entries and appends; `replace` overwrites the
/// current entry. Every navigation call is also recorded so callers can see
/// exactly what was requested.
#[derive(Debug, Clone)]
pub struct MemoryRouter {
    entries: Vec<Location>,
    cursor: usize,
    navigations: Vec<(HistoryMode, String)>,
}

impl MemoryRouter {
    /// Start at `href` (e.g. `/search?q=rust`).
    pub fn new(href: &str) -> Result<Self> {
        Ok(Self {
            entries: vec![Location::parse(href)?],
            cursor: 0,
            navigations: Vec::new(),
        })
    }

    /// Build from an absolute URL such as `https://example.com/a?b=1`.
    pub fn from_url(url: &str) -> Result<Self> {
        let parsed = url::Url::parse(url)?;
        let href = match parsed.query() {
            Some(q) => format!("{}?{}", parsed.path(), q),
            None => parsed.path().to_string(),
        };
        Self::new(&href)
    }

    pub fn location(&self) -> &Location {
        &self.entries[self.cursor]
    }

    pub fn current_href(&self) -> String {
        self.location().href()
    }

    /// Number of history entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every push/replace requested, oldest first.
    pub fn navigations(&self) -> &[(HistoryMode, String)] {
        &self.navigations
    }

    pub fn last_navigation(&self) -> Option<&str> {
        self.navigations.last().map(|(_, href)| href.as_str())
    }

    /// Step back one entry. Returns false at the start of history.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step forward one entry. Returns false at the end of history.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }
}

impl Router for MemoryRouter {
    fn pathname(&self) -> String {
        self.location().pathname.clone()
    }

    fn query(&self) -> QueryParams {
        self.location().query.clone()
    }

    fn push(&mut self, href: &str) -> Result<()> {
        let loc = Location::parse(href)?;
        self.entries.truncate(self.cursor + 1);
        self.entries.push(loc);
        self.cursor = self.entries.len() - 1;
        self.navigations.push((HistoryMode::Push, href.to_string()));
        Ok(())
    }

    fn replace(&mut self, href: &str) -> Result<()> {
        let loc = Location::parse(href)?;
        self.entries[self.cursor] = loc;
        self.navigations.push((HistoryMode::Replace, href.to_string()));
        Ok(())
    }
}
