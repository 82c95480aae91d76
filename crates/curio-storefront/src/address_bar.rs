//! Address-bar port for URL synchronization.

/// Read and rewrite the browser's query string.
///
/// `replace` swaps the current history entry in place; there is
/// deliberately no operation that pushes a new entry, so filter changes
/// can never pollute the back button.
pub trait AddressBar {
    /// The current query string, without a leading `?`.
    fn read(&self) -> String;

    /// Replace the query string on the current history entry.
    fn replace(&mut self, query: &str);
}

/// In-memory address bar for tests and non-browser contexts.
#[derive(Debug, Default)]
pub struct MemoryAddressBar {
    query: String,
    replace_count: usize,
}

impl MemoryAddressBar {
    pub fn new(initial_query: &str) -> Self {
        MemoryAddressBar {
            query: initial_query.trim_start_matches('?').to_string(),
            replace_count: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// How many times the entry has been replaced.
    pub fn replace_count(&self) -> usize {
        self.replace_count
    }
}

impl AddressBar for MemoryAddressBar {
    fn read(&self) -> String {
        self.query.clone()
    }

    fn replace(&mut self, query: &str) {
        self.query = query.to_string();
        self.replace_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_leading_question_mark() {
        let bar = MemoryAddressBar::new("?q=robot");
        assert_eq!(bar.read(), "q=robot");
    }

    #[test]
    fn test_replace_overwrites_and_counts() {
        let mut bar = MemoryAddressBar::new("");
        bar.replace("q=car");
        bar.replace("q=cars");
        assert_eq!(bar.query(), "q=cars");
        assert_eq!(bar.replace_count(), 2);
    }
}
