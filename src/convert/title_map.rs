// src/convert/title_map.rs
// Ordered URL -> title association built fresh for every conversion.
// Each URL appears once; `None` means the title could not be obtained.
// Entries keep insertion order; a hash index keeps lookups and inserts O(1).

use std::collections::HashMap;

/// URL to resolved title, in first-occurrence order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleMap {
    entries: Vec<(String, Option<String>)>,
    // URL -> position in `entries`
    index: HashMap<String, usize>,
}

impl TitleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title for `url`; an existing key keeps its position
    pub fn insert(&mut self, url: impl Into<String>, title: Option<String>) {
        let url = url.into();
        match self.index.get(&url).copied() {
            Some(position) => self.entries[position].1 = title,
            None => {
                self.index.insert(url.clone(), self.entries.len());
                self.entries.push((url, title));
            }
        }
    }

    /// `None` when the URL is not in the map, `Some(None)` when it is but
    /// has no title
    pub fn get(&self, url: &str) -> Option<Option<&str>> {
        self.index
            .get(url)
            .map(|&position| self.entries[position].1.as_deref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// How many URLs came back with a title
    pub fn resolved_count(&self) -> usize {
        self.entries.iter().filter(|(_, title)| title.is_some()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(url, title)| (url.as_str(), title.as_deref()))
    }
}

impl FromIterator<(String, Option<String>)> for TitleMap {
    fn from_iter<I: IntoIterator<Item = (String, Option<String>)>>(iter: I) -> Self {
        let mut map = TitleMap::new();
        for (url, title) in iter {
            map.insert(url, title);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_insertion_order() {
        let map: TitleMap = vec![
            ("https://b.com".to_string(), Some("B".to_string())),
            ("https://a.com".to_string(), None),
        ]
        .into_iter()
        .collect();

        let urls: Vec<&str> = map.iter().map(|(url, _)| url).collect();
        assert_eq!(urls, vec!["https://b.com", "https://a.com"]);
        assert_eq!(map.resolved_count(), 1);
    }

    #[test]
    fn test_duplicate_key_overwrites_in_place() {
        let mut map = TitleMap::new();
        map.insert("https://a.com", None);
        map.insert("https://b.com", None);
        map.insert("https://a.com", Some("A".to_string()));

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("https://a.com"), Some(Some("A")));
        assert_eq!(map.iter().next(), Some(("https://a.com", Some("A"))));
    }

    #[test]
    fn test_many_urls_stay_ordered_and_indexed() {
        let map: TitleMap = (0..1000)
            .map(|i| (format!("https://site{i}.com"), Some(format!("Site {i}"))))
            .collect();

        assert_eq!(map.len(), 1000);
        assert_eq!(map.get("https://site999.com"), Some(Some("Site 999")));
        assert_eq!(map.iter().nth(500), Some(("https://site500.com", Some("Site 500"))));
    }

    #[test]
    fn test_missing_vs_untitled() {
        let mut map = TitleMap::new();
        map.insert("https://a.com", None);

        assert_eq!(map.get("https://a.com"), Some(None));
        assert_eq!(map.get("https://nope.com"), None);
        assert!(!map.is_empty());
    }
}
