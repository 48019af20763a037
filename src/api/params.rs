use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::model::GuitarListItem;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const DEFAULT_SORT: &str = "name:asc";

/// Listing parameters: `page`, `pageSize`, `sort=field:dir`, repeated `filter=key:value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub page: usize,
    pub page_size: usize,
    pub sort: String,
    pub filters: BTreeMap<String, String>,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            sort: DEFAULT_SORT.to_string(),
            filters: BTreeMap::new(),
        }
    }
}

impl ListParams {
    /// Build from raw query pairs. Invalid numbers fall back to defaults and
    /// the last value of a repeated filter key wins.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "page" => params.page = positive_or(value, DEFAULT_PAGE),
                "pageSize" => params.page_size = positive_or(value, DEFAULT_PAGE_SIZE),
                "sort" if !value.is_empty() => params.sort = value.clone(),
                "filter" => {
                    if let Some((name, wanted)) = value.split_once(':') {
                        params.filters.insert(name.to_string(), wanted.to_string());
                    }
                }
                _ => {}
            }
        }
        params
    }

    /// Filter, sort and slice `items`. Returns the requested page and the
    /// number of items that matched the filters.
    pub fn apply(&self, items: Vec<GuitarListItem>) -> (Vec<GuitarListItem>, usize) {
        let mut items: Vec<GuitarListItem> =
            items.into_iter().filter(|item| self.matches(item)).collect();
        let total = items.len();

        let (field, direction) = self.sort.split_once(':').unwrap_or((self.sort.as_str(), "asc"));
        items.sort_by(|a, b| {
            let ordering = compare_by(field, a, b);
            if direction.eq_ignore_ascii_case("desc") {
                ordering.reverse()
            } else {
                ordering
            }
        });

        let page = items
            .into_iter()
            .skip((self.page - 1).saturating_mul(self.page_size))
            .take(self.page_size)
            .collect();
        (page, total)
    }

    fn matches(&self, item: &GuitarListItem) -> bool {
        self.filters.iter().all(|(name, wanted)| match name.as_str() {
            "type" => item.kind.eq_ignore_ascii_case(wanted),
            "brand" => item.brand.eq_ignore_ascii_case(wanted),
            _ => true,
        })
    }
}

fn compare_by(field: &str, a: &GuitarListItem, b: &GuitarListItem) -> Ordering {
    match field {
        "year" => a.year.cmp(&b.year),
        "brand" => a.brand.cmp(&b.brand),
        _ => a.name.cmp(&b.name),
    }
}

fn positive_or(value: &str, fallback: usize) -> usize {
    match value.parse::<usize>() {
        Ok(parsed) if parsed > 0 => parsed,
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn item(name: &str, brand: &str, kind: &str, year: Option<i32>) -> GuitarListItem {
        GuitarListItem {
            id: name.to_lowercase(),
            slug: name.to_lowercase(),
            name: name.to_string(),
            brand: brand.to_string(),
            model: "Standard".to_string(),
            kind: kind.to_string(),
            year,
            thumbnail: None,
        }
    }

    #[test]
    fn test_defaults() {
        let params = ListParams::from_pairs(&[]);
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, 20);
        assert_eq!(params.sort, "name:asc");
        assert!(params.filters.is_empty());
    }

    #[test]
    fn test_repeated_filter_keeps_last_value() {
        let params = ListParams::from_pairs(&pairs(&[
            ("filter", "type:electric"),
            ("filter", "brand:Fender"),
            ("filter", "brand:Gibson"),
            ("filter", "malformed"),
        ]));
        assert_eq!(params.filters.get("type").map(String::as_str), Some("electric"));
        assert_eq!(params.filters.get("brand").map(String::as_str), Some("Gibson"));
        assert_eq!(params.filters.len(), 2);
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let params = ListParams::from_pairs(&pairs(&[
            ("page", "-1"),
            ("pageSize", "0"),
            ("sort", "year:desc"),
        ]));
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, 20);
        assert_eq!(params.sort, "year:desc");

        let params = ListParams::from_pairs(&pairs(&[("page", "two"), ("pageSize", "5")]));
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, 5);
    }

    #[test]
    fn test_apply_filters_sorts_and_slices() {
        let items = vec![
            item("Telecaster", "Fender", "electric", Some(1950)),
            item("Hummingbird", "Gibson", "acoustic", Some(1960)),
            item("Stratocaster", "Fender", "electric", Some(1954)),
            item("Jazzmaster", "Fender", "electric", None),
        ];

        let params = ListParams::from_pairs(&pairs(&[
            ("filter", "brand:fender"),
            ("sort", "year:desc"),
            ("pageSize", "2"),
        ]));
        let (page, total) = params.apply(items.clone());
        assert_eq!(total, 3);
        let names: Vec<&str> = page.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Stratocaster", "Telecaster"]);

        let params = ListParams::from_pairs(&pairs(&[("page", "2"), ("pageSize", "3")]));
        let (page, total) = params.apply(items);
        assert_eq!(total, 4);
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].name, "Telecaster");
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let params = ListParams::from_pairs(&pairs(&[("page", "9")]));
        let (page, total) = params.apply(vec![item("SG", "Gibson", "electric", None)]);
        assert!(page.is_empty());
        assert_eq!(total, 1);
    }
}
