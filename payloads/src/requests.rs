use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Price ceiling that means "no restriction". A `price_lte` parameter only
/// appears on the wire for values strictly below this.
pub const MAX_PRICE_CEILING: Decimal = Decimal::ONE_THOUSAND;

/// Page size the server assumes when `_limit` is absent.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Filter values for the hotel list. The defaults mean "no restriction"
/// and are omitted from the query string entirely, so default values never
/// appear as active constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelFilters {
    /// Case-insensitive substring match on the hotel name.
    pub name: String,
    /// Hotels matching any of the selected star values.
    pub selected_stars: Vec<u8>,
    /// Lower bound on the guest rating.
    pub min_rate: f64,
    /// Upper bound on the nightly price.
    pub max_price: Decimal,
}

impl Default for HotelFilters {
    fn default() -> Self {
        Self {
            name: String::new(),
            selected_stars: Vec::new(),
            min_rate: 0.0,
            max_price: MAX_PRICE_CEILING,
        }
    }
}

impl HotelFilters {
    /// The name pattern, if it constrains anything.
    pub fn name_pattern(&self) -> Option<&str> {
        if self.name.is_empty() {
            None
        } else {
            Some(&self.name)
        }
    }

    /// The rating floor, if it constrains anything.
    pub fn rate_floor(&self) -> Option<f64> {
        (self.min_rate > 0.0).then_some(self.min_rate)
    }

    /// The price ceiling, if it constrains anything.
    pub fn price_ceiling(&self) -> Option<Decimal> {
        (self.max_price < MAX_PRICE_CEILING).then_some(self.max_price)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    Price,
    Rate,
    Stars,
    Name,
}

impl SortBy {
    pub fn as_field(&self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Rate => "rate",
            Self::Stars => "stars",
            Self::Name => "name",
        }
    }

    pub fn from_field(field: &str) -> Option<Self> {
        match field {
            "price" => Some(Self::Price),
            "rate" => Some(Self::Rate),
            "stars" => Some(Self::Stars),
            "name" => Some(Self::Name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn from_param(param: &str) -> Option<Self> {
        match param {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// Server-side result ordering. No sort field means catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HotelSort {
    pub sort_by: Option<SortBy>,
    pub direction: SortDirection,
}

/// One hotel-list query: filters, sort, and the requested page window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListHotels {
    pub filters: HotelFilters,
    pub sort: HotelSort,
    /// 1-based page number.
    pub page: u32,
    pub page_size: u32,
}

impl Default for ListHotels {
    fn default() -> Self {
        Self {
            filters: HotelFilters::default(),
            sort: HotelSort::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("invalid value for `{param}`: `{value}`")]
    InvalidValue { param: &'static str, value: String },
    #[error("unknown sort field `{0}`")]
    UnknownSortField(String),
    #[error("unknown sort direction `{0}`")]
    UnknownSortDirection(String),
}

impl ListHotels {
    /// Encode as query parameters.
    ///
    /// Presence rules: `_page` and `_limit` are always present; everything
    /// else only when it actually constrains the result. `stars` repeats,
    /// one pair per selected value.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("_page", self.page.to_string()),
            ("_limit", self.page_size.to_string()),
        ];
        if let Some(sort_by) = self.sort.sort_by {
            params.push(("_sort", sort_by.as_field().to_string()));
            params.push(("_order", self.sort.direction.as_param().to_string()));
        }
        if let Some(name) = self.filters.name_pattern() {
            params.push(("name_like", name.to_string()));
        }
        for star in &self.filters.selected_stars {
            params.push(("stars", star.to_string()));
        }
        if let Some(rate) = self.filters.rate_floor() {
            params.push(("rate_gte", rate.to_string()));
        }
        if let Some(price) = self.filters.price_ceiling() {
            params.push(("price_lte", price.to_string()));
        }
        params
    }

    /// Decode from query pairs, in any order. Absent parameters take their
    /// no-restriction defaults; unrecognized parameters are ignored.
    pub fn from_query_pairs<I>(pairs: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        fn parse<T: std::str::FromStr>(
            param: &'static str,
            value: &str,
        ) -> Result<T, QueryError> {
            value.parse().map_err(|_| QueryError::InvalidValue {
                param,
                value: value.to_string(),
            })
        }

        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "_page" => {
                    query.page = parse("_page", &value)?;
                    if query.page < 1 {
                        return Err(QueryError::InvalidValue {
                            param: "_page",
                            value,
                        });
                    }
                }
                "_limit" => {
                    query.page_size = parse("_limit", &value)?;
                    if query.page_size < 1 {
                        return Err(QueryError::InvalidValue {
                            param: "_limit",
                            value,
                        });
                    }
                }
                "_sort" => {
                    query.sort.sort_by = Some(
                        SortBy::from_field(&value)
                            .ok_or(QueryError::UnknownSortField(value))?,
                    );
                }
                "_order" => {
                    query.sort.direction = SortDirection::from_param(&value)
                        .ok_or(QueryError::UnknownSortDirection(value))?;
                }
                "name_like" => query.filters.name = value,
                "stars" => {
                    query.filters.selected_stars.push(parse("stars", &value)?);
                }
                "rate_gte" => {
                    query.filters.min_rate = parse("rate_gte", &value)?;
                }
                "price_lte" => {
                    query.filters.max_price = parse("price_lte", &value)?;
                }
                _ => {}
            }
        }
        Ok(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn default_query_encodes_only_page_and_limit() {
        let params = ListHotels::default().to_query_params();
        assert_eq!(
            params,
            vec![
                ("_page", "1".to_string()),
                ("_limit", "10".to_string()),
            ]
        );
    }

    #[test]
    fn default_filter_values_never_appear_as_constraints() {
        // Explicitly-set defaults (minRate=0, maxPrice=1000) must be
        // indistinguishable from untouched filters on the wire.
        let query = ListHotels {
            filters: HotelFilters {
                name: String::new(),
                selected_stars: vec![],
                min_rate: 0.0,
                max_price: dec!(1000),
            },
            ..Default::default()
        };
        let keys: Vec<&str> =
            query.to_query_params().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["_page", "_limit"]);
    }

    #[test]
    fn active_filters_and_sort_all_encode() {
        let query = ListHotels {
            filters: HotelFilters {
                name: "plaza".to_string(),
                selected_stars: vec![4, 5],
                min_rate: 3.5,
                max_price: dec!(250),
            },
            sort: HotelSort {
                sort_by: Some(SortBy::Price),
                direction: SortDirection::Desc,
            },
            page: 3,
            page_size: 18,
        };
        assert_eq!(
            query.to_query_params(),
            vec![
                ("_page", "3".to_string()),
                ("_limit", "18".to_string()),
                ("_sort", "price".to_string()),
                ("_order", "desc".to_string()),
                ("name_like", "plaza".to_string()),
                ("stars", "4".to_string()),
                ("stars", "5".to_string()),
                ("rate_gte", "3.5".to_string()),
                ("price_lte", "250".to_string()),
            ]
        );
    }

    #[test]
    fn query_round_trips_through_pairs() {
        let query = ListHotels {
            filters: HotelFilters {
                name: "grand".to_string(),
                selected_stars: vec![3, 5],
                min_rate: 2.0,
                max_price: dec!(400),
            },
            sort: HotelSort {
                sort_by: Some(SortBy::Name),
                direction: SortDirection::Asc,
            },
            page: 2,
            page_size: 9,
        };
        let pairs: Vec<(String, String)> = query
            .to_query_params()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        assert_eq!(ListHotels::from_query_pairs(pairs).unwrap(), query);
    }

    #[test]
    fn decoding_rejects_malformed_numbers() {
        let pairs =
            vec![("_page".to_string(), "one".to_string())];
        assert_eq!(
            ListHotels::from_query_pairs(pairs),
            Err(QueryError::InvalidValue {
                param: "_page",
                value: "one".to_string()
            })
        );

        let pairs = vec![("_limit".to_string(), "0".to_string())];
        assert!(ListHotels::from_query_pairs(pairs).is_err());
    }

    #[test]
    fn decoding_rejects_unknown_sort_fields() {
        let pairs = vec![("_sort".to_string(), "chandeliers".to_string())];
        assert_eq!(
            ListHotels::from_query_pairs(pairs),
            Err(QueryError::UnknownSortField("chandeliers".to_string()))
        );
    }

    #[test]
    fn decoding_ignores_unknown_parameters() {
        let pairs = vec![
            ("_page".to_string(), "2".to_string()),
            ("utm_source".to_string(), "newsletter".to_string()),
        ];
        let query = ListHotels::from_query_pairs(pairs).unwrap();
        assert_eq!(query.page, 2);
        assert_eq!(query.filters, HotelFilters::default());
    }
}
