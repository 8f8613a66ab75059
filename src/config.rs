/// Options for configuring a search, see [`search_with_config`](crate::search_with_config)
///
/// Default options:
/// ```
/// # use maze_search::SearchConfig;
/// assert_eq!(
///     SearchConfig {
///         validate_endpoints: true,
///         size_hint: 64,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// `true` (default): a start or goal outside of the Grid or on a blocked Cell is rejected
    /// with a [`SearchError`](crate::SearchError).
    ///
    /// `false`: such a request quietly finds no Path (`Ok(None)`).
    pub validate_endpoints: bool,
    /// The number of Cells the search expects to visit (defaults to `64`).
    ///
    /// Only used to pre-allocate the visited set and the frontier.
    pub size_hint: usize,
}

impl SearchConfig {
    /// rejects invalid start and goal Cells. Same as the default.
    ///
    /// Values:
    /// ```
    /// # use maze_search::SearchConfig;
    /// assert_eq!(
    ///     SearchConfig {
    ///         validate_endpoints: true,
    ///         size_hint: 64,
    ///     },
    ///     SearchConfig::STRICT
    /// );
    /// ```
    pub const STRICT: SearchConfig = SearchConfig {
        validate_endpoints: true,
        size_hint: 64,
    };
    /// treats invalid start and goal Cells as unreachable
    ///
    /// Values:
    /// ```
    /// # use maze_search::SearchConfig;
    /// assert_eq!(
    ///     SearchConfig {
    ///         validate_endpoints: false,
    ///         size_hint: 64,
    ///     },
    ///     SearchConfig::LENIENT
    /// );
    /// ```
    pub const LENIENT: SearchConfig = SearchConfig {
        validate_endpoints: false,
        size_hint: 64,
    };

    /// The default config, pre-allocating for `size_hint` Cells
    ///
    /// ```
    /// # use maze_search::SearchConfig;
    /// let config = SearchConfig::with_size_hint(1024);
    /// assert_eq!(config.size_hint, 1024);
    /// assert!(config.validate_endpoints);
    /// ```
    pub fn with_size_hint(size_hint: usize) -> SearchConfig {
        SearchConfig {
            size_hint,
            ..Default::default()
        }
    }
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig::STRICT
    }
}
