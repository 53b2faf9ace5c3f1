//! Sample country records shared across tests.

use medals_types::Country;

pub fn country(id: u64, name: &str, gold: i64, silver: i64, bronze: i64) -> Country {
    Country::new(id, name).with_medals(gold, silver, bronze)
}

/// The two-country board used by the increment scenario.
pub fn brazil_and_italy() -> Vec<Country> {
    vec![country(1, "Brazil", 1, 0, 0), country(2, "Italy", 0, 0, 0)]
}

/// A realistic board, deliberately not in alphabetical order.
pub fn sample_countries() -> Vec<Country> {
    vec![
        country(1, "United States", 2, 2, 3),
        country(2, "China", 3, 1, 0),
        country(3, "Germany", 0, 2, 2),
        country(4, "France", 2, 2, 1),
        country(5, "Spain", 1, 1, 0),
        country(6, "United Kingdom", 0, 2, 3),
        country(7, "Brazil", 3, 0, 0),
        country(8, "Italy", 2, 2, 2),
        country(9, "Switzerland", 1, 1, 2),
        country(10, "Poland", 0, 2, 1),
        country(11, "Sweden", 0, 3, 1),
        country(12, "Ireland", 2, 1, 0),
        country(13, "Scotland", 3, 0, 2),
    ]
}

/// Grand total of `sample_countries()`.
pub const SAMPLE_TOTAL: i64 = 55;
