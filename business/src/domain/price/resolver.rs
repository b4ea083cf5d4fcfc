use std::cmp::Ordering;

use super::errors::PriceNotFoundError;
use super::model::Price;
use super::query::PriceQuery;

/// Selects the single price in force for `query` among `candidates`.
///
/// Business rules:
/// - Candidates for another product or brand are ignored, even though the
///   catalog is expected to have filtered them out already.
/// - A candidate applies when the application date lies inside its closed
///   validity window.
/// - Among applicable candidates the highest priority wins.
/// - Equal priorities fall back to the lowest price list, then the earliest
///   start date, then the earliest end date, then the lowest amount, then the
///   currency code, then the amount written with fewer decimal places.
///   Candidates still tied after that are identical.
///
/// Candidate order never affects the result.
pub fn resolve<I>(query: &PriceQuery, candidates: I) -> Result<Price, PriceNotFoundError>
where
    I: IntoIterator<Item = Price>,
{
    candidates
        .into_iter()
        .filter(|price| matches_query(price, query))
        .max_by(precedence)
        .ok_or_else(|| PriceNotFoundError {
            product_id: query.product_id(),
            brand_id: query.brand_id(),
            application_date: query.application_date(),
        })
}

fn matches_query(price: &Price, query: &PriceQuery) -> bool {
    price.product_id() == query.product_id()
        && price.brand_id() == query.brand_id()
        && price.is_applicable_at(query.application_date())
}

/// `Greater` means `a` takes precedence over `b`.
fn precedence(a: &Price, b: &Price) -> Ordering {
    a.priority()
        .cmp(&b.priority())
        .then_with(|| b.price_list_id().cmp(&a.price_list_id()))
        .then_with(|| b.start_date().cmp(&a.start_date()))
        .then_with(|| b.end_date().cmp(&a.end_date()))
        .then_with(|| b.amount().cmp(a.amount()))
        .then_with(|| b.currency().cmp(a.currency()))
        .then_with(|| scale(b).cmp(&scale(a)))
}

/// `10.0` and `10.00` compare equal as numbers; this keeps them apart.
fn scale(price: &Price) -> i64 {
    price.amount().as_bigint_and_exponent().1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::price::model::NewPriceProps;
    use crate::domain::price::value_objects::PriceListId;
    use bigdecimal::BigDecimal;
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use proptest::prelude::*;
    use std::str::FromStr;

    const PRODUCT_ID: i32 = 35455;
    const BRAND_ID: i32 = 1;

    fn ts(value: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    fn price(
        product_id: i32,
        brand_id: i32,
        price_list_id: i32,
        start: NaiveDateTime,
        end: NaiveDateTime,
        amount: &str,
        priority: i32,
    ) -> Price {
        Price::new(NewPriceProps {
            product_id,
            brand_id,
            price_list_id,
            start_date: start,
            end_date: end,
            amount: BigDecimal::from_str(amount).unwrap(),
            currency: "EUR".to_string(),
            priority,
        })
        .unwrap()
    }

    fn catalog() -> Vec<Price> {
        vec![
            price(
                PRODUCT_ID,
                BRAND_ID,
                1,
                ts("2020-06-14T00:00:00"),
                ts("2020-12-31T23:59:59"),
                "35.50",
                0,
            ),
            price(
                PRODUCT_ID,
                BRAND_ID,
                2,
                ts("2020-06-14T15:00:00"),
                ts("2020-06-14T18:30:00"),
                "25.45",
                1,
            ),
            price(
                PRODUCT_ID,
                BRAND_ID,
                3,
                ts("2020-06-15T00:00:00"),
                ts("2020-06-15T11:00:00"),
                "30.50",
                1,
            ),
            price(
                PRODUCT_ID,
                BRAND_ID,
                4,
                ts("2020-06-15T16:00:00"),
                ts("2020-12-31T23:59:59"),
                "38.95",
                1,
            ),
        ]
    }

    fn query(date: &str) -> PriceQuery {
        PriceQuery::new(ts(date), PRODUCT_ID, BRAND_ID).unwrap()
    }

    fn assert_resolves(date: &str, price_list: i32, amount: &str) {
        let result = resolve(&query(date), catalog()).unwrap();
        assert_eq!(result.price_list_id(), PriceListId::new(price_list));
        assert_eq!(result.amount(), &BigDecimal::from_str(amount).unwrap());
        assert_eq!(result.currency().as_str(), "EUR");
    }

    #[test]
    fn should_resolve_base_price_on_june_14_at_10() {
        assert_resolves("2020-06-14T10:00:00", 1, "35.50");
    }

    #[test]
    fn should_resolve_promotion_on_june_14_at_16() {
        assert_resolves("2020-06-14T16:00:00", 2, "25.45");
    }

    #[test]
    fn should_fall_back_to_base_price_on_june_14_at_21() {
        assert_resolves("2020-06-14T21:00:00", 1, "35.50");
    }

    #[test]
    fn should_resolve_morning_price_on_june_15_at_10() {
        assert_resolves("2020-06-15T10:00:00", 3, "30.50");
    }

    #[test]
    fn should_resolve_evening_price_on_june_15_at_21() {
        assert_resolves("2020-06-15T21:00:00", 4, "38.95");
    }

    #[test]
    fn should_resolve_on_exact_window_boundaries() {
        assert_resolves("2020-06-14T15:00:00", 2, "25.45");
        assert_resolves("2020-06-14T18:30:00", 2, "25.45");
        assert_resolves("2020-06-14T18:30:01", 1, "35.50");
        assert_resolves("2020-12-31T23:59:59", 4, "38.95");
    }

    #[test]
    fn should_return_not_found_before_any_window() {
        let err = resolve(&query("2020-06-13T23:59:59"), catalog()).unwrap_err();

        assert_eq!(err.product_id.value(), PRODUCT_ID);
        assert_eq!(err.brand_id.value(), BRAND_ID);
        assert_eq!(err.application_date, ts("2020-06-13T23:59:59"));
        assert_eq!(
            err.to_string(),
            "No price found for product 35455, brand 1 at date 2020-06-13T23:59:59"
        );
    }

    #[test]
    fn should_return_not_found_for_empty_catalog() {
        assert!(resolve(&query("2020-06-14T10:00:00"), Vec::new()).is_err());
    }

    #[test]
    fn should_ignore_candidates_of_other_products_and_brands() {
        let start = ts("2020-06-14T00:00:00");
        let end = ts("2020-12-31T23:59:59");
        let candidates = vec![
            price(PRODUCT_ID + 1, BRAND_ID, 9, start, end, "1.00", 99),
            price(PRODUCT_ID, BRAND_ID + 1, 8, start, end, "2.00", 99),
        ];

        assert!(resolve(&query("2020-06-14T10:00:00"), candidates.clone()).is_err());

        let mut with_match = candidates;
        with_match.extend(catalog());
        assert_resolves_from(with_match, "2020-06-14T10:00:00", 1);
    }

    fn assert_resolves_from(candidates: Vec<Price>, date: &str, price_list: i32) {
        let result = resolve(&query(date), candidates).unwrap();
        assert_eq!(result.price_list_id(), PriceListId::new(price_list));
    }

    #[test]
    fn should_break_priority_ties_by_lowest_price_list() {
        let start = ts("2020-06-14T00:00:00");
        let end = ts("2020-06-30T00:00:00");
        let candidates = vec![
            price(PRODUCT_ID, BRAND_ID, 7, start, end, "10.00", 2),
            price(PRODUCT_ID, BRAND_ID, 5, start, end, "12.00", 2),
            price(PRODUCT_ID, BRAND_ID, 6, start, end, "11.00", 2),
        ];

        assert_resolves_from(candidates.clone(), "2020-06-20T00:00:00", 5);

        let mut reversed = candidates;
        reversed.reverse();
        assert_resolves_from(reversed, "2020-06-20T00:00:00", 5);
    }

    #[test]
    fn should_break_price_list_ties_by_earliest_start() {
        let end = ts("2020-06-30T00:00:00");
        let candidates = vec![
            price(PRODUCT_ID, BRAND_ID, 1, ts("2020-06-10T00:00:00"), end, "20.00", 1),
            price(PRODUCT_ID, BRAND_ID, 1, ts("2020-06-01T00:00:00"), end, "21.00", 1),
        ];

        let result = resolve(&query("2020-06-20T00:00:00"), candidates).unwrap();
        assert_eq!(result.start_date(), ts("2020-06-01T00:00:00"));
    }

    #[test]
    fn should_prefer_higher_priority_over_lower_price_list() {
        let start = ts("2020-06-14T00:00:00");
        let end = ts("2020-06-30T00:00:00");
        let candidates = vec![
            price(PRODUCT_ID, BRAND_ID, 1, start, end, "10.00", 0),
            price(PRODUCT_ID, BRAND_ID, 9, start, end, "90.00", 3),
        ];

        assert_resolves_from(candidates, "2020-06-20T00:00:00", 9);
    }

    #[test]
    fn should_accept_negative_priorities() {
        let start = ts("2020-06-14T00:00:00");
        let end = ts("2020-06-30T00:00:00");
        let candidates = vec![
            price(PRODUCT_ID, BRAND_ID, 1, start, end, "10.00", -5),
            price(PRODUCT_ID, BRAND_ID, 2, start, end, "20.00", -1),
        ];

        assert_resolves_from(candidates, "2020-06-20T00:00:00", 2);
    }

    #[test]
    fn should_pick_same_amount_scale_whatever_the_order() {
        let start = ts("2020-06-14T00:00:00");
        let end = ts("2020-06-30T00:00:00");
        let candidates = vec![
            price(PRODUCT_ID, BRAND_ID, 1, start, end, "10.0", 1),
            price(PRODUCT_ID, BRAND_ID, 1, start, end, "10.00", 1),
        ];
        let mut reversed = candidates.clone();
        reversed.reverse();

        let forward = resolve(&query("2020-06-20T00:00:00"), candidates).unwrap();
        let backward = resolve(&query("2020-06-20T00:00:00"), reversed).unwrap();

        assert_eq!(forward.amount().to_string(), "10.0");
        assert_eq!(backward.amount().to_string(), "10.0");
    }

    #[derive(Debug, Clone)]
    struct Candidate {
        product_id: i32,
        brand_id: i32,
        price_list_id: i32,
        start_hour: i64,
        length_hours: i64,
        cents: u32,
        priority: i32,
    }

    fn candidate_strategy() -> impl Strategy<Value = Candidate> {
        (1i32..=2, 1i32..=2, 1i32..=5, 0i64..48, 0i64..48, 0u32..10_000, -2i32..=2).prop_map(
            |(product_id, brand_id, price_list_id, start_hour, length_hours, cents, priority)| {
                Candidate {
                    product_id,
                    brand_id,
                    price_list_id,
                    start_hour,
                    length_hours,
                    cents,
                    priority,
                }
            },
        )
    }

    fn origin() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 6, 14)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn build(candidates: &[Candidate]) -> Vec<Price> {
        candidates
            .iter()
            .map(|c| {
                let start = origin() + Duration::hours(c.start_hour);
                Price::new(NewPriceProps {
                    product_id: c.product_id,
                    brand_id: c.brand_id,
                    price_list_id: c.price_list_id,
                    start_date: start,
                    end_date: start + Duration::hours(c.length_hours),
                    amount: BigDecimal::from(c.cents) / BigDecimal::from(100),
                    currency: "EUR".to_string(),
                    priority: c.priority,
                })
                .unwrap()
            })
            .collect()
    }

    proptest! {
        #[test]
        fn prop_not_found_iff_no_candidate_applies(
            candidates in prop::collection::vec(candidate_strategy(), 0..12),
            query_hour in 0i64..100,
        ) {
            let prices = build(&candidates);
            let query = PriceQuery::new(origin() + Duration::hours(query_hour), 1, 1).unwrap();
            let any_applicable = prices.iter().any(|p| {
                p.product_id() == query.product_id()
                    && p.brand_id() == query.brand_id()
                    && p.is_applicable_at(query.application_date())
            });

            prop_assert_eq!(resolve(&query, prices).is_ok(), any_applicable);
        }

        #[test]
        fn prop_winner_applies_and_has_maximal_priority(
            candidates in prop::collection::vec(candidate_strategy(), 1..12),
            query_hour in 0i64..100,
        ) {
            let prices = build(&candidates);
            let query = PriceQuery::new(origin() + Duration::hours(query_hour), 1, 1).unwrap();

            if let Ok(winner) = resolve(&query, prices.clone()) {
                prop_assert_eq!(winner.product_id(), query.product_id());
                prop_assert_eq!(winner.brand_id(), query.brand_id());
                prop_assert!(winner.is_applicable_at(query.application_date()));
                for other in prices.iter().filter(|p| matches_query(p, &query)) {
                    prop_assert!(winner.priority() >= other.priority());
                }
            }
        }

        #[test]
        fn prop_resolution_is_idempotent_and_order_independent(
            candidates in prop::collection::vec(candidate_strategy(), 0..12),
            query_hour in 0i64..100,
            rotation in 0usize..12,
        ) {
            let prices = build(&candidates);
            let query = PriceQuery::new(origin() + Duration::hours(query_hour), 1, 1).unwrap();

            let first = resolve(&query, prices.clone());
            let second = resolve(&query, prices.clone());
            prop_assert_eq!(&first, &second);

            let mut reordered = prices.clone();
            reordered.reverse();
            if !reordered.is_empty() {
                let len = reordered.len();
                reordered.rotate_left(rotation % len);
            }
            prop_assert_eq!(&first, &resolve(&query, reordered));
        }
    }
}
