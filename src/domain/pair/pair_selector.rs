//! Best-pair selection by reserve value

use super::{PairMap, PairSummary};

/// Unparseable reserves rank below every real value
fn rank_key(pair: &PairSummary) -> f64 {
    pair.reserve_value().unwrap_or(f64::NEG_INFINITY)
}

/// All pairs ordered by reserve value, largest first.
///
/// The sort is stable, so equal reserves keep map order.
pub fn rank_pairs(pairs: &PairMap) -> Vec<&PairSummary> {
    let mut ranked: Vec<&PairSummary> = pairs.values().collect();
    ranked.sort_by(|a, b| rank_key(b).total_cmp(&rank_key(a)));
    ranked
}

/// The pair with the largest reserve, `None` for a missing or empty map
pub fn select_best_pair(pairs: Option<&PairMap>) -> Option<&PairSummary> {
    rank_pairs(pairs?).into_iter().next()
}

/// Id of the best pair's other token relative to `subject`.
///
/// When neither side matches the subject the first token is returned;
/// a pair made of the subject twice has no counterpart.
pub fn counterpart_token<'a>(subject: &str, pair: &'a PairSummary) -> Option<&'a str> {
    match (pair.token0.is(subject), pair.token1.is(subject)) {
        (true, true) => None,
        (true, false) => Some(pair.token1.id.as_str()),
        (false, _) => Some(pair.token0.id.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::types::TokenRef;

    const UNI: &str = "0x1f9840a85d5af5bf1d1762f925bdaddc4201f984";
    const WETH: &str = "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2";
    const USDC: &str = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";

    fn pair(id: &str, token0: &str, token1: &str, reserve: &str) -> PairSummary {
        PairSummary {
            id: id.to_string(),
            token0: TokenRef::new(token0, "T0"),
            token1: TokenRef::new(token1, "T1"),
            reserve_usd: reserve.to_string(),
            one_day_volume_usd: None,
            one_week_volume_usd: None,
        }
    }

    fn map(pairs: Vec<PairSummary>) -> PairMap {
        pairs.into_iter().map(|p| (p.id.clone(), p)).collect()
    }

    #[test]
    fn test_selects_maximum_reserve() {
        let pairs = map(vec![
            pair("0x01", UNI, WETH, "1500000.25"),
            pair("0x02", USDC, UNI, "98000000"),
            pair("0x03", UNI, "0xdead", "12"),
        ]);

        let best = select_best_pair(Some(&pairs)).unwrap();
        assert_eq!(best.id, "0x02");
    }

    #[test]
    fn test_empty_or_missing_map() {
        assert!(select_best_pair(None).is_none());
        assert!(select_best_pair(Some(&PairMap::new())).is_none());
    }

    #[test]
    fn test_malformed_reserve_is_deprioritized() {
        let pairs = map(vec![
            pair("0x01", UNI, WETH, "not-a-number"),
            pair("0x02", UNI, USDC, "0"),
            pair("0x03", UNI, "0xdead", ""),
        ]);

        let best = select_best_pair(Some(&pairs)).unwrap();
        assert_eq!(best.id, "0x02");

        let ranked: Vec<&str> = rank_pairs(&pairs).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ranked, vec!["0x02", "0x01", "0x03"]);
    }

    #[test]
    fn test_only_malformed_reserves_still_selects() {
        let pairs = map(vec![pair("0x01", UNI, WETH, "abc"), pair("0x02", UNI, USDC, "def")]);
        assert_eq!(select_best_pair(Some(&pairs)).unwrap().id, "0x01");
    }

    #[test]
    fn test_ties_keep_map_order() {
        let pairs = map(vec![pair("0x0b", UNI, USDC, "100"), pair("0x0a", UNI, WETH, "100")]);
        assert_eq!(select_best_pair(Some(&pairs)).unwrap().id, "0x0a");
    }

    #[test]
    fn test_counterpart_is_case_insensitive() {
        let best = pair("0x01", &UNI.to_uppercase().replace("0X", "0x"), WETH, "10");
        assert_eq!(counterpart_token(UNI, &best), Some(WETH));

        let reversed = pair("0x02", USDC, UNI, "10");
        assert_eq!(counterpart_token(&UNI.to_uppercase().replace("0X", "0x"), &reversed), Some(USDC));
    }

    #[test]
    fn test_counterpart_degenerate_pair() {
        let same = pair("0x01", UNI, UNI, "10");
        assert_eq!(counterpart_token(UNI, &same), None);

        let unrelated = pair("0x02", USDC, WETH, "10");
        assert_eq!(counterpart_token(UNI, &unrelated), Some(USDC));
    }
}
