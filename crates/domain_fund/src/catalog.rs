//! Seed catalog
//!
//! The demo catalog loaded at startup. NAVs are static; there is no
//! market feed behind them.

use rust_decimal_macros::dec;

use crate::fund::{Fund, RiskLevel};

/// Returns the funds offered by the demo catalog, in display order
pub fn seed_funds() -> Vec<Fund> {
    vec![
        Fund::new("MF001", "HDFC Top 100 Fund", "Large-Cap Equity", dec!(845.75), RiskLevel::High)
            .with_returns(dec!(14.2))
            .with_min_investment(dec!(1000))
            .with_description("Focuses on large-cap companies with strong growth potential"),
        Fund::new(
            "MF002",
            "ICICI Prudential Bluechip Fund",
            "Large-Cap Equity",
            dec!(632.40),
            RiskLevel::High,
        )
        .with_returns(dec!(13.8))
        .with_min_investment(dec!(1000))
        .with_description("Invests in bluechip companies across sectors"),
        Fund::new("MF003", "SBI Liquid Fund", "Liquid Debt", dec!(2856.32), RiskLevel::Low)
            .with_returns(dec!(6.8))
            .with_min_investment(dec!(500))
            .with_description("Ultra-short duration fund for parking surplus funds"),
        Fund::new(
            "MF004",
            "HDFC Hybrid Equity Fund",
            "Aggressive Hybrid",
            dec!(745.18),
            RiskLevel::Medium,
        )
        .with_returns(dec!(11.5))
        .with_min_investment(dec!(1000))
        .with_description("Balanced mix of equity and debt instruments"),
        Fund::new(
            "MF005",
            "Nippon India Small Cap Fund",
            "Small-Cap Equity",
            dec!(125.65),
            RiskLevel::VeryHigh,
        )
        .with_returns(dec!(18.3))
        .with_min_investment(dec!(1000))
        .with_description("High-risk fund focusing on small-cap companies"),
        Fund::new(
            "MF006",
            "ICICI Prudential Corporate Bond Fund",
            "Corporate Bond",
            dec!(28.45),
            RiskLevel::LowToMedium,
        )
        .with_returns(dec!(7.9))
        .with_min_investment(dec!(1000))
        .with_description("Invests in high-rated corporate bonds"),
        Fund::new("MF007", "Parag Parikh Flexi Cap Fund", "Flexi-Cap", dec!(56.78), RiskLevel::High)
            .with_returns(dec!(16.4))
            .with_min_investment(dec!(1000))
            .with_description("Invests across market caps with international exposure"),
        Fund::new(
            "MF008",
            "Axis Banking & PSU Debt Fund",
            "Banking & PSU Debt",
            dec!(2456.89),
            RiskLevel::Low,
        )
        .with_returns(dec!(7.2))
        .with_min_investment(dec!(1000))
        .with_description("Invests in debt instruments of banks and PSUs"),
        Fund::new(
            "MF009",
            "Mirae Asset Emerging Bluechip Fund",
            "Large & Mid-Cap",
            dec!(89.45),
            RiskLevel::High,
        )
        .with_returns(dec!(15.7))
        .with_min_investment(dec!(1000))
        .with_description("Focuses on emerging bluechip companies"),
        Fund::new(
            "MF010",
            "Aditya Birla Sun Life Digital India Fund",
            "Sectoral - Technology",
            dec!(34.67),
            RiskLevel::VeryHigh,
        )
        .with_returns(dec!(19.2))
        .with_min_investment(dec!(1000))
        .with_description("Thematic fund focusing on digital and technology companies"),
        Fund::new("MF011", "SBI Magnum Gilt Fund", "Gilt", dec!(45.32), RiskLevel::LowToMedium)
            .with_returns(dec!(8.1))
            .with_min_investment(dec!(1000))
            .with_description("Invests in government securities across maturities"),
        Fund::new(
            "MF012",
            "Kotak Equity Opportunities Fund",
            "Multi-Cap",
            dec!(78.90),
            RiskLevel::High,
        )
        .with_returns(dec!(14.8))
        .with_min_investment(dec!(1000))
        .with_description("Diversified equity fund across market capitalizations"),
        Fund::new(
            "MF013",
            "Franklin India Low Duration Fund",
            "Low Duration Debt",
            dec!(2567.43),
            RiskLevel::Low,
        )
        .with_returns(dec!(7.4))
        .with_min_investment(dec!(1000))
        .with_description("Short-term debt fund with low interest rate risk"),
        Fund::new(
            "MF014",
            "DSP Healthcare Fund",
            "Sectoral - Healthcare",
            dec!(56.34),
            RiskLevel::High,
        )
        .with_returns(dec!(12.6))
        .with_min_investment(dec!(1000))
        .with_description("Thematic fund focusing on healthcare and pharmaceutical sector"),
        Fund::new("MF015", "UTI Nifty 50 Index Fund", "Index Fund", dec!(245.67), RiskLevel::Medium)
            .with_returns(dec!(12.1))
            .with_min_investment(dec!(100))
            .with_description("Passive fund tracking the Nifty 50 index"),
    ]
}

/// Distinct categories in order of first appearance
pub fn categories(funds: &[Fund]) -> Vec<String> {
    let mut seen = Vec::new();
    for fund in funds {
        if !seen.contains(&fund.category) {
            seen.push(fund.category.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_seed_catalog() {
        let funds = seed_funds();
        assert_eq!(funds.len(), 15);
        assert_eq!(funds[0].id.as_str(), "MF001");
        assert!(funds.iter().all(|f| f.nav > Decimal::ZERO));
    }

    #[test]
    fn test_categories_are_distinct_and_ordered() {
        let categories = categories(&seed_funds());
        assert_eq!(categories[0], "Large-Cap Equity");
        assert_eq!(categories[1], "Liquid Debt");
        assert_eq!(categories.len(), 14);
    }
}
