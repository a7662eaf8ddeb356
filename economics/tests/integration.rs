use economics::*;

#[test]
fn test_investment_amount_is_exact_product() {
    for (plants, cost) in [(1, 20_000.0), (7, 1_234.5), (250, 15_750.25), (0, 99.0)] {
        let calc = ReturnCalculator::calculate_investment_return(plants, cost, 30_000.0, 0.3);
        assert_eq!(calc.investment_amount, plants as f64 * cost);
    }
}

#[test]
fn test_total_return_identity() {
    let cases = [
        (50, 20_000.0, 35_000.0, 0.20),
        (3, 10_000.0, 8_000.0, 0.5),
        (120, 2_500.0, 4_100.0, 1.0),
    ];

    for (plants, cost, market, pct) in cases {
        let calc = ReturnCalculator::calculate_investment_return(plants, cost, market, pct);
        assert_eq!(calc.total_return - calc.investment_amount, calc.projected_return);
    }
}

#[test]
fn test_break_even_market_price() {
    // Market price equal to cost: nothing to share regardless of count
    for plants in [1, 10, 500] {
        let calc = ReturnCalculator::calculate_investment_return(plants, 20_000.0, 20_000.0, 0.35);
        assert_eq!(calc.net_profit, 0.0);
        assert_eq!(calc.projected_return, 0.0);
        assert_eq!(calc.total_return, calc.investment_amount);
    }
}

#[test]
fn test_zero_return_share_returns_principal() {
    let profitable = ReturnCalculator::calculate_investment_return(10, 20_000.0, 50_000.0, 0.0);
    assert_eq!(profitable.total_return, profitable.investment_amount);

    let losing = ReturnCalculator::calculate_investment_return(10, 20_000.0, 5_000.0, 0.0);
    assert_eq!(losing.total_return, losing.investment_amount);
}

#[test]
fn test_reservation_against_remaining_capacity() {
    // 40M target at 20k per plant, 1.2M raised so far
    let info = AvailabilityCalculator::calculate_plant_availability(
        40_000_000.0,
        1_200_000.0,
        20_000.0,
    );
    assert_eq!(info.total_plants, 2_000);
    assert_eq!(info.reserved_plants, 60);
    assert_eq!(info.available_plants, 1_940);
    assert_eq!(info.availability_percentage, 97.0);

    let calc = ReturnCalculator::calculate_investment_return(50, 20_000.0, 35_000.0, 0.20);
    let after = AvailabilityCalculator::calculate_plant_availability(
        40_000_000.0,
        1_200_000.0 + calc.investment_amount,
        20_000.0,
    );
    assert_eq!(after.available_plants, 1_890);
}

#[test]
fn test_formatted_reference_breakdown() {
    let calc = ReturnCalculator::calculate_investment_return(50, 20_000.0, 35_000.0, 0.20);
    let idr = CurrencyFormat::idr();

    assert_eq!(idr.format(calc.investment_amount), "Rp 1.000.000");
    assert_eq!(idr.format(calc.estimated_income), "Rp 1.750.000");
    assert_eq!(idr.format(calc.net_profit), "Rp 750.000");
    assert_eq!(idr.format(calc.projected_return), "Rp 150.000");
    assert_eq!(idr.format(calc.total_return), "Rp 1.150.000");
}

#[test]
fn test_calculation_serializes_with_field_names() {
    let calc = ReturnCalculator::calculate_investment_return(2, 1_000.0, 1_500.0, 0.5);
    let json = serde_json::to_value(calc).unwrap();

    assert_eq!(json["investment_amount"], 2_000.0);
    assert_eq!(json["net_profit"], 1_000.0);
    assert_eq!(json["total_return"], 2_500.0);

    let info = AvailabilityCalculator::calculate_plant_availability(10_000.0, 10_000.0, 1_000.0);
    let json = serde_json::to_value(info).unwrap();
    assert_eq!(json["is_fully_funded"], true);
}
