use baggage_checker::domain::baggage::Baggage;
use baggage_checker::domain::rules::{
    self, MAX_CARRYON_DIMENSION, MAX_REGULAR_WEIGHT, MAX_SUM_DIMENSIONS, SURCHARGE_PER_KG,
};
use rand::Rng;
use rust_decimal::Decimal;

const SAMPLES: usize = 10_000;

fn random_bag(rng: &mut impl Rng) -> Baggage {
    Baggage::new(
        rng.gen_range(0..120),
        rng.gen_range(0..120),
        rng.gen_range(0..120),
        // 0.000 kg to 50.000 kg in grams
        Decimal::new(rng.gen_range(0..=50_000), 3),
    )
}

#[test]
fn test_weight_at_or_below_limit_has_no_surcharge() {
    let mut rng = rand::thread_rng();
    for _ in 0..SAMPLES {
        let mut bag = random_bag(&mut rng);
        bag.set_weight(Decimal::new(rng.gen_range(0..=22_000), 3));

        assert!(!rules::is_overweight(&bag));
        assert_eq!(rules::weight_surcharge(&bag), Decimal::ZERO);
    }
}

#[test]
fn test_surcharge_is_exact_above_limit() {
    let mut rng = rand::thread_rng();
    for _ in 0..SAMPLES {
        let mut bag = random_bag(&mut rng);
        let weight = Decimal::new(rng.gen_range(22_001..=100_000), 3);
        bag.set_weight(weight);

        let surcharge = rules::weight_surcharge(&bag);
        assert!(rules::is_overweight(&bag));
        assert_eq!(surcharge, (weight - MAX_REGULAR_WEIGHT) * SURCHARGE_PER_KG);
        assert!(surcharge > Decimal::ZERO);
    }
}

#[test]
fn test_surcharge_is_never_negative() {
    let mut rng = rand::thread_rng();
    for _ in 0..SAMPLES {
        let bag = random_bag(&mut rng);
        assert!(rules::weight_surcharge(&bag) >= Decimal::ZERO);
    }
}

#[test]
fn test_carry_on_iff_every_dimension_below_limit() {
    let mut rng = rand::thread_rng();
    for _ in 0..SAMPLES {
        let bag = random_bag(&mut rng);
        let expected = bag.length() < MAX_CARRYON_DIMENSION
            && bag.width() < MAX_CARRYON_DIMENSION
            && bag.height() < MAX_CARRYON_DIMENSION;

        assert_eq!(rules::is_carry_on(&bag), expected, "{:?}", bag);
    }
}

#[test]
fn test_oversized_iff_sum_above_limit() {
    let mut rng = rand::thread_rng();
    for _ in 0..SAMPLES {
        let bag = random_bag(&mut rng);
        let sum = u64::from(bag.length()) + u64::from(bag.width()) + u64::from(bag.height());

        assert_eq!(rules::exceeds_max_dimension_sum(&bag), sum > MAX_SUM_DIMENSIONS);
    }
}

#[test]
fn test_classification_is_idempotent() {
    let mut rng = rand::thread_rng();
    for _ in 0..SAMPLES {
        let bag = random_bag(&mut rng);
        assert_eq!(rules::classify(&bag), rules::classify(&bag));
    }
}

#[test]
fn test_rules_are_total_across_decimal_range() {
    let mut rng = rand::thread_rng();
    for _ in 0..SAMPLES {
        let mut bag = random_bag(&mut rng);
        // Any 96-bit mantissa at any scale, either sign.
        let weight = Decimal::from_parts(
            rng.r#gen(),
            rng.r#gen(),
            rng.r#gen(),
            rng.r#gen(),
            rng.gen_range(0..=28),
        );
        bag.set_weight(weight);

        let classification = rules::classify(&bag);
        assert!(classification.surcharge >= Decimal::ZERO);
        assert_eq!(classification.overweight, weight > MAX_REGULAR_WEIGHT);
        if classification.overweight {
            assert!(classification.surcharge > Decimal::ZERO);
        }
    }
}

#[test]
fn test_surcharge_at_decimal_max() {
    let mut bag = Baggage::default();
    bag.set_weight(Decimal::MAX);

    assert_eq!(rules::weight_surcharge(&bag), Decimal::MAX);
}
