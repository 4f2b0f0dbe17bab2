use proptest::prelude::*;
use proptest::sample::Index;
use reno_estimate::{
    estimate_flooring, estimate_painting, estimate_windows, FlooringEntry, PaintEntry,
    PriceCatalog, WindowEntry,
};

fn window_entry() -> impl Strategy<Value = WindowEntry> {
    (
        prop::option::of("[A-Za-z ]{0,12}"),
        12.0f64..192.0,
        12.0f64..192.0,
        1i64..99,
    )
        .prop_map(|(room_name, width, height, quantity)| WindowEntry {
            room_name,
            width: Some(width),
            height: Some(height),
            quantity: Some(quantity),
        })
}

fn paint_entry() -> impl Strategy<Value = PaintEntry> {
    (
        prop::option::of("[A-Za-z ]{0,12}"),
        1.0f64..100.0,
        1.0f64..20.0,
        prop::option::of(1i64..20),
    )
        .prop_map(|(room_name, length, height, wall_count)| PaintEntry {
            room_name,
            length: Some(length),
            height: Some(height),
            wall_count,
        })
}

fn flooring_entry() -> impl Strategy<Value = FlooringEntry> {
    (
        prop::option::of("[A-Za-z ]{0,12}"),
        1.0f64..100.0,
        1.0f64..100.0,
    )
        .prop_map(|(room_name, length, width)| FlooringEntry {
            room_name,
            length: Some(length),
            width: Some(width),
        })
}

fn bad_measurement() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        Just(None),
        Just(Some(0.0)),
        Just(Some(f64::NAN)),
        Just(Some(f64::INFINITY)),
        Just(Some(f64::NEG_INFINITY)),
        (-1000.0f64..0.0).prop_map(Some),
    ]
}

proptest! {
    #[test]
    fn window_estimates_are_idempotent(entries in prop::collection::vec(window_entry(), 0..8)) {
        let catalog = PriceCatalog::default();
        prop_assert_eq!(estimate_windows(&catalog, &entries), estimate_windows(&catalog, &entries));
    }

    #[test]
    fn area_estimates_are_idempotent(
        paint in prop::collection::vec(paint_entry(), 0..8),
        flooring in prop::collection::vec(flooring_entry(), 0..8),
    ) {
        let catalog = PriceCatalog::default();
        prop_assert_eq!(estimate_painting(&catalog, &paint), estimate_painting(&catalog, &paint));
        prop_assert_eq!(estimate_flooring(&catalog, &flooring), estimate_flooring(&catalog, &flooring));
    }

    #[test]
    fn more_windows_cost_strictly_more(
        entries in prop::collection::vec(window_entry(), 1..8),
        target in any::<Index>(),
    ) {
        let catalog = PriceCatalog::default();
        let before = estimate_windows(&catalog, &entries);

        let mut bumped = entries.clone();
        let i = target.index(bumped.len());
        bumped[i].quantity = bumped[i].quantity.map(|quantity| quantity + 1);
        let after = estimate_windows(&catalog, &bumped);

        for (old, new) in before.iter().zip(after.iter()) {
            prop_assert!(new.estimate.low > old.estimate.low);
            prop_assert!(new.estimate.high > old.estimate.high);
        }
    }

    #[test]
    fn window_range_is_whole_and_ordered(entries in prop::collection::vec(window_entry(), 0..8)) {
        let catalog = PriceCatalog::default();
        for tier in estimate_windows(&catalog, &entries).iter() {
            prop_assert!(tier.estimate.low <= tier.estimate.high);
            prop_assert_eq!(tier.estimate.low.fract(), 0.0);
            prop_assert_eq!(tier.estimate.high.fract(), 0.0);
        }
    }

    #[test]
    fn invalid_window_entry_changes_nothing(
        entries in prop::collection::vec(window_entry(), 0..6),
        bad_width in bad_measurement(),
        position in any::<Index>(),
    ) {
        let catalog = PriceCatalog::default();
        let mut with_invalid = entries.clone();
        let invalid = WindowEntry {
            room_name: Some("Broken".to_string()),
            width: bad_width,
            height: Some(48.0),
            quantity: Some(3),
        };
        with_invalid.insert(position.index(entries.len() + 1), invalid);

        prop_assert_eq!(estimate_windows(&catalog, &with_invalid), estimate_windows(&catalog, &entries));
    }

    #[test]
    fn invalid_paint_entry_changes_nothing(
        entries in prop::collection::vec(paint_entry(), 0..6),
        bad_height in bad_measurement(),
        position in any::<Index>(),
    ) {
        let catalog = PriceCatalog::default();
        let mut with_invalid = entries.clone();
        let invalid = PaintEntry {
            room_name: Some("Broken".to_string()),
            length: Some(10.0),
            height: bad_height,
            wall_count: Some(2),
        };
        with_invalid.insert(position.index(entries.len() + 1), invalid);

        prop_assert_eq!(estimate_painting(&catalog, &with_invalid), estimate_painting(&catalog, &entries));
    }

    #[test]
    fn invalid_flooring_entry_changes_nothing(
        entries in prop::collection::vec(flooring_entry(), 0..6),
        bad_length in bad_measurement(),
        position in any::<Index>(),
    ) {
        let catalog = PriceCatalog::default();
        let mut with_invalid = entries.clone();
        let invalid = FlooringEntry {
            room_name: Some("Broken".to_string()),
            length: bad_length,
            width: Some(10.0),
        };
        with_invalid.insert(position.index(entries.len() + 1), invalid);

        prop_assert_eq!(estimate_flooring(&catalog, &with_invalid), estimate_flooring(&catalog, &entries));
    }
}
