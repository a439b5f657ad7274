//! End-to-end tests over a realistic vanilla-flavored catalog.

use std::sync::Arc;
use stufflist::{
    format_cell, render_row, standard_columns, Catalog, Category, MaterialItem, SortDirection,
    SortKey, StatId, StatSpace, StuffTable, TemperatureUnit,
};

/// A slice of the vanilla material roster, rough numbers.
fn vanilla_catalog() -> Arc<Catalog> {
    Arc::new(
        Catalog::new(vec![
            MaterialItem::new("Steel", "steel")
                .category(Category::Metallic)
                .base(StatId::MarketValue, 1.9)
                .base(StatId::ArmorSharp, 0.9)
                .base(StatId::SharpDamageMultiplier, 1.0)
                .offset(StatId::Beauty, -4.0)
                .factor(StatId::MaxHitPoints, 1.0)
                .factor(StatId::Flammability, 0.4)
                .factor(StatId::WorkToMake, 1.0),
            MaterialItem::new("Plasteel", "plasteel")
                .category(Category::Metallic)
                .base(StatId::MarketValue, 9.0)
                .base(StatId::ArmorSharp, 1.1)
                .factor(StatId::MaxHitPoints, 2.8)
                .factor(StatId::Flammability, 0.0),
            MaterialItem::new("Gold", "gold")
                .category(Category::Metallic)
                .base(StatId::MarketValue, 10.0)
                .offset(StatId::Beauty, 20.0)
                .factor(StatId::MaxHitPoints, 0.6)
                .factor(StatId::Beauty, 4.0),
            MaterialItem::new("WoodLog", "wood")
                .category(Category::Woody)
                .base(StatId::MarketValue, 1.2)
                .offset(StatId::Beauty, 0.0)
                .factor(StatId::MaxHitPoints, 0.65)
                .factor(StatId::Flammability, 1.0)
                .factor(StatId::WorkToMake, 0.7),
            MaterialItem::new("BlocksGranite", "granite blocks")
                .category(Category::Stony)
                .base(StatId::MarketValue, 0.9)
                .factor(StatId::MaxHitPoints, 1.7)
                .factor(StatId::Flammability, 0.0)
                .factor(StatId::WorkToBuild, 5.0),
            MaterialItem::new("Cloth", "cloth")
                .category(Category::Fabric)
                .base(StatId::MarketValue, 1.5)
                .base(StatId::InsulationCold, 18.0)
                .factor(StatId::MaxHitPoints, 0.7)
                .factor(StatId::Flammability, 1.0),
            MaterialItem::new("Plainleather", "plainleather")
                .category(Category::Leathery)
                .base(StatId::MarketValue, 2.1)
                .base(StatId::InsulationCold, 16.0)
                .factor(StatId::MaxHitPoints, 1.0)
                .factor(StatId::Flammability, 1.0),
        ])
        .unwrap(),
    )
}

#[test]
fn fresh_session_lists_everything_by_name() {
    let mut table = StuffTable::new(vanilla_catalog());
    let labels: Vec<String> = table
        .visible_materials()
        .map(|m| m.label().to_string())
        .collect();
    assert_eq!(
        labels,
        vec![
            "cloth",
            "gold",
            "granite blocks",
            "plainleather",
            "plasteel",
            "steel",
            "wood"
        ]
    );
    assert_eq!(table.visible_count(), 7);
}

#[test]
fn category_checkboxes_drive_visibility() {
    let mut table = StuffTable::new(vanilla_catalog());
    table.set_category(Category::Metallic, false);
    table.set_category(Category::Stony, false);
    let labels: Vec<String> = table
        .visible_materials()
        .map(|m| m.label().to_string())
        .collect();
    assert_eq!(labels, vec!["cloth", "plainleather", "wood"]);

    table.set_category(Category::Metallic, true);
    assert_eq!(table.visible_count(), 6);
}

#[test]
fn market_value_sort_both_directions() {
    let mut table = StuffTable::new(vanilla_catalog());
    let key = SortKey::stat(StatSpace::Bases, StatId::MarketValue);

    table.sort_by(key);
    let ascending: Vec<String> = table
        .visible_materials()
        .map(|m| m.label().to_string())
        .collect();
    assert_eq!(ascending[0], "granite blocks");
    assert_eq!(ascending.last().unwrap(), "gold");

    table.sort_by(key);
    assert_eq!(table.sort_direction(), SortDirection::Descending);
    let descending: Vec<String> = table
        .visible_materials()
        .map(|m| m.label().to_string())
        .collect();
    assert_eq!(descending[0], "gold");
    assert_eq!(descending.last().unwrap(), "granite blocks");
}

#[test]
fn beauty_offset_sort_uses_zero_default() {
    let mut table = StuffTable::new(vanilla_catalog());
    table.set_sort(
        SortKey::stat(StatSpace::Offsets, StatId::Beauty),
        SortDirection::Ascending,
    );
    let labels: Vec<String> = table
        .visible_materials()
        .map(|m| m.label().to_string())
        .collect();
    // Steel (-4) first, gold (+20) last; everything without an offset
    // ties at 0 in catalog order in between.
    assert_eq!(labels.first().unwrap(), "steel");
    assert_eq!(labels.last().unwrap(), "gold");
    assert_eq!(
        &labels[1..6],
        &["plasteel", "wood", "granite blocks", "cloth", "plainleather"]
    );
}

#[test]
fn standard_rows_render_like_the_game_table() {
    let catalog = vanilla_catalog();
    let columns = standard_columns();
    let steel = catalog.get("Steel").unwrap();
    let row = render_row(steel, &columns, TemperatureUnit::Celsius);

    assert_eq!(row[0], "steel");
    assert_eq!(row[1], "1.9"); // market value
    assert_eq!(row[2], "90%"); // armor - sharp
    assert_eq!(row[3], "100%"); // armor - blunt, absent base -> 1
    assert_eq!(row[5], "0\u{b0}C"); // insulation - cold, absent -> 0
    assert_eq!(row[9], "-4"); // beauty offset
    assert_eq!(row[14], "40%"); // flammability factor
}

#[test]
fn temperature_mode_is_session_state() {
    let catalog = vanilla_catalog();
    let cloth = catalog.get("Cloth").unwrap();
    let columns = standard_columns();
    let cold = &columns[5];
    assert_eq!(format_cell(cloth, cold, TemperatureUnit::Celsius), "18\u{b0}C");
    assert_eq!(
        format_cell(cloth, cold, TemperatureUnit::Fahrenheit),
        "32.4\u{b0}F"
    );
    assert_eq!(format_cell(cloth, cold, TemperatureUnit::Kelvin), "18K");
}

#[test]
fn session_state_serde_round_trip() {
    let mut table = StuffTable::new(vanilla_catalog());
    table.set_category(Category::Woody, false);
    table.sort_by(SortKey::stat(StatSpace::Factors, StatId::MaxHitPoints));
    table.sort_by(SortKey::stat(StatSpace::Factors, StatId::MaxHitPoints));
    let expected: Vec<usize> = table.visible_items().to_vec();

    let json = serde_json::to_string(&table).unwrap();
    let mut restored: StuffTable = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.sort_direction(), SortDirection::Descending);
    assert!(!restored.filter().enabled(Category::Woody));
    assert_eq!(restored.visible_items(), &expected[..]);
}

// Two small hand-checked scenarios kept as regression anchors.

#[test]
fn union_example_three_items_two_categories() {
    let catalog = Arc::new(
        Catalog::new(vec![
            MaterialItem::new("A", "a")
                .category(Category::Metallic)
                .factor(StatId::MaxHitPoints, 1.0),
            MaterialItem::new("B", "b")
                .category(Category::Woody)
                .factor(StatId::MaxHitPoints, 1.0),
            MaterialItem::new("C", "c")
                .category(Category::Metallic)
                .category(Category::Woody)
                .factor(StatId::MaxHitPoints, 1.0),
        ])
        .unwrap(),
    );
    let mut table = StuffTable::new(Arc::clone(&catalog));
    for category in [Category::Stony, Category::Fabric, Category::Leathery] {
        table.set_category(category, false);
    }
    assert_eq!(table.visible_items(), &[0, 1, 2]);

    table.set_category(Category::Woody, false);
    assert_eq!(table.visible_items(), &[0, 2]);
}

#[test]
fn tie_example_market_value_ascending() {
    let catalog = Arc::new(
        Catalog::new(vec![
            MaterialItem::new("A", "a")
                .category(Category::Metallic)
                .base(StatId::MarketValue, 10.0)
                .factor(StatId::MaxHitPoints, 1.0),
            MaterialItem::new("B", "b")
                .category(Category::Metallic)
                .base(StatId::MarketValue, 5.0)
                .factor(StatId::MaxHitPoints, 1.0),
            MaterialItem::new("C", "c")
                .category(Category::Metallic)
                .base(StatId::MarketValue, 5.0)
                .factor(StatId::MaxHitPoints, 1.0),
        ])
        .unwrap(),
    );
    let mut table = StuffTable::new(catalog);
    table.set_sort(
        SortKey::stat(StatSpace::Bases, StatId::MarketValue),
        SortDirection::Ascending,
    );
    // B and C tie in original relative order, A last.
    assert_eq!(table.visible_items(), &[1, 2, 0]);
}
