//! Column definitions for the material table.

use crate::format::CellFormat;
use crate::sort::SortKey;
use serde::{Deserialize, Serialize};
use stufflist_core::{StatId, StatSpace};

/// One sortable table column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Header label
    label: String,
    /// What clicking this header sorts by
    key: SortKey,
    /// How cell values render
    format: CellFormat,
    /// Optional header/cell tooltip text
    tooltip: Option<String>,
}

impl Column {
    /// Create a column.
    #[must_use]
    pub fn new(label: impl Into<String>, key: SortKey, format: CellFormat) -> Self {
        Self {
            label: label.into(),
            key,
            format,
            tooltip: None,
        }
    }

    /// Attach tooltip text.
    #[must_use]
    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Header label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The sort key this column's header drives.
    #[must_use]
    pub fn sort_key(&self) -> SortKey {
        self.key
    }

    /// Cell rendering format.
    #[must_use]
    pub fn format(&self) -> CellFormat {
        self.format
    }

    /// Tooltip text, if any.
    #[must_use]
    pub fn tooltip_text(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }
}

/// The standard material-table column set, in display order.
///
/// Name, eight base-value columns, the beauty offset, and six factor
/// columns. Hosts that want a different layout can build their own
/// `Vec<Column>`; the engine only cares about sort keys.
#[must_use]
pub fn standard_columns() -> Vec<Column> {
    vec![
        Column::new("Name", SortKey::Name, CellFormat::Label),
        Column::new(
            "Market value",
            SortKey::stat(StatSpace::Bases, StatId::MarketValue),
            CellFormat::Number,
        ),
        Column::new(
            "Armor - sharp",
            SortKey::stat(StatSpace::Bases, StatId::ArmorSharp),
            CellFormat::Percent,
        ),
        Column::new(
            "Armor - blunt",
            SortKey::stat(StatSpace::Bases, StatId::ArmorBlunt),
            CellFormat::Percent,
        ),
        Column::new(
            "Armor - heat",
            SortKey::stat(StatSpace::Bases, StatId::ArmorHeat),
            CellFormat::Percent,
        ),
        Column::new(
            "Insulation - cold",
            SortKey::stat(StatSpace::Bases, StatId::InsulationCold),
            CellFormat::Temperature,
        ),
        Column::new(
            "Insulation - heat",
            SortKey::stat(StatSpace::Bases, StatId::InsulationHeat),
            CellFormat::Temperature,
        ),
        Column::new(
            "Damage - sharp",
            SortKey::stat(StatSpace::Bases, StatId::SharpDamageMultiplier),
            CellFormat::Percent,
        ),
        Column::new(
            "Damage - blunt",
            SortKey::stat(StatSpace::Bases, StatId::BluntDamageMultiplier),
            CellFormat::Percent,
        ),
        Column::new(
            "Beauty offset",
            SortKey::stat(StatSpace::Offsets, StatId::Beauty),
            CellFormat::Offset,
        )
        .tooltip("Beauty = ((Base * Factor) + Offset) * Quality"),
        Column::new(
            "Max hit points",
            SortKey::stat(StatSpace::Factors, StatId::MaxHitPoints),
            CellFormat::Percent,
        ),
        Column::new(
            "Beauty",
            SortKey::stat(StatSpace::Factors, StatId::Beauty),
            CellFormat::Percent,
        ),
        Column::new(
            "Work to make",
            SortKey::stat(StatSpace::Factors, StatId::WorkToMake),
            CellFormat::Percent,
        ),
        Column::new(
            "Work to build",
            SortKey::stat(StatSpace::Factors, StatId::WorkToBuild),
            CellFormat::Percent,
        ),
        Column::new(
            "Flammability",
            SortKey::stat(StatSpace::Factors, StatId::Flammability),
            CellFormat::Percent,
        ),
        Column::new(
            "Melee cooldown",
            SortKey::stat(StatSpace::Factors, StatId::MeleeCooldown),
            CellFormat::Percent,
        ),
    ]
}
