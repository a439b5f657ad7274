//! Cell text formatting.
//!
//! Pure string production for a host's row drawing: the engine decides
//! what a cell says, the host decides where it goes.

use crate::column::Column;
use crate::sort::SortKey;
use serde::{Deserialize, Serialize};
use stufflist_core::MaterialItem;

/// How a column renders its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellFormat {
    /// The material's display label
    Label,
    /// Plain numeric value
    Number,
    /// Value times 100 with a trailing percent sign
    Percent,
    /// Additive offset with an explicit sign
    Offset,
    /// Temperature delta scaled into the session's display unit
    Temperature,
}

/// The session's temperature display mode.
///
/// Insulation stats are temperature *deltas*, so Fahrenheit only scales
/// by 9/5 and never applies the 32-degree offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TemperatureUnit {
    /// Degrees Celsius
    #[default]
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
    /// Kelvin
    Kelvin,
}

impl TemperatureUnit {
    /// Multiplier from a Celsius delta into this unit.
    #[must_use]
    pub const fn scale(self) -> f32 {
        match self {
            Self::Celsius | Self::Kelvin => 1.0,
            Self::Fahrenheit => 1.8,
        }
    }

    /// Unit suffix appended to formatted values.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Celsius => "\u{b0}C",
            Self::Fahrenheit => "\u{b0}F",
            Self::Kelvin => "K",
        }
    }
}

/// Format `value` with at most two decimals and no trailing zeros.
fn trim_number(value: f32) -> String {
    let mut text = format!("{value:.2}");
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    if text == "-0" {
        return "0".to_string();
    }
    text
}

/// Render one cell of a material row.
///
/// Stat lookups follow the column's value space with the usual defaults,
/// except temperature cells: an undefined insulation base displays as 0,
/// not 1, because "no data" means "no insulation".
#[must_use]
pub fn format_cell(item: &MaterialItem, column: &Column, unit: TemperatureUnit) -> String {
    let value = match column.sort_key() {
        SortKey::Name => return item.label().to_string(),
        SortKey::Stat { space, stat } => match column.format() {
            CellFormat::Temperature => item.stat_base_or(stat, 0.0),
            _ => item.stat(space, stat),
        },
    };
    match column.format() {
        CellFormat::Label | CellFormat::Number => trim_number(value),
        CellFormat::Percent => format!("{}%", trim_number(value * 100.0)),
        CellFormat::Offset => {
            if value > 0.0 {
                format!("+{}", trim_number(value))
            } else {
                trim_number(value)
            }
        }
        CellFormat::Temperature => {
            format!("{}{}", trim_number(value * unit.scale()), unit.suffix())
        }
    }
}

/// Render a full row in column order.
#[must_use]
pub fn render_row(item: &MaterialItem, columns: &[Column], unit: TemperatureUnit) -> Vec<String> {
    columns
        .iter()
        .map(|column| format_cell(item, column, unit))
        .collect()
}
