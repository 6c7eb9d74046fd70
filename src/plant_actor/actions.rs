use crate::domain::Plant;

/// Which way a [`PlantAction::Adjust`] moves the stock level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Decrease,
    Increase,
}

/// Custom actions for Plant entities.
///
/// These run inside the plant actor, so each one reads and writes the stock
/// level in a single step with no other request interleaved.
#[derive(Debug, Clone)]
pub enum PlantAction {
    /// Checks the current stock level without modifying it.
    CheckStock,
    /// Moves the stock level by `delta` units.
    ///
    /// A decrease only applies when at least `delta` units are available;
    /// otherwise the plant is left untouched and
    /// [`PlantActionResult::Insufficient`] is returned.
    Adjust { delta: u32, direction: Direction },
}

/// Results from PlantActions
#[derive(Debug, Clone)]
pub enum PlantActionResult {
    StockLevel(u32),
    /// The plant as it stands after the adjustment.
    Adjusted(Plant),
    Insufficient { requested: u32, available: u32 },
}
