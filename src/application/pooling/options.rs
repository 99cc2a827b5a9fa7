//! Create pool options

/// Options for creating a pool
#[derive(Debug, Clone, Default)]
pub struct CreatePoolOptions {
    /// Compliance year every member must have a record for
    pub year: i32,
    /// Member ships in the order given by the caller
    pub ship_ids: Vec<String>,
}

impl CreatePoolOptions {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            ship_ids: Vec::new(),
        }
    }

    /// Add one ship
    pub fn with_ship(mut self, ship_id: impl Into<String>) -> Self {
        self.ship_ids.push(ship_id.into());
        self
    }

    /// Add several ships
    pub fn with_ships<I, S>(mut self, ship_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ship_ids.extend(ship_ids.into_iter().map(Into::into));
        self
    }
}
