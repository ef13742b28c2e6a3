//! Health component

/// Hit points of a living entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Health {
    /// Upper bound for `current`
    pub max: f32,
    /// Remaining hit points
    pub current: f32,
}

impl Default for Health {
    fn default() -> Self {
        Self {
            max: 1.0,
            current: 1.0,
        }
    }
}

impl Health {
    /// Check whether any hit points remain
    pub fn is_alive(&self) -> bool {
        self.current > 0.0
    }

    /// Remove hit points, never dropping below zero
    pub fn harm(&mut self, amount: f32) {
        self.current = (self.current - amount).max(0.0);
    }

    /// Restore hit points, never exceeding `max`
    pub fn heal(&mut self, amount: f32) {
        self.current = (self.current + amount).min(self.max);
    }
}
