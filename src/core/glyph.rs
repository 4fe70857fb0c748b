use serde::{Deserialize, Serialize};

use crate::error::{VaseError, VaseResult};
use crate::render::Color;

/// Fixed amount every increase/decrease activation moves a fill level by.
pub const FILL_STEP: f64 = 10.0;

/// One vase glyph: an outlined container plus its current liquid fill.
///
/// `id`, `container_height`, and `color` never change after construction;
/// mutation happens by deriving a replacement record with an adjusted
/// `fill_level`, always inside `[0, container_height]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlyphRecord {
    pub id: u32,
    pub container_height: f64,
    pub fill_level: f64,
    pub color: Color,
}

impl GlyphRecord {
    #[must_use]
    pub const fn new(id: u32, container_height: f64, fill_level: f64, color: Color) -> Self {
        Self {
            id,
            container_height,
            fill_level,
            color,
        }
    }

    pub fn validate(self) -> VaseResult<()> {
        if !self.container_height.is_finite() || self.container_height <= 0.0 {
            return Err(VaseError::InvalidData(format!(
                "glyph {} container height must be finite and > 0",
                self.id
            )));
        }
        if !self.fill_level.is_finite()
            || self.fill_level < 0.0
            || self.fill_level > self.container_height
        {
            return Err(VaseError::InvalidData(format!(
                "glyph {} fill level must be within [0, {}]",
                self.id, self.container_height
            )));
        }
        self.color.validate()
    }

    /// Derives the record after one increase step, clamped to the container.
    #[must_use]
    pub fn increased(self) -> Self {
        let candidate = self.fill_level + FILL_STEP;
        Self {
            fill_level: candidate.min(self.container_height),
            ..self
        }
    }

    /// Derives the record after one decrease step, floored at zero.
    #[must_use]
    pub fn decreased(self) -> Self {
        let candidate = self.fill_level - FILL_STEP;
        Self {
            fill_level: candidate.max(0.0),
            ..self
        }
    }
}

/// Ordered glyph collection; index position determines horizontal layout.
///
/// Increase/decrease derive a full replacement sequence rather than mutating
/// records in place, so the set is always a consistent snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphSet {
    records: Vec<GlyphRecord>,
}

impl GlyphSet {
    pub fn new(records: Vec<GlyphRecord>) -> VaseResult<Self> {
        if records.is_empty() {
            return Err(VaseError::InvalidData(
                "glyph set must not be empty".to_owned(),
            ));
        }
        for record in &records {
            record.validate()?;
        }
        Ok(Self { records })
    }

    /// The six-glyph seed set the original chart ships with.
    #[must_use]
    pub fn seed() -> Self {
        Self {
            records: seed_records(),
        }
    }

    #[must_use]
    pub fn records(&self) -> &[GlyphRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn fill_levels(&self) -> Vec<f64> {
        self.records.iter().map(|record| record.fill_level).collect()
    }

    /// Derives the set after one increase step on every glyph.
    #[must_use]
    pub fn increased(&self) -> Self {
        Self {
            records: self.records.iter().map(|r| r.increased()).collect(),
        }
    }

    /// Derives the set after one decrease step on every glyph.
    #[must_use]
    pub fn decreased(&self) -> Self {
        Self {
            records: self.records.iter().map(|r| r.decreased()).collect(),
        }
    }
}

/// Seed data: ids, container heights, fill levels, and palette from the
/// original six-vase chart.
#[must_use]
pub fn seed_records() -> Vec<GlyphRecord> {
    vec![
        GlyphRecord::new(1, 90.0, 35.0, Color::from_rgb8(0xFD, 0xA7, 0xDF)),
        GlyphRecord::new(2, 100.0, 40.0, Color::from_rgb8(0x54, 0xA0, 0xFF)),
        GlyphRecord::new(3, 50.0, 10.0, Color::from_rgb8(0xE8, 0x41, 0x18)),
        GlyphRecord::new(4, 30.0, 20.0, Color::from_rgb8(0xFF, 0x85, 0x1B)),
        GlyphRecord::new(5, 80.0, 30.0, Color::from_rgb8(0x3D, 0x99, 0x70)),
        GlyphRecord::new(6, 20.0, 5.0, Color::from_rgb8(0x99, 0x80, 0xFA)),
    ]
}
