use serde::{Deserialize, Serialize};

/// An 8-bit RGB triplet used by renderers to paint a terrain letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a six digit hexadecimal triplet such as `adff2f`.
    pub fn from_hex(repr: &str) -> anyhow::Result<Self> {
        anyhow::ensure!(
            repr.len() == 6,
            "color '{}' must have exactly six hex digits",
            repr
        );
        let bytes = hex::decode(repr)
            .map_err(|e| anyhow::anyhow!("color '{}' is not hexadecimal: {}", repr, e))?;
        Ok(Self::new(bytes[0], bytes[1], bytes[2]))
    }

    pub fn to_hex(self) -> String {
        hex::encode([self.r, self.g, self.b])
    }
}

/// One row of a terrain table: `letter alpha max_food live color`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainArchetype {
    pub letter: char,
    /// Regrowth coefficient in `[0, 1]`.
    pub alpha: f64,
    pub max_food: f64,
    /// Whether cells of this kind take part in the simulation.
    pub live: bool,
    pub color: Rgb,
}
