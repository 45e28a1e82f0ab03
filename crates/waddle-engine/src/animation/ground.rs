use super::driver::TRACK_LENGTH;

/// Row of identical ground tiles laid along Z and centred on the origin.
///
/// The ground node scrolls by whole tile pitches per loop, so after each
/// loop every tile sits where its neighbour started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundLayout {
    pub tile_size: f64,
    pub tile_count: u32,
}

impl Default for GroundLayout {
    fn default() -> Self {
        Self {
            tile_size: TRACK_LENGTH,
            tile_count: 5,
        }
    }
}

impl GroundLayout {
    pub fn new(tile_size: f64, tile_count: u32) -> Self {
        Self {
            tile_size,
            tile_count,
        }
    }

    /// Z centre of each tile, `(i - (count - 1) / 2) * tile_size`. Even
    /// counts put the origin on a tile edge.
    pub fn tile_positions(&self) -> Vec<f64> {
        let half = (self.tile_count as f64 - 1.0) / 2.0;
        (0..self.tile_count)
            .map(|i| (i as f64 - half) * self.tile_size)
            .collect()
    }

    /// Total length covered by the tiles.
    pub fn extent(&self) -> f64 {
        self.tile_size * self.tile_count as f64
    }

    /// Whether scrolling by `track_length` lands every tile exactly on
    /// another tile's slot.
    pub fn is_seamless(&self, track_length: f64) -> bool {
        if self.tile_size <= 0.0 || track_length <= 0.0 {
            return false;
        }
        let tiles = track_length / self.tile_size;
        (tiles - tiles.round()).abs() < 1e-9 && tiles.round() >= 1.0
    }
}
