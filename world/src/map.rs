//! Room partitioning and per-pixel walkability classification.
//!
//! Everything in this module is computed once at startup from the source
//! raster and is immutable afterwards. Rooms are independent, so the
//! precomputation is a straight pass over the grid with no shared state.

use relic_rooms_core::{
    Direction, GridError, KeyColor, MapError, MapRaster, PixelRect, Rgb, RoomCoord, WalkMaskView,
    FLOOR_MAX, FLOOR_MIN, PASSAGE_WIDTH, ROOM_HEIGHT, ROOM_WIDTH, SPECIAL_MIN_PIXELS,
    SPECIAL_SAMPLE,
};

/// Deterministic partition of the map raster into fixed-size rooms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoomGrid {
    columns: u32,
    rows: u32,
}

impl RoomGrid {
    /// Derives the grid from a raster, enforcing the room-alignment
    /// invariant of the level format.
    pub(crate) fn for_raster(raster: &MapRaster) -> Result<Self, MapError> {
        let (width, height) = (raster.width(), raster.height());
        if width == 0 || height == 0 {
            return Err(MapError::EmptyRaster);
        }
        if width % ROOM_WIDTH != 0 || height % ROOM_HEIGHT != 0 {
            return Err(MapError::DimensionsNotRoomAligned {
                width,
                height,
                room_width: ROOM_WIDTH,
                room_height: ROOM_HEIGHT,
            });
        }
        Ok(Self {
            columns: width / ROOM_WIDTH,
            rows: height / ROOM_HEIGHT,
        })
    }

    /// Number of room columns in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of room rows in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Reports whether the coordinate names a room inside the grid.
    #[must_use]
    pub const fn contains(&self, room: RoomCoord) -> bool {
        room.column() < self.columns && room.row() < self.rows
    }

    /// Map-global pixel bounds of the room.
    ///
    /// An out-of-range coordinate is a caller bug; the grid refuses the
    /// lookup rather than handing back bounds into undefined raster space.
    pub fn bounds(&self, room: RoomCoord) -> Result<PixelRect, GridError> {
        if !self.contains(room) {
            return Err(GridError::InvalidRoomCoordinate {
                column: room.column(),
                row: room.row(),
                columns: self.columns,
                rows: self.rows,
            });
        }
        Ok(PixelRect::new(
            (room.column() * ROOM_WIDTH) as i32,
            (room.row() * ROOM_HEIGHT) as i32,
            ROOM_WIDTH,
            ROOM_HEIGHT,
        ))
    }

    /// Steps one room in the provided direction, clamping at grid edges.
    /// Stepping past an edge returns the coordinate unchanged.
    #[must_use]
    pub fn step(&self, room: RoomCoord, direction: Direction) -> RoomCoord {
        let (column, row) = (room.column(), room.row());
        match direction {
            Direction::West if column > 0 => RoomCoord::new(column - 1, row),
            Direction::East if column + 1 < self.columns => RoomCoord::new(column + 1, row),
            Direction::North if row > 0 => RoomCoord::new(column, row - 1),
            Direction::South if row + 1 < self.rows => RoomCoord::new(column, row + 1),
            _ => room,
        }
    }

    /// Row-major index of the room inside per-room precomputed tables.
    pub(crate) fn index(&self, room: RoomCoord) -> Option<usize> {
        if self.contains(room) {
            Some(room.row() as usize * self.columns as usize + room.column() as usize)
        } else {
            None
        }
    }

    /// Total number of rooms in the grid.
    pub(crate) fn room_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }
}

/// Reports whether the pixel falls in the grey floor band.
pub(crate) fn is_floor(color: Rgb) -> bool {
    let in_band = |channel: u8| (FLOOR_MIN..=FLOOR_MAX).contains(&channel);
    in_band(color.red()) && in_band(color.green()) && in_band(color.blue())
}

/// Classification rule for a single pixel: the grey floor band and the three
/// key glyph bands are walkable, everything else is a wall. A pure function
/// of the pixel color alone.
pub(crate) fn is_walkable(color: Rgb) -> bool {
    is_floor(color) || KeyColor::ALL.iter().any(|key| key.band_contains(color))
}

/// Per-room walkability mask, `true` meaning blocked.
#[derive(Clone, Debug)]
pub(crate) struct WalkMask {
    blocked: Vec<bool>,
}

impl WalkMask {
    /// Classifies one room's sub-image into a blocked/walkable grid.
    pub(crate) fn classify(raster: &MapRaster, bounds: PixelRect) -> Self {
        let mut blocked = Vec::with_capacity((bounds.width() * bounds.height()) as usize);
        for y in bounds.top()..bounds.bottom() {
            for x in bounds.left()..bounds.right() {
                let walkable = raster
                    .pixel(x as u32, y as u32)
                    .map_or(false, is_walkable);
                blocked.push(!walkable);
            }
        }
        Self { blocked }
    }

    /// Borrows the mask as a read-only view sized like one room.
    pub(crate) fn view(&self) -> WalkMaskView<'_> {
        WalkMaskView::new(&self.blocked, ROOM_WIDTH, ROOM_HEIGHT)
    }
}

/// Samples the center of a room and tags it with the dominant key color.
///
/// Counts pixels of the sample square that sit in a key's tolerance band but
/// not in the floor band. The best count must reach the detection threshold;
/// ties resolve by the fixed priority order of [`KeyColor::ALL`], so equal
/// counts can never flip the tag between runs.
pub(crate) fn detect_special(raster: &MapRaster, bounds: PixelRect) -> Option<KeyColor> {
    let sample_x = bounds.left() + ((ROOM_WIDTH - SPECIAL_SAMPLE) / 2) as i32;
    let sample_y = bounds.top() + ((ROOM_HEIGHT - SPECIAL_SAMPLE) / 2) as i32;
    let sample = PixelRect::new(sample_x, sample_y, SPECIAL_SAMPLE, SPECIAL_SAMPLE);

    let mut best: Option<(KeyColor, usize)> = None;
    for color in KeyColor::ALL {
        let mut count = 0usize;
        for y in sample.top()..sample.bottom() {
            for x in sample.left()..sample.right() {
                let Some(pixel) = raster.pixel(x as u32, y as u32) else {
                    continue;
                };
                if !is_floor(pixel) && color.band_contains(pixel) {
                    count += 1;
                }
            }
        }
        let beats = best.map_or(true, |(_, best_count)| count > best_count);
        if beats {
            best = Some((color, count));
        }
    }

    best.and_then(|(color, count)| (count >= SPECIAL_MIN_PIXELS).then_some(color))
}

/// Room-local rectangle of the gated passage: a fixed-width strip centered
/// horizontally and spanning the full room height.
#[must_use]
pub(crate) const fn passage_rect() -> PixelRect {
    PixelRect::new(
        ((ROOM_WIDTH - PASSAGE_WIDTH) / 2) as i32,
        0,
        PASSAGE_WIDTH,
        ROOM_HEIGHT,
    )
}
