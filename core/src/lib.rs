#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Relic Rooms engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values for systems to
//! react to deterministically. Systems consume event streams, query immutable
//! snapshots, and respond exclusively with new command batches.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Relic Rooms.";

/// Width of a single room, in pixels. The map raster must be an exact
/// horizontal multiple of this value.
pub const ROOM_WIDTH: u32 = 320;

/// Height of a single room, in pixels. The map raster must be an exact
/// vertical multiple of this value.
pub const ROOM_HEIGHT: u32 = 194;

/// Side length of the actor's square footprint, in pixels.
pub const ACTOR_SIZE: u32 = 8;

/// Distance the actor covers per movement tick, in pixels.
pub const ACTOR_SPEED: i32 = 2;

/// Width of a teleport letter trigger rectangle, in pixels.
pub const LETTER_WIDTH: u32 = 16;

/// Height of a teleport letter trigger rectangle, in pixels.
pub const LETTER_HEIGHT: u32 = 16;

/// Width of the gated passage strip carved through a special room. The strip
/// is centered horizontally and spans the full room height.
pub const PASSAGE_WIDTH: u32 = 24;

/// Side length of the square sampled at the center of each room when
/// detecting special-room markers.
pub const SPECIAL_SAMPLE: u32 = 64;

/// Minimum number of sampled pixels that must match a key's detection band
/// before the room is tagged with that key color.
pub const SPECIAL_MIN_PIXELS: usize = 20;

/// Minimum elapsed session time between two accepted teleports.
pub const TELEPORT_COOLDOWN: Duration = Duration::from_millis(1000);

/// Offset applied on both axes to a teleport destination so the actor does
/// not land exactly on the partner tile's top-left corner.
pub const TELEPORT_NUDGE: i32 = 2;

/// How long a notice should stay on screen unless a caller overrides it.
pub const NOTICE_DURATION: Duration = Duration::from_millis(5000);

/// Room the actor spawns into, which doubles as the expedition objective.
/// Clamped into the grid when the loaded map is smaller.
pub const SPAWN_ROOM: RoomCoord = RoomCoord::new(3, 6);

/// Inclusive lower bound of the grey floor band, applied per channel.
pub const FLOOR_MIN: u8 = 165;

/// Inclusive upper bound of the grey floor band, applied per channel.
pub const FLOOR_MAX: u8 = 175;

/// Commands that express all permissible world mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Advances the session clock by the provided delta time.
    Tick {
        /// Duration of simulated time that elapsed since the previous tick.
        dt: Duration,
    },
    /// Proposes an actor displacement within the current room.
    MoveActor {
        /// Horizontal displacement in pixels, positive toward the east.
        dx: i32,
        /// Vertical displacement in pixels, positive toward the south.
        dy: i32,
    },
    /// Places the actor directly, bypassing collision. Used by scenario
    /// setup and by adapters restoring a known position.
    PlaceActor {
        /// Room that becomes current.
        room: RoomCoord,
        /// Room-local top-left position for the actor footprint.
        position: PixelPoint,
    },
    /// Warps the actor to another room, stamping the teleport cooldown.
    TeleportActor {
        /// Destination room resolved from a partner tile.
        room: RoomCoord,
        /// Room-local destination position, already nudged off the tile.
        position: PixelPoint,
    },
    /// Requests that a key color be added to the inventory.
    CollectKey {
        /// Key color whose pixel the actor touched.
        color: KeyColor,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Indicates that the session clock advanced.
    TimeAdvanced {
        /// Duration of simulated time that elapsed in the tick.
        dt: Duration,
    },
    /// Confirms that the actor moved to a new position within a room.
    ActorMoved {
        /// Position occupied before the move.
        from: PixelPoint,
        /// Position occupied after the move.
        to: PixelPoint,
    },
    /// Reports that a proposed move was rejected by the walkability mask.
    MoveBlocked {
        /// Position the actor attempted to occupy.
        attempted: PixelPoint,
    },
    /// Announces that the current room changed after an edge crossing.
    RoomChanged {
        /// Room that was current before the crossing.
        from: RoomCoord,
        /// Room that became current.
        to: RoomCoord,
        /// Direction of the crossing.
        direction: Direction,
    },
    /// Confirms that the actor was placed directly.
    ActorPlaced {
        /// Room that became current.
        room: RoomCoord,
        /// Position assigned to the actor.
        position: PixelPoint,
    },
    /// Confirms that a teleport fired.
    ActorTeleported {
        /// Room the actor left.
        from_room: RoomCoord,
        /// Room the actor arrived in.
        to_room: RoomCoord,
        /// Room-local arrival position.
        position: PixelPoint,
    },
    /// Confirms that a key entered the inventory for the first time.
    KeyCollected {
        /// Key color that was collected.
        color: KeyColor,
    },
}

/// Cardinal directions used for room-boundary crossings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    North,
    /// Movement toward increasing column indices.
    East,
    /// Movement toward increasing row indices.
    South,
    /// Movement toward decreasing column indices.
    West,
}

/// Raw RGB color of a single map pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    red: u8,
    green: u8,
    blue: u8,
}

impl Rgb {
    /// Creates a new color from byte RGB components.
    #[must_use]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Red component of the color.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Green component of the color.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Blue component of the color.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }
}

/// Collectible key colors, in detection-priority order.
///
/// When special-room detection counts tie across colors, the earlier variant
/// wins, so the priority is Black over White over Yellow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum KeyColor {
    /// Onyx key, drawn with the exact color `(0, 0, 0)`.
    Black,
    /// Ivory key, drawn with the exact color `(255, 255, 255)`.
    White,
    /// Amber key, drawn with the exact color `(255, 255, 0)`.
    Yellow,
}

impl KeyColor {
    /// Every key color, in detection-priority order.
    pub const ALL: [KeyColor; 3] = [KeyColor::Black, KeyColor::White, KeyColor::Yellow];

    /// Exact pixel color that marks this key on the map. Collection requires
    /// an exact match; the surrounding tolerance band only affects
    /// walkability and special-room detection.
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        match self {
            KeyColor::Black => Rgb::from_rgb(0, 0, 0),
            KeyColor::White => Rgb::from_rgb(255, 255, 255),
            KeyColor::Yellow => Rgb::from_rgb(255, 255, 0),
        }
    }

    /// Reports whether a pixel falls inside this key's tolerance band.
    ///
    /// The bands double as the walkable glyph bands of the classifier: letter
    /// glyphs exposed by the cheat map variant are drawn in these colors and
    /// must never register as walls.
    #[must_use]
    pub const fn band_contains(self, color: Rgb) -> bool {
        let (r, g, b) = (color.red(), color.green(), color.blue());
        match self {
            KeyColor::Black => r <= 40 && g <= 40 && b <= 40,
            KeyColor::White => r >= 215 && g >= 215 && b >= 215,
            KeyColor::Yellow => r >= 200 && g >= 200 && b <= 80,
        }
    }

    /// One-shot narrative message shown when the key is collected.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            KeyColor::Black => {
                "You pry the onyx key from the rubble. Somewhere below, stone grinds against stone."
            }
            KeyColor::White => {
                "The ivory key is cold to the touch. Its teeth match no lock you have seen yet."
            }
            KeyColor::Yellow => {
                "The amber key glows faintly, as if it remembers the torches that lit this hall."
            }
        }
    }
}

/// Monotonic record of the keys collected during a session.
///
/// Flags only ever flip from `false` to `true` and are never reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    collected: [bool; KeyColor::ALL.len()],
}

impl Inventory {
    /// Creates an empty inventory with no keys collected.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            collected: [false; KeyColor::ALL.len()],
        }
    }

    /// Reports whether the provided key color has been collected.
    #[must_use]
    pub const fn is_collected(&self, color: KeyColor) -> bool {
        self.collected[color as usize]
    }

    /// Records the key as collected, returning `true` only on the first
    /// collection of that color.
    pub fn collect(&mut self, color: KeyColor) -> bool {
        let newly = !self.collected[color as usize];
        self.collected[color as usize] = true;
        newly
    }

    /// Reports whether every key color has been collected.
    #[must_use]
    pub fn all_collected(&self) -> bool {
        self.collected.iter().all(|flag| *flag)
    }
}

/// Timed message handed to the notification sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Notice {
    text: &'static str,
    duration: Duration,
}

impl Notice {
    /// Builds the narrative notice for a freshly collected key.
    #[must_use]
    pub const fn for_key(color: KeyColor) -> Self {
        Self {
            text: color.message(),
            duration: NOTICE_DURATION,
        }
    }

    /// Builds the milestone notice shown when the expedition completes.
    #[must_use]
    pub const fn expedition_complete() -> Self {
        Self {
            text: "Every key hangs from your belt and the spawn chamber lies open. \
                   The expedition is complete.",
            duration: NOTICE_DURATION,
        }
    }

    /// Text of the notice.
    #[must_use]
    pub const fn text(&self) -> &'static str {
        self.text
    }

    /// How long the notice should remain visible.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }
}

/// Location of a single room expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomCoord {
    column: u32,
    row: u32,
}

impl RoomCoord {
    /// Creates a new room coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the room.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the room.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }
}

/// Position of a single pixel. Signed so the actor may transiently sit
/// outside the room bounds while an edge crossing resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelPoint {
    x: i32,
    y: i32,
}

impl PixelPoint {
    /// Creates a new pixel position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Horizontal component of the position.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Vertical component of the position.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Returns the position displaced by the provided deltas.
    #[must_use]
    pub const fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Axis-aligned rectangle expressed in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelRect {
    origin: PixelPoint,
    width: u32,
    height: u32,
}

impl PixelRect {
    /// Constructs a rectangle from a top-left corner and size.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            origin: PixelPoint::new(x, y),
            width,
            height,
        }
    }

    /// Top-left corner of the rectangle.
    #[must_use]
    pub const fn origin(&self) -> PixelPoint {
        self.origin
    }

    /// Width of the rectangle in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height of the rectangle in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Leftmost pixel column covered by the rectangle.
    #[must_use]
    pub const fn left(&self) -> i32 {
        self.origin.x()
    }

    /// Topmost pixel row covered by the rectangle.
    #[must_use]
    pub const fn top(&self) -> i32 {
        self.origin.y()
    }

    /// First pixel column to the right of the rectangle.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.origin.x() + self.width as i32
    }

    /// First pixel row below the rectangle.
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.origin.y() + self.height as i32
    }

    /// Reports whether the rectangle covers the provided pixel.
    #[must_use]
    pub const fn contains(&self, point: PixelPoint) -> bool {
        point.x() >= self.left()
            && point.x() < self.right()
            && point.y() >= self.top()
            && point.y() < self.bottom()
    }

    /// Reports whether two rectangles share at least one pixel.
    #[must_use]
    pub const fn intersects(&self, other: &PixelRect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Errors raised while adopting a map raster at load time. All variants are
/// fatal: play never starts on a malformed map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    /// The raster dimensions are not exact multiples of the room size.
    #[error(
        "map dimensions {width}x{height} are not exact multiples of the \
         {room_width}x{room_height} room size"
    )]
    DimensionsNotRoomAligned {
        /// Width of the rejected raster.
        width: u32,
        /// Height of the rejected raster.
        height: u32,
        /// Required horizontal multiple.
        room_width: u32,
        /// Required vertical multiple.
        room_height: u32,
    },
    /// The pixel buffer does not match the declared dimensions.
    #[error("pixel buffer holds {actual} pixels but {expected} were declared")]
    PixelBufferMismatch {
        /// Pixel count implied by the declared dimensions.
        expected: usize,
        /// Pixel count actually provided.
        actual: usize,
    },
    /// The raster holds no rooms at all.
    #[error("map raster is empty")]
    EmptyRaster,
}

/// Errors raised by room-grid lookups. These indicate caller bugs rather
/// than recoverable play conditions; the grid refuses the lookup instead of
/// corrupting state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum GridError {
    /// The provided room coordinate lies outside the grid.
    #[error("room ({column}, {row}) lies outside the {columns}x{rows} room grid")]
    InvalidRoomCoordinate {
        /// Column of the rejected coordinate.
        column: u32,
        /// Row of the rejected coordinate.
        row: u32,
        /// Number of columns in the grid.
        columns: u32,
        /// Number of rows in the grid.
        rows: u32,
    },
}

/// Immutable RGB raster backing the whole world map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapRaster {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl MapRaster {
    /// Adopts a row-major pixel buffer, validating it against the declared
    /// dimensions.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgb>) -> Result<Self, MapError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(MapError::PixelBufferMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Width of the raster in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height of the raster in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns the pixel at the provided map-global coordinates, if any.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x < self.width && y < self.height {
            self.pixels
                .get(y as usize * self.width as usize + x as usize)
                .copied()
        } else {
            None
        }
    }

    /// Borrows the raw row-major pixel buffer.
    #[must_use]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }
}

/// Rectangular collision mask carried by a moving actor. Cells marked solid
/// participate in the overlap test against the room walkability mask.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FootprintMask {
    width: u32,
    height: u32,
    solid: Vec<bool>,
}

impl FootprintMask {
    /// Creates a fully solid mask of the provided dimensions, matching the
    /// player sprite's square footprint.
    #[must_use]
    pub fn solid(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            solid: vec![true; width as usize * height as usize],
        }
    }

    /// Width of the mask in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height of the mask in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Reports whether the mask cell at the provided local coordinates is
    /// solid. Out-of-range coordinates are never solid.
    #[must_use]
    pub fn is_solid(&self, x: u32, y: u32) -> bool {
        if x < self.width && y < self.height {
            self.solid
                .get(y as usize * self.width as usize + x as usize)
                .copied()
                .unwrap_or(false)
        } else {
            false
        }
    }
}

/// Read-only view into one room's precomputed walkability mask.
///
/// `true` cells are blocked. Pixels outside the room bounds are reported as
/// open so an actor sliding across a room edge never collides with the void.
#[derive(Clone, Copy, Debug)]
pub struct WalkMaskView<'a> {
    blocked: &'a [bool],
    width: u32,
    height: u32,
}

impl<'a> WalkMaskView<'a> {
    /// Captures a new view backed by the provided row-major cell slice.
    #[must_use]
    pub fn new(blocked: &'a [bool], width: u32, height: u32) -> Self {
        Self {
            blocked,
            width,
            height,
        }
    }

    /// Reports whether the room-local pixel is blocked.
    #[must_use]
    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.width || y >= self.height {
            return false;
        }
        self.blocked
            .get(y as usize * self.width as usize + x as usize)
            .copied()
            .unwrap_or(false)
    }

    /// Provides the dimensions of the underlying mask.
    #[must_use]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Read-only view into one room's sub-image of the map raster.
///
/// Serves the renderer, which blits the current room each frame, and the key
/// collector, which samples the pixels under the actor footprint.
#[derive(Clone, Copy, Debug)]
pub struct RoomRasterView<'a> {
    pixels: &'a [Rgb],
    stride: u32,
    origin_x: u32,
    origin_y: u32,
    width: u32,
    height: u32,
}

impl<'a> RoomRasterView<'a> {
    /// Captures a room-sized window into a map-wide pixel buffer.
    #[must_use]
    pub fn new(
        pixels: &'a [Rgb],
        stride: u32,
        origin_x: u32,
        origin_y: u32,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            pixels,
            stride,
            origin_x,
            origin_y,
            width,
            height,
        }
    }

    /// Returns the pixel at the provided room-local coordinates, if any.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let map_x = self.origin_x + x;
        let map_y = self.origin_y + y;
        self.pixels
            .get(map_y as usize * self.stride as usize + map_x as usize)
            .copied()
    }

    /// Provides the dimensions of the room window.
    #[must_use]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::{
        GridError, Inventory, KeyColor, MapError, MapRaster, PixelPoint, PixelRect, Rgb, RoomCoord,
    };
    use serde::{de::DeserializeOwned, Serialize};

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn room_coord_round_trips_through_bincode() {
        assert_round_trip(&RoomCoord::new(3, 6));
    }

    #[test]
    fn pixel_rect_round_trips_through_bincode() {
        assert_round_trip(&PixelRect::new(-2, 19, 16, 16));
    }

    #[test]
    fn key_color_round_trips_through_bincode() {
        assert_round_trip(&KeyColor::Yellow);
    }

    #[test]
    fn inventory_round_trips_through_bincode() {
        let mut inventory = Inventory::new();
        assert!(inventory.collect(KeyColor::White));
        assert_round_trip(&inventory);
    }

    #[test]
    fn grid_error_round_trips_through_bincode() {
        assert_round_trip(&GridError::InvalidRoomCoordinate {
            column: 9,
            row: 9,
            columns: 5,
            rows: 10,
        });
    }

    #[test]
    fn rect_contains_is_half_open() {
        let rect = PixelRect::new(10, 10, 16, 16);
        assert!(rect.contains(PixelPoint::new(10, 10)));
        assert!(rect.contains(PixelPoint::new(25, 25)));
        assert!(!rect.contains(PixelPoint::new(26, 10)));
        assert!(!rect.contains(PixelPoint::new(10, 26)));
        assert!(!rect.contains(PixelPoint::new(9, 10)));
    }

    #[test]
    fn rect_intersection_detects_overlap_and_separation() {
        let letter = PixelRect::new(5, 154, 16, 16);
        assert!(letter.intersects(&PixelRect::new(12, 160, 8, 8)));
        assert!(!letter.intersects(&PixelRect::new(21, 154, 8, 8)));
        assert!(!letter.intersects(&PixelRect::new(5, 170, 8, 8)));
    }

    #[test]
    fn key_bands_cover_their_exact_colors() {
        for color in KeyColor::ALL {
            assert!(
                color.band_contains(color.rgb()),
                "{color:?} band must contain its exact key color",
            );
        }
    }

    #[test]
    fn key_bands_exclude_the_floor_grey() {
        let floor = Rgb::from_rgb(170, 170, 170);
        for color in KeyColor::ALL {
            assert!(!color.band_contains(floor));
        }
    }

    #[test]
    fn inventory_collection_is_monotonic() {
        let mut inventory = Inventory::new();
        assert!(inventory.collect(KeyColor::Black));
        assert!(!inventory.collect(KeyColor::Black));
        assert!(inventory.is_collected(KeyColor::Black));
        assert!(!inventory.all_collected());
        assert!(inventory.collect(KeyColor::White));
        assert!(inventory.collect(KeyColor::Yellow));
        assert!(inventory.all_collected());
    }

    #[test]
    fn raster_rejects_mismatched_pixel_buffer() {
        let result = MapRaster::from_pixels(4, 4, vec![Rgb::from_rgb(0, 0, 0); 15]);
        assert_eq!(
            result.err(),
            Some(MapError::PixelBufferMismatch {
                expected: 16,
                actual: 15,
            })
        );
    }

    #[test]
    fn raster_pixel_lookup_respects_bounds() {
        let raster = MapRaster::from_pixels(2, 2, vec![Rgb::from_rgb(1, 2, 3); 4]).expect("raster");
        assert_eq!(raster.pixel(1, 1), Some(Rgb::from_rgb(1, 2, 3)));
        assert_eq!(raster.pixel(2, 0), None);
        assert_eq!(raster.pixel(0, 2), None);
    }
}
