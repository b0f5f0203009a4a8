#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Zone-bounded teleport graph and the pure system that drives it.
//!
//! Rooms are grouped into disjoint zones. A zone-member room carries labeled
//! letter tiles; entering a tile warps the actor to the tile carrying the
//! partner label somewhere else in the same zone. Destinations are resolved
//! deterministically by label pairing, never at random, and a global
//! cooldown keeps the pair from bouncing the actor back immediately.

use std::{collections::BTreeMap, fmt, time::Duration};

use relic_rooms_core::{
    Command, Event, PixelPoint, PixelRect, RoomCoord, LETTER_HEIGHT, LETTER_WIDTH, ROOM_HEIGHT,
    ROOM_WIDTH, TELEPORT_COOLDOWN, TELEPORT_NUDGE,
};

/// Half of a teleport pair. Authored labels use the suffixes `1` and `2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PairSide {
    /// The `1` suffix.
    One,
    /// The `2` suffix.
    Two,
}

impl PairSide {
    /// Returns the opposite suffix, identifying the partner tile.
    #[must_use]
    pub const fn partner(self) -> Self {
        match self {
            PairSide::One => PairSide::Two,
            PairSide::Two => PairSide::One,
        }
    }

    const fn digit(self) -> char {
        match self {
            PairSide::One => '1',
            PairSide::Two => '2',
        }
    }
}

/// Label bound to a teleport tile, such as `A1` or `A2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileLabel {
    base: char,
    side: PairSide,
}

impl TileLabel {
    /// Creates a label from a base identifier and a pair side.
    #[must_use]
    pub const fn new(base: char, side: PairSide) -> Self {
        Self { base, side }
    }

    /// Base identifier shared by both halves of the pair.
    #[must_use]
    pub const fn base(&self) -> char {
        self.base
    }

    /// Which half of the pair this label names.
    #[must_use]
    pub const fn side(&self) -> PairSide {
        self.side
    }

    /// Label of the partner tile: same base, opposite suffix.
    #[must_use]
    pub const fn partner(&self) -> Self {
        Self {
            base: self.base,
            side: self.side.partner(),
        }
    }
}

impl fmt::Display for TileLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base, self.side.digit())
    }
}

/// Labeled trigger rectangle authored at map-global pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeleportTile {
    label: TileLabel,
    origin: PixelPoint,
}

impl TeleportTile {
    /// Creates a tile from its label and map-global top-left corner.
    #[must_use]
    pub const fn new(label: TileLabel, origin: PixelPoint) -> Self {
        Self { label, origin }
    }

    /// Label bound to the tile.
    #[must_use]
    pub const fn label(&self) -> TileLabel {
        self.label
    }

    /// Trigger rectangle translated into the coordinate space of the room
    /// that hosts the tile. Letters authored a few pixels past a room border
    /// yield a slightly negative local origin, which the signed rectangle
    /// representation carries without clipping.
    #[must_use]
    pub const fn local_rect(&self, room: RoomCoord) -> PixelRect {
        PixelRect::new(
            self.origin.x() - (room.column() * ROOM_WIDTH) as i32,
            self.origin.y() - (room.row() * ROOM_HEIGHT) as i32,
            LETTER_WIDTH,
            LETTER_HEIGHT,
        )
    }
}

/// Set of rooms whose teleport tiles may warp an actor among each other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeleportZone {
    rooms: Vec<RoomCoord>,
}

impl TeleportZone {
    /// Creates a zone from its member rooms, in authored order.
    #[must_use]
    pub fn new(rooms: Vec<RoomCoord>) -> Self {
        Self { rooms }
    }

    /// Member rooms in authored, deterministic order.
    #[must_use]
    pub fn rooms(&self) -> &[RoomCoord] {
        &self.rooms
    }

    /// Reports whether the room belongs to this zone.
    #[must_use]
    pub fn contains(&self, room: RoomCoord) -> bool {
        self.rooms.contains(&room)
    }
}

/// Data-integrity findings reported by [`TeleportLayout::validate`].
///
/// Issues are warnings rather than fatal errors: an unpartnered tile is
/// inert at runtime and play continues around it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayoutIssue {
    /// A tile's partner label resolves to no tile in its zone.
    #[error("tile {label} in room ({}, {}) has no partner in its zone", .room.column(), .room.row())]
    UnpartneredTile {
        /// Room hosting the orphaned tile.
        room: RoomCoord,
        /// Label whose partner is missing.
        label: TileLabel,
    },
    /// A room appears in more than one zone.
    #[error("room ({}, {}) belongs to more than one zone", .room.column(), .room.row())]
    OverlappingZones {
        /// Room claimed by multiple zones.
        room: RoomCoord,
    },
    /// A room carries tiles but belongs to no zone, so they can never fire.
    #[error("room ({}, {}) carries tiles but belongs to no zone", .room.column(), .room.row())]
    TilesOutsideAnyZone {
        /// Room whose tiles are unreachable.
        room: RoomCoord,
    },
}

/// Immutable teleport graph: zones plus per-room tile lists.
///
/// Tile enumeration follows authored order and rooms are keyed through an
/// ordered map, so every lookup the runtime performs is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TeleportLayout {
    zones: Vec<TeleportZone>,
    tiles: BTreeMap<RoomCoord, Vec<TeleportTile>>,
}

impl TeleportLayout {
    /// Builds a layout from zones and per-room tile lists.
    #[must_use]
    pub fn new(zones: Vec<TeleportZone>, tiles: Vec<(RoomCoord, Vec<TeleportTile>)>) -> Self {
        let mut map = BTreeMap::new();
        for (room, room_tiles) in tiles {
            let _ = map.insert(room, room_tiles);
        }
        Self { zones, tiles: map }
    }

    /// Returns the zone containing the room, if any.
    #[must_use]
    pub fn zone_of(&self, room: RoomCoord) -> Option<&TeleportZone> {
        self.zones.iter().find(|zone| zone.contains(room))
    }

    /// Tiles hosted by the room, in authored order.
    #[must_use]
    pub fn tiles_in(&self, room: RoomCoord) -> &[TeleportTile] {
        self.tiles.get(&room).map_or(&[], Vec::as_slice)
    }

    /// Room-local trigger rectangles for every tile in the room. Collision
    /// treats these as temporarily open, so standing on a letter glyph never
    /// reads as a wall hit.
    #[must_use]
    pub fn letter_rects(&self, room: RoomCoord) -> Vec<PixelRect> {
        self.tiles_in(room)
            .iter()
            .map(|tile| tile.local_rect(room))
            .collect()
    }

    /// Resolves the partner of `label` by scanning the other rooms of the
    /// source room's zone in authored order. The source room itself is
    /// skipped so a pair can never teleport onto itself.
    #[must_use]
    pub fn find_partner(
        &self,
        source_room: RoomCoord,
        label: TileLabel,
    ) -> Option<(RoomCoord, TeleportTile)> {
        let zone = self.zone_of(source_room)?;
        let wanted = label.partner();
        for &room in zone.rooms() {
            if room == source_room {
                continue;
            }
            for tile in self.tiles_in(room) {
                if tile.label() == wanted {
                    return Some((room, *tile));
                }
            }
        }
        None
    }

    /// Checks the layout invariants: zones pairwise disjoint, every tile
    /// inside a zone, every label partnered. Intended to run once at load.
    #[must_use]
    pub fn validate(&self) -> Vec<LayoutIssue> {
        let mut issues = Vec::new();

        for (index, zone) in self.zones.iter().enumerate() {
            for other in self.zones.iter().skip(index + 1) {
                for &room in zone.rooms() {
                    if other.contains(room) {
                        issues.push(LayoutIssue::OverlappingZones { room });
                    }
                }
            }
        }

        for (&room, tiles) in &self.tiles {
            if self.zone_of(room).is_none() {
                issues.push(LayoutIssue::TilesOutsideAnyZone { room });
                continue;
            }
            for tile in tiles {
                if self.find_partner(room, tile.label()).is_none() {
                    issues.push(LayoutIssue::UnpartneredTile {
                        room,
                        label: tile.label(),
                    });
                }
            }
        }

        issues
    }
}

/// Pure system that fires teleports when the actor stands on a letter tile.
#[derive(Debug, Default)]
pub struct Teleport;

impl Teleport {
    /// Consumes world events and immutable views to emit teleport commands.
    ///
    /// At most one teleport command is emitted per call: the first tile in
    /// authored order that overlaps the actor footprint wins. A tile whose
    /// partner is missing produces no command and leaves the cooldown
    /// untouched; the world stamps the cooldown only when it applies the
    /// emitted [`Command::TeleportActor`].
    pub fn handle(
        &self,
        events: &[Event],
        layout: &TeleportLayout,
        current_room: RoomCoord,
        footprint: PixelRect,
        clock: Duration,
        last_teleport_at: Option<Duration>,
        out: &mut Vec<Command>,
    ) {
        if !events
            .iter()
            .any(|event| matches!(event, Event::TimeAdvanced { .. }))
        {
            return;
        }

        if let Some(last) = last_teleport_at {
            if clock.saturating_sub(last) < TELEPORT_COOLDOWN {
                return;
            }
        }

        if layout.zone_of(current_room).is_none() {
            return;
        }

        for tile in layout.tiles_in(current_room) {
            if !tile.local_rect(current_room).intersects(&footprint) {
                continue;
            }

            if let Some((room, partner)) = layout.find_partner(current_room, tile.label()) {
                let corner = partner.local_rect(room).origin();
                out.push(Command::TeleportActor {
                    room,
                    position: corner.translated(TELEPORT_NUDGE, TELEPORT_NUDGE),
                });
            }
            return;
        }
    }
}
