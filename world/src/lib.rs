#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Relic Rooms.
//!
//! The world adopts an immutable map raster at startup, precomputes every
//! per-room walkability mask and special-room tag, and then owns the only
//! mutable session state: actor position, current room, inventory, session
//! clock, and the teleport cooldown stamp. All mutation flows through
//! [`apply`]; systems and adapters read back through [`query`].

use std::time::Duration;

use relic_rooms_core::{
    Command, Direction, Event, FootprintMask, Inventory, KeyColor, MapError, MapRaster,
    PixelPoint, PixelRect, RoomCoord, WalkMaskView, ACTOR_SIZE, ROOM_HEIGHT, ROOM_WIDTH,
    SPAWN_ROOM, WELCOME_BANNER,
};
use relic_rooms_system_collision::{blocked, Overlays};
use relic_rooms_system_teleport::TeleportLayout;

pub mod campaign;
mod map;

pub use map::RoomGrid;

/// Represents the authoritative Relic Rooms world state.
#[derive(Debug)]
pub struct World {
    banner: &'static str,
    raster: MapRaster,
    grid: RoomGrid,
    masks: Vec<map::WalkMask>,
    special: Vec<Option<KeyColor>>,
    layout: TeleportLayout,
    current_room: RoomCoord,
    objective_room: RoomCoord,
    actor_position: PixelPoint,
    actor_mask: FootprintMask,
    inventory: Inventory,
    clock: Duration,
    last_teleport_at: Option<Duration>,
}

impl World {
    /// Adopts a map raster and teleport layout, precomputing all derived
    /// room data before the first tick.
    ///
    /// The actor spawns centered in the spawn room, which doubles as the
    /// expedition objective; on maps smaller than the campaign grid the
    /// spawn coordinate is clamped inside the grid.
    pub fn from_raster(raster: MapRaster, layout: TeleportLayout) -> Result<Self, MapError> {
        let grid = RoomGrid::for_raster(&raster)?;

        let mut masks = Vec::with_capacity(grid.room_count());
        let mut special = Vec::with_capacity(grid.room_count());
        for row in 0..grid.rows() {
            for column in 0..grid.columns() {
                let Ok(bounds) = grid.bounds(RoomCoord::new(column, row)) else {
                    continue;
                };
                masks.push(map::WalkMask::classify(&raster, bounds));
                special.push(map::detect_special(&raster, bounds));
            }
        }

        let spawn = RoomCoord::new(
            SPAWN_ROOM.column().min(grid.columns() - 1),
            SPAWN_ROOM.row().min(grid.rows() - 1),
        );
        let center = PixelPoint::new(
            ((ROOM_WIDTH - ACTOR_SIZE) / 2) as i32,
            ((ROOM_HEIGHT - ACTOR_SIZE) / 2) as i32,
        );

        Ok(Self {
            banner: WELCOME_BANNER,
            raster,
            grid,
            masks,
            special,
            layout,
            current_room: spawn,
            objective_room: spawn,
            actor_position: center,
            actor_mask: FootprintMask::solid(ACTOR_SIZE, ACTOR_SIZE),
            inventory: Inventory::new(),
            clock: Duration::ZERO,
            last_teleport_at: None,
        })
    }

    fn mask_view(&self, room: RoomCoord) -> Option<WalkMaskView<'_>> {
        let index = self.grid.index(room)?;
        self.masks.get(index).map(map::WalkMask::view)
    }

    fn special_tag(&self, room: RoomCoord) -> Option<KeyColor> {
        let index = self.grid.index(room)?;
        self.special.get(index).copied().flatten()
    }

    /// Passage rectangle to force blocked for the current room, present only
    /// while the room is special and its gating key is still missing. The
    /// carve geometry is recomputed here on every query so it always matches
    /// the classifier exactly, rather than being baked into a cached mask.
    fn sealed_passage(&self) -> Option<PixelRect> {
        let gate = self.special_tag(self.current_room)?;
        (!self.inventory.is_collected(gate)).then(map::passage_rect)
    }

    fn move_actor(&mut self, dx: i32, dy: i32, out_events: &mut Vec<Event>) {
        let from = self.actor_position;
        let proposed = from.translated(dx, dy);
        let Some(mask) = self.mask_view(self.current_room) else {
            return;
        };

        let open = self.layout.letter_rects(self.current_room);
        let overlays = Overlays::new(&open, self.sealed_passage());
        if blocked(mask, &self.actor_mask, proposed, overlays) {
            out_events.push(Event::MoveBlocked {
                attempted: proposed,
            });
            return;
        }

        self.actor_position = proposed;
        out_events.push(Event::ActorMoved { from, to: proposed });
        self.resolve_edge_crossings(out_events);
    }

    /// Room-boundary policy: once the footprint has fully left the viewport,
    /// step the grid and wrap the actor to the opposite edge; at the map
    /// border the step clamps and the actor is pinned to the edge instead.
    fn resolve_edge_crossings(&mut self, out_events: &mut Vec<Event>) {
        let room_width = ROOM_WIDTH as i32;
        let room_height = ROOM_HEIGHT as i32;

        if self.actor_position.x() < 0 {
            self.cross_edge(Direction::West, out_events);
        } else if self.actor_position.x() >= room_width {
            self.cross_edge(Direction::East, out_events);
        }

        if self.actor_position.y() < 0 {
            self.cross_edge(Direction::North, out_events);
        } else if self.actor_position.y() >= room_height {
            self.cross_edge(Direction::South, out_events);
        }
    }

    fn cross_edge(&mut self, direction: Direction, out_events: &mut Vec<Event>) {
        let size = ACTOR_SIZE as i32;
        let far_x = ROOM_WIDTH as i32 - size;
        let far_y = ROOM_HEIGHT as i32 - size;

        let from = self.current_room;
        let to = self.grid.step(from, direction);
        let position = self.actor_position;

        if to == from {
            self.actor_position = match direction {
                Direction::West => PixelPoint::new(0, position.y()),
                Direction::East => PixelPoint::new(far_x, position.y()),
                Direction::North => PixelPoint::new(position.x(), 0),
                Direction::South => PixelPoint::new(position.x(), far_y),
            };
            return;
        }

        self.current_room = to;
        self.actor_position = match direction {
            Direction::West => PixelPoint::new(far_x, position.y()),
            Direction::East => PixelPoint::new(0, position.y()),
            Direction::North => PixelPoint::new(position.x(), far_y),
            Direction::South => PixelPoint::new(position.x(), 0),
        };
        out_events.push(Event::RoomChanged {
            from,
            to,
            direction,
        });
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::Tick { dt } => {
            world.clock = world.clock.saturating_add(dt);
            out_events.push(Event::TimeAdvanced { dt });
        }
        Command::MoveActor { dx, dy } => {
            world.move_actor(dx, dy, out_events);
        }
        Command::PlaceActor { room, position } => {
            if !world.grid.contains(room) {
                return;
            }
            world.current_room = room;
            world.actor_position = position;
            out_events.push(Event::ActorPlaced { room, position });
        }
        Command::TeleportActor { room, position } => {
            if !world.grid.contains(room) {
                return;
            }
            let from_room = world.current_room;
            world.current_room = room;
            world.actor_position = position;
            world.last_teleport_at = Some(world.clock);
            out_events.push(Event::ActorTeleported {
                from_room,
                to_room: room,
                position,
            });
        }
        Command::CollectKey { color } => {
            if world.inventory.collect(color) {
                out_events.push(Event::KeyCollected { color });
            }
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use std::time::Duration;

    use relic_rooms_core::{
        Inventory, KeyColor, PixelPoint, PixelRect, RoomCoord, RoomRasterView, WalkMaskView,
        ACTOR_SIZE,
    };
    use relic_rooms_system_teleport::TeleportLayout;

    use super::{map, RoomGrid, World};

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Provides read-only access to the room grid partition.
    #[must_use]
    pub fn room_grid(world: &World) -> &RoomGrid {
        &world.grid
    }

    /// Room currently shown in the viewport.
    #[must_use]
    pub fn current_room(world: &World) -> RoomCoord {
        world.current_room
    }

    /// Room that completes the expedition once every key is collected.
    #[must_use]
    pub fn objective_room(world: &World) -> RoomCoord {
        world.objective_room
    }

    /// Room-local top-left position of the actor.
    #[must_use]
    pub fn actor_position(world: &World) -> PixelPoint {
        world.actor_position
    }

    /// Room-local bounding rectangle of the actor footprint.
    #[must_use]
    pub fn actor_footprint(world: &World) -> PixelRect {
        PixelRect::new(
            world.actor_position.x(),
            world.actor_position.y(),
            ACTOR_SIZE,
            ACTOR_SIZE,
        )
    }

    /// Snapshot of the collected keys.
    #[must_use]
    pub fn inventory(world: &World) -> Inventory {
        world.inventory
    }

    /// Accumulated session time.
    #[must_use]
    pub fn clock(world: &World) -> Duration {
        world.clock
    }

    /// Session time of the last accepted teleport, if any.
    #[must_use]
    pub fn last_teleport_at(world: &World) -> Option<Duration> {
        world.last_teleport_at
    }

    /// Provides read-only access to the teleport layout.
    #[must_use]
    pub fn teleport_layout(world: &World) -> &TeleportLayout {
        &world.layout
    }

    /// Walkability mask of the provided room, if the coordinate is valid.
    #[must_use]
    pub fn walk_mask(world: &World, room: RoomCoord) -> Option<WalkMaskView<'_>> {
        world.mask_view(room)
    }

    /// Key color gating the provided room, if it was detected as special.
    #[must_use]
    pub fn special_tag(world: &World, room: RoomCoord) -> Option<KeyColor> {
        world.special_tag(room)
    }

    /// Gated passage rectangle of the provided room, present only for
    /// special rooms. The blocked/open state of the strip follows the
    /// inventory at collision time.
    #[must_use]
    pub fn gated_passage(world: &World, room: RoomCoord) -> Option<PixelRect> {
        world.special_tag(room).map(|_| map::passage_rect())
    }

    /// Sub-image of the current room, for the renderer and the key scanner.
    #[must_use]
    pub fn room_raster(world: &World) -> RoomRasterView<'_> {
        room_raster_at(world, world.current_room).unwrap_or_else(|| {
            RoomRasterView::new(world.raster.pixels(), world.raster.width(), 0, 0, 0, 0)
        })
    }

    /// Sub-image of the provided room, if the coordinate is valid.
    #[must_use]
    pub fn room_raster_at(world: &World, room: RoomCoord) -> Option<RoomRasterView<'_>> {
        let bounds = world.grid.bounds(room).ok()?;
        Some(RoomRasterView::new(
            world.raster.pixels(),
            world.raster.width(),
            bounds.left() as u32,
            bounds.top() as u32,
            bounds.width(),
            bounds.height(),
        ))
    }

    /// Reports whether the expedition is complete: every key collected and
    /// the actor back in the objective room.
    #[must_use]
    pub fn expedition_complete(world: &World) -> bool {
        world.current_room == world.objective_room && world.inventory.all_collected()
    }
}

#[cfg(test)]
mod tests {
    use super::{apply, query, World};
    use relic_rooms_core::{
        Command, Direction, Event, KeyColor, MapRaster, PixelPoint, PixelRect, Rgb, RoomCoord,
        ACTOR_SIZE, PASSAGE_WIDTH, ROOM_HEIGHT, ROOM_WIDTH,
    };
    use relic_rooms_system_teleport::TeleportLayout;
    use std::time::Duration;

    const FLOOR: Rgb = Rgb::from_rgb(170, 170, 170);
    const WALL: Rgb = Rgb::from_rgb(60, 20, 20);

    fn floor_raster(room_columns: u32, room_rows: u32) -> MapRaster {
        let width = room_columns * ROOM_WIDTH;
        let height = room_rows * ROOM_HEIGHT;
        MapRaster::from_pixels(width, height, vec![FLOOR; (width * height) as usize])
            .expect("raster")
    }

    fn paint(raster: &MapRaster, rect: PixelRect, color: Rgb) -> MapRaster {
        let mut pixels = raster.pixels().to_vec();
        for y in rect.top()..rect.bottom() {
            for x in rect.left()..rect.right() {
                pixels[y as usize * raster.width() as usize + x as usize] = color;
            }
        }
        MapRaster::from_pixels(raster.width(), raster.height(), pixels).expect("raster")
    }

    fn world_from(raster: MapRaster) -> World {
        World::from_raster(raster, TeleportLayout::default()).expect("world")
    }

    fn place(world: &mut World, room: RoomCoord, position: PixelPoint) {
        let mut events = Vec::new();
        apply(world, Command::PlaceActor { room, position }, &mut events);
        assert_eq!(events, vec![Event::ActorPlaced { room, position }]);
    }

    #[test]
    fn rejects_rasters_that_are_not_room_aligned() {
        let raster = MapRaster::from_pixels(
            ROOM_WIDTH + 1,
            ROOM_HEIGHT,
            vec![FLOOR; ((ROOM_WIDTH + 1) * ROOM_HEIGHT) as usize],
        )
        .expect("raster");
        assert!(World::from_raster(raster, TeleportLayout::default()).is_err());
    }

    #[test]
    fn every_room_mask_matches_the_room_dimensions() {
        let world = world_from(floor_raster(2, 3));
        let grid = query::room_grid(&world);
        for row in 0..grid.rows() {
            for column in 0..grid.columns() {
                let mask = query::walk_mask(&world, RoomCoord::new(column, row))
                    .expect("mask for every room");
                assert_eq!(mask.dimensions(), (ROOM_WIDTH, ROOM_HEIGHT));
            }
        }
    }

    #[test]
    fn spawn_room_is_clamped_into_small_grids() {
        let world = world_from(floor_raster(1, 1));
        assert_eq!(query::current_room(&world), RoomCoord::new(0, 0));
        assert_eq!(query::objective_room(&world), RoomCoord::new(0, 0));
    }

    #[test]
    fn walls_reject_moves_and_leave_the_actor_in_place() {
        let raster = paint(&floor_raster(1, 1), PixelRect::new(160, 40, 10, 40), WALL);
        let mut world = world_from(raster);
        place(&mut world, RoomCoord::new(0, 0), PixelPoint::new(150, 50));

        let mut events = Vec::new();
        apply(&mut world, Command::MoveActor { dx: 4, dy: 0 }, &mut events);

        assert_eq!(
            events,
            vec![Event::MoveBlocked {
                attempted: PixelPoint::new(154, 50),
            }]
        );
        assert_eq!(query::actor_position(&world), PixelPoint::new(150, 50));
    }

    #[test]
    fn open_floor_accepts_moves() {
        let mut world = world_from(floor_raster(1, 1));
        place(&mut world, RoomCoord::new(0, 0), PixelPoint::new(50, 50));

        let mut events = Vec::new();
        apply(&mut world, Command::MoveActor { dx: 2, dy: -2 }, &mut events);

        assert_eq!(
            events,
            vec![Event::ActorMoved {
                from: PixelPoint::new(50, 50),
                to: PixelPoint::new(52, 48),
            }]
        );
    }

    #[test]
    fn crossing_the_west_edge_wraps_into_the_neighbor_room() {
        let mut world = world_from(floor_raster(2, 1));
        place(&mut world, RoomCoord::new(1, 0), PixelPoint::new(0, 90));

        let mut events = Vec::new();
        apply(&mut world, Command::MoveActor { dx: -2, dy: 0 }, &mut events);

        assert_eq!(query::current_room(&world), RoomCoord::new(0, 0));
        assert_eq!(
            query::actor_position(&world),
            PixelPoint::new((ROOM_WIDTH - ACTOR_SIZE) as i32, 90)
        );
        assert!(events.contains(&Event::RoomChanged {
            from: RoomCoord::new(1, 0),
            to: RoomCoord::new(0, 0),
            direction: Direction::West,
        }));
    }

    #[test]
    fn crossing_the_west_edge_at_column_zero_clamps() {
        let mut world = world_from(floor_raster(2, 1));
        place(&mut world, RoomCoord::new(0, 0), PixelPoint::new(0, 90));

        let mut events = Vec::new();
        apply(&mut world, Command::MoveActor { dx: -2, dy: 0 }, &mut events);

        assert_eq!(query::current_room(&world), RoomCoord::new(0, 0));
        assert_eq!(query::actor_position(&world), PixelPoint::new(0, 90));
        assert!(!events
            .iter()
            .any(|event| matches!(event, Event::RoomChanged { .. })));
    }

    #[test]
    fn crossing_the_south_edge_wraps_to_the_room_top() {
        let mut world = world_from(floor_raster(1, 2));
        let start_y = (ROOM_HEIGHT - 1) as i32;
        place(&mut world, RoomCoord::new(0, 0), PixelPoint::new(40, start_y));

        let mut events = Vec::new();
        apply(&mut world, Command::MoveActor { dx: 0, dy: 2 }, &mut events);

        assert_eq!(query::current_room(&world), RoomCoord::new(0, 1));
        assert_eq!(query::actor_position(&world), PixelPoint::new(40, 0));
        assert!(events.contains(&Event::RoomChanged {
            from: RoomCoord::new(0, 0),
            to: RoomCoord::new(0, 1),
            direction: Direction::South,
        }));
    }

    fn special_room_raster() -> MapRaster {
        // A 10x10 onyx marker in the sampled center tags the room black.
        paint(
            &floor_raster(1, 1),
            PixelRect::new(155, 92, 10, 10),
            KeyColor::Black.rgb(),
        )
    }

    #[test]
    fn gated_passage_blocks_until_the_key_is_collected() {
        let mut world = world_from(special_room_raster());
        assert_eq!(
            query::special_tag(&world, RoomCoord::new(0, 0)),
            Some(KeyColor::Black)
        );

        let passage = query::gated_passage(&world, RoomCoord::new(0, 0)).expect("passage");
        let inside = PixelPoint::new(passage.left() + 4, 30);
        place(&mut world, RoomCoord::new(0, 0), inside);

        let mut events = Vec::new();
        apply(&mut world, Command::MoveActor { dx: 0, dy: 2 }, &mut events);
        assert_eq!(
            events,
            vec![Event::MoveBlocked {
                attempted: inside.translated(0, 2),
            }]
        );

        let mut events = Vec::new();
        apply(
            &mut world,
            Command::CollectKey {
                color: KeyColor::Black,
            },
            &mut events,
        );
        assert_eq!(
            events,
            vec![Event::KeyCollected {
                color: KeyColor::Black,
            }]
        );

        let mut events = Vec::new();
        apply(&mut world, Command::MoveActor { dx: 0, dy: 2 }, &mut events);
        assert_eq!(
            events,
            vec![Event::ActorMoved {
                from: inside,
                to: inside.translated(0, 2),
            }]
        );
    }

    #[test]
    fn collecting_the_key_leaves_the_rest_of_the_mask_unchanged() {
        let wall = PixelRect::new(40, 40, 12, 12);
        let raster = paint(&special_room_raster(), wall, WALL);
        let mut world = world_from(raster);

        let outside_wall = PixelPoint::new(wall.left() - ACTOR_SIZE as i32, 44);
        place(&mut world, RoomCoord::new(0, 0), outside_wall);

        let mut events = Vec::new();
        apply(&mut world, Command::MoveActor { dx: 2, dy: 0 }, &mut events);
        assert!(matches!(events[0], Event::MoveBlocked { .. }));

        let mut events = Vec::new();
        apply(
            &mut world,
            Command::CollectKey {
                color: KeyColor::Black,
            },
            &mut events,
        );

        let mut events = Vec::new();
        apply(&mut world, Command::MoveActor { dx: 2, dy: 0 }, &mut events);
        assert!(matches!(events[0], Event::MoveBlocked { .. }));
    }

    #[test]
    fn passage_width_matches_the_documented_constant() {
        let world = world_from(special_room_raster());
        let passage = query::gated_passage(&world, RoomCoord::new(0, 0)).expect("passage");
        assert_eq!(passage.width(), PASSAGE_WIDTH);
        assert_eq!(passage.height(), ROOM_HEIGHT);
    }

    #[test]
    fn key_collection_emits_exactly_one_event_per_color() {
        let mut world = world_from(floor_raster(1, 1));

        let mut events = Vec::new();
        apply(
            &mut world,
            Command::CollectKey {
                color: KeyColor::White,
            },
            &mut events,
        );
        apply(
            &mut world,
            Command::CollectKey {
                color: KeyColor::White,
            },
            &mut events,
        );

        assert_eq!(
            events,
            vec![Event::KeyCollected {
                color: KeyColor::White,
            }]
        );
        assert!(query::inventory(&world).is_collected(KeyColor::White));
    }

    #[test]
    fn teleport_application_stamps_the_cooldown_clock() {
        let mut world = world_from(floor_raster(2, 1));
        let mut events = Vec::new();
        apply(
            &mut world,
            Command::Tick {
                dt: Duration::from_secs(5),
            },
            &mut events,
        );

        apply(
            &mut world,
            Command::TeleportActor {
                room: RoomCoord::new(1, 0),
                position: PixelPoint::new(22, 22),
            },
            &mut events,
        );

        assert_eq!(query::last_teleport_at(&world), Some(Duration::from_secs(5)));
        assert_eq!(query::current_room(&world), RoomCoord::new(1, 0));
        assert!(events.contains(&Event::ActorTeleported {
            from_room: RoomCoord::new(0, 0),
            to_room: RoomCoord::new(1, 0),
            position: PixelPoint::new(22, 22),
        }));
    }

    #[test]
    fn placement_outside_the_grid_is_refused() {
        let mut world = world_from(floor_raster(1, 1));
        let mut events = Vec::new();
        apply(
            &mut world,
            Command::PlaceActor {
                room: RoomCoord::new(4, 4),
                position: PixelPoint::new(0, 0),
            },
            &mut events,
        );
        assert!(events.is_empty());
        assert_eq!(query::current_room(&world), RoomCoord::new(0, 0));
    }

    #[test]
    fn expedition_completes_at_the_objective_with_all_keys() {
        let mut world = world_from(floor_raster(1, 1));
        assert!(!query::expedition_complete(&world));

        let mut events = Vec::new();
        for color in KeyColor::ALL {
            apply(&mut world, Command::CollectKey { color }, &mut events);
        }
        assert!(query::expedition_complete(&world));
    }
}
