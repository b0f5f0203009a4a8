//! End-to-end expedition scenario: spawn, collect every key via scripted
//! positions, return to the objective room, and observe completion.

use std::time::Duration;

use relic_rooms_core::{
    Command, Event, KeyColor, MapRaster, Notice, PixelPoint, Rgb, RoomCoord, ROOM_HEIGHT,
    ROOM_WIDTH, SPAWN_ROOM,
};
use relic_rooms_system_keys::KeyCollector;
use relic_rooms_system_teleport::TeleportLayout;
use relic_rooms_world::{self as world, query, World};

const FLOOR: Rgb = Rgb::from_rgb(170, 170, 170);

// Scripted room-local key positions inside the spawn room.
const KEY_PIXELS: [(KeyColor, u32, u32); 3] = [
    (KeyColor::Black, 100, 100),
    (KeyColor::White, 130, 100),
    (KeyColor::Yellow, 160, 100),
];

fn expedition_raster() -> MapRaster {
    let columns = SPAWN_ROOM.column() + 1;
    let rows = SPAWN_ROOM.row() + 1;
    let width = columns * ROOM_WIDTH;
    let height = rows * ROOM_HEIGHT;
    let mut pixels = vec![FLOOR; (width * height) as usize];

    let origin_x = SPAWN_ROOM.column() * ROOM_WIDTH;
    let origin_y = SPAWN_ROOM.row() * ROOM_HEIGHT;
    for (color, x, y) in KEY_PIXELS {
        let index = (origin_y + y) as usize * width as usize + (origin_x + x) as usize;
        pixels[index] = color.rgb();
    }

    MapRaster::from_pixels(width, height, pixels).expect("raster")
}

fn tick(world: &mut World) -> Vec<Event> {
    let mut events = Vec::new();
    world::apply(
        world,
        Command::Tick {
            dt: Duration::from_millis(16),
        },
        &mut events,
    );
    events
}

fn stand_on(world: &mut World, room: RoomCoord, x: u32, y: u32) {
    let mut events = Vec::new();
    world::apply(
        world,
        Command::PlaceActor {
            room,
            position: PixelPoint::new(x as i32 - 2, y as i32 - 2),
        },
        &mut events,
    );
}

#[test]
fn keys_then_objective_completes_the_expedition() {
    let mut world = World::from_raster(expedition_raster(), TeleportLayout::default())
        .expect("world");
    let collector = KeyCollector::default();

    assert_eq!(query::current_room(&world), SPAWN_ROOM);
    assert_eq!(query::objective_room(&world), SPAWN_ROOM);
    assert!(!query::expedition_complete(&world));

    for (color, x, y) in KEY_PIXELS {
        stand_on(&mut world, SPAWN_ROOM, x, y);
        let events = tick(&mut world);

        let mut commands = Vec::new();
        collector.handle(
            &events,
            query::room_raster(&world),
            query::actor_footprint(&world),
            query::inventory(&world),
            &mut commands,
        );
        assert_eq!(commands, vec![Command::CollectKey { color }]);

        let mut collect_events = Vec::new();
        for command in commands {
            world::apply(&mut world, command, &mut collect_events);
        }
        assert_eq!(collect_events, vec![Event::KeyCollected { color }]);
        assert!(!Notice::for_key(color).text().is_empty());
    }

    // Re-touching a collected key emits nothing further.
    let (color, x, y) = KEY_PIXELS[0];
    stand_on(&mut world, SPAWN_ROOM, x, y);
    let events = tick(&mut world);
    let mut commands = Vec::new();
    collector.handle(
        &events,
        query::room_raster(&world),
        query::actor_footprint(&world),
        query::inventory(&world),
        &mut commands,
    );
    assert!(commands.is_empty());
    assert!(query::inventory(&world).is_collected(color));

    // Completion requires standing in the objective room.
    stand_on(&mut world, RoomCoord::new(0, 0), 50, 50);
    assert!(!query::expedition_complete(&world));

    stand_on(&mut world, SPAWN_ROOM, 50, 50);
    assert!(query::expedition_complete(&world));
}

#[test]
fn walking_within_the_spawn_room_never_changes_it() {
    let mut world = World::from_raster(expedition_raster(), TeleportLayout::default())
        .expect("world");
    stand_on(&mut world, SPAWN_ROOM, 150, 90);

    for _ in 0..10 {
        let mut events = tick(&mut world);
        world::apply(&mut world, Command::MoveActor { dx: 2, dy: 0 }, &mut events);
        assert_eq!(query::current_room(&world), SPAWN_ROOM);
    }
}
