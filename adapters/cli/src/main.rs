#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that boots the Relic Rooms experience.
//!
//! Loads the map raster, validates the campaign teleport layout, and can
//! replay a scripted walk through the standard per-tick sequence: move,
//! teleport check, key collection. Notices land on stdout in place of the
//! graphical notification sink.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{bail, Context};
use clap::Parser;
use relic_rooms_core::{Command, Event, MapRaster, Notice, Rgb, ACTOR_SPEED};
use relic_rooms_system_bootstrap::Bootstrap;
use relic_rooms_system_keys::KeyCollector;
use relic_rooms_system_teleport::Teleport;
use relic_rooms_world::{self as world, campaign, query, World};

const TICK: Duration = Duration::from_millis(16);

/// Boots the engine against a map asset and optionally replays a walk.
#[derive(Debug, Parser)]
#[command(name = "relic-rooms", about = "Room-based pixel exploration engine")]
struct Args {
    /// Path to the RGB map raster (PNG), sized in exact room multiples.
    map: PathBuf,

    /// Walk script to replay, one `n`/`e`/`s`/`w` step per tick.
    #[arg(long)]
    walk: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let raster = load_raster(&args.map)
        .with_context(|| format!("failed to load map asset {}", args.map.display()))?;
    let layout = campaign::layout();
    for issue in layout.validate() {
        log::warn!("teleport layout: {issue}");
    }

    let mut world = World::from_raster(raster, layout)?;
    let bootstrap = Bootstrap::default();
    println!("{}", bootstrap.welcome_banner(&world));

    let grid = query::room_grid(&world);
    log::info!("map spans {}x{} rooms", grid.columns(), grid.rows());

    if let Some(script) = &args.walk {
        replay_walk(&mut world, script)?;
    }

    let room = query::current_room(&world);
    let position = query::actor_position(&world);
    println!(
        "actor in room ({}, {}) at ({}, {})",
        room.column(),
        room.row(),
        position.x(),
        position.y(),
    );
    if let Some(notice) = bootstrap.completion_notice(&world) {
        println!("{}", notice.text());
    }

    Ok(())
}

/// Decodes the map asset into the engine's raster representation.
fn load_raster(path: &Path) -> anyhow::Result<MapRaster> {
    let image = image::open(path)?.to_rgb8();
    let (width, height) = image.dimensions();
    let pixels: Vec<Rgb> = image
        .pixels()
        .map(|pixel| Rgb::from_rgb(pixel[0], pixel[1], pixel[2]))
        .collect();
    Ok(MapRaster::from_pixels(width, height, pixels)?)
}

/// Runs one tick per script step through the fixed per-tick sequence.
fn replay_walk(world: &mut World, script: &str) -> anyhow::Result<()> {
    let teleport = Teleport::default();
    let collector = KeyCollector::default();

    for step in script.chars() {
        let (dx, dy) = match step {
            'n' => (0, -ACTOR_SPEED),
            's' => (0, ACTOR_SPEED),
            'w' => (-ACTOR_SPEED, 0),
            'e' => (ACTOR_SPEED, 0),
            ',' | ' ' => continue,
            other => bail!("unknown walk step {other:?}, expected n/e/s/w"),
        };

        let mut events = Vec::new();
        world::apply(world, Command::Tick { dt: TICK }, &mut events);
        world::apply(world, Command::MoveActor { dx, dy }, &mut events);

        let mut commands = Vec::new();
        teleport.handle(
            &events,
            query::teleport_layout(world),
            query::current_room(world),
            query::actor_footprint(world),
            query::clock(world),
            query::last_teleport_at(world),
            &mut commands,
        );
        for command in commands.drain(..) {
            world::apply(world, command, &mut events);
        }

        collector.handle(
            &events,
            query::room_raster(world),
            query::actor_footprint(world),
            query::inventory(world),
            &mut commands,
        );
        for command in commands {
            world::apply(world, command, &mut events);
        }

        for event in &events {
            match event {
                Event::KeyCollected { color } => {
                    println!("note: {}", Notice::for_key(*color).text());
                }
                Event::ActorTeleported { to_room, .. } => {
                    log::debug!(
                        "teleported to room ({}, {})",
                        to_room.column(),
                        to_room.row(),
                    );
                }
                _ => {}
            }
        }
    }

    Ok(())
}
