//! Visual demonstration of the level generation pipeline.
//!
//! Run with: `cargo run --example generation_demo`

use oubliette_generation::prelude::*;
use oubliette_random::rng::Rng;

fn main() {
    println!("{}", "=".repeat(60));
    println!("Oubliette Level Generation Demo");
    println!("{}", "=".repeat(60));
    println!();

    // Demo 1: the first few levels, seeded from the level number
    for level in 0..3 {
        demo_level(level);
        println!();
    }

    // Demo 2: per-run variety with an explicit seed
    demo_seeded(4, 987_654_321);
}

fn demo_level(level: i32) {
    println!("Level {level} (seeded from the level number)");
    println!("{}", "-".repeat(60));

    match generate_level(level) {
        Ok((grid, constants)) => print_grid(&grid, &constants),
        Err(err) => println!("   generation failed: {err}"),
    }
}

fn demo_seeded(level: i32, seed: u64) {
    println!("Level {level} with explicit seed {seed}");
    println!("{}", "-".repeat(60));

    let config = GenerationConfig::default();
    let mut rng = Rng::with_seed(seed);
    match generate_level_with(level, &config, &mut rng) {
        Ok((grid, constants)) => print_grid(&grid, &constants),
        Err(err) => println!("   generation failed: {err}"),
    }
}

fn print_grid(grid: &Grid, constants: &LevelConstants) {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let tile = grid.get(glam::IVec2::new(x, y)).unwrap();
            print!("{}", tile.glyph());
        }
        println!();
    }

    let floors = grid.tiles_matching(TileType::Floor).len();
    let enemies = grid.tiles_matching(TileType::Enemy).len();
    println!();
    println!(
        "   Stats: {}x{}, {} floor tiles, {} enemies",
        constants.width, constants.height, floors, enemies
    );
}
