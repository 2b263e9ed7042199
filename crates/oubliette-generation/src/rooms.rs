//! Room creation inside terminal BSP leaves.

use glam::IVec2;
use log::debug;
use oubliette_geometry::prelude::Rect;
use oubliette_random::rng::Rng;

use crate::bsp::BspTree;
use crate::config::GenerationConfig;
use crate::tile::Grid;

/// Places one room in every terminal leaf that can hold one and stamps the
/// rooms into the grid.
///
/// Returns the room rectangles in leaf-creation order. Leaves that are too
/// small, or that keep rolling rooms with a bad aspect ratio, simply yield
/// nothing — their area stays empty.
pub fn build_rooms(
    grid: &mut Grid,
    tree: &mut BspTree,
    config: &GenerationConfig,
    rng: &mut Rng,
) -> Vec<Rect> {
    let mut rooms = Vec::new();
    for id in tree.terminal_leaves() {
        let bounds = tree.leaves()[id].bounds;
        match create_room(bounds, config, rng) {
            Some(room) => {
                grid.place_rect(room);
                tree.leaf_mut(id).room = Some(room);
                rooms.push(room);
            }
            None => debug!("no room fits in leaf {id} ({bounds:?})"),
        }
    }
    debug!("created {} rooms", rooms.len());
    rooms
}

/// Rolls a room inside a container.
///
/// Width and height are sampled uniformly from the range that keeps one tile
/// of container border on every side. Rooms whose width/height ratio falls
/// outside the configured range are re-rolled a bounded number of times.
fn create_room(bounds: Rect, config: &GenerationConfig, rng: &mut Rng) -> Option<Rect> {
    let max_width = bounds.width() - 2;
    let max_height = bounds.height() - 2;
    if max_width < config.min_room_size || max_height < config.min_room_size {
        return None;
    }

    let (ratio_min, ratio_max) = config.room_ratio;
    for _ in 0..config.room_create_tries {
        let width = rng.range(config.min_room_size, max_width);
        let height = rng.range(config.min_room_size, max_height);

        let ratio = width as f32 / height as f32;
        if ratio < ratio_min || ratio > ratio_max {
            debug!("rerolling {width}x{height} room, ratio {ratio:.2} out of range");
            continue;
        }

        let x = rng.range(bounds.min.x + 1, bounds.max.x - width);
        let y = rng.range(bounds.min.y + 1, bounds.max.y - height);
        return Some(Rect::new(
            IVec2::new(x, y),
            IVec2::new(x + width - 1, y + height - 1),
        ));
    }
    None
}
