//! Headless walkthrough demo
//!
//! Drives the showcase scene through a scripted stroll without a window or
//! renderer: walk toward the back marker until collision pins the avatar,
//! sidestep around it, then stop. Prints the frame states so the movement,
//! rollback, and animation edges can be eyeballed from a terminal.

use std::path::Path;

use glam::Vec3;
use portfolio_engine::game::projects::load_projects_or_builtin;
use portfolio_engine::game::scene::ShowcaseScene;
use portfolio_engine::input::KeyCode;
use portfolio_engine::physics::Collidable;

const FRAME_DT: f32 = 1.0 / 60.0;

fn run_frames(scene: &mut ShowcaseScene, frames: usize, label: &str) {
    for _ in 0..frames {
        scene.tick(FRAME_DT);
    }
    let pos = scene.avatar_position();
    println!(
        "[Walkthrough] {label}: avatar=({:.2}, {:.2}, {:.2}) facing={:.2} moving={} clip={:?}",
        pos.x,
        pos.y,
        pos.z,
        scene.avatar.rotation_y(),
        scene.avatar.is_moving(),
        scene.mixer.active_clip()
    );
}

fn main() {
    let projects = load_projects_or_builtin(Path::new("data/projects.json"));
    println!("[Walkthrough] Loaded {} projects", projects.len());

    let mut scene = ShowcaseScene::new(&projects);

    // Showcase shell: back wall plus a walk-over floor slab
    let added = scene.register_static_geometry(vec![
        Collidable::new(Vec3::new(-8.0, 0.0, -8.5), Vec3::new(8.0, 4.0, -8.0)),
        Collidable::no_collide(Vec3::new(-8.0, -0.2, -8.0), Vec3::new(8.0, 0.0, 8.0)),
    ]);
    println!(
        "[Walkthrough] Registered {} static boxes ({} collidables total)",
        added,
        scene.collidables.len()
    );

    scene.camera.snap_to(scene.avatar_position());

    // Walk toward the back marker until its box pins the avatar
    scene.handle_key(KeyCode::W, true);
    run_frames(&mut scene, 60, "forward 60 frames");
    run_frames(&mut scene, 60, "forward 60 more (pinned at marker)");

    // Sidestep right past the marker
    scene.handle_key(KeyCode::W, false);
    scene.handle_key(KeyCode::D, true);
    run_frames(&mut scene, 40, "sidestep right 40 frames");

    // Resume forward, now clear of the marker
    scene.handle_key(KeyCode::D, false);
    scene.handle_key(KeyCode::W, true);
    run_frames(&mut scene, 40, "forward again 40 frames");

    // Release everything and let the idle fade settle
    scene.handle_key(KeyCode::W, false);
    run_frames(&mut scene, 30, "idle 30 frames");

    if let Some(marker) = scene.nearest_marker() {
        println!(
            "[Walkthrough] Nearest project: {} at ({:.1}, {:.1}, {:.1})",
            marker.project_id, marker.position.x, marker.position.y, marker.position.z
        );
    }

    let cam = scene.camera.position();
    println!(
        "[Walkthrough] Camera settled at ({:.2}, {:.2}, {:.2}) yaw={:.2} pitch={:.2}",
        cam.x,
        cam.y,
        cam.z,
        scene.camera.yaw(),
        scene.camera.pitch()
    );
}
