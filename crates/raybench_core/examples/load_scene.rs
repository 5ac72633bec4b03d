//! Example: Load and inspect a scene file.
//!
//! Run with: cargo run --example load_scene -- scenes/canonical.json
//! Without an argument the canonical scene is printed as JSON.

use std::env;

use raybench_core::{load_scene, scene_to_string, SceneDescription, ThingDescription};

fn main() {
    env_logger::init();

    let Some(path) = env::args().nth(1) else {
        match scene_to_string(&SceneDescription::canonical()) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error serializing canonical scene: {}", e),
        }
        return;
    };

    println!("Loading scene file: {}", path);

    match load_scene(&path) {
        Ok(scene) => {
            println!("\n--- Things ({}) ---", scene.thing_count());
            for (i, thing) in scene.things.iter().enumerate() {
                match thing {
                    ThingDescription::Sphere { center, radius, surface } => println!(
                        "  [{}] sphere at ({:.2}, {:.2}, {:.2}) r={:.2} {:?}",
                        i, center.x, center.y, center.z, radius, surface
                    ),
                    ThingDescription::Plane { normal, offset, surface } => println!(
                        "  [{}] plane n=({:.2}, {:.2}, {:.2}) d={:.2} {:?}",
                        i, normal.x, normal.y, normal.z, offset, surface
                    ),
                }
            }

            println!("\n--- Lights ({}) ---", scene.light_count());
            for (i, light) in scene.lights.iter().enumerate() {
                println!(
                    "  [{}] at ({:.2}, {:.2}, {:.2}) color ({:.3}, {:.3}, {:.3})",
                    i, light.pos.x, light.pos.y, light.pos.z, light.color.x, light.color.y, light.color.z
                );
            }

            let camera = scene.camera;
            println!("\n--- Camera ---");
            println!(
                "  ({:.2}, {:.2}, {:.2}) looking at ({:.2}, {:.2}, {:.2})",
                camera.pos.x, camera.pos.y, camera.pos.z,
                camera.look_at.x, camera.look_at.y, camera.look_at.z
            );
        }
        Err(e) => {
            eprintln!("Error loading scene file: {}", e);
        }
    }
}
