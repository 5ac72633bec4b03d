//! Simple ray tracer example.
//!
//! Renders the canonical scene and saves it as PNG.

use raybench_renderer::{ImageBuffer, RayTracer, Scene};

fn main() {
    println!("raybench - Simple Example");
    println!("=========================");

    let start = std::time::Instant::now();
    let scene = Scene::canonical();
    println!(
        "Scene built in {:?} ({} things, {} lights)",
        start.elapsed(),
        scene.thing_count(),
        scene.light_count()
    );

    let (width, height) = (500, 500);
    let tracer = RayTracer::default();
    let mut image = ImageBuffer::new(width, height);

    println!("Rendering {}x{}...", width, height);

    let start = std::time::Instant::now();
    tracer.render_parallel(&scene, &mut image, width, height);
    println!("Rendered in {:?}", start.elapsed());

    let center = image.get(width / 2, height / 2);
    println!("Center pixel: {:?}", center);

    let filename = "output.png";
    match image.save(filename) {
        Ok(()) => println!("Saved to {}", filename),
        Err(e) => eprintln!("Failed to save image: {}", e),
    }
}
