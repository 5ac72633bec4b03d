//! Bucket-based parallel rendering.
//!
//! Divides the image into horizontal bands (buckets) of whole scanlines that
//! are rendered independently on the rayon thread pool. Finished buckets are
//! delivered to the pixel sink in row-major order on the calling thread, so
//! the sink sees exactly the same call sequence as a sequential render.

use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;

use crate::{PixelSink, RayTracer, RenderStatus, Scene};

/// A band of full-width scanlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// First scanline of the bucket
    pub y: u32,
    /// Width of the bucket in pixels (the image width)
    pub width: u32,
    /// Number of scanlines in the bucket
    pub height: u32,
    /// Index of this bucket in delivery order
    pub index: usize,
}

impl Bucket {
    pub fn new(y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            y,
            width,
            height,
            index,
        }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Default bucket height in scanlines.
pub const DEFAULT_BUCKET_ROWS: u32 = 16;

/// Split an image into buckets of `rows` scanlines, top to bottom.
/// The last bucket may be shorter.
pub fn generate_buckets(width: u32, height: u32, rows: u32) -> Vec<Bucket> {
    let rows = rows.max(1);
    let mut buckets = Vec::new();

    let mut y = 0;
    while y < height {
        let bh = rows.min(height - y);
        buckets.push(Bucket::new(y, width, bh, buckets.len()));
        y += rows;
    }

    buckets
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Pixel colors in row-major order, `rows_completed` full rows
    pub pixels: Vec<[u8; 3]>,
    /// Scanlines finished before cancellation was observed
    pub rows_completed: u32,
}

impl BucketResult {
    pub fn is_complete(&self) -> bool {
        self.rows_completed == self.bucket.height
    }
}

/// Render a single bucket, checking `cancel` before each scanline.
pub fn render_bucket(
    tracer: &RayTracer,
    scene: &Scene,
    bucket: &Bucket,
    image_height: u32,
    cancel: &AtomicBool,
) -> BucketResult {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);
    let mut rows_completed = 0;

    for local_y in 0..bucket.height {
        if cancel.load(Ordering::Relaxed) {
            break;
        }
        let y = bucket.y + local_y;
        for x in 0..bucket.width {
            pixels.push(tracer.render_pixel(scene, x, y, bucket.width, image_height));
        }
        rows_completed += 1;
    }

    BucketResult {
        bucket: *bucket,
        pixels,
        rows_completed,
    }
}

impl RayTracer {
    /// Render on the rayon thread pool. Output is identical to
    /// [`RayTracer::render`].
    pub fn render_parallel<S: PixelSink + ?Sized>(
        &self,
        scene: &Scene,
        sink: &mut S,
        width: u32,
        height: u32,
    ) {
        let never = AtomicBool::new(false);
        self.render_parallel_cancellable(scene, sink, width, height, DEFAULT_BUCKET_ROWS, &never);
    }

    /// Parallel render with a coarse, per-scanline cancellation check.
    ///
    /// On cancellation only the leading run of fully rendered scanlines is
    /// delivered.
    pub fn render_parallel_cancellable<S: PixelSink + ?Sized>(
        &self,
        scene: &Scene,
        sink: &mut S,
        width: u32,
        height: u32,
        bucket_rows: u32,
        cancel: &AtomicBool,
    ) -> RenderStatus {
        let buckets = generate_buckets(width, height, bucket_rows);
        log::debug!(
            "Rendering {}x{} in {} buckets on {} threads",
            width,
            height,
            buckets.len(),
            rayon::current_num_threads()
        );

        let results: Vec<BucketResult> = buckets
            .par_iter()
            .map(|bucket| render_bucket(self, scene, bucket, height, cancel))
            .collect();

        let mut rows_delivered = 0;
        for result in &results {
            let bucket = result.bucket;
            for (i, rgb) in result.pixels.iter().enumerate() {
                let x = i as u32 % bucket.width;
                let y = bucket.y + i as u32 / bucket.width;
                sink.set_pixel(x, y, *rgb);
            }
            rows_delivered += result.rows_completed;

            if !result.is_complete() {
                log::debug!("Render cancelled after {} rows", rows_delivered);
                return RenderStatus::Cancelled {
                    rows: rows_delivered,
                };
            }
        }

        log::debug!("Render complete");
        RenderStatus::Complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ImageBuffer;

    #[test]
    fn test_generate_buckets_exact_fit() {
        let buckets = generate_buckets(128, 64, 16);
        assert_eq!(buckets.len(), 4);

        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 128 * 64);
    }

    #[test]
    fn test_generate_buckets_partial_fit() {
        let buckets = generate_buckets(100, 100, 16);
        assert_eq!(buckets.len(), 7);
        assert_eq!(buckets[6].y, 96);
        assert_eq!(buckets[6].height, 4);

        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 100 * 100);
    }

    #[test]
    fn test_buckets_are_in_row_order() {
        let buckets = generate_buckets(10, 50, 8);
        for (i, pair) in buckets.windows(2).enumerate() {
            assert_eq!(pair[0].index, i);
            assert_eq!(pair[0].y + pair[0].height, pair[1].y);
        }
    }

    #[test]
    fn test_zero_rows_treated_as_one() {
        assert_eq!(generate_buckets(4, 3, 0).len(), 3);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let scene = Scene::canonical();
        let tracer = RayTracer::default();

        let mut sequential = Vec::new();
        let mut sink = |x: u32, y: u32, rgb: [u8; 3]| sequential.push((x, y, rgb));
        tracer.render(&scene, &mut sink, 40, 37);

        let mut parallel = Vec::new();
        let mut sink = |x: u32, y: u32, rgb: [u8; 3]| parallel.push((x, y, rgb));
        let cancel = AtomicBool::new(false);
        let status = tracer.render_parallel_cancellable(&scene, &mut sink, 40, 37, 5, &cancel);

        assert_eq!(status, RenderStatus::Complete);
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_parallel_into_image_buffer() {
        let scene = Scene::canonical();
        let tracer = RayTracer::default();

        let mut a = ImageBuffer::new(24, 24);
        let mut b = ImageBuffer::new(24, 24);
        tracer.render(&scene, &mut a, 24, 24);
        tracer.render_parallel(&scene, &mut b, 24, 24);
        assert_eq!(a, b);
    }

    #[test]
    fn test_cancelled_parallel_render_delivers_nothing() {
        let scene = Scene::canonical();
        let cancel = AtomicBool::new(true);
        let mut count = 0;
        let mut sink = |_x: u32, _y: u32, _rgb: [u8; 3]| count += 1;
        let status =
            RayTracer::default().render_parallel_cancellable(&scene, &mut sink, 16, 16, 4, &cancel);
        assert_eq!(status, RenderStatus::Cancelled { rows: 0 });
        assert_eq!(count, 0);
    }
}
