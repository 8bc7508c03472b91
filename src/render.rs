use std::io::Stdout;
use std::sync::Mutex;
use std::time::Instant;

use image::Rgb;
use log::{debug, info};
use pbr::ProgressBar;
use rayon::prelude::*;

use crate::camera::Camera;
use crate::film::Film;
use crate::math::Ray;
use crate::parsing::RenderSettings;
use crate::scene::{Scene, Subject};

pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
pub const RED: Rgb<u8> = Rgb([255, 0, 0]);
pub const BLUE: Rgb<u8> = Rgb([0, 0, 255]);

/// Maps pixel `(x, y)` to `[-1, 1]^2`, first and last pixel centers landing on the bounds.
pub fn pixel_to_uv(x: usize, y: usize, width: usize, height: usize) -> (f32, f32) {
    fn axis(i: usize, n: usize) -> f32 {
        if n <= 1 {
            0.0
        } else {
            2.0 * (i as f32 / (n - 1) as f32) - 1.0
        }
    }
    (axis(x, width), axis(y, height))
}

pub fn shade(scene: &Scene, ray: Ray) -> Rgb<u8> {
    match scene.nearest(ray) {
        Some((Subject::A, _)) => RED,
        Some((Subject::B, _)) => BLUE,
        None => BLACK,
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HitCounts {
    pub a: usize,
    pub b: usize,
    pub background: usize,
}

impl HitCounts {
    pub fn tally(film: &Film<Rgb<u8>>) -> Self {
        film.buffer
            .iter()
            .fold(HitCounts::default(), |mut counts, px| {
                if *px == RED {
                    counts.a += 1;
                } else if *px == BLUE {
                    counts.b += 1;
                } else {
                    counts.background += 1;
                }
                counts
            })
    }
}

pub fn render(scene: &Scene, camera: &Camera, settings: &RenderSettings) -> Film<Rgb<u8>> {
    let (w, h) = (settings.width, settings.height);
    let mut film = Film::new(w, h, BLACK);

    let pb: Option<Mutex<ProgressBar<Stdout>>> = if settings.progress {
        let mut pb = ProgressBar::new(h as u64);
        pb.message("rows ");
        Some(Mutex::new(pb))
    } else {
        None
    };

    let now = Instant::now();
    film.buffer
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                let (u, v) = pixel_to_uv(x, y, w, h);
                let ray = camera.trace_ray(u, v);
                *pixel = shade(scene, ray);
            }
            if let Some(Ok(mut pb)) = pb.as_ref().map(|pb| pb.lock()) {
                pb.inc();
            }
        });
    if let Some(Ok(mut pb)) = pb.map(|pb| pb.into_inner()) {
        pb.finish_print("done");
    }

    let elapsed = now.elapsed();
    debug!(
        "traced {} rays in {:.3}s",
        film.total_pixels(),
        elapsed.as_secs_f32()
    );

    let counts = HitCounts::tally(&film);
    info!(
        "pixels hitting A: {}, B: {}, background: {}",
        counts.a, counts.b, counts.background
    );
    film
}
