use std::error::Error;
use std::path::PathBuf;

use log::{debug, info};
use structopt::StructOpt;

pub mod camera;
pub mod film;
pub mod geometry;
pub mod math;
pub mod parsing;
pub mod render;
pub mod scene;

use film::Film;
use image::Rgb;
use parsing::{load_json, RenderSettings};
use scene::Scene;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "sphere_rt",
    about = "Casts one ray per pixel at two spheres and writes the result as an image"
)]
struct Opt {
    /// JSON file with render settings. Flags given on the command line take precedence.
    #[structopt(short, long, parse(from_os_str))]
    config: Option<PathBuf>,

    #[structopt(long)]
    width: Option<usize>,

    #[structopt(long)]
    height: Option<usize>,

    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// Worker threads, defaults to the number of logical cpus
    #[structopt(short, long)]
    threads: Option<usize>,

    #[structopt(long)]
    no_progress: bool,
}

impl Opt {
    fn into_settings(self) -> Result<RenderSettings, Box<dyn Error>> {
        let mut settings = match &self.config {
            Some(path) => load_json::<RenderSettings, _>(path)?,
            None => RenderSettings::default(),
        };
        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(output) = self.output {
            settings.output = output;
        }
        if self.threads.is_some() {
            settings.threads = self.threads;
        }
        if self.no_progress {
            settings.progress = false;
        }
        settings.validate()?;
        Ok(settings)
    }
}

pub fn output_film(settings: &RenderSettings, film: &Film<Rgb<u8>>) -> Result<(), Box<dyn Error>> {
    info!("writing {}", settings.output.display());
    film.write_png(&settings.output)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Opt::from_args().into_settings()?;
    let threads = settings.threads.unwrap_or_else(num_cpus::get);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()?;
    info!(
        "rendering {}x{} on {} threads",
        settings.width, settings.height, threads
    );

    let scene = Scene::two_spheres();
    let camera = Scene::camera();
    debug!(
        "camera at {:?} facing {:?}, yaw {} pitch {} fov {}",
        camera.origin,
        camera.forward(),
        camera.yaw,
        camera.pitch,
        camera.fov
    );

    let film = render::render(&scene, &camera, &settings);
    output_film(&settings, &film)?;

    info!("Done!");
    Ok(())
}
