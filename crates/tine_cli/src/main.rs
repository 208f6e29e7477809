use std::path::PathBuf;

use anyhow::{Context, Result};
use tine_core::{Color, Model, Texture};
use tine_raster::{RenderConfig, RenderStats, Renderer};

/// Input and output files of a render.
#[derive(Debug, Clone)]
struct Paths {
    mesh: PathBuf,
    texture: PathBuf,
    output: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            mesh: PathBuf::from("obj/african_head.obj"),
            texture: PathBuf::from("obj/african_head_diffuse.tga"),
            output: PathBuf::from("output.tga"),
        }
    }
}

/// Load the mesh, or an empty one if it can't be read.
fn load_model(paths: &Paths) -> Model {
    let model = match Model::load(&paths.mesh) {
        Ok(model) => model,
        Err(e) => {
            log::error!("Failed to load mesh {}: {}", paths.mesh.display(), e);
            Model::default()
        }
    };
    eprintln!("{}", model.summary());
    model
}

/// Load the texture, or a white 1x1 one if it can't be read.
fn load_texture(paths: &Paths) -> Texture {
    Texture::load(&paths.texture).unwrap_or_else(|e| {
        log::error!("Failed to load texture {}: {}", paths.texture.display(), e);
        Texture::solid_color(Color::WHITE)
    })
}

/// Render the mesh and write the result. A missing mesh or texture is not
/// fatal; the image is written regardless.
fn run(paths: &Paths, config: RenderConfig) -> Result<RenderStats> {
    let model = load_model(paths);
    let texture = load_texture(paths);

    let renderer = Renderer::new(config);
    let mut frame = renderer.render(&model, &texture);

    // Rendered bottom-up, stored top-down
    frame.image.flip_vertically();
    frame
        .image
        .save_tga(&paths.output)
        .with_context(|| format!("Failed to write {}", paths.output.display()))?;

    log::info!("Saved to {}", paths.output.display());
    Ok(frame.stats)
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let start = std::time::Instant::now();
    run(&Paths::default(), RenderConfig::default())?;
    log::info!("Finished in {:?}", start.elapsed());

    Ok(())
}
