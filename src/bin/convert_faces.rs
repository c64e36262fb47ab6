use pano_extractor::config::convert::{self, ConvertToolConfig};
use pano_extractor::image::io::{load_rgb_image, save_rgb_jpeg};
use pano_extractor::FaceRenderer;
use std::env;
use std::path::Path;
use std::time::Instant;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config: ConvertToolConfig = convert::load_config(Path::new(&config_path))?;

    let pano = load_rgb_image(&config.input)?;
    println!(
        "Loaded panorama {} ({}x{})",
        config.input.display(),
        pano.w,
        pano.h
    );

    let renderer = FaceRenderer::new(&pano, config.face_size);
    let specs = config.views.to_specs();
    println!(
        "Rendering {} views at {}x{} px",
        specs.len(),
        renderer.face_size(),
        renderer.face_size()
    );

    let start = Instant::now();
    let faces = renderer.render_all(&specs);
    let elapsed = start.elapsed().as_secs_f64();

    for face in &faces {
        let path = config.output_dir.join(format!("{}.jpg", face.name));
        save_rgb_jpeg(&face.image, &path, config.jpeg_quality)?;
        println!(
            "  {} (yaw {:.0}, pitch {:.0}) -> {}",
            face.name,
            face.orientation.yaw_deg,
            face.orientation.pitch_deg,
            path.display()
        );
    }

    println!(
        "Wrote {} face images to {} in {:.2} s",
        faces.len(),
        config.output_dir.display(),
        elapsed
    );
    Ok(())
}

fn usage() -> String {
    "Usage: convert_faces <config.json>\n\
     Config: {\"input\": \"pano.jpg\", \"output_dir\": \"faces\", \
     \"views\": {\"method\": \"cube\"}}"
        .to_string()
}
