use pano_extractor::config::viz::{self, VizToolConfig};
use pano_extractor::detection::load_detections;
use pano_extractor::image::io::{load_rgb_image, save_rgb_image};
use pano_extractor::viz::annotate_panorama;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config: VizToolConfig = viz::load_config(Path::new(&config_path))?;

    let pano = load_rgb_image(&config.equirect)?;
    let detections = load_detections(&config.detections)?;

    let total_boxes: usize = detections.values().map(|d| d.boxes.len()).sum();
    println!(
        "Drawing {} detections from {} faces onto {}x{} panorama",
        total_boxes,
        detections.len(),
        pano.w,
        pano.h
    );

    let annotated =
        annotate_panorama(&pano, &detections, config.face_size).map_err(|e| e.to_string())?;
    save_rgb_image(&annotated, &config.annotated_image)?;
    println!("Annotated panorama written to {}", config.annotated_image.display());
    Ok(())
}

fn usage() -> String {
    "Usage: viz_detections <config.json>\n\
     Config: {\"equirect\": \"pano.jpg\", \"detections\": \"detections.json\", \
     \"annotated_image\": \"annotated.jpg\"}"
        .to_string()
}
