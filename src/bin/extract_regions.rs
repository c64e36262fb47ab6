use pano_extractor::config::extract::{self, ExtractToolConfig};
use pano_extractor::detection::load_detections;
use pano_extractor::image::io::{load_rgb_image, save_rgb_jpeg, write_json_file};
use pano_extractor::orientation::CubeFace;
use pano_extractor::viz::{class_color, draw_detection_outline, draw_region_outline};
use pano_extractor::RegionExtractor;
use std::env;
use std::path::Path;

/// How many extractions get an overlay image for quick inspection.
const VIZ_LIMIT: usize = 5;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config: ExtractToolConfig = extract::load_config(Path::new(&config_path))?;

    let pano = load_rgb_image(&config.equirect)?;
    let detections = load_detections(&config.detections)?;
    println!(
        "Loaded panorama {}x{} and detections for {} faces",
        pano.w,
        pano.h,
        detections.len()
    );

    let extractor = RegionExtractor::new(&pano, config.extractor.to_params());
    let report = extractor.process(&detections);

    let mut records = Vec::with_capacity(report.objects.len());
    for object in &report.objects {
        let path = config.output_dir.join(&object.record.filename);
        save_rgb_jpeg(&object.image, &path, config.jpeg_quality)?;
        println!(
            "  {} ({}x{}, conf {:.2})",
            object.record.filename,
            object.record.crop_size.width,
            object.record.crop_size.height,
            object.record.confidence
        );
        records.push(object.record.clone());
    }

    let metadata_path = config.output_dir.join("extracted_metadata.json");
    write_json_file(&metadata_path, &records)?;

    for record in records.iter().take(VIZ_LIMIT) {
        let Some(face) = CubeFace::from_name(&record.source_face) else {
            continue;
        };
        let mut overlay = pano.clone();
        draw_detection_outline(
            &mut overlay,
            face,
            record.original_bbox,
            config.extractor.face_size,
            class_color(record.class),
        );
        draw_region_outline(
            &mut overlay,
            &record.extracted_bounds,
            [0, 255, 0],
            [255, 255, 0],
        );
        let path = config.output_dir.join(format!("viz_{:03}.jpg", record.id));
        save_rgb_jpeg(&overlay, &path, 90)?;
    }

    println!("\nExtraction summary");
    println!("  extracted: {}", report.objects.len());
    println!(
        "  skipped: {} (degenerate={} empty={} unsupported_face={}), filtered: {}",
        report.skipped.total(),
        report.skipped.degenerate,
        report.skipped.empty,
        report.skipped.unsupported_face,
        report.skipped.filtered
    );
    println!("  latency_ms: {:.1}", report.latency_ms);
    println!("  metadata: {}", metadata_path.display());
    Ok(())
}

fn usage() -> String {
    "Usage: extract_regions <config.json>\n\
     Config: {\"equirect\": \"pano.jpg\", \"detections\": \"detections.json\", \
     \"output_dir\": \"objects\"}"
        .to_string()
}
