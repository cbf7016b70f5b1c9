use clap::Parser;
use marker_ocr::{cli, config, error, export, pipeline, preprocess, recognizer};
use marker_ocr::ocr_backend::OcrBackend;
use marker_ocr_common::{transliterate, EntityMatcher, Vocabulary, WeightedRatio};
use cli::{Cli, Commands};
use config::Config;
use error::{MarkerOcrError, Result};
use recognizer::TextRecognizer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "marker_ocr=debug,marker_ocr_common=debug"
    } else {
        "marker_ocr=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn build_recognizer(backend: OcrBackend, config: &Config) -> Result<Box<dyn TextRecognizer>> {
    match backend {
        OcrBackend::Tesseract => Ok(Box::new(recognizer::TesseractCli::new(
            config.tesseract_path(),
            &config.languages,
        )?)),
        #[cfg(feature = "paddle")]
        OcrBackend::Paddle => {
            let models = config
                .paddle
                .as_ref()
                .ok_or_else(|| MarkerOcrError::Config("paddle model paths are not configured".into()))?;
            Ok(Box::new(recognizer::PaddleOcr::new(models)?))
        }
        #[cfg(not(feature = "paddle"))]
        OcrBackend::Paddle => Err(MarkerOcrError::Config(
            "built without the `paddle` feature".into(),
        )),
    }
}

fn drones_or_default(drones: Vec<String>, config: &Config) -> Vocabulary {
    if drones.is_empty() {
        config.drones()
    } else {
        drones.into_iter().collect()
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Run {
            images,
            locations,
            output,
            drones,
            save_processed,
            processed_dir,
            mask_dark_text,
            backend,
            keep_images,
        } => {
            println!("🗺  marker-ocr - map marker extraction\n");

            let image_dir = images.unwrap_or_else(|| config.image_dir.clone());
            let locations_file = locations.unwrap_or_else(|| config.locations_file.clone());
            let output = output.unwrap_or_else(|| config.output_csv.clone());
            let backend = backend.unwrap_or(config.backend);

            // 1. Vocabularies
            println!("[1/3] Loading vocabularies...");
            let locations = pipeline::load_locations(&locations_file);
            let drones = drones_or_default(drones, &config);
            println!("✔ {} locations, {} drone types\n", locations.len(), drones.len());

            // 2. OCR engine, built once for the whole run
            println!("[2/3] Starting OCR engine ({})...", backend);
            let engine = build_recognizer(backend, &config)?;
            println!("✔ Engine ready\n");

            // 3. Batch
            println!("[3/3] Processing {}...", image_dir.display());
            let save_dir = (save_processed || config.save_processed)
                .then(|| processed_dir.unwrap_or_else(|| config.processed_dir.clone()));
            let options = pipeline::BatchOptions {
                normalize: preprocess::NormalizeOptions {
                    save_dir,
                    mask_dark_text: mask_dark_text || config.mask_dark_text,
                },
                thresholds: config.thresholds(),
                delete_processed: !keep_images,
                show_progress: true,
            };
            let writer = export::CsvFile::new(&output);
            let summary = pipeline::Pipeline::new(engine.as_ref(), locations, drones, options)
                .run(&image_dir, &writer)?;

            println!("✔ Data saved to {}", output.display());
            if keep_images {
                println!("- Images kept");
            } else {
                println!("✔ {} images removed", summary.files_deleted);
            }

            println!("\n✅ {} files processed, {} records, {} failed",
                summary.files_processed, summary.records.len(), summary.files_failed);
            for record in &summary.records {
                println!("  {} - {}", record.location, record.drone_type);
            }
        }

        Commands::Match { text, locations, drones } => {
            let locations = pipeline::load_locations(
                &locations.unwrap_or_else(|| config.locations_file.clone()),
            );
            let drones = drones_or_default(drones, &config);

            let matcher = EntityMatcher::new(WeightedRatio, config.thresholds());
            match matcher.extract(&text, &locations, &drones) {
                Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
                None => println!("No match"),
            }
        }

        Commands::Transliterate { text } => {
            println!("{}", transliterate(&text));
        }

        Commands::Config { show, init } => {
            if init {
                let path = config.save()?;
                println!("✔ Config written: {}", path.display());
            }

            if show || !init {
                println!("Config ({}):", Config::config_path()?.display());
                println!("{}", serde_json::to_string_pretty(&config)?);
                println!("  tesseract: {}", config.tesseract_path().display());
            }
        }
    }

    Ok(())
}
