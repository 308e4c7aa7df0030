use std::{
    env,
    io::{self, Write},
    path::PathBuf,
};

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use trackmeta::{BatchOutcome, Extractor, config::Settings, library, output};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let settings = Settings::load()?;
    settings.validate()?;

    let inputs: Vec<PathBuf> = env::args_os().skip(1).map(PathBuf::from).collect();
    if inputs.is_empty() {
        return Err("usage: trackmeta <file-or-directory>...".into());
    }

    let filenames: Vec<String> = library::collect_inputs(&inputs, &settings.library)
        .into_iter()
        .filter_map(|path| match path.into_os_string().into_string() {
            Ok(name) => Some(name),
            Err(name) => {
                warn!(path = ?name, "skipping path that is not valid UTF-8");
                None
            }
        })
        .collect();
    info!("found {} tracks", filenames.len());

    let extractor = Extractor::new().fallbacks(settings.extract.fallbacks());
    let mut out = io::stdout().lock();
    let (mut built, mut skipped) = (0usize, 0usize);

    for chunk in filenames.chunks(settings.extract.batch_size) {
        info!("getting tags for {} tracks...", chunk.len());
        let batch = extractor.tracks(chunk)?;

        out.write_all(output::render(batch.tracks(), &settings.output)?.as_bytes())?;
        built += batch.len();
        skipped += batch.skipped().len();
        info!("{} tags were read, {} files skipped", batch.len(), batch.skipped().len());

        match batch.outcome() {
            BatchOutcome::Complete => {}
            BatchOutcome::Halted { index, error } => {
                error!(filename = %chunk[*index], "{error}");
                return Err(format!("extraction stopped after {built} tracks").into());
            }
            BatchOutcome::Cancelled { .. } => break,
        }
    }

    out.flush()?;
    info!(built, skipped, "done");
    Ok(())
}
