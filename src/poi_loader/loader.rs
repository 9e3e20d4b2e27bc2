use crate::domain::Poi;
use crate::poi_loader::factory::{PoiFactoryError, from_json};
use futures::stream::FuturesUnordered;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tokio::task::JoinError;
use tokio::{fs, task};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::ReadDirStream;
use tracing::{info, instrument, warn};

#[instrument]
pub async fn load_pois_from(directory: &str, extension: &str) -> Result<Vec<Poi>, LoaderError> {
    info!("📁 Loading POIs...");
    let files = list_files(directory, extension)
        .await
        .map_err(|e| LoaderError::Io { source: e, path: None })?;

    let results = load_files(files).await;
    let (sets, errors): (Vec<_>, Vec<_>) = results.into_iter().partition(Result::is_ok);

    for error in errors.iter().filter_map(|res| res.as_ref().err()) {
        log_error(error);
    }

    let pois = sets.into_iter().filter_map(Result::ok).flatten().collect::<Vec<Poi>>();
    info!("📁 Loading POIs... OK, {} loaded, {} file(s) failed", pois.len(), errors.len());
    Ok(pois)
}

#[instrument]
async fn list_files(directory: &str, extension: &str) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let dir = fs::read_dir(directory).await?;
    let mut entries = ReadDirStream::new(dir);

    while let Some(entry) = entries.next().await {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(extension) {
                    files.push(path);
                }
            }
            Err(err) => warn!("⚠️ Unable to read directory entry: {}", err),
        }
    }

    Ok(files)
}

#[instrument(skip_all)]
async fn load_files(paths: Vec<PathBuf>) -> Vec<Result<Vec<Poi>, LoaderError>> {
    FuturesUnordered::from_iter(paths.into_iter().map(|path| async move {
        match fs::read_to_string(&path).await {
            Ok(content) => task::spawn_blocking(move || from_json(&content).map_err(|e| LoaderError::PoiFactory { source: e, path })).await?,
            Err(err) => Err(LoaderError::Io {
                source: err,
                path: Some(path),
            }),
        }
    }))
    .collect()
    .await
}

#[instrument(skip_all)]
fn log_error(error: &LoaderError) {
    match error {
        LoaderError::PoiFactory { source, path } => warn!("⚠️ Failed to load '{}': {}", path.display(), source),
        LoaderError::Io { source, path } => match path {
            Some(path) => warn!("⚠️ Failed to load '{}': {}", path.display(), source),
            None => warn!("⚠️ {}", source),
        },
        LoaderError::JoinError(err) => warn!("⚠️ {}", err),
    }
}

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("{}", source)]
    PoiFactory { source: PoiFactoryError, path: PathBuf },
    #[error("{}", source)]
    Io { source: io::Error, path: Option<PathBuf> },
    #[error(transparent)]
    JoinError(#[from] JoinError),
}
