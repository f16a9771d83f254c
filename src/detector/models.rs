use super::error::ModelLoadError;
use reqwest::Client;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_MODEL_BASE_URL: &str = "https://justadudewhohacks.github.io/face-api.js/models";

/// Face localisation network
pub const FACE_DETECTOR_MODEL: &str = "tiny_face_detector_model";
/// Expression classifier network
pub const FACE_EXPRESSION_MODEL: &str = "face_expression_model";

/// Subdirectory of the cache dir owned by the store
const MODELS_SUBDIR: &str = "face-api";

/// One entry of a `*-weights_manifest.json` file
#[derive(Debug, Deserialize)]
struct WeightGroup {
    paths: Vec<String>,
    #[serde(default)]
    #[allow(dead_code)]
    weights: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelBundle {
    pub name: String,
    pub manifest: PathBuf,
    pub shards: Vec<PathBuf>,
}

/// Both bundles, present on disk together 🧠
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSet {
    pub dir: PathBuf,
    pub face_detector: ModelBundle,
    pub face_expression: ModelBundle,
}

fn manifest_name(bundle: &str) -> String {
    format!("{}-weights_manifest.json", bundle)
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ModelLoadError + '_ {
    move |source| ModelLoadError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Shard names come from a remote manifest; refuse anything that could
/// escape the bundle directory.
fn is_safe_shard(path: &str) -> bool {
    !path.is_empty()
        && !path.contains('/')
        && !path.contains('\\')
        && path != "."
        && path != ".."
}

fn read_manifest(bundle: &str, bytes: &[u8]) -> Result<Vec<String>, ModelLoadError> {
    let groups: Vec<WeightGroup> =
        serde_json::from_slice(bytes).map_err(|source| ModelLoadError::Manifest {
            bundle: bundle.to_string(),
            source,
        })?;

    let mut shards = Vec::new();
    for path in groups.into_iter().flat_map(|g| g.paths) {
        if !is_safe_shard(&path) {
            return Err(ModelLoadError::ShardPath {
                bundle: bundle.to_string(),
                path,
            });
        }
        shards.push(path);
    }
    Ok(shards)
}

fn cached_bundle(dir: &Path, name: &str) -> Option<ModelBundle> {
    let manifest = dir.join(manifest_name(name));
    let bytes = std::fs::read(&manifest).ok()?;
    let shards = read_manifest(name, &bytes).ok()?;
    let shards: Vec<PathBuf> = shards.iter().map(|s| dir.join(s)).collect();
    if !shards.iter().all(|p| p.is_file()) {
        return None;
    }
    Some(ModelBundle {
        name: name.to_string(),
        manifest,
        shards,
    })
}

/// Downloads and caches the detector's model artifacts.
pub struct ModelStore {
    client: Client,
    base_url: String,
    cache_dir: PathBuf,
}

impl ModelStore {
    pub fn new(client: Client, base_url: &str, cache_dir: PathBuf) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            cache_dir,
        }
    }

    pub fn default_cache_dir() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("moodtune")
            .join("models")
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// The only directory under `cache_dir` this store ever replaces
    pub fn models_dir(&self) -> PathBuf {
        self.cache_dir.join(MODELS_SUBDIR)
    }

    /// Load both bundles, all-or-nothing.
    ///
    /// Downloads land in a staging directory next to `models_dir()` and
    /// replace it only once both bundles are complete. A failed load leaves
    /// the cache as it was; nothing else in `cache_dir` is touched.
    pub async fn load_all(&self) -> Result<ModelSet, ModelLoadError> {
        if let Some(set) = self.cached() {
            info!(dir = %set.dir.display(), "Using cached face models");
            return Ok(set);
        }

        let models_dir = self.models_dir();
        let staging = self
            .cache_dir
            .join(format!(".{}.partial-{}", MODELS_SUBDIR, std::process::id()));
        if staging.exists() {
            tokio::fs::remove_dir_all(&staging)
                .await
                .map_err(io_error(&staging))?;
        }
        tokio::fs::create_dir_all(&staging)
            .await
            .map_err(io_error(&staging))?;

        // Plain join: both fetches settle before the staging dir can be removed
        let (detector, expression) = futures::join!(
            self.fetch_bundle(FACE_DETECTOR_MODEL, &staging),
            self.fetch_bundle(FACE_EXPRESSION_MODEL, &staging),
        );
        if let Err(e) = detector.and(expression) {
            let _ = tokio::fs::remove_dir_all(&staging).await;
            return Err(e);
        }

        if models_dir.exists() {
            tokio::fs::remove_dir_all(&models_dir)
                .await
                .map_err(io_error(&models_dir))?;
        }
        tokio::fs::rename(&staging, &models_dir)
            .await
            .map_err(io_error(&models_dir))?;

        // Re-read from the committed location so paths point into the cache
        self.cached().ok_or_else(|| ModelLoadError::Io {
            path: models_dir.display().to_string(),
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "model files missing after commit",
            ),
        })
    }

    /// Both bundles, if every manifest and shard is already on disk
    pub fn cached(&self) -> Option<ModelSet> {
        let dir = self.models_dir();
        let face_detector = cached_bundle(&dir, FACE_DETECTOR_MODEL)?;
        let face_expression = cached_bundle(&dir, FACE_EXPRESSION_MODEL)?;
        Some(ModelSet {
            dir,
            face_detector,
            face_expression,
        })
    }

    async fn fetch_bundle(&self, name: &str, dir: &Path) -> Result<ModelBundle, ModelLoadError> {
        let manifest_file = manifest_name(name);
        let manifest_bytes = self.fetch(&manifest_file).await?;
        let shard_names = read_manifest(name, &manifest_bytes)?;

        let manifest = dir.join(&manifest_file);
        tokio::fs::write(&manifest, &manifest_bytes)
            .await
            .map_err(io_error(&manifest))?;

        let mut shards = Vec::with_capacity(shard_names.len());
        let mut total = manifest_bytes.len();
        for shard in &shard_names {
            let bytes = self.fetch(shard).await?;
            let path = dir.join(shard);
            tokio::fs::write(&path, &bytes)
                .await
                .map_err(io_error(&path))?;
            total += bytes.len();
            shards.push(path);
        }

        info!(bundle = name, shards = shards.len(), bytes = total, "Fetched model bundle");
        Ok(ModelBundle {
            name: name.to_string(),
            manifest,
            shards,
        })
    }

    async fn fetch(&self, file: &str) -> Result<Vec<u8>, ModelLoadError> {
        let url = format!("{}/{}", self.base_url, file);
        debug!(%url, "GET model artifact");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ModelLoadError::Fetch {
                url: url.clone(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ModelLoadError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|source| ModelLoadError::Fetch { url, source })?;
        Ok(bytes.to_vec())
    }
}
