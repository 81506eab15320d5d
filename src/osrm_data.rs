//! OSRM dataset preparation for integration tests.
//!
//! Downloads a Geofabrik extract and runs the OSRM extract/partition/
//! customize pipeline (MLD) through docker, so tests can route against a
//! real road network for Mexico City.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Clone)]
pub struct GeofabrikRegion {
    /// Geofabrik region path, e.g. "north-america/mexico".
    pub path: String,
}

impl GeofabrikRegion {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn name(&self) -> String {
        self.path
            .rsplit('/')
            .next()
            .unwrap_or("region")
            .to_string()
    }

    pub fn url(&self) -> String {
        format!("https://download.geofabrik.de/{}-latest.osm.pbf", self.path)
    }
}

#[derive(Debug, Clone)]
pub struct OsrmDatasetConfig {
    pub region: GeofabrikRegion,
    pub data_root: PathBuf,
    /// Routing profile lua shipped inside the OSRM image.
    pub profile_lua: String,
}

impl OsrmDatasetConfig {
    pub fn new(region: GeofabrikRegion, data_root: impl Into<PathBuf>) -> Self {
        Self {
            region,
            data_root: data_root.into(),
            profile_lua: "/opt/car.lua".to_string(),
        }
    }
}

/// A prepared on-disk OSRM dataset, ready to mount into `osrm-routed`.
#[derive(Debug, Clone)]
pub struct OsrmDataset {
    pub data_dir: PathBuf,
    pub osrm_base: PathBuf,
    pub pbf_path: PathBuf,
}

#[derive(Debug)]
pub enum OsrmDataError {
    Io(io::Error),
    Http(reqwest::Error),
    ProcessFailure(String),
}

impl From<io::Error> for OsrmDataError {
    fn from(err: io::Error) -> Self {
        OsrmDataError::Io(err)
    }
}

impl From<reqwest::Error> for OsrmDataError {
    fn from(err: reqwest::Error) -> Self {
        OsrmDataError::Http(err)
    }
}

impl std::fmt::Display for OsrmDataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OsrmDataError::Io(err) => write!(f, "dataset io error: {}", err),
            OsrmDataError::Http(err) => write!(f, "dataset download error: {}", err),
            OsrmDataError::ProcessFailure(msg) => write!(f, "dataset process error: {}", msg),
        }
    }
}

impl std::error::Error for OsrmDataError {}

impl OsrmDataset {
    /// Downloads and preprocesses the dataset if any piece is missing.
    /// Idempotent: finished artifacts are left alone on re-runs.
    pub fn ensure(config: &OsrmDatasetConfig) -> Result<Self, OsrmDataError> {
        let region_name = config.region.name();
        let data_root = if config.data_root.is_absolute() {
            config.data_root.clone()
        } else {
            std::env::current_dir()?.join(&config.data_root)
        };
        let data_dir = data_root.join(&region_name);
        fs::create_dir_all(&data_dir)?;

        let pbf_path = data_dir.join(format!("{}-latest.osm.pbf", region_name));
        if !pbf_path.exists() {
            download_pbf(&config.region.url(), &pbf_path)?;
        }

        let osrm_base = data_dir.join(format!("{}-latest.osrm", region_name));
        if !osrm_base.exists() {
            run_osrm_tool(
                &[
                    "osrm-extract",
                    "-p",
                    &config.profile_lua,
                    &format!("/data/{}", file_name(&pbf_path)),
                ],
                &data_dir,
            )?;
        }

        if !mld_ready(&osrm_base) {
            let base = format!("/data/{}", file_name(&osrm_base));
            run_osrm_tool(&["osrm-partition", &base], &data_dir)?;
            run_osrm_tool(&["osrm-customize", &base], &data_dir)?;
        }

        Ok(Self {
            data_dir,
            osrm_base,
            pbf_path,
        })
    }
}

fn download_pbf(url: &str, dest: &Path) -> Result<(), OsrmDataError> {
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    // Write to a temp name first so an interrupted download never looks
    // like a finished extract.
    let tmp_path = dest.with_extension("tmp");
    let mut writer = BufWriter::new(File::create(&tmp_path)?);
    writer.write_all(&response.bytes()?)?;
    writer.flush()?;
    fs::rename(tmp_path, dest)?;
    Ok(())
}

fn mld_ready(osrm_base: &Path) -> bool {
    osrm_base.exists()
        && ["osrm.partition", "osrm.mldgr", "osrm.cells"]
            .iter()
            .all(|ext| osrm_base.with_extension(ext).exists())
}

fn run_osrm_tool(args: &[&str], data_dir: &Path) -> Result<(), OsrmDataError> {
    let status = Command::new("docker")
        .arg("run")
        .arg("--rm")
        .arg("-t")
        .arg("-v")
        .arg(format!("{}:/data", data_dir.display()))
        .arg("osrm/osrm-backend")
        .args(args)
        .status()?;

    if status.success() {
        Ok(())
    } else {
        Err(OsrmDataError::ProcessFailure(format!(
            "docker exited with status {}",
            status
        )))
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_string()
}
