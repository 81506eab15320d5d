//! OSRM integration test: routes a single leg against a real road network.
//!
//! Requires Docker and downloads the Geofabrik Mexico extract on first
//! run, so it is ignored by default. Run with:
//! `cargo test --test osrm_integration -- --ignored`

use std::env;

use testcontainers::core::{IntoContainerPort, Mount};
use testcontainers::runners::SyncRunner;
use testcontainers::{Container, GenericImage, ImageExt, ReuseDirective, TestcontainersError};

use tour_planner::osrm::{OsrmClient, OsrmConfig};
use tour_planner::osrm_data::{GeofabrikRegion, OsrmDataset, OsrmDatasetConfig};
use tour_planner::traits::{DistanceProvider, TransportMode};

fn osrm_container() -> Result<(Container<GenericImage>, String), TestcontainersError> {
    let data_root = env::var("OSRM_DATA_DIR").unwrap_or_else(|_| "osrm-data".to_string());
    let region = GeofabrikRegion::new("north-america/mexico");
    let config = OsrmDatasetConfig::new(region, data_root);
    let dataset = OsrmDataset::ensure(&config)
        .map_err(|err| TestcontainersError::other(format!("OSRM prep failed: {}", err)))?;
    let mtime = std::fs::metadata(dataset.osrm_base.with_extension("osrm.partition"))
        .ok()
        .and_then(|meta| meta.modified().ok())
        .and_then(|time| time.duration_since(std::time::SystemTime::UNIX_EPOCH).ok())
        .map(|duration| duration.as_secs())
        .unwrap_or(0);
    let container_name = format!("osrm-mexico-mld-{}", mtime);

    let image = GenericImage::new("osrm/osrm-backend", "latest")
        .with_exposed_port(5000.tcp())
        .with_mount(Mount::bind_mount(
            dataset.data_dir.to_string_lossy().to_string(),
            "/data",
        ))
        .with_cmd(vec![
            "osrm-routed",
            "--algorithm",
            "mld",
            "/data/mexico-latest.osrm",
        ])
        .with_container_name(container_name)
        .with_startup_timeout(std::time::Duration::from_secs(30))
        .with_reuse(ReuseDirective::Always);

    let container = image.start()?;
    let port = container.get_host_port_ipv4(5000.tcp())?;
    let base_url = format!("http://127.0.0.1:{}", port);

    Ok((container, base_url))
}

#[test]
#[ignore = "requires Docker and the Geofabrik Mexico extract"]
fn osrm_route_returns_priced_leg_with_geometry() {
    let (container, base_url) = osrm_container().expect("start OSRM container");

    let client = OsrmClient::new(OsrmConfig {
        base_url,
        timeout_secs: 10,
    })
    .expect("build OSRM client");

    // Zócalo to Museo Nacional de Antropología.
    let from = (19.4326, -99.1332);
    let to = (19.4260, -99.1863);

    // The fallback never has geometry, so its presence proves a live
    // answer. Retry while the container warms up.
    let leg = {
        let start = std::time::Instant::now();
        let mut last = client.estimate(from, to, TransportMode::Driving);
        while last.geometry.is_none() && start.elapsed() < std::time::Duration::from_secs(15) {
            std::thread::sleep(std::time::Duration::from_millis(500));
            last = client.estimate(from, to, TransportMode::Driving);
        }
        last
    };

    assert!(leg.geometry.is_some(), "expected road geometry, got fallback");
    assert!(leg.duration_minutes > 0);
    // Road distance is at least the straight line (~5.6 km) and bounded
    // by a sane detour factor.
    assert!(leg.distance_km > 5.0 && leg.distance_km < 20.0);

    drop(container);
}
