use route_finder_core::model::network::PeerEdge;
use route_finder_core::TransportStore;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::RouteFinderAppError;

/// A [`TransportStore`] backed by a static JSON file of `(from, to,
/// transport_id, weight)` tuples. Stands in for a live transport discovery
/// store, which is out of scope for this crate.
pub struct JsonTransportStore {
    edges: Vec<PeerEdge>,
}

impl JsonTransportStore {
    pub fn from_file(path: &Path) -> Result<Self, RouteFinderAppError> {
        let file = File::open(path)
            .map_err(|e| RouteFinderAppError::Io(path.display().to_string(), e))?;
        let edges: Vec<PeerEdge> = serde_json::from_reader(BufReader::new(file))?;
        Ok(Self { edges })
    }
}

impl TransportStore for JsonTransportStore {
    fn snapshot_edges(&self) -> Vec<PeerEdge> {
        self.edges.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn loads_edges_from_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"[{{"from": "{}", "to": "{}", "transport_id": "00000000-0000-0000-0000-000000000000", "weight": 1}}]"#,
            "11".repeat(32),
            "22".repeat(32),
        )
        .unwrap();

        let store = JsonTransportStore::from_file(file.path()).unwrap();
        assert_eq!(store.snapshot_edges().len(), 1);
    }

    #[test]
    fn missing_file_is_a_reported_io_error() {
        let result = JsonTransportStore::from_file(Path::new("/nonexistent/path.json"));
        assert!(matches!(result, Err(RouteFinderAppError::Io(_, _))));
    }
}
