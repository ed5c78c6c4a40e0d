//! File naming conventions shared by the benchmark and the node binaries

use std::path::{Path, PathBuf};

/// Authority index within the committee.
pub type NodeIndex = usize;

/// Worker identifier within an authority.
pub type WorkerId = u32;

pub struct PathMaker;

impl PathMaker {
    /// Where `cargo build --release` leaves the benchmark binaries.
    pub fn binary_path() -> PathBuf {
        Path::new("..").join("target").join("release")
    }

    pub fn node_crate_path() -> PathBuf {
        Path::new("..").join("node")
    }

    pub fn committee_file() -> &'static str {
        ".committee.json"
    }

    pub fn parameters_file() -> &'static str {
        ".parameters.json"
    }

    pub fn key_file(node: NodeIndex) -> String {
        format!(".node-{node}.json")
    }

    /// Store directory for a primary, or for one of its workers.
    pub fn db_path(node: NodeIndex, worker: Option<WorkerId>) -> String {
        match worker {
            Some(worker) => format!(".db-{node}-{worker}"),
            None => format!(".db-{node}"),
        }
    }

    pub fn logs_path() -> &'static str {
        "logs"
    }

    pub fn primary_log_file(node: NodeIndex) -> PathBuf {
        Path::new(Self::logs_path()).join(format!("primary-{node}.log"))
    }

    pub fn worker_log_file(node: NodeIndex, worker: WorkerId) -> PathBuf {
        Path::new(Self::logs_path()).join(format!("worker-{node}-{worker}.log"))
    }

    pub fn client_log_file(node: NodeIndex, worker: WorkerId) -> PathBuf {
        Path::new(Self::logs_path()).join(format!("client-{node}-{worker}.log"))
    }

    pub fn results_path() -> &'static str {
        "results"
    }

    pub fn result_file(
        faults: usize,
        nodes: usize,
        workers: usize,
        collocate: bool,
        rate: u64,
        tx_size: usize,
    ) -> PathBuf {
        // Capitalized so names match result files from the Python harness.
        let collocate = if collocate { "True" } else { "False" };
        Path::new(Self::results_path()).join(format!(
            "bench-{faults}-{nodes}-{workers}-{collocate}-{rate}-{tx_size}.txt"
        ))
    }

    pub fn plots_path() -> &'static str {
        "plots"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_and_db_paths() {
        assert_eq!(PathMaker::key_file(3), ".node-3.json");
        assert_eq!(PathMaker::db_path(3, None), ".db-3");
        assert_eq!(PathMaker::db_path(3, Some(1)), ".db-3-1");
    }

    #[test]
    fn test_log_files_live_under_logs() {
        assert_eq!(
            PathMaker::primary_log_file(0),
            PathBuf::from("logs/primary-0.log")
        );
        assert_eq!(
            PathMaker::worker_log_file(2, 1),
            PathBuf::from("logs/worker-2-1.log")
        );
        assert_eq!(
            PathMaker::client_log_file(2, 0),
            PathBuf::from("logs/client-2-0.log")
        );
    }

    #[test]
    fn test_result_file_name() {
        assert_eq!(
            PathMaker::result_file(0, 4, 1, true, 50_000, 512),
            PathBuf::from("results/bench-0-4-1-True-50000-512.txt")
        );
        assert_eq!(
            PathMaker::result_file(1, 10, 4, false, 100_000, 32),
            PathBuf::from("results/bench-1-10-4-False-100000-32.txt")
        );
    }

    #[test]
    fn test_binary_path() {
        assert_eq!(PathMaker::binary_path(), PathBuf::from("../target/release"));
        assert_eq!(PathMaker::node_crate_path(), PathBuf::from("../node"));
    }

    #[test]
    fn test_store_paths_match_cleanup_glob() {
        // cleanup() removes `.db-*`
        assert!(PathMaker::db_path(10, Some(2)).starts_with(".db-"));
        assert!(PathMaker::committee_file().ends_with(".json"));
        assert!(PathMaker::parameters_file().starts_with('.'));
    }
}
