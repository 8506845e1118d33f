use crate::extensions::path_ext::FileName;
use crate::verify::{RoundTripReport, VerifyError, verify_round_trip};
use futures::stream::FuturesUnordered;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tokio::task::JoinError;
use tokio::{fs, task};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::ReadDirStream;
use tracing::{info, instrument, warn};

#[derive(Debug)]
pub struct VerifiedPayload {
    pub path: PathBuf,
    pub report: RoundTripReport,
}

#[derive(Debug, Default)]
pub struct CorpusReport {
    pub verified: Vec<VerifiedPayload>,
    pub failed: usize,
}

impl CorpusReport {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Payloads that round trip, but hold properties or a discriminator the catalogue does not know.
    pub fn drifted(&self) -> impl Iterator<Item = &VerifiedPayload> {
        self.verified.iter().filter(|payload| !payload.report.is_fully_typed())
    }
}

/// Verifies every payload with the given extension in `directory`. Failures are logged and counted, not returned.
#[instrument]
pub async fn verify_directory(directory: &str, extension: &str) -> Result<CorpusReport, LoaderError> {
    info!("📁 Verifying payloads...");
    let files = list_files(directory, extension)
        .await
        .map_err(|e| LoaderError::Io { source: e, path: None })?;

    let results = verify_files(files).await;
    let (verified, errors): (Vec<_>, Vec<_>) = results.into_iter().partition(Result::is_ok);

    for error in errors.iter().filter_map(|res| res.as_ref().err()) {
        log_error(error);
    }

    let report = CorpusReport {
        verified: verified.into_iter().filter_map(Result::ok).collect(),
        failed: errors.len(),
    };
    for payload in report.drifted() {
        warn!(
            "⚠️ '{}' ({}) is not fully typed, unmapped: [{}]",
            payload.path.string_file_name(),
            payload.report.odata_type.as_deref().unwrap_or("no @odata.type"),
            payload.report.unmapped_properties.join(", ")
        );
    }

    info!("📁 Verifying payloads... OK, {} verified, {} failed", report.verified.len(), report.failed);
    Ok(report)
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
async fn verify_files(paths: Vec<PathBuf>) -> Vec<Result<VerifiedPayload, LoaderError>> {
    FuturesUnordered::from_iter(paths.into_iter().map(|path| async move {
        match fs::read_to_string(&path).await {
            Ok(content) => task::spawn_blocking(move || match verify_round_trip(&content) {
                Ok(report) => Ok(VerifiedPayload { path, report }),
                Err(source) => Err(LoaderError::Verify { source, path }),
            })
            .await?,
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
        LoaderError::Verify { source, path } => warn!("⚠️ Failed to verify '{}': {}", path.string_file_name(), source),
        LoaderError::Io { source, path } => match path {
            Some(path) => warn!("⚠️ Failed to read '{}': {}", path.string_file_name(), source),
            None => warn!("⚠️ {}", source),
        },
        LoaderError::JoinError(err) => warn!("⚠️ {}", err),
    }
}

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("{}", source)]
    Verify { source: VerifyError, path: PathBuf },
    #[error("{}", source)]
    Io { source: io::Error, path: Option<PathBuf> },
    #[error(transparent)]
    JoinError(#[from] JoinError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use test_log::test;

    fn payloads_dir() -> String {
        format!("{}/tests/resources/payloads", env!("CARGO_MANIFEST_DIR"))
    }

    #[tokio::test]
    async fn list_files_returns_all_relevant_files() -> io::Result<()> {
        let temp_dir = temp_dir().join("graph-models-list-files");
        fs::create_dir_all(&temp_dir).await?;

        let file1 = temp_dir.join("site.json");
        let file2 = temp_dir.join("notes.txt");
        let file3 = temp_dir.join("user.json");

        fs::write(&file1, "{}").await?;
        fs::write(&file2, "text").await?;
        fs::write(&file3, "{}").await?;

        let mut files = list_files(temp_dir.to_string_lossy().as_ref(), "json").await?;
        files.sort();
        let string_file_names = files.iter().map(|e| e.to_string_lossy()).collect::<Vec<_>>();

        assert_eq!(
            string_file_names,
            vec![file1.to_string_lossy().into_owned(), file3.to_string_lossy().into_owned(),]
        );

        Ok(())
    }

    #[test(tokio::test)]
    async fn verify_files_returns_a_report_for_a_valid_payload() {
        let path = PathBuf::from(format!("{}/sitePage.json", payloads_dir()));
        assert!(path.is_file(), "expected path to be a file");

        let result = verify_files(vec![path]).await;
        assert_eq!(result.len(), 1);
        match &result[0] {
            Ok(payload) => {
                assert_eq!(payload.path.string_file_name(), "sitePage.json");
                assert_eq!(payload.report.odata_type.as_deref(), Some("#microsoft.graph.sitePage"));
                assert!(payload.report.recognized);
            }
            Err(err) => panic!("Expected a report, found {:?}", err),
        }
    }

    #[test(tokio::test)]
    async fn verify_files_returns_an_error_for_an_invalid_payload() {
        let path = PathBuf::from(format!("{}/invalid/unknownEnumMember.json", payloads_dir()));
        assert!(path.is_file(), "expected path to be a file");

        let result = verify_files(vec![path]).await;
        assert_eq!(result.len(), 1);
        match &result[0] {
            Err(err) => assert!(matches!(
                err,
                LoaderError::Verify {
                    source: VerifyError::Decode(_),
                    path: _
                }
            )),
            _ => panic!("Expected a VerifyError::Decode"),
        }
    }

    #[test(tokio::test)]
    async fn verify_directory_verifies_the_whole_corpus() -> Result<(), LoaderError> {
        let report = verify_directory(&payloads_dir(), "json").await?;

        assert!(report.is_success());
        assert_eq!(report.verified.len(), 6);
        assert_eq!(
            report.drifted().map(|p| p.path.string_file_name()).collect::<Vec<_>>(),
            vec!["driveItem.json"]
        );

        Ok(())
    }

    #[test(tokio::test)]
    async fn verify_directory_counts_failures() -> Result<(), LoaderError> {
        let report = verify_directory(&format!("{}/invalid", payloads_dir()), "json").await?;

        assert!(!report.is_success());
        assert_eq!(report.failed, 2);
        assert!(report.verified.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn verify_directory_fails_for_a_missing_directory() {
        let result = verify_directory("does/not/exist", "json").await;
        assert!(matches!(result, Err(LoaderError::Io { path: None, .. })));
    }
}
