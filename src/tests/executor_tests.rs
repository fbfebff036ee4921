#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::sync::Arc;
    use std::time::Duration;

    use tempfile::tempdir;
    use tokio::sync::Mutex;

    use crate::errors::HarnessError;
    use crate::implementations::executor::ExecutionEngine;
    use crate::implementations::partition::JobCursor;
    use crate::implementations::sink::{CsvResultSink, CSV_HEADER};
    use crate::implementations::verifypn::{
        VerifyPn, QUERY_IS_NOT_SATISFIED, QUERY_IS_SATISFIED,
    };
    use crate::models::corpus::{Model, QueryFile};
    use crate::models::job::ModelCheckingJob;
    use crate::models::outcome::QueryResult;
    use crate::traits::verifier::Verifier;

    /// Write an executable shell script standing in for the verifier binary
    #[cfg(unix)]
    fn stub_verifier(dir: &Path, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join("verifypn-stub");
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn job(model_name: &str, query_file: &str, query_index: usize) -> ModelCheckingJob {
        let query = Arc::new(QueryFile::new(PathBuf::from(query_file), 3));
        let model = Arc::new(Model::new(
            model_name.to_string(),
            PathBuf::from(format!("/corpus/{}/model.pnml", model_name)),
            vec![Arc::clone(&query)],
        ));
        ModelCheckingJob::new(model, query, query_index)
    }

    #[test]
    fn classify_output_recognizes_the_two_markers() {
        assert_eq!(
            VerifyPn::classify_output("preamble\nQuery is satisfied\n"),
            QueryResult::Satisfied
        );
        assert_eq!(
            VerifyPn::classify_output("preamble\nQuery is NOT satisfied\n"),
            QueryResult::Unsatisfied
        );
        assert_eq!(VerifyPn::classify_output("no verdict here"), QueryResult::Error);
        assert_eq!(VerifyPn::classify_output(""), QueryResult::Error);
    }

    #[test]
    fn build_args_selects_query_index() {
        let verifier = VerifyPn::new(PathBuf::from("verifypn"));
        let args = verifier.build_args(&job("ModelA", "ReachabilityCardinality.xml", 3));
        assert_eq!(
            args,
            vec![
                "-C",
                "-x",
                "3",
                "/corpus/ModelA/model.pnml",
                "ReachabilityCardinality.xml",
            ]
        );
    }

    #[test]
    fn build_args_adds_ltl_flags_for_ltl_query_files() {
        let verifier = VerifyPn::new(PathBuf::from("verifypn"));
        let args = verifier.build_args(&job("ModelA", "LTLCardinality.xml", 1));
        assert_eq!(
            args,
            vec![
                "-C",
                "-x",
                "1",
                "-ltl",
                "tarjan",
                "/corpus/ModelA/model.pnml",
                "LTLCardinality.xml",
            ]
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn satisfied_marker_classifies_as_satisfied() {
        let dir = tempdir().unwrap();
        let stub = stub_verifier(dir.path(), &format!("echo \"{}\"", QUERY_IS_SATISFIED));
        let verifier = VerifyPn::new(stub);

        let metrics = verifier
            .run_job(&job("M", "ReachabilityCardinality.xml", 1), Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(metrics.result, QueryResult::Satisfied);
        assert!(metrics.real_time < 5.0);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn not_satisfied_marker_classifies_as_unsatisfied() {
        let dir = tempdir().unwrap();
        let stub = stub_verifier(dir.path(), &format!("echo \"{}\"", QUERY_IS_NOT_SATISFIED));
        let verifier = VerifyPn::new(stub);

        let metrics = verifier
            .run_job(&job("M", "ReachabilityCardinality.xml", 1), Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(metrics.result, QueryResult::Unsatisfied);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn nonzero_exit_classifies_as_error_regardless_of_stdout() {
        let dir = tempdir().unwrap();
        let stub = stub_verifier(
            dir.path(),
            &format!("echo \"{}\"\necho boom >&2\nexit 1", QUERY_IS_SATISFIED),
        );
        let verifier = VerifyPn::new(stub);

        let metrics = verifier
            .run_job(&job("M", "ReachabilityCardinality.xml", 1), Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(metrics.result, QueryResult::Error);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn unrecognized_output_classifies_as_error() {
        let dir = tempdir().unwrap();
        let stub = stub_verifier(dir.path(), "echo \"inconclusive\"");
        let verifier = VerifyPn::new(stub);

        let metrics = verifier
            .run_job(&job("M", "ReachabilityCardinality.xml", 1), Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(metrics.result, QueryResult::Error);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn slow_verifier_times_out_at_the_configured_timeout() {
        let dir = tempdir().unwrap();
        let stub = stub_verifier(dir.path(), "sleep 5");
        let verifier = VerifyPn::new(stub);

        let metrics = verifier
            .run_job(&job("M", "ReachabilityCardinality.xml", 1), Duration::from_secs(1))
            .await
            .unwrap();
        assert_eq!(metrics.result, QueryResult::Timeout);
        // The recorded time is the configured timeout, not the true elapsed time
        assert_eq!(metrics.real_time, 1.0);
    }

    #[tokio::test]
    async fn missing_binary_is_a_launch_failure() {
        let verifier = VerifyPn::new(PathBuf::from("/no/such/verifypn"));
        let result = verifier
            .run_job(&job("M", "ReachabilityCardinality.xml", 1), Duration::from_secs(1))
            .await;
        assert!(matches!(
            result,
            Err(HarnessError::VerifierLaunchError { .. })
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn engine_drains_the_slice_and_persists_every_outcome() {
        let dir = tempdir().unwrap();
        let stub = stub_verifier(dir.path(), &format!("echo \"{}\"", QUERY_IS_SATISFIED));
        let verifier = Arc::new(VerifyPn::new(stub));

        let jobs: Vec<ModelCheckingJob> = (1..=3)
            .map(|i| job("ModelA", "ReachabilityCardinality.xml", i))
            .chain((1..=3).map(|i| job("ModelB", "ReachabilityCardinality.xml", i)))
            .collect();

        let out = dir.path().join("results.csv");
        let sink = Arc::new(Mutex::new(CsvResultSink::create(&out).unwrap()));
        let cursor = JobCursor::new(jobs.len(), 1, 0).unwrap();
        let engine = ExecutionEngine::new(
            jobs,
            verifier,
            cursor,
            Arc::clone(&sink),
            Duration::from_secs(5),
            2,
        );

        let counts = engine.drain().await.unwrap();
        assert_eq!(counts.satisfied, 6);
        assert_eq!(counts.total(), 6);

        let contents = fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 7, "header plus one row per job");
        assert_eq!(lines[0], CSV_HEADER);
        for row in &lines[1..] {
            let fields: Vec<&str> = row.split(',').collect();
            assert_eq!(fields.len(), 5);
            assert!(["satisfied", "unsatisfied", "timeout", "error"].contains(&fields[3]));
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn engine_keeps_going_after_timeouts_and_errors() {
        let dir = tempdir().unwrap();
        // Odd query indices time out, even ones fail; both are recorded, not raised
        let stub = stub_verifier(
            dir.path(),
            "case \"$3\" in 1|3) sleep 5 ;; *) exit 2 ;; esac",
        );
        let verifier = Arc::new(VerifyPn::new(stub));

        let jobs: Vec<ModelCheckingJob> = (1..=4)
            .map(|i| job("ModelA", "ReachabilityCardinality.xml", i))
            .collect();

        let out = dir.path().join("results.csv");
        let sink = Arc::new(Mutex::new(CsvResultSink::create(&out).unwrap()));
        let cursor = JobCursor::new(jobs.len(), 1, 0).unwrap();
        let engine = ExecutionEngine::new(
            jobs,
            verifier,
            cursor,
            sink,
            Duration::from_secs(1),
            4,
        );

        let counts = engine.drain().await.unwrap();
        assert_eq!(counts.timeouts, 2);
        assert_eq!(counts.errors, 2);
        assert_eq!(counts.total(), 4);
    }
}
