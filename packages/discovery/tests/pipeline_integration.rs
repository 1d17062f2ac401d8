//! End-to-end pipeline tests over mock collaborators and the memory
//! store.

use discovery::{
    BatchSummary, FailingStore, MemoryStore, MockFetcher, MockModel, Pipeline, PipelineError,
    Posting, WorkItem,
};

fn acme_item() -> WorkItem {
    WorkItem {
        company_name: "Acme Corp".to_string(),
        careers_url: "https://acme.com/jobs".to_string(),
    }
}

const ACME_HTML: &str = r#"
    <html><body>
    <nav>Menu</nav>
    <h1>Careers at Acme</h1>
    <div>Platform Engineer - Remote</div>
    <div>Product Manager - NYC</div>
    </body></html>
"#;

const ACME_RESPONSE: &str =
    r#"[{"title":"Platform Engineer","url":"https://acme.com/jobs/1","location":"Remote"}]"#;

#[tokio::test]
async fn end_to_end_discovers_and_deduplicates() {
    let fetcher = MockFetcher::new().with_page("https://acme.com/jobs", ACME_HTML);
    let model = MockModel::new().with_response("Acme Corp", ACME_RESPONSE);
    let pipeline = Pipeline::new(fetcher, model, MemoryStore::new());

    let first = pipeline.process_batch(&[acme_item()]).await.unwrap();
    assert_eq!(
        first,
        BatchSummary {
            records_processed: 1,
            jobs_written: 1
        }
    );

    let job_id = Posting::make_job_id("Acme Corp", "Platform Engineer", "https://acme.com/jobs/1");
    let posting = pipeline.store().get(&job_id).unwrap();
    assert_eq!(posting.company, "Acme Corp");
    assert_eq!(posting.location, "Remote");

    // A second identical invocation writes nothing new.
    let second = pipeline.process_batch(&[acme_item()]).await.unwrap();
    assert_eq!(second.records_processed, 1);
    assert_eq!(second.jobs_written, 0);
    assert_eq!(pipeline.store().posting_count(), 1);
}

#[tokio::test]
async fn filter_drops_irrelevant_titles_before_ingestion() {
    let response = r#"[
        {"title":"Platform Engineer","url":"https://acme.com/jobs/1"},
        {"title":"Product Manager","url":"https://acme.com/jobs/2"},
        {"title":"Sales Engineer","url":"https://acme.com/jobs/3"}
    ]"#;
    let fetcher = MockFetcher::new().with_page("https://acme.com/jobs", ACME_HTML);
    let model = MockModel::new().with_response("Acme Corp", response);
    let pipeline = Pipeline::new(fetcher, model, MemoryStore::new());

    let summary = pipeline.process_batch(&[acme_item()]).await.unwrap();

    assert_eq!(summary.jobs_written, 1);
    assert_eq!(pipeline.store().posting_count(), 1);
}

#[tokio::test]
async fn failed_fetch_degrades_without_aborting_the_batch() {
    let items = vec![
        WorkItem {
            company_name: "Acme Corp".to_string(),
            careers_url: "https://acme.com/jobs".to_string(),
        },
        WorkItem {
            company_name: "Broken Inc".to_string(),
            careers_url: "https://broken.example/jobs".to_string(),
        },
        WorkItem {
            company_name: "Globex".to_string(),
            careers_url: "https://globex.com/jobs".to_string(),
        },
    ];

    let fetcher = MockFetcher::new()
        .with_page("https://acme.com/jobs", ACME_HTML)
        .with_failure("https://broken.example/jobs")
        .with_page("https://globex.com/jobs", "<div>Senior SRE</div>");

    let model = MockModel::new()
        .with_response("Acme Corp", ACME_RESPONSE)
        .with_response(
            "Globex",
            r#"[{"title":"Senior SRE","url":"https://globex.com/jobs/7"}]"#,
        );

    let pipeline = Pipeline::new(fetcher, model, MemoryStore::new());
    let summary = pipeline.process_batch(&items).await.unwrap();

    assert_eq!(summary.records_processed, 3);
    assert_eq!(summary.jobs_written, 2);
}

#[tokio::test]
async fn model_failure_yields_zero_candidates_not_an_error() {
    let fetcher = MockFetcher::new().with_page("https://acme.com/jobs", ACME_HTML);
    let pipeline = Pipeline::new(fetcher, MockModel::failing(), MemoryStore::new());

    let summary = pipeline.process_batch(&[acme_item()]).await.unwrap();

    assert_eq!(summary.records_processed, 1);
    assert_eq!(summary.jobs_written, 0);
}

#[tokio::test]
async fn garbled_model_output_yields_zero_candidates() {
    let fetcher = MockFetcher::new().with_page("https://acme.com/jobs", ACME_HTML);
    let model = MockModel::new().with_default("here you go: [] thanks");
    let pipeline = Pipeline::new(fetcher, model, MemoryStore::new());

    let summary = pipeline.process_batch(&[acme_item()]).await.unwrap();

    assert_eq!(summary.records_processed, 1);
    assert_eq!(summary.jobs_written, 0);
}

#[tokio::test]
async fn unfetchable_page_skips_the_model_call() {
    let fetcher = MockFetcher::new().with_failure("https://acme.com/jobs");
    let model = MockModel::new().with_default("[]");
    let pipeline = Pipeline::new(fetcher, model, MemoryStore::new());

    let summary = pipeline.process_batch(&[acme_item()]).await.unwrap();

    assert_eq!(summary.jobs_written, 0);
    assert_eq!(pipeline.store().posting_count(), 0);
    assert_eq!(pipeline.model().call_count(), 0);
}

#[tokio::test]
async fn store_failure_aborts_the_invocation() {
    let fetcher = MockFetcher::new().with_page("https://acme.com/jobs", ACME_HTML);
    let model = MockModel::new().with_response("Acme Corp", ACME_RESPONSE);
    let pipeline = Pipeline::new(fetcher, model, FailingStore::new());

    // No partial summary: a backend write failure is fatal, unlike a
    // rejected conditional insert which reports Ok(false).
    let result = pipeline.process_batch(&[acme_item()]).await;
    assert!(matches!(result, Err(PipelineError::Store(_))));
    assert_eq!(pipeline.store().posting_count(), 0);
}

#[tokio::test]
async fn mid_batch_store_failure_stops_remaining_items() {
    let items = vec![
        acme_item(),
        WorkItem {
            company_name: "Globex".to_string(),
            careers_url: "https://globex.com/jobs".to_string(),
        },
        WorkItem {
            company_name: "Initech".to_string(),
            careers_url: "https://initech.com/jobs".to_string(),
        },
    ];

    let fetcher = MockFetcher::new()
        .with_page("https://acme.com/jobs", ACME_HTML)
        .with_page("https://globex.com/jobs", "<div>Senior SRE</div>")
        .with_page("https://initech.com/jobs", "<div>DevOps Lead</div>");

    let model = MockModel::new()
        .with_response("Acme Corp", ACME_RESPONSE)
        .with_response(
            "Globex",
            r#"[{"title":"Senior SRE","url":"https://globex.com/jobs/7"}]"#,
        )
        .with_response(
            "Initech",
            r#"[{"title":"DevOps Lead","url":"https://initech.com/jobs/3"}]"#,
        );

    // The first write lands, the second hits the broken backend.
    let pipeline = Pipeline::new(fetcher, model, FailingStore::after(1));
    let result = pipeline.process_batch(&items).await;

    assert!(matches!(result, Err(PipelineError::Store(_))));
    assert_eq!(pipeline.store().posting_count(), 1);
    // The third item is never reached.
    assert_eq!(pipeline.model().call_count(), 2);
}

#[tokio::test]
async fn empty_batch_yields_empty_summary() {
    let pipeline = Pipeline::new(MockFetcher::new(), MockModel::new(), MemoryStore::new());
    let summary = pipeline.process_batch(&[]).await.unwrap();
    assert_eq!(summary, BatchSummary::default());
}
