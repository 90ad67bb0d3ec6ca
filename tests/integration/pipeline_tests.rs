use crate::common::{fetcher_for, html_response, mock_dataset, salary_document, DATA_PATH};
use qualifying_offer::pipeline::build_http_client;
use qualifying_offer::{fetch_qualifying_offer, Fetcher, QoError, QUALIFYING_OFFER_POOL};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_three_player_document() {
    let document = salary_document(&[
        ("A", "$30,000,000"),
        ("B", "$20,000,000"),
        ("", "$10,000,000"),
    ]);
    let mock_server = mock_dataset(html_response(document)).await;

    let result = fetch_qualifying_offer(&fetcher_for(&mock_server), QUALIFYING_OFFER_POOL)
        .await
        .expect("Pipeline failed");

    // The header row counts towards the total
    assert_eq!(result.total_rows, 4);
    assert_eq!(result.valid_count, 3);
    assert_eq!(result.ignored_rows, 1);
    assert_eq!(result.qualifying_offer, Some(20_000_000.0));

    let ranked: Vec<(&str, f64)> = result
        .top_players
        .iter()
        .map(|p| (p.name(), p.salary()))
        .collect();
    assert_eq!(
        ranked,
        vec![
            ("A", 30_000_000.0),
            ("B", 20_000_000.0),
            ("Unknown player", 10_000_000.0)
        ]
    );
}

#[tokio::test]
async fn test_full_pool_of_125() {
    let names: Vec<String> = (0..300).map(|i| format!("Player {}", i)).collect();
    let salaries: Vec<String> = (0..300)
        .map(|i| format!("${},000", 1_000 + (i * 37) % 500))
        .collect();
    let rows: Vec<(&str, &str)> = names
        .iter()
        .zip(&salaries)
        .map(|(n, s)| (n.as_str(), s.as_str()))
        .collect();

    let mock_server = mock_dataset(html_response(salary_document(&rows))).await;
    let result = fetch_qualifying_offer(&fetcher_for(&mock_server), QUALIFYING_OFFER_POOL)
        .await
        .expect("Pipeline failed");

    assert_eq!(result.valid_count, 300);
    assert_eq!(result.total_rows, 301);
    assert_eq!(result.ignored_rows + result.valid_count, result.total_rows);
    assert_eq!(result.top_players.len(), 125);
    assert!(result
        .top_players
        .windows(2)
        .all(|pair| pair[0].salary() >= pair[1].salary()));

    let mean = result.top_players.iter().map(|p| p.salary()).sum::<f64>() / 125.0;
    assert_eq!(result.qualifying_offer, Some(mean));
}

#[tokio::test]
async fn test_malformed_rows_are_ignored() {
    let document = salary_document(&[
        ("Zero", "$0"),
        ("Dash", "-"),
        ("Missing", "N/A"),
        ("Empty", ""),
        ("Valid", "$1,500,000"),
    ])
    .replace(
        "</body>",
        "<table><tr><td>Lonely cell</td></tr></table></body>",
    );
    let mock_server = mock_dataset(html_response(document)).await;

    let result = fetch_qualifying_offer(&fetcher_for(&mock_server), QUALIFYING_OFFER_POOL)
        .await
        .expect("Pipeline failed");

    assert_eq!(result.total_rows, 7);
    assert_eq!(result.valid_count, 1);
    assert_eq!(result.ignored_rows, 6);
    assert_eq!(result.qualifying_offer, Some(1_500_000.0));
}

#[tokio::test]
async fn test_header_only_table_has_no_offer() {
    let mock_server = mock_dataset(html_response(salary_document(&[]))).await;

    let result = fetch_qualifying_offer(&fetcher_for(&mock_server), QUALIFYING_OFFER_POOL)
        .await
        .expect("An empty table is not an error");

    assert_eq!(result.total_rows, 1);
    assert_eq!(result.valid_count, 0);
    assert_eq!(result.qualifying_offer, None);
    assert!(result.top_players.is_empty());
}

#[tokio::test]
async fn test_identical_documents_give_identical_results() {
    let document = salary_document(&[("A", "$5"), ("B", "$5"), ("C", "$7.25")]);
    let mock_server = mock_dataset(html_response(document)).await;
    let fetcher = fetcher_for(&mock_server);

    let first = fetch_qualifying_offer(&fetcher, QUALIFYING_OFFER_POOL)
        .await
        .unwrap();
    let second = fetch_qualifying_offer(&fetcher, QUALIFYING_OFFER_POOL)
        .await
        .unwrap();

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[tokio::test]
async fn test_every_call_refetches_without_cache() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DATA_PATH))
        .and(header("cache-control", "no-cache"))
        .respond_with(html_response(salary_document(&[("A", "$1")])))
        .expect(3)
        .mount(&mock_server)
        .await;

    let fetcher = fetcher_for(&mock_server);
    for _ in 0..3 {
        fetch_qualifying_offer(&fetcher, QUALIFYING_OFFER_POOL)
            .await
            .expect("Pipeline failed");
    }

    mock_server.verify().await;
}

#[tokio::test]
async fn test_upstream_503_is_fetch_error() {
    let mock_server = mock_dataset(ResponseTemplate::new(503)).await;

    let err = fetch_qualifying_offer(&fetcher_for(&mock_server), QUALIFYING_OFFER_POOL)
        .await
        .expect_err("503 must fail the pipeline");

    assert!(matches!(err, QoError::Fetch { status: 503, .. }));
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn test_upstream_404_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DATA_PATH))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = fetch_qualifying_offer(&fetcher_for(&mock_server), QUALIFYING_OFFER_POOL)
        .await
        .unwrap_err();

    assert!(matches!(err, QoError::Fetch { status: 404, .. }));
    mock_server.verify().await;
}

#[tokio::test]
async fn test_unreachable_upstream_is_transport_error() {
    // Reserve a free port, then release it so connections are refused
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = build_http_client("TestAgent/1.0").unwrap();
    let fetcher = Fetcher::with_client(client, format!("http://{}{}", addr, DATA_PATH));

    let err = fetch_qualifying_offer(&fetcher, QUALIFYING_OFFER_POOL)
        .await
        .unwrap_err();

    assert!(matches!(err, QoError::Transport { .. }));
}
