use qualifying_offer::pipeline::build_http_client;
use qualifying_offer::Fetcher;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const DATA_PATH: &str = "/swe/data.html";

/// Wraps rows in a salary document with a header row
pub fn salary_document(rows: &[(&str, &str)]) -> String {
    let body: String = rows
        .iter()
        .map(|(name, salary)| format!("<tr><td>{}</td><td>{}</td></tr>", name, salary))
        .collect();

    format!(
        r#"<html><head><title>Salaries</title></head><body>
        <table class="players">
        <thead><tr><th>Player</th><th>Salary</th><th>Year</th><th>Level</th></tr></thead>
        <tbody>{}</tbody>
        </table>
        </body></html>"#,
        body
    )
}

/// Starts a mock server answering the data path with the given response
pub async fn mock_dataset(response: ResponseTemplate) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DATA_PATH))
        .respond_with(response)
        .mount(&mock_server)
        .await;

    mock_server
}

/// Builds a fetcher pointed at the mock server's data path
pub fn fetcher_for(mock_server: &MockServer) -> Fetcher {
    let client = build_http_client("TestAgent/1.0").expect("Failed to build client");
    Fetcher::with_client(client, format!("{}{}", mock_server.uri(), DATA_PATH))
}

pub fn html_response(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body)
        .insert_header("content-type", "text/html")
}
