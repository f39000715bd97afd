use recipe_stripper::config::Settings;
use recipe_stripper::fetcher::fetch_page_with;
use recipe_stripper::Error;

#[test]
fn test_fetch_returns_page_body() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/recipe")
        .match_header("accept", "text/html")
        .with_status(200)
        .with_body("<html><body>hello</body></html>")
        .create();

    let url = format!("{}/recipe", server.url());
    let body = fetch_page_with(&url, &Settings::default()).unwrap();

    mock.assert();
    assert!(body.contains("hello"));
}

#[test]
fn test_non_success_status_is_surfaced() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/gone")
        .with_status(404)
        .with_body("nope")
        .create();

    let url = format!("{}/gone", server.url());
    let result = fetch_page_with(&url, &Settings::default());
    assert!(matches!(result, Err(Error::HttpStatus(404))));
}

#[test]
fn test_unsupported_scheme_rejected() {
    let result = fetch_page_with("ftp://example.com/recipe", &Settings::default());
    assert!(matches!(result, Err(Error::InvalidUrl(_))));
}

#[test]
fn test_garbage_url_rejected() {
    let result = fetch_page_with("not a url at all", &Settings::default());
    assert!(matches!(result, Err(Error::InvalidUrl(_))));
}
