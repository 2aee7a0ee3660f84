use super::*;

#[test]
fn list_url_encodes_query() {
    let url = list_url("http://localhost:3000", "rust & go").unwrap();
    assert_eq!(url.path(), "/posts");
    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert_eq!(pairs, vec![("title_like".to_owned(), "rust & go".to_owned())]);
}

#[test]
fn list_url_keeps_empty_filter() {
    let url = list_url("http://localhost:3000", "").unwrap();
    assert_eq!(url.as_str(), "http://localhost:3000/posts?title_like=");
}

#[test]
fn item_url_appends_id_segment() {
    let url = item_url("http://localhost:3000", &ArticleId::from(42)).unwrap();
    assert_eq!(url.as_str(), "http://localhost:3000/posts/42");

    let url = item_url("http://localhost:3000", &ArticleId::from("a b")).unwrap();
    assert_eq!(url.as_str(), "http://localhost:3000/posts/a%20b");
}

#[test]
fn collection_url_rejects_garbage_base() {
    assert!(matches!(collection_url("not a url"), Err(ApiError::InvalidUrl(_))));
}

#[test]
fn parse_article_list_reads_records() {
    let json = serde_json::json!([
        { "id": 1, "title": "A", "image": "a.png", "date": "2024-01-01", "status": "Đã xuất bản" },
        { "id": 2, "title": "B", "image": "b.png", "date": "2024-01-02", "status": "Ngừng xuất bản" }
    ])
    .to_string();
    let articles = parse_article_list(&json).unwrap();
    assert_eq!(articles.len(), 2);
    assert_eq!(articles[1].status, ArticleStatus::Unpublished);
}

#[test]
fn parse_article_list_rejects_object_body() {
    let err = parse_article_list(r#"{"error":"nope"}"#).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn status_error_message_includes_code() {
    let err = ApiError::Status { status: 404, body: "{}".to_owned() };
    assert_eq!(err.to_string(), "remote store returned status 404");
}

#[test]
fn http_service_keeps_config_base_url() {
    let config = DeskConfig::default();
    let service = HttpArticleService::new(&config).unwrap();
    assert_eq!(service.base_url(), "http://localhost:3000");
}
