//! Drives the shared client and controllers against a live dev server.

use std::net::TcpListener;

use faqbot_dev_server::{app, AppState};
use shared::{
    conversation::REQUEST_FAILED_APOLOGY, native::ReqwestTransport, ApiClient, Config,
    Conversation, Document, NetworkError, UploadFailure, UploadFlow, UploadStatus,
};

fn spawn_server() -> ApiClient<ReqwestTransport> {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::Server::from_tcp(listener)
            .unwrap()
            .serve(app(AppState::default()).into_make_service())
            .await
            .unwrap();
    });

    let config = Config::new(format!("http://{addr}/")).unwrap();
    ApiClient::new(config, ReqwestTransport::new().unwrap())
}

#[tokio::test]
async fn question_before_upload_is_a_404() {
    let api = spawn_server();

    let err = api.submit_question("anything").await.unwrap_err();

    assert!(matches!(err, NetworkError::Status(404)));
}

#[tokio::test]
async fn upload_then_chat() {
    let api = spawn_server();
    let mut flow = UploadFlow::new();
    let mut convo = Conversation::new();

    let doc = Document::new("policy.pdf", b"%PDF-1.7".to_vec()).with_content_type("application/pdf");
    let accepted = flow.upload(&api, doc).await.unwrap();
    assert_eq!(accepted.as_deref(), Some("policy.pdf"));
    convo.on_document_accepted("policy.pdf");

    assert!(convo.send(&api, "What is the refund policy?").await);

    let messages = convo.messages();
    assert_eq!(messages.len(), 3);
    assert!(messages[0].text.contains("policy.pdf"));
    assert!(messages[1].is_user);
    assert!(!messages[2].is_user);
    assert!(messages[2].text.contains("What is the refund policy?"));
    assert!(!convo.is_loading());
}

#[tokio::test]
async fn server_side_rejection_is_a_network_error() {
    let api = spawn_server();
    let mut flow = UploadFlow::new();

    let accepted = flow
        .upload(&api, Document::new("empty.pdf", Vec::new()))
        .await
        .unwrap();

    assert_eq!(accepted, None);
    assert_eq!(flow.status(), &UploadStatus::Error(UploadFailure::Network));
}

#[tokio::test]
async fn unreachable_backend_yields_apology() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = Config::new(format!("http://{addr}")).unwrap();
    let api = ApiClient::new(config, ReqwestTransport::new().unwrap());
    let mut convo = Conversation::new();
    convo.on_document_accepted("policy.pdf");

    convo.send(&api, "Hello?").await;

    assert_eq!(convo.messages().last().unwrap().text, REQUEST_FAILED_APOLOGY);
}
