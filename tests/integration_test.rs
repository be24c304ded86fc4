use base64::{engine::general_purpose::STANDARD, Engine};
use player_intake::models::PlayerDraft;
use player_intake::orchestrator::{apply_draft, process_draft};
use player_intake::services::OutcomeWriter;
use player_intake::{
    Attachment, ExtraLink, HttpTransport, PlayerField, PlayerFields, PlayerForm, SubmissionStatus,
    SubmitError, SubmitResult, Transport, TransportResponse,
};
use serde_json::{json, Value as JsonValue};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const ENDPOINT: &str = "http://players.test/api/players";

/// 计数并记录请求体的传输
#[derive(Clone)]
struct MockTransport {
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<(String, JsonValue)>>>,
    status: u16,
    body: String,
}

impl MockTransport {
    fn responding(status: u16, body: &str) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
            status,
            body: body.to_string(),
        }
    }

    fn ok(id: &str) -> Self {
        Self::responding(200, &json!({ "id": id }).to_string())
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn last_body(&self) -> JsonValue {
        self.requests
            .lock()
            .unwrap()
            .last()
            .map(|(_, body)| body.clone())
            .expect("no request recorded")
    }
}

impl Transport for MockTransport {
    async fn post_json(&self, url: &str, body: &JsonValue) -> SubmitResult<TransportResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap()
            .push((url.to_string(), body.clone()));
        Ok(TransportResponse::new(self.status, self.body.clone()))
    }
}

/// 永远网络失败的传输
struct OfflineTransport;

impl Transport for OfflineTransport {
    async fn post_json(&self, _url: &str, _body: &JsonValue) -> SubmitResult<TransportResponse> {
        Err(SubmitError::transport(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        )))
    }
}

fn filled_form<T: Transport>(transport: T) -> PlayerForm<T> {
    let mut form = PlayerForm::new(transport, ENDPOINT);
    form.update_field(PlayerField::FullName, "Jude Bellingham");
    form
}

#[tokio::test]
async fn test_scalar_fields_take_last_value() {
    let transport = MockTransport::ok("1");
    let mut form = PlayerForm::new(transport.clone(), ENDPOINT);

    form.update_field(PlayerField::FullName, "Jude");
    form.update_field(PlayerField::FullName, "Jude Bellingham");
    form.update_field(PlayerField::Country, "England");
    form.update_field(PlayerField::Position, "CAM");
    form.update_field(PlayerField::Position, "CM");
    form.update_field(PlayerField::Height, "186 cm");
    form.update_field(PlayerField::Weight, "75 kg");
    form.update_field(PlayerField::DominantFoot, "Right");
    form.update_field(PlayerField::CurrentClub, "Real Madrid");
    form.update_field(PlayerField::PastClubs, "Birmingham, Dortmund");
    form.update_field(PlayerField::Bio, "Box to box.");
    form.update_field(PlayerField::HighlightVideoLink, "https://youtu.be/x");

    form.submit().await;

    let body = transport.last_body();
    assert_eq!(body["full_name"], json!("Jude Bellingham"));
    assert_eq!(body["country"], json!("England"));
    assert_eq!(body["position"], json!("CM"));
    assert_eq!(body["height"], json!("186 cm"));
    assert_eq!(body["weight"], json!("75 kg"));
    assert_eq!(body["dominant_foot"], json!("Right"));
    assert_eq!(body["current_club"], json!("Real Madrid"));
    assert_eq!(body["past_clubs"], json!("Birmingham, Dortmund"));
    assert_eq!(body["bio"], json!("Box to box."));
    assert_eq!(body["highlight_video_link"], json!("https://youtu.be/x"));
    assert_eq!(transport.calls(), 1);
    assert_eq!(transport.requests.lock().unwrap()[0].0, ENDPOINT);
}

#[tokio::test]
async fn test_extra_links_never_contain_empty_url() {
    // 四个默认槽位的所有填写组合
    for mask in 0u8..16 {
        let transport = MockTransport::ok("1");
        let mut form = filled_form(transport.clone());
        for slot in 0..4 {
            if mask & (1 << slot) != 0 {
                form.update_link(slot, format!("https://link/{}", slot)).unwrap();
            }
        }
        form.add_link("CV", "");

        form.submit().await;

        let links = transport.last_body()["extra_links"].as_array().unwrap().clone();
        assert_eq!(links.len(), mask.count_ones() as usize);
        assert!(links.iter().all(|l| !l["url"].as_str().unwrap().is_empty()));
    }
}

#[tokio::test]
async fn test_extra_links_keep_order_and_labels() {
    let transport = MockTransport::ok("1");
    let mut form = filled_form(transport.clone());
    form.update_link(3, "https://cv").unwrap();
    form.update_link(0, "https://tm").unwrap();

    form.submit().await;

    assert_eq!(
        transport.last_body()["extra_links"],
        json!([
            { "label": "Transfermarkt", "url": "https://tm" },
            { "label": "CV", "url": "https://cv" },
        ])
    );
}

#[tokio::test]
async fn test_age_coercion() {
    for (text, expected) in [
        ("", JsonValue::Null),
        ("23", json!(23)),
        ("23.5", json!(23.5)),
        ("abc", JsonValue::Null),
    ] {
        let transport = MockTransport::ok("1");
        let mut form = filled_form(transport.clone());
        form.update_field(PlayerField::Age, text);
        form.submit().await;
        assert_eq!(transport.last_body()["age"], expected, "age input {:?}", text);
    }
}

#[tokio::test]
async fn test_profile_photo_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let photo_path = dir.path().join("photo.png");
    let content: Vec<u8> = (0..=255u8).rev().cycle().take(10_000).collect();
    std::fs::write(&photo_path, &content).unwrap();

    let transport = MockTransport::ok("1");
    let mut form = filled_form(transport.clone());
    form.set_profile_photo(Some(Attachment::from_path(&photo_path)));

    form.submit().await;

    let body = transport.last_body();
    let encoded = body["profile_photo_base64"].as_str().unwrap();
    assert_eq!(STANDARD.decode(encoded).unwrap(), content);
    assert!(body["highlight_video_base64"].is_null());
}

#[tokio::test]
async fn test_cleared_attachment_is_null() {
    let transport = MockTransport::ok("1");
    let mut form = filled_form(transport.clone());
    form.set_highlight_video(Some(Attachment::from_bytes("clip.mp4", vec![1, 2, 3])));
    form.set_highlight_video(None);

    form.submit().await;

    assert!(transport.last_body()["highlight_video_base64"].is_null());
}

#[tokio::test]
async fn test_submit_while_submitting_sends_nothing() {
    let transport = MockTransport::ok("abc123");
    let mut form = filled_form(transport.clone());

    let pending = form.begin_submit().expect("first submit should start");
    assert_eq!(form.status(), &SubmissionStatus::Submitting);

    // 按钮处于禁用状态时的再次提交
    let status = form.submit().await.clone();
    assert_eq!(status, SubmissionStatus::Submitting);
    assert_eq!(transport.calls(), 0);

    form.complete_submit(pending).await;
    assert_eq!(transport.calls(), 1);
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn test_server_error_keeps_fields() {
    let transport = MockTransport::responding(500, r#"{"detail": "database down"}"#);
    let mut form = filled_form(transport.clone());
    form.update_link(1, "https://instagram.com/jude").unwrap();
    form.set_profile_photo(Some(Attachment::from_bytes("p.png", vec![9])));

    let status = form.submit().await.clone();

    assert_eq!(
        status,
        SubmissionStatus::Failed {
            message: "Failed to submit".to_string()
        }
    );
    assert_eq!(form.fields().full_name, "Jude Bellingham");
    assert_eq!(form.extra_links()[1].url, "https://instagram.com/jude");
    assert!(form.profile_photo().is_some());
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn test_success_resets_form() {
    let transport = MockTransport::ok("abc123");
    let mut form = filled_form(transport.clone());
    form.update_field(PlayerField::Age, "21");
    form.update_field(PlayerField::Bio, "Midfielder");
    form.update_link(0, "https://tm").unwrap();
    form.set_profile_photo(Some(Attachment::from_bytes("p.png", vec![1])));
    form.set_highlight_video(Some(Attachment::from_bytes("v.mp4", vec![2])));

    let status = form.submit().await.clone();

    assert_eq!(
        status,
        SubmissionStatus::Succeeded {
            id: "abc123".to_string()
        }
    );
    assert_eq!(form.fields(), &PlayerFields::default());
    assert_eq!(form.extra_links(), ExtraLink::defaults().as_slice());
    assert!(form.profile_photo().is_none());
    assert!(form.highlight_video().is_none());
    assert_eq!(form.status().status_line().as_deref(), Some("Submitted successfully!"));
}

#[tokio::test]
async fn test_network_failure_then_retry_by_resubmitting() {
    let mut offline = filled_form(OfflineTransport);
    let status = offline.submit().await.clone();
    match status {
        SubmissionStatus::Failed { message } => assert!(message.contains("connection refused")),
        other => panic!("unexpected status: {:?}", other),
    }
    assert_eq!(offline.fields().full_name, "Jude Bellingham");

    // 失败后可以再次提交
    assert!(offline.begin_submit().is_some());
}

#[tokio::test]
async fn test_unreadable_attachment_skips_network() {
    let dir = tempfile::tempdir().unwrap();
    let transport = MockTransport::ok("1");
    let mut form = filled_form(transport.clone());
    form.set_highlight_video(Some(Attachment::from_path(dir.path().join("missing.mp4"))));

    let status = form.submit().await.clone();

    match status {
        SubmissionStatus::Failed { message } => assert!(message.contains("missing.mp4")),
        other => panic!("unexpected status: {:?}", other),
    }
    assert_eq!(transport.calls(), 0);
    assert!(form.highlight_video().is_some());
}

#[tokio::test]
async fn test_malformed_success_body_is_failure() {
    let transport = MockTransport::responding(200, "<html>ok</html>");
    let mut form = filled_form(transport.clone());

    let status = form.submit().await.clone();

    assert!(matches!(status, SubmissionStatus::Failed { .. }));
    assert_eq!(form.fields().full_name, "Jude Bellingham");
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn test_success_body_without_string_id() {
    for (body, expected_id) in [(r#"{"ok": true}"#, ""), (r#"{"id": null}"#, "null")] {
        let transport = MockTransport::responding(201, body);
        let mut form = filled_form(transport.clone());

        let status = form.submit().await.clone();

        assert_eq!(
            status,
            SubmissionStatus::Succeeded {
                id: expected_id.to_string()
            },
            "body {}",
            body
        );
        assert_eq!(status.status_line().as_deref(), Some("Submitted successfully!"));
        assert_eq!(form.fields(), &PlayerFields::default());
        assert_eq!(transport.calls(), 1);
    }
}

#[tokio::test]
async fn test_apply_and_process_draft() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("photo.jpg"), b"jpeg-bytes").unwrap();
    let draft_path = dir.path().join("saka.toml");
    std::fs::write(
        &draft_path,
        r#"
full_name = "Bukayo Saka"
age = 23
current_club = "Arsenal"
profile_photo = "photo.jpg"

[[extra_links]]
label = "Instagram"
url = "https://instagram.com/saka"

[[extra_links]]
label = "Agent"
url = "https://agent.example"
"#,
    )
    .unwrap();
    let draft = player_intake::models::load_toml_to_player_draft(&draft_path)
        .await
        .unwrap();

    let mut preview = PlayerForm::new(MockTransport::ok("0"), ENDPOINT);
    apply_draft(&mut preview, &draft).unwrap();
    assert_eq!(preview.fields().full_name, "Bukayo Saka");
    assert_eq!(preview.extra_links()[1].url, "https://instagram.com/saka");
    assert_eq!(preview.extra_links()[4], ExtraLink::new("Agent", "https://agent.example"));
    assert_eq!(preview.profile_photo(), Some(&Attachment::from_path(dir.path().join("photo.jpg"))));

    let transport = MockTransport::ok("77");
    let mut form = PlayerForm::new(transport.clone(), ENDPOINT);
    let out_path = dir.path().join("out.txt");
    let writer = OutcomeWriter::with_path(out_path.to_string_lossy());
    let ok = process_draft(&mut form, &draft, 1, &writer, false)
        .await
        .unwrap();
    assert!(ok);
    assert!(std::fs::read_to_string(&out_path)
        .unwrap()
        .contains("Bukayo Saka | 状态: succeeded (id: 77)"));

    let body = transport.last_body();
    assert_eq!(body["age"], json!(23));
    assert_eq!(body["current_club"], json!("Arsenal"));
    assert_eq!(
        STANDARD
            .decode(body["profile_photo_base64"].as_str().unwrap())
            .unwrap(),
        b"jpeg-bytes"
    );
    assert_eq!(body["extra_links"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_draft_without_name_is_not_submitted() {
    let dir = tempfile::tempdir().unwrap();
    let transport = MockTransport::ok("1");
    let mut form = PlayerForm::new(transport.clone(), ENDPOINT);
    let draft: PlayerDraft = toml::from_str("bio = \"no name\"").unwrap();

    let writer = OutcomeWriter::with_path(dir.path().join("out.txt").to_string_lossy());
    let ok = process_draft(&mut form, &draft, 1, &writer, true).await.unwrap();

    assert!(!ok);
    assert_eq!(transport.calls(), 0);
    assert_eq!(form.status(), &SubmissionStatus::Idle);
}

// ========== 真实 HTTP 往返 ==========

/// 在本地端口上应答一次请求，返回基础地址和收到的原始请求
async fn serve_once(
    status_line: &'static str,
    body: &'static str,
) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];

        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let headers = String::from_utf8_lossy(&buf[..pos]).to_lowercase();
                let content_length = headers
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= pos + 4 + content_length {
                    break;
                }
            }
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;

        String::from_utf8(buf).unwrap()
    });

    (format!("http://{}", addr), handle)
}

fn local_transport() -> HttpTransport {
    HttpTransport::with_client(reqwest::Client::builder().no_proxy().build().unwrap())
}

#[tokio::test]
async fn test_http_transport_end_to_end() {
    let (base, server) = serve_once("201 Created", r#"{"id": 9}"#).await;
    let config = player_intake::Config {
        backend_url: base,
        ..Default::default()
    };

    let mut form = PlayerForm::new(local_transport(), config.players_endpoint());
    form.update_field(PlayerField::FullName, "Vini Jr");
    form.set_profile_photo(Some(Attachment::from_bytes("p.png", b"\x89PNG".to_vec())));

    let status = form.submit().await.clone();
    assert_eq!(status, SubmissionStatus::Succeeded { id: "9".to_string() });

    let raw = server.await.unwrap();
    let (head, body) = raw.split_once("\r\n\r\n").unwrap();
    let head = head.to_lowercase();
    assert!(head.starts_with("post /api/players http/1.1"));
    assert!(head.contains("content-type: application/json"));

    let body: JsonValue = serde_json::from_str(body).unwrap();
    assert_eq!(body["full_name"], json!("Vini Jr"));
    assert_eq!(body["profile_photo_base64"], json!(STANDARD.encode(b"\x89PNG")));
}

#[tokio::test]
async fn test_http_transport_error_status() {
    let (base, server) = serve_once("503 Service Unavailable", r#"{"error": "busy"}"#).await;

    let mut form = PlayerForm::new(local_transport(), format!("{}/api/players", base));
    form.update_field(PlayerField::FullName, "Vini Jr");

    let status = form.submit().await.clone();
    assert_eq!(
        status,
        SubmissionStatus::Failed {
            message: "Failed to submit".to_string()
        }
    );
    assert_eq!(form.fields().full_name, "Vini Jr");

    server.await.unwrap();
}

#[test]
fn test_draft_media_paths_resolve_next_to_file() {
    let draft = PlayerDraft {
        profile_photo: Some(PathBuf::from("media/p.png")),
        ..Default::default()
    }
    .with_file_path(PathBuf::from("/drafts/saka.toml"));

    assert_eq!(
        draft.resolve_media_path(draft.profile_photo.as_deref().unwrap()),
        PathBuf::from("/drafts/media/p.png")
    );
}
