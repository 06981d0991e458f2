#[cfg(test)]
mod tests {
    use crate::config::ClientConfig;
    use crate::error::TransportError;
    use crate::session::{Cookie, Session};
    use crate::transport::headers::headers_for_profile;
    use crate::transport::utils::{body_for_kind, parse_cookie_header, validate_response, with_query};
    use crate::transport::{
        FetchBody, FetchProfile, FetchRequest, Method, ReqwestTransport, RequestKind, Transport,
    };
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    const PAGE: &str = "<html><body><table class=\"dataTable\"></table></body></html>";

    #[test]
    fn accepts_ordinary_page() {
        assert!(validate_response("https://boxrec.com/en/search", 200, PAGE).is_ok());
    }

    #[test]
    fn too_many_requests_is_rate_limited() {
        let err = validate_response("https://boxrec.com/en/search", 429, PAGE).unwrap_err();
        assert!(matches!(err, TransportError::RateLimited { .. }));
        assert!(err.to_string().contains("429 has occurred"));
    }

    #[test]
    fn recaptcha_wall_is_rate_limited() {
        let body = "<html><div class=\"g-recaptcha\" data-sitekey=\"x\"></div></html>";
        let err = validate_response("https://boxrec.com/en/proboxer/1", 403, body).unwrap_err();
        assert!(matches!(err, TransportError::RateLimited { .. }));
    }

    #[test]
    fn healthy_page_with_recaptcha_widget_is_accepted() {
        let body = r#"<html><body>
            <table class="dataTable"><tbody><tr><td>Canelo</td></tr></tbody></table>
            <form name="contact"><div class="g-recaptcha" data-sitekey="x"></div>
            <script src="https://www.google.com/recaptcha/api.js"></script>
            <script>grecaptcha.ready(function () {});</script></form>
            </body></html>"#;
        assert!(validate_response("https://boxrec.com/en/proboxer/348759", 200, body).is_ok());

        let page = body_for_kind(
            RequestKind::Html,
            "https://boxrec.com/en/proboxer/348759",
            200,
            "https://boxrec.com/en/proboxer/348759".to_string(),
            body.to_string(),
        )
        .unwrap();
        assert!(matches!(page, FetchBody::Html(_)));
    }

    #[test]
    fn challenge_page_is_reported_with_pattern() {
        let body = "<html><title>Just a moment</title>Checking your browser before accessing boxrec.com</html>";
        match validate_response("https://boxrec.com/en/proboxer/1", 200, body) {
            Err(TransportError::BotChallenge { pattern, .. }) => {
                assert_eq!(pattern, "checking your browser before accessing")
            }
            other => panic!("expected challenge, got {other:?}"),
        }
    }

    #[test]
    fn non_success_status_is_labelled() {
        match validate_response("https://boxrec.com/en/event/0", 404, PAGE) {
            Err(TransportError::Status { status, label, .. }) => {
                assert_eq!(status, 404);
                assert_eq!(label, "not found");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[test]
    fn login_kind_skips_validation() {
        let body = body_for_kind(
            RequestKind::Login,
            "https://boxrec.com/en/login",
            302,
            "https://boxrec.com/en/gdpr".to_string(),
            "<html>GDPR</html>".to_string(),
        )
        .unwrap();
        match body {
            FetchBody::Login(page) => {
                assert_eq!(page.status, 302);
                assert!(page.final_url.ends_with("/gdpr"));
            }
            other => panic!("expected login page, got {other:?}"),
        }
    }

    #[test]
    fn json_kind_decodes_or_fails() {
        let ok = body_for_kind(
            RequestKind::Json,
            "u",
            200,
            "u".to_string(),
            "{\"a\":1}".to_string(),
        )
        .unwrap();
        assert_eq!(ok, FetchBody::Json(serde_json::json!({"a": 1})));

        let err = body_for_kind(RequestKind::Json, "u", 200, "u".to_string(), "<html>".to_string())
            .unwrap_err();
        assert!(matches!(err, TransportError::Decode { .. }));
    }

    #[test]
    fn parses_cookie_header() {
        let cookies = parse_cookie_header("PHPSESSID=abc; REMEMBERME=def%3D; =bad; junk");
        assert_eq!(
            cookies,
            vec![Cookie::new("PHPSESSID", "abc"), Cookie::new("REMEMBERME", "def%3D")]
        );
    }

    #[test]
    fn query_is_appended() {
        let url = with_query(
            "https://boxrec.com/en/proboxer/52984",
            &[("offset".to_string(), "0".to_string()), ("toggleRatings".to_string(), "y".to_string())],
        )
        .unwrap();
        assert_eq!(url, "https://boxrec.com/en/proboxer/52984?offset=0&toggleRatings=y");
    }

    #[test]
    fn profile_headers_carry_user_agent() {
        let headers = headers_for_profile(FetchProfile::Windows);
        assert_eq!(
            headers.get("user-agent").unwrap().to_str().unwrap(),
            FetchProfile::Windows.user_agent()
        );
        assert!(headers.contains_key("sec-ch-ua-platform"));

        let minimal = headers_for_profile(FetchProfile::Minimal);
        assert_eq!(minimal.len(), 1);
    }

    #[test]
    fn request_builder() {
        let req = FetchRequest::post("https://boxrec.com/en/login")
            .param("_username", "u")
            .with_params(vec![("login[go]".to_string(), String::new())])
            .kind(RequestKind::Login);
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.kind, RequestKind::Login);
        assert_eq!(req.param_value("_username"), Some("u"));
        assert_eq!(req.param_value("login[go]"), Some(""));
        assert_eq!(req.param_value("missing"), None);
    }

    /// Local HTTP server answering one scripted response per connection.
    /// Resolves to the request heads it saw, lowercased.
    async fn serve(responses: Vec<String>) -> (String, JoinHandle<Vec<String>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let mut heads = Vec::new();
            for response in responses {
                let (mut stream, _) = listener.accept().await.unwrap();
                heads.push(read_request(&mut stream).await);
                stream.write_all(response.as_bytes()).await.unwrap();
                stream.shutdown().await.unwrap();
            }
            heads
        });
        (base, handle)
    }

    async fn read_request(stream: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        let head_end = loop {
            if let Some(i) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break i + 4;
            }
            let n = stream.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before headers ended");
            buf.extend_from_slice(&chunk[..n]);
        };
        let head = String::from_utf8_lossy(&buf[..head_end]).to_lowercase();
        let length = head
            .lines()
            .find_map(|l| l.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok());
        let chunked = head.contains("transfer-encoding: chunked");
        loop {
            let body = &buf[head_end..];
            let done = match length {
                Some(len) => body.len() >= len,
                None if chunked => body.ends_with(b"0\r\n\r\n"),
                None => true,
            };
            if done {
                break;
            }
            let n = stream.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }
        head
    }

    fn http_response(status: &str, extra_headers: &[&str], body: &str) -> String {
        let mut out = format!("HTTP/1.1 {status}\r\n");
        for header in extra_headers {
            out.push_str(header);
            out.push_str("\r\n");
        }
        out.push_str(&format!(
            "Content-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        ));
        out
    }

    fn cookie_header(head: &str) -> Option<&str> {
        head.lines().find_map(|l| l.strip_prefix("cookie:")).map(str::trim)
    }

    fn local_transport(base: &str) -> ReqwestTransport {
        let config = ClientConfig {
            base_url: base.to_string(),
            ..ClientConfig::default()
        };
        ReqwestTransport::new(&config).unwrap()
    }

    #[tokio::test]
    async fn cookies_do_not_leak_between_sessions() {
        let (base, server) = serve(vec![
            http_response("200 OK", &["Set-Cookie: REMEMBERME=user1; Path=/"], PAGE),
            http_response("200 OK", &[], PAGE),
            http_response("200 OK", &[], PAGE),
        ])
        .await;
        let transport = local_transport(&base);

        let alice = Session::new(vec![Cookie::new("PHPSESSID", "alice")]);
        let first = transport
            .fetch(FetchRequest::get(format!("{base}/en/proboxer/1")), Some(&alice))
            .await
            .unwrap();
        assert_eq!(first.cookies, vec![Cookie::new("REMEMBERME", "user1")]);

        let second = transport
            .fetch(FetchRequest::get(format!("{base}/en/proboxer/2")), Some(&Session::anonymous()))
            .await
            .unwrap();
        assert!(second.cookies.is_empty());

        let bob = Session::new(vec![Cookie::new("PHPSESSID", "bob")]);
        transport
            .fetch(FetchRequest::get(format!("{base}/en/proboxer/3")), Some(&bob))
            .await
            .unwrap();

        let heads = server.await.unwrap();
        assert_eq!(cookie_header(&heads[0]), Some("phpsessid=alice"));
        assert_eq!(cookie_header(&heads[1]), None);
        assert_eq!(cookie_header(&heads[2]), Some("phpsessid=bob"));
    }

    #[tokio::test]
    async fn login_keeps_cookies_set_on_redirect() {
        let (base, server) = serve(vec![
            http_response(
                "302 Found",
                &["Location: /en/home", "Set-Cookie: REMEMBERME=token; Path=/"],
                "",
            ),
            http_response("200 OK", &[], "<html>welcome</html>"),
            http_response("200 OK", &[], PAGE),
        ])
        .await;
        let transport = local_transport(&base);

        let anonymous = Session::new(vec![Cookie::new("PHPSESSID", "anon")]);
        let request = FetchRequest::post(format!("{base}/en/login"))
            .param("_username", "u")
            .kind(RequestKind::Login);
        let response = transport.fetch(request, Some(&anonymous)).await.unwrap();

        let mut session = anonymous.clone();
        session.merge(response.cookies.clone());
        assert_eq!(session.get("PHPSESSID"), Some("anon"));
        assert_eq!(session.get("REMEMBERME"), Some("token"));
        match response.body {
            FetchBody::Login(page) => {
                assert_eq!(page.status, 200);
                assert!(page.final_url.ends_with("/en/home"));
            }
            other => panic!("expected login page, got {other:?}"),
        }

        // The login jar is not reused by later requests.
        transport
            .fetch(FetchRequest::get(format!("{base}/en/champions")), None)
            .await
            .unwrap();

        let heads = server.await.unwrap();
        assert!(heads[0].starts_with("post /en/login"));
        assert_eq!(cookie_header(&heads[0]), Some("phpsessid=anon"));
        let redirected = cookie_header(&heads[1]).unwrap();
        assert!(redirected.contains("phpsessid=anon"));
        assert!(redirected.contains("rememberme=token"));
        assert_eq!(cookie_header(&heads[2]), None);
    }
}
