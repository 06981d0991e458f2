#[cfg(test)]
mod tests {
    use crate::config::{ClientConfig, Credentials};
    use crate::error::{BoxrecError, TransportError};
    use crate::session::{login, Cookie, Session};
    use crate::transport::mock::MockTransport;
    use crate::transport::{FetchBody, FetchResponse, LoginPage, Method, RequestKind};

    fn landing() -> FetchResponse {
        FetchResponse::html("<html>home</html>").with_cookies(vec![Cookie::new("PHPSESSID", "anon")])
    }

    fn login_page(html: &str, final_url: &str, status: u16, cookies: Vec<Cookie>) -> FetchResponse {
        FetchResponse {
            body: FetchBody::Login(LoginPage {
                html: html.to_string(),
                final_url: final_url.to_string(),
                status,
            }),
            cookies,
        }
    }

    fn creds() -> Credentials {
        Credentials::new("boxer", "secret")
    }

    async fn login_error(response: FetchResponse) -> String {
        let mock = MockTransport::new();
        mock.push(landing()).push(response);
        login(&mock, &ClientConfig::default(), &creds())
            .await
            .unwrap_err()
            .to_string()
    }

    #[test]
    fn session_merge_replaces_by_name() {
        let mut session = Session::new(vec![Cookie::new("PHPSESSID", "a")]);
        session.merge(vec![Cookie::new("PHPSESSID", "b"), Cookie::new("REMEMBERME", "c")]);
        assert_eq!(session.get("PHPSESSID"), Some("b"));
        assert_eq!(session.cookie_header(), "PHPSESSID=b; REMEMBERME=c");
        assert!(Session::anonymous().is_empty());
    }

    #[tokio::test]
    async fn successful_login_returns_both_cookies() {
        let mock = MockTransport::new();
        mock.push(landing()).push(login_page(
            "<html>welcome back</html>",
            "https://boxrec.com/en/",
            200,
            vec![Cookie::new("PHPSESSID", "authed"), Cookie::new("REMEMBERME", "token")],
        ));

        let session = login(&mock, &ClientConfig::default(), &creds()).await.unwrap();
        assert_eq!(session.get("PHPSESSID"), Some("authed"));
        assert_eq!(session.get("REMEMBERME"), Some("token"));

        let requests = mock.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].url, "https://boxrec.com/");
        assert_eq!(requests[1].url, "https://boxrec.com/en/login");
        assert_eq!(requests[1].method, Method::Post);
        assert_eq!(requests[1].kind, RequestKind::Login);
        assert_eq!(requests[1].param_value("_username"), Some("boxer"));
        assert_eq!(requests[1].param_value("_password"), Some("secret"));
        assert_eq!(requests[1].param_value("_remember_me"), Some("on"));
        assert_eq!(requests[1].param_value("login[go]"), Some(""));

        // the POST carries the anonymous cookie
        let sessions = mock.sessions();
        assert!(sessions[0].is_none());
        assert_eq!(sessions[1].as_ref().unwrap().get("PHPSESSID"), Some("anon"));
    }

    #[tokio::test]
    async fn empty_credentials_fail_before_network() {
        let mock = MockTransport::new();
        let err = login(&mock, &ClientConfig::default(), &Credentials::new("", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, BoxrecError::MissingCredentials));
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn no_anonymous_cookie_fails() {
        let mock = MockTransport::new();
        mock.push_html("<html>home</html>");
        let err = login(&mock, &ClientConfig::default(), &creds()).await.unwrap_err();
        assert!(matches!(err, BoxrecError::LoginFailed(_)));
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn gdpr_redirect_is_reported() {
        let msg = login_error(login_page("<html>consent</html>", "https://boxrec.com/en/gdpr", 200, vec![])).await;
        assert!(msg.starts_with("GDPR consent is needed"));
    }

    #[tokio::test]
    async fn wrong_password_is_reported() {
        let msg = login_error(login_page(
            "<div>your password is incorrect</div>",
            "https://boxrec.com/en/login",
            200,
            vec![],
        ))
        .await;
        assert_eq!(msg, "Your password is incorrect");
    }

    #[tokio::test]
    async fn unknown_username_is_reported() {
        let msg = login_error(login_page(
            "<div>username does not exist</div>",
            "https://boxrec.com/en/login",
            200,
            vec![],
        ))
        .await;
        assert_eq!(msg, "Username does not exist");
    }

    #[tokio::test]
    async fn login_form_still_shown_fails() {
        let msg = login_error(login_page(
            "<form><input name=\"_password\"></form>",
            "https://boxrec.com/en/login",
            200,
            vec![Cookie::new("REMEMBERME", "x")],
        ))
        .await;
        assert_eq!(msg, "Please check your credentials, could not log into BoxRec");
    }

    #[tokio::test]
    async fn missing_remember_me_fails() {
        let msg = login_error(login_page(
            "<html>welcome</html>",
            "https://boxrec.com/en/",
            200,
            vec![Cookie::new("PHPSESSID", "authed")],
        ))
        .await;
        assert_eq!(msg, "Please check your credentials, could not log into BoxRec");
    }

    #[tokio::test]
    async fn rate_limit_propagates() {
        let mock = MockTransport::new();
        mock.push(landing()).push_error(TransportError::RateLimited {
            url: "https://boxrec.com/en/login".to_string(),
        });
        let err = login(&mock, &ClientConfig::default(), &creds()).await.unwrap_err();
        assert!(matches!(
            err,
            BoxrecError::Transport(TransportError::RateLimited { .. })
        ));
    }
}
