//! HTTP 提交器
//!
//! 实现 otp-entry-core 的 CodeSubmitter trait：
//! 以 `multipart/form-data` POST 提交。客户端不自动跟随重定向：
//! 只要响应是带 `Location` 的 3xx，就视为发生了重定向，
//! 跳转目标按请求 URL 解析为绝对地址。
//! 跳回同一 URL 以及 307/308 同样算作重定向。

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use otp_entry_core::{CodeSubmitter, CoreResult, OtpError, SubmissionForm, SubmitResponse};
use reqwest::header::LOCATION;
use reqwest::multipart::Form;
use reqwest::redirect::Policy;
use reqwest::{StatusCode, Url};

/// 基于 reqwest 的提交器
pub struct HttpCodeSubmitter {
    client: reqwest::Client,
    url: Url,
}

impl HttpCodeSubmitter {
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let url = Url::parse(url).with_context(|| format!("Invalid submit URL: {url}"))?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(Policy::none())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, url })
    }
}

#[async_trait]
impl CodeSubmitter for HttpCodeSubmitter {
    async fn submit(&self, form: &SubmissionForm) -> CoreResult<SubmitResponse> {
        log::debug!("POST {}", self.url);

        let response = self
            .client
            .post(self.url.clone())
            .multipart(multipart_form(form))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    OtpError::Transport(format!("request timed out: {e}"))
                } else {
                    OtpError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        log::debug!("Response Status: {}", status.as_u16());

        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok());
        let redirected_to = redirect_target(&self.url, status, location);

        // 非跳转的错误状态码不影响结果，只记录下来
        if redirected_to.is_none() && !status.is_success() {
            log::warn!("Submission answered with HTTP {}", status.as_u16());
        }

        Ok(SubmitResponse { redirected_to })
    }
}

/// 构建 multipart 表单，字段顺序与 SubmissionForm 一致
fn multipart_form(form: &SubmissionForm) -> Form {
    form.fields()
        .iter()
        .fold(Form::new(), |multipart, (name, value)| {
            multipart.text(name.clone(), value.clone())
        })
}

/// 带 `Location` 的 3xx 即为重定向，返回解析后的绝对地址
fn redirect_target(requested: &Url, status: StatusCode, location: Option<&str>) -> Option<String> {
    if !status.is_redirection() {
        return None;
    }
    let location = location?;
    match requested.join(location) {
        Ok(url) => Some(url.to_string()),
        Err(e) => {
            log::warn!("Ignoring unparsable redirect location {location:?}: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use otp_entry_core::{CodeState, SubmissionGate};
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn form(code: &str) -> SubmissionForm {
        let mut state = CodeState::new();
        if let Some(d) = otp_entry_core::distribute(&state, 0, code) {
            state = d.state;
        }
        let code = SubmissionGate::validate(&state).unwrap();
        SubmissionForm::from_code(&code, "codeSubmitted")
    }

    fn submitter(server: &MockServer, route: &str) -> HttpCodeSubmitter {
        HttpCodeSubmitter::new(&format!("{}{route}", server.uri()), Duration::from_secs(5)).unwrap()
    }

    fn verify_url() -> Url {
        Url::parse("https://example.test/verify").unwrap()
    }

    #[test]
    fn success_is_not_a_redirect() {
        assert_eq!(redirect_target(&verify_url(), StatusCode::OK, None), None);
        assert_eq!(
            redirect_target(&verify_url(), StatusCode::OK, Some("/welcome")),
            None
        );
    }

    #[test]
    fn relative_location_is_resolved() {
        assert_eq!(
            redirect_target(&verify_url(), StatusCode::FOUND, Some("welcome?step=2")).as_deref(),
            Some("https://example.test/welcome?step=2")
        );
    }

    #[test]
    fn redirect_back_to_same_url_still_counts() {
        assert_eq!(
            redirect_target(&verify_url(), StatusCode::SEE_OTHER, Some("/verify")).as_deref(),
            Some("https://example.test/verify")
        );
    }

    #[test]
    fn redirect_without_location_is_ignored() {
        assert_eq!(
            redirect_target(&verify_url(), StatusCode::TEMPORARY_REDIRECT, None),
            None
        );
    }

    #[test]
    fn invalid_url_is_rejected() {
        assert!(HttpCodeSubmitter::new("not a url", Duration::from_secs(1)).is_err());
    }

    #[tokio::test]
    async fn posts_every_field_as_multipart() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/verify"))
            .and(body_string_contains("name=\"1\""))
            .and(body_string_contains("name=\"6\""))
            .and(body_string_contains("name=\"codeSubmitted\""))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let response = submitter(&server, "/verify")
            .submit(&form("246802"))
            .await
            .unwrap();

        assert_eq!(response, SubmitResponse::not_redirected());
    }

    async fn redirect_status(server: &MockServer, status: u16, location: &str) -> Option<String> {
        server.reset().await;
        Mock::given(method("POST"))
            .and(path("/verify"))
            .respond_with(ResponseTemplate::new(status).insert_header("location", location))
            .expect(1)
            .mount(server)
            .await;

        submitter(server, "/verify")
            .submit(&form("135791"))
            .await
            .unwrap()
            .redirected_to
    }

    #[tokio::test]
    async fn every_redirect_status_reports_location() {
        let server = MockServer::start().await;
        let welcome = format!("{}/welcome", server.uri());

        for status in [301, 302, 303, 307, 308] {
            assert_eq!(
                redirect_status(&server, status, "/welcome").await.as_deref(),
                Some(welcome.as_str()),
                "HTTP {status}"
            );
        }
    }

    #[tokio::test]
    async fn redirect_to_same_url_is_reported() {
        let server = MockServer::start().await;

        let target = redirect_status(&server, 303, "/verify").await;

        assert_eq!(target, Some(format!("{}/verify", server.uri())));
    }

    #[tokio::test]
    async fn redirect_target_is_not_fetched() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/verify"))
            .respond_with(ResponseTemplate::new(303).insert_header("location", "/welcome"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let response = submitter(&server, "/verify")
            .submit(&form("135791"))
            .await
            .unwrap();

        assert_eq!(
            response.redirected_to,
            Some(format!("{}/welcome", server.uri()))
        );
    }

    #[tokio::test]
    async fn error_status_is_not_a_redirect() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let response = submitter(&server, "/verify")
            .submit(&form("000000"))
            .await
            .unwrap();

        assert_eq!(response.redirected_to, None);
    }

    #[tokio::test]
    async fn unreachable_server_is_a_transport_error() {
        // 端口 1 上通常没有服务
        let submitter =
            HttpCodeSubmitter::new("http://127.0.0.1:1/verify", Duration::from_secs(2)).unwrap();

        let err = submitter.submit(&form("111111")).await.unwrap_err();
        assert!(matches!(err, OtpError::Transport(_)));
        assert!(err.is_retryable());
    }
}
