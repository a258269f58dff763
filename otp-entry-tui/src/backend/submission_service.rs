//! 提交服务
//!
//! 主循环是同步的，提交是异步的：
//! `submit()` 把验证码快照 spawn 到 tokio 运行时上，
//! 结果经 channel 送回，主循环每帧用 `try_recv()` 取走。

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use otp_entry_core::{
    CodeState, CodeSubmitter, CoreResult, InMemorySessionStore, Navigation, SubmissionGate,
};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::{AppConfig, HttpCodeSubmitter};

/// 提交服务
pub struct SubmissionService {
    gate: Arc<SubmissionGate>,
    runtime: Handle,
    tx: UnboundedSender<CoreResult<Navigation>>,
    rx: UnboundedReceiver<CoreResult<Navigation>>,
}

impl SubmissionService {
    pub fn new(gate: SubmissionGate, runtime: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            gate: Arc::new(gate),
            runtime,
            tx,
            rx,
        }
    }

    /// 按配置组装：HTTP 提交器 + 进程内会话存储
    pub fn from_config(config: &AppConfig, runtime: Handle) -> Result<Self> {
        let submitter: Arc<dyn CodeSubmitter> = Arc::new(HttpCodeSubmitter::new(
            &config.submit_url,
            Duration::from_secs(config.request_timeout_secs),
        )?);

        let gate = SubmissionGate::new(submitter)
            .with_session_store(Arc::new(InMemorySessionStore::new()))
            .with_marker_field(config.marker_field.clone())
            .with_fallback_route(config.fallback_route.clone());

        log::info!("Submitting codes to {}", config.submit_url);
        Ok(Self::new(gate, runtime))
    }

    /// 在后台提交 `code`
    pub fn submit(&self, code: CodeState) {
        let gate = Arc::clone(&self.gate);
        let tx = self.tx.clone();

        self.runtime.spawn(async move {
            let result = gate.try_submit(&code).await;
            if tx.send(result).is_err() {
                log::debug!("Submission finished after the UI closed");
            }
        });
    }

    /// 取走一个已完成的结果（不阻塞）
    pub fn try_recv(&mut self) -> Option<CoreResult<Navigation>> {
        self.rx.try_recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use otp_entry_core::{OtpError, SubmissionForm, SubmitResponse};
    use std::sync::Mutex;

    struct FixedSubmitter {
        response: CoreResult<SubmitResponse>,
        seen: Mutex<Vec<SubmissionForm>>,
    }

    #[async_trait]
    impl CodeSubmitter for FixedSubmitter {
        async fn submit(&self, form: &SubmissionForm) -> CoreResult<SubmitResponse> {
            self.seen.lock().unwrap().push(form.clone());
            self.response.clone()
        }
    }

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
    }

    fn complete_code() -> CodeState {
        otp_entry_core::distribute(&CodeState::new(), 0, "482913")
            .unwrap()
            .state
    }

    fn service(
        runtime: &tokio::runtime::Runtime,
        response: CoreResult<SubmitResponse>,
    ) -> (SubmissionService, Arc<FixedSubmitter>) {
        let submitter = Arc::new(FixedSubmitter {
            response,
            seen: Mutex::new(Vec::new()),
        });
        let gate = SubmissionGate::new(submitter.clone()).with_fallback_route("/loading");
        (SubmissionService::new(gate, runtime.handle().clone()), submitter)
    }

    fn wait_for_result(
        runtime: &tokio::runtime::Runtime,
        service: &mut SubmissionService,
    ) -> CoreResult<Navigation> {
        runtime
            .block_on(service.rx.recv())
            .expect("channel closed")
    }

    #[test]
    fn nothing_to_receive_before_submitting() {
        let rt = runtime();
        let (mut service, _) = service(&rt, Ok(SubmitResponse::not_redirected()));
        assert!(service.try_recv().is_none());
    }

    #[test]
    fn result_comes_back_through_the_channel() {
        let rt = runtime();
        let (mut service, submitter) =
            service(&rt, Ok(SubmitResponse::redirected("https://example.test/next")));

        service.submit(complete_code());
        let result = wait_for_result(&rt, &mut service);

        assert_eq!(
            result,
            Ok(Navigation::Redirect("https://example.test/next".into()))
        );
        assert_eq!(submitter.seen.lock().unwrap().len(), 1);
        assert!(service.try_recv().is_none());
    }

    #[test]
    fn transport_error_is_forwarded() {
        let rt = runtime();
        let (mut service, _) = service(&rt, Err(OtpError::Transport("offline".into())));

        service.submit(complete_code());
        let result = wait_for_result(&rt, &mut service);

        assert_eq!(result, Err(OtpError::Transport("offline".into())));
    }

    #[test]
    fn from_config_rejects_bad_url() {
        let rt = runtime();
        let config = AppConfig {
            submit_url: "::".into(),
            ..AppConfig::default()
        };
        assert!(SubmissionService::from_config(&config, rt.handle().clone()).is_err());
    }
}
