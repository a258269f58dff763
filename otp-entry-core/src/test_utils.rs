//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::error::{CoreResult, OtpError};
use crate::services::distribute;
use crate::traits::{CodeSubmitter, SessionStore};
use crate::types::{CodeState, SubmissionForm, SubmitResponse};

/// 由数字串构造一个填满的状态
pub fn full_code(digits: &str) -> CodeState {
    distribute(&CodeState::new(), 0, digits)
        .map(|d| d.state)
        .unwrap_or_default()
}

// ===== MockSubmitter =====

pub struct MockSubmitter {
    calls: RwLock<Vec<SubmissionForm>>,
    /// submit 时返回的结果（默认：未重定向）
    response: RwLock<CoreResult<SubmitResponse>>,
}

impl MockSubmitter {
    pub fn new() -> Self {
        Self {
            calls: RwLock::new(Vec::new()),
            response: RwLock::new(Ok(SubmitResponse::not_redirected())),
        }
    }

    pub async fn set_response(&self, response: CoreResult<SubmitResponse>) {
        *self.response.write().await = response;
    }

    pub async fn calls(&self) -> Vec<SubmissionForm> {
        self.calls.read().await.clone()
    }
}

#[async_trait]
impl CodeSubmitter for MockSubmitter {
    async fn submit(&self, form: &SubmissionForm) -> CoreResult<SubmitResponse> {
        self.calls.write().await.push(form.clone());
        self.response.read().await.clone()
    }
}

// ===== MockSessionStore =====

pub struct MockSessionStore {
    entries: RwLock<HashMap<String, String>>,
    /// 如果 Some，put 时返回此错误
    put_error: RwLock<Option<String>>,
}

impl MockSessionStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            put_error: RwLock::new(None),
        }
    }

    pub async fn set_put_error(&self, err: Option<String>) {
        *self.put_error.write().await = err;
    }
}

#[async_trait]
impl SessionStore for MockSessionStore {
    async fn put(&self, key: &str, value: &str) -> CoreResult<()> {
        if let Some(ref msg) = *self.put_error.read().await {
            return Err(OtpError::SessionStore(msg.clone()));
        }
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }
}
