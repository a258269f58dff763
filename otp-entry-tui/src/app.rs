//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时，创建终端并初始化为以下状态：
//!
//! App {
//!
//!     should_quit: bool = false,                      // 决定应用是否应该退出
//!     otp: OtpController,                             // 已挂载，焦点在第一格
//!     current_page = Page::Entry,                     // 当前显示验证码输入页
//!     submission = SubmissionState::Idle,             // 没有进行中的提交
//!     status_message = None,                          // 状态栏消息
//!     viewport = Rect::default(),                     // 每帧渲染前更新，供鼠标点击定位
//!
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit{ break }                     // 检查 APP 是否应该退出
//!     while let Some(r) = submission.try_recv() {     // 取回已完成的提交结果
//!         update::update(&mut app , SubmitFinished(r))
//!     }
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         let cmd = update::update(&mut app , msg);       // 更新终端状态
//!         if let Some(cmd) = cmd { submission.execute(cmd) }  // 执行副作用
//!     }
//! }

use std::time::Duration;

use anyhow::Result;

use crate::backend::SubmissionService;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update::{self, Command};
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, submission: &mut SubmissionService) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            app.viewport = frame.area();
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 取回后台提交结果
        while let Some(result) = submission.try_recv() {
            update::update(app, AppMessage::SubmitFinished(result));
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 5. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 6. 更新状态，执行副作用
            if let Some(command) = update::update(app, msg) {
                match command {
                    Command::Submit(code) => submission.submit(code),
                }
            }
        }
    }

    Ok(())
}
