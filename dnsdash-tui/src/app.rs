//!
//! app.rs
//! 应用主循环
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     while let Ok(ev) = rx.try_recv() { ... }        // 收取后台任务结果
//!     if let Some(event) = poll_event() { ... }       // 轮询输入，在此等待 100ms
//!     每 250ms 发送一次 Tick                           // 过期 toast、按间隔重新验证
//!
//!     update 返回的 Command：
//!         Copy      → 直接写 OSC 52 到终端
//!         其它      → backend.dispatch，在 tokio 运行时上执行
//! }

use std::time::{Duration, Instant};

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::Backend;
use crate::event;
use crate::message::{AppMessage, BackendEvent};
use crate::model::App;
use crate::update::{self, Command};
use crate::util::{Term, copy_to_clipboard};
use crate::view;

const POLL_TIMEOUT: Duration = Duration::from_millis(100);
const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    backend: &Backend,
    rx: &mut UnboundedReceiver<BackendEvent>,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 收取后台任务结果
        while let Ok(event) = rx.try_recv() {
            let commands = update::update(app, AppMessage::Backend(event), Instant::now());
            execute(terminal, backend, commands);
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(POLL_TIMEOUT)? {
            let msg = event::handle_event(event, app);
            let commands = update::update(app, msg, Instant::now());
            execute(terminal, backend, commands);
        }

        // 5. 定时器
        let now = Instant::now();
        if now.duration_since(last_tick) >= TICK_INTERVAL {
            last_tick = now;
            let commands = update::update(app, AppMessage::Tick, now);
            execute(terminal, backend, commands);
        }
    }

    Ok(())
}

/// 执行 update 返回的副作用
pub fn execute(terminal: &mut Term, backend: &Backend, commands: Vec<Command>) {
    for command in commands {
        match command {
            Command::Copy(text) => {
                if let Err(e) = copy_to_clipboard(terminal.backend_mut(), &text) {
                    log::warn!("Failed to write clipboard sequence: {e}");
                }
            }
            other => backend.dispatch(other),
        }
    }
}
