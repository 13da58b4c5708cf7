//! 轮询调度循环
//!
//! 单消费者循环：从任务队列尾部弹出线上记录，解码、查找处理器并调用；
//! 反序列化或处理失败的记录原样转入失败队列，格式错误与未注册标签的
//! 记录按策略直接丢弃。队列空转时按 1s/2s/0s 三槽轮转退避。

use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time::sleep;

use crate::backoff::IdleBackoff;
use crate::codec;
use crate::errors::{QueueError, Result};
use crate::queue::TaskQueue;

/// 一次轮询的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PollOutcome {
    /// 成功处理一条消息
    Dispatched,
    /// 消费了一条消息但按策略丢弃，不入失败队列
    Discarded,
    /// 消费了一条消息且已转入失败队列
    DeadLettered,
    /// 队列为空或存储出错，视作空转
    Idle,
}

impl TaskQueue {
    /// 启动轮询循环，直到收到关闭信号
    ///
    /// 退避休眠同样会被关闭信号打断，循环在信号到达后尽快退出。
    pub async fn run_with_shutdown(&self, mut shutdown_rx: broadcast::Receiver<()>) {
        let mut backoff = IdleBackoff::new();

        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => {
                    self.log.info("任务轮询收到停止信号");
                    break;
                }
                _ = self.poll_step(&mut backoff) => {}
            }
        }
    }

    /// 启动轮询循环并一直运行，不主动停止
    pub async fn run(&self) {
        // 发送端在循环存续期间保持存活但从不发送，循环因此不会退出
        let (_shutdown_tx, shutdown_rx) = broadcast::channel(1);
        self.run_with_shutdown(shutdown_rx).await
    }

    /// 单次轮询，随后按需休眠
    async fn poll_step(&self, backoff: &mut IdleBackoff) {
        let delay = self.poll_and_advance(backoff).await;
        if !delay.is_zero() {
            sleep(delay).await;
        }
    }

    /// 单次轮询并推进退避状态，返回本次应休眠的时长
    ///
    /// 只有空转推进退避槽位；成功处理将槽位归零；消费了记录但未成功的
    /// 迭代不休眠也不改变槽位。
    async fn poll_and_advance(&self, backoff: &mut IdleBackoff) -> Duration {
        match self.poll_once().await {
            PollOutcome::Dispatched => {
                backoff.reset();
                Duration::ZERO
            }
            PollOutcome::Discarded | PollOutcome::DeadLettered => Duration::ZERO,
            PollOutcome::Idle => backoff.next_delay(),
        }
    }

    /// 从任务队列弹出一条记录并处理
    pub(crate) async fn poll_once(&self) -> PollOutcome {
        let record = match self.store.pop_right(&self.config.task_queue_key).await {
            Ok(Some(record)) => record,
            Ok(None) => return PollOutcome::Idle,
            Err(e) => {
                self.log.error(&format!("存储访问失败: {e}"));
                return PollOutcome::Idle;
            }
        };

        match self.dispatch_record(&record).await {
            Ok(()) => PollOutcome::Dispatched,
            Err(e) if e.is_dead_letter() => {
                self.log
                    .error(&format!("消息处理失败: {e}; 原始记录: {record}"));
                self.dead_letter(&record).await;
                PollOutcome::DeadLettered
            }
            Err(e) => {
                self.log
                    .error(&format!("消息被丢弃: {e}; 原始记录: {record}"));
                PollOutcome::Discarded
            }
        }
    }

    /// 解码记录、查找处理器并调用
    async fn dispatch_record(&self, record: &str) -> Result<()> {
        let (tag, payload) = codec::decode(record)?;
        let definition = self.registry.get(tag).ok_or_else(|| QueueError::NoHandler {
            tag: tag.to_string(),
        })?;
        definition.invoke(payload).await
    }

    /// 将原始记录原样推入失败队列
    async fn dead_letter(&self, record: &str) {
        if let Err(e) = self
            .store
            .push_left(&self.config.fail_queue_key, record)
            .await
        {
            self.log.error(&format!("写入失败队列失败: {e}"));
        }
    }
}
