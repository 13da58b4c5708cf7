//! # Liteq
//!
//! 基于远端有序列表（Redis List 语义）的轻量任务队列：生产端即发即忘，
//! 消费端单循环轮询，消息按类型标签路由到已注册的处理器。
//!
//! ## 核心能力
//!
//! - **类型化消息**: 消息类型实现 [`TaskMessage`] 并声明 `TYPE_TAG`，
//!   负载走 `serde_json`，线上记录形如 `标签|JSON负载`
//! - **处理器注册**: [`TaskHandler`] 按标签注册，重复注册静默覆盖
//! - **即发即忘投递**: [`TaskQueue::deliver`] 只记日志不返回错误，
//!   需要结果时用 [`TaskQueue::try_deliver`]
//! - **失败路由**: 反序列化失败与处理器失败的记录原样转入失败队列，
//!   格式错误与未注册标签的记录记日志后丢弃
//! - **空转退避**: 队列为空时按 1s/2s/0s 三槽轮转休眠，成功处理后归零
//! - **可插拔存储**: [`ListStore`] 抽象列表存储，内置 Redis 实现与
//!   进程内内存实现
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use serde::{Deserialize, Serialize};
//! use liteq::{RedisListStore, TaskHandler, TaskMessage, TaskQueue};
//!
//! #[derive(Debug, Serialize, Deserialize)]
//! struct SendEmail {
//!     to: String,
//! }
//!
//! impl TaskMessage for SendEmail {
//!     const TYPE_TAG: &'static str = "send_email";
//! }
//!
//! struct EmailHandler;
//!
//! #[async_trait::async_trait]
//! impl TaskHandler for EmailHandler {
//!     type Message = SendEmail;
//!
//!     async fn handle(&self, message: SendEmail) -> anyhow::Result<()> {
//!         println!("发送邮件到 {}", message.to);
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = Arc::new(RedisListStore::from_url("redis://127.0.0.1:6379").await?);
//!     let queue = TaskQueue::builder(store).register(EmailHandler).build();
//!
//!     queue
//!         .deliver(&SendEmail {
//!             to: "ops@example.com".to_string(),
//!         })
//!         .await;
//!
//!     queue.run().await;
//!     Ok(())
//! }
//! ```

mod backoff;
pub mod codec;
pub mod config;
mod dispatcher;
pub mod errors;
pub mod logging;
pub mod message;
pub mod queue;
mod registry;
pub mod store;

// Re-export essential types for convenience
pub use config::{QueueConfig, RedisConfig, DEFAULT_FAIL_QUEUE_KEY, DEFAULT_TASK_QUEUE_KEY};
pub use errors::{QueueError, Result};
pub use logging::{LogEntry, LogLevel, MemoryLog, QueueLog, TracingLog};
pub use message::{TaskDefinition, TaskHandler, TaskMessage};
pub use queue::{TaskQueue, TaskQueueBuilder};
pub use store::{InMemoryListStore, ListStore, RedisListStore};
