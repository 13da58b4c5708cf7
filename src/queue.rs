//! 任务队列的构建、注册与投递
//!
//! 基于远端列表存储的异步任务队列：投递方把消息编码后推入任务列表，
//! 单个轮询循环（见 `dispatcher` 模块）从列表取出并路由到处理器。

use std::sync::Arc;

use crate::codec;
use crate::config::QueueConfig;
use crate::errors::{QueueError, Result};
use crate::logging::{QueueLog, TracingLog};
use crate::message::{TaskDefinition, TaskHandler, TaskMessage};
use crate::registry::HandlerRegistry;
use crate::store::ListStore;

/// 任务队列构建器
pub struct TaskQueueBuilder {
    store: Arc<dyn ListStore>,
    config: QueueConfig,
    log: Arc<dyn QueueLog>,
    registry: HandlerRegistry,
}

impl TaskQueueBuilder {
    /// 创建新的构建器，日志默认走 `tracing`
    pub fn new(store: Arc<dyn ListStore>) -> Self {
        Self {
            store,
            config: QueueConfig::default(),
            log: Arc::new(TracingLog),
            registry: HandlerRegistry::new(),
        }
    }

    /// 设置队列键配置
    pub fn config(mut self, config: QueueConfig) -> Self {
        self.config = config;
        self
    }

    /// 设置日志能力
    pub fn log(mut self, log: Arc<dyn QueueLog>) -> Self {
        self.log = log;
        self
    }

    /// 注册消息处理器
    pub fn register<H>(self, handler: H) -> Self
    where
        H: TaskHandler + 'static,
    {
        self.registry
            .register(H::Message::TYPE_TAG, TaskDefinition::new(handler));
        self
    }

    /// 构建任务队列
    pub fn build(self) -> TaskQueue {
        TaskQueue {
            store: self.store,
            config: self.config,
            log: self.log,
            registry: self.registry,
        }
    }
}

/// 任务队列
///
/// 持有处理器注册表、列表存储句柄与日志能力。投递方通过 [`deliver`]
/// 入队，消费方通过 `run`/`run_with_shutdown` 启动轮询循环；一个实例
/// 同一时刻只应运行一个循环，投递则允许任意并发。
///
/// [`deliver`]: TaskQueue::deliver
pub struct TaskQueue {
    /// 列表存储句柄
    pub(crate) store: Arc<dyn ListStore>,
    /// 队列键配置
    pub(crate) config: QueueConfig,
    /// 日志能力
    pub(crate) log: Arc<dyn QueueLog>,
    /// 处理器注册表
    pub(crate) registry: HandlerRegistry,
}

impl TaskQueue {
    /// 创建构建器
    pub fn builder(store: Arc<dyn ListStore>) -> TaskQueueBuilder {
        TaskQueueBuilder::new(store)
    }

    /// 注册消息处理器，标签取自消息类型的 `TYPE_TAG`
    ///
    /// 轮询循环启动后注册同样生效；重复注册同一标签时静默覆盖。
    pub fn register<H>(&self, handler: H)
    where
        H: TaskHandler + 'static,
    {
        self.registry
            .register(H::Message::TYPE_TAG, TaskDefinition::new(handler));
    }

    /// 该标签是否已注册处理器
    pub fn is_registered(&self, tag: &str) -> bool {
        self.registry.is_registered(tag)
    }

    /// 投递一条消息（即发即忘）
    ///
    /// 所有失败只进入日志，调用方无从感知；需要拿到结果时用
    /// [`try_deliver`](TaskQueue::try_deliver)。
    pub async fn deliver<T: TaskMessage>(&self, message: &T) {
        if let Err(e) = self.try_deliver(message).await {
            self.log.error(&format!("消息投递失败: {e}"));
        }
    }

    /// 投递一条消息并返回结果
    ///
    /// 按顺序执行：先校验类型已注册（未注册直接拒绝，消息不入队），
    /// 再序列化负载、编码线上记录并推入任务队列头部。
    pub async fn try_deliver<T: TaskMessage>(&self, message: &T) -> Result<()> {
        if !self.registry.is_registered(T::TYPE_TAG) {
            return Err(QueueError::NoHandler {
                tag: T::TYPE_TAG.to_string(),
            });
        }

        let payload = serde_json::to_string(message)?;
        let record = codec::encode(T::TYPE_TAG, &payload);
        self.store
            .push_left(&self.config.task_queue_key, &record)
            .await
    }
}
