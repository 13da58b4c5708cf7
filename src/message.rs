//! 消息类型与处理器抽象
//!
//! 每种消息类型通过 `TaskMessage::TYPE_TAG` 关联一个稳定的类型标签，
//! 注册与投递共用这个标签做路由，因此二者不会在标签拼写上产生分歧。

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{QueueError, Result};

/// 可入队的消息类型
///
/// `TYPE_TAG` 在一个队列实例的生命周期内必须稳定且互不冲突，
/// 并且不得包含线上记录分隔符 `|`。
pub trait TaskMessage: Serialize + DeserializeOwned + Send + 'static {
    /// 类型标签，同时充当注册表键与线上记录前缀
    const TYPE_TAG: &'static str;
}

/// 消息处理器
///
/// 一个实现只消费一种消息类型。返回错误时，该消息的原始线上记录
/// 会被送入失败队列等待人工处置。
#[async_trait]
pub trait TaskHandler: Send + Sync {
    /// 该处理器消费的消息类型
    type Message: TaskMessage;

    async fn handle(&self, message: Self::Message) -> anyhow::Result<()>;
}

type InvokeFn = Box<dyn Fn(String) -> BoxFuture<'static, Result<()>> + Send + Sync>;

/// 任务定义：一个类型标签对应的负载构造与处理逻辑
///
/// 内部把「反序列化出新的负载实例」与「调用处理器」擦除成一个闭包，
/// 调度循环因此无需知道具体消息类型。注册后不可变。
pub struct TaskDefinition {
    invoke: InvokeFn,
}

impl TaskDefinition {
    /// 由处理器构造任务定义
    pub fn new<H>(handler: H) -> Self
    where
        H: TaskHandler + 'static,
    {
        let handler = Arc::new(handler);
        let invoke: InvokeFn = Box::new(move |payload: String| {
            let handler = Arc::clone(&handler);
            Box::pin(async move {
                let message: H::Message = serde_json::from_str(&payload)?;
                handler
                    .handle(message)
                    .await
                    .map_err(QueueError::from)
            })
        });
        Self { invoke }
    }

    /// 反序列化负载并调用处理器
    ///
    /// 反序列化失败返回 `Serialization`，处理器失败返回 `Handler`，
    /// 两者对调度循环而言都走失败队列路径。
    pub(crate) async fn invoke(&self, payload: &str) -> Result<()> {
        (self.invoke)(payload.to_string()).await
    }
}
