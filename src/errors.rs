use thiserror::Error;

/// 队列统一错误类型
///
/// 除空队列以外的所有失败都归入这五类。即发即忘投递与轮询循环内部
/// 只把它们写进日志能力（参见 `QueueLog`），`try_deliver` 则原样返回。
#[derive(Debug, Error)]
pub enum QueueError {
    /// 消息缺少分隔符，无法还原类型标签
    #[error("消息格式错误: {0}")]
    Format(String),
    /// 类型标签没有登记对应的处理器
    #[error("类型标签 {tag} 未注册处理器")]
    NoHandler { tag: String },
    /// 负载的 JSON 序列化或反序列化失败
    #[error("负载序列化错误: {0}")]
    Serialization(String),
    /// 处理器返回业务失败
    #[error("处理器执行失败: {0}")]
    Handler(String),
    /// 列表存储的传输或操作错误（空队列不属于错误）
    #[error("列表存储错误: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, QueueError>;

impl QueueError {
    /// 该错误是否将原始消息送入失败队列
    ///
    /// 格式错误与未注册标签直接丢弃消息，不进失败队列。
    pub fn is_dead_letter(&self) -> bool {
        matches!(
            self,
            QueueError::Serialization(_) | QueueError::Handler(_)
        )
    }
}

impl From<serde_json::Error> for QueueError {
    fn from(err: serde_json::Error) -> Self {
        QueueError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for QueueError {
    fn from(err: anyhow::Error) -> Self {
        QueueError::Handler(err.to_string())
    }
}
