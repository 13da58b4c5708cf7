//! 有序列表存储抽象及其实现

use async_trait::async_trait;

use crate::errors::Result;

pub mod memory;
pub mod redis;

pub use self::memory::InMemoryListStore;
pub use self::redis::RedisListStore;

/// 远端有序列表存储
///
/// 两条原语构成 FIFO 队列：`push_left` 推入头部，`pop_right` 从尾部弹出，
/// 先推入者先被弹出。空列表弹出返回 `None`，不算错误。实现必须允许多个
/// 调用方并发使用同一个实例。
#[async_trait]
pub trait ListStore: Send + Sync {
    /// 将值推入指定键的列表头部
    async fn push_left(&self, key: &str, value: &str) -> Result<()>;

    /// 从指定键的列表尾部弹出一个值，列表为空时返回 `None`
    async fn pop_right(&self, key: &str) -> Result<Option<String>>;

    /// 返回指定键的列表长度，仅用于观测，调度路径不依赖它
    async fn len(&self, key: &str) -> Result<usize>;
}
