use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::ListStore;
use crate::errors::Result;

/// 内存列表存储实现
///
/// 每个键对应一个双端队列，整体放在一把异步锁后面。行为与远端列表存储
/// 一致，适用于测试与嵌入式部署场景。
#[derive(Debug, Default)]
pub struct InMemoryListStore {
    lists: Mutex<HashMap<String, VecDeque<String>>>,
}

impl InMemoryListStore {
    /// 创建空的内存列表存储
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ListStore for InMemoryListStore {
    async fn push_left(&self, key: &str, value: &str) -> Result<()> {
        let mut lists = self.lists.lock().await;
        lists
            .entry(key.to_string())
            .or_default()
            .push_front(value.to_string());
        Ok(())
    }

    async fn pop_right(&self, key: &str) -> Result<Option<String>> {
        let mut lists = self.lists.lock().await;
        Ok(lists.get_mut(key).and_then(|list| list.pop_back()))
    }

    async fn len(&self, key: &str) -> Result<usize> {
        let lists = self.lists.lock().await;
        Ok(lists.get(key).map_or(0, |list| list.len()))
    }
}
