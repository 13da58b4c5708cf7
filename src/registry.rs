use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::message::TaskDefinition;

/// 处理器注册表
///
/// 类型标签到任务定义的映射，注册与查找都经过同一把互斥锁，
/// 因此循环运行期间的注册是内存安全的（但一条刚到达的消息落在
/// 注册前还是注册后是不确定的）。重复注册同一标签时静默覆盖。
#[derive(Default)]
pub(crate) struct HandlerRegistry {
    definitions: Mutex<HashMap<String, Arc<TaskDefinition>>>,
}

impl HandlerRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// 登记或覆盖一个类型标签的任务定义
    ///
    /// 不校验标签内容，空标签同样生效；覆盖不产生任何通知。
    pub(crate) fn register(&self, tag: impl Into<String>, definition: TaskDefinition) {
        if let Ok(mut definitions) = self.definitions.lock() {
            definitions.insert(tag.into(), Arc::new(definition));
        }
    }

    /// 该标签是否已注册
    pub(crate) fn is_registered(&self, tag: &str) -> bool {
        self.definitions
            .lock()
            .map(|definitions| definitions.contains_key(tag))
            .unwrap_or(false)
    }

    /// 查找标签对应的任务定义
    pub(crate) fn get(&self, tag: &str) -> Option<Arc<TaskDefinition>> {
        self.definitions
            .lock()
            .ok()
            .and_then(|definitions| definitions.get(tag).cloned())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use serde::{Deserialize, Serialize};

    use super::*;
    use crate::message::{TaskHandler, TaskMessage};

    #[derive(Serialize, Deserialize)]
    struct Ping;

    impl TaskMessage for Ping {
        const TYPE_TAG: &'static str = "ping";
    }

    struct MarkerHandler {
        marker: usize,
        seen: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl TaskHandler for MarkerHandler {
        type Message = Ping;

        async fn handle(&self, _message: Ping) -> anyhow::Result<()> {
            self.seen.store(self.marker, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_register_and_lookup() {
        let registry = HandlerRegistry::new();
        assert!(!registry.is_registered("ping"));
        assert!(registry.get("ping").is_none());

        let seen = Arc::new(AtomicUsize::new(0));
        registry.register(
            "ping",
            TaskDefinition::new(MarkerHandler {
                marker: 1,
                seen: Arc::clone(&seen),
            }),
        );

        assert!(registry.is_registered("ping"));
        registry.get("ping").unwrap().invoke("null").await.unwrap();
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_duplicate_registration_last_wins() {
        let registry = HandlerRegistry::new();
        let seen = Arc::new(AtomicUsize::new(0));

        registry.register(
            "ping",
            TaskDefinition::new(MarkerHandler {
                marker: 1,
                seen: Arc::clone(&seen),
            }),
        );
        registry.register(
            "ping",
            TaskDefinition::new(MarkerHandler {
                marker: 2,
                seen: Arc::clone(&seen),
            }),
        );

        registry.get("ping").unwrap().invoke("null").await.unwrap();
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_empty_tag_is_accepted() {
        let registry = HandlerRegistry::new();
        let seen = Arc::new(AtomicUsize::new(0));
        registry.register(
            "",
            TaskDefinition::new(MarkerHandler { marker: 1, seen }),
        );
        assert!(registry.is_registered(""));
    }
}
