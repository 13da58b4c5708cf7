use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::Client;
use tokio::time::sleep;
use tracing::{debug, error, warn};

use super::ListStore;
use crate::config::RedisConfig;
use crate::errors::{QueueError, Result};

/// Redis 列表存储实现
///
/// 基于 `redis::aio::ConnectionManager`，断线后由其自动重连；
/// `push_left`/`pop_right`/`len` 分别对应 LPUSH/RPOP/LLEN。
/// 句柄可被多个调用方并发使用。
pub struct RedisListStore {
    manager: ConnectionManager,
}

impl RedisListStore {
    /// 按配置建立连接，带初始连接重试与 PING 探活
    pub async fn with_config(config: RedisConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| QueueError::Store(format!("Invalid Redis config: {e}")))?;
        Self::connect_with_retry(
            &config.build_url(),
            config.max_retry_attempts,
            Duration::from_secs(config.retry_delay_seconds),
        )
        .await
    }

    /// 直接用连接 URL 建立连接，重试参数取默认配置
    pub async fn from_url(url: &str) -> Result<Self> {
        let defaults = RedisConfig::default();
        Self::connect_with_retry(
            url,
            defaults.max_retry_attempts,
            Duration::from_secs(defaults.retry_delay_seconds),
        )
        .await
    }

    async fn connect_with_retry(
        url: &str,
        max_retry_attempts: u32,
        retry_delay: Duration,
    ) -> Result<Self> {
        let client = Client::open(url)
            .map_err(|e| QueueError::Store(format!("Failed to create Redis client: {e}")))?;

        let mut last_error = None;
        for attempt in 0..max_retry_attempts {
            match ConnectionManager::new(client.clone()).await {
                Ok(manager) => {
                    if attempt > 0 {
                        debug!(
                            "Successfully connected to Redis after {} attempts",
                            attempt + 1
                        );
                    }
                    let store = Self { manager };
                    store.test_connection().await?;
                    debug!("Redis connection test successful");
                    return Ok(store);
                }
                Err(e) => {
                    last_error = Some(e);
                    if attempt < max_retry_attempts - 1 {
                        warn!(
                            "Failed to connect to Redis (attempt {}/{}): {}. Retrying in {}s...",
                            attempt + 1,
                            max_retry_attempts,
                            last_error.as_ref().unwrap(),
                            retry_delay.as_secs()
                        );
                        sleep(retry_delay).await;
                    }
                }
            }
        }

        let error_msg = format!(
            "Failed to connect to Redis after {} attempts. Last error: {}",
            max_retry_attempts,
            last_error.map_or("Unknown".to_string(), |e| e.to_string())
        );
        error!("{}", error_msg);
        Err(QueueError::Store(error_msg))
    }

    async fn test_connection(&self) -> Result<()> {
        let mut cmd = redis::cmd("PING");
        let response: String = self.execute_command(&mut cmd).await?;
        if response == "PONG" {
            Ok(())
        } else {
            Err(QueueError::Store(format!(
                "Unexpected PING response: {response}"
            )))
        }
    }

    async fn execute_command<T: redis::FromRedisValue>(&self, cmd: &mut redis::Cmd) -> Result<T> {
        let mut conn = self.manager.clone();
        cmd.query_async(&mut conn)
            .await
            .map_err(|e| QueueError::Store(format!("Redis command failed: {e}")))
    }
}

#[async_trait]
impl ListStore for RedisListStore {
    async fn push_left(&self, key: &str, value: &str) -> Result<()> {
        let mut cmd = redis::cmd("LPUSH");
        cmd.arg(key).arg(value);
        let _: i64 = self.execute_command(&mut cmd).await?;
        Ok(())
    }

    async fn pop_right(&self, key: &str) -> Result<Option<String>> {
        let mut cmd = redis::cmd("RPOP");
        cmd.arg(key);
        let value: Option<String> = self.execute_command(&mut cmd).await?;
        Ok(value)
    }

    async fn len(&self, key: &str) -> Result<usize> {
        let mut cmd = redis::cmd("LLEN");
        cmd.arg(key);
        let size: i64 = self.execute_command(&mut cmd).await?;
        Ok(size as usize)
    }
}
