use serde::{Deserialize, Serialize};

/// Default key of the pending-task list
pub const DEFAULT_TASK_QUEUE_KEY: &str = "queue:task";

/// Default key of the dead-letter list
pub const DEFAULT_FAIL_QUEUE_KEY: &str = "queue:fail";

/// Queue key configuration
///
/// Both lists live in the store's namespace; the queue only holds their keys,
/// never their storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueConfig {
    pub task_queue_key: String,
    pub fail_queue_key: String,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            task_queue_key: DEFAULT_TASK_QUEUE_KEY.to_string(),
            fail_queue_key: DEFAULT_FAIL_QUEUE_KEY.to_string(),
        }
    }
}

impl QueueConfig {
    /// Validate queue key configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.task_queue_key.is_empty() {
            return Err(anyhow::anyhow!("任务队列键不能为空"));
        }

        if self.fail_queue_key.is_empty() {
            return Err(anyhow::anyhow!("失败队列键不能为空"));
        }

        if self.task_queue_key == self.fail_queue_key {
            return Err(anyhow::anyhow!("任务队列键与失败队列键不能相同"));
        }

        Ok(())
    }
}

/// Redis connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    pub host: String,
    pub port: u16,
    pub database: i64,
    pub password: Option<String>,
    pub connection_timeout_seconds: u64,
    pub max_retry_attempts: u32,
    pub retry_delay_seconds: u64,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 6379,
            database: 0,
            password: None,
            connection_timeout_seconds: 30,
            max_retry_attempts: 3,
            retry_delay_seconds: 1,
        }
    }
}

impl RedisConfig {
    /// Validate Redis configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.host.is_empty() {
            return Err(anyhow::anyhow!("Redis主机地址不能为空"));
        }

        if self.port == 0 {
            return Err(anyhow::anyhow!("Redis端口必须大于0"));
        }

        if self.database < 0 {
            return Err(anyhow::anyhow!("Redis数据库索引不能为负数"));
        }

        if self.connection_timeout_seconds == 0 {
            return Err(anyhow::anyhow!("Redis连接超时时间必须大于0"));
        }

        if self.max_retry_attempts == 0 {
            return Err(anyhow::anyhow!("Redis最大重试次数必须大于0"));
        }

        if self.retry_delay_seconds == 0 {
            return Err(anyhow::anyhow!("Redis重试延迟时间必须大于0"));
        }

        Ok(())
    }

    /// Build Redis connection URL
    pub fn build_url(&self) -> String {
        let auth = if let Some(password) = &self.password {
            format!(":{password}@")
        } else {
            String::new()
        };
        format!(
            "redis://{}{}:{}/{}",
            auth, self.host, self.port, self.database
        )
    }
}
