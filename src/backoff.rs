use std::time::Duration;

/// 空轮询退避状态
///
/// 连续空轮询依次休眠 1 秒、2 秒、0 秒，然后循环；任意一次成功处理将
/// 计数归零。固定三槽轮转，不是指数退避，第三槽的零秒忙重试是约定行为。
#[derive(Debug)]
pub(crate) struct IdleBackoff {
    slot: u64,
}

impl IdleBackoff {
    pub(crate) fn new() -> Self {
        Self { slot: 0 }
    }

    /// 记录一次空轮询，推进槽位并返回本次应休眠的时长
    pub(crate) fn next_delay(&mut self) -> Duration {
        self.slot = (self.slot + 1) % 3;
        Duration::from_secs(self.slot)
    }

    /// 成功处理消息后归零，下一次空轮询重新从 1 秒开始
    pub(crate) fn reset(&mut self) {
        self.slot = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_cycle_is_one_two_zero() {
        let mut backoff = IdleBackoff::new();
        let delays: Vec<u64> = (0..6).map(|_| backoff.next_delay().as_secs()).collect();
        assert_eq!(delays, vec![1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_reset_restarts_cycle_from_one_second() {
        let mut backoff = IdleBackoff::new();
        backoff.next_delay();
        backoff.next_delay();
        assert_eq!(backoff.next_delay().as_secs(), 0);

        backoff.reset();
        assert_eq!(backoff.next_delay().as_secs(), 1);
        assert_eq!(backoff.next_delay().as_secs(), 2);
    }

    #[test]
    fn test_reset_mid_cycle() {
        let mut backoff = IdleBackoff::new();
        assert_eq!(backoff.next_delay().as_secs(), 1);
        backoff.reset();
        assert_eq!(backoff.next_delay().as_secs(), 1);
    }
}
