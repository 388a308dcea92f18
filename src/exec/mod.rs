//! 顺序执行包装器。

/// 在调用线程上同步调用给定的一元计算，并把结果交给委托回调；
/// 回调返回后本次调用才返回。不引入并发、队列或自有状态。
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialExecutor;

impl SequentialExecutor {
    pub fn new() -> Self {
        SequentialExecutor
    }

    /// 调用 `func(state)` 并把返回值传给 `delegate`。
    pub fn execute<S, R>(
        &mut self,
        func: impl FnOnce(&mut S) -> R,
        state: &mut S,
        delegate: impl FnOnce(R),
    ) {
        delegate(func(state));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn executes_and_forwards_result() {
        let mut exec = SequentialExecutor::new();
        let mut buf = vec![1u32, 2, 3];
        let mut got = None;
        exec.execute(|v: &mut Vec<u32>| v.iter().sum::<u32>(), &mut buf, |r| got = Some(r));
        assert_eq!(got, Some(6));
    }

    #[test]
    fn delegate_runs_before_return() {
        let mut exec = SequentialExecutor::new();
        let mut state = 0u8;
        let mut order = Vec::new();
        exec.execute(
            |s: &mut u8| {
                *s += 1;
                *s
            },
            &mut state,
            |r| order.push(r),
        );
        order.push(99);
        assert_eq!(order, vec![1, 99]);
        assert_eq!(state, 1);
    }
}
