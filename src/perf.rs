use std::cell::Cell;
use std::time::Instant;

thread_local! {
    static PERF_DEPTH: Cell<u32> = const { Cell::new(0) };
}

/// 性能统计 Guard：记录 elapsed_ms + 矩阵规模（行 × 列）
///
/// 使用方式：
/// ```ignore
/// let _perf = nurse_shift_feasibility::perf::PerfGuard::new("evaluate_matrix")
///     .with_matrix(rows, columns);
/// // do work...
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
    rows: usize,
    columns: usize,
    depth: u32,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        let depth = PERF_DEPTH.with(|d| {
            let next = d.get().saturating_add(1);
            d.set(next);
            next
        });
        Self {
            op,
            start: Instant::now(),
            rows: 0,
            columns: 0,
            depth,
        }
    }

    /// 记录本次操作处理的矩阵规模
    pub fn with_matrix(mut self, rows: usize, columns: usize) -> Self {
        self.rows = rows;
        self.columns = columns;
        self
    }

    /// 矩阵规模在解析完成后才知道时使用
    pub fn set_matrix(&mut self, rows: usize, columns: usize) {
        self.rows = rows;
        self.columns = columns;
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        let cells = self.rows.saturating_mul(self.columns);

        tracing::info!(
            target: "perf",
            op = self.op,
            elapsed_ms,
            rows = self.rows,
            columns = self.columns,
            cells,
            nested = self.depth > 1,
            "done"
        );

        PERF_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
    }
}
