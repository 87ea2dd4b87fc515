//! Memory usage estimate shown in the HUD.
//!
//! Best effort: the host's resident set size when available, otherwise the
//! size of the packed cell buffer.

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// A host-level memory metric, if the platform provides one.
pub trait HeapMetric {
    fn used_bytes(&self) -> Option<u64>;
}

/// Resident set size of this process (Linux `/proc/self/status`).
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessHeap;

impl HeapMetric for ProcessHeap {
    #[cfg(target_os = "linux")]
    fn used_bytes(&self) -> Option<u64> {
        let status = std::fs::read_to_string("/proc/self/status").ok()?;
        parse_vm_rss(&status)
    }

    #[cfg(not(target_os = "linux"))]
    fn used_bytes(&self) -> Option<u64> {
        None
    }
}

/// Always unavailable; forces the buffer-size fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHeapMetric;

impl HeapMetric for NoHeapMetric {
    fn used_bytes(&self) -> Option<u64> {
        None
    }
}

/// Extract `VmRSS` (reported in kB) as bytes.
pub fn parse_vm_rss(status: &str) -> Option<u64> {
    let line = status.lines().find(|l| l.starts_with("VmRSS:"))?;
    let kb: u64 = line
        .trim_start_matches("VmRSS:")
        .split_whitespace()
        .next()?
        .parse()
        .ok()?;
    Some(kb * 1024)
}

pub fn format_mb(bytes: u64) -> String {
    format!("Memory: {:.2} MB", bytes as f64 / BYTES_PER_MB)
}

#[derive(Debug, Clone, Default)]
pub struct MemoryReporter<H = ProcessHeap> {
    metric: H,
}

impl<H: HeapMetric> MemoryReporter<H> {
    pub fn new(metric: H) -> Self {
        Self { metric }
    }

    pub fn report(&self, buffer: &[u8]) -> String {
        let bytes = self
            .metric
            .used_bytes()
            .unwrap_or(buffer.len() as u64);
        format_mb(bytes)
    }
}
