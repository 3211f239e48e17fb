use serde::Serialize;

/// 読了状況の集計。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LibraryStatistics {
    pub total: usize,
    pub read_count: usize,
    pub unread_count: usize,
    pub read_percentage: f64,
    pub unread_percentage: f64,
}

impl LibraryStatistics {
    /// 0冊のときは割合も0とする（ゼロ除算しない）。read_countはtotalで頭打ち。
    pub fn from_counts(total: usize, read_count: usize) -> Self {
        let read_count = read_count.min(total);
        if total == 0 {
            return Self {
                total: 0,
                read_count: 0,
                unread_count: 0,
                read_percentage: 0.0,
                unread_percentage: 0.0,
            };
        }
        let read_percentage = 100.0 * read_count as f64 / total as f64;
        Self {
            total,
            read_count,
            unread_count: total - read_count,
            read_percentage,
            unread_percentage: 100.0 - read_percentage,
        }
    }
}
