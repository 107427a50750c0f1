//! 检测结果累积工具
use rustc_hash::FxHashSet;

use crate::rule::Detection;

/// 有序去重的检测结果集合
/// 顺序为首次命中顺序，(label, detail) 相同的重复命中为空操作
#[derive(Debug, Default)]
pub struct DetectionUpdater {
    ordered: Vec<Detection>,
    seen: FxHashSet<Detection>,
}

impl DetectionUpdater {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加检测结果，返回是否为新结果
    pub fn update(&mut self, label: &str, detail: String) -> bool {
        let detection = Detection::new(label, detail);
        if self.seen.contains(&detection) {
            return false;
        }
        self.seen.insert(detection.clone());
        self.ordered.push(detection);
        true
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn into_detections(self) -> Vec<Detection> {
        self.ordered
    }
}
