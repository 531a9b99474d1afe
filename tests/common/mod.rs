//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use serde_json::json;
use tempfile::TempDir;

use manual_search::Manual;

/// Builder for creating a manuals directory with index JSON files
pub struct ManualsDirBuilder {
    temp_dir: TempDir,
}

impl ManualsDirBuilder {
    /// Create a new builder with an empty manuals directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the manuals directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a well-formed index file for `manual` with the given items
    pub fn with_index(self, manual: Manual, items: &[ItemBuilder]) -> Self {
        let body = json!({ "items": items.iter().map(ItemBuilder::to_value).collect::<Vec<_>>() });
        self.with_raw_index(manual.index_file(), &body.to_string())
    }

    /// Add an index file with arbitrary (possibly malformed) content
    pub fn with_raw_index(self, file_name: &str, content: &str) -> Self {
        let path = self.temp_dir.path().join(file_name);
        fs::write(path, content).expect("Failed to write index file");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

/// Builder for one index item in test JSON
pub struct ItemBuilder {
    part: String,
    chapter: Option<String>,
    section: Option<String>,
    page: Option<u32>,
    text: Option<String>,
}

impl ItemBuilder {
    pub fn new(part: &str) -> Self {
        Self { part: part.to_string(), chapter: None, section: None, page: None, text: None }
    }

    pub fn chapter(mut self, chapter: &str) -> Self {
        self.chapter = Some(chapter.to_string());
        self
    }

    pub fn section(mut self, section: &str) -> Self {
        self.section = Some(section.to_string());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn to_value(&self) -> serde_json::Value {
        let mut value = json!({ "part": self.part });
        let map = value.as_object_mut().unwrap();
        if let Some(chapter) = &self.chapter {
            map.insert("chapter".to_string(), json!(chapter));
        }
        if let Some(section) = &self.section {
            map.insert("section".to_string(), json!(section));
        }
        if let Some(page) = self.page {
            map.insert("page".to_string(), json!(page));
        }
        if let Some(text) = &self.text {
            map.insert("text".to_string(), json!(text));
        }
        value
    }
}

/// A directory with all three manuals populated, resembling real index data
pub fn realistic_manuals_dir() -> TempDir {
    ManualsDirBuilder::new()
        .with_index(
            Manual::Kenchiku,
            &[
                ItemBuilder::new("建築編")
                    .chapter("第3章")
                    .section("コンクリート工事")
                    .page(31)
                    .text("コンクリートの打込みは、材料の分離を生じさせないように行う。"),
                ItemBuilder::new("建築編")
                    .chapter("第4章")
                    .section("鉄筋工事")
                    .page(52)
                    .text("鉄筋の加工及び組立ては、設計図書に従って行う。"),
            ],
        )
        .with_index(
            Manual::Denki,
            &[ItemBuilder::new("電気編")
                .chapter("第2章")
                .section("電力設備")
                .page(42)
                .text("屋内配線は、金属管配線又はケーブル配線とする。")],
        )
        .with_index(
            Manual::Kikai,
            &[ItemBuilder::new("機械編")
                .chapter("第5章")
                .section("ポンプ設備")
                .page(77)
                .text("ポンプの据付けは、水平に設置し振動を抑える。")],
        )
        .build()
}
