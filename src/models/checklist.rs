use serde::Serialize;

/// A single row of the quality-check form: what is checked and its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    pub name: &'static str,
    /// Free text, shown to the operator but never parsed.
    pub target_range: &'static str,
}

/// Display order is definition order.
const ITEMS: [ChecklistItem; 9] = [
    ChecklistItem {
        name: "ความเร็วที่ใช้ในการเดินเครื่อง",
        target_range: "30 - 60 รอบ/นาที",
    },
    ChecklistItem {
        name: "ตรวจสอบอุณหภูมิ Vertical Sealing",
        target_range: "120-210 °C",
    },
    ChecklistItem {
        name: "ตรวจสอบอุณหภูมิ Upper Inner",
        target_range: "90-155 °C",
    },
    ChecklistItem {
        name: "ตรวจสอบอุณหภูมิ Lower Inner",
        target_range: "75-155 °C",
    },
    ChecklistItem {
        name: "ตรวจสอบอุณหภูมิ Upper Outer",
        target_range: "90-155 °C",
    },
    ChecklistItem {
        name: "ตรวจสอบอุณหภูมิ Lower Outer",
        target_range: "75-155 °C",
    },
    ChecklistItem {
        name: "ตรวจสอบอุณหภูมิ KR Carousel",
        target_range: "60-200 °C",
    },
    ChecklistItem {
        name: "ตรวจสอบอุณหภูมิ KR hot top plate",
        target_range: "85-180 °C",
    },
    ChecklistItem {
        name: "ตรวจสอบอุณหภูมิ KR hot bottom plate",
        target_range: "60-140 °C",
    },
];

/// Compiled-in registry of check items. Immutable for a deployment.
pub struct ChecklistCatalog;

impl ChecklistCatalog {
    pub fn items() -> &'static [ChecklistItem] {
        &ITEMS
    }

    pub fn find(name: &str) -> Option<&'static ChecklistItem> {
        ITEMS.iter().find(|it| it.name == name)
    }

    /// Resolve a CLI token: 1-based position ("2") or the exact item name.
    pub fn resolve(token: &str) -> Option<&'static ChecklistItem> {
        let token = token.trim();
        if let Ok(pos) = token.parse::<usize>() {
            return pos.checked_sub(1).and_then(|i| ITEMS.get(i));
        }
        Self::find(token)
    }
}
