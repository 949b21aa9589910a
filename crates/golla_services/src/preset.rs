//! Preset records and the seeded defaults

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named, ordered list of items to pick from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub id: String,
    pub name: String,
    pub items: Vec<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_default: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Preset {
    fn seeded(id: &str, name: &str, items: &[&str]) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            items: items.iter().map(|s| (*s).to_owned()).collect(),
            is_default: true,
        }
    }
}

/// The two independent preset collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Item lists for the roulette and general picks.
    General,
    /// Member lists for team splitting.
    TeamGroup,
}

impl Namespace {
    pub const ALL: [Namespace; 2] = [Namespace::General, Namespace::TeamGroup];

    /// Prefix of identifiers minted for custom entries.
    pub fn id_prefix(self) -> &'static str {
        match self {
            Namespace::General => "custom",
            Namespace::TeamGroup => "team",
        }
    }

    /// Seeded entries, listed ahead of anything stored.
    pub fn defaults(self) -> &'static [Preset] {
        match self {
            Namespace::General => DEFAULT_PRESETS.as_slice(),
            Namespace::TeamGroup => DEFAULT_TEAM_GROUPS.as_slice(),
        }
    }

    pub fn is_default_id(self, id: &str) -> bool {
        self.defaults().iter().any(|p| p.id == id)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Namespace::General => f.write_str("presets"),
            Namespace::TeamGroup => f.write_str("team-groups"),
        }
    }
}

static DEFAULT_PRESETS: Lazy<Vec<Preset>> = Lazy::new(|| {
    vec![
        Preset::seeded(
            "default-lunch",
            "점심 메뉴",
            &[
                "김치찌개", "된장찌개", "비빔밥", "불고기", "치킨", "피자", "파스타", "초밥",
                "떡볶이", "냉면",
            ],
        ),
        Preset::seeded(
            "default-penalty",
            "벌칙 게임",
            &[
                "노래 부르기", "춤추기", "개인기", "양심고백", "러브샷", "물 벌컵", "사투리 연기",
                "10초 눈싸움",
            ],
        ),
        Preset::seeded(
            "default-cafe",
            "카페 메뉴",
            &[
                "아메리카노", "카페라떼", "바닐라라떼", "카푸치노", "아이스티", "말차라떼",
                "카라멜 마끼아또", "스무디",
            ],
        ),
    ]
});

static DEFAULT_TEAM_GROUPS: Lazy<Vec<Preset>> = Lazy::new(|| {
    vec![Preset::seeded(
        "default-team-sample",
        "예시 그룹",
        &["민준", "서연", "도윤", "하은", "시우", "지유"],
    )]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_flagged_and_distinct() {
        for ns in Namespace::ALL {
            assert!(!ns.defaults().is_empty());
            for preset in ns.defaults() {
                assert!(preset.is_default);
                assert!(!preset.items.is_empty());
                assert!(ns.is_default_id(&preset.id));
            }
        }
        assert!(!Namespace::General.is_default_id("default-team-sample"));
    }

    #[test]
    fn test_serialized_shape() {
        let custom = Preset {
            id: "custom-1".into(),
            name: "Lunch".into(),
            items: vec!["A".into(), "B".into()],
            is_default: false,
        };
        let json = serde_json::to_value(&custom).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "custom-1", "name": "Lunch", "items": ["A", "B"] })
        );

        let flagged: Preset = serde_json::from_str(
            r#"{ "id": "x", "name": "y", "items": [], "isDefault": true }"#,
        )
        .unwrap();
        assert!(flagged.is_default);
    }
}
