//! Built-in emotion profiles.
//!
//! The profiles are fixed system data: they are loaded once on first access
//! and cached for the lifetime of the process. Keyword and reply text is
//! Korean, the language the agent is designed for. Nothing mutates the
//! catalog after initialization.

use std::sync::OnceLock;

use super::model::{EmotionCategory, EmotionProfile};

/// Static storage for the emotion catalog (initialized once).
static EMOTION_PROFILES: OnceLock<Vec<EmotionProfile>> = OnceLock::new();

/// Returns the full emotion catalog, in catalog order.
///
/// The entries are initialized on first access and cached for subsequent
/// calls. Iteration order matches [`EmotionCategory`] declaration order;
/// the classifier relies on this for its first-match tie-break.
pub fn emotion_profiles() -> &'static [EmotionProfile] {
    EMOTION_PROFILES.get_or_init(|| {
        vec![
            EmotionProfile::new(
                EmotionCategory::Sad,
                &[
                    "슬퍼", "우울", "힘들어", "눈물", "외로워", "상처", "아파", "허무", "공허",
                    "서러워",
                ],
                &[
                    "많이 힘들었겠다. 그 감정을 혼자서 버텨온 것 같아.",
                    "지금 마음이 많이 아파 보인다. 그렇게 느껴도 괜찮아.",
                ],
                "#4A6FA5",
            ),
            EmotionProfile::new(
                EmotionCategory::Joy,
                &["기뻐", "행복", "좋아", "신나", "즐거워", "설레", "뿌듯", "재밌어"],
                &[
                    "그 말에서 기분 좋은 에너지가 느껴져.",
                    "요즘 그런 순간이 있다는 게 참 다행이야.",
                ],
                "#FFD166",
            ),
            EmotionProfile::new(
                EmotionCategory::Angry,
                &["화나", "짜증", "열받아", "억울", "분노", "빡쳐"],
                &[
                    "그 상황이면 화날 수밖에 없었을 것 같아.",
                    "참고 넘기기엔 마음이 너무 상했을 것 같아.",
                ],
                "#EF476F",
            ),
            EmotionProfile::new(
                EmotionCategory::Anxiety,
                &["불안", "걱정", "초조", "무서워", "긴장", "조마조마"],
                &[
                    "불안할 때는 모든 게 확실하지 않게 느껴지지.",
                    "지금 많이 긴장하고 있는 것 같아.",
                ],
                "#8E7DBE",
            ),
            EmotionProfile::new(
                EmotionCategory::Lonely,
                &["외로워", "혼자", "쓸쓸", "고독", "허전"],
                &[
                    "혼자라고 느껴질 때 마음이 더 무거워지지.",
                    "누군가 곁에 있었으면 좋겠다는 마음이 느껴져.",
                ],
                "#6C757D",
            ),
            EmotionProfile::new(
                EmotionCategory::Tired,
                &["피곤", "지쳐", "번아웃", "녹초", "탈진"],
                &[
                    "정말 오래 버텨온 것 같아.",
                    "몸도 마음도 쉬고 싶다고 말하는 것 같아.",
                ],
                "#495057",
            ),
            EmotionProfile::new(
                EmotionCategory::Regretful,
                &["후회", "실수", "잘못", "미련", "아쉽다"],
                &[
                    "이미 충분히 스스로를 돌아보고 있는 것 같아.",
                    "그 일 때문에 아직 마음이 많이 남아 있구나.",
                ],
                "#A44A3F",
            ),
            EmotionProfile::new(
                EmotionCategory::Feckless,
                &["무기력", "의욕없어", "귀찮아", "하기싫어", "멍해"],
                &[
                    "아무것도 하고 싶지 않을 만큼 지친 것 같아.",
                    "에너지가 바닥난 느낌이 드는 것 같아.",
                ],
                "#ADB5BD",
            ),
            EmotionProfile::new(
                EmotionCategory::Expectation,
                &["기대", "설렘", "두근", "희망", "앞으로"],
                &[
                    "마음 한편에서 뭔가를 기대하고 있는 것 같아.",
                    "그 설렘이 조심스럽게 느껴져.",
                ],
                "#06D6A0",
            ),
            EmotionProfile::new(
                EmotionCategory::Confused,
                &["혼란", "헷갈려", "모르겠어", "복잡해", "갈등"],
                &[
                    "머릿속이 정리되지 않은 느낌이네.",
                    "지금은 방향이 잘 안 보일 수도 있을 것 같아.",
                ],
                "#B565A7",
            ),
        ]
    })
}

/// Returns the catalog entry for a category.
pub fn profile_for(category: EmotionCategory) -> &'static EmotionProfile {
    emotion_profiles()
        .iter()
        .find(|profile| profile.category == category)
        // Safe to expect: the catalog holds one entry per category.
        .expect("every category has a catalog entry")
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_catalog_has_one_entry_per_category() {
        let profiles = emotion_profiles();
        assert_eq!(profiles.len(), 10, "Expected 10 emotion profiles");

        let mut categories = std::collections::HashSet::new();
        for profile in profiles {
            assert!(
                categories.insert(profile.category),
                "Catalog categories must be unique, found duplicate: {}",
                profile.category
            );
        }
    }

    #[test]
    fn test_catalog_order_matches_category_declaration_order() {
        let catalog_order: Vec<EmotionCategory> =
            emotion_profiles().iter().map(|p| p.category).collect();
        let declaration_order: Vec<EmotionCategory> = EmotionCategory::iter().collect();
        assert_eq!(catalog_order, declaration_order);
    }

    #[test]
    fn test_profiles_have_keywords_and_replies() {
        for profile in emotion_profiles() {
            assert!(
                !profile.keywords.is_empty(),
                "{} should have trigger keywords",
                profile.category
            );
            assert!(
                !profile.replies.is_empty(),
                "{} should have candidate replies",
                profile.category
            );
        }
    }

    #[test]
    fn test_profiles_have_hex_colors() {
        for profile in emotion_profiles() {
            assert!(
                profile.color.starts_with('#') && profile.color.len() == 7,
                "{} color should be #rrggbb, got {}",
                profile.category,
                profile.color
            );
        }
    }

    #[test]
    fn test_profile_for_is_total() {
        for category in EmotionCategory::iter() {
            assert_eq!(profile_for(category).category, category);
        }
    }
}
