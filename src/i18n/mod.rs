//! Localized UI text.
//!
//! Four languages are supported. Every [`TextKey`] has a translation in every
//! [`Language`]; [`tr`] never falls back.

use serde::{Deserialize, Serialize};

use crate::clipboard::{ClipboardError, ClipboardOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    SimplifiedChinese,
    TraditionalChinese,
    Japanese,
    #[default]
    English,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[
            Language::SimplifiedChinese,
            Language::TraditionalChinese,
            Language::Japanese,
            Language::English,
        ]
    }

    /// Name of the language in that language, as shown in the Language menu
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::SimplifiedChinese => "简体中文",
            Language::TraditionalChinese => "繁體中文",
            Language::Japanese => "日本語",
            Language::English => "English",
        }
    }

    /// Whether rendering this language needs a CJK-capable font
    pub fn needs_cjk_font(&self) -> bool {
        !matches!(self, Language::English)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    Title,
    Copy,
    Paste,
    Clear,
    Help,
    Language,
    HelpText,
    Shortcuts,
    SelectWarning,
    RecordWarning,
    StaleEntryWarning,
    ObjectWarning,
    Copied,
    Pasted,
    Cleared,
    Outliner,
    ClipboardEntries,
    ClipboardEmpty,
    ConfigReset,
    Ok,
}

impl TextKey {
    #[allow(dead_code)]
    pub fn all() -> &'static [TextKey] {
        &[
            TextKey::Title,
            TextKey::Copy,
            TextKey::Paste,
            TextKey::Clear,
            TextKey::Help,
            TextKey::Language,
            TextKey::HelpText,
            TextKey::Shortcuts,
            TextKey::SelectWarning,
            TextKey::RecordWarning,
            TextKey::StaleEntryWarning,
            TextKey::ObjectWarning,
            TextKey::Copied,
            TextKey::Pasted,
            TextKey::Cleared,
            TextKey::Outliner,
            TextKey::ClipboardEntries,
            TextKey::ClipboardEmpty,
            TextKey::ConfigReset,
            TextKey::Ok,
        ]
    }

    pub fn for_outcome(outcome: &ClipboardOutcome) -> TextKey {
        match outcome {
            ClipboardOutcome::Copied { .. } => TextKey::Copied,
            ClipboardOutcome::Pasted { .. } => TextKey::Pasted,
            ClipboardOutcome::Cleared => TextKey::Cleared,
        }
    }

    pub fn for_error(error: &ClipboardError) -> TextKey {
        match error {
            ClipboardError::EmptySelection => TextKey::SelectWarning,
            ClipboardError::NoRecordsSelected => TextKey::RecordWarning,
            ClipboardError::InvalidIndex { .. } => TextKey::StaleEntryWarning,
            ClipboardError::ObjectNotFound(_) => TextKey::ObjectWarning,
        }
    }
}

/// Translated text for `key`
pub fn tr(language: Language, key: TextKey) -> &'static str {
    match language {
        Language::SimplifiedChinese => simplified_chinese(key),
        Language::TraditionalChinese => traditional_chinese(key),
        Language::Japanese => japanese(key),
        Language::English => english(key),
    }
}

fn simplified_chinese(key: TextKey) -> &'static str {
    match key {
        TextKey::Title => "剪贴板插件",
        TextKey::Copy => "复制变换属性",
        TextKey::Paste => "粘贴变换属性",
        TextKey::Clear => "清理剪贴板",
        TextKey::Help => "帮助",
        TextKey::Language => "语言",
        TextKey::HelpText => "这是一个剪贴板插件，允许您复制和粘贴选定对象的变换属性。",
        TextKey::Shortcuts => "快捷键",
        TextKey::SelectWarning => "请选择一个物体",
        TextKey::RecordWarning => "请选择剪贴板中的记录",
        TextKey::StaleEntryWarning => "所选剪贴板记录已失效，请重新选择",
        TextKey::ObjectWarning => "场景中找不到所选物体",
        TextKey::Copied => "变换属性已复制到剪贴板",
        TextKey::Pasted => "变换属性已从剪贴板粘贴",
        TextKey::Cleared => "剪贴板已清空",
        TextKey::Outliner => "场景物体",
        TextKey::ClipboardEntries => "剪贴板记录",
        TextKey::ClipboardEmpty => "剪贴板为空",
        TextKey::ConfigReset => "配置文件无法读取，已恢复默认设置。",
        TextKey::Ok => "确定",
    }
}

fn traditional_chinese(key: TextKey) -> &'static str {
    match key {
        TextKey::Title => "剪貼板插件",
        TextKey::Copy => "複製變換屬性",
        TextKey::Paste => "粘貼變換屬性",
        TextKey::Clear => "清理剪貼板",
        TextKey::Help => "幫助",
        TextKey::Language => "語言",
        TextKey::HelpText => "這是一個剪貼板插件，允許您複製和粘貼選定對象的變換屬性。",
        TextKey::Shortcuts => "快捷鍵",
        TextKey::SelectWarning => "請選擇一個物體",
        TextKey::RecordWarning => "請選擇剪貼板中的記錄",
        TextKey::StaleEntryWarning => "所選剪貼板記錄已失效，請重新選擇",
        TextKey::ObjectWarning => "場景中找不到所選物體",
        TextKey::Copied => "變換屬性已複製到剪貼板",
        TextKey::Pasted => "變換屬性已從剪貼板粘貼",
        TextKey::Cleared => "剪貼板已清空",
        TextKey::Outliner => "場景物體",
        TextKey::ClipboardEntries => "剪貼板記錄",
        TextKey::ClipboardEmpty => "剪貼板為空",
        TextKey::ConfigReset => "配置文件無法讀取，已恢復默認設置。",
        TextKey::Ok => "確定",
    }
}

fn japanese(key: TextKey) -> &'static str {
    match key {
        TextKey::Title => "クリップボードプラグイン",
        TextKey::Copy => "変換属性をコピー",
        TextKey::Paste => "変換属性を貼り付け",
        TextKey::Clear => "クリップボードをクリア",
        TextKey::Help => "ヘルプ",
        TextKey::Language => "言語",
        TextKey::HelpText => {
            "これはクリップボードプラグインで、選択したオブジェクトの変換属性をコピーおよび貼り付けできます。"
        }
        TextKey::Shortcuts => "ショートカット",
        TextKey::SelectWarning => "オブジェクトを選択してください",
        TextKey::RecordWarning => "クリップボードの記録を選択してください",
        TextKey::StaleEntryWarning => "選択したクリップボードの記録は無効です。選択し直してください",
        TextKey::ObjectWarning => "選択したオブジェクトがシーンに見つかりません",
        TextKey::Copied => "変換属性がクリップボードにコピーされました",
        TextKey::Pasted => "変換属性がクリップボードから貼り付けられました",
        TextKey::Cleared => "クリップボードがクリアされました",
        TextKey::Outliner => "シーンオブジェクト",
        TextKey::ClipboardEntries => "クリップボードの記録",
        TextKey::ClipboardEmpty => "クリップボードは空です",
        TextKey::ConfigReset => "設定ファイルを読み込めなかったため、既定の設定に戻しました。",
        TextKey::Ok => "OK",
    }
}

fn english(key: TextKey) -> &'static str {
    match key {
        TextKey::Title => "Clipboard Plugin",
        TextKey::Copy => "Copy Transform Attributes",
        TextKey::Paste => "Paste Transform Attributes",
        TextKey::Clear => "Clear Clipboard",
        TextKey::Help => "Help",
        TextKey::Language => "Language",
        TextKey::HelpText => {
            "This is a clipboard plugin that allows you to copy and paste the transform attributes of selected objects."
        }
        TextKey::Shortcuts => "Shortcuts",
        TextKey::SelectWarning => "Please select an object",
        TextKey::RecordWarning => "Please select records from the clipboard",
        TextKey::StaleEntryWarning => "The selected clipboard records no longer exist, please select again",
        TextKey::ObjectWarning => "The selected object could not be found in the scene",
        TextKey::Copied => "Transform attributes copied to clipboard",
        TextKey::Pasted => "Transform attributes pasted from clipboard",
        TextKey::Cleared => "Clipboard cleared",
        TextKey::Outliner => "Scene Objects",
        TextKey::ClipboardEntries => "Clipboard Records",
        TextKey::ClipboardEmpty => "Clipboard is empty",
        TextKey::ConfigReset => "The configuration file could not be read and was reset to defaults.",
        TextKey::Ok => "OK",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_translated_in_every_language() {
        for language in Language::all() {
            for key in TextKey::all() {
                assert!(
                    !tr(*language, *key).is_empty(),
                    "{:?} missing {:?}",
                    language,
                    key
                );
            }
        }
    }

    #[test]
    fn test_languages_differ() {
        assert_ne!(
            tr(Language::English, TextKey::Copy),
            tr(Language::Japanese, TextKey::Copy)
        );
        assert_ne!(
            tr(Language::SimplifiedChinese, TextKey::Copy),
            tr(Language::TraditionalChinese, TextKey::Copy)
        );
    }

    #[test]
    fn test_error_keys_are_distinct() {
        let keys = [
            TextKey::for_error(&ClipboardError::EmptySelection),
            TextKey::for_error(&ClipboardError::NoRecordsSelected),
            TextKey::for_error(&ClipboardError::InvalidIndex { index: 0, len: 0 }),
            TextKey::for_error(&ClipboardError::ObjectNotFound("A".to_string())),
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_outcome_keys() {
        assert_eq!(
            TextKey::for_outcome(&ClipboardOutcome::Cleared),
            TextKey::Cleared
        );
        assert_eq!(
            TextKey::for_outcome(&ClipboardOutcome::Pasted { targets: 1 }),
            TextKey::Pasted
        );
    }

    #[test]
    fn test_language_serialization() {
        let json = serde_json::to_string(&Language::Japanese).unwrap();
        let parsed: Language = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Language::Japanese);
    }
}
