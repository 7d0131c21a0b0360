//! Translation table for user-facing strings.
//!
//! There is no process-wide "current language". Callers hold a [`Translator`]
//! for the language stored in the registry and pass it to whatever renders
//! text (the menu builder, error messages, the CLI).

use serde::{Deserialize, Serialize};

/// Supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Language {
    #[default]
    En,
    Ko,
    Zh,
    Ja,
    Es,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::En,
        Language::Ko,
        Language::Zh,
        Language::Ja,
        Language::Es,
    ];

    /// Code stored in the settings file.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ko => "ko",
            Language::Zh => "zh",
            Language::Ja => "ja",
            Language::Es => "es",
        }
    }

    /// Name of the language in that language, for pickers.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ko => "한국어",
            Language::Zh => "中文",
            Language::Ja => "日本語",
            Language::Es => "Español",
        }
    }

    /// Parse a language code or locale tag such as `ko`, `ja-JP` or `zh_CN.UTF-8`.
    pub fn from_code(tag: &str) -> Option<Self> {
        let raw = tag.trim();
        let raw = raw.split_once('.').map(|(a, _)| a).unwrap_or(raw);
        let primary = raw
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        Language::ALL.into_iter().find(|l| l.code() == primary)
    }
}

impl From<String> for Language {
    fn from(value: String) -> Self {
        Language::from_code(&value).unwrap_or_default()
    }
}

impl From<Language> for String {
    fn from(value: Language) -> Self {
        value.code().to_string()
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Keys into the translation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    // Menu
    MenuOpenInTerminal,
    MenuSettings,
    MenuRefresh,
    MenuQuit,
    MenuNoPaths,

    // Settings overview
    SettingsTitle,
    SettingsLanguage,
    SettingsSort,
    SettingsSortCustom,
    SettingsSortName,
    SettingsPaths,
    SettingsTerminal,
    SettingsFileManager,

    // Path entries
    PathAlias,
    PathLocation,

    // Messages
    MsgFolderNotFound,
    MsgCannotOpenFolder,
    MsgCannotOpenTerminal,
    MsgPathAdded,
    MsgPathUpdated,
    MsgPathRemoved,
    MsgPathMoved,
    MsgCannotMove,
    MsgAliasRejected,
    MsgAliasNotFound,
    MsgSettingsSaved,
}

impl MessageKey {
    pub const ALL: [MessageKey; 26] = [
        MessageKey::MenuOpenInTerminal,
        MessageKey::MenuSettings,
        MessageKey::MenuRefresh,
        MessageKey::MenuQuit,
        MessageKey::MenuNoPaths,
        MessageKey::SettingsTitle,
        MessageKey::SettingsLanguage,
        MessageKey::SettingsSort,
        MessageKey::SettingsSortCustom,
        MessageKey::SettingsSortName,
        MessageKey::SettingsPaths,
        MessageKey::SettingsTerminal,
        MessageKey::SettingsFileManager,
        MessageKey::PathAlias,
        MessageKey::PathLocation,
        MessageKey::MsgFolderNotFound,
        MessageKey::MsgCannotOpenFolder,
        MessageKey::MsgCannotOpenTerminal,
        MessageKey::MsgPathAdded,
        MessageKey::MsgPathUpdated,
        MessageKey::MsgPathRemoved,
        MessageKey::MsgPathMoved,
        MessageKey::MsgCannotMove,
        MessageKey::MsgAliasRejected,
        MessageKey::MsgAliasNotFound,
        MessageKey::MsgSettingsSaved,
    ];

    /// Stable identifier, returned verbatim when no table has the key.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::MenuOpenInTerminal => "menu_open_in_terminal",
            MessageKey::MenuSettings => "menu_settings",
            MessageKey::MenuRefresh => "menu_refresh",
            MessageKey::MenuQuit => "menu_quit",
            MessageKey::MenuNoPaths => "menu_no_paths",
            MessageKey::SettingsTitle => "settings_title",
            MessageKey::SettingsLanguage => "settings_language",
            MessageKey::SettingsSort => "settings_sort",
            MessageKey::SettingsSortCustom => "settings_sort_custom",
            MessageKey::SettingsSortName => "settings_sort_name",
            MessageKey::SettingsPaths => "settings_paths",
            MessageKey::SettingsTerminal => "settings_terminal",
            MessageKey::SettingsFileManager => "settings_file_manager",
            MessageKey::PathAlias => "path_alias",
            MessageKey::PathLocation => "path_location",
            MessageKey::MsgFolderNotFound => "msg_folder_not_found",
            MessageKey::MsgCannotOpenFolder => "msg_cannot_open_folder",
            MessageKey::MsgCannotOpenTerminal => "msg_cannot_open_terminal",
            MessageKey::MsgPathAdded => "msg_path_added",
            MessageKey::MsgPathUpdated => "msg_path_updated",
            MessageKey::MsgPathRemoved => "msg_path_removed",
            MessageKey::MsgPathMoved => "msg_path_moved",
            MessageKey::MsgCannotMove => "msg_cannot_move",
            MessageKey::MsgAliasRejected => "msg_alias_rejected",
            MessageKey::MsgAliasNotFound => "msg_alias_not_found",
            MessageKey::MsgSettingsSaved => "msg_settings_saved",
        }
    }
}

type Table = &'static [(MessageKey, &'static str)];

const EN: Table = &[
    (MessageKey::MenuOpenInTerminal, "Open in Terminal"),
    (MessageKey::MenuSettings, "Settings..."),
    (MessageKey::MenuRefresh, "Refresh"),
    (MessageKey::MenuQuit, "Quit"),
    (MessageKey::MenuNoPaths, "(No paths configured)"),
    (MessageKey::SettingsTitle, "Baro Settings"),
    (MessageKey::SettingsLanguage, "Language:"),
    (MessageKey::SettingsSort, "Sort:"),
    (MessageKey::SettingsSortCustom, "Custom Order"),
    (MessageKey::SettingsSortName, "By Name"),
    (MessageKey::SettingsPaths, "Path List"),
    (MessageKey::SettingsTerminal, "Terminal:"),
    (MessageKey::SettingsFileManager, "File Manager:"),
    (MessageKey::PathAlias, "Alias:"),
    (MessageKey::PathLocation, "Path:"),
    (MessageKey::MsgFolderNotFound, "Path does not exist: {}"),
    (MessageKey::MsgCannotOpenFolder, "Cannot open folder: {}"),
    (MessageKey::MsgCannotOpenTerminal, "Cannot open terminal: {}"),
    (MessageKey::MsgPathAdded, "Added '{}'"),
    (MessageKey::MsgPathUpdated, "Updated '{}'"),
    (MessageKey::MsgPathRemoved, "Removed '{}'"),
    (MessageKey::MsgPathMoved, "Moved '{}'"),
    (MessageKey::MsgCannotMove, "Cannot move '{}' any further"),
    (MessageKey::MsgAliasRejected, "Alias is empty or already in use: {}"),
    (MessageKey::MsgAliasNotFound, "No path with alias: {}"),
    (MessageKey::MsgSettingsSaved, "Settings saved."),
];

const KO: Table = &[
    (MessageKey::MenuOpenInTerminal, "터미널에서 열기"),
    (MessageKey::MenuSettings, "설정..."),
    (MessageKey::MenuRefresh, "새로고침"),
    (MessageKey::MenuQuit, "종료"),
    (MessageKey::MenuNoPaths, "(경로가 없습니다)"),
    (MessageKey::SettingsTitle, "Baro 설정"),
    (MessageKey::SettingsLanguage, "언어:"),
    (MessageKey::SettingsSort, "정렬:"),
    (MessageKey::SettingsSortCustom, "사용자 정렬순"),
    (MessageKey::SettingsSortName, "이름순"),
    (MessageKey::SettingsPaths, "경로 목록"),
    (MessageKey::SettingsTerminal, "터미널:"),
    (MessageKey::SettingsFileManager, "파일 관리자:"),
    (MessageKey::PathAlias, "별칭:"),
    (MessageKey::PathLocation, "경로:"),
    (MessageKey::MsgFolderNotFound, "경로가 존재하지 않습니다: {}"),
    (MessageKey::MsgCannotOpenFolder, "폴더를 열 수 없습니다: {}"),
    (MessageKey::MsgCannotOpenTerminal, "터미널을 열 수 없습니다: {}"),
    (MessageKey::MsgPathAdded, "'{}' 항목을 추가했습니다"),
    (MessageKey::MsgPathUpdated, "'{}' 항목을 수정했습니다"),
    (MessageKey::MsgPathRemoved, "'{}' 항목을 삭제했습니다"),
    (MessageKey::MsgPathMoved, "'{}' 항목을 이동했습니다"),
    (MessageKey::MsgCannotMove, "'{}' 항목을 더 이상 이동할 수 없습니다"),
    (MessageKey::MsgAliasRejected, "별칭이 비어 있거나 이미 사용 중입니다: {}"),
    (MessageKey::MsgAliasNotFound, "해당 별칭의 경로가 없습니다: {}"),
    (MessageKey::MsgSettingsSaved, "설정을 저장했습니다."),
];

const ZH: Table = &[
    (MessageKey::MenuOpenInTerminal, "在终端中打开"),
    (MessageKey::MenuSettings, "设置..."),
    (MessageKey::MenuRefresh, "刷新"),
    (MessageKey::MenuQuit, "退出"),
    (MessageKey::MenuNoPaths, "(没有配置路径)"),
    (MessageKey::SettingsTitle, "Baro 设置"),
    (MessageKey::SettingsLanguage, "语言:"),
    (MessageKey::SettingsSort, "排序:"),
    (MessageKey::SettingsSortCustom, "自定义顺序"),
    (MessageKey::SettingsSortName, "按名称"),
    (MessageKey::SettingsPaths, "路径列表"),
    (MessageKey::SettingsTerminal, "终端:"),
    (MessageKey::SettingsFileManager, "文件管理器:"),
    (MessageKey::PathAlias, "别名:"),
    (MessageKey::PathLocation, "路径:"),
    (MessageKey::MsgFolderNotFound, "路径不存在: {}"),
    (MessageKey::MsgCannotOpenFolder, "无法打开文件夹: {}"),
    (MessageKey::MsgCannotOpenTerminal, "无法打开终端: {}"),
    (MessageKey::MsgPathAdded, "已添加 '{}'"),
    (MessageKey::MsgPathUpdated, "已更新 '{}'"),
    (MessageKey::MsgPathRemoved, "已删除 '{}'"),
    (MessageKey::MsgPathMoved, "已移动 '{}'"),
    (MessageKey::MsgCannotMove, "无法继续移动 '{}'"),
    (MessageKey::MsgAliasRejected, "别名为空或已被使用: {}"),
    (MessageKey::MsgAliasNotFound, "找不到该别名对应的路径: {}"),
    (MessageKey::MsgSettingsSaved, "设置已保存。"),
];

const JA: Table = &[
    (MessageKey::MenuOpenInTerminal, "ターミナルで開く"),
    (MessageKey::MenuSettings, "設定..."),
    (MessageKey::MenuRefresh, "更新"),
    (MessageKey::MenuQuit, "終了"),
    (MessageKey::MenuNoPaths, "(パスが設定されていません)"),
    (MessageKey::SettingsTitle, "Baro 設定"),
    (MessageKey::SettingsLanguage, "言語:"),
    (MessageKey::SettingsSort, "並び替え:"),
    (MessageKey::SettingsSortCustom, "カスタム順"),
    (MessageKey::SettingsSortName, "名前順"),
    (MessageKey::SettingsPaths, "パスリスト"),
    (MessageKey::SettingsTerminal, "ターミナル:"),
    (MessageKey::SettingsFileManager, "ファイルマネージャー:"),
    (MessageKey::PathAlias, "エイリアス:"),
    (MessageKey::PathLocation, "パス:"),
    (MessageKey::MsgFolderNotFound, "パスが存在しません: {}"),
    (MessageKey::MsgCannotOpenFolder, "フォルダを開けません: {}"),
    (MessageKey::MsgCannotOpenTerminal, "ターミナルを開けません: {}"),
    (MessageKey::MsgPathAdded, "'{}' を追加しました"),
    (MessageKey::MsgPathUpdated, "'{}' を更新しました"),
    (MessageKey::MsgPathRemoved, "'{}' を削除しました"),
    (MessageKey::MsgPathMoved, "'{}' を移動しました"),
    (MessageKey::MsgCannotMove, "'{}' はこれ以上移動できません"),
    (MessageKey::MsgAliasRejected, "エイリアスが空か、既に使用されています: {}"),
    (MessageKey::MsgAliasNotFound, "このエイリアスのパスはありません: {}"),
    (MessageKey::MsgSettingsSaved, "設定を保存しました。"),
];

const ES: Table = &[
    (MessageKey::MenuOpenInTerminal, "Abrir en Terminal"),
    (MessageKey::MenuSettings, "Configuración..."),
    (MessageKey::MenuRefresh, "Actualizar"),
    (MessageKey::MenuQuit, "Salir"),
    (MessageKey::MenuNoPaths, "(No hay rutas configuradas)"),
    (MessageKey::SettingsTitle, "Configuración de Baro"),
    (MessageKey::SettingsLanguage, "Idioma:"),
    (MessageKey::SettingsSort, "Ordenar:"),
    (MessageKey::SettingsSortCustom, "Orden personalizado"),
    (MessageKey::SettingsSortName, "Por nombre"),
    (MessageKey::SettingsPaths, "Lista de rutas"),
    (MessageKey::SettingsTerminal, "Terminal:"),
    (MessageKey::SettingsFileManager, "Gestor de archivos:"),
    (MessageKey::PathAlias, "Alias:"),
    (MessageKey::PathLocation, "Ruta:"),
    (MessageKey::MsgFolderNotFound, "La ruta no existe: {}"),
    (MessageKey::MsgCannotOpenFolder, "No se puede abrir la carpeta: {}"),
    (MessageKey::MsgCannotOpenTerminal, "No se puede abrir el terminal: {}"),
    (MessageKey::MsgPathAdded, "Se añadió '{}'"),
    (MessageKey::MsgPathUpdated, "Se actualizó '{}'"),
    (MessageKey::MsgPathRemoved, "Se eliminó '{}'"),
    (MessageKey::MsgPathMoved, "Se movió '{}'"),
    (MessageKey::MsgCannotMove, "No se puede mover '{}' más"),
    (MessageKey::MsgAliasRejected, "El alias está vacío o ya está en uso: {}"),
    (MessageKey::MsgAliasNotFound, "No hay ninguna ruta con el alias: {}"),
    (MessageKey::MsgSettingsSaved, "Configuración guardada."),
];

fn table(language: Language) -> Table {
    match language {
        Language::En => EN,
        Language::Ko => KO,
        Language::Zh => ZH,
        Language::Ja => JA,
        Language::Es => ES,
    }
}

fn lookup(table: Table, key: MessageKey) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, text)| *text)
}

/// Message lookup bound to one language.
#[derive(Debug, Clone, Copy, Default)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Template for `key`, falling back to English and then to the key name.
    pub fn get(&self, key: MessageKey) -> &'static str {
        lookup(table(self.language), key)
            .or_else(|| lookup(EN, key))
            .unwrap_or_else(|| key.as_str())
    }

    /// Template for `key` with each `{}` replaced by the next argument.
    ///
    /// Extra placeholders are left as-is; extra arguments are ignored.
    pub fn format<S: AsRef<str>>(&self, key: MessageKey, args: &[S]) -> String {
        let template = self.get(key);
        let mut out = String::with_capacity(template.len());
        let mut args = args.iter();
        let mut rest = template;

        while let Some(pos) = rest.find("{}") {
            out.push_str(&rest[..pos]);
            match args.next() {
                Some(arg) => out.push_str(arg.as_ref()),
                None => out.push_str("{}"),
            }
            rest = &rest[pos + 2..];
        }
        out.push_str(rest);
        out
    }
}
