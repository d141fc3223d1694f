use eframe::egui;
use sb_core::SchemeError;
use sb_core::SchemeResult;
use sb_editor::EditorConfig;
use sb_editor::EditorState;
use sb_editor::ParamField;

mod launch;
mod startup;
mod ui;

pub(crate) use startup::run;

const APP_TITLE: &str = "Scheme Builder";
const URI_ENV_VAR: &str = "SCHEME_BUILDER_URI";
const DEFAULT_SHARE_PREFIX: &str = "/";
const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(200, 65, 65);
const OK_COLOR: egui::Color32 = egui::Color32::from_rgb(72, 160, 96);
const MEMO_ROWS: usize = 8;

/// Resolved startup inputs for the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LaunchOptions {
    editor: EditorConfig,
    share_prefix: String,
}

/// One user interaction, collected while drawing and applied after the frame.
#[derive(Debug, Clone, PartialEq, Eq)]
enum UiEdit {
    UriString(String),
    Base(String),
    Param {
        index: usize,
        field: ParamField,
        text: String,
    },
    AddParam,
    RemoveParam(usize),
}

struct SchemeBuilderApp {
    state: EditorState,
    share_prefix: String,
    copied: bool,
    memo: String,
    last_error: Option<String>,
}
