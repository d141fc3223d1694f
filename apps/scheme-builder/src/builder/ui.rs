use super::*;

impl SchemeBuilderApp {
    pub(super) fn new(options: LaunchOptions) -> Self {
        Self {
            state: EditorState::from_config(&options.editor),
            share_prefix: options.share_prefix,
            copied: false,
            memo: String::new(),
            last_error: None,
        }
    }

    pub(super) fn apply_edit(&mut self, edit: UiEdit) {
        let before = self.state.uri_string().to_owned();

        let result = match edit {
            UiEdit::UriString(text) => {
                self.state.edit_uri_string(text);
                Ok(())
            }
            UiEdit::Base(text) => {
                self.state.edit_base(text);
                Ok(())
            }
            UiEdit::Param { index, field, text } => self.state.edit_param(index, field, text),
            UiEdit::AddParam => {
                self.state.add_param();
                Ok(())
            }
            UiEdit::RemoveParam(index) => self.state.remove_param(index).map(|_| ()),
        };

        match result {
            Ok(()) => self.last_error = None,
            Err(error) => {
                tracing::warn!(%error, "edit rejected");
                self.last_error = Some(error.to_string());
            }
        }

        if self.state.uri_string() != before {
            self.copied = false;
        }
    }

    /// Marks the current URI as copied and returns the text for the clipboard.
    pub(super) fn copy_uri(&mut self) -> String {
        self.copied = true;
        self.state.uri_string().to_owned()
    }

    pub(super) fn share_location(&self) -> String {
        sb_uri::share_location(&self.share_prefix, self.state.uri_string())
    }

    fn render_uri_field(&mut self, ui: &mut egui::Ui, edits: &mut Vec<UiEdit>) {
        let valid = self.state.validity().is_valid();

        ui.label("Scheme");
        ui.horizontal(|ui| {
            let mut uri = self.state.uri_string().to_owned();
            let width = (ui.available_width() - 48.0).max(160.0);
            let response = ui.add_sized([width, 24.0], egui::TextEdit::singleline(&mut uri));
            if response.changed() {
                edits.push(UiEdit::UriString(uri));
            }

            let copy_label = if self.copied { "Copied" } else { "Copy" };
            if ui.button(copy_label).clicked() {
                let text = self.copy_uri();
                ui.ctx().copy_text(text);
            }
        });

        if !valid {
            ui.colored_label(ERROR_COLOR, "Invalid scheme");
        }
    }

    fn render_structured_fields(&self, ui: &mut egui::Ui, edits: &mut Vec<UiEdit>) {
        ui.label("Base scheme");
        let mut base = self.state.uri_base().to_owned();
        let response = ui.add(egui::TextEdit::singleline(&mut base).desired_width(f32::INFINITY));
        if response.changed() {
            edits.push(UiEdit::Base(base));
        }

        ui.add_space(12.0);
        ui.label("Parameters");

        for (index, param) in self.state.params().iter().enumerate() {
            ui.horizontal(|ui| {
                if ui.button("-").on_hover_text("Remove parameter").clicked() {
                    edits.push(UiEdit::RemoveParam(index));
                }

                let key_width = ((ui.available_width() - 8.0) / 3.0).max(80.0);
                let mut key = param.key.clone();
                if ui
                    .add_sized([key_width, 24.0], egui::TextEdit::singleline(&mut key))
                    .changed()
                {
                    edits.push(UiEdit::Param {
                        index,
                        field: ParamField::Key,
                        text: key,
                    });
                }

                let mut value = param.value.clone();
                if ui
                    .add(egui::TextEdit::singleline(&mut value).desired_width(f32::INFINITY))
                    .changed()
                {
                    edits.push(UiEdit::Param {
                        index,
                        field: ParamField::Value,
                        text: value,
                    });
                }
            });
        }

        if ui.button("+ Add parameter").clicked() {
            edits.push(UiEdit::AddParam);
        }
    }
}

impl eframe::App for SchemeBuilderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut edits = Vec::new();

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(format!("Share: {}", self.share_location()));
                if self.copied {
                    ui.separator();
                    ui.colored_label(OK_COLOR, "Copied to clipboard");
                }
                if let Some(error) = &self.last_error {
                    ui.separator();
                    ui.colored_label(ERROR_COLOR, format!("Error: {error}"));
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("builder_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.heading(APP_TITLE);
                    ui.add_space(12.0);

                    self.render_uri_field(ui, &mut edits);

                    ui.separator();

                    self.render_structured_fields(ui, &mut edits);

                    ui.add_space(16.0);
                    ui.label("Memo");
                    ui.add(
                        egui::TextEdit::multiline(&mut self.memo)
                            .desired_rows(MEMO_ROWS)
                            .desired_width(f32::INFINITY),
                    );
                });
        });

        for edit in edits {
            self.apply_edit(edit);
        }
    }
}
