use std::time::{Duration, Instant};

use course_core::{CourseStore, SaveOutcome, StoreEvent};
use crossbeam_channel::Receiver;
use eframe::egui;
use shared::domain::{FormField, FormMode};

use crate::controller::events::{status_for_store_event, UiError, UiEvent};
use crate::controller::notices::NoticeQueue;
use crate::controller::orchestration::{dispatch_form_action, FormAction};
use crate::ui::theme::{self, PersistedUiSettings, ThemeSettings};

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub seed_on_start: bool,
    pub notice_lifetime: Duration,
    pub window_title: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            seed_on_start: true,
            notice_lifetime: Duration::from_secs(4),
            window_title: "Courses".to_string(),
        }
    }
}

pub struct CourseManagerApp {
    store: CourseStore,
    store_rx: Receiver<StoreEvent>,

    notices: NoticeQueue,
    status: String,
    focus_request: Option<FormField>,

    theme: ThemeSettings,
    applied_theme: Option<ThemeSettings>,
    settings_open: bool,
}

impl CourseManagerApp {
    pub fn bootstrap(startup: StartupConfig, persisted: Option<PersistedUiSettings>) -> Self {
        let mut store = CourseStore::new();
        let store_rx = store.subscribe();
        let mut app = Self {
            store,
            store_rx,
            notices: NoticeQueue::new(startup.notice_lifetime),
            status: String::new(),
            focus_request: Some(FormField::Id),
            theme: persisted.unwrap_or_default().into_runtime(),
            applied_theme: None,
            settings_open: false,
        };
        if startup.seed_on_start {
            app.store.seed_if_empty();
        }
        tracing::info!(courses = app.store.len(), "course session started");
        app
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.store_rx.try_recv() {
            self.handle_event(UiEvent::Store(event));
        }
    }

    fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Store(event) => {
                tracing::trace!(event = event.name(), "store changed");
                if let Some(status) = status_for_store_event(&event) {
                    self.status = status;
                }
            }
            UiEvent::Rejected(err) => {
                tracing::debug!(
                    category = ?err.category(),
                    context = ?err.context(),
                    "showing rejection notice"
                );
                self.focus_request = err.focus_hint();
                self.notices
                    .push(err.title(), err.message().to_string(), Instant::now());
            }
        }
    }

    fn apply(&mut self, action: FormAction) {
        match dispatch_form_action(&mut self.store, action) {
            Ok(Some(SaveOutcome::Added { .. } | SaveOutcome::Updated { .. })) => {
                self.focus_request = Some(FormField::Id);
            }
            Ok(None) => {}
            Err(err) => self.reject(err),
        }
        self.process_ui_events();
    }

    fn reject(&mut self, err: UiError) {
        self.handle_event(UiEvent::Rejected(err));
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.applied_theme == Some(self.theme) {
            return;
        }
        ctx.set_visuals(theme::visuals_for_theme(self.theme));
        ctx.style_mut(|style| {
            style.text_styles = theme::scaled_text_styles(self.theme.text_scale);
        });
        self.applied_theme = Some(self.theme);
    }

    fn form_text_field(&mut self, ui: &mut egui::Ui, field: FormField, multiline: bool) {
        ui.label(egui::RichText::new(field.label()).strong());
        let mut buffer = self.store.form().field(field).to_string();
        let edit = if multiline {
            egui::TextEdit::multiline(&mut buffer).desired_rows(2)
        } else {
            egui::TextEdit::singleline(&mut buffer)
        };
        let response = ui.add(
            edit.id_salt(("course_form", field.label()))
                .desired_width(f32::INFINITY),
        );

        if self.focus_request == Some(field) {
            response.request_focus();
            self.focus_request = None;
        }
        if response.changed() {
            self.apply(FormAction::Edit {
                field,
                text: buffer,
            });
        }
        if field == FormField::Id
            && response.lost_focus()
            && ui.input(|i| i.key_pressed(egui::Key::Enter))
        {
            self.focus_request = Some(FormField::Name);
        }
    }

    fn show_form(&mut self, ui: &mut egui::Ui) {
        self.form_text_field(ui, FormField::Id, false);
        ui.add_space(8.0);
        self.form_text_field(ui, FormField::Name, false);
        ui.add_space(8.0);
        self.form_text_field(ui, FormField::Description, true);
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            let submit = egui::Button::new(egui::RichText::new(self.store.submit_label()).strong());
            if ui.add(submit).clicked() {
                self.apply(FormAction::Submit);
            }
            if ui.button("Clear").clicked() {
                self.apply(FormAction::Clear);
            }
            if let FormMode::Editing(position) = self.store.mode() {
                ui.weak(format!("Editing row {}", position + 1));
            }
        });
    }

    fn show_course_list(&mut self, ui: &mut egui::Ui) {
        ui.heading("Course list");
        ui.add_space(8.0);

        let editing = self.store.edit_index();
        let mut pending = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (index, course) in self.store.courses().iter().enumerate() {
                    // Ids may repeat after an edit, so rows are keyed by position.
                    ui.push_id(index, |ui| {
                        let fill = if editing == Some(index) {
                            theme::editing_highlight(self.theme)
                        } else {
                            ui.visuals().faint_bg_color
                        };
                        egui::Frame::NONE
                            .fill(fill)
                            .corner_radius(8.0)
                            .inner_margin(egui::Margin::same(12))
                            .show(ui, |ui| {
                                ui.set_width(ui.available_width());
                                ui.horizontal(|ui| {
                                    ui.vertical(|ui| {
                                        ui.label(egui::RichText::new(course.list_title()).strong());
                                        if course.has_description() {
                                            ui.label(&course.description);
                                        }
                                    });
                                    ui.with_layout(
                                        egui::Layout::right_to_left(egui::Align::Center),
                                        |ui| {
                                            if ui.button("🗑").on_hover_text("Delete").clicked() {
                                                pending = Some(FormAction::Delete(index));
                                            }
                                            if ui.button("✏").on_hover_text("Edit").clicked() {
                                                pending = Some(FormAction::BeginEdit(index));
                                            }
                                        },
                                    );
                                });
                            });
                    });
                    ui.add_space(8.0);
                }
            });

        if let Some(action) = pending {
            self.apply(action);
        }
    }

    fn show_notices(&mut self, ctx: &egui::Context) {
        if let Some(next_expiry) = self.notices.prune(Instant::now()) {
            ctx.request_repaint_after(next_expiry);
        }
        if self.notices.is_empty() {
            return;
        }

        let mut dismissed = None;
        egui::TopBottomPanel::bottom("course_notices").show(ctx, |ui| {
            for notice in self.notices.iter() {
                egui::Frame::NONE
                    .fill(theme::notice_fill(self.theme))
                    .corner_radius(8.0)
                    .inner_margin(egui::Margin::symmetric(10, 8))
                    .show(ui, |ui| {
                        ui.horizontal_wrapped(|ui| {
                            ui.label(egui::RichText::new(notice.title).strong());
                            ui.label(&notice.message);
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                if ui.button("Dismiss").clicked() {
                                    dismissed = Some(notice.id);
                                }
                            });
                        });
                    });
                ui.add_space(4.0);
            }
        });
        if let Some(id) = dismissed {
            self.notices.dismiss(id);
        }
    }

    fn show_settings_window(&mut self, ctx: &egui::Context) {
        let mut open = self.settings_open;
        egui::Window::new("Appearance")
            .open(&mut open)
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.checkbox(&mut self.theme.dark_mode, "Dark mode");
                ui.add(
                    egui::Slider::new(&mut self.theme.text_scale, theme::text_scale_range())
                        .text("Text scale"),
                );
            });
        self.settings_open = open;
    }

    fn show_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("course_top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Courses");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("⚙").on_hover_text("Appearance").clicked() {
                        self.settings_open = !self.settings_open;
                    }
                    ui.small(egui::RichText::new(&self.status).weak());
                    ui.small(format!("{} courses", self.store.len()));
                });
            });
        });
    }
}

impl eframe::App for CourseManagerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.apply_theme_if_needed(ctx);

        self.show_top_bar(ctx);
        self.show_notices(ctx);
        self.show_settings_window(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            self.show_form(ui);
            ui.add_space(20.0);
            self.show_course_list(ui);
        });

        self.process_ui_events();
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedUiSettings::from_runtime(self.theme);
        if let Ok(serialized) = serde_json::to_string(&settings) {
            storage.set_string(theme::SETTINGS_STORAGE_KEY, serialized);
        }
    }
}
