use eframe::egui;
use photo_exporter::{ImageStore, OutputFormat};

#[path = "app_actions.rs"]
mod app_actions;

pub struct PhotoExporterApp {
    // Selection state
    pub(crate) store: ImageStore,
    pub(crate) selected_format: OutputFormat,

    // Preview textures, rebuilt whenever the selection changes
    pub(crate) previews: Vec<egui::TextureHandle>,
    pub(crate) previews_stale: bool,
}

impl PhotoExporterApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            store: ImageStore::new(),
            selected_format: OutputFormat::Png,
            previews: Vec::new(),
            previews_stale: false,
        }
    }

    fn render_error_line(&self, ui: &mut egui::Ui) {
        if let Some(error) = self.store.error() {
            ui.colored_label(egui::Color32::RED, error);
            ui.add_space(4.0);
        }
    }

    fn render_preview(&mut self, ui: &mut egui::Ui) {
        if self.store.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.4);
                if ui.button("Select images").clicked() {
                    self.select_images();
                }
                ui.add_space(8.0);
                ui.weak("PNG, JPEG and TIFF files");
            });
            return;
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for texture in &self.previews {
                    ui.vertical_centered(|ui| {
                        ui.add(egui::Image::new(texture).max_size(egui::vec2(500.0, 500.0)));
                    });
                    ui.add_space(16.0);
                }
            });
    }

    fn render_action_row(&mut self, ui: &mut egui::Ui) {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label("Output type:");
            egui::ComboBox::from_id_salt("output_format")
                .selected_text(self.selected_format.label())
                .show_ui(ui, |ui| {
                    for format in OutputFormat::ALL {
                        ui.selectable_value(&mut self.selected_format, format, format.label());
                    }
                });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let has_images = !self.store.is_empty();

                if ui
                    .add_enabled(has_images, egui::Button::new("Convert"))
                    .clicked()
                {
                    self.convert_images();
                }
                if ui
                    .add_enabled(has_images, egui::Button::new("Clear"))
                    .clicked()
                {
                    self.clear_images();
                }
            });
        });
        ui.add_space(6.0);
    }
}

impl eframe::App for PhotoExporterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.previews_stale {
            self.rebuild_previews(ctx);
            self.previews_stale = false;
        }

        egui::TopBottomPanel::bottom("action_row").show(ctx, |ui| {
            self.render_action_row(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_error_line(ui);
            self.render_preview(ui);
        });
    }
}
