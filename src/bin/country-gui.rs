/*!
 * GUI application for country_lookup - the country information widget
 *
 * A cross-platform desktop window providing:
 * - A single text input for a country code or name
 * - Loading and error indicators while a lookup is in flight
 * - A grid of informational cards for the matching country
 *
 * Platform support: Windows, macOS, Linux
 */

use country_lookup::cards::{CardBody, NOT_AVAILABLE};
use country_lookup::lookup::{self, Resolution};
use country_lookup::{Client, CountryLookup, CountrySource, storage};
use eframe::egui;
use std::sync::Arc;
use std::sync::mpsc;

const CARD_SIZE: egui::Vec2 = egui::vec2(220.0, 120.0);

fn main() -> Result<(), eframe::Error> {
    // Enable logging for better debugging
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([600.0, 400.0])
            .with_title("Country Information"),
        ..Default::default()
    };

    eframe::run_native(
        "Country Information",
        options,
        Box::new(|_cc| Ok(Box::new(CountryApp::new()))),
    )
}

/// Main application state
struct CountryApp {
    input: String,
    locale: String,
    widget: CountryLookup,
    source: Arc<dyn CountrySource>,
    save_message: String,

    // Background lookups
    sender: mpsc::Sender<Resolution>,
    receiver: mpsc::Receiver<Resolution>,
}

impl CountryApp {
    fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            input: String::new(),
            locale: "en".to_string(),
            widget: CountryLookup::new(),
            source: Arc::new(Client::default()),
            save_message: String::new(),
            sender,
            receiver,
        }
    }

    fn on_input_changed(&mut self) {
        self.save_message.clear();
        if let Some(ticket) = self.widget.on_query_change(self.input.clone()) {
            lookup::spawn_lookup(Arc::clone(&self.source), ticket, self.sender.clone());
        }
    }

    fn drain_resolutions(&mut self) {
        while let Ok(resolution) = self.receiver.try_recv() {
            self.widget.resolve(resolution);
        }
    }

    fn save_record(&mut self) {
        let Some(record) = self.widget.record() else {
            return;
        };
        let file_name = format!(
            "{}.json",
            record.common_name().unwrap_or("country").to_lowercase()
        );
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(file_name)
            .add_filter("JSON", &["json"])
            .save_file()
        else {
            return;
        };
        self.save_message = match storage::save_json(record, &path) {
            Ok(()) => format!("Saved to {}", path.display()),
            Err(err) => format!("Failed to save JSON: {}", err),
        };
    }
}

impl eframe::App for CountryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for completed background lookups
        self.drain_resolutions();

        // Keep polling while a lookup is outstanding
        if self.widget.is_loading() {
            ctx.request_repaint();
        }

        let view = self.widget.view(&self.locale);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("Country Information");
                    ui.add_space(10.0);

                    ui.group(|ui| {
                        ui.label(egui::RichText::new("Enter Country Code:").strong());
                        ui.label(egui::RichText::new("(E.g. Pakistan: pk)").small());
                        let response = ui.text_edit_singleline(&mut self.input);
                        if response.changed() {
                            self.on_input_changed();
                        }

                        ui.horizontal(|ui| {
                            ui.label("Locale:");
                            egui::ComboBox::from_id_salt("locale")
                                .selected_text(&self.locale)
                                .show_ui(ui, |ui| {
                                    ui.selectable_value(&mut self.locale, "en".to_string(), "English (en)");
                                    ui.selectable_value(&mut self.locale, "de".to_string(), "German (de)");
                                    ui.selectable_value(&mut self.locale, "fr".to_string(), "French (fr)");
                                    ui.selectable_value(&mut self.locale, "es".to_string(), "Spanish (es)");
                                    ui.selectable_value(&mut self.locale, "it".to_string(), "Italian (it)");
                                });
                        });

                        if view.loading {
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.label(egui::RichText::new("Loading...").strong());
                            });
                        }
                        if let Some(err) = &view.error {
                            ui.colored_label(egui::Color32::RED, err);
                        }
                    });
                });

                ui.add_space(15.0);

                if view.cards.is_empty() {
                    return;
                }

                ui.horizontal(|ui| {
                    if ui.button("Save JSON").clicked() {
                        self.save_record();
                    }
                    if !self.save_message.is_empty() {
                        ui.label(&self.save_message);
                    }
                });
                ui.add_space(10.0);

                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing = egui::vec2(12.0, 12.0);
                    for card in &view.cards {
                        ui.allocate_ui(CARD_SIZE, |ui| {
                            egui::Frame::group(ui.style()).show(ui, |ui| {
                                ui.set_min_size(CARD_SIZE);
                                ui.vertical_centered(|ui| {
                                    ui.label(
                                        egui::RichText::new(format!("{}:", card.title))
                                            .color(egui::Color32::GRAY),
                                    );
                                    match &card.body {
                                        CardBody::Text(text) => {
                                            ui.label(egui::RichText::new(text).size(18.0).strong());
                                        }
                                        CardBody::Image { url, alt } => {
                                            ui.hyperlink_to(alt, url);
                                        }
                                        CardBody::Link { url, label } => {
                                            ui.hyperlink_to(label, url);
                                        }
                                        CardBody::Missing => {
                                            ui.weak(NOT_AVAILABLE);
                                        }
                                    }
                                });
                            });
                        });
                    }
                });
            });
        });
    }
}
