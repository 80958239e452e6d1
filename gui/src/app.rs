use eframe::egui;
use glyph_grid::palette::parse_color;
use glyph_grid::{FontStack, Sketch, SketchConfig, font, render_wallpaper_with, save_png};
use image::RgbaImage;
use std::path::PathBuf;
use std::time::Instant;

/// Fonts loaded for one family/file choice
struct LoadedFonts {
    family: String,
    path: Option<PathBuf>,
    stack: FontStack,
}

/// Main application state for the wallpaper viewer
pub struct GlyphApp {
    /// Generation and render settings
    config: SketchConfig,
    /// Seed for the next render
    seed: u64,
    /// Fonts reused across renders until the family or file changes
    fonts: Option<LoadedFonts>,

    /// Last generated sketch (palette, points)
    sketch: Option<Sketch>,
    /// Last rendered wallpaper
    output_image: Option<RgbaImage>,
    /// Texture handle for the wallpaper
    output_texture: Option<egui::TextureHandle>,

    /// Whether to re-render automatically when settings change
    auto_render: bool,
    /// Settings changed since the last render
    needs_render: bool,

    /// Last render time in milliseconds
    last_render_time_ms: f64,
    /// Error message to display (if any)
    error_message: Option<String>,
}

impl Default for GlyphApp {
    fn default() -> Self {
        Self {
            config: SketchConfig::default(),
            seed: rand::random(),
            fonts: None,
            sketch: None,
            output_image: None,
            output_texture: None,
            auto_render: true,
            needs_render: true,
            last_render_time_ms: 0.0,
            error_message: None,
        }
    }
}

impl GlyphApp {
    /// Create a new viewer; the first frame renders a wallpaper
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Save the wallpaper to file
    pub fn save_output(&self, path: &std::path::Path) -> Result<(), String> {
        match &self.output_image {
            Some(img) => save_png(img, path).map_err(|e| format!("Failed to save: {}", e)),
            None => Err("No wallpaper to save".to_string()),
        }
    }

    /// Font stack for the current settings, loading it only when they changed
    fn fonts(&mut self) -> glyph_grid::Result<FontStack> {
        let family = &self.config.font_family;
        let path = &self.config.font_path;
        if let Some(loaded) = &self.fonts
            && loaded.family == *family
            && loaded.path == *path
        {
            return Ok(loaded.stack.clone());
        }

        let stack = font::load_stack(family, path.as_deref())?;
        log::info!("loaded {} font face(s) for {}", stack.len(), family);
        self.fonts = Some(LoadedFonts {
            family: family.clone(),
            path: path.clone(),
            stack: stack.clone(),
        });
        Ok(stack)
    }

    /// Generate and paint with the current settings
    fn render(&mut self) {
        self.config.seed = Some(self.seed);
        let start = Instant::now();

        let result = self
            .fonts()
            .and_then(|fonts| render_wallpaper_with(&self.config, &fonts));
        match result {
            Ok((sketch, image)) => {
                self.last_render_time_ms = start.elapsed().as_secs_f64() * 1000.0;
                log::info!(
                    "rendered {} symbols in {:.1} ms",
                    sketch.points.len(),
                    self.last_render_time_ms
                );
                self.sketch = Some(sketch);
                self.output_image = Some(image);
                self.output_texture = None; // Clear old texture
                self.error_message = None;
            }
            Err(e) => {
                log::error!("render failed: {}", e);
                self.error_message = Some(format!("Render failed: {}", e));
            }
        }
        self.needs_render = false;
    }

    /// Render the control panel UI
    fn render_controls(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;

        ui.heading("Controls");
        ui.separator();

        ui.collapsing("Seed", |ui| {
            ui.horizontal(|ui| {
                changed |= ui
                    .add(egui::DragValue::new(&mut self.seed))
                    .on_hover_text("Seeds palette, colors, symbols and noise")
                    .changed();

                if ui.button("Reroll").clicked() {
                    self.seed = rand::random();
                    changed = true;
                }
            });
        });

        ui.add_space(8.0);

        ui.collapsing("Grid", |ui| {
            changed |= ui
                .add(egui::Slider::new(&mut self.config.count, 1..=120).text("Cells"))
                .on_hover_text("Lattice cells per axis")
                .changed();

            changed |= ui
                .add(
                    egui::Slider::new(&mut self.config.keep_probability, 0.0..=1.0)
                        .text("Keep"),
                )
                .on_hover_text("Chance that each cell keeps its symbol")
                .changed();

            changed |= ui
                .add(egui::Slider::new(&mut self.config.margin, 0.0..=300.0).text("Margin"))
                .on_hover_text("Pixels kept clear on each edge")
                .changed();

            changed |= ui
                .add(
                    egui::Slider::new(&mut self.config.radius_frequency, 0.1..=8.0)
                        .text("Size noise"),
                )
                .on_hover_text("Frequency of the noise that scales symbols")
                .changed();
        });

        ui.add_space(8.0);

        ui.collapsing("Font", |ui| {
            ui.horizontal(|ui| {
                ui.label("Family");
                changed |= ui.text_edit_singleline(&mut self.config.font_family).lost_focus();
            });

            match &self.config.font_path {
                Some(path) => ui.label(format!("File: {}", path.display())),
                None => ui.label("File: system lookup"),
            };

            ui.horizontal(|ui| {
                if ui.button("Choose Font...").clicked()
                    && let Some(path) = rfd::FileDialog::new()
                        .add_filter("Fonts", &["ttf", "otf", "ttc"])
                        .pick_file()
                {
                    self.config.font_path = Some(path);
                    changed = true;
                }

                if ui
                    .add_enabled(self.config.font_path.is_some(), egui::Button::new("Clear"))
                    .clicked()
                {
                    self.config.font_path = None;
                    changed = true;
                }
            });
        });

        ui.add_space(16.0);
        ui.separator();

        // Auto-render toggle
        ui.checkbox(&mut self.auto_render, "Auto-render")
            .on_hover_text("Re-render when settings change");

        if ui.button("Render").clicked() {
            self.render();
        }

        if self.last_render_time_ms > 0.0 {
            ui.label(format!("Last render: {:.1} ms", self.last_render_time_ms));
        }

        if let Some(sketch) = &self.sketch {
            ui.add_space(8.0);
            ui.label(format!("Seed {}: {} symbols", sketch.seed, sketch.points.len()));
            ui.horizontal(|ui| {
                for color in sketch.palette {
                    if let Some(rgba) = parse_color(color) {
                        ui.colored_label(egui::Color32::from_rgb(rgba[0], rgba[1], rgba[2]), "■")
                            .on_hover_text(color);
                    }
                }
            });
        }

        changed
    }

    /// Convert RgbaImage to egui ColorImage
    fn rgba_to_color_image(img: &RgbaImage) -> egui::ColorImage {
        let (width, height) = img.dimensions();
        egui::ColorImage::from_rgba_unmultiplied([width as usize, height as usize], img.as_raw())
    }

    /// Display the wallpaper scaled to the available space
    fn display_image(
        ui: &mut egui::Ui,
        image: Option<&RgbaImage>,
        texture: &mut Option<egui::TextureHandle>,
    ) {
        ui.vertical_centered(|ui| {
            let Some(img) = image else {
                ui.label("Nothing rendered yet");
                return;
            };

            if texture.is_none() {
                let color_image = Self::rgba_to_color_image(img);
                *texture = Some(ui.ctx().load_texture(
                    "wallpaper",
                    color_image,
                    egui::TextureOptions::LINEAR,
                ));
            }

            if let Some(tex) = texture {
                let size = tex.size_vec2();
                let max_size = ui.available_size() - egui::vec2(0.0, 24.0);
                // Never upscale, the wallpaper is already large
                let scale = (max_size.x / size.x).min(max_size.y / size.y).min(1.0).max(0.0);

                ui.image((tex.id(), size * scale));
                ui.label(format!(
                    "{}x{} (scale: {:.2}x)",
                    img.width(),
                    img.height(),
                    scale
                ));
            }
        });
    }
}

impl eframe::App for GlyphApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Save PNG...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("PNG", &["png"])
                            .set_file_name(format!("glyph-grid-{}.png", self.seed))
                            .save_file()
                            && let Err(e) = self.save_output(&path)
                        {
                            self.error_message = Some(e);
                        }
                        ui.close();
                    }

                    ui.separator();

                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.error_message = Some(
                            "Glyph Grid\nNoise-driven emoji and glyph wallpapers\n\nBuilt with Rust + egui".to_string()
                        );
                        ui.close();
                    }
                });
            });
        });

        // Left panel: Controls
        egui::SidePanel::left("control_panel")
            .resizable(true)
            .default_width(250.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    if self.render_controls(ui) {
                        self.needs_render = true;
                    }
                });
            });

        // Central panel: wallpaper
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(ref msg) = self.error_message {
                ui.colored_label(egui::Color32::RED, msg);
                if ui.button("Clear Error").clicked() {
                    self.error_message = None;
                }
                ui.separator();
            }

            if self.auto_render && self.needs_render {
                self.render();
            }

            Self::display_image(ui, self.output_image.as_ref(), &mut self.output_texture);
        });
    }
}
