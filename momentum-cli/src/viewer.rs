//! Interactive window for the momentum demos
//!
//! Animates one demo with start/pause/reset controls and a momentum panel.
//! When a preset file is given it is watched, and the demo is rebuilt from
//! it every time it changes.

use crate::load_config;
use eframe::egui;
use glam::DVec2;
use momentum_core::demos::SceneFrame;
use momentum_core::report::readout_lines;
use momentum_core::{build_demo, Animator, Canvas, Command, Demo, DemoConfig, DemoKind};
use notify::{Event, RecommendedWatcher, Watcher};
use std::path::PathBuf;
use std::sync::mpsc;
use tracing::{debug, warn};

const BODY_COLORS: [egui::Color32; 5] = [
    egui::Color32::from_rgb(66, 135, 245),
    egui::Color32::from_rgb(245, 99, 66),
    egui::Color32::from_rgb(80, 200, 120),
    egui::Color32::from_rgb(230, 190, 60),
    egui::Color32::from_rgb(170, 110, 230),
];

pub fn launch(kind: DemoKind, config_path: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        kind.title(),
        options,
        Box::new(move |_cc| Ok(Box::new(DemoViewer::new(kind, config_path)))),
    )?;
    Ok(())
}

pub struct DemoViewer {
    kind: DemoKind,
    config_path: Option<PathBuf>,
    canvas: Canvas,
    animator: Option<Animator<Box<dyn Demo>>>,
    last_load_error: Option<String>,
    frames_per_update: u32,
    #[allow(dead_code)] // Kept alive to maintain file watching
    file_watcher: Option<RecommendedWatcher>,
    file_receiver: mpsc::Receiver<notify::Result<Event>>,
}

impl DemoViewer {
    pub fn new(kind: DemoKind, config_path: Option<PathBuf>) -> Self {
        let config_path = config_path.map(|path| path.canonicalize().unwrap_or(path));

        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res| {
            let _ = tx.send(res);
        })
        .ok();

        if let (Some(w), Some(path)) = (watcher.as_mut(), config_path.as_ref()) {
            if let Err(e) = w.watch(path, notify::RecursiveMode::NonRecursive) {
                warn!(path = %path.display(), error = %e, "cannot watch preset");
            }
        }

        let mut app = Self {
            kind,
            config_path,
            canvas: Canvas::default(),
            animator: None,
            last_load_error: None,
            frames_per_update: 1,
            file_watcher: watcher,
            file_receiver: rx,
        };

        app.reload_demo();

        app
    }

    fn reload_demo(&mut self) {
        match self.build() {
            Ok((config, demo)) => {
                debug!(demo = %self.kind, "demo rebuilt");
                self.canvas = config.canvas;
                self.animator = Some(Animator::new(demo));
                self.last_load_error = None;
            }
            Err(e) => {
                self.last_load_error = Some(e);
                self.animator = None;
            }
        }
    }

    fn build(&self) -> Result<(DemoConfig, Box<dyn Demo>), String> {
        let config = load_config(self.config_path.as_deref()).map_err(|e| e.to_string())?;
        let demo = build_demo(self.kind, &config).map_err(|e| e.to_string())?;
        Ok((config, demo))
    }

    fn check_file_changes(&mut self) {
        let mut needs_reload = false;
        while let Ok(event) = self.file_receiver.try_recv() {
            match event {
                Ok(Event {
                    kind: notify::EventKind::Modify(_) | notify::EventKind::Create(_),
                    paths,
                    ..
                }) => {
                    if self
                        .config_path
                        .as_ref()
                        .is_some_and(|path| paths.contains(path))
                    {
                        needs_reload = true;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "file watcher error");
                }
            }
        }

        if needs_reload {
            self.reload_demo();
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        let Some(animator) = self.animator.as_mut() else {
            return;
        };

        if ui.button(animator.state().button_label()).clicked() {
            animator.command(Command::Toggle);
        }
        if ui.button("Reset").clicked() {
            animator.command(Command::Reset);
        }
        if self.kind == DemoKind::Explosion {
            let running = animator.state().is_running();
            if ui.add_enabled(running, egui::Button::new("Explode")).clicked() {
                animator.command(Command::Trigger);
            }
        }

        ui.separator();

        ui.label("Speed:");
        ui.add(egui::Slider::new(&mut self.frames_per_update, 1..=10));

        ui.separator();

        ui.label(format!(
            "t = {:.2} s  frame {}",
            animator.demo().elapsed(),
            animator.frames()
        ));
    }
}

impl eframe::App for DemoViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_file_changes();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.kind.title());
                ui.separator();
                self.controls(ui);
            });
        });

        if let Some(animator) = &self.animator {
            let planar = matches!(self.kind, DemoKind::Collision2d | DemoKind::Explosion);
            egui::SidePanel::right("momentum").show(ctx, |ui| {
                ui.heading("Momentum");
                for line in readout_lines(&animator.demo().readout(), planar) {
                    ui.monospace(line);
                }
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let rect = ui.max_rect();
            let painter = ui.painter();

            if let Some(animator) = &self.animator {
                draw_scene(painter, rect, &self.canvas, &animator.demo().frame());
            }

            if let Some(ref error) = self.last_load_error {
                ui.vertical_centered(|ui| {
                    ui.add_space(rect.height() * 0.4);
                    ui.label(
                        egui::RichText::new(format!("Error: {}", error))
                            .color(egui::Color32::RED)
                            .size(16.0),
                    );
                });
            }
        });

        let mut running = false;
        if let Some(animator) = self.animator.as_mut() {
            for _ in 0..self.frames_per_update {
                running = animator.frame();
            }
        }

        if running {
            ctx.request_repaint();
        }
    }
}

/// Paint one scene frame, fitting the demo canvas into `rect`
fn draw_scene(painter: &egui::Painter, rect: egui::Rect, canvas: &Canvas, frame: &SceneFrame) {
    let scale = (rect.width() as f64 / canvas.width).min(rect.height() as f64 / canvas.height);
    let to_screen = |p: DVec2| rect.min + egui::vec2((p.x * scale) as f32, (p.y * scale) as f32);
    let length = |r: f64| (r * scale) as f32;

    painter.rect_stroke(
        egui::Rect::from_two_pos(to_screen(frame.bounds.min), to_screen(frame.bounds.max)),
        0.0,
        egui::Stroke::new(1.0, egui::Color32::DARK_GRAY),
    );

    for (i, trail) in frame.trails.iter().enumerate() {
        if trail.len() < 2 {
            continue;
        }
        let color = BODY_COLORS[i % BODY_COLORS.len()].gamma_multiply(0.5);
        let points = trail.iter().map(|&p| to_screen(p)).collect();
        painter.add(egui::Shape::line(points, egui::Stroke::new(1.5, color)));
    }

    for &marker in &frame.markers {
        painter.circle_stroke(
            to_screen(marker),
            5.0,
            egui::Stroke::new(1.5, egui::Color32::YELLOW),
        );
    }

    for particle in &frame.particles {
        let alpha = (particle.opacity.clamp(0.0, 1.0) * 255.0) as u8;
        painter.circle_filled(
            to_screen(particle.pos),
            length(particle.radius),
            egui::Color32::from_rgba_unmultiplied(255, 140, 0, alpha),
        );
    }

    for (i, body) in frame.bodies.iter().enumerate() {
        let center = to_screen(body.pos);
        let radius = length(body.radius);
        let color = BODY_COLORS[i % BODY_COLORS.len()];

        painter.circle_filled(center, radius, color);
        painter.circle_stroke(center, radius, egui::Stroke::new(1.0, egui::Color32::WHITE));

        if body.speed > 0.0 {
            let arrow = body.vel * 10.0 * scale;
            painter.arrow(
                center,
                egui::vec2(arrow.x as f32, arrow.y as f32),
                egui::Stroke::new(2.0, egui::Color32::WHITE),
            );
        }

        painter.text(
            center + egui::vec2(0.0, radius + 10.0),
            egui::Align2::CENTER_TOP,
            format!("{:.1} kg", body.mass),
            egui::FontId::default(),
            egui::Color32::WHITE,
        );
    }

    if let Some(com) = frame.center_of_mass {
        let c = to_screen(com);
        let stroke = egui::Stroke::new(1.5, egui::Color32::RED);
        painter.line_segment([c - egui::vec2(6.0, 0.0), c + egui::vec2(6.0, 0.0)], stroke);
        painter.line_segment([c - egui::vec2(0.0, 6.0), c + egui::vec2(0.0, 6.0)], stroke);
    }
}
