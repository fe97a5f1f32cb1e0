//! The portfolio window: header, hero, about, project gallery, contact.

use std::sync::mpsc::Receiver;

use egui::{Align, Button, Layout, RichText, ScrollArea, ThemePreference};

use crate::persist::ThemeHandler;
use crate::portfolio::filter::{self, ALL_LANGUAGES};
use crate::portfolio::{CommitSummary, LoadError, Portfolio, RepositorySummary};
use crate::runtime::Runtime;

use super::content::PROFILE;
use super::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Home,
    About,
    Projects,
    Contact,
}

/// The gallery shows a spinner until the one fetch cycle settles.
enum GalleryState {
    Loading,
    Ready(Portfolio),
}

pub struct PortfolioApp<R: Runtime> {
    incoming: Receiver<Portfolio>,
    gallery: GalleryState,
    selected_language: String,
    theme_handler: ThemeHandler<R>,
    pending_scroll: Option<Section>,
    scrolled: bool,
}

impl<R: Runtime> PortfolioApp<R> {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        incoming: Receiver<Portfolio>,
        theme_handler: ThemeHandler<R>,
    ) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        cc.egui_ctx
            .set_visuals_of(egui::Theme::Dark, theme::dark_visuals());
        cc.egui_ctx
            .set_visuals_of(egui::Theme::Light, theme::light_visuals());
        cc.egui_ctx.set_theme(theme_handler.load());

        Self {
            incoming,
            gallery: GalleryState::Loading,
            selected_language: ALL_LANGUAGES.to_string(),
            theme_handler,
            pending_scroll: None,
            scrolled: false,
        }
    }

    fn header(&mut self, ctx: &egui::Context) {
        let mut frame = egui::Frame::side_top_panel(&ctx.style());
        if self.scrolled {
            frame = frame.shadow(ctx.style().visuals.window_shadow);
        }

        egui::TopBottomPanel::top("header").frame(frame).show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new(PROFILE.name).strong().size(18.0));

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    self.theme_button(ui);
                    ui.add_space(8.0);

                    // Laid out right to left, so listed in reverse.
                    let nav = [
                        (Section::Contact, "Contact"),
                        (Section::Projects, "Projects"),
                        (Section::About, "About"),
                        (Section::Home, "Home"),
                    ];
                    for (section, label) in nav {
                        if ui.add(Button::new(label).frame(false)).clicked() {
                            self.pending_scroll = Some(section);
                        }
                    }
                });
            });
            ui.add_space(6.0);
        });
    }

    fn theme_button(&mut self, ui: &mut egui::Ui) {
        match ui.ctx().theme() {
            egui::Theme::Dark => {
                let resp = ui
                    .add(Button::new("☀").frame(false))
                    .on_hover_text("Switch to light mode");
                if resp.clicked() {
                    ui.ctx().set_theme(ThemePreference::Light);
                    self.theme_handler.save(ThemePreference::Light);
                }
            }
            egui::Theme::Light => {
                let resp = ui
                    .add(Button::new("🌙").frame(false))
                    .on_hover_text("Switch to dark mode");
                if resp.clicked() {
                    ui.ctx().set_theme(ThemePreference::Dark);
                    self.theme_handler.save(ThemePreference::Dark);
                }
            }
        }
    }

    fn show_main(&mut self, ctx: &egui::Context) {
        let pending = self.pending_scroll.take();

        egui::CentralPanel::default().show(ctx, |ui| {
            let output = ScrollArea::vertical().id_salt("main_scroll").show(ui, |ui| {
                let sections = [
                    (Section::Home, self.hero_section(ui)),
                    (Section::About, self.about_section(ui)),
                    (Section::Projects, self.projects_section(ui)),
                    (Section::Contact, self.contact_section(ui)),
                ];

                if let Some(target) = pending {
                    for (section, response) in &sections {
                        if *section == target {
                            response.scroll_to_me(Some(Align::TOP));
                        }
                    }
                }
            });

            self.scrolled = output.state.offset.y > 8.0;
        });
    }

    fn hero_section(&mut self, ui: &mut egui::Ui) -> egui::Response {
        ui.add_space(36.0);
        let heading = ui.heading(RichText::new(PROFILE.name).size(40.0).strong());
        ui.label(RichText::new(PROFILE.tagline).size(18.0).weak());
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            if ui.button("View projects").clicked() {
                self.pending_scroll = Some(Section::Projects);
            }
            if ui.button("Get in touch").clicked() {
                self.pending_scroll = Some(Section::Contact);
            }
        });
        ui.add_space(40.0);

        heading
    }

    fn about_section(&mut self, ui: &mut egui::Ui) -> egui::Response {
        let heading = ui.heading(RichText::new("About").size(28.0));
        ui.add_space(8.0);

        ui.vertical(|ui| {
            ui.set_max_width(560.0);
            for paragraph in PROFILE.bio {
                ui.label(*paragraph);
                ui.add_space(6.0);
            }
        });

        ui.add_space(10.0);
        for group in PROFILE.skills {
            ui.label(RichText::new(group.area).strong());
            ui.horizontal_wrapped(|ui| {
                for skill in group.skills {
                    chip(ui, skill);
                }
            });
            ui.add_space(6.0);
        }
        ui.add_space(32.0);

        heading
    }

    fn projects_section(&mut self, ui: &mut egui::Ui) -> egui::Response {
        let heading = ui.heading(RichText::new("Projects").size(28.0));
        ui.add_space(8.0);

        let mut selection_change = None;

        match &self.gallery {
            GalleryState::Loading => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading projects...");
                });
            }
            GalleryState::Ready(portfolio) => {
                if let Some(error) = &portfolio.error {
                    error_banner(ui, error);
                }

                let options = filter::language_options(&portfolio.projects);
                ui.horizontal_wrapped(|ui| {
                    for option in &options {
                        let selected = self.selected_language == *option;
                        if ui.selectable_label(selected, option.as_str()).clicked() {
                            selection_change = Some(option.clone());
                        }
                    }
                });
                ui.add_space(8.0);

                let visible =
                    filter::filter_by_language(&portfolio.projects, &self.selected_language);
                ScrollArea::horizontal().id_salt("project_gallery").show(ui, |ui| {
                    ui.horizontal_top(|ui| {
                        for project in &visible {
                            project_card(ui, project);
                        }
                    });
                });
            }
        }

        if let Some(language) = selection_change {
            self.selected_language = language;
        }

        ui.add_space(32.0);
        heading
    }

    fn contact_section(&mut self, ui: &mut egui::Ui) -> egui::Response {
        let heading = ui.heading(RichText::new("Contact").size(28.0));
        ui.add_space(8.0);

        ui.hyperlink_to(PROFILE.email, format!("mailto:{}", PROFILE.email));
        ui.horizontal(|ui| {
            for link in PROFILE.links {
                ui.hyperlink_to(link.label, link.url);
            }
        });
        ui.add_space(48.0);

        heading
    }
}

impl<R: Runtime> eframe::App for PortfolioApp<R> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The fetch cycle reports exactly once; keep draining in case the
        // channel ever carries more.
        while let Ok(portfolio) = self.incoming.try_recv() {
            self.gallery = GalleryState::Ready(portfolio);
        }

        self.header(ctx);
        self.show_main(ctx);
    }
}

fn chip(ui: &mut egui::Ui, text: &str) {
    egui::Frame::new()
        .fill(theme::chip_fill(ui.visuals()))
        .corner_radius(6)
        .inner_margin(egui::Margin::symmetric(8, 4))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small());
        });
}

fn error_banner(ui: &mut egui::Ui, error: &LoadError) {
    let warn = ui.visuals().warn_fg_color;
    egui::Frame::new()
        .stroke(egui::Stroke::new(1.0, warn))
        .corner_radius(6)
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.colored_label(warn, format!("⚠ {}", error));
        });
    ui.add_space(8.0);
}

fn project_card(ui: &mut egui::Ui, project: &RepositorySummary) {
    egui::Frame::group(ui.style())
        .fill(ui.visuals().faint_bg_color)
        .corner_radius(8)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(300.0);
            ui.vertical(|ui| {
                ui.hyperlink_to(
                    RichText::new(&project.name).strong().size(16.0),
                    &project.url,
                );
                if let Some(description) = &project.description {
                    ui.label(RichText::new(description).weak());
                }
                ui.add_space(6.0);

                ui.horizontal(|ui| {
                    if let Some(language) = &project.language {
                        ui.label(RichText::new(language).color(theme::ACCENT).small());
                    }
                    ui.label(RichText::new(format!("★ {}", project.stars)).small());
                    ui.label(
                        RichText::new(format!("{} forks", project.forks))
                            .small()
                            .weak(),
                    );
                });

                if !project.topics.is_empty() {
                    ui.horizontal_wrapped(|ui| {
                        for topic in &project.topics {
                            chip(ui, topic);
                        }
                    });
                }

                if !project.commits.is_empty() {
                    ui.separator();
                    for commit in &project.commits {
                        commit_row(ui, commit);
                    }
                }
            });
        });
}

fn commit_row(ui: &mut egui::Ui, commit: &CommitSummary) {
    ui.horizontal(|ui| {
        ui.add(
            egui::Image::new(commit.avatar_url.as_str())
                .fit_to_exact_size(egui::vec2(18.0, 18.0))
                .corner_radius(9),
        );
        ui.label(RichText::new(&commit.short_sha).monospace().weak());
        ui.label(RichText::new(&commit.message).small());
    });

    let byline = if commit.date.is_empty() {
        commit.author.clone()
    } else {
        format!("{} on {}", commit.author, commit.date)
    };
    ui.horizontal(|ui| {
        ui.add_space(26.0);
        ui.label(RichText::new(byline).small().weak());
    });
    ui.add_space(4.0);
}
