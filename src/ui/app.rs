//! Main application for the m,n,k GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use crate::config::{GameSettings, MAX_BOARD_CELLS};
use crate::engine::Selection;

use super::board_view::BoardView;
use super::game_state::GameState;
use super::theme::*;

/// Main m,n,k application
pub struct MnkApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl MnkApp {
    /// Create the app; the first game starts with `settings`.
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        settings: GameSettings,
        parallel: bool,
    ) -> crate::Result<Self> {
        Ok(Self {
            state: GameState::new(settings, parallel)?,
            board_view: BoardView::default(),
            show_debug: false,
        })
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                    if ui.button("Undo").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let settings = self.state.session.settings();
                    ui.label(format!(
                        "{}x{} - {} in a row",
                        settings.rows, settings.cols, settings.required_in_a_row
                    ));
                });
            });
        });
    }

    /// Render the side panel with settings, status and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("DYNAMIC TIC-TAC-TOE").size(18.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                self.render_status_card(ui);
                ui.add_space(10.0);

                self.render_settings_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Objective, whose turn it is, and the thinking progress bar
    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let k = self.state.session.board().required_in_a_row();
            ui.label(RichText::new(format!("Objective: {} in a row!", k)).size(14.0).color(TEXT_PRIMARY));
            ui.add_space(6.0);

            if let Some(text) = self.state.outcome_text() {
                ui.label(RichText::new(text).size(16.0).strong().color(STATUS_OK));
            } else if let Some(percent) = self.state.ai_progress() {
                ui.label(RichText::new("Computer's turn").size(12.0).color(STATUS_THINKING));
                ui.add(egui::ProgressBar::new(f32::from(percent) / 100.0).show_percentage());
                if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                    ui.label(
                        RichText::new(format!("{:.1}s", elapsed.as_secs_f32()))
                            .size(10.0)
                            .color(TEXT_SECONDARY),
                    );
                }
            } else {
                ui.label(RichText::new("Your turn").size(12.0).color(STATUS_OK));
            }

            if let Some(ai_time) = self.state.last_ai_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last computer move: {:.3}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Board size and win condition for the next game
    fn render_settings_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("NEXT GAME").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let settings = &mut self.state.pending_settings;
            if ui.add(settings_button(format!("Rows: {}", settings.rows))).clicked() {
                settings.cycle_rows();
            }
            if ui.add(settings_button(format!("Columns: {}", settings.cols))).clicked() {
                settings.cycle_cols();
            }
            if ui.add(settings_button(format!("To Win: {}", settings.required_in_a_row))).clicked() {
                settings.cycle_to_win();
            }
            let quick_open = if settings.quick_open { "on" } else { "off" };
            if ui.add(settings_button(format!("Speed up first turn: {}", quick_open))).clicked() {
                settings.toggle_quick_open();
            }

            ui.add_space(4.0);
            ui.label(
                RichText::new(format!(
                    "*Maximum {} board spaces allowed ({}/{})",
                    MAX_BOARD_CELLS,
                    settings.cell_count(),
                    MAX_BOARD_CELLS
                ))
                .size(10.0)
                .color(TEXT_MUTED),
            );

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.add(settings_button("START GAME".to_string())).clicked() {
                    self.state.reset();
                }
                if ui.add(settings_button("Undo".to_string())).clicked() {
                    self.state.undo();
                }
            });
        });
    }

    /// Render debug card with the per-candidate scores
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &self.state.last_ai_result else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                return;
            };

            ui.label(
                RichText::new(format!("{:?} -> {}", result.selection, result.best_move))
                    .size(11.0)
                    .strong()
                    .color(WIN_HIGHLIGHT),
            );
            ui.label(
                RichText::new(format!("{}ms, {} completions", result.time_ms, result.completions))
                    .size(10.0)
                    .color(TEXT_SECONDARY),
            );

            if result.selection == Selection::Exhaustive {
                ui.add_space(4.0);
                for score in &result.scores {
                    ui.label(
                        RichText::new(format!(
                            "{}  {:+} ({:+.1})",
                            score.pos, score.raw, score.adjusted
                        ))
                        .size(10.0)
                        .monospace()
                        .color(TEXT_SECONDARY),
                    );
                }
            }
        });
    }

    /// Render status message card
    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(STATUS_FAIL.gamma_multiply(0.4))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let winning_line = self.state.session.winning_line();

            let clicked = self.board_view.show(
                ui,
                self.state.session.board(),
                self.state.session.last_move(),
                winning_line.as_deref(),
                self.state.accepts_input(),
            );

            // Handle click
            if let Some(pos) = clicked {
                if let Err(msg) = self.state.try_place(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // D - Toggle debug panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // U - Undo
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

fn settings_button(text: String) -> egui::Button<'static> {
    egui::Button::new(RichText::new(text).color(TEXT_PRIMARY)).fill(BUTTON_BG)
}

impl eframe::App for MnkApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Handle keyboard input
        self.handle_input(ctx);

        // Check AI result
        self.state.check_ai_result();

        // Start AI thinking if needed
        if self.state.session.is_computer_turn() && !self.state.is_ai_thinking() {
            self.state.start_ai_thinking();
        }

        // Render UI
        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep polling while the AI is thinking
        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
