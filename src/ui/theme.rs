//! Theme constants for the m,n,k GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(245, 245, 245);
pub const CELL_BG: Color32 = Color32::from_rgb(208, 208, 208);
pub const CELL_HOVER: Color32 = Color32::from_rgb(190, 190, 196);

// Mark colors
pub const PLAYER_COLOR: Color32 = Color32::from_rgb(0, 217, 94);
pub const COMPUTER_COLOR: Color32 = Color32::from_rgb(217, 0, 90);
pub const MARK_TEXT: Color32 = Color32::from_rgb(250, 250, 252);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(255, 173, 20);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(34, 201, 93);

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(126, 86, 251);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_THINKING: Color32 = Color32::from_rgb(255, 173, 20);
pub const STATUS_OK: Color32 = Color32::from_rgb(34, 201, 93);
pub const STATUS_FAIL: Color32 = Color32::from_rgb(238, 79, 79);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
pub const CELL_GAP: f32 = 6.0;
pub const MAX_CELL_SIZE: f32 = 140.0;
pub const MARK_FONT_RATIO: f32 = 0.55;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;
pub const WIN_STROKE_WIDTH: f32 = 4.0;
