//! Integration tests for the sheet layout engine.

use std::cell::RefCell;
use std::collections::HashSet;

use quickcheck_macros::quickcheck;
use sheet_layout::{
    ApproximateFontMetrics, DisplayCommand, EncodingMode, FailureStage, FontWeight, GIT_COMMANDS,
    GitCommand,
    PageGeometry, Sheet, SheetConfig, SheetLayout, StandardEncoder, SymbolEncoder, SymbolError,
    row_count,
};
use sheet_symbols::{GrayImage, SymbolModules};

/// Wraps the real encoder and fails on chosen inputs, recording every call.
struct FaultyEncoder {
    inner: StandardEncoder,
    fail_encode: Vec<&'static str>,
    fail_scale: bool,
    encoded: RefCell<Vec<String>>,
}

impl FaultyEncoder {
    fn failing_encode(codes: &[&'static str]) -> Self {
        Self {
            inner: StandardEncoder::default(),
            fail_encode: codes.to_vec(),
            fail_scale: false,
            encoded: RefCell::new(Vec::new()),
        }
    }

    fn failing_scale() -> Self {
        Self {
            fail_scale: true,
            ..Self::failing_encode(&[])
        }
    }
}

impl SymbolEncoder for FaultyEncoder {
    fn encode(&self, text: &str, mode: EncodingMode) -> Result<SymbolModules, SymbolError> {
        self.encoded.borrow_mut().push(text.to_string());
        if self.fail_encode.iter().any(|code| *code == text) {
            return Err(SymbolError::Linear {
                reason: "injected".to_string(),
            });
        }
        self.inner.encode(text, mode)
    }

    fn scale(
        &self,
        symbol: &SymbolModules,
        width: u32,
        height: u32,
    ) -> Result<GrayImage, SymbolError> {
        if self.fail_scale {
            return Err(SymbolError::TooSmall {
                columns: symbol.columns(),
                rows: symbol.rows(),
                width,
                height,
            });
        }
        self.inner.scale(symbol, width, height)
    }
}

fn lay_out(commands: &[GitCommand], encoder: &dyn SymbolEncoder) -> Sheet {
    let config = SheetConfig::default();
    SheetLayout::new(&config, &ApproximateFontMetrics, encoder).lay_out(commands)
}

fn texts(sheet: &Sheet) -> Vec<&str> {
    sheet
        .display_list
        .commands()
        .iter()
        .filter_map(|command| match command {
            DisplayCommand::DrawText { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

/// The `(x, baseline, size, weight)` of the text command drawing `text`.
fn text_at(sheet: &Sheet, wanted: &str) -> (f32, f32, f32, FontWeight) {
    sheet
        .display_list
        .commands()
        .iter()
        .find_map(|command| match command {
            DisplayCommand::DrawText {
                x,
                y,
                text,
                font_size,
                font_weight,
                ..
            } if text == wanted => Some((*x, *y, *font_size, *font_weight)),
            _ => None,
        })
        .unwrap()
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn bitmap_count(sheet: &Sheet) -> usize {
    sheet
        .display_list
        .commands()
        .iter()
        .filter(|command| matches!(command, DisplayCommand::DrawBitmap { .. }))
        .count()
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

#[test]
fn test_forty_commands_make_ten_rows() {
    let sheet = lay_out(GIT_COMMANDS, &StandardEncoder::default());
    assert_eq!(sheet.geometry.columns, 4);
    assert_eq!(sheet.geometry.rows, 10);
    assert_eq!(sheet.cells.len(), 40);
}

#[quickcheck]
fn prop_row_count_is_ceiling(entries: u16, columns: u8) -> bool {
    let entries = usize::from(entries);
    let columns = usize::from(columns.max(1));
    let rows = row_count(entries, columns);
    rows * columns >= entries && (rows == 0 || (rows - 1) * columns < entries)
}

#[quickcheck]
fn prop_every_entry_gets_its_own_cell(entries: u8) -> bool {
    let entries = usize::from(entries);
    let geometry = PageGeometry::new(&SheetConfig::default(), entries);
    let mut seen = HashSet::new();
    (0..entries).all(|index| {
        let cell = geometry.cell(index);
        cell.col == index % 4
            && cell.row == index / 4
            && cell.row < geometry.rows
            && seen.insert((cell.col, cell.row))
    })
}

// ---------------------------------------------------------------------------
// Encoding selection
// ---------------------------------------------------------------------------

#[test]
fn test_mode_follows_code_length() {
    let sheet = lay_out(GIT_COMMANDS, &StandardEncoder::default());
    for (cell, command) in sheet.cells.iter().zip(GIT_COMMANDS) {
        let expected = if command.code.len() <= 26 {
            EncodingMode::Linear
        } else {
            EncodingMode::Matrix
        };
        assert_eq!(cell.mode, expected, "{}", command.code);
    }
}

#[test]
fn test_git_status_is_linear_with_description() {
    let sheet = lay_out(GIT_COMMANDS, &StandardEncoder::default());
    let cell = &sheet.cells[0];
    assert_eq!(GIT_COMMANDS[0].code, "git status");
    assert_eq!(cell.mode, EncodingMode::Linear);
    assert_eq!(cell.label, "git status");

    let texts = texts(&sheet);
    assert!(texts.contains(&"git status"));
    assert!(texts.contains(&"Show working tree status."));
}

#[test]
fn test_submodule_update_is_matrix() {
    let sheet = lay_out(GIT_COMMANDS, &StandardEncoder::default());
    let cell = sheet.cells.last().unwrap();
    assert_eq!(cell.mode, EncodingMode::Matrix);
    assert_eq!(cell.label, "submodules");
    let placed = cell.result.as_ref().unwrap();
    assert_eq!(placed.width, placed.height);
}

#[test]
fn test_empty_label_prints_code() {
    let commands = [GitCommand::new("git gc", "", "Collect garbage.")];
    let sheet = lay_out(&commands, &StandardEncoder::default());
    assert_eq!(sheet.cells[0].label, "git gc");
    assert!(texts(&sheet).contains(&"git gc"));
}

#[test]
fn test_long_description_wraps() {
    let commands = [GitCommand::new(
        "git status",
        "status",
        "A description long enough that it cannot possibly fit on a single line of a \
         cell that is only about six hundred pixels wide at this size.",
    )];
    let sheet = lay_out(&commands, &StandardEncoder::default());
    assert_eq!(sheet.cells[0].description_lines, 2);
    // title, label, two description lines, footer URL
    assert_eq!(texts(&sheet).len(), 5);
}

// ---------------------------------------------------------------------------
// Placement inside a cell
// ---------------------------------------------------------------------------

#[test]
fn test_linear_cell_text_placement() {
    let sheet = lay_out(GIT_COMMANDS, &StandardEncoder::default());
    let outcome = &sheet.cells[0];
    let cell = outcome.cell;
    let placed = outcome.result.as_ref().unwrap();

    // Symbol box 531x152, 6 px below the cell top.
    assert_eq!(placed.y, 66);
    assert_eq!(placed.height, 152);

    // Label: bold 13, centered, baseline 10 px below the symbol box.
    let (x, y, size, weight) = text_at(&sheet, "git status");
    assert!(close(y, 60.0 + 6.0 + 152.0 + 10.0));
    assert!(close(size, 13.0));
    assert_eq!(weight, FontWeight::Bold);
    let label_width = 10.0 * 13.0 * 0.66;
    assert!(close(x, cell.center_x() - label_width / 2.0));

    // Description: regular 10, first baseline 14 px plus one line (12 px)
    // below the label, centered in the padded box.
    let (x, y, size, weight) = text_at(&sheet, "Show working tree status.");
    assert!(close(y, 228.0 + 14.0 + 12.0));
    assert!(close(size, 10.0));
    assert_eq!(weight, FontWeight::Regular);
    let description_width = 25.0 * 10.0 * 0.6;
    assert!(close(x, cell.center_x() - description_width / 2.0));
    assert_eq!(outcome.description_lines, 1);
}

#[test]
fn test_matrix_cell_text_placement() {
    let commands = [GitCommand::new(
        "git submodule update --init --recursive",
        "submodules",
        "Init and update submodules.",
    )];
    let sheet = lay_out(&commands, &StandardEncoder::default());
    let outcome = &sheet.cells[0];
    let cell = outcome.cell;
    let placed = outcome.result.as_ref().unwrap();

    // One row: the cell is 590.25 x 3387, so the side is 75% of the width.
    assert_eq!(outcome.mode, EncodingMode::Matrix);
    assert_eq!((placed.width, placed.height), (442, 442));
    assert_eq!(placed.y, 60 + 8);

    let (x, y, _, weight) = text_at(&sheet, "submodules");
    assert!(close(y, 60.0 + 8.0 + 442.0 + 10.0));
    assert_eq!(weight, FontWeight::Bold);
    assert!(close(x, cell.center_x() - 10.0 * 13.0 * 0.66 / 2.0));

    let (_, y, _, _) = text_at(&sheet, "Init and update submodules.");
    assert!(close(y, 520.0 + 14.0 + 12.0));
}

#[test]
fn test_description_wraps_at_padded_cell_width() {
    // 96 characters at 6 px each: 576 px wide on one line.
    let description = format!("{} {}", "a".repeat(47), "b".repeat(48));
    let commands = [GitCommand::new(
        "git status",
        "",
        Box::leak(description.into_boxed_str()),
    )];

    let lines_with_margin = |margin: f32| {
        let config = SheetConfig {
            margin,
            ..SheetConfig::default()
        };
        let sheet = SheetLayout::new(&config, &ApproximateFontMetrics, &StandardEncoder::default())
            .lay_out(&commands);
        sheet.cells[0].description_lines
    };

    // Cell 592 px wide: the padded box is exactly 576 px.
    assert_eq!(lines_with_margin(56.5), 1);
    // Cell 591.5 px wide: the padded box is 575.5 px, which an unpadded
    // 15 px inset would still fit.
    assert_eq!(lines_with_margin(57.5), 2);
}

// ---------------------------------------------------------------------------
// Failure isolation
// ---------------------------------------------------------------------------

#[test]
fn test_encode_failure_skips_only_that_cell() {
    let encoder = FaultyEncoder::failing_encode(&["git status"]);
    let sheet = lay_out(GIT_COMMANDS, &encoder);

    let failed: Vec<_> = sheet.failed_cells().collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].index, 0);
    let failure = failed[0].result.as_ref().unwrap_err();
    assert_eq!(failure.stage, FailureStage::Encode);

    assert_eq!(sheet.rendered_count(), 39);
    assert_eq!(failed[0].description_lines, 0);
    // 39 cells + footer
    assert_eq!(bitmap_count(&sheet), 40);
    assert!(!texts(&sheet).contains(&"Show working tree status."));
    assert!(texts(&sheet).contains(&"Short, branch-aware status."));
}

#[test]
fn test_failed_cell_keeps_its_border() {
    let encoder = FaultyEncoder::failing_encode(&["git status"]);
    let sheet = lay_out(GIT_COMMANDS, &encoder);
    let borders = sheet
        .display_list
        .commands()
        .iter()
        .filter(|command| matches!(command, DisplayCommand::StrokeRect { .. }))
        .count();
    assert_eq!(borders, 40);
}

#[test]
fn test_scale_failure_is_reported_as_scale_stage() {
    let encoder = FaultyEncoder::failing_scale();
    let sheet = lay_out(GIT_COMMANDS, &encoder);
    assert_eq!(sheet.rendered_count(), 0);
    assert!(
        sheet
            .failed_cells()
            .all(|cell| cell.result.as_ref().unwrap_err().stage == FailureStage::Scale)
    );
}

#[test]
fn test_footer_attempted_when_every_cell_fails() {
    let codes: Vec<&'static str> = GIT_COMMANDS.iter().map(|c| c.code).collect();
    let encoder = FaultyEncoder::failing_encode(&codes);
    let sheet = lay_out(GIT_COMMANDS, &encoder);

    assert_eq!(sheet.rendered_count(), 0);
    assert!(sheet.footer.result.is_ok());
    assert_eq!(
        encoder.encoded.borrow().last().map(String::as_str),
        Some("https://github.com/arran4/git-barcode-sheet")
    );
    assert!(texts(&sheet).contains(&"https://github.com/arran4/git-barcode-sheet"));
}

#[test]
fn test_footer_failure_omits_footer_only() {
    let encoder = FaultyEncoder::failing_encode(&["https://github.com/arran4/git-barcode-sheet"]);
    let sheet = lay_out(GIT_COMMANDS, &encoder);
    assert_eq!(sheet.rendered_count(), 40);
    assert!(sheet.footer.result.is_err());
    assert!(!texts(&sheet).contains(&"https://github.com/arran4/git-barcode-sheet"));
}

// ---------------------------------------------------------------------------
// Painting order
// ---------------------------------------------------------------------------

#[test]
fn test_background_then_title_first() {
    let sheet = lay_out(GIT_COMMANDS, &StandardEncoder::default());
    let commands = sheet.display_list.commands();
    assert!(matches!(commands[0], DisplayCommand::FillRect { .. }));
    match &commands[1] {
        DisplayCommand::DrawText { text, .. } => {
            assert_eq!(text, "Git Barcode Sheet \u{2013} One Scan = One Command");
        }
        other => panic!("expected title, got {other:?}"),
    }
}
