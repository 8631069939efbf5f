use eframe::egui;
use egui_phosphor::regular as icons;
use library::model::time::format_duration;
use library::timeline::MarkPosition;
use library::{Frame, Output};

/// Details of the current frame plus the bookmark and mark lists.
/// Returns the frame of a bookmark or mark the user clicked.
pub fn show_preview(
    ui: &mut egui::Ui,
    output: Option<&Output>,
    frame: Frame,
    status: Option<&str>,
) -> Option<Frame> {
    let mut jump = None;

    if let Some(message) = status {
        ui.colored_label(ui.visuals().error_fg_color, message);
        ui.separator();
    }

    let Some(output) = output else {
        ui.centered_and_justified(|ui| ui.label("The script has no outputs."));
        return None;
    };

    egui::Grid::new("frame_info").num_columns(2).show(ui, |ui| {
        ui.label("Output");
        ui.label(format!("{}: {}", output.index, output.name));
        ui.end_row();
        ui.label("Frame rate");
        ui.label(output.fps.to_string());
        ui.end_row();
        ui.label("Frame");
        ui.label(format!("{} / {}", frame, output.last_frame()));
        ui.end_row();
        ui.label("Time");
        ui.label(format!(
            "{} / {}",
            format_duration(output.frame_to_time(frame), "%h:%M:%S.%Z"),
            format_duration(output.total_time(), "%h:%M:%S.%Z")
        ));
        ui.end_row();
    });

    ui.separator();
    ui.heading(format!("{} Bookmarks", icons::BOOKMARK_SIMPLE));
    if output.bookmarks.is_empty() {
        ui.weak("None");
    }
    for bookmark in &output.bookmarks {
        let text = if bookmark.label.is_empty() {
            bookmark.frame.to_string()
        } else {
            format!("{}  {}", bookmark.frame, bookmark.label)
        };
        if ui.selectable_label(bookmark.frame == frame, text).clicked() {
            jump = Some(bookmark.frame);
        }
    }

    if !output.marks.is_empty() {
        ui.separator();
        ui.heading("Marks");
        for mark in &output.marks {
            let target = match mark.position() {
                MarkPosition::Frame(f) => f,
                MarkPosition::Time(t) => output.time_to_frame(t),
            };
            let text = format!("{}  {}", target, mark.label);
            if ui.selectable_label(target == frame, text).clicked() {
                jump = Some(target);
            }
        }
    }

    jump
}
