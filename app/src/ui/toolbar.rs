use eframe::egui::{self, Button};
use egui_phosphor::regular as icons;
use library::{Frame, MainViewModel};

/// Requests collected while drawing the toolbar, applied after the frame is laid out.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolbarAction {
    SwitchOutput(usize),
    SwitchFrame(Frame),
    StepFrames(i64),
    ToggleBookmark,
    LoadScript,
    Reload,
}

pub fn show_toolbar(
    ui: &mut egui::Ui,
    view_model: &MainViewModel,
    bookmark_label: &mut String,
) -> Vec<ToolbarAction> {
    let mut actions = Vec::new();
    let has_output = view_model.current().is_some();

    ui.horizontal(|ui| {
        let current = *view_model.current_output.get();
        let selected_text = view_model
            .current()
            .map(|o| o.name.clone())
            .unwrap_or_else(|| "No outputs".to_string());
        egui::ComboBox::from_id_salt("outputs")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for (index, output) in view_model.outputs().iter().enumerate() {
                    let selected = current == Some(index);
                    if ui.selectable_label(selected, output.name.as_str()).clicked() && !selected {
                        actions.push(ToolbarAction::SwitchOutput(index));
                    }
                }
            });

        ui.separator();

        if ui
            .add_enabled(has_output, Button::new(icons::CARET_LEFT))
            .clicked()
        {
            actions.push(ToolbarAction::StepFrames(-1));
        }
        let last = view_model.last_frame.get().0;
        let mut frame = view_model.current_frame.get().0;
        let response = ui.add_enabled(
            has_output,
            egui::DragValue::new(&mut frame).range(0..=last).speed(1.0),
        );
        if response.changed() {
            actions.push(ToolbarAction::SwitchFrame(Frame(frame)));
        }
        if ui
            .add_enabled(has_output, Button::new(icons::CARET_RIGHT))
            .clicked()
        {
            actions.push(ToolbarAction::StepFrames(1));
        }
        ui.label(format!("/ {}", last));

        ui.separator();

        ui.add(
            egui::TextEdit::singleline(bookmark_label)
                .hint_text("Bookmark label")
                .desired_width(120.0),
        );
        let bookmarked = view_model
            .current()
            .and_then(|o| o.bookmark_at(o.current_frame))
            .is_some();
        let text = if bookmarked {
            format!("{} Remove bookmark", icons::BOOKMARK_SIMPLE)
        } else {
            format!("{} Add bookmark", icons::BOOKMARK_SIMPLE)
        };
        if ui.add_enabled(has_output, Button::new(text)).clicked() {
            actions.push(ToolbarAction::ToggleBookmark);
        }

        ui.separator();

        if ui
            .button(format!("{} Load Script", icons::FOLDER_OPEN))
            .clicked()
        {
            actions.push(ToolbarAction::LoadScript);
        }
        if ui
            .button(format!("{} Reload", icons::ARROW_CLOCKWISE))
            .clicked()
        {
            actions.push(ToolbarAction::Reload);
        }
    });

    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui_kittest::kittest::Queryable;
    use egui_kittest::Harness;
    use library::{FrameRate, Output};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn view_model() -> MainViewModel {
        let mut vm = MainViewModel::new();
        let fps = FrameRate::new(25, 1).unwrap();
        vm.load_outputs(vec![Output::new(0, "source", fps, 100), Output::new(1, "filtered", fps, 100)]);
        vm
    }

    #[test]
    fn shows_frame_range_and_buttons() {
        let vm = view_model();
        let harness = Harness::builder()
            .with_size(egui::vec2(900.0, 60.0))
            .build_ui(move |ui| {
                let mut label = String::new();
                show_toolbar(ui, &vm, &mut label);
            });
        assert!(harness
            .query_by_label(&format!("{} Add bookmark", icons::BOOKMARK_SIMPLE))
            .is_some());
        assert!(harness.query_by_label("/ 99").is_some());
    }

    #[test]
    fn button_clicks_become_actions() {
        let actions = Rc::new(RefCell::new(Vec::new()));
        let a = actions.clone();
        let vm = view_model();

        let mut harness = Harness::builder()
            .with_size(egui::vec2(900.0, 60.0))
            .build_ui(move |ui| {
                let mut label = String::new();
                a.borrow_mut().extend(show_toolbar(ui, &vm, &mut label));
            });

        harness
            .get_by_label(&format!("{} Reload", icons::ARROW_CLOCKWISE))
            .click();
        harness.run();
        harness
            .get_by_label(&format!("{} Add bookmark", icons::BOOKMARK_SIMPLE))
            .click();
        harness.run();

        let actions = actions.borrow();
        assert!(actions.contains(&ToolbarAction::Reload));
        assert!(actions.contains(&ToolbarAction::ToggleBookmark));
    }
}
