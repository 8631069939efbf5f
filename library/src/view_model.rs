//! View-model of the main window.

use log::{debug, info};

use crate::error::{LibraryError, Result};
use crate::model::{Frame, Output};
use crate::observer::Property;

/// Outputs of the loaded script plus the observable selection state.
///
/// Updates are delivered in a fixed order: `current_output`, then
/// `last_frame`, then `current_frame`.
#[derive(Debug)]
pub struct MainViewModel {
    outputs: Vec<Output>,
    pub current_output: Property<Option<usize>>,
    pub current_frame: Property<Frame>,
    pub last_frame: Property<Frame>,
}

impl MainViewModel {
    pub fn new() -> Self {
        Self {
            outputs: Vec::new(),
            current_output: Property::new(None),
            current_frame: Property::new(Frame::ZERO),
            last_frame: Property::new(Frame::ZERO),
        }
    }

    pub fn outputs(&self) -> &[Output] {
        &self.outputs
    }

    pub fn current(&self) -> Option<&Output> {
        (*self.current_output.get()).and_then(|i| self.outputs.get(i))
    }

    pub fn current_mut(&mut self) -> Option<&mut Output> {
        let index = (*self.current_output.get())?;
        self.outputs.get_mut(index)
    }

    /// Replaces all outputs and selects the first one.
    pub fn load_outputs(&mut self, outputs: Vec<Output>) {
        info!("Loaded {} output(s)", outputs.len());
        self.outputs = outputs;
        let selection = if self.outputs.is_empty() { None } else { Some(0) };
        if !self.current_output.set(selection) {
            // Same index, different output.
            self.current_output.notify();
        }
        self.sync_from_output();
    }

    pub fn switch_output(&mut self, index: usize) -> Result<()> {
        if index >= self.outputs.len() {
            return Err(LibraryError::InvalidArgument(format!(
                "output index {} out of range ({} outputs)",
                index,
                self.outputs.len()
            )));
        }
        self.select(index);
        Ok(())
    }

    fn select(&mut self, index: usize) {
        debug!("Switching to output {}", index);
        self.current_output.set(Some(index));
        self.sync_from_output();
    }

    fn sync_from_output(&mut self) {
        let (last, current) = match self.current() {
            Some(output) => (output.last_frame(), output.current_frame),
            None => (Frame::ZERO, Frame::ZERO),
        };
        self.last_frame.set(last);
        self.current_frame.set(current);
    }

    /// Moves the current output to `frame`, clamped to its last frame.
    /// Does nothing without an output.
    pub fn switch_frame(&mut self, frame: Frame) {
        let Some(output) = self.current_mut() else {
            return;
        };
        let frame = frame.min(output.last_frame());
        output.current_frame = frame;
        self.current_frame.set(frame);
    }

    /// Adds a bookmark on the current frame, or removes the one already there.
    /// Returns `true` when a bookmark was added.
    pub fn toggle_bookmark(&mut self, label: &str) -> Result<bool> {
        let Some(output) = self.current_mut() else {
            return Err(LibraryError::Output("no output selected".to_string()));
        };
        let frame = output.current_frame;
        if output.remove_bookmark(frame).is_some() {
            return Ok(false);
        }
        output.add_bookmark(frame, label)?;
        Ok(true)
    }
}

impl Default for MainViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FrameRate;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn output(index: usize, frames: u64) -> Output {
        Output::new(index, format!("out{index}"), FrameRate::new(25, 1).unwrap(), frames)
    }

    #[test]
    fn load_selects_first_output() {
        let mut vm = MainViewModel::new();
        vm.load_outputs(vec![output(0, 100), output(1, 50)]);

        assert_eq!(*vm.current_output.get(), Some(0));
        assert_eq!(*vm.last_frame.get(), Frame(99));
        assert_eq!(*vm.current_frame.get(), Frame::ZERO);
    }

    #[test]
    fn load_empty_resets_frames() {
        let mut vm = MainViewModel::new();
        vm.load_outputs(vec![output(0, 100)]);
        vm.switch_frame(Frame(10));
        vm.load_outputs(Vec::new());

        assert_eq!(*vm.current_output.get(), None);
        assert_eq!(*vm.last_frame.get(), Frame::ZERO);
        assert_eq!(*vm.current_frame.get(), Frame::ZERO);
    }

    #[test]
    fn switch_frame_clamps_and_is_remembered_per_output() {
        let mut vm = MainViewModel::new();
        vm.load_outputs(vec![output(0, 100), output(1, 50)]);

        vm.switch_frame(Frame(500));
        assert_eq!(*vm.current_frame.get(), Frame(99));

        vm.switch_output(1).unwrap();
        assert_eq!(*vm.current_frame.get(), Frame::ZERO);
        assert_eq!(*vm.last_frame.get(), Frame(49));

        vm.switch_output(0).unwrap();
        assert_eq!(*vm.current_frame.get(), Frame(99));
    }

    #[test]
    fn switch_output_out_of_range() {
        let mut vm = MainViewModel::new();
        vm.load_outputs(vec![output(0, 10)]);
        assert!(matches!(
            vm.switch_output(3),
            Err(LibraryError::InvalidArgument(_))
        ));
    }

    #[test]
    fn switch_frame_without_output_is_noop() {
        let mut vm = MainViewModel::new();
        vm.switch_frame(Frame(5));
        assert_eq!(*vm.current_frame.get(), Frame::ZERO);
    }

    #[test]
    fn notifications_follow_update_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut vm = MainViewModel::new();

        let l = Rc::clone(&log);
        vm.current_output.subscribe(move |_| l.borrow_mut().push("output"));
        let l = Rc::clone(&log);
        vm.last_frame.subscribe(move |_| l.borrow_mut().push("last"));
        let l = Rc::clone(&log);
        vm.current_frame.subscribe(move |_| l.borrow_mut().push("current"));

        let mut first = output(0, 100);
        first.current_frame = Frame(7);
        vm.load_outputs(vec![first]);

        assert_eq!(*log.borrow(), vec!["output", "last", "current"]);
    }

    #[test]
    fn toggle_bookmark_adds_then_removes() {
        let mut vm = MainViewModel::new();
        vm.load_outputs(vec![output(0, 100)]);
        vm.switch_frame(Frame(12));

        assert!(vm.toggle_bookmark("cut").unwrap());
        assert_eq!(vm.current().unwrap().bookmarks.len(), 1);
        assert!(!vm.toggle_bookmark("cut").unwrap());
        assert!(vm.current().unwrap().bookmarks.is_empty());
    }
}
