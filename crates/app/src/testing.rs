//! In-memory host used by unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use sensorboard_domain::view::ViewId;

use crate::ports::{Host, RenderRoot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    Rendered(ViewId),
    Cleared,
}

#[derive(Debug, Default)]
pub struct RecordingHost {
    containers: Vec<String>,
    frames: Rc<RefCell<Vec<Frame>>>,
}

impl RecordingHost {
    pub fn with_container(id: &str) -> Self {
        Self {
            containers: vec![id.to_string()],
            frames: Rc::default(),
        }
    }

    pub fn frames(&self) -> Vec<Frame> {
        self.frames.borrow().clone()
    }
}

impl Host for RecordingHost {
    type Root = RecordingRoot;

    fn attach(&self, container_id: &str) -> Option<Self::Root> {
        self.containers
            .iter()
            .any(|id| id == container_id)
            .then(|| RecordingRoot {
                frames: Rc::clone(&self.frames),
            })
    }
}

#[derive(Debug)]
pub struct RecordingRoot {
    frames: Rc<RefCell<Vec<Frame>>>,
}

impl RenderRoot for RecordingRoot {
    fn render(&mut self, view: ViewId) {
        self.frames.borrow_mut().push(Frame::Rendered(view));
    }

    fn clear(&mut self) {
        self.frames.borrow_mut().push(Frame::Cleared);
    }
}
