use std::sync::Arc;

use winit::window::Window as WinitWindow;

use crate::scheduler::{FrameScheduler, FrameToken};

/// Frame scheduler backed by a winit window's redraw requests.
///
/// `schedule` maps to `request_redraw`. The OS never un-requests a redraw,
/// so `cancel` only drops our token; the eventual `RedrawRequested` delivery
/// then fails `complete` and the frame callback body is skipped.
pub struct RedrawScheduler {
    window: Arc<WinitWindow>,
    next_id: u64,
    live: Vec<FrameToken>,
}

impl RedrawScheduler {
    pub fn new(window: Arc<WinitWindow>) -> Self {
        Self {
            window,
            next_id: 0,
            live: Vec::new(),
        }
    }
}

impl FrameScheduler for RedrawScheduler {
    fn schedule(&mut self) -> FrameToken {
        self.window.request_redraw();
        let token = FrameToken(self.next_id);
        self.next_id += 1;
        self.live.push(token);
        token
    }

    fn cancel(&mut self, token: FrameToken) {
        self.live.retain(|t| *t != token);
    }

    fn complete(&mut self, token: FrameToken) -> bool {
        let before = self.live.len();
        self.live.retain(|t| *t != token);
        before != self.live.len()
    }

    fn pending(&self) -> usize {
        self.live.len()
    }
}
