use log::debug;

use crate::config::ScrollConfig;

/// A block the activator watches. The DOM implementation wraps an element;
/// tests use plain structs.
pub trait RevealTarget {
    /// Distance from the viewport's top edge to the block's top edge.
    /// `None` when the block can't be measured (e.g. detached).
    fn top(&self) -> Option<f64>;

    /// Called exactly once, when the block first enters the reveal window.
    fn reveal(&self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    NotYetRevealed,
    Revealed,
}

struct Block<T> {
    target: T,
    state: RevealState,
}

/// Result of one `on_scroll` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollUpdate {
    pub newly_revealed: usize,
    pub scroll_top_visible: bool,
    pub visibility_changed: bool,
}

pub fn is_past_threshold(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Turns scroll offsets into reveal flags (one-way) and scroll-to-top
/// visibility (two-way).
pub struct ScrollActivator<T> {
    config: ScrollConfig,
    blocks: Vec<Block<T>>,
    scroll_top_visible: bool,
}

impl<T: RevealTarget> ScrollActivator<T> {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            blocks: Vec::new(),
            scroll_top_visible: false,
        }
    }

    /// Starts watching `target`; returns its index in registration order.
    pub fn register(&mut self, target: T) -> usize {
        self.blocks.push(Block {
            target,
            state: RevealState::NotYetRevealed,
        });
        self.blocks.len() - 1
    }

    #[cfg(test)]
    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.blocks.get(index).map(|block| block.state)
    }

    pub fn pending(&self) -> usize {
        self.blocks
            .iter()
            .filter(|block| block.state == RevealState::NotYetRevealed)
            .count()
    }

    /// Reveals every pending block whose top edge sits at or above the
    /// reveal line. Revealed blocks are never looked at again.
    pub fn reveal_check(&mut self, viewport_height: f64) -> usize {
        let line = viewport_height * self.config.reveal_ratio;
        let mut revealed = 0;

        for block in self
            .blocks
            .iter_mut()
            .filter(|block| block.state == RevealState::NotYetRevealed)
        {
            if matches!(block.target.top(), Some(top) if top <= line) {
                block.state = RevealState::Revealed;
                block.target.reveal();
                revealed += 1;
            }
        }

        if revealed > 0 {
            debug!("Revealed {} block(s), {} pending", revealed, self.pending());
        }
        revealed
    }

    pub fn update_visibility(&mut self, offset: f64) -> bool {
        let visible = is_past_threshold(offset, self.config.top_threshold);
        let changed = visible != self.scroll_top_visible;
        self.scroll_top_visible = visible;
        changed
    }

    pub fn on_scroll(&mut self, offset: f64, viewport_height: f64) -> ScrollUpdate {
        let newly_revealed = self.reveal_check(viewport_height);
        let visibility_changed = self.update_visibility(offset);
        ScrollUpdate {
            newly_revealed,
            scroll_top_visible: self.scroll_top_visible,
            visibility_changed,
        }
    }
}
