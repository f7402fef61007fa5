//! Render commands and the render-target seam.
//!
//! The compositor never talks to a graphics API. Windows and controls emit
//! [`RenderCommand`]s into a [`RenderTarget`]; the backend behind the target
//! turns them into draw calls.

use crate::geometry::Rect;
use crate::style::Color;

/// A render command for the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Filled rectangle.
    Rect {
        /// Bounds.
        bounds: Rect,
        /// Fill color.
        color: Color,
    },
    /// Rectangle outline.
    RectOutline {
        /// Bounds.
        bounds: Rect,
        /// Stroke color.
        color: Color,
        /// Line width.
        width: f32,
    },
    /// Text.
    Text {
        /// Text content.
        text: String,
        /// X position.
        x: f32,
        /// Y position.
        y: f32,
        /// Text color.
        color: Color,
        /// Font size.
        font_size: f32,
    },
    /// Scissor rect (clip children).
    PushClip {
        /// Clip bounds.
        bounds: Rect,
    },
    /// Pop scissor rect.
    PopClip,
}

/// Destination for paint commands.
///
/// Implemented by the graphics backend. The compositor only needs the
/// target's bounds (for the lock overlay) and a way to submit commands.
pub trait RenderTarget {
    /// Returns the drawable area of the target.
    fn bounds(&self) -> Rect;

    /// Submits one paint command.
    fn submit(&mut self, command: RenderCommand);
}

/// Command-recording render target.
///
/// Collects every command submitted during a frame. Backends drain
/// [`UIRenderer::end_frame`] and replay the commands against the GPU.
pub struct UIRenderer {
    /// Target size.
    viewport: Rect,
    /// All commands from the frame.
    commands: Vec<RenderCommand>,
    /// Clip stack.
    clip_stack: Vec<Rect>,
}

impl UIRenderer {
    /// Creates a renderer for a target of the given size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Rect::from_size(width, height),
            commands: Vec::with_capacity(1024),
            clip_stack: Vec::with_capacity(16),
        }
    }

    /// Resizes the target.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Rect::from_size(width, height);
    }

    /// Begins a new frame.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
        self.clip_stack.clear();
    }

    /// Pushes a clip rect, intersected with the current one.
    ///
    /// Disjoint clips collapse to [`Rect::ZERO`].
    pub fn push_clip(&mut self, bounds: Rect) {
        let actual_clip = if let Some(current) = self.clip_stack.last() {
            current.intersection(&bounds).unwrap_or(Rect::ZERO)
        } else {
            bounds
        };

        self.clip_stack.push(actual_clip);
        self.commands.push(RenderCommand::PushClip { bounds: actual_clip });
    }

    /// Pops the current clip rect.
    pub fn pop_clip(&mut self) {
        self.clip_stack.pop();
        self.commands.push(RenderCommand::PopClip);
    }

    /// Returns the current clip rect.
    #[must_use]
    pub fn current_clip(&self) -> Option<Rect> {
        self.clip_stack.last().copied()
    }

    /// Returns the commands recorded so far this frame.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Ends the frame and hands the recorded commands to the caller.
    pub fn end_frame(&mut self) -> Vec<RenderCommand> {
        self.clip_stack.clear();
        std::mem::take(&mut self.commands)
    }

    /// Returns the total command count.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }
}

impl RenderTarget for UIRenderer {
    fn bounds(&self) -> Rect {
        self.viewport
    }

    fn submit(&mut self, command: RenderCommand) {
        match command {
            RenderCommand::PushClip { bounds } => self.push_clip(bounds),
            RenderCommand::PopClip => self.pop_clip(),
            other => self.commands.push(other),
        }
    }
}
